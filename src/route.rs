use core::fmt;
use smallvec::SmallVec;
use std::str::FromStr;

use crate::bbox::BoundingBoxBuilder;
use crate::error::SearchError;
use crate::geometry::Point;
use crate::N_SMALLVEC_SIZE;

/// Which moves are generated around a node.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum RouteType {
    /// Straight and diagonal moves, like an 8-connected grid.
    #[default]
    All,
    /// Only the four corners of the neighbourhood square.
    Diagonal,
    /// Only the four axis-aligned moves.
    Orthometric,
}

impl RouteType {
    /// Candidate positions around `center`, taken from the square of half-width `step` centered
    /// on it. Straight moves come first, then diagonals, each in a fixed order so that searches
    /// are reproducible.
    pub fn neighbourhood(&self, center: &Point, step: f64) -> SmallVec<[Point; N_SMALLVEC_SIZE]> {
        let mut points = SmallVec::new();
        let Some(square) = BoundingBoxBuilder::new()
            .extend_point(center)
            .expand(step)
            .build()
        else {
            return points;
        };
        if matches!(self, RouteType::All | RouteType::Orthometric) {
            points.extend([
                Point::new(square.min_x, center.y),
                Point::new(center.x, square.min_y),
                Point::new(square.max_x, center.y),
                Point::new(center.x, square.max_y),
            ]);
        }
        if matches!(self, RouteType::All | RouteType::Diagonal) {
            points.extend([
                Point::new(square.min_x, square.min_y),
                Point::new(square.min_x, square.max_y),
                Point::new(square.max_x, square.max_y),
                Point::new(square.max_x, square.min_y),
            ]);
        }
        points
    }
}

impl FromStr for RouteType {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<RouteType, SearchError> {
        match s {
            "all" => Ok(RouteType::All),
            "diagonal" => Ok(RouteType::Diagonal),
            "orthometric" => Ok(RouteType::Orthometric),
            other => Err(SearchError::UnknownRouteType(other.to_owned())),
        }
    }
}

impl fmt::Display for RouteType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            RouteType::All => "all",
            RouteType::Diagonal => "diagonal",
            RouteType::Orthometric => "orthometric",
        };
        write!(f, "{name}")
    }
}
