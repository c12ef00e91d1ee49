use crate::bbox::BoundingBox;
use crate::error::{Result, SearchError};
use crate::geometry::Point;
use crate::route::RouteType;
use crate::DEFAULT_STEP;

/// Everything a search needs. Areas are fixed for the lifetime of the search built from it.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct SearchOptions {
    pub start: Point,
    pub end: Point,
    /// Distance covered by one straight move.
    pub step: f64,
    pub route_type: RouteType,
    /// Regions no waypoint may fall into.
    pub block_area: Vec<BoundingBox>,
    /// Region every generated waypoint must fall into.
    pub boundary_area: Option<BoundingBox>,
    /// Gives up after this many node expansions.
    pub max_expansions: Option<usize>,
    /// Only snap to the goal when the final segment clears every block area.
    pub validate_final_leg: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            start: Point::ORIGIN,
            end: Point::ORIGIN,
            step: DEFAULT_STEP,
            route_type: RouteType::All,
            block_area: Vec::new(),
            boundary_area: None,
            max_expansions: None,
            validate_final_leg: false,
        }
    }
}

impl SearchOptions {
    pub fn new(start: Point, end: Point) -> Self {
        Self {
            start,
            end,
            ..Default::default()
        }
    }

    pub fn with_step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    pub fn with_route_type(mut self, route_type: RouteType) -> Self {
        self.route_type = route_type;
        self
    }

    pub fn with_block_area(mut self, block_area: Vec<BoundingBox>) -> Self {
        self.block_area = block_area;
        self
    }

    /// Appends a single block area.
    pub fn with_block(mut self, bbox: BoundingBox) -> Self {
        self.block_area.push(bbox);
        self
    }

    pub fn with_boundary_area(mut self, boundary_area: BoundingBox) -> Self {
        self.boundary_area = Some(boundary_area);
        self
    }

    pub fn with_max_expansions(mut self, max_expansions: usize) -> Self {
        self.max_expansions = Some(max_expansions);
        self
    }

    pub fn with_validate_final_leg(mut self, validate: bool) -> Self {
        self.validate_final_leg = validate;
        self
    }

    /// Rejects input the search cannot run on: a step that is not a positive finite number,
    /// non-finite endpoints, or areas with non-finite or inverted bounds.
    pub fn validate(&self) -> Result<()> {
        if !(self.step.is_finite() && self.step > 0.0) {
            return Err(SearchError::InvalidStep(self.step));
        }
        for (role, p) in [("start", &self.start), ("end", &self.end)] {
            if !p.is_finite() {
                return Err(SearchError::NonFinitePoint {
                    role,
                    x: p.x,
                    y: p.y,
                });
            }
        }
        if let Some(index) = self.block_area.iter().position(|b| !b.is_well_formed()) {
            return Err(SearchError::InvalidArea {
                role: "block",
                index,
            });
        }
        if matches!(self.boundary_area, Some(b) if !b.is_well_formed()) {
            return Err(SearchError::InvalidArea {
                role: "boundary",
                index: 0,
            });
        }
        Ok(())
    }
}
