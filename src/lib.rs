//! # step_pathfinding
//!
//! Point-to-point [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) pathfinding on the
//! continuous plane. Instead of searching a pre-built grid, neighbours are generated around each
//! expanded node at a fixed step, using straight moves, diagonal moves or both. Obstacles are
//! axis-aligned block areas, and an optional boundary area keeps the search finite.
//!
//! ```
//! use step_pathfinding::{find_path, BoundingBox, Point, SearchOptions};
//!
//! let options = SearchOptions::new(Point::new(0.0, 0.0), Point::new(100.0, 0.0))
//!     .with_block(BoundingBox::new(45.0, 55.0, -25.0, 25.0))
//!     .with_boundary_area(BoundingBox::new(-50.0, 150.0, -100.0, 100.0));
//! let path = find_path(options).unwrap();
//! assert_eq!(path.first(), Some(&Point::new(0.0, 0.0)));
//! assert_eq!(path.last(), Some(&Point::new(100.0, 0.0)));
//! ```
pub mod astar;
pub mod bbox;
pub mod context;
pub mod error;
pub mod geometry;
pub mod heap;
pub mod node;
pub mod options;
pub mod route;

pub use astar::{AStar, SearchState};
pub use bbox::{BoundingBox, BoundingBoxBuilder};
pub use context::SearchStats;
pub use error::{Result, SearchError};
pub use geometry::{to_degrees, to_radians, NodeKey, Point};
pub use node::{path_cost, path_length};
pub use options::SearchOptions;
pub use route::RouteType;

/// Cost of a straight move.
pub const C: f64 = 10.0;
/// Cost of a diagonal move, [C] times sqrt(2) rounded to an integer.
pub const D: f64 = 14.0;
/// Step used when [SearchOptions] does not set one.
pub const DEFAULT_STEP: f64 = 10.0;
/// Largest neighbourhood any [RouteType] generates.
pub const N_SMALLVEC_SIZE: usize = 8;

/// Builds an [AStar] from `options` and runs it once. An empty path means the endpoints are
/// blocked or no path exists; see [AStar::state] to tell the two apart.
pub fn find_path(options: SearchOptions) -> Result<Vec<Point>> {
    let mut astar = AStar::new(options)?;
    Ok(astar.search())
}
