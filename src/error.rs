//! Error types for step_pathfinding

use thiserror::Error;

/// Rejected search input. A start or goal inside a block area is not an error; the search is
/// created in the blocked state instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SearchError {
    #[error("Step must be a positive finite number, got {0}")]
    InvalidStep(f64),

    #[error("The {role} point ({x}, {y}) is not finite")]
    NonFinitePoint { role: &'static str, x: f64, y: f64 },

    #[error("The {role} area at index {index} has non-finite or inverted bounds")]
    InvalidArea { role: &'static str, index: usize },

    #[error("Unknown route type {0:?}, expected one of all, diagonal, orthometric")]
    UnknownRouteType(String),
}

pub type Result<T> = std::result::Result<T, SearchError>;
