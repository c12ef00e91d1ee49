//! Plain 2D value types consumed by the search: [Point] and the coordinate-derived [NodeKey].
use core::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use crate::bbox::BoundingBox;

/// Converts an angle in radians to degrees.
pub fn to_degrees(radians: f64) -> f64 {
    radians * 180.0 / std::f64::consts::PI
}

/// Converts an angle in degrees to radians.
pub fn to_radians(degrees: f64) -> f64 {
    degrees / 180.0 * std::f64::consts::PI
}

/// A position on the continuous plane.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Point {
        Point { x, y }
    }
    pub fn dot(&self, other: &Point) -> f64 {
        self.x * other.x + self.y * other.y
    }
    /// Length of the vector from the origin to this point.
    pub fn length(&self) -> f64 {
        self.x.hypot(self.y)
    }
    pub fn sin(&self) -> f64 {
        self.y / self.length()
    }
    pub fn cos(&self) -> f64 {
        self.x / self.length()
    }
    /// Scales each axis independently. Use `*` for a uniform scale.
    pub fn scale(&self, sx: f64, sy: f64) -> Point {
        Point::new(self.x * sx, self.y * sy)
    }
    pub fn distance(&self, other: &Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
    pub fn distance_squared(&self, other: &Point) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        dx * dx + dy * dy
    }
    pub fn manhattan_distance(&self, other: &Point) -> f64 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }
    /// Angle in radians of the direction from `reference` to this point.
    pub fn angle(&self, reference: &Point) -> f64 {
        (self.y - reference.y).atan2(self.x - reference.x)
    }
    pub fn angle_degrees(&self, reference: &Point) -> f64 {
        to_degrees(self.angle(reference))
    }
    /// Rotates this point counter-clockwise around `reference` by `radians`.
    pub fn rotate(&self, reference: &Point, radians: f64) -> Point {
        let (sin, cos) = radians.sin_cos();
        let d = *self - *reference;
        *reference + Point::new(d.x * cos - d.y * sin, d.x * sin + d.y * cos)
    }
    pub fn rotate_degrees(&self, reference: &Point, degrees: f64) -> Point {
        self.rotate(reference, to_radians(degrees))
    }
    /// The degenerate box spanning only this point.
    pub fn bbox(&self) -> BoundingBox {
        BoundingBox::new(self.x, self.x, self.y, self.y)
    }
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
    pub fn key(&self) -> NodeKey {
        NodeKey::new(self)
    }
}

impl Add for Point {
    type Output = Point;
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;
    fn mul(self, rhs: f64) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

impl Neg for Point {
    type Output = Point;
    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Point {
        Point::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Identity of a position, built from the raw bits of both coordinates. Two points share a key
/// exactly when their coordinates are bitwise equal, with `-0.0` folded onto `0.0`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeKey(u64, u64);

impl NodeKey {
    pub fn new(point: &Point) -> NodeKey {
        NodeKey(canonical_bits(point.x), canonical_bits(point.y))
    }
}

fn canonical_bits(v: f64) -> u64 {
    if v == 0.0 {
        0.0f64.to_bits()
    } else {
        v.to_bits()
    }
}
