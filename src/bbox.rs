//! Axis-aligned bounding boxes, used both for obstacle/boundary regions and for laying out the
//! neighbourhood square around a search node.
use crate::geometry::Point;

/// Axis-aligned rectangle with inclusive bounds.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingBox {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl BoundingBox {
    pub const fn new(min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> BoundingBox {
        BoundingBox {
            min_x,
            max_x,
            min_y,
            max_y,
        }
    }
    pub fn contains_x(&self, x: f64) -> bool {
        x >= self.min_x && x <= self.max_x
    }
    pub fn contains_y(&self, y: f64) -> bool {
        y >= self.min_y && y <= self.max_y
    }
    /// Points on the edge count as contained.
    pub fn contains(&self, point: &Point) -> bool {
        self.contains_x(point.x) && self.contains_y(point.y)
    }
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
    pub fn center(&self) -> Point {
        Point::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }
    /// Finite bounds with `min <= max` on both axes.
    pub fn is_well_formed(&self) -> bool {
        [self.min_x, self.max_x, self.min_y, self.max_y]
            .iter()
            .all(|v| v.is_finite())
            && self.min_x <= self.max_x
            && self.min_y <= self.max_y
    }

    /// Checks whether the closed segment from `a` to `b` touches this box, using Liang-Barsky
    /// clipping of the segment parameter against both slabs.
    pub fn intersects_segment(&self, a: &Point, b: &Point) -> bool {
        let d = *b - *a;
        let mut t_min = 0.0_f64;
        let mut t_max = 1.0_f64;
        for (p, q) in [
            (-d.x, a.x - self.min_x),
            (d.x, self.max_x - a.x),
            (-d.y, a.y - self.min_y),
            (d.y, self.max_y - a.y),
        ] {
            if p == 0.0 {
                // Parallel to this slab: either fully inside it or never.
                if q < 0.0 {
                    return false;
                }
                continue;
            }
            let t = q / p;
            if p < 0.0 {
                t_min = t_min.max(t);
            } else {
                t_max = t_max.min(t);
            }
            if t_min > t_max {
                return false;
            }
        }
        true
    }
}

/// Accumulates points and boxes into the smallest box enclosing all of them.
#[derive(Clone, Copy, Debug)]
pub struct BoundingBoxBuilder {
    min_x: f64,
    max_x: f64,
    min_y: f64,
    max_y: f64,
}

impl Default for BoundingBoxBuilder {
    fn default() -> BoundingBoxBuilder {
        BoundingBoxBuilder {
            min_x: f64::INFINITY,
            max_x: f64::NEG_INFINITY,
            min_y: f64::INFINITY,
            max_y: f64::NEG_INFINITY,
        }
    }
}

impl BoundingBoxBuilder {
    pub fn new() -> BoundingBoxBuilder {
        BoundingBoxBuilder::default()
    }
    pub fn extend_box(self, bbox: &BoundingBox) -> BoundingBoxBuilder {
        self.extend_bounds(bbox.min_x, bbox.max_x, bbox.min_y, bbox.max_y)
    }
    pub fn extend_point(self, point: &Point) -> BoundingBoxBuilder {
        self.extend_bounds(point.x, point.x, point.y, point.y)
    }
    pub fn extend_points<'a, I>(self, points: I) -> BoundingBoxBuilder
    where
        I: IntoIterator<Item = &'a Point>,
    {
        points
            .into_iter()
            .fold(self, |builder, p| builder.extend_point(p))
    }
    pub fn extend_bounds(
        mut self,
        min_x: f64,
        max_x: f64,
        min_y: f64,
        max_y: f64,
    ) -> BoundingBoxBuilder {
        self.min_x = self.min_x.min(min_x);
        self.max_x = self.max_x.max(max_x);
        self.min_y = self.min_y.min(min_y);
        self.max_y = self.max_y.max(max_y);
        self
    }
    /// Grows the box by `margin` on every side. A negative margin shrinks it, unless that would
    /// invert either axis, in which case the box is left as is.
    pub fn expand(mut self, margin: f64) -> BoundingBoxBuilder {
        if margin < 0.0 {
            let shrink = margin * 2.0;
            if shrink < self.min_x - self.max_x || shrink < self.min_y - self.max_y {
                return self;
            }
        }
        self.min_x -= margin;
        self.max_x += margin;
        self.min_y -= margin;
        self.max_y += margin;
        self
    }
    /// False until at least one point or box has been added.
    pub fn is_valid(&self) -> bool {
        [self.min_x, self.max_x, self.min_y, self.max_y]
            .iter()
            .all(|v| v.is_finite())
    }
    pub fn build(&self) -> Option<BoundingBox> {
        if self.is_valid() {
            Some(BoundingBox::new(self.min_x, self.max_x, self.min_y, self.max_y))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_inclusive() {
        let b = BoundingBox::new(0.0, 10.0, -5.0, 5.0);
        assert!(b.contains(&Point::new(0.0, 5.0)));
        assert!(b.contains(&Point::new(10.0, -5.0)));
        assert!(!b.contains(&Point::new(10.1, 0.0)));
        assert!(!b.contains(&Point::new(5.0, -5.5)));
    }

    #[test]
    fn test_builder_square() {
        let b = BoundingBoxBuilder::new()
            .extend_point(&Point::new(3.0, 4.0))
            .expand(10.0)
            .build()
            .unwrap();
        assert_eq!(b, BoundingBox::new(-7.0, 13.0, -6.0, 14.0));
        assert_eq!(b.center(), Point::new(3.0, 4.0));
    }

    #[test]
    fn test_builder_empty_and_negative_margin() {
        assert!(BoundingBoxBuilder::new().build().is_none());
        let builder = BoundingBoxBuilder::new()
            .extend_points(&[Point::new(0.0, 0.0), Point::new(4.0, 2.0)]);
        // Shrinking by 2 would invert the y axis.
        assert_eq!(builder.expand(-2.0).build(), builder.build());
        assert_eq!(
            builder.expand(-1.0).build().unwrap(),
            BoundingBox::new(1.0, 3.0, 1.0, 1.0)
        );
        let merged = builder
            .extend_box(&BoundingBox::new(-1.0, 0.0, 5.0, 6.0))
            .build()
            .unwrap();
        assert_eq!(merged, BoundingBox::new(-1.0, 4.0, 0.0, 6.0));
    }

    #[test]
    fn test_segment_intersection() {
        let b = BoundingBox::new(21.0, 24.0, -1.0, 1.0);
        assert!(b.intersects_segment(&Point::new(20.0, 0.0), &Point::new(25.0, 0.0)));
        assert!(!b.intersects_segment(&Point::new(30.0, 0.0), &Point::new(25.0, 0.0)));
        assert!(!b.intersects_segment(&Point::new(20.0, 2.0), &Point::new(25.0, 2.0)));
        assert!(b.intersects_segment(&Point::new(22.0, -3.0), &Point::new(23.0, 3.0)));
        // Touching a corner counts.
        assert!(b.intersects_segment(&Point::new(20.0, 0.0), &Point::new(22.0, 2.0)));
        // Degenerate segment behaves like a containment test.
        assert!(b.intersects_segment(&Point::new(22.0, 0.0), &Point::new(22.0, 0.0)));
        assert!(!b.intersects_segment(&Point::new(20.0, 0.0), &Point::new(20.0, 0.0)));
    }

    #[test]
    fn test_well_formed() {
        assert!(BoundingBox::new(0.0, 0.0, 1.0, 1.0).is_well_formed());
        assert!(!BoundingBox::new(1.0, 0.0, 0.0, 1.0).is_well_formed());
        assert!(!BoundingBox::new(0.0, f64::NAN, 0.0, 1.0).is_well_formed());
    }
}
