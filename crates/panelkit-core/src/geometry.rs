//! 2D geometry primitives for part generation.
//!
//! All coordinates are in millimeters. Outlines are ordered vertex runs,
//! implicitly closed: the last vertex connects back to the first.

use serde::{Deserialize, Serialize};

/// Vertex count used when approximating relief circles as polygons.
pub const CIRCLE_STEPS: usize = 10;

/// Represents a 2D point with X and Y coordinates, in millimeters.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Creates a new point with the given X and Y coordinates.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Calculates the distance to another point.
    pub fn distance_to(&self, other: &Point) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }

    /// Returns this point shifted by `(dx, dy)`.
    pub fn translated(&self, dx: f64, dy: f64) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }
}

/// A closed polygon: an ordered vertex run, implicitly closed.
///
/// Used both for part outlines and for internal cutouts (holes). Generator
/// output is simple (non-self-intersecting) for in-range parameters and
/// always carries at least three distinct vertices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    pub points: Vec<Point>,
}

impl Polygon {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Axis-aligned bounding box over the vertex run.
    pub fn bounds(&self) -> Bounds {
        Bounds::of(&self.points)
    }

    /// Returns a copy shifted by `(dx, dy)`.
    pub fn translated(&self, dx: f64, dy: f64) -> Polygon {
        Polygon::new(self.points.iter().map(|p| p.translated(dx, dy)).collect())
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Axis-aligned bounding box of a vertex run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    /// Computes the bounding box of a point run.
    pub fn of(points: &[Point]) -> Bounds {
        let mut min_x = f64::INFINITY;
        let mut min_y = f64::INFINITY;
        let mut max_x = f64::NEG_INFINITY;
        let mut max_y = f64::NEG_INFINITY;
        for pt in points {
            min_x = min_x.min(pt.x);
            min_y = min_y.min(pt.y);
            max_x = max_x.max(pt.x);
            max_y = max_y.max(pt.y);
        }
        Bounds {
            min_x,
            min_y,
            width: max_x - min_x,
            height: max_y - min_y,
        }
    }
}

/// Builds an axis-aligned rectangle outline with its top-left corner at the
/// origin.
pub fn rect(w: f64, h: f64) -> Polygon {
    Polygon::new(vec![
        Point::new(0.0, 0.0),
        Point::new(w, 0.0),
        Point::new(w, h),
        Point::new(0.0, h),
    ])
}

/// Approximates a circle as a fixed-vertex polygon.
///
/// Vertices sit at `t = 2*PI*i/steps` starting from the positive X axis.
pub fn circle(center: Point, radius: f64, steps: usize) -> Polygon {
    let mut points = Vec::with_capacity(steps);
    for i in 0..steps {
        let t = std::f64::consts::TAU * i as f64 / steps as f64;
        points.push(Point::new(
            center.x + t.cos() * radius,
            center.y + t.sin() * radius,
        ));
    }
    Polygon::new(points)
}

/// Translates a vertex run so its bounding-box minimum corner sits at the
/// local origin. Returns the normalized polygon.
pub fn normalize(points: Vec<Point>) -> Polygon {
    let b = Bounds::of(&points);
    Polygon::new(
        points
            .into_iter()
            .map(|p| p.translated(-b.min_x, -b.min_y))
            .collect(),
    )
}

/// Solves for the X coordinate at `y_target` on the line through `p1` and
/// `p2` by two-point linear interpolation.
///
/// Near-vertical and near-horizontal lines make the slope solve unstable;
/// both return the anchor's X coordinate instead.
pub fn x_at_y(p1: Point, p2: Point, y_target: f64) -> f64 {
    let dx = p2.x - p1.x;
    let dy = p2.y - p1.y;
    if dx.abs() < 1e-4 || dy.abs() < 1e-4 {
        return p1.x;
    }
    let m = dy / dx;
    (y_target - p1.y) / m + p1.x
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_of_point_run() {
        let b = Bounds::of(&[
            Point::new(-3.0, 2.0),
            Point::new(5.0, 7.0),
            Point::new(0.0, -1.0),
        ]);
        assert_eq!(b.min_x, -3.0);
        assert_eq!(b.min_y, -1.0);
        assert_eq!(b.width, 8.0);
        assert_eq!(b.height, 8.0);
    }

    #[test]
    fn circle_has_fixed_vertex_count() {
        let c = circle(Point::new(10.0, 10.0), 3.0, CIRCLE_STEPS);
        assert_eq!(c.len(), CIRCLE_STEPS);
        for pt in &c.points {
            let r = pt.distance_to(&Point::new(10.0, 10.0));
            assert!((r - 3.0).abs() < 1e-9);
        }
    }

    #[test]
    fn normalize_moves_min_corner_to_origin() {
        let poly = normalize(vec![
            Point::new(12.0, 40.0),
            Point::new(30.0, 55.0),
            Point::new(25.0, 90.0),
        ]);
        let b = poly.bounds();
        assert_eq!(b.min_x, 0.0);
        assert_eq!(b.min_y, 0.0);
        assert_eq!(b.width, 18.0);
        assert_eq!(b.height, 50.0);
    }

    #[test]
    fn x_at_y_solves_on_sloped_line() {
        let x = x_at_y(Point::new(0.0, 0.0), Point::new(10.0, 10.0), 5.0);
        assert!((x - 5.0).abs() < 1e-9);
    }

    #[test]
    fn x_at_y_returns_anchor_for_degenerate_lines() {
        // Near-vertical
        let x = x_at_y(Point::new(4.0, 0.0), Point::new(4.0, 100.0), 50.0);
        assert_eq!(x, 4.0);
        // Near-horizontal
        let x = x_at_y(Point::new(4.0, 10.0), Point::new(90.0, 10.0), 50.0);
        assert_eq!(x, 4.0);
    }
}
