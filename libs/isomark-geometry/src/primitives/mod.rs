//! # Primitives
//!
//! Projected cube and bar primitives.
//!
//! Both are axis-aligned boxes seen from the same corner, so they share the
//! seven visible corners ([`VisibleCorners`]) and the nine-edge
//! [`Wireframe`]. The eighth corner (back-bottom-right) is always hidden and
//! is never computed.

pub mod bar;
pub mod cube;
pub mod wireframe;

pub use bar::{Bar, BarGeometry};
pub use cube::Cube;
pub use wireframe::{Edge, EdgeRole, Wireframe, WIREFRAME_EDGES};

use crate::projection::{iso, Point2};

/// A simple polygon on the drawing plane.
///
/// The outline closes implicitly from the last point back to the first.
/// Winding carries no meaning; occlusion comes from draw order.
#[derive(Debug, Clone, PartialEq)]
pub struct Face {
    points: Vec<Point2>,
}

impl Face {
    pub fn new(points: Vec<Point2>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Unsigned area via the shoelace formula.
    pub fn area(&self) -> f64 {
        let n = self.points.len();
        if n < 3 {
            return 0.0;
        }
        let twice: f64 = (0..n)
            .map(|i| {
                let a = self.points[i];
                let b = self.points[(i + 1) % n];
                a.x * b.y - b.x * a.y
            })
            .sum();
        twice.abs() / 2.0
    }
}

impl<const N: usize> From<[Point2; N]> for Face {
    fn from(points: [Point2; N]) -> Self {
        Self::new(points.to_vec())
    }
}

/// The seven visible corners of a projected box.
///
/// Naming: front/back is y = 0 / y = depth, bottom/top is z0 / z1,
/// left/right is x0 / x1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibleCorners {
    pub front_bottom_left: Point2,
    pub front_bottom_right: Point2,
    pub back_bottom_left: Point2,
    pub front_top_left: Point2,
    pub front_top_right: Point2,
    pub back_top_left: Point2,
    pub back_top_right: Point2,
}

impl VisibleCorners {
    /// Projects the visible corners of the box x0..x1, 0..depth, z0..z1.
    pub fn of_box(x0: f64, z0: f64, x1: f64, z1: f64, depth: f64) -> Self {
        Self {
            front_bottom_left: iso(x0, 0.0, z0),
            front_bottom_right: iso(x1, 0.0, z0),
            back_bottom_left: iso(x0, depth, z0),
            front_top_left: iso(x0, 0.0, z1),
            front_top_right: iso(x1, 0.0, z1),
            back_top_left: iso(x0, depth, z1),
            back_top_right: iso(x1, depth, z1),
        }
    }

    /// Silhouette in outline order: back-top-right, front-top-right,
    /// front-bottom-right, front-bottom-left, back-bottom-left, back-top-left.
    pub fn hexagon(&self) -> [Point2; 6] {
        [
            self.back_top_right,
            self.front_top_right,
            self.front_bottom_right,
            self.front_bottom_left,
            self.back_bottom_left,
            self.back_top_left,
        ]
    }

    /// The nine visible edges: the six silhouette edges between consecutive
    /// hexagon vertices, then the three edges out of front-top-left.
    pub fn wireframe(&self) -> Wireframe {
        let hex = self.hexagon();
        let ftl = self.front_top_left;
        Wireframe::from_edges([
            Edge::new(hex[0], hex[1]),
            Edge::new(hex[1], hex[2]),
            Edge::new(hex[2], hex[3]),
            Edge::new(hex[3], hex[4]),
            Edge::new(hex[4], hex[5]),
            Edge::new(hex[5], hex[0]),
            Edge::new(ftl, self.front_bottom_left),
            Edge::new(ftl, self.front_top_right),
            Edge::new(ftl, self.back_top_left),
        ])
    }

    pub fn points(&self) -> [Point2; 7] {
        [
            self.front_bottom_left,
            self.front_bottom_right,
            self.back_bottom_left,
            self.front_top_left,
            self.front_top_right,
            self.back_top_left,
            self.back_top_right,
        ]
    }
}
