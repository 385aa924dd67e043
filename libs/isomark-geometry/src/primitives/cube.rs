//! # Cube Primitive
//!
//! The isometric cube behind the icon: a hexagonal silhouette plus its
//! nine visible edges.

use super::{VisibleCorners, Wireframe};
use crate::projection::Point2;

/// A cube of side `side` with one corner at the model origin.
///
/// # Examples
/// ```
/// use isomark_geometry::primitives::Cube;
///
/// let cube = Cube::new(100.0);
/// assert_eq!(cube.hexagon().len(), 6);
/// assert_eq!(cube.wireframe().len(), 9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cube {
    side: f64,
    corners: VisibleCorners,
}

impl Cube {
    pub fn new(side: f64) -> Self {
        Self {
            side,
            corners: VisibleCorners::of_box(0.0, 0.0, side, side, side),
        }
    }

    pub fn side(&self) -> f64 {
        self.side
    }

    /// The seven visible corners.
    pub fn vertices(&self) -> &VisibleCorners {
        &self.corners
    }

    /// The six silhouette vertices, starting at back-top-right.
    pub fn hexagon(&self) -> [Point2; 6] {
        self.corners.hexagon()
    }

    pub fn wireframe(&self) -> Wireframe {
        self.corners.wireframe()
    }
}
