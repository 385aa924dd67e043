//! # Bar Primitive
//!
//! A rectangular cuboid of fixed depth: the building block of every glyph.

use serde::{Deserialize, Serialize};

use super::{Face, VisibleCorners, Wireframe};

/// A cuboid spanning x0..x1 and z0..z1, from y = 0 back to y = depth.
///
/// # Examples
/// ```
/// use isomark_geometry::primitives::Bar;
///
/// let bar = Bar::new(0.0, 0.0, 50.0, 15.0, 15.0);
/// let geometry = bar.geometry();
/// assert_eq!(geometry.faces().len(), 3);
/// assert_eq!(geometry.wireframe.len(), 9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub x0: f64,
    pub z0: f64,
    pub x1: f64,
    pub z1: f64,
    pub depth: f64,
}

/// Projected faces and edges of a [`Bar`].
#[derive(Debug, Clone, PartialEq)]
pub struct BarGeometry {
    /// The x = x0 face.
    pub left: Face,
    /// The z = z1 face.
    pub top: Face,
    /// The y = 0 face.
    pub front: Face,
    pub wireframe: Wireframe,
}

impl Bar {
    pub fn new(x0: f64, z0: f64, x1: f64, z1: f64, depth: f64) -> Self {
        Self {
            x0,
            z0,
            x1,
            z1,
            depth,
        }
    }

    /// Model-space width along x.
    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    /// Model-space height along z.
    pub fn height(&self) -> f64 {
        self.z1 - self.z0
    }

    pub fn corners(&self) -> VisibleCorners {
        VisibleCorners::of_box(self.x0, self.z0, self.x1, self.z1, self.depth)
    }

    /// Projects the bar into its three visible faces and nine edges.
    pub fn geometry(&self) -> BarGeometry {
        let c = self.corners();
        BarGeometry {
            left: Face::from([
                c.front_top_left,
                c.back_top_left,
                c.back_bottom_left,
                c.front_bottom_left,
            ]),
            top: Face::from([
                c.front_top_left,
                c.front_top_right,
                c.back_top_right,
                c.back_top_left,
            ]),
            front: Face::from([
                c.front_top_left,
                c.front_top_right,
                c.front_bottom_right,
                c.front_bottom_left,
            ]),
            wireframe: c.wireframe(),
        }
    }
}

impl BarGeometry {
    /// Faces in left, top, front order.
    pub fn faces(&self) -> [&Face; 3] {
        [&self.left, &self.top, &self.front]
    }

    /// Faces painted in the background role to hide what lies behind.
    pub fn occluders(&self) -> [&Face; 2] {
        [&self.left, &self.top]
    }
}
