//! # Isometric Projection
//!
//! Maps model-space points onto the 2D drawing plane.
//!
//! Model axes: x is cube width, y is cube depth, z is cube height. Under the
//! projection the x axis points right and up, the y axis left and up, and the
//! z axis straight up (drawing-space y grows downward, as in SVG).
//!
//! ```text
//!            z
//!            |
//!     y  .   |   .  x
//!       '  . | .  '
//!            +
//! ```
//!
//! Every primitive, glyph and accent region goes through [`project`]; nothing
//! else in the crate is allowed to hand-compute screen coordinates.

use config::constants::iso_angle;
use glam::{DVec2, DVec3};

/// A point on the drawing plane.
pub type Point2 = DVec2;

/// A point in model space.
pub type Point3 = DVec3;

/// Screen directions of the three model axes.
///
/// # Examples
/// ```
/// use isomark_geometry::projection::IsoAxes;
///
/// let axes = IsoAxes::standard();
/// assert_eq!(axes.z.x, 0.0);
/// assert_eq!(axes.z.y, -1.0);
/// assert!((axes.x.x + axes.y.x).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IsoAxes {
    /// Screen direction of the model x axis: (cos θ, −sin θ).
    pub x: DVec2,
    /// Screen direction of the model y axis: (−cos θ, −sin θ).
    pub y: DVec2,
    /// Screen direction of the model z axis: (0, −1).
    pub z: DVec2,
}

impl IsoAxes {
    /// Axes for the configured isometric angle.
    pub fn standard() -> Self {
        let angle = iso_angle();
        let (sin, cos) = angle.sin_cos();
        Self {
            x: DVec2::new(cos, -sin),
            y: DVec2::new(-cos, -sin),
            z: DVec2::new(0.0, -1.0),
        }
    }

    /// Projects a model point with these axes.
    #[inline]
    pub fn project(&self, point: Point3) -> Point2 {
        self.x * point.x + self.y * point.y + self.z * point.z
    }

    /// Recovers the model point on the z = 0 plane that projects to `point`.
    ///
    /// The x and y axes are linearly independent, so the projection
    /// restricted to the ground plane is invertible.
    pub fn unproject_ground(&self, point: Point2) -> Point3 {
        let det = self.x.x * self.y.y - self.y.x * self.x.y;
        let x = (point.x * self.y.y - self.y.x * point.y) / det;
        let y = (self.x.x * point.y - point.x * self.x.y) / det;
        Point3::new(x, y, 0.0)
    }
}

impl Default for IsoAxes {
    fn default() -> Self {
        Self::standard()
    }
}

/// Projects a model-space point into drawing space.
///
/// # Examples
/// ```
/// use isomark_geometry::projection::{project, Point3};
///
/// let p = project(Point3::new(0.0, 0.0, 10.0));
/// assert_eq!(p.x, 0.0);
/// assert_eq!(p.y, -10.0);
/// ```
#[inline]
pub fn project(point: Point3) -> Point2 {
    IsoAxes::standard().project(point)
}

/// Shorthand for `project(Point3::new(x, y, z))`.
#[inline]
pub fn iso(x: f64, y: f64, z: f64) -> Point2 {
    project(Point3::new(x, y, z))
}

/// Inverse of [`project`] for points on the z = 0 plane.
pub fn unproject_ground(point: Point2) -> Point3 {
    IsoAxes::standard().unproject_ground(point)
}
