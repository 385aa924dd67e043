//! # Monogram
//!
//! The "L" that wraps around the cube: one bar on the top face, an elbow on
//! the left face and one bar on the front face, all one third of the cube
//! side wide and centered on the face.
//!
//! Also defines the accent regions: the parts of the cube faces on the
//! front side of the L, painted in the accent color beneath it.

use config::constants::{MONOGRAM_BAR_FRACTION, MONOGRAM_SHORT_FRACTION};
use serde::{Deserialize, Serialize};

use crate::primitives::Face;
use crate::projection::iso;

/// How far the top and front bars of the L run along the cube's x axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LStyle {
    /// Bars run edge to edge across the cube.
    #[default]
    Full,
    /// Bars stop two thirds of the way across.
    Short,
}

impl LStyle {
    /// Bar length as a fraction of the cube side.
    pub fn length_fraction(self) -> f64 {
        match self {
            LStyle::Full => 1.0,
            LStyle::Short => MONOGRAM_SHORT_FRACTION,
        }
    }
}

/// The L monogram for a cube of side `side`.
///
/// # Examples
/// ```
/// use isomark_geometry::monogram::{LShape, LStyle};
///
/// let l = LShape::new(100.0, LStyle::Full);
/// let [top, left, front] = l.faces();
/// assert_eq!(top.len(), 4);
/// assert_eq!(left.len(), 6);
/// assert_eq!(front.len(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LShape {
    pub side: f64,
    pub style: LStyle,
}

impl LShape {
    pub fn new(side: f64, style: LStyle) -> Self {
        Self { side, style }
    }

    /// Half of the bar width.
    pub fn half_width(&self) -> f64 {
        self.side * MONOGRAM_BAR_FRACTION / 2.0
    }

    /// Extent of the top and front bars along x.
    pub fn bar_length(&self) -> f64 {
        self.side * self.style.length_fraction()
    }

    /// Faces in top, left, front order.
    pub fn faces(&self) -> [Face; 3] {
        let s = self.side;
        let hw = self.half_width();
        let bx = self.bar_length();
        let mid = s / 2.0;

        // z = s plane
        let top = Face::from([
            iso(bx, mid + hw, s),
            iso(0.0, mid + hw, s),
            iso(0.0, mid - hw, s),
            iso(bx, mid - hw, s),
        ]);

        // x = 0 plane: the elbow turning from the top face to the front face
        let left = Face::from([
            iso(0.0, mid + hw, s),
            iso(0.0, mid - hw, s),
            iso(0.0, mid - hw, mid + hw),
            iso(0.0, 0.0, mid + hw),
            iso(0.0, 0.0, mid - hw),
            iso(0.0, mid + hw, mid - hw),
        ]);

        // y = 0 plane
        let front = Face::from([
            iso(0.0, 0.0, mid + hw),
            iso(bx, 0.0, mid + hw),
            iso(bx, 0.0, mid - hw),
            iso(0.0, 0.0, mid - hw),
        ]);

        [top, left, front]
    }
}

/// Accent blocks between the L and the cube's front-top-left corner: the
/// strip of the top face in front of the L, the square of the left face
/// inside the elbow, and the strip of the front face above the L.
pub fn accent_regions(side: f64) -> [Face; 3] {
    let s = side;
    let hw = s * MONOGRAM_BAR_FRACTION / 2.0;
    let mid = s / 2.0;

    let top_strip = Face::from([
        iso(0.0, 0.0, s),
        iso(s, 0.0, s),
        iso(s, mid - hw, s),
        iso(0.0, mid - hw, s),
    ]);
    let left_square = Face::from([
        iso(0.0, 0.0, s),
        iso(0.0, mid - hw, s),
        iso(0.0, mid - hw, mid + hw),
        iso(0.0, 0.0, mid + hw),
    ]);
    let front_strip = Face::from([
        iso(0.0, 0.0, s),
        iso(s, 0.0, s),
        iso(s, 0.0, mid + hw),
        iso(0.0, 0.0, mid + hw),
    ]);

    [top_strip, left_square, front_strip]
}
