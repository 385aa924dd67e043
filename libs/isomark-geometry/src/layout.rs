//! # Layout
//!
//! Axis-aligned bounding boxes on the drawing plane, used to size canvases
//! and to compute the translations that place artwork on them.

use glam::DVec2;

use crate::primitives::Face;
use crate::projection::Point2;

/// An axis-aligned rectangle given by its minimum and maximum corners.
///
/// # Examples
/// ```
/// use isomark_geometry::layout::Bounds;
/// use glam::DVec2;
///
/// let square = [
///     DVec2::new(0.0, 0.0),
///     DVec2::new(10.0, 0.0),
///     DVec2::new(10.0, 10.0),
///     DVec2::new(0.0, 10.0),
/// ];
/// let b = Bounds::from_points(square).unwrap().padded(1.0);
/// assert_eq!(b.min, DVec2::new(-1.0, -1.0));
/// assert_eq!(b.max, DVec2::new(11.0, 11.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub min: DVec2,
    pub max: DVec2,
}

impl Bounds {
    pub fn new(min: DVec2, max: DVec2) -> Self {
        Self { min, max }
    }

    /// Tight bounds of a point set, or `None` when it is empty.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point2>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let (min, max) = iter.fold((first, first), |(min, max), p| (min.min(p), max.max(p)));
        Some(Self { min, max })
    }

    /// Tight bounds of every vertex of `faces`.
    pub fn of_faces<'a, I>(faces: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Face>,
    {
        Self::from_points(faces.into_iter().flat_map(|f| f.points().iter().copied()))
    }

    /// Grows the box by `pad` on every side.
    pub fn padded(&self, pad: f64) -> Self {
        Self {
            min: self.min - DVec2::splat(pad),
            max: self.max + DVec2::splat(pad),
        }
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    pub fn size(&self) -> DVec2 {
        self.max - self.min
    }

    pub fn center(&self) -> DVec2 {
        (self.min + self.max) / 2.0
    }

    /// Translation that moves the minimum corner to the origin.
    pub fn origin_offset(&self) -> DVec2 {
        -self.min
    }

    /// Translation that centers this box on a canvas of size `canvas`.
    pub fn centering_offset(&self, canvas: DVec2) -> DVec2 {
        canvas / 2.0 - self.center()
    }
}
