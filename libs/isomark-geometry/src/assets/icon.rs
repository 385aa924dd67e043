//! The cube icon.

use config::constants::CUBE_SIDE;
use glam::DVec2;

use super::Asset;
use crate::canvas::{Canvas, Paint, Shifted, Stroke};
use crate::compositor::{Compositor, Layer};
use crate::layout::Bounds;
use crate::monogram::{accent_regions, LShape, LStyle};
use crate::primitives::{Cube, Face};

/// Cube with accent blocks, the wrapped L and the cube wireframe.
///
/// The canvas is the hexagon's extent plus one stroke width, so the
/// round-capped outline is never clipped.
///
/// # Examples
/// ```
/// use isomark_geometry::assets::{Asset, Icon};
///
/// let icon = Icon::default();
/// let size = icon.size();
/// assert!((size.y - 206.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Icon {
    pub side: f64,
    pub stroke: Stroke,
    pub style: LStyle,
}

impl Default for Icon {
    fn default() -> Self {
        Self {
            side: CUBE_SIDE,
            stroke: Stroke::default(),
            style: LStyle::Full,
        }
    }
}

impl Icon {
    pub fn new(side: f64, stroke: Stroke) -> Self {
        Self {
            side,
            stroke,
            ..Self::default()
        }
    }

    pub fn with_style(mut self, style: LStyle) -> Self {
        self.style = style;
        self
    }

    pub fn cube(&self) -> Cube {
        Cube::new(self.side)
    }

    /// Tight bounds of the cube silhouette.
    pub fn geometry_bounds(&self) -> Bounds {
        Bounds::from_points(self.cube().hexagon()).unwrap_or_default()
    }

    /// Silhouette bounds grown by half a stroke.
    pub fn bounds(&self) -> Bounds {
        self.geometry_bounds().padded(self.stroke.width / 2.0)
    }

    /// Paint layers, back to front.
    pub fn layers(&self) -> Vec<Layer> {
        let cube = self.cube();
        vec![
            Layer::fill([Face::from(cube.hexagon())], Paint::Background),
            Layer::fill(accent_regions(self.side), Paint::Accent),
            Layer::fill(LShape::new(self.side, self.style).faces(), Paint::Foreground),
            Layer::outline(cube.wireframe().iter().copied(), Paint::Foreground),
        ]
    }

    /// Paints the icon in model-plane coordinates, without the canvas shift.
    pub fn draw_geometry<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        Compositor::new(self.stroke).composite_layers(canvas, &self.layers());
    }
}

impl Asset for Icon {
    fn name(&self) -> &'static str {
        "icon"
    }

    fn size(&self) -> DVec2 {
        self.bounds().size()
    }

    fn draw<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        let mut shifted = Shifted::new(canvas, self.bounds().origin_offset());
        self.draw_geometry(&mut shifted);
    }
}
