//! The standalone L monogram.

use config::constants::{CUBE_SIDE, MONOGRAM_CANVAS};
use glam::DVec2;

use super::Asset;
use crate::canvas::{Canvas, Paint, Shifted, Stroke};
use crate::compositor::{Compositor, Layer};
use crate::layout::Bounds;
use crate::monogram::{LShape, LStyle};
use crate::primitives::Cube;

/// The L faces centered on a fixed square canvas, optionally with the cube
/// wireframe drawn over them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Monogram {
    pub side: f64,
    pub style: LStyle,
    pub wireframe: bool,
    /// Side of the square canvas.
    pub canvas: f64,
    pub stroke: Stroke,
}

impl Default for Monogram {
    fn default() -> Self {
        Self {
            side: CUBE_SIDE,
            style: LStyle::Short,
            wireframe: false,
            canvas: MONOGRAM_CANVAS,
            stroke: Stroke::default(),
        }
    }
}

impl Monogram {
    pub fn layers(&self) -> Vec<Layer> {
        let mut layers = vec![Layer::fill(
            LShape::new(self.side, self.style).faces(),
            Paint::Foreground,
        )];
        if self.wireframe {
            let edges = Cube::new(self.side).wireframe();
            layers.push(Layer::outline(edges.iter().copied(), Paint::Foreground));
        }
        layers
    }

    /// Bounds of everything drawn, before centering.
    pub fn geometry_bounds(&self) -> Bounds {
        let points = self.layers().into_iter().flat_map(|layer| match layer {
            Layer::Fill { faces, .. } => faces
                .iter()
                .flat_map(|f| f.points().to_vec())
                .collect::<Vec<_>>(),
            Layer::Outline { edges, .. } => {
                edges.iter().flat_map(|e| [e.start, e.end]).collect()
            }
        });
        Bounds::from_points(points).unwrap_or_default()
    }
}

impl Asset for Monogram {
    fn name(&self) -> &'static str {
        "cube"
    }

    fn size(&self) -> DVec2 {
        DVec2::splat(self.canvas)
    }

    fn themed(&self) -> bool {
        false
    }

    fn draw<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        let offset = self.geometry_bounds().centering_offset(self.size());
        let mut shifted = Shifted::new(canvas, offset);
        Compositor::new(self.stroke).composite_layers(&mut shifted, &self.layers());
    }
}
