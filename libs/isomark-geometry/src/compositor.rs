//! # Occlusion Compositor
//!
//! Fakes depth between overlapping flat shapes using nothing but paint
//! order. There is no depth buffer and no polygon clipping; every bar is a
//! rectilinear box at a known depth, so painting in the right sequence is
//! enough.
//!
//! ## Bar groups (letters)
//!
//! Bars are taken in the caller's order. That order does not mean
//! front-to-back; it decides which strokes survive being painted over.
//!
//! 1. **Paint pass**, for each bar in order:
//!    - fill its left and top faces with [`Paint::Background`], hiding
//!      whatever earlier bars drew underneath;
//!    - refill the front faces of all earlier bars with
//!      [`Paint::Foreground`], undoing what the previous step erased;
//!    - fill its own front face with [`Paint::Foreground`];
//!    - stroke its nine edges.
//! 2. **Cleanup pass**: the same fills again, without strokes. This wipes
//!    stroke fragments of bar N+1 that landed on regions bar N had already
//!    finished.
//! 3. **Restore pass**: the cleanup also wipes visible edges of the last
//!    bar, since no later bar redraws them. Each [`RestoreRule`] strokes one
//!    such edge again, shortened at each end by its inset.
//!
//! Invariant: bar N+1 may only disturb state established by bars 0..=N,
//! and that state is re-established before the group is done.
//!
//! ## Flat layers (icon and monogram)
//!
//! The cube artwork needs no cleanup: layers are painted once, in order,
//! because each opaque layer exactly covers what it must hide.

use crate::canvas::{Canvas, Paint, Stroke};
use crate::glyph::{Letter, RestoreRule};
use crate::primitives::{Bar, BarGeometry, Edge, Face};

/// One step of a flat, single-pass composition.
#[derive(Debug, Clone, PartialEq)]
pub enum Layer {
    /// Fill each face, in order.
    Fill { faces: Vec<Face>, paint: Paint },
    /// Stroke each edge, in order.
    Outline { edges: Vec<Edge>, paint: Paint },
}

impl Layer {
    pub fn fill<I: IntoIterator<Item = Face>>(faces: I, paint: Paint) -> Self {
        Layer::Fill {
            faces: faces.into_iter().collect(),
            paint,
        }
    }

    pub fn outline<I: IntoIterator<Item = Edge>>(edges: I, paint: Paint) -> Self {
        Layer::Outline {
            edges: edges.into_iter().collect(),
            paint,
        }
    }
}

/// Paints primitives onto a [`Canvas`] in occlusion-correct order.
///
/// # Examples
/// ```
/// use isomark_geometry::canvas::{Scene, Stroke};
/// use isomark_geometry::compositor::Compositor;
/// use isomark_geometry::glyph::{Glyph, LetterParams};
///
/// let letter = Glyph::L.build(0.0, 0.0, &LetterParams::default());
/// let mut scene = Scene::new(200.0, 200.0);
/// Compositor::new(Stroke::round(6.0)).composite_letter(&mut scene, &letter);
///
/// // 2 bars: the paint pass fills 3 + 4 polygons, the cleanup pass repeats them.
/// assert_eq!(scene.polygon_count(), 14);
/// // 9 edges per bar plus one restored edge.
/// assert_eq!(scene.line_count(), 19);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Compositor {
    stroke: Stroke,
}

impl Compositor {
    pub fn new(stroke: Stroke) -> Self {
        Self { stroke }
    }

    pub fn stroke(&self) -> Stroke {
        self.stroke
    }

    /// Composites one letter as an independent bar group.
    pub fn composite_letter<C: Canvas + ?Sized>(&self, canvas: &mut C, letter: &Letter) {
        self.composite_bars(canvas, &letter.bars, &letter.restore);
    }

    /// Composites `bars` in the given order, then applies `restore` to the
    /// last bar.
    pub fn composite_bars<C: Canvas + ?Sized>(
        &self,
        canvas: &mut C,
        bars: &[Bar],
        restore: &[RestoreRule],
    ) {
        let geometry: Vec<BarGeometry> = bars.iter().map(Bar::geometry).collect();

        self.occlusion_pass(canvas, &geometry, true);
        self.occlusion_pass(canvas, &geometry, false);

        if let Some(last) = geometry.last() {
            for rule in restore {
                let edge = last.wireframe[rule.edge].inset(
                    rule.start_inset * self.stroke.width,
                    rule.end_inset * self.stroke.width,
                );
                canvas.stroke_line(edge.start, edge.end, Paint::Foreground, self.stroke);
            }
        }
    }

    fn occlusion_pass<C: Canvas + ?Sized>(
        &self,
        canvas: &mut C,
        bars: &[BarGeometry],
        with_edges: bool,
    ) {
        for (i, bar) in bars.iter().enumerate() {
            for face in bar.occluders() {
                canvas.fill_polygon(face.points(), Paint::Background);
            }
            for earlier in &bars[..i] {
                canvas.fill_polygon(earlier.front.points(), Paint::Foreground);
            }
            canvas.fill_polygon(bar.front.points(), Paint::Foreground);

            if with_edges {
                for edge in bar.wireframe.iter() {
                    canvas.stroke_line(edge.start, edge.end, Paint::Foreground, self.stroke);
                }
            }
        }
    }

    /// Paints flat layers once, in order.
    pub fn composite_layers<C: Canvas + ?Sized>(&self, canvas: &mut C, layers: &[Layer]) {
        for layer in layers {
            match layer {
                Layer::Fill { faces, paint } => {
                    for face in faces {
                        canvas.fill_polygon(face.points(), *paint);
                    }
                }
                Layer::Outline { edges, paint } => {
                    for edge in edges {
                        canvas.stroke_line(edge.start, edge.end, *paint, self.stroke);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests;
