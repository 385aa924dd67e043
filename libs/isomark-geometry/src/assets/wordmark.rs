//! The isometric wordmark.

use config::constants::RenderConfig;
use glam::DVec2;

use super::Asset;
use crate::canvas::{Canvas, Shifted, Stroke};
use crate::compositor::Compositor;
use crate::glyph::{layout_word, Glyph, Letter, LetterParams, WORD};
use crate::layout::Bounds;

/// A row of isometric letters.
///
/// Each letter is composited as its own bar group; letters never occlude
/// one another.
#[derive(Debug, Clone, PartialEq)]
pub struct Wordmark {
    pub params: LetterParams,
    pub glyphs: Vec<Glyph>,
    pub config: RenderConfig,
}

impl Default for Wordmark {
    fn default() -> Self {
        Self::new(LetterParams::default(), RenderConfig::default())
    }
}

impl Wordmark {
    /// The brand word with the given dimensions.
    pub fn new(params: LetterParams, config: RenderConfig) -> Self {
        Self {
            params,
            glyphs: WORD.to_vec(),
            config,
        }
    }

    pub fn letters(&self) -> Vec<Letter> {
        layout_word(&self.glyphs, &self.params)
    }

    /// Tight bounds over every face point of every bar.
    pub fn geometry_bounds(&self) -> Bounds {
        let faces: Vec<_> = self
            .letters()
            .iter()
            .flat_map(|letter| letter.bars.iter().map(|bar| bar.geometry()))
            .collect();
        Bounds::of_faces(faces.iter().flat_map(|g| g.faces())).unwrap_or_default()
    }

    /// Geometry bounds grown by half a stroke plus the margin.
    pub fn bounds(&self) -> Bounds {
        self.geometry_bounds().padded(self.config.wordmark_pad())
    }

    /// Paints every letter in model-plane coordinates.
    pub fn draw_geometry<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        let compositor = Compositor::new(Stroke::round(self.config.stroke_width));
        for letter in self.letters() {
            compositor.composite_letter(canvas, &letter);
        }
    }
}

impl Asset for Wordmark {
    fn name(&self) -> &'static str {
        "wordmark"
    }

    fn size(&self) -> DVec2 {
        self.bounds().size()
    }

    fn themed(&self) -> bool {
        false
    }

    fn draw<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        let mut shifted = Shifted::new(canvas, self.bounds().origin_offset());
        self.draw_geometry(&mut shifted);
    }
}
