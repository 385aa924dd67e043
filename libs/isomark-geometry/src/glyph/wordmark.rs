//! Left-to-right wordmark layout.

use config::constants::iso_rise;

use super::{Glyph, Letter, LetterParams};

/// The brand word.
pub const WORD: [Glyph; 4] = [Glyph::L, Glyph::A, Glyph::S, Glyph::T];

/// Places `glyphs` left to right at a stride of `width + gap`.
///
/// Each letter is lowered by the rise of its horizontal offset, so that
/// after projection all letters share one isometric baseline.
///
/// # Examples
/// ```
/// use isomark_geometry::glyph::{layout_word, LetterParams, WORD};
///
/// let letters = layout_word(&WORD, &LetterParams::default());
/// assert_eq!(letters.len(), 4);
/// assert!(letters.iter().all(|l| !l.restore.is_empty()));
/// ```
pub fn layout_word(glyphs: &[Glyph], params: &LetterParams) -> Vec<Letter> {
    let stride = params.stride();
    glyphs
        .iter()
        .enumerate()
        .map(|(i, glyph)| {
            let x = i as f64 * stride;
            glyph.build(x, -iso_rise(x), params)
        })
        .collect()
}
