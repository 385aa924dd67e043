//! # Glyph Composer
//!
//! Builds the isometric letters L, A, S and T out of [`Bar`]s and lays them
//! out as a wordmark.
//!
//! Each letter is a fixed draw order of bars plus a list of
//! [`RestoreRule`]s naming edges of its *last* bar that the compositor's
//! cleanup pass erases and must stroke again. Bar order and restore rules
//! belong together: reordering a letter's bars means re-deriving its rules.
//!
//! ## Alignment corrections
//!
//! All corrections come from [`iso_rise`], the screen rise of a horizontal
//! run under the projection:
//!
//! - **L**: the narrow stem is extended by `iso_rise(w − bw)` so its top
//!   lines up with full-width top bars.
//! - **T**: the centered stem drops by `iso_rise(w − bw) / 2` so its bottom
//!   lines up with full-width bottom bars.
//! - **Layout**: letter `i` starts at `x = i·(w + gap)` and is lowered by
//!   `iso_rise(x)` so every letter sits on one isometric baseline.

mod letters;
mod wordmark;

pub use wordmark::{layout_word, WORD};

use config::constants::{
    iso_rise, LETTER_BAR_WIDTH, LETTER_DEPTH, LETTER_GAP, LETTER_HEIGHT, LETTER_WIDTH,
    RESTORE_INSET_STROKES,
};
use serde::{Deserialize, Serialize};

use crate::primitives::{Bar, EdgeRole};

/// Dimensions shared by every letter of a wordmark.
///
/// # Examples
/// ```
/// use isomark_geometry::glyph::LetterParams;
///
/// let params = LetterParams::default();
/// assert_eq!(params.stride(), 75.0);
/// assert_eq!(params.scaled(2.0).width, 100.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LetterParams {
    /// Letter width along x.
    pub width: f64,
    /// Letter height along z.
    pub height: f64,
    /// Thickness of each bar.
    pub bar_width: f64,
    /// Horizontal gap between letters.
    pub gap: f64,
    /// Bar depth along y.
    pub depth: f64,
}

impl Default for LetterParams {
    fn default() -> Self {
        Self {
            width: LETTER_WIDTH,
            height: LETTER_HEIGHT,
            bar_width: LETTER_BAR_WIDTH,
            gap: LETTER_GAP,
            depth: LETTER_DEPTH,
        }
    }
}

impl LetterParams {
    /// Horizontal distance between consecutive letter origins.
    pub fn stride(&self) -> f64 {
        self.width + self.gap
    }

    /// Every dimension multiplied by `factor`.
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            width: self.width * factor,
            height: self.height * factor,
            bar_width: self.bar_width * factor,
            gap: self.gap * factor,
            depth: self.depth * factor,
        }
    }

    /// Stem height of the L: the nominal height plus the rise of the part
    /// of the bottom bar the stem does not cover.
    pub fn l_stem_height(&self) -> f64 {
        self.height + iso_rise(self.width - self.bar_width)
    }

    /// How far the T stem drops below the baseline.
    pub fn t_stem_drop(&self) -> f64 {
        iso_rise(self.width - self.bar_width) / 2.0
    }
}

/// An edge of a letter's last bar to stroke again after cleanup.
///
/// Insets shorten the edge at each end and are measured in stroke widths,
/// so the rule stays correct when the stroke or the letter is rescaled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RestoreRule {
    pub edge: EdgeRole,
    pub start_inset: f64,
    pub end_inset: f64,
}

impl RestoreRule {
    pub fn new(edge: EdgeRole, start_inset: f64, end_inset: f64) -> Self {
        Self {
            edge,
            start_inset,
            end_inset,
        }
    }

    /// Restore the full edge.
    pub fn full(edge: EdgeRole) -> Self {
        Self::new(edge, 0.0, 0.0)
    }

    /// Restore the edge, backing off both ends where it meets another bar.
    pub fn inset_both(edge: EdgeRole) -> Self {
        Self::new(edge, RESTORE_INSET_STROKES, RESTORE_INSET_STROKES)
    }

    /// Restore the edge, backing off only its start.
    pub fn inset_start(edge: EdgeRole) -> Self {
        Self::new(edge, RESTORE_INSET_STROKES, 0.0)
    }
}

/// The supported letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Glyph {
    L,
    A,
    S,
    T,
}

impl Glyph {
    pub const ALL: [Glyph; 4] = [Glyph::L, Glyph::A, Glyph::S, Glyph::T];

    /// Builds this letter with its origin at `(x, z)`.
    pub fn build(self, x: f64, z: f64, params: &LetterParams) -> Letter {
        let (bars, restore) = match self {
            Glyph::L => letters::letter_l(x, z, params),
            Glyph::A => letters::letter_a(x, z, params),
            Glyph::S => letters::letter_s(x, z, params),
            Glyph::T => letters::letter_t(x, z, params),
        };
        Letter {
            glyph: self,
            bars,
            restore,
        }
    }
}

/// Bars of one letter, in draw order, with its restore rules.
#[derive(Debug, Clone, PartialEq)]
pub struct Letter {
    pub glyph: Glyph,
    pub bars: Vec<Bar>,
    pub restore: Vec<RestoreRule>,
}

impl Letter {
    pub fn last_bar(&self) -> Option<&Bar> {
        self.bars.last()
    }
}
