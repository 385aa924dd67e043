//! # Config Crate
//!
//! Centralized configuration constants for the isomark asset pipeline.
//! Every magic number of the projection, the glyph geometry and the asset
//! layout is defined here so that the geometry, emitter and CLI crates stay
//! in agreement.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{iso_rise, STROKE_WIDTH, LETTER_WIDTH, LETTER_BAR_WIDTH};
//!
//! // The L stem is extended by the rise of the bar it does not cover.
//! let extension = iso_rise(LETTER_WIDTH - LETTER_BAR_WIDTH);
//! assert!((extension - 17.5).abs() < 1e-9);
//!
//! // Wordmark padding: half a stroke plus a small margin.
//! let pad = STROKE_WIDTH / 2.0 + 1.0;
//! assert_eq!(pad, 4.0);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Projection-Derived**: Alignment corrections are functions of the
//!   projection angle, never literals
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
