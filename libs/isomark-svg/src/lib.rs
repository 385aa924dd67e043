//! # Isomark SVG
//!
//! Writes isomark assets as SVG files.
//!
//! ## Architecture
//!
//! ```text
//! isomark-geometry (Asset → Canvas calls) → isomark-svg (Document → file)
//! ```
//!
//! Geometry only names paint roles; a [`Theme`] turns them into colors at
//! emission time. Light and dark variants of an asset therefore share every
//! coordinate.
//!
//! ## Usage
//!
//! ```rust
//! use isomark_geometry::Icon;
//! use isomark_svg::{render_to_string, Theme};
//!
//! let svg = render_to_string(&Icon::default(), &Theme::dark());
//! assert!(svg.contains("<svg"));
//! assert!(svg.contains("<line"));
//! ```

pub mod document;
pub mod emit;
pub mod error;
pub mod params;
pub mod theme;

pub use document::SvgCanvas;
pub use emit::{emit, file_name, render, render_to_string, variants, write_asset};
pub use error::EmitError;
pub use params::load_params;
pub use theme::Theme;
