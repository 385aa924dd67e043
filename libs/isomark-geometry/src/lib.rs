//! # Isomark Geometry
//!
//! Isometric geometry and occlusion compositing for the isomark brand
//! assets. Turns numeric dimensions into an ordered list of flat fills and
//! strokes; knows nothing about files or colors.
//!
//! ## Architecture
//!
//! ```text
//! projection → primitives → glyph / monogram → compositor → Canvas
//!                                  layout ──→ assets ──↗
//! ```
//!
//! - **Projection**: fixed 30° isometric map from model space to the plane
//! - **Primitives**: cubes and bars, 3 faces and a 9-edge wireframe each
//! - **Glyphs**: L, A, S, T built from bars, with edge restore rules
//! - **Compositor**: paint-order occlusion, no depth buffer
//! - **Assets**: icon, wordmark, logo and monogram, each sized to its canvas
//!
//! ## Usage
//!
//! ```rust
//! use isomark_geometry::assets::{Asset, Wordmark};
//!
//! let scene = Wordmark::default().to_scene();
//! assert!(scene.width > 0.0);
//! assert!(scene.line_count() > 0);
//! ```

pub mod assets;
pub mod canvas;
pub mod compositor;
pub mod glyph;
pub mod layout;
pub mod monogram;
pub mod primitives;
pub mod projection;

pub use assets::{AnyAsset, Asset, Icon, Logo, Monogram, Wordmark};
pub use canvas::{Canvas, DrawCommand, LineCap, Paint, Scene, Stroke};
pub use compositor::{Compositor, Layer};
pub use glyph::{Glyph, Letter, LetterParams, RestoreRule};
pub use layout::Bounds;
pub use monogram::LStyle;
pub use primitives::{Bar, Cube, Edge, EdgeRole, Face, Wireframe};
pub use projection::{iso, project, Point2, Point3};
