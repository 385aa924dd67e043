//! # Configuration Constants
//!
//! Centralized constants for the isomark pipeline. Projection, stroke,
//! glyph and layout values are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Projection**: The isometric angle and the rise helper derived from it
//! - **Stroke**: Outline width and restore-edge insets
//! - **Glyphs**: Default wordmark letter dimensions
//! - **Cube**: Default cube side and monogram proportions
//! - **Layout**: Margins, gaps and canvas sizes
//! - **Color**: Theme colors

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

// =============================================================================
// PROJECTION CONSTANTS
// =============================================================================

/// Angle of the x and y model axes above the horizontal, in degrees.
///
/// Every projected point, every glyph correction and every accent region
/// derives from this single value.
///
/// # Example
///
/// ```rust
/// use config::constants::ISO_ANGLE_DEGREES;
///
/// let radians = ISO_ANGLE_DEGREES.to_radians();
/// assert!((radians.sin() - 0.5).abs() < 1e-12);
/// ```
pub const ISO_ANGLE_DEGREES: f64 = 30.0;

/// Returns the projection angle in radians.
#[inline]
pub fn iso_angle() -> f64 {
    ISO_ANGLE_DEGREES.to_radians()
}

/// Vertical rise on screen produced by a horizontal model run of `run`
/// along the x or y axis.
///
/// This is the quantity behind every alignment correction: the L stem
/// extension, the T stem offset and the wordmark baseline shear.
///
/// # Example
///
/// ```rust
/// use config::constants::iso_rise;
///
/// assert!((iso_rise(35.0) - 17.5).abs() < 1e-9);
/// ```
#[inline]
pub fn iso_rise(run: f64) -> f64 {
    iso_angle().sin() * run
}

// =============================================================================
// STROKE CONSTANTS
// =============================================================================

/// Outline stroke width shared by cube wireframes and letter edges.
///
/// # Example
///
/// ```rust
/// use config::constants::STROKE_WIDTH;
///
/// let half = STROKE_WIDTH / 2.0;
/// assert_eq!(half, 3.0);
/// ```
pub const STROKE_WIDTH: f64 = 6.0;

/// Endpoint inset applied to restored letter edges, in stroke widths.
///
/// A restored edge that meets a boundary already drawn by an earlier bar
/// is shortened by this much so the round caps do not double up.
pub const RESTORE_INSET_STROKES: f64 = 0.75;

// =============================================================================
// GLYPH CONSTANTS
// =============================================================================

/// Default letter width (model units along x).
pub const LETTER_WIDTH: f64 = 50.0;

/// Default letter height (model units along z).
pub const LETTER_HEIGHT: f64 = 70.0;

/// Default bar thickness of letter strokes.
pub const LETTER_BAR_WIDTH: f64 = 15.0;

/// Default horizontal gap between consecutive letters.
pub const LETTER_GAP: f64 = 25.0;

/// Default bar depth along the y axis.
pub const LETTER_DEPTH: f64 = 15.0;

// =============================================================================
// CUBE CONSTANTS
// =============================================================================

/// Default cube side for the icon, logo and monogram.
pub const CUBE_SIDE: f64 = 100.0;

/// Width of the monogram L bars as a fraction of the cube side.
///
/// # Example
///
/// ```rust
/// use config::constants::{CUBE_SIDE, MONOGRAM_BAR_FRACTION};
///
/// let half_width = CUBE_SIDE * MONOGRAM_BAR_FRACTION / 2.0;
/// assert!((half_width - CUBE_SIDE / 6.0).abs() < 1e-9);
/// ```
pub const MONOGRAM_BAR_FRACTION: f64 = 1.0 / 3.0;

/// Length of the short-style monogram bars as a fraction of the cube side.
pub const MONOGRAM_SHORT_FRACTION: f64 = 2.0 / 3.0;

// =============================================================================
// LAYOUT CONSTANTS
// =============================================================================

/// Extra margin added beyond half a stroke around wordmark geometry.
pub const WORDMARK_MARGIN: f64 = 1.0;

/// Horizontal gap between the cube and the wordmark in the logo.
pub const LOGO_GAP: f64 = 30.0;

/// Side of the fixed square canvas used by the standalone monogram.
pub const MONOGRAM_CANVAS: f64 = 300.0;

// =============================================================================
// COLOR CONSTANTS
// =============================================================================

/// Accent color of the decorative cube regions.
pub const ACCENT_COLOR: &str = "#5A9EA3";

/// Foreground of the light theme.
pub const LIGHT_FOREGROUND: &str = "black";

/// Background of the light theme.
pub const LIGHT_BACKGROUND: &str = "white";

/// Foreground of the dark theme.
pub const DARK_FOREGROUND: &str = "white";

/// Background of the dark theme.
pub const DARK_BACKGROUND: &str = "black";

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Checks if two f64 values are approximately equal within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_equal;
///
/// assert!(approx_equal(1.0, 1.0 + 1e-11));
/// assert!(!approx_equal(1.0, 1.1));
/// ```
#[inline]
pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Checks if a f64 value is approximately zero within EPSILON.
#[inline]
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON
}

// =============================================================================
// RENDER CONFIGURATION
// =============================================================================

/// Validated stroke settings shared by every asset of a render.
///
/// # Examples
/// ```
/// use config::constants::RenderConfig;
/// let config = RenderConfig::default();
/// assert_eq!(config.stroke_width, 6.0);
/// assert_eq!(config.margin, 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderConfig {
    /// Outline stroke width.
    pub stroke_width: f64,
    /// Margin added beyond half a stroke when padding wordmark bounds.
    pub margin: f64,
}

impl RenderConfig {
    /// Builds a configuration, rejecting non-positive or non-finite stroke
    /// widths and negative or non-finite margins.
    ///
    /// # Examples
    /// ```
    /// use config::constants::RenderConfig;
    /// let cfg = RenderConfig::new(4.0, 0.5).expect("valid config");
    /// assert_eq!(cfg.stroke_width, 4.0);
    /// ```
    pub fn new(stroke_width: f64, margin: f64) -> Result<Self, ConfigError> {
        if !stroke_width.is_finite() || stroke_width <= 0.0 {
            return Err(ConfigError::InvalidStrokeWidth(stroke_width));
        }
        if !margin.is_finite() || margin < 0.0 {
            return Err(ConfigError::InvalidMargin(margin));
        }
        Ok(Self {
            stroke_width,
            margin,
        })
    }

    /// Padding of the wordmark bounding box: half a stroke plus the margin.
    pub fn wordmark_pad(&self) -> f64 {
        self.stroke_width / 2.0 + self.margin
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            stroke_width: STROKE_WIDTH,
            margin: WORDMARK_MARGIN,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when the stroke width is zero, negative or not finite.
    InvalidStrokeWidth(f64),
    /// Raised when the margin is negative or not finite.
    InvalidMargin(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidStrokeWidth(value) => {
                write!(f, "stroke width must be positive and finite: {value}")
            }
            ConfigError::InvalidMargin(value) => {
                write!(f, "margin must be non-negative and finite: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
