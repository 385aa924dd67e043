//! # Themes
//!
//! Maps paint roles to concrete colors. Geometry is shared between themes,
//! so two renders of one asset differ only in color attributes.

use config::constants::{
    ACCENT_COLOR, DARK_BACKGROUND, DARK_FOREGROUND, LIGHT_BACKGROUND, LIGHT_FOREGROUND,
};
use isomark_geometry::Paint;
use serde::{Deserialize, Serialize};

/// A named color scheme (CSS color strings).
///
/// # Examples
/// ```
/// use isomark_geometry::Paint;
/// use isomark_svg::Theme;
///
/// let dark = Theme::dark();
/// assert_eq!(dark.resolve(Paint::Foreground), "white");
/// assert_eq!(dark.resolve(Paint::Accent), Theme::light().resolve(Paint::Accent));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    /// Suffix used in themed file names.
    pub name: String,
    pub foreground: String,
    pub background: String,
    pub accent: String,
}

impl Theme {
    /// Black on white.
    pub fn light() -> Self {
        Self {
            name: "light".to_string(),
            foreground: LIGHT_FOREGROUND.to_string(),
            background: LIGHT_BACKGROUND.to_string(),
            accent: ACCENT_COLOR.to_string(),
        }
    }

    /// White on black.
    pub fn dark() -> Self {
        Self {
            name: "dark".to_string(),
            foreground: DARK_FOREGROUND.to_string(),
            background: DARK_BACKGROUND.to_string(),
            accent: ACCENT_COLOR.to_string(),
        }
    }

    /// Color of a paint role.
    pub fn resolve(&self, paint: Paint) -> &str {
        match paint {
            Paint::Foreground => &self.foreground,
            Paint::Background => &self.background,
            Paint::Accent => &self.accent,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}
