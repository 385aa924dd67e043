//! Icon and wordmark, side by side.

use config::constants::{approx_zero, RenderConfig, CUBE_SIDE, LOGO_GAP};
use glam::DVec2;

use super::{Asset, Icon, Wordmark};
use crate::canvas::{Canvas, Shifted, Stroke};
use crate::glyph::LetterParams;

/// The full logo.
///
/// The wordmark is scaled so that the geometry height of `params` matches
/// the cube's silhouette height. Both parts are then vertically centered on
/// the taller one, `gap` apart.
///
/// # Examples
/// ```
/// use isomark_geometry::assets::{Asset, Logo};
///
/// let logo = Logo::default();
/// let cube = logo.icon().bounds();
/// let text = logo.wordmark().bounds();
/// let size = logo.size();
/// assert!((size.x - (cube.width() + 30.0 + text.width())).abs() < 1e-9);
/// assert!((size.y - cube.height().max(text.height())).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Logo {
    pub side: f64,
    /// Letter dimensions before scaling.
    pub params: LetterParams,
    pub config: RenderConfig,
    pub gap: f64,
}

impl Default for Logo {
    fn default() -> Self {
        Self {
            side: CUBE_SIDE,
            params: LetterParams::default(),
            config: RenderConfig::default(),
            gap: LOGO_GAP,
        }
    }
}

/// Canvas size and the translations of the two parts.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Arrangement {
    size: DVec2,
    icon_offset: DVec2,
    text_offset: DVec2,
}

impl Logo {
    pub fn icon(&self) -> Icon {
        Icon::new(self.side, Stroke::round(self.config.stroke_width))
    }

    /// Factor applied to `params` so the letters stand as tall as the cube.
    pub fn text_scale(&self) -> f64 {
        let cube_height = self.icon().geometry_bounds().height();
        let text_height = Wordmark::new(self.params, self.config)
            .geometry_bounds()
            .height();
        if approx_zero(text_height) {
            1.0
        } else {
            cube_height / text_height
        }
    }

    /// The scaled wordmark.
    pub fn wordmark(&self) -> Wordmark {
        Wordmark::new(self.params.scaled(self.text_scale()), self.config)
    }

    fn arrangement(&self) -> Arrangement {
        let cube = self.icon().bounds();
        let text = self.wordmark().bounds();
        let height = cube.height().max(text.height());

        Arrangement {
            size: DVec2::new(cube.width() + self.gap + text.width(), height),
            icon_offset: DVec2::new(
                -cube.min.x,
                -cube.min.y + (height - cube.height()) / 2.0,
            ),
            text_offset: DVec2::new(
                cube.width() + self.gap - text.min.x,
                -text.min.y + (height - text.height()) / 2.0,
            ),
        }
    }
}

impl Asset for Logo {
    fn name(&self) -> &'static str {
        "logo"
    }

    fn size(&self) -> DVec2 {
        self.arrangement().size
    }

    fn draw<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        let layout = self.arrangement();
        self.icon()
            .draw_geometry(&mut Shifted::new(&mut *canvas, layout.icon_offset));
        self.wordmark()
            .draw_geometry(&mut Shifted::new(&mut *canvas, layout.text_offset));
    }
}
