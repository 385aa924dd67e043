//! Command-line arguments shared by every subcommand.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use config::constants::{RenderConfig, CUBE_SIDE, STROKE_WIDTH, WORDMARK_MARGIN};
use isomark_geometry::{Icon, LStyle, LetterParams, Logo, Monogram, Stroke, Wordmark};
use isomark_svg::{load_params, Theme};

/// Which color variants to write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ThemeChoice {
    Light,
    Dark,
    Both,
}

impl ThemeChoice {
    pub fn themes(self) -> Vec<Theme> {
        match self {
            ThemeChoice::Light => vec![Theme::light()],
            ThemeChoice::Dark => vec![Theme::dark()],
            ThemeChoice::Both => vec![Theme::light(), Theme::dark()],
        }
    }
}

/// Monogram L construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StyleChoice {
    Full,
    Short,
}

impl From<StyleChoice> for LStyle {
    fn from(choice: StyleChoice) -> Self {
        match choice {
            StyleChoice::Full => LStyle::Full,
            StyleChoice::Short => LStyle::Short,
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct AssetArgs {
    /// Directory the SVG files are written to
    #[arg(long, short, default_value = ".")]
    pub out_dir: PathBuf,

    /// Color variants for themed assets
    #[arg(long, value_enum, default_value_t = ThemeChoice::Both)]
    pub theme: ThemeChoice,

    /// Outline stroke width
    #[arg(long, default_value_t = STROKE_WIDTH)]
    pub stroke_width: f64,

    /// Margin beyond half a stroke around the wordmark
    #[arg(long, default_value_t = WORDMARK_MARGIN)]
    pub margin: f64,

    /// JSON file with letter dimensions; flags below override it
    #[arg(long, value_name = "FILE.json")]
    pub params: Option<PathBuf>,

    /// Letter width
    #[arg(long)]
    pub width: Option<f64>,

    /// Letter height
    #[arg(long)]
    pub height: Option<f64>,

    /// Letter bar thickness
    #[arg(long)]
    pub bar_width: Option<f64>,

    /// Gap between letters
    #[arg(long)]
    pub gap: Option<f64>,

    /// Letter depth
    #[arg(long)]
    pub depth: Option<f64>,

    /// Cube side length
    #[arg(long, default_value_t = CUBE_SIDE)]
    pub side: f64,

    /// L construction (icon default: full, monogram default: short)
    #[arg(long, value_enum)]
    pub style: Option<StyleChoice>,

    /// Draw the cube wireframe over the monogram
    #[arg(long)]
    pub wireframe: bool,
}

impl AssetArgs {
    pub fn render_config(&self) -> Result<RenderConfig> {
        Ok(RenderConfig::new(self.stroke_width, self.margin)?)
    }

    /// Letter dimensions: defaults, then the parameter file, then flags.
    pub fn letter_params(&self) -> Result<LetterParams> {
        let mut params = match &self.params {
            Some(path) => load_params(path)
                .with_context(|| format!("loading letter parameters from {}", path.display()))?,
            None => LetterParams::default(),
        };
        if let Some(width) = self.width {
            params.width = width;
        }
        if let Some(height) = self.height {
            params.height = height;
        }
        if let Some(bar_width) = self.bar_width {
            params.bar_width = bar_width;
        }
        if let Some(gap) = self.gap {
            params.gap = gap;
        }
        if let Some(depth) = self.depth {
            params.depth = depth;
        }
        Ok(params)
    }

    pub fn icon(&self, config: RenderConfig) -> Icon {
        let style = self.style.map_or(LStyle::Full, LStyle::from);
        Icon::new(self.side, Stroke::round(config.stroke_width)).with_style(style)
    }

    pub fn wordmark(&self, params: LetterParams, config: RenderConfig) -> Wordmark {
        Wordmark::new(params, config)
    }

    pub fn logo(&self, params: LetterParams, config: RenderConfig) -> Logo {
        Logo {
            side: self.side,
            params,
            config,
            ..Logo::default()
        }
    }

    pub fn monogram(&self, config: RenderConfig) -> Monogram {
        Monogram {
            side: self.side,
            style: self.style.map_or(LStyle::Short, LStyle::from),
            wireframe: self.wireframe,
            stroke: Stroke::round(config.stroke_width),
            ..Monogram::default()
        }
    }
}
