//! # Emission
//!
//! Renders assets into documents and writes them to disk. Every file is
//! rendered completely in memory before anything is written.

use std::path::{Path, PathBuf};

use isomark_geometry::Asset;
use svg::Document;
use tracing::{debug, info};

use crate::document::SvgCanvas;
use crate::error::EmitError;
use crate::theme::Theme;

/// Paints `asset` into a fresh document using `theme`.
pub fn render<A: Asset>(asset: &A, theme: &Theme) -> Document {
    let size = asset.size();
    let mut canvas = SvgCanvas::new(size.x, size.y, theme);
    asset.draw(&mut canvas);
    debug!(
        asset = asset.name(),
        theme = %theme.name,
        polygons = canvas.polygon_count(),
        lines = canvas.line_count(),
        "Rendered asset"
    );
    canvas.into_document()
}

/// Serialized SVG text of `asset` in `theme`.
pub fn render_to_string<A: Asset>(asset: &A, theme: &Theme) -> String {
    render(asset, theme).to_string()
}

/// Output file name: `<name>-<theme>.svg` for themed assets, `<name>.svg`
/// otherwise.
///
/// # Examples
/// ```
/// use isomark_geometry::{Icon, Wordmark};
/// use isomark_svg::{file_name, Theme};
///
/// assert_eq!(file_name(&Icon::default(), &Theme::dark()), "icon-dark.svg");
/// assert_eq!(file_name(&Wordmark::default(), &Theme::dark()), "wordmark.svg");
/// ```
pub fn file_name<A: Asset>(asset: &A, theme: &Theme) -> String {
    if asset.themed() {
        format!("{}-{}.svg", asset.name(), theme.name)
    } else {
        format!("{}.svg", asset.name())
    }
}

/// Renders `asset` and writes it to `path`.
///
/// I/O failures are returned as [`EmitError::Io`] with the original error.
pub fn write_asset<A: Asset>(asset: &A, theme: &Theme, path: &Path) -> Result<(), EmitError> {
    let document = render(asset, theme);
    svg::save(path, &document)?;

    let size = asset.size();
    info!(
        path = %path.display(),
        size = format!("{:.0}x{:.0}", size.x, size.y),
        "Saved asset"
    );
    Ok(())
}

/// Themes `asset` is written in: all of them for themed assets, otherwise
/// only the first.
///
/// # Examples
/// ```
/// use isomark_geometry::{Icon, Monogram};
/// use isomark_svg::{variants, Theme};
///
/// let themes = [Theme::light(), Theme::dark()];
/// assert_eq!(variants(&Icon::default(), &themes).len(), 2);
/// assert_eq!(variants(&Monogram::default(), &themes), &themes[..1]);
/// ```
pub fn variants<'t, A: Asset>(asset: &A, themes: &'t [Theme]) -> &'t [Theme] {
    if asset.themed() {
        themes
    } else {
        &themes[..themes.len().min(1)]
    }
}

/// Writes every variant of `asset` into `out_dir` and returns the paths.
pub fn emit<A: Asset>(asset: &A, themes: &[Theme], out_dir: &Path) -> Result<Vec<PathBuf>, EmitError> {
    let themes = variants(asset, themes);
    let mut written = Vec::with_capacity(themes.len());
    for theme in themes {
        let path = out_dir.join(file_name(asset, theme));
        write_asset(asset, theme, &path)?;
        written.push(path);
    }
    Ok(written)
}
