//! # SVG Canvas
//!
//! [`Canvas`] implementation backed by an `svg` crate [`Document`]. Each
//! call appends one element, so document order is paint order.

use isomark_geometry::{Canvas, Paint, Point2, Stroke};
use svg::node::element::{Line, Polygon};
use svg::{Document, Node};

use crate::theme::Theme;

/// Formats a coordinate with at most three decimals and no trailing zeros.
///
/// Every number written to a document passes through here, so written
/// geometry is exact only to 0.001 units.
pub(crate) fn number(value: f64) -> String {
    let fixed = format!("{value:.3}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Paints draw calls into an SVG document, resolving paints with a theme.
///
/// # Examples
/// ```
/// use isomark_geometry::{Canvas, Paint, Point2};
/// use isomark_svg::{SvgCanvas, Theme};
///
/// let theme = Theme::light();
/// let mut canvas = SvgCanvas::new(10.0, 10.0, &theme);
/// canvas.fill_polygon(&[Point2::ZERO, Point2::X, Point2::Y], Paint::Foreground);
/// let svg = canvas.into_document().to_string();
/// assert!(svg.contains(r#"points="0,0 1,0 0,1""#));
/// ```
pub struct SvgCanvas<'t> {
    document: Document,
    theme: &'t Theme,
    polygons: usize,
    lines: usize,
}

impl<'t> SvgCanvas<'t> {
    /// An empty document of the given size, with a matching view box.
    pub fn new(width: f64, height: f64, theme: &'t Theme) -> Self {
        let (w, h) = (number(width), number(height));
        let document = Document::new()
            .set("width", w.clone())
            .set("height", h.clone())
            .set("viewBox", format!("0 0 {w} {h}"));
        Self {
            document,
            theme,
            polygons: 0,
            lines: 0,
        }
    }

    pub fn polygon_count(&self) -> usize {
        self.polygons
    }

    pub fn line_count(&self) -> usize {
        self.lines
    }

    pub fn into_document(self) -> Document {
        self.document
    }
}

impl Canvas for SvgCanvas<'_> {
    fn fill_polygon(&mut self, points: &[Point2], paint: Paint) {
        let points = points
            .iter()
            .map(|p| format!("{},{}", number(p.x), number(p.y)))
            .collect::<Vec<_>>()
            .join(" ");
        let polygon = Polygon::new()
            .set("points", points)
            .set("fill", self.theme.resolve(paint))
            .set("stroke", "none");
        self.document.append(polygon);
        self.polygons += 1;
    }

    fn stroke_line(&mut self, start: Point2, end: Point2, paint: Paint, stroke: Stroke) {
        let line = Line::new()
            .set("x1", number(start.x))
            .set("y1", number(start.y))
            .set("x2", number(end.x))
            .set("y2", number(end.y))
            .set("stroke", self.theme.resolve(paint))
            .set("stroke-width", number(stroke.width))
            .set("stroke-linecap", stroke.cap.as_str());
        self.document.append(line);
        self.lines += 1;
    }
}
