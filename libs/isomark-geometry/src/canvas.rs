//! # Canvas
//!
//! The write-only, order-sensitive drawing surface the compositor paints
//! onto. Later calls paint over earlier ones.
//!
//! Geometry never carries concrete colors: every call names a [`Paint`]
//! role and the backend resolves it (see the SVG emitter's themes). Swapping
//! themes therefore cannot move a single point.
//!
//! Implementations in this crate:
//! - [`Scene`]: records the calls as [`DrawCommand`]s
//! - [`Shifted`]: forwards to another canvas with a translation applied

use glam::DVec2;

use crate::projection::Point2;

/// Role of a fill or stroke, resolved to a color by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Paint {
    /// Letter fronts, L faces and all outlines.
    Foreground,
    /// Cube silhouette and the occluding left/top faces of bars.
    Background,
    /// Decorative color blocks on the cube faces.
    Accent,
}

/// Shape drawn at the ends of a stroked line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LineCap {
    Butt,
    #[default]
    Round,
    Square,
}

impl LineCap {
    /// SVG `stroke-linecap` keyword.
    pub fn as_str(self) -> &'static str {
        match self {
            LineCap::Butt => "butt",
            LineCap::Round => "round",
            LineCap::Square => "square",
        }
    }
}

/// Stroke settings for outline segments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub width: f64,
    pub cap: LineCap,
}

impl Stroke {
    /// A round-capped stroke of the given width.
    pub fn round(width: f64) -> Self {
        Self {
            width,
            cap: LineCap::Round,
        }
    }
}

impl Default for Stroke {
    fn default() -> Self {
        Self::round(config::constants::STROKE_WIDTH)
    }
}

/// A drawing surface.
pub trait Canvas {
    /// Fills a closed polygon without an outline.
    fn fill_polygon(&mut self, points: &[Point2], paint: Paint);

    /// Strokes a single segment.
    fn stroke_line(&mut self, start: Point2, end: Point2, paint: Paint, stroke: Stroke);
}

impl<C: Canvas + ?Sized> Canvas for &mut C {
    fn fill_polygon(&mut self, points: &[Point2], paint: Paint) {
        (**self).fill_polygon(points, paint);
    }

    fn stroke_line(&mut self, start: Point2, end: Point2, paint: Paint, stroke: Stroke) {
        (**self).stroke_line(start, end, paint, stroke);
    }
}

/// One recorded canvas call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Polygon {
        points: Vec<Point2>,
        paint: Paint,
    },
    Line {
        start: Point2,
        end: Point2,
        paint: Paint,
        stroke: Stroke,
    },
}

impl DrawCommand {
    pub fn paint(&self) -> Paint {
        match self {
            DrawCommand::Polygon { paint, .. } | DrawCommand::Line { paint, .. } => *paint,
        }
    }

    /// Points touched by this command, in emission order.
    pub fn points(&self) -> Vec<Point2> {
        match self {
            DrawCommand::Polygon { points, .. } => points.clone(),
            DrawCommand::Line { start, end, .. } => vec![*start, *end],
        }
    }
}

/// An ordered draw list with a canvas size.
///
/// # Example
///
/// ```rust
/// use isomark_geometry::canvas::{Canvas, Paint, Scene, Stroke};
/// use glam::DVec2;
///
/// let mut scene = Scene::new(10.0, 10.0);
/// scene.fill_polygon(&[DVec2::ZERO, DVec2::X, DVec2::Y], Paint::Foreground);
/// scene.stroke_line(DVec2::ZERO, DVec2::X, Paint::Foreground, Stroke::round(2.0));
/// assert_eq!(scene.polygon_count(), 1);
/// assert_eq!(scene.line_count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Scene {
    pub width: f64,
    pub height: f64,
    commands: Vec<DrawCommand>,
}

impl Scene {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn polygon_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Polygon { .. }))
            .count()
    }

    pub fn line_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { .. }))
            .count()
    }

    /// Replays the recorded calls, in order, onto another canvas.
    pub fn replay<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        for command in &self.commands {
            match command {
                DrawCommand::Polygon { points, paint } => canvas.fill_polygon(points, *paint),
                DrawCommand::Line {
                    start,
                    end,
                    paint,
                    stroke,
                } => canvas.stroke_line(*start, *end, *paint, *stroke),
            }
        }
    }
}

impl Canvas for Scene {
    fn fill_polygon(&mut self, points: &[Point2], paint: Paint) {
        self.commands.push(DrawCommand::Polygon {
            points: points.to_vec(),
            paint,
        });
    }

    fn stroke_line(&mut self, start: Point2, end: Point2, paint: Paint, stroke: Stroke) {
        self.commands.push(DrawCommand::Line {
            start,
            end,
            paint,
            stroke,
        });
    }
}

/// Forwards every call to `inner` with all points translated by `offset`.
pub struct Shifted<'a, C: Canvas + ?Sized> {
    inner: &'a mut C,
    offset: DVec2,
}

impl<'a, C: Canvas + ?Sized> Shifted<'a, C> {
    pub fn new(inner: &'a mut C, offset: DVec2) -> Self {
        Self { inner, offset }
    }
}

impl<C: Canvas + ?Sized> Canvas for Shifted<'_, C> {
    fn fill_polygon(&mut self, points: &[Point2], paint: Paint) {
        let shifted: Vec<Point2> = points.iter().map(|p| *p + self.offset).collect();
        self.inner.fill_polygon(&shifted, paint);
    }

    fn stroke_line(&mut self, start: Point2, end: Point2, paint: Paint, stroke: Stroke) {
        self.inner
            .stroke_line(start + self.offset, end + self.offset, paint, stroke);
    }
}
