//! # Wireframe
//!
//! The nine visible edges of an axis-aligned box seen with one corner
//! toward the viewer: a six-edge silhouette plus three internal edges
//! meeting at the front-top-left corner.
//!
//! Edge order is fixed and shared by cubes and bars. Code that needs a
//! particular edge asks for it by [`EdgeRole`]; the role-to-slot mapping
//! below is the only place that knows the order.

use std::ops::Index;

use config::constants::approx_zero;

use crate::projection::Point2;

/// Number of edges in every wireframe.
pub const WIREFRAME_EDGES: usize = 9;

/// Named position of an edge in a box wireframe.
///
/// Corner names: `f`/`b` front/back (y = 0 / y = depth), `t`/`b` top/bottom,
/// `l`/`r` left/right (x = x0 / x = x1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeRole {
    /// Silhouette, back-top-right to front-top-right.
    OuterTopRight,
    /// Silhouette, right side of the front face (front-top-right to front-bottom-right).
    OuterFrontRight,
    /// Silhouette, bottom of the front face (front-bottom-right to front-bottom-left).
    OuterFrontBottom,
    /// Silhouette, bottom of the left face (front-bottom-left to back-bottom-left).
    OuterLeftBottom,
    /// Silhouette, back side of the left face (back-bottom-left to back-top-left).
    OuterLeftBack,
    /// Silhouette, back-top-left to back-top-right.
    OuterTopBack,
    /// Internal, front-top-left down to front-bottom-left.
    InnerVertical,
    /// Internal, front-top-left to front-top-right.
    InnerFrontTop,
    /// Internal, front-top-left to back-top-left.
    InnerLeftTop,
}

impl EdgeRole {
    /// All roles in wireframe order.
    pub const ALL: [EdgeRole; WIREFRAME_EDGES] = [
        EdgeRole::OuterTopRight,
        EdgeRole::OuterFrontRight,
        EdgeRole::OuterFrontBottom,
        EdgeRole::OuterLeftBottom,
        EdgeRole::OuterLeftBack,
        EdgeRole::OuterTopBack,
        EdgeRole::InnerVertical,
        EdgeRole::InnerFrontTop,
        EdgeRole::InnerLeftTop,
    ];

    /// Slot of this role in a wireframe's edge list.
    pub const fn index(self) -> usize {
        match self {
            EdgeRole::OuterTopRight => 0,
            EdgeRole::OuterFrontRight => 1,
            EdgeRole::OuterFrontBottom => 2,
            EdgeRole::OuterLeftBottom => 3,
            EdgeRole::OuterLeftBack => 4,
            EdgeRole::OuterTopBack => 5,
            EdgeRole::InnerVertical => 6,
            EdgeRole::InnerFrontTop => 7,
            EdgeRole::InnerLeftTop => 8,
        }
    }

    /// True for the six silhouette edges.
    pub const fn is_outline(self) -> bool {
        self.index() < 6
    }
}

/// A line segment with a fixed start and end.
///
/// Rendering ignores direction, but insets are measured from each end so
/// the orientation is kept.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub start: Point2,
    pub end: Point2,
}

impl Edge {
    pub fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }

    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }

    /// Shortens the edge by `start_inset` at the start and `end_inset` at
    /// the end, moving along the edge's own direction.
    ///
    /// Edges shorter than `EPSILON` have no direction and are returned
    /// unchanged.
    ///
    /// # Examples
    /// ```
    /// use isomark_geometry::primitives::Edge;
    /// use glam::DVec2;
    ///
    /// let edge = Edge::new(DVec2::new(0.0, 0.0), DVec2::new(10.0, 0.0));
    /// let inset = edge.inset(2.0, 3.0);
    /// assert_eq!(inset.start, DVec2::new(2.0, 0.0));
    /// assert_eq!(inset.end, DVec2::new(7.0, 0.0));
    /// ```
    pub fn inset(&self, start_inset: f64, end_inset: f64) -> Edge {
        if start_inset == 0.0 && end_inset == 0.0 {
            return *self;
        }
        let delta = self.end - self.start;
        let length = delta.length();
        if approx_zero(length) {
            return *self;
        }
        let dir = delta / length;
        Edge {
            start: self.start + dir * start_inset,
            end: self.end - dir * end_inset,
        }
    }
}

/// The nine visible edges of a projected box, in [`EdgeRole`] order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wireframe([Edge; WIREFRAME_EDGES]);

impl Wireframe {
    pub(crate) fn from_edges(edges: [Edge; WIREFRAME_EDGES]) -> Self {
        Self(edges)
    }

    pub fn edge(&self, role: EdgeRole) -> Edge {
        self.0[role.index()]
    }

    pub fn edges(&self) -> &[Edge] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &Edge> {
        self.0.iter()
    }

    /// Always [`WIREFRAME_EDGES`].
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

impl Index<EdgeRole> for Wireframe {
    type Output = Edge;

    fn index(&self, role: EdgeRole) -> &Edge {
        &self.0[role.index()]
    }
}
