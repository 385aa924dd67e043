//! Property-based tests for projection, primitives and layout.
//!
//! Run with: cargo test -p isomark-geometry -- proptest

use isomark_geometry::glyph::{layout_word, LetterParams, WORD};
use isomark_geometry::layout::Bounds;
use isomark_geometry::primitives::{Bar, Cube, Edge};
use isomark_geometry::projection::{iso, unproject_ground, Point2};
use proptest::prelude::*;

// =============================================================================
// Strategies
// =============================================================================

/// A non-degenerate bar: positive extents along x and z, positive depth.
fn arb_bar() -> impl Strategy<Value = Bar> {
    (
        -200.0..200.0f64,
        -200.0..200.0f64,
        0.5..150.0f64,
        0.5..150.0f64,
        0.5..50.0f64,
    )
        .prop_map(|(x0, z0, w, h, d)| Bar::new(x0, z0, x0 + w, z0 + h, d))
}

fn arb_params() -> impl Strategy<Value = LetterParams> {
    (20.0..120.0f64, 20.0..150.0f64, 0.1..0.45f64, 0.0..60.0f64, 1.0..40.0f64).prop_map(
        |(width, height, bar_ratio, gap, depth)| LetterParams {
            width,
            height,
            bar_width: width * bar_ratio,
            gap,
            depth,
        },
    )
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * (1.0 + a.abs().max(b.abs()))
}

// =============================================================================
// Property Tests: Projection
// =============================================================================

proptest! {
    /// Points on the ground plane survive a projection round trip.
    #[test]
    fn ground_plane_inverts(x in -1e4..1e4f64, y in -1e4..1e4f64) {
        let back = unproject_ground(iso(x, y, 0.0));
        prop_assert!(close(back.x, x), "x: {} vs {}", back.x, x);
        prop_assert!(close(back.y, y), "y: {} vs {}", back.y, y);
        prop_assert_eq!(back.z, 0.0);
    }

    /// Raising a point moves it straight up on screen by the same amount.
    #[test]
    fn height_is_vertical(x in -500.0..500.0f64, y in -500.0..500.0f64, z in -500.0..500.0f64) {
        let ground = iso(x, y, 0.0);
        let raised = iso(x, y, z);
        prop_assert!(close(raised.x, ground.x));
        prop_assert!(close(raised.y, ground.y - z));
    }
}

// =============================================================================
// Property Tests: Primitives
// =============================================================================

proptest! {
    /// Every bar has 3 faces and 9 edges, all built from its visible corners.
    #[test]
    fn bar_topology_is_fixed(bar in arb_bar()) {
        let geometry = bar.geometry();
        prop_assert_eq!(geometry.faces().len(), 3);
        prop_assert_eq!(geometry.wireframe.len(), 9);

        let corners = bar.corners().points();
        for edge in geometry.wireframe.iter() {
            prop_assert!(corners.contains(&edge.start));
            prop_assert!(corners.contains(&edge.end));
        }
        for face in geometry.faces() {
            prop_assert_eq!(face.len(), 4);
        }
    }

    /// A cube has a 6-point silhouette, 9 edges and stands twice its side tall.
    #[test]
    fn cube_topology_is_fixed(side in 0.1..1000.0f64) {
        let cube = Cube::new(side);
        prop_assert_eq!(cube.hexagon().len(), 6);
        prop_assert_eq!(cube.wireframe().len(), 9);

        let bounds = Bounds::from_points(cube.hexagon()).unwrap();
        prop_assert!(close(bounds.height(), 2.0 * side));
    }

    /// Insetting shortens an edge by exactly the two insets and keeps its direction.
    #[test]
    fn inset_shortens_edge(
        sx in -100.0..100.0f64, sy in -100.0..100.0f64,
        dx in 5.0..100.0f64, dy in -100.0..100.0f64,
        a in 0.0..2.0f64, b in 0.0..2.0f64,
    ) {
        let edge = Edge::new(Point2::new(sx, sy), Point2::new(sx + dx, sy + dy));
        let inset = edge.inset(a, b);
        prop_assert!(close(inset.length(), edge.length() - a - b));
        let before = (edge.end - edge.start).normalize();
        let after = (inset.end - inset.start).normalize();
        prop_assert!(before.abs_diff_eq(after, 1e-9));
    }
}

// =============================================================================
// Property Tests: Glyph layout
// =============================================================================

proptest! {
    /// Every letter's bar count is fixed and its restore list is non-empty.
    #[test]
    fn letters_are_well_formed(params in arb_params()) {
        let letters = layout_word(&WORD, &params);
        let counts: Vec<usize> = letters.iter().map(|l| l.bars.len()).collect();
        prop_assert_eq!(counts, vec![2, 4, 5, 2]);
        for letter in &letters {
            prop_assert!(!letter.restore.is_empty());
        }
    }

    /// Scaling the parameters scales the projected geometry about the origin.
    #[test]
    fn layout_scales_linearly(params in arb_params(), factor in 0.1..5.0f64) {
        let base = layout_word(&WORD, &params);
        let scaled = layout_word(&WORD, &params.scaled(factor));
        for (a, b) in base.iter().zip(&scaled) {
            for (bar_a, bar_b) in a.bars.iter().zip(&b.bars) {
                let pa = bar_a.corners().points();
                let pb = bar_b.corners().points();
                for (p, q) in pa.iter().zip(pb.iter()) {
                    prop_assert!((*p * factor).abs_diff_eq(*q, 1e-6));
                }
            }
        }
    }
}
