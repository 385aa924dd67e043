//! Tests for the occlusion compositor.
//!
//! The compositor is checked through the recorded draw list: counts per
//! pass, the paint sequence of each bar, and the geometry of restored edges.

use super::*;
use crate::canvas::{DrawCommand, Scene};
use crate::glyph::{Glyph, LetterParams};
use crate::primitives::EdgeRole;
use crate::projection::Point2;
use approx::assert_relative_eq;

fn record(letter: &Letter, stroke_width: f64) -> Scene {
    let mut scene = Scene::new(0.0, 0.0);
    Compositor::new(Stroke::round(stroke_width)).composite_letter(&mut scene, letter);
    scene
}

/// Fills per pass for n bars: each bar paints 2 occluders, its own front,
/// and refills every earlier front.
fn fills_per_pass(n: usize) -> usize {
    (0..n).map(|i| 3 + i).sum()
}

#[test]
fn test_command_counts_per_letter() {
    let p = LetterParams::default();
    for glyph in Glyph::ALL {
        let letter = glyph.build(0.0, 0.0, &p);
        let scene = record(&letter, 6.0);
        let n = letter.bars.len();
        assert_eq!(scene.polygon_count(), 2 * fills_per_pass(n), "{glyph:?}");
        assert_eq!(scene.line_count(), 9 * n + letter.restore.len(), "{glyph:?}");
    }
}

/// First bar: background left and top, foreground front, then its 9 edges.
#[test]
fn test_first_bar_sequence() {
    let letter = Glyph::L.build(0.0, 0.0, &LetterParams::default());
    let scene = record(&letter, 6.0);
    let cmds = scene.commands();
    let geometry = letter.bars[0].geometry();

    assert_eq!(
        cmds[0],
        DrawCommand::Polygon {
            points: geometry.left.points().to_vec(),
            paint: Paint::Background
        }
    );
    assert_eq!(cmds[1].paint(), Paint::Background);
    assert_eq!(
        cmds[2],
        DrawCommand::Polygon {
            points: geometry.front.points().to_vec(),
            paint: Paint::Foreground
        }
    );
    for (i, edge) in geometry.wireframe.iter().enumerate() {
        match &cmds[3 + i] {
            DrawCommand::Line { start, end, paint, .. } => {
                assert_eq!((*start, *end), (edge.start, edge.end));
                assert_eq!(*paint, Paint::Foreground);
            }
            other => panic!("expected edge, got {other:?}"),
        }
    }
}

/// The second bar refills the first bar's front before its own.
#[test]
fn test_earlier_fronts_are_refilled() {
    let letter = Glyph::L.build(0.0, 0.0, &LetterParams::default());
    let scene = record(&letter, 6.0);
    let cmds = scene.commands();
    let first_front = letter.bars[0].geometry().front;
    let second_front = letter.bars[1].geometry().front;

    // 3 fills + 9 edges for bar 0, then 2 occluders of bar 1.
    assert_eq!(cmds[14].points(), first_front.points().to_vec());
    assert_eq!(cmds[14].paint(), Paint::Foreground);
    assert_eq!(cmds[15].points(), second_front.points().to_vec());
}

/// No strokes between the end of the paint pass and the restore pass.
#[test]
fn test_cleanup_pass_only_fills() {
    let letter = Glyph::S.build(0.0, 0.0, &LetterParams::default());
    let scene = record(&letter, 6.0);
    let n = letter.bars.len();
    let paint_pass = fills_per_pass(n) + 9 * n;
    let cleanup = &scene.commands()[paint_pass..paint_pass + fills_per_pass(n)];
    assert!(cleanup
        .iter()
        .all(|c| matches!(c, DrawCommand::Polygon { .. })));
}

/// The L restores the stem's right front edge, backed off 0.75 strokes
/// from the top.
#[test]
fn test_restored_edge_is_inset() {
    let letter = Glyph::L.build(0.0, 0.0, &LetterParams::default());
    let scene = record(&letter, 6.0);
    let stem_edge = letter.bars[1].geometry().wireframe[EdgeRole::OuterFrontRight];

    match scene.commands().last() {
        Some(DrawCommand::Line { start, end, stroke, .. }) => {
            assert_relative_eq!(start.distance(stem_edge.start), 4.5, epsilon = 1e-9);
            assert_eq!(*end, stem_edge.end);
            assert_eq!(stroke.width, 6.0);
        }
        other => panic!("expected restored edge, got {other:?}"),
    }
}

/// Insets scale with the stroke width.
#[test]
fn test_inset_tracks_stroke_width() {
    let letter = Glyph::A.build(0.0, 0.0, &LetterParams::default());
    let scene = record(&letter, 2.0);
    let edge = letter.bars[3].geometry().wireframe[EdgeRole::OuterFrontRight];
    let restored = scene.commands().last().unwrap().points();
    assert_relative_eq!(restored[0].distance(edge.start), 1.5, epsilon = 1e-9);
    assert_relative_eq!(restored[1].distance(edge.end), 1.5, epsilon = 1e-9);
}

/// The T restores four full edges of its top bar.
#[test]
fn test_t_restores_full_edges() {
    let letter = Glyph::T.build(0.0, 0.0, &LetterParams::default());
    let scene = record(&letter, 6.0);
    let wire = letter.bars[1].geometry().wireframe;
    let tail = &scene.commands()[scene.len() - 4..];
    for (cmd, rule) in tail.iter().zip(&letter.restore) {
        let edge = wire[rule.edge];
        assert_eq!(cmd.points(), vec![edge.start, edge.end]);
    }
}

#[test]
fn test_empty_group_draws_nothing() {
    let mut scene = Scene::new(0.0, 0.0);
    let rules = [RestoreRule::full(EdgeRole::OuterTopBack)];
    Compositor::default().composite_bars(&mut scene, &[], &rules);
    assert!(scene.is_empty());
}

#[test]
fn test_layers_paint_in_order() {
    let face = Face::from([Point2::ZERO, Point2::X, Point2::Y]);
    let edge = Edge::new(Point2::ZERO, Point2::ONE);
    let layers = [
        Layer::fill([face.clone()], Paint::Background),
        Layer::fill([face.clone(), face], Paint::Accent),
        Layer::outline([edge], Paint::Foreground),
    ];
    let mut scene = Scene::new(1.0, 1.0);
    Compositor::new(Stroke::round(3.0)).composite_layers(&mut scene, &layers);

    let paints: Vec<Paint> = scene.commands().iter().map(DrawCommand::paint).collect();
    assert_eq!(
        paints,
        vec![Paint::Background, Paint::Accent, Paint::Accent, Paint::Foreground]
    );
    match &scene.commands()[3] {
        DrawCommand::Line { stroke, .. } => assert_eq!(stroke.width, 3.0),
        other => panic!("expected line, got {other:?}"),
    }
}
