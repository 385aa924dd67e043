//! Bar layouts of the individual letters.
//!
//! Bar order is load-bearing: a later bar's left and top faces hide the
//! strokes of earlier bars. The restore rules name edges of the final bar.

use super::{LetterParams, RestoreRule};
use crate::primitives::{Bar, EdgeRole};

type Layout = (Vec<Bar>, Vec<RestoreRule>);

pub(super) fn letter_l(x: f64, z: f64, p: &LetterParams) -> Layout {
    let (w, bw, d) = (p.width, p.bar_width, p.depth);
    let bars = vec![
        // bottom
        Bar::new(x, z, x + w, z + bw, d),
        // stem, sitting on the bottom bar
        Bar::new(x, z + bw, x + bw, z + p.l_stem_height(), d),
    ];
    // The stem's lower end meets the bottom bar's top face.
    (bars, vec![RestoreRule::inset_start(EdgeRole::OuterFrontRight)])
}

pub(super) fn letter_a(x: f64, z: f64, p: &LetterParams) -> Layout {
    let (w, h, bw, d) = (p.width, p.height, p.bar_width, p.depth);
    let mid = z + h / 2.0 - bw / 2.0;
    let bars = vec![
        // right pillar
        Bar::new(x + w - bw, z, x + w, z + h, d),
        // top
        Bar::new(x, z + h - bw, x + w, z + h, d),
        // middle
        Bar::new(x, mid, x + w, mid + bw, d),
        // left pillar
        Bar::new(x, z, x + bw, z + h, d),
    ];
    (bars, vec![RestoreRule::inset_both(EdgeRole::OuterFrontRight)])
}

pub(super) fn letter_s(x: f64, z: f64, p: &LetterParams) -> Layout {
    let (w, h, bw, d) = (p.width, p.height, p.bar_width, p.depth);
    let mid = z + h / 2.0 - bw / 2.0;
    let bars = vec![
        // bottom
        Bar::new(x, z, x + w, z + bw, d),
        // lower right block
        Bar::new(x + w - bw, z + bw, x + w, mid, d),
        // middle
        Bar::new(x, mid, x + w, mid + bw, d),
        // upper left block
        Bar::new(x, mid + bw, x + bw, z + h - bw, d),
        // top
        Bar::new(x, z + h - bw, x + w, z + h, d),
    ];
    (bars, vec![RestoreRule::inset_both(EdgeRole::OuterFrontBottom)])
}

pub(super) fn letter_t(x: f64, z: f64, p: &LetterParams) -> Layout {
    let (w, h, bw, d) = (p.width, p.height, p.bar_width, p.depth);
    let cx = x + w / 2.0 - bw / 2.0;
    let bars = vec![
        // stem, dropped to the common baseline
        Bar::new(cx, z - p.t_stem_drop(), cx + bw, z + h - bw, d),
        // top
        Bar::new(x, z + h - bw, x + w, z + h, d),
    ];
    let restore = vec![
        RestoreRule::full(EdgeRole::OuterFrontRight),
        RestoreRule::full(EdgeRole::OuterFrontBottom),
        RestoreRule::full(EdgeRole::InnerVertical),
        RestoreRule::full(EdgeRole::InnerFrontTop),
    ];
    (bars, restore)
}
