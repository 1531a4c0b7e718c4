//! # Desk Profile Generator
//!
//! Free-form outlines for one desk part set: top panel, front and side
//! aprons, front and side leg panels, and the foot. Like the chair set,
//! every vertex is a literal closed-form expression of the desk
//! dimensions and the material thickness. Mortise positions sit at the
//! 1/3 and 2/3 points of each mating edge.

use panelkit_core::{normalize, Params, Part, PartKind, Point, Polygon};

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

/// Desk top: a `w x dd` panel with a stepped tenon mortise pair on every
/// edge, keyed to the aprons and legs.
pub fn top_profile(p: &Params) -> Polygon {
    let d = p.thickness;
    let w = p.desk_w;
    let dd = p.desk_d;

    normalize(vec![
        pt(0.0, 0.0),
        pt(w / 3.0 - (d / 2.0 + d), 0.0),
        pt(w / 3.0 - (d / 2.0 + d), d),
        pt(w / 3.0 - d / 2.0, d),
        pt(w / 3.0 - d / 2.0, d * 2.0),
        pt(w / 3.0 + d / 2.0, d * 2.0),
        pt(w / 3.0 + d / 2.0, d),
        pt(w / 3.0 + d + d / 2.0, d),
        pt(w / 3.0 + d + d / 2.0, 0.0),
        pt(w * 2.0 / 3.0 - (d / 2.0 + d), 0.0),
        pt(w * 2.0 / 3.0 - (d / 2.0 + d), d),
        pt(w * 2.0 / 3.0 - d / 2.0, d),
        pt(w * 2.0 / 3.0 - d / 2.0, d * 2.0),
        pt(w * 2.0 / 3.0 + d / 2.0, d * 2.0),
        pt(w * 2.0 / 3.0 + d / 2.0, d),
        pt(w * 2.0 / 3.0 + d + d / 2.0, d),
        pt(w * 2.0 / 3.0 + d + d / 2.0, 0.0),
        pt(w, 0.0),
        pt(w, dd / 3.0 - (d / 2.0 + d)),
        pt(w - d, dd / 3.0 - (d / 2.0 + d)),
        pt(w - d, dd / 3.0 - d / 2.0),
        pt(w - d * 2.0, dd / 3.0 - d / 2.0),
        pt(w - d * 2.0, dd / 3.0 + d / 2.0),
        pt(w - d, dd / 3.0 + d / 2.0),
        pt(w - d, dd / 3.0 + (d / 2.0 + d)),
        pt(w, dd / 3.0 + (d / 2.0 + d)),
        pt(w, dd * 2.0 / 3.0 - (d / 2.0 + d)),
        pt(w - d, dd * 2.0 / 3.0 - (d / 2.0 + d)),
        pt(w - d, dd * 2.0 / 3.0 - d / 2.0),
        pt(w - d * 2.0, dd * 2.0 / 3.0 - d / 2.0),
        pt(w - d * 2.0, dd * 2.0 / 3.0 + d / 2.0),
        pt(w - d, dd * 2.0 / 3.0 + d / 2.0),
        pt(w - d, dd * 2.0 / 3.0 + (d / 2.0 + d)),
        pt(w, dd * 2.0 / 3.0 + (d / 2.0 + d)),
        pt(w, dd),
        pt(w * 2.0 / 3.0 + d + d / 2.0, dd),
        pt(w * 2.0 / 3.0 + d + d / 2.0, dd - d),
        pt(w * 2.0 / 3.0 + d / 2.0, dd - d),
        pt(w * 2.0 / 3.0 + d / 2.0, dd - d * 2.0),
        pt(w * 2.0 / 3.0 - d / 2.0, dd - d * 2.0),
        pt(w * 2.0 / 3.0 - d / 2.0, dd - d),
        pt(w * 2.0 / 3.0 - (d / 2.0 + d), dd - d),
        pt(w * 2.0 / 3.0 - (d / 2.0 + d), dd),
        pt(w / 3.0 + d + d / 2.0, dd),
        pt(w / 3.0 + d + d / 2.0, dd - d),
        pt(w / 3.0 + d / 2.0, dd - d),
        pt(w / 3.0 + d / 2.0, dd - d * 2.0),
        pt(w / 3.0 - d / 2.0, dd - d * 2.0),
        pt(w / 3.0 - d / 2.0, dd - d),
        pt(w / 3.0 - (d / 2.0 + d), dd - d),
        pt(w / 3.0 - (d / 2.0 + d), dd),
        pt(0.0, dd),
        pt(0.0, dd * 2.0 / 3.0 + (d / 2.0 + d)),
        pt(d, dd * 2.0 / 3.0 + (d / 2.0 + d)),
        pt(d, dd * 2.0 / 3.0 + d / 2.0),
        pt(d * 2.0, dd * 2.0 / 3.0 + d / 2.0),
        pt(d * 2.0, dd * 2.0 / 3.0 - d / 2.0),
        pt(d, dd * 2.0 / 3.0 - d / 2.0),
        pt(d, dd * 2.0 / 3.0 - (d / 2.0 + d)),
        pt(0.0, dd * 2.0 / 3.0 - (d / 2.0 + d)),
        pt(0.0, dd / 3.0 + (d / 2.0 + d)),
        pt(d, dd / 3.0 + (d / 2.0 + d)),
        pt(d, dd / 3.0 + d / 2.0),
        pt(d * 2.0, dd / 3.0 + d / 2.0),
        pt(d * 2.0, dd / 3.0 - d / 2.0),
        pt(d, dd / 3.0 - d / 2.0),
        pt(d, dd / 3.0 - (d / 2.0 + d)),
        pt(0.0, dd / 3.0 - (d / 2.0 + d)),
    ])
}

/// Front apron: spans the top's width, with half-depth slots for the leg
/// panels at the 1/3 and 2/3 points.
pub fn apron_front_profile(p: &Params) -> Polygon {
    let d = p.thickness;
    let w = p.desk_w;
    let a = p.desk_apron;

    normalize(vec![
        pt(0.0, 0.0),
        pt(d * 2.0, 0.0),
        pt(d * 2.0, d),
        pt(w / 3.0 - d - d / 2.0, d),
        pt(w / 3.0 - d - d / 2.0, 0.0),
        pt(w / 3.0 + d + d / 2.0, 0.0),
        pt(w / 3.0 + d + d / 2.0, d),
        pt(w * 2.0 / 3.0 - d - d / 2.0, d),
        pt(w * 2.0 / 3.0 - d - d / 2.0, 0.0),
        pt(w * 2.0 / 3.0 + d + d / 2.0, 0.0),
        pt(w * 2.0 / 3.0 + d + d / 2.0, d),
        pt(w - d * 2.0, d),
        pt(w - d * 2.0, 0.0),
        pt(w, 0.0),
        pt(w, d * 2.0),
        pt(w - d, d * 2.0),
        pt(w - d, a),
        pt(w * 2.0 / 3.0 + d / 2.0, a),
        pt(w * 2.0 / 3.0 + d / 2.0, a - a / 2.0),
        pt(w * 2.0 / 3.0 - d / 2.0, a - a / 2.0),
        pt(w * 2.0 / 3.0 - d / 2.0, a),
        pt(w / 3.0 + d / 2.0, a),
        pt(w / 3.0 + d / 2.0, a - a / 2.0),
        pt(w / 3.0 - d / 2.0, a - a / 2.0),
        pt(w / 3.0 - d / 2.0, a),
        pt(d, a),
        pt(d, d * 2.0),
        pt(0.0, d * 2.0),
    ])
}

/// Side apron: spans the top's depth, with half-width slot mouths on its
/// long edge at the 1/3 and 2/3 points.
pub fn apron_side_profile(p: &Params) -> Polygon {
    let d = p.thickness;
    let dd = p.desk_d;
    let a = p.desk_apron;

    normalize(vec![
        pt(0.0, 0.0),
        pt(d * 2.0, 0.0),
        pt(d * 2.0, d),
        pt(a, d),
        pt(a, dd - d),
        pt(d * 2.0, dd - d),
        pt(d * 2.0, dd),
        pt(0.0, dd),
        pt(0.0, dd - d * 2.0),
        pt(d, dd - d * 2.0),
        pt(d, dd * 2.0 / 3.0 + d + d / 2.0),
        pt(0.0, dd * 2.0 / 3.0 + d + d / 2.0),
        pt(0.0, dd * 2.0 / 3.0 + d / 2.0),
        pt(a / 2.0, dd * 2.0 / 3.0 + d / 2.0),
        pt(a / 2.0, dd * 2.0 / 3.0 - d / 2.0),
        pt(0.0, dd * 2.0 / 3.0 - d / 2.0),
        pt(0.0, dd * 2.0 / 3.0 - d - d / 2.0),
        pt(d, dd * 2.0 / 3.0 - d - d / 2.0),
        pt(d, dd / 3.0 + d + d / 2.0),
        pt(0.0, dd / 3.0 + d + d / 2.0),
        pt(0.0, dd / 3.0 + d / 2.0),
        pt(a / 2.0, dd / 3.0 + d / 2.0),
        pt(a / 2.0, dd / 3.0 - d / 2.0),
        pt(0.0, dd / 3.0 - d / 2.0),
        pt(0.0, dd / 3.0 - d - d / 2.0),
        pt(d, dd / 3.0 - d - d / 2.0),
        pt(d, d * 2.0),
        pt(0.0, d * 2.0),
    ])
}

/// Shared leg-panel outline: top tenons at the 1/3 and 2/3 points, apron
/// shoulder slots at both ends, and two splayed feet.
fn leg_profile(
    span: f64,
    leg_h: f64,
    apron: f64,
    foot_w: f64,
    splay_right: f64,
    splay_left: f64,
    d: f64,
) -> Polygon {
    let s = span;
    let h = leg_h;
    let a = apron;
    let mid = a + (h - a) / 2.0;

    normalize(vec![
        pt(0.0, d),
        pt(s / 3.0 - d - d / 2.0, d),
        pt(s / 3.0 - d - d / 2.0, 0.0),
        pt(s / 3.0 - d / 2.0, 0.0),
        pt(s / 3.0 - d / 2.0, d * 2.0),
        pt(s / 3.0 + d / 2.0, d * 2.0),
        pt(s / 3.0 + d / 2.0, 0.0),
        pt(s / 3.0 + d + d / 2.0, 0.0),
        pt(s / 3.0 + d + d / 2.0, d),
        pt(s * 2.0 / 3.0 - d - d / 2.0, d),
        pt(s * 2.0 / 3.0 - d - d / 2.0, 0.0),
        pt(s * 2.0 / 3.0 - d / 2.0, 0.0),
        pt(s * 2.0 / 3.0 - d / 2.0, d * 2.0),
        pt(s * 2.0 / 3.0 + d / 2.0, d * 2.0),
        pt(s * 2.0 / 3.0 + d / 2.0, 0.0),
        pt(s * 2.0 / 3.0 + d + d / 2.0, 0.0),
        pt(s * 2.0 / 3.0 + d + d / 2.0, d),
        pt(s - d, d),
        pt(s - d, a),
        pt(s, a),
        pt(s, mid),
        pt(s - d, mid),
        pt(s - d, h),
        pt(s - d - foot_w / 2.0, h),
        pt(s - d - foot_w / 2.0, h - d),
        pt(s - d - foot_w, h - d),
        pt(s - d - splay_right, a),
        pt(splay_left, a),
        pt(foot_w, h - d),
        pt(foot_w / 2.0, h - d),
        pt(foot_w / 2.0, h),
        pt(0.0, h),
        pt(0.0, mid),
        pt(d, mid),
        pt(d, a),
        pt(0.0, a),
    ])
}

/// Front leg panel, spanning the desk width.
pub fn leg_front_profile(p: &Params) -> Polygon {
    leg_profile(
        p.desk_w,
        p.desk_leg_h,
        p.desk_apron,
        p.desk_leg_w,
        p.desk_leg_right1,
        p.desk_leg_left1,
        p.thickness,
    )
}

/// Side leg panel, spanning the desk depth.
pub fn leg_side_profile(p: &Params) -> Polygon {
    leg_profile(
        p.desk_d,
        p.desk_leg_h,
        p.desk_apron,
        p.desk_leg_w,
        p.desk_leg_right2,
        p.desk_leg_left2,
        p.thickness,
    )
}

/// Foot: the small stepped wedge capping a leg.
pub fn foot_profile(p: &Params) -> Polygon {
    let d = p.thickness;
    let f = p.desk_leg_w;

    normalize(vec![
        pt(f / 2.0 - d, 0.0),
        pt((f + f / 2.0) / 2.0, 0.0),
        pt(f + f / 2.0 - d, (f + f / 2.0) / 2.0),
        pt(f + f / 2.0 - d, f + d),
        pt(f - d, f + d),
        pt(f - d, f),
        pt(f / 2.0, f),
        pt(f / 2.0, f / 2.0),
        pt(f / 2.0 - d, f / 2.0),
    ])
}

/// Builds the six-part desk set for one instance index (1-based).
pub fn desk_set(index: u32, p: &Params) -> Vec<Part> {
    let profiles = [
        ("TOP", top_profile(p)),
        ("APRON-FRONT", apron_front_profile(p)),
        ("APRON-SIDE", apron_side_profile(p)),
        ("LEG-FRONT", leg_front_profile(p)),
        ("LEG-SIDE", leg_side_profile(p)),
        ("FOOT", foot_profile(p)),
    ];
    profiles
        .into_iter()
        .map(|(name, outline)| {
            Part::new(
                PartKind::DeskPanel,
                format!("DESK{index}-{name}"),
                outline,
                vec![],
            )
        })
        .collect()
}
