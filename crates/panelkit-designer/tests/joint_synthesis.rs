// Integration tests for finger-joint edge synthesis and dogbone reliefs

use panelkit_core::Point;
use panelkit_designer::joints::{
    finger_edge, finger_joint_rect, finger_reliefs, EdgeJoints, EdgeSpec, JointType,
    SPAN_MAX_FACTOR, SPAN_MIN_FACTOR,
};
use proptest::prelude::*;

fn horizontal_edge(length: f64, joint: JointType) -> EdgeSpec {
    EdgeSpec {
        start: Point::new(0.0, 0.0),
        tangent: Point::new(1.0, 0.0),
        normal: Point::new(0.0, -1.0),
        length,
        joint,
    }
}

fn run_edge(edge: &EdgeSpec, fingers: u32, depth: f64, clearance: f64) -> Vec<Point> {
    let mut path = vec![edge.start];
    finger_edge(&mut path, edge, fingers, depth, clearance);
    path
}

#[test]
fn male_edge_has_n_active_spans_and_n_plus_one_boundaries() {
    let n = 3;
    let path = run_edge(&horizontal_edge(90.0, JointType::Male), n, 15.0, 0.0);
    // Start vertex + 5 per active segment + 1 per inactive segment.
    assert_eq!(path.len() as u32, 1 + 5 * n + (n + 1));
    // Each active span contributes exactly two offset corner vertices.
    let offset_vertices = path.iter().filter(|p| p.y == -15.0).count() as u32;
    assert_eq!(offset_vertices, 2 * n);
    // With zero clearance every remaining vertex, start aside, sits on a
    // segment boundary on the edge line.
    let seg = 90.0 / 7.0;
    let on_boundary = |p: &&Point| {
        let k = p.x / seg;
        p.y == 0.0 && (k - k.round()).abs() < 1e-9 && p.x > 0.0
    };
    let boundary = path.iter().filter(on_boundary).count() as u32;
    assert_eq!(boundary, path.len() as u32 - 1 - 2 * n);
}

#[test]
fn female_edge_recedes_inward() {
    let path = run_edge(&horizontal_edge(90.0, JointType::Female), 3, 15.0, 0.0);
    // Female offset goes against the outward normal: into the panel (+y).
    assert!(path.iter().any(|p| p.y == 15.0));
    assert!(path.iter().all(|p| p.y >= 0.0));
}

#[test]
fn male_tabs_are_narrower_and_female_slots_wider_by_clearance() {
    let seg = 90.0 / 7.0;
    let clearance = 0.5;

    let male = run_edge(&horizontal_edge(90.0, JointType::Male), 3, 15.0, clearance);
    let female = run_edge(&horizontal_edge(90.0, JointType::Female), 3, 15.0, clearance);

    // First active span: vertices 3 and 4 are the offset corners.
    let male_span = male[4].x - male[3].x;
    let female_span = female[4].x - female[3].x;
    assert!((male_span - (seg - clearance)).abs() < 1e-9);
    assert!((female_span - (seg + clearance)).abs() < 1e-9);
    // Both spans centered in their segment: trims match on each side.
    assert!(((male[3].x - seg) - (2.0 * seg - male[4].x)).abs() < 1e-9);
}

proptest! {
    #[test]
    fn active_span_is_always_clamped(clearance in -500.0f64..500.0, length in 30.0f64..2000.0, fingers in 1u32..9) {
        let seg = length / (fingers * 2 + 1) as f64;
        let path = run_edge(&horizontal_edge(length, JointType::Male), fingers, 10.0, clearance);
        // Measure every active span from its two offset corner vertices.
        let corners: Vec<&Point> = path.iter().filter(|p| p.y == -10.0).collect();
        prop_assert_eq!(corners.len() as u32, fingers * 2);
        for pair in corners.chunks(2) {
            let span = pair[1].x - pair[0].x;
            prop_assert!(span >= seg * SPAN_MIN_FACTOR - 1e-9);
            prop_assert!(span <= seg * SPAN_MAX_FACTOR + 1e-9);
        }
    }
}

#[test]
fn relief_count_is_two_per_active_notch() {
    let joints = EdgeJoints {
        top: JointType::Female,
        right: JointType::Male,
        bottom: JointType::Female,
        left: JointType::Flat,
    };
    let holes = finger_reliefs(360.0, 280.0, 3, 15.0, joints, 3.0);
    // Two female edges, three notches each, two holes per notch.
    assert_eq!(holes.len(), 2 * 3 * 2);
    for hole in &holes {
        assert_eq!(hole.len(), 10);
    }
}

#[test]
fn male_flat_and_plain_edges_emit_no_reliefs() {
    for joint in [JointType::Male, JointType::Flat, JointType::Plain] {
        let holes = finger_reliefs(360.0, 280.0, 3, 15.0, EdgeJoints::uniform(joint), 3.0);
        assert!(holes.is_empty());
    }
}

#[test]
fn relief_centers_sit_one_depth_inside_the_notch() {
    let joints = EdgeJoints {
        top: JointType::Female,
        right: JointType::Flat,
        bottom: JointType::Flat,
        left: JointType::Flat,
    };
    let depth = 15.0;
    let holes = finger_reliefs(210.0, 140.0, 1, depth, joints, 3.0);
    assert_eq!(holes.len(), 2);
    // Top edge, one notch spanning the middle segment: inner corners at
    // (70, depth) and (140, depth).
    let center_of = |hole: &panelkit_core::Polygon| {
        let b = hole.bounds();
        Point::new(b.min_x + b.width / 2.0, b.min_y + b.height / 2.0)
    };
    let c0 = center_of(&holes[0]);
    let c1 = center_of(&holes[1]);
    assert!((c0.x - 70.0).abs() < 1e-9 && (c0.y - depth).abs() < 1e-9);
    assert!((c1.x - 140.0).abs() < 1e-9 && (c1.y - depth).abs() < 1e-9);
}

#[test]
fn finger_rect_outline_stays_within_depth_band() {
    let outline = finger_joint_rect(360.0, 260.0, 3, 15.0, 0.2, EdgeJoints::uniform(JointType::Male));
    let b = outline.bounds();
    assert!((b.min_x + 15.0).abs() < 1e-9);
    assert!((b.min_y + 15.0).abs() < 1e-9);
    assert!((b.width - 390.0).abs() < 1e-9);
    assert!((b.height - 290.0).abs() < 1e-9);
}

#[test]
fn zero_depth_joint_flattens_without_error() {
    let outline = finger_joint_rect(360.0, 260.0, 3, 0.0, 0.2, EdgeJoints::uniform(JointType::Female));
    let b = outline.bounds();
    assert_eq!(b.width, 360.0);
    assert_eq!(b.height, 260.0);
}
