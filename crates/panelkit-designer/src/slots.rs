//! # Slotted-Edge and Brace-Slot Synthesis
//!
//! The uniform-slot joint family used by the modular panel system. Unlike
//! finger joints, these are fixed-width rectangular notches: panels carry
//! evenly spaced edge notches, braces and corner brackets carry matching
//! rectangular slot holes, and every notch gets a pair of dogbone relief
//! circles at its inner corners.

use panelkit_core::{circle, Point, Polygon, CIRCLE_STEPS};

use crate::joints::{rect_edges, EdgeJoints, EdgeSpec, JointType};

/// Corner keep-out on slotted edges: no notch may start within this
/// fraction of the edge length from either end.
pub const EDGE_MARGIN_FRACTION: f64 = 0.14;
/// Keep-out fraction for brace slot holes, measured on part width.
pub const BRACE_MARGIN_FRACTION: f64 = 0.12;

/// Center positions of `count` evenly spaced slots on an edge of the given
/// length, honoring the end margins.
fn slot_centers(length: f64, count: u32, margin_fraction: f64) -> impl Iterator<Item = f64> {
    let margin = length * margin_fraction;
    let step = (length - margin * 2.0) / count as f64;
    (0..count).map(move |i| margin + step * (i as f64 + 0.5))
}

/// Appends one slotted edge: the run from just after the edge start to its
/// end, with `count` notches of `slot_w x slot_d` recessed into the panel.
fn slotted_edge(points: &mut Vec<Point>, edge: &EdgeSpec, count: u32, slot_w: f64, slot_d: f64) {
    for c in slot_centers(edge.length, count, EDGE_MARGIN_FRACTION) {
        let s0 = c - slot_w * 0.5;
        let s1 = c + slot_w * 0.5;
        points.push(edge.point_at(s0, 0.0));
        points.push(edge.point_at(s0, -slot_d));
        points.push(edge.point_at(s1, -slot_d));
        points.push(edge.point_at(s1, 0.0));
    }
    points.push(edge.point_at(edge.length, 0.0));
}

/// Builds a `w x h` panel outline with `count` uniform slots per edge.
pub fn slotted_rect(w: f64, h: f64, count: u32, slot_w: f64, slot_d: f64) -> Polygon {
    let mut points = vec![Point::new(0.0, 0.0)];
    for edge in rect_edges(w, h, EdgeJoints::uniform(JointType::Plain)) {
        slotted_edge(&mut points, &edge, count, slot_w, slot_d);
    }
    Polygon::new(points)
}

/// Dogbone relief circles for every slot of a slotted panel: a tool-radius
/// circle pair at each notch's two inner corners, on all four edges.
pub fn slot_reliefs(
    w: f64,
    h: f64,
    count: u32,
    slot_w: f64,
    slot_d: f64,
    tool_radius: f64,
) -> Vec<Polygon> {
    let mut holes = Vec::new();
    for edge in rect_edges(w, h, EdgeJoints::uniform(JointType::Plain)) {
        for c in slot_centers(edge.length, count, EDGE_MARGIN_FRACTION) {
            let corner_a = edge.point_at(c - slot_w * 0.5, -slot_d);
            let corner_b = edge.point_at(c + slot_w * 0.5, -slot_d);
            holes.push(circle(corner_a, tool_radius, CIRCLE_STEPS));
            holes.push(circle(corner_b, tool_radius, CIRCLE_STEPS));
        }
    }
    holes
}

/// Axis-aligned rectangle hole.
fn slot_hole(x0: f64, y0: f64, x1: f64, y1: f64) -> Polygon {
    Polygon::new(vec![
        Point::new(x0, y0),
        Point::new(x1, y0),
        Point::new(x1, y1),
        Point::new(x0, y1),
    ])
}

/// Slot holes for a brace strip: `count` centers across the width, each
/// with one `slot_w x slot_d` hole at the top edge and one at the bottom.
pub fn brace_slot_holes(w: f64, h: f64, count: u32, slot_w: f64, slot_d: f64) -> Vec<Polygon> {
    let mut holes = Vec::new();
    for cx in slot_centers(w, count, BRACE_MARGIN_FRACTION) {
        holes.push(slot_hole(cx - slot_w * 0.5, 0.0, cx + slot_w * 0.5, slot_d));
        holes.push(slot_hole(cx - slot_w * 0.5, h - slot_d, cx + slot_w * 0.5, h));
    }
    holes
}

/// L-shaped corner bracket outline: a `w x h` square with everything
/// outside the two `cut`-wide legs removed.
pub fn l_bracket(w: f64, h: f64, cut: f64) -> Polygon {
    Polygon::new(vec![
        Point::new(0.0, 0.0),
        Point::new(w, 0.0),
        Point::new(w, cut),
        Point::new(cut, cut),
        Point::new(cut, h),
        Point::new(0.0, h),
    ])
}

/// Slot hole pair for a corner bracket: one horizontal slot centered on
/// the top leg, one vertical slot centered on the left leg.
pub fn corner_slot_holes(w: f64, h: f64, slot_w: f64, slot_d: f64) -> Vec<Polygon> {
    let cx = w * 0.5;
    let cy = h * 0.5;
    vec![
        slot_hole(cx - slot_w * 0.5, 0.0, cx + slot_w * 0.5, slot_d),
        slot_hole(0.0, cy - slot_w * 0.5, slot_d, cy + slot_w * 0.5),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_centers_respect_end_margins() {
        let centers: Vec<f64> = slot_centers(100.0, 3, EDGE_MARGIN_FRACTION).collect();
        assert_eq!(centers.len(), 3);
        assert!(centers[0] >= 14.0);
        assert!(centers[2] <= 86.0);
        // Even spacing.
        let step = centers[1] - centers[0];
        assert!((centers[2] - centers[1] - step).abs() < 1e-9);
    }

    #[test]
    fn l_bracket_is_six_sided() {
        let b = l_bracket(90.0, 90.0, 33.0);
        assert_eq!(b.len(), 6);
        let bounds = b.bounds();
        assert_eq!(bounds.width, 90.0);
        assert_eq!(bounds.height, 90.0);
    }
}
