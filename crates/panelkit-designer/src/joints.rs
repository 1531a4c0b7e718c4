//! # Finger-Joint Edge Synthesis
//!
//! Builds the vertex run for one rectangle edge carrying a finger joint,
//! and the dogbone relief holes that make female notches machinable with a
//! round tool.
//!
//! An edge is divided into `2n + 1` equal segments for `n` fingers. The
//! odd-indexed segments are active: a male edge raises a tab one joint
//! depth outward, a female edge sinks a notch one joint depth inward. The
//! active span is adjusted by the fit clearance (tabs narrower, notches
//! wider) and centered in its segment. Flat and plain edges pass straight
//! through every segment.

use panelkit_core::{circle, Point, Polygon, CIRCLE_STEPS};

/// Lower bound on an active span, as a fraction of the segment length.
/// Together with [`SPAN_MAX_FACTOR`] this keeps extreme clearance values
/// from producing degenerate or self-intersecting fingers.
pub const SPAN_MIN_FACTOR: f64 = 0.35;
/// Upper bound on an active span, as a fraction of the segment length.
pub const SPAN_MAX_FACTOR: f64 = 1.65;

/// Joint behavior of one rectangle edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JointType {
    /// Tabs protrude outward by the joint depth.
    Male,
    /// Notches recede inward by the joint depth; receives dogbone reliefs.
    Female,
    /// Straight edge, no joint. Used where a lid is absent.
    Flat,
    /// Uniform-slot family edge (modular panels); no tab/notch pattern here.
    Plain,
}

/// Joint assignment for the four edges of a rectangular panel, in
/// traversal order: top, right, bottom, left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeJoints {
    pub top: JointType,
    pub right: JointType,
    pub bottom: JointType,
    pub left: JointType,
}

impl EdgeJoints {
    /// All four edges share one joint type.
    pub const fn uniform(joint: JointType) -> Self {
        Self {
            top: joint,
            right: joint,
            bottom: joint,
            left: joint,
        }
    }
}

/// One rectangle edge during synthesis. Ephemeral; never stored on a part.
#[derive(Debug, Clone, Copy)]
pub struct EdgeSpec {
    /// Edge start point.
    pub start: Point,
    /// Unit tangent from start toward the edge end.
    pub tangent: Point,
    /// Unit normal pointing out of the panel.
    pub normal: Point,
    /// Edge length.
    pub length: f64,
    pub joint: JointType,
}

impl EdgeSpec {
    /// Point at arc length `s` along the edge, shifted `normal_offset`
    /// along the outward normal (negative values go into the panel).
    pub fn point_at(&self, s: f64, normal_offset: f64) -> Point {
        Point::new(
            self.start.x + self.tangent.x * s + self.normal.x * normal_offset,
            self.start.y + self.tangent.y * s + self.normal.y * normal_offset,
        )
    }
}

/// The four edges of a `w x h` rectangle anchored at the origin, traversed
/// clockwise from the top-left corner (screen coordinates, +y down).
pub fn rect_edges(w: f64, h: f64, joints: EdgeJoints) -> [EdgeSpec; 4] {
    [
        EdgeSpec {
            start: Point::new(0.0, 0.0),
            tangent: Point::new(1.0, 0.0),
            normal: Point::new(0.0, -1.0),
            length: w,
            joint: joints.top,
        },
        EdgeSpec {
            start: Point::new(w, 0.0),
            tangent: Point::new(0.0, 1.0),
            normal: Point::new(1.0, 0.0),
            length: h,
            joint: joints.right,
        },
        EdgeSpec {
            start: Point::new(w, h),
            tangent: Point::new(-1.0, 0.0),
            normal: Point::new(0.0, 1.0),
            length: w,
            joint: joints.bottom,
        },
        EdgeSpec {
            start: Point::new(0.0, h),
            tangent: Point::new(0.0, -1.0),
            normal: Point::new(-1.0, 0.0),
            length: h,
            joint: joints.left,
        },
    ]
}

/// Appends the vertex run tracing one finger-jointed edge from just after
/// its start point to its end point.
///
/// Active segments contribute five vertices (span start on the edge, two
/// offset corners, span end on the edge, segment end); inactive segments
/// contribute a single vertex at their end boundary. A depth of zero
/// degenerates to a flat edge; it is flattened, not rejected.
pub fn finger_edge(path: &mut Vec<Point>, edge: &EdgeSpec, fingers: u32, depth: f64, clearance: f64) {
    let segments = fingers * 2 + 1;
    let seg_len = edge.length / segments as f64;
    let (offset, width_adjust) = match edge.joint {
        JointType::Male => (depth, -clearance),
        JointType::Female => (-depth, clearance),
        JointType::Flat | JointType::Plain => (0.0, 0.0),
    };

    for i in 0..segments {
        let seg_start = i as f64 * seg_len;
        let seg_end = (i + 1) as f64 * seg_len;
        let active =
            i % 2 == 1 && matches!(edge.joint, JointType::Male | JointType::Female);

        if !active {
            path.push(edge.point_at(seg_end, 0.0));
            continue;
        }

        let span = (seg_len + width_adjust)
            .clamp(seg_len * SPAN_MIN_FACTOR, seg_len * SPAN_MAX_FACTOR);
        let trim = (seg_len - span) * 0.5;
        let s0 = seg_start + trim;
        let s1 = seg_end - trim;

        path.push(edge.point_at(s0, 0.0));
        path.push(edge.point_at(s0, offset));
        path.push(edge.point_at(s1, offset));
        path.push(edge.point_at(s1, 0.0));
        path.push(edge.point_at(seg_end, 0.0));
    }
}

/// Builds the complete outline of a `w x h` finger-jointed panel.
pub fn finger_joint_rect(
    w: f64,
    h: f64,
    fingers: u32,
    depth: f64,
    clearance: f64,
    joints: EdgeJoints,
) -> Polygon {
    let mut path = vec![Point::new(0.0, 0.0)];
    for edge in rect_edges(w, h, joints) {
        finger_edge(&mut path, &edge, fingers, depth, clearance);
    }
    Polygon::new(path)
}

/// Dogbone relief holes for every female edge of a `w x h` panel.
///
/// Each active notch gets two tool-radius circles centered on its inner
/// corners, one joint depth inside the nominal edge, so a round cutter
/// still clears the square corner the mating tab needs. Male, flat, and
/// plain edges contribute nothing.
pub fn finger_reliefs(
    w: f64,
    h: f64,
    fingers: u32,
    depth: f64,
    joints: EdgeJoints,
    tool_radius: f64,
) -> Vec<Polygon> {
    let mut holes = Vec::new();
    for edge in rect_edges(w, h, joints) {
        if edge.joint != JointType::Female {
            continue;
        }
        let segments = fingers * 2 + 1;
        let seg_len = edge.length / segments as f64;
        for i in (1..segments).step_by(2) {
            let corner_a = edge.point_at(i as f64 * seg_len, -depth);
            let corner_b = edge.point_at((i + 1) as f64 * seg_len, -depth);
            holes.push(circle(corner_a, tool_radius, CIRCLE_STEPS));
            holes.push(circle(corner_b, tool_radius, CIRCLE_STEPS));
        }
    }
    holes
}
