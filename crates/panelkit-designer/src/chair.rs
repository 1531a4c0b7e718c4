//! # Chair Profile Generator
//!
//! Free-form outlines for one chair part set: side panel, seat rail,
//! backrest rail, front leg panel, rear leg panel, and stretcher. Each
//! profile is a literal closed-form vertex list over the chair dimension
//! parameters; nothing here is a constraint solver.
//!
//! The backrest line is the one non-trivial computation: a fixed reference
//! segment is rotated to the configured back angle and rescaled to its
//! original length from the anchor, and several seat/back vertices solve
//! for x at a target y on that line.

use panelkit_core::{normalize, x_at_y, Params, Part, PartKind, Point, Polygon};

/// Back-line anchor x. The anchor y sits one panel thickness above the
/// seat line.
const BACK_ANCHOR_X: f64 = 60.0;
/// Reference segment endpoint; its distance from the anchor fixes the
/// backrest length regardless of the configured angle.
const BACK_REF: Point = Point { x: 85.0, y: 100.0 };
/// Y level of the seat top in profile coordinates.
const SEAT_LINE_Y: f64 = 200.0;
/// Front x of the side panel's seat surface.
const SIDE_FRONT_X: f64 = 30.0;

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

/// The backrest line and the derived quantities shared by the side panel
/// and the backrest rail.
#[derive(Debug, Clone, Copy)]
pub struct BackLine {
    /// Rotation anchor at the rear of the seat surface.
    pub anchor: Point,
    /// Reference endpoint rotated to the configured angle, at the
    /// reference segment's original length.
    pub tip: Point,
    /// Reference segment length.
    pub length: f64,
}

impl BackLine {
    pub fn from_params(p: &Params) -> BackLine {
        let anchor = pt(BACK_ANCHOR_X, SEAT_LINE_Y - p.thickness);
        let length = anchor.distance_to(&BACK_REF);
        let rad = p.chair_back_angle.to_radians();
        let tip = pt(anchor.x + rad.cos() * length, anchor.y + rad.sin() * length);
        BackLine { anchor, tip, length }
    }

    /// X coordinate on the back line at the given y.
    fn x_at(&self, y: f64) -> f64 {
        x_at_y(self.anchor, self.tip, y)
    }

    /// Perpendicular offset of one panel thickness across the line.
    fn thickness_offset(&self, d: f64) -> (f64, f64) {
        let dx = self.tip.x - self.anchor.x;
        let dy = self.tip.y - self.anchor.y;
        let len = self.anchor.distance_to(&self.tip).max(1e-4);
        (-dy / len * d, dx / len * d)
    }
}

/// Side panel: seat surface, backrest mortise run, both legs, and the
/// stretcher rail notches.
pub fn side_profile(p: &Params) -> Polygon {
    let d = p.thickness;
    let side = p.chair_side_offset;
    let rise = p.chair_leg_rise;
    let slim = p.chair_leg_slim;
    let back = BackLine::from_params(p);
    let (off_x, off_y) = back.thickness_offset(d);

    // Back tenon shoulder levels above the seat, and the configured top.
    let y_shoulder = back.anchor.y - 20.0;
    let y_mid = back.anchor.y - 60.0;
    let y_top = p.chair_back_y;
    let x_shoulder = back.x_at(y_shoulder);
    let x_mid = back.x_at(y_mid);
    let x_top = back.x_at(y_top);

    // Rear top corner; the seat-edge thickness offset is taken along the
    // (horizontal) seat line so it stays a clean panel thickness.
    let rear_x = 160.0 + side;
    let seat_dx = rear_x - SIDE_FRONT_X;
    let seat_off = seat_dx / pt(SIDE_FRONT_X, SEAT_LINE_Y).distance_to(&pt(rear_x, SEAT_LINE_Y)).max(1e-4) * d;

    // Stretcher rail notch levels on both legs.
    let leg_span = 120.0 + rise + d;
    let rail_upper = SEAT_LINE_Y + leg_span / 4.0;
    let rail_lower = SEAT_LINE_Y + leg_span / 1.5;
    let leg_bottom = SEAT_LINE_Y + 120.0 + rise;

    normalize(vec![
        pt(SIDE_FRONT_X, SEAT_LINE_Y),
        pt(rear_x + side, SEAT_LINE_Y),
        pt(rear_x + side, SEAT_LINE_Y - seat_off),
        pt(back.anchor.x + side, SEAT_LINE_Y - seat_off),
        pt(x_shoulder + side, y_shoulder),
        pt(x_shoulder + off_x + side, y_shoulder + off_y),
        pt(x_mid + off_x + side, y_mid + off_y),
        pt(x_mid + side, y_mid),
        pt(x_top + side, y_top),
        pt(x_top + side + d, y_top + off_y),
        pt(200.0 + side, rail_upper),
        pt(200.0 + side - d, rail_upper),
        pt(200.0 + side - d, rail_lower),
        pt(200.0 + side, rail_lower),
        pt(200.0 + side, leg_bottom + d),
        pt(185.0 + side, leg_bottom + d),
        pt(185.0 + side, leg_bottom),
        pt(170.0 + side, leg_bottom),
        pt(150.0 + slim + side, SEAT_LINE_Y + p.chair_leg_top),
        pt(75.0 - slim, SEAT_LINE_Y + p.chair_leg_top),
        pt(60.0 - d, leg_bottom),
        pt(45.0 - d, leg_bottom),
        pt(45.0 - d, leg_bottom + d),
        pt(SIDE_FRONT_X, leg_bottom + d),
        pt(SIDE_FRONT_X, rail_lower),
        pt(SIDE_FRONT_X - d, rail_lower),
        pt(SIDE_FRONT_X - d, rail_upper),
        pt(SIDE_FRONT_X, rail_upper),
        pt(SIDE_FRONT_X, SEAT_LINE_Y),
    ])
}

/// Seat rail: the panel spanning the two side panels under the seat.
pub fn seat_profile(p: &Params) -> Polygon {
    let d = p.thickness;
    let side = p.chair_side_offset;
    let seat = p.chair_seat_w;
    let x0 = 230.0 + side;
    let x1 = x0 + 40.0 + seat;
    let y_deep = 275.0 + d * 2.0 + side;

    normalize(vec![
        pt(x0 + d, 100.0),
        pt(x1 - d, 100.0),
        pt(x1 - d, 140.0),
        pt(x1, 140.0),
        pt(x1, y_deep),
        pt(x0, y_deep),
        pt(x0, 140.0),
        pt(x0 + d, 140.0),
    ])
}

/// Backrest rail. Its two tenon lengths are measured along the back line
/// so the rail lands flush on the side panels' mortise run.
pub fn backrest_profile(p: &Params) -> Polygon {
    let d = p.thickness;
    let side = p.chair_side_offset;
    let seat = p.chair_seat_w;
    let back = BackLine::from_params(p);

    let y_shoulder = back.anchor.y - 20.0;
    let y_mid = back.anchor.y - 60.0;
    let y_top = p.chair_back_y;
    let x_shoulder = back.x_at(y_shoulder);
    let x_mid = back.x_at(y_mid);
    let x_top = back.x_at(y_top);

    let upper_len = pt(x_mid + side, y_mid).distance_to(&pt(x_top + side, y_top));
    let lower_len = pt(x_shoulder + side, y_shoulder).distance_to(&pt(x_mid + side, y_mid));

    let x0 = 330.0 + side + seat;
    let x1 = x0 + 40.0 + seat;

    normalize(vec![
        pt(x0, 100.0),
        pt(x1, 100.0),
        pt(x1, 120.0),
        pt(x1 - d, 120.0),
        pt(x1 - d, 120.0 + upper_len),
        pt(x1, 120.0 + upper_len),
        pt(x1, 120.0 + upper_len + lower_len),
        pt(x0, 120.0 + upper_len + lower_len),
        pt(x0, 120.0 + upper_len),
        pt(x0 + d, 120.0 + upper_len),
        pt(x0 + d, 120.0),
        pt(x0, 120.0),
    ])
}

/// Front leg panel with stretcher rail notches and splayed feet.
pub fn front_leg_profile(p: &Params) -> Polygon {
    let d = p.thickness;
    let side = p.chair_side_offset;
    let seat = p.chair_seat_w;
    let rise = p.chair_leg_rise;
    let slim = p.chair_leg_slim;

    let x = 450.0 + side + seat * 2.0;
    let leg_span = 120.0 + rise + d;
    let rail_upper = leg_span / 4.0 + d;
    let rail_lower = leg_span / 1.5 + d;
    let foot = 330.0 + rise;

    normalize(vec![
        pt(x, 210.0 - d),
        pt(x + seat, 210.0 - d),
        pt(x + seat, 210.0),
        pt(x + seat + 20.0, 210.0),
        pt(x + seat + 20.0, rail_upper),
        pt(x + seat + 20.0 - d, rail_upper),
        pt(x + seat + 20.0 - d, rail_lower),
        pt(x + seat + 20.0, rail_lower),
        pt(x + seat + 20.0, foot + d),
        pt(x + seat + 5.0, foot + d),
        pt(x + seat + 5.0, foot),
        pt(x + seat - 10.0, foot),
        pt(x + seat - 20.0 + slim / 2.0, 260.0),
        pt(x + 20.0 - slim / 2.0, 260.0),
        pt(x + 10.0, foot),
        pt(x - 5.0, foot),
        pt(x - 5.0, foot + d),
        pt(x - 20.0, foot + d),
        pt(x - 20.0, rail_lower),
        pt(x - 20.0 + d, rail_lower),
        pt(x - 20.0 + d, rail_upper),
        pt(x - 20.0, rail_upper),
        pt(x - 20.0, 210.0),
        pt(x, 210.0),
    ])
}

/// Rear leg panel; wider shoulders than the front leg, same rail notches.
pub fn rear_leg_profile(p: &Params) -> Polygon {
    let d = p.thickness;
    let side = p.chair_side_offset;
    let seat = p.chair_seat_w;
    let rise = p.chair_leg_rise;
    let slim = p.chair_leg_slim;

    let x = 500.0 + side + seat * 3.0;
    let leg_span = 120.0 + rise + d;
    let rail_upper = leg_span / 4.0 + d;
    let rail_lower = leg_span / 1.5 + d;
    let foot = 330.0 + rise;

    normalize(vec![
        pt(x + d, 230.0),
        pt(x + seat + 40.0 - d, 230.0),
        pt(x + seat + 40.0 - d, rail_upper),
        pt(x + seat + 40.0, rail_upper),
        pt(x + seat + 40.0, rail_lower),
        pt(x + seat + 40.0 - d, rail_lower),
        pt(x + seat + 40.0 - d, foot + d),
        pt(x + seat + 20.0, foot + d),
        pt(x + seat + 20.0, foot),
        pt(x + seat + 5.0, foot),
        pt(x + seat + slim / 2.0, 260.0),
        pt(x + 40.0 - slim / 2.0, 260.0),
        pt(x + 35.0, foot),
        pt(x + 20.0, foot),
        pt(x + 20.0, foot + d),
        pt(x + d, foot + d),
        pt(x + d, rail_lower),
        pt(x, rail_lower),
        pt(x, rail_upper),
        pt(x + d, rail_upper),
    ])
}

/// Stretcher: the small angled rail keyed into both legs.
pub fn stretcher_profile(p: &Params) -> Polygon {
    let d = p.thickness;
    let x = 300.0 + p.chair_side_offset;

    normalize(vec![
        pt(x, 50.0),
        pt(x + 15.0, 50.0),
        pt(x + 15.0, 50.0 - d),
        pt(x + 30.0, 50.0 - d),
        pt(x + 30.0, 65.0 - d),
        pt(x - d + 15.0, 80.0),
        pt(x - d, 80.0),
        pt(x - d, 65.0),
        pt(x, 65.0),
    ])
}

/// Builds the six-part chair set for one instance index (1-based).
pub fn chair_set(index: u32, p: &Params) -> Vec<Part> {
    let profiles = [
        ("SIDE", side_profile(p)),
        ("SEAT", seat_profile(p)),
        ("BACKREST", backrest_profile(p)),
        ("LEG-FRONT", front_leg_profile(p)),
        ("LEG-REAR", rear_leg_profile(p)),
        ("STRETCHER", stretcher_profile(p)),
    ];
    profiles
        .into_iter()
        .map(|(name, outline)| {
            Part::new(
                PartKind::ChairPanel,
                format!("CHAIR{index}-{name}"),
                outline,
                vec![],
            )
        })
        .collect()
}
