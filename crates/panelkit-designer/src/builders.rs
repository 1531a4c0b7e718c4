//! # Part Set Builders
//!
//! One builder per generation mode. Each builder is a pure function from a
//! clamped parameter snapshot to a flat, deterministically ordered list of
//! unplaced parts; [`generate`] wires a builder's output through the shelf
//! nester and returns the placed layout.

use panelkit_core::{rect, Params, Part, PartKind};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::chair::chair_set;
use crate::desk::desk_set;
use crate::joints::{EdgeJoints, JointType};
use crate::joints::{finger_joint_rect, finger_reliefs};
use crate::nester::{nest, NestResult};
use crate::slots::{brace_slot_holes, corner_slot_holes, l_bracket, slot_reliefs, slotted_rect};

/// Generation mode: which family of parts to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Modular,
    Box,
    Chair,
    Desk,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Modular => "modular",
            Mode::Box => "box",
            Mode::Chair => "chair",
            Mode::Desk => "desk",
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Modular system: slotted square panels, brace strips, and L-corner
/// brackets. Slot width follows material thickness plus fit clearance so
/// a panel edge drops into any slot.
pub fn modular_parts(p: &Params) -> Vec<Part> {
    let slot_w = p.thickness + p.clearance;
    let slot_d = p.thickness;
    let radius = p.tool_dia * 0.5;
    let mut parts = Vec::new();

    for i in 0..p.panel_count {
        parts.push(Part::new(
            PartKind::Panel,
            format!("PANEL-{}", i + 1),
            slotted_rect(p.module_size, p.module_size, p.edge_slots, slot_w, slot_d),
            slot_reliefs(p.module_size, p.module_size, p.edge_slots, slot_w, slot_d, radius),
        ));
    }

    let brace_count = (p.panel_count / 2).max(2);
    let brace_w = p.module_size;
    let brace_h = p.thickness * 2.4;
    let brace_slots = (p.edge_slots + 1).max(2);
    for i in 0..brace_count {
        parts.push(Part::new(
            PartKind::Brace,
            format!("BRACE-{}", i + 1),
            rect(brace_w, brace_h),
            brace_slot_holes(brace_w, brace_h, brace_slots, slot_w, slot_d),
        ));
    }

    let corner_count = (p.panel_count / 2).max(4);
    let corner_size = p.thickness * 6.0;
    for i in 0..corner_count {
        parts.push(Part::new(
            PartKind::Corner,
            format!("CORNER-{}", i + 1),
            l_bracket(corner_size, corner_size, p.thickness * 2.2),
            corner_slot_holes(corner_size, corner_size, slot_w, slot_d),
        ));
    }
    parts
}

fn finger_panel(
    label: String,
    w: f64,
    h: f64,
    fingers: u32,
    depth: f64,
    clearance: f64,
    radius: f64,
    joints: EdgeJoints,
) -> Part {
    Part::new(
        PartKind::BoxPanel,
        label,
        finger_joint_rect(w, h, fingers, depth, clearance, joints),
        finger_reliefs(w, h, fingers, depth, joints, radius),
    )
}

/// Box kit: six finger-jointed faces per box, or five without a lid. The
/// walls' top edges go flat when no lid will mate with them.
pub fn box_parts(p: &Params) -> Vec<Part> {
    let fingers = p.edge_slots.clamp(1, 12);
    let depth = p.thickness;
    let radius = p.tool_dia * 0.5;
    let mut parts = Vec::new();

    for i in 0..p.box_count {
        let n = i + 1;
        let lid_top = if p.box_has_lid {
            JointType::Female
        } else {
            JointType::Flat
        };
        let wall_wide = EdgeJoints {
            top: lid_top,
            right: JointType::Male,
            bottom: JointType::Female,
            left: JointType::Male,
        };
        let wall_deep = EdgeJoints {
            top: lid_top,
            right: JointType::Female,
            bottom: JointType::Female,
            left: JointType::Female,
        };

        if p.box_has_lid {
            parts.push(finger_panel(
                format!("BOX{n}-TOP"),
                p.box_w,
                p.box_d,
                fingers,
                depth,
                p.clearance,
                radius,
                EdgeJoints::uniform(JointType::Male),
            ));
        }
        parts.push(finger_panel(
            format!("BOX{n}-BOTTOM"),
            p.box_w,
            p.box_d,
            fingers,
            depth,
            p.clearance,
            radius,
            EdgeJoints::uniform(JointType::Male),
        ));
        parts.push(finger_panel(
            format!("BOX{n}-FRONT"),
            p.box_w,
            p.box_h,
            fingers,
            depth,
            p.clearance,
            radius,
            wall_wide,
        ));
        parts.push(finger_panel(
            format!("BOX{n}-BACK"),
            p.box_w,
            p.box_h,
            fingers,
            depth,
            p.clearance,
            radius,
            wall_wide,
        ));
        parts.push(finger_panel(
            format!("BOX{n}-LEFT"),
            p.box_d,
            p.box_h,
            fingers,
            depth,
            p.clearance,
            radius,
            wall_deep,
        ));
        parts.push(finger_panel(
            format!("BOX{n}-RIGHT"),
            p.box_d,
            p.box_h,
            fingers,
            depth,
            p.clearance,
            radius,
            wall_deep,
        ));
    }
    parts
}

/// Chair sets, ascending instance index.
pub fn chair_parts(p: &Params) -> Vec<Part> {
    (1..=p.chair_count).flat_map(|i| chair_set(i, p)).collect()
}

/// Desk sets, ascending instance index.
pub fn desk_parts(p: &Params) -> Vec<Part> {
    (1..=p.desk_count).flat_map(|i| desk_set(i, p)).collect()
}

/// Builds the unplaced part list for one mode. Expects a clamped snapshot.
pub fn build_parts(p: &Params, mode: Mode) -> Vec<Part> {
    match mode {
        Mode::Modular => modular_parts(p),
        Mode::Box => box_parts(p),
        Mode::Chair => chair_parts(p),
        Mode::Desk => desk_parts(p),
    }
}

/// Full generation pass: re-clamps the snapshot, builds the part list for
/// the mode, and nests it onto the sheet.
pub fn generate(params: &Params, mode: Mode) -> NestResult {
    let p = params.clamped();
    let parts = build_parts(&p, mode);
    let result = nest(parts, &p.sheet());
    info!(
        mode = %mode,
        sheet_w = p.sheet_w,
        sheet_h = p.sheet_h,
        thickness = p.thickness,
        tool_dia = p.tool_dia,
        clearance = p.clearance,
        placed = result.placed.len(),
        dropped = result.dropped,
        "generated part layout"
    );
    result
}
