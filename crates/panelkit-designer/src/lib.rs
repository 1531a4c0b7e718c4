//! # PanelKit Designer
//!
//! Part synthesis and sheet layout for CNC-routed furniture kits. This
//! crate turns a validated parameter snapshot into flat, machinable 2D
//! part outlines and arranges them onto a bounded stock sheet.
//!
//! ## Core Components
//!
//! - **Joints**: finger-joint edge synthesis and dogbone tool reliefs
//! - **Slots**: the uniform-slot family used by the modular panel system
//! - **Chair / Desk**: closed-form free-form profile generators
//! - **Builders**: the four part-set builders (modular, box, chair, desk)
//! - **Nester**: greedy shelf layout onto the stock sheet
//! - **SVG**: millimeter-unit vector output for CAM
//!
//! ## Pipeline
//!
//! ```text
//! Params (clamped snapshot)
//!   └── builder (modular | box | chair | desk) -> Vec<Part>
//!         └── shelf nester -> NestResult { placed, dropped }
//!               └── SVG writer / downstream renderer (read-only)
//! ```
//!
//! Generation is single-threaded, synchronous, and purely functional:
//! every pass recomputes the full part list from the snapshot, and part
//! order (hence placement) is fully deterministic.

pub mod builders;
pub mod chair;
pub mod desk;
pub mod joints;
pub mod nester;
pub mod slots;
pub mod svg;

pub use builders::{box_parts, build_parts, chair_parts, desk_parts, generate, modular_parts, Mode};
pub use joints::{
    finger_edge, finger_joint_rect, finger_reliefs, rect_edges, EdgeJoints, EdgeSpec, JointType,
    SPAN_MAX_FACTOR, SPAN_MIN_FACTOR,
};
pub use nester::{nest, NestResult};
pub use slots::{
    brace_slot_holes, corner_slot_holes, l_bracket, slot_reliefs, slotted_rect,
    BRACE_MARGIN_FRACTION, EDGE_MARGIN_FRACTION,
};
pub use svg::{render_svg, write_svg};
