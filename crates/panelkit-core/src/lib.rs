//! # PanelKit Core
//!
//! Core types for PanelKit: 2D geometry primitives, the part data model,
//! the generation parameter snapshot, and error types.
//!
//! Everything here is plain value types in millimeter units. Generation is
//! purely functional over an immutable [`Params`] snapshot; no module in
//! this crate holds shared mutable state.

pub mod error;
pub mod geometry;
pub mod params;
pub mod part;

pub use error::{Error, Result};
pub use geometry::{circle, normalize, rect, x_at_y, Bounds, Point, Polygon, CIRCLE_STEPS};
pub use params::Params;
pub use part::{Part, PartKind, SheetLayout};
