//! Generation parameters.
//!
//! [`Params`] is the full numeric/boolean configuration consumed once per
//! generation pass: stock sheet size, the per-mode dimensions, material
//! thickness, joint clearance, tool diameter, and nesting gap. All values
//! are millimeters except counts, angles (degrees), and flags.
//!
//! The geometry generators trust their input, so every entry point
//! re-clamps the snapshot to the documented ranges before use
//! ([`Params::clamped`]). Out-of-range values never fail; they clamp.
//! Parameter files are JSON with serde defaults, so a partial file is
//! valid and fills in the remaining fields.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::part::SheetLayout;

/// Immutable parameter snapshot for one generation pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Params {
    /// Stock sheet width.
    pub sheet_w: f64,
    /// Stock sheet height.
    pub sheet_h: f64,

    /// Modular panel edge length.
    pub module_size: f64,
    /// Number of modular panels to generate.
    pub panel_count: u32,
    /// Slots (or box joint fingers) per edge.
    pub edge_slots: u32,

    /// Box outer width.
    pub box_w: f64,
    /// Box outer depth.
    pub box_d: f64,
    /// Box outer height.
    pub box_h: f64,
    /// Number of box kits.
    pub box_count: u32,
    /// Generate a lid panel; without one the wall top edges stay flat.
    pub box_has_lid: bool,

    /// Number of chair sets.
    pub chair_count: u32,
    /// Seat width.
    pub chair_seat_w: f64,
    /// Fore-aft offset applied to the side profile.
    pub chair_side_offset: f64,
    /// Extra leg length below the seat.
    pub chair_leg_rise: f64,
    /// Leg taper adjustment.
    pub chair_leg_slim: f64,
    /// Height of the leg top shoulder.
    pub chair_leg_top: f64,
    /// Y level where the backrest line ends.
    pub chair_back_y: f64,
    /// Backrest lean angle, degrees.
    pub chair_back_angle: f64,

    /// Number of desk sets.
    pub desk_count: u32,
    /// Desk top width.
    pub desk_w: f64,
    /// Desk top depth.
    pub desk_d: f64,
    /// Leg height.
    pub desk_leg_h: f64,
    /// Apron (skirt) depth.
    pub desk_apron: f64,
    /// Leg foot width.
    pub desk_leg_w: f64,
    /// Front leg right splay.
    pub desk_leg_right1: f64,
    /// Side leg right splay.
    pub desk_leg_right2: f64,
    /// Front leg left splay.
    pub desk_leg_left1: f64,
    /// Side leg left splay.
    pub desk_leg_left2: f64,

    /// Sheet material thickness; also the finger-joint depth.
    pub thickness: f64,
    /// Fit clearance subtracted from tabs and added to slots.
    pub clearance: f64,
    /// Cutting tool diameter, sets dogbone relief size.
    pub tool_dia: f64,
    /// Gap kept between nested parts and the sheet border.
    pub gap: f64,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            sheet_w: 1200.0,
            sheet_h: 900.0,
            module_size: 240.0,
            panel_count: 8,
            edge_slots: 3,
            box_w: 360.0,
            box_d: 260.0,
            box_h: 280.0,
            box_count: 1,
            box_has_lid: true,
            chair_count: 1,
            chair_seat_w: 80.0,
            chair_side_offset: 0.0,
            chair_leg_rise: 0.0,
            chair_leg_slim: 0.0,
            chair_leg_top: 40.0,
            chair_back_y: 100.0,
            chair_back_angle: -74.0,
            desk_count: 1,
            desk_w: 1820.0,
            desk_d: 910.0,
            desk_leg_h: 910.0,
            desk_apron: 182.0,
            desk_leg_w: 200.0,
            desk_leg_right1: 250.0,
            desk_leg_right2: 250.0,
            desk_leg_left1: 250.0,
            desk_leg_left2: 250.0,
            thickness: 15.0,
            clearance: 0.2,
            tool_dia: 6.0,
            gap: 16.0,
        }
    }
}

impl Params {
    /// Returns a copy with every field clamped to its documented range.
    ///
    /// Clearance is deliberately left unclamped; the joint synthesizer's
    /// span clamp bounds its geometric effect.
    pub fn clamped(&self) -> Params {
        let mut p = self.clone();
        p.sheet_w = p.sheet_w.max(200.0);
        p.sheet_h = p.sheet_h.max(200.0);
        p.module_size = p.module_size.max(80.0);
        p.panel_count = p.panel_count.max(1);
        p.edge_slots = p.edge_slots.clamp(1, 9);
        p.box_w = p.box_w.max(120.0);
        p.box_d = p.box_d.max(120.0);
        p.box_h = p.box_h.max(120.0);
        p.box_count = p.box_count.max(1);
        p.chair_count = p.chair_count.max(1);
        p.chair_seat_w = p.chair_seat_w.clamp(50.0, 500.0);
        p.chair_side_offset = p.chair_side_offset.clamp(-100.0, 500.0);
        p.chair_leg_rise = p.chair_leg_rise.clamp(-50.0, 500.0);
        p.chair_leg_slim = p.chair_leg_slim.clamp(-200.0, 200.0);
        p.chair_leg_top = p.chair_leg_top.clamp(-200.0, 300.0);
        p.chair_back_y = p.chair_back_y.clamp(-500.0, 160.0);
        p.chair_back_angle = p.chair_back_angle.clamp(-89.0, -20.0);
        p.desk_count = p.desk_count.max(1);
        p.desk_w = p.desk_w.clamp(182.0, 3640.0);
        p.desk_d = p.desk_d.clamp(91.0, 1820.0);
        p.desk_leg_h = p.desk_leg_h.clamp(91.0, 1820.0);
        p.desk_apron = p.desk_apron.clamp(18.0, 364.0);
        p.desk_leg_w = p.desk_leg_w.clamp(1.0, 1000.0);
        p.desk_leg_right1 = p.desk_leg_right1.clamp(1.0, 1000.0);
        p.desk_leg_right2 = p.desk_leg_right2.clamp(1.0, 1000.0);
        p.desk_leg_left1 = p.desk_leg_left1.clamp(1.0, 1000.0);
        p.desk_leg_left2 = p.desk_leg_left2.clamp(1.0, 1000.0);
        p.thickness = p.thickness.max(3.0);
        p.tool_dia = p.tool_dia.max(1.0);
        p.gap = p.gap.max(4.0);
        p
    }

    /// Sheet layout view used by the nester.
    pub fn sheet(&self) -> SheetLayout {
        SheetLayout {
            width: self.sheet_w,
            height: self.sheet_h,
            gap: self.gap,
        }
    }

    /// Loads parameters from a JSON file; missing fields take defaults.
    pub fn load(path: &Path) -> Result<Params> {
        let text = fs::read_to_string(path)?;
        let params: Params = serde_json::from_str(&text)?;
        debug!(path = %path.display(), "loaded parameter file");
        Ok(params)
    }

    /// Writes parameters as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        let text = serde_json::to_string_pretty(self)?;
        fs::write(path, text)?;
        debug!(path = %path.display(), "saved parameter file");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_enforces_documented_ranges() {
        let p = Params {
            sheet_w: 10.0,
            edge_slots: 40,
            chair_back_angle: -5.0,
            desk_w: 9999.0,
            thickness: 0.0,
            gap: 0.0,
            ..Params::default()
        }
        .clamped();
        assert_eq!(p.sheet_w, 200.0);
        assert_eq!(p.edge_slots, 9);
        assert_eq!(p.chair_back_angle, -20.0);
        assert_eq!(p.desk_w, 3640.0);
        assert_eq!(p.thickness, 3.0);
        assert_eq!(p.gap, 4.0);
    }

    #[test]
    fn defaults_are_in_range() {
        let p = Params::default();
        assert_eq!(p, p.clamped());
    }

    #[test]
    fn file_round_trip_preserves_all_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("params.json");
        let mut p = Params::default();
        p.chair_back_angle = -60.0;
        p.clearance = 0.35;
        p.save(&path).unwrap();
        assert_eq!(Params::load(&path).unwrap(), p);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let p: Params = serde_json::from_str(r#"{"sheetW": 2440, "boxCount": 3}"#).unwrap();
        assert_eq!(p.sheet_w, 2440.0);
        assert_eq!(p.box_count, 3);
        assert_eq!(p.thickness, 15.0);
        assert!(p.box_has_lid);
    }
}
