// Integration tests for the four part-set builders

use panelkit_core::{Params, PartKind};
use panelkit_designer::builders::{box_parts, chair_parts, desk_parts, generate, modular_parts, Mode};
use panelkit_designer::slots::EDGE_MARGIN_FRACTION;

#[test]
fn modular_set_counts_follow_panel_count() {
    let p = Params::default(); // 8 panels
    let parts = modular_parts(&p);

    let panels = parts.iter().filter(|p| p.kind == PartKind::Panel).count();
    let braces = parts.iter().filter(|p| p.kind == PartKind::Brace).count();
    let corners = parts.iter().filter(|p| p.kind == PartKind::Corner).count();
    assert_eq!(panels, 8);
    assert_eq!(braces, 4); // panel_count / 2
    assert_eq!(corners, 4);
    assert_eq!(parts[0].label, "PANEL-1");
    assert_eq!(parts[8].label, "BRACE-1");
    assert_eq!(parts[12].label, "CORNER-1");
}

#[test]
fn modular_minimums_apply_for_tiny_sets() {
    let p = Params {
        panel_count: 1,
        ..Params::default()
    };
    let parts = modular_parts(&p);
    assert_eq!(parts.iter().filter(|p| p.kind == PartKind::Brace).count(), 2);
    assert_eq!(parts.iter().filter(|p| p.kind == PartKind::Corner).count(), 4);
}

#[test]
fn modular_panel_slots_and_reliefs_are_paired() {
    let p = Params::default(); // 3 slots per edge
    let parts = modular_parts(&p);
    let panel = &parts[0];

    // Outline: 4 corners + 4 vertices per slot on each of the 4 edges,
    // plus the duplicated closing corner of each edge run.
    assert_eq!(panel.width, 240.0);
    assert_eq!(panel.height, 240.0);
    // Two relief circles per slot, four edges.
    assert_eq!(panel.holes.len(), 4 * 3 * 2);

    // No slot may start inside the 14% corner margin.
    let margin = 240.0 * EDGE_MARGIN_FRACTION;
    let slot_w = p.thickness + p.clearance;
    for pt in &panel.outline.points {
        // Recessed vertices sit strictly between the margins.
        let recessed_on_top = pt.y == p.thickness && pt.x > 0.0 && pt.x < 240.0;
        if recessed_on_top {
            assert!(pt.x >= margin - slot_w, "slot vertex {} inside corner margin", pt.x);
            assert!(pt.x <= 240.0 - margin + slot_w);
        }
    }
}

#[test]
fn brace_and_corner_hole_counts() {
    let p = Params::default(); // edge_slots 3 -> brace slots 4
    let parts = modular_parts(&p);
    let brace = parts.iter().find(|p| p.kind == PartKind::Brace).unwrap();
    assert_eq!(brace.holes.len(), 4 * 2);
    assert_eq!(brace.height, p.thickness * 2.4);

    let corner = parts.iter().find(|p| p.kind == PartKind::Corner).unwrap();
    assert_eq!(corner.holes.len(), 2);
    assert_eq!(corner.width, p.thickness * 6.0);
    assert_eq!(corner.outline.len(), 6);
}

#[test]
fn box_without_lid_has_five_flat_topped_panels() {
    let p = Params {
        box_w: 360.0,
        box_d: 260.0,
        box_h: 280.0,
        edge_slots: 3,
        box_has_lid: false,
        ..Params::default()
    };
    let parts = box_parts(&p);
    assert_eq!(parts.len(), 5);
    assert!(parts.iter().all(|p| p.kind == PartKind::BoxPanel));
    assert_eq!(parts[0].label, "BOX1-BOTTOM");

    let front = parts.iter().find(|p| p.label == "BOX1-FRONT").unwrap();
    // Flat top edge: nothing protrudes above y=0 and no notch recedes
    // from the top run.
    assert!(front.outline.points.iter().all(|pt| pt.y >= 0.0));
    let top_run: Vec<_> = front
        .outline
        .points
        .iter()
        .filter(|pt| pt.y < p.thickness && pt.y > 0.0)
        .collect();
    assert!(top_run.is_empty(), "top edge should be straight");
    // All reliefs belong to the female bottom/side edges, none at the top.
    assert!(front.holes.iter().all(|h| h.bounds().min_y > p.thickness));
}

#[test]
fn box_with_lid_has_six_panels_and_female_tops() {
    let p = Params {
        box_has_lid: true,
        ..Params::default()
    };
    let parts = box_parts(&p);
    assert_eq!(parts.len(), 6);
    assert_eq!(parts[0].label, "BOX1-TOP");

    let front = parts.iter().find(|p| p.label == "BOX1-FRONT").unwrap();
    // Female top edge now recedes into the panel.
    let top_notch = front
        .outline
        .points
        .iter()
        .any(|pt| (pt.y - p.thickness).abs() < 1e-9 && pt.x > 0.0 && pt.x < p.box_w);
    assert!(top_notch);
}

#[test]
fn box_count_scales_the_set() {
    let p = Params {
        box_count: 3,
        box_has_lid: true,
        ..Params::default()
    };
    let parts = box_parts(&p);
    assert_eq!(parts.len(), 18);
    assert_eq!(parts[6].label, "BOX2-TOP");
    assert_eq!(parts[17].label, "BOX3-RIGHT");
}

#[test]
fn chair_and_desk_builders_scale_by_count() {
    let p = Params {
        chair_count: 2,
        desk_count: 3,
        ..Params::default()
    };
    assert_eq!(chair_parts(&p).len(), 12);
    assert_eq!(desk_parts(&p).len(), 18);
}

#[test]
fn generate_clamps_out_of_range_params() {
    // Degenerate inputs clamp instead of failing: a zero-size sheet
    // becomes the 200mm minimum and generation still succeeds.
    let p = Params {
        sheet_w: 0.0,
        sheet_h: 0.0,
        panel_count: 0,
        thickness: 0.0,
        ..Params::default()
    };
    let result = generate(&p, Mode::Modular);
    assert_eq!(result.placed.len() + result.dropped, 1 + 2 + 4);
}

#[test]
fn default_modular_layout_fits_the_sheet() {
    let result = generate(&Params::default(), Mode::Modular);
    assert_eq!(result.dropped, 0);
    assert_eq!(result.placed.len(), 16);
    // Parts are placed in builder order.
    assert_eq!(result.placed[0].label, "PANEL-1");
    assert!(result.placed.iter().all(|p| p.placement.is_some()));
}
