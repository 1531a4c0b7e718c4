//! SVG writer for nested part layouts.
//!
//! Serializes the sheet boundary plus every placed part's outline and
//! holes as closed vector paths, in millimeter units with the origin at
//! the sheet's top-left corner. One document per export. Stroke-only
//! output: CAM consumers follow contours, fill is irrelevant.

use std::fmt::Write as _;
use std::fs;
use std::path::Path as FsPath;

use panelkit_core::{Part, Polygon, Result, SheetLayout};
use tracing::info;

const STROKE: &str = "#141414";
const STROKE_WIDTH: f64 = 0.2;
const LABEL_SIZE: f64 = 8.0;

/// Closed path data (`M .. L .. Z`) for one polygon at a sheet offset.
fn path_data(poly: &Polygon, ox: f64, oy: f64) -> String {
    let mut d = String::new();
    for (i, p) in poly.points.iter().enumerate() {
        let cmd = if i == 0 { 'M' } else { 'L' };
        let _ = write!(d, "{} {:.3} {:.3} ", cmd, ox + p.x, oy + p.y);
    }
    d.push('Z');
    d
}

/// Renders the complete SVG document for a placed layout.
pub fn render_svg(sheet: &SheetLayout, parts: &[Part], labels: bool) -> String {
    let mut svg = String::new();
    let _ = writeln!(
        svg,
        r#"<?xml version="1.0" encoding="UTF-8"?>"#
    );
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}mm" height="{h}mm" viewBox="0 0 {w} {h}">"#,
        w = sheet.width,
        h = sheet.height
    );
    let _ = writeln!(
        svg,
        r#"  <g fill="none" stroke="{STROKE}" stroke-width="{STROKE_WIDTH}">"#
    );
    let _ = writeln!(
        svg,
        r#"    <rect x="0" y="0" width="{}" height="{}"/>"#,
        sheet.width, sheet.height
    );

    for part in parts {
        let o = part.offset();
        let _ = writeln!(svg, r#"    <path d="{}"/>"#, path_data(&part.outline, o.x, o.y));
        for hole in &part.holes {
            let _ = writeln!(svg, r#"    <path d="{}"/>"#, path_data(hole, o.x, o.y));
        }
    }
    let _ = writeln!(svg, "  </g>");

    if labels {
        let _ = writeln!(
            svg,
            r#"  <g fill="{STROKE}" font-size="{LABEL_SIZE}" font-family="sans-serif">"#
        );
        for part in parts {
            let o = part.offset();
            let _ = writeln!(
                svg,
                r#"    <text x="{:.3}" y="{:.3}">{}</text>"#,
                o.x + 4.0,
                o.y + 12.0,
                part.label
            );
        }
        let _ = writeln!(svg, "  </g>");
    }

    svg.push_str("</svg>\n");
    svg
}

/// Writes the layout to an SVG file.
pub fn write_svg(path: &FsPath, sheet: &SheetLayout, parts: &[Part], labels: bool) -> Result<()> {
    fs::write(path, render_svg(sheet, parts, labels))?;
    info!(path = %path.display(), parts = parts.len(), "wrote SVG layout");
    Ok(())
}
