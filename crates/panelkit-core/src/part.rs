//! Part data model.
//!
//! A [`Part`] is one machinable piece: a closed outline, zero or more hole
//! cutouts, and a placement on the stock sheet once nested. Builders create
//! parts unplaced; the nester assigns the placement exactly once. Renderers
//! and exporters consume placed parts read-only.

use serde::{Deserialize, Serialize};

use crate::geometry::{Point, Polygon};

/// Category of a generated part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PartKind {
    /// Modular system square panel with edge slots.
    Panel,
    /// Flat brace strip joining modular panels.
    Brace,
    /// L-shaped corner bracket for the modular system.
    Corner,
    /// Finger-jointed box face.
    BoxPanel,
    /// Free-form chair profile.
    ChairPanel,
    /// Free-form desk profile.
    DeskPanel,
}

impl PartKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PartKind::Panel => "panel",
            PartKind::Brace => "brace",
            PartKind::Corner => "corner",
            PartKind::BoxPanel => "box-panel",
            PartKind::ChairPanel => "chair-panel",
            PartKind::DeskPanel => "desk-panel",
        }
    }
}

/// One machinable sheet part.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part {
    pub kind: PartKind,
    /// Human-readable identifier, including the instance index
    /// (e.g. `PANEL-3`, `BOX1-FRONT`).
    pub label: String,
    /// Outline bounding-box width at generation time, before placement.
    pub width: f64,
    /// Outline bounding-box height at generation time, before placement.
    pub height: f64,
    pub outline: Polygon,
    pub holes: Vec<Polygon>,
    /// Sheet offset assigned by the nester; `None` until nested.
    pub placement: Option<Point>,
}

impl Part {
    /// Creates an unplaced part; width and height derive from the outline's
    /// bounding box.
    pub fn new(kind: PartKind, label: impl Into<String>, outline: Polygon, holes: Vec<Polygon>) -> Self {
        let b = outline.bounds();
        Self {
            kind,
            label: label.into(),
            width: b.width,
            height: b.height,
            outline,
            holes,
            placement: None,
        }
    }

    /// Returns this part with its sheet placement assigned.
    pub fn placed_at(mut self, x: f64, y: f64) -> Part {
        self.placement = Some(Point::new(x, y));
        self
    }

    /// Sheet offset of a placed part; origin for an unplaced one.
    pub fn offset(&self) -> Point {
        self.placement.unwrap_or_default()
    }
}

/// Stock sheet dimensions and the gap kept between nested parts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SheetLayout {
    pub width: f64,
    pub height: f64,
    pub gap: f64,
}
