//! # Shelf Nester
//!
//! Greedy single-pass row layout of parts onto the stock sheet. Parts are
//! placed left to right in input order; when a part no longer fits the
//! current row, a new row opens below the tallest part placed so far.
//!
//! The first part that overflows the sheet vertically stops the batch:
//! that part and every later one are dropped, even if some would have fit
//! an earlier row on their own. This is a documented policy, not an
//! optimal packer; placement is purely order-dependent.

use panelkit_core::{Part, SheetLayout};
use tracing::{debug, warn};

/// Outcome of one nesting pass: the placed parts in input order, plus how
/// many trailing parts did not make it onto the sheet.
#[derive(Debug, Clone)]
pub struct NestResult {
    pub placed: Vec<Part>,
    pub dropped: usize,
}

/// Places `parts` onto the sheet, consuming them in order.
pub fn nest(parts: Vec<Part>, sheet: &SheetLayout) -> NestResult {
    let total = parts.len();
    let gap = sheet.gap;
    let mut placed = Vec::with_capacity(total);
    let mut x = gap;
    let mut y = gap;
    let mut row_h: f64 = 0.0;

    for part in parts {
        if x + part.width + gap > sheet.width {
            x = gap;
            y += row_h + gap;
            row_h = 0.0;
        }
        if y + part.height + gap > sheet.height {
            // Vertical overflow is terminal for the whole remaining batch.
            break;
        }
        debug!(label = %part.label, x, y, "placed part");
        let w = part.width;
        let h = part.height;
        placed.push(part.placed_at(x, y));
        x += w + gap;
        row_h = row_h.max(h);
    }

    let dropped = total - placed.len();
    if dropped > 0 {
        warn!(dropped, total, "sheet overflow, trailing parts dropped");
    }
    NestResult { placed, dropped }
}
