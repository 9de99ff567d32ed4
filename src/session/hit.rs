//! Pointer classification: which interactive region is under the cursor.
//!
//! A single stateless priority chain replaces per-target lookup functions;
//! the evaluation order is a contract because regions overlap at their
//! boundaries, and it is pinned down by tests.

use crate::config::LayoutConfig;
use crate::layout::AxisLayout;

/// Target of a hit test (what is under the pointer).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// The input line strip at the top of the window.
    InputLine,
    /// A column-resize handle; the index is the column the handle resizes.
    ColumnHandle(u32),
    /// A row-resize handle; the index is the row the handle resizes.
    RowHandle(u32),
    /// A grid cell at (col, row).
    Cell(u32, u32),
    /// Nothing (outside any interactive region).
    None,
}

/// Classify a pointer position against the current layout state.
///
/// First match wins, in this order: input line, column handle, row handle,
/// cell. Handle detection only applies inside the matching header band, so
/// a pointer that sits both on a cell boundary and in a handle's tolerance
/// band resolves to the handle. No side effects; safe to call every event
/// for cursor-shape feedback as well as click dispatch.
pub(crate) fn classify(
    config: &LayoutConfig,
    cols: AxisLayout<'_>,
    rows: AxisLayout<'_>,
    scroll_cols: u32,
    scroll_rows: u32,
    x: f32,
    y: f32,
) -> HitTarget {
    if !(x >= 0.0 && y >= 0.0 && x.is_finite() && y.is_finite()) {
        return HitTarget::None;
    }

    // Input line: top strip, past the leading icon glyph.
    if y < config.input_line_height {
        if x >= config.input_icon_width {
            return HitTarget::InputLine;
        }
        return HitTarget::None;
    }

    // Column header band: resize handles only.
    if y < config.reserved_height() {
        if let Some(col) = cols.handle_near(x, scroll_cols, config.handle_tolerance) {
            return HitTarget::ColumnHandle(col);
        }
        return HitTarget::None;
    }

    // Row header band: resize handles only.
    if x < config.header_width {
        if let Some(row) = rows.handle_near(y, scroll_rows, config.handle_tolerance) {
            return HitTarget::RowHandle(row);
        }
        return HitTarget::None;
    }

    // Grid body.
    HitTarget::Cell(
        cols.index_at(x, scroll_cols),
        rows.index_at(y, scroll_rows),
    )
}
