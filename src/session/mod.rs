//! Grid session: the single owner of all interactive state.
//!
//! One `GridSession` holds the viewport and selection per axis, both size
//! override tables, the input line, the optional sheet store, and the
//! in-progress resize drag. The window collaborator feeds it events
//! (`events` module) and the renderer reads it through the accessors here;
//! nothing in the crate keeps free-standing mutable state.

mod drag;
mod events;
mod hit;

pub use drag::DragResize;
pub use events::Key;
pub use hit::HitTarget;

use crate::config::LayoutConfig;
use crate::editor::InputLine;
use crate::layout::{Axis, AxisLayout, AxisViewport, SizeOverrides};
use crate::storage::SqliteStore;

/// All mutable state of one open grid window.
pub struct GridSession {
    config: LayoutConfig,
    cols: SizeOverrides,
    rows: SizeOverrides,
    col_view: AxisViewport,
    row_view: AxisViewport,
    drag: Option<DragResize>,
    input: InputLine,
    store: Option<SqliteStore>,
    close_requested: bool,
}

impl GridSession {
    /// Create a session with no backing store (defaults only, nothing
    /// persists). Used directly in tests and as the degraded mode when the
    /// store cannot be opened.
    pub fn new(config: LayoutConfig, width: f32, height: f32) -> Self {
        let cols = SizeOverrides::new(config.default_col_width, config.min_axis_size);
        let rows = SizeOverrides::new(config.default_row_height, config.min_axis_size);
        let col_view = AxisViewport::new(width, config.header_width);
        let row_view = AxisViewport::new(height, config.reserved_height());
        Self {
            config,
            cols,
            rows,
            col_view,
            row_view,
            drag: None,
            input: InputLine::new(),
            store: None,
            close_requested: false,
        }
    }

    /// Create a session on top of an open store, loading persisted size
    /// overrides. A failed read degrades that axis to default sizing.
    pub fn with_store(config: LayoutConfig, store: SqliteStore, width: f32, height: f32) -> Self {
        let mut session = Self::new(config, width, height);
        for axis in [Axis::Col, Axis::Row] {
            match store.read_all_size_overrides(axis) {
                Ok(pairs) => session.overrides_mut(axis).load(pairs),
                Err(e) => {
                    tracing::warn!(?axis, error = %e, "reading size overrides failed, using defaults");
                }
            }
        }
        session.store = Some(store);
        session
    }

    /// Open (or create) the sheet database at `path` and build a session on
    /// it. If the database cannot be opened the session still starts, with
    /// default layout and nothing persisted.
    pub fn open(config: LayoutConfig, path: &std::path::Path, width: f32, height: f32) -> Self {
        match SqliteStore::open_path(path) {
            Ok(store) => Self::with_store(config, store, width, height),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "opening sheet store failed, running without persistence");
                Self::new(config, width, height)
            }
        }
    }

    /// Layout constants in effect.
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    fn overrides(&self, axis: Axis) -> &SizeOverrides {
        match axis {
            Axis::Col => &self.cols,
            Axis::Row => &self.rows,
        }
    }

    fn overrides_mut(&mut self, axis: Axis) -> &mut SizeOverrides {
        match axis {
            Axis::Col => &mut self.cols,
            Axis::Row => &mut self.rows,
        }
    }

    fn viewport(&self, axis: Axis) -> &AxisViewport {
        match axis {
            Axis::Col => &self.col_view,
            Axis::Row => &self.row_view,
        }
    }

    fn viewport_mut(&mut self, axis: Axis) -> &mut AxisViewport {
        match axis {
            Axis::Col => &mut self.col_view,
            Axis::Row => &mut self.row_view,
        }
    }

    /// Layout query view for one axis, anchored at its header reservation.
    fn layout(&self, axis: Axis) -> AxisLayout<'_> {
        match axis {
            Axis::Col => AxisLayout::new(&self.cols, self.config.header_width),
            Axis::Row => AxisLayout::new(&self.rows, self.config.reserved_height()),
        }
    }

    // Renderer accessors. Read-only; enough to draw grid lines, headers,
    // the selection rectangle, and the drag preview line.

    /// Effective pixel size of an axis index.
    pub fn size_of(&self, axis: Axis, index: u32) -> f32 {
        self.overrides(axis).size_of(index)
    }

    /// Stored override delta for an axis index (0.0 when absent).
    pub fn override_delta(&self, axis: Axis, index: u32) -> f32 {
        self.overrides(axis).get_delta(index)
    }

    /// Leading-edge pixel position of an index relative to the current scroll.
    pub fn position_of(&self, axis: Axis, index: u32) -> f32 {
        self.layout(axis)
            .position_of(index, self.viewport(axis).scroll_index())
    }

    /// Currently selected index on an axis.
    pub fn active_index(&self, axis: Axis) -> u32 {
        self.viewport(axis).active_index()
    }

    /// Smallest visible index on an axis.
    pub fn scroll_index(&self, axis: Axis) -> u32 {
        self.viewport(axis).scroll_index()
    }

    /// Number of (possibly partially) visible indices on an axis.
    pub fn visible_count(&self, axis: Axis) -> u32 {
        self.viewport(axis).visible_count(self.overrides(axis))
    }

    /// The in-progress resize drag, if any: axis and current pointer
    /// position along it, for drawing the live preview line.
    pub fn drag_preview(&self) -> Option<(Axis, f32)> {
        self.drag.as_ref().map(|d| (d.axis, d.current))
    }

    /// Current input line content.
    pub fn input_text(&self) -> &str {
        self.input.text()
    }

    /// True once Escape requested shutdown; the window collaborator polls this.
    pub fn close_requested(&self) -> bool {
        self.close_requested
    }

    /// Stored text of a cell, `None` when absent or when the store is
    /// unavailable (degraded mode reads as an empty grid).
    pub fn cell_value(&self, col: u32, row: u32) -> Option<String> {
        let store = self.store.as_ref()?;
        match store.get_cell_value(col, row) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(col, row, error = %e, "cell read failed");
                None
            }
        }
    }

    /// All cells inside the visible viewport, for rendering.
    pub fn cells_in_view(&self) -> Vec<(u32, u32, String)> {
        let Some(store) = self.store.as_ref() else {
            return Vec::new();
        };
        let col_start = self.col_view.scroll_index();
        let row_start = self.row_view.scroll_index();
        let cols = col_start..col_start.saturating_add(self.visible_count(Axis::Col));
        let rows = row_start..row_start.saturating_add(self.visible_count(Axis::Row));
        match store.query_cells_in_range(cols, rows) {
            Ok(cells) => cells,
            Err(e) => {
                tracing::warn!(error = %e, "cell range query failed");
                Vec::new()
            }
        }
    }

    /// Classify a pointer position. Stateless; also used for cursor-shape
    /// feedback between clicks.
    pub fn classify(&self, x: f32, y: f32) -> HitTarget {
        hit::classify(
            &self.config,
            self.layout(Axis::Col),
            self.layout(Axis::Row),
            self.col_view.scroll_index(),
            self.row_view.scroll_index(),
            x,
            y,
        )
    }

    /// Commit a resize: clamp and store the new delta, persist it, and
    /// re-run visibility enforcement on the resized axis. The table update
    /// and the store write complete before this returns, so the next render
    /// pass reads consistent layout state.
    pub(crate) fn commit_resize(&mut self, axis: Axis, index: u32, offset: f32) {
        let old = self.overrides(axis).get_delta(index);
        let stored = self.overrides_mut(axis).set_delta(index, old + offset);
        if let Some(store) = self.store.as_ref() {
            if let Err(e) = store.upsert_size_override(axis, index, stored) {
                tracing::warn!(?axis, index, error = %e, "persisting size override failed");
            } else {
                tracing::debug!(?axis, index, delta = stored, "size override committed");
            }
        }
        match axis {
            Axis::Col => self.col_view.ensure_visible(&self.cols),
            Axis::Row => self.row_view.ensure_visible(&self.rows),
        }
    }

    pub(crate) fn set_drag(&mut self, drag: Option<DragResize>) {
        self.drag = drag;
    }

    pub(crate) fn drag_mut(&mut self) -> Option<&mut DragResize> {
        self.drag.as_mut()
    }

    pub(crate) fn take_drag(&mut self) -> Option<DragResize> {
        self.drag.take()
    }

    pub(crate) fn drag_active(&self) -> bool {
        self.drag.is_some()
    }

    pub(crate) fn input_mut(&mut self) -> &mut InputLine {
        &mut self.input
    }

    /// Reload the input line from the newly selected cell.
    pub(crate) fn reload_input(&mut self) {
        let col = self.col_view.active_index();
        let row = self.row_view.active_index();
        let text = self.cell_value(col, row).unwrap_or_default();
        self.input.set_text(text);
    }

    /// Write the input line's content to the active cell.
    pub(crate) fn commit_input(&mut self) {
        let col = self.col_view.active_index();
        let row = self.row_view.active_index();
        if let Some(store) = self.store.as_ref() {
            if let Err(e) = store.set_cell_value(col, row, self.input.text()) {
                tracing::warn!(col, row, error = %e, "cell write failed");
            }
        }
    }

    pub(crate) fn request_close(&mut self) {
        self.close_requested = true;
    }

    pub(crate) fn move_active(&mut self, axis: Axis, delta: i32) {
        match axis {
            Axis::Col => self.col_view.move_active(delta, &self.cols),
            Axis::Row => self.row_view.move_active(delta, &self.rows),
        }
    }

    pub(crate) fn set_active(&mut self, axis: Axis, index: u32) {
        match axis {
            Axis::Col => self.col_view.set_active(index, &self.cols),
            Axis::Row => self.row_view.set_active(index, &self.rows),
        }
    }

    pub(crate) fn scroll_axis(&mut self, axis: Axis, delta: i32) {
        self.viewport_mut(axis).scroll_by(delta);
    }

    pub(crate) fn resize_window(&mut self, width: f32, height: f32) {
        self.col_view.set_extent(width, &self.cols);
        self.row_view.set_extent(height, &self.rows);
    }
}
