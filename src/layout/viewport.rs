//! Per-axis viewport state: scroll position and active selection.

use super::SizeOverrides;

/// Scroll and selection state for one axis.
///
/// Invariant maintained by [`ensure_visible`](AxisViewport::ensure_visible):
/// `scroll_index <= active_index`, and the extent of
/// `[scroll_index, active_index)` plus the fixed reservation fits in the
/// window extent. The active index counts as visible as soon as its leading
/// edge is inside the window (partial-visibility policy).
#[derive(Debug, Clone)]
pub struct AxisViewport {
    /// Smallest axis index currently rendered.
    scroll_index: u32,
    /// Currently selected index, unbounded above.
    active_index: u32,
    /// Window extent along this axis in pixels.
    extent: f32,
    /// Fixed pixels reserved for headers/input line on this axis.
    reserved: f32,
}

impl AxisViewport {
    /// Create a viewport at the origin.
    pub fn new(extent: f32, reserved: f32) -> Self {
        Self {
            scroll_index: 0,
            active_index: 0,
            extent,
            reserved,
        }
    }

    /// Smallest visible axis index.
    pub fn scroll_index(&self) -> u32 {
        self.scroll_index
    }

    /// Currently selected index.
    pub fn active_index(&self) -> u32 {
        self.active_index
    }

    /// Pixels available for grid content after the fixed reservation.
    fn available(&self) -> f32 {
        (self.extent - self.reserved).max(0.0)
    }

    /// Move the selection by a signed number of indices, clamping at zero,
    /// then scroll as needed to keep it visible.
    pub fn move_active(&mut self, delta: i32, overrides: &SizeOverrides) {
        self.active_index = self.active_index.saturating_add_signed(delta);
        self.ensure_visible(overrides);
    }

    /// Jump the selection to an index (pointer click), keeping it visible.
    pub fn set_active(&mut self, index: u32, overrides: &SizeOverrides) {
        self.active_index = index;
        self.ensure_visible(overrides);
    }

    /// Recompute the minimum scroll that keeps the active index visible and
    /// apply the two-sided clamp.
    ///
    /// `min_scroll` is found by accumulating the extents of indices up to
    /// the active one and discarding leading indices while the total still
    /// overflows the available extent. Scroll is raised to `min_scroll` when
    /// the selection ran off the far side, and pulled back to the active
    /// index when the selection moved above the viewport.
    pub fn ensure_visible(&mut self, overrides: &SizeOverrides) {
        let available = self.available();
        let mut total = 0.0;
        for i in 0..self.active_index {
            total += overrides.size_of(i);
        }
        let mut min_scroll = 0;
        while min_scroll < self.active_index && total > available {
            total -= overrides.size_of(min_scroll);
            min_scroll += 1;
        }

        if self.scroll_index < min_scroll {
            self.scroll_index = min_scroll;
        } else if self.scroll_index > self.active_index {
            self.scroll_index = self.active_index;
        }
    }

    /// Explicit scroll by whole indices (wheel).
    ///
    /// Clamps at zero only: the active index may scroll out of view, and
    /// there is no upper bound from content size. A later selection move
    /// re-synchronizes via [`ensure_visible`](AxisViewport::ensure_visible).
    pub fn scroll_by(&mut self, delta: i32) {
        self.scroll_index = self.scroll_index.saturating_add_signed(delta);
    }

    /// Number of indices that fit in the window starting at the scroll
    /// index, counting the final partially visible one.
    ///
    /// Rendering clips the last item rather than omitting it, so this
    /// deliberately counts one past the last fully visible index when the
    /// boundary lands mid-item.
    pub fn visible_count(&self, overrides: &SizeOverrides) -> u32 {
        let available = self.available();
        let mut total = 0.0;
        let mut count = 0;
        let mut index = self.scroll_index;
        while total < available {
            total += overrides.size_of(index);
            count += 1;
            index += 1;
        }
        count
    }

    /// Update the window extent (resize) and re-run visibility enforcement.
    pub fn set_extent(&mut self, extent: f32, overrides: &SizeOverrides) {
        self.extent = extent;
        self.ensure_visible(overrides);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp, clippy::panic)]
mod tests {
    use super::*;

    fn cols() -> SizeOverrides {
        SizeOverrides::new(100.0, 5.0)
    }

    #[test]
    fn selection_walk_off_right_edge() {
        // Window width 1024, header 40, default column 100: eleven moves
        // right must scroll exactly one column off the near side.
        let overrides = cols();
        let mut view = AxisViewport::new(1024.0, 40.0);
        for _ in 0..11 {
            view.move_active(1, &overrides);
        }
        assert_eq!(view.active_index(), 10);
        assert_eq!(view.scroll_index(), 1);
    }

    #[test]
    fn moving_back_pulls_scroll_with_selection() {
        let overrides = cols();
        let mut view = AxisViewport::new(1024.0, 40.0);
        for _ in 0..20 {
            view.move_active(1, &overrides);
        }
        assert!(view.scroll_index() > 0);
        for _ in 0..20 {
            view.move_active(-1, &overrides);
        }
        assert_eq!(view.active_index(), 0);
        assert_eq!(view.scroll_index(), 0);
    }

    #[test]
    fn move_active_clamps_at_zero() {
        let overrides = cols();
        let mut view = AxisViewport::new(1024.0, 40.0);
        view.move_active(-5, &overrides);
        assert_eq!(view.active_index(), 0);
        assert_eq!(view.scroll_index(), 0);
    }

    #[test]
    fn wide_override_scrolls_earlier() {
        let mut overrides = cols();
        overrides.set_delta(2, 500.0);
        let mut view = AxisViewport::new(1024.0, 40.0);
        // Columns 0..=4 span 100+100+600+100+100; selecting 5 must drop
        // enough leading columns that [scroll, 5) fits in 984.
        for _ in 0..5 {
            view.move_active(1, &overrides);
        }
        assert_eq!(view.active_index(), 5);
        assert_eq!(view.scroll_index(), 1);
        // extent(1, 5) = 100 + 600 + 100 + 100 = 900 <= 984
    }

    #[test]
    fn explicit_scroll_is_boundless_and_unclamped() {
        let overrides = cols();
        let mut view = AxisViewport::new(1024.0, 40.0);
        view.scroll_by(500);
        assert_eq!(view.scroll_index(), 500);
        assert_eq!(view.active_index(), 0);
        view.scroll_by(-600);
        assert_eq!(view.scroll_index(), 0);
        // A selection move re-synchronizes.
        view.scroll_by(500);
        view.move_active(1, &overrides);
        assert_eq!(view.scroll_index(), 1);
    }

    #[test]
    fn visible_count_includes_partial_item() {
        let overrides = cols();
        let view = AxisViewport::new(1024.0, 40.0);
        // 984 available: nine full columns plus one partial.
        assert_eq!(view.visible_count(&overrides), 10);
    }

    #[test]
    fn visible_count_exact_fit() {
        let overrides = cols();
        let view = AxisViewport::new(1040.0, 40.0);
        assert_eq!(view.visible_count(&overrides), 10);
    }

    #[test]
    fn shrinking_window_rescrolls() {
        let overrides = cols();
        let mut view = AxisViewport::new(1024.0, 40.0);
        for _ in 0..10 {
            view.move_active(1, &overrides);
        }
        assert_eq!(view.scroll_index(), 1);
        view.set_extent(540.0, &overrides);
        // 500 available: [scroll, 10) must fit, so scroll rises to 5.
        assert_eq!(view.scroll_index(), 5);
    }
}
