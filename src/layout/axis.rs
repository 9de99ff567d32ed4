//! Sparse size overrides and pixel/index mapping for one axis.
//!
//! Sizes are a dense default with a sparse map of signed deltas on top, so
//! layout queries walk forward from the scroll index instead of consulting
//! a precomputed position table; indices are unbounded and allocated lazily,
//! and most steps are plain arithmetic.

use std::collections::HashMap;

/// Sparse mapping from axis index to a signed size delta.
///
/// Absence of an entry means the default size applies. Deltas are clamped
/// so no index ever shrinks below `min_size`; once set, an override stays
/// for the session (there is no removal).
#[derive(Debug, Clone)]
pub struct SizeOverrides {
    default_size: f32,
    min_size: f32,
    deltas: HashMap<u32, f32>,
}

impl SizeOverrides {
    /// Create an empty override table.
    pub fn new(default_size: f32, min_size: f32) -> Self {
        Self {
            default_size,
            min_size,
            deltas: HashMap::new(),
        }
    }

    /// Bulk-load persisted `(index, delta)` pairs, clamping each one.
    pub fn load<I: IntoIterator<Item = (u32, f32)>>(&mut self, pairs: I) {
        for (index, delta) in pairs {
            self.set_delta(index, delta);
        }
    }

    /// Stored delta for an index, 0.0 when absent.
    pub fn get_delta(&self, index: u32) -> f32 {
        self.deltas.get(&index).copied().unwrap_or(0.0)
    }

    /// Store a delta, clamped so `default_size + delta >= min_size`.
    ///
    /// Returns the value actually stored; the caller is responsible for
    /// persisting it.
    pub fn set_delta(&mut self, index: u32, delta: f32) -> f32 {
        let clamped = delta.max(self.min_size - self.default_size);
        self.deltas.insert(index, clamped);
        clamped
    }

    /// Effective pixel size of an index.
    pub fn size_of(&self, index: u32) -> f32 {
        self.default_size + self.get_delta(index)
    }
}

/// Borrowing view that answers pixel/index queries for one axis.
///
/// `origin` is the pixel offset where index `scroll_index` starts (the
/// header reservation on that axis). Content scrolled above the viewport
/// is not reachable: every query walks forward from the scroll index.
#[derive(Debug, Clone, Copy)]
pub struct AxisLayout<'a> {
    overrides: &'a SizeOverrides,
    origin: f32,
}

impl<'a> AxisLayout<'a> {
    /// Create a layout view over an override table.
    pub fn new(overrides: &'a SizeOverrides, origin: f32) -> Self {
        Self { overrides, origin }
    }

    /// Effective pixel size of an index.
    pub fn size_of(&self, index: u32) -> f32 {
        self.overrides.size_of(index)
    }

    /// Total pixel extent of indices `[from, to)`; 0 when `to <= from`.
    pub fn extent(&self, from: u32, to: u32) -> f32 {
        (from..to).map(|i| self.overrides.size_of(i)).sum()
    }

    /// Pixel position of an index's leading edge, relative to the current scroll.
    pub fn position_of(&self, index: u32, scroll_index: u32) -> f32 {
        self.origin + self.extent(scroll_index, index)
    }

    /// Index whose span contains the given pixel.
    ///
    /// Pixels at or before the origin resolve to the scroll index itself;
    /// a pixel exactly on a trailing edge belongs to the next index.
    pub fn index_at(&self, pixel: f32, scroll_index: u32) -> u32 {
        let mut edge = self.origin;
        let mut index = scroll_index;
        loop {
            edge += self.overrides.size_of(index);
            if edge > pixel {
                return index;
            }
            index += 1;
        }
    }

    /// Index whose trailing edge lies within `tolerance` of the pixel, if any.
    ///
    /// This is the resize-handle query: the returned index is the one the
    /// handle resizes.
    pub fn handle_near(&self, pixel: f32, scroll_index: u32, tolerance: f32) -> Option<u32> {
        let mut edge = self.origin;
        let mut index = scroll_index;
        loop {
            edge += self.overrides.size_of(index);
            if (pixel - edge).abs() < tolerance {
                return Some(index);
            }
            if edge > pixel + tolerance {
                return None;
            }
            index += 1;
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp, clippy::panic)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn cols() -> SizeOverrides {
        SizeOverrides::new(100.0, 5.0)
    }

    #[test]
    fn get_delta_defaults_to_zero() {
        let overrides = cols();
        assert_eq!(overrides.get_delta(7), 0.0);
        assert_eq!(overrides.size_of(7), 100.0);
    }

    #[test]
    fn set_delta_round_trips_and_is_idempotent() {
        let mut overrides = cols();
        assert_eq!(overrides.set_delta(3, 40.0), 40.0);
        assert_eq!(overrides.get_delta(3), 40.0);
        assert_eq!(overrides.set_delta(3, 40.0), 40.0);
        assert_eq!(overrides.get_delta(3), 40.0);
    }

    #[test_case(-40.0, -25.0; "below minimum clamps to min_size")]
    #[test_case(-25.0, -25.0; "exactly minimum passes")]
    #[test_case(200.0, 200.0; "growth is unbounded")]
    fn set_delta_clamps(input: f32, stored: f32) {
        let mut rows = SizeOverrides::new(30.0, 5.0);
        assert_eq!(rows.set_delta(2, input), stored);
        assert_eq!(rows.get_delta(2), stored);
    }

    #[test]
    fn extent_of_empty_range_is_zero() {
        let overrides = cols();
        let layout = AxisLayout::new(&overrides, 40.0);
        assert_eq!(layout.extent(5, 5), 0.0);
        assert_eq!(layout.extent(6, 2), 0.0);
    }

    #[test]
    fn sparse_position_lookup() {
        // Overrides at {3: +40, 5: +200}: position of 6 from scroll 0 is
        // header + 3*100 + 140 + 100 + 300 = header + 640.
        let mut overrides = cols();
        overrides.set_delta(3, 40.0);
        overrides.set_delta(5, 200.0);
        let layout = AxisLayout::new(&overrides, 40.0);
        assert_eq!(layout.position_of(6, 0), 40.0 + 640.0);
    }

    #[test]
    fn index_at_walks_from_scroll() {
        let overrides = cols();
        let layout = AxisLayout::new(&overrides, 40.0);
        assert_eq!(layout.index_at(0.0, 0), 0);
        assert_eq!(layout.index_at(139.9, 0), 0);
        assert_eq!(layout.index_at(140.0, 0), 1);
        // Scrolled: the same pixel resolves relative to the scroll index,
        // nothing above it is reachable.
        assert_eq!(layout.index_at(140.0, 4), 5);
        assert_eq!(layout.index_at(0.0, 4), 4);
    }

    #[test]
    fn index_at_is_monotonic() {
        let mut overrides = cols();
        overrides.set_delta(1, -60.0);
        overrides.set_delta(4, 150.0);
        let layout = AxisLayout::new(&overrides, 40.0);
        let mut last = 0;
        for step in 0..200 {
            let index = layout.index_at(step as f32 * 5.0, 0);
            assert!(index >= last);
            last = index;
        }
    }

    #[test]
    fn handle_near_finds_trailing_edges() {
        let overrides = cols();
        let layout = AxisLayout::new(&overrides, 40.0);
        // Trailing edge of column 0 sits at 140.
        assert_eq!(layout.handle_near(140.0, 0, 4.0), Some(0));
        assert_eq!(layout.handle_near(143.9, 0, 4.0), Some(0));
        assert_eq!(layout.handle_near(136.1, 0, 4.0), Some(0));
        assert_eq!(layout.handle_near(144.0, 0, 4.0), None);
        assert_eq!(layout.handle_near(190.0, 0, 4.0), None);
        assert_eq!(layout.handle_near(240.0, 0, 4.0), Some(1));
    }

    #[test]
    fn handle_near_respects_scroll() {
        let overrides = cols();
        let layout = AxisLayout::new(&overrides, 40.0);
        // With scroll at 3, the first boundary is the trailing edge of 3.
        assert_eq!(layout.handle_near(140.0, 3, 4.0), Some(3));
    }

    #[test]
    fn leading_edge_of_first_index_is_not_a_handle() {
        let overrides = cols();
        let layout = AxisLayout::new(&overrides, 40.0);
        assert_eq!(layout.handle_near(40.0, 0, 4.0), None);
    }
}
