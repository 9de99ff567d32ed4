//! In-progress resize drag state.
//!
//! One drag at a time: a press on a handle starts it, motion updates the
//! pointer, release commits the accumulated offset to the override table
//! (done by the session, which owns both sides). Release always commits
//! from the last known pointer position; there is no cancel path.

use crate::layout::Axis;

/// Transient state for a column or row resize drag.
#[derive(Debug, Clone, Copy)]
pub struct DragResize {
    /// Which axis is being resized.
    pub axis: Axis,
    /// The axis index whose trailing edge is being dragged.
    pub index: u32,
    /// Pointer position along the axis at drag start.
    pub start: f32,
    /// Latest pointer position along the axis.
    pub current: f32,
}

impl DragResize {
    /// Start a drag at the press position.
    pub fn begin(axis: Axis, index: u32, pointer: f32) -> Self {
        Self {
            axis,
            index,
            start: pointer,
            current: pointer,
        }
    }

    /// Track pointer motion.
    pub fn update(&mut self, pointer: f32) {
        self.current = pointer;
    }

    /// Signed size change accumulated so far.
    pub fn offset(&self) -> f32 {
        self.current - self.start
    }
}
