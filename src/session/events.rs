//! Event entry points for the window collaborator.
//!
//! All state transitions happen synchronously on the event thread; every
//! handler leaves the session in a consistent, renderable state before it
//! returns. A resize commit is fully applied (override table and store)
//! before the next render pass reads layout state.

use super::{DragResize, GridSession, HitTarget};
use crate::layout::Axis;

/// Navigation and editing keys the core reacts to.
///
/// Character input arrives separately via
/// [`char_input`](GridSession::char_input).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Move selection one column left.
    Left,
    /// Move selection one column right.
    Right,
    /// Move selection one row up.
    Up,
    /// Move selection one row down.
    Down,
    /// Same as Right.
    Tab,
    /// Same as Left.
    ShiftTab,
    /// Commit the input line to the active cell.
    Enter,
    /// Delete the last input-line character.
    Backspace,
    /// Request shutdown.
    Escape,
}

impl GridSession {
    /// Pointer press. Starts a resize drag on a handle, moves the selection
    /// on a cell. Ignored entirely while a drag is in progress: a second
    /// resize cannot start mid-drag.
    pub fn pointer_pressed(&mut self, x: f32, y: f32) {
        if self.drag_active() {
            return;
        }
        match self.classify(x, y) {
            HitTarget::ColumnHandle(col) => {
                self.set_drag(Some(DragResize::begin(Axis::Col, col, x)));
            }
            HitTarget::RowHandle(row) => {
                self.set_drag(Some(DragResize::begin(Axis::Row, row, y)));
            }
            HitTarget::Cell(col, row) => {
                self.set_active(Axis::Col, col);
                self.set_active(Axis::Row, row);
                self.reload_input();
            }
            HitTarget::InputLine | HitTarget::None => {}
        }
    }

    /// Pointer motion. Only feeds an in-progress drag; hover feedback goes
    /// through [`classify`](GridSession::classify) instead.
    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        if let Some(drag) = self.drag_mut() {
            let pointer = match drag.axis {
                Axis::Col => x,
                Axis::Row => y,
            };
            drag.update(pointer);
        }
    }

    /// Pointer release. Commits an in-progress drag from its last pointer
    /// position, wherever the release happened.
    pub fn pointer_released(&mut self) {
        if let Some(drag) = self.take_drag() {
            self.commit_resize(drag.axis, drag.index, drag.offset());
        }
    }

    /// Wheel scroll, in whole indices per axis. Does not chase the active
    /// cell; a later selection move re-synchronizes.
    pub fn wheel(&mut self, delta_cols: i32, delta_rows: i32) {
        self.scroll_axis(Axis::Col, delta_cols);
        self.scroll_axis(Axis::Row, delta_rows);
    }

    /// Navigation / editing key press.
    pub fn key_pressed(&mut self, key: Key) {
        match key {
            Key::Left | Key::ShiftTab => self.move_selection(Axis::Col, -1),
            Key::Right | Key::Tab => self.move_selection(Axis::Col, 1),
            Key::Up => self.move_selection(Axis::Row, -1),
            Key::Down => self.move_selection(Axis::Row, 1),
            Key::Enter => self.commit_input(),
            Key::Backspace => self.input_mut().backspace(),
            Key::Escape => self.request_close(),
        }
    }

    /// Typed character, appended to the input line.
    pub fn char_input(&mut self, c: char) {
        self.input_mut().push_char(c);
    }

    /// Window resize: new extents on both axes, visibility re-enforced.
    pub fn window_resized(&mut self, width: f32, height: f32) {
        self.resize_window(width, height);
    }

    fn move_selection(&mut self, axis: Axis, delta: i32) {
        self.move_active(axis, delta);
        self.reload_input();
    }
}
