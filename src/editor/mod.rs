//! Input line for editing the active cell's content.
//!
//! The buffer mirrors whatever cell is selected: selection changes reload
//! it from the store, Enter commits it back. Keyboard handling lives in
//! `session::events`; this is just the text state.

/// Editable text buffer shown on the input line.
#[derive(Debug, Default)]
pub struct InputLine {
    text: String,
}

impl InputLine {
    /// Create an empty input line.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current buffer content.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the buffer (selection changed to another cell).
    pub fn set_text(&mut self, text: String) {
        self.text = text;
    }

    /// Append a typed character.
    pub fn push_char(&mut self, c: char) {
        if !c.is_control() {
            self.text.push(c);
        }
    }

    /// Remove the last character, if any.
    pub fn backspace(&mut self) {
        self.text.pop();
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn typing_and_backspace() {
        let mut input = InputLine::new();
        input.push_char('4');
        input.push_char('2');
        assert_eq!(input.text(), "42");
        input.backspace();
        assert_eq!(input.text(), "4");
        input.backspace();
        input.backspace();
        assert_eq!(input.text(), "");
    }

    #[test]
    fn control_characters_are_ignored() {
        let mut input = InputLine::new();
        input.push_char('\u{8}');
        input.push_char('\n');
        input.push_char('a');
        assert_eq!(input.text(), "a");
    }
}
