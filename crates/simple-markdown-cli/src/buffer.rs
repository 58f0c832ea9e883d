/// The text being edited. Input always lands at the end of the buffer.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EditBuffer {
    text: String,
    dirty: bool,
}

impl EditBuffer {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            dirty: false,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// True when the buffer changed since it was loaded or last saved.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_saved(&mut self) {
        self.dirty = false;
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.push(c);
        self.dirty = true;
    }

    pub fn insert_str(&mut self, s: &str) {
        self.text.push_str(s);
        self.dirty = true;
    }

    pub fn insert_newline(&mut self) {
        self.insert_char('\n');
    }

    /// Removes the last character; a no-op on an empty buffer.
    pub fn backspace(&mut self) {
        if self.text.pop().is_some() {
            self.dirty = true;
        }
    }

    pub fn line_count(&self) -> usize {
        simple_markdown_engine::split_lines(&self.text).len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn typing_appends_and_marks_dirty() {
        let mut buffer = EditBuffer::new("# Todo");
        assert!(!buffer.is_dirty());

        buffer.insert_newline();
        buffer.insert_str("- item");

        assert_eq!(buffer.text(), "# Todo\n- item");
        assert!(buffer.is_dirty());
        assert_eq!(buffer.line_count(), 2);
    }

    #[test]
    fn backspace_removes_whole_chars() {
        let mut buffer = EditBuffer::new("café");
        buffer.backspace();
        assert_eq!(buffer.text(), "caf");
    }

    #[test]
    fn backspace_on_empty_buffer_is_a_no_op() {
        let mut buffer = EditBuffer::default();
        buffer.backspace();
        assert_eq!(buffer.text(), "");
        assert!(!buffer.is_dirty());
        assert_eq!(buffer.line_count(), 1);
    }

    #[test]
    fn saving_clears_dirty_flag() {
        let mut buffer = EditBuffer::new("");
        buffer.insert_char('x');
        buffer.mark_saved();
        assert!(!buffer.is_dirty());
    }
}
