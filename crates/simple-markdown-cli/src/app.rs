use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::text::Line;
use simple_markdown_engine::{RenderNode, io, render_markdown};
use std::path::PathBuf;

use crate::{buffer::EditBuffer, preview::preview_lines};

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Continue,
    Quit,
}

pub struct App {
    pub buffer: EditBuffer,
    document_path: Option<PathBuf>,
    nodes: Vec<RenderNode>,
    pub status: String,
}

impl App {
    pub fn new(initial_markdown: String, document_path: Option<PathBuf>) -> Self {
        let nodes = render_markdown(&initial_markdown);
        let status = match &document_path {
            Some(path) => format!("Editing {}", path.display()),
            None => "Editing the built-in sample".to_string(),
        };
        Self {
            buffer: EditBuffer::new(initial_markdown),
            document_path,
            nodes,
            status,
        }
    }

    pub fn nodes(&self) -> &[RenderNode] {
        &self.nodes
    }

    pub fn preview(&self) -> Vec<Line<'static>> {
        preview_lines(&self.nodes)
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        if key.kind != KeyEventKind::Press {
            return Action::Continue;
        }

        match key.code {
            KeyCode::Esc => return Action::Quit,
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => self.save(),
            KeyCode::Char(_) if key.modifiers.contains(KeyModifiers::CONTROL) => {}
            KeyCode::Char(c) => self.edit(|b| b.insert_char(c)),
            KeyCode::Enter => self.edit(EditBuffer::insert_newline),
            KeyCode::Tab => self.edit(|b| b.insert_str("    ")),
            KeyCode::Backspace => self.edit(EditBuffer::backspace),
            _ => {}
        }
        Action::Continue
    }

    fn edit(&mut self, f: impl FnOnce(&mut EditBuffer)) {
        f(&mut self.buffer);
        self.nodes = render_markdown(self.buffer.text());
    }

    fn save(&mut self) {
        let Some(path) = &self.document_path else {
            self.status = "No document path; start with a file argument to save".to_string();
            return;
        };

        match io::write_document(path, self.buffer.text()) {
            Ok(()) => {
                self.buffer.mark_saved();
                self.status = format!("Saved {}", path.display());
            }
            Err(e) => {
                self.status = format!("Save failed: {e}");
            }
        }
    }
}
