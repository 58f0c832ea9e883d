pub mod document_preview;
pub mod error_screen;
pub mod heading;
pub mod list_component;
pub mod list_item_component;
pub mod markdown_editor;
pub mod node_children;
pub mod paragraph;
pub mod render_node;

pub use document_preview::DocumentPreview;
pub use error_screen::ErrorScreen;
pub use markdown_editor::MarkdownEditor;
