use crate::ui::components::{DocumentPreview, MarkdownEditor};
use dioxus::prelude::*;

const PREVIEW_CSS: &str = include_str!("../assets/preview.css");

#[component]
pub fn App(initial_markdown: String) -> Element {
    let mut markdown = use_signal(|| initial_markdown.clone());

    rsx! {
        style { {PREVIEW_CSS} }
        div {
            class: "app-container",
            div { class: "pane-header", "MARKDOWN" }
            div { class: "pane-header", "RENDER" }
            MarkdownEditor {
                value: markdown.read().clone(),
                on_change: move |text: String| {
                    log::debug!("buffer changed ({} bytes)", text.len());
                    markdown.set(text);
                }
            }
            DocumentPreview { markdown: markdown.read().clone() }
        }
    }
}
