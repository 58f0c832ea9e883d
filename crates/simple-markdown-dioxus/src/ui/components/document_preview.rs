use crate::ui::components::node_children::NodeChildren;
use dioxus::prelude::*;

/// Re-parses and re-renders the whole buffer on every change
#[component]
pub fn DocumentPreview(markdown: String) -> Element {
    let nodes = simple_markdown_engine::render_markdown(&markdown);
    log::debug!("rendered {} top-level nodes", nodes.len());

    rsx! {
        div {
            class: "document-preview",
            NodeChildren { nodes }
        }
    }
}
