use crate::ui::components::node_children::NodeChildren;
use dioxus::prelude::*;
use simple_markdown_engine::RenderNode;

/// A single list item; its text arrives already sanitized by the renderer
#[component]
pub fn ListItemComponent(nodes: Vec<RenderNode>) -> Element {
    rsx! {
        li {
            class: "markdown-list-item",
            NodeChildren { nodes }
        }
    }
}
