use crate::ui::components::node_children::NodeChildren;
use dioxus::prelude::*;
use simple_markdown_engine::RenderNode;

/// The `ul` wrapper the renderer puts around every list item
#[component]
pub fn ListComponent(nodes: Vec<RenderNode>) -> Element {
    rsx! {
        ul {
            class: "markdown-list",
            NodeChildren { nodes }
        }
    }
}
