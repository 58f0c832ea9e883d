use crate::ui::components::node_children::NodeChildren;
use dioxus::prelude::*;
use simple_markdown_engine::RenderNode;

#[component]
pub fn Paragraph(nodes: Vec<RenderNode>) -> Element {
    rsx! {
        p {
            class: "paragraph",
            NodeChildren { nodes }
        }
    }
}
