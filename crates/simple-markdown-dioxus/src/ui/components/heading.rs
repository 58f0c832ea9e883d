use crate::ui::components::node_children::NodeChildren;
use dioxus::prelude::*;
use simple_markdown_engine::RenderNode;

#[component]
pub fn Heading(nodes: Vec<RenderNode>, level: u32) -> Element {
    let class_name = format!("heading level-{level}");

    match level {
        1 => rsx! { h1 { class: "{class_name}", NodeChildren { nodes } } },
        _ => rsx! { h2 { class: "{class_name}", NodeChildren { nodes } } },
    }
}
