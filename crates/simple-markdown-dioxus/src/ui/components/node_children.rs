use crate::ui::components::render_node::RenderNodeView;
use dioxus::prelude::*;
use simple_markdown_engine::RenderNode;

/// Renders sibling nodes, keyed by the renderer's keys (text nodes fall back to their index)
#[component]
pub fn NodeChildren(nodes: Vec<RenderNode>) -> Element {
    let keyed = nodes
        .iter()
        .enumerate()
        .map(|(i, node)| (node_key(node, i), node.clone()))
        .collect::<Vec<_>>();

    rsx! {
        for (key, node) in keyed {
            RenderNodeView { key: "{key}", node }
        }
    }
}

fn node_key(node: &RenderNode, index: usize) -> String {
    node.key()
        .map(str::to_string)
        .unwrap_or_else(|| format!("text-{index}"))
}
