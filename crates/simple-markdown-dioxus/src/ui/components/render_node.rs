use crate::ui::components::{
    heading::Heading, list_component::ListComponent, list_item_component::ListItemComponent,
    paragraph::Paragraph,
};
use dioxus::prelude::*;
use simple_markdown_engine::{RenderNode, Tag};

/// Dispatches one render node to the component for its tag
#[component]
pub fn RenderNodeView(node: RenderNode) -> Element {
    match node {
        RenderNode::Text(text) => rsx! { "{text}" },
        RenderNode::Element(el) => {
            let nodes = el.children;
            match el.tag {
                Tag::H1 => rsx! { Heading { level: 1, nodes } },
                Tag::H2 => rsx! { Heading { level: 2, nodes } },
                Tag::P => rsx! { Paragraph { nodes } },
                Tag::Ul => rsx! { ListComponent { nodes } },
                Tag::Li => rsx! { ListItemComponent { nodes } },
            }
        }
    }
}
