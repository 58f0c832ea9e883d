use dioxus::prelude::*;

/// Shown instead of the editor when the startup document could not be loaded
#[component]
pub fn ErrorScreen(message: String, details: Option<String>) -> Element {
    rsx! {
        div {
            class: "error-screen",
            h1 { "Could not open document" }
            p { "{message}" }
            if let Some(ref detail_text) = details {
                pre { class: "error-details", "{detail_text}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::VirtualDom;
    use dioxus_ssr::render;

    #[test]
    fn test_error_screen_renders_message_and_details() {
        let mut dom = VirtualDom::new_with_props(
            ErrorScreen,
            ErrorScreenProps {
                message: "Failed to load document 'todo.md'".to_string(),
                details: Some("File not found: todo.md".to_string()),
            },
        );
        dom.rebuild_in_place();
        let html = render(&dom);

        assert!(html.contains("Could not open document"));
        assert!(html.contains("todo.md"));
        assert!(html.contains("File not found"));
    }

    #[test]
    fn test_error_screen_without_details() {
        let mut dom = VirtualDom::new_with_props(
            ErrorScreen,
            ErrorScreenProps {
                message: "Failed".to_string(),
                details: None,
            },
        );
        dom.rebuild_in_place();
        let html = render(&dom);

        assert!(!html.contains("<pre"));
    }
}
