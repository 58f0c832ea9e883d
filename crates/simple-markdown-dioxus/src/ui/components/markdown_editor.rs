use dioxus::prelude::*;

/// Raw markdown textarea. Every keystroke hands the whole buffer to `on_change`.
#[component]
pub fn MarkdownEditor(value: String, on_change: Callback<String>) -> Element {
    rsx! {
        textarea {
            class: "markdown-editor",
            value: "{value}",
            spellcheck: false,
            rows: calculate_textarea_rows(&value),
            oninput: move |event: Event<FormData>| {
                on_change.call(event.value());
            },
        }
    }
}

/// Calculate appropriate number of rows for textarea based on content
fn calculate_textarea_rows(content: &str) -> u32 {
    let line_count = content.lines().count().max(1);
    (line_count as u32).clamp(10, 40)
}
