use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use simple_markdown_engine::{RenderNode, Tag};

/// Lays the render tree out as terminal lines, one per leaf element.
pub fn preview_lines(nodes: &[RenderNode]) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for node in nodes {
        push_node(node, &mut lines);
    }
    lines
}

fn push_node(node: &RenderNode, lines: &mut Vec<Line<'static>>) {
    match node.tag() {
        Some(Tag::H1) => lines.push(Line::from(Span::styled(
            node.text_content(),
            Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        ))),
        Some(Tag::H2) => lines.push(Line::from(Span::styled(
            node.text_content(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ))),
        Some(Tag::P) => lines.push(Line::from(node.text_content())),
        Some(Tag::Ul) => {
            for child in node.children() {
                push_node(child, lines);
            }
        }
        Some(Tag::Li) => lines.push(Line::from(vec![
            Span::styled("• ", Style::default().fg(Color::Cyan)),
            Span::raw(node.text_content().trim_start().to_string()),
        ])),
        None => lines.push(Line::from(node.text_content())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use simple_markdown_engine::render_markdown;

    fn plain(lines: &[Line<'_>]) -> Vec<String> {
        lines.iter().map(|l| l.to_string()).collect()
    }

    #[rstest]
    #[case("# Todo", vec!["", "Todo"])]
    #[case("- Write test.", vec!["• Write test"])]
    #[case("plain words", vec!["plain words"])]
    #[case("", vec![""])]
    fn lays_out_blocks(#[case] markdown: &str, #[case] expected: Vec<&str>) {
        let lines = preview_lines(&render_markdown(markdown));
        assert_eq!(plain(&lines), expected);
    }

    #[test]
    fn headings_are_bold() {
        let lines = preview_lines(&render_markdown("## Sub"));
        let heading = lines.last().unwrap();
        assert!(heading.spans[0].style.add_modifier.contains(Modifier::BOLD));
    }
}
