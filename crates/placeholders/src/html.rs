//! HTML to plain text and back
//!
//! The editor hands back HTML. Export works on plain text where paragraphs are
//! separated by a blank line and a `<br>` is a hard line break inside one.
//! Both directions go through the HTML parser and serializer, so entities,
//! attributes and comments are handled the way a browser would.

use kuchiki::traits::TendrilSink;
use kuchiki::{NodeData, NodeRef};

const BLOCK_TAGS: &[&str] = &[
    "p",
    "div",
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
    "li",
    "blockquote",
    "pre",
    "ul",
    "ol",
];

/// Elements whose content is never visible text
const HIDDEN_TAGS: &[&str] = &["head", "script", "style", "template"];

/// Extract the visible text of an HTML fragment.
///
/// Block elements become paragraphs joined by `"\n\n"`, `<br>` becomes
/// `"\n"`, all other tags are dropped, and character entities are decoded.
/// Text outside any block element is kept as its own paragraph.
pub fn html_to_text(html: &str) -> String {
    let document = kuchiki::parse_html().one(html);
    let mut collector = TextCollector::default();
    collector.walk(&document);
    collector.finish()
}

/// Render plain text as markup: one `<p>` per paragraph, `<br>` for single
/// line breaks. Text is escaped by the HTML serializer.
pub fn text_to_html(text: &str) -> String {
    text.replace("\r\n", "\n")
        .split("\n\n")
        .filter(|p| !p.trim().is_empty())
        .map(|p| {
            let lines: Vec<String> = p
                .trim()
                .split('\n')
                .map(|line| NodeRef::new_text(line).to_string())
                .collect();
            format!("<p>{}</p>", lines.join("<br>"))
        })
        .collect()
}

#[derive(Default)]
struct TextCollector {
    paragraphs: Vec<String>,
    current: String,
}

impl TextCollector {
    fn walk(&mut self, node: &NodeRef) {
        match node.data() {
            NodeData::Text(text) => self.push_text(&text.borrow()),
            NodeData::Element(element) => {
                let name: &str = element.name.local.as_ref();
                match name {
                    "br" => self.current.push('\n'),
                    _ if HIDDEN_TAGS.contains(&name) => {}
                    _ if BLOCK_TAGS.contains(&name) => {
                        self.flush();
                        self.walk_children(node);
                        self.flush();
                    }
                    _ => self.walk_children(node),
                }
            }
            NodeData::Document(_) | NodeData::DocumentFragment => self.walk_children(node),
            _ => {}
        }
    }

    fn walk_children(&mut self, node: &NodeRef) {
        for child in node.children() {
            self.walk(&child);
        }
    }

    fn push_text(&mut self, raw: &str) {
        // Source formatting whitespace collapses like a browser would.
        for ch in raw.chars() {
            match ch {
                ' ' | '\n' | '\r' | '\t' => {
                    if !self.current.is_empty()
                        && !self.current.ends_with(' ')
                        && !self.current.ends_with('\n')
                    {
                        self.current.push(' ');
                    }
                }
                '\u{a0}' => self.current.push(' '),
                _ => self.current.push(ch),
            }
        }
    }

    fn flush(&mut self) {
        let text = self
            .current
            .split('\n')
            .map(str::trim)
            .collect::<Vec<_>>()
            .join("\n");
        if !text.trim().is_empty() {
            self.paragraphs.push(text.trim_matches('\n').to_string());
        }
        self.current.clear();
    }

    fn finish(mut self) -> String {
        self.flush();
        self.paragraphs.join("\n\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraphs_become_blank_line_separated() {
        let html = "<p>Dear Alice,</p><p>I am writing to resign.</p>";
        assert_eq!(html_to_text(html), "Dear Alice,\n\nI am writing to resign.");
    }

    #[test]
    fn test_br_is_hard_break() {
        let html = "<p>Sincerely,<br>Bob</p>";
        assert_eq!(html_to_text(html), "Sincerely,\nBob");
    }

    #[test]
    fn test_inline_tags_dropped() {
        let html = r#"<p>Dear <span class="placeholder" data-placeholder="manager_name">manager_name</span>,</p>"#;
        assert_eq!(html_to_text(html), "Dear manager_name,");
    }

    #[test]
    fn test_entities_decoded() {
        assert_eq!(html_to_text("<p>A &amp; B&nbsp;&lt;C&gt;</p>"), "A & B <C>");
        assert_eq!(html_to_text("It&#8217;s &#x41;"), "It\u{2019}s A");
        assert_eq!(html_to_text("fish &chips"), "fish &chips");
    }

    #[test]
    fn test_empty_blocks_skipped() {
        assert_eq!(html_to_text("<p></p><p>  </p><p>Only</p>"), "Only");
        assert_eq!(html_to_text(""), "");
    }

    #[test]
    fn test_loose_text_kept() {
        assert_eq!(html_to_text("Plain text"), "Plain text");
        assert_eq!(html_to_text("Intro<p>Body</p>"), "Intro\n\nBody");
    }

    #[test]
    fn test_source_newlines_collapse() {
        let html = "<p>first\n  line</p>\n<p>second</p>";
        assert_eq!(html_to_text(html), "first line\n\nsecond");
    }

    #[test]
    fn test_stray_angle_bracket_is_text() {
        assert_eq!(html_to_text("a < b"), "a < b");
    }

    #[test]
    fn test_attribute_with_angle_bracket() {
        assert_eq!(html_to_text(r#"<p title="a > b">Hi</p>"#), "Hi");
        assert_eq!(
            html_to_text(r#"<p>Dear <span data-note="x>y">Sam</span>,</p>"#),
            "Dear Sam,"
        );
    }

    #[test]
    fn test_comments_dropped() {
        assert_eq!(html_to_text("<p>Hi<!-- x > y --></p>"), "Hi");
        assert_eq!(html_to_text("<!-- draft --><p>One</p><p>Two</p>"), "One\n\nTwo");
    }

    #[test]
    fn test_hidden_content_dropped() {
        assert_eq!(html_to_text("<style>p { color: red; }</style><p>Body</p>"), "Body");
    }

    #[test]
    fn test_text_to_html_paragraphs() {
        assert_eq!(
            text_to_html("Dear Sam,\n\nRegards,\nAlex"),
            "<p>Dear Sam,</p><p>Regards,<br>Alex</p>"
        );
        assert_eq!(text_to_html("a < b & c\n\n\n\nd"), "<p>a &lt; b &amp; c</p><p>d</p>");
        assert_eq!(text_to_html("  \n\n "), "");
    }

    #[test]
    fn test_text_to_html_roundtrips_through_extraction() {
        let text = "Dear {{manager_name}},\n\nI resign & thank you.\n\nSincerely,\n{{your_name}}";
        assert_eq!(html_to_text(&text_to_html(text)), text);
    }
}
