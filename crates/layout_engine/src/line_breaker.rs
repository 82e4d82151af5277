//! Paragraph splitting and greedy line breaking
//!
//! A document is a single text blob. Paragraphs are separated by a blank line
//! (`"\n\n"`); a single `"\n"` inside a paragraph is a hard line break. Each
//! hard line is wrapped on its own, greedily, breaking only between words.
//!
//! The output is a flat list of [`LayoutUnit`]s: one `Line` per wrapped line
//! and one `Spacing` after every paragraph.

use crate::{FontStyle, LayoutError, Result, TextMeasurer};
use serde::{Deserialize, Serialize};

/// Paragraph separator in document text
pub const PARAGRAPH_SEPARATOR: &str = "\n\n";

/// Split document text into paragraphs.
///
/// `\r\n` is treated as `\n`. Paragraphs that are empty or contain only
/// whitespace are dropped and produce no output at all.
pub fn split_paragraphs(text: &str) -> Vec<String> {
    let normalized = text.replace("\r\n", "\n");
    normalized
        .split(PARAGRAPH_SEPARATOR)
        .filter(|p| !p.trim().is_empty())
        .map(|p| p.trim_matches('\n').to_string())
        .collect()
}

/// Line breaking configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineBreakConfig {
    /// Maximum rendered line width in millimetres
    pub max_width: f32,
    /// Font size in points
    pub font_size: f32,
    /// Font face the body text is set in
    pub style: FontStyle,
}

impl LineBreakConfig {
    pub fn new(max_width: f32, font_size: f32) -> Self {
        Self {
            max_width,
            font_size,
            style: FontStyle::Normal,
        }
    }
}

/// Greedy word wrapper over a [`TextMeasurer`]
#[derive(Debug, Clone)]
pub struct LineBreaker<M> {
    measurer: M,
    config: LineBreakConfig,
}

impl<M: TextMeasurer> LineBreaker<M> {
    /// Create a line breaker. The maximum width must be positive.
    pub fn new(measurer: M, config: LineBreakConfig) -> Result<Self> {
        if !(config.max_width > 0.0) {
            return Err(LayoutError::InvalidPageSetup(format!(
                "printable width must be positive, got {}",
                config.max_width
            )));
        }
        if !(config.font_size > 0.0) {
            return Err(LayoutError::InvalidPageSetup(format!(
                "font size must be positive, got {}",
                config.font_size
            )));
        }
        Ok(Self { measurer, config })
    }

    fn width(&self, text: &str) -> f32 {
        self.measurer
            .text_width(text, self.config.style, self.config.font_size)
    }

    fn fits(&self, text: &str) -> bool {
        self.width(text) <= self.config.max_width
    }

    /// Wrap one paragraph into lines.
    ///
    /// Words are joined by a single space. A word wider than the maximum
    /// width is never split: it gets a line to itself and overflows.
    pub fn wrap(&self, paragraph: &str) -> Vec<String> {
        let mut lines = Vec::new();
        for hard_line in paragraph.split('\n') {
            self.wrap_hard_line(hard_line, &mut lines);
        }
        lines
    }

    fn wrap_hard_line(&self, hard_line: &str, lines: &mut Vec<String>) {
        let mut words = hard_line.split_whitespace();
        let Some(first) = words.next() else {
            lines.push(String::new());
            return;
        };

        let mut current = first.to_string();
        for word in words {
            let candidate = format!("{} {}", current, word);
            if self.fits(&candidate) {
                current = candidate;
            } else {
                lines.push(std::mem::replace(&mut current, word.to_string()));
            }
        }
        lines.push(current);
    }
}

/// The atomic output of layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum LayoutUnit {
    /// A wrapped line of text, and the vertical advance applied after drawing it
    Line { text: String, advance: f32 },
    /// Blank vertical space after a paragraph
    Spacing { advance: f32 },
}

impl LayoutUnit {
    pub fn advance(&self) -> f32 {
        match self {
            LayoutUnit::Line { advance, .. } | LayoutUnit::Spacing { advance } => *advance,
        }
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            LayoutUnit::Line { text, .. } => Some(text),
            LayoutUnit::Spacing { .. } => None,
        }
    }

    pub fn is_line(&self) -> bool {
        matches!(self, LayoutUnit::Line { .. })
    }
}

/// Lay out a whole document into lines and paragraph spacing.
///
/// An empty document yields no units.
pub fn layout_document<M: TextMeasurer>(
    text: &str,
    breaker: &LineBreaker<M>,
    line_height: f32,
) -> Result<Vec<LayoutUnit>> {
    if !(line_height > 0.0) {
        return Err(LayoutError::InvalidPageSetup(format!(
            "line height must be positive, got {}",
            line_height
        )));
    }

    let mut units = Vec::new();
    for paragraph in split_paragraphs(text) {
        for line in breaker.wrap(&paragraph) {
            units.push(LayoutUnit::Line {
                text: line,
                advance: line_height,
            });
        }
        units.push(LayoutUnit::Spacing {
            advance: line_height,
        });
    }
    Ok(units)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FixedWidthMeasurer, HelveticaMetrics};
    use proptest::prelude::*;

    fn fixed(advance: f32, max_width: f32) -> LineBreaker<FixedWidthMeasurer> {
        LineBreaker::new(
            FixedWidthMeasurer::new(advance),
            LineBreakConfig::new(max_width, 12.0),
        )
        .unwrap()
    }

    #[test]
    fn test_split_paragraphs() {
        let paras = split_paragraphs("Hello world.\n\nSecond paragraph.");
        assert_eq!(paras, vec!["Hello world.", "Second paragraph."]);
    }

    #[test]
    fn test_split_skips_blank_paragraphs() {
        let paras = split_paragraphs("One\n\n   \n\n\n\nTwo\n\n");
        assert_eq!(paras, vec!["One", "Two"]);
        assert!(split_paragraphs("").is_empty());
        assert!(split_paragraphs("\n\n \n\n").is_empty());
        assert_eq!(split_paragraphs("A\n\n\nB"), vec!["A", "B"]);
    }

    #[test]
    fn test_split_normalizes_crlf() {
        let paras = split_paragraphs("One\r\n\r\nTwo\r\nlines");
        assert_eq!(paras, vec!["One", "Two\nlines"]);
    }

    #[test]
    fn test_wrap_greedy() {
        // 10 graphemes per line
        let breaker = fixed(1.0, 10.0);
        let lines = breaker.wrap("aaaa bbbb cccc dd");
        assert_eq!(lines, vec!["aaaa bbbb", "cccc dd"]);
    }

    #[test]
    fn test_wrap_exact_fit() {
        let breaker = fixed(1.0, 9.0);
        assert_eq!(breaker.wrap("aaaa bbbb"), vec!["aaaa bbbb"]);
    }

    #[test]
    fn test_wrap_collapses_whitespace() {
        let breaker = fixed(0.0, 10.0);
        assert_eq!(breaker.wrap("  a \t b   c "), vec!["a b c"]);
    }

    #[test]
    fn test_wrap_oversized_word_overflows() {
        let breaker = fixed(1.0, 5.0);
        let lines = breaker.wrap("hi supercalifragilistic yo");
        assert_eq!(lines, vec!["hi", "supercalifragilistic", "yo"]);
    }

    #[test]
    fn test_wrap_hard_breaks() {
        let breaker = fixed(0.0, 10.0);
        let lines = breaker.wrap("Sincerely,\nJane Doe");
        assert_eq!(lines, vec!["Sincerely,", "Jane Doe"]);
    }

    #[test]
    fn test_wrap_with_helvetica() {
        let config = LineBreakConfig::new(170.0, 12.0);
        let breaker = LineBreaker::new(HelveticaMetrics, config).unwrap();
        let text = "word ".repeat(100);
        let lines = breaker.wrap(&text);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(breaker.width(line) <= 170.0);
        }
    }

    #[test]
    fn test_invalid_width_rejected() {
        let result = LineBreaker::new(FixedWidthMeasurer::new(1.0), LineBreakConfig::new(0.0, 12.0));
        assert!(matches!(result, Err(LayoutError::InvalidPageSetup(_))));
    }

    #[test]
    fn test_layout_document_units() {
        let breaker = fixed(0.0, 170.0);
        let units = layout_document("Hello world.\n\nSecond paragraph.", &breaker, 7.0).unwrap();
        assert_eq!(
            units,
            vec![
                LayoutUnit::Line { text: "Hello world.".into(), advance: 7.0 },
                LayoutUnit::Spacing { advance: 7.0 },
                LayoutUnit::Line { text: "Second paragraph.".into(), advance: 7.0 },
                LayoutUnit::Spacing { advance: 7.0 },
            ]
        );
    }

    #[test]
    fn test_layout_empty_document() {
        let breaker = fixed(1.0, 100.0);
        assert!(layout_document("", &breaker, 7.0).unwrap().is_empty());
        assert!(layout_document("  \n\n ", &breaker, 7.0).unwrap().is_empty());
    }

    #[test]
    fn test_layout_rejects_bad_line_height() {
        let breaker = fixed(1.0, 100.0);
        assert!(layout_document("x", &breaker, 0.0).is_err());
    }

    proptest! {
        // Equal-length words: lines = ceil(words / capacity)
        #[test]
        fn prop_greedy_line_count(word_len in 1usize..6, words in 1usize..60, per_line in 1usize..8) {
            let word = "x".repeat(word_len);
            let text = vec![word.as_str(); words].join(" ");
            let max_width = (per_line * word_len + per_line - 1) as f32;
            let breaker = fixed(1.0, max_width);
            let lines = breaker.wrap(&text);
            prop_assert_eq!(lines.len(), (words + per_line - 1) / per_line);
        }

        #[test]
        fn prop_wrap_preserves_words(text in "[a-z]{1,8}( [a-z]{1,8}){0,30}", max_width in 1.0f32..40.0) {
            let breaker = fixed(1.0, max_width);
            let lines = breaker.wrap(&text);
            let rejoined = lines.join(" ");
            let original: Vec<&str> = text.split_whitespace().collect();
            let wrapped: Vec<&str> = rejoined.split_whitespace().collect();
            prop_assert_eq!(original, wrapped);
            for line in &lines {
                prop_assert!(!line.contains(' ') || breaker.width(line) <= max_width);
            }
        }
    }
}
