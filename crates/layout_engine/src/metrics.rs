//! Font metrics
//!
//! Text width measurement for the line breaker and for right-aligned header
//! and footer text. Widths are returned in millimetres; font sizes are points.

use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

/// Millimetres per PostScript point.
pub const MM_PER_POINT: f32 = 25.4 / 72.0;

/// Average advance used for characters outside the metric tables (1/1000 em).
const DEFAULT_ADVANCE: u16 = 556;

/// Style of a standard font face
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    #[default]
    Normal,
    Bold,
    Italic,
}

/// Measures rendered text width.
pub trait TextMeasurer {
    /// Width of `text` set in `style` at `font_size` points, in millimetres.
    fn text_width(&self, text: &str, style: FontStyle, font_size: f32) -> f32;
}

impl<T: TextMeasurer + ?Sized> TextMeasurer for &T {
    fn text_width(&self, text: &str, style: FontStyle, font_size: f32) -> f32 {
        (**self).text_width(text, style, font_size)
    }
}

/// Helvetica advance widths from the standard Type1 AFM files.
///
/// Oblique shares the upright widths. Characters outside printable ASCII use a
/// small table of common typographic punctuation, then the average width.
#[derive(Debug, Clone, Copy, Default)]
pub struct HelveticaMetrics;

impl HelveticaMetrics {
    /// Advance width of one character in 1/1000 em.
    pub fn char_advance(ch: char, style: FontStyle) -> u16 {
        let table = match style {
            FontStyle::Bold => &HELVETICA_BOLD_ASCII,
            FontStyle::Normal | FontStyle::Italic => &HELVETICA_ASCII,
        };
        let code = ch as u32;
        if (0x20..=0x7E).contains(&code) {
            return table[(code - 0x20) as usize];
        }
        let bold = style == FontStyle::Bold;
        match ch {
            '\u{00A0}' => 278,
            '\u{2018}' | '\u{2019}' | '\u{201A}' => {
                if bold {
                    278
                } else {
                    222
                }
            }
            '\u{201C}' | '\u{201D}' | '\u{201E}' => {
                if bold {
                    500
                } else {
                    333
                }
            }
            '\u{2013}' => 556,
            '\u{2014}' | '\u{2026}' | '\u{2030}' => 1000,
            '\u{2022}' => 350,
            '\u{20AC}' => 556,
            '\u{00A9}' | '\u{00AE}' => 737,
            _ => DEFAULT_ADVANCE,
        }
    }
}

impl TextMeasurer for HelveticaMetrics {
    fn text_width(&self, text: &str, style: FontStyle, font_size: f32) -> f32 {
        let units: u32 = text
            .chars()
            .map(|c| u32::from(Self::char_advance(c, style)))
            .sum();
        units as f32 / 1000.0 * font_size * MM_PER_POINT
    }
}

/// Every grapheme has the same advance, regardless of font size.
///
/// An advance of zero makes every line fit, which is handy when a test wants
/// one line per paragraph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedWidthMeasurer {
    pub advance: f32,
}

impl FixedWidthMeasurer {
    pub fn new(advance: f32) -> Self {
        Self { advance }
    }

    /// A measurer under which any text fits on one line.
    pub fn infinite_width() -> Self {
        Self { advance: 0.0 }
    }
}

impl TextMeasurer for FixedWidthMeasurer {
    fn text_width(&self, text: &str, _style: FontStyle, _font_size: f32) -> f32 {
        text.graphemes(true).count() as f32 * self.advance
    }
}

#[rustfmt::skip]
const HELVETICA_ASCII: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' ' .. '/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556, // '0' .. '?'
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, // '@' .. 'O'
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556, // 'P' .. '_'
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, // '`' .. 'o'
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,      // 'p' .. '~'
];

#[rustfmt::skip]
const HELVETICA_BOLD_ASCII: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn test_helvetica_known_widths() {
        assert_eq!(HelveticaMetrics::char_advance(' ', FontStyle::Normal), 278);
        assert_eq!(HelveticaMetrics::char_advance('a', FontStyle::Normal), 556);
        assert_eq!(HelveticaMetrics::char_advance('i', FontStyle::Normal), 222);
        assert_eq!(HelveticaMetrics::char_advance('i', FontStyle::Bold), 278);
        assert_eq!(HelveticaMetrics::char_advance('W', FontStyle::Bold), 944);
        assert_eq!(HelveticaMetrics::char_advance('~', FontStyle::Normal), 584);
    }

    #[test]
    fn test_italic_uses_upright_widths() {
        for ch in "Hello, World!".chars() {
            assert_eq!(
                HelveticaMetrics::char_advance(ch, FontStyle::Italic),
                HelveticaMetrics::char_advance(ch, FontStyle::Normal)
            );
        }
    }

    #[test]
    fn test_unknown_char_uses_average() {
        assert_eq!(HelveticaMetrics::char_advance('\u{4E2D}', FontStyle::Normal), DEFAULT_ADVANCE);
    }

    #[test]
    fn test_text_width_scales_with_size() {
        let m = HelveticaMetrics;
        let w10 = m.text_width("Page 1 of 1", FontStyle::Normal, 10.0);
        let w20 = m.text_width("Page 1 of 1", FontStyle::Normal, 20.0);
        assert!(approx(w20, w10 * 2.0));
        // 1000 units at 72pt is exactly one inch
        assert!(approx(m.text_width("\u{2014}", FontStyle::Normal, 72.0), 25.4));
    }

    #[test]
    fn test_empty_text_has_no_width() {
        assert_eq!(HelveticaMetrics.text_width("", FontStyle::Bold, 12.0), 0.0);
        assert_eq!(FixedWidthMeasurer::new(3.0).text_width("", FontStyle::Normal, 12.0), 0.0);
    }

    #[test]
    fn test_fixed_width_counts_graphemes() {
        let m = FixedWidthMeasurer::new(2.0);
        assert_eq!(m.text_width("abc", FontStyle::Normal, 12.0), 6.0);
        assert_eq!(m.text_width("e\u{301}", FontStyle::Bold, 30.0), 2.0);
        assert_eq!(FixedWidthMeasurer::infinite_width().text_width("anything", FontStyle::Normal, 12.0), 0.0);
    }
}
