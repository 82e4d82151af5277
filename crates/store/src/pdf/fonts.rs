//! PDF Font Handling
//!
//! Letters are set in the Helvetica family of the standard 14 fonts, so no
//! font data is embedded. Text is encoded to WinAnsi (CP-1252) bytes.

use super::objects::{PdfDictionary, PdfObject};
use layout_engine::FontStyle;

/// Standard Helvetica faces used by the export
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StandardFont {
    Helvetica,
    HelveticaBold,
    HelveticaOblique,
}

impl StandardFont {
    /// Face for a layout font style
    pub fn for_style(style: FontStyle) -> Self {
        match style {
            FontStyle::Normal => StandardFont::Helvetica,
            FontStyle::Bold => StandardFont::HelveticaBold,
            FontStyle::Italic => StandardFont::HelveticaOblique,
        }
    }

    /// PostScript name for `/BaseFont`
    pub fn base_font(&self) -> &'static str {
        match self {
            StandardFont::Helvetica => "Helvetica",
            StandardFont::HelveticaBold => "Helvetica-Bold",
            StandardFont::HelveticaOblique => "Helvetica-Oblique",
        }
    }

    /// Font dictionary for a non-embedded Type1 font
    pub fn dictionary(&self) -> PdfDictionary {
        PdfDictionary::typed("Font")
            .with("Subtype", PdfObject::name("Type1"))
            .with("BaseFont", PdfObject::name(self.base_font()))
            .with("Encoding", PdfObject::name("WinAnsiEncoding"))
    }
}

/// A font registered in a page's resources
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontResource {
    /// Resource name used with `Tf`, e.g. `F1`
    pub name: String,
    pub font: StandardFont,
}

/// Hands out resource names in order of first use
#[derive(Debug, Default)]
pub struct FontRegistry {
    fonts: Vec<FontResource>,
}

impl FontRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resource name for `font`, registering it on first use
    pub fn resource_name(&mut self, font: StandardFont) -> String {
        if let Some(existing) = self.fonts.iter().find(|r| r.font == font) {
            return existing.name.clone();
        }
        let name = format!("F{}", self.fonts.len() + 1);
        self.fonts.push(FontResource {
            name: name.clone(),
            font,
        });
        name
    }

    pub fn fonts(&self) -> &[FontResource] {
        &self.fonts
    }
}

/// Encode text as WinAnsi bytes. Characters with no WinAnsi code become `?`.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars().map(win_ansi_byte).collect()
}

fn win_ansi_byte(ch: char) -> u8 {
    let code = ch as u32;
    match code {
        0x20..=0x7E | 0xA1..=0xFF => code as u8,
        0xA0 => b' ',
        _ => match ch {
            '\u{20AC}' => 0x80,
            '\u{201A}' => 0x82,
            '\u{0192}' => 0x83,
            '\u{201E}' => 0x84,
            '\u{2026}' => 0x85,
            '\u{2020}' => 0x86,
            '\u{2021}' => 0x87,
            '\u{02C6}' => 0x88,
            '\u{2030}' => 0x89,
            '\u{0160}' => 0x8A,
            '\u{2039}' => 0x8B,
            '\u{0152}' => 0x8C,
            '\u{017D}' => 0x8E,
            '\u{2018}' => 0x91,
            '\u{2019}' => 0x92,
            '\u{201C}' => 0x93,
            '\u{201D}' => 0x94,
            '\u{2022}' => 0x95,
            '\u{2013}' => 0x96,
            '\u{2014}' => 0x97,
            '\u{02DC}' => 0x98,
            '\u{2122}' => 0x99,
            '\u{0161}' => 0x9A,
            '\u{203A}' => 0x9B,
            '\u{0153}' => 0x9C,
            '\u{017E}' => 0x9E,
            '\u{0178}' => 0x9F,
            '\t' => b' ',
            _ => b'?',
        },
    }
}
