//! PDF Export Options
//!
//! [`ExportOptions`] is what callers and the settings file supply: every
//! field optional. [`ExportSettings`] is the fully resolved configuration an
//! export runs with.

use layout_engine::{Margins, PageGeometry};
use serde::{Deserialize, Serialize};

pub const DEFAULT_TITLE: &str = "Document";
pub const DEFAULT_AUTHOR: &str = "Resigner";
pub const DEFAULT_FILENAME: &str = "document.pdf";
pub const DEFAULT_FONT_SIZE: f32 = 12.0;
pub const DEFAULT_LINE_HEIGHT: f32 = 7.0;

/// Caller-supplied export options
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportOptions {
    /// Header and document title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Name used in the watermark line and the Info dictionary
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    /// Replaces all four default margins when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margins: Option<Margins>,
    /// Body font size in points
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,
    /// Vertical advance per line in millimetres
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_height: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_page_numbers: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_date: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_watermark: Option<bool>,
    /// Flate-compress page content streams
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compress: Option<bool>,
}

impl ExportOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = Some(margins);
        self
    }

    pub fn with_font_size(mut self, size: f32) -> Self {
        self.font_size = Some(size);
        self
    }

    pub fn with_line_height(mut self, height: f32) -> Self {
        self.line_height = Some(height);
        self
    }

    pub fn with_page_numbers(mut self, show: bool) -> Self {
        self.show_page_numbers = Some(show);
        self
    }

    pub fn with_date(mut self, show: bool) -> Self {
        self.show_date = Some(show);
        self
    }

    pub fn with_watermark(mut self, show: bool) -> Self {
        self.show_watermark = Some(show);
        self
    }

    pub fn with_compression(mut self, compress: bool) -> Self {
        self.compress = Some(compress);
        self
    }

    /// Layer `self` over `base`: fields set here win, unset fields fall back.
    /// An empty string counts as unset.
    pub fn merged_over(&self, base: &ExportOptions) -> ExportOptions {
        ExportOptions {
            title: non_empty(&self.title).or_else(|| non_empty(&base.title)),
            author: non_empty(&self.author).or_else(|| non_empty(&base.author)),
            subject: non_empty(&self.subject).or_else(|| non_empty(&base.subject)),
            filename: non_empty(&self.filename).or_else(|| non_empty(&base.filename)),
            margins: self.margins.or(base.margins),
            font_size: self.font_size.or(base.font_size),
            line_height: self.line_height.or(base.line_height),
            show_page_numbers: self.show_page_numbers.or(base.show_page_numbers),
            show_date: self.show_date.or(base.show_date),
            show_watermark: self.show_watermark.or(base.show_watermark),
            compress: self.compress.or(base.compress),
        }
    }

    /// Resolve against the documented defaults.
    pub fn resolve(&self) -> ExportSettings {
        let defaults = ExportSettings::default();
        ExportSettings {
            title: non_empty(&self.title).unwrap_or(defaults.title),
            author: non_empty(&self.author).unwrap_or(defaults.author),
            subject: non_empty(&self.subject).unwrap_or(defaults.subject),
            filename: non_empty(&self.filename).unwrap_or(defaults.filename),
            margins: self.margins.unwrap_or(defaults.margins),
            font_size: self.font_size.unwrap_or(defaults.font_size),
            line_height: self.line_height.unwrap_or(defaults.line_height),
            show_page_numbers: self.show_page_numbers.unwrap_or(defaults.show_page_numbers),
            show_date: self.show_date.unwrap_or(defaults.show_date),
            show_watermark: self.show_watermark.unwrap_or(defaults.show_watermark),
            compress: self.compress.unwrap_or(defaults.compress),
        }
    }
}

/// Empty text options fall back like missing ones
fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|s| !s.is_empty()).cloned()
}

/// Resolved export configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportSettings {
    pub title: String,
    pub author: String,
    pub subject: String,
    pub filename: String,
    pub margins: Margins,
    pub font_size: f32,
    pub line_height: f32,
    pub show_page_numbers: bool,
    pub show_date: bool,
    pub show_watermark: bool,
    pub compress: bool,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            author: DEFAULT_AUTHOR.to_string(),
            subject: String::new(),
            filename: DEFAULT_FILENAME.to_string(),
            margins: Margins::default(),
            font_size: DEFAULT_FONT_SIZE,
            line_height: DEFAULT_LINE_HEIGHT,
            show_page_numbers: true,
            show_date: true,
            show_watermark: false,
            compress: true,
        }
    }
}

impl ExportSettings {
    /// A4 page with the configured margins
    pub fn geometry(&self) -> PageGeometry {
        PageGeometry::a4(self.margins)
    }
}
