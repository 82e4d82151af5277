//! Header and Footer Stamping
//!
//! Every page gets a header band (title, optional "Page n of total", divider)
//! and a footer band (divider, optional watermark line, optional date). The
//! first page also gets the large centred document title.
//!
//! Pages are stamped once, after pagination, so the page total is always
//! final when the header is drawn.

use super::options::ExportSettings;
use super::renderer::{PageCanvas, RgbColor};
use chrono::NaiveDate;
use layout_engine::{FontStyle, TextMeasurer};

pub const HEADER_FONT_SIZE: f32 = 10.0;
pub const FOOTER_FONT_SIZE: f32 = 8.0;
pub const TITLE_FONT_SIZE: f32 = 16.0;

/// Baseline of the header text, mm from the top edge
pub const HEADER_TEXT_Y: f32 = 15.0;
/// Header divider, mm from the top edge
pub const HEADER_RULE_Y: f32 = 20.0;
/// Footer divider offset below the content bottom
pub const FOOTER_RULE_OFFSET: f32 = 10.0;
/// Footer text baseline offset below the content bottom
pub const FOOTER_TEXT_OFFSET: f32 = 5.0;
/// Title baseline offset above the top margin
pub const TITLE_RISE: f32 = 5.0;

/// Divider colour
pub const RULE_COLOR: (u8, u8, u8) = (200, 200, 200);

/// Long US date, e.g. "March 4, 2026"
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// "Page n of total"
pub fn page_label(page: usize, total: usize) -> String {
    format!("Page {} of {}", page, total)
}

/// Draws the repeated header and footer bands
pub struct HeaderFooterStamper<'a, M> {
    settings: &'a ExportSettings,
    measurer: M,
    date: NaiveDate,
}

impl<'a, M: TextMeasurer> HeaderFooterStamper<'a, M> {
    /// `date` is the day printed in the footer.
    pub fn new(settings: &'a ExportSettings, measurer: M, date: NaiveDate) -> Self {
        Self {
            settings,
            measurer,
            date,
        }
    }

    fn rule_color() -> RgbColor {
        RgbColor::from_u8(RULE_COLOR.0, RULE_COLOR.1, RULE_COLOR.2)
    }

    fn right_edge(&self, canvas: &PageCanvas) -> f32 {
        canvas.width - self.settings.margins.right
    }

    /// Title and page count on top, divider beneath.
    pub fn stamp_header(&self, canvas: &mut PageCanvas, page: usize, total_pages: usize) {
        let margins = self.settings.margins;
        canvas.draw_text(
            self.settings.title.clone(),
            margins.left,
            HEADER_TEXT_Y,
            HEADER_FONT_SIZE,
            FontStyle::Normal,
        );

        if self.settings.show_page_numbers {
            let label = page_label(page, total_pages);
            let width = self
                .measurer
                .text_width(&label, FontStyle::Normal, HEADER_FONT_SIZE);
            canvas.draw_text(
                label,
                self.right_edge(canvas) - width,
                HEADER_TEXT_Y,
                HEADER_FONT_SIZE,
                FontStyle::Normal,
            );
        }

        canvas.draw_line(
            margins.left,
            HEADER_RULE_Y,
            self.right_edge(canvas),
            HEADER_RULE_Y,
            Self::rule_color(),
        );
    }

    /// Divider, then the optional watermark and date lines.
    pub fn stamp_footer(&self, canvas: &mut PageCanvas) {
        let margins = self.settings.margins;
        let content_bottom = canvas.height - margins.bottom;
        let rule_y = content_bottom + FOOTER_RULE_OFFSET;
        let text_y = content_bottom + FOOTER_TEXT_OFFSET;

        canvas.draw_line(
            margins.left,
            rule_y,
            self.right_edge(canvas),
            rule_y,
            Self::rule_color(),
        );

        if self.settings.show_watermark {
            canvas.draw_text(
                format!("Generated with {}", self.settings.author),
                margins.left,
                text_y,
                FOOTER_FONT_SIZE,
                FontStyle::Italic,
            );
        }

        if self.settings.show_date {
            let date = format_long_date(self.date);
            let width = self
                .measurer
                .text_width(&date, FontStyle::Italic, FOOTER_FONT_SIZE);
            canvas.draw_text(
                date,
                self.right_edge(canvas) - width,
                text_y,
                FOOTER_FONT_SIZE,
                FontStyle::Italic,
            );
        }
    }

    /// Large bold title centred above the first page's body.
    pub fn stamp_title(&self, canvas: &mut PageCanvas) {
        let width = self
            .measurer
            .text_width(&self.settings.title, FontStyle::Bold, TITLE_FONT_SIZE);
        canvas.draw_text(
            self.settings.title.clone(),
            canvas.width / 2.0 - width / 2.0,
            self.settings.margins.top - TITLE_RISE,
            TITLE_FONT_SIZE,
            FontStyle::Bold,
        );
    }
}
