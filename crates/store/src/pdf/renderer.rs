//! Page Canvas to PDF Conversion
//!
//! Stamping and body text are drawn onto a [`PageCanvas`] in layout
//! coordinates (millimetres, origin top-left). The renderer converts each
//! canvas into a content stream in PDF user space (points, origin
//! bottom-left) and records which fonts the pages use.

use super::content::ContentStream;
use super::fonts::{encode_win_ansi, FontRegistry, StandardFont};
use layout_engine::FontStyle;

/// PostScript points per millimetre
pub const POINTS_PER_MM: f64 = 72.0 / 25.4;

/// Default stroke width for divider lines, in millimetres
pub const DEFAULT_LINE_WIDTH: f32 = 0.2;

/// A colour in RGB format (0.0 to 1.0)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RgbColor {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl RgbColor {
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
        }
    }

    pub fn black() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }
}

/// Text drawn at a baseline position
#[derive(Debug, Clone, PartialEq)]
pub struct TextItem {
    pub text: String,
    /// Left edge in millimetres
    pub x: f32,
    /// Baseline in millimetres from the top of the page
    pub y: f32,
    /// Font size in points
    pub font_size: f32,
    pub style: FontStyle,
    pub color: RgbColor,
}

/// Straight stroked line
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineItem {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
    pub color: RgbColor,
    /// Stroke width in millimetres
    pub width: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawItem {
    Text(TextItem),
    Line(LineItem),
}

/// Drawing surface for one page
#[derive(Debug, Clone, PartialEq)]
pub struct PageCanvas {
    /// 1-based page number
    pub number: usize,
    pub width: f32,
    pub height: f32,
    items: Vec<DrawItem>,
}

impl PageCanvas {
    pub fn new(number: usize, width: f32, height: f32) -> Self {
        Self {
            number,
            width,
            height,
            items: Vec::new(),
        }
    }

    pub fn draw_text(
        &mut self,
        text: impl Into<String>,
        x: f32,
        y: f32,
        font_size: f32,
        style: FontStyle,
    ) {
        self.items.push(DrawItem::Text(TextItem {
            text: text.into(),
            x,
            y,
            font_size,
            style,
            color: RgbColor::black(),
        }));
    }

    pub fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, color: RgbColor) {
        self.items.push(DrawItem::Line(LineItem {
            x1,
            y1,
            x2,
            y2,
            color,
            width: DEFAULT_LINE_WIDTH,
        }));
    }

    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    /// Text items in drawing order
    pub fn texts(&self) -> impl Iterator<Item = &TextItem> {
        self.items.iter().filter_map(|item| match item {
            DrawItem::Text(t) => Some(t),
            DrawItem::Line(_) => None,
        })
    }

    /// Line items in drawing order
    pub fn lines(&self) -> impl Iterator<Item = &LineItem> {
        self.items.iter().filter_map(|item| match item {
            DrawItem::Line(l) => Some(l),
            DrawItem::Text(_) => None,
        })
    }

    /// Whether any text item equals `text`
    pub fn contains_text(&self, text: &str) -> bool {
        self.texts().any(|t| t.text == text)
    }
}

/// Converts canvases to content streams
#[derive(Debug, Default)]
pub struct PdfRenderer {
    fonts: FontRegistry,
}

impl PdfRenderer {
    pub fn new() -> Self {
        Self {
            fonts: FontRegistry::new(),
        }
    }

    pub fn fonts(&self) -> &FontRegistry {
        &self.fonts
    }

    /// Render one page
    pub fn render_page(&mut self, canvas: &PageCanvas) -> ContentStream {
        let mut content = ContentStream::new();
        let height = canvas.height as f64;

        for item in canvas.items() {
            match item {
                DrawItem::Text(text) => {
                    let resource = self.fonts.resource_name(StandardFont::for_style(text.style));
                    content
                        .begin_text()
                        .set_fill_rgb(text.color.r, text.color.g, text.color.b)
                        .set_font(&resource, text.font_size as f64)
                        .move_text(
                            text.x as f64 * POINTS_PER_MM,
                            (height - text.y as f64) * POINTS_PER_MM,
                        )
                        .show_text(&encode_win_ansi(&text.text))
                        .end_text();
                }
                DrawItem::Line(line) => {
                    content
                        .save_state()
                        .set_stroke_rgb(line.color.r, line.color.g, line.color.b)
                        .set_line_width(line.width as f64 * POINTS_PER_MM)
                        .move_to(
                            line.x1 as f64 * POINTS_PER_MM,
                            (height - line.y1 as f64) * POINTS_PER_MM,
                        )
                        .line_to(
                            line.x2 as f64 * POINTS_PER_MM,
                            (height - line.y2 as f64) * POINTS_PER_MM,
                        )
                        .stroke()
                        .restore_state();
                }
            }
        }

        content
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_from_u8() {
        let c = RgbColor::from_u8(255, 0, 51);
        assert_eq!(c.r, 1.0);
        assert_eq!(c.g, 0.0);
        assert!((c.b - 0.2).abs() < 1e-9);
    }

    #[test]
    fn test_render_text_flips_y() {
        let mut canvas = PageCanvas::new(1, 210.0, 297.0);
        canvas.draw_text("Hello", 25.4, 297.0 - 25.4, 12.0, FontStyle::Normal);
        let mut renderer = PdfRenderer::new();
        let content = renderer.render_page(&canvas);
        let s = content.as_str();
        assert!(s.contains("/F1 12 Tf"));
        assert!(s.contains("72 72 Td"));
        assert!(s.contains("(Hello) Tj"));
        assert_eq!(renderer.fonts().fonts().len(), 1);
    }

    #[test]
    fn test_render_line() {
        let mut canvas = PageCanvas::new(1, 210.0, 297.0);
        canvas.draw_line(0.0, 297.0, 25.4, 297.0, RgbColor::from_u8(200, 200, 200));
        let content = PdfRenderer::new().render_page(&canvas);
        let s = content.as_str();
        assert!(s.contains("0 0 m"));
        assert!(s.contains("72 0 l"));
        assert!(s.contains("S\n"));
    }

    #[test]
    fn test_fonts_registered_per_style() {
        let mut canvas = PageCanvas::new(1, 210.0, 297.0);
        canvas.draw_text("a", 0.0, 10.0, 10.0, FontStyle::Normal);
        canvas.draw_text("b", 0.0, 20.0, 16.0, FontStyle::Bold);
        canvas.draw_text("c", 0.0, 30.0, 8.0, FontStyle::Italic);
        canvas.draw_text("d", 0.0, 40.0, 10.0, FontStyle::Normal);
        let mut renderer = PdfRenderer::new();
        renderer.render_page(&canvas);
        assert_eq!(renderer.fonts().fonts().len(), 3);
        assert!(canvas.contains_text("b"));
        assert_eq!(canvas.lines().count(), 0);
    }
}
