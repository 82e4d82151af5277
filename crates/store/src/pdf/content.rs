//! PDF Content Stream Generation
//!
//! Builder for the page content operators the export draws with: graphics
//! state (`q`/`Q`), stroked lines (`w`, `RG`, `m`, `l`, `S`) and text
//! (`BT`/`ET`, `rg`, `Tf`, `Td`, `Tj`). Coordinates are PDF user space.

use super::objects::{format_number, PdfObject};

/// Content stream builder
#[derive(Debug, Default)]
pub struct ContentStream {
    data: String,
}

impl ContentStream {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data.into_bytes()
    }

    #[cfg(test)]
    pub fn as_str(&self) -> &str {
        &self.data
    }

    fn op(&mut self, operands: &[f64], operator: &str) -> &mut Self {
        for n in operands {
            self.data.push_str(&format_number(*n));
            self.data.push(' ');
        }
        self.data.push_str(operator);
        self.data.push('\n');
        self
    }

    /// Save the graphics state (q)
    pub fn save_state(&mut self) -> &mut Self {
        self.op(&[], "q")
    }

    /// Restore the graphics state (Q)
    pub fn restore_state(&mut self) -> &mut Self {
        self.op(&[], "Q")
    }

    /// Set the line width (w)
    pub fn set_line_width(&mut self, width: f64) -> &mut Self {
        self.op(&[width], "w")
    }

    /// Set the stroke colour (RG), components in 0..=1
    pub fn set_stroke_rgb(&mut self, r: f64, g: f64, b: f64) -> &mut Self {
        self.op(&[r, g, b], "RG")
    }

    /// Set the fill colour (rg), used for text
    pub fn set_fill_rgb(&mut self, r: f64, g: f64, b: f64) -> &mut Self {
        self.op(&[r, g, b], "rg")
    }

    pub fn move_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.op(&[x, y], "m")
    }

    pub fn line_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.op(&[x, y], "l")
    }

    pub fn stroke(&mut self) -> &mut Self {
        self.op(&[], "S")
    }

    /// Begin a text object (BT)
    pub fn begin_text(&mut self) -> &mut Self {
        self.op(&[], "BT")
    }

    /// End a text object (ET)
    pub fn end_text(&mut self) -> &mut Self {
        self.op(&[], "ET")
    }

    /// Select a font resource and size (Tf)
    pub fn set_font(&mut self, resource: &str, size: f64) -> &mut Self {
        self.data.push_str(&PdfObject::name(resource).to_string());
        self.data.push(' ');
        self.op(&[size], "Tf")
    }

    /// Move to the start of the next text position (Td)
    pub fn move_text(&mut self, x: f64, y: f64) -> &mut Self {
        self.op(&[x, y], "Td")
    }

    /// Show already-encoded text bytes (Tj)
    pub fn show_text(&mut self, encoded: &[u8]) -> &mut Self {
        self.data
            .push_str(&PdfObject::string(encoded.to_vec()).to_string());
        self.data.push(' ');
        self.op(&[], "Tj")
    }
}
