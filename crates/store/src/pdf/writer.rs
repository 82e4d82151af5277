//! PDF Writer
//!
//! File structure (header, body, xref, trailer), object numbering and Flate
//! compression of content streams.

use super::document::{
    create_catalog, create_page, create_pages, create_resources, DocumentInfo, PDF_VERSION,
};
use super::objects::{ObjectId, PdfDictionary, PdfObject, PdfStream};
use super::renderer::{PageCanvas, PdfRenderer};
use layout_engine::LayoutError;
use std::io::{self, Write};
use thiserror::Error;

/// Error type for PDF operations
#[derive(Debug, Error)]
pub enum PdfError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid document: {0}")]
    InvalidDocument(String),

    #[error("Layout error: {0}")]
    Layout(#[from] LayoutError),
}

/// Result type for PDF operations
pub type Result<T> = std::result::Result<T, PdfError>;

/// Low-level PDF file writer
pub struct PdfWriter<W: Write> {
    writer: W,
    position: u64,
    /// Byte offset of every written object, indexed by object number - 1
    offsets: Vec<Option<u64>>,
    compress: bool,
}

impl<W: Write> PdfWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            position: 0,
            offsets: Vec::new(),
            compress: true,
        }
    }

    pub fn set_compression(&mut self, compress: bool) {
        self.compress = compress;
    }

    fn write_bytes(&mut self, data: &[u8]) -> Result<()> {
        self.writer.write_all(data)?;
        self.position += data.len() as u64;
        Ok(())
    }

    fn write_str(&mut self, s: &str) -> Result<()> {
        self.write_bytes(s.as_bytes())
    }

    /// Reserve the next object number
    pub fn allocate(&mut self) -> ObjectId {
        self.offsets.push(None);
        ObjectId(self.offsets.len() as u32)
    }

    fn record_offset(&mut self, id: ObjectId) -> Result<()> {
        let slot = self
            .offsets
            .get_mut((id.0 as usize).wrapping_sub(1))
            .ok_or_else(|| PdfError::InvalidDocument(format!("object {} was never allocated", id.0)))?;
        if slot.is_some() {
            return Err(PdfError::InvalidDocument(format!("object {} written twice", id.0)));
        }
        *slot = Some(self.position);
        Ok(())
    }

    /// `%PDF-1.4` plus a binary marker comment
    pub fn write_header(&mut self) -> Result<()> {
        self.write_str(&format!("%PDF-{}\n", PDF_VERSION))?;
        self.write_bytes(&[b'%', 0xE2, 0xE3, 0xCF, 0xD3, b'\n'])
    }

    /// Write an indirect object
    pub fn write_object(&mut self, id: ObjectId, object: &PdfObject) -> Result<()> {
        self.record_offset(id)?;
        self.write_str(&format!("{} obj\n{}\nendobj\n", id, object))
    }

    /// Write a stream object, compressing it when enabled
    pub fn write_stream(&mut self, id: ObjectId, mut stream: PdfStream) -> Result<()> {
        if self.compress {
            stream = compress_stream(stream)?;
        }
        stream.dict.insert("Length", stream.data.len());

        self.record_offset(id)?;
        self.write_str(&format!("{} obj\n{}\nstream\n", id, stream.dict))?;
        self.write_bytes(&stream.data)?;
        self.write_str("\nendstream\nendobj\n")
    }

    /// Cross-reference table, trailer and `%%EOF`
    pub fn write_xref_and_trailer(&mut self, root: ObjectId, info: ObjectId) -> Result<()> {
        let xref_offset = self.position;
        let size = self.offsets.len() + 1;

        let mut table = format!("xref\n0 {}\n0000000000 65535 f \n", size);
        for (i, offset) in self.offsets.iter().enumerate() {
            let offset =
                offset.ok_or_else(|| PdfError::InvalidDocument(format!("object {} never written", i + 1)))?;
            table.push_str(&format!("{:010} 00000 n \n", offset));
        }
        self.write_str(&table)?;

        let trailer = PdfDictionary::new()
            .with("Size", size)
            .with("Root", root)
            .with("Info", info);
        self.write_str(&format!(
            "trailer\n{}\nstartxref\n{}\n%%EOF\n",
            trailer, xref_offset
        ))
    }

    pub fn finish(mut self) -> Result<W> {
        self.writer.flush()?;
        Ok(self.writer)
    }
}

fn compress_stream(mut stream: PdfStream) -> Result<PdfStream> {
    use flate2::write::ZlibEncoder;
    use flate2::Compression;

    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(&stream.data)?;
    stream.data = encoder.finish()?;
    stream.dict.insert("Filter", PdfObject::name("FlateDecode"));
    Ok(stream)
}

/// Writes stamped page canvases as a complete PDF file
pub struct PdfDocumentWriter {
    info: DocumentInfo,
    compress: bool,
}

impl PdfDocumentWriter {
    pub fn new(info: DocumentInfo) -> Self {
        Self {
            info,
            compress: true,
        }
    }

    pub fn with_compression(mut self, compress: bool) -> Self {
        self.compress = compress;
        self
    }

    pub fn write<W: Write>(&self, pages: &[PageCanvas], writer: W) -> Result<W> {
        if pages.is_empty() {
            return Err(PdfError::InvalidDocument("No pages to export".to_string()));
        }

        let mut pdf = PdfWriter::new(writer);
        pdf.set_compression(self.compress);
        pdf.write_header()?;

        let catalog_id = pdf.allocate();
        let pages_id = pdf.allocate();
        let info_id = pdf.allocate();

        // Render first so the font resources are known
        let mut renderer = PdfRenderer::new();
        let contents: Vec<_> = pages.iter().map(|p| renderer.render_page(p)).collect();

        let fonts: Vec<(String, ObjectId)> = renderer
            .fonts()
            .fonts()
            .iter()
            .map(|f| (f.name.clone(), pdf.allocate()))
            .collect();
        let page_ids: Vec<(ObjectId, ObjectId)> = pages
            .iter()
            .map(|_| (pdf.allocate(), pdf.allocate()))
            .collect();

        pdf.write_object(catalog_id, &create_catalog(pages_id).into())?;
        let kids: Vec<ObjectId> = page_ids.iter().map(|(page, _)| *page).collect();
        pdf.write_object(pages_id, &create_pages(&kids).into())?;
        pdf.write_object(info_id, &self.info.to_dictionary().into())?;

        for (resource, (_, id)) in renderer.fonts().fonts().iter().zip(&fonts) {
            pdf.write_object(*id, &resource.font.dictionary().into())?;
        }

        let resources = create_resources(&fonts);
        for ((canvas, content), (page_id, content_id)) in
            pages.iter().zip(contents).zip(page_ids)
        {
            let page = create_page(
                pages_id,
                content_id,
                resources.clone(),
                canvas.width,
                canvas.height,
            );
            pdf.write_object(page_id, &page.into())?;
            pdf.write_stream(content_id, PdfStream::new(content.into_bytes()))?;
        }

        pdf.write_xref_and_trailer(catalog_id, info_id)?;
        tracing::debug!(pages = pages.len(), fonts = fonts.len(), "pdf written");
        pdf.finish()
    }

    /// Write the document into memory
    pub fn write_to_bytes(&self, pages: &[PageCanvas]) -> Result<Vec<u8>> {
        self.write(pages, Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use layout_engine::FontStyle;

    fn page(number: usize, text: &str) -> PageCanvas {
        let mut canvas = PageCanvas::new(number, 210.0, 297.0);
        canvas.draw_text(text, 20.0, 50.0, 12.0, FontStyle::Normal);
        canvas
    }

    fn writer() -> PdfDocumentWriter {
        PdfDocumentWriter::new(DocumentInfo::new("Test", "Resigner", "")).with_compression(false)
    }

    #[test]
    fn test_write_single_page() {
        let bytes = writer().write_to_bytes(&[page(1, "Hello")]).unwrap();
        let s = String::from_utf8_lossy(&bytes);
        assert!(s.starts_with("%PDF-1.4"));
        assert!(s.contains("/Type /Catalog"));
        assert!(s.contains("/Count 1"));
        assert!(s.contains("(Hello) Tj"));
        assert!(s.contains("/BaseFont /Helvetica"));
        assert!(s.trim_end().ends_with("%%EOF"));
    }

    #[test]
    fn test_write_multiple_pages() {
        let bytes = writer()
            .write_to_bytes(&[page(1, "one"), page(2, "two")])
            .unwrap();
        let s = String::from_utf8_lossy(&bytes);
        assert!(s.contains("/Count 2"));
        assert_eq!(s.matches("/Type /Page ").count(), 2);
    }

    #[test]
    fn test_empty_document_rejected() {
        assert!(matches!(
            writer().write_to_bytes(&[]),
            Err(PdfError::InvalidDocument(_))
        ));
    }

    #[test]
    fn test_xref_offsets_point_at_objects() {
        let bytes = writer().write_to_bytes(&[page(1, "x")]).unwrap();
        let xref_start = bytes.windows(5).position(|w| w == b"xref\n").unwrap();
        let table = String::from_utf8(bytes[xref_start..].to_vec()).unwrap();
        let entries: Vec<&str> = table
            .lines()
            .skip(3)
            .take_while(|l| l.ends_with(" n "))
            .collect();
        assert_eq!(entries.len(), 6);
        for (i, entry) in entries.iter().enumerate() {
            let offset: usize = entry[..10].parse().unwrap();
            let expected = format!("{} 0 obj", i + 1);
            assert!(bytes[offset..].starts_with(expected.as_bytes()));
        }
    }

    #[test]
    fn test_compressed_stream() {
        let bytes = PdfDocumentWriter::new(DocumentInfo::new("T", "A", ""))
            .write_to_bytes(&[page(1, "Hello")])
            .unwrap();
        let s = String::from_utf8_lossy(&bytes);
        assert!(s.contains("/Filter /FlateDecode"));
        assert!(!s.contains("(Hello) Tj"));
    }

    #[test]
    fn test_double_write_rejected() {
        let mut pdf = PdfWriter::new(Vec::new());
        let id = pdf.allocate();
        pdf.write_object(id, &PdfObject::Null).unwrap();
        assert!(pdf.write_object(id, &PdfObject::Null).is_err());
        assert!(pdf.write_object(ObjectId(9), &PdfObject::Null).is_err());
    }
}
