//! PDF Export Public API
//!
//! [`DocumentAssembler`] runs an export end to end: resolve options, lay the
//! text out, paginate, stamp every page, write the PDF and hand the artifact to
//! an [`ArtifactSink`].

use super::document::DocumentInfo;
use super::options::{ExportOptions, ExportSettings};
use super::renderer::PageCanvas;
use super::stamper::HeaderFooterStamper;
use super::writer::{PdfDocumentWriter, Result};
use chrono::NaiveDate;
use layout_engine::{
    layout_document, FontStyle, HelveticaMetrics, LineBreakConfig, LineBreaker, PagePlan,
    Paginator, TextMeasurer,
};
use std::fs;
use std::path::{Path, PathBuf};

/// Title used when exporting straight from the editor
pub const EDITOR_EXPORT_TITLE: &str = "Resignation Letter";
/// Filename used when exporting straight from the editor
pub const EDITOR_EXPORT_FILENAME: &str = "resignation-letter.pdf";

/// The rich-text editing surface, seen from the export side
pub trait RichTextSource {
    /// Plain text, paragraphs separated by a blank line
    fn get_text(&self) -> String;
    /// Serialized markup
    fn get_html(&self) -> String;
}

/// A finished PDF
#[derive(Debug, Clone, PartialEq)]
pub struct ExportArtifact {
    pub filename: String,
    pub bytes: Vec<u8>,
    pub page_count: usize,
}

/// Where finished artifacts go
pub trait ArtifactSink {
    /// Persist the artifact and return where it ended up
    fn emit(&self, artifact: &ExportArtifact) -> Result<PathBuf>;
}

/// Writes artifacts into a directory under their own filename
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl ArtifactSink for DirectorySink {
    fn emit(&self, artifact: &ExportArtifact) -> Result<PathBuf> {
        fs::create_dir_all(&self.dir)?;
        // Only the final component of the name is used
        let name = Path::new(&artifact.filename)
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| super::options::DEFAULT_FILENAME.into());
        let path = self.dir.join(name);
        fs::write(&path, &artifact.bytes)?;
        tracing::debug!(path = %path.display(), bytes = artifact.bytes.len(), "artifact written");
        Ok(path)
    }
}

/// Orchestrates an export
#[derive(Debug, Clone)]
pub struct DocumentAssembler<M = HelveticaMetrics> {
    measurer: M,
    date: Option<NaiveDate>,
}

impl Default for DocumentAssembler<HelveticaMetrics> {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentAssembler<HelveticaMetrics> {
    /// Assembler measuring text with Helvetica metrics
    pub fn new() -> Self {
        Self {
            measurer: HelveticaMetrics,
            date: None,
        }
    }
}

impl<M: TextMeasurer> DocumentAssembler<M> {
    /// Assembler with a custom measurer
    pub fn with_measurer(measurer: M) -> Self {
        Self {
            measurer,
            date: None,
        }
    }

    /// Fix the footer date instead of using today's
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    fn footer_date(&self) -> NaiveDate {
        self.date
            .unwrap_or_else(|| chrono::Local::now().date_naive())
    }

    /// Wrap and paginate plain text
    pub fn layout(&self, content: &str, settings: &ExportSettings) -> Result<PagePlan> {
        let geometry = settings.geometry();
        let paginator = Paginator::new(geometry)?;
        let config = LineBreakConfig::new(geometry.printable_width(), settings.font_size);
        let breaker = LineBreaker::new(&self.measurer, config)?;
        let units = layout_document(content, &breaker, settings.line_height)?;
        Ok(paginator.paginate(&units))
    }

    /// Draw body text and stamps onto one canvas per page
    pub fn stamp(&self, plan: &PagePlan, settings: &ExportSettings) -> Vec<PageCanvas> {
        let stamper = HeaderFooterStamper::new(settings, &self.measurer, self.footer_date());
        let total = plan.total_pages();

        plan.pages
            .iter()
            .map(|page| {
                let mut canvas =
                    PageCanvas::new(page.number, plan.geometry.width, plan.geometry.height);
                if page.is_first() {
                    stamper.stamp_title(&mut canvas);
                }
                stamper.stamp_header(&mut canvas, page.number, total);
                for line in &page.lines {
                    canvas.draw_text(
                        line.text.clone(),
                        line.x,
                        line.y,
                        settings.font_size,
                        FontStyle::Normal,
                    );
                }
                stamper.stamp_footer(&mut canvas);
                canvas
            })
            .collect()
    }

    /// Lay out and stamp, without writing the file
    pub fn render(&self, content: &str, settings: &ExportSettings) -> Result<Vec<PageCanvas>> {
        let plan = self.layout(content, settings)?;
        Ok(self.stamp(&plan, settings))
    }

    /// Build the PDF for plain-text content
    pub fn assemble(&self, content: &str, options: &ExportOptions) -> Result<ExportArtifact> {
        let settings = options.resolve();
        let pages = self.render(content, &settings)?;

        let info = DocumentInfo::new(&settings.title, &settings.author, &settings.subject);
        let bytes = PdfDocumentWriter::new(info)
            .with_compression(settings.compress)
            .write_to_bytes(&pages)?;

        tracing::debug!(
            filename = %settings.filename,
            pages = pages.len(),
            bytes = bytes.len(),
            "document assembled"
        );

        Ok(ExportArtifact {
            filename: settings.filename,
            bytes,
            page_count: pages.len(),
        })
    }

    /// Build the PDF and emit it through `sink`
    pub fn export(
        &self,
        content: &str,
        options: &ExportOptions,
        sink: &dyn ArtifactSink,
    ) -> Result<PathBuf> {
        let artifact = self.assemble(content, options)?;
        sink.emit(&artifact)
    }

    /// Export HTML content by its visible text
    pub fn export_html(
        &self,
        html: &str,
        options: &ExportOptions,
        sink: &dyn ArtifactSink,
    ) -> Result<PathBuf> {
        self.export(&placeholders::html_to_text(html), options, sink)
    }

    /// Export what the editor currently holds.
    ///
    /// Without an editor this does nothing and returns `Ok(None)`. Title and
    /// filename default to the resignation-letter values unless supplied.
    pub fn export_editor(
        &self,
        editor: Option<&dyn RichTextSource>,
        options: &ExportOptions,
        sink: &dyn ArtifactSink,
    ) -> Result<Option<PathBuf>> {
        let Some(editor) = editor else {
            tracing::debug!("no editor attached, export skipped");
            return Ok(None);
        };
        let defaults = ExportOptions::new()
            .with_title(EDITOR_EXPORT_TITLE)
            .with_filename(EDITOR_EXPORT_FILENAME);
        let options = options.merged_over(&defaults);
        self.export(&editor.get_text(), &options, sink).map(Some)
    }
}
