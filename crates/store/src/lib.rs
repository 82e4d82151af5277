//! Store - PDF export, template repositories, and settings
//!
//! This crate handles the outer half of the letter workflow: stamping and
//! writing paginated PDFs, persisting and seeding templates, and loading
//! application settings.

mod error;
mod settings;
pub mod pdf;
pub mod templates;

pub use error::*;
pub use settings::*;

pub use pdf::{
    ArtifactSink, DirectorySink, DocumentAssembler, ExportArtifact, ExportOptions,
    ExportSettings, PdfError, RichTextSource,
};

pub use templates::{
    filter_templates, seed_templates, CategoryFilter, FileTemplateRepository,
    InMemoryTemplateRepository, NewTemplate, Template, TemplateCategory, TemplateError,
    TemplatePatch, TemplateRepository, TemplateResult,
};

#[cfg(feature = "remote")]
pub use templates::RemoteTemplateRepository;
