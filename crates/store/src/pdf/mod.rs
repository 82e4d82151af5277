//! PDF Export Module
//!
//! Turns plain letter text into a paginated, stamped PDF.
//!
//! # Architecture
//!
//! - `objects`: PDF object model (Dictionary, Array, Reference) and syntax
//! - `content`: Content stream operators
//! - `fonts`: Standard Helvetica faces and WinAnsi text encoding
//! - `renderer`: Page canvases (millimetres) to content streams (points)
//! - `document`: Catalog, page tree, Info dictionary
//! - `writer`: File structure, xref, compression
//! - `options`: Export options and their resolved defaults
//! - `stamper`: Header, footer and title bands
//! - `assembler`: Public API tying layout, stamping and writing together

mod assembler;
mod content;
mod document;
mod fonts;
mod objects;
mod options;
mod renderer;
mod stamper;
mod writer;

pub use assembler::*;
pub use document::{DocumentInfo, PRODUCER};
pub use fonts::encode_win_ansi;
pub use options::*;
pub use renderer::{DrawItem, LineItem, PageCanvas, RgbColor, TextItem};
pub use stamper::{format_long_date, page_label, HeaderFooterStamper};

pub use writer::{PdfDocumentWriter, PdfError, Result as PdfResult};
