//! Layout Engine - Paragraph splitting, line breaking, and pagination
//!
//! This crate turns a plain-text document into wrapped lines and flows them
//! onto pages. Text width comes from a [`TextMeasurer`], either real Helvetica
//! metrics or a fixed-width mock for deterministic tests.

mod error;
mod line_breaker;
mod metrics;
mod paginator;

pub use error::*;
pub use line_breaker::*;
pub use metrics::*;
pub use paginator::*;
