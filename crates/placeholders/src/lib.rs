//! Placeholders - `{{field}}` markers in letter templates
//!
//! Templates carry user-fillable fields written as `{{identifier}}`. This crate
//! turns those markers into highlighted inline spans for display, fills them
//! from supplied values, and extracts the plain text that the PDF export works
//! from.
//!
//! # Example
//!
//! ```rust
//! use placeholders::{highlight_placeholders, placeholder_names};
//!
//! let text = "Dear {{manager_name}},";
//! assert_eq!(placeholder_names(text), vec!["manager_name".to_string()]);
//! assert!(highlight_placeholders(text).contains("data-placeholder=\"manager_name\""));
//! ```

mod field;
mod html;

pub use field::{
    fill_placeholders, highlight_placeholders, placeholder_names, PLACEHOLDER_CLASS,
    PLACEHOLDER_PATTERN,
};
pub use html::{html_to_text, text_to_html};
