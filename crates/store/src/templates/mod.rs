//! Template repository for letter templates
//!
//! This module provides:
//! - Template records, categories and gallery filtering
//! - The built-in seed letters
//! - A repository interface with in-memory, directory-backed and (feature
//!   `remote`) networked implementations

mod error;
mod file;
mod memory;
mod model;
#[cfg(feature = "remote")]
mod remote;
mod repository;
mod seed;


pub use error::*;
pub use file::*;
pub use memory::*;
pub use model::*;
#[cfg(feature = "remote")]
pub use remote::*;
pub use repository::TemplateRepository;
pub use seed::*;
