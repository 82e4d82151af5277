//! Resigner - resignation letter templates with PDF export
//!
//! Wires the template repository, gallery, editor session and PDF export
//! together behind a small set of commands.

pub mod commands;
pub mod editor;
pub mod gallery;
pub mod state;

pub use editor::{EditorMode, EditorSession};
pub use gallery::Gallery;
pub use state::{open_repository, AppState, SharedRepository};
