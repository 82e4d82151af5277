//! Editor session
//!
//! Holds the markup the user is working on and whether it is shown editable or
//! as a read-only preview. The export path reads it through
//! [`RichTextSource`].

use placeholders::{highlight_placeholders, html_to_text, text_to_html};
use serde::{Deserialize, Serialize};
use store::{RichTextSource, Template};

/// Edit or preview
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditorMode {
    #[default]
    Edit,
    Preview,
}

impl EditorMode {
    pub fn toggled(self) -> Self {
        match self {
            EditorMode::Edit => EditorMode::Preview,
            EditorMode::Preview => EditorMode::Edit,
        }
    }
}

/// Live editor content
#[derive(Debug, Clone, Default)]
pub struct EditorSession {
    html: String,
    mode: EditorMode,
    template_id: Option<String>,
}

impl EditorSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the content with a template, placeholders highlighted, and
    /// switch to preview.
    pub fn load_template(&mut self, template: &Template) {
        self.html = highlight_placeholders(&text_to_html(&template.content));
        self.template_id = Some(template.id.clone());
        self.mode = EditorMode::Preview;
    }

    pub fn edit(&mut self) {
        self.mode = EditorMode::Edit;
    }

    pub fn preview(&mut self) {
        self.mode = EditorMode::Preview;
    }

    pub fn toggle(&mut self) -> EditorMode {
        self.mode = self.mode.toggled();
        self.mode
    }

    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    pub fn is_editing(&self) -> bool {
        self.mode == EditorMode::Edit
    }

    /// Id of the template last loaded
    pub fn template_id(&self) -> Option<&str> {
        self.template_id.as_deref()
    }

    /// Store what the user typed
    pub fn set_html(&mut self, html: impl Into<String>) {
        self.html = html.into();
    }

    pub fn html(&self) -> &str {
        &self.html
    }

    /// Markup for the preview pane, with any markers typed since loading
    /// highlighted too.
    pub fn preview_html(&self) -> String {
        highlight_placeholders(&self.html)
    }
}

impl RichTextSource for EditorSession {
    fn get_text(&self) -> String {
        html_to_text(&self.html)
    }

    fn get_html(&self) -> String {
        self.html.clone()
    }
}
