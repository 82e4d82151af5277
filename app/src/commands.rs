//! Application commands
//!
//! Each command takes the shared [`AppState`] and reports failures as strings
//! for display.

use crate::editor::EditorMode;
use crate::state::AppState;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;
use store::pdf::{EDITOR_EXPORT_FILENAME, EDITOR_EXPORT_TITLE};
use store::{
    CategoryFilter, DirectorySink, DocumentAssembler, ExportOptions, RichTextSource, Template,
};

// =============================================================================
// DTOs
// =============================================================================

/// Template summary DTO for the gallery
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateSummaryDto {
    pub id: String,
    pub title: String,
    pub category: String,
    /// Milliseconds since the Unix epoch
    pub created_at: i64,
    /// Fields the user is expected to fill in
    pub placeholders: Vec<String>,
}

impl From<&Template> for TemplateSummaryDto {
    fn from(template: &Template) -> Self {
        Self {
            id: template.id.clone(),
            title: template.title.clone(),
            category: template.category.to_string(),
            created_at: template.created_at.timestamp_millis(),
            placeholders: template.placeholders(),
        }
    }
}

// =============================================================================
// Gallery
// =============================================================================

/// Fetch templates from the repository in the background and fill the gallery.
///
/// An empty repository is seeded first. Returns the number of templates loaded.
pub async fn load_templates(state: Arc<AppState>) -> Result<usize, String> {
    state
        .gallery
        .lock()
        .map_err(|e| e.to_string())?
        .begin_loading();

    let repository = Arc::clone(&state.repository);
    let templates = tokio::task::spawn_blocking(move || {
        let mut repository = repository.lock().map_err(|e| e.to_string())?;
        let mut templates = repository.list().map_err(|e| e.to_string())?;
        if templates.is_empty() {
            let added = repository.seed().map_err(|e| e.to_string())?;
            tracing::info!("Seeded {} templates", added);
            templates = repository.list().map_err(|e| e.to_string())?;
        }
        Ok::<_, String>(templates)
    })
    .await
    .map_err(|e| e.to_string())??;

    let count = templates.len();
    state
        .gallery
        .lock()
        .map_err(|e| e.to_string())?
        .set_templates(templates);
    tracing::debug!(count, "templates loaded");
    Ok(count)
}

/// Templates visible under the current filter
pub fn list_templates(state: &AppState) -> Result<Vec<TemplateSummaryDto>, String> {
    let gallery = state.gallery.lock().map_err(|e| e.to_string())?;
    Ok(gallery.visible().into_iter().map(TemplateSummaryDto::from).collect())
}

/// Change the category filter (`"all"` or a category name)
pub fn set_filter(category: &str, state: &AppState) -> Result<Vec<TemplateSummaryDto>, String> {
    state
        .gallery
        .lock()
        .map_err(|e| e.to_string())?
        .set_filter(CategoryFilter::from(category));
    list_templates(state)
}

/// Select a template and load it into the editor
pub fn select_template(template_id: &str, state: &AppState) -> Result<TemplateSummaryDto, String> {
    let mut gallery = state.gallery.lock().map_err(|e| e.to_string())?;
    let template = gallery
        .select(template_id)
        .ok_or_else(|| format!("Template not found: {}", template_id))?;

    let mut editor = state.editor.lock().map_err(|e| e.to_string())?;
    editor.load_template(template);
    Ok(TemplateSummaryDto::from(template))
}

/// Restore the seed list and clear the editor
pub fn reset_gallery(state: &AppState) -> Result<(), String> {
    state.gallery.lock().map_err(|e| e.to_string())?.reset();
    *state.editor.lock().map_err(|e| e.to_string())? = Default::default();
    Ok(())
}

// =============================================================================
// Editor
// =============================================================================

pub fn toggle_mode(state: &AppState) -> Result<EditorMode, String> {
    let mut editor = state.editor.lock().map_err(|e| e.to_string())?;
    Ok(editor.toggle())
}

/// Store the editor's current markup
pub fn update_content(html: String, state: &AppState) -> Result<(), String> {
    state.editor.lock().map_err(|e| e.to_string())?.set_html(html);
    Ok(())
}

pub fn preview_html(state: &AppState) -> Result<String, String> {
    Ok(state.editor.lock().map_err(|e| e.to_string())?.preview_html())
}

// =============================================================================
// Export
// =============================================================================

/// Export the editor content to the configured output directory.
///
/// The header carries the selected template's title. Page numbers, date and
/// watermark are on unless the saved export defaults say otherwise for fields
/// not set here.
pub fn export_pdf(state: &AppState) -> Result<Option<PathBuf>, String> {
    let title = {
        let gallery = state.gallery.lock().map_err(|e| e.to_string())?;
        gallery
            .selected()
            .map(|t| t.title.clone())
            .unwrap_or_else(|| EDITOR_EXPORT_TITLE.to_string())
    };

    let (defaults, output_dir) = {
        let settings = state.settings.lock().map_err(|e| e.to_string())?;
        let current = settings.get();
        (current.export.clone(), current.output_dir.clone())
    };

    let options = ExportOptions::new()
        .with_title(title)
        .with_filename(EDITOR_EXPORT_FILENAME)
        .with_page_numbers(true)
        .with_date(true)
        .with_watermark(true)
        .merged_over(&defaults);

    let editor = state.editor.lock().map_err(|e| e.to_string())?;
    let sink = DirectorySink::new(output_dir);
    let path = DocumentAssembler::new()
        .export_editor(Some(&*editor as &dyn RichTextSource), &options, &sink)
        .map_err(|e| e.to_string())?;

    if let Some(path) = &path {
        tracing::info!("Exported PDF to {:?}", path);
    }
    Ok(path)
}
