//! Directory-backed template repository
//!
//! Each template is one JSON document, `<dir>/<id>.json`.

use super::repository::new_template_id;
use super::{
    seed_templates, NewTemplate, Template, TemplateError, TemplatePatch, TemplateRepository,
    TemplateResult,
};
use std::fs;
use std::path::{Path, PathBuf};

/// File extension for stored templates
pub const TEMPLATE_EXTENSION: &str = "json";

/// Persistent template store in a directory
#[derive(Debug, Clone)]
pub struct FileTemplateRepository {
    templates_dir: PathBuf,
}

impl FileTemplateRepository {
    /// Open (and create if needed) a template directory
    pub fn open(templates_dir: impl Into<PathBuf>) -> TemplateResult<Self> {
        let repo = Self {
            templates_dir: templates_dir.into(),
        };
        repo.ensure_directory()?;
        Ok(repo)
    }

    fn ensure_directory(&self) -> TemplateResult<()> {
        if !self.templates_dir.exists() {
            fs::create_dir_all(&self.templates_dir)?;
        }
        Ok(())
    }

    pub fn templates_dir(&self) -> &Path {
        &self.templates_dir
    }

    fn template_path(&self, id: &str) -> TemplateResult<PathBuf> {
        validate_id(id)?;
        Ok(self
            .templates_dir
            .join(format!("{}.{}", id, TEMPLATE_EXTENSION)))
    }

    fn read(&self, path: &Path) -> TemplateResult<Template> {
        let json = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }

    fn write(&self, template: &Template) -> TemplateResult<()> {
        let path = self.template_path(&template.id)?;
        let json = serde_json::to_string_pretty(template)?;
        fs::write(path, json)?;
        Ok(())
    }
}

/// Ids become filenames, so only `[A-Za-z0-9_-]` is accepted.
fn validate_id(id: &str) -> TemplateResult<()> {
    let valid = !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(TemplateError::InvalidId(id.to_string()))
    }
}

impl TemplateRepository for FileTemplateRepository {
    fn list(&self) -> TemplateResult<Vec<Template>> {
        self.ensure_directory()?;
        let mut templates = Vec::new();

        for entry in fs::read_dir(&self.templates_dir)? {
            let path = entry?.path();
            if path.extension().map(|e| e == TEMPLATE_EXTENSION).unwrap_or(false) {
                match self.read(&path) {
                    Ok(template) => templates.push(template),
                    Err(e) => tracing::warn!("Skipping unreadable template {}: {}", path.display(), e),
                }
            }
        }

        templates.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
        Ok(templates)
    }

    fn get(&self, id: &str) -> TemplateResult<Template> {
        let path = self.template_path(id)?;
        if !path.exists() {
            return Err(TemplateError::NotFound(id.to_string()));
        }
        self.read(&path)
    }

    fn create(&mut self, template: NewTemplate) -> TemplateResult<Template> {
        let template = template.into_template(new_template_id());
        if self.template_path(&template.id)?.exists() {
            return Err(TemplateError::AlreadyExists(template.id));
        }
        self.write(&template)?;
        Ok(template)
    }

    fn update(&mut self, id: &str, patch: TemplatePatch) -> TemplateResult<Template> {
        let updated = self.get(id)?.patched(patch);
        self.write(&updated)?;
        Ok(updated)
    }

    fn delete(&mut self, id: &str) -> TemplateResult<()> {
        let path = self.template_path(id)?;
        if !path.exists() {
            return Err(TemplateError::NotFound(id.to_string()));
        }
        fs::remove_file(path)?;
        Ok(())
    }

    fn seed(&mut self) -> TemplateResult<usize> {
        self.ensure_directory()?;
        let mut added = 0;
        for template in seed_templates() {
            if !self.template_path(&template.id)?.exists() {
                self.write(&template)?;
                added += 1;
            }
        }
        tracing::debug!(added, dir = %self.templates_dir.display(), "seeded templates");
        Ok(added)
    }
}
