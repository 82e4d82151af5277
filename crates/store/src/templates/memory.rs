//! In-memory template repository

use super::repository::new_template_id;
use super::{
    seed_templates, NewTemplate, Template, TemplateError, TemplatePatch, TemplateRepository,
    TemplateResult,
};

/// Templates held in memory, in insertion order. Starts with the seed set.
#[derive(Debug, Clone)]
pub struct InMemoryTemplateRepository {
    templates: Vec<Template>,
}

impl Default for InMemoryTemplateRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryTemplateRepository {
    /// Repository pre-loaded with the seed templates
    pub fn new() -> Self {
        Self {
            templates: seed_templates(),
        }
    }

    pub fn empty() -> Self {
        Self {
            templates: Vec::new(),
        }
    }

    /// Drop everything and restore the seed set
    pub fn reset(&mut self) {
        self.templates = seed_templates();
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    fn position(&self, id: &str) -> TemplateResult<usize> {
        self.templates
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| TemplateError::NotFound(id.to_string()))
    }
}

impl TemplateRepository for InMemoryTemplateRepository {
    fn list(&self) -> TemplateResult<Vec<Template>> {
        Ok(self.templates.clone())
    }

    fn get(&self, id: &str) -> TemplateResult<Template> {
        Ok(self.templates[self.position(id)?].clone())
    }

    fn create(&mut self, template: NewTemplate) -> TemplateResult<Template> {
        let template = template.into_template(new_template_id());
        self.templates.push(template.clone());
        Ok(template)
    }

    fn update(&mut self, id: &str, patch: TemplatePatch) -> TemplateResult<Template> {
        let index = self.position(id)?;
        let updated = self.templates[index].clone().patched(patch);
        self.templates[index] = updated.clone();
        Ok(updated)
    }

    fn delete(&mut self, id: &str) -> TemplateResult<()> {
        let index = self.position(id)?;
        self.templates.remove(index);
        Ok(())
    }

    fn seed(&mut self) -> TemplateResult<usize> {
        let mut added = 0;
        for template in seed_templates() {
            if !self.templates.iter().any(|t| t.id == template.id) {
                self.templates.push(template);
                added += 1;
            }
        }
        Ok(added)
    }
}
