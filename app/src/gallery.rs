//! Template gallery state

use store::{filter_templates, seed_templates, CategoryFilter, Template};

/// Templates on offer, the active category filter and the selection
#[derive(Debug, Clone, Default)]
pub struct Gallery {
    templates: Vec<Template>,
    loading: bool,
    filter: CategoryFilter,
    selected: Option<String>,
}

impl Gallery {
    /// An empty gallery waiting for its first load
    pub fn new() -> Self {
        Self {
            loading: true,
            ..Self::default()
        }
    }

    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn begin_loading(&mut self) {
        self.loading = true;
    }

    /// Replace the template list. A selection that no longer exists is dropped.
    pub fn set_templates(&mut self, templates: Vec<Template>) {
        self.templates = templates;
        self.loading = false;
        if let Some(id) = &self.selected {
            if !self.templates.iter().any(|t| &t.id == id) {
                self.selected = None;
            }
        }
    }

    pub fn filter(&self) -> &CategoryFilter {
        &self.filter
    }

    pub fn set_filter(&mut self, filter: CategoryFilter) {
        self.filter = filter;
    }

    /// Templates passing the current filter
    pub fn visible(&self) -> Vec<&Template> {
        filter_templates(&self.templates, &self.filter)
    }

    /// Select a template by id. Selection never alters the template.
    pub fn select(&mut self, id: &str) -> Option<&Template> {
        let template = self.templates.iter().find(|t| t.id == id)?;
        self.selected = Some(template.id.clone());
        Some(template)
    }

    pub fn selected(&self) -> Option<&Template> {
        let id = self.selected.as_deref()?;
        self.templates.iter().find(|t| t.id == id)
    }

    /// Back to the seed list, no filter, nothing selected
    pub fn reset(&mut self) {
        *self = Self {
            templates: seed_templates(),
            ..Self::default()
        };
    }
}
