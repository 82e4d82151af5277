//! Template repository interface

use super::{NewTemplate, Template, TemplatePatch, TemplateResult};

/// A source of templates with create/read/update/delete/seed operations.
///
/// Implementations are chosen when the application is composed: in memory,
/// a directory of JSON documents, or a networked document store.
pub trait TemplateRepository {
    /// All templates in a stable order
    fn list(&self) -> TemplateResult<Vec<Template>>;

    /// One template by id
    fn get(&self, id: &str) -> TemplateResult<Template>;

    /// Store a new template and return it with its assigned id
    fn create(&mut self, template: NewTemplate) -> TemplateResult<Template>;

    /// Apply a partial update
    fn update(&mut self, id: &str, patch: TemplatePatch) -> TemplateResult<Template>;

    fn delete(&mut self, id: &str) -> TemplateResult<()>;

    /// Add the built-in templates that are missing. Returns how many were added.
    fn seed(&mut self) -> TemplateResult<usize>;
}

impl<R: TemplateRepository + ?Sized> TemplateRepository for Box<R> {
    fn list(&self) -> TemplateResult<Vec<Template>> {
        (**self).list()
    }

    fn get(&self, id: &str) -> TemplateResult<Template> {
        (**self).get(id)
    }

    fn create(&mut self, template: NewTemplate) -> TemplateResult<Template> {
        (**self).create(template)
    }

    fn update(&mut self, id: &str, patch: TemplatePatch) -> TemplateResult<Template> {
        (**self).update(id, patch)
    }

    fn delete(&mut self, id: &str) -> TemplateResult<()> {
        (**self).delete(id)
    }

    fn seed(&mut self) -> TemplateResult<usize> {
        (**self).seed()
    }
}

/// Fresh id for a created template
pub(crate) fn new_template_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
