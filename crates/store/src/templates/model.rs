//! Template records and category filtering

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Template categories
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TemplateCategory {
    /// Formal notice
    Professional,
    /// Warm, informal tone
    Friendly,
    /// Immediate or short-notice departure
    Short,
    /// Any other category name, kept lowercase
    Custom(String),
}

impl Default for TemplateCategory {
    fn default() -> Self {
        Self::Professional
    }
}

impl TemplateCategory {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Professional => "professional",
            Self::Friendly => "friendly",
            Self::Short => "short",
            Self::Custom(name) => name,
        }
    }
}

impl fmt::Display for TemplateCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for TemplateCategory {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "professional" => Self::Professional,
            "friendly" => Self::Friendly,
            "short" => Self::Short,
            other => Self::Custom(other.to_string()),
        }
    }
}

impl From<String> for TemplateCategory {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<TemplateCategory> for String {
    fn from(category: TemplateCategory) -> Self {
        category.as_str().to_string()
    }
}

/// A letter template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub title: String,
    /// Raw text with `{{placeholder}}` markers, paragraphs separated by a blank line
    pub content: String,
    pub category: TemplateCategory,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
}

impl Template {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
        category: TemplateCategory,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            content: content.into(),
            category,
            created_at: Utc::now(),
        }
    }

    /// Placeholder names used in the content
    pub fn placeholders(&self) -> Vec<String> {
        placeholders::placeholder_names(&self.content)
    }

    /// Apply a partial update and return the result
    pub fn patched(mut self, patch: TemplatePatch) -> Self {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(content) = patch.content {
            self.content = content;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        self
    }
}

/// Fields for creating a template. The repository assigns id and timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTemplate {
    pub title: String,
    pub content: String,
    pub category: TemplateCategory,
}

impl NewTemplate {
    pub fn new(title: impl Into<String>, content: impl Into<String>, category: impl Into<TemplateCategory>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            category: category.into(),
        }
    }

    pub fn into_template(self, id: impl Into<String>) -> Template {
        Template::new(id, self.title, self.content, self.category)
    }
}

/// Partial update; `None` fields are left as they are
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TemplatePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<TemplateCategory>,
}

impl TemplatePatch {
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<TemplateCategory>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none() && self.category.is_none()
    }
}

/// Gallery category filter
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(TemplateCategory),
}

impl CategoryFilter {
    /// Filters offered by the gallery, in display order
    pub fn choices() -> Vec<CategoryFilter> {
        vec![
            CategoryFilter::All,
            CategoryFilter::Only(TemplateCategory::Professional),
            CategoryFilter::Only(TemplateCategory::Friendly),
            CategoryFilter::Only(TemplateCategory::Short),
        ]
    }

    pub fn matches(&self, template: &Template) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => &template.category == category,
        }
    }
}

impl From<&str> for CategoryFilter {
    fn from(s: &str) -> Self {
        if s.trim().eq_ignore_ascii_case("all") {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(TemplateCategory::from(s))
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str("all"),
            CategoryFilter::Only(category) => write!(f, "{}", category),
        }
    }
}

/// Templates that pass the filter, in their original order
pub fn filter_templates<'a>(templates: &'a [Template], filter: &CategoryFilter) -> Vec<&'a Template> {
    templates.iter().filter(|t| filter.matches(t)).collect()
}
