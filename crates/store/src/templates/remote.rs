//! Networked template repository
//!
//! Talks to a document store exposing named query and mutation functions over
//! HTTP: `POST {base}/api/query` or `/api/mutation` with
//! `{"path": "<module>:<function>", "args": {...}, "format": "json"}`, answered
//! by `{"status": "success", "value": ...}` or
//! `{"status": "error", "errorMessage": "..."}`.

use super::{NewTemplate, Template, TemplateError, TemplatePatch, TemplateRepository, TemplateResult};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};
use std::time::Duration;

/// Module holding the template functions on the server
pub const DEFAULT_FUNCTION_MODULE: &str = "templates/index";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FunctionResponse {
    status: String,
    #[serde(default)]
    value: Value,
    #[serde(default)]
    error_message: Option<String>,
}

/// Template store reached over HTTP
#[derive(Debug, Clone)]
pub struct RemoteTemplateRepository {
    base_url: String,
    module: String,
    client: reqwest::blocking::Client,
}

impl RemoteTemplateRepository {
    pub fn new(base_url: impl Into<String>) -> TemplateResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| TemplateError::Remote(e.to_string()))?;
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            module: DEFAULT_FUNCTION_MODULE.to_string(),
            client,
        })
    }

    fn call<T: DeserializeOwned>(&self, kind: &str, function: &str, args: Value) -> TemplateResult<T> {
        let url = format!("{}/api/{}", self.base_url, kind);
        let body = json!({
            "path": format!("{}:{}", self.module, function),
            "args": args,
            "format": "json",
        });
        tracing::debug!(%url, function, "remote template call");

        let response: FunctionResponse = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .and_then(|r| r.error_for_status())
            .and_then(|r| r.json())
            .map_err(|e| TemplateError::Remote(e.to_string()))?;

        if response.status != "success" {
            return Err(TemplateError::Remote(
                response
                    .error_message
                    .unwrap_or_else(|| format!("{} failed with status {}", function, response.status)),
            ));
        }
        Ok(serde_json::from_value(response.value)?)
    }

    fn query<T: DeserializeOwned>(&self, function: &str, args: Value) -> TemplateResult<T> {
        self.call("query", function, args)
    }

    fn mutation<T: DeserializeOwned>(&self, function: &str, args: Value) -> TemplateResult<T> {
        self.call("mutation", function, args)
    }
}

impl TemplateRepository for RemoteTemplateRepository {
    fn list(&self) -> TemplateResult<Vec<Template>> {
        self.query("getTemplates", json!({}))
    }

    fn get(&self, id: &str) -> TemplateResult<Template> {
        self.list()?
            .into_iter()
            .find(|t| t.id == id)
            .ok_or_else(|| TemplateError::NotFound(id.to_string()))
    }

    fn create(&mut self, template: NewTemplate) -> TemplateResult<Template> {
        let id: String = self.mutation("createTemplate", serde_json::to_value(&template)?)?;
        self.get(&id)
    }

    fn update(&mut self, id: &str, patch: TemplatePatch) -> TemplateResult<Template> {
        let mut args = serde_json::to_value(&patch)?;
        if let Value::Object(map) = &mut args {
            map.insert("id".to_string(), Value::String(id.to_string()));
        }
        let _: Value = self.mutation("updateTemplate", args)?;
        self.get(id)
    }

    fn delete(&mut self, id: &str) -> TemplateResult<()> {
        let _: Value = self.mutation("deleteTemplate", json!({ "id": id }))?;
        Ok(())
    }

    fn seed(&mut self) -> TemplateResult<usize> {
        self.mutation("seedTemplates", json!({}))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_parsing() {
        let ok: FunctionResponse =
            serde_json::from_str(r#"{"status":"success","value":[]}"#).unwrap();
        assert_eq!(ok.status, "success");
        assert!(ok.error_message.is_none());

        let err: FunctionResponse =
            serde_json::from_str(r#"{"status":"error","errorMessage":"boom"}"#).unwrap();
        assert_eq!(err.error_message.as_deref(), Some("boom"));
        assert!(err.value.is_null());
    }

    #[test]
    fn test_remote_documents_deserialize() {
        let value = json!([{
            "_id": "k57abc",
            "_creationTime": 1700000000000.0,
            "title": "Friendly Resignation",
            "content": "Hi {{manager_name}},",
            "category": "friendly",
            "createdAt": 1700000000000i64
        }]);
        let templates: Vec<Template> = serde_json::from_value(value).unwrap();
        assert_eq!(templates[0].id, "k57abc");
        assert_eq!(templates[0].category, super::super::TemplateCategory::Friendly);
    }

    #[test]
    fn test_base_url_trimmed() {
        let repo = RemoteTemplateRepository::new("https://example.convex.cloud/").unwrap();
        assert_eq!(repo.base_url, "https://example.convex.cloud");
        assert_eq!(repo.module, DEFAULT_FUNCTION_MODULE);
    }
}
