//! Application settings management
//!
//! Settings live in `settings.json` inside the application data directory:
//! export defaults, where templates come from, and where exported PDFs go.

use crate::pdf::ExportOptions;
use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main application settings container
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct AppSettings {
    /// Export defaults, layered under per-call options
    pub export: ExportOptions,
    /// Which template repository to use
    pub templates: TemplateStoreSettings,
    /// Directory exported PDFs are written to
    pub output_dir: PathBuf,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            export: ExportOptions::default(),
            templates: TemplateStoreSettings::default(),
            output_dir: PathBuf::from("exports"),
        }
    }
}

/// Template repository selection
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum TemplateStoreSettings {
    /// Built-in seed templates, kept in memory
    #[default]
    Memory,
    /// One JSON document per template in a directory
    Directory { path: PathBuf },
    /// Networked document store
    Remote { url: String },
}

/// Settings manager for loading, saving, and updating application settings
pub struct SettingsManager {
    /// Path to the settings file
    settings_path: PathBuf,
    /// Current settings (cached)
    current: AppSettings,
}

impl SettingsManager {
    /// Create a new settings manager with the given app data directory
    pub fn new(app_data_dir: PathBuf) -> Self {
        let settings_path = app_data_dir.join("settings.json");
        Self {
            settings_path,
            current: AppSettings::default(),
        }
    }

    /// Get the path to the settings file
    pub fn settings_path(&self) -> &PathBuf {
        &self.settings_path
    }

    fn apply(&mut self, content: &str) {
        match serde_json::from_str::<AppSettings>(content) {
            Ok(settings) => self.current = settings,
            Err(e) => {
                tracing::warn!("Failed to parse settings file, using defaults: {}", e);
                self.current = AppSettings::default();
            }
        }
    }

    /// Load settings from disk, or return defaults if file doesn't exist
    pub async fn load(&mut self) -> Result<&AppSettings> {
        if self.settings_path.exists() {
            let content = tokio::fs::read_to_string(&self.settings_path).await?;
            self.apply(&content);
        } else {
            self.current = AppSettings::default();
        }
        Ok(&self.current)
    }

    /// Load settings synchronously (for use during app startup)
    pub fn load_sync(&mut self) -> Result<&AppSettings> {
        if self.settings_path.exists() {
            let content = std::fs::read_to_string(&self.settings_path)?;
            self.apply(&content);
        } else {
            self.current = AppSettings::default();
        }
        Ok(&self.current)
    }

    /// Save current settings to disk
    pub async fn save(&self) -> Result<()> {
        if let Some(parent) = self.settings_path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let content = serde_json::to_string_pretty(&self.current)?;
        tokio::fs::write(&self.settings_path, content).await?;
        Ok(())
    }

    /// Save settings synchronously
    pub fn save_sync(&self) -> Result<()> {
        if let Some(parent) = self.settings_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(&self.current)?;
        std::fs::write(&self.settings_path, content)?;
        Ok(())
    }

    /// Get current settings
    pub fn get(&self) -> &AppSettings {
        &self.current
    }

    /// Update settings and save to disk
    pub async fn update(&mut self, settings: AppSettings) -> Result<()> {
        self.current = settings;
        self.save().await
    }

    /// Update settings synchronously
    pub fn update_sync(&mut self, settings: AppSettings) -> Result<()> {
        self.current = settings;
        self.save_sync()
    }

    /// Replace only the export defaults
    pub fn update_export_sync(&mut self, export: ExportOptions) -> Result<()> {
        self.current.export = export;
        self.save_sync()
    }

    /// Reset settings to defaults synchronously
    pub fn reset_sync(&mut self) -> Result<&AppSettings> {
        self.current = AppSettings::default();
        self.save_sync()?;
        Ok(&self.current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = AppSettings::default();
        assert_eq!(settings.export, ExportOptions::default());
        assert_eq!(settings.templates, TemplateStoreSettings::Memory);
        assert_eq!(settings.output_dir, PathBuf::from("exports"));
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let json = r#"{ "export": { "author": "Acme HR", "showWatermark": true } }"#;
        let settings: AppSettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.export.author.as_deref(), Some("Acme HR"));
        assert_eq!(settings.export.show_watermark, Some(true));
        assert_eq!(settings.templates, TemplateStoreSettings::Memory);
        assert_eq!(settings.output_dir, PathBuf::from("exports"));
    }

    #[test]
    fn test_template_store_serialization() {
        let dir = TemplateStoreSettings::Directory {
            path: PathBuf::from("/tmp/templates"),
        };
        assert_eq!(
            serde_json::to_string(&dir).unwrap(),
            r#"{"kind":"directory","path":"/tmp/templates"}"#
        );
        let remote: TemplateStoreSettings =
            serde_json::from_str(r#"{"kind":"remote","url":"https://db.example"}"#).unwrap();
        assert_eq!(
            remote,
            TemplateStoreSettings::Remote {
                url: "https://db.example".to_string()
            }
        );
    }

    #[test]
    fn test_settings_manager_load_save_sync() {
        let temp_dir = TempDir::new().unwrap();
        let mut manager = SettingsManager::new(temp_dir.path().to_path_buf());

        let settings = manager.load_sync().unwrap();
        assert_eq!(settings, &AppSettings::default());

        let mut new_settings = AppSettings::default();
        new_settings.export = ExportOptions::new().with_author("Jordan");
        new_settings.output_dir = PathBuf::from("letters");
        manager.update_sync(new_settings).unwrap();

        let mut manager2 = SettingsManager::new(temp_dir.path().to_path_buf());
        let loaded = manager2.load_sync().unwrap();
        assert_eq!(loaded.export.author.as_deref(), Some("Jordan"));
        assert_eq!(loaded.output_dir, PathBuf::from("letters"));
    }

    #[test]
    fn test_unparsable_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("settings.json"), "{ nope").unwrap();
        let mut manager = SettingsManager::new(temp_dir.path().to_path_buf());
        assert_eq!(manager.load_sync().unwrap(), &AppSettings::default());
    }

    #[test]
    fn test_settings_manager_reset_sync() {
        let temp_dir = TempDir::new().unwrap();
        let mut manager = SettingsManager::new(temp_dir.path().to_path_buf());
        manager
            .update_export_sync(ExportOptions::new().with_title("Custom"))
            .unwrap();
        let settings = manager.reset_sync().unwrap();
        assert_eq!(settings.export.title, None);
    }

    #[tokio::test]
    async fn test_settings_manager_async() {
        let temp_dir = TempDir::new().unwrap();
        let mut manager = SettingsManager::new(temp_dir.path().join("nested"));

        manager.load().await.unwrap();

        let mut new_settings = AppSettings::default();
        new_settings.export = ExportOptions::new().with_line_height(6.0);
        manager.update(new_settings).await.unwrap();

        let mut manager2 = SettingsManager::new(temp_dir.path().join("nested"));
        let loaded = manager2.load().await.unwrap();
        assert_eq!(loaded.export.line_height, Some(6.0));
    }
}
