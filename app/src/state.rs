//! Application state management

use crate::editor::EditorSession;
use crate::gallery::Gallery;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use store::{
    FileTemplateRepository, InMemoryTemplateRepository, SettingsManager, StoreError,
    TemplateRepository, TemplateResult, TemplateStoreSettings,
};

/// Template repository shared with background loads
pub type SharedRepository = Arc<Mutex<Box<dyn TemplateRepository + Send>>>;

/// Global application state
pub struct AppState {
    pub gallery: Mutex<Gallery>,
    pub editor: Mutex<EditorSession>,
    pub repository: SharedRepository,
    pub settings: Mutex<SettingsManager>,
}

impl AppState {
    pub fn new(settings: SettingsManager, repository: Box<dyn TemplateRepository + Send>) -> Self {
        Self {
            gallery: Mutex::new(Gallery::new()),
            editor: Mutex::new(EditorSession::new()),
            repository: Arc::new(Mutex::new(repository)),
            settings: Mutex::new(settings),
        }
    }

    /// Load settings from the app data directory and open the repository they name
    pub fn from_app_data_dir(app_data_dir: PathBuf) -> Result<Self, StoreError> {
        let mut settings = SettingsManager::new(app_data_dir);
        // Load settings on startup
        if let Err(e) = settings.load_sync() {
            tracing::warn!("Failed to load settings, using defaults: {}", e);
        }
        let repository = open_repository(&settings.get().templates)?;
        Ok(Self::new(settings, repository))
    }
}

/// Build the repository selected in settings
pub fn open_repository(
    selection: &TemplateStoreSettings,
) -> TemplateResult<Box<dyn TemplateRepository + Send>> {
    match selection {
        TemplateStoreSettings::Memory => Ok(Box::new(InMemoryTemplateRepository::new())),
        TemplateStoreSettings::Directory { path } => {
            tracing::info!("Using template directory: {:?}", path);
            Ok(Box::new(FileTemplateRepository::open(path.clone())?))
        }
        #[cfg(feature = "remote")]
        TemplateStoreSettings::Remote { url } => {
            tracing::info!("Using remote template store: {}", url);
            Ok(Box::new(store::RemoteTemplateRepository::new(url.clone())?))
        }
        #[cfg(not(feature = "remote"))]
        TemplateStoreSettings::Remote { url } => Err(store::TemplateError::Remote(format!(
            "{} requires a build with the `remote` feature",
            url
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::AppSettings;
    use tempfile::TempDir;

    #[test]
    fn test_memory_repository_by_default() {
        let temp_dir = TempDir::new().unwrap();
        let state = AppState::from_app_data_dir(temp_dir.path().to_path_buf()).unwrap();
        let repository = state.repository.lock().unwrap();
        assert_eq!(repository.list().unwrap().len(), 3);
        assert!(state.gallery.lock().unwrap().is_loading());
    }

    #[test]
    fn test_directory_repository_from_settings() {
        let temp_dir = TempDir::new().unwrap();
        let templates_dir = temp_dir.path().join("templates");
        let mut manager = SettingsManager::new(temp_dir.path().to_path_buf());
        manager
            .update_sync(AppSettings {
                templates: TemplateStoreSettings::Directory {
                    path: templates_dir.clone(),
                },
                ..AppSettings::default()
            })
            .unwrap();

        let state = AppState::from_app_data_dir(temp_dir.path().to_path_buf()).unwrap();
        assert!(templates_dir.is_dir());
        assert!(state.repository.lock().unwrap().list().unwrap().is_empty());
    }

    #[cfg(not(feature = "remote"))]
    #[test]
    fn test_remote_needs_feature() {
        let selection = TemplateStoreSettings::Remote {
            url: "https://db.example".to_string(),
        };
        assert!(open_repository(&selection).is_err());
    }
}
