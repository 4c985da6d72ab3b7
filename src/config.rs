use std::path::PathBuf;

use thiserror::Error;

use crate::domain::repository::CleanupPolicy;

pub const HOME_DIR_NAME: &str = ".todo";
pub const LIST_FILE_NAME: &str = "list.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unable to resolve the current user's home directory")]
    NoHomeDir,

    #[error("invalid TODO_CLEANUP: {0}")]
    InvalidCleanupPolicy(String),

    #[error("unable to access home directory at {}", path.display())]
    CreateDir { path: PathBuf, #[source] source: std::io::Error },
}

/// Where the list lives and how cleanup treats ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub app_dir: PathBuf,
    pub list_path: PathBuf,
    pub cleanup: CleanupPolicy,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok(), dirs::home_dir)
    }

    /// Resolves `TODO_HOME`, `TODO_FILE` and `TODO_CLEANUP` through `lookup`,
    /// falling back to `<home>/.todo/list.json` with ids preserved.
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
        home_dir: impl FnOnce() -> Option<PathBuf>,
    ) -> Result<Self, ConfigError> {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let app_dir = match non_empty("TODO_HOME") {
            Some(dir) => PathBuf::from(dir),
            None => home_dir().ok_or(ConfigError::NoHomeDir)?.join(HOME_DIR_NAME),
        };
        let file_name = non_empty("TODO_FILE").unwrap_or_else(|| LIST_FILE_NAME.to_string());
        let cleanup = match non_empty("TODO_CLEANUP") {
            Some(raw) => raw.trim().parse::<CleanupPolicy>().map_err(ConfigError::InvalidCleanupPolicy)?,
            None => CleanupPolicy::default(),
        };

        Ok(Self { list_path: app_dir.join(file_name), app_dir, cleanup })
    }

    /// Points at an explicit list file; its parent becomes the app directory.
    pub fn with_list_path(mut self, path: PathBuf) -> Self {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            self.app_dir = parent.to_path_buf();
        }
        self.list_path = path;
        self
    }

    /// Creates the application directory if it is absent.
    pub fn prepare(&self) -> Result<(), ConfigError> {
        if self.app_dir.as_os_str().is_empty() {
            return Ok(());
        }
        std::fs::create_dir_all(&self.app_dir)
            .map_err(|source| ConfigError::CreateDir { path: self.app_dir.clone(), source })
    }
}
