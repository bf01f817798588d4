use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::app::infrastructure::error::AppError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    #[serde(default = "default_text_endpoint")]
    pub text_endpoint: String,

    #[serde(default = "default_url_endpoint")]
    pub url_endpoint: String,

    #[serde(default = "default_image_endpoint")]
    pub image_endpoint: String,

    /// Per-request timeout. `None` leaves it to the transport.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,

    #[serde(default = "default_check_service_on_startup")]
    pub check_service_on_startup: bool,
}

fn default_api_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_text_endpoint() -> String {
    "/analyze".to_string()
}

fn default_url_endpoint() -> String {
    "/predict_url".to_string()
}

fn default_image_endpoint() -> String {
    "/predict_image".to_string()
}

fn default_check_service_on_startup() -> bool {
    true
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            text_endpoint: default_text_endpoint(),
            url_endpoint: default_url_endpoint(),
            image_endpoint: default_image_endpoint(),
            request_timeout_secs: None,
            check_service_on_startup: default_check_service_on_startup(),
        }
    }
}

impl AppSettings {
    /// Load settings from disk, or create default if not exists
    pub fn load() -> Self {
        Self::load_from(&Self::get_config_path())
    }

    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(settings) => settings,
                Err(e) => {
                    log::warn!("Failed to parse settings: {}. Using defaults.", e);
                    Self::default()
                }
            },
            Err(e) if e.kind() == ErrorKind::NotFound => {
                // File doesn't exist, use defaults
                let default = Self::default();
                if let Err(e) = default.save_to(path) {
                    log::warn!("Could not write default settings to {}: {}", path.display(), e);
                }
                default
            }
            Err(e) => {
                log::warn!("Failed to read settings from {}: {}. Using defaults.", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save settings to disk
    pub fn save(&self) -> Result<(), AppError> {
        self.save_to(&Self::get_config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<(), AppError> {
        self.validate()?;

        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;

        Ok(())
    }

    /// Reject values that would make every request fail.
    pub fn validate(&self) -> Result<(), AppError> {
        let base = self.api_base_url.trim();
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(AppError::Settings(format!(
                "service URL must start with http:// or https:// (got '{}')",
                self.api_base_url
            )));
        }
        for path in [&self.text_endpoint, &self.url_endpoint, &self.image_endpoint] {
            if path.trim().is_empty() {
                return Err(AppError::Settings("endpoint paths cannot be empty".to_string()));
            }
        }
        if self.request_timeout_secs == Some(0) {
            return Err(AppError::Settings("timeout must be at least one second".to_string()));
        }
        Ok(())
    }

    /// Get config file path (cross-platform)
    pub fn get_config_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("factcheck");
        path.push("settings.json");
        path
    }
}
