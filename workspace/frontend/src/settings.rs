use log::Level;
use wasm_bindgen::JsValue;
use web_sys::window;

/// Backend used when neither the build nor localStorage names one.
const DEFAULT_BACKEND_URL: &str = "http://localhost:8001";

const BACKEND_URL_KEY: &str = "cloudkitchen_backend_url";
const LOG_LEVEL_KEY: &str = "cloudkitchen_log_level";
const DATA_SOURCE_KEY: &str = "cloudkitchen_data_source";

/// Where the presentation on `/` takes its content from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DataSource {
    /// Fetch every section from the backend
    #[default]
    Api,
    /// Render the built-in content model without any network access
    Static,
}

impl DataSource {
    fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "api" => Some(Self::Api),
            "static" => Some(Self::Static),
            _ => None,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::Api => "api",
            Self::Static => "static",
        }
    }
}

/// Global application settings
#[derive(Debug, Clone)]
pub struct AppSettings {
    /// Backend origin without the `/api` prefix (e.g., "http://localhost:8001")
    pub backend_url: String,

    /// Default log level for the application
    pub log_level: Level,

    /// Enable debug mode
    pub debug_mode: bool,

    /// Content source for the main presentation
    pub data_source: DataSource,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            backend_url: option_env!("CLOUDKITCHEN_BACKEND_URL")
                .unwrap_or(DEFAULT_BACKEND_URL)
                .to_string(),
            log_level: Level::Info,
            debug_mode: false,
            data_source: DataSource::Api,
        }
    }
}

impl AppSettings {
    /// Create settings from environment/window location
    pub fn from_environment() -> Self {
        let mut settings = Self::default();

        let Some(window) = window() else {
            return settings;
        };

        if let Ok(hostname) = window.location().hostname() {
            settings.debug_mode = hostname == "localhost" || hostname == "127.0.0.1";
            if settings.debug_mode {
                settings.log_level = Level::Debug;
            }
        }

        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(backend_url)) = storage.get_item(BACKEND_URL_KEY) {
                let backend_url = backend_url.trim().trim_end_matches('/');
                if !backend_url.is_empty() {
                    settings.backend_url = backend_url.to_string();
                }
            }

            if let Ok(Some(log_level)) = storage.get_item(LOG_LEVEL_KEY) {
                settings.log_level = match log_level.to_lowercase().as_str() {
                    "error" => Level::Error,
                    "warn" => Level::Warn,
                    "info" => Level::Info,
                    "debug" => Level::Debug,
                    "trace" => Level::Trace,
                    _ => settings.log_level,
                };
            }

            if let Ok(Some(data_source)) = storage.get_item(DATA_SOURCE_KEY) {
                if let Some(data_source) = DataSource::parse(&data_source) {
                    settings.data_source = data_source;
                }
            }
        }

        settings
    }

    /// Storage entries whose value differs from `previous`.
    ///
    /// Values derived from the build or the hostname stay out of storage
    /// unless they were changed explicitly.
    fn changed_entries(&self, previous: &AppSettings) -> Vec<(&'static str, String)> {
        let mut entries = Vec::new();
        if self.backend_url != previous.backend_url {
            entries.push((BACKEND_URL_KEY, self.backend_url.clone()));
        }
        if self.log_level != previous.log_level {
            entries.push((LOG_LEVEL_KEY, self.log_level.as_str().to_lowercase()));
        }
        if self.data_source != previous.data_source {
            entries.push((DATA_SOURCE_KEY, self.data_source.as_str().to_string()));
        }
        entries
    }

    /// Persist what changed since `previous` to localStorage
    pub fn save_changes(&self, previous: &AppSettings) -> Result<(), JsValue> {
        let entries = self.changed_entries(previous);
        if entries.is_empty() {
            return Ok(());
        }
        if let Some(window) = window() {
            if let Some(storage) = window.local_storage()? {
                for (key, value) in entries {
                    log::debug!("Persisting setting {} = {}", key, value);
                    storage.set_item(key, &value)?;
                }
            }
        }
        Ok(())
    }

    /// Base URL every API path is appended to
    pub fn api_base_url(&self) -> String {
        format!("{}/api", self.backend_url)
    }
}

// Global settings instance using thread_local
use std::cell::RefCell;

thread_local! {
    static SETTINGS: RefCell<AppSettings> = RefCell::new(AppSettings::from_environment());
}

/// Get a copy of the current settings
pub fn get_settings() -> AppSettings {
    SETTINGS.with(|s| s.borrow().clone())
}

/// Update the global settings and persist the fields that changed
pub fn update_settings<F>(f: F)
where
    F: FnOnce(&mut AppSettings),
{
    SETTINGS.with(|s| {
        let mut settings = s.borrow_mut();
        let previous = settings.clone();
        f(&mut settings);
        if let Err(e) = settings.save_changes(&previous) {
            log::warn!("Failed to persist settings: {:?}", e);
        }
    });
}

/// Initialize settings (call this at app startup)
pub fn init_settings() {
    SETTINGS.with(|s| {
        *s.borrow_mut() = AppSettings::from_environment();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_switching_data_source_persists_only_that_key() {
        let before = AppSettings {
            log_level: Level::Debug,
            ..AppSettings::default()
        };
        let mut after = before.clone();
        after.data_source = DataSource::Static;

        assert_eq!(
            after.changed_entries(&before),
            vec![(DATA_SOURCE_KEY, "static".to_string())]
        );
    }

    #[test]
    fn test_unchanged_settings_write_nothing() {
        let settings = AppSettings::default();
        assert!(settings.changed_entries(&settings.clone()).is_empty());
    }

    #[test]
    fn test_stored_values_parse_back() {
        let before = AppSettings::default();
        let after = AppSettings {
            backend_url: "https://plan.example.com".to_string(),
            log_level: Level::Warn,
            ..before.clone()
        };

        let entries = after.changed_entries(&before);
        assert!(entries.contains(&(BACKEND_URL_KEY, "https://plan.example.com".to_string())));
        assert!(entries.contains(&(LOG_LEVEL_KEY, "warn".to_string())));
        assert_eq!(DataSource::parse(DataSource::Static.as_str()), Some(DataSource::Static));
    }
}
