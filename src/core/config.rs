use log::LevelFilter;
use serde::{Deserialize, Serialize};

use super::error::ConfigError;

// Id of the optional <script type="application/json"> element in index.html
pub const CONFIG_ELEMENT_ID: &str = "task-board-config";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    pub title: String,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Project Board".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = serde_json::from_str(raw)?;
        Ok(config)
    }

    pub fn level_filter(&self) -> Result<LevelFilter, ConfigError> {
        self.log_level
            .parse::<LevelFilter>()
            .map_err(|_| ConfigError::LogLevel(self.log_level.clone()))
    }

    /// Reads the page's config element. A missing element means defaults.
    /// Problems are returned alongside the fallback config so they can be
    /// logged once the logger is up.
    pub fn load() -> (Self, Option<ConfigError>) {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());

        match raw {
            Some(raw) if !raw.trim().is_empty() => Self::resolve(&raw),
            _ => (Self::default(), None),
        }
    }

    pub(crate) fn resolve(raw: &str) -> (Self, Option<ConfigError>) {
        match Self::from_json(raw) {
            Ok(config) => match config.level_filter() {
                Ok(_) => (config, None),
                Err(e) => (
                    Self {
                        log_level: Self::default().log_level,
                        ..config
                    },
                    Some(e),
                ),
            },
            Err(e) => (Self::default(), Some(e)),
        }
    }
}
