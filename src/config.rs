//! Client Configuration
//!
//! Optional settings a page can provide before the app boots:
//!
//! ```html
//! <script>window.TASK_BOARD_CONFIG = { api_base: "/api", log_level: "debug" };</script>
//! ```

use log::LevelFilter;
use serde::Deserialize;
use thiserror::Error;
use wasm_bindgen::JsValue;

/// Name of the global the page may set
pub const CONFIG_GLOBAL: &str = "TASK_BOARD_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("TASK_BOARD_CONFIG is malformed: {0}")]
    Malformed(String),
    #[error("unknown log level `{0}`")]
    LogLevel(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Prefix for every backend path
    pub api_base: String,
    /// sessionStorage key holding the username
    pub session_key: String,
    pub log_level: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: "/api".to_string(),
            session_key: "username".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl ClientConfig {
    /// Read `window.TASK_BOARD_CONFIG`. Absent means defaults.
    pub fn from_window() -> Result<Self, ConfigError> {
        let Some(window) = web_sys::window() else {
            return Ok(Self::default());
        };
        let raw = js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL))
            .map_err(|err| ConfigError::Malformed(format!("{:?}", err)))?;
        if raw.is_undefined() || raw.is_null() {
            return Ok(Self::default());
        }
        let config: Self = serde_wasm_bindgen::from_value(raw)
            .map_err(|err| ConfigError::Malformed(err.to_string()))?;
        config.validate()
    }

    fn validate(self) -> Result<Self, ConfigError> {
        self.level_filter()?;
        if self.session_key.trim().is_empty() {
            return Err(ConfigError::Malformed("session_key is empty".to_string()));
        }
        Ok(self)
    }

    pub fn level_filter(&self) -> Result<LevelFilter, ConfigError> {
        self.log_level
            .parse()
            .map_err(|_| ConfigError::LogLevel(self.log_level.clone()))
    }
}
