//! Runtime Configuration
//!
//! Optional settings read from `window.__CAMPUS_FIND_CONFIG__`. Every field
//! has a default, so a missing or partial object is fine.

use log::LevelFilter;
use serde::Deserialize;
use thiserror::Error;
use wasm_bindgen::JsValue;

/// Name of the global object the host page may define
pub const CONFIG_GLOBAL: &str = "__CAMPUS_FIND_CONFIG__";

pub const DEFAULT_PLACEHOLDER_IMAGE: &str =
    "https://images.unsplash.com/photo-1586769852044-692d6e3703f0?w=400&h=300&fit=crop";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no window object")]
    NoWindow,
    #[error("failed to read window config: {0}")]
    Read(String),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BoardConfig {
    /// Pause before a submitted report is accepted; 0 disables it
    pub submit_delay_ms: u32,
    pub placeholder_image_url: String,
    /// Number of reports shown under "Recent Reports"
    pub recent_limit: usize,
    pub load_seed: bool,
    pub log_level: String,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            submit_delay_ms: 500,
            placeholder_image_url: DEFAULT_PLACEHOLDER_IMAGE.to_string(),
            recent_limit: 4,
            load_seed: true,
            log_level: "info".to_string(),
        }
    }
}

impl BoardConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Invalid(e.to_string()))
    }

    pub fn from_window() -> Result<Self, ConfigError> {
        let window = web_sys::window().ok_or(ConfigError::NoWindow)?;
        let raw = js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL))
            .map_err(|e| ConfigError::Read(format!("{:?}", e)))?;
        if raw.is_undefined() || raw.is_null() {
            return Ok(Self::default());
        }
        serde_wasm_bindgen::from_value(raw).map_err(|e| ConfigError::Invalid(e.to_string()))
    }

    /// Window config, or defaults when it cannot be read
    pub fn load() -> Self {
        Self::from_window().unwrap_or_else(|e| {
            log::warn!("{}; using default configuration", e);
            Self::default()
        })
    }

    /// Parsed log level; unknown names fall back to `info`
    pub fn log_level(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }
}
