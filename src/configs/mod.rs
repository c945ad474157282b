//! # Configuration
//!
//! Layered with figment, later layers winning:
//! built-in defaults, an optional TOML or JSON file, then `NASA_`-prefixed
//! environment variables (`__` separates nested keys, e.g.
//! `NASA_HOSTS__POWER=http://localhost:9000`).

use arc_swap::ArcSwap;
use figment::Figment;
use figment::providers::{Env, Format, Json, Serialized, Toml};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use crate::core::error::NasaError;
use crate::loggers::LogLevel;
use crate::retrieve::dispatcher::{DEFAULT_API_KEY, DEFAULT_TIMEOUT};

pub const ENV_PREFIX: &str = "NASA_";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NasaConfig {
    /// Key for `api.nasa.gov`; `DEMO_KEY` when unset.
    pub api_key: String,
    pub timeout_secs: u64,
    pub log_level: LogLevel,
    /// Provider slug to base URL, e.g. `image_library = "http://localhost:8080"`.
    pub hosts: BTreeMap<String, String>,
}

impl Default for NasaConfig {
    fn default() -> Self {
        Self {
            api_key: DEFAULT_API_KEY.to_string(),
            timeout_secs: DEFAULT_TIMEOUT.as_secs(),
            log_level: LogLevel::Info,
            hosts: BTreeMap::new(),
        }
    }
}

impl NasaConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

pub struct ConfigManager {
    current: ArcSwap<NasaConfig>,
    path: Option<PathBuf>,
    source_info: String,
}

impl ConfigManager {
    /// ENV ONLY: defaults merged with `NASA_` variables.
    pub fn from_env() -> Result<Self, NasaError> {
        let data = Self::extract(None)?;
        Ok(Self {
            current: ArcSwap::from_pointee(data),
            path: None,
            source_info: "env".to_string(),
        })
    }

    /// LOCAL: defaults, then the file, then `NASA_` variables. Fails if the file is missing.
    pub fn get_local_config(path: &str) -> Result<Self, NasaError> {
        let path = Path::new(path);
        if !path.exists() {
            return Err(NasaError::ConfigError(format!(
                "Local file not found: {}",
                path.display()
            )));
        }

        let data = Self::extract(Some(path))?;
        Ok(Self {
            current: ArcSwap::from_pointee(data),
            path: Some(path.to_path_buf()),
            source_info: format!("local:{}", path.display()),
        })
    }

    fn extract(path: Option<&Path>) -> Result<NasaConfig, NasaError> {
        let mut figment = Figment::from(Serialized::defaults(NasaConfig::default()));

        if let Some(path) = path {
            let is_json = path
                .extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| e.eq_ignore_ascii_case("json"));
            figment = if is_json {
                figment.merge(Json::file(path))
            } else {
                figment.merge(Toml::file(path))
            };
        }

        let config: NasaConfig = figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .map_err(|e| NasaError::ConfigError(e.to_string()))?;

        if config.timeout_secs == 0 {
            return Err(NasaError::ConfigError("timeout_secs must be positive".into()));
        }
        Ok(config)
    }

    /// Re-reads every layer and swaps the result in atomically.
    pub fn reload(&self) -> Result<Arc<NasaConfig>, NasaError> {
        let data = Arc::new(Self::extract(self.path.as_deref())?);
        self.current.store(data.clone());
        Ok(data)
    }

    pub fn get(&self) -> Arc<NasaConfig> {
        self.current.load_full()
    }

    pub fn source_info(&self) -> &str {
        &self.source_info
    }
}
