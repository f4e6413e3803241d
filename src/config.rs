use directories::ProjectDirs;
use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{GateError, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub log: LogConfig,
    #[serde(default)]
    pub routing: RoutingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_file_enabled")]
    pub file_enabled: bool,
    #[serde(default = "default_log_rotation")]
    pub rotation: String,
    #[serde(default)]
    pub dir: Option<String>,
    #[serde(default = "default_log_file_prefix")]
    pub file_prefix: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file_enabled: default_log_file_enabled(),
            rotation: default_log_rotation(),
            dir: None,
            file_prefix: default_log_file_prefix(),
        }
    }
}

/// Routing section: the response-model proxy mapping.
///
/// `model_proxy` maps an inbound model name to the name echoed back to the
/// client. Models absent from the map are echoed unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoutingConfig {
    #[serde(default)]
    pub model_proxy: FxHashMap<String, String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_file_enabled() -> bool {
    true
}

fn default_log_rotation() -> String {
    "daily".to_string()
}

fn default_log_file_prefix() -> String {
    "modelgate".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log: LogConfig::default(),
            routing: RoutingConfig::default(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_dir = get_config_dir()?;
        let config_file = config_dir.join("modelgate.toml");

        Self::load_from(&config_file)
    }

    /// Load from an explicit file path, still merging prefixed env vars.
    pub fn load_from(config_file: &Path) -> Result<Self> {
        let config = Figment::new()
            .merge(Toml::file(config_file))
            .merge(Env::prefixed("MODELGATE_"))
            .extract()?;

        Ok(config)
    }

    pub fn config_dir() -> Result<PathBuf> {
        get_config_dir()
    }

    pub fn data_dir() -> Result<PathBuf> {
        get_data_dir()
    }

    pub fn log_dir(&self) -> Result<PathBuf> {
        if let Some(log_dir) = &self.log.dir {
            let path = PathBuf::from(log_dir);
            std::fs::create_dir_all(&path)?;
            Ok(path)
        } else {
            let data_dir = Self::data_dir()?;
            let log_dir = data_dir.join("logs");
            std::fs::create_dir_all(&log_dir)?;
            Ok(log_dir)
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_dir = get_config_dir()?;
        let config_file = config_dir.join("modelgate.toml");

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| GateError::Other(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(&config_file, toml_string)?;
        Ok(())
    }
}

fn get_config_dir() -> Result<PathBuf> {
    let project_dirs = ProjectDirs::from("", "", "modelgate").ok_or_else(|| {
        GateError::Config(figment::Error::from(
            "Could not determine config directory".to_string(),
        ))
    })?;

    let config_dir = project_dirs.config_dir();
    std::fs::create_dir_all(config_dir)?;

    Ok(config_dir.to_path_buf())
}

fn get_data_dir() -> Result<PathBuf> {
    let project_dirs = ProjectDirs::from("", "", "modelgate").ok_or_else(|| {
        GateError::Config(figment::Error::from(
            "Could not determine data directory".to_string(),
        ))
    })?;

    let data_dir = project_dirs.data_dir();
    std::fs::create_dir_all(data_dir)?;

    Ok(data_dir.to_path_buf())
}
