use crate::error::{HostDataError, Result};
use crate::parser::LineParser;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const PROJECT_CONFIG_FILE: &str = ".hostdata.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub parsing: ParsingConfig,
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParsingConfig {
    /// Extra chrono date layouts, tried after the built-in ones.
    pub date_formats: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub total_label: String,
    pub unit: String,
    pub format: OutputFormat,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            total_label: "Total volume".to_string(),
            unit: "bytes".to_string(),
            format: OutputFormat::Table,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Invalid output format: {}", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl Config {
    /// Loads `./.hostdata.toml`, then `~/.config/hostdata/config.toml`.
    ///
    /// Falls back to defaults when neither exists or the file found cannot be
    /// parsed.
    pub fn load() -> Self {
        let Some(config_path) = Self::get_config_path() else {
            debug!("No config file found, using defaults");
            return Config::default();
        };

        match Self::load_from(&config_path) {
            Ok(config) => config,
            Err(e) => {
                warn!("{}; using defaults", e);
                Config::default()
            }
        }
    }

    /// Loads a specific file. Unlike [`Config::load`], failures are returned.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading config from {}", path.display());

        let content = fs::read_to_string(path).map_err(|e| HostDataError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        toml::from_str::<Config>(&content).map_err(|e| HostDataError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// A parser accepting the built-in date layouts plus the configured ones.
    pub fn line_parser(&self) -> LineParser {
        LineParser::new().with_date_formats(self.parsing.date_formats.iter().cloned())
    }

    fn get_config_path() -> Option<PathBuf> {
        // Check for project-level config first
        if let Ok(current_dir) = env::current_dir() {
            let project_config = current_dir.join(PROJECT_CONFIG_FILE);
            if project_config.exists() {
                return Some(project_config);
            }
        }

        // Check for user-level config
        if let Some(home_dir) = dirs::home_dir() {
            let user_config = home_dir.join(".config").join("hostdata").join("config.toml");
            if user_config.exists() {
                return Some(user_config);
            }
        }

        None
    }
}
