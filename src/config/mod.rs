pub mod local;

use crate::core::ConfigProvider;
use crate::utils::error::{RestructureError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_INPUT_PATH: &str = "public/comments.json";
pub const DEFAULT_OUTPUT_PATH: &str = "public/comments_restructured.json";
pub const CONFIG_FILE_NAME: &str = "tag-restructurer.toml";

/// Settings for one run. Every section is optional in the TOML file; missing
/// values fall back to the fixed defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub paths: PathsConfig,
    pub logging: LoggingConfig,
    pub monitoring: MonitoringConfig,
    pub run: RunBehaviour,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    pub input: String,
    pub output: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            input: DEFAULT_INPUT_PATH.to_string(),
            output: DEFAULT_OUTPUT_PATH.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub verbose: bool,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitoringConfig {
    pub enabled: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RunBehaviour {
    /// 失敗時以非零狀態碼結束；預設維持 0
    pub fail_on_error: bool,
}

impl RunConfig {
    pub fn with_paths(input: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            paths: PathsConfig {
                input: input.into(),
                output: output.into(),
            },
            ..Self::default()
        }
    }

    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| RestructureError::ConfigError {
            message: format!("cannot read {}: {}", path.as_ref().display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| RestructureError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Loads `tag-restructurer.toml` from `dir` when present, defaults
    /// otherwise.
    pub fn load_from_dir<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let candidate = dir.as_ref().join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            tracing::debug!("Loading configuration from {}", candidate.display());
            Self::from_file(candidate)
        } else {
            Ok(Self::default())
        }
    }

    pub fn load() -> Result<Self> {
        Self::load_from_dir(".")
    }
}

impl ConfigProvider for RunConfig {
    fn input_path(&self) -> &str {
        &self.paths.input
    }

    fn output_path(&self) -> &str {
        &self.paths.output
    }
}

impl Validate for RunConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("paths.input", &self.paths.input)?;
        validation::validate_path("paths.output", &self.paths.output)?;
        validation::validate_distinct_paths(&self.paths.input, &self.paths.output)
    }
}
