//! Harness configuration: defaults, optional YAML file, then environment
use crate::error::{HarnessError, HarnessResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

pub const ENV_LOG: &str = "PATTERNS_LOG";
pub const ENV_FORMAT: &str = "PATTERNS_FORMAT";

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// How the CLI renders a run report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = HarnessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(HarnessError::InvalidArgument(format!(
                "unsupported format `{}`; expected text|json",
                other
            ))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => f.write_str("text"),
            Self::Json => f.write_str("json"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HarnessConfig {
    pub log_level: String,
    pub format: OutputFormat,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            format: OutputFormat::Text,
        }
    }
}

impl HarnessConfig {
    /// Loads defaults, overlays `path` when given, then the process environment.
    pub fn load(path: Option<&Path>) -> HarnessResult<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> HarnessResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            HarnessError::InvalidArgument(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_yaml(&raw)
    }

    pub fn from_yaml(raw: &str) -> HarnessResult<Self> {
        let mut config: Self = serde_yaml::from_str(raw)
            .map_err(|e| HarnessError::InvalidArgument(format!("invalid config: {}", e)))?;
        config.log_level = normalize_level(&config.log_level)?;
        Ok(config)
    }

    /// Overrides fields from environment variables read through `lookup`.
    pub fn apply_env<F>(&mut self, lookup: F) -> HarnessResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup(ENV_LOG) {
            self.log_level = normalize_level(&level)?;
        }
        if let Some(format) = lookup(ENV_FORMAT) {
            self.format = format.parse()?;
        }
        Ok(())
    }
}

fn normalize_level(level: &str) -> HarnessResult<String> {
    let normalized = match level.trim().to_ascii_lowercase().as_str() {
        "warning" => "warn".to_string(),
        other => other.to_string(),
    };
    if LOG_LEVELS.contains(&normalized.as_str()) {
        Ok(normalized)
    } else {
        Err(HarnessError::InvalidArgument(format!(
            "unsupported log level `{}`; expected trace|debug|info|warn|error",
            level.trim()
        )))
    }
}
