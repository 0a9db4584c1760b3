use crate::types::field::{FieldName, FieldNameError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

/// User-facing application configuration, persisted as config.toml.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    #[serde(default)]
    pub search: SearchSettings,
}

impl AppConfig {
    /// Returns the config file path within the given data directory.
    pub fn path(data_dir: &Path) -> std::path::PathBuf {
        data_dir.join("config.toml")
    }

    /// Loads config from a TOML file. Returns default config if file doesn't exist.
    pub fn load(path: &Path) -> Result<Self, AppConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Saves config to a TOML file.
    pub fn save(&self, path: &Path) -> Result<(), AppConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validates config values and returns list of validation errors.
    /// Returns empty vec if config is valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.search.keys.is_empty() {
            errors.push("search.keys must name at least one field".to_string());
        }

        for key in &self.search.keys {
            if let Err(e) = FieldName::try_new(key.clone()) {
                errors.push(format!("search.keys entry {key:?} is invalid: {e}"));
            }
        }

        errors
    }

    /// Returns a validated config, dropping invalid search keys.
    ///
    /// An empty key list stays empty: there is no sensible default field.
    pub fn with_defaults_for_invalid(&self) -> Self {
        Self {
            search: SearchSettings {
                keys: self
                    .search
                    .keys
                    .iter()
                    .filter(|key| FieldName::try_new((*key).clone()).is_ok())
                    .cloned()
                    .collect(),
                ..self.search.clone()
            },
        }
    }
}

/// Search engine settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchSettings {
    /// Quiet period before a typed term is applied. Zero applies immediately.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    /// Record fields scanned by search, in match order.
    #[serde(default)]
    pub keys: Vec<String>,
    #[serde(default)]
    pub equality: EqualityKind,
}

impl SearchSettings {
    /// Converts the configured keys into validated field names.
    pub fn field_names(&self) -> Result<Vec<FieldName>, FieldNameError> {
        self.keys
            .iter()
            .map(|key| FieldName::try_new(key.clone()))
            .collect()
    }
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            keys: Vec::new(),
            equality: EqualityKind::default(),
        }
    }
}

fn default_debounce_ms() -> u64 {
    500
}

/// How a replacement source collection is compared with the current one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EqualityKind {
    /// Field-by-field comparison of the records.
    #[default]
    Structural,
    /// Digest of the serialized collection, cached between updates.
    Serialized,
}

impl fmt::Display for EqualityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EqualityKind::Structural => write!(f, "structural"),
            EqualityKind::Serialized => write!(f, "serialized"),
        }
    }
}

impl FromStr for EqualityKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "structural" => Ok(EqualityKind::Structural),
            "serialized" => Ok(EqualityKind::Serialized),
            other => Err(format!(
                "unknown equality {other:?}, expected \"structural\" or \"serialized\""
            )),
        }
    }
}

/// Errors that can occur when loading or saving config.
#[derive(Debug, Error)]
pub enum AppConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}
