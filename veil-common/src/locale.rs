//! Locale strings for overlay components
//!
//! Labels that components show when the caller doesn't supply their own.
//! A locale can be loaded from YAML; keys left out keep the English default.
//!
//! ```yaml
//! accept: Ja
//! reject: Nein
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::info;

/// Locale loading errors
#[derive(Error, Debug)]
pub enum LocaleError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("Locale key '{0}' is empty")]
    MissingKey(String),
}

/// Label table used by overlay components
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Locale {
    pub accept: String,
    pub reject: String,
    /// Accessible label of the dialog close button
    pub close: String,
}

impl Default for Locale {
    fn default() -> Self {
        Self {
            accept: "Yes".to_string(),
            reject: "No".to_string(),
            close: "Close".to_string(),
        }
    }
}

impl Locale {
    pub fn from_yaml_str(source: &str) -> Result<Self, LocaleError> {
        let locale: Locale = serde_yaml::from_str(source)?;
        locale.validate()?;
        Ok(locale)
    }

    pub fn load(path: &Path) -> Result<Self, LocaleError> {
        let source = std::fs::read_to_string(path)?;
        let locale = Self::from_yaml_str(&source)?;
        info!("Loaded locale from {}", path.display());
        Ok(locale)
    }

    fn validate(&self) -> Result<(), LocaleError> {
        for (key, value) in [("accept", &self.accept), ("reject", &self.reject)] {
            if value.trim().is_empty() {
                return Err(LocaleError::MissingKey(key.to_string()));
            }
        }
        Ok(())
    }

    pub fn lookup(&self, key: &str) -> Option<&str> {
        match key {
            "accept" => Some(&self.accept),
            "reject" => Some(&self.reject),
            "close" => Some(&self.close),
            _ => None,
        }
    }

    /// Like [`Locale::lookup`], but an unknown key is returned as-is.
    pub fn label(&self, key: &str) -> String {
        self.lookup(key).unwrap_or(key).to_string()
    }
}
