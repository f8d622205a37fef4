// Mon Oct 19 2026 - Alex

use crate::error::{ConvertError, Result};
use crate::types::ScalarType;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Extra raw type spellings, consulted after the built-in tables and
    /// before the engine special cases.
    pub aliases: IndexMap<String, ScalarType>,
    /// Refuse to produce output when classes had to be dropped.
    pub strict: bool,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| ConvertError::io(path, e))?;
        Self::from_json(&content)
    }

    pub fn with_alias(mut self, raw: &str, ty: ScalarType) -> Self {
        self.aliases.insert(raw.to_string(), ty);
        self
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn validate(&self) -> Result<()> {
        for raw in self.aliases.keys() {
            if raw.is_empty() {
                return Err(ConvertError::InvalidConfig("alias names must not be empty".to_string()));
            }
            if raw.chars().any(char::is_whitespace) {
                return Err(ConvertError::InvalidConfig(format!("alias '{}' contains whitespace", raw)));
            }
        }
        Ok(())
    }
}
