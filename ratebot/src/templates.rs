//! Reply templates keyed by outcome, loaded once at startup.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

const BUILTIN_MESSAGES: &str = include_str!("../messages.json");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TemplateKey {
    Intro,
    IncorrectFormat,
    IncorrectDate,
    IncorrectCurrency,
    EmptyAnswer,
    ServiceUnavailable,
}

impl TemplateKey {
    pub const ALL: [TemplateKey; 6] = [
        TemplateKey::Intro,
        TemplateKey::IncorrectFormat,
        TemplateKey::IncorrectDate,
        TemplateKey::IncorrectCurrency,
        TemplateKey::EmptyAnswer,
        TemplateKey::ServiceUnavailable,
    ];
}

#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("Failed to read templates from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid templates JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Template {0:?} is missing")]
    Missing(TemplateKey),
}

/// Complete set of templates; every [`TemplateKey`] is present.
#[derive(Debug, Clone)]
pub struct MessageTemplates {
    messages: HashMap<TemplateKey, String>,
}

impl MessageTemplates {
    /// Templates compiled into the binary.
    pub fn builtin() -> Result<Self, TemplateError> {
        Self::from_json(BUILTIN_MESSAGES)
    }

    /// Parses `{ "<Key>": "<text>", ... }`; unknown keys are rejected, missing keys too.
    pub fn from_json(json: &str) -> Result<Self, TemplateError> {
        let messages: HashMap<TemplateKey, String> = serde_json::from_str(json)?;
        if let Some(missing) = TemplateKey::ALL
            .into_iter()
            .find(|key| !messages.contains_key(key))
        {
            return Err(TemplateError::Missing(missing));
        }
        Ok(Self { messages })
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, TemplateError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| TemplateError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// File templates when a path is configured, built-in ones otherwise.
    pub fn load(path: Option<&str>) -> Result<Self, TemplateError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Self::builtin(),
        }
    }

    pub fn get(&self, key: TemplateKey) -> &str {
        self.messages.get(&key).map(String::as_str).unwrap_or_default()
    }
}
