//! Project configuration.
//!
//! Reads the project name, language id and generated-sources directory from a
//! `langium-config.json` file.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Directory of the generated grammar and AST when the config names none.
pub const DEFAULT_GENERATED_DIR: &str = "src/language/generated";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config '{path}': {source}")]
    Io {
        /// Config path.
        path: String,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid JSON or misses required fields.
    #[error("invalid config: {0}")]
    Json(#[from] serde_json::Error),

    /// The config declares no language.
    #[error("config declares no language")]
    NoLanguage,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigDocument {
    project_name: String,
    languages: Vec<LanguageEntry>,
    #[serde(default)]
    out: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
struct LanguageEntry {
    id: String,
}

/// Project metadata needed by a generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectConfig {
    /// Project name, used for generated identifiers.
    pub project_name: String,
    /// Id of the first language, used for file names.
    pub id: String,
    /// Directory holding the generated grammar and AST modules.
    pub generated_dir: PathBuf,
}

impl ProjectConfig {
    /// Parses a config from JSON.
    ///
    /// # Errors
    /// Returns `ConfigError` if the JSON is invalid or declares no language.
    pub fn parse(json: &str) -> Result<Self, ConfigError> {
        let document: ConfigDocument = serde_json::from_str(json)?;
        let language = document
            .languages
            .into_iter()
            .next()
            .ok_or(ConfigError::NoLanguage)?;

        Ok(Self {
            project_name: document.project_name,
            id: language.id,
            generated_dir: document
                .out
                .unwrap_or_else(|| PathBuf::from(DEFAULT_GENERATED_DIR)),
        })
    }

    /// Loads a config file.
    ///
    /// # Errors
    /// Returns `ConfigError` if the file cannot be read or parsed.
    pub async fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| ConfigError::Io {
                path: path.display().to_string(),
                source,
            })?;
        Self::parse(&json)
    }

    /// Default path of the generated grammar module.
    #[must_use]
    pub fn grammar_path(&self) -> PathBuf {
        self.generated_dir.join("grammar.ts")
    }

    /// Default path of the generated AST module.
    #[must_use]
    pub fn ast_path(&self) -> PathBuf {
        self.generated_dir.join("ast.ts")
    }
}
