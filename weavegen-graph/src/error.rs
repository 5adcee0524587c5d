//! Error types for type graph loading and validation.

use thiserror::Error;

/// Error type for type graph loading operations.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// The source did not contain an embedded grammar document.
    #[error("no embedded grammar found in '{source_name}'")]
    MissingEmbeddedGrammar {
        /// Name of the source that was scanned.
        source_name: String,
    },

    /// IO error.
    #[error("failed to read '{path}': {source}")]
    Io {
        /// Path that could not be read.
        path: String,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
}

/// Error type for type graph validation.
#[derive(Debug, Error)]
pub enum GraphError {
    /// Loading error.
    #[error("load error: {0}")]
    Parse(#[from] ParseError),

    /// The graph declares no entry type.
    #[error("no entry rule found in the grammar")]
    NoEntry,

    /// The entry type names no node of the graph.
    #[error("entry type '{name}' not found")]
    EntryNotFound {
        /// Entry type name.
        name: String,
    },

    /// The entry type is a union; visitors dispatch from interfaces only.
    #[error("entry type '{name}' is a union, expected an interface")]
    EntryNotInterface {
        /// Entry type name.
        name: String,
    },
}

impl ParseError {
    /// Creates an IO error for the given path.
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
