//! Error types for code generation.

use thiserror::Error;

/// Error type for code generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Type graph error, such as a missing root type.
    #[error("type graph error: {0}")]
    Graph(#[from] weavegen_graph::GraphError),

    /// Attribute names colliding with reserved words.
    #[error("reserved identifiers used as attribute names: {}", names.join(", "))]
    ReservedIdentifiers {
        /// Every offending name, sorted.
        names: Vec<String>,
    },

    /// Template not known to the renderer.
    #[error("unknown template '{name}'")]
    UnknownTemplate {
        /// Template name.
        name: String,
    },

    /// IO error while writing artifacts.
    #[error("failed to write '{path}': {source}")]
    Io {
        /// Path being written.
        path: String,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Rendering error.
    #[error("render error: {message}")]
    Render {
        /// Error message.
        message: String,
    },
}

impl CodegenError {
    /// Creates a render error with the given message.
    pub fn render(message: impl Into<String>) -> Self {
        Self::Render {
            message: message.into(),
        }
    }

    /// Creates an IO error for the given path.
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
