//! Run-level error taxonomy.

use crate::config::ConfigError;
use thiserror::Error;
use weavegen_codegen::CodegenError;
use weavegen_graph::{GraphError, ParseError};

/// Fatal error of a generation run.
///
/// Every variant aborts the run before any artifact is written.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The project config is missing or invalid.
    #[error("failed to get project configuration: {0}")]
    Config(#[from] ConfigError),

    /// The type graph could not be read or parsed.
    #[error("failed to load type graph: {0}")]
    GraphLoad(#[from] ParseError),

    /// The graph has no usable entry type.
    #[error("{0}")]
    MissingRootType(GraphError),

    /// Attribute names collide with reserved words.
    #[error("reserved identifiers used as attribute names: {}", names.join(", "))]
    ReservedIdentifiers {
        /// Every offending name, sorted.
        names: Vec<String>,
    },

    /// A template failed to render.
    #[error("{0}")]
    Render(CodegenError),

    /// Artifacts could not be written.
    #[error("{0}")]
    Io(CodegenError),
}

impl GenerateError {
    /// Process exit code for this error kind.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Io(_) => 1,
            Self::Config(_) => 2,
            Self::GraphLoad(_) => 3,
            Self::MissingRootType(_) => 4,
            Self::ReservedIdentifiers { .. } => 5,
            Self::Render(_) => 6,
        }
    }
}

impl From<CodegenError> for GenerateError {
    fn from(error: CodegenError) -> Self {
        match error {
            CodegenError::Graph(GraphError::Parse(e)) => Self::GraphLoad(e),
            CodegenError::Graph(e) => Self::MissingRootType(e),
            CodegenError::ReservedIdentifiers { names } => Self::ReservedIdentifiers { names },
            e @ CodegenError::Io { .. } => Self::Io(e),
            e @ (CodegenError::UnknownTemplate { .. } | CodegenError::Render { .. }) => {
                Self::Render(e)
            }
        }
    }
}
