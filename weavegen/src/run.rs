//! End-to-end generation run: config, type graph, artifacts.

use crate::config::ProjectConfig;
use crate::error::GenerateError;
use std::path::{Path, PathBuf};
use weavegen_codegen::{Generator, GeneratorOptions};

/// Default config file name.
pub const DEFAULT_CONFIG: &str = "langium-config.json";

/// Default output directory, relative to the config file.
pub const DEFAULT_OUTPUT_DIR: &str = "src/semantics";

/// Inputs of one run. Unset paths default relative to the config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Output directory.
    pub out: Option<PathBuf>,
    /// Type graph source (JSON or generated grammar module).
    pub grammar: Option<PathBuf>,
    /// Generated AST module.
    pub ast: Option<PathBuf>,
    /// Language module exporting the services type.
    pub module: Option<PathBuf>,
    /// Project config file.
    pub config: PathBuf,
}

impl Default for Invocation {
    fn default() -> Self {
        Self {
            out: None,
            grammar: None,
            ast: None,
            module: None,
            config: PathBuf::from(DEFAULT_CONFIG),
        }
    }
}

impl Invocation {
    fn base_dir(&self) -> &Path {
        self.config.parent().unwrap_or_else(|| Path::new(""))
    }

    /// Resolves the type graph source path.
    #[must_use]
    pub fn grammar_path(&self, config: &ProjectConfig) -> PathBuf {
        self.grammar
            .clone()
            .unwrap_or_else(|| self.base_dir().join(config.grammar_path()))
    }

    /// Resolves the generator options.
    #[must_use]
    pub fn options(&self, config: &ProjectConfig) -> GeneratorOptions {
        let base = self.base_dir();
        let mut options = GeneratorOptions::new(&config.id, &config.project_name)
            .output_dir(
                self.out
                    .clone()
                    .unwrap_or_else(|| base.join(DEFAULT_OUTPUT_DIR)),
            )
            .ast_path(
                self.ast
                    .clone()
                    .unwrap_or_else(|| base.join(config.ast_path())),
            );
        if let Some(module) = &self.module {
            options = options.module_path(module);
        }
        options
    }
}

/// Runs the whole pipeline.
///
/// # Returns
/// The paths of the two written artifacts.
///
/// # Errors
/// Returns `GenerateError` on any fatal condition; no file is written then.
pub async fn run(invocation: &Invocation) -> Result<Vec<PathBuf>, GenerateError> {
    let config = ProjectConfig::load(&invocation.config).await?;
    tracing::debug!(
        "Project '{}' (id '{}') from {}",
        config.project_name,
        config.id,
        invocation.config.display()
    );

    let grammar = invocation.grammar_path(&config);
    let graph = weavegen_graph::load_graph(&grammar).await?;

    let options = invocation.options(&config);
    let paths = Generator::new(&graph, options).generate()?;
    Ok(paths)
}
