//! # weavegen codegen
//!
//! Visitor and accept-weaver generation from interface type graphs.
//!
//! This crate provides:
//! - Hierarchy flattening with inherited property tagging
//! - Property type translation to TypeScript
//! - Reserved identifier and import path handling
//! - The generation pipeline and the built-in TypeScript templates

pub mod context;
pub mod error;
pub mod flatten;
pub mod generator;
pub mod imports;
pub mod render;
pub mod reserved;
pub mod translate;
pub mod typescript;

pub use context::{FlattenedTranslatedInterface, RenderContext, TranslatedAttribute, TranslatedUnion};
pub use error::CodegenError;
pub use flatten::{FlattenedInterface, OverrideProperty, flatten_all};
pub use generator::{Artifact, Generator, GeneratorOptions, write_artifacts};
pub use render::{Template, TemplateRenderer, TypeScriptRenderer};
pub use translate::{TranslatedType, translate};

/// Renders both artifacts for a type graph JSON document.
///
/// # Arguments
/// * `json` - Type graph document
/// * `options` - Project inputs
///
/// # Returns
/// The rendered visitor and accept-weaver.
///
/// # Errors
/// Returns `CodegenError` if parsing, validation, or rendering fails.
pub fn render_from_json(json: &str, options: GeneratorOptions) -> Result<Vec<Artifact>, CodegenError> {
    let graph = weavegen_graph::parse_graph(json)
        .map_err(|e| CodegenError::Graph(weavegen_graph::GraphError::Parse(e)))?;
    Generator::new(&graph, options).render()
}
