//! Prelude module for convenient imports.
//!
//! ```ignore
//! use weavegen::prelude::*;
//! ```

// Type graph
pub use weavegen_graph::{
    InterfaceType, Property, PropertyType, TypeGraph, TypeNode, UnionType, load_graph,
    parse_graph,
};

// Generation
pub use weavegen_codegen::{
    Artifact, FlattenedInterface, FlattenedTranslatedInterface, Generator, GeneratorOptions,
    RenderContext, Template, TemplateRenderer, TypeScriptRenderer, flatten_all, translate,
};

// Runs
pub use crate::config::ProjectConfig;
pub use crate::error::GenerateError;
pub use crate::run::{Invocation, run};
