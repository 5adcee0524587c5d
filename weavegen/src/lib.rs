//! # weavegen
//!
//! Visitor and accept-weaver generation for Langium-style type hierarchies.
//!
//! weavegen reads the interface/union type graph of a grammar, flattens its
//! inheritance, and emits two TypeScript modules: a visitor with a hook for
//! every type, and an accept-weaver attaching `accept` to concrete nodes.
//!
//! ## Quick Start
//!
//! ```ignore
//! use weavegen::prelude::*;
//!
//! let invocation = Invocation {
//!     config: "langium-config.json".into(),
//!     ..Invocation::default()
//! };
//! let written = weavegen::run(&invocation).await?;
//! ```
//!
//! ## Crate Organization
//!
//! - [`graph`] - Type graph model, loading and validation
//! - [`codegen`] - Flattening, translation and artifact generation
//! - [`config`] - Project configuration
//! - [`mod@run`] - The end-to-end pipeline

pub mod config;
pub mod error;
pub mod prelude;
pub mod run;

/// Type graph model, loading and validation.
pub mod graph {
    pub use weavegen_graph::*;
}

/// Flattening, translation and artifact generation.
pub mod codegen {
    pub use weavegen_codegen::*;
}

pub use config::{ConfigError, ProjectConfig};
pub use error::GenerateError;
pub use run::{Invocation, run};

pub use weavegen_codegen::{Generator, GeneratorOptions, RenderContext, Template, TemplateRenderer};
pub use weavegen_graph::{InterfaceType, Property, PropertyType, TypeGraph, UnionType};
