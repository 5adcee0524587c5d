//! # weavegen graph
//!
//! Type graph model and loader.
//!
//! This crate provides:
//! - The interface/union type graph produced by a grammar compiler
//! - JSON loading, including documents embedded in generated modules
//! - Structural validation needed before emission

pub mod error;
pub mod parser;
pub mod types;
pub mod validation;

pub use error::{GraphError, ParseError};
pub use parser::{extract_embedded_json, load_graph, parse_graph, parse_source};
pub use types::{InterfaceType, Property, PropertyType, TypeGraph, TypeNode, UnionType};
pub use validation::{GraphReport, root_type, validate_graph};
