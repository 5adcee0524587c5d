//! Type graph validation utilities.
//!
//! Only the structure needed for emission is checked. A missing entry type is
//! fatal; duplicate names and dangling edges are reported as warnings since
//! the flattener degrades locally on them.

use crate::error::GraphError;
use crate::types::{TypeGraph, TypeNode};
use std::collections::HashSet;

/// Non-fatal findings collected during validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GraphReport {
    /// Names declared more than once.
    pub duplicates: Vec<String>,
    /// Edges (`from -> to`) whose target is not declared.
    pub dangling_edges: Vec<(String, String)>,
}

impl GraphReport {
    /// Returns true if nothing was found.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.duplicates.is_empty() && self.dangling_edges.is_empty()
    }
}

/// Returns the root type of the graph.
///
/// # Errors
/// Returns `GraphError::NoEntry` if no entry is declared,
/// `GraphError::EntryNotFound` if the entry names no node, or
/// `GraphError::EntryNotInterface` if it names a union.
pub fn root_type(graph: &TypeGraph) -> Result<&str, GraphError> {
    let entry = graph.entry.as_deref().ok_or(GraphError::NoEntry)?;
    if let Some(root) = graph.root_type() {
        return Ok(root);
    }
    let name = entry.to_string();
    if graph.contains(entry) {
        Err(GraphError::EntryNotInterface { name })
    } else {
        Err(GraphError::EntryNotFound { name })
    }
}

/// Validates a type graph for emission.
///
/// # Returns
/// The non-fatal findings, each of which is also logged.
///
/// # Errors
/// Returns `GraphError` if the root type is missing.
pub fn validate_graph(graph: &TypeGraph) -> Result<GraphReport, GraphError> {
    root_type(graph)?;

    let report = GraphReport {
        duplicates: find_duplicates(graph),
        dangling_edges: find_dangling_edges(graph),
    };

    for name in &report.duplicates {
        tracing::warn!("Type '{}' is declared more than once, last one wins", name);
    }
    for (from, to) in &report.dangling_edges {
        tracing::warn!("Type '{}' refers to undeclared type '{}'", from, to);
    }

    Ok(report)
}

fn find_duplicates(graph: &TypeGraph) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut duplicates = Vec::new();

    for node in graph.nodes() {
        if !seen.insert(node.name()) && !duplicates.iter().any(|d| d == node.name()) {
            duplicates.push(node.name().to_string());
        }
    }

    duplicates
}

fn find_dangling_edges(graph: &TypeGraph) -> Vec<(String, String)> {
    let mut dangling = Vec::new();

    for node in graph.nodes() {
        let TypeNode::Interface(interface) = node else {
            continue;
        };
        let edges = interface
            .super_types
            .iter()
            .chain(&interface.sub_types)
            .chain(&interface.container_types);
        for target in edges {
            if !graph.contains(target) {
                dangling.push((interface.name.clone(), target.clone()));
            }
        }
    }

    dangling
}
