//! Type graph loader.
//!
//! The upstream grammar compiler emits the type graph as a JSON document:
//!
//! ```json
//! {
//!   "entry": "Model",
//!   "interfaces": [
//!     { "name": "Model", "properties": [
//!         { "name": "persons", "type": { "kind": "array", "element": { "kind": "value", "value": "Person" } } }
//!     ] },
//!     { "name": "Person", "containerTypes": ["Model"], "properties": [
//!         { "name": "name", "type": { "kind": "primitive", "primitive": "string" } }
//!     ] }
//!   ],
//!   "unions": []
//! }
//! ```
//!
//! The document is either stored as-is or embedded in a generated module as
//! the first template literal (between backticks), with backslashes doubled.

use crate::error::ParseError;
use crate::types::{InterfaceType, TypeGraph, UnionType};
use serde::Deserialize;
use std::path::Path;

/// Raw document shape, converted into a [`TypeGraph`] after deserialization.
#[derive(Debug, Deserialize)]
struct GraphDocument {
    #[serde(default)]
    entry: Option<String>,
    #[serde(default)]
    interfaces: Vec<InterfaceType>,
    #[serde(default)]
    unions: Vec<UnionType>,
}

/// Parses a type graph from a JSON string.
///
/// # Errors
/// Returns `ParseError` if the JSON is malformed or does not match the graph shape.
pub fn parse_graph(json: &str) -> Result<TypeGraph, ParseError> {
    let document: GraphDocument = serde_json::from_str(json)?;

    let mut graph = TypeGraph::new();
    graph.entry = document.entry;
    for interface in document.interfaces {
        graph.add_interface(interface);
    }
    for union in document.unions {
        graph.add_union(union);
    }

    tracing::debug!(
        "Parsed type graph with {} nodes, entry {:?}",
        graph.nodes().len(),
        graph.entry
    );
    Ok(graph)
}

/// Extracts the JSON document embedded in a generated grammar module.
///
/// # Errors
/// Returns `ParseError::MissingEmbeddedGrammar` if the source has no template literal.
pub fn extract_embedded_json(source: &str, source_name: &str) -> Result<String, ParseError> {
    let mut parts = source.split('`');
    parts.next();
    parts
        .next()
        .map(|embedded| embedded.replace("\\\\", "\\"))
        .ok_or_else(|| ParseError::MissingEmbeddedGrammar {
            source_name: source_name.to_string(),
        })
}

/// Parses a type graph from source text, detecting the embedded form.
///
/// Text starting with `{` is parsed as JSON directly; anything else is
/// treated as a generated module.
///
/// # Errors
/// Returns `ParseError` if no document can be found or parsed.
pub fn parse_source(source: &str, source_name: &str) -> Result<TypeGraph, ParseError> {
    if source.trim_start().starts_with('{') {
        parse_graph(source)
    } else {
        parse_graph(&extract_embedded_json(source, source_name)?)
    }
}

/// Loads a type graph from a file.
///
/// # Errors
/// Returns `ParseError` if the file cannot be read or parsed.
pub async fn load_graph(path: &Path) -> Result<TypeGraph, ParseError> {
    let name = path.display().to_string();
    let source = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| ParseError::io(name.clone(), e))?;
    parse_source(&source, &name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PropertyType, TypeNode};

    const HELLO_WORLD: &str = r#"{
        "entry": "Model",
        "interfaces": [
            { "name": "Model", "properties": [
                { "name": "persons", "type": { "kind": "array", "element": { "kind": "value", "value": "Person" } } },
                { "name": "greetings", "type": { "kind": "array", "element": { "kind": "value", "value": "Greeting" } } }
            ] },
            { "name": "Greeting", "containerTypes": ["Model"], "properties": [
                { "name": "person", "type": { "kind": "reference", "target": { "kind": "value", "value": "Person" } } }
            ] },
            { "name": "Person", "containerTypes": ["Model"], "properties": [
                { "name": "name", "type": { "kind": "primitive", "primitive": "string" } }
            ] }
        ]
    }"#;

    #[test]
    fn test_parse_graph() {
        let graph = parse_graph(HELLO_WORLD).expect("Failed to parse");

        assert_eq!(graph.entry.as_deref(), Some("Model"));
        assert_eq!(graph.interfaces().count(), 3);

        let greeting = graph.interface("Greeting").expect("Greeting missing");
        assert_eq!(greeting.container_types, vec!["Model".to_string()]);
        assert_eq!(
            greeting.properties[0].ty,
            Some(PropertyType::reference(PropertyType::value("Person")))
        );
    }

    #[test]
    fn test_parse_unions_and_abstract() {
        let json = r#"{
            "interfaces": [
                { "name": "Expression", "abstract": true, "subTypes": ["Literal"] },
                { "name": "Literal", "superTypes": ["Expression"] }
            ],
            "unions": [
                { "name": "Operator", "type": { "kind": "union", "types": [
                    { "kind": "string", "value": "+" },
                    { "kind": "string", "value": "-" }
                ] } }
            ]
        }"#;

        let graph = parse_graph(json).expect("Failed to parse");
        assert!(graph.entry.is_none());
        assert!(graph.interface("Expression").expect("missing").is_abstract);
        assert!(matches!(graph.get("Operator"), Some(TypeNode::Union(_))));
    }

    #[test]
    fn test_untyped_property() {
        let json = r#"{ "interfaces": [ { "name": "A", "properties": [ { "name": "x" } ] } ] }"#;
        let graph = parse_graph(json).expect("Failed to parse");
        assert!(graph.interface("A").expect("missing").properties[0].ty.is_none());
    }

    #[test]
    fn test_parse_malformed() {
        assert!(matches!(parse_graph("{ not json"), Err(ParseError::Json(_))));
    }

    #[test]
    fn test_extract_embedded_json() {
        let module = "export const grammar = () => loadGrammar(`{\"entry\":\"A\\\\b\"}`);\n";
        let json = extract_embedded_json(module, "grammar.ts").expect("Failed to extract");
        assert_eq!(json, "{\"entry\":\"A\\b\"}");
    }

    #[test]
    fn test_extract_without_literal() {
        let result = extract_embedded_json("export const x = 1;", "grammar.ts");
        assert!(matches!(
            result,
            Err(ParseError::MissingEmbeddedGrammar { .. })
        ));
    }

    #[test]
    fn test_parse_source_embedded() {
        let module = format!("export const grammar = `{}`;", HELLO_WORLD);
        let graph = parse_source(&module, "grammar.ts").expect("Failed to parse");
        assert_eq!(graph.root_type(), Some("Model"));
    }

    #[tokio::test]
    async fn test_load_graph_file() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("grammar.json");
        std::fs::write(&path, HELLO_WORLD).expect("Failed to write");

        let graph = load_graph(&path).await.expect("Failed to load");
        assert_eq!(graph.interfaces().count(), 3);
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let result = load_graph(Path::new("/nonexistent/grammar.ts")).await;
        assert!(matches!(result, Err(ParseError::Io { .. })));
    }
}
