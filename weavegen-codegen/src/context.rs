//! Rendering context handed to the templates.
//!
//! Everything here derives `Serialize` so the context can be fed to any
//! template engine, not only the built-in TypeScript templates.

use serde::Serialize;

/// Attribute of a translated interface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslatedAttribute {
    /// Attribute name.
    pub name: String,
    /// Rendered TypeScript type.
    #[serde(rename = "type")]
    pub ty: String,
    /// True if the attribute links to another modeled entity.
    pub is_reference: bool,
    /// True if the attribute is inherited from an ancestor.
    pub is_override: bool,
}

/// Flattened interface with its attribute types rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlattenedTranslatedInterface {
    /// Interface name.
    pub name: String,
    /// The interface itself followed by the non-abstract types beneath it.
    pub types: Vec<String>,
    /// Inherited and own attributes.
    pub attributes: Vec<TranslatedAttribute>,
    /// True if the interface is a leaf.
    pub is_concrete: bool,
    /// Names of the types that may contain this interface.
    pub container_types: Vec<String>,
    /// Super type this interface was reached through, if any.
    pub direct_super_type: Option<String>,
    /// True if the container types come from `direct_super_type`.
    pub override_containers: bool,
}

impl FlattenedTranslatedInterface {
    /// Returns the own reference-carrying attributes.
    ///
    /// Inherited ones are declared on the super type.
    pub fn own_references(&self) -> impl Iterator<Item = &TranslatedAttribute> {
        self.attributes
            .iter()
            .filter(|a| a.is_reference && !a.is_override)
    }

    /// Returns true if any attribute, inherited or own, is reference-carrying.
    #[must_use]
    pub fn has_references(&self) -> bool {
        self.attributes.iter().any(|a| a.is_reference)
    }

    /// Returns the `$container` type this interface declares itself.
    ///
    /// `None` when there are no container types or when they are inherited.
    #[must_use]
    pub fn container_type(&self) -> Option<String> {
        if self.override_containers || self.container_types.is_empty() {
            None
        } else {
            Some(self.container_types.join(" | "))
        }
    }
}

/// Union alias with its rendered alternatives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranslatedUnion {
    /// Alias name.
    pub name: String,
    /// Rendered alternatives.
    pub types: String,
}

/// Context for one generation pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderContext {
    /// Language id, used for file names.
    pub project_id: String,
    /// Project name, used for generated identifiers.
    pub project_name: String,
    /// Translated interfaces in flattening order.
    pub interfaces: Vec<FlattenedTranslatedInterface>,
    /// Entry type of the grammar.
    pub root_type: String,
    /// Union aliases.
    pub unions: Vec<TranslatedUnion>,
    /// Import specifier of the generated AST module.
    pub resolved_import_ast: String,
    /// Import specifier of the language module, when configured.
    pub resolved_import_module: Option<String>,
    /// True if any interface has a reference-carrying attribute.
    pub has_any_reference: bool,
}

impl RenderContext {
    /// Returns a copy restricted to concrete interfaces.
    #[must_use]
    pub fn concrete_only(&self) -> Self {
        Self {
            interfaces: self
                .interfaces
                .iter()
                .filter(|i| i.is_concrete)
                .cloned()
                .collect(),
            ..self.clone()
        }
    }

    /// Returns the PascalCase identifier prefix for generated declarations.
    #[must_use]
    pub fn identifier_prefix(&self) -> String {
        to_pascal_case(&self.project_name)
    }
}

/// Converts a string to PascalCase.
#[must_use]
pub fn to_pascal_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut capitalize_next = true;

    for c in s.chars() {
        if c == '_' || c == '-' || c == ' ' {
            capitalize_next = true;
        } else if capitalize_next {
            result.push(c.to_ascii_uppercase());
            capitalize_next = false;
        } else {
            result.push(c);
        }
    }

    result
}
