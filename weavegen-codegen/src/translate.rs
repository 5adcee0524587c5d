//! Property type translation.
//!
//! Maps abstract property types onto TypeScript type expressions and tracks
//! whether the type links to another modeled entity.

use crate::context::{FlattenedTranslatedInterface, TranslatedAttribute, TranslatedUnion};
use crate::flatten::FlattenedInterface;
use weavegen_graph::{PropertyType, UnionType};

/// Placeholder rendered for a property whose type is unknown.
pub const UNKNOWN_TYPE: &str = "unknown";

/// A rendered type expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslatedType {
    /// Target-language type expression.
    pub rendered: String,
    /// True if the type denotes a link to another modeled entity.
    pub is_reference: bool,
}

impl TranslatedType {
    fn plain(rendered: impl Into<String>) -> Self {
        Self {
            rendered: rendered.into(),
            is_reference: false,
        }
    }
}

/// Translates a property type.
///
/// A missing type is logged and rendered as [`UNKNOWN_TYPE`].
#[must_use]
pub fn translate(ty: Option<&PropertyType>) -> TranslatedType {
    let Some(ty) = ty else {
        tracing::error!("Unknown type");
        return TranslatedType::plain(UNKNOWN_TYPE);
    };

    match ty {
        PropertyType::Primitive { primitive } => TranslatedType::plain(primitive.as_str()),
        PropertyType::StringLiteral { value } => TranslatedType::plain(format!("'{}'", value)),
        PropertyType::Array { element } => {
            let element = translate(Some(element.as_ref()));
            TranslatedType {
                rendered: format!("Array<{}>", element.rendered),
                is_reference: element.is_reference,
            }
        }
        PropertyType::Reference { target } => {
            let target = translate(Some(target.as_ref()));
            TranslatedType {
                rendered: format!("Reference<{}>", target.rendered),
                is_reference: target.is_reference,
            }
        }
        PropertyType::Value { value } => TranslatedType {
            rendered: value.clone(),
            is_reference: true,
        },
        PropertyType::Union { types } => {
            let members: Vec<TranslatedType> = types.iter().map(|t| translate(Some(t))).collect();
            TranslatedType {
                rendered: members
                    .iter()
                    .map(|m| m.rendered.as_str())
                    .collect::<Vec<_>>()
                    .join(" | "),
                is_reference: members.iter().any(|m| m.is_reference),
            }
        }
    }
}

/// Translates a union alias into its rendered alternatives.
#[must_use]
pub fn translate_union(union: &UnionType) -> TranslatedUnion {
    TranslatedUnion {
        name: union.name.clone(),
        types: translate(Some(&union.ty)).rendered,
    }
}

/// Translates the properties and container types of a flattened interface.
#[must_use]
pub fn translate_interface(interface: &FlattenedInterface) -> FlattenedTranslatedInterface {
    let attributes = interface
        .properties
        .iter()
        .map(|p| {
            let translated = translate(p.property.ty.as_ref());
            TranslatedAttribute {
                name: p.property.name.clone(),
                ty: translated.rendered,
                is_reference: translated.is_reference,
                is_override: p.is_override,
            }
        })
        .collect();

    FlattenedTranslatedInterface {
        name: interface.name.clone(),
        types: interface.types.clone(),
        attributes,
        is_concrete: interface.is_concrete,
        container_types: interface.container_types.clone(),
        direct_super_type: interface.direct_super_type.clone(),
        override_containers: interface.override_containers,
    }
}
