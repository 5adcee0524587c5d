//! Type graph definitions.
//!
//! This module contains the data structures produced by the upstream grammar
//! compiler: interface types, union types, and the property types they carry.
//! Edges between nodes (super types, sub types, container types) are stored by
//! name and resolved through the [`TypeGraph`] arena.

use serde::Deserialize;
use std::collections::HashMap;

/// Complete type graph for one grammar.
#[derive(Debug, Clone, Default)]
pub struct TypeGraph {
    /// Name of the entry (root) type, if the grammar declares one.
    pub entry: Option<String>,
    /// Interface and union nodes in declaration order.
    nodes: Vec<TypeNode>,
    /// Name lookup map into `nodes`.
    index: HashMap<String, usize>,
}

impl TypeGraph {
    /// Creates a new empty type graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the entry type name.
    #[must_use]
    pub fn with_entry(mut self, entry: impl Into<String>) -> Self {
        self.entry = Some(entry.into());
        self
    }

    /// Adds a node to the graph.
    ///
    /// A node whose name is already present shadows the earlier one in lookups;
    /// both stay in [`TypeGraph::nodes`] so validation can report the clash.
    pub fn add_node(&mut self, node: TypeNode) {
        let name = node.name().to_string();
        let index = self.nodes.len();
        self.nodes.push(node);
        self.index.insert(name, index);
    }

    /// Adds an interface node.
    pub fn add_interface(&mut self, interface: InterfaceType) {
        self.add_node(TypeNode::Interface(interface));
    }

    /// Adds a union node.
    pub fn add_union(&mut self, union: UnionType) {
        self.add_node(TypeNode::Union(union));
    }

    /// Looks up a node by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&TypeNode> {
        self.index.get(name).map(|&idx| &self.nodes[idx])
    }

    /// Looks up an interface by name.
    #[must_use]
    pub fn interface(&self, name: &str) -> Option<&InterfaceType> {
        self.get(name).and_then(TypeNode::as_interface)
    }

    /// Returns true if a node with the given name exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Returns all nodes in declaration order.
    #[must_use]
    pub fn nodes(&self) -> &[TypeNode] {
        &self.nodes
    }

    /// Iterates over interface nodes in declaration order.
    pub fn interfaces(&self) -> impl Iterator<Item = &InterfaceType> {
        self.nodes.iter().filter_map(TypeNode::as_interface)
    }

    /// Iterates over union nodes in declaration order.
    pub fn unions(&self) -> impl Iterator<Item = &UnionType> {
        self.nodes.iter().filter_map(TypeNode::as_union)
    }

    /// Returns the entry type name when it names an interface of this graph.
    #[must_use]
    pub fn root_type(&self) -> Option<&str> {
        self.entry
            .as_deref()
            .filter(|name| self.interface(name).is_some())
    }
}

/// A node of the type graph.
#[derive(Debug, Clone)]
pub enum TypeNode {
    /// Interface with properties and an inheritance position.
    Interface(InterfaceType),
    /// Named alias over other types.
    Union(UnionType),
}

impl TypeNode {
    /// Returns the name of the node.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Interface(i) => &i.name,
            Self::Union(u) => &u.name,
        }
    }

    /// Returns the interface if this node is interface-shaped.
    #[must_use]
    pub const fn as_interface(&self) -> Option<&InterfaceType> {
        match self {
            Self::Interface(i) => Some(i),
            Self::Union(_) => None,
        }
    }

    /// Returns the union if this node is a union alias.
    #[must_use]
    pub const fn as_union(&self) -> Option<&UnionType> {
        match self {
            Self::Union(u) => Some(u),
            Self::Interface(_) => None,
        }
    }
}

/// Interface type declaration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterfaceType {
    /// Type name.
    pub name: String,
    /// Properties declared on this interface (not inherited ones).
    #[serde(default)]
    pub properties: Vec<Property>,
    /// Names of the direct super types.
    #[serde(default)]
    pub super_types: Vec<String>,
    /// Names of the direct sub types.
    #[serde(default)]
    pub sub_types: Vec<String>,
    /// Names of the types that may contain instances of this one.
    #[serde(default)]
    pub container_types: Vec<String>,
    /// Whether the interface is abstract.
    #[serde(default, rename = "abstract")]
    pub is_abstract: bool,
}

impl InterfaceType {
    /// Creates a new interface with no properties or edges.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Adds a property.
    #[must_use]
    pub fn property(mut self, name: impl Into<String>, ty: PropertyType) -> Self {
        self.properties.push(Property::new(name, ty));
        self
    }

    /// Adds a direct super type.
    #[must_use]
    pub fn super_type(mut self, name: impl Into<String>) -> Self {
        self.super_types.push(name.into());
        self
    }

    /// Adds a direct sub type.
    #[must_use]
    pub fn sub_type(mut self, name: impl Into<String>) -> Self {
        self.sub_types.push(name.into());
        self
    }

    /// Adds a container type.
    #[must_use]
    pub fn container(mut self, name: impl Into<String>) -> Self {
        self.container_types.push(name.into());
        self
    }

    /// Marks the interface abstract.
    #[must_use]
    pub const fn abstract_type(mut self) -> Self {
        self.is_abstract = true;
        self
    }

    /// Returns true if the interface has no sub types.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.sub_types.is_empty()
    }
}

/// Union type declaration.
#[derive(Debug, Clone, Deserialize)]
pub struct UnionType {
    /// Alias name.
    pub name: String,
    /// Aliased type, usually a [`PropertyType::Union`].
    #[serde(rename = "type")]
    pub ty: PropertyType,
}

impl UnionType {
    /// Creates a new union alias.
    #[must_use]
    pub fn new(name: impl Into<String>, ty: PropertyType) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

/// Property declared on an interface.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Property {
    /// Property name.
    pub name: String,
    /// Property type; `None` when the upstream compiler could not infer one.
    #[serde(rename = "type", default)]
    pub ty: Option<PropertyType>,
}

impl Property {
    /// Creates a property with a known type.
    #[must_use]
    pub fn new(name: impl Into<String>, ty: PropertyType) -> Self {
        Self {
            name: name.into(),
            ty: Some(ty),
        }
    }

    /// Creates a property whose type is unknown.
    #[must_use]
    pub fn untyped(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: None,
        }
    }
}

/// Abstract property type.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum PropertyType {
    /// Built-in primitive such as `string` or `number`.
    Primitive {
        /// Primitive name.
        primitive: String,
    },
    /// String literal type.
    #[serde(rename = "string")]
    StringLiteral {
        /// Literal value.
        value: String,
    },
    /// Array of an element type.
    Array {
        /// Element type.
        element: Box<PropertyType>,
    },
    /// Cross-reference to another type.
    Reference {
        /// Referenced type.
        target: Box<PropertyType>,
    },
    /// Value of another modeled type.
    Value {
        /// Name of the referenced type.
        value: String,
    },
    /// Ordered union of member types.
    Union {
        /// Member types.
        types: Vec<PropertyType>,
    },
}

impl PropertyType {
    /// Creates a primitive type.
    #[must_use]
    pub fn primitive(name: impl Into<String>) -> Self {
        Self::Primitive {
            primitive: name.into(),
        }
    }

    /// Creates a string literal type.
    #[must_use]
    pub fn literal(value: impl Into<String>) -> Self {
        Self::StringLiteral {
            value: value.into(),
        }
    }

    /// Creates an array type.
    #[must_use]
    pub fn array(element: Self) -> Self {
        Self::Array {
            element: Box::new(element),
        }
    }

    /// Creates a reference type.
    #[must_use]
    pub fn reference(target: Self) -> Self {
        Self::Reference {
            target: Box::new(target),
        }
    }

    /// Creates a value type pointing at a modeled type.
    #[must_use]
    pub fn value(name: impl Into<String>) -> Self {
        Self::Value { value: name.into() }
    }

    /// Creates a union type.
    #[must_use]
    pub fn union(types: Vec<Self>) -> Self {
        Self::Union { types }
    }
}
