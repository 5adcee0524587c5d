//! Hierarchy flattening.
//!
//! Walks the type graph depth-first and produces, per interface, the full list
//! of inherited and own properties together with the closure of type names
//! reachable beneath it. Each interface is flattened exactly once; when it is
//! reachable through several ancestors the first visit wins.

use std::collections::HashMap;
use weavegen_graph::{InterfaceType, Property, TypeGraph, TypeNode};

/// Property tagged with whether it was inherited from an ancestor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverrideProperty {
    /// The property declaration.
    pub property: Property,
    /// True if declared on a strict ancestor and not redeclared here.
    pub is_override: bool,
}

/// Interface with its inherited properties and type closure resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlattenedInterface {
    /// Interface name.
    pub name: String,
    /// The interface itself followed by the non-abstract types beneath it.
    pub types: Vec<String>,
    /// Inherited properties first, then own properties in declaration order.
    pub properties: Vec<OverrideProperty>,
    /// True if the interface has no sub types.
    pub is_concrete: bool,
    /// Types that may contain this interface.
    pub container_types: Vec<String>,
    /// Super type this interface was reached through, if any.
    pub direct_super_type: Option<String>,
    /// True if `container_types` was inherited from `direct_super_type`.
    pub override_containers: bool,
}

impl FlattenedInterface {
    /// Returns the properties declared on this interface.
    pub fn own_properties(&self) -> impl Iterator<Item = &Property> {
        self.properties
            .iter()
            .filter(|p| !p.is_override)
            .map(|p| &p.property)
    }

    /// Returns the properties inherited from ancestors.
    pub fn inherited_properties(&self) -> impl Iterator<Item = &Property> {
        self.properties
            .iter()
            .filter(|p| p.is_override)
            .map(|p| &p.property)
    }
}

/// Flattens every interface of the graph.
///
/// Walks start from interfaces without super types, in declaration order, and
/// then from any interface not yet reached. The result is in visit order.
#[must_use]
pub fn flatten_all(graph: &TypeGraph) -> Vec<FlattenedInterface> {
    let mut flattener = Flattener::new(graph);

    for interface in graph.interfaces().filter(|i| i.super_types.is_empty()) {
        flattener.flatten_type(&interface.name, &[], None);
    }
    for interface in graph.interfaces() {
        flattener.flatten_type(&interface.name, &[], None);
    }

    flattener.flattened
}

/// Memoized recursive walk over one graph.
struct Flattener<'a> {
    graph: &'a TypeGraph,
    memo: HashMap<String, usize>,
    flattened: Vec<FlattenedInterface>,
}

impl<'a> Flattener<'a> {
    fn new(graph: &'a TypeGraph) -> Self {
        Self {
            graph,
            memo: HashMap::new(),
            flattened: Vec::new(),
        }
    }

    /// Flattens one node and returns the type names it contributes to its
    /// parent's closure.
    fn flatten_type(
        &mut self,
        name: &str,
        inherited: &[Property],
        parent: Option<&str>,
    ) -> Vec<String> {
        let graph = self.graph;
        let interface = match graph.get(name) {
            Some(TypeNode::Interface(interface)) => interface,
            Some(TypeNode::Union(_)) => {
                tracing::error!("Unsupported union type: {}", name);
                return Vec::new();
            }
            None => {
                tracing::error!("Unknown type: {}", name);
                return Vec::new();
            }
        };

        if let Some(&idx) = self.memo.get(name) {
            self.check_diamond(idx, inherited, parent);
            return contribution(interface, &self.flattened[idx].types);
        }

        let properties = merge_properties(inherited, &interface.properties);
        let direct_super_type = parent
            .map(str::to_string)
            .or_else(|| interface.super_types.first().cloned());
        let (container_types, override_containers) =
            self.container_types(interface, direct_super_type.as_deref());

        let idx = self.flattened.len();
        self.flattened.push(FlattenedInterface {
            name: interface.name.clone(),
            types: vec![interface.name.clone()],
            properties,
            is_concrete: interface.is_leaf(),
            container_types,
            direct_super_type,
            override_containers,
        });
        self.memo.insert(interface.name.clone(), idx);

        let passed_down: Vec<Property> = self.flattened[idx]
            .properties
            .iter()
            .map(|p| p.property.clone())
            .collect();

        let mut types = vec![interface.name.clone()];
        for sub_type in &interface.sub_types {
            for name in self.flatten_type(sub_type, &passed_down, Some(&interface.name)) {
                if !types.contains(&name) {
                    types.push(name);
                }
            }
        }
        self.flattened[idx].types = types;

        contribution(interface, &self.flattened[idx].types)
    }

    fn container_types(
        &self,
        interface: &InterfaceType,
        direct_super_type: Option<&str>,
    ) -> (Vec<String>, bool) {
        if !interface.container_types.is_empty() {
            return (interface.container_types.clone(), false);
        }
        let Some(super_type) = direct_super_type else {
            return (Vec::new(), false);
        };
        let inherited = self
            .memo
            .get(super_type)
            .map(|&idx| self.flattened[idx].container_types.clone())
            .unwrap_or_default();
        (inherited, true)
    }

    fn check_diamond(&self, idx: usize, inherited: &[Property], parent: Option<&str>) {
        let Some(parent) = parent else {
            return;
        };
        let existing = &self.flattened[idx];
        let own: Vec<&str> = existing.own_properties().map(|p| p.name.as_str()).collect();
        let arriving = inherited
            .iter()
            .filter(|p| !own.contains(&p.name.as_str()));
        if !existing.inherited_properties().eq(arriving) {
            tracing::warn!(
                "Type '{}' is reachable from '{}' with different inherited properties, keeping the ones from '{}'",
                existing.name,
                parent,
                existing.direct_super_type.as_deref().unwrap_or("<none>")
            );
        }
    }
}

/// Inherited properties not redeclared on the node, then its own.
fn merge_properties(inherited: &[Property], own: &[Property]) -> Vec<OverrideProperty> {
    inherited
        .iter()
        .filter(|p| !own.iter().any(|o| o.name == p.name))
        .map(|p| OverrideProperty {
            property: p.clone(),
            is_override: true,
        })
        .chain(own.iter().map(|p| OverrideProperty {
            property: p.clone(),
            is_override: false,
        }))
        .collect()
}

/// Abstract interfaces are enumerated only through their descendants.
fn contribution(interface: &InterfaceType, types: &[String]) -> Vec<String> {
    if interface.is_abstract {
        types.iter().skip(1).cloned().collect()
    } else {
        types.to_vec()
    }
}
