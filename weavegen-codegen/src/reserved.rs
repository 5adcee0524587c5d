//! Reserved identifier checks for the TypeScript target.

use crate::context::FlattenedTranslatedInterface;
use crate::error::CodegenError;
use std::collections::BTreeSet;

/// Words that cannot be used as attribute names in the generated code.
pub const RESERVED_WORDS: &[&str] = &[
    "break",
    "case",
    "catch",
    "class",
    "const",
    "continue",
    "debugger",
    "default",
    "delete",
    "do",
    "else",
    "enum",
    "export",
    "extends",
    "false",
    "finally",
    "for",
    "function",
    "if",
    "implements",
    "import",
    "in",
    "instanceof",
    "interface",
    "let",
    "new",
    "null",
    "package",
    "private",
    "protected",
    "public",
    "return",
    "static",
    "super",
    "switch",
    "this",
    "throw",
    "true",
    "try",
    "typeof",
    "var",
    "void",
    "while",
    "with",
    "yield",
    // Member added to every woven node.
    "accept",
];

/// Returns true if the identifier is reserved.
#[must_use]
pub fn is_reserved(name: &str) -> bool {
    RESERVED_WORDS.contains(&name)
}

/// Collects every reserved attribute name, sorted and de-duplicated.
#[must_use]
pub fn reserved_attributes(interfaces: &[FlattenedTranslatedInterface]) -> Vec<String> {
    interfaces
        .iter()
        .flat_map(|i| &i.attributes)
        .filter(|a| is_reserved(&a.name))
        .map(|a| a.name.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Checks that no attribute name collides with a reserved word.
///
/// # Errors
/// Returns `CodegenError::ReservedIdentifiers` listing every offending name.
pub fn check_identifiers(interfaces: &[FlattenedTranslatedInterface]) -> Result<(), CodegenError> {
    let names = reserved_attributes(interfaces);
    if names.is_empty() {
        Ok(())
    } else {
        Err(CodegenError::ReservedIdentifiers { names })
    }
}
