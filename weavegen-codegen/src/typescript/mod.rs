//! TypeScript code generation modules.

pub mod accept_weaver;
pub mod visitor;

pub use accept_weaver::AcceptWeaverGenerator;
pub use visitor::VisitorGenerator;

/// Header placed at the top of every generated file.
pub(crate) const GENERATED_HEADER: &str = "\
/******************************************************************************
 * This file was generated by weavegen.
 * DO NOT EDIT MANUALLY!
 ******************************************************************************/

";
