//! Template rendering seam.
//!
//! The pipeline only needs `render(template, context) -> text`. The built-in
//! [`TypeScriptRenderer`] writes Langium-flavoured TypeScript; any other
//! engine can be plugged in by implementing [`TemplateRenderer`].

use crate::context::RenderContext;
use crate::error::CodegenError;
use crate::typescript::{AcceptWeaverGenerator, VisitorGenerator};
use std::fmt;
use std::str::FromStr;

/// The artifacts produced by one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Template {
    /// Dispatch surface over every interface.
    Visitor,
    /// Accept hooks for concrete interfaces.
    AcceptWeaver,
}

impl Template {
    /// All templates, in rendering order.
    pub const ALL: [Self; 2] = [Self::Visitor, Self::AcceptWeaver];

    /// Returns the template name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Visitor => "visitor",
            Self::AcceptWeaver => "accept-weaver",
        }
    }

    /// Returns the output file name for the given project id.
    #[must_use]
    pub fn file_name(&self, project_id: &str) -> String {
        format!("{}-{}.ts", project_id, self.name())
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Template {
    type Err = CodegenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.name() == s)
            .ok_or_else(|| CodegenError::UnknownTemplate {
                name: s.to_string(),
            })
    }
}

/// Renders a template against a context.
///
/// Implementations must be free of side effects so that rendering the same
/// context twice yields the same text.
pub trait TemplateRenderer {
    /// Renders one template.
    ///
    /// # Errors
    /// Returns `CodegenError` if the template cannot be rendered.
    fn render(&self, template: Template, context: &RenderContext) -> Result<String, CodegenError>;

    /// Renders a template looked up by name.
    ///
    /// # Errors
    /// Returns `CodegenError::UnknownTemplate` for names other than
    /// `visitor` and `accept-weaver`.
    fn render_named(&self, name: &str, context: &RenderContext) -> Result<String, CodegenError> {
        self.render(name.parse()?, context)
    }
}

/// Built-in TypeScript templates.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeScriptRenderer;

impl TemplateRenderer for TypeScriptRenderer {
    fn render(&self, template: Template, context: &RenderContext) -> Result<String, CodegenError> {
        Ok(match template {
            Template::Visitor => VisitorGenerator::new(context).generate(),
            Template::AcceptWeaver => AcceptWeaverGenerator::new(context).generate(),
        })
    }
}
