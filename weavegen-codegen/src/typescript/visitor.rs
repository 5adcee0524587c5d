//! Visitor code generation.

use super::GENERATED_HEADER;
use crate::context::{FlattenedTranslatedInterface, RenderContext};

/// Generator for the visitor module.
///
/// Emits a visit hook for every interface, abstract ones included, since they
/// still carry shared traversal logic.
pub struct VisitorGenerator<'a> {
    context: &'a RenderContext,
    prefix: String,
}

impl<'a> VisitorGenerator<'a> {
    /// Creates a new visitor generator.
    #[must_use]
    pub fn new(context: &'a RenderContext) -> Self {
        Self {
            context,
            prefix: context.identifier_prefix(),
        }
    }

    /// Generates the whole visitor module.
    #[must_use]
    pub fn generate(&self) -> String {
        let mut output = String::from(GENERATED_HEADER);

        output.push_str(&self.generate_imports());

        for union in &self.context.unions {
            output.push_str(&format!("export type {} = {};\n\n", union.name, union.types));
        }

        for interface in &self.context.interfaces {
            output.push_str(&self.generate_interface(interface));
            output.push_str(&self.generate_type_guard(interface));
        }

        output.push_str(&self.generate_visitor_interface());
        output.push_str(&self.generate_root_visit());
        output.push_str(&self.generate_validation_visitor());
        output.push_str(&self.generate_registration());

        output
    }

    fn services_type(&self) -> String {
        if self.context.resolved_import_module.is_some() {
            format!("{}Services", self.prefix)
        } else {
            "LangiumCoreServices".to_string()
        }
    }

    fn generate_imports(&self) -> String {
        let mut output = String::new();

        let mut langium = vec!["AstNode", "LangiumCoreServices"];
        if self.context.has_any_reference {
            langium.push("Reference");
        }
        langium.extend(["ValidationAcceptor", "ValidationChecks"]);

        output.push_str(&format!(
            "import type {{ {} }} from 'langium';\n",
            langium.join(", ")
        ));
        output.push_str(&format!(
            "import type * as ASTInterfaces from '{}';\n",
            self.context.resolved_import_ast
        ));
        if let Some(module) = &self.context.resolved_import_module {
            output.push_str(&format!(
                "import type {{ {}Services }} from '{}';\n",
                self.prefix, module
            ));
        }
        output.push('\n');

        output
    }

    /// Generates the node interface, retyping links to the visitor's types.
    fn generate_interface(&self, interface: &FlattenedTranslatedInterface) -> String {
        let mut output = String::new();

        let mut extends = vec![format!("ASTInterfaces.{}", interface.name)];
        if let Some(super_type) = &interface.direct_super_type {
            extends.push(super_type.clone());
        }

        output.push_str(&format!(
            "export interface {} extends {} {{\n",
            interface.name,
            extends.join(", ")
        ));
        output.push_str(&format!(
            "    accept(visitor: {}Visitor): any;\n",
            self.prefix
        ));
        for attribute in interface.own_references() {
            output.push_str(&format!("    {}: {};\n", attribute.name, attribute.ty));
        }
        if let Some(container) = interface.container_type() {
            output.push_str(&format!("    $container: {};\n", container));
        }
        output.push_str("}\n\n");

        output
    }

    fn generate_type_guard(&self, interface: &FlattenedTranslatedInterface) -> String {
        let mut output = String::new();

        let types = interface
            .types
            .iter()
            .map(|t| format!("'{}'", t))
            .collect::<Vec<_>>()
            .join(", ");

        output.push_str(&format!(
            "export function is{0}(node: AstNode): node is {0} {{\n",
            interface.name
        ));
        output.push_str(&format!("    return [{}].includes(node.$type);\n", types));
        output.push_str("}\n\n");

        output
    }

    fn generate_visitor_interface(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("export interface {}Visitor {{\n", self.prefix));
        for interface in &self.context.interfaces {
            output.push_str(&format!(
                "    visit{0}(node: {0}): any;\n",
                interface.name
            ));
        }
        output.push_str("}\n\n");

        output
    }

    fn generate_root_visit(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "export function visitRoot(visitor: {}Visitor, root: {}): any {{\n",
            self.prefix, self.context.root_type
        ));
        output.push_str(&format!(
            "    return visitor.visit{}(root);\n",
            self.context.root_type
        ));
        output.push_str("}\n\n");

        output
    }

    fn generate_validation_visitor(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "export abstract class {0}ValidationVisitor implements {0}Visitor {{\n",
            self.prefix
        ));
        output.push_str("    protected validationAccept: ValidationAcceptor = () => {};\n\n");
        output.push_str("    setValidationAcceptor(accept: ValidationAcceptor): void {\n");
        output.push_str("        this.validationAccept = accept;\n");
        output.push_str("    }\n");
        for interface in &self.context.interfaces {
            output.push_str(&format!(
                "\n    abstract visit{0}(node: {0}): void;\n",
                interface.name
            ));
        }
        output.push_str("}\n\n");

        output
    }

    /// Registers the validation visitor on the root type only; the visitor
    /// drives the traversal from there.
    fn generate_registration(&self) -> String {
        let mut output = String::new();
        let root = &self.context.root_type;

        output.push_str(&format!(
            "export function registerVisitorAsValidator(visitor: {}ValidationVisitor, services: {}): void {{\n",
            self.prefix,
            self.services_type()
        ));
        output.push_str("    const registry = services.validation.ValidationRegistry;\n");
        output.push_str(&format!(
            "    const checks: ValidationChecks<ASTInterfaces.{}AstType> = {{\n",
            self.prefix
        ));
        output.push_str(&format!("        {}: (node, accept) => {{\n", root));
        output.push_str("            visitor.setValidationAcceptor(accept);\n");
        output.push_str(&format!(
            "            visitor.visit{0}(node as {0});\n",
            root
        ));
        output.push_str("        },\n");
        output.push_str("    };\n");
        output.push_str("    registry.register(checks, visitor);\n");
        output.push_str("}\n");

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{TranslatedAttribute, TranslatedUnion};

    fn attribute(name: &str, ty: &str, is_reference: bool, is_override: bool) -> TranslatedAttribute {
        TranslatedAttribute {
            name: name.to_string(),
            ty: ty.to_string(),
            is_reference,
            is_override,
        }
    }

    fn context() -> RenderContext {
        RenderContext {
            project_id: "arith".to_string(),
            project_name: "Arith".to_string(),
            interfaces: vec![
                FlattenedTranslatedInterface {
                    name: "Expression".to_string(),
                    types: vec!["Expression".to_string(), "Call".to_string()],
                    attributes: vec![attribute("scope", "Reference<Scope>", true, false)],
                    is_concrete: false,
                    container_types: vec!["Program".to_string()],
                    direct_super_type: None,
                    override_containers: false,
                },
                FlattenedTranslatedInterface {
                    name: "Call".to_string(),
                    types: vec!["Call".to_string()],
                    attributes: vec![
                        attribute("scope", "Reference<Scope>", true, true),
                        attribute("args", "Array<Expression>", true, false),
                        attribute("name", "string", false, false),
                    ],
                    is_concrete: true,
                    container_types: vec!["Program".to_string()],
                    direct_super_type: Some("Expression".to_string()),
                    override_containers: true,
                },
            ],
            root_type: "Expression".to_string(),
            unions: vec![TranslatedUnion {
                name: "Operator".to_string(),
                types: "'+' | '-'".to_string(),
            }],
            resolved_import_ast: "../language/generated/ast.js".to_string(),
            resolved_import_module: None,
            has_any_reference: true,
        }
    }

    #[test]
    fn test_generate_imports() {
        let output = VisitorGenerator::new(&context()).generate();
        assert!(output.contains(
            "import type { AstNode, LangiumCoreServices, Reference, ValidationAcceptor, ValidationChecks } from 'langium';"
        ));
        assert!(output.contains("import type * as ASTInterfaces from '../language/generated/ast.js';"));
    }

    #[test]
    fn test_generate_interfaces() {
        let output = VisitorGenerator::new(&context()).generate();

        assert!(output.contains("export type Operator = '+' | '-';"));
        assert!(output.contains("export interface Expression extends ASTInterfaces.Expression {"));
        assert!(output.contains("export interface Call extends ASTInterfaces.Call, Expression {"));
        assert!(output.contains("    args: Array<Expression>;\n"));
        assert!(!output.contains("    name: string;\n"));
        // Inherited attribute and container are declared once, on the super type.
        assert_eq!(output.matches("scope: Reference<Scope>;").count(), 1);
        assert_eq!(output.matches("$container: Program;").count(), 1);
    }

    #[test]
    fn test_generate_visit_hooks_for_abstract_types() {
        let output = VisitorGenerator::new(&context()).generate();

        assert!(output.contains("export interface ArithVisitor {"));
        assert!(output.contains("    visitExpression(node: Expression): any;"));
        assert!(output.contains("    visitCall(node: Call): any;"));
        assert!(output.contains("return ['Expression', 'Call'].includes(node.$type);"));
        assert!(output.contains("    abstract visitExpression(node: Expression): void;"));
    }

    #[test]
    fn test_generate_registration_uses_root() {
        let output = VisitorGenerator::new(&context()).generate();

        assert!(output.contains("const checks: ValidationChecks<ASTInterfaces.ArithAstType> = {"));
        assert!(output.contains("        Expression: (node, accept) => {"));
        assert!(output.contains("services: LangiumCoreServices): void {"));
    }

    #[test]
    fn test_generate_with_module_import() {
        let mut context = context();
        context.resolved_import_module = Some("../language/arith-module.js".to_string());
        context.has_any_reference = false;

        let output = VisitorGenerator::new(&context).generate();
        assert!(output.contains("import type { ArithServices } from '../language/arith-module.js';"));
        assert!(output.contains("services: ArithServices): void {"));
        assert!(!output.contains("Reference, "));
    }
}
