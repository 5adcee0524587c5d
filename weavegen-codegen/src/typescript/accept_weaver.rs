//! Accept-weaver code generation.

use super::GENERATED_HEADER;
use crate::context::{FlattenedTranslatedInterface, RenderContext};

/// Generator for the accept-weaver module.
///
/// Only concrete interfaces get an accept hook: an abstract type has no
/// constructible node to attach it to. Interfaces that are not concrete are
/// skipped even if the context passed in still contains them.
pub struct AcceptWeaverGenerator<'a> {
    context: &'a RenderContext,
    prefix: String,
}

impl<'a> AcceptWeaverGenerator<'a> {
    /// Creates a new accept-weaver generator.
    #[must_use]
    pub fn new(context: &'a RenderContext) -> Self {
        Self {
            context,
            prefix: context.identifier_prefix(),
        }
    }

    fn concrete(&self) -> impl Iterator<Item = &'a FlattenedTranslatedInterface> {
        self.context.interfaces.iter().filter(|i| i.is_concrete)
    }

    /// Generates the whole accept-weaver module.
    #[must_use]
    pub fn generate(&self) -> String {
        let mut output = String::from(GENERATED_HEADER);

        output.push_str("import { AstUtils, DocumentState } from 'langium';\n");
        output.push_str("import type { AstNode, LangiumCoreServices, LangiumDocument } from 'langium';\n");
        output.push_str(&format!(
            "import type * as ASTInterfaces from '{}';\n",
            self.context.resolved_import_ast
        ));
        output.push_str(&format!(
            "import type * as Visitor from './{}-visitor.js';\n\n",
            self.context.project_id
        ));

        output.push_str(&format!("export class {}AcceptWeaver {{\n", self.prefix));
        output.push_str(&self.generate_constructor());
        output.push_str(&self.generate_dispatch());
        for interface in self.concrete() {
            output.push_str(&self.generate_weave(interface));
        }
        output.push_str("}\n");

        output
    }

    fn generate_constructor(&self) -> String {
        let mut output = String::new();

        output.push_str("    constructor(services: LangiumCoreServices) {\n");
        output.push_str(
            "        services.shared.workspace.DocumentBuilder.onBuildPhase(DocumentState.IndexedReferences, (documents) => {\n",
        );
        output.push_str("            for (const document of documents) {\n");
        output.push_str("                this.weaveDocument(document);\n");
        output.push_str("            }\n");
        output.push_str("        });\n");
        output.push_str("    }\n\n");

        output.push_str("    weaveDocument(document: LangiumDocument): void {\n");
        output.push_str(
            "        for (const node of AstUtils.streamAst(document.parseResult.value)) {\n",
        );
        output.push_str("            this.weave(node);\n");
        output.push_str("        }\n");
        output.push_str("    }\n\n");

        output
    }

    fn generate_dispatch(&self) -> String {
        let mut output = String::new();

        output.push_str("    weave(node: AstNode): void {\n");
        output.push_str("        switch (node.$type) {\n");
        for interface in self.concrete() {
            output.push_str(&format!("            case '{}':\n", interface.name));
            output.push_str(&format!(
                "                this.weave{0}(node as ASTInterfaces.{0});\n",
                interface.name
            ));
            output.push_str("                break;\n");
        }
        output.push_str("        }\n");
        output.push_str("    }\n");

        output
    }

    fn generate_weave(&self, interface: &FlattenedTranslatedInterface) -> String {
        let mut output = String::new();
        let name = &interface.name;

        output.push_str(&format!(
            "\n    weave{0}(node: ASTInterfaces.{0}): void {{\n",
            name
        ));
        output.push_str(&format!(
            "        const woven = node as unknown as Visitor.{};\n",
            name
        ));
        output.push_str(&format!(
            "        woven.accept = (visitor: Visitor.{}Visitor) => visitor.visit{}(woven);\n",
            self.prefix, name
        ));
        output.push_str("    }\n");

        output
    }
}
