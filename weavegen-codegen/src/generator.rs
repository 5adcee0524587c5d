//! Artifact assembly.
//!
//! Runs the generation pipeline over a loaded type graph: validate the root
//! type, flatten, translate, check identifiers, build the rendering context,
//! render both templates, and write them. Any failure stops the pipeline
//! before a file is written.

use crate::context::RenderContext;
use crate::error::CodegenError;
use crate::flatten::flatten_all;
use crate::imports::resolve_import;
use crate::render::{Template, TemplateRenderer, TypeScriptRenderer};
use crate::reserved::check_identifiers;
use crate::translate::{translate_interface, translate_union};
use std::path::{Path, PathBuf};
use weavegen_graph::{TypeGraph, validate_graph};

/// Project-level inputs of a generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Language id, used for file names.
    pub project_id: String,
    /// Project name, used for generated identifiers.
    pub project_name: String,
    /// Directory the artifacts are written to.
    pub output_dir: PathBuf,
    /// Generated AST module the artifacts import.
    pub ast_path: PathBuf,
    /// Language module exporting the services type, if any.
    pub module_path: Option<PathBuf>,
}

impl GeneratorOptions {
    /// Creates options with the conventional Langium layout under `src/`.
    #[must_use]
    pub fn new(project_id: impl Into<String>, project_name: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            project_name: project_name.into(),
            output_dir: PathBuf::from("src/semantics"),
            ast_path: PathBuf::from("src/language/generated/ast.ts"),
            module_path: None,
        }
    }

    /// Sets the output directory.
    #[must_use]
    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Sets the AST module path.
    #[must_use]
    pub fn ast_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.ast_path = path.into();
        self
    }

    /// Sets the language module path.
    #[must_use]
    pub fn module_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.module_path = Some(path.into());
        self
    }
}

/// One rendered file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// Template it was rendered from.
    pub template: Template,
    /// File name inside the output directory.
    pub file_name: String,
    /// Rendered text.
    pub contents: String,
}

/// Generation pipeline over one type graph.
pub struct Generator<'a, R = TypeScriptRenderer> {
    graph: &'a TypeGraph,
    options: GeneratorOptions,
    renderer: R,
}

impl<'a> Generator<'a> {
    /// Creates a generator using the built-in TypeScript templates.
    #[must_use]
    pub fn new(graph: &'a TypeGraph, options: GeneratorOptions) -> Self {
        Self {
            graph,
            options,
            renderer: TypeScriptRenderer,
        }
    }
}

impl<'a, R: TemplateRenderer> Generator<'a, R> {
    /// Replaces the template renderer.
    #[must_use]
    pub fn with_renderer<S: TemplateRenderer>(self, renderer: S) -> Generator<'a, S> {
        Generator {
            graph: self.graph,
            options: self.options,
            renderer,
        }
    }

    /// Returns the options of this run.
    #[must_use]
    pub fn options(&self) -> &GeneratorOptions {
        &self.options
    }

    /// Builds the rendering context.
    ///
    /// # Errors
    /// Returns `CodegenError::Graph` if the root type is missing, or
    /// `CodegenError::ReservedIdentifiers` listing every reserved attribute name.
    pub fn build_context(&self) -> Result<RenderContext, CodegenError> {
        validate_graph(self.graph)?;
        let root_type = weavegen_graph::root_type(self.graph)?.to_string();

        let flattened = flatten_all(self.graph);
        tracing::debug!("Flattened {} interfaces", flattened.len());

        let interfaces: Vec<_> = flattened.iter().map(translate_interface).collect();
        check_identifiers(&interfaces)?;

        let unions = self.graph.unions().map(translate_union).collect();
        let has_any_reference = interfaces.iter().any(|i| i.has_references());

        let output_dir = &self.options.output_dir;
        Ok(RenderContext {
            project_id: self.options.project_id.clone(),
            project_name: self.options.project_name.clone(),
            interfaces,
            root_type,
            unions,
            resolved_import_ast: resolve_import(output_dir, &self.options.ast_path),
            resolved_import_module: self
                .options
                .module_path
                .as_deref()
                .map(|module| resolve_import(output_dir, module)),
            has_any_reference,
        })
    }

    /// Renders both artifacts without touching the file system.
    ///
    /// # Errors
    /// Returns `CodegenError` if the context cannot be built or a template fails.
    pub fn render(&self) -> Result<Vec<Artifact>, CodegenError> {
        let context = self.build_context()?;
        let concrete = context.concrete_only();

        Template::ALL
            .into_iter()
            .map(|template| -> Result<Artifact, CodegenError> {
                let scoped = match template {
                    Template::Visitor => &context,
                    Template::AcceptWeaver => &concrete,
                };
                Ok(Artifact {
                    template,
                    file_name: template.file_name(&self.options.project_id),
                    contents: self.renderer.render(template, scoped)?,
                })
            })
            .collect()
    }

    /// Renders and writes both artifacts.
    ///
    /// # Returns
    /// The paths of the written files.
    ///
    /// # Errors
    /// Returns `CodegenError` if any stage fails; nothing is written unless
    /// rendering succeeded for both artifacts.
    pub fn generate(&self) -> Result<Vec<PathBuf>, CodegenError> {
        let artifacts = self.render()?;
        let paths = write_artifacts(&self.options.output_dir, &artifacts)?;
        tracing::info!(
            "Generated {} files in {}",
            paths.len(),
            self.options.output_dir.display()
        );
        Ok(paths)
    }
}

/// Writes artifacts into a directory, creating it if absent and overwriting
/// existing files.
///
/// # Errors
/// Returns `CodegenError::Io` if the directory or a file cannot be written.
pub fn write_artifacts(dir: &Path, artifacts: &[Artifact]) -> Result<Vec<PathBuf>, CodegenError> {
    std::fs::create_dir_all(dir).map_err(|e| CodegenError::io(dir.display().to_string(), e))?;

    artifacts
        .iter()
        .map(|artifact| -> Result<PathBuf, CodegenError> {
            let path = dir.join(&artifact.file_name);
            std::fs::write(&path, &artifact.contents)
                .map_err(|e| CodegenError::io(path.display().to_string(), e))?;
            tracing::debug!("Wrote {}", path.display());
            Ok(path)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use weavegen_graph::{GraphError, InterfaceType, PropertyType};

    fn hello_world() -> TypeGraph {
        let mut graph = TypeGraph::new().with_entry("Model");
        graph.add_interface(
            InterfaceType::new("Model")
                .property(
                    "persons",
                    PropertyType::array(PropertyType::value("Person")),
                )
                .property(
                    "greetings",
                    PropertyType::array(PropertyType::value("Greeting")),
                ),
        );
        graph.add_interface(
            InterfaceType::new("Greeting")
                .container("Model")
                .property("person", PropertyType::value("Person")),
        );
        graph.add_interface(
            InterfaceType::new("Person")
                .container("Model")
                .property("name", PropertyType::primitive("string")),
        );
        graph
    }

    fn abstract_hierarchy() -> TypeGraph {
        let mut graph = TypeGraph::new().with_entry("Program");
        graph.add_interface(
            InterfaceType::new("Program")
                .property("body", PropertyType::array(PropertyType::value("Statement"))),
        );
        graph.add_interface(
            InterfaceType::new("Statement")
                .abstract_type()
                .sub_type("Print")
                .sub_type("Assign")
                .container("Program")
                .property("label", PropertyType::primitive("string")),
        );
        graph.add_interface(
            InterfaceType::new("Print")
                .super_type("Statement")
                .property("value", PropertyType::primitive("string")),
        );
        graph.add_interface(
            InterfaceType::new("Assign")
                .super_type("Statement")
                .property("target", PropertyType::reference(PropertyType::value("Assign"))),
        );
        graph
    }

    fn options(dir: &Path) -> GeneratorOptions {
        GeneratorOptions::new("hello-world", "HelloWorld")
            .output_dir(dir.join("src/semantics"))
            .ast_path(dir.join("src/language/generated/ast.ts"))
    }

    fn names(context: &RenderContext) -> Vec<&str> {
        context.interfaces.iter().map(|i| i.name.as_str()).collect()
    }

    #[test]
    fn test_hello_world_context() {
        let graph = hello_world();
        let generator = Generator::new(&graph, options(Path::new("/project")));
        let context = generator.build_context().expect("Failed to build context");

        assert_eq!(context.interfaces.len(), 3);
        assert_eq!(context.root_type, "Model");
        assert_eq!(context.resolved_import_ast, "../language/generated/ast.js");
        assert!(context.has_any_reference);

        let greeting = context
            .interfaces
            .iter()
            .find(|i| i.name == "Greeting")
            .expect("Greeting missing");
        let person = greeting
            .attributes
            .iter()
            .find(|a| a.name == "person")
            .expect("person missing");
        assert!(person.is_reference);
        assert_eq!(person.ty, "Person");

        let model = context
            .interfaces
            .iter()
            .find(|i| i.name == "Model")
            .expect("Model missing");
        let types: Vec<&str> = model.attributes.iter().map(|a| a.ty.as_str()).collect();
        assert_eq!(types, vec!["Array<Person>", "Array<Greeting>"]);

        let concrete = context.concrete_only();
        let mut concrete_names = names(&concrete);
        concrete_names.sort_unstable();
        assert_eq!(concrete_names, vec!["Greeting", "Model", "Person"]);
    }

    #[test]
    fn test_abstract_type_in_visitor_only() {
        let graph = abstract_hierarchy();
        let generator = Generator::new(&graph, options(Path::new("/project")));
        let context = generator.build_context().expect("Failed to build context");

        assert!(names(&context).contains(&"Statement"));
        assert!(!names(&context.concrete_only()).contains(&"Statement"));

        for leaf in ["Print", "Assign"] {
            let interface = context
                .interfaces
                .iter()
                .find(|i| i.name == leaf)
                .expect("leaf missing");
            let label = interface
                .attributes
                .iter()
                .find(|a| a.name == "label")
                .expect("label missing");
            assert!(label.is_override);
        }

        let artifacts = generator.render().expect("Failed to render");
        assert!(artifacts[0].contents.contains("visitStatement(node: Statement)"));
        assert!(!artifacts[1].contents.contains("Statement"));
    }

    #[test]
    fn test_every_interface_names_itself() {
        let graph = abstract_hierarchy();
        let context = Generator::new(&graph, options(Path::new("/project")))
            .build_context()
            .expect("Failed to build context");

        for interface in &context.interfaces {
            assert!(interface.types.contains(&interface.name));
        }
    }

    #[test]
    fn test_missing_root_type() {
        let mut graph = hello_world();
        graph.entry = None;

        let result = Generator::new(&graph, options(Path::new("/project"))).build_context();
        assert!(matches!(result, Err(CodegenError::Graph(GraphError::NoEntry))));
    }

    #[test]
    fn test_generate_writes_two_files() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let graph = hello_world();
        let generator = Generator::new(&graph, options(dir.path()));

        let paths = generator.generate().expect("Failed to generate");
        assert_eq!(paths.len(), 2);
        assert!(dir.path().join("src/semantics/hello-world-visitor.ts").exists());
        assert!(dir.path().join("src/semantics/hello-world-accept-weaver.ts").exists());
    }

    #[test]
    fn test_generate_is_idempotent() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let graph = abstract_hierarchy();
        let generator = Generator::new(&graph, options(dir.path()));

        let first = generator.generate().expect("Failed to generate");
        let first: Vec<String> = first
            .iter()
            .map(|p| std::fs::read_to_string(p).expect("Failed to read"))
            .collect();

        let second = generator.generate().expect("Failed to generate");
        let second: Vec<String> = second
            .iter()
            .map(|p| std::fs::read_to_string(p).expect("Failed to read"))
            .collect();

        assert_eq!(first, second);
    }

    #[test]
    fn test_generate_overwrites_previous_output() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let out = dir.path().join("src/semantics");
        std::fs::create_dir_all(&out).expect("Failed to create dir");
        std::fs::write(out.join("hello-world-visitor.ts"), "stale").expect("Failed to write");

        let graph = hello_world();
        Generator::new(&graph, options(dir.path()))
            .generate()
            .expect("Failed to generate");

        let visitor = std::fs::read_to_string(out.join("hello-world-visitor.ts")).expect("read");
        assert!(visitor.contains("export interface HelloWorldVisitor {"));
    }

    #[test]
    fn test_reserved_identifier_writes_nothing() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let mut graph = hello_world();
        graph.add_interface(
            InterfaceType::new("Rule")
                .property("class", PropertyType::primitive("string"))
                .property("return", PropertyType::primitive("string")),
        );

        let result = Generator::new(&graph, options(dir.path())).generate();
        match result {
            Err(CodegenError::ReservedIdentifiers { names }) => {
                assert_eq!(names, vec!["class", "return"]);
            }
            other => panic!("expected reserved identifiers error, got {:?}", other),
        }
        assert!(!dir.path().join("src/semantics").exists());
    }

    #[test]
    fn test_module_import_is_resolved() {
        let graph = hello_world();
        let options = options(Path::new("/project"))
            .module_path("/project/src/language/hello-world-module.ts");
        let context = Generator::new(&graph, options)
            .build_context()
            .expect("Failed to build context");

        assert_eq!(
            context.resolved_import_module.as_deref(),
            Some("../language/hello-world-module.js")
        );
    }

    struct EchoRenderer;

    impl TemplateRenderer for EchoRenderer {
        fn render(&self, template: Template, context: &RenderContext) -> Result<String, CodegenError> {
            Ok(format!("{}:{}", template, context.interfaces.len()))
        }
    }

    #[test]
    fn test_custom_renderer_gets_filtered_context() {
        let graph = abstract_hierarchy();
        let artifacts = Generator::new(&graph, options(Path::new("/project")))
            .with_renderer(EchoRenderer)
            .render()
            .expect("Failed to render");

        assert_eq!(artifacts[0].contents, "visitor:4");
        assert_eq!(artifacts[1].contents, "accept-weaver:3");
    }
}
