//! Renders the visitor and accept-weaver of the Langium hello-world grammar.
//!
//! Run with: `cargo run --example hello_world`

use weavegen::prelude::*;

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
            .property(
                "person",
                PropertyType::reference(PropertyType::value("Person")),
            ),
    );
    graph.add_interface(
        InterfaceType::new("Person")
            .container("Model")
            .property("name", PropertyType::primitive("string")),
    );
    graph
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let graph = hello_world();
    let options = GeneratorOptions::new("hello-world", "HelloWorld");

    for artifact in Generator::new(&graph, options).render()? {
        println!("// ===== {} =====", artifact.file_name);
        println!("{}", artifact.contents);
    }

    Ok(())
}
