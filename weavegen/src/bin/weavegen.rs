//! weavegen command line.
//!
//! Run from a Langium project root: `weavegen --out src/semantics`

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use weavegen::Invocation;
use weavegen::run::DEFAULT_CONFIG;

/// Generate visitor and accept-weaver modules from a Langium grammar.
#[derive(Parser)]
#[command(name = "weavegen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Output directory [default: src/semantics next to the config]
    #[arg(long)]
    out: Option<PathBuf>,

    /// Generated grammar module or type graph JSON [default: <config out>/grammar.ts]
    #[arg(long)]
    grammar: Option<PathBuf>,

    /// Generated AST module, used for import paths [default: <config out>/ast.ts]
    #[arg(long)]
    ast: Option<PathBuf>,

    /// Language module exporting the services type
    #[arg(long)]
    module: Option<PathBuf>,

    /// Langium config file
    #[arg(long, default_value = DEFAULT_CONFIG)]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn invocation(self) -> Invocation {
        Invocation {
            out: self.out,
            grammar: self.grammar,
            ast: self.ast,
            module: self.module,
            config: self.config,
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .init();

    match weavegen::run(&cli.invocation()).await {
        Ok(paths) => {
            for path in &paths {
                tracing::debug!("Wrote {}", path.display());
            }
            tracing::info!("Files generated successfully.");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::from(e.exit_code())
        }
    }
}
