//! octogen CLI entrypoint
//! Loads a spec document and prints the client resource model of its paths.
#![deny(unsafe_code)]

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::{Level, info};
use tracing_subscriber::EnvFilter;

use octogen::{
    ApiBuilder, DocumentResolver, FileSpecLoader, GeneratorConfig, PathMetadata, PathProcessor,
    SpecLoader,
};

#[derive(Parser)]
#[command(name = "octogen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Print the client resource model (names and methods) for each path
    Resources {
        #[command(flatten)]
        input: InputArgs,
        /// Generator configuration file (TOML)
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Print the parsed path metadata without running the builder
    Paths {
        #[command(flatten)]
        input: InputArgs,
    },
}

#[derive(clap::Args, Debug)]
pub struct InputArgs {
    /// Path to the specification document (YAML or JSON)
    #[arg(long)]
    schema: String,
    /// Only process this spec path, e.g. "/users/{username}"
    #[arg(long)]
    path: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout stays valid JSON
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match &cli.command {
        Commands::Resources { input, config } => {
            let config = match config {
                Some(path) => GeneratorConfig::from_file(path)
                    .with_context(|| format!("Failed to load config {}", path.display()))?,
                None => GeneratorConfig::default(),
            };

            let metadata = load_metadata(input).await?;
            let builder = ApiBuilder::with_default_stages(&config);
            let resources = metadata
                .iter()
                .map(|m| {
                    builder
                        .build(m)
                        .with_context(|| format!("Failed to build resource for {}", m.path))
                })
                .collect::<anyhow::Result<Vec<_>>>()?;

            info!(resources = resources.len(), "Built client resources");
            println!("{}", serde_json::to_string_pretty(&resources)?);
        }
        Commands::Paths { input } => {
            let metadata = load_metadata(input).await?;
            println!("{}", serde_json::to_string_pretty(&metadata)?);
        }
    }
    Ok(())
}

/// Load the document and process either every path or the one requested
async fn load_metadata(input: &InputArgs) -> anyhow::Result<Vec<PathMetadata>> {
    info!(schema = %input.schema, "Loading specification");

    let document = FileSpecLoader::new()
        .load(&input.schema)
        .await
        .context("Failed to load specification")?;

    let resolver = DocumentResolver::new(document.clone());
    let processor = PathProcessor::new(&resolver);

    match &input.path {
        Some(path) => {
            let item = document
                .get("paths")
                .and_then(|paths| paths.get(path))
                .with_context(|| format!("Path {path} not found in {}", input.schema))?;
            let metadata = processor
                .process(path, item)
                .with_context(|| format!("Failed to process {path}"))?;
            Ok(vec![metadata])
        }
        None => processor
            .process_document(&document)
            .context("Failed to process specification paths"),
    }
}
