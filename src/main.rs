use clap::{Parser, Subcommand};
use erdgrid::catalog::render_catalog;
use erdgrid::config::DiagramConfig;
use erdgrid::listing::RelationshipListing;
use erdgrid::loader::{load_config, load_dataset, load_index};
use erdgrid::render_diagram;
use std::fs;
use std::path::PathBuf;
use std::process;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "erdgrid", version, about = "Render dataset schemas as ER diagrams")]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a dataset's ER diagram as SVG
    Diagram {
        /// Dataset JSON document
        input: PathBuf,
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Diagram config JSON (cellWidth, marginX, maxVisibleColumns, ...)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// List a dataset's table relationships
    Relations {
        /// Dataset JSON document
        input: PathBuf,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print the dataset catalog, featured datasets first
    Catalog {
        /// Dataset index JSON document
        input: PathBuf,
    },
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Diagram {
            input,
            output,
            config,
        } => {
            let config = match config {
                Some(path) => load_config(&path)?,
                None => DiagramConfig::default(),
            };
            let dataset = load_dataset(&input)?;
            let rendered = render_diagram(&dataset, &config);
            info!(
                tables = rendered.table_count,
                relationships = rendered.relationship_count,
                "rendered diagram"
            );

            match output {
                Some(path) => {
                    fs::write(&path, &rendered.svg)
                        .map_err(|e| format!("Failed to write {}: {}", path.display(), e))?;
                    info!(path = %path.display(), "wrote svg");
                }
                None => print!("{}", rendered.svg),
            }
        }
        Commands::Relations { input, json } => {
            let dataset = load_dataset(&input)?;
            let listing = RelationshipListing::from_dataset(&dataset);
            if json {
                println!("{}", serde_json::to_string_pretty(&listing)?);
            } else {
                print!("{}", listing.render_text());
            }
        }
        Commands::Catalog { input } => {
            let index = load_index(&input)?;
            print!("{}", render_catalog(&index));
        }
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
