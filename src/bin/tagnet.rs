//! Tagnet CLI — tag counting and co-occurrence graphs for prompt corpora.
//!
//! Usage:
//!   tagnet count-tags --path <dir> [--filter '>=5']
//!   tagnet display-graph --path <dir> [--limit 20]
//!   tagnet export-graph --path <dir> --output <file>

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tagnet::{export_graph, load_prompts, NumberFilter, TagNetwork};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "tagnet",
    version,
    about = "Tag counting and co-occurrence graphs for text prompts"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Log ingestion details to stderr (RUST_LOG takes precedence)
    #[arg(long, short, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every tag with its usage count, most used first
    CountTags {
        /// Directory of newline-delimited prompt files
        #[arg(long)]
        path: PathBuf,
        /// Keep only counts matching a filter like "<x", "= x" or ">=x"
        #[arg(long, value_parser = parse_filter)]
        filter: Option<NumberFilter>,
    },
    /// Print the tag graph as text: nodes by id, then the heaviest edges
    DisplayGraph {
        /// Directory of newline-delimited prompt files
        #[arg(long)]
        path: PathBuf,
        /// Maximum number of edges to print
        #[arg(long, default_value_t = 20)]
        limit: usize,
    },
    /// Write the tag graph as node-link JSON
    ExportGraph {
        /// Directory of newline-delimited prompt files
        #[arg(long)]
        path: PathBuf,
        /// Output file for the JSON graph
        #[arg(long)]
        output: PathBuf,
    },
}

fn parse_filter(value: &str) -> Result<NumberFilter, String> {
    value.parse().map_err(|e: tagnet::TagnetError| e.to_string())
}

fn init_logging(verbose: bool) {
    let default = if verbose { "tagnet=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Load and ingest every prompt under `path` into a fresh network
fn build_network(path: &Path) -> Result<TagNetwork, String> {
    let prompts = load_prompts(path).map_err(|e| format!("Failed to load prompts: {}", e))?;
    let mut network = TagNetwork::new();
    network
        .ingest_all(&prompts)
        .map_err(|e| format!("Failed to ingest prompts: {}", e))?;
    Ok(network)
}

fn cmd_count_tags(path: &Path, filter: Option<&NumberFilter>) -> i32 {
    let network = match build_network(path) {
        Ok(n) => n,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };
    for row in network.usage(filter) {
        println!("{}", row);
    }
    0
}

fn cmd_display_graph(path: &Path, limit: usize) -> i32 {
    let graph = match build_network(path).and_then(|n| n.graph().map_err(|e| e.to_string())) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };
    if graph.node_count() == 0 {
        println!("No tags found.");
        return 0;
    }
    println!("{:>6}  {:<40}  {:>8}", "ID", "NAME", "RANK");
    println!("{}", "-".repeat(58));
    for node in graph.nodes() {
        println!("{:>6}  {:<40}  {:>8.4}", node.id.index(), node.name, node.rank);
    }
    println!();
    println!(
        "{} nodes, {} edges (showing up to {})",
        graph.node_count(),
        graph.edge_count(),
        limit
    );
    for edge in graph.heaviest_edges(limit) {
        let name = |id| graph.node(id).map(|n| n.name.as_str()).unwrap_or("?");
        println!(
            "{} -- {}  {:.4}",
            name(edge.source),
            name(edge.target),
            edge.weight
        );
    }
    0
}

fn cmd_export_graph(path: &Path, output: &Path) -> i32 {
    let graph = match build_network(path).and_then(|n| n.graph().map_err(|e| e.to_string())) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };
    match export_graph(&graph, output) {
        Ok(()) => {
            println!(
                "Exported {} nodes and {} links to {}",
                graph.node_count(),
                graph.edge_count(),
                output.display()
            );
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let code = match cli.command {
        Commands::CountTags { path, filter } => cmd_count_tags(&path, filter.as_ref()),
        Commands::DisplayGraph { path, limit } => cmd_display_graph(&path, limit),
        Commands::ExportGraph { path, output } => cmd_export_graph(&path, &output),
    };
    std::process::exit(code);
}
