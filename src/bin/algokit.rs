//! CLI entry point for the `algokit` command-line tool.

use std::process;

use clap::{Parser, Subcommand};

use algokit::cli::commands;
use algokit::graph::WalkOrder;
use algokit::sort::SortAlgorithm;

#[derive(Parser)]
#[command(
    name = "algokit",
    about = "algokit CLI: graph traversal, neighbor lookup and sorting"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Walk a graph, or find a path between two vertices
    Walk {
        /// Traversal order: bfs or dfs
        #[arg(long, default_value = "bfs")]
        order: String,
        /// Start vertex (defaults to the first mentioned vertex)
        #[arg(long)]
        from: Option<String>,
        /// Destination vertex
        #[arg(long)]
        to: Option<String>,
        /// Edges as a-b (undirected) or a>b (directed), optional :weight; names must not contain - or >
        #[arg(required = true)]
        edges: Vec<String>,
    },
    /// List the neighbors of a vertex
    Neighbors {
        /// Vertex name
        vertex: String,
        /// Edges as a-b (undirected) or a>b (directed), optional :weight; names must not contain - or >
        #[arg(required = true)]
        edges: Vec<String>,
    },
    /// Sort integers
    Sort {
        /// Algorithm: bubble, insertion, selection, merge, quick, heap, tree
        #[arg(long, default_value = "merge")]
        algorithm: String,
        /// Numbers to sort
        #[arg(allow_negative_numbers = true)]
        numbers: Vec<i64>,
    },
}

fn init_logging(verbose: bool) {
    if verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
            .init();
    } else if std::env::var_os("RUST_LOG").is_some() {
        env_logger::init();
    }
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Walk {
            order,
            from,
            to,
            edges,
        } => {
            let order = match WalkOrder::from_name(&order) {
                Some(order) => order,
                None => {
                    eprintln!("Invalid walk order: {}", order);
                    process::exit(2);
                }
            };
            commands::cmd_walk(&edges, order, from.as_deref(), to.as_deref(), json)
        }
        Commands::Neighbors { vertex, edges } => commands::cmd_neighbors(&vertex, &edges, json),
        Commands::Sort { algorithm, numbers } => {
            let algorithm = match SortAlgorithm::from_name(&algorithm) {
                Some(algorithm) => algorithm,
                None => {
                    eprintln!("Invalid sort algorithm: {}", algorithm);
                    process::exit(2);
                }
            };
            commands::cmd_sort(algorithm, &numbers, json)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
