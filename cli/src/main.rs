//! Command-line driver: load an edge list, run one algorithm, print a JSON
//! summary.
//!
//! The graph file format is one whitespace-separated `u v` pair per line;
//! lines starting with `#` or `%` are comments. Edges are treated as
//! undirected (the engine's dense path wants in-edge access, which a
//! symmetric graph gets for free).

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;

use wavefront::algo::{bfs, connected_components, kcore, maximal_independent_set, MisState, UNREACHED};
use wavefront::graph::Graph;

#[derive(Parser)]
#[command(name = "wavefront")]
#[command(about = "Frontier-based graph algorithms over an edge-list file", long_about = None)]
struct Cli {
    /// Edge-list file (one `u v` pair per line)
    graph: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Breadth-first search from a source vertex
    Bfs {
        /// Source vertex id
        #[arg(long, default_value_t = 0)]
        source: usize,
    },
    /// Connected components by label propagation
    Cc,
    /// K-core decomposition
    Kcore {
        /// Stop peeling after this k
        #[arg(long)]
        max_k: Option<usize>,
    },
    /// Maximal independent set (priority = vertex id)
    Mis,
}

#[derive(Serialize)]
struct Summary {
    algorithm: &'static str,
    vertices: usize,
    edges: usize,
    elapsed_ms: u128,
    #[serde(flatten)]
    outcome: Outcome,
}

#[derive(Serialize)]
#[serde(untagged)]
enum Outcome {
    Bfs { source: usize, reached: usize },
    Cc { components: usize },
    Kcore { largest_core: Option<usize> },
    Mis { set_size: usize },
}

fn load_graph(path: &Path) -> Result<Graph> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading edge list {}", path.display()))?;
    let mut edges = Vec::new();
    let mut max_id = 0usize;
    for (lineno, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('%') {
            continue;
        }
        let mut fields = line.split_whitespace();
        let (Some(u), Some(v)) = (fields.next(), fields.next()) else {
            bail!("line {}: expected `u v`", lineno + 1);
        };
        let u: usize = u.parse().with_context(|| format!("line {}: bad vertex id", lineno + 1))?;
        let v: usize = v.parse().with_context(|| format!("line {}: bad vertex id", lineno + 1))?;
        max_id = max_id.max(u).max(v);
        edges.push((u, v));
    }
    if edges.is_empty() {
        bail!("{}: no edges", path.display());
    }
    Graph::symmetric_from_edges(max_id + 1, &edges).context("building graph")
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let graph = load_graph(&cli.graph)?;

    let started = Instant::now();
    let (algorithm, outcome) = match cli.command {
        Commands::Bfs { source } => {
            if source >= graph.vertices() {
                bail!("source {source} out of range for {} vertices", graph.vertices());
            }
            let parents = bfs(&graph, source);
            let reached = parents.iter().filter(|&&p| p != UNREACHED).count();
            ("bfs", Outcome::Bfs { source, reached })
        }
        Commands::Cc => {
            let labels = connected_components(&graph, None);
            // A component's label is its minimum vertex id, so roots label themselves.
            let components = labels.iter().enumerate().filter(|&(v, &l)| v == l).count();
            ("cc", Outcome::Cc { components })
        }
        Commands::Kcore { max_k } => {
            let result = kcore(&graph, max_k);
            ("kcore", Outcome::Kcore { largest_core: result.largest_core })
        }
        Commands::Mis => {
            let states = maximal_independent_set(&graph, None);
            let set_size = states.iter().filter(|&&s| s == MisState::In).count();
            ("mis", Outcome::Mis { set_size })
        }
    };

    let summary = Summary {
        algorithm,
        vertices: graph.vertices(),
        edges: graph.edges(),
        elapsed_ms: started.elapsed().as_millis(),
        outcome,
    };
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
