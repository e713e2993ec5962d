use std::io::Write;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand, ValueEnum};
use eucpath::{Chebyshev, Euclidean, Graph, Key, Manhattan, Metric, Position, VertexSpec};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing_subscriber::fmt::SubscriberBuilder;

mod generate;
mod graph_file;

use generate::{GenerateParams, random_graph};
use graph_file::GraphFile;

#[derive(Parser)]
#[command(name = "eucpath")]
#[command(about = "Shortest paths over graphs embedded in n-dimensional space")]
struct Cmd {
    /// Log level written to stderr (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn")]
    log_level: tracing::Level,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Compute a shortest path and print it as JSON
    Path(PathArgs),
    /// Write a random geometric graph file
    Generate(GenerateArgs),
    /// Print node and edge counts of a graph file
    Stats {
        #[arg(long)]
        graph: PathBuf,
    },
}

#[derive(Args)]
struct PathArgs {
    /// Graph file (JSON)
    #[arg(long)]
    graph: PathBuf,
    /// Start node key
    #[arg(long, conflicts_with = "from_at")]
    from: Option<Key>,
    /// Finish node key
    #[arg(long, conflicts_with = "to_at")]
    to: Option<Key>,
    /// Start node coordinates, comma separated
    #[arg(long, allow_hyphen_values = true)]
    from_at: Option<Coordinates>,
    /// Finish node coordinates, comma separated
    #[arg(long, allow_hyphen_values = true)]
    to_at: Option<Coordinates>,
    #[arg(long, value_enum, default_value_t = MetricArg::Euclidean)]
    metric: MetricArg,
}

#[derive(Args)]
struct GenerateArgs {
    #[arg(long, default_value_t = 100)]
    nodes: usize,
    #[arg(long, default_value_t = 2)]
    dims: usize,
    /// Links per node, to its nearest neighbors
    #[arg(long, default_value_t = 3)]
    degree: usize,
    /// Side length of the cube points are drawn from
    #[arg(long, default_value_t = 100.0)]
    extent: f64,
    /// Only link each node to its neighbors, not back
    #[arg(long)]
    one_way: bool,
    /// Seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,
    /// Output file; stdout when omitted
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum MetricArg {
    Euclidean,
    Manhattan,
    Chebyshev,
}

/// Comma-separated coordinates, e.g. `1,2.5,-3`.
#[derive(Clone, Debug, PartialEq)]
struct Coordinates(Vec<f64>);

impl FromStr for Coordinates {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split(',')
            .map(|part| {
                part.trim()
                    .parse::<f64>()
                    .map_err(|e| format!("bad coordinate {part:?}: {e}"))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Coordinates)
    }
}

#[derive(Debug, PartialEq)]
enum Query {
    ByKey(Key, Key),
    ByPosition(Position, Position),
}

impl PathArgs {
    fn query(&self) -> Result<Query> {
        match (&self.from, &self.to, &self.from_at, &self.to_at) {
            (Some(a), Some(b), None, None) => Ok(Query::ByKey(*a, *b)),
            (None, None, Some(a), Some(b)) => Ok(Query::ByPosition(
                Position::new(-1, a.0.clone()),
                Position::new(-1, b.0.clone()),
            )),
            _ => bail!("give either --from and --to keys, or --from-at and --to-at coordinates"),
        }
    }
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(cmd.log_level)
        .with_writer(std::io::stderr)
        .init();
    match cmd.action {
        Action::Path(args) => path(args),
        Action::Generate(args) => generate(args),
        Action::Stats { graph } => stats(graph),
    }
}

fn path(args: PathArgs) -> Result<()> {
    let query = args.query()?;
    let file = GraphFile::load(&args.graph)?;
    tracing::info!(graph = %args.graph.display(), metric = ?args.metric, ?query, "path");
    let path = match args.metric {
        MetricArg::Euclidean => shortest(&file.vertices, Euclidean, &query),
        MetricArg::Manhattan => shortest(&file.vertices, Manhattan, &query),
        MetricArg::Chebyshev => shortest(&file.vertices, Chebyshev, &query),
    }?;
    let mut out = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut out, &path)?;
    writeln!(out)?;
    Ok(())
}

fn shortest<M: Metric<Position>>(
    vertices: &[VertexSpec],
    metric: M,
    query: &Query,
) -> Result<eucpath::Path> {
    let mut graph = Graph::with_metric(vertices.iter(), metric).context("building graph")?;
    let path = match query {
        Query::ByKey(a, b) => graph.path_by_key(*a, *b),
        Query::ByPosition(a, b) => graph.path_by_position(a, b),
    }?;
    tracing::info!(steps = path.len(), distance = path.total_distance, "path found");
    Ok(path)
}

fn generate(args: GenerateArgs) -> Result<()> {
    if args.nodes == 0 || args.dims == 0 {
        bail!("--nodes and --dims must be positive");
    }
    if !(args.extent > 0.0) {
        bail!("--extent must be positive, got {}", args.extent);
    }
    let params = GenerateParams {
        nodes: args.nodes,
        dims: args.dims,
        degree: args.degree,
        extent: args.extent,
        bidirectional: !args.one_way,
    };
    let file = match args.seed {
        Some(seed) => random_graph(&params, &mut StdRng::seed_from_u64(seed)),
        None => random_graph(&params, &mut rand::rng()),
    };
    tracing::info!(nodes = params.nodes, dims = params.dims, seed = ?args.seed, "generated");
    match args.out {
        Some(out) => file.save(&out)?,
        None => {
            let mut stdout = std::io::stdout().lock();
            serde_json::to_writer_pretty(&mut stdout, &file)?;
            writeln!(stdout)?;
        }
    }
    Ok(())
}

fn stats(graph: PathBuf) -> Result<()> {
    let file = GraphFile::load(&graph)?;
    let g = Graph::new(file.vertices.iter()).context("building graph")?;
    println!("nodes: {}", g.len());
    println!("edges: {}", g.edge_count());
    println!("dimensions: {}", dimensions_label(&file.dimensions()));
    Ok(())
}

/// `2`, `2, 3 (mixed)`, or `-` for an empty graph.
fn dimensions_label(dims: &[usize]) -> String {
    match dims {
        [] => "-".to_string(),
        [d] => d.to_string(),
        _ => {
            let list: Vec<String> = dims.iter().map(usize::to_string).collect();
            format!("{} (mixed)", list.join(", "))
        }
    }
}
