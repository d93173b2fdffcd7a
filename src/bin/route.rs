use clap::Parser;
use colored::Colorize;
use keyed_paths::io::{load_edges, load_heuristics, load_locations};
use keyed_paths::{get_path, AStar, Dijkstra, DistanceMetric, HeuristicSource, ShortestPathAlgorithm};
use log::info;
use ordered_float::OrderedFloat;
use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;

/// Shortest route between two vertices of a graph loaded from CSV
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Options {
    /// Edge file with `from,to,weight` lines
    edges: PathBuf,

    /// Key of the source vertex
    from: String,

    /// Key of the target vertex
    to: String,

    /// Use A* instead of Dijkstra
    #[arg(long)]
    astar: bool,

    /// Add every edge in both directions
    #[arg(long)]
    undirected: bool,

    /// Location file with `key,x,y` lines
    #[arg(long)]
    locations: Option<PathBuf>,

    /// Heuristic file with `key,value` lines
    #[arg(long)]
    heuristics: Option<PathBuf>,

    /// Distance between locations used by A* (manhattan, euclidean, chebyshev)
    #[arg(long, default_value = "manhattan")]
    metric: DistanceMetric,

    /// Where A* takes its estimates from (auto, preloaded, locations, zero)
    #[arg(long, default_value = "auto")]
    source: HeuristicSource,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct RouteReport {
    algorithm: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    metric: Option<DistanceMetric>,
    #[serde(skip_serializing_if = "Option::is_none")]
    heuristic_source: Option<HeuristicSource>,
    from: String,
    to: String,
    reachable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    distance: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<Vec<String>>,
    settled: usize,
    relaxations: usize,
    load_ms: f64,
    search_ms: f64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    let options = Options::parse();

    let load_start = Instant::now();
    let mut graph = load_edges(&options.edges, options.undirected)?;
    if let Some(path) = &options.locations {
        let count = load_locations(&mut graph, path)?;
        info!("Loaded {} locations from {}", count, path.display());
    }
    if let Some(path) = &options.heuristics {
        let count = load_heuristics(&mut graph, path)?;
        info!("Loaded {} heuristics from {}", count, path.display());
    }
    let load_ms = load_start.elapsed().as_secs_f64() * 1000.0;
    info!(
        "Graph has {} vertices and {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );

    let algorithm: Box<dyn ShortestPathAlgorithm<String, OrderedFloat<f64>>> = if options.astar {
        Box::new(
            AStar::new()
                .with_metric(options.metric)
                .with_heuristic_source(options.source),
        )
    } else {
        Box::new(Dijkstra::new())
    };

    let search_start = Instant::now();
    let outcome = algorithm.search(&mut graph, &options.from, &options.to)?;
    let search_ms = search_start.elapsed().as_secs_f64() * 1000.0;

    let path = if outcome.reached {
        Some(get_path(&graph, &options.to)?)
    } else {
        None
    };

    let report = RouteReport {
        algorithm: algorithm.name(),
        metric: options.astar.then_some(options.metric),
        heuristic_source: options.astar.then_some(options.source),
        from: options.from.clone(),
        to: options.to.clone(),
        reachable: outcome.reached,
        distance: outcome.reached.then(|| outcome.distance.into_inner()),
        path,
        settled: outcome.settled,
        relaxations: outcome.relaxations,
        load_ms,
        search_ms,
    };

    if options.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{} {} -> {}", report.algorithm.cyan().bold(), report.from, report.to);
    if let (Some(metric), Some(source)) = (report.metric, report.heuristic_source) {
        println!("  {} {} metric, {} estimates", "heuristic:".green(), metric, source);
    }
    match (&report.distance, &report.path) {
        (Some(distance), Some(path)) => {
            println!("  {} {}", "distance:".green(), distance);
            println!("  {} {}", "path:".green(), path.join(" -> "));
        }
        _ => println!("  {}", "no path".red().bold()),
    }
    println!(
        "  settled {} vertices, {} relaxations",
        report.settled, report.relaxations
    );
    println!(
        "  {} load {:.3} ms, search {:.3} ms",
        "time:".yellow(),
        report.load_ms,
        report.search_ms
    );

    Ok(())
}
