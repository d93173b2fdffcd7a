use std::time::{Duration, Instant};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ordered_float::OrderedFloat;
use keyed_paths::algorithm::{ShortestPathAlgorithm, SearchOutcome};
use keyed_paths::graph::generators::generate_geometric;
use keyed_paths::{AStar, Dijkstra, DistanceMetric, KeyedGraph};

type Graph = KeyedGraph<usize, OrderedFloat<f64>>;

// Function to benchmark an algorithm on a graph
fn benchmark_algorithm<A>(algorithm: &A, graph: &mut Graph, source: usize, target: usize) -> (Duration, SearchOutcome<OrderedFloat<f64>>)
where
    A: ShortestPathAlgorithm<usize, OrderedFloat<f64>>
{
    let start = Instant::now();
    let outcome = match algorithm.search(graph, &source, &target) {
        Ok(outcome) => outcome,
        Err(e) => {
            eprintln!("  - {} failed: {}", algorithm.name(), e);
            std::process::exit(1);
        }
    };
    let duration = start.elapsed();

    println!("  - {}: settled {} vertices in {:?}", algorithm.name(), outcome.settled, duration);

    (duration, outcome)
}

fn main() {
    env_logger::init();

    // Define graph sizes to test
    let graph_sizes = vec![500, 1_000, 2_000, 4_000];

    // Keep the expected degree roughly constant as the square fills up
    let expected_degree = 8.0;

    println!("=====================================================");
    println!("Benchmark: Dijkstra vs A* on random geometric graphs");
    println!("Expected degree: {}", expected_degree);
    println!("=====================================================");

    let dijkstra = Dijkstra::new();
    let astar = AStar::new().with_metric(DistanceMetric::Euclidean);

    let mut rng = StdRng::seed_from_u64(42);
    let mut results = Vec::new();

    for &size in &graph_sizes {
        let radius = (expected_degree / (std::f64::consts::PI * size as f64)).sqrt();
        println!("\nGenerating geometric graph with {} vertices (radius {:.4})...", size, radius);
        let mut graph = generate_geometric(size, radius, &mut rng);
        println!("Graph has {} vertices and {} edges", graph.vertex_count(), graph.edge_count());

        let source = 0;
        let target = rng.gen_range(1..size);

        let (dijkstra_time, dijkstra_outcome) = benchmark_algorithm(&dijkstra, &mut graph, source, target);
        let (astar_time, astar_outcome) = benchmark_algorithm(&astar, &mut graph, source, target);

        if dijkstra_outcome.reached {
            let gap = (dijkstra_outcome.distance.into_inner() - astar_outcome.distance.into_inner()).abs();
            println!("Distance {:.4} (difference {:.2e})", dijkstra_outcome.distance.into_inner(), gap);
        } else {
            println!("Target {} is unreachable from {}", target, source);
        }

        results.push((size, dijkstra_time, astar_time, dijkstra_outcome.settled, astar_outcome.settled));
    }

    // Print summary table
    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!("{:<10} | {:<14} | {:<14} | {:<12} | {:<12} | {:<8}",
             "Vertices", "Dijkstra (ms)", "A* (ms)", "Dij settled", "A* settled", "Speedup");
    println!("-----------------------------------------------------");

    for (size, dijkstra_time, astar_time, dijkstra_settled, astar_settled) in &results {
        let speedup = dijkstra_time.as_secs_f64() / astar_time.as_secs_f64().max(f64::EPSILON);

        println!("{:<10} | {:<14.3} | {:<14.3} | {:<12} | {:<12} | {:<8.2}",
                 size,
                 dijkstra_time.as_secs_f64() * 1000.0,
                 astar_time.as_secs_f64() * 1000.0,
                 dijkstra_settled,
                 astar_settled,
                 speedup);
    }
}
