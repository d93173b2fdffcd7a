use ordered_float::OrderedFloat;
use rand::Rng;

use crate::graph::keyed::KeyedGraph;
use crate::graph::vertex::Location;

/// Grid cell coordinate `(x, y)`
pub type Cell = (usize, usize);

/// Generates a `width * height` grid graph keyed by cell coordinate.
///
/// Orthogonal moves cost 1.0; with `diagonal` set, diagonal moves are added
/// at cost sqrt(2). Every vertex gets its cell as location, so both Manhattan
/// (4-connected) and Euclidean estimates stay admissible.
pub fn generate_grid(width: usize, height: usize, diagonal: bool) -> KeyedGraph<Cell, OrderedFloat<f64>> {
    let mut graph = KeyedGraph::with_capacity(width * height);

    for y in 0..height {
        for x in 0..width {
            graph
                .add_vertex((x, y))
                .set_location(Location::new(x as f64, y as f64))
                .expect("grid coordinates are finite");
        }
    }

    let mut directions = vec![(0i64, -1i64, 1.0), (1, 0, 1.0), (0, 1, 1.0), (-1, 0, 1.0)];
    if diagonal {
        let d = std::f64::consts::SQRT_2;
        directions.extend([(1, -1, d), (1, 1, d), (-1, 1, d), (-1, -1, d)]);
    }

    for y in 0..height {
        for x in 0..width {
            for &(dx, dy, cost) in &directions {
                let nx = x as i64 + dx;
                let ny = y as i64 + dy;

                if nx >= 0 && ny >= 0 && nx < width as i64 && ny < height as i64 {
                    graph
                        .add_edge((x, y), (nx as usize, ny as usize), OrderedFloat(cost))
                        .expect("grid step costs are positive");
                }
            }
        }
    }

    graph
}

/// Generates a random geometric graph in the unit square.
///
/// `n` points are placed uniformly; every ordered pair closer than `r` gets an
/// edge weighted by their Euclidean distance. Locations are set to the points.
pub fn generate_geometric<R: Rng>(n: usize, r: f64, rng: &mut R) -> KeyedGraph<usize, OrderedFloat<f64>> {
    let mut graph = KeyedGraph::with_capacity(n);

    let points: Vec<Location> = (0..n)
        .map(|_| Location::new(rng.gen_range(0.0..1.0), rng.gen_range(0.0..1.0)))
        .collect();

    for (i, point) in points.iter().enumerate() {
        graph
            .add_vertex(i)
            .set_location(*point)
            .expect("points in the unit square are finite");
    }

    for i in 0..n {
        for j in 0..n {
            if i == j {
                continue;
            }
            let (dx, dy) = points[i].delta(&points[j]);
            let dist = (dx * dx + dy * dy).sqrt();

            if dist <= r {
                graph
                    .add_edge(i, j, OrderedFloat(dist))
                    .expect("distances are non-negative");
            }
        }
    }

    graph
}

/// Generates a directed graph on `n` vertices with up to `m` random edges
/// weighted uniformly in `[1, max_weight)`.
///
/// Repeated pairs overwrite each other, so the edge count may be below `m`.
/// # Panics
///
/// Panics if `max_weight` is not greater than 1.0.
pub fn generate_random<R: Rng>(
    n: usize,
    m: usize,
    max_weight: f64,
    rng: &mut R,
) -> KeyedGraph<usize, OrderedFloat<f64>> {
    assert!(
        max_weight > 1.0,
        "max_weight must be greater than 1.0, got {}",
        max_weight
    );

    let mut graph = KeyedGraph::with_capacity(n);
    for v in 0..n {
        graph.add_vertex(v);
    }
    if n == 0 {
        return graph;
    }

    for _ in 0..m {
        let from = rng.gen_range(0..n);
        let to = rng.gen_range(0..n);
        let weight = OrderedFloat(rng.gen_range(1.0..max_weight));
        graph
            .add_edge(from, to, weight)
            .expect("generated weights are at least 1.0");
    }

    graph
}
