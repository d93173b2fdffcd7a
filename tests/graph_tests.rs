use keyed_paths::{Error, KeyedGraph, Location};
use ordered_float::OrderedFloat;

type Graph = KeyedGraph<&'static str, OrderedFloat<f64>>;

fn w(weight: f64) -> OrderedFloat<f64> {
    OrderedFloat(weight)
}

#[test]
fn test_add_edge_creates_missing_vertices() {
    let mut graph = Graph::new();
    graph.add_edge("A", "B", w(1.0)).unwrap();

    assert_eq!(graph.vertex_count(), 2);
    assert_eq!(graph.edge_count(), 1);
    assert!(graph.contains(&"A"));
    assert!(graph.contains(&"B"));
    assert!(graph.has_edge(&"A", &"B"));
    assert!(!graph.has_edge(&"B", &"A"), "edges are directed");

    // New vertices start at distance 0 with nothing attached
    let b = graph.get_vertex(&"B").unwrap();
    assert_eq!(b.distance(), w(0.0));
    assert!(b.predecessor().is_none());
    assert!(b.heuristic().is_none());
    assert!(b.location().is_none());
}

#[test]
fn test_add_edge_overwrites_weight() {
    let mut graph = Graph::new();
    graph.add_edge("A", "B", w(5.0)).unwrap();
    graph.add_edge("A", "B", w(2.0)).unwrap();

    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.get_edge_weight(&"A", &"B"), Some(w(2.0)));
}

#[test]
fn test_negative_and_nan_weights_rejected() {
    let mut graph = Graph::new();

    assert!(matches!(
        graph.add_edge("A", "B", w(-1.0)),
        Err(Error::NegativeWeight(weight)) if weight == -1.0
    ));
    assert!(matches!(graph.add_edge("A", "B", w(f64::NAN)), Err(Error::InvalidWeight)));

    // Rejected edges leave no trace
    assert_eq!(graph.vertex_count(), 0);
    assert!(graph.validate_non_negative());
}

#[test]
fn test_get_vertex_missing_key() {
    let graph = Graph::from_edges(vec![("A", "B", w(1.0))]).unwrap();
    assert!(graph.get_vertex(&"Z").is_none());
    assert!(graph.index_of(&"Z").is_none());
    assert!(graph.distance(&"Z").is_none());
}

#[test]
fn test_iteration_follows_insertion_order() {
    let graph = Graph::from_edges(vec![
        ("C", "A", w(1.0)),
        ("B", "C", w(1.0)),
        ("D", "B", w(1.0)),
    ])
    .unwrap();

    let keys: Vec<&str> = graph.keys().copied().collect();
    assert_eq!(keys, vec!["C", "A", "B", "D"]);
    let from_iter: Vec<&str> = graph.iter().map(|v| *v.key()).collect();
    assert_eq!(keys, from_iter);
}

#[test]
fn test_add_vertex_twice_replaces_vertex() {
    let mut graph = Graph::new();
    graph.add_edge("A", "B", w(1.0)).unwrap();
    graph.add_edge("B", "A", w(1.0)).unwrap();
    graph.set_heuristic(&"A", w(3.0)).unwrap();

    graph.add_vertex("A");

    assert_eq!(graph.vertex_count(), 2);
    let a = graph.get_vertex(&"A").unwrap();
    assert_eq!(a.degree(), 0, "outgoing edges are dropped");
    assert!(a.heuristic().is_none());
    // Incoming edges still resolve to the key
    assert!(graph.has_edge(&"B", &"A"));
}

#[test]
fn test_undirected_edge_adds_both_directions() {
    let mut graph = Graph::new();
    graph.add_undirected_edge("A", "B", w(4.0)).unwrap();

    assert_eq!(graph.get_edge_weight(&"A", &"B"), Some(w(4.0)));
    assert_eq!(graph.get_edge_weight(&"B", &"A"), Some(w(4.0)));
    assert_eq!(graph.edge_count(), 2);
}

#[test]
fn test_remove_edge() {
    let mut graph = Graph::from_edges(vec![("A", "B", w(1.0)), ("A", "C", w(2.0))]).unwrap();

    assert!(graph.remove_edge(&"A", &"B"));
    assert!(!graph.remove_edge(&"A", &"B"));
    assert!(!graph.remove_edge(&"A", &"Z"));
    assert_eq!(graph.edge_count(), 1);
    assert!(graph.contains(&"B"), "vertices survive edge removal");
}

#[test]
fn test_attribute_setters_require_existing_vertex() {
    let mut graph = Graph::from_edges(vec![("A", "B", w(1.0))]).unwrap();

    graph.set_location(&"A", Location::new(1.0, 2.0)).unwrap();
    graph.set_heuristic(&"B", w(0.5)).unwrap();
    assert_eq!(graph.get_vertex(&"A").unwrap().location(), Some(Location::new(1.0, 2.0)));
    assert_eq!(graph.get_vertex(&"B").unwrap().heuristic(), Some(w(0.5)));

    assert!(matches!(
        graph.set_location(&"Z", Location::new(0.0, 0.0)),
        Err(Error::VertexNotFound(_))
    ));
    assert!(matches!(graph.set_heuristic(&"Z", w(1.0)), Err(Error::VertexNotFound(_))));
}

#[test]
fn test_nan_heuristic_rejected() {
    let mut graph = Graph::from_edges(vec![("A", "B", w(1.0))]).unwrap();
    graph.set_heuristic(&"A", w(2.0)).unwrap();

    assert!(matches!(
        graph.set_heuristic(&"A", w(f64::NAN)),
        Err(Error::InvalidHeuristic(_))
    ));
    // The previous estimate survives
    assert_eq!(graph.get_vertex(&"A").unwrap().heuristic(), Some(w(2.0)));

    let b = graph.get_vertex_mut(&"B").unwrap();
    assert!(matches!(b.set_heuristic(w(f64::NAN)), Err(Error::InvalidHeuristic(_))));
    assert!(b.heuristic().is_none());

    // Infinite estimates are legal: the target is known to be out of reach
    graph.set_heuristic(&"B", w(f64::INFINITY)).unwrap();
}

#[test]
fn test_non_finite_location_rejected() {
    let mut graph = Graph::from_edges(vec![("A", "B", w(1.0))]).unwrap();
    graph.set_location(&"A", Location::new(1.0, 1.0)).unwrap();

    for bad in [
        Location::new(f64::NAN, 0.0),
        Location::new(0.0, f64::INFINITY),
        Location::new(f64::NEG_INFINITY, 3.0),
    ] {
        assert!(matches!(graph.set_location(&"A", bad), Err(Error::InvalidLocation(_))));
    }
    assert_eq!(graph.get_vertex(&"A").unwrap().location(), Some(Location::new(1.0, 1.0)));

    let b = graph.get_vertex_mut(&"B").unwrap();
    assert!(matches!(
        b.set_location(Location::new(f64::NAN, f64::NAN)),
        Err(Error::InvalidLocation(_))
    ));
    assert!(b.location().is_none());
}

#[test]
fn test_reset_search_state() {
    let mut graph = Graph::from_edges(vec![("A", "B", w(1.0))]).unwrap();
    graph.reset_search_state();

    for vertex in graph.iter() {
        assert!(vertex.distance().is_infinite());
        assert!(vertex.predecessor().is_none());
    }
    assert!(!graph.is_reachable(&"A"));
}

#[test]
fn test_path_cost() {
    let graph = Graph::from_edges(vec![
        ("A", "B", w(1.0)),
        ("B", "C", w(2.0)),
        ("A", "C", w(5.0)),
    ])
    .unwrap();

    assert_eq!(graph.path_cost(&["A", "B", "C"]), Some(w(3.0)));
    assert_eq!(graph.path_cost(&["A"]), Some(w(0.0)));
    assert_eq!(graph.path_cost(&["C", "A"]), None);
}
