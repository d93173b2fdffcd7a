use keyed_paths::{AStar, Dijkstra, KeyedGraph, ShortestPathAlgorithm};
use log::{Level, LevelFilter, Log, Metadata, Record};
use ordered_float::OrderedFloat;
use std::sync::Mutex;

/// Collects warnings so the test can inspect them
struct WarningCollector {
    messages: Mutex<Vec<String>>,
}

impl Log for WarningCollector {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Warn
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            self.messages.lock().unwrap().push(record.args().to_string());
        }
    }

    fn flush(&self) {}
}

static COLLECTOR: WarningCollector = WarningCollector {
    messages: Mutex::new(Vec::new()),
};

fn take_warnings() -> Vec<String> {
    std::mem::take(&mut *COLLECTOR.messages.lock().unwrap())
}

// Single test: the logger is process-wide
#[test]
fn test_unreachable_target_is_warned() {
    log::set_logger(&COLLECTOR).unwrap();
    log::set_max_level(LevelFilter::Warn);

    let mut graph: KeyedGraph<&str, OrderedFloat<f64>> =
        KeyedGraph::from_edges(vec![("A", "B", OrderedFloat(1.0)), ("B", "C", OrderedFloat(2.0))]).unwrap();
    graph.add_vertex("D");

    let algorithms: [Box<dyn ShortestPathAlgorithm<&str, OrderedFloat<f64>>>; 2] =
        [Box::new(Dijkstra::new()), Box::new(AStar::new())];

    for algorithm in &algorithms {
        take_warnings();
        let outcome = algorithm.search(&mut graph, &"A", &"C").unwrap();
        assert!(outcome.reached);
        assert!(take_warnings().is_empty(), "{} warned on a reachable target", algorithm.name());

        let outcome = algorithm.search(&mut graph, &"A", &"D").unwrap();
        assert!(!outcome.reached);
        let warnings = take_warnings();
        assert_eq!(warnings.len(), 1, "{} should warn once", algorithm.name());
        assert_eq!(warnings[0], format!("{}: target \"D\" is unreachable", algorithm.name()));
    }
}
