//! Line-oriented loaders for edge, location and heuristic files.
//!
//! Every format is comma separated, one record per line. Blank lines and lines
//! starting with `#` are skipped.
//!
//! - edges: `from,to,weight`, e.g. `Berlin,Amsterdam,655`
//! - locations: `key,x,y`
//! - heuristics: `key,value`

use ordered_float::OrderedFloat;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::graph::{KeyedGraph, Location};
use crate::{Error, Result};

/// Graph type produced by the loaders
pub type StringGraph = KeyedGraph<String, OrderedFloat<f64>>;

/// Reads `from,to,weight` lines into a new graph.
///
/// With `undirected` set every line adds the edge in both directions.
pub fn read_edges<R: BufRead>(reader: R, undirected: bool) -> Result<StringGraph> {
    let mut graph = StringGraph::new();

    for_each_record(reader, 3, |line, fields| {
        let weight = OrderedFloat(parse_number(line, fields[2])?);
        let (from, to) = (fields[0].to_string(), fields[1].to_string());

        let added = if undirected {
            graph.add_undirected_edge(from, to, weight)
        } else {
            graph.add_edge(from, to, weight)
        };
        added.map_err(|e| Error::Parse {
            line,
            message: e.to_string(),
        })
    })?;

    Ok(graph)
}

/// Reads `key,x,y` lines and stores them as vertex locations.
///
/// Returns the number of records applied. A key missing from the graph fails
/// with [`Error::VertexNotFound`]; a non-finite coordinate with [`Error::Parse`].
pub fn read_locations<R: BufRead>(graph: &mut StringGraph, reader: R) -> Result<usize> {
    for_each_record(reader, 3, |line, fields| {
        let x = parse_number(line, fields[1])?;
        let y = parse_number(line, fields[2])?;
        let applied = graph.set_location(&fields[0].to_string(), Location::new(x, y));
        applied.map_err(|e| invalid_value(line, e))
    })
}

/// Reads `key,value` lines and stores them as preloaded heuristics.
///
/// Returns the number of records applied. A key missing from the graph fails
/// with [`Error::VertexNotFound`]; a NaN value with [`Error::Parse`].
pub fn read_heuristics<R: BufRead>(graph: &mut StringGraph, reader: R) -> Result<usize> {
    for_each_record(reader, 2, |line, fields| {
        let value = parse_number(line, fields[1])?;
        let applied = graph.set_heuristic(&fields[0].to_string(), OrderedFloat(value));
        applied.map_err(|e| invalid_value(line, e))
    })
}

pub fn load_edges<P: AsRef<Path>>(path: P, undirected: bool) -> Result<StringGraph> {
    read_edges(BufReader::new(File::open(path)?), undirected)
}

pub fn load_locations<P: AsRef<Path>>(graph: &mut StringGraph, path: P) -> Result<usize> {
    read_locations(graph, BufReader::new(File::open(path)?))
}

pub fn load_heuristics<P: AsRef<Path>>(graph: &mut StringGraph, path: P) -> Result<usize> {
    read_heuristics(graph, BufReader::new(File::open(path)?))
}

/// Splits every record into exactly `arity` trimmed fields and hands them to
/// `apply` with the 1-based line number. Returns the number of records.
fn for_each_record<R, F>(reader: R, arity: usize, mut apply: F) -> Result<usize>
where
    R: BufRead,
    F: FnMut(usize, &[&str]) -> Result<()>,
{
    let mut records = 0;

    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = trimmed.split(',').map(str::trim).collect();
        if fields.len() != arity {
            return Err(Error::Parse {
                line: line_no,
                message: format!("expected {} fields, found {}", arity, fields.len()),
            });
        }
        if fields.iter().any(|field| field.is_empty()) {
            return Err(Error::Parse {
                line: line_no,
                message: "empty field".to_string(),
            });
        }

        apply(line_no, &fields)?;
        records += 1;
    }

    Ok(records)
}

fn parse_number(line: usize, field: &str) -> Result<f64> {
    field.parse::<f64>().map_err(|_| Error::Parse {
        line,
        message: format!("invalid number {:?}", field),
    })
}

/// Attaches the line number to a rejected value; lookup failures pass through
fn invalid_value(line: usize, error: Error) -> Error {
    match error {
        Error::InvalidHeuristic(_) | Error::InvalidLocation(_) => Error::Parse {
            line,
            message: error.to_string(),
        },
        other => other,
    }
}
