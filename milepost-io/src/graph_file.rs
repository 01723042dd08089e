//! Reader for the `.graph` text format.
//!
//! The format is a header line with the vertex and edge counts, one record
//! per vertex (an optional leading label, then latitude and longitude) and
//! one record per edge (two 0-based indices into the vertex list). Fields
//! past the ones a record needs are ignored, as are blank lines.

use milepost::error::FormatError;
use milepost::graph::GeoGraph;
use milepost::spatial::GeoPoint;

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read graph description")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Format(#[from] FormatError),
}

/// Parses a graph description and builds the graph from it.
pub fn read_graph<R: BufRead>(input: R) -> Result<GeoGraph, LoadError> {
    // (1-based line number, content) of every non-blank line.
    let mut records = Vec::new();
    for (number, line) in input.lines().enumerate() {
        let line = line?;
        if !line.trim().is_empty() {
            records.push((number + 1, line));
        }
    }
    let mut records = records.into_iter();

    let (line, header) = records.next().ok_or(FormatError::Header)?;
    let mut fields = header.split_whitespace();
    let (declared_vertices, declared_edges) = match (fields.next(), fields.next()) {
        (Some(vertices), Some(edges)) => (
            parse_field::<usize>(line, vertices)?,
            parse_field::<usize>(line, edges)?,
        ),
        _ => return Err(FormatError::Header.into()),
    };

    let mut points = Vec::with_capacity(declared_vertices);
    for _ in 0..declared_vertices {
        let (line, record) = records.next().ok_or(FormatError::VertexCount {
            declared: declared_vertices,
            found: points.len(),
        })?;
        points.push(parse_vertex(line, &record)?);
    }

    let mut edges = Vec::with_capacity(declared_edges);
    for _ in 0..declared_edges {
        let (line, record) = records.next().ok_or(FormatError::EdgeCount {
            declared: declared_edges,
            found: edges.len(),
        })?;
        edges.push(parse_edge(line, &record)?);
    }

    let trailing = records.count();
    if trailing > 0 {
        return Err(FormatError::EdgeCount {
            declared: declared_edges,
            found: declared_edges + trailing,
        }
        .into());
    }

    Ok(GeoGraph::from_parts(points, &edges)?)
}

/// Opens `path` and reads the graph description it holds.
pub fn read_graph_file<P: AsRef<Path>>(path: P) -> Result<GeoGraph, LoadError> {
    let file = BufReader::new(File::open(path)?);
    read_graph(file)
}

fn parse_vertex(line: usize, record: &str) -> Result<GeoPoint, FormatError> {
    let fields: Vec<&str> = record.split_whitespace().collect();
    // Two fields are a bare coordinate pair; with three or more the first
    // field is a label.
    let (lat, lng) = match fields.as_slice() {
        [lat, lng] => (*lat, *lng),
        [_label, lat, lng, ..] => (*lat, *lng),
        _ => return Err(FormatError::IncompleteRecord { line }),
    };
    Ok(GeoPoint::new(
        parse_field(line, lat)?,
        parse_field(line, lng)?,
    ))
}

fn parse_edge(line: usize, record: &str) -> Result<(usize, usize), FormatError> {
    let mut fields = record.split_whitespace();
    match (fields.next(), fields.next()) {
        (Some(from), Some(to)) => Ok((parse_field(line, from)?, parse_field(line, to)?)),
        _ => Err(FormatError::IncompleteRecord { line }),
    }
}

fn parse_field<T: FromStr>(line: usize, token: &str) -> Result<T, FormatError> {
    token.parse().map_err(|_| FormatError::InvalidNumber {
        line,
        token: token.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use milepost::route::route;

    fn load(description: &str) -> Result<GeoGraph, LoadError> {
        read_graph(description.as_bytes())
    }

    #[test]
    fn test_read_labeled_records() {
        let graph = load(
            "3 2\n\
             durham 35.9940 -78.8986\n\
             raleigh 35.7796 -78.6382\n\
             chapel_hill 35.9132 -79.0558\n\
             0 1 US-70\n\
             0 2 US-15\n",
        )
        .unwrap();

        assert_eq!(graph.number_of_nodes(), 3);
        assert_eq!(graph.number_of_edges(), 2);

        let durham = GeoPoint::new(35.9940, -78.8986);
        let raleigh = GeoPoint::new(35.7796, -78.6382);
        assert!(graph.connected(&durham, &raleigh));
    }

    #[test]
    fn test_read_bare_coordinate_records_and_blank_lines() {
        let graph = load(
            "2 1\n\
             \n\
             0.0 0.0\n\
             0.0 1.0\n\
             \n\
             0 1\n",
        )
        .unwrap();

        assert_eq!(graph.number_of_nodes(), 2);
        assert_eq!(graph.number_of_edges(), 1);
    }

    #[test]
    fn test_loaded_graph_routes() {
        let graph = load(
            "3 2\n\
             p0 0.0 0.0\n\
             p1 0.0 1.0\n\
             p2 1.0 1.0\n\
             0 1\n\
             1 2\n",
        )
        .unwrap();

        let found = route(
            &graph,
            &GeoPoint::new(0.0, 0.0),
            &GeoPoint::new(1.0, 1.0),
        )
        .unwrap();
        assert_eq!(found.points.len(), 3);
    }

    #[test]
    fn test_missing_header() {
        assert!(matches!(
            load(""),
            Err(LoadError::Format(FormatError::Header))
        ));
        assert!(matches!(
            load("3\n"),
            Err(LoadError::Format(FormatError::Header))
        ));
    }

    #[test]
    fn test_vertex_count_mismatch() {
        let result = load("2 0\np0 0.0 0.0\n");
        assert!(matches!(
            result,
            Err(LoadError::Format(FormatError::VertexCount {
                declared: 2,
                found: 1
            }))
        ));
    }

    #[test]
    fn test_edge_count_mismatch() {
        let short = load("2 2\np0 0.0 0.0\np1 0.0 1.0\n0 1\n");
        assert!(matches!(
            short,
            Err(LoadError::Format(FormatError::EdgeCount {
                declared: 2,
                found: 1
            }))
        ));

        let long = load("2 0\np0 0.0 0.0\np1 0.0 1.0\n0 1\n");
        assert!(matches!(
            long,
            Err(LoadError::Format(FormatError::EdgeCount {
                declared: 0,
                found: 1
            }))
        ));
    }

    #[test]
    fn test_unparseable_coordinate() {
        let result = load("1 0\np0 north -78.8986\n");
        assert!(matches!(
            result,
            Err(LoadError::Format(FormatError::InvalidNumber { line: 2, .. }))
        ));
    }

    #[test]
    fn test_incomplete_vertex_record() {
        let result = load("1 0\n35.9940\n");
        assert!(matches!(
            result,
            Err(LoadError::Format(FormatError::IncompleteRecord { line: 2 }))
        ));
    }

    #[test]
    fn test_edge_endpoint_out_of_range() {
        let result = load("2 1\np0 0.0 0.0\np1 0.0 1.0\n0 7\n");
        assert!(matches!(
            result,
            Err(LoadError::Format(FormatError::EdgeOutOfRange {
                index: 7,
                vertices: 2
            }))
        ));
    }
}
