//! Undirected geographic graph keyed by exact point identity.

use crate::error::FormatError;
use crate::spatial::{GeoPoint, Miles};

use std::collections::HashMap;

/// Node id, an index into the vertex table in load order.
pub(crate) type Idx = u32;

#[derive(Default, Clone)]
struct Node {
  edges: Vec<Idx>,
}

/// Adjacency-based undirected graph over [`GeoPoint`]s, weighted by the
/// great-circle distance between edge endpoints.
///
/// [`GeoGraph::from_parts`] is the only mutation; every query runs
/// read-only, so a built graph can be shared across threads behind an `Arc`
/// without locking.
pub struct GeoGraph {
  points: Vec<GeoPoint>,
  ids: HashMap<GeoPoint, Idx>,
  nodes: Vec<Node>,
}

impl GeoGraph {
  /// Builds the graph from a vertex list and 0-based index-pair edges.
  ///
  /// Exact duplicates in the vertex list collapse onto their first
  /// occurrence, with later positional indices still resolving to the
  /// collapsed vertex. Self-loop records are skipped and repeated edge
  /// records are inserted once, so the adjacency lists stay symmetric and
  /// duplicate-free. Vertices no edge touches are kept as isolated nodes.
  pub fn from_parts(
    points: Vec<GeoPoint>,
    edges: &[(usize, usize)],
  ) -> Result<GeoGraph, FormatError> {
    let mut graph = GeoGraph {
      points: Vec::with_capacity(points.len()),
      ids: HashMap::with_capacity(points.len()),
      nodes: Vec::with_capacity(points.len()),
    };

    // Positional identity of every input record.
    let mut positions: Vec<Idx> = Vec::with_capacity(points.len());
    for point in points {
      let next = graph.points.len() as Idx;
      let id = *graph.ids.entry(point).or_insert(next);
      if id == next {
        graph.points.push(point);
        graph.nodes.push(Node::default());
      }
      positions.push(id);
    }

    for &(from, to) in edges {
      let from = resolve(&positions, from)?;
      let to = resolve(&positions, to)?;
      if from != to {
        graph.add_edge(from, to);
      }
    }

    Ok(graph)
  }

  fn add_edge(&mut self, from: Idx, to: Idx) {
    let forward = &mut self.nodes[from as usize].edges;
    if !forward.contains(&to) {
      forward.push(to);
    }
    let backward = &mut self.nodes[to as usize].edges;
    if !backward.contains(&from) {
      backward.push(from);
    }
  }

  pub fn number_of_nodes(&self) -> usize {
    self.points.len()
  }

  pub fn number_of_edges(&self) -> usize {
    self.nodes.iter().map(|node| node.edges.len()).sum::<usize>() / 2
  }

  pub fn contains(&self, point: &GeoPoint) -> bool {
    self.ids.contains_key(point)
  }

  /// All vertices in load order. This is the iteration order every scan in
  /// the crate relies on, which keeps tie-breaking reproducible.
  pub fn vertices(&self) -> impl Iterator<Item = GeoPoint> + '_ {
    self.points.iter().copied()
  }

  /// Neighbors of `point`, empty when the point is not a vertex.
  pub fn neighbors<'a>(&'a self, point: &GeoPoint) -> impl Iterator<Item = GeoPoint> + 'a {
    let edges = match self.ids.get(point) {
      Some(&id) => self.nodes[id as usize].edges.as_slice(),
      None => &[],
    };
    edges.iter().map(move |&id| self.points[id as usize])
  }

  /// Whether `to` is reachable from `from` by following edges.
  ///
  /// A vertex counts as connected to itself only when it has at least one
  /// incident edge: the traversal reports `to` the first time it shows up
  /// in a visited vertex's neighbor list, so an isolated vertex is never
  /// reported, not even for itself.
  pub fn connected(&self, from: &GeoPoint, to: &GeoPoint) -> bool {
    let (from, to) = match (self.node_id(from), self.node_id(to)) {
      (Some(from), Some(to)) => (from, to),
      _ => return false,
    };

    let mut visited = vec![false; self.nodes.len()];
    let mut explore = vec![from];
    visited[from as usize] = true;

    while let Some(current) = explore.pop() {
      for neighbor in self.neighbor_ids(current) {
        if neighbor == to {
          return true;
        }
        if !visited[neighbor as usize] {
          visited[neighbor as usize] = true;
          explore.push(neighbor);
        }
      }
    }
    false
  }

  /// The vertex closest to `query`, scanning all vertices in load order.
  ///
  /// A vertex exactly equal to `query` is never a candidate, so a vertex is
  /// never its own nearest neighbor. Ties resolve to the earliest-loaded
  /// vertex. `None` when no eligible candidate exists.
  pub fn nearest_point(&self, query: &GeoPoint) -> Option<GeoPoint> {
    let mut best: Option<(GeoPoint, Miles)> = None;
    for vertex in self.vertices() {
      if vertex == *query {
        continue;
      }
      let distance = query.distance_to(&vertex);
      match best {
        Some((_, shortest)) if distance >= shortest => {}
        _ => best = Some((vertex, distance)),
      }
    }
    best.map(|(vertex, _)| vertex)
  }

  pub(crate) fn node_id(&self, point: &GeoPoint) -> Option<Idx> {
    self.ids.get(point).copied()
  }

  pub(crate) fn point(&self, id: Idx) -> GeoPoint {
    self.points[id as usize]
  }

  pub(crate) fn neighbor_ids(&self, id: Idx) -> impl Iterator<Item = Idx> + '_ {
    self.nodes[id as usize].edges.iter().copied()
  }

  pub(crate) fn transition_weight(&self, from: Idx, to: Idx) -> Miles {
    self.points[from as usize].distance_to(&self.points[to as usize])
  }
}

fn resolve(positions: &[Idx], index: usize) -> Result<Idx, FormatError> {
  positions
    .get(index)
    .copied()
    .ok_or(FormatError::EdgeOutOfRange {
      index,
      vertices: positions.len(),
    })
}
