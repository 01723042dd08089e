//! Route finding.

use crate::error::RouteError;
use crate::graph::GeoGraph;
use crate::search_space::SearchSpace;
use crate::spatial::{GeoPoint, Miles};

/// An ordered start-to-end path through the graph, plus the cumulative
/// great-circle mileage the search accumulated along it.
pub struct Route {
  pub cost: Miles,
  pub points: Vec<GeoPoint>,
}

/// Shortest route from `start` to `end` by cumulative edge mileage.
///
/// Fails when the endpoints are the same point, or when no path connects
/// them (which covers endpoints missing from the graph). Callers wanting to
/// avoid the error path can check [`GeoGraph::connected`] first, but the
/// search validates on its own.
pub fn route(graph: &GeoGraph, start: &GeoPoint, end: &GeoPoint) -> Result<Route, RouteError> {
  if start == end {
    return Err(RouteError::IdenticalEndpoints);
  }

  let (start, end) = match (graph.node_id(start), graph.node_id(end)) {
    (Some(start), Some(end)) => (start, end),
    _ => return Err(RouteError::NoPath),
  };

  let mut search = SearchSpace::new();
  search.init(start);

  loop {
    search.update(graph);
    match search.min() {
      Some((id, cost)) => {
        if id == end {
          // The unwound ids arrive in end-to-start order.
          let points = search
            .unwind(id)
            .iter()
            .rev()
            .map(|&id| graph.point(id))
            .collect();
          return Ok(Route { cost, points });
        }
      }
      None => return Err(RouteError::NoPath),
    }
  }
}

/// Total mileage along an arbitrary ordered point sequence, zero for
/// sequences shorter than two points.
pub fn route_distance(points: &[GeoPoint]) -> Miles {
  points
    .windows(2)
    .map(|pair| pair[0].distance_to(&pair[1]))
    .sum()
}
