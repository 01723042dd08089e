use crate::graph::GeoGraph;
use crate::spatial::GeoPoint;

pub fn graph_from_coords_and_edges(
  coords: Vec<(f64, f64)>,
  edges: Vec<(usize, usize)>,
) -> GeoGraph {
  let points = coords
    .into_iter()
    .map(|(lat, lng)| GeoPoint::new(lat, lng))
    .collect();
  GeoGraph::from_parts(points, &edges).unwrap()
}
