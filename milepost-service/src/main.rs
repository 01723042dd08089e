mod api;

use api::{NearestResponse, RouteResponse, SnappedWaypoint, Waypoint, Waypoints};
use milepost::graph::GeoGraph;
use milepost::route::{route, route_distance};
use milepost::spatial::GeoPoint;
use milepost_io::read_graph_file;
use std::env;
use std::sync::Arc;
use std::time::Instant;
use warp::{reject, Filter};

// Requests sitting exactly on a vertex stay there; nearest_point would
// move them to the closest other vertex.
fn snap(graph: &GeoGraph, requested: &GeoPoint) -> Option<GeoPoint> {
    if graph.contains(requested) {
        return Some(*requested);
    }
    graph.nearest_point(requested)
}

async fn route_request_handler(
    waypoints: Waypoints,
    graph: Arc<GeoGraph>,
) -> Result<impl warp::Reply, warp::Rejection> {
    println!("Route request: {}", waypoints);

    let Waypoints(from, to) = waypoints;

    let start = match snap(&graph, &from) {
        Some(vertex) => vertex,
        None => {
            println!("Origin {} cannot be snapped to the graph", from);
            return Err(reject::not_found());
        }
    };
    let end = match snap(&graph, &to) {
        Some(vertex) => vertex,
        None => {
            println!("Destination {} cannot be snapped to the graph", to);
            return Err(reject::not_found());
        }
    };

    let route_timer = Instant::now();

    match route(graph.as_ref(), &start, &end) {
        Ok(found) => {
            let distance = route_distance(&found.points);
            println!(
                "Route found in {:.3}s: {} points, {:.1} miles",
                route_timer.elapsed().as_secs_f32(),
                found.points.len(),
                distance.0
            );

            let waypoints = vec![
                SnappedWaypoint::new(&from, &start),
                SnappedWaypoint::new(&to, &end),
            ];
            Ok(warp::reply::json(&RouteResponse::new(
                &found, distance, waypoints,
            )))
        }
        Err(err) => {
            println!("No route from {} to {}: {}", start, end, err);
            Err(reject::not_found())
        }
    }
}

async fn nearest_request_handler(
    waypoint: Waypoint,
    graph: Arc<GeoGraph>,
) -> Result<impl warp::Reply, warp::Rejection> {
    println!("Nearest request: {}", waypoint);

    match graph.nearest_point(&waypoint.0) {
        Some(vertex) => Ok(warp::reply::json(&NearestResponse::new(
            &waypoint.0,
            &vertex,
        ))),
        None => {
            println!("The graph has no vertex to answer {}", waypoint);
            Err(reject::not_found())
        }
    }
}

#[tokio::main]
async fn main() {
    let graph_path = env::args()
        .nth(1)
        .unwrap_or_else(|| String::from("usa.graph"));

    let startup_timer = Instant::now();

    let graph = Arc::new(read_graph_file(&graph_path).unwrap());
    println!(
        "Loaded graph with {} nodes and {} edges in {:.1} seconds",
        graph.number_of_nodes(),
        graph.number_of_edges(),
        startup_timer.elapsed().as_secs_f32()
    );

    let graph = warp::any().map(move || Arc::clone(&graph));

    let cors = warp::cors().allow_any_origin();

    let route_api = warp::path("route")
        .and(warp::path("v1"))
        .and(warp::path("driving"))
        .and(warp::path::param::<Waypoints>())
        .and(warp::path::end())
        .and(graph.clone())
        .and_then(route_request_handler)
        .with(cors.clone());

    let nearest_api = warp::path("nearest")
        .and(warp::path("v1"))
        .and(warp::path::param::<Waypoint>())
        .and(warp::path::end())
        .and(graph.clone())
        .and_then(nearest_request_handler)
        .with(cors);

    println!("Started service with the bind address 127.0.0.1:5000");
    warp::serve(route_api.or(nearest_api))
        .run(([127, 0, 0, 1], 5000))
        .await;
}
