use clap::{value_t_or_exit, App, Arg};
use milepost::route::{route, route_distance};
use milepost::spatial::GeoPoint;
use milepost_io::read_graph_file;
use std::process::exit;
use std::time::Instant;

fn parse_coordinate(arg: &str) -> Option<GeoPoint> {
    let fields: Vec<&str> = arg.split(',').collect();
    match fields.as_slice() {
        [lat, lng] => Some(GeoPoint::new(
            lat.trim().parse().ok()?,
            lng.trim().parse().ok()?,
        )),
        _ => None,
    }
}

fn coordinate_or_exit(arg: &str) -> GeoPoint {
    parse_coordinate(arg).unwrap_or_else(|| {
        eprintln!("Expected lat,lng but got '{}'", arg);
        exit(1);
    })
}

fn main() {
    let matches = App::new("milepost-io")
        .about("Loads a .graph file and answers a routing query over it")
        .arg(Arg::with_name("graph").required(true))
        .arg(Arg::with_name("from").required(true))
        .arg(Arg::with_name("to").required(true))
        .get_matches();

    let graph_path = value_t_or_exit!(matches, "graph", String);
    let from = coordinate_or_exit(&value_t_or_exit!(matches, "from", String));
    let to = coordinate_or_exit(&value_t_or_exit!(matches, "to", String));

    let load_timer = Instant::now();

    let graph = read_graph_file(&graph_path).unwrap_or_else(|err| {
        eprintln!("Failed to load {}: {}", graph_path, err);
        exit(1);
    });

    println!(
        "Loaded graph with {} nodes and {} edges in {:.2} seconds",
        graph.number_of_nodes(),
        graph.number_of_edges(),
        load_timer.elapsed().as_secs_f32()
    );

    // A request sitting exactly on a vertex stays there; nearest_point
    // would move it to the closest other vertex.
    let snap = |requested: GeoPoint| {
        if graph.contains(&requested) {
            return requested;
        }
        graph.nearest_point(&requested).unwrap_or_else(|| {
            eprintln!("The graph has no vertex to snap {} to", requested);
            exit(1);
        })
    };

    let start = snap(from);
    let end = snap(to);
    println!("Snapped {} to {} and {} to {}", from, start, to, end);

    if !graph.connected(&start, &end) {
        println!("{} and {} are not connected", start, end);
        exit(1);
    }

    let route_timer = Instant::now();

    match route(&graph, &start, &end) {
        Ok(found) => {
            println!(
                "Found a {} point route in {:.2} seconds, {:.1} miles total",
                found.points.len(),
                route_timer.elapsed().as_secs_f32(),
                route_distance(&found.points).0
            );
            for point in &found.points {
                println!("  {}", point);
            }
        }
        Err(err) => {
            println!("No route: {}", err);
            exit(1);
        }
    }
}
