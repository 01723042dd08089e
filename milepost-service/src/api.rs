use geo::Coordinate;
use milepost::route::Route;
use milepost::spatial::{GeoPoint, Miles};
use polyline::encode_coordinates;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug)]
pub struct RequestError(String);

/// A single `lng,lat` path parameter.
pub struct Waypoint(pub GeoPoint);

/// An OSRM-style `lng,lat;lng,lat` pair of route endpoints.
pub struct Waypoints(pub GeoPoint, pub GeoPoint);

fn parse_coordinate(coord_str: &str) -> Result<GeoPoint, RequestError> {
    let fields: Vec<_> = coord_str.split(',').map(|c| c.parse::<f64>()).collect();
    match fields.as_slice() {
        [Ok(lng), Ok(lat)] => Ok(GeoPoint::new(*lat, *lng)),
        _ => Err(RequestError(format!(
            "Expected lng,lat but got '{}'",
            coord_str
        ))),
    }
}

impl FromStr for Waypoint {
    type Err = RequestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Waypoint(parse_coordinate(s)?))
    }
}

impl FromStr for Waypoints {
    type Err = RequestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let coords: Vec<_> = s.split(';').collect();
        if coords.len() != 2 {
            return Err(RequestError(format!(
                "Expected exactly 2 waypoints, {} found",
                coords.len()
            )));
        }
        Ok(Waypoints(
            parse_coordinate(coords[0])?,
            parse_coordinate(coords[1])?,
        ))
    }
}

impl fmt::Display for Waypoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for Waypoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.0, self.1)
    }
}

/// A request point snapped to the graph vertex that will answer for it.
#[derive(Serialize)]
pub struct SnappedWaypoint {
    // lng, lat to match the request coordinate order
    location: Vec<f64>,
    distance: f64,
}

impl SnappedWaypoint {
    pub fn new(requested: &GeoPoint, vertex: &GeoPoint) -> Self {
        SnappedWaypoint {
            location: vec![vertex.lng, vertex.lat],
            distance: requested.distance_to(vertex).0,
        }
    }
}

#[derive(Serialize)]
pub struct RouteResponse {
    code: String,
    distance: f64,
    geometry: String,
    waypoints: Vec<SnappedWaypoint>,
}

impl RouteResponse {
    pub fn new(found: &Route, distance: Miles, waypoints: Vec<SnappedWaypoint>) -> Self {
        let coordinates = found
            .points
            .iter()
            .map(|p| Coordinate::from((p.lng, p.lat)));

        RouteResponse {
            code: String::from("Ok"),
            distance: distance.0,
            geometry: encode_coordinates(coordinates, 5).unwrap(),
            waypoints,
        }
    }
}

#[derive(Serialize)]
pub struct NearestResponse {
    code: String,
    waypoint: SnappedWaypoint,
}

impl NearestResponse {
    pub fn new(requested: &GeoPoint, vertex: &GeoPoint) -> Self {
        NearestResponse {
            code: String::from("Ok"),
            waypoint: SnappedWaypoint::new(requested, vertex),
        }
    }
}
