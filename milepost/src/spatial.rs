//! Geographic types.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::Sum;
use std::ops::Add;

/// Mean Earth radius in miles.
const EARTH_RADIUS_MILES: f64 = 3959.0;

/// A latitude/longitude pair identifying a graph vertex.
///
/// Equality and hashing are bit-exact on both coordinates: two points are
/// the same vertex only when their coordinates match exactly, and closeness
/// never merges them.
#[derive(Copy, Clone, Debug, Serialize, Deserialize)]
pub struct GeoPoint {
  pub lat: f64,
  pub lng: f64,
}

impl GeoPoint {
  pub fn new(lat: f64, lng: f64) -> Self {
    GeoPoint { lat, lng }
  }

  /// Great-circle distance to `other` in miles, by the haversine formula.
  pub fn distance_to(&self, other: &GeoPoint) -> Miles {
    let lat1 = self.lat.to_radians();
    let lat2 = other.lat.to_radians();
    let dlat = (other.lat - self.lat).to_radians();
    let dlng = (other.lng - self.lng).to_radians();

    let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    Miles(EARTH_RADIUS_MILES * c)
  }
}

impl PartialEq for GeoPoint {
  fn eq(&self, other: &Self) -> bool {
    self.lat.to_bits() == other.lat.to_bits() && self.lng.to_bits() == other.lng.to_bits()
  }
}

impl Eq for GeoPoint {}

impl Hash for GeoPoint {
  fn hash<H: Hasher>(&self, state: &mut H) {
    self.lat.to_bits().hash(state);
    self.lng.to_bits().hash(state);
  }
}

impl fmt::Display for GeoPoint {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "({}, {})", self.lat, self.lng)
  }
}

/// A distance in miles.
///
/// Wraps `f64` with a total order (`f64::total_cmp`) so cumulative
/// distances can key the routing frontier's binary heap.
#[derive(Copy, Clone, Debug, Default, Serialize, Deserialize)]
pub struct Miles(pub f64);

impl PartialEq for Miles {
  fn eq(&self, other: &Self) -> bool {
    self.cmp(other) == Ordering::Equal
  }
}

impl Eq for Miles {}

impl Ord for Miles {
  fn cmp(&self, other: &Self) -> Ordering {
    self.0.total_cmp(&other.0)
  }
}

impl PartialOrd for Miles {
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

impl Add for Miles {
  type Output = Miles;

  fn add(self, other: Miles) -> Miles {
    Miles(self.0 + other.0)
  }
}

impl Sum for Miles {
  fn sum<I: Iterator<Item = Miles>>(iter: I) -> Miles {
    iter.fold(Miles::default(), Add::add)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_distance_to_self_is_zero() {
    let durham = GeoPoint::new(35.9940, -78.8986);
    assert_eq!(durham.distance_to(&durham), Miles(0.0));
  }

  #[test]
  fn test_distance_new_york_to_los_angeles() {
    let new_york = GeoPoint::new(40.7128, -74.0060);
    let los_angeles = GeoPoint::new(34.0522, -118.2437);

    let there = new_york.distance_to(&los_angeles);
    let back = los_angeles.distance_to(&new_york);

    assert!((there.0 - 2445.71).abs() < 0.01);
    assert_eq!(there, back);
  }

  #[test]
  fn test_one_degree_of_longitude_at_the_equator() {
    let d = GeoPoint::new(0.0, 0.0).distance_to(&GeoPoint::new(0.0, 1.0));
    assert!((d.0 - 69.0976).abs() < 0.0001);
  }

  #[test]
  fn test_equality_is_exact() {
    let p = GeoPoint::new(35.9940, -78.8986);
    assert_eq!(p, GeoPoint::new(35.9940, -78.8986));
    assert_ne!(p, GeoPoint::new(35.9940, -78.89860000000001));
  }

  #[test]
  fn test_miles_ordering_and_sum() {
    assert!(Miles(1.0) < Miles(2.0));
    assert_eq!(
      vec![Miles(1.0), Miles(2.5)].into_iter().sum::<Miles>(),
      Miles(3.5)
    );
  }
}
