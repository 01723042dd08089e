//! Error types surfaced by graph construction and routing.

use thiserror::Error;

/// Malformed or inconsistent graph description.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum FormatError {
  #[error("missing or malformed header line, expected vertex and edge counts")]
  Header,
  #[error("line {line}: expected a number, found {token:?}")]
  InvalidNumber { line: usize, token: String },
  #[error("line {line}: incomplete record")]
  IncompleteRecord { line: usize },
  #[error("declared {declared} vertices but found {found} records")]
  VertexCount { declared: usize, found: usize },
  #[error("declared {declared} edges but found {found} records")]
  EdgeCount { declared: usize, found: usize },
  #[error("edge endpoint {index} is out of range for {vertices} vertices")]
  EdgeOutOfRange { index: usize, vertices: usize },
}

/// No usable route between the requested endpoints.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RouteError {
  #[error("start and end are the same point")]
  IdenticalEndpoints,
  #[error("no path connects start and end")]
  NoPath,
}
