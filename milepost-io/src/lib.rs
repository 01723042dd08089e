mod graph_file;

pub use graph_file::{read_graph, read_graph_file, LoadError};
