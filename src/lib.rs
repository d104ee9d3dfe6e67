//! Viewpoint detection for directed graphs.
//!
//! A viewpoint is a vertex from which every vertex of the graph is reachable.
//! The search decomposes the graph into strongly connected components,
//! condenses them into a DAG, and accepts the root of the unique source
//! component if it reaches the whole graph.

pub mod algorithms;
pub mod config;
pub mod error;
pub mod generator;
pub mod loader;
pub mod types;

pub use algorithms::viewpoint::{find_viewpoint, ViewpointFinder, ViewpointOutcome};
pub use error::{GraphError, LoadError};
pub use types::graph_query::GraphQuery;
pub use types::{CondensationGraph, DiGraph};
