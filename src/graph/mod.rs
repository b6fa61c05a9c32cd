//! Weighted directed multigraphs.
//!
//! The graph is organized into:
//! - `edge`: edge triples and the weight bound
//! - `weighted`: the edge-list graph and its views
//! - `algorithms`: cycle detection and shortest paths
//! - `dot`: text diagram rendering

pub mod algorithms;
pub mod dot;
pub mod edge;
pub mod weighted;

pub use algorithms::Route;
pub use edge::{Edge, Weight};
pub use weighted::WeightedGraph;
