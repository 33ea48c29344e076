//! Graph database integration.

mod falkor_graph;

pub use falkor_graph::FalkorGraph;
