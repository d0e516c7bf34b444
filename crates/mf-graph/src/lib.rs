//! mf-graph: graph/model layer for maxflow.
//!
//! Provides:
//! - Core graph data structures (Node, Edge, FlowNetwork, Terminals)
//! - Incremental network builder with structural validation
//! - Label and endpoint-pair lookup for O(1) access by name
//!
//! # Example
//!
//! ```
//! use mf_graph::NetworkBuilder;
//!
//! let mut builder = NetworkBuilder::new();
//! builder.add_node("A").unwrap();
//! builder.add_node("B").unwrap();
//! builder.add_edge("A", "B", 10.0).unwrap();
//! let network = builder.build().unwrap();
//! let terminals = network.validate("A", "B").unwrap();
//!
//! assert_eq!(network.nodes().len(), 2);
//! assert_eq!(network.outgoing(terminals.source()).len(), 1);
//! ```

pub mod builder;
pub mod error;
pub mod graph;
pub mod indexing;
pub(crate) mod validate;

// Re-exports for ergonomics
pub use builder::{DuplicateEdgePolicy, NetworkBuilder};
pub use error::{GraphError, GraphResult, TerminalIssue};
pub use graph::{Edge, FlowNetwork, Node, Terminals};
pub use indexing::LabelIndex;
