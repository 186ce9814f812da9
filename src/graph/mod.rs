//! In-memory graph operations: the contract, the adjacency-list
//! representation, its builder, and traversals.

pub mod adjacency_list;
pub mod builder;
pub mod contract;
pub mod traversal;
pub mod walk;

pub use adjacency_list::AdjacencyListGraph;
pub use builder::{graph, GraphBuilder, VertexScope};
pub use contract::Graph;
pub use traversal::{BreadthFirstTraversal, DepthFirstTraversal, Traversal};
pub use walk::{Walk, WalkOrder};
