//! algokit: in-memory graphs with breadth-first and depth-first traversal.
//!
//! Graphs are assembled through [`GraphBuilder`], queried through the
//! [`Graph`] contract, and searched with [`BreadthFirstTraversal`] or
//! [`DepthFirstTraversal`]. The crate also carries the small tree, heap,
//! sorting and searching routines the graph tooling leans on.

pub mod cli;
pub mod collections;
pub mod graph;
pub mod search;
pub mod sort;
pub mod types;

// Re-export commonly used types at the crate root
pub use collections::{BinaryHeap, BinarySearchTree, Tree, TreeOrder};
pub use graph::{
    graph, AdjacencyListGraph, BreadthFirstTraversal, DepthFirstTraversal, Graph, GraphBuilder,
    Traversal, VertexScope, Walk, WalkOrder,
};
pub use search::{binary_search, linear_search};
pub use sort::SortAlgorithm;
pub use types::{AlgoError, AlgoResult, Edge, EdgeKey, EdgeOptions, UnorderedPair, Vertex};
