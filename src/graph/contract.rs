//! The operations every graph representation supports.

use crate::types::{Edge, Vertex};

use super::walk::{Walk, WalkOrder};

/// Read-only graph contract.
///
/// Queries are total: unknown vertices produce `false`, `None` or an empty
/// list rather than an error.
pub trait Graph<V: PartialEq> {
    /// True if an edge leads from `first` to `second`.
    ///
    /// Undirected edges answer in either order; directed edges only in the
    /// direction they were added.
    fn adjacent(&self, first: &Vertex<V>, second: &Vertex<V>) -> bool {
        self.edge(first, second).is_some()
    }

    /// The edge leading from `from` to `to`, if any.
    fn edge(&self, from: &Vertex<V>, to: &Vertex<V>) -> Option<&Edge>;

    /// Vertices reachable over a single edge from `vertex`, in edge
    /// insertion order without duplicates.
    fn neighbors(&self, vertex: &Vertex<V>) -> Vec<&Vertex<V>>;

    /// The first vertex added to this graph.
    fn root(&self) -> Option<&Vertex<V>>;

    /// Number of vertices.
    fn size(&self) -> usize;

    /// A new graph restricted to `vertices` and the edges between them.
    ///
    /// Vertices not present in this graph are ignored.
    fn subgraph(&self, vertices: &[Vertex<V>]) -> Self
    where
        Self: Sized;

    /// Look up a vertex by ID.
    fn vertex(&self, id: u64) -> Option<&Vertex<V>>;

    /// True if this exact vertex (ID and value) belongs to this graph.
    fn contains(&self, vertex: &Vertex<V>) -> bool {
        self.vertex(vertex.id()).is_some_and(|v| v == vertex)
    }

    /// Breadth-first walk from the root.
    fn iter(&self) -> Walk<'_, V, Self>
    where
        Self: Sized,
    {
        self.walk(WalkOrder::BreadthFirst)
    }

    /// Walk from the root in the given order.
    fn walk(&self, order: WalkOrder) -> Walk<'_, V, Self>
    where
        Self: Sized,
    {
        Walk::new(self, self.root(), order)
    }
}
