//! The vertex struct: an id-bearing value holder.

use serde::Serialize;

/// A single vertex of a graph.
///
/// Identity is the pair of `id` and `value`: two vertices are equal only if
/// both match. Ids are assigned by the graph builder and never change.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Vertex<V> {
    id: u64,
    value: V,
}

impl<V> Vertex<V> {
    /// Create a new vertex.
    pub fn new(id: u64, value: V) -> Self {
        Self { id, value }
    }

    /// Unique identifier within the owning graph.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// The value carried by this vertex.
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Consume the vertex, returning its value.
    pub fn into_value(self) -> V {
        self.value
    }
}

impl<V: std::fmt::Display> std::fmt::Display for Vertex<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}
