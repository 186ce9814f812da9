//! Fluent API for building AdjacencyListGraph instances.

use crate::types::{AlgoError, AlgoResult, Edge, EdgeOptions, Vertex};

use super::AdjacencyListGraph;

/// A vertex about to be registered, handed to vertex initializers.
#[derive(Debug)]
pub struct VertexScope<V> {
    id: u64,
    value: V,
}

impl<V> VertexScope<V> {
    /// The ID the vertex will be registered under.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// The pending value.
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Replace the pending value.
    pub fn set_value(&mut self, value: V) -> &mut Self {
        self.value = value;
        self
    }
}

/// Fluent builder for constructing an AdjacencyListGraph.
///
/// Vertex IDs are assigned in insertion order starting at 0. Edges may
/// only connect vertices that were registered first.
pub struct GraphBuilder<V> {
    graph: AdjacencyListGraph<V>,
    next_id: u64,
}

impl<V> GraphBuilder<V> {
    /// Create a new, empty builder.
    pub fn new() -> Self {
        Self {
            graph: AdjacencyListGraph::new(),
            next_id: 0,
        }
    }

    /// Add a vertex, returning its ID.
    ///
    /// Fails once the generated IDs would pass `u64::MAX`.
    pub fn vertex(&mut self, value: V) -> AlgoResult<u64> {
        self.vertex_with(value, |_| {})
    }

    /// Add a vertex, letting `init` adjust it before registration.
    pub fn vertex_with<F>(&mut self, value: V, init: F) -> AlgoResult<u64>
    where
        F: FnOnce(&mut VertexScope<V>),
    {
        let id = self.next_id;
        let next_id = id.checked_add(1).ok_or(AlgoError::IdOverflow(id))?;

        let mut scope = VertexScope { id, value };
        init(&mut scope);

        if !self.graph.insert_vertex(Vertex::new(id, scope.value)) {
            return Err(AlgoError::DuplicateVertexId(id));
        }
        self.next_id = next_id;
        log::trace!("registered vertex {}", id);
        Ok(id)
    }

    /// Register a copy of an existing vertex under its own ID.
    ///
    /// Fails if the ID is already in use, or is `u64::MAX` so that no later
    /// ID could follow it. Later generated IDs continue past the largest ID
    /// seen.
    pub fn vertex_from(&mut self, vertex: &Vertex<V>) -> AlgoResult<u64>
    where
        V: Clone,
    {
        self.vertex_from_with(vertex, |_| {})
    }

    /// Register a copy of an existing vertex, letting `init` adjust it.
    pub fn vertex_from_with<F>(&mut self, vertex: &Vertex<V>, init: F) -> AlgoResult<u64>
    where
        V: Clone,
        F: FnOnce(&mut VertexScope<V>),
    {
        let id = vertex.id();
        let next_id = id.checked_add(1).ok_or(AlgoError::IdOverflow(id))?;
        if self.graph.has_id(id) {
            return Err(AlgoError::DuplicateVertexId(id));
        }

        let mut scope = VertexScope {
            id,
            value: vertex.value().clone(),
        };
        init(&mut scope);

        if !self.graph.insert_vertex(Vertex::new(id, scope.value)) {
            return Err(AlgoError::DuplicateVertexId(id));
        }
        self.next_id = self.next_id.max(next_id);
        log::trace!("registered copied vertex {}", id);
        Ok(id)
    }

    /// Add an undirected, unweighted edge between two vertex IDs.
    pub fn edge(&mut self, source_id: u64, destination_id: u64) -> AlgoResult<Edge> {
        self.edge_with(source_id, destination_id, |_| {})
    }

    /// Add an edge between two vertex IDs, letting `init` set direction and
    /// weight.
    pub fn edge_with<F>(&mut self, source_id: u64, destination_id: u64, init: F) -> AlgoResult<Edge>
    where
        F: FnOnce(&mut EdgeOptions),
    {
        if !self.graph.has_id(source_id) {
            return Err(AlgoError::VertexNotFound(source_id));
        }
        if !self.graph.has_id(destination_id) {
            return Err(AlgoError::VertexNotFound(destination_id));
        }

        let mut options = EdgeOptions::new();
        init(&mut options);

        let edge = Edge::with_options(source_id, destination_id, options);
        if self.graph.insert_edge(edge) {
            log::trace!("registered edge {}", edge);
        } else {
            log::debug!("edge {} already registered", edge);
        }
        Ok(edge)
    }

    /// Add an undirected, unweighted edge between the first vertices
    /// carrying the given values.
    pub fn edge_between(&mut self, source: &V, destination: &V) -> AlgoResult<Edge>
    where
        V: PartialEq,
    {
        self.edge_between_with(source, destination, |_| {})
    }

    /// Add an edge between the first vertices carrying the given values,
    /// letting `init` set direction and weight.
    pub fn edge_between_with<F>(&mut self, source: &V, destination: &V, init: F) -> AlgoResult<Edge>
    where
        V: PartialEq,
        F: FnOnce(&mut EdgeOptions),
    {
        let source_id = self.id_of(source)?;
        let destination_id = self.id_of(destination)?;
        self.edge_with(source_id, destination_id, init)
    }

    /// Number of vertices registered so far.
    pub fn vertex_count(&self) -> usize {
        self.graph.vertices().len()
    }

    /// Look up a registered vertex by ID.
    pub fn get_vertex(&self, id: u64) -> Option<&Vertex<V>> {
        self.graph.vertex_by_id(id)
    }

    /// Build the final AdjacencyListGraph.
    pub fn build(self) -> AdjacencyListGraph<V> {
        log::debug!(
            "built graph with {} vertices and {} edges",
            self.graph.vertices().len(),
            self.graph.edge_count()
        );
        self.graph
    }

    fn id_of(&self, value: &V) -> AlgoResult<u64>
    where
        V: PartialEq,
    {
        self.graph
            .find_value(value)
            .map(|v| v.id())
            .ok_or(AlgoError::ValueNotFound)
    }
}

impl<V> Default for GraphBuilder<V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Build a graph by running `init` against a fresh builder.
///
/// ```
/// use algokit::graph::{graph, Graph};
///
/// let g = graph(|b| {
///     b.vertex("a")?;
///     b.vertex("b")?;
///     b.edge_between(&"a", &"b")?;
///     Ok(())
/// })
/// .unwrap();
/// assert_eq!(g.size(), 2);
/// ```
pub fn graph<V, F>(init: F) -> AlgoResult<AdjacencyListGraph<V>>
where
    F: FnOnce(&mut GraphBuilder<V>) -> AlgoResult<()>,
{
    let mut builder = GraphBuilder::new();
    init(&mut builder)?;
    Ok(builder.build())
}
