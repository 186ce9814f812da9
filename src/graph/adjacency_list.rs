//! Adjacency-list graph: vertices plus the edges incident to each of them.

use std::collections::{HashMap, HashSet};

use crate::types::{Edge, Vertex};

use super::walk::{Walk, WalkOrder};
use super::Graph;

/// Graph storing, per vertex, the set of edges incident to it.
///
/// Vertices and edges live in insertion-ordered tables keyed by vertex ID.
/// Every edge in the global edge list also appears in the incidence list
/// of both of its endpoints. Instances are immutable once built; use
/// [`GraphBuilder`](super::GraphBuilder) to create one.
#[derive(Debug, Clone)]
pub struct AdjacencyListGraph<V> {
    /// All vertices, in insertion order.
    vertices: Vec<Vertex<V>>,
    /// Vertex ID -> position in `vertices`.
    slots: HashMap<u64, usize>,
    /// Vertex ID -> incident edges, in insertion order.
    incidence: HashMap<u64, Vec<Edge>>,
    /// All edges, in insertion order.
    edges: Vec<Edge>,
    /// Membership index over `edges`.
    edge_set: HashSet<Edge>,
}

impl<V> AdjacencyListGraph<V> {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            slots: HashMap::new(),
            incidence: HashMap::new(),
            edges: Vec::new(),
            edge_set: HashSet::new(),
        }
    }

    /// Register a vertex. Returns false if its ID is already taken.
    pub(crate) fn insert_vertex(&mut self, vertex: Vertex<V>) -> bool {
        let id = vertex.id();
        if self.slots.contains_key(&id) {
            return false;
        }
        self.slots.insert(id, self.vertices.len());
        self.incidence.insert(id, Vec::new());
        self.vertices.push(vertex);
        true
    }

    /// Register an edge between two registered vertices.
    ///
    /// Returns false if an equal edge is already present or an endpoint is
    /// missing.
    pub(crate) fn insert_edge(&mut self, edge: Edge) -> bool {
        if !self.slots.contains_key(&edge.source()) || !self.slots.contains_key(&edge.destination())
        {
            return false;
        }
        if !self.edge_set.insert(edge) {
            return false;
        }
        self.edges.push(edge);
        if let Some(list) = self.incidence.get_mut(&edge.source()) {
            list.push(edge);
        }
        // Self-loops are listed once.
        if edge.destination() != edge.source() {
            if let Some(list) = self.incidence.get_mut(&edge.destination()) {
                list.push(edge);
            }
        }
        true
    }

    /// Whether a vertex with this ID is registered.
    pub(crate) fn has_id(&self, id: u64) -> bool {
        self.slots.contains_key(&id)
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// True if the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// All vertices, in insertion order.
    pub fn vertices(&self) -> &[Vertex<V>] {
        &self.vertices
    }

    /// All edges, in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Edges incident to the vertex with this ID (both directions).
    pub fn incident_edges(&self, id: u64) -> &[Edge] {
        self.incidence.get(&id).map(|v| v.as_slice()).unwrap_or(&[])
    }

    /// First vertex, in insertion order, matching the predicate.
    pub fn find<P>(&self, mut predicate: P) -> Option<&Vertex<V>>
    where
        P: FnMut(&Vertex<V>) -> bool,
    {
        self.vertices.iter().find(|v| predicate(*v))
    }

    /// First vertex, in insertion order, carrying this value.
    pub fn find_value(&self, value: &V) -> Option<&Vertex<V>>
    where
        V: PartialEq,
    {
        self.find(|v| v.value() == value)
    }

    pub(crate) fn vertex_by_id(&self, id: u64) -> Option<&Vertex<V>> {
        self.slots.get(&id).map(|&slot| &self.vertices[slot])
    }

    fn is_member(&self, vertex: &Vertex<V>) -> bool
    where
        V: PartialEq,
    {
        self.vertex_by_id(vertex.id()).is_some_and(|v| v == vertex)
    }
}

impl<V> Default for AdjacencyListGraph<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: PartialEq + Clone> Graph<V> for AdjacencyListGraph<V> {
    fn edge(&self, from: &Vertex<V>, to: &Vertex<V>) -> Option<&Edge> {
        if !self.is_member(from) || !self.is_member(to) {
            return None;
        }
        self.incident_edges(from.id())
            .iter()
            .find(|e| e.connects(from.id(), to.id()))
    }

    fn neighbors(&self, vertex: &Vertex<V>) -> Vec<&Vertex<V>> {
        if !self.is_member(vertex) {
            return Vec::new();
        }
        let mut seen: HashSet<u64> = HashSet::new();
        self.incident_edges(vertex.id())
            .iter()
            .filter_map(|e| e.opposite(vertex.id()))
            .filter(|id| seen.insert(*id))
            .filter_map(|id| self.vertex_by_id(id))
            .collect()
    }

    fn root(&self) -> Option<&Vertex<V>> {
        self.vertices.first()
    }

    fn size(&self) -> usize {
        self.vertices.len()
    }

    fn subgraph(&self, vertices: &[Vertex<V>]) -> Self {
        let selected: HashSet<u64> = vertices
            .iter()
            .filter(|v| self.is_member(v))
            .map(|v| v.id())
            .collect();

        let mut graph = Self::new();
        for vertex in self.vertices.iter().filter(|v| selected.contains(&v.id())) {
            graph.insert_vertex(vertex.clone());
        }
        for edge in &self.edges {
            if selected.contains(&edge.source()) && selected.contains(&edge.destination()) {
                graph.insert_edge(*edge);
            }
        }

        log::debug!(
            "subgraph: kept {} of {} vertices, {} of {} edges ({} requested)",
            graph.size(),
            self.size(),
            graph.edge_count(),
            self.edge_count(),
            vertices.len()
        );
        graph
    }

    fn vertex(&self, id: u64) -> Option<&Vertex<V>> {
        self.vertex_by_id(id)
    }
}

impl<'g, V: PartialEq + Clone> IntoIterator for &'g AdjacencyListGraph<V> {
    type Item = &'g Vertex<V>;
    type IntoIter = Walk<'g, V, AdjacencyListGraph<V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.walk(WalkOrder::BreadthFirst)
    }
}
