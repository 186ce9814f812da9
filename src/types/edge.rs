//! The core edge struct and its construction options.

use std::hash::{Hash, Hasher};

use serde::Serialize;

use super::UnorderedPair;

/// Configuration applied to an edge before it is registered.
///
/// Passed as `&mut` to edge initializer callbacks on the graph builder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EdgeOptions {
    directed: bool,
    weight: i64,
}

impl EdgeOptions {
    /// Default options: undirected, weight 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the edge as directed (source -> destination only).
    pub fn directed(&mut self) -> &mut Self {
        self.directed = true;
        self
    }

    /// Set the edge weight.
    pub fn weight(&mut self, weight: i64) -> &mut Self {
        self.weight = weight;
        self
    }
}

/// Normalized identity of an edge's endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeKey {
    /// Ordered (source, destination).
    Directed(u64, u64),
    /// Either order.
    Undirected(UnorderedPair<u64>),
}

/// A relationship between two vertices, referenced by id.
///
/// Undirected edges compare and hash equal regardless of endpoint order.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Edge {
    source: u64,
    destination: u64,
    directed: bool,
    weight: i64,
}

impl Edge {
    /// Create an undirected edge with weight 0.
    pub fn new(source: u64, destination: u64) -> Self {
        Self::with_options(source, destination, EdgeOptions::default())
    }

    /// Create an edge with explicit options.
    pub fn with_options(source: u64, destination: u64, options: EdgeOptions) -> Self {
        Self {
            source,
            destination,
            directed: options.directed,
            weight: options.weight,
        }
    }

    /// Source vertex ID.
    pub fn source(&self) -> u64 {
        self.source
    }

    /// Destination vertex ID.
    pub fn destination(&self) -> u64 {
        self.destination
    }

    /// True if this edge only leads from source to destination.
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Edge weight.
    pub fn weight(&self) -> i64 {
        self.weight
    }

    /// The normalized endpoint key used for equality and hashing.
    pub fn key(&self) -> EdgeKey {
        if self.directed {
            EdgeKey::Directed(self.source, self.destination)
        } else {
            EdgeKey::Undirected(UnorderedPair::new(self.source, self.destination))
        }
    }

    /// Whether this edge leads from `from` to `to`.
    ///
    /// Undirected edges match in either order.
    pub fn connects(&self, from: u64, to: u64) -> bool {
        if self.directed {
            self.source == from && self.destination == to
        } else {
            UnorderedPair::new(self.source, self.destination) == UnorderedPair::new(from, to)
        }
    }

    /// Whether `vertex` is one of this edge's endpoints.
    pub fn touches(&self, vertex: u64) -> bool {
        self.source == vertex || self.destination == vertex
    }

    /// The endpoint reached by following this edge away from `vertex`.
    ///
    /// Directed edges can only be followed from their source.
    pub fn opposite(&self, vertex: u64) -> Option<u64> {
        if self.source == vertex {
            Some(self.destination)
        } else if !self.directed && self.destination == vertex {
            Some(self.source)
        } else {
            None
        }
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key() && self.directed == other.directed && self.weight == other.weight
    }
}

impl Eq for Edge {}

impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
        self.directed.hash(state);
        self.weight.hash(state);
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let arrow = if self.directed { "->" } else { "--" };
        write!(f, "{} {} {}", self.source, arrow, self.destination)?;
        if self.weight != 0 {
            write!(f, " ({})", self.weight)?;
        }
        Ok(())
    }
}
