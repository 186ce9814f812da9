//! Lazy vertex iteration over a graph.

use std::collections::{HashSet, VecDeque};

use serde::Serialize;

use crate::types::Vertex;

use super::Graph;

/// Order in which a walk visits vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WalkOrder {
    /// Level by level, FIFO frontier.
    #[default]
    BreadthFirst,
    /// Deepest first, LIFO frontier.
    DepthFirst,
}

impl WalkOrder {
    /// Short name used on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Self::BreadthFirst => "bfs",
            Self::DepthFirst => "dfs",
        }
    }

    /// Parse a walk order from its short or long name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "bfs" | "breadth_first" | "breadth-first" => Some(Self::BreadthFirst),
            "dfs" | "depth_first" | "depth-first" => Some(Self::DepthFirst),
            _ => None,
        }
    }
}

impl std::fmt::Display for WalkOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Iterator yielding each vertex reachable from a start vertex exactly once.
///
/// Breadth-first marks a vertex when it is discovered. Depth-first marks a
/// vertex when it is popped and skips neighbors that are already on the
/// stack, pushing the rest to the front in neighbor order.
pub struct Walk<'g, V, G> {
    graph: &'g G,
    order: WalkOrder,
    frontier: VecDeque<&'g Vertex<V>>,
    /// Discovered (BFS) or visited (DFS) vertex IDs.
    seen: HashSet<u64>,
    /// IDs currently on the DFS stack.
    queued: HashSet<u64>,
}

impl<'g, V, G> Walk<'g, V, G>
where
    V: PartialEq,
    G: Graph<V>,
{
    /// Start a walk at `start`. A `None` start yields nothing.
    pub fn new(graph: &'g G, start: Option<&'g Vertex<V>>, order: WalkOrder) -> Self {
        let mut walk = Self {
            graph,
            order,
            frontier: VecDeque::new(),
            seen: HashSet::new(),
            queued: HashSet::new(),
        };
        if let Some(start) = start {
            walk.frontier.push_back(start);
            match order {
                WalkOrder::BreadthFirst => walk.seen.insert(start.id()),
                WalkOrder::DepthFirst => walk.queued.insert(start.id()),
            };
        }
        walk
    }

    /// The order this walk follows.
    pub fn order(&self) -> WalkOrder {
        self.order
    }

    fn next_breadth_first(&mut self) -> Option<&'g Vertex<V>> {
        let graph = self.graph;
        let next = self.frontier.pop_front()?;
        for neighbor in graph.neighbors(next) {
            if self.seen.insert(neighbor.id()) {
                self.frontier.push_back(neighbor);
            }
        }
        Some(next)
    }

    fn next_depth_first(&mut self) -> Option<&'g Vertex<V>> {
        let graph = self.graph;
        while let Some(next) = self.frontier.pop_front() {
            self.queued.remove(&next.id());
            if !self.seen.insert(next.id()) {
                continue;
            }
            for neighbor in graph.neighbors(next) {
                let id = neighbor.id();
                if !self.seen.contains(&id) && !self.queued.contains(&id) {
                    self.queued.insert(id);
                    self.frontier.push_front(neighbor);
                }
            }
            return Some(next);
        }
        None
    }
}

impl<'g, V, G> Iterator for Walk<'g, V, G>
where
    V: PartialEq,
    G: Graph<V>,
{
    type Item = &'g Vertex<V>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.order {
            WalkOrder::BreadthFirst => self.next_breadth_first(),
            WalkOrder::DepthFirst => self.next_depth_first(),
        }
    }
}
