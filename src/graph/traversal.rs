//! Path-finding traversals (BFS, DFS) with parent-pointer unwinding.

use std::collections::{HashMap, HashSet, VecDeque};

use crate::types::Vertex;

use super::Graph;

/// A traversal method for a graph.
pub trait Traversal<'g, V: 'g> {
    /// Path from `start` to `destination`, both inclusive.
    ///
    /// With no destination, returns every vertex reachable from `start` in
    /// the order the traversal visited them. Returns an empty list if the
    /// destination is unreachable or either vertex is not in the graph.
    fn path(&self, start: &Vertex<V>, destination: Option<&Vertex<V>>) -> Vec<&'g Vertex<V>>;

    /// Every vertex reachable from `start`, in visit order.
    fn visit(&self, start: &Vertex<V>) -> Vec<&'g Vertex<V>> {
        self.path(start, None)
    }

    /// Path from `start` to `destination`, or empty if there is none.
    fn path_to(&self, start: &Vertex<V>, destination: &Vertex<V>) -> Vec<&'g Vertex<V>> {
        self.path(start, Some(destination))
    }
}

/// Breadth-first traversal. Paths are shortest in edge count.
pub struct BreadthFirstTraversal<'g, G> {
    graph: &'g G,
}

impl<'g, G> BreadthFirstTraversal<'g, G> {
    /// Create a traversal over `graph`.
    pub fn new(graph: &'g G) -> Self {
        Self { graph }
    }
}

/// Depth-first traversal.
///
/// A vertex counts as visited when popped. Neighbors that are neither
/// visited nor already on the stack are pushed to the front in neighbor
/// order, so the last neighbor is explored first.
pub struct DepthFirstTraversal<'g, G> {
    graph: &'g G,
}

impl<'g, G> DepthFirstTraversal<'g, G> {
    /// Create a traversal over `graph`.
    pub fn new(graph: &'g G) -> Self {
        Self { graph }
    }
}

/// Discovering predecessor of each reached vertex.
struct Parents<'g, V> {
    links: HashMap<u64, Option<&'g Vertex<V>>>,
}

impl<'g, V> Parents<'g, V> {
    fn new(start: &'g Vertex<V>) -> Self {
        let mut links = HashMap::new();
        links.insert(start.id(), None);
        Self { links }
    }

    fn contains(&self, vertex: &Vertex<V>) -> bool {
        self.links.contains_key(&vertex.id())
    }

    fn record(&mut self, vertex: &Vertex<V>, parent: &'g Vertex<V>) {
        self.links.insert(vertex.id(), Some(parent));
    }

    /// Follow parent links back from `destination` to the start.
    fn unwind(&self, destination: &'g Vertex<V>) -> Vec<&'g Vertex<V>> {
        let mut path = vec![destination];
        let mut previous = self.links.get(&destination.id()).copied().flatten();
        while let Some(vertex) = previous {
            path.push(vertex);
            previous = self.links.get(&vertex.id()).copied().flatten();
        }
        path.reverse();
        path
    }
}

/// Resolve `start` to the graph's own vertex, checking both endpoints are
/// members.
fn resolve_endpoints<'g, V, G>(
    graph: &'g G,
    start: &Vertex<V>,
    destination: Option<&Vertex<V>>,
) -> Option<&'g Vertex<V>>
where
    V: PartialEq,
    G: Graph<V>,
{
    if !graph.contains(start) {
        log::debug!("traversal start {} is not in the graph", start.id());
        return None;
    }
    if let Some(destination) = destination {
        if !graph.contains(destination) {
            log::debug!(
                "traversal destination {} is not in the graph",
                destination.id()
            );
            return None;
        }
    }
    graph.vertex(start.id())
}

impl<'g, V, G> Traversal<'g, V> for BreadthFirstTraversal<'g, G>
where
    V: PartialEq + 'g,
    G: Graph<V>,
{
    fn path(&self, start: &Vertex<V>, destination: Option<&Vertex<V>>) -> Vec<&'g Vertex<V>> {
        let graph = self.graph;
        let Some(start) = resolve_endpoints(graph, start, destination) else {
            return Vec::new();
        };

        let mut parents = Parents::new(start);
        let mut discovered = vec![start];
        let mut queue = VecDeque::from([start]);

        while let Some(next) = queue.pop_front() {
            if destination.is_some_and(|d| d == next) {
                let path = parents.unwind(next);
                log::debug!(
                    "bfs reached {} from {} in {} steps",
                    next.id(),
                    start.id(),
                    path.len() - 1
                );
                return path;
            }

            for neighbor in graph.neighbors(next) {
                if !parents.contains(neighbor) {
                    parents.record(neighbor, next);
                    discovered.push(neighbor);
                    queue.push_back(neighbor);
                }
            }
        }

        match destination {
            Some(destination) => {
                log::debug!(
                    "bfs exhausted {} vertices without reaching {}",
                    discovered.len(),
                    destination.id()
                );
                Vec::new()
            }
            None => discovered,
        }
    }
}

impl<'g, V, G> Traversal<'g, V> for DepthFirstTraversal<'g, G>
where
    V: PartialEq + 'g,
    G: Graph<V>,
{
    fn path(&self, start: &Vertex<V>, destination: Option<&Vertex<V>>) -> Vec<&'g Vertex<V>> {
        let graph = self.graph;
        let Some(start) = resolve_endpoints(graph, start, destination) else {
            return Vec::new();
        };

        let mut parents = Parents::new(start);
        let mut stack = VecDeque::from([start]);
        let mut on_stack: HashSet<u64> = HashSet::from([start.id()]);
        let mut visited: HashSet<u64> = HashSet::new();
        let mut order = Vec::new();

        while let Some(next) = stack.pop_front() {
            on_stack.remove(&next.id());
            if destination.is_some_and(|d| d == next) {
                let path = parents.unwind(next);
                log::debug!(
                    "dfs reached {} from {} after visiting {} vertices",
                    next.id(),
                    start.id(),
                    order.len()
                );
                return path;
            }

            if !visited.insert(next.id()) {
                continue;
            }
            order.push(next);

            for neighbor in graph.neighbors(next) {
                let id = neighbor.id();
                if !visited.contains(&id) && !on_stack.contains(&id) {
                    stack.push_front(neighbor);
                    on_stack.insert(id);
                    parents.record(neighbor, next);
                }
            }
        }

        match destination {
            Some(destination) => {
                log::debug!(
                    "dfs exhausted {} vertices without reaching {}",
                    order.len(),
                    destination.id()
                );
                Vec::new()
            }
            None => order,
        }
    }
}
