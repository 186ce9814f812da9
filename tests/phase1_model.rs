//! Phase 1 tests: vertices, edges, pairs, the builder and the adjacency-list graph.

use std::collections::hash_map::DefaultHasher;
use std::collections::HashSet;
use std::hash::{Hash, Hasher};

use algokit::graph::{graph, AdjacencyListGraph, Graph, GraphBuilder, WalkOrder};
use algokit::types::{AlgoError, Edge, EdgeKey, EdgeOptions, UnorderedPair, Vertex};

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

fn directed(source: u64, destination: u64) -> Edge {
    let mut options = EdgeOptions::new();
    options.directed();
    Edge::with_options(source, destination, options)
}

/// Vertices 1..=7 with undirected edges (1,2)(1,3)(1,4)(2,5)(2,6)(3,7)(4,6).
fn seven_vertex_graph() -> AdjacencyListGraph<i32> {
    graph(|b| {
        for value in 1..=7 {
            b.vertex(value)?;
        }
        for (s, d) in [(1, 2), (1, 3), (1, 4), (2, 5), (2, 6), (3, 7), (4, 6)] {
            b.edge_between(&s, &d)?;
        }
        Ok(())
    })
    .unwrap()
}

fn values(vertices: &[&Vertex<i32>]) -> Vec<i32> {
    vertices.iter().map(|v| *v.value()).collect()
}

// ==================== Vertex Tests ====================

#[test]
fn test_vertex_equality_uses_id_and_value() {
    let a = Vertex::new(0, "a");
    assert_eq!(a, Vertex::new(0, "a"));
    assert_ne!(a, Vertex::new(1, "a"));
    assert_ne!(a, Vertex::new(0, "b"));
    assert_eq!(hash_of(&a), hash_of(&Vertex::new(0, "a")));
}

#[test]
fn test_vertex_accessors() {
    let v = Vertex::new(7, String::from("seven"));
    assert_eq!(v.id(), 7);
    assert_eq!(v.value(), "seven");
    assert_eq!(v.to_string(), "seven");
    assert_eq!(v.into_value(), "seven");
}

// ==================== UnorderedPair Tests ====================

#[test]
fn test_unordered_pair_equality_either_order() {
    let ab = UnorderedPair::new("a", "b");
    let ba = UnorderedPair::new("b", "a");
    assert_eq!(ab, ba);
    assert_eq!(hash_of(&ab), hash_of(&ba));
    assert_ne!(ab, UnorderedPair::new("a", "c"));
}

#[test]
fn test_unordered_pair_members() {
    let pair = UnorderedPair::new(3, 9);
    assert_eq!(*pair.first(), 3);
    assert_eq!(*pair.second(), 9);
    assert!(pair.contains(&9));
    assert!(!pair.contains(&4));
    assert_eq!(pair.to_string(), "(3, 9)");
}

#[test]
fn test_unordered_pair_in_hash_set() {
    let mut set = HashSet::new();
    set.insert(UnorderedPair::new(1, 2));
    assert!(!set.insert(UnorderedPair::new(2, 1)));
    assert_eq!(set.len(), 1);
}

// ==================== Edge Tests ====================

#[test]
fn test_edge_defaults() {
    let edge = Edge::new(0, 1);
    assert_eq!(edge.source(), 0);
    assert_eq!(edge.destination(), 1);
    assert!(!edge.is_directed());
    assert_eq!(edge.weight(), 0);
}

#[test]
fn test_undirected_edges_equal_when_swapped() {
    let forward = Edge::new(1, 2);
    let backward = Edge::new(2, 1);
    assert_eq!(forward, backward);
    assert_eq!(hash_of(&forward), hash_of(&backward));
    assert_eq!(forward.key(), EdgeKey::Undirected(UnorderedPair::new(2, 1)));
}

#[test]
fn test_directed_edges_differ_when_swapped() {
    let forward = directed(1, 2);
    let backward = directed(2, 1);
    assert_ne!(forward, backward);
    assert_eq!(forward.key(), EdgeKey::Directed(1, 2));
}

#[test]
fn test_edge_equality_includes_direction_and_weight() {
    let mut heavy = EdgeOptions::new();
    heavy.weight(5);
    assert_ne!(Edge::new(1, 2), Edge::with_options(1, 2, heavy));
    assert_ne!(Edge::new(1, 2), directed(1, 2));
    assert_eq!(
        Edge::with_options(1, 2, heavy),
        Edge::with_options(2, 1, heavy)
    );
}

#[test]
fn test_edge_connects_and_opposite() {
    let undirected = Edge::new(1, 2);
    assert!(undirected.connects(1, 2));
    assert!(undirected.connects(2, 1));
    assert_eq!(undirected.opposite(1), Some(2));
    assert_eq!(undirected.opposite(2), Some(1));
    assert_eq!(undirected.opposite(3), None);

    let arrow = directed(1, 2);
    assert!(arrow.connects(1, 2));
    assert!(!arrow.connects(2, 1));
    assert_eq!(arrow.opposite(1), Some(2));
    assert_eq!(arrow.opposite(2), None);
    assert!(arrow.touches(2));
}

#[test]
fn test_edge_display() {
    assert_eq!(Edge::new(0, 1).to_string(), "0 -- 1");
    let mut options = EdgeOptions::new();
    options.directed().weight(4);
    assert_eq!(Edge::with_options(0, 1, options).to_string(), "0 -> 1 (4)");
}

// ==================== Builder Tests ====================

#[test]
fn test_builder_assigns_sequential_ids() {
    let mut builder = GraphBuilder::new();
    assert_eq!(builder.vertex("a"), Ok(0));
    assert_eq!(builder.vertex("b"), Ok(1));
    assert_eq!(builder.vertex("c"), Ok(2));
    assert_eq!(builder.vertex_count(), 3);
    assert_eq!(builder.get_vertex(1), Some(&Vertex::new(1, "b")));
}

#[test]
fn test_builder_vertex_initializer() {
    let mut builder = GraphBuilder::new();
    let id = builder.vertex_with(String::from("draft"), |scope| {
        assert_eq!(scope.id(), 0);
        assert_eq!(scope.value(), "draft");
        scope.set_value(format!("vertex-{}", scope.id()));
    })
    .unwrap();
    let g = builder.build();
    assert_eq!(g.vertex(id).unwrap().value(), "vertex-0");
}

#[test]
fn test_builder_edge_initializer() {
    let mut builder = GraphBuilder::new();
    let a = builder.vertex("a").unwrap();
    let b = builder.vertex("b").unwrap();
    let edge = builder
        .edge_with(a, b, |options| {
            options.directed().weight(3);
        })
        .unwrap();
    assert!(edge.is_directed());
    assert_eq!(edge.weight(), 3);

    let g = builder.build();
    assert_eq!(g.edges(), &[edge]);
}

#[test]
fn test_builder_edge_unknown_id() {
    let mut builder = GraphBuilder::new();
    builder.vertex("a").unwrap();
    assert_eq!(builder.edge(0, 5), Err(AlgoError::VertexNotFound(5)));
    assert_eq!(builder.edge(9, 0), Err(AlgoError::VertexNotFound(9)));
}

#[test]
fn test_builder_edge_unknown_value() {
    let mut builder = GraphBuilder::new();
    builder.vertex("a").unwrap();
    assert_eq!(
        builder.edge_between(&"a", &"missing"),
        Err(AlgoError::ValueNotFound)
    );
}

#[test]
fn test_builder_duplicate_edge_not_repeated() {
    let g = graph(|b| {
        b.vertex("a")?;
        b.vertex("b")?;
        b.edge_between(&"a", &"b")?;
        b.edge_between(&"b", &"a")?;
        Ok(())
    })
    .unwrap();
    assert_eq!(g.edge_count(), 1);
    assert_eq!(g.incident_edges(0).len(), 1);
    assert_eq!(g.incident_edges(1).len(), 1);
}

#[test]
fn test_builder_vertex_from_keeps_id() {
    let mut builder = GraphBuilder::new();
    let id = builder.vertex_from(&Vertex::new(10, "ten")).unwrap();
    assert_eq!(id, 10);
    // Generated IDs continue past imported ones.
    assert_eq!(builder.vertex("next"), Ok(11));
}

#[test]
fn test_builder_vertex_from_duplicate_id() {
    let mut builder = GraphBuilder::new();
    builder.vertex("a").unwrap();
    assert_eq!(
        builder.vertex_from(&Vertex::new(0, "other")),
        Err(AlgoError::DuplicateVertexId(0))
    );
    assert_eq!(builder.vertex_count(), 1);
}

#[test]
fn test_builder_vertex_from_max_id() {
    let mut builder = GraphBuilder::new();
    builder.vertex("a").unwrap();
    assert_eq!(
        builder.vertex_from(&Vertex::new(u64::MAX, "last")),
        Err(AlgoError::IdOverflow(u64::MAX))
    );
    assert_eq!(builder.vertex_count(), 1);
    assert_eq!(builder.get_vertex(u64::MAX), None);
    // The failed import does not disturb generated IDs.
    assert_eq!(builder.vertex("b"), Ok(1));
}

#[test]
fn test_builder_generated_ids_never_wrap() {
    let mut builder = GraphBuilder::new();
    let id = builder.vertex_from(&Vertex::new(u64::MAX - 1, "near")).unwrap();
    assert_eq!(id, u64::MAX - 1);
    assert_eq!(builder.vertex("x"), Err(AlgoError::IdOverflow(u64::MAX)));
    assert_eq!(builder.vertex("y"), Err(AlgoError::IdOverflow(u64::MAX)));
    assert_eq!(builder.vertex_count(), 1);
    assert_eq!(builder.get_vertex(0), None);

    let g = builder.build();
    assert_eq!(g.size(), 1);
    assert_eq!(g.vertex(u64::MAX - 1).unwrap().value(), &"near");
}

#[test]
fn test_graph_helper_propagates_errors() {
    let result = graph(|b| {
        b.vertex(1)?;
        b.edge(0, 1)?;
        Ok(())
    });
    assert_eq!(result.unwrap_err(), AlgoError::VertexNotFound(1));
}

// ==================== Graph Query Tests ====================

#[test]
fn test_empty_graph() {
    let g: AdjacencyListGraph<i32> = GraphBuilder::new().build();
    assert!(g.is_empty());
    assert_eq!(g.size(), 0);
    assert!(g.root().is_none());
    assert_eq!(g.iter().count(), 0);
}

#[test]
fn test_root_is_first_vertex() {
    let g = seven_vertex_graph();
    assert_eq!(g.root(), Some(&Vertex::new(0, 1)));
    assert_eq!(g.size(), 7);
    assert_eq!(g.edge_count(), 7);
}

#[test]
fn test_adjacent_undirected_is_symmetric() {
    let g = seven_vertex_graph();
    let one = g.find_value(&1).unwrap();
    let two = g.find_value(&2).unwrap();
    let five = g.find_value(&5).unwrap();
    assert!(g.adjacent(one, two));
    assert!(g.adjacent(two, one));
    assert!(!g.adjacent(one, five));
    assert!(!g.adjacent(five, one));
}

#[test]
fn test_adjacent_directed_is_one_way() {
    let g = graph(|b| {
        b.vertex("a")?;
        b.vertex("b")?;
        b.edge_between_with(&"a", &"b", |o| {
            o.directed();
        })?;
        Ok(())
    })
    .unwrap();
    let a = g.vertex(0).unwrap();
    let b = g.vertex(1).unwrap();
    assert!(g.adjacent(a, b));
    assert!(!g.adjacent(b, a));
    assert!(g.edge(b, a).is_none());
    assert_eq!(g.edge(a, b).map(|e| e.source()), Some(0));
}

#[test]
fn test_adjacent_unknown_vertex() {
    let g = seven_vertex_graph();
    let one = g.vertex(0).unwrap();
    let stranger = Vertex::new(100, 1);
    assert!(!g.adjacent(one, &stranger));
    assert!(!g.adjacent(&stranger, one));
    // Same id, different value.
    assert!(!g.adjacent(&Vertex::new(0, 99), g.vertex(1).unwrap()));
}

#[test]
fn test_neighbors_in_insertion_order() {
    let g = seven_vertex_graph();
    let one = g.find_value(&1).unwrap();
    let six = g.find_value(&6).unwrap();
    assert_eq!(values(&g.neighbors(one)), vec![2, 3, 4]);
    assert_eq!(values(&g.neighbors(six)), vec![2, 4]);
}

#[test]
fn test_neighbors_deduplicated() {
    let g = graph(|b| {
        b.vertex("a")?;
        b.vertex("b")?;
        b.edge(0, 1)?;
        b.edge_with(0, 1, |o| {
            o.weight(2);
        })?;
        Ok(())
    })
    .unwrap();
    assert_eq!(g.edge_count(), 2);
    assert_eq!(g.neighbors(g.vertex(0).unwrap()).len(), 1);
}

#[test]
fn test_neighbors_skip_incoming_directed_edges() {
    let g = graph(|b| {
        b.vertex("a")?;
        b.vertex("b")?;
        b.edge_with(0, 1, |o| {
            o.directed();
        })?;
        Ok(())
    })
    .unwrap();
    assert_eq!(g.neighbors(g.vertex(0).unwrap()).len(), 1);
    assert!(g.neighbors(g.vertex(1).unwrap()).is_empty());
    // The edge is still incident to both endpoints.
    assert_eq!(g.incident_edges(1).len(), 1);
}

#[test]
fn test_neighbors_unknown_vertex() {
    let g = seven_vertex_graph();
    assert!(g.neighbors(&Vertex::new(42, 42)).is_empty());
}

#[test]
fn test_contains_checks_value() {
    let g = seven_vertex_graph();
    assert!(g.contains(&Vertex::new(3, 4)));
    assert!(!g.contains(&Vertex::new(3, 5)));
    assert!(!g.contains(&Vertex::new(30, 4)));
}

// ==================== Subgraph Tests ====================

#[test]
fn test_subgraph_keeps_internal_edges() {
    let g = seven_vertex_graph();
    let picked: Vec<Vertex<i32>> = [1, 2, 5, 7]
        .iter()
        .map(|value| g.find_value(value).unwrap().clone())
        .collect();
    let sub = g.subgraph(&picked);

    assert_eq!(sub.size(), 4);
    assert_eq!(sub.edge_count(), 2);
    assert!(sub.adjacent(&picked[0], &picked[1]));
    assert!(sub.adjacent(&picked[1], &picked[2]));
    assert!(sub.neighbors(&picked[3]).is_empty());
}

#[test]
fn test_subgraph_ignores_foreign_vertices() {
    let g = seven_vertex_graph();
    let picked = vec![
        g.vertex(0).unwrap().clone(),
        Vertex::new(50, 50),
        Vertex::new(1, 99),
    ];
    let sub = g.subgraph(&picked);
    assert_eq!(sub.size(), 1);
    assert_eq!(sub.edge_count(), 0);
}

#[test]
fn test_subgraph_keeps_insertion_order() {
    let g = seven_vertex_graph();
    let picked: Vec<Vertex<i32>> = g.vertices().iter().rev().cloned().collect();
    let sub = g.subgraph(&picked);
    assert_eq!(sub.vertices(), g.vertices());
    assert_eq!(sub.edges(), g.edges());
}

#[test]
fn test_subgraph_is_independent() {
    let g = seven_vertex_graph();
    let sub = g.subgraph(&[]);
    assert!(sub.is_empty());
    assert_eq!(g.size(), 7);
}

// ==================== Walk Tests ====================

#[test]
fn test_iter_breadth_first() {
    let g = seven_vertex_graph();
    let order: Vec<i32> = g.iter().map(|v| *v.value()).collect();
    assert_eq!(order, vec![1, 2, 3, 4, 5, 6, 7]);
}

#[test]
fn test_walk_depth_first() {
    let g = seven_vertex_graph();
    let order: Vec<i32> = g.walk(WalkOrder::DepthFirst).map(|v| *v.value()).collect();
    assert_eq!(order, vec![1, 4, 6, 3, 7, 2, 5]);
}

#[test]
fn test_into_iterator_matches_iter() {
    let g = seven_vertex_graph();
    let mut seen = Vec::new();
    for vertex in &g {
        seen.push(*vertex.value());
    }
    assert_eq!(seen, vec![1, 2, 3, 4, 5, 6, 7]);
}

#[test]
fn test_walk_skips_unreachable() {
    let g = graph(|b| {
        b.vertex('a')?;
        b.vertex('b')?;
        b.vertex('c')?;
        b.edge(0, 1)?;
        Ok(())
    })
    .unwrap();
    assert_eq!(g.iter().count(), 2);
    assert_eq!(g.walk(WalkOrder::DepthFirst).count(), 2);
}

#[test]
fn test_walk_order_names() {
    assert_eq!(WalkOrder::default(), WalkOrder::BreadthFirst);
    assert_eq!(WalkOrder::from_name("DFS"), Some(WalkOrder::DepthFirst));
    assert_eq!(
        WalkOrder::from_name("breadth-first"),
        Some(WalkOrder::BreadthFirst)
    );
    assert_eq!(WalkOrder::from_name("sideways"), None);
    assert_eq!(WalkOrder::DepthFirst.to_string(), "dfs");
}
