//! Phase 2 tests: breadth-first and depth-first path finding.

use algokit::graph::{
    graph, AdjacencyListGraph, BreadthFirstTraversal, DepthFirstTraversal, Graph, Traversal,
};
use algokit::types::Vertex;

/// Vertices "1".."9" with edges (1,2)(1,3)(2,4)(2,5)(3,6)(3,7)(5,8); "9" is isolated.
fn tree_graph() -> AdjacencyListGraph<&'static str> {
    graph(|b| {
        for name in ["1", "2", "3", "4", "5", "6", "7", "8", "9"] {
            b.vertex(name)?;
        }
        for (s, d) in [
            ("1", "2"),
            ("1", "3"),
            ("2", "4"),
            ("2", "5"),
            ("3", "6"),
            ("3", "7"),
            ("5", "8"),
        ] {
            b.edge_between(&s, &d)?;
        }
        Ok(())
    })
    .unwrap()
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

fn named<'g>(g: &'g AdjacencyListGraph<&'static str>, name: &'static str) -> &'g Vertex<&'static str> {
    g.find_value(&name).unwrap()
}

fn names(path: &[&Vertex<&'static str>]) -> Vec<&'static str> {
    path.iter().map(|v| *v.value()).collect()
}

fn values(path: &[&Vertex<i32>]) -> Vec<i32> {
    path.iter().map(|v| *v.value()).collect()
}

// ==================== Depth-First Tests ====================

#[test]
fn test_dfs_path_to_destination() {
    let g = tree_graph();
    let dfs = DepthFirstTraversal::new(&g);
    let path = dfs.path(named(&g, "1"), Some(named(&g, "8")));
    assert_eq!(names(&path), vec!["1", "2", "5", "8"]);
}

#[test]
fn test_dfs_visit_order() {
    let g = tree_graph();
    let dfs = DepthFirstTraversal::new(&g);
    let order = dfs.visit(named(&g, "1"));
    assert_eq!(names(&order), vec!["1", "3", "7", "6", "2", "5", "8", "4"]);
}

#[test]
fn test_dfs_unreachable_destination() {
    let g = tree_graph();
    let dfs = DepthFirstTraversal::new(&g);
    assert!(dfs.path_to(named(&g, "1"), named(&g, "9")).is_empty());
}

#[test]
fn test_dfs_invalid_start() {
    let g = tree_graph();
    let dfs = DepthFirstTraversal::new(&g);
    let stranger = Vertex::new(100, "123");
    assert!(dfs.path(&stranger, Some(named(&g, "8"))).is_empty());
    assert!(dfs.visit(&stranger).is_empty());
}

#[test]
fn test_dfs_invalid_destination() {
    let g = tree_graph();
    let dfs = DepthFirstTraversal::new(&g);
    let stranger = Vertex::new(100, "123");
    assert!(dfs.path_to(named(&g, "1"), &stranger).is_empty());
}

#[test]
fn test_dfs_matches_walk() {
    let g = seven_vertex_graph();
    let dfs = DepthFirstTraversal::new(&g);
    let root = g.root().unwrap();
    let visited = values(&dfs.visit(root));
    assert_eq!(visited, vec![1, 4, 6, 3, 7, 2, 5]);

    let walked: Vec<i32> = g
        .walk(algokit::graph::WalkOrder::DepthFirst)
        .map(|v| *v.value())
        .collect();
    assert_eq!(visited, walked);
}

#[test]
fn test_dfs_path_to_start() {
    let g = tree_graph();
    let dfs = DepthFirstTraversal::new(&g);
    let one = named(&g, "1");
    assert_eq!(names(&dfs.path_to(one, one)), vec!["1"]);
}

// ==================== Breadth-First Tests ====================

#[test]
fn test_bfs_visit_order() {
    let g = seven_vertex_graph();
    let bfs = BreadthFirstTraversal::new(&g);
    let order = bfs.visit(g.root().unwrap());
    assert_eq!(values(&order), vec![1, 2, 3, 4, 5, 6, 7]);
}

#[test]
fn test_bfs_shortest_path() {
    let g = seven_vertex_graph();
    let bfs = BreadthFirstTraversal::new(&g);
    let five = g.find_value(&5).unwrap();
    let seven = g.find_value(&7).unwrap();
    assert_eq!(values(&bfs.path_to(five, seven)), vec![5, 2, 1, 3, 7]);

    let four = g.find_value(&4).unwrap();
    let two = g.find_value(&2).unwrap();
    // 4-6-2 and 4-1-2 are both two edges; discovery order picks 4-1-2.
    assert_eq!(values(&bfs.path_to(four, two)), vec![4, 1, 2]);
}

#[test]
fn test_bfs_path_in_tree() {
    let g = tree_graph();
    let bfs = BreadthFirstTraversal::new(&g);
    let path = bfs.path_to(named(&g, "8"), named(&g, "7"));
    assert_eq!(names(&path), vec!["8", "5", "2", "1", "3", "7"]);
}

#[test]
fn test_bfs_unreachable_destination() {
    let g = tree_graph();
    let bfs = BreadthFirstTraversal::new(&g);
    assert!(bfs.path_to(named(&g, "1"), named(&g, "9")).is_empty());
    assert_eq!(names(&bfs.visit(named(&g, "9"))), vec!["9"]);
}

#[test]
fn test_bfs_invalid_vertices() {
    let g = tree_graph();
    let bfs = BreadthFirstTraversal::new(&g);
    let stranger = Vertex::new(100, "123");
    assert!(bfs.path_to(&stranger, named(&g, "1")).is_empty());
    assert!(bfs.path_to(named(&g, "1"), &stranger).is_empty());
    // Right id, wrong value.
    assert!(bfs.visit(&Vertex::new(0, "one")).is_empty());
}

#[test]
fn test_bfs_respects_direction() {
    let g = graph(|b| {
        b.vertex("a")?;
        b.vertex("b")?;
        b.vertex("c")?;
        b.edge_with(0, 1, |o| {
            o.directed();
        })?;
        b.edge_with(1, 2, |o| {
            o.directed();
        })?;
        Ok(())
    })
    .unwrap();
    let bfs = BreadthFirstTraversal::new(&g);
    let a = g.vertex(0).unwrap();
    let c = g.vertex(2).unwrap();
    assert_eq!(names(&bfs.path_to(a, c)), vec!["a", "b", "c"]);
    assert!(bfs.path_to(c, a).is_empty());
}

#[test]
fn test_traversal_reuse_is_stateless() {
    let g = tree_graph();
    let bfs = BreadthFirstTraversal::new(&g);
    let first = names(&bfs.visit(named(&g, "1")));
    let second = names(&bfs.visit(named(&g, "1")));
    assert_eq!(first, second);
    assert_eq!(first.len(), 8);
}

#[test]
fn test_traversal_on_subgraph() {
    let g = tree_graph();
    let picked: Vec<Vertex<&'static str>> = ["1", "2", "5", "8"]
        .iter()
        .map(|name| named(&g, *name).clone())
        .collect();
    let sub = g.subgraph(&picked);
    let dfs = DepthFirstTraversal::new(&sub);
    assert_eq!(
        names(&dfs.path_to(&picked[0], &picked[3])),
        vec!["1", "2", "5", "8"]
    );
    // The subgraph has no route through "3".
    let three = named(&g, "3");
    assert!(dfs.visit(three).is_empty());
}
