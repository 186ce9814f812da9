//! CLI command implementations.

use std::collections::HashMap;

use crate::graph::{
    AdjacencyListGraph, BreadthFirstTraversal, DepthFirstTraversal, Graph, GraphBuilder, Traversal,
    WalkOrder,
};
use crate::sort::SortAlgorithm;
use crate::types::{AlgoError, AlgoResult, Edge, Vertex};

/// One parsed command-line edge: `a-b`, `a>b`, with an optional `:weight`.
///
/// A token with no connector names a lone vertex. Vertex names cannot
/// contain `-` or `>`, so a token holds at most one connector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EdgeSpec {
    Edge {
        source: String,
        destination: String,
        directed: bool,
        weight: i64,
    },
    Vertex(String),
}

impl EdgeSpec {
    /// Parse a single edge token.
    pub fn parse(spec: &str) -> AlgoResult<Self> {
        let invalid = || AlgoError::InvalidEdgeSpec(spec.to_string());

        let (body, weight) = match spec.rsplit_once(':') {
            Some((body, weight)) => (body, weight.trim().parse::<i64>().map_err(|_| invalid())?),
            None => (spec, 0),
        };

        let (source, destination, directed) = if let Some((s, d)) = body.split_once('>') {
            (s, d, true)
        } else if let Some((s, d)) = body.split_once('-') {
            (s, d, false)
        } else {
            let name = body.trim();
            if name.is_empty() || weight != 0 {
                return Err(invalid());
            }
            return Ok(Self::Vertex(name.to_string()));
        };

        let (source, destination) = (source.trim(), destination.trim());
        let named = |name: &str| !name.is_empty() && !name.contains(['-', '>']);
        if !named(source) || !named(destination) {
            return Err(invalid());
        }
        Ok(Self::Edge {
            source: source.to_string(),
            destination: destination.to_string(),
            directed,
            weight,
        })
    }
}

/// Build a string-valued graph from edge tokens.
///
/// Vertices are registered in the order they are first mentioned.
pub fn build_graph<S: AsRef<str>>(specs: &[S]) -> AlgoResult<AdjacencyListGraph<String>> {
    let mut builder = GraphBuilder::new();
    let mut ids: HashMap<String, u64> = HashMap::new();
    let mut ensure = |builder: &mut GraphBuilder<String>, name: String| -> AlgoResult<u64> {
        if let Some(&id) = ids.get(&name) {
            return Ok(id);
        }
        let id = builder.vertex(name.clone())?;
        ids.insert(name, id);
        Ok(id)
    };

    for spec in specs {
        match EdgeSpec::parse(spec.as_ref())? {
            EdgeSpec::Vertex(name) => {
                ensure(&mut builder, name)?;
            }
            EdgeSpec::Edge {
                source,
                destination,
                directed,
                weight,
            } => {
                let source_id = ensure(&mut builder, source)?;
                let destination_id = ensure(&mut builder, destination)?;
                builder.edge_with(source_id, destination_id, |options| {
                    if directed {
                        options.directed();
                    }
                    options.weight(weight);
                })?;
            }
        }
    }
    Ok(builder.build())
}

fn lookup<'g>(graph: &'g AdjacencyListGraph<String>, name: &str) -> AlgoResult<&'g Vertex<String>> {
    graph
        .find_value(&name.to_string())
        .ok_or_else(|| AlgoError::UnknownVertex(name.to_string()))
}

/// Run a walk or path search and return the vertex names in order.
///
/// With no start the walk begins at the first mentioned vertex. With a
/// destination the result is the path to it, empty if unreachable.
pub fn walk_values(
    graph: &AdjacencyListGraph<String>,
    order: WalkOrder,
    from: Option<&str>,
    to: Option<&str>,
) -> AlgoResult<Vec<String>> {
    let start = match from {
        Some(name) => Some(lookup(graph, name)?),
        None => graph.root(),
    };
    let destination = to.map(|name| lookup(graph, name)).transpose()?;

    let Some(start) = start else {
        return Ok(Vec::new());
    };
    let path = match order {
        WalkOrder::BreadthFirst => BreadthFirstTraversal::new(graph).path(start, destination),
        WalkOrder::DepthFirst => DepthFirstTraversal::new(graph).path(start, destination),
    };
    Ok(path.into_iter().map(|v| v.value().clone()).collect())
}

/// Traverse a graph described by edge tokens.
pub fn cmd_walk<S: AsRef<str>>(
    edges: &[S],
    order: WalkOrder,
    from: Option<&str>,
    to: Option<&str>,
    json: bool,
) -> AlgoResult<()> {
    let graph = build_graph(edges)?;
    let path = walk_values(&graph, order, from, to)?;

    if json {
        let result = serde_json::json!({
            "order": order,
            "from": from.map(str::to_string).or_else(|| graph.root().map(|v| v.value().clone())),
            "to": to,
            "vertices": graph.size(),
            "edges": graph.edge_count(),
            "path": path,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&result).unwrap_or_default()
        );
    } else if path.is_empty() {
        match to {
            Some(to) => println!("No {} path to {}", order, to),
            None => println!("Graph is empty"),
        }
    } else {
        println!("{}", path.join(" "));
    }
    Ok(())
}

/// Neighbor names of a vertex, in edge insertion order.
pub fn neighbor_values(graph: &AdjacencyListGraph<String>, name: &str) -> AlgoResult<Vec<String>> {
    let vertex = lookup(graph, name)?;
    Ok(graph
        .neighbors(vertex)
        .into_iter()
        .map(|v| v.value().clone())
        .collect())
}

/// Print the neighbors of a vertex.
pub fn cmd_neighbors<S: AsRef<str>>(vertex: &str, edges: &[S], json: bool) -> AlgoResult<()> {
    let graph = build_graph(edges)?;
    let neighbors = neighbor_values(&graph, vertex)?;
    let incident: &[Edge] = graph.incident_edges(lookup(&graph, vertex)?.id());

    if json {
        let result = serde_json::json!({
            "vertex": vertex,
            "neighbors": neighbors,
            "incident_edges": incident,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&result).unwrap_or_default()
        );
    } else if neighbors.is_empty() {
        println!("{} has no neighbors", vertex);
    } else {
        println!("{}", neighbors.join(" "));
    }
    Ok(())
}

/// Sort integers with the chosen algorithm.
pub fn cmd_sort(algorithm: SortAlgorithm, numbers: &[i64], json: bool) -> AlgoResult<()> {
    let sorted = algorithm.sorted(numbers);

    if json {
        let result = serde_json::json!({
            "algorithm": algorithm,
            "count": sorted.len(),
            "sorted": sorted,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&result).unwrap_or_default()
        );
    } else {
        let line: Vec<String> = sorted.iter().map(|n| n.to_string()).collect();
        println!("{}", line.join(" "));
    }
    Ok(())
}
