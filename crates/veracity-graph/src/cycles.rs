//! Circular-reporting detection: DFS from the requesting source with a
//! recursion-stack "currently visiting" set, O(V+E). The first cycle found
//! (not necessarily shortest) is reported with its ordered node sequence.

use std::collections::HashSet;

use petgraph::graph::{DiGraph, NodeIndex};

use crate::graph::{EdgeInfo, GraphState};

/// First cycle of length ≥ 2 from `source` back to itself, as an ordered
/// chain starting and ending at `source`. `None` when the source is absent
/// or participates in no cycle.
pub(crate) fn find_cycle_from(state: &GraphState, source: &str) -> Option<Vec<String>> {
    let &start = state.nodes.get(source)?;
    let graph = &state.graph;

    let mut visited: HashSet<NodeIndex> = HashSet::new();
    let mut on_stack: HashSet<NodeIndex> = HashSet::new();
    let mut path: Vec<NodeIndex> = vec![start];
    visited.insert(start);
    on_stack.insert(start);

    if dfs(graph, start, start, &mut visited, &mut on_stack, &mut path) {
        let mut chain: Vec<String> = path.iter().map(|&i| graph[i].clone()).collect();
        chain.push(graph[start].clone());
        return Some(chain);
    }
    None
}

fn dfs(
    graph: &DiGraph<String, EdgeInfo>,
    current: NodeIndex,
    start: NodeIndex,
    visited: &mut HashSet<NodeIndex>,
    on_stack: &mut HashSet<NodeIndex>,
    path: &mut Vec<NodeIndex>,
) -> bool {
    for next in graph.neighbors(current) {
        // Back edge to the origin closes a cycle of length ≥ 2.
        if next == start && path.len() >= 2 {
            return true;
        }
        if visited.contains(&next) || on_stack.contains(&next) {
            continue;
        }
        visited.insert(next);
        on_stack.insert(next);
        path.push(next);
        if dfs(graph, next, start, visited, on_stack, path) {
            return true;
        }
        path.pop();
        on_stack.remove(&next);
    }
    false
}
