use crate::algorithms::dfs::depth_first;
use crate::types::DiGraph;

/// Computes the depth-first finishing order of `graph`.
///
/// DFS starts at vertex `0` and restarts from the smallest unvisited vertex
/// until every vertex is finished. Vertices are pushed when their exploration
/// completes, so the returned vector is a stack whose *last* element is the
/// vertex that finished last.
///
/// This is the first pass of Kosaraju's algorithm. It is only a topological
/// order when the graph is acyclic.
///
/// # Complexity
/// * O(V + E)
pub fn finish_order(graph: &DiGraph) -> Vec<usize> {
    let adjacency = graph.adjacency();
    let mut visited = vec![false; adjacency.len()];
    let mut stack = Vec::with_capacity(adjacency.len());

    for start in 0..adjacency.len() {
        if visited[start] {
            continue;
        }
        depth_first(adjacency, start, &mut visited, |_| {}, |v| stack.push(v));
    }

    stack
}
