use crate::types::DiGraph;

/// Builds the transpose of `graph`: the same vertex set with every edge reversed.
///
/// Every vertex of the input gets a successor list in the output, including
/// vertices with no incoming edges. Sources are scanned in ascending order, so
/// each reversed list is ascending by original source with multiplicity kept.
///
/// # Complexity
/// * O(V + E)
pub fn transpose(graph: &DiGraph) -> DiGraph {
    let adjacency = graph.adjacency();
    let mut reversed = vec![Vec::new(); adjacency.len()];

    for (src, successors) in adjacency.iter().enumerate() {
        for &dst in successors {
            reversed[dst].push(src);
        }
    }

    DiGraph::from_adjacency(reversed)
}
