use log::debug;

use crate::algorithms::scc::SccPartition;
use crate::error::Result;
use crate::types::graph_query::GraphQuery;
use crate::types::{CondensationGraph, DiGraph};

/// Builds the condensation graph of `graph` under `partition`.
///
/// Every component root becomes a vertex, including components without any
/// cross-component edge, so a strongly connected graph condenses to a single
/// vertex. Each original edge `(u, v)` with `root(u) != root(v)` contributes
/// one edge `root(u) -> root(v)`. Parallel edges are not merged: the
/// condensation edge count equals the number of original cross-component edges.
///
/// # Errors
/// * `GraphError::InvalidVertex` if `partition` does not cover every vertex of `graph`.
///
/// # Complexity
/// * O(V + E), plus a logarithmic factor for the ordered root map
pub fn condense(graph: &DiGraph, partition: &SccPartition) -> Result<CondensationGraph> {
    let mut scc_dag = CondensationGraph::new();

    for root in partition.roots() {
        scc_dag.add_vertex(root);
    }

    for (src, dst) in graph.edges() {
        let src_root = partition.root_of(src)?;
        let dst_root = partition.root_of(dst)?;
        if src_root != dst_root {
            scc_dag.add_edge(src_root, dst_root);
        }
    }

    debug!(
        "condensation: {} vertices, {} cross-component edges",
        scc_dag.vertex_count(),
        scc_dag.edge_count()
    );
    Ok(scc_dag)
}
