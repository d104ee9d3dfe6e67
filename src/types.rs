use std::collections::BTreeMap;
use std::fmt;

use crate::error::{GraphError, Result};
use crate::types::graph_query::GraphQuery;

pub mod graph_query;

/// A dense adjacency-list representation of a directed graph over vertex ids
/// `0..vertex_count`.
///
/// Every vertex in range owns a successor list, possibly empty. Self-loops and
/// parallel edges are kept exactly as supplied. The graph is immutable once
/// built; derived graphs (transpose, condensation) are separate values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiGraph {
    /// Successor list of each vertex, indexed by vertex id
    adjacency: Vec<Vec<usize>>,
}

impl DiGraph {
    /// Builds a graph from a vertex count and an ordered edge list.
    ///
    /// # Arguments
    /// * `vertex_count` - Number of vertices, ids run over `0..vertex_count`
    /// * `edges` - `(src, dst)` pairs, appended to successor lists in the given order
    ///
    /// # Errors
    /// * `GraphError::InvalidVertex` if any endpoint is not below `vertex_count`.
    ///   No partially built graph is returned.
    pub fn build<I>(vertex_count: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut adjacency = vec![Vec::new(); vertex_count];
        for (src, dst) in edges {
            check_vertex(src, vertex_count)?;
            check_vertex(dst, vertex_count)?;
            adjacency[src].push(dst);
        }
        Ok(Self { adjacency })
    }

    /// Wraps an adjacency table whose entries are already known to be in range.
    pub(crate) fn from_adjacency(adjacency: Vec<Vec<usize>>) -> Self {
        debug_assert!(adjacency
            .iter()
            .flatten()
            .all(|&v| v < adjacency.len()));
        Self { adjacency }
    }

    /// Returns the ordered successors of `vertex_id`.
    ///
    /// # Errors
    /// * `GraphError::InvalidVertex` if `vertex_id` is out of range.
    pub fn successors(&self, vertex_id: usize) -> Result<&[usize]> {
        check_vertex(vertex_id, self.adjacency.len())?;
        Ok(&self.adjacency[vertex_id])
    }

    /// Iterates over all edges, by ascending source and then insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(src, successors)| successors.iter().map(move |&dst| (src, dst)))
    }

    /// Fails with `InvalidVertex` unless `vertex_id` belongs to this graph.
    pub fn check_vertex(&self, vertex_id: usize) -> Result<()> {
        check_vertex(vertex_id, self.adjacency.len())
    }

    pub(crate) fn adjacency(&self) -> &[Vec<usize>] {
        &self.adjacency
    }
}

fn check_vertex(vertex_id: usize, vertex_count: usize) -> Result<()> {
    if vertex_id < vertex_count {
        Ok(())
    } else {
        Err(GraphError::InvalidVertex {
            vertex: vertex_id,
            vertex_count,
        })
    }
}

impl GraphQuery for DiGraph {
    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    fn read_neighbor(&self, vertex_id: usize) -> &[usize] {
        self.adjacency
            .get(vertex_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    fn has_vertex(&self, vertex_id: usize) -> bool {
        vertex_id < self.adjacency.len()
    }

    fn vertex_list(&self) -> Vec<usize> {
        (0..self.adjacency.len()).collect()
    }

    fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }
}

/// The condensation (meta-) graph of a directed graph.
///
/// Vertices are SCC roots, kept as vertex ids of the original graph rather than
/// being renumbered. Edges are the original cross-component edges mapped onto
/// their roots; parallel edges between the same pair of components are kept,
/// so the edge count equals the number of original cross-component edges.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CondensationGraph {
    /// Maps a root id to its successor roots.
    /// Ordered by root id so traversal and rendering are deterministic.
    scc_dag: BTreeMap<usize, Vec<usize>>,
}

impl CondensationGraph {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Registers `root` with an empty successor list if it is not present yet.
    pub(crate) fn add_vertex(&mut self, root: usize) {
        self.scc_dag.entry(root).or_default();
    }

    /// Appends `src_root -> dst_root`, registering both endpoints first.
    pub(crate) fn add_edge(&mut self, src_root: usize, dst_root: usize) {
        self.add_vertex(dst_root);
        self.scc_dag.entry(src_root).or_default().push(dst_root);
    }
}

impl GraphQuery for CondensationGraph {
    fn vertex_count(&self) -> usize {
        self.scc_dag.len()
    }

    fn read_neighbor(&self, vertex_id: usize) -> &[usize] {
        self.scc_dag
            .get(&vertex_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    fn has_vertex(&self, vertex_id: usize) -> bool {
        self.scc_dag.contains_key(&vertex_id)
    }

    fn vertex_list(&self) -> Vec<usize> {
        self.scc_dag.keys().copied().collect()
    }
}

/// Writes one line per vertex in the form `u: v1 v2 ... `.
fn render_adjacency<G: GraphQuery>(graph: &G, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for vertex_id in graph.vertex_list() {
        write!(f, "{}: ", vertex_id)?;
        for successor in graph.read_neighbor(vertex_id) {
            write!(f, "{} ", successor)?;
        }
        writeln!(f)?;
    }
    Ok(())
}

impl fmt::Display for DiGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render_adjacency(self, f)
    }
}

impl fmt::Display for CondensationGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render_adjacency(self, f)
    }
}
