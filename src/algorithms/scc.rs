use log::debug;

use crate::algorithms::dfs::depth_first;
use crate::algorithms::finish_order::finish_order;
use crate::algorithms::transpose::transpose;
use crate::error::{GraphError, Result};
use crate::types::DiGraph;

/// Sentinel for a vertex that has not been assigned to a component yet.
const UNASSIGNED: usize = usize::MAX;

/// Partition of a graph's vertices into strongly connected components.
///
/// Each component is represented by its root: the vertex whose pop from the
/// finishing stack started the component's exploration in the second pass.
/// The choice is deterministic for a given graph but not canonical (it is not
/// the smallest id of the component, for instance).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SccPartition {
    /// Maps each vertex id to the root of its component.
    vertex_root: Vec<usize>,

    /// Components in discovery order; members in visit order, root first.
    components: Vec<Vec<usize>>,
}

impl SccPartition {
    /// Returns the root of the component containing `vertex_id`.
    pub fn root_of(&self, vertex_id: usize) -> Result<usize> {
        self.vertex_root
            .get(vertex_id)
            .copied()
            .ok_or(GraphError::InvalidVertex {
                vertex: vertex_id,
                vertex_count: self.vertex_root.len(),
            })
    }

    /// Root of every vertex, indexed by vertex id.
    pub fn vertex_roots(&self) -> &[usize] {
        &self.vertex_root
    }

    /// Checks whether two vertices belong to the same component.
    pub fn same_component(&self, a: usize, b: usize) -> Result<bool> {
        Ok(self.root_of(a)? == self.root_of(b)?)
    }

    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    /// Components in discovery order, each listing its root first.
    pub fn components(&self) -> &[Vec<usize>] {
        &self.components
    }

    /// Component roots in discovery order.
    pub fn roots(&self) -> impl Iterator<Item = usize> + '_ {
        self.components.iter().map(|component| component[0])
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_root.len()
    }
}

/// Trait for computing the strongly connected components of a graph.
pub trait SCC {
    fn scc(&self) -> SccPartition;
}

impl SCC for DiGraph {
    /// Runs both Kosaraju passes on this graph.
    fn scc(&self) -> SccPartition {
        kosaraju(self)
    }
}

/// Computes the SCC partition of `graph` with Kosaraju's algorithm.
///
/// # Complexity
/// * O(V + E), three linear passes (finish order, transpose, collection)
pub fn kosaraju(graph: &DiGraph) -> SccPartition {
    let finish_stack = finish_order(graph);
    let transposed = transpose(graph);
    let partition = decompose_unchecked(&transposed, finish_stack);
    debug!(
        "kosaraju: {} vertices, {} components",
        partition.vertex_count(),
        partition.component_count()
    );
    partition
}

/// Second pass of Kosaraju's algorithm.
///
/// Pops vertices from `finish_stack` (last element first). Every vertex not yet
/// assigned starts a depth-first walk over `transposed`; all unassigned
/// vertices it reaches form one component whose root is the popped vertex.
///
/// `finish_stack` is expected to be `finish_order` of the original graph.
/// Any other permutation of `0..V` is accepted, but only the finishing order
/// guarantees that the result is the SCC partition.
///
/// # Errors
/// * `GraphError::InvalidVertex` if the stack holds a vertex outside `transposed`.
/// * `GraphError::InvalidFinishStack` if the stack misses or repeats a vertex.
pub fn decompose(transposed: &DiGraph, finish_stack: Vec<usize>) -> Result<SccPartition> {
    let vertex_count = transposed.adjacency().len();
    if finish_stack.len() != vertex_count {
        return Err(GraphError::InvalidFinishStack {
            vertex_count,
            reason: format!("stack holds {} vertices", finish_stack.len()),
        });
    }

    let mut listed = vec![false; vertex_count];
    for &vertex_id in &finish_stack {
        transposed.check_vertex(vertex_id)?;
        if std::mem::replace(&mut listed[vertex_id], true) {
            return Err(GraphError::InvalidFinishStack {
                vertex_count,
                reason: format!("vertex {} appears twice", vertex_id),
            });
        }
    }
    Ok(decompose_unchecked(transposed, finish_stack))
}

/// Second pass over a stack already known to be a permutation of the vertices.
fn decompose_unchecked(transposed: &DiGraph, finish_stack: Vec<usize>) -> SccPartition {
    let adjacency = transposed.adjacency();
    let vertex_count = adjacency.len();

    let mut visited = vec![false; vertex_count];
    let mut vertex_root = vec![UNASSIGNED; vertex_count];
    let mut components: Vec<Vec<usize>> = Vec::new();

    for start in finish_stack.into_iter().rev() {
        if visited[start] {
            continue;
        }

        let mut component = Vec::new();
        depth_first(adjacency, start, &mut visited, |v| component.push(v), |_| {});

        for &member in &component {
            vertex_root[member] = start;
        }
        components.push(component);
    }

    debug_assert!(vertex_root.iter().all(|&root| root != UNASSIGNED));

    SccPartition {
        vertex_root,
        components,
    }
}
