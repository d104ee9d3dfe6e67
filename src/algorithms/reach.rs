use crate::algorithms::dfs::depth_first;
use crate::error::Result;
use crate::types::DiGraph;

/// Full-graph reachability checks.
///
/// The viewpoint finder receives its checker through this trait, so the
/// (comparatively expensive) reachability pass can be observed or replaced.
pub trait Reachability {
    /// Returns true iff every vertex of `graph` is reachable from `src`.
    ///
    /// # Errors
    /// * `GraphError::InvalidVertex` if `src` is not a vertex of `graph`.
    fn visits_all(&self, graph: &DiGraph, src: usize) -> Result<bool>;
}

impl<R: Reachability + ?Sized> Reachability for &R {
    fn visits_all(&self, graph: &DiGraph, src: usize) -> Result<bool> {
        (**self).visits_all(graph, src)
    }
}

/// Depth-first reachability checker backed by an explicit frame stack.
#[derive(Debug, Clone, Copy, Default)]
pub struct DfsReachability;

impl Reachability for DfsReachability {
    fn visits_all(&self, graph: &DiGraph, src: usize) -> Result<bool> {
        visits_all(graph, src)
    }
}

/// Counts the distinct vertices reached from `src` and compares with `V`.
///
/// # Complexity
/// * O(V + E)
pub fn visits_all(graph: &DiGraph, src: usize) -> Result<bool> {
    graph.check_vertex(src)?;

    let adjacency = graph.adjacency();
    let mut visited = vec![false; adjacency.len()];
    let mut visited_count = 0usize;
    depth_first(adjacency, src, &mut visited, |_| visited_count += 1, |_| {});

    Ok(visited_count == adjacency.len())
}

/// Vertices reachable from `src` (itself included), in depth-first preorder.
pub fn reachable_from(graph: &DiGraph, src: usize) -> Result<Vec<usize>> {
    graph.check_vertex(src)?;

    let adjacency = graph.adjacency();
    let mut visited = vec![false; adjacency.len()];
    let mut reached = Vec::new();
    depth_first(adjacency, src, &mut visited, |v| reached.push(v), |_| {});

    Ok(reached)
}
