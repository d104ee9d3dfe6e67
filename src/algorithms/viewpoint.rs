use log::debug;

use crate::algorithms::condensation::condense;
use crate::algorithms::reach::{DfsReachability, Reachability};
use crate::algorithms::scc::{SccPartition, SCC};
use crate::algorithms::source::{unique_source, zero_in_degree_vertices};
use crate::error::Result;
use crate::types::{CondensationGraph, DiGraph};

/// Result of a viewpoint search, with the reason when none exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewpointOutcome {
    /// Every vertex is reachable from this vertex.
    Found(usize),

    /// The condensation has zero or several source components.
    /// Holds the zero-in-degree roots (empty for an empty graph).
    NoUniqueSource { sources: Vec<usize> },

    /// The unique source component exists but its root misses some vertex.
    Unreachable { candidate: usize },
}

/// Everything computed while searching for a viewpoint.
#[derive(Debug, Clone)]
pub struct ViewpointAnalysis {
    pub partition: SccPartition,
    pub scc_dag: CondensationGraph,
    pub outcome: ViewpointOutcome,
}

impl ViewpointAnalysis {
    /// The viewpoint vertex, if one was found.
    pub fn viewpoint(&self) -> Option<usize> {
        match self.outcome {
            ViewpointOutcome::Found(vertex_id) => Some(vertex_id),
            _ => None,
        }
    }
}

/// Finds the viewpoint of a directed graph: a vertex from which every vertex
/// is reachable.
///
/// # Algorithm
///
/// 1. Decompose the graph into strongly connected components (Kosaraju)
/// 2. Build the condensation graph over the component roots
/// 3. Look for the unique zero-in-degree root; without one there is no viewpoint
///    and the reachability pass is skipped
/// 4. Check that the source root reaches every vertex of the original graph
///
/// # Type Parameters
///
/// * `R` - Reachability checker used in step 4
#[derive(Debug, Clone)]
pub struct ViewpointFinder<R = DfsReachability> {
    reachability: R,
}

impl ViewpointFinder<DfsReachability> {
    pub fn new() -> Self {
        Self {
            reachability: DfsReachability,
        }
    }
}

impl Default for ViewpointFinder<DfsReachability> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Reachability> ViewpointFinder<R> {
    /// Creates a finder that verifies candidates with `reachability`.
    pub fn with_reachability(reachability: R) -> Self {
        Self { reachability }
    }

    /// Runs the full pipeline and keeps the intermediate results.
    pub fn analyze(&self, graph: &DiGraph) -> Result<ViewpointAnalysis> {
        // Step 1. Strongly connected components.
        let partition = graph.scc();

        // Step 2. Condensation over the component roots.
        let scc_dag = condense(graph, &partition)?;

        // Step 3. Unique source component, or stop here.
        let outcome = match unique_source(&scc_dag) {
            None => {
                let sources = zero_in_degree_vertices(&scc_dag);
                debug!("no unique source component, {} candidates", sources.len());
                ViewpointOutcome::NoUniqueSource { sources }
            }
            Some(candidate) => {
                // Step 4. The candidate must reach the whole original graph.
                if self.reachability.visits_all(graph, candidate)? {
                    ViewpointOutcome::Found(candidate)
                } else {
                    ViewpointOutcome::Unreachable { candidate }
                }
            }
        };

        debug!("viewpoint search finished: {:?}", outcome);
        Ok(ViewpointAnalysis {
            partition,
            scc_dag,
            outcome,
        })
    }

    /// Returns the viewpoint of `graph`, or `None` when no vertex reaches all others.
    pub fn find(&self, graph: &DiGraph) -> Result<Option<usize>> {
        Ok(self.analyze(graph)?.viewpoint())
    }
}

/// Builds a graph from `vertex_count` and `edges` and returns its viewpoint.
///
/// # Errors
/// * `GraphError::InvalidVertex` if an edge endpoint is not below `vertex_count`.
pub fn find_viewpoint<I>(vertex_count: usize, edges: I) -> Result<Option<usize>>
where
    I: IntoIterator<Item = (usize, usize)>,
{
    let graph = DiGraph::build(vertex_count, edges)?;
    ViewpointFinder::new().find(&graph)
}

#[cfg(test)]
mod test_viewpoint {
    use std::cell::Cell;

    use super::*;
    use crate::algorithms::reach::visits_all;
    use crate::error::GraphError;

    /// Reachability checker that counts how often it is consulted.
    #[derive(Default)]
    struct CountingReachability {
        calls: Cell<usize>,
    }

    impl Reachability for CountingReachability {
        fn visits_all(&self, graph: &DiGraph, src: usize) -> Result<bool> {
            self.calls.set(self.calls.get() + 1);
            visits_all(graph, src)
        }
    }

    #[test]
    fn test_cycle_with_tail() {
        let found = find_viewpoint(4, vec![(0, 1), (1, 2), (2, 0), (0, 3)]).unwrap();
        let vertex_id = found.unwrap();
        assert!([0, 1, 2].contains(&vertex_id));
    }

    #[test]
    fn test_two_isolated_vertices() {
        assert_eq!(find_viewpoint(2, Vec::new()).unwrap(), None);
    }

    #[test]
    fn test_single_vertex() {
        assert_eq!(find_viewpoint(1, Vec::new()).unwrap(), Some(0));
    }

    #[test]
    fn test_simple_cycle() {
        let graph = DiGraph::build(3, vec![(0, 1), (1, 2), (2, 0)]).unwrap();
        let analysis = ViewpointFinder::new().analyze(&graph).unwrap();

        let root = analysis.partition.root_of(0).unwrap();
        assert_eq!(analysis.outcome, ViewpointOutcome::Found(root));
        assert_eq!(analysis.scc_dag.to_string(), format!("{}: \n", root));
    }

    #[test]
    fn test_two_disjoint_edges() {
        let graph = DiGraph::build(4, vec![(0, 1), (2, 3)]).unwrap();
        let finder = ViewpointFinder::with_reachability(CountingReachability::default());
        let analysis = finder.analyze(&graph).unwrap();

        assert_eq!(
            analysis.outcome,
            ViewpointOutcome::NoUniqueSource {
                sources: vec![0, 2]
            }
        );
        assert_eq!(finder.reachability.calls.get(), 0);
    }

    #[test]
    fn test_no_source_component_skips_reachability() {
        // Empty graph: no components at all.
        let finder = ViewpointFinder::with_reachability(CountingReachability::default());
        let empty = DiGraph::build(0, Vec::new()).unwrap();
        assert_eq!(finder.find(&empty).unwrap(), None);
        assert_eq!(finder.reachability.calls.get(), 0);
    }

    #[test]
    fn test_unique_source_consults_reachability_once() {
        let finder = ViewpointFinder::with_reachability(CountingReachability::default());
        let graph = DiGraph::build(3, vec![(2, 0), (0, 1)]).unwrap();
        assert_eq!(finder.find(&graph).unwrap(), Some(2));
        assert_eq!(finder.reachability.calls.get(), 1);
    }

    #[test]
    fn test_unreachable_candidate() {
        /// Checker that reports failure for every candidate.
        struct Rejecting;

        impl Reachability for Rejecting {
            fn visits_all(&self, _graph: &DiGraph, _src: usize) -> Result<bool> {
                Ok(false)
            }
        }

        let graph = DiGraph::build(2, vec![(0, 1)]).unwrap();
        let analysis = ViewpointFinder::with_reachability(Rejecting)
            .analyze(&graph)
            .unwrap();
        assert_eq!(analysis.outcome, ViewpointOutcome::Unreachable { candidate: 0 });
        assert_eq!(analysis.viewpoint(), None);
    }

    #[test]
    fn test_invalid_edge_is_rejected() {
        assert_eq!(
            find_viewpoint(3, vec![(0, 1), (3, 0)]),
            Err(GraphError::InvalidVertex {
                vertex: 3,
                vertex_count: 3
            })
        );
    }

    #[test]
    fn test_repeated_calls_agree() {
        let graph = DiGraph::build(
            6,
            vec![(5, 4), (4, 5), (4, 0), (0, 1), (1, 2), (2, 0), (2, 3)],
        )
        .unwrap();
        let finder = ViewpointFinder::new();
        let first = finder.find(&graph).unwrap();
        let second = finder.find(&graph).unwrap();

        assert_eq!(first, second);
        let vertex_id = first.unwrap();
        assert!(visits_all(&graph, vertex_id).unwrap());
        assert!([4, 5].contains(&vertex_id));
    }
}
