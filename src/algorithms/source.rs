use rustc_hash::FxHashMap;

use crate::types::graph_query::GraphQuery;

/// In-degree of every vertex of `graph`, zero-in-degree vertices included.
///
/// # Complexity
/// * O(V + E)
pub fn in_degrees<G: GraphQuery>(graph: &G) -> FxHashMap<usize, usize> {
    let vertex_list = graph.vertex_list();
    let mut in_degree =
        FxHashMap::with_capacity_and_hasher(vertex_list.len(), Default::default());

    for &vertex_id in &vertex_list {
        in_degree.entry(vertex_id).or_insert(0);
        for &successor in graph.read_neighbor(vertex_id) {
            *in_degree.entry(successor).or_insert(0) += 1;
        }
    }

    in_degree
}

/// All vertices with in-degree zero, in ascending id order.
pub fn zero_in_degree_vertices<G: GraphQuery>(graph: &G) -> Vec<usize> {
    let mut sources = in_degrees(graph)
        .into_iter()
        .filter_map(|(vertex_id, degree)| (degree == 0).then_some(vertex_id))
        .collect::<Vec<_>>();
    sources.sort_unstable();
    sources
}

/// Returns the unique vertex of `graph` with in-degree zero.
///
/// `None` when no such vertex exists or when there are several. Ties are
/// never broken, and an empty graph has no source.
///
/// # Complexity
/// * O(V + E)
pub fn unique_source<G: GraphQuery>(graph: &G) -> Option<usize> {
    let mut source = None;
    for (vertex_id, degree) in in_degrees(graph) {
        if degree != 0 {
            continue;
        }
        if source.is_some() {
            return None;
        }
        source = Some(vertex_id);
    }
    source
}

#[cfg(test)]
mod test_source {
    use super::*;
    use crate::types::DiGraph;

    #[test]
    fn test_single_source() {
        let graph = DiGraph::build(4, vec![(0, 1), (0, 2), (1, 3), (2, 3)]).unwrap();
        assert_eq!(unique_source(&graph), Some(0));

        let in_degree = in_degrees(&graph);
        assert_eq!(in_degree[&0], 0);
        assert_eq!(in_degree[&3], 2);
    }

    #[test]
    fn test_two_sources_is_negative() {
        let graph = DiGraph::build(4, vec![(0, 1), (2, 3)]).unwrap();
        assert_eq!(unique_source(&graph), None);
        assert_eq!(zero_in_degree_vertices(&graph), vec![0, 2]);
    }

    #[test]
    fn test_no_source_in_cycle() {
        let graph = DiGraph::build(3, vec![(0, 1), (1, 2), (2, 0)]).unwrap();
        assert_eq!(unique_source(&graph), None);
        assert!(zero_in_degree_vertices(&graph).is_empty());
    }

    #[test]
    fn test_empty_graph_has_no_source() {
        let graph = DiGraph::build(0, Vec::new()).unwrap();
        assert_eq!(unique_source(&graph), None);
    }

    #[test]
    fn test_lone_vertex_is_source() {
        let graph = DiGraph::build(1, Vec::new()).unwrap();
        assert_eq!(unique_source(&graph), Some(0));
    }

    #[test]
    fn test_parallel_edges_only_raise_degree() {
        let graph = DiGraph::build(2, vec![(0, 1), (0, 1), (0, 1)]).unwrap();
        assert_eq!(in_degrees(&graph)[&1], 3);
        assert_eq!(unique_source(&graph), Some(0));
    }

    #[test]
    fn test_self_loop_is_not_a_source() {
        let graph = DiGraph::build(2, vec![(0, 0), (0, 1)]).unwrap();
        assert_eq!(unique_source(&graph), None);
    }
}
