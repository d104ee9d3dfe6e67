/// A trait that defines read-only query operations over a directed graph.
///
/// Both the dense adjacency graph and the condensation graph implement it, so
/// algorithms that only need to walk vertices and successor lists (in-degree
/// counting, rendering) work on either one.
///
/// Implementors must report vertices in ascending id order and successor lists
/// in insertion order. Several algorithms rely on this to stay deterministic.
pub trait GraphQuery {
    /// Returns the number of vertices in the graph.
    fn vertex_count(&self) -> usize;

    /// Retrieves the successors of a given vertex.
    ///
    /// # Parameters
    ///
    /// * `vertex_id` - The identifier of the vertex whose successors are being queried.
    ///
    /// # Returns
    ///
    /// The ordered successor list. An unknown vertex yields an empty slice; use
    /// `has_vertex` first when the distinction matters.
    fn read_neighbor(&self, vertex_id: usize) -> &[usize];

    /// Checks if a specific vertex exists in the graph.
    fn has_vertex(&self, vertex_id: usize) -> bool;

    /// Retrieves all vertex ids in ascending order.
    fn vertex_list(&self) -> Vec<usize>;

    /// Determines if at least one edge `src_id -> dst_id` exists.
    fn has_edge(&self, src_id: usize, dst_id: usize) -> bool {
        self.read_neighbor(src_id).iter().any(|&v| v == dst_id)
    }

    /// Total number of edges, counting parallel edges separately.
    fn edge_count(&self) -> usize {
        self.vertex_list()
            .into_iter()
            .map(|vertex_id| self.read_neighbor(vertex_id).len())
            .sum()
    }
}
