use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::types::DiGraph;

/// Generates a random graph with exactly `edge_count` edges.
///
/// Endpoints are drawn uniformly from `0..vertex_count`, so self-loops and
/// parallel edges occur naturally. A graph without vertices gets no edges.
pub fn random_graph<R: Rng>(rng: &mut R, vertex_count: usize, edge_count: usize) -> DiGraph {
    if vertex_count == 0 {
        return DiGraph::default();
    }

    let mut adjacency = vec![Vec::new(); vertex_count];
    for _ in 0..edge_count {
        let src = rng.gen_range(0..vertex_count);
        let dst = rng.gen_range(0..vertex_count);
        adjacency[src].push(dst);
    }
    DiGraph::from_adjacency(adjacency)
}

/// Reproducible random graph for a given seed.
///
/// The vertex count is drawn from `1..=max_vertices` and the edge count is
/// `round(vertex_count * edge_factor)`.
pub fn seeded_graph(seed: u64, max_vertices: usize, edge_factor: f64) -> DiGraph {
    let mut rng = StdRng::seed_from_u64(seed);
    let vertex_count = rng.gen_range(1..=max_vertices.max(1));
    let edge_count = (vertex_count as f64 * edge_factor.max(0.0)).round() as usize;
    random_graph(&mut rng, vertex_count, edge_count)
}
