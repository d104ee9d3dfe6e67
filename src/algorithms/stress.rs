use std::sync::atomic::{AtomicUsize, Ordering};

use log::{debug, warn};
use rayon::iter::{IntoParallelIterator, ParallelIterator};
use rayon::ThreadPoolBuilder;
use serde::{Deserialize, Serialize};

use crate::algorithms::reach::reachable_from;
use crate::algorithms::scc::SCC;
use crate::algorithms::viewpoint::ViewpointFinder;
use crate::error::{Result, StressError};
use crate::generator::seeded_graph;
use crate::types::graph_query::GraphQuery;
use crate::types::DiGraph;

/// Largest accepted `max_vertices`; every trial holds a V x V reach matrix.
pub const MAX_STRESS_VERTICES: usize = 4096;

/// Largest accepted `edge_factor`.
pub const MAX_EDGE_FACTOR: f64 = 1024.0;

/// Configuration for randomized cross-checking of the viewpoint finder.
///
/// # Fields
///
/// * `thread_num` - Number of threads in the rayon pool (0 lets rayon decide)
/// * `trials` - Number of random graphs to check
/// * `max_vertices` - Upper bound on the vertex count of each graph
/// * `edge_factor` - Edges per vertex
/// * `seed` - Seed of the first trial; trial `i` uses `seed + i`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StressConfig {
    pub thread_num: usize,
    pub trials: u64,
    pub max_vertices: usize,
    pub edge_factor: f64,
    pub seed: u64,
}

impl Default for StressConfig {
    fn default() -> Self {
        Self {
            thread_num: 4,
            trials: 1000,
            max_vertices: 12,
            edge_factor: 1.2,
            seed: 0,
        }
    }
}

impl StressConfig {
    /// Rejects graph sizes a trial could not hold in memory.
    pub fn validate(&self) -> std::result::Result<(), StressError> {
        if self.max_vertices > MAX_STRESS_VERTICES {
            return Err(StressError::InvalidConfig(format!(
                "max_vertices {} exceeds {}",
                self.max_vertices, MAX_STRESS_VERTICES
            )));
        }
        if !(0.0..=MAX_EDGE_FACTOR).contains(&self.edge_factor) {
            return Err(StressError::InvalidConfig(format!(
                "edge_factor {} is outside [0, {}]",
                self.edge_factor, MAX_EDGE_FACTOR
            )));
        }
        Ok(())
    }
}

/// Summary of a stress run.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StressReport {
    pub trials: u64,
    /// Trials in which a viewpoint exists.
    pub with_viewpoint: usize,
    /// Seeds of the trials whose result disagreed with brute force, ascending.
    pub mismatched_seeds: Vec<u64>,
}

impl StressReport {
    pub fn is_clean(&self) -> bool {
        self.mismatched_seeds.is_empty()
    }
}

/// Checks the finder against brute-force reachability on random graphs.
///
/// Trials are independent and run in parallel on a dedicated thread pool.
/// For every graph it verifies that
/// - vertices share an SCC root iff they are mutually reachable, and
/// - a viewpoint is reported iff some vertex reaches every vertex, and the
///   reported vertex is one of them.
///
/// # Errors
///
/// * `StressError::InvalidConfig` if `config` fails `StressConfig::validate`
/// * `StressError::ThreadPool` if the thread pool cannot be created
pub fn run_stress(config: &StressConfig) -> std::result::Result<StressReport, StressError> {
    config.validate()?;
    let pool = ThreadPoolBuilder::new()
        .num_threads(config.thread_num)
        .build()?;

    let with_viewpoint = AtomicUsize::new(0);
    let mut mismatched_seeds = pool.install(|| {
        (0..config.trials)
            .into_par_iter()
            .filter_map(|trial| {
                let seed = config.seed.wrapping_add(trial);
                let graph = seeded_graph(seed, config.max_vertices, config.edge_factor);
                match check_graph(&graph) {
                    Ok(TrialResult::Agrees { found }) => {
                        if found {
                            with_viewpoint.fetch_add(1, Ordering::Relaxed);
                        }
                        None
                    }
                    Ok(TrialResult::Disagrees) | Err(_) => {
                        warn!("stress trial with seed {} disagrees with brute force", seed);
                        Some(seed)
                    }
                }
            })
            .collect::<Vec<_>>()
    });
    mismatched_seeds.sort_unstable();

    debug!(
        "stress: {} trials, {} mismatches",
        config.trials,
        mismatched_seeds.len()
    );
    Ok(StressReport {
        trials: config.trials,
        with_viewpoint: with_viewpoint.into_inner(),
        mismatched_seeds,
    })
}

enum TrialResult {
    Agrees { found: bool },
    Disagrees,
}

/// Compares one graph's SCC partition and viewpoint with brute force.
fn check_graph(graph: &DiGraph) -> Result<TrialResult> {
    let vertex_count = graph.vertex_count();

    // reach[u][v] is true iff v is reachable from u.
    let mut reach = vec![vec![false; vertex_count]; vertex_count];
    for (src, row) in reach.iter_mut().enumerate() {
        for v in reachable_from(graph, src)? {
            row[v] = true;
        }
    }

    let partition = graph.scc();
    for a in 0..vertex_count {
        for b in 0..vertex_count {
            let mutual = reach[a][b] && reach[b][a];
            if partition.same_component(a, b)? != mutual {
                return Ok(TrialResult::Disagrees);
            }
        }
    }

    let dominators = (0..vertex_count)
        .filter(|&v| reach[v].iter().all(|&r| r))
        .collect::<Vec<_>>();
    let agrees = match ViewpointFinder::new().find(graph)? {
        Some(vertex_id) => dominators.contains(&vertex_id),
        None => dominators.is_empty(),
    };

    Ok(if agrees {
        TrialResult::Agrees {
            found: !dominators.is_empty(),
        }
    } else {
        TrialResult::Disagrees
    })
}
