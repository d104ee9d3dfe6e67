use std::path::PathBuf;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::info;
use serde::Serialize;
use viewpoint::algorithms::stress::run_stress;
use viewpoint::algorithms::viewpoint::{ViewpointAnalysis, ViewpointFinder};
use viewpoint::config::{RunConfig, Task};
use viewpoint::loader::load_graph_file;

#[derive(Parser, Debug, Serialize)]
#[command(author, version, about)]
struct Args {
    /// Graph file: `V E` followed by `E` pairs `u v`.
    #[arg(short, long)]
    input: Option<String>,

    /// The task to be performed.
    #[arg(short, long, value_enum)]
    task: Option<Task>,

    /// YAML file providing defaults for every option below.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Always show a progress bar while loading the graph.
    #[arg(long)]
    progress: bool,

    /// Print the effective configuration as YAML and exit.
    #[arg(long)]
    dump_config: bool,

    /// Number of threads for the stress task.
    #[arg(short, long)]
    num_threads: Option<usize>,

    /// Number of random graphs checked by the stress task.
    #[arg(long)]
    trials: Option<u64>,

    /// Largest vertex count of a random graph.
    #[arg(long)]
    max_vertices: Option<usize>,

    /// Edges per vertex in random graphs.
    #[arg(long)]
    edge_factor: Option<f64>,

    /// Seed of the first random graph.
    #[arg(long)]
    seed: Option<u64>,
}

impl Args {
    /// Starts from the YAML file (or defaults) and applies every flag given.
    fn into_config(self) -> Result<RunConfig> {
        let mut config = match &self.config {
            Some(path) => RunConfig::from_yaml_file(path)
                .with_context(|| format!("cannot load configuration {}", path.display()))?,
            None => RunConfig::default(),
        };

        if let Some(input) = self.input {
            config.input = input;
        }
        if let Some(task) = self.task {
            config.task = task;
        }
        config.show_progress |= self.progress;
        if let Some(thread_num) = self.num_threads {
            config.stress.thread_num = thread_num;
        }
        if let Some(trials) = self.trials {
            config.stress.trials = trials;
        }
        if let Some(max_vertices) = self.max_vertices {
            config.stress.max_vertices = max_vertices;
        }
        if let Some(edge_factor) = self.edge_factor {
            config.stress.edge_factor = edge_factor;
        }
        if let Some(seed) = self.seed {
            config.stress.seed = seed;
        }
        Ok(config)
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Args = Args::parse();
    let dump_config = args.dump_config;
    let config = args.into_config()?;

    if dump_config {
        print!("{}", config.to_yaml()?);
        return Ok(());
    }

    match config.task {
        Task::Stress => stress(&config),
        Task::Solve => {
            match analyze_input(&config)?.viewpoint() {
                Some(vertex_id) => println!("Found ViewPoint: {}", vertex_id),
                None => println!("No Viewpoint Exists in the graph G."),
            }
            Ok(())
        }
        Task::Scc => {
            let analysis = analyze_input(&config)?;
            println!("SCC Count: {}", analysis.partition.component_count());
            for component in analysis.partition.components() {
                let members = component
                    .iter()
                    .map(|v| v.to_string())
                    .collect::<Vec<_>>()
                    .join(" ");
                println!("{}: {}", component[0], members);
            }
            Ok(())
        }
        Task::Condense => {
            print!("{}", analyze_input(&config)?.scc_dag);
            Ok(())
        }
    }
}

/// Loads the configured graph and runs the viewpoint search on it.
fn analyze_input(config: &RunConfig) -> Result<ViewpointAnalysis> {
    // Step 1. Load the graph.
    let graph = load_graph_file(&config.input, config.show_progress)
        .with_context(|| format!("cannot load graph {}", config.input))?;

    // Step 2. Run the search, and report the time.
    let start_time = Instant::now();
    let analysis = ViewpointFinder::new().analyze(&graph)?;
    info!("Viewpoint Elapsed Time: {} us", start_time.elapsed().as_micros());
    Ok(analysis)
}

fn stress(config: &RunConfig) -> Result<()> {
    let start_time = Instant::now();
    let report = run_stress(&config.stress)?;
    info!("Stress Elapsed Time: {} us", start_time.elapsed().as_micros());

    println!(
        "Trials: {}, with viewpoint: {}, mismatches: {}",
        report.trials,
        report.with_viewpoint,
        report.mismatched_seeds.len()
    );
    if !report.is_clean() {
        bail!("mismatching seeds: {:?}", report.mismatched_seeds);
    }
    Ok(())
}
