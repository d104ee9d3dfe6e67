use std::fs;
use std::path::Path;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::algorithms::stress::StressConfig;
use crate::error::ConfigError;

/// Capacity of the buffered reader used for graph files.
pub const READ_BUFFER_SIZE: usize = 1 << 20;

/// Graph file read when no input is configured.
pub const DEFAULT_INPUT: &str = "ex4.in";

/// Graphs with at least this many edges get a progress bar while loading.
pub const PROGRESS_EDGE_THRESHOLD: usize = 1_000_000;

/// The task performed by the binary.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Task {
    /// Report the viewpoint of the input graph.
    #[default]
    Solve,
    /// Print the strongly connected components of the input graph.
    Scc,
    /// Print the condensation graph of the input graph.
    Condense,
    /// Cross-check the finder on random graphs.
    Stress,
}

/// Effective run configuration: YAML file values overridden by CLI flags.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub input: String,
    pub task: Task,
    /// Force the loading progress bar on, regardless of graph size.
    pub show_progress: bool,
    pub stress: StressConfig,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            input: DEFAULT_INPUT.to_string(),
            task: Task::default(),
            show_progress: false,
            stress: StressConfig::default(),
        }
    }
}

impl RunConfig {
    /// Loads a configuration from a YAML file; missing keys keep their defaults.
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }
}
