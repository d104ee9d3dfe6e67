use thiserror::Error;

/// Errors raised by the graph core.
///
/// Both are input-contract violations and are never clamped or ignored.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("vertex {vertex} is out of range for a graph with {vertex_count} vertices")]
    InvalidVertex { vertex: usize, vertex_count: usize },

    /// A finishing stack handed to the second Kosaraju pass does not list
    /// every vertex exactly once.
    #[error("finishing stack is not a permutation of 0..{vertex_count}: {reason}")]
    InvalidFinishStack {
        vertex_count: usize,
        reason: String,
    },
}

/// Errors raised while reading a graph description file.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file ended before the header or an announced edge was complete.
    #[error("unexpected end of input while reading {what}")]
    MissingToken { what: &'static str },

    #[error("invalid token `{token}` while reading {what}")]
    InvalidToken { token: String, what: &'static str },

    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Errors raised while loading a YAML run configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Errors raised by a stress run.
#[derive(Error, Debug)]
pub enum StressError {
    #[error("invalid stress configuration: {0}")]
    InvalidConfig(String),

    #[error("cannot build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

pub type Result<T> = std::result::Result<T, GraphError>;
