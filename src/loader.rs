use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use indicatif::{ProgressBar, ProgressStyle};
use log::{info, warn};

use crate::config::{PROGRESS_EDGE_THRESHOLD, READ_BUFFER_SIZE};
use crate::error::LoadError;
use crate::types::DiGraph;

/// Loads a graph description file.
///
/// # Format
/// Whitespace-separated non-negative integers:
/// - the vertex count `V` and the edge count `E`,
/// - followed by `E` pairs `u v`, one directed edge `u -> v` each.
///
/// Tokens after the `E`-th pair are ignored with a warning.
///
/// # Arguments
/// * `file_path` - Path to the graph file
/// * `show_progress` - Always show a progress bar; otherwise only large graphs get one
///
/// # Errors
/// * `LoadError::Io` if the file cannot be read
/// * `LoadError::MissingToken` / `LoadError::InvalidToken` for malformed content
/// * `LoadError::Graph` if an endpoint is outside `[0, V)`
pub fn load_graph_file<P: AsRef<Path>>(
    file_path: P,
    show_progress: bool,
) -> Result<DiGraph, LoadError> {
    let file_path = file_path.as_ref();
    let graph_file = File::open(file_path)?;
    let mut graph_reader = BufReader::with_capacity(READ_BUFFER_SIZE, graph_file);
    let mut content = String::new();
    graph_reader.read_to_string(&mut content)?;

    let graph = parse_graph(&content, show_progress)?;
    info!("loaded graph from {}", file_path.display());
    Ok(graph)
}

/// Parses a graph description held in memory. See `load_graph_file` for the format.
pub fn parse_graph(content: &str, show_progress: bool) -> Result<DiGraph, LoadError> {
    let mut tokens = content.split_whitespace();

    let vertex_count = next_number(&mut tokens, "vertex count")?;
    let edge_count = next_number(&mut tokens, "edge count")?;

    let pb = if show_progress || edge_count >= PROGRESS_EDGE_THRESHOLD {
        loading_bar(edge_count as u64)
    } else {
        ProgressBar::hidden()
    };

    let mut edges = Vec::with_capacity(edge_count.min(content.len() / 4 + 1));
    for _ in 0..edge_count {
        let src = next_number(&mut tokens, "edge source")?;
        let dst = next_number(&mut tokens, "edge destination")?;
        edges.push((src, dst));
        pb.inc(1);
    }
    pb.finish_and_clear();

    let trailing = tokens.count();
    if trailing > 0 {
        warn!("ignoring {} trailing tokens after {} edges", trailing, edge_count);
    }

    Ok(DiGraph::build(vertex_count, edges)?)
}

fn next_number<'a, I>(tokens: &mut I, what: &'static str) -> Result<usize, LoadError>
where
    I: Iterator<Item = &'a str>,
{
    let token = tokens.next().ok_or(LoadError::MissingToken { what })?;
    token.parse::<usize>().map_err(|_| LoadError::InvalidToken {
        token: token.to_string(),
        what,
    })
}

fn loading_bar(len: u64) -> ProgressBar {
    let pb = ProgressBar::new(len);
    let template =
        "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {msg}";
    if let Ok(style) = ProgressStyle::default_bar().template(template) {
        pb.set_style(style.progress_chars("=>-"));
    }
    pb.set_message("Graph Loading.");
    pb
}

#[cfg(test)]
mod test_loader {
    use std::io::Write;

    use super::*;
    use crate::error::GraphError;
    use crate::types::graph_query::GraphQuery;

    #[test]
    fn test_parse_graph() {
        let graph = parse_graph("4 4\n0 1\n1 2\n2 0\n0 3\n", false).unwrap();
        assert_eq!(graph.vertex_count(), 4);
        assert_eq!(graph.edge_count(), 4);
        assert_eq!(graph.successors(0).unwrap(), &[1, 3]);
    }

    #[test]
    fn test_parse_graph_any_whitespace() {
        let graph = parse_graph("3 2 0 1\t1 2", false).unwrap();
        assert_eq!(graph.edges().collect::<Vec<_>>(), vec![(0, 1), (1, 2)]);
    }

    #[test]
    fn test_parse_graph_without_edges() {
        let graph = parse_graph("2 0", false).unwrap();
        assert_eq!(graph.vertex_count(), 2);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_trailing_tokens_are_ignored() {
        let graph = parse_graph("2 1\n0 1\n1 0\n", false).unwrap();
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_short_input() {
        assert!(matches!(
            parse_graph("", false),
            Err(LoadError::MissingToken { what: "vertex count" })
        ));
        assert!(matches!(
            parse_graph("3 2\n0 1\n1", false),
            Err(LoadError::MissingToken { what: "edge destination" })
        ));
    }

    #[test]
    fn test_garbage_and_negative_tokens() {
        assert!(matches!(
            parse_graph("3 x", false),
            Err(LoadError::InvalidToken { what: "edge count", .. })
        ));
        match parse_graph("3 1\n-1 2\n", false) {
            Err(LoadError::InvalidToken { token, what }) => {
                assert_eq!(token, "-1");
                assert_eq!(what, "edge source");
            }
            other => panic!("unexpected result: {:?}", other.map(|g| g.to_string())),
        }
    }

    #[test]
    fn test_out_of_range_vertex() {
        match parse_graph("2 1\n0 2\n", false) {
            Err(LoadError::Graph(err)) => assert_eq!(
                err,
                GraphError::InvalidVertex {
                    vertex: 2,
                    vertex_count: 2
                }
            ),
            other => panic!("unexpected result: {:?}", other.map(|g| g.to_string())),
        }
    }

    #[test]
    fn test_load_graph_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "3 3\n0 1\n1 2\n2 0\n").unwrap();

        let graph = load_graph_file(file.path(), true).unwrap();
        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.successors(2).unwrap(), &[0]);
    }

    /// Loads the bundled sample graph: {0, 1, 2} -> {3, 4}, with 5 -> 0.
    #[test]
    fn test_read_from_file() {
        let graph = load_graph_file("data/ex4.in", false).unwrap();
        assert_eq!(graph.vertex_count(), 6);
        assert_eq!(graph.edge_count(), 7);
        assert_eq!(graph.successors(5).unwrap(), &[0]);
    }

    #[test]
    fn test_missing_file() {
        let err = load_graph_file("no/such/graph.in", false).unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));
    }
}
