//! Graph document reader
//!
//! Parse graph documents from text, bytes, or files.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::error::{BoardError, BoardResult};
use crate::graph::{Color, Graph};

use super::document::GraphDocument;

/// Parse a graph document
///
/// Deterministic and pure: the same text always yields the same graph. All
/// vertex declarations are applied before any edge declaration.
///
/// # Example
///
/// ```
/// use hunters_rabbits::io::parse;
///
/// let g = parse(r#"<graph><v id="1"/><v id="2" color="w"/><e id1="1" id2="2"/></graph>"#)?;
/// assert_eq!(g.vertex_count(), 2);
/// assert!(g.has_edge("2", "1"));
/// # Ok::<(), hunters_rabbits::BoardError>(())
/// ```
pub fn parse(document: &str) -> BoardResult<Graph> {
    let graph = GraphDocument::from_text(document)?.into_graph()?;

    log::debug!(
        "Parsed graph with {} vertices and {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );

    Ok(graph)
}

/// Parse a graph document from raw bytes
pub fn parse_bytes(bytes: &[u8]) -> BoardResult<Graph> {
    let text = std::str::from_utf8(bytes)
        .map_err(|e| BoardError::malformed(format!("Document is not valid UTF-8: {}", e)))?;
    parse(text)
}

/// Load a graph from a file path
///
/// A missing or unreadable file is reported as `BoardError::Io`; a file
/// that reads fine but breaks the grammar is `MalformedDocument`.
pub fn load_graph<P: AsRef<Path>>(path: P) -> BoardResult<Graph> {
    let path = path.as_ref();
    let io_error = |source| BoardError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(io_error)?;

    let mut reader = BufReader::new(file);
    let mut buffer = Vec::new();
    reader.read_to_end(&mut buffer).map_err(io_error)?;

    log::debug!("Loading graph from '{}'", path.display());
    parse_bytes(&buffer)
}

/// Summary of a graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphInfo {
    /// Number of vertices
    pub vertex_count: usize,
    /// Number of edges
    pub edge_count: usize,
    /// Number of black vertices
    pub black_count: usize,
    /// Number of white vertices
    pub white_count: usize,
    /// Number of self-loops
    pub self_loops: usize,
    /// Number of vertices with no neighbors
    pub isolated: usize,
}

impl GraphInfo {
    /// Summarize a graph
    pub fn from_graph(graph: &Graph) -> Self {
        let black_count = graph.count_color(Color::Black);

        Self {
            vertex_count: graph.vertex_count(),
            edge_count: graph.edge_count(),
            black_count,
            white_count: graph.vertex_count() - black_count,
            self_loops: graph.edges().filter(|(a, b)| a == b).count(),
            isolated: graph.isolated_vertices().count(),
        }
    }
}

/// Load a graph file and summarize it
pub fn get_graph_info<P: AsRef<Path>>(path: P) -> BoardResult<GraphInfo> {
    let graph = load_graph(path)?;
    Ok(GraphInfo::from_graph(&graph))
}
