//! Graph document writer
//!
//! Serialize graphs to documents and save them to files.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};
use quick_xml::Writer;

use crate::error::{BoardError, BoardResult};
use crate::graph::Graph;

use super::document::ROOT_TAG;

/// Indentation of child elements
///
/// Only whitespace can be chosen, so every indentation parses back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// No line breaks or indentation
    None,
    /// This many spaces per nesting level
    Spaces(usize),
    /// This many tabs per nesting level
    Tabs(usize),
}

impl Indent {
    fn char_and_size(self) -> Option<(u8, usize)> {
        match self {
            Indent::None => None,
            Indent::Spaces(n) => Some((b' ', n)),
            Indent::Tabs(n) => Some((b'\t', n)),
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Indent::Spaces(2)
    }
}

/// Formatting options for written documents
#[derive(Debug, Clone)]
pub struct WriteOptions {
    /// Indentation of child elements
    pub indent: Indent,
    /// Emit an `<?xml ...?>` declaration first
    pub declaration: bool,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            indent: Indent::default(),
            declaration: true,
        }
    }
}

fn internal(e: impl std::fmt::Display) -> BoardError {
    BoardError::Internal(format!("Failed to write graph document: {}", e))
}

/// Serialize a graph with the default options
///
/// One `vertex` element per vertex in iteration order, then one `edge`
/// element per unordered pair (self-loops included, mirrors suppressed).
/// `parse` of the result is structurally equal to `graph`.
///
/// # Example
///
/// ```
/// use hunters_rabbits::graph::{Graph, Vertex};
/// use hunters_rabbits::io::{parse, serialize};
///
/// let g = Graph::from_parts([Vertex::black("a"), Vertex::white("b")], [("a", "b")])?;
/// let text = serialize(&g)?;
/// assert_eq!(parse(&text)?, g);
/// # Ok::<(), hunters_rabbits::BoardError>(())
/// ```
pub fn serialize(graph: &Graph) -> BoardResult<String> {
    serialize_with(graph, &WriteOptions::default())
}

/// Serialize a graph with explicit formatting options
pub fn serialize_with(graph: &Graph, options: &WriteOptions) -> BoardResult<String> {
    let mut writer = match options.indent.char_and_size() {
        Some((ch, size)) => Writer::new_with_indent(Vec::new(), ch, size),
        None => Writer::new(Vec::new()),
    };

    if options.declaration {
        writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
            .map_err(internal)?;
    }

    if graph.is_empty() {
        writer
            .write_event(Event::Empty(BytesStart::new(ROOT_TAG)))
            .map_err(internal)?;
    } else {
        writer
            .write_event(Event::Start(BytesStart::new(ROOT_TAG)))
            .map_err(internal)?;

        for vertex in graph.vertices() {
            let elem = BytesStart::new("vertex").with_attributes([
                ("id", vertex.id.as_str()),
                ("color", vertex.color.as_str()),
            ]);
            writer.write_event(Event::Empty(elem)).map_err(internal)?;
        }

        for (a, b) in graph.edges() {
            let elem = BytesStart::new("edge").with_attributes([("id1", a), ("id2", b)]);
            writer.write_event(Event::Empty(elem)).map_err(internal)?;
        }

        writer
            .write_event(Event::End(BytesEnd::new(ROOT_TAG)))
            .map_err(internal)?;
    }

    let mut text = String::from_utf8(writer.into_inner()).map_err(internal)?;
    text.push('\n');

    log::trace!(
        "Serialized {} vertices and {} edges ({} bytes)",
        graph.vertex_count(),
        graph.edge_count(),
        text.len()
    );

    Ok(text)
}

/// Statistics from a save
#[derive(Debug, Clone)]
pub struct SaveStats {
    /// Size in bytes
    pub size_bytes: usize,
    /// Number of vertex elements written
    pub vertex_count: usize,
    /// Number of edge elements written
    pub edge_count: usize,
}

/// Save a graph to a file with the default options
pub fn save_graph<P: AsRef<Path>>(graph: &Graph, path: P) -> BoardResult<()> {
    save_graph_with_stats(graph, path, &WriteOptions::default()).map(|_| ())
}

/// Save a graph and return statistics
pub fn save_graph_with_stats<P: AsRef<Path>>(
    graph: &Graph,
    path: P,
    options: &WriteOptions,
) -> BoardResult<SaveStats> {
    let text = serialize_with(graph, options)?;

    let path = path.as_ref();
    let io_error = |source| BoardError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(io_error)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(text.as_bytes()).map_err(io_error)?;
    writer.flush().map_err(io_error)?;

    log::debug!("Saved graph to '{}'", path.display());

    Ok(SaveStats {
        size_bytes: text.len(),
        vertex_count: graph.vertex_count(),
        edge_count: graph.edge_count(),
    })
}
