//! Graph document grammar
//!
//! Turns XML text into a list of declarations without touching a `Graph`.
//! The grammar is:
//!
//! ```text
//! <graph>                                  root, any case
//!   <vertex id="1" color="white"/>         or <v .../>; color optional
//!   <edge id1="1" id2="2"/>                or <e .../>
//! </graph>
//! ```
//!
//! Tag and attribute names are matched case-insensitively. Comments, the XML
//! declaration and processing instructions are ignored; anything else is a
//! `MalformedDocument`.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use rustc_hash::FxHashMap;

use crate::error::{BoardError, BoardResult};
use crate::graph::{Color, Graph, Vertex, VertexId};

/// Root tag of every graph document
pub const ROOT_TAG: &str = "graph";

/// Tags declaring a vertex
pub const VERTEX_TAGS: [&str; 2] = ["vertex", "v"];

/// Tags declaring an edge
pub const EDGE_TAGS: [&str; 2] = ["edge", "e"];

/// One child element of the root
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Declaration {
    /// A vertex with its initial color
    Vertex {
        /// Vertex id
        id: VertexId,
        /// Declared color (black when absent)
        color: Color,
    },
    /// An edge between two ids
    Edge {
        /// First endpoint
        id1: VertexId,
        /// Second endpoint
        id2: VertexId,
    },
}

/// Declarations of a document, split by kind, in document order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GraphDocument {
    /// Declared vertices
    pub vertices: Vec<Vertex>,
    /// Declared edges
    pub edges: Vec<(VertexId, VertexId)>,
}

impl GraphDocument {
    /// Read a document, failing on the first grammar violation
    pub fn from_text(text: &str) -> BoardResult<Self> {
        let mut doc = Self::default();
        for decl in scan(text)? {
            doc.push(decl?);
        }
        Ok(doc)
    }

    /// Add a declaration
    pub fn push(&mut self, decl: Declaration) {
        match decl {
            Declaration::Vertex { id, color } => self.vertices.push(Vertex::new(id, color)),
            Declaration::Edge { id1, id2 } => self.edges.push((id1, id2)),
        }
    }

    /// Apply the declarations to a fresh graph
    ///
    /// Every vertex is added before any edge, so an edge may name a vertex
    /// declared later in the document.
    pub fn into_graph(self) -> BoardResult<Graph> {
        Graph::from_parts(self.vertices, self.edges)
    }
}

/// Scan a document into per-element declaration results
///
/// The outer error is fatal (XML syntax, wrong or missing root, stray
/// content); each inner result reports one child element on its own so
/// callers can either stop at the first failure or collect them all.
pub fn scan(text: &str) -> BoardResult<Vec<BoardResult<Declaration>>> {
    let mut reader = Reader::from_str(text);
    reader.config_mut().trim_text(true);

    let mut decls = Vec::new();
    // 0: outside the root, 1: inside the root, 2: inside a declaration
    let mut depth = 0usize;
    let mut root_seen = false;

    loop {
        let event = reader.read_event().map_err(|e| {
            BoardError::malformed(format!(
                "XML syntax error at byte {}: {}",
                reader.buffer_position(),
                e
            ))
        })?;

        match event {
            Event::Start(e) => {
                match depth {
                    0 => {
                        open_root(&e, root_seen)?;
                        root_seen = true;
                    }
                    1 => decls.push(declaration(&e)),
                    _ => return Err(nested_element(&e)),
                }
                depth += 1;
            }
            Event::Empty(e) => match depth {
                0 => {
                    open_root(&e, root_seen)?;
                    root_seen = true;
                }
                1 => decls.push(declaration(&e)),
                _ => return Err(nested_element(&e)),
            },
            Event::End(_) => depth = depth.saturating_sub(1),
            Event::Text(t) => {
                if !t.iter().all(u8::is_ascii_whitespace) {
                    return Err(BoardError::malformed(format!(
                        "Unexpected text content: \"{}\"",
                        String::from_utf8_lossy(&t).trim()
                    )));
                }
            }
            Event::CData(_) => {
                return Err(BoardError::malformed("Unexpected CDATA section"));
            }
            Event::Eof => break,
            // Declaration, comments, processing instructions, doctype
            _ => {}
        }
    }

    if !root_seen {
        return Err(BoardError::malformed(format!(
            "Document has no root element; expected \"{}\"",
            ROOT_TAG
        )));
    }
    if depth > 0 {
        return Err(BoardError::malformed("Document ends inside an open element"));
    }

    log::trace!("Scanned {} graph declarations", decls.len());
    Ok(decls)
}

fn open_root(e: &BytesStart<'_>, root_seen: bool) -> BoardResult<()> {
    let tag = tag_name(e)?;
    if root_seen {
        return Err(BoardError::malformed(format!(
            "Unexpected element after the root: \"{}\"",
            tag
        )));
    }
    if !tag.eq_ignore_ascii_case(ROOT_TAG) {
        return Err(BoardError::malformed(format!(
            "Root tag of a graph document must be \"{}\"; instead, found: \"{}\"",
            ROOT_TAG, tag
        )));
    }
    Ok(())
}

fn nested_element(e: &BytesStart<'_>) -> BoardError {
    let tag = String::from_utf8_lossy(e.name().as_ref()).into_owned();
    BoardError::malformed(format!(
        "Unexpected element \"{}\" inside a vertex or edge declaration",
        tag
    ))
}

fn tag_name(e: &BytesStart<'_>) -> BoardResult<String> {
    std::str::from_utf8(e.name().as_ref())
        .map(str::to_string)
        .map_err(|err| BoardError::malformed(format!("Tag name is not UTF-8: {}", err)))
}

/// Attributes of an element, keyed by lowercased name
fn attributes(e: &BytesStart<'_>) -> BoardResult<FxHashMap<String, String>> {
    let mut map = FxHashMap::default();

    for attr in e.attributes() {
        let attr = attr.map_err(|err| BoardError::malformed(format!("Bad attribute: {}", err)))?;
        let key = std::str::from_utf8(attr.key.as_ref())
            .map_err(|err| BoardError::malformed(format!("Attribute name is not UTF-8: {}", err)))?
            .to_ascii_lowercase();
        let value = attr
            .unescape_value()
            .map_err(|err| BoardError::malformed(format!("Bad value for \"{}\": {}", key, err)))?
            .into_owned();
        map.insert(key, value);
    }

    Ok(map)
}

fn declaration(e: &BytesStart<'_>) -> BoardResult<Declaration> {
    let tag = tag_name(e)?.to_ascii_lowercase();
    let mut attrs = attributes(e)?;

    if VERTEX_TAGS.contains(&tag.as_str()) {
        let id = attrs.remove("id").ok_or_else(|| {
            BoardError::malformed("Vertex element missing \"id\" attribute")
        })?;
        let color = match attrs.get("color") {
            Some(token) => token.parse()?,
            None => Color::default(),
        };
        Ok(Declaration::Vertex { id, color })
    } else if EDGE_TAGS.contains(&tag.as_str()) {
        match (attrs.remove("id1"), attrs.remove("id2")) {
            (Some(id1), Some(id2)) => Ok(Declaration::Edge { id1, id2 }),
            _ => Err(BoardError::malformed(
                "Edge element missing \"id1\" and/or \"id2\" attributes",
            )),
        }
    } else {
        Err(BoardError::malformed(format!(
            "Unrecognized graph element: \"{}\"",
            tag
        )))
    }
}
