//! Vertex record and color
//!
//! A vertex is identified by its id alone. The color is mutable payload and
//! takes no part in equality or hashing.

use std::borrow::Borrow;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::error::BoardError;

/// Vertex identifier
pub type VertexId = String;

/// Binary vertex state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    /// Black (the default for a freshly declared vertex)
    #[default]
    Black,
    /// White
    White,
}

impl Color {
    /// The opposite color
    pub fn flipped(self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    /// Canonical lowercase name, as written to documents
    pub fn as_str(self) -> &'static str {
        match self {
            Color::Black => "black",
            Color::White => "white",
        }
    }

    /// Whether this is `Black`
    pub fn is_black(self) -> bool {
        self == Color::Black
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Color {
    type Err = BoardError;

    /// Accepts `black`, `b`, `white`, `w`, trimmed and in any case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "black" | "b" => Ok(Color::Black),
            "white" | "w" => Ok(Color::White),
            _ => Err(BoardError::malformed(format!(
                "Unrecognized vertex color: \"{}\"",
                s
            ))),
        }
    }
}

/// A board vertex: id plus current color
#[derive(Debug, Clone)]
pub struct Vertex {
    /// Identity of the vertex
    pub id: VertexId,
    /// Current color
    pub color: Color,
}

impl Vertex {
    /// Create a vertex with the given color
    pub fn new(id: impl Into<VertexId>, color: Color) -> Self {
        Self {
            id: id.into(),
            color,
        }
    }

    /// Create a black vertex
    pub fn black(id: impl Into<VertexId>) -> Self {
        Self::new(id, Color::Black)
    }

    /// Create a white vertex
    pub fn white(id: impl Into<VertexId>) -> Self {
        Self::new(id, Color::White)
    }
}

impl PartialEq for Vertex {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Vertex {}

impl Hash for Vertex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

// Hash is the id's hash, so a set of vertices can be queried by id.
impl Borrow<str> for Vertex {
    fn borrow(&self) -> &str {
        &self.id
    }
}
