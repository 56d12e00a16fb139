//! Graph context for board manipulation
//!
//! `Graph` is the central structure of the crate: an undirected adjacency
//! structure keyed by vertex id, with incrementally maintained counts.

use crate::error::{BoardError, BoardResult};

use super::maps::{NeighborSet, VertexEntry, VertexMap};
use super::vertex::{Color, Vertex};

/// Undirected graph of colored vertices
///
/// Invariants maintained by every mutator:
/// - adjacency is symmetric (a self-loop is its own mirror)
/// - an unordered pair is either present once or absent
/// - `edge_count` is the number of present pairs, a self-loop counting once
#[derive(Debug, Clone, Default)]
pub struct Graph {
    /// id → vertex record and neighbor ids
    pub(super) vertices: VertexMap,

    /// Number of distinct unordered pairs present
    pub(super) edge_count: usize,
}

impl Graph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty graph with room for `vertices` vertices
    pub fn with_capacity(vertices: usize) -> Self {
        Self {
            vertices: VertexMap::with_capacity_and_hasher(vertices, Default::default()),
            edge_count: 0,
        }
    }

    /// Build a graph from vertices and edges
    ///
    /// All vertices are added before any edge, so edges may name vertices
    /// listed later. Fails on the first invalid vertex or edge.
    pub fn from_parts<V, E, S>(vertices: V, edges: E) -> BoardResult<Self>
    where
        V: IntoIterator<Item = Vertex>,
        E: IntoIterator<Item = (S, S)>,
        S: AsRef<str>,
    {
        let vertices = vertices.into_iter();
        let mut graph = Self::with_capacity(vertices.size_hint().0);

        for vertex in vertices {
            graph.add_vertex(vertex)?;
        }
        for (u, v) in edges {
            graph.add_edge(u.as_ref(), v.as_ref())?;
        }

        Ok(graph)
    }

    // ========================================================================
    // Vertex accessors
    // ========================================================================

    /// Whether a vertex with this id is on the board
    pub fn has_vertex(&self, id: &str) -> bool {
        self.vertices.contains_key(id)
    }

    /// Get the stored vertex record
    pub fn get_vertex(&self, id: &str) -> BoardResult<&Vertex> {
        self.entry(id).map(|e| &e.vertex)
    }

    /// Current color of a vertex, if present
    pub fn color(&self, id: &str) -> Option<Color> {
        self.vertices.get(id).map(|e| e.vertex.color)
    }

    /// Neighbor ids of a vertex
    pub fn neighbors(&self, id: &str) -> BoardResult<&NeighborSet> {
        self.entry(id).map(|e| &e.neighbors)
    }

    /// Number of vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges (a self-loop counts once)
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Whether the graph has no vertices
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Iterate over vertex records in iteration order
    ///
    /// This is insertion order for a graph that never had a vertex removed.
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> {
        self.vertices.values().map(|e| &e.vertex)
    }

    /// Iterate over vertex ids, in the same order as `vertices`
    pub fn vertex_ids(&self) -> impl Iterator<Item = &str> {
        self.vertices.keys().map(|k| k.as_str())
    }

    // ========================================================================
    // Edge accessors
    // ========================================================================

    /// Whether the unordered pair {u, v} is an edge
    pub fn has_edge(&self, u: &str, v: &str) -> bool {
        match (self.vertices.get(u), self.vertices.get(v)) {
            (Some(a), Some(_)) => a.neighbors.contains(v),
            _ => false,
        }
    }

    // ========================================================================
    // Entry access
    // ========================================================================

    pub(super) fn entry(&self, id: &str) -> BoardResult<&VertexEntry> {
        self.vertices
            .get(id)
            .ok_or_else(|| BoardError::UnknownVertex(id.to_string()))
    }

    pub(super) fn entry_mut(&mut self, id: &str) -> BoardResult<&mut VertexEntry> {
        self.vertices
            .get_mut(id)
            .ok_or_else(|| BoardError::UnknownVertex(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_test_graph() -> Graph {
        Graph::from_parts(
            ["1", "2", "3", "4", "5"].map(Vertex::black),
            [("1", "2"), ("1", "3"), ("2", "3"), ("3", "4")],
        )
        .unwrap()
    }

    #[test]
    fn test_context_creation() {
        let g = make_test_graph();

        assert_eq!(g.vertex_count(), 5);
        assert_eq!(g.edge_count(), 4);
        assert!(!g.is_empty());
        assert!(Graph::new().is_empty());
    }

    #[test]
    fn test_has_edge() {
        let g = make_test_graph();

        assert!(g.has_edge("1", "2"));
        assert!(g.has_edge("2", "1"));
        assert!(g.has_edge("3", "4"));
        assert!(!g.has_edge("2", "4"));
        assert!(!g.has_edge("1", "99"));
        assert!(!g.has_edge("99", "99"));
    }

    #[test]
    fn test_neighbors() {
        let g = make_test_graph();

        let mut n3: Vec<_> = g.neighbors("3").unwrap().iter().cloned().collect();
        n3.sort();
        assert_eq!(n3, vec!["1", "2", "4"]);
        assert!(g.neighbors("5").unwrap().is_empty());
        assert!(matches!(
            g.neighbors("6"),
            Err(BoardError::UnknownVertex(id)) if id == "6"
        ));
    }

    #[test]
    fn test_get_vertex() {
        let g = make_test_graph();

        assert_eq!(g.get_vertex("2").unwrap().color, Color::Black);
        assert_eq!(g.color("2"), Some(Color::Black));
        assert_eq!(g.color("9"), None);
        assert!(g.get_vertex("9").is_err());
    }

    #[test]
    fn test_from_parts_forward_reference() {
        let g = Graph::from_parts(
            vec![Vertex::white("late"), Vertex::black("early")],
            vec![("early", "late")],
        )
        .unwrap();
        assert!(g.has_edge("late", "early"));
    }

    #[test]
    fn test_from_parts_rejects_duplicate_edge() {
        let result = Graph::from_parts(
            ["a", "b"].map(Vertex::black),
            [("a", "b"), ("b", "a")],
        );
        assert!(matches!(result, Err(BoardError::EdgeExists { .. })));
    }

    #[test]
    fn test_vertex_iteration_order() {
        let g = make_test_graph();
        let ids: Vec<_> = g.vertex_ids().collect();
        assert_eq!(ids, vec!["1", "2", "3", "4", "5"]);
    }
}
