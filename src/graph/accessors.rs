//! Higher-level graph queries
//!
//! Edge enumeration, degree and color queries, and structural equality.

use super::context::Graph;
use super::maps::ColorMap;
use super::vertex::Color;

impl Graph {
    // ========================================================================
    // Edge enumeration
    // ========================================================================

    /// Iterate over every edge exactly once
    ///
    /// Each unordered pair is yielded as `(a, b)` where `a` comes no later
    /// than `b` in vertex iteration order; a self-loop is yielded as `(a, a)`. The mirror of
    /// each pair is suppressed.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.vertices
            .iter()
            .enumerate()
            .flat_map(move |(idx, (id, entry))| {
                entry.neighbors.iter().filter_map(move |n| {
                    match self.vertices.get_index_of(n.as_str()) {
                        Some(n_idx) if n_idx >= idx => Some((id.as_str(), n.as_str())),
                        _ => None,
                    }
                })
            })
    }

    /// Number of neighbor ids of a vertex (0 if absent)
    pub fn degree(&self, id: &str) -> usize {
        self.vertices.get(id).map(|e| e.degree()).unwrap_or(0)
    }

    /// Whether a vertex is adjacent to itself
    pub fn has_self_loop(&self, id: &str) -> bool {
        self.vertices
            .get(id)
            .map(|e| e.has_self_loop())
            .unwrap_or(false)
    }

    /// Ids of vertices with no neighbors
    pub fn isolated_vertices(&self) -> impl Iterator<Item = &str> {
        self.vertices
            .iter()
            .filter(|(_, e)| e.neighbors.is_empty())
            .map(|(id, _)| id.as_str())
    }

    // ========================================================================
    // Color queries
    // ========================================================================

    /// Number of vertices with the given color
    pub fn count_color(&self, color: Color) -> usize {
        self.vertices().filter(|v| v.color == color).count()
    }

    /// Ids of vertices with the given color, in iteration order
    pub fn vertices_with_color(&self, color: Color) -> impl Iterator<Item = &str> {
        self.vertices()
            .filter(move |v| v.color == color)
            .map(|v| v.id.as_str())
    }

    /// Snapshot of every vertex color
    pub fn colors(&self) -> ColorMap {
        self.vertices()
            .map(|v| (v.id.clone(), v.color))
            .collect()
    }

    /// Whether any neighbor of `id` is black
    pub fn has_black_neighbor(&self, id: &str) -> bool {
        self.vertices
            .get(id)
            .map(|e| {
                e.neighbors
                    .iter()
                    .any(|n| self.color(n).is_some_and(Color::is_black))
            })
            .unwrap_or(false)
    }
}

/// Structural equality: same vertex ids with the same colors, same edges.
/// Insertion order is ignored.
impl PartialEq for Graph {
    fn eq(&self, other: &Self) -> bool {
        if self.vertex_count() != other.vertex_count() || self.edge_count != other.edge_count {
            return false;
        }

        self.vertices.iter().all(|(id, entry)| {
            other.vertices.get(id.as_str()).is_some_and(|o| {
                o.vertex.color == entry.vertex.color
                    && o.neighbors.len() == entry.neighbors.len()
                    && entry.neighbors.iter().all(|n| o.neighbors.contains(n.as_str()))
            })
        })
    }
}

impl Eq for Graph {}
