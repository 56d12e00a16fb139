//! Graph map types
//!
//! Defines the backing structures of the board. Everything is keyed by
//! vertex id, so no lookup ever needs a full `Vertex` value.

use std::hash::BuildHasherDefault;

use indexmap::{IndexMap, IndexSet};
use rustc_hash::FxHasher;

use super::vertex::{Color, Vertex, VertexId};

/// Hasher used by every board map
pub type FxBuildHasher = BuildHasherDefault<FxHasher>;

/// Neighbor ids of one vertex
pub type NeighborSet = IndexSet<VertexId, FxBuildHasher>;

/// Vertex map: id → VertexEntry
///
/// Iterates in insertion order until a removal swaps the last entry into
/// the freed slot.
pub type VertexMap = IndexMap<VertexId, VertexEntry, FxBuildHasher>;

/// Color map: id → color, used for snapshots and pending edits
pub type ColorMap = IndexMap<VertexId, Color, FxBuildHasher>;

/// Entry in the vertex map - the stored record and its adjacency
#[derive(Debug, Clone)]
pub struct VertexEntry {
    /// The vertex record
    pub vertex: Vertex,
    /// Ids adjacent to this vertex (contains its own id for a self-loop)
    pub neighbors: NeighborSet,
}

impl VertexEntry {
    /// Create an entry with no neighbors
    pub fn new(vertex: Vertex) -> Self {
        Self {
            vertex,
            neighbors: NeighborSet::default(),
        }
    }

    /// Number of neighbor ids
    pub fn degree(&self) -> usize {
        self.neighbors.len()
    }

    /// Whether the vertex is adjacent to itself
    pub fn has_self_loop(&self) -> bool {
        self.neighbors.contains(self.vertex.id.as_str())
    }
}

/// Build a color map from (id, color) pairs
pub fn build_color_map<I, S>(pairs: I) -> ColorMap
where
    I: IntoIterator<Item = (S, Color)>,
    S: Into<VertexId>,
{
    pairs
        .into_iter()
        .map(|(id, color)| (id.into(), color))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_starts_isolated() {
        let entry = VertexEntry::new(Vertex::white("a"));
        assert_eq!(entry.degree(), 0);
        assert!(!entry.has_self_loop());
    }

    #[test]
    fn test_entry_self_loop() {
        let mut entry = VertexEntry::new(Vertex::black("a"));
        entry.neighbors.insert("b".to_string());
        assert!(!entry.has_self_loop());

        entry.neighbors.insert("a".to_string());
        assert!(entry.has_self_loop());
        assert_eq!(entry.degree(), 2);
    }

    #[test]
    fn test_build_color_map_preserves_order() {
        let map = build_color_map([("z", Color::Black), ("a", Color::White)]);
        let keys: Vec<_> = map.keys().map(|k| k.as_str()).collect();
        assert_eq!(keys, vec!["z", "a"]);
        assert_eq!(map.get("a"), Some(&Color::White));
    }
}
