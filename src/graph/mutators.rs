//! Graph mutation operations
//!
//! Methods for modifying the board: adding and removing vertices and edges,
//! and editing vertex colors. Each method either succeeds completely or
//! leaves the graph untouched.

use crate::error::{BoardError, BoardResult};

use super::context::Graph;
use super::maps::VertexEntry;
use super::vertex::{Color, Vertex};

impl Graph {
    // ========================================================================
    // Vertex mutation
    // ========================================================================

    /// Add a vertex with no neighbors
    ///
    /// Identity is the id alone: a vertex with a present id is a duplicate
    /// whatever its color.
    pub fn add_vertex(&mut self, vertex: Vertex) -> BoardResult<()> {
        if self.vertices.contains_key(vertex.id.as_str()) {
            return Err(BoardError::DuplicateVertex(vertex.id));
        }

        self.vertices
            .insert(vertex.id.clone(), VertexEntry::new(vertex));
        Ok(())
    }

    /// Remove a vertex and every edge incident to it
    ///
    /// Returns the removed record. Cost is proportional to the degree of the
    /// vertex: the last vertex in iteration order takes the removed one's
    /// place, so the order of the remaining vertices may change.
    pub fn remove_vertex(&mut self, id: &str) -> BoardResult<Vertex> {
        let neighbors: Vec<String> = self.entry(id)?.neighbors.iter().cloned().collect();

        for n in &neighbors {
            self.remove_edge(id, n)?;
        }

        let entry = self
            .vertices
            .swap_remove(id)
            .ok_or_else(|| BoardError::UnknownVertex(id.to_string()))?;

        Ok(entry.vertex)
    }

    // ========================================================================
    // Edge mutation
    // ========================================================================

    /// Add the undirected edge {u, v}; `u == v` adds a self-loop
    pub fn add_edge(&mut self, u: &str, v: &str) -> BoardResult<()> {
        if !self.has_vertex(u) {
            return Err(BoardError::UnknownVertex(u.to_string()));
        }
        if !self.has_vertex(v) {
            return Err(BoardError::UnknownVertex(v.to_string()));
        }
        if self.has_edge(u, v) {
            return Err(BoardError::edge_exists(u, v));
        }

        self.entry_mut(u)?.neighbors.insert(v.to_string());
        if u != v {
            self.entry_mut(v)?.neighbors.insert(u.to_string());
        }
        self.edge_count += 1;

        Ok(())
    }

    /// Remove the undirected edge {u, v}
    pub fn remove_edge(&mut self, u: &str, v: &str) -> BoardResult<()> {
        if !self.has_edge(u, v) {
            return Err(BoardError::edge_not_found(u, v));
        }

        self.entry_mut(u)?.neighbors.swap_remove(v);
        if u != v {
            self.entry_mut(v)?.neighbors.swap_remove(u);
        }
        self.edge_count -= 1;

        Ok(())
    }

    // ========================================================================
    // Color mutation
    // ========================================================================

    /// Set the color of a vertex, returning the previous color
    pub fn set_color(&mut self, id: &str, color: Color) -> BoardResult<Color> {
        let vertex = &mut self.entry_mut(id)?.vertex;
        Ok(std::mem::replace(&mut vertex.color, color))
    }

    /// Flip the color of a vertex, returning the new color
    pub fn flip_color(&mut self, id: &str) -> BoardResult<Color> {
        let vertex = &mut self.entry_mut(id)?.vertex;
        vertex.color = vertex.color.flipped();
        Ok(vertex.color)
    }

    /// Iterate over every vertex color mutably, in insertion order
    ///
    /// Ids stay read-only so the map keys cannot drift from the records.
    pub fn colors_mut(&mut self) -> impl Iterator<Item = (&str, &mut Color)> {
        self.vertices
            .iter_mut()
            .map(|(id, e)| (id.as_str(), &mut e.vertex.color))
    }

    /// Remove every vertex and edge
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.edge_count = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_test_graph() -> Graph {
        Graph::from_parts(
            ["1", "2", "3", "4"].map(Vertex::black),
            [("1", "2"), ("1", "3"), ("2", "3"), ("3", "4")],
        )
        .unwrap()
    }

    fn sorted_neighbors(g: &Graph, id: &str) -> Vec<String> {
        let mut n: Vec<_> = g.neighbors(id).unwrap().iter().cloned().collect();
        n.sort();
        n
    }

    #[test]
    fn test_add_vertex() {
        let mut g = make_test_graph();
        g.add_vertex(Vertex::black("5")).unwrap();

        assert_eq!(g.vertex_count(), 5);
        assert!(g.has_vertex("5"));
        assert!(g.neighbors("5").unwrap().is_empty());
    }

    #[test]
    fn test_add_vertex_already_in() {
        let mut g = make_test_graph();

        assert!(matches!(
            g.add_vertex(Vertex::black("1")),
            Err(BoardError::DuplicateVertex(_))
        ));
        // Same id, different color is still the same vertex
        assert!(matches!(
            g.add_vertex(Vertex::white("1")),
            Err(BoardError::DuplicateVertex(_))
        ));
        assert_eq!(g.vertex_count(), 4);
        assert_eq!(g.color("1"), Some(Color::Black));
    }

    #[test]
    fn test_add_edge() {
        let mut g = make_test_graph();
        g.add_vertex(Vertex::black("5")).unwrap();
        g.add_edge("4", "5").unwrap();

        assert_eq!(g.edge_count(), 5);
        assert!(g.has_edge("5", "4"));
        assert_eq!(sorted_neighbors(&g, "5"), vec!["4"]);

        g.add_edge("4", "1").unwrap();
        assert_eq!(g.edge_count(), 6);
        assert_eq!(sorted_neighbors(&g, "4"), vec!["1", "3", "5"]);
    }

    #[test]
    fn test_add_edge_already_in() {
        let mut g = make_test_graph();

        assert!(matches!(
            g.add_edge("3", "2"),
            Err(BoardError::EdgeExists { .. })
        ));
        assert_eq!(g.edge_count(), 4);
    }

    #[test]
    fn test_add_edge_missing_vertex() {
        let mut g = make_test_graph();

        assert!(matches!(
            g.add_edge("1", "5"),
            Err(BoardError::UnknownVertex(id)) if id == "5"
        ));
        assert!(matches!(
            g.add_edge("5", "6"),
            Err(BoardError::UnknownVertex(_))
        ));
        assert_eq!(g.edge_count(), 4);
        assert!(!g.has_edge("1", "5"));
    }

    #[test]
    fn test_self_loop() {
        let mut g = make_test_graph();
        g.add_edge("2", "2").unwrap();

        assert_eq!(g.edge_count(), 5);
        assert!(g.has_edge("2", "2"));
        assert_eq!(sorted_neighbors(&g, "2"), vec!["1", "2", "3"]);
        assert!(matches!(
            g.add_edge("2", "2"),
            Err(BoardError::EdgeExists { .. })
        ));

        g.remove_edge("2", "2").unwrap();
        assert_eq!(g.edge_count(), 4);
        assert!(!g.has_edge("2", "2"));
        assert!(matches!(
            g.remove_edge("2", "2"),
            Err(BoardError::EdgeNotFound { .. })
        ));
    }

    #[test]
    fn test_remove_vertex() {
        let mut g = make_test_graph();
        let removed = g.remove_vertex("1").unwrap();

        assert_eq!(removed.id, "1");
        assert!(!g.has_vertex("1"));
        assert!(!g.has_edge("1", "2"));
        assert!(g.has_edge("2", "3"));
        assert_eq!(g.vertex_count(), 3);
        assert_eq!(g.edge_count(), 2);
        assert!(g.neighbors("1").is_err());
        assert_eq!(sorted_neighbors(&g, "3"), vec!["2", "4"]);

        g.remove_vertex("2").unwrap();
        assert_eq!(g.vertex_count(), 2);
        assert_eq!(g.edge_count(), 1);
        assert_eq!(sorted_neighbors(&g, "3"), vec!["4"]);
        assert_eq!(sorted_neighbors(&g, "4"), vec!["3"]);
    }

    #[test]
    fn test_remove_vertex_with_self_loop() {
        let mut g = make_test_graph();
        g.add_edge("3", "3").unwrap();
        assert_eq!(g.edge_count(), 5);

        g.remove_vertex("3").unwrap();
        assert_eq!(g.edge_count(), 1);
        assert!(g.has_edge("1", "2"));
    }

    #[test]
    fn test_remove_vertex_missing() {
        let mut g = make_test_graph();

        assert!(matches!(
            g.remove_vertex("5"),
            Err(BoardError::UnknownVertex(_))
        ));
        assert_eq!(g.vertex_count(), 4);
        assert_eq!(g.edge_count(), 4);
    }

    #[test]
    fn test_remove_vertex_moves_last_into_place() {
        let mut g = make_test_graph();
        g.remove_vertex("2").unwrap();

        let ids: Vec<_> = g.vertex_ids().collect();
        assert_eq!(ids, vec!["1", "4", "3"]);

        // Edges still come out once each after the reorder
        let mut edges: Vec<_> = g.edges().collect();
        edges.sort();
        assert_eq!(edges, vec![("1", "3"), ("4", "3")]);
    }

    #[test]
    fn test_remove_head_vertex_of_large_graph() {
        let ids: Vec<String> = (0..20_000).map(|i| i.to_string()).collect();
        let mut g = Graph::from_parts(
            ids.iter().map(|id| Vertex::white(id.as_str())),
            Vec::<(&str, &str)>::new(),
        )
        .unwrap();

        for id in &ids[..2_000] {
            g.remove_vertex(id).unwrap();
        }

        assert_eq!(g.vertex_count(), 18_000);
        assert!(!g.has_vertex("0"));
        assert!(g.has_vertex("19999"));
    }

    #[test]
    fn test_remove_edge() {
        let mut g = make_test_graph();
        g.remove_edge("1", "2").unwrap();

        assert!(!g.has_edge("1", "2"));
        assert_eq!(g.vertex_count(), 4);
        assert_eq!(g.edge_count(), 3);
        assert_eq!(sorted_neighbors(&g, "1"), vec!["3"]);

        g.remove_edge("3", "1").unwrap();
        assert!(g.neighbors("1").unwrap().is_empty());
        assert_eq!(g.edge_count(), 2);
    }

    #[test]
    fn test_remove_edge_missing() {
        let mut g = make_test_graph();

        assert!(matches!(
            g.remove_edge("1", "4"),
            Err(BoardError::EdgeNotFound { .. })
        ));
        assert_eq!(g.edge_count(), 4);
    }

    #[test]
    fn test_remove_everything() {
        let mut g = make_test_graph();
        for (u, v) in [("1", "2"), ("1", "3"), ("2", "3"), ("3", "4")] {
            g.remove_edge(u, v).unwrap();
        }
        assert_eq!(g.edge_count(), 0);
        assert_eq!(g.vertex_count(), 4);

        for id in ["1", "2", "3", "4"] {
            g.remove_vertex(id).unwrap();
        }
        assert!(g.is_empty());
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn test_counts_track_mutations() {
        let mut g = Graph::new();
        let ids = ["a", "b", "c", "d"];
        for id in ids {
            g.add_vertex(Vertex::white(id)).unwrap();
        }

        let mut expected_edges = 0;
        for (i, u) in ids.iter().enumerate() {
            for v in &ids[i..] {
                g.add_edge(u, v).unwrap();
                expected_edges += 1;
                assert_eq!(g.edge_count(), expected_edges);
            }
        }
        assert_eq!(g.edge_count(), 10);

        g.remove_vertex("a").unwrap();
        assert_eq!(g.vertex_count(), 3);
        // a had b, c, d and its self-loop
        assert_eq!(g.edge_count(), 6);
        assert_eq!(g.edges().count(), g.edge_count());
    }

    #[test]
    fn test_color_edits() {
        let mut g = make_test_graph();

        assert_eq!(g.set_color("1", Color::White).unwrap(), Color::Black);
        assert_eq!(g.color("1"), Some(Color::White));
        assert_eq!(g.flip_color("1").unwrap(), Color::Black);
        assert!(g.flip_color("nope").is_err());
    }

    #[test]
    fn test_colors_mut() {
        let mut g = make_test_graph();
        for (id, color) in g.colors_mut() {
            if id != "3" {
                *color = Color::White;
            }
        }

        assert_eq!(g.count_color(Color::White), 3);
        assert_eq!(g.color("3"), Some(Color::Black));
        assert_eq!(g.edge_count(), 4);
    }

    // ========================================================================
    // Random operation sequences against a set model
    // ========================================================================

    use proptest::prelude::*;
    use std::collections::BTreeSet;

    #[derive(Debug, Clone)]
    enum Op {
        AddVertex(u8, bool),
        RemoveVertex(u8),
        AddEdge(u8, u8),
        RemoveEdge(u8, u8),
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        // Small id universe so duplicates and misses are common
        let id = 0u8..6;
        prop_oneof![
            (id.clone(), any::<bool>()).prop_map(|(v, black)| Op::AddVertex(v, black)),
            id.clone().prop_map(Op::RemoveVertex),
            (id.clone(), id.clone()).prop_map(|(u, v)| Op::AddEdge(u, v)),
            (id.clone(), id).prop_map(|(u, v)| Op::RemoveEdge(u, v)),
        ]
    }

    fn pair(u: u8, v: u8) -> (String, String) {
        (u.min(v).to_string(), u.max(v).to_string())
    }

    fn edge_set(g: &Graph) -> BTreeSet<(String, String)> {
        g.edges()
            .map(|(a, b)| {
                if a <= b {
                    (a.to_string(), b.to_string())
                } else {
                    (b.to_string(), a.to_string())
                }
            })
            .collect()
    }

    proptest! {
        #![proptest_config(ProptestConfig { cases: 128, .. ProptestConfig::default() })]

        #[test]
        fn counts_match_model(ops in proptest::collection::vec(op_strategy(), 0..80)) {
            let mut g = Graph::new();
            let mut ids: BTreeSet<String> = BTreeSet::new();
            let mut edges: BTreeSet<(String, String)> = BTreeSet::new();

            for op in ops {
                match op {
                    Op::AddVertex(v, black) => {
                        let vertex = if black {
                            Vertex::black(v.to_string())
                        } else {
                            Vertex::white(v.to_string())
                        };
                        let ok = g.add_vertex(vertex).is_ok();
                        prop_assert_eq!(ok, ids.insert(v.to_string()));
                    }
                    Op::RemoveVertex(v) => {
                        let ok = g.remove_vertex(&v.to_string()).is_ok();
                        prop_assert_eq!(ok, ids.remove(&v.to_string()));
                        let id = v.to_string();
                        edges.retain(|(a, b)| *a != id && *b != id);
                    }
                    Op::AddEdge(u, v) => {
                        let ok = g.add_edge(&u.to_string(), &v.to_string()).is_ok();
                        let expected = ids.contains(&u.to_string())
                            && ids.contains(&v.to_string())
                            && !edges.contains(&pair(u, v));
                        prop_assert_eq!(ok, expected);
                        if ok {
                            edges.insert(pair(u, v));
                        }
                    }
                    Op::RemoveEdge(u, v) => {
                        let ok = g.remove_edge(&u.to_string(), &v.to_string()).is_ok();
                        prop_assert_eq!(ok, edges.remove(&pair(u, v)));
                    }
                }

                prop_assert_eq!(g.vertex_count(), ids.len());
                prop_assert_eq!(g.edge_count(), edges.len());
                prop_assert_eq!(edge_set(&g), edges.clone());
                for (a, b) in &edges {
                    prop_assert!(g.has_edge(b, a));
                }
            }
        }
    }

    #[test]
    fn test_clear() {
        let mut g = make_test_graph();
        g.clear();

        assert!(g.is_empty());
        assert_eq!(g.edge_count(), 0);
        g.add_vertex(Vertex::black("1")).unwrap();
        assert_eq!(g.vertex_count(), 1);
    }
}
