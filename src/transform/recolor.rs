//! Per-turn recoloring rule
//!
//! A vertex becomes black when at least one of its neighbors is black,
//! otherwise white. Neighbor colors are always read from the board as it was
//! when the turn began: the full assignment is computed first and only then
//! written back, so the result does not depend on iteration order.

use crate::graph::{Color, ColorMap, Graph};

/// Next color of every vertex, keyed by id
pub type ColorAssignment = ColorMap;

/// Statistics from one recoloring turn
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdvanceStats {
    /// Number of vertices on the board
    pub vertices: usize,
    /// Black vertices before the turn
    pub black_before: usize,
    /// Black vertices after the turn
    pub black_after: usize,
    /// Vertices whose color changed
    pub changed: usize,
}

impl AdvanceStats {
    /// Statistics of a turn that changed nothing
    pub fn unchanged(graph: &Graph) -> Self {
        let black = graph.count_color(Color::Black);
        Self {
            vertices: graph.vertex_count(),
            black_before: black,
            black_after: black,
            changed: 0,
        }
    }

    /// Compare the board against an earlier color snapshot
    pub fn between(before: &ColorMap, graph: &Graph) -> Self {
        let changed = graph
            .vertices()
            .filter(|v| before.get(v.id.as_str()).is_some_and(|c| *c != v.color))
            .count();

        Self {
            vertices: graph.vertex_count(),
            black_before: before.values().filter(|c| c.is_black()).count(),
            black_after: graph.count_color(Color::Black),
            changed,
        }
    }

    /// Whether another turn would leave the board as it is
    pub fn is_fixed_point(&self) -> bool {
        self.changed == 0
    }
}

/// Color a vertex would take on the next turn, or `None` if absent
pub fn next_color(graph: &Graph, id: &str) -> Option<Color> {
    if !graph.has_vertex(id) {
        return None;
    }

    if graph.has_black_neighbor(id) {
        Some(Color::Black)
    } else {
        Some(Color::White)
    }
}

/// Compute the full next-turn assignment without touching the graph
pub fn next_colors(graph: &Graph) -> ColorAssignment {
    graph
        .vertex_ids()
        .map(|id| {
            let color = if graph.has_black_neighbor(id) {
                Color::Black
            } else {
                Color::White
            };
            (id.to_string(), color)
        })
        .collect()
}

/// Write an assignment onto the graph, returning how many colors changed
///
/// Ids in the assignment that are not on the board are ignored.
pub fn apply_assignment(graph: &mut Graph, assignment: &ColorAssignment) -> usize {
    let mut changed = 0;

    for (id, color) in graph.colors_mut() {
        if let Some(next) = assignment.get(id) {
            if *color != *next {
                *color = *next;
                changed += 1;
            }
        }
    }

    changed
}

/// Advance the board by one turn and report what happened
pub fn advance_with_stats(graph: &mut Graph) -> AdvanceStats {
    let black_before = graph.count_color(Color::Black);

    let assignment = next_colors(graph);
    let changed = apply_assignment(graph, &assignment);

    let stats = AdvanceStats {
        vertices: graph.vertex_count(),
        black_before,
        black_after: graph.count_color(Color::Black),
        changed,
    };

    log::debug!(
        "Recolored {} vertices: {} changed, black {} -> {}",
        stats.vertices,
        stats.changed,
        stats.black_before,
        stats.black_after
    );

    stats
}

/// Advance the board by one turn
///
/// Total over every graph, the empty graph included. Only colors change;
/// vertices and edges are left as they are.
pub fn advance(graph: &mut Graph) {
    advance_with_stats(graph);
}
