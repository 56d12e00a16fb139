//! Board transition module
//!
//! This module provides the per-turn recoloring rule:
//!
//! - [`recolor::advance`]: one turn, in place
//! - [`recolor::next_colors`]: the full next-turn assignment, without mutation
//! - [`Recolor`]: the rule as a [`Transition`](crate::traits::Transition)
//!
//! # Overview
//!
//! Each turn every vertex becomes black if at least one neighbor is black,
//! otherwise white. A self-loop makes a vertex its own neighbor, so a black
//! vertex with a self-loop stays black forever.
//!
//! The turn is computed in two phases:
//!
//! 1. Read the whole board and build a `ColorAssignment`
//! 2. Write the assignment back in one pass
//!
//! # Example
//!
//! ```
//! use hunters_rabbits::graph::{Color, Graph, Vertex};
//! use hunters_rabbits::transform::advance;
//!
//! let mut g = Graph::from_parts(
//!     [Vertex::black("1"), Vertex::white("2"), Vertex::white("3")],
//!     [("1", "2"), ("2", "3")],
//! )?;
//! advance(&mut g);
//!
//! assert_eq!(g.color("1"), Some(Color::White));
//! assert_eq!(g.color("2"), Some(Color::Black));
//! assert_eq!(g.color("3"), Some(Color::White));
//! # Ok::<(), hunters_rabbits::BoardError>(())
//! ```

pub mod recolor;

// Re-export main types and functions
pub use recolor::{
    advance, advance_with_stats, apply_assignment, next_color, next_colors, AdvanceStats,
    ColorAssignment,
};

use crate::graph::Graph;
use crate::traits::Transition;

/// The recoloring rule as a transition
#[derive(Debug, Clone, Copy, Default)]
pub struct Recolor;

impl Transition for Recolor {
    fn name(&self) -> &str {
        "recolor"
    }

    fn apply(&self, graph: &mut Graph) -> AdvanceStats {
        advance_with_stats(graph)
    }
}
