//! Interactive play session
//!
//! A [`Session`] owns one board plus the state of the turn in progress: the
//! vertices the hunter has shot this turn and the turn counter. Ending the
//! turn applies the shots and then lets the rabbits move by one recoloring
//! step.
//!
//! # Example
//!
//! ```
//! use hunters_rabbits::graph::{Color, Graph, Vertex};
//! use hunters_rabbits::session::Session;
//!
//! let graph = Graph::from_parts(
//!     [Vertex::black("1"), Vertex::black("2")],
//!     [("1", "2")],
//! )?;
//! let mut session = Session::new(graph);
//!
//! assert_eq!(session.toggle("1")?, Color::White);
//! let summary = session.end_turn();
//!
//! assert_eq!(summary.turn, 1);
//! assert_eq!(summary.flipped, 1);
//! assert_eq!(session.graph().color("1"), Some(Color::Black));
//! assert_eq!(session.graph().color("2"), Some(Color::White));
//! # Ok::<(), hunters_rabbits::BoardError>(())
//! ```

use std::path::Path;

use crate::error::{BoardError, BoardResult};
use crate::graph::{Color, ColorMap, Graph};
use crate::io::{load_graph, save_graph};
use crate::transform::{advance_with_stats, apply_assignment, AdvanceStats};

/// Outcome of one finished turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnSummary {
    /// Turn number after this turn ended (first turn ends as 1)
    pub turn: usize,
    /// Vertices flipped by the player this turn
    pub flipped: usize,
    /// Vertices flipped on the turn before, if there was one
    pub previous_flipped: Option<usize>,
    /// Statistics of the recoloring step
    pub stats: AdvanceStats,
}

impl TurnSummary {
    /// Whether this turn flipped as many vertices as the previous one
    ///
    /// False on the first turn of a board.
    pub fn flips_match_previous(&self) -> bool {
        self.previous_flipped == Some(self.flipped)
    }
}

/// One board in play
#[derive(Debug, Clone, Default)]
pub struct Session {
    graph: Graph,
    /// Colors the player has chosen this turn, not yet on the board
    pending: ColorMap,
    turn: usize,
    previous_flipped: Option<usize>,
}

impl Session {
    /// Start a session on a board
    pub fn new(graph: Graph) -> Self {
        Self {
            graph,
            ..Default::default()
        }
    }

    /// Start a session on a board loaded from a file
    pub fn load<P: AsRef<Path>>(path: P) -> BoardResult<Self> {
        let graph = load_graph(path.as_ref())?;
        log::info!(
            "Loaded board '{}': {} vertices, {} edges",
            path.as_ref().display(),
            graph.vertex_count(),
            graph.edge_count()
        );
        Ok(Self::new(graph))
    }

    /// Save the board as it stands, without pending flips
    pub fn save<P: AsRef<Path>>(&self, path: P) -> BoardResult<()> {
        save_graph(&self.graph, path)
    }

    /// Swap in a new board and start over from turn 0
    pub fn replace_graph(&mut self, graph: Graph) -> Graph {
        self.pending.clear();
        self.turn = 0;
        self.previous_flipped = None;
        std::mem::replace(&mut self.graph, graph)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The board, without pending flips
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Number of turns ended on this board
    pub fn turn(&self) -> usize {
        self.turn
    }

    /// Pending colors, in the order the vertices were first toggled
    pub fn pending(&self) -> &ColorMap {
        &self.pending
    }

    /// Number of vertices flipped so far this turn
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Color a vertex shows right now, pending flip included
    pub fn displayed_color(&self, id: &str) -> Option<Color> {
        self.pending
            .get(id)
            .copied()
            .or_else(|| self.graph.color(id))
    }

    /// Number of vertices showing `color` right now, pending flips included
    pub fn displayed_count(&self, color: Color) -> usize {
        let flipped_to = self.pending.values().filter(|c| **c == color).count();
        let flipped_from = self.pending.len() - flipped_to;
        self.graph.count_color(color) + flipped_to - flipped_from
    }

    // ========================================================================
    // Turn handling
    // ========================================================================

    /// Flip a vertex for this turn, or cancel an earlier flip of it
    ///
    /// Returns the color the vertex now displays.
    pub fn toggle(&mut self, id: &str) -> BoardResult<Color> {
        let current = self
            .graph
            .color(id)
            .ok_or_else(|| BoardError::UnknownVertex(id.to_string()))?;

        if self.pending.shift_remove(id).is_some() {
            log::debug!("Cancelled flip of vertex '{}'", id);
            return Ok(current);
        }

        let flipped = current.flipped();
        self.pending.insert(id.to_string(), flipped);
        log::debug!("Flipped vertex '{}' to {}", id, flipped);
        Ok(flipped)
    }

    /// Apply pending flips, advance the board one turn, and report
    pub fn end_turn(&mut self) -> TurnSummary {
        let pending = std::mem::take(&mut self.pending);
        let flipped = pending.len();
        apply_assignment(&mut self.graph, &pending);

        let stats = advance_with_stats(&mut self.graph);
        self.turn += 1;

        let summary = TurnSummary {
            turn: self.turn,
            flipped,
            previous_flipped: self.previous_flipped.replace(flipped),
            stats,
        };

        log::info!(
            "Turn {} ended: {} flipped, {} black",
            summary.turn,
            summary.flipped,
            summary.stats.black_after
        );

        summary
    }
}
