//! Python bindings for hunters-rabbits using PyO3
//!
//! This module exposes a playable board to Python, for driving the game from
//! a notebook or a GUI front end.
//!
//! # Usage from Python
//!
//! ```python
//! import hunters_rabbits
//!
//! board = hunters_rabbits.Board("board.xml")
//! board.toggle("3")
//! summary = board.end_turn()
//! print(f"Turn {summary.turn}: {summary.flipped} flipped, {summary.black_after} black")
//!
//! # Documents in and out
//! board = hunters_rabbits.parse(open("board.xml").read())
//! text = hunters_rabbits.serialize(board)
//! ```

use pyo3::exceptions::{PyIOError, PyValueError};
use pyo3::prelude::*;

use crate::error::BoardError;
use crate::graph::{Color, Graph};
use crate::io;
use crate::session::{Session, TurnSummary};

fn to_py_err(e: BoardError) -> PyErr {
    if e.is_io() {
        PyIOError::new_err(e.to_string())
    } else {
        PyValueError::new_err(e.to_string())
    }
}

// ============================================================================
// Python-exposed result classes
// ============================================================================

/// Result of ending a turn.
#[pyclass(name = "TurnSummary")]
#[derive(Clone, Debug)]
pub struct PyTurnSummary {
    /// Turn number after the turn ended
    #[pyo3(get)]
    pub turn: usize,

    /// Vertices flipped by the player
    #[pyo3(get)]
    pub flipped: usize,

    /// Vertices flipped on the previous turn
    #[pyo3(get)]
    pub previous_flipped: Option<usize>,

    /// Black vertices after the rabbits moved
    #[pyo3(get)]
    pub black_after: usize,

    /// Vertices recolored by the rabbits' move
    #[pyo3(get)]
    pub changed: usize,
}

#[pymethods]
impl PyTurnSummary {
    fn __repr__(&self) -> String {
        format!(
            "TurnSummary(turn={}, flipped={}, black_after={})",
            self.turn, self.flipped, self.black_after
        )
    }

    /// Whether this turn flipped as many vertices as the previous one.
    fn flips_match_previous(&self) -> bool {
        self.previous_flipped == Some(self.flipped)
    }
}

impl From<TurnSummary> for PyTurnSummary {
    fn from(summary: TurnSummary) -> Self {
        Self {
            turn: summary.turn,
            flipped: summary.flipped,
            previous_flipped: summary.previous_flipped,
            black_after: summary.stats.black_after,
            changed: summary.stats.changed,
        }
    }
}

// ============================================================================
// Python-exposed board class
// ============================================================================

/// A board in play.
///
/// Colors are reported as the strings "black" and "white".
#[pyclass(name = "Board")]
#[derive(Clone, Debug, Default)]
pub struct PyBoard {
    session: Session,
}

#[pymethods]
impl PyBoard {
    /// Create a board, empty or loaded from a file.
    #[new]
    #[pyo3(signature = (path = None))]
    fn new(path: Option<&str>) -> PyResult<Self> {
        match path {
            Some(path) => Ok(Self {
                session: Session::load(path).map_err(to_py_err)?,
            }),
            None => Ok(Self::default()),
        }
    }

    /// Replace the board with one loaded from a file and restart at turn 0.
    fn load(&mut self, path: &str) -> PyResult<()> {
        let graph = io::load_graph(path).map_err(to_py_err)?;
        self.session.replace_graph(graph);
        Ok(())
    }

    /// Save the board to a file.
    fn save(&self, path: &str) -> PyResult<()> {
        self.session.save(path).map_err(to_py_err)
    }

    /// Flip a vertex for this turn, or cancel its flip.
    ///
    /// Returns the color the vertex now displays.
    fn toggle(&mut self, id: &str) -> PyResult<&'static str> {
        let color = self.session.toggle(id).map_err(to_py_err)?;
        Ok(color.as_str())
    }

    /// Apply this turn's flips and let the rabbits move.
    fn end_turn(&mut self) -> PyTurnSummary {
        self.session.end_turn().into()
    }

    /// Displayed color of every vertex, pending flips included.
    fn colors(&self) -> Vec<(String, &'static str)> {
        self.session
            .graph()
            .vertex_ids()
            .map(|id| {
                let color = self.session.displayed_color(id).unwrap_or_default();
                (id.to_string(), color.as_str())
            })
            .collect()
    }

    /// Displayed black and white vertex counts, pending flips included.
    fn counts(&self) -> (usize, usize) {
        (
            self.session.displayed_count(Color::Black),
            self.session.displayed_count(Color::White),
        )
    }

    /// Every edge as a pair of ids.
    fn edges(&self) -> Vec<(String, String)> {
        self.session
            .graph()
            .edges()
            .map(|(a, b)| (a.to_string(), b.to_string()))
            .collect()
    }

    /// Number of turns ended on this board.
    #[getter]
    fn turn(&self) -> usize {
        self.session.turn()
    }

    /// Number of vertices flipped so far this turn.
    #[getter]
    fn pending_count(&self) -> usize {
        self.session.pending_count()
    }

    fn __len__(&self) -> usize {
        self.session.graph().vertex_count()
    }

    fn __repr__(&self) -> String {
        let graph = self.session.graph();
        format!(
            "Board(vertices={}, edges={}, turn={})",
            graph.vertex_count(),
            graph.edge_count(),
            self.session.turn()
        )
    }
}

impl From<Graph> for PyBoard {
    fn from(graph: Graph) -> Self {
        Self {
            session: Session::new(graph),
        }
    }
}

// ============================================================================
// Python-exposed functions
// ============================================================================

/// Parse a graph document into a new board.
///
/// Raises:
///     ValueError: If the document is malformed or inconsistent
#[pyfunction]
fn parse(document: &str) -> PyResult<PyBoard> {
    io::parse(document).map(PyBoard::from).map_err(to_py_err)
}

/// Serialize a board to a graph document.
///
/// Pending flips are not included.
#[pyfunction]
fn serialize(board: PyRef<'_, PyBoard>) -> PyResult<String> {
    io::serialize(board.session.graph()).map_err(to_py_err)
}

/// Check a graph document and list every problem found.
///
/// Returns:
///     (errors, warnings) as two lists of strings
#[pyfunction]
fn validate(document: &str) -> (Vec<String>, Vec<String>) {
    let result = io::validate_document(document);
    (result.errors, result.warnings)
}

/// Get the version of this library.
#[pyfunction]
fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

// ============================================================================
// Module registration
// ============================================================================

/// Python module for the Hunters and Rabbits board.
#[pymodule]
#[pyo3(name = "hunters_rabbits")]
fn hunters_rabbits_py(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Classes
    m.add_class::<PyBoard>()?;
    m.add_class::<PyTurnSummary>()?;

    // Functions
    m.add_function(wrap_pyfunction!(parse, m)?)?;
    m.add_function(wrap_pyfunction!(serialize, m)?)?;
    m.add_function(wrap_pyfunction!(validate, m)?)?;
    m.add_function(wrap_pyfunction!(version, m)?)?;

    // Module metadata
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;

    Ok(())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Vertex;

    fn make_board() -> PyBoard {
        Graph::from_parts(
            vec![Vertex::black("1"), Vertex::white("2")],
            vec![("1", "2")],
        )
        .unwrap()
        .into()
    }

    #[test]
    fn test_board_colors_include_pending() {
        let mut board = make_board();
        assert_eq!(board.toggle("2").unwrap(), "black");

        let colors = board.colors();
        assert_eq!(
            colors,
            vec![("1".to_string(), "black"), ("2".to_string(), "black")]
        );
        assert_eq!(board.counts(), (2, 0));

        // Cancelling the flip brings both views back together
        board.toggle("2").unwrap();
        assert_eq!(board.counts(), (1, 1));
        assert_eq!(board.colors()[1].1, "white");
    }

    #[test]
    fn test_board_end_turn() {
        let mut board = make_board();
        let summary = board.end_turn();

        assert_eq!(summary.turn, 1);
        assert_eq!(summary.changed, 2);
        assert_eq!(board.turn(), 1);
        assert!(!summary.flips_match_previous());
    }

    #[test]
    fn test_empty_board() {
        let board = PyBoard::new(None).unwrap();
        assert_eq!(board.__len__(), 0);
        assert!(board.edges().is_empty());
    }
}
