//! Graph document I/O module
//!
//! This module converts boards to and from their XML document form:
//!
//! - [`document`]: the grammar stage (tags, attributes, declarations)
//! - [`reader`]: `parse` and `load_graph`
//! - [`writer`]: `serialize` and `save_graph`
//! - [`validation`]: collect-all diagnostics for a document
//!
//! `parse(serialize(g)) == g` holds for every graph, including the empty
//! graph and graphs with self-loops.
//!
//! # Example
//!
//! ```no_run
//! use hunters_rabbits::io::{load_graph, save_graph, advance_file};
//!
//! // Load and save
//! let graph = load_graph("board.xml")?;
//! save_graph(&graph, "copy.xml")?;
//!
//! // One-shot: load, play three turns, save
//! let stats = advance_file("board.xml", "after.xml", 3)?;
//! println!("{} vertices black after the last turn", stats.black_after);
//! # Ok::<(), hunters_rabbits::BoardError>(())
//! ```

pub mod document;
pub mod reader;
pub mod validation;
pub mod writer;

// Re-exports
pub use document::{Declaration, GraphDocument, EDGE_TAGS, ROOT_TAG, VERTEX_TAGS};
pub use reader::{get_graph_info, load_graph, parse, parse_bytes, GraphInfo};
pub use validation::{validate_document, ValidationResult};
pub use writer::{
    save_graph, save_graph_with_stats, serialize, serialize_with, Indent, SaveStats,
    WriteOptions,
};

use std::path::Path;

use crate::error::BoardResult;
use crate::transform::{advance_with_stats, AdvanceStats};

/// Load a board, advance it `turns` times, and save the result
///
/// Returns the statistics of the last turn (all zero counts but the vertex
/// and black totals when `turns` is 0).
pub fn advance_file<P1: AsRef<Path>, P2: AsRef<Path>>(
    input: P1,
    output: P2,
    turns: usize,
) -> BoardResult<AdvanceStats> {
    let mut graph = load_graph(input)?;
    let mut stats = AdvanceStats::unchanged(&graph);

    for _ in 0..turns {
        stats = advance_with_stats(&mut graph);
    }

    save_graph(&graph, output)?;
    Ok(stats)
}
