//! # Hunters and Rabbits
//!
//! Board model for the Hunters and Rabbits pursuit game - Rust implementation.
//!
//! The board is an undirected graph whose vertices are colored black (a
//! rabbit may be there) or white (no rabbit can be there). Each turn the
//! hunter flips some vertices, then every vertex becomes black if at least
//! one neighbor is black.
//!
//! ## Features
//!
//! - **Graph**: vertices identified by id, undirected edges, self-loops
//! - **Documents**: XML parse and serialize with `parse(serialize(g)) == g`
//! - **Turns**: snapshot-based recoloring and an interactive [`session::Session`]
//!
//! ## Example
//!
//! ```
//! use hunters_rabbits::prelude::*;
//!
//! let mut graph = parse(r#"<graph>
//!     <vertex id="1" color="black"/>
//!     <vertex id="2" color="white"/>
//!     <edge id1="1" id2="2"/>
//! </graph>"#)?;
//!
//! advance(&mut graph);
//! assert_eq!(graph.color("2"), Some(Color::Black));
//! # Ok::<(), BoardError>(())
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

// ============================================================================
// Module declarations
// ============================================================================

pub mod error;
pub mod graph;
pub mod io;
pub mod session;
pub mod traits;
pub mod transform;

// Python bindings (only with python feature)
#[cfg(feature = "python")]
pub mod python;

// ============================================================================
// Prelude module for convenient imports
// ============================================================================

/// Prelude module - import commonly used types with `use hunters_rabbits::prelude::*`
pub mod prelude {
    pub use crate::error::{BoardError, BoardResult};
    pub use crate::graph::{Color, Graph, Vertex, VertexId};
    pub use crate::io::{load_graph, parse, save_graph, serialize, Indent, WriteOptions};
    pub use crate::session::{Session, TurnSummary};
    pub use crate::traits::{Transition, TransitionChain};
    pub use crate::transform::{advance, advance_with_stats, AdvanceStats, Recolor};
}

// ============================================================================
// Crate-level re-exports
// ============================================================================

pub use error::{BoardError, BoardResult};
pub use graph::{Color, Graph, Vertex};
pub use traits::Transition;

// ============================================================================
// Version information
// ============================================================================

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
