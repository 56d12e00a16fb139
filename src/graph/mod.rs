//! Board graph module
//!
//! This module provides the undirected graph the game is played on:
//!
//! - [`Graph`]: adjacency structure keyed by vertex id with O(1) counts
//! - [`Vertex`] / [`Color`]: the vertex record and its binary state
//! - [`maps`]: type definitions for the backing maps
//!
//! # Overview
//!
//! Vertices are identified by id alone; color is mutable payload. Edges are
//! unordered pairs of ids, and a self-loop (`u == u`) is an ordinary edge
//! that counts once.
//!
//! # Example
//!
//! ```
//! use hunters_rabbits::graph::{Graph, Vertex};
//!
//! let mut g = Graph::new();
//! g.add_vertex(Vertex::black("a"))?;
//! g.add_vertex(Vertex::white("b"))?;
//! g.add_edge("a", "b")?;
//! g.add_edge("b", "b")?;
//!
//! assert_eq!(g.edge_count(), 2);
//! assert!(g.has_edge("b", "a"));
//! # Ok::<(), hunters_rabbits::BoardError>(())
//! ```
//!
//! # Maps
//!
//! | Map | Description |
//! |-----|-------------|
//! | `VertexMap` | id → VertexEntry (record + neighbor ids) |
//! | `NeighborSet` | neighbor ids of one vertex |
//! | `ColorMap` | id → color, for snapshots and pending edits |

pub mod accessors;
pub mod context;
pub mod maps;
pub mod mutators;
pub mod vertex;

// Re-export main types
pub use context::Graph;
pub use maps::{build_color_map, ColorMap, NeighborSet, VertexEntry, VertexMap};
pub use vertex::{Color, Vertex, VertexId};
