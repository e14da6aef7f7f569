//! Traversal algorithms over a [`Topology`](crate::mesh::Topology).
//!
//! - [`walk_around_vertex`]: ordered, one-directional walk through the faces around a vertex
//! - [`find_shortest_path`]: breadth-first shortest path between two vertices
//! - [`hop_distances`]: breadth-first edge-count distances from one vertex
//! - [`stats`]: connectivity summary (boundary, non-manifold edges, valence)

pub mod path;
pub mod stats;
pub mod walk;

pub use path::{find_shortest_path, hop_distances};
pub use stats::{stats, TopologyStats};
pub use walk::walk_around_vertex;
