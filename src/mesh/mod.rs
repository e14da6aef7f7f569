//! Core mesh topology structures.
//!
//! This module provides the half-edge adjacency table and the [`Topology`]
//! engine that answers connectivity queries over a triangle mesh.
//!
//! # Overview
//!
//! A mesh is supplied as a [`MeshSource`]: a flat `x, y, z` position buffer and
//! an optional triangle index buffer. [`Topology`] borrows or owns that source,
//! never copying its data, and builds an [`AdjacencyTable`] that maps every
//! [`HalfEdge`] to the sibling half-edge of the neighbouring face.
//!
//! # Index Types
//!
//! Mesh elements are identified by type-safe index wrappers:
//! - [`VertexId`] - Identifies a vertex
//! - [`FaceId`] - Identifies a face
//! - [`HalfEdge`] - A `(face, slot)` pair identifying one edge of one face
//!
//! Index buffers may hold `u16`, `u32` or `u64` values ([`MeshIndex`] trait).
//!
//! # Construction
//!
//! ```
//! use meshtopo::mesh::{MeshSnapshot, Topology};
//!
//! let positions = [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.5, 1.0, 0.0];
//! let topo = Topology::new(MeshSnapshot::non_indexed(&positions)).unwrap();
//! assert_eq!(topo.face_count(), 1);
//! ```

mod adjacency;
mod index;
pub mod shapes;
mod source;
mod topology;

pub use adjacency::{AdjacencyTable, NonManifoldPolicy, TopologyOptions};
pub use index::{FaceId, HalfEdge, MeshIndex, VertexId};
pub use source::{MeshBuffers, MeshSnapshot, MeshSource};
pub use topology::Topology;
