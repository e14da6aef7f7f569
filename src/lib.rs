//! # meshtopo
//!
//! Half-edge topology queries and traversal over indexed triangle meshes.
//!
//! meshtopo takes the buffers a loader or renderer already has (a flat vertex
//! position array and an optional triangle index array) and builds an
//! adjacency table pairing every edge of every face with the matching edge of
//! its neighbour. On top of that it answers connectivity queries and runs
//! traversals, without copying the mesh data.
//!
//! ## Features
//!
//! - **Half-edge adjacency**: O(1) opposite-edge, face-neighbour and boundary queries
//! - **Vertex queries**: incident faces, neighbours, incident edges, valence
//! - **Traversal**: ordered walk around a vertex, breadth-first shortest paths
//! - **Flexible buffers**: borrowed or owned, `u16`/`u32`/`u64` indices, or non-indexed
//! - **Deterministic non-manifold handling**: configurable [`NonManifoldPolicy`](mesh::NonManifoldPolicy)
//!
//! ## Quick Start
//!
//! ```
//! use meshtopo::prelude::*;
//!
//! // Two triangles forming a quad, sharing the edge (0, 2)
//! let positions = [
//!     0.0, 0.0, 0.0,
//!     1.0, 0.0, 0.0,
//!     1.0, 1.0, 0.0,
//!     0.0, 1.0, 0.0,
//! ];
//! let indices: [u32; 6] = [0, 1, 2, 0, 2, 3];
//!
//! let topo = Topology::new(MeshSnapshot::indexed(&positions, &indices)).unwrap();
//!
//! assert_eq!(topo.vertex_count(), 4);
//! assert_eq!(topo.face_count(), 2);
//!
//! // The diagonal is interior, the outer edges are boundary
//! let diagonal = HalfEdge::new(FaceId::new(0), 2);
//! assert!(!topo.is_edge_on_boundary(diagonal).unwrap());
//! assert_eq!(
//!     topo.opposite_half_edge(diagonal).unwrap(),
//!     Some(HalfEdge::new(FaceId::new(1), 0))
//! );
//!
//! // Vertex 1 reaches vertex 3 in two hops
//! let path = topo.find_shortest_path(VertexId::new(1), VertexId::new(3)).unwrap();
//! assert_eq!(path.map(|p| p.len()), Some(3));
//! ```
//!
//! ## Editing the Mesh
//!
//! The topology never notices buffer edits on its own. Edit through
//! [`Topology::source_mut`](mesh::Topology::source_mut) and call `rebuild`:
//!
//! ```
//! use meshtopo::prelude::*;
//!
//! let buffers: MeshBuffers<u32> = MeshBuffers {
//!     positions: vec![0.0; 12],
//!     indices: Some(vec![0, 1, 2]),
//! };
//! let mut topo = Topology::new(buffers).unwrap();
//!
//! topo.source_mut().indices.as_mut().unwrap().extend([0, 2, 3]);
//! assert_eq!(topo.face_count(), 1); // stale
//!
//! topo.rebuild().unwrap();
//! assert_eq!(topo.face_count(), 2);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod algo;
pub mod error;
pub mod mesh;

/// Prelude module for convenient imports.
///
/// This module re-exports the most commonly used types and functions:
///
/// ```
/// use meshtopo::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Element, Result, TopologyError};
    pub use crate::mesh::{
        FaceId, HalfEdge, MeshBuffers, MeshIndex, MeshSnapshot, MeshSource, NonManifoldPolicy,
        Topology, TopologyOptions, VertexId,
    };
}

// Re-export nalgebra types for convenience
pub use nalgebra;
