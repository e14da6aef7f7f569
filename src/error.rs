//! Error types for meshtopo.
//!
//! This module defines all error types used throughout the library.

use std::fmt;

use thiserror::Error;

/// Result type alias using [`TopologyError`].
pub type Result<T> = std::result::Result<T, TopologyError>;

/// The kind of mesh element an out-of-range index referred to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Element {
    /// A vertex index.
    Vertex,
    /// A face index.
    Face,
    /// A local edge slot within a face (valid range `0..3`).
    EdgeSlot,
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Element::Vertex => f.write_str("vertex"),
            Element::Face => f.write_str("face"),
            Element::EdgeSlot => f.write_str("edge slot"),
        }
    }
}

/// Errors that can occur while building or querying a topology.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TopologyError {
    /// A vertex, face or edge slot index is outside its valid range.
    #[error("{element} index {index} out of range (len {len})")]
    IndexOutOfRange {
        /// Which kind of element was addressed.
        element: Element,
        /// The offending index.
        index: usize,
        /// The number of valid elements of that kind.
        len: usize,
    },

    /// A vertex walk was asked to start from a face that does not contain the vertex.
    #[error("face {face} is not incident to vertex {vertex}")]
    NotIncident {
        /// The vertex being walked around.
        vertex: usize,
        /// The requested start face.
        face: usize,
    },

    /// The position buffer length is not a multiple of 3.
    #[error("position buffer length {len} is not a multiple of 3")]
    MalformedPositions {
        /// Length of the position buffer.
        len: usize,
    },

    /// The index buffer length is not a multiple of 3.
    #[error("index buffer length {len} is not a multiple of 3")]
    MalformedIndices {
        /// Length of the index buffer.
        len: usize,
    },

    /// A non-indexed mesh whose vertex count does not split into triangles.
    #[error("non-indexed mesh has {vertex_count} vertices, not a multiple of 3")]
    MalformedNonIndexed {
        /// Number of vertices in the position buffer.
        vertex_count: usize,
    },

    /// A face references a vertex index that does not exist.
    #[error("face {face} references invalid vertex index {vertex} (vertex count {vertex_count})")]
    InvalidVertexIndex {
        /// The face index.
        face: usize,
        /// The invalid vertex index.
        vertex: usize,
        /// The number of vertices in the mesh.
        vertex_count: usize,
    },

    /// A vertex index does not fit the index buffer's element type.
    #[error("vertex index {index} does not fit a {bits}-bit index buffer")]
    IndexOverflow {
        /// The vertex index that was being stored.
        index: usize,
        /// Width of the index type in bits.
        bits: usize,
    },
}

impl TopologyError {
    /// Create an out-of-range error.
    pub fn out_of_range(element: Element, index: usize, len: usize) -> Self {
        TopologyError::IndexOutOfRange {
            element,
            index,
            len,
        }
    }
}
