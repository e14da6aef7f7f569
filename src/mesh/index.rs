//! Index types for mesh elements.
//!
//! This module provides type-safe index wrappers for vertices and faces, the
//! [`HalfEdge`] descriptor that addresses an edge of a face, and the
//! [`MeshIndex`] trait for the element type of a triangle index buffer.

use std::fmt::{self, Debug};
use std::hash::Hash;

/// Trait for types that can appear in a triangle index buffer.
///
/// Implemented for `u16`, `u32` and `u64`, matching the index buffer widths
/// produced by common loaders and GPU pipelines. Conversion from `usize` goes
/// through `TryFrom`, so a value too wide for the buffer is an error rather
/// than a silent wrap.
pub trait MeshIndex:
    Copy + Eq + Ord + Hash + Debug + Send + Sync + From<u16> + TryFrom<usize> + 'static
{
    /// Convert to usize.
    fn to_usize(self) -> usize;
}

impl MeshIndex for u16 {
    #[inline]
    fn to_usize(self) -> usize {
        self as usize
    }
}

impl MeshIndex for u32 {
    #[inline]
    fn to_usize(self) -> usize {
        self as usize
    }
}

impl MeshIndex for u64 {
    #[inline]
    fn to_usize(self) -> usize {
        self as usize
    }
}

/// A type-safe vertex index.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct VertexId(usize);

/// A type-safe face index.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct FaceId(usize);

macro_rules! impl_index_type {
    ($name:ident, $display:literal) => {
        impl $name {
            /// Create a new index from a raw value.
            #[inline]
            pub const fn new(index: usize) -> Self {
                Self(index)
            }

            /// Get the raw index value.
            #[inline]
            pub const fn index(self) -> usize {
                self.0
            }
        }

        impl Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", $display, self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<usize> for $name {
            fn from(v: usize) -> Self {
                Self::new(v)
            }
        }
    };
}

impl_index_type!(VertexId, "V");
impl_index_type!(FaceId, "F");

/// A half-edge: the edge of `face` running from the face's vertex at position
/// `slot` to the vertex at position `(slot + 1) % 3`.
///
/// There is no stored half-edge record; the `(face, slot)` pair is the
/// half-edge. Slots outside `0..3` can be constructed but are rejected by
/// every query.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct HalfEdge {
    /// The face this half-edge belongs to.
    pub face: FaceId,
    /// The local edge slot within the face.
    pub slot: usize,
}

impl HalfEdge {
    /// Create a half-edge descriptor.
    #[inline]
    pub const fn new(face: FaceId, slot: usize) -> Self {
        Self { face, slot }
    }

    /// Flat position of this half-edge in a per-face table (`face * 3 + slot`).
    #[inline]
    pub(crate) fn table_index(self) -> usize {
        self.face.index() * 3 + self.slot
    }

    /// Flat table position, or `None` if the slot is outside `0..3` or the
    /// position does not fit in `usize`.
    #[inline]
    pub(crate) fn checked_table_index(self) -> Option<usize> {
        if self.slot >= 3 {
            return None;
        }
        self.face.index().checked_mul(3)?.checked_add(self.slot)
    }

    /// The following half-edge within the same face.
    ///
    /// The slot is reduced modulo 3 first, so the result always has a valid slot.
    #[inline]
    pub fn next_in_face(self) -> Self {
        Self::new(self.face, (self.slot % 3 + 1) % 3)
    }

    /// The preceding half-edge within the same face.
    #[inline]
    pub fn prev_in_face(self) -> Self {
        Self::new(self.face, (self.slot % 3 + 2) % 3)
    }
}

impl Debug for HalfEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HE({}:{})", self.face.index(), self.slot)
    }
}
