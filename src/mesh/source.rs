//! Mesh buffer sources.
//!
//! A topology never copies vertex or index data. It holds a [`MeshSource`],
//! which lends out a flat position buffer and an optional triangle index
//! buffer on demand. Borrowed slices ([`MeshSnapshot`]) and owned vectors
//! ([`MeshBuffers`]) are both sources, as is a reference to any source.

use nalgebra::Point3;

use super::index::MeshIndex;
use crate::error::{Result, TopologyError};

/// Something that can lend out the buffers of a triangle mesh.
///
/// `positions` holds `x, y, z` triples, so its length is `3 * vertex_count`.
/// `indices`, when present, holds three vertex indices per face. Without
/// indices, face `i` uses vertices `3i`, `3i + 1` and `3i + 2`.
pub trait MeshSource {
    /// Element type of the index buffer.
    type Index: MeshIndex;

    /// The flat vertex position buffer.
    fn positions(&self) -> &[f32];

    /// The triangle index buffer, or `None` for a non-indexed mesh.
    fn indices(&self) -> Option<&[Self::Index]>;
}

impl<S: MeshSource + ?Sized> MeshSource for &S {
    type Index = S::Index;

    #[inline]
    fn positions(&self) -> &[f32] {
        (**self).positions()
    }

    #[inline]
    fn indices(&self) -> Option<&[Self::Index]> {
        (**self).indices()
    }
}

impl<S: MeshSource + ?Sized> MeshSource for &mut S {
    type Index = S::Index;

    #[inline]
    fn positions(&self) -> &[f32] {
        (**self).positions()
    }

    #[inline]
    fn indices(&self) -> Option<&[Self::Index]> {
        (**self).indices()
    }
}

/// A borrowed view of caller-owned mesh buffers.
#[derive(Debug, Clone, Copy)]
pub struct MeshSnapshot<'a, I: MeshIndex = u32> {
    positions: &'a [f32],
    indices: Option<&'a [I]>,
}

impl<'a, I: MeshIndex> MeshSnapshot<'a, I> {
    /// Create a snapshot of an indexed mesh.
    pub fn indexed(positions: &'a [f32], indices: &'a [I]) -> Self {
        Self {
            positions,
            indices: Some(indices),
        }
    }

    /// Create a snapshot from positions and an optional index buffer.
    pub fn new(positions: &'a [f32], indices: Option<&'a [I]>) -> Self {
        Self { positions, indices }
    }
}

impl<'a> MeshSnapshot<'a, u32> {
    /// Create a snapshot of a non-indexed mesh.
    pub fn non_indexed(positions: &'a [f32]) -> Self {
        Self {
            positions,
            indices: None,
        }
    }
}

impl<I: MeshIndex> MeshSource for MeshSnapshot<'_, I> {
    type Index = I;

    #[inline]
    fn positions(&self) -> &[f32] {
        self.positions
    }

    #[inline]
    fn indices(&self) -> Option<&[I]> {
        self.indices
    }
}

/// Owned mesh buffers.
///
/// Handy when the topology should own its mesh outright; edit the buffers
/// through [`Topology::source_mut`](super::Topology::source_mut) and call
/// `rebuild` afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshBuffers<I: MeshIndex = u32> {
    /// Flat `x, y, z` vertex positions.
    pub positions: Vec<f32>,
    /// Optional triangle index buffer.
    pub indices: Option<Vec<I>>,
}

impl<I: MeshIndex> MeshBuffers<I> {
    /// Create owned buffers from points and triangles.
    ///
    /// # Errors
    ///
    /// `IndexOverflow` if a vertex index does not fit `I`, e.g. above 65535
    /// for `u16`.
    pub fn from_triangles(points: &[Point3<f32>], faces: &[[usize; 3]]) -> Result<Self> {
        let positions = points.iter().flat_map(|p| [p.x, p.y, p.z]).collect();
        let indices = faces
            .iter()
            .flatten()
            .map(|&v| {
                <I as TryFrom<usize>>::try_from(v).map_err(|_| TopologyError::IndexOverflow {
                    index: v,
                    bits: std::mem::size_of::<I>() * 8,
                })
            })
            .collect::<Result<Vec<I>>>()?;
        Ok(Self {
            positions,
            indices: Some(indices),
        })
    }

    /// Borrow these buffers as a snapshot.
    pub fn snapshot(&self) -> MeshSnapshot<'_, I> {
        MeshSnapshot::new(&self.positions, self.indices.as_deref())
    }
}

impl<I: MeshIndex> MeshSource for MeshBuffers<I> {
    type Index = I;

    #[inline]
    fn positions(&self) -> &[f32] {
        &self.positions
    }

    #[inline]
    fn indices(&self) -> Option<&[I]> {
        self.indices.as_deref()
    }
}

/// Vertex and face counts derived from the buffer lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct Layout {
    pub vertex_count: usize,
    pub face_count: usize,
}

/// Derive vertex and face counts, rejecting buffers that don't split into triangles.
pub(crate) fn layout<S: MeshSource + ?Sized>(source: &S) -> Result<Layout> {
    let positions = source.positions();
    if positions.len() % 3 != 0 {
        return Err(TopologyError::MalformedPositions {
            len: positions.len(),
        });
    }
    let vertex_count = positions.len() / 3;

    let face_count = match source.indices() {
        Some(indices) => {
            if indices.len() % 3 != 0 {
                return Err(TopologyError::MalformedIndices { len: indices.len() });
            }
            indices.len() / 3
        }
        None => {
            if vertex_count % 3 != 0 {
                return Err(TopologyError::MalformedNonIndexed { vertex_count });
            }
            vertex_count / 3
        }
    };

    Ok(Layout {
        vertex_count,
        face_count,
    })
}

/// Raw vertex indices of `face`, without range checks on the values.
///
/// Returns `None` if the face lies beyond the current buffers.
#[inline]
pub(crate) fn raw_face<S: MeshSource + ?Sized>(source: &S, face: usize) -> Option<[usize; 3]> {
    match source.indices() {
        Some(indices) => {
            let tri = indices.get(face * 3..face * 3 + 3)?;
            Some([tri[0].to_usize(), tri[1].to_usize(), tri[2].to_usize()])
        }
        None => {
            let base = face * 3;
            (base + 3 <= source.positions().len() / 3).then_some([base, base + 1, base + 2])
        }
    }
}
