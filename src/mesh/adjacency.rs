//! Half-edge adjacency construction.
//!
//! For every half-edge `(face, slot)` of a triangle mesh this module records
//! the sibling half-edge on the other side of the same undirected edge, or
//! `None` when the edge lies on the boundary.
//!
//! Half-edges are grouped by their unordered vertex pair. Orientation is not
//! taken into account, so inconsistently wound neighbours are still paired.

use std::collections::HashMap;

use super::index::{FaceId, HalfEdge};
use super::source::{raw_face, MeshSource};
use crate::error::{Element, Result, TopologyError};

/// How to pair the half-edges of an edge shared by more than two faces.
///
/// Either way the result depends only on face order, so rebuilding from the
/// same buffers always produces the same table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NonManifoldPolicy {
    /// Pair half-edges consecutively in discovery order (face order, then slot
    /// order): the 1st with the 2nd, the 3rd with the 4th, and so on. An odd
    /// leftover is a boundary half-edge.
    #[default]
    PairConsecutive,
    /// Leave every half-edge of a non-manifold edge without a sibling.
    Unpaired,
}

/// Options controlling adjacency construction.
#[derive(Debug, Clone)]
pub struct TopologyOptions {
    /// Pairing policy for edges shared by more than two faces.
    pub non_manifold: NonManifoldPolicy,

    /// Check every index buffer value against the vertex count when building.
    ///
    /// When disabled, out-of-range values are only reported by the queries
    /// that read them: `face_vertex_indices` on the offending face, and every
    /// vertex query, since those scan all faces. Face and edge adjacency
    /// queries on other faces keep working.
    pub validate_indices: bool,
}

impl Default for TopologyOptions {
    fn default() -> Self {
        Self {
            non_manifold: NonManifoldPolicy::PairConsecutive,
            validate_indices: true,
        }
    }
}

impl TopologyOptions {
    /// Set the non-manifold pairing policy.
    pub fn with_non_manifold(mut self, policy: NonManifoldPolicy) -> Self {
        self.non_manifold = policy;
        self
    }

    /// Enable or disable index validation at build time.
    pub fn with_validate_indices(mut self, validate: bool) -> Self {
        self.validate_indices = validate;
        self
    }
}

/// Sibling lookup for every half-edge of a mesh.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjacencyTable {
    /// Sibling of half-edge `face * 3 + slot`.
    siblings: Vec<Option<HalfEdge>>,

    /// Number of undirected edges with exactly one incident half-edge.
    boundary_edges: usize,

    /// Number of undirected edges with more than two incident half-edges.
    non_manifold_edges: usize,
}

impl AdjacencyTable {
    /// Build the table for the first `face_count` faces of `source`.
    pub(crate) fn build<S: MeshSource + ?Sized>(
        source: &S,
        face_count: usize,
        vertex_count: usize,
        options: &TopologyOptions,
    ) -> Result<Self> {
        // Unordered edge key -> half-edges in discovery order
        let mut edge_map: HashMap<(usize, usize), Vec<HalfEdge>> =
            HashMap::with_capacity(face_count * 3 / 2 + 1);

        for fi in 0..face_count {
            let tri = raw_face(source, fi)
                .ok_or_else(|| TopologyError::out_of_range(Element::Face, fi, face_count))?;

            if options.validate_indices {
                if let Some(&bad) = tri.iter().find(|&&v| v >= vertex_count) {
                    return Err(TopologyError::InvalidVertexIndex {
                        face: fi,
                        vertex: bad,
                        vertex_count,
                    });
                }
            }

            for slot in 0..3 {
                let a = tri[slot];
                let b = tri[(slot + 1) % 3];
                let key = if a < b { (a, b) } else { (b, a) };
                edge_map
                    .entry(key)
                    .or_default()
                    .push(HalfEdge::new(FaceId::new(fi), slot));
            }
        }

        let mut siblings = vec![None; face_count * 3];
        let mut boundary_edges = 0;
        let mut non_manifold_edges = 0;

        for group in edge_map.values() {
            match group.len() {
                1 => boundary_edges += 1,
                2 => {
                    siblings[group[0].table_index()] = Some(group[1]);
                    siblings[group[1].table_index()] = Some(group[0]);
                }
                _ => {
                    non_manifold_edges += 1;
                    if options.non_manifold == NonManifoldPolicy::PairConsecutive {
                        for pair in group.chunks_exact(2) {
                            siblings[pair[0].table_index()] = Some(pair[1]);
                            siblings[pair[1].table_index()] = Some(pair[0]);
                        }
                    }
                }
            }
        }

        if non_manifold_edges > 0 {
            log::warn!(
                "{} non-manifold edges paired with {:?} policy",
                non_manifold_edges,
                options.non_manifold
            );
        }
        log::debug!(
            "built adjacency: {} faces, {} edges, {} boundary, {} non-manifold",
            face_count,
            edge_map.len(),
            boundary_edges,
            non_manifold_edges
        );

        Ok(Self {
            siblings,
            boundary_edges,
            non_manifold_edges,
        })
    }

    /// The sibling of a half-edge, or `None` on the boundary.
    ///
    /// Half-edges outside the table, including slots outside `0..3`, also give
    /// `None`. Use [`Topology::opposite_half_edge`](super::Topology::opposite_half_edge)
    /// to tell the two cases apart.
    #[inline]
    pub fn sibling(&self, he: HalfEdge) -> Option<HalfEdge> {
        self.siblings.get(he.checked_table_index()?).copied().flatten()
    }

    /// Number of half-edges covered by the table.
    #[inline]
    pub fn num_halfedges(&self) -> usize {
        self.siblings.len()
    }

    /// Number of undirected edges that have a single incident face.
    #[inline]
    pub fn boundary_edge_count(&self) -> usize {
        self.boundary_edges
    }

    /// Number of undirected edges shared by more than two faces.
    #[inline]
    pub fn non_manifold_edge_count(&self) -> usize {
        self.non_manifold_edges
    }

    /// Iterate over every half-edge with its sibling.
    pub fn iter(&self) -> impl Iterator<Item = (HalfEdge, Option<HalfEdge>)> + '_ {
        self.siblings
            .iter()
            .enumerate()
            .map(|(i, &s)| (HalfEdge::new(FaceId::new(i / 3), i % 3), s))
    }
}
