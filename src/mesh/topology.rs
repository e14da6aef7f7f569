//! The topology engine.
//!
//! [`Topology`] pairs a [`MeshSource`] with its [`AdjacencyTable`] and answers
//! vertex, face and edge connectivity queries over them.
//!
//! # Staleness
//!
//! The engine caches the vertex and face counts and the adjacency table at
//! construction and at every [`Topology::rebuild`]. It never looks for changes
//! on its own: after editing the buffers through [`Topology::source_mut`],
//! queries keep answering for the old mesh until `rebuild` is called.
//!
//! # Cost
//!
//! Face and edge queries are O(1). Vertex queries scan every face, so they are
//! O(face_count) each.

use nalgebra::{Point3, Vector3};

use super::adjacency::{AdjacencyTable, TopologyOptions};
use super::index::{FaceId, HalfEdge, VertexId};
use super::source::{layout, raw_face, Layout, MeshSource};
use crate::error::{Element, Result, TopologyError};

/// Half-edge connectivity over a triangle mesh.
///
/// # Example
///
/// ```
/// use meshtopo::prelude::*;
///
/// // A quad split along its diagonal (0, 2)
/// let positions = [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 1.0, 0.0, 0.0, 1.0, 0.0];
/// let indices: [u32; 6] = [0, 1, 2, 0, 2, 3];
///
/// let topo = Topology::new(MeshSnapshot::indexed(&positions, &indices)).unwrap();
/// assert_eq!(topo.face_count(), 2);
/// assert_eq!(topo.face_neighbors(FaceId::new(0)).unwrap(), vec![FaceId::new(1)]);
/// assert!(topo.is_face_on_boundary(FaceId::new(0)).unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct Topology<S: MeshSource> {
    source: S,
    options: TopologyOptions,
    adjacency: AdjacencyTable,
    layout: Layout,
}

impl<S: MeshSource> Topology<S> {
    /// Build a topology over `source` with default options.
    pub fn new(source: S) -> Result<Self> {
        Self::with_options(source, TopologyOptions::default())
    }

    /// Build a topology over `source`.
    pub fn with_options(source: S, options: TopologyOptions) -> Result<Self> {
        let layout = layout(&source)?;
        let adjacency =
            AdjacencyTable::build(&source, layout.face_count, layout.vertex_count, &options)?;
        Ok(Self {
            source,
            options,
            adjacency,
            layout,
        })
    }

    /// Rebuild the adjacency table and cached counts from the current buffers.
    ///
    /// On error the previous table and counts are kept.
    pub fn rebuild(&mut self) -> Result<()> {
        let layout = layout(&self.source)?;
        let adjacency = AdjacencyTable::build(
            &self.source,
            layout.face_count,
            layout.vertex_count,
            &self.options,
        )?;
        self.layout = layout;
        self.adjacency = adjacency;
        Ok(())
    }

    /// Consume the topology and return its source.
    pub fn into_source(self) -> S {
        self.source
    }

    // ==================== Accessors ====================

    /// The mesh source.
    #[inline]
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Mutable access to the mesh source. Call [`rebuild`](Self::rebuild) after editing.
    #[inline]
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// The options this topology was built with.
    #[inline]
    pub fn options(&self) -> &TopologyOptions {
        &self.options
    }

    /// The adjacency table from the last build.
    #[inline]
    pub fn adjacency(&self) -> &AdjacencyTable {
        &self.adjacency
    }

    /// Number of vertices at the last build.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.layout.vertex_count
    }

    /// Number of faces at the last build.
    #[inline]
    pub fn face_count(&self) -> usize {
        self.layout.face_count
    }

    /// Number of half-edges (three per face).
    #[inline]
    pub fn num_halfedges(&self) -> usize {
        self.layout.face_count * 3
    }

    // ==================== Range checks ====================

    #[inline]
    pub(crate) fn check_vertex(&self, v: VertexId) -> Result<()> {
        if v.index() < self.layout.vertex_count {
            Ok(())
        } else {
            Err(TopologyError::out_of_range(
                Element::Vertex,
                v.index(),
                self.layout.vertex_count,
            ))
        }
    }

    #[inline]
    fn check_face(&self, f: FaceId) -> Result<()> {
        if f.index() < self.layout.face_count {
            Ok(())
        } else {
            Err(TopologyError::out_of_range(
                Element::Face,
                f.index(),
                self.layout.face_count,
            ))
        }
    }

    #[inline]
    fn check_half_edge(&self, he: HalfEdge) -> Result<()> {
        self.check_face(he.face)?;
        if he.slot < 3 {
            Ok(())
        } else {
            Err(TopologyError::out_of_range(Element::EdgeSlot, he.slot, 3))
        }
    }

    // ==================== Face queries ====================

    /// The three vertices of a face, in winding order.
    pub fn face_vertex_indices(&self, f: FaceId) -> Result<[VertexId; 3]> {
        self.check_face(f)?;
        let tri = raw_face(&self.source, f.index()).ok_or_else(|| {
            TopologyError::out_of_range(Element::Face, f.index(), self.layout.face_count)
        })?;
        for &v in &tri {
            if v >= self.layout.vertex_count {
                return Err(TopologyError::InvalidVertexIndex {
                    face: f.index(),
                    vertex: v,
                    vertex_count: self.layout.vertex_count,
                });
            }
        }
        Ok(tri.map(VertexId::new))
    }

    /// Faces sharing an edge with `f`, in edge slot order. Boundary slots contribute nothing.
    pub fn face_neighbors(&self, f: FaceId) -> Result<Vec<FaceId>> {
        Ok(self.walk_around_face(f)?.into_iter().flatten().collect())
    }

    /// The three half-edges of a face.
    pub fn face_edges(&self, f: FaceId) -> Result<[HalfEdge; 3]> {
        self.check_face(f)?;
        Ok([HalfEdge::new(f, 0), HalfEdge::new(f, 1), HalfEdge::new(f, 2)])
    }

    /// Whether any edge of `f` lies on the boundary.
    pub fn is_face_on_boundary(&self, f: FaceId) -> Result<bool> {
        Ok(self.walk_around_face(f)?.iter().any(Option::is_none))
    }

    /// The face across each edge slot of `f`, or `None` for boundary slots.
    ///
    /// This is a fixed-order snapshot of the three slots, not a cyclic walk.
    pub fn walk_around_face(&self, f: FaceId) -> Result<[Option<FaceId>; 3]> {
        let edges = self.face_edges(f)?;
        Ok(edges.map(|he| self.adjacency.sibling(he).map(|s| s.face)))
    }

    // ==================== Edge queries ====================

    /// The face owning `he`, followed by the sibling's face if `he` is interior.
    pub fn edge_faces(&self, he: HalfEdge) -> Result<Vec<FaceId>> {
        let mut faces = vec![he.face];
        faces.extend(self.opposite_half_edge(he)?.map(|s| s.face));
        Ok(faces)
    }

    /// The start and end vertices of `he`.
    pub fn edge_vertices(&self, he: HalfEdge) -> Result<(VertexId, VertexId)> {
        self.check_half_edge(he)?;
        let tri = self.face_vertex_indices(he.face)?;
        Ok((tri[he.slot], tri[(he.slot + 1) % 3]))
    }

    /// The sibling half-edge across the same edge, or `None` on the boundary.
    pub fn opposite_half_edge(&self, he: HalfEdge) -> Result<Option<HalfEdge>> {
        self.check_half_edge(he)?;
        Ok(self.adjacency.sibling(he))
    }

    /// Whether `he` has no sibling.
    pub fn is_edge_on_boundary(&self, he: HalfEdge) -> Result<bool> {
        Ok(self.opposite_half_edge(he)?.is_none())
    }

    // ==================== Vertex queries ====================

    /// All faces containing `v`, in face order.
    pub fn vertex_incident_faces(&self, v: VertexId) -> Result<Vec<FaceId>> {
        self.check_vertex(v)?;
        let mut faces = Vec::new();
        for f in self.face_ids() {
            if self.face_vertex_indices(f)?.contains(&v) {
                faces.push(f);
            }
        }
        Ok(faces)
    }

    /// Distinct vertices sharing a face with `v`.
    ///
    /// Order is first appearance: incident faces in face order, and within a
    /// face the vertex order of the face.
    pub fn vertex_neighbors(&self, v: VertexId) -> Result<Vec<VertexId>> {
        let mut neighbors: Vec<VertexId> = Vec::new();
        for f in self.vertex_incident_faces(v)? {
            for w in self.face_vertex_indices(f)? {
                if w != v && !neighbors.contains(&w) {
                    neighbors.push(w);
                }
            }
        }
        Ok(neighbors)
    }

    /// For each incident face, the half-edge leaving `v` and the half-edge arriving at it.
    pub fn vertex_incident_edges(&self, v: VertexId) -> Result<Vec<HalfEdge>> {
        let mut edges = Vec::new();
        for f in self.vertex_incident_faces(v)? {
            if let Some(slot) = self.slot_of(f, v)? {
                let outgoing = HalfEdge::new(f, slot);
                edges.push(outgoing);
                edges.push(outgoing.prev_in_face());
            }
        }
        Ok(edges)
    }

    /// Number of distinct neighbouring vertices.
    pub fn vertex_valence(&self, v: VertexId) -> Result<usize> {
        Ok(self.vertex_neighbors(v)?.len())
    }

    /// Whether `v` touches a boundary edge. Isolated vertices count as boundary.
    pub fn is_vertex_on_boundary(&self, v: VertexId) -> Result<bool> {
        let edges = self.vertex_incident_edges(v)?;
        if edges.is_empty() {
            return Ok(true);
        }
        Ok(edges.into_iter().any(|he| self.adjacency.sibling(he).is_none()))
    }

    /// Position of `v` within face `f`, if `f` contains it.
    pub(crate) fn slot_of(&self, f: FaceId, v: VertexId) -> Result<Option<usize>> {
        Ok(self.face_vertex_indices(f)?.iter().position(|&w| w == v))
    }

    // ==================== Geometry ====================

    /// The position of a vertex.
    pub fn vertex_position(&self, v: VertexId) -> Result<Point3<f32>> {
        self.check_vertex(v)?;
        let i = v.index() * 3;
        match self.source.positions().get(i..i + 3) {
            Some(p) => Ok(Point3::new(p[0], p[1], p[2])),
            None => Err(TopologyError::out_of_range(
                Element::Vertex,
                v.index(),
                self.source.positions().len() / 3,
            )),
        }
    }

    /// The positions of the three vertices of a face.
    pub fn face_positions(&self, f: FaceId) -> Result<[Point3<f32>; 3]> {
        let [v0, v1, v2] = self.face_vertex_indices(f)?;
        Ok([
            self.vertex_position(v0)?,
            self.vertex_position(v1)?,
            self.vertex_position(v2)?,
        ])
    }

    /// Unit normal of a face following its winding, or `None` if the face is degenerate.
    pub fn face_normal(&self, f: FaceId) -> Result<Option<Vector3<f32>>> {
        let [p0, p1, p2] = self.face_positions(f)?;
        let n = (p1 - p0).cross(&(p2 - p0));
        Ok(n.try_normalize(f32::EPSILON))
    }

    // ==================== Iteration ====================

    /// Iterate over all vertex IDs.
    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> {
        (0..self.layout.vertex_count).map(VertexId::new)
    }

    /// Iterate over all face IDs.
    pub fn face_ids(&self) -> impl Iterator<Item = FaceId> {
        (0..self.layout.face_count).map(FaceId::new)
    }

    /// Iterate over all half-edges in face, then slot order.
    pub fn half_edges(&self) -> impl Iterator<Item = HalfEdge> {
        (0..self.num_halfedges()).map(|i| HalfEdge::new(FaceId::new(i / 3), i % 3))
    }

    /// Iterate over the half-edges that have no sibling.
    pub fn boundary_half_edges(&self) -> impl Iterator<Item = HalfEdge> + '_ {
        self.half_edges()
            .filter(|&he| self.adjacency.sibling(he).is_none())
    }
}
