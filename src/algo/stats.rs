//! Summary statistics over a topology.

use rayon::prelude::*;

use crate::error::Result;
use crate::mesh::{MeshSource, Topology, VertexId};

/// Connectivity summary of a mesh.
#[derive(Debug, Clone, PartialEq)]
pub struct TopologyStats {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Number of faces.
    pub face_count: usize,
    /// Number of undirected edges with a single incident face.
    pub boundary_edges: usize,
    /// Number of undirected edges with more than two incident faces.
    pub non_manifold_edges: usize,
    /// Number of vertices not used by any face.
    pub isolated_vertices: usize,
    /// Smallest valence among non-isolated vertices (0 if there are none).
    ///
    /// A vertex used only by degenerate faces is not isolated but may have valence 0.
    pub min_valence: usize,
    /// Largest valence.
    pub max_valence: usize,
    /// Mean valence over non-isolated vertices.
    pub mean_valence: f64,
}

impl TopologyStats {
    /// True when the mesh has faces, no boundary edges and no non-manifold edges.
    pub fn is_closed(&self) -> bool {
        self.face_count > 0 && self.boundary_edges == 0 && self.non_manifold_edges == 0
    }
}

/// Compute connectivity statistics.
///
/// Valence is a per-vertex face scan, so this is O(vertex_count * face_count);
/// with `parallel` the vertices are spread over the rayon thread pool.
pub fn stats<S>(topo: &Topology<S>, parallel: bool) -> Result<TopologyStats>
where
    S: MeshSource + Sync,
{
    let n = topo.vertex_count();

    let mut in_face = vec![false; n];
    for f in topo.face_ids() {
        for v in topo.face_vertex_indices(f)? {
            in_face[v.index()] = true;
        }
    }

    let valences: Vec<usize> = if parallel {
        (0..n)
            .into_par_iter()
            .map(|i| topo.vertex_valence(VertexId::new(i)))
            .collect::<Result<_>>()?
    } else {
        (0..n)
            .map(|i| topo.vertex_valence(VertexId::new(i)))
            .collect::<Result<_>>()?
    };

    let used: Vec<usize> = valences
        .iter()
        .zip(&in_face)
        .filter_map(|(&k, &u)| u.then_some(k))
        .collect();
    let mean_valence = if used.is_empty() {
        0.0
    } else {
        used.iter().sum::<usize>() as f64 / used.len() as f64
    };

    Ok(TopologyStats {
        vertex_count: n,
        face_count: topo.face_count(),
        boundary_edges: topo.adjacency().boundary_edge_count(),
        non_manifold_edges: topo.adjacency().non_manifold_edge_count(),
        isolated_vertices: n - used.len(),
        min_valence: used.iter().copied().min().unwrap_or(0),
        max_valence: used.iter().copied().max().unwrap_or(0),
        mean_valence,
    })
}
