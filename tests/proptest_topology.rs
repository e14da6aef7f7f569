//! Property-based tests for topology queries.
//!
//! These tests use proptest to generate random triangle soups (including
//! degenerate and non-manifold faces) and verify connectivity invariants.
//!
//! Run with: cargo test --test proptest_topology

use meshtopo::algo::{find_shortest_path, hop_distances, walk_around_vertex};
use meshtopo::mesh::MeshBuffers;
use meshtopo::prelude::*;
use proptest::prelude::*;

// =============================================================================
// Strategies for generating random meshes
// =============================================================================

/// Generate an indexed mesh with valid indices. Faces may repeat vertices and
/// edges may be shared by any number of faces.
fn arb_mesh(max_vertices: usize, max_faces: usize) -> impl Strategy<Value = MeshBuffers<u32>> {
    (3..=max_vertices).prop_flat_map(move |n| {
        let face = prop::array::uniform3(0..n as u32);
        prop::collection::vec(face, 1..=max_faces).prop_map(move |faces| MeshBuffers {
            positions: vec![0.0; n * 3],
            indices: Some(faces.into_iter().flatten().collect()),
        })
    })
}

/// Hop distances computed by repeated relaxation over the raw face list.
fn reference_distances(buffers: &MeshBuffers<u32>, source: usize) -> Vec<Option<usize>> {
    let n = buffers.positions.len() / 3;
    let indices = buffers.indices.as_deref().unwrap_or(&[]);
    let mut dist = vec![None; n];
    dist[source] = Some(0usize);

    let mut changed = true;
    while changed {
        changed = false;
        for tri in indices.chunks_exact(3) {
            for &a in tri {
                for &b in tri {
                    let (a, b) = (a as usize, b as usize);
                    if a == b {
                        continue;
                    }
                    if let Some(da) = dist[a] {
                        if dist[b].map_or(true, |db| da + 1 < db) {
                            dist[b] = Some(da + 1);
                            changed = true;
                        }
                    }
                }
            }
        }
    }
    dist
}

// =============================================================================
// Property Tests: Adjacency
// =============================================================================

proptest! {
    /// Face vertex indices are always in range.
    #[test]
    fn face_vertices_in_range(mesh in arb_mesh(20, 40)) {
        let topo = Topology::new(&mesh).unwrap();
        for f in topo.face_ids() {
            let tri = topo.face_vertex_indices(f).unwrap();
            prop_assert!(tri.iter().all(|v| v.index() < topo.vertex_count()));
        }
    }

    /// Sibling pairing is symmetric and agrees with the boundary predicates.
    #[test]
    fn sibling_symmetry(mesh in arb_mesh(12, 40)) {
        let topo = Topology::new(&mesh).unwrap();
        for he in topo.half_edges() {
            let opposite = topo.opposite_half_edge(he).unwrap();
            prop_assert_eq!(topo.is_edge_on_boundary(he).unwrap(), opposite.is_none());
            if let Some(o) = opposite {
                prop_assert_eq!(topo.opposite_half_edge(o).unwrap(), Some(he));
                prop_assert_ne!(o, he);
            }
        }
        for f in topo.face_ids() {
            let any_boundary = topo
                .face_edges(f)
                .unwrap()
                .iter()
                .any(|&he| topo.is_edge_on_boundary(he).unwrap());
            prop_assert_eq!(topo.is_face_on_boundary(f).unwrap(), any_boundary);
        }
    }

    /// Both pairing policies are stable across rebuilds.
    #[test]
    fn rebuild_is_idempotent(mesh in arb_mesh(10, 30), unpaired in any::<bool>()) {
        let policy = if unpaired {
            NonManifoldPolicy::Unpaired
        } else {
            NonManifoldPolicy::PairConsecutive
        };
        let options = TopologyOptions::default().with_non_manifold(policy);
        let mut topo = Topology::with_options(&mesh, options).unwrap();
        let before = topo.adjacency().clone();
        let neighbors: Vec<_> = topo.vertex_ids().map(|v| topo.vertex_neighbors(v).unwrap()).collect();

        topo.rebuild().unwrap();
        topo.rebuild().unwrap();

        prop_assert_eq!(topo.adjacency(), &before);
        for v in topo.vertex_ids() {
            prop_assert_eq!(&topo.vertex_neighbors(v).unwrap(), &neighbors[v.index()]);
        }
    }
}

// =============================================================================
// Property Tests: Vertex Queries and Traversal
// =============================================================================

proptest! {
    /// Valence matches the neighbour set, and every neighbour shares a face.
    #[test]
    fn valence_and_neighbors(mesh in arb_mesh(15, 30)) {
        let topo = Topology::new(&mesh).unwrap();
        for v in topo.vertex_ids() {
            let neighbors = topo.vertex_neighbors(v).unwrap();
            let faces = topo.vertex_incident_faces(v).unwrap();
            prop_assert_eq!(topo.vertex_valence(v).unwrap(), neighbors.len());
            prop_assert!(!neighbors.contains(&v));
            for w in &neighbors {
                let shared = faces
                    .iter()
                    .any(|&f| topo.face_vertex_indices(f).unwrap().contains(w));
                prop_assert!(shared);
            }
            prop_assert_eq!(topo.vertex_incident_edges(v).unwrap().len(), faces.len() * 2);
        }
    }

    /// The vertex walk visits distinct incident faces and starts where asked.
    #[test]
    fn walk_visits_incident_faces(mesh in arb_mesh(10, 30)) {
        let topo = Topology::new(&mesh).unwrap();
        for v in topo.vertex_ids() {
            let incident = topo.vertex_incident_faces(v).unwrap();
            let walk = walk_around_vertex(&topo, v, None).unwrap();

            prop_assert_eq!(walk.first(), incident.first());
            prop_assert!(walk.len() <= incident.len());
            for (i, f) in walk.iter().enumerate() {
                prop_assert!(incident.contains(f));
                prop_assert!(!walk[..i].contains(f));
            }
        }
    }

    /// Shortest paths are valid, minimal, and absent only when disconnected.
    #[test]
    fn shortest_paths_are_minimal(mesh in arb_mesh(12, 20), a in 0usize..12, b in 0usize..12) {
        let topo = Topology::new(&mesh).unwrap();
        let n = topo.vertex_count();
        let (a, b) = (a % n, b % n);
        let expected = reference_distances(&mesh, a);

        prop_assert_eq!(&hop_distances(&topo, VertexId::new(a)).unwrap(), &expected);

        match find_shortest_path(&topo, VertexId::new(a), VertexId::new(b)).unwrap() {
            Some(path) => {
                prop_assert_eq!(path.first(), Some(&VertexId::new(a)));
                prop_assert_eq!(path.last(), Some(&VertexId::new(b)));
                prop_assert_eq!(Some(path.len() - 1), expected[b]);
                for pair in path.windows(2) {
                    prop_assert!(topo.vertex_neighbors(pair[0]).unwrap().contains(&pair[1]));
                }
            }
            None => prop_assert_eq!(expected[b], None),
        }
    }
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn single_triangle_scenario() {
    let positions = [0.0f32; 9];
    let topo = Topology::new(MeshSnapshot::non_indexed(&positions)).unwrap();

    assert_eq!(topo.face_count(), 1);
    assert!(topo.is_face_on_boundary(FaceId::new(0)).unwrap());
    assert_eq!(topo.boundary_half_edges().count(), 3);
    assert_eq!(topo.vertex_valence(VertexId::new(0)).unwrap(), 2);
    assert_eq!(
        topo.find_shortest_path(VertexId::new(0), VertexId::new(2)).unwrap(),
        Some(vec![VertexId::new(0), VertexId::new(2)])
    );
}

#[test]
fn quad_scenario() {
    let positions = [0.0f32; 12];
    let indices: [u16; 6] = [0, 1, 2, 0, 2, 3];
    let topo = Topology::new(MeshSnapshot::indexed(&positions, &indices)).unwrap();

    assert!(topo.face_neighbors(FaceId::new(0)).unwrap().contains(&FaceId::new(1)));

    let interior: Vec<_> = topo
        .half_edges()
        .filter(|&he| !topo.is_edge_on_boundary(he).unwrap())
        .collect();
    assert_eq!(
        interior,
        vec![HalfEdge::new(FaceId::new(0), 2), HalfEdge::new(FaceId::new(1), 0)]
    );
    assert_eq!(topo.boundary_half_edges().count(), 4);

    let path = topo
        .find_shortest_path(VertexId::new(1), VertexId::new(3))
        .unwrap()
        .unwrap();
    assert_eq!(path.len(), 3);
    assert!(path[1] == VertexId::new(0) || path[1] == VertexId::new(2));
}
