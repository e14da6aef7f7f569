//! Ordered walk around a vertex.
//!
//! Starting from one incident face, the walk repeatedly crosses the edge that
//! arrives at the vertex (slot `(p + 2) % 3`, where `p` is the vertex's position
//! in the current face) into the sibling face. It only moves in that one
//! direction, so a fan interrupted by the boundary is enumerated from the
//! start face up to the boundary and no further.

use std::collections::HashSet;

use crate::error::{Result, TopologyError};
use crate::mesh::{FaceId, HalfEdge, MeshSource, Topology, VertexId};

/// Walk the faces around `vertex` in connectivity order.
///
/// The walk begins at `start_face`, or at the first incident face in face
/// order when `None`. It stops on reaching a boundary edge, a face that does
/// not contain `vertex`, or a face already visited. A vertex with no incident
/// faces yields an empty walk.
///
/// # Errors
///
/// `IndexOutOfRange` for an invalid vertex or start face, and `NotIncident`
/// when `start_face` does not contain `vertex`.
///
/// # Example
///
/// ```
/// use meshtopo::prelude::*;
/// use meshtopo::algo::walk_around_vertex;
///
/// // Closed fan of four triangles around vertex 0
/// let positions = [0.0f32; 15];
/// let indices: [u32; 12] = [0, 1, 2, 0, 2, 3, 0, 3, 4, 0, 4, 1];
/// let topo = Topology::new(MeshSnapshot::indexed(&positions, &indices)).unwrap();
///
/// let walk = walk_around_vertex(&topo, VertexId::new(0), None).unwrap();
/// assert_eq!(walk.len(), 4);
/// ```
pub fn walk_around_vertex<S: MeshSource>(
    topo: &Topology<S>,
    vertex: VertexId,
    start_face: Option<FaceId>,
) -> Result<Vec<FaceId>> {
    let start = match start_face {
        Some(face) => {
            if topo.slot_of(face, vertex)?.is_none() {
                topo.check_vertex(vertex)?;
                return Err(TopologyError::NotIncident {
                    vertex: vertex.index(),
                    face: face.index(),
                });
            }
            face
        }
        None => match topo.vertex_incident_faces(vertex)?.first() {
            Some(&face) => face,
            None => return Ok(Vec::new()),
        },
    };

    let mut walk = Vec::new();
    let mut visited = HashSet::new();
    let mut current = start;

    loop {
        walk.push(current);
        visited.insert(current);

        let Some(slot) = topo.slot_of(current, vertex)? else {
            break;
        };
        let arriving = HalfEdge::new(current, slot).prev_in_face();
        let Some(sibling) = topo.opposite_half_edge(arriving)? else {
            break;
        };
        let next = sibling.face;

        if visited.contains(&next) || topo.slot_of(next, vertex)?.is_none() {
            break;
        }
        current = next;
    }

    Ok(walk)
}

impl<S: MeshSource> Topology<S> {
    /// Walk the faces around `vertex`. See [`walk_around_vertex`].
    pub fn walk_around_vertex(
        &self,
        vertex: VertexId,
        start_face: Option<FaceId>,
    ) -> Result<Vec<FaceId>> {
        walk_around_vertex(self, vertex, start_face)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Element;
    use crate::mesh::MeshSnapshot;

    fn f(i: usize) -> FaceId {
        FaceId::new(i)
    }

    // Four triangles around vertex 0, consistently wound
    static FAN_POSITIONS: [f32; 15] = [0.0; 15];
    static CLOSED_FAN: [u32; 12] = [0, 1, 2, 0, 2, 3, 0, 3, 4, 0, 4, 1];
    static OPEN_FAN: [u32; 9] = [0, 1, 2, 0, 2, 3, 0, 3, 4];

    #[test]
    fn test_closed_fan() {
        let topo = Topology::new(MeshSnapshot::indexed(&FAN_POSITIONS, &CLOSED_FAN)).unwrap();
        let v = VertexId::new(0);

        assert_eq!(
            walk_around_vertex(&topo, v, None).unwrap(),
            vec![f(0), f(1), f(2), f(3)]
        );
        assert_eq!(
            walk_around_vertex(&topo, v, Some(f(2))).unwrap(),
            vec![f(2), f(3), f(0), f(1)]
        );
    }

    #[test]
    fn test_open_fan_is_one_directional() {
        let topo = Topology::new(MeshSnapshot::indexed(&FAN_POSITIONS, &OPEN_FAN)).unwrap();
        let v = VertexId::new(0);

        assert_eq!(
            walk_around_vertex(&topo, v, None).unwrap(),
            vec![f(0), f(1), f(2)]
        );
        // Face 2's arriving edge (4 -> 0) is on the boundary
        assert_eq!(walk_around_vertex(&topo, v, Some(f(2))).unwrap(), vec![f(2)]);
        assert_eq!(
            walk_around_vertex(&topo, v, Some(f(1))).unwrap(),
            vec![f(1), f(2)]
        );
    }

    #[test]
    fn test_outer_vertex() {
        let topo = Topology::new(MeshSnapshot::indexed(&FAN_POSITIONS, &OPEN_FAN)).unwrap();
        // Vertex 2 is in faces 0 and 1. Its arriving edge in face 0 is (1 -> 2),
        // a boundary edge; in face 1 it is (0 -> 2), shared with face 0.
        assert_eq!(
            walk_around_vertex(&topo, VertexId::new(2), None).unwrap(),
            vec![f(0)]
        );
        assert_eq!(
            walk_around_vertex(&topo, VertexId::new(2), Some(f(1))).unwrap(),
            vec![f(1), f(0)]
        );
    }

    #[test]
    fn test_isolated_vertex() {
        let positions = [0.0f32; 12];
        let indices: [u32; 3] = [0, 1, 2];
        let topo = Topology::new(MeshSnapshot::indexed(&positions, &indices)).unwrap();
        assert!(walk_around_vertex(&topo, VertexId::new(3), None)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_errors() {
        let topo = Topology::new(MeshSnapshot::indexed(&FAN_POSITIONS, &OPEN_FAN)).unwrap();

        assert_eq!(
            walk_around_vertex(&topo, VertexId::new(1), Some(f(2))),
            Err(TopologyError::NotIncident { vertex: 1, face: 2 })
        );
        assert_eq!(
            walk_around_vertex(&topo, VertexId::new(9), None),
            Err(TopologyError::out_of_range(Element::Vertex, 9, 5))
        );
        assert_eq!(
            walk_around_vertex(&topo, VertexId::new(0), Some(f(7))),
            Err(TopologyError::out_of_range(Element::Face, 7, 3))
        );
    }
}
