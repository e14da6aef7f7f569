//! Breadth-first search over the vertex adjacency graph.
//!
//! Two vertices are adjacent when they share a face. Edges are unweighted, so
//! paths are shortest by edge count, not by surface length.

use std::collections::VecDeque;

use crate::error::Result;
use crate::mesh::{MeshSource, Topology, VertexId};

/// Find a shortest path (by edge count) from `start` to `end`.
///
/// Neighbours are explored in [`Topology::vertex_neighbors`] order, so ties
/// between equally short paths are broken deterministically. Returns
/// `Ok(Some(vec![start]))` when `start == end`, and `Ok(None)` when `end` is
/// not reachable from `start`.
///
/// # Errors
///
/// `IndexOutOfRange` if either endpoint is not a valid vertex.
///
/// # Example
///
/// ```
/// use meshtopo::prelude::*;
/// use meshtopo::algo::find_shortest_path;
///
/// let positions = [0.0f32; 12];
/// let indices: [u32; 6] = [0, 1, 2, 0, 2, 3];
/// let topo = Topology::new(MeshSnapshot::indexed(&positions, &indices)).unwrap();
///
/// let path = find_shortest_path(&topo, VertexId::new(1), VertexId::new(3)).unwrap();
/// assert_eq!(path.map(|p| p.len()), Some(3));
/// ```
pub fn find_shortest_path<S: MeshSource>(
    topo: &Topology<S>,
    start: VertexId,
    end: VertexId,
) -> Result<Option<Vec<VertexId>>> {
    topo.check_vertex(start)?;
    topo.check_vertex(end)?;
    let n = topo.vertex_count();

    let mut visited = vec![false; n];
    let mut predecessor: Vec<Option<usize>> = vec![None; n];
    let mut discovered = vec![false; n];
    let mut queue = VecDeque::new();

    discovered[start.index()] = true;
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        if visited[current.index()] {
            continue;
        }
        visited[current.index()] = true;

        if current == end {
            return Ok(Some(reconstruct(&predecessor, end)));
        }

        for neighbor in topo.vertex_neighbors(current)? {
            let i = neighbor.index();
            if visited[i] {
                continue;
            }
            // First discovery fixes the predecessor; later ones are never shorter
            if !discovered[i] {
                discovered[i] = true;
                predecessor[i] = Some(current.index());
            }
            queue.push_back(neighbor);
        }
    }

    Ok(None)
}

/// Edge-count distance from `source` to every vertex, `None` where unreachable.
pub fn hop_distances<S: MeshSource>(
    topo: &Topology<S>,
    source: VertexId,
) -> Result<Vec<Option<usize>>> {
    topo.check_vertex(source)?;

    let mut distances = vec![None; topo.vertex_count()];
    let mut queue = VecDeque::new();
    distances[source.index()] = Some(0);
    queue.push_back((source, 0));

    while let Some((current, d)) = queue.pop_front() {
        for neighbor in topo.vertex_neighbors(current)? {
            if distances[neighbor.index()].is_none() {
                distances[neighbor.index()] = Some(d + 1);
                queue.push_back((neighbor, d + 1));
            }
        }
    }

    Ok(distances)
}

impl<S: MeshSource> Topology<S> {
    /// Shortest vertex path by edge count. See [`find_shortest_path`].
    pub fn find_shortest_path(
        &self,
        start: VertexId,
        end: VertexId,
    ) -> Result<Option<Vec<VertexId>>> {
        find_shortest_path(self, start, end)
    }
}

fn reconstruct(predecessor: &[Option<usize>], end: VertexId) -> Vec<VertexId> {
    let mut path = vec![end];
    let mut current = end.index();
    while let Some(prev) = predecessor[current] {
        path.push(VertexId::new(prev));
        current = prev;
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Element, TopologyError};
    use crate::mesh::{shapes, MeshSnapshot};

    fn v(i: usize) -> VertexId {
        VertexId::new(i)
    }

    #[test]
    fn test_same_vertex() {
        let positions = [0.0f32; 9];
        let topo = Topology::new(MeshSnapshot::non_indexed(&positions)).unwrap();
        assert_eq!(find_shortest_path(&topo, v(1), v(1)).unwrap(), Some(vec![v(1)]));
    }

    #[test]
    fn test_single_triangle() {
        let positions = [0.0f32; 9];
        let topo = Topology::new(MeshSnapshot::non_indexed(&positions)).unwrap();
        assert_eq!(find_shortest_path(&topo, v(0), v(2)).unwrap(), Some(vec![v(0), v(2)]));
    }

    #[test]
    fn test_quad_two_hops() {
        let positions = [0.0f32; 12];
        let indices: [u32; 6] = [0, 1, 2, 0, 2, 3];
        let topo = Topology::new(MeshSnapshot::indexed(&positions, &indices)).unwrap();

        // vertex_neighbors(1) is [0, 2], so the tie goes through 0
        assert_eq!(
            find_shortest_path(&topo, v(1), v(3)).unwrap(),
            Some(vec![v(1), v(0), v(3)])
        );
    }

    #[test]
    fn test_disconnected() {
        // Two separate triangles in a non-indexed buffer
        let positions = [0.0f32; 18];
        let topo = Topology::new(MeshSnapshot::non_indexed(&positions)).unwrap();
        assert_eq!(find_shortest_path(&topo, v(0), v(4)).unwrap(), None);
        assert_eq!(
            hop_distances(&topo, v(0)).unwrap(),
            vec![Some(0), Some(1), Some(1), None, None, None]
        );
    }

    #[test]
    fn test_grid_path_is_minimal() {
        let buffers = shapes::grid::<u32>(4).unwrap();
        let topo = Topology::new(&buffers).unwrap();

        // Opposite corners of a 4x4 grid split along (v00, v11) diagonals
        let end = v(24);
        let path = find_shortest_path(&topo, v(0), end).unwrap().unwrap();
        assert_eq!(path.len(), 5);
        assert_eq!(path.first(), Some(&v(0)));
        assert_eq!(path.last(), Some(&end));
        for pair in path.windows(2) {
            assert!(topo.vertex_neighbors(pair[0]).unwrap().contains(&pair[1]));
        }

        let distances = hop_distances(&topo, v(0)).unwrap();
        assert_eq!(distances[end.index()], Some(path.len() - 1));
        // Row 1, column 1 is one diagonal hop away; row 4, column 0 is four
        assert_eq!(distances[6], Some(1));
        assert_eq!(distances[20], Some(4));
    }

    #[test]
    fn test_out_of_range() {
        let positions = [0.0f32; 9];
        let topo = Topology::new(MeshSnapshot::non_indexed(&positions)).unwrap();
        assert_eq!(
            find_shortest_path(&topo, v(0), v(3)),
            Err(TopologyError::out_of_range(Element::Vertex, 3, 3))
        );
        assert_eq!(
            find_shortest_path(&topo, v(5), v(0)),
            Err(TopologyError::out_of_range(Element::Vertex, 5, 3))
        );
    }
}
