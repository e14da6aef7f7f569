//! Small procedural meshes.
//!
//! Used by the CLI and benchmarks, and convenient as test fixtures.

use nalgebra::Point3;

use super::index::MeshIndex;
use super::source::MeshBuffers;
use crate::error::Result;

/// A flat `n x n` grid of unit squares in the XY plane, two triangles per square.
///
/// Vertex `(i, j)` has index `j * (n + 1) + i`. Each square `v00, v10, v11, v01`
/// is split along the `v00 - v11` diagonal.
///
/// # Errors
///
/// `IndexOverflow` when `(n + 1)^2` vertices do not fit `I` (`n >= 256` for `u16`).
pub fn grid<I: MeshIndex>(n: usize) -> Result<MeshBuffers<I>> {
    let mut points = Vec::with_capacity((n + 1) * (n + 1));
    let mut faces = Vec::with_capacity(n * n * 2);

    for j in 0..=n {
        for i in 0..=n {
            points.push(Point3::new(i as f32, j as f32, 0.0));
        }
    }

    for j in 0..n {
        for i in 0..n {
            let v00 = j * (n + 1) + i;
            let v10 = v00 + 1;
            let v01 = v00 + (n + 1);
            let v11 = v01 + 1;

            faces.push([v00, v10, v11]);
            faces.push([v00, v11, v01]);
        }
    }

    MeshBuffers::from_triangles(&points, &faces)
}

/// A closed tetrahedron with outward-facing winding.
pub fn tetrahedron<I: MeshIndex>() -> MeshBuffers<I> {
    let positions = vec![
        0.0, 0.0, 0.0, //
        1.0, 0.0, 0.0, //
        0.5, 1.0, 0.0, //
        0.5, 0.5, 1.0,
    ];
    let faces: [u16; 12] = [
        0, 2, 1, // bottom
        0, 1, 3, // front
        1, 2, 3, // right
        2, 0, 3, // left
    ];
    MeshBuffers {
        positions,
        indices: Some(faces.into_iter().map(<I as From<u16>>::from).collect()),
    }
}
