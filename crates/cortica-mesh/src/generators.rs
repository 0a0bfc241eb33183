//! Procedural mesh generators for tests and benchmarks.
//!
//! Deterministic, resolution-configurable meshes with correct winding
//! order and outward normals.

use crate::mesh::SurfaceMesh;
use crate::normals::vertex_normals;

/// Generates a flat rectangular quad grid in the XY plane.
///
/// The grid spans `[-width/2, width/2]` in X and `[-height/2, height/2]`
/// in Y, centered at the origin at Z=0, facing +Z.
///
/// # Example
/// ```
/// use cortica_mesh::generators::quad_grid;
/// let mesh = quad_grid(2, 2, 1.0, 1.0);
/// assert_eq!(mesh.vertex_count(), 9);  // 3×3 vertices
/// assert_eq!(mesh.face_count(), 8);    // 2×2 quads × 2 tris each
/// ```
pub fn quad_grid(cols: usize, rows: usize, width: f32, height: f32) -> SurfaceMesh {
    let verts_x = cols + 1;
    let verts_y = rows + 1;

    let mut positions = Vec::with_capacity(verts_x * verts_y * 3);
    let mut normals = Vec::with_capacity(verts_x * verts_y * 3);
    let mut faces = Vec::with_capacity(cols * rows * 6);

    let half_w = width / 2.0;
    let half_h = height / 2.0;

    for j in 0..verts_y {
        for i in 0..verts_x {
            let u = i as f32 / cols as f32;
            let v = j as f32 / rows as f32;

            positions.push(-half_w + u * width);
            positions.push(half_h - v * height); // Top to bottom
            positions.push(0.0);

            normals.push(0.0);
            normals.push(0.0);
            normals.push(1.0);
        }
    }

    for j in 0..rows {
        for i in 0..cols {
            let top_left = (j * verts_x + i) as u32;
            let top_right = top_left + 1;
            let bot_left = top_left + verts_x as u32;
            let bot_right = bot_left + 1;

            faces.extend_from_slice(&[top_left, bot_left, top_right]);
            faces.extend_from_slice(&[top_right, bot_left, bot_right]);
        }
    }

    SurfaceMesh {
        positions,
        normals,
        faces,
    }
}

/// Generates an axis-aligned unit cube centered at the origin.
///
/// 8 vertices, 12 triangles with outward winding. Normals are the
/// area-weighted corner normals recomputed from topology.
pub fn unit_cube() -> SurfaceMesh {
    #[rustfmt::skip]
    let positions: Vec<f32> = vec![
        -0.5, -0.5, -0.5, // 0
         0.5, -0.5, -0.5, // 1
         0.5,  0.5, -0.5, // 2
        -0.5,  0.5, -0.5, // 3
        -0.5, -0.5,  0.5, // 4
         0.5, -0.5,  0.5, // 5
         0.5,  0.5,  0.5, // 6
        -0.5,  0.5,  0.5, // 7
    ];

    #[rustfmt::skip]
    let faces: Vec<u32> = vec![
        0, 2, 1,  0, 3, 2, // -Z
        4, 5, 6,  4, 6, 7, // +Z
        0, 1, 5,  0, 5, 4, // -Y
        3, 6, 2,  3, 7, 6, // +Y
        0, 4, 7,  0, 7, 3, // -X
        1, 2, 6,  1, 6, 5, // +X
    ];

    let normals = vertex_normals(&positions, &faces);

    SurfaceMesh {
        positions,
        normals,
        faces,
    }
}
