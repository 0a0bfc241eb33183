//! Isosurface extraction.
//!
//! Scalar Surface Nets: one vertex per cell whose corners straddle the
//! isovalue, placed at the mean of the linearly interpolated crossing
//! points on the cell's edges, with quads stitched around every lattice
//! edge where the field crosses the level. This avoids the ambiguous
//! cube configurations a tri-table approach is prone to and produces a
//! deterministic, crack-free mesh.
//!
//! Vertex coordinates are expressed in voxel index space.

use crate::volume::ScalarVolume;

/// Trait for isosurface extraction routines.
///
/// Returns packed `(vertices, faces)` buffers; a field with no crossing
/// at the level yields two empty buffers.
pub trait IsosurfaceExtractor {
    /// Extracts the level set of `volume` at `level` as a triangle mesh.
    fn extract(&self, volume: &ScalarVolume, level: f32) -> (Vec<f32>, Vec<u32>);
}

/// Default Surface Nets extractor.
pub struct SurfaceNets;

// Cube corner offsets in a consistent order.
const C_OFF: [(usize, usize, usize); 8] = [
    (0, 0, 0),
    (1, 0, 0),
    (1, 1, 0),
    (0, 1, 0),
    (0, 0, 1),
    (1, 0, 1),
    (1, 1, 1),
    (0, 1, 1),
];

// Cell edges as pairs of corner indices.
const E: [(usize, usize); 12] = [
    (0, 1),
    (1, 2),
    (2, 3),
    (3, 0),
    (4, 5),
    (5, 6),
    (6, 7),
    (7, 4),
    (0, 4),
    (1, 5),
    (2, 6),
    (3, 7),
];

impl IsosurfaceExtractor for SurfaceNets {
    fn extract(&self, volume: &ScalarVolume, level: f32) -> (Vec<f32>, Vec<u32>) {
        let [d0, d1, d2] = volume.dims;
        if d0 < 2 || d1 < 2 || d2 < 2 {
            return (Vec::new(), Vec::new());
        }
        let cells = [d0 - 1, d1 - 1, d2 - 1];
        let cell_idx3 =
            |x: usize, y: usize, z: usize| -> usize { (x * cells[1] + y) * cells[2] + z };

        let inside = |v: f32| v > level;

        // Pass 1: one vertex per mixed cell, at the mean of the
        // interpolated edge crossings.
        let mut cell_vert_index = vec![-1i32; cells[0] * cells[1] * cells[2]];
        let mut positions: Vec<f32> = Vec::new();

        for xc in 0..cells[0] {
            for yc in 0..cells[1] {
                for zc in 0..cells[2] {
                    let mut corner_val = [0.0f32; 8];
                    let mut all_inside = true;
                    let mut all_outside = true;
                    for (i, &(dx, dy, dz)) in C_OFF.iter().enumerate() {
                        let v = volume.get(xc + dx, yc + dy, zc + dz);
                        corner_val[i] = v;
                        all_inside &= inside(v);
                        all_outside &= !inside(v);
                    }
                    if all_inside || all_outside {
                        continue;
                    }

                    let mut acc = [0.0f32; 3];
                    let mut crossings = 0u32;
                    for (a, b) in E {
                        let va = corner_val[a];
                        let vb = corner_val[b];
                        if inside(va) == inside(vb) {
                            continue;
                        }
                        let t = (level - va) / (vb - va);
                        let (adx, ady, adz) = C_OFF[a];
                        let (bdx, bdy, bdz) = C_OFF[b];
                        let pa = [
                            (xc + adx) as f32,
                            (yc + ady) as f32,
                            (zc + adz) as f32,
                        ];
                        let pb = [
                            (xc + bdx) as f32,
                            (yc + bdy) as f32,
                            (zc + bdz) as f32,
                        ];
                        for k in 0..3 {
                            acc[k] += pa[k] + t * (pb[k] - pa[k]);
                        }
                        crossings += 1;
                    }

                    if crossings == 0 {
                        // Mixed corners imply at least one crossing edge.
                        continue;
                    }

                    let idx = (positions.len() / 3) as i32;
                    for k in 0..3 {
                        positions.push(acc[k] / crossings as f32);
                    }
                    cell_vert_index[cell_idx3(xc, yc, zc)] = idx;
                }
            }
        }

        // Pass 2: stitch quads around interior lattice edges where the
        // field crosses the level. Each such edge is shared by 4 cells;
        // winding follows the crossing direction along the positive axis.
        let mut faces: Vec<u32> = Vec::new();
        let mut emit_quad = |i0: u32, i1: u32, i2: u32, i3: u32| {
            faces.extend_from_slice(&[i0, i1, i2]);
            faces.extend_from_slice(&[i0, i2, i3]);
        };
        let cell_vi = |x: usize, y: usize, z: usize, index: &[i32]| -> Option<u32> {
            let v = index[cell_idx3(x, y, z)];
            if v >= 0 {
                Some(v as u32)
            } else {
                None
            }
        };

        // X-edges: (x,y,z) -> (x+1,y,z)
        for x in 0..cells[0] {
            for y in 1..cells[1] {
                for z in 1..cells[2] {
                    let a = inside(volume.get(x, y, z));
                    let b = inside(volume.get(x + 1, y, z));
                    if a == b {
                        continue;
                    }
                    let quad = (
                        cell_vi(x, y - 1, z - 1, &cell_vert_index),
                        cell_vi(x, y, z - 1, &cell_vert_index),
                        cell_vi(x, y, z, &cell_vert_index),
                        cell_vi(x, y - 1, z, &cell_vert_index),
                    );
                    if let (Some(i00), Some(i10), Some(i11), Some(i01)) = quad {
                        if a {
                            emit_quad(i00, i01, i11, i10);
                        } else {
                            emit_quad(i00, i10, i11, i01);
                        }
                    }
                }
            }
        }

        // Y-edges: (x,y,z) -> (x,y+1,z)
        for x in 1..cells[0] {
            for y in 0..cells[1] {
                for z in 1..cells[2] {
                    let a = inside(volume.get(x, y, z));
                    let b = inside(volume.get(x, y + 1, z));
                    if a == b {
                        continue;
                    }
                    let quad = (
                        cell_vi(x - 1, y, z - 1, &cell_vert_index),
                        cell_vi(x, y, z - 1, &cell_vert_index),
                        cell_vi(x, y, z, &cell_vert_index),
                        cell_vi(x - 1, y, z, &cell_vert_index),
                    );
                    if let (Some(i00), Some(i10), Some(i11), Some(i01)) = quad {
                        if a {
                            emit_quad(i00, i10, i11, i01);
                        } else {
                            emit_quad(i00, i01, i11, i10);
                        }
                    }
                }
            }
        }

        // Z-edges: (x,y,z) -> (x,y,z+1)
        for x in 1..cells[0] {
            for y in 1..cells[1] {
                for z in 0..cells[2] {
                    let a = inside(volume.get(x, y, z));
                    let b = inside(volume.get(x, y, z + 1));
                    if a == b {
                        continue;
                    }
                    let quad = (
                        cell_vi(x - 1, y - 1, z, &cell_vert_index),
                        cell_vi(x, y - 1, z, &cell_vert_index),
                        cell_vi(x, y, z, &cell_vert_index),
                        cell_vi(x - 1, y, z, &cell_vert_index),
                    );
                    if let (Some(i00), Some(i10), Some(i11), Some(i01)) = quad {
                        if a {
                            emit_quad(i00, i01, i11, i10);
                        } else {
                            emit_quad(i00, i10, i11, i01);
                        }
                    }
                }
            }
        }

        (positions, faces)
    }
}
