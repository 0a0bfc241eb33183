//! Integration tests for cortica-volume.

use cortica_volume::isosurface::{IsosurfaceExtractor, SurfaceNets};
use cortica_volume::smooth::{BoxSmoother, VolumeSmoother};
use cortica_volume::{volume_to_mesh, Level, ScalarVolume, VolumeMeshOptions};

/// A centered ball mask of the given radius and value.
fn ball_volume(dim: usize, radius: f32, value: f32) -> ScalarVolume {
    let c = (dim - 1) as f32 / 2.0;
    ScalarVolume::from_fn([dim, dim, dim], |x, y, z| {
        let dx = x as f32 - c;
        let dy = y as f32 - c;
        let dz = z as f32 - c;
        if (dx * dx + dy * dy + dz * dz).sqrt() <= radius {
            value
        } else {
            0.0
        }
    })
}

// ─── ScalarVolume Tests ───────────────────────────────────────

#[test]
fn volume_construction() {
    let v = ScalarVolume::new([2, 3, 4], vec![0.0; 24]).unwrap();
    assert_eq!(v.dims, [2, 3, 4]);
}

#[test]
fn volume_length_mismatch_rejected() {
    assert!(ScalarVolume::new([2, 3, 4], vec![0.0; 23]).is_err());
}

#[test]
fn volume_indexing_round_trip() {
    let mut v = ScalarVolume::zeros([3, 4, 5]);
    v.set(1, 2, 3, 7.5);
    assert_eq!(v.get(1, 2, 3), 7.5);
    assert_eq!(v.get(1, 2, 2), 0.0);
}

#[test]
fn volume_serde_round_trip() {
    let v = ball_volume(8, 2.5, 1.0);
    let json = serde_json::to_string(&v).unwrap();
    let back: ScalarVolume = serde_json::from_str(&json).unwrap();
    assert_eq!(back.dims, v.dims);
    assert_eq!(back.data, v.data);
}

// ─── Smoothing Tests ──────────────────────────────────────────

#[test]
fn smooth_factor_one_is_copy() {
    let v = ball_volume(8, 2.5, 1.0);
    let s = BoxSmoother.smooth(&v, 1);
    assert_eq!(s.data, v.data);
}

#[test]
fn smooth_preserves_constant_volume() {
    let v = ScalarVolume::new([5, 5, 5], vec![2.0; 125]).unwrap();
    let s = BoxSmoother.smooth(&v, 3);
    for &value in &s.data {
        assert_eq!(value, 2.0);
    }
}

#[test]
fn smooth_blurs_step_edge() {
    let mut v = ScalarVolume::zeros([6, 3, 3]);
    for x in 0..3 {
        for y in 0..3 {
            for z in 0..3 {
                v.set(x, y, z, 1.0);
            }
        }
    }
    let s = BoxSmoother.smooth(&v, 3);
    // The voxel just past the step picks up mass from the filled side.
    let edge = s.get(3, 1, 1);
    assert!(edge > 0.0 && edge < 1.0, "edge value {edge}");
    // Far from the step, values stay put.
    assert_eq!(s.get(0, 1, 1), 1.0);
    assert_eq!(s.get(5, 1, 1), 0.0);
}

// ─── Isosurface Tests ─────────────────────────────────────────

#[test]
fn empty_volume_extracts_nothing() {
    let v = ScalarVolume::zeros([8, 8, 8]);
    let (vertices, faces) = SurfaceNets.extract(&v, 0.5);
    assert!(vertices.is_empty());
    assert!(faces.is_empty());
}

#[test]
fn ball_extracts_closed_band() {
    let v = ball_volume(16, 5.0, 1.0);
    let (vertices, faces) = SurfaceNets.extract(&v, 0.5);
    assert!(!vertices.is_empty());
    assert!(!faces.is_empty());
    assert_eq!(vertices.len() % 3, 0);
    assert_eq!(faces.len() % 3, 0);

    // All indices reference generated vertices.
    let n = (vertices.len() / 3) as u32;
    assert!(faces.iter().all(|&f| f < n));

    // Vertices stay near the ball surface, inside the grid.
    let c = 7.5f32;
    for p in vertices.chunks_exact(3) {
        let r = ((p[0] - c).powi(2) + (p[1] - c).powi(2) + (p[2] - c).powi(2)).sqrt();
        assert!(r > 3.0 && r < 7.0, "vertex at radius {r}");
    }
}

#[test]
fn degenerate_grid_extracts_nothing() {
    let v = ScalarVolume::new([1, 4, 4], vec![1.0; 16]).unwrap();
    let (vertices, faces) = SurfaceNets.extract(&v, 0.5);
    assert!(vertices.is_empty());
    assert!(faces.is_empty());
}

#[test]
fn isovalue_moves_the_surface() {
    // Radially decreasing field: a higher isovalue shrinks the band.
    let v = ScalarVolume::from_fn([16, 16, 16], |x, y, z| {
        let c = 7.5f32;
        let r = ((x as f32 - c).powi(2) + (y as f32 - c).powi(2) + (z as f32 - c).powi(2)).sqrt();
        10.0 - r
    });
    let (lo_verts, _) = SurfaceNets.extract(&v, 4.0);
    let (hi_verts, _) = SurfaceNets.extract(&v, 7.0);
    assert!(!lo_verts.is_empty());
    assert!(!hi_verts.is_empty());

    let mean_radius = |verts: &[f32]| {
        let c = 7.5f32;
        let mut total = 0.0f32;
        for p in verts.chunks_exact(3) {
            total += ((p[0] - c).powi(2) + (p[1] - c).powi(2) + (p[2] - c).powi(2)).sqrt();
        }
        total / (verts.len() / 3) as f32
    };
    assert!(mean_radius(&hi_verts) < mean_radius(&lo_verts));
}

// ─── Pipeline Tests ───────────────────────────────────────────

#[test]
fn all_zero_volume_yields_empty_mesh() {
    let v = ScalarVolume::zeros([10, 10, 10]);
    let mesh = volume_to_mesh(&v, &VolumeMeshOptions::default()).unwrap();
    assert!(mesh.is_empty());
    assert_eq!(mesh.face_count(), 0);
    assert!(mesh.validate().is_ok());
}

#[test]
fn mask_volume_yields_valid_mesh() {
    let v = ball_volume(16, 5.0, 1.0);
    let mesh = volume_to_mesh(&v, &VolumeMeshOptions::default()).unwrap();
    assert!(!mesh.is_empty());
    assert!(mesh.validate().is_ok());
    assert_eq!(mesh.normals.len(), mesh.positions.len());

    // Normals come out unit length where defined (a vertex left
    // unreferenced by any face keeps a zero normal).
    for n in mesh.normals.chunks_exact(3) {
        let len = (n[0] * n[0] + n[1] * n[1] + n[2] * n[2]).sqrt();
        assert!(
            len < 1e-6 || (len - 1.0).abs() < 1e-4,
            "normal length {len}"
        );
    }
}

#[test]
fn label_isolation_selects_one_structure() {
    // Two balls with different labels in one volume.
    let c1 = 7.0f32;
    let c2 = 24.0f32;
    let v = ScalarVolume::from_fn([32, 16, 16], |x, y, z| {
        let cy = 7.5f32;
        let d1 = ((x as f32 - c1).powi(2) + (y as f32 - cy).powi(2) + (z as f32 - cy).powi(2))
            .sqrt();
        let d2 = ((x as f32 - c2).powi(2) + (y as f32 - cy).powi(2) + (z as f32 - cy).powi(2))
            .sqrt();
        if d1 <= 5.0 {
            2.0
        } else if d2 <= 5.0 {
            3.0
        } else {
            0.0
        }
    });

    let options = VolumeMeshOptions {
        level: Some(Level::Label(2)),
        ..Default::default()
    };
    let mesh = volume_to_mesh(&v, &options).unwrap();
    assert!(!mesh.is_empty());

    // Every vertex sits around the label-2 ball, none around label 3.
    for p in mesh.positions.chunks_exact(3) {
        assert!(p[0] < 16.0, "vertex at x={} belongs to the other label", p[0]);
    }
}

#[test]
fn missing_label_yields_empty_mesh() {
    let v = ball_volume(12, 4.0, 1.0);
    let options = VolumeMeshOptions {
        level: Some(Level::Label(9)),
        ..Default::default()
    };
    let mesh = volume_to_mesh(&v, &options).unwrap();
    assert!(mesh.is_empty());
}

#[test]
fn float_level_is_used_directly() {
    let v = ScalarVolume::from_fn([16, 16, 16], |x, y, z| {
        let c = 7.5f32;
        let r = ((x as f32 - c).powi(2) + (y as f32 - c).powi(2) + (z as f32 - c).powi(2)).sqrt();
        10.0 - r
    });
    let options = VolumeMeshOptions {
        smooth_factor: 1,
        level: Some(Level::Iso(5.0)),
        ..Default::default()
    };
    let mesh = volume_to_mesh(&v, &options).unwrap();
    assert!(!mesh.is_empty());
    assert!(mesh.validate().is_ok());
}

#[test]
fn invert_normals_forwarded_through_pipeline() {
    let v = ball_volume(12, 4.0, 1.0);
    let mesh = volume_to_mesh(&v, &VolumeMeshOptions::default()).unwrap();

    let mut options = VolumeMeshOptions::default();
    options.normalize.invert_normals = true;
    let inverted = volume_to_mesh(&v, &options).unwrap();

    assert_eq!(mesh.normals.len(), inverted.normals.len());
    for (a, b) in mesh.normals.iter().zip(inverted.normals.iter()) {
        assert_eq!(*a, -*b);
    }
}

#[test]
fn empty_mesh_round_trips_through_json() {
    let v = ScalarVolume::zeros([6, 6, 6]);
    let mesh = volume_to_mesh(&v, &VolumeMeshOptions::default()).unwrap();
    let json = serde_json::to_string(&mesh).unwrap();
    let back: cortica_mesh::SurfaceMesh = serde_json::from_str(&json).unwrap();
    assert!(back.is_empty());
    assert!(back.validate().is_ok());
}
