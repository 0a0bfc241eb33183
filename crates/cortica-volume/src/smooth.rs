//! Volumetric smoothing collaborator.
//!
//! Smoothing is an external concern of the extraction pipeline, so it
//! sits behind a trait. The default implementation is a separable box
//! (mean) filter, which is deterministic and cheap.

use crate::volume::ScalarVolume;

/// Trait for 3-D volumetric smoothing routines.
pub trait VolumeSmoother {
    /// Returns a smoothed copy of the volume. `factor` is the kernel
    /// width in voxels; values `<= 1` return an unsmoothed copy.
    fn smooth(&self, volume: &ScalarVolume, factor: usize) -> ScalarVolume;
}

/// Separable box filter: the mean over a `factor`-wide window applied
/// along each axis in turn, with replicated borders.
pub struct BoxSmoother;

impl VolumeSmoother for BoxSmoother {
    fn smooth(&self, volume: &ScalarVolume, factor: usize) -> ScalarVolume {
        if factor <= 1 {
            return volume.clone();
        }
        let mut out = volume.clone();
        for axis in 0..3 {
            out = smooth_axis(&out, axis, factor);
        }
        out
    }
}

fn smooth_axis(src: &ScalarVolume, axis: usize, factor: usize) -> ScalarVolume {
    let [d0, d1, d2] = src.dims;
    let mut dst = ScalarVolume::zeros(src.dims);
    let dim = src.dims[axis] as isize;
    // Window of exactly `factor` taps, centered (one tap short on the
    // trailing side for even widths).
    let lo = -(factor as isize / 2);

    for x in 0..d0 {
        for y in 0..d1 {
            for z in 0..d2 {
                let along = [x, y, z][axis] as isize;
                let mut sum = 0.0f32;
                for t in 0..factor as isize {
                    let clamped = (along + lo + t).clamp(0, dim - 1) as usize;
                    let mut coord = [x, y, z];
                    coord[axis] = clamped;
                    sum += src.get(coord[0], coord[1], coord[2]);
                }
                // True division keeps constant regions exact, which the
                // label-isolation mode depends on.
                dst.set(x, y, z, sum / factor as f32);
            }
        }
    }
    dst
}
