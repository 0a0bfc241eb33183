//! Dense 3-D scalar grid.

use serde::{Deserialize, Serialize};

use cortica_types::{CorticaError, CorticaResult};

/// A dense scalar volume of shape `(D0, D1, D2)`, stored row-major
/// (last axis contiguous).
///
/// The pipeline reads volumes; the only mutation ever made is to an
/// internal smoothed copy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScalarVolume {
    /// Grid dimensions.
    pub dims: [usize; 3],
    /// Voxel values, flat, length `dims[0] * dims[1] * dims[2]`.
    pub data: Vec<f32>,
}

impl ScalarVolume {
    /// Creates a volume from dimensions and flat data.
    pub fn new(dims: [usize; 3], data: Vec<f32>) -> CorticaResult<Self> {
        let volume = Self { dims, data };
        volume.validate()?;
        Ok(volume)
    }

    /// Creates an all-zero volume.
    pub fn zeros(dims: [usize; 3]) -> Self {
        Self {
            dims,
            data: vec![0.0; dims[0] * dims[1] * dims[2]],
        }
    }

    /// Creates a volume by evaluating `f` at every voxel coordinate.
    pub fn from_fn(dims: [usize; 3], f: impl Fn(usize, usize, usize) -> f32) -> Self {
        let mut volume = Self::zeros(dims);
        for x in 0..dims[0] {
            for y in 0..dims[1] {
                for z in 0..dims[2] {
                    let v = f(x, y, z);
                    volume.set(x, y, z, v);
                }
            }
        }
        volume
    }

    /// Checks that the data length matches the dimensions.
    pub fn validate(&self) -> CorticaResult<()> {
        let expected = self.dims[0] * self.dims[1] * self.dims[2];
        if self.data.len() != expected {
            return Err(CorticaError::InvalidInput(format!(
                "volume data length ({}) != {}×{}×{}",
                self.data.len(),
                self.dims[0],
                self.dims[1],
                self.dims[2]
            )));
        }
        Ok(())
    }

    /// Flat offset of voxel `(x, y, z)`.
    #[inline]
    pub fn offset(&self, x: usize, y: usize, z: usize) -> usize {
        (x * self.dims[1] + y) * self.dims[2] + z
    }

    /// Returns the value at `(x, y, z)`.
    #[inline]
    pub fn get(&self, x: usize, y: usize, z: usize) -> f32 {
        self.data[self.offset(x, y, z)]
    }

    /// Sets the value at `(x, y, z)`.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, z: usize, value: f32) {
        let i = self.offset(x, y, z);
        self.data[i] = value;
    }
}
