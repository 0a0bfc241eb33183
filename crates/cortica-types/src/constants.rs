//! Pipeline defaults and numeric thresholds.

/// Default number of diffusion smoothing steps.
pub const DEFAULT_SMOOTHING_STEPS: usize = 20;

/// Hard iteration bound for coverage-mode diffusion (`steps: None`).
///
/// Guarantees termination when part of the graph is unreachable from
/// the seed set. Rows that are never reached stay all-zero.
pub const SMOOTHING_ITERATION_CAP: usize = 1000;

/// Default volumetric smoothing kernel width.
pub const DEFAULT_VOLUME_SMOOTH_FACTOR: usize = 3;

/// Isovalue used for mask-like volumes (no explicit level, or
/// label-isolation mode).
pub const HALF_UNIT_ISOVALUE: f32 = 0.5;

/// Length threshold below which an accumulated vertex normal is left
/// at zero instead of being normalized.
pub const NORMAL_EPSILON: f32 = 1.0e-10;
