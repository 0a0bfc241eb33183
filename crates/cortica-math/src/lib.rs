//! # cortica-math
//!
//! Linear algebra primitives for the Cortica mesh-conditioning core.
//!
//! Provides:
//! - Re-exports of `glam` types (`Vec3`, `Mat4`, etc.)
//! - Sparse matrix representation (CSR) with the row/column restriction
//!   and composition operations the diffusion smoother is built from

pub mod sparse;

// Re-export glam types as the canonical math types for Cortica.
pub use glam::{Mat3, Mat4, Quat, Vec2, Vec3, Vec4};

pub use sparse::CsrMatrix;
