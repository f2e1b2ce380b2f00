//! Numeric constants.

/// Largest per-component difference for which two vectors still compare
/// equal with `==`.
pub const COMPARE_EPSILON: f32 = 1e-4;

/// Number of components in a [`Vector4`](crate::vector::Vector4).
pub const VECTOR_LEN: usize = 4;

/// Number of elements in a [`Matrix4`](crate::matrix::Matrix4).
pub const MATRIX_LEN: usize = VECTOR_LEN * VECTOR_LEN;
