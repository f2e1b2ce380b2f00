//! Homogeneous 4D vectors and column-major 4x4 matrices for 3D transforms.

#[macro_use]
mod macros;

pub mod consts;
pub mod error;
pub mod matrix;
pub mod readout;
pub mod vector;

pub use error::{MathError, Result};
pub use matrix::Matrix4;
pub use vector::Vector4;
