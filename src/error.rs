//! Errors reported by vector and matrix operations.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, MathError>;

#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum MathError {
    #[error("Component index {index} is outside the valid range 0..=3")]
    ComponentIndexOutOfRange { index: isize },

    #[error("Element ({row}, {column}) is outside the 4x4 matrix")]
    ElementIndexOutOfRange { row: usize, column: usize },

    #[error("Buffer holds {actual} values but at least {required} are required")]
    BufferTooShort { required: usize, actual: usize },
}
