//! Homogeneous vectors.

use crate::{
    consts::{COMPARE_EPSILON, VECTOR_LEN},
    error::{MathError, Result},
};
use bytemuck::{Pod, Zeroable};
use std::{
    fmt,
    ops::{Index, IndexMut},
};

/// A 4-dimensional vector representing either a point or a direction in 3D
/// space, depending on the homogeneous w-component.
///
/// - `w == 1`: a point, which is moved by translations.
/// - `w == 0`: a direction, which is unaffected by translations.
///
/// The length, dot product, cross product and distance only consider the x-,
/// y- and z-components. Scaling by a scalar leaves w untouched, while addition,
/// subtraction and negation operate on all four components.
///
/// Equality (`==`) is approximate: two vectors are equal if no component
/// differs by more than [`COMPARE_EPSILON`].
#[repr(C)]
#[derive(Clone, Copy, Zeroable, Pod)]
pub struct Vector4 {
    x: f32,
    y: f32,
    z: f32,
    w: f32,
}

impl Vector4 {
    /// Creates a new vector with the given components.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Creates a point (w = 1) with the given coordinates.
    #[inline]
    pub const fn point(x: f32, y: f32, z: f32) -> Self {
        Self::new(x, y, z, 1.0)
    }

    /// Creates a direction (w = 0) with the given components.
    #[inline]
    pub const fn direction(x: f32, y: f32, z: f32) -> Self {
        Self::new(x, y, z, 0.0)
    }

    /// The point at the origin, (0, 0, 0, 1).
    #[inline]
    pub const fn origin() -> Self {
        Self::point(0.0, 0.0, 0.0)
    }

    /// Creates a vector with all four components zero.
    #[inline]
    pub const fn zeros() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    /// The x-axis direction.
    #[inline]
    pub const fn unit_x() -> Self {
        Self::direction(1.0, 0.0, 0.0)
    }

    /// The y-axis direction.
    #[inline]
    pub const fn unit_y() -> Self {
        Self::direction(0.0, 1.0, 0.0)
    }

    /// The z-axis direction.
    #[inline]
    pub const fn unit_z() -> Self {
        Self::direction(0.0, 0.0, 1.0)
    }

    /// The w-axis unit vector, which coincides with [`Self::origin`].
    #[inline]
    pub const fn unit_w() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }

    /// Creates a vector from the four values of the given array, in the order
    /// x, y, z, w.
    #[inline]
    pub const fn from_array([x, y, z, w]: [f32; 4]) -> Self {
        Self::new(x, y, z, w)
    }

    /// Creates a vector from the first four values of the given slice, in the
    /// order x, y, z, w.
    ///
    /// # Errors
    /// Returns [`MathError::BufferTooShort`] if the slice holds fewer than four
    /// values.
    pub fn from_slice(values: &[f32]) -> Result<Self> {
        match values {
            [x, y, z, w, ..] => Ok(Self::new(*x, *y, *z, *w)),
            _ => Err(MathError::BufferTooShort {
                required: VECTOR_LEN,
                actual: values.len(),
            }),
        }
    }

    /// The x-component.
    #[inline]
    pub const fn x(&self) -> f32 {
        self.x
    }

    /// The y-component.
    #[inline]
    pub const fn y(&self) -> f32 {
        self.y
    }

    /// The z-component.
    #[inline]
    pub const fn z(&self) -> f32 {
        self.z
    }

    /// The homogeneous w-component.
    #[inline]
    pub const fn w(&self) -> f32 {
        self.w
    }

    /// A mutable reference to the x-component.
    #[inline]
    pub const fn x_mut(&mut self) -> &mut f32 {
        &mut self.x
    }

    /// A mutable reference to the y-component.
    #[inline]
    pub const fn y_mut(&mut self) -> &mut f32 {
        &mut self.y
    }

    /// A mutable reference to the z-component.
    #[inline]
    pub const fn z_mut(&mut self) -> &mut f32 {
        &mut self.z
    }

    /// A mutable reference to the w-component.
    #[inline]
    pub const fn w_mut(&mut self) -> &mut f32 {
        &mut self.w
    }

    /// The x-, y- and z-components.
    #[inline]
    pub const fn xyz(&self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    /// The four components in the order x, y, z, w.
    #[inline]
    pub const fn to_array(&self) -> [f32; 4] {
        [self.x, self.y, self.z, self.w]
    }

    /// The components viewed as a contiguous array.
    #[inline]
    pub fn as_array(&self) -> &[f32; 4] {
        bytemuck::cast_ref(self)
    }

    /// The components viewed as a mutable contiguous array. Meant for editors
    /// that write all components through a single buffer.
    #[inline]
    pub fn as_array_mut(&mut self) -> &mut [f32; 4] {
        bytemuck::cast_mut(self)
    }

    /// Returns the component at the given index (0 → x, 1 → y, 2 → z,
    /// 3 → w).
    ///
    /// # Errors
    /// Returns [`MathError::ComponentIndexOutOfRange`] if the index is
    /// negative or larger than 3.
    #[inline]
    pub fn component(&self, index: isize) -> Result<f32> {
        Self::checked_index(index).map(|idx| self[idx])
    }

    /// Returns a mutable reference to the component at the given index
    /// (0 → x, 1 → y, 2 → z, 3 → w).
    ///
    /// # Errors
    /// Returns [`MathError::ComponentIndexOutOfRange`] if the index is
    /// negative or larger than 3.
    #[inline]
    pub fn component_mut(&mut self, index: isize) -> Result<&mut f32> {
        Self::checked_index(index).map(|idx| &mut self[idx])
    }

    /// Whether this is a point, meaning that w is exactly 1.
    #[inline]
    pub fn is_point(&self) -> bool {
        self.w == 1.0
    }

    /// Whether this is a direction, meaning that w is exactly 0.
    #[inline]
    pub fn is_direction(&self) -> bool {
        self.w == 0.0
    }

    /// Computes the length of the (x, y, z) part. The w-component is ignored.
    #[inline]
    pub fn norm(&self) -> f32 {
        self.norm_squared().sqrt()
    }

    /// Computes the squared length of the (x, y, z) part. The w-component is
    /// ignored.
    #[inline]
    pub fn norm_squared(&self) -> f32 {
        self.dot(self)
    }

    /// Computes the Euclidean distance between the (x, y, z) parts of this
    /// and another point.
    #[inline]
    pub fn distance_to(&self, other: &Self) -> f32 {
        (self - other).norm()
    }

    /// Computes the dot product of the (x, y, z) parts of this and another
    /// vector.
    #[inline]
    pub fn dot(&self, other: &Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Computes the cross product of the (x, y, z) parts of this and another
    /// vector. The result is always a direction (w = 0).
    #[inline]
    pub fn cross(&self, other: &Self) -> Self {
        Self::direction(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Computes the direction (w = 0) of unit length pointing the same way as
    /// the (x, y, z) part of this vector.
    ///
    /// Normalizing a zero-length vector yields NaN for the x-, y- and
    /// z-components, which [`Self::is_valid`] reports.
    #[inline]
    pub fn normalized(&self) -> Self {
        let norm = self.norm();
        Self::direction(self.x / norm, self.y / norm, self.z / norm)
    }

    /// Whether none of the components is NaN. Infinite components are
    /// considered valid.
    #[inline]
    pub fn is_valid(&self) -> bool {
        !(self.x.is_nan() || self.y.is_nan() || self.z.is_nan() || self.w.is_nan())
    }

    fn checked_index(index: isize) -> Result<usize> {
        if index < 0 || index >= VECTOR_LEN as isize {
            Err(MathError::ComponentIndexOutOfRange { index })
        } else {
            Ok(index.unsigned_abs())
        }
    }
}

impl Default for Vector4 {
    /// The point at the origin.
    fn default() -> Self {
        Self::origin()
    }
}

impl From<[f32; 4]> for Vector4 {
    #[inline]
    fn from(values: [f32; 4]) -> Self {
        Self::from_array(values)
    }
}

impl From<Vector4> for [f32; 4] {
    #[inline]
    fn from(vector: Vector4) -> Self {
        vector.to_array()
    }
}

impl PartialEq for Vector4 {
    fn eq(&self, other: &Self) -> bool {
        self.as_array()
            .iter()
            .zip(other.as_array())
            .all(|(a, b)| (a - b).abs() <= COMPARE_EPSILON)
    }
}

impl_binop!(Add, add, Vector4, Vector4 => Vector4, |a, b| {
    Vector4::new(a.x + b.x, a.y + b.y, a.z + b.z, a.w + b.w)
});

impl_binop!(Sub, sub, Vector4, Vector4 => Vector4, |a, b| {
    Vector4::new(a.x - b.x, a.y - b.y, a.z - b.z, a.w - b.w)
});

impl_binop!(Mul, mul, Vector4, f32 => Vector4, |a, b| {
    Vector4::new(a.x * b, a.y * b, a.z * b, a.w)
});

impl_binop!(Mul, mul, f32, Vector4 => Vector4, |a, b| {
    Vector4::new(a * b.x, a * b.y, a * b.z, b.w)
});

impl_binop!(Div, div, Vector4, f32 => Vector4, |a, b| {
    Vector4::new(a.x / b, a.y / b, a.z / b, a.w)
});

impl_binop_assign!(AddAssign, add_assign, Add, add, Vector4, Vector4);
impl_binop_assign!(SubAssign, sub_assign, Sub, sub, Vector4, Vector4);
impl_binop_assign!(MulAssign, mul_assign, Mul, mul, Vector4, f32);
impl_binop_assign!(DivAssign, div_assign, Div, div, Vector4, f32);

impl_unary_op!(Neg, neg, Vector4, |val| {
    Vector4::new(-val.x, -val.y, -val.z, -val.w)
});

impl Index<usize> for Vector4 {
    type Output = f32;

    #[inline]
    fn index(&self, idx: usize) -> &Self::Output {
        match idx {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            3 => &self.w,
            _ => panic!("index out of bounds"),
        }
    }
}

impl IndexMut<usize> for Vector4 {
    #[inline]
    fn index_mut(&mut self, idx: usize) -> &mut Self::Output {
        match idx {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            3 => &mut self.w,
            _ => panic!("index out of bounds"),
        }
    }
}

impl_approx_eq!(Vector4, |vector| vector.as_array());

impl fmt::Debug for Vector4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector4")
            .field("x", &self.x)
            .field("y", &self.y)
            .field("z", &self.z)
            .field("w", &self.w)
            .finish()
    }
}

impl fmt::Display for Vector4 {
    /// Writes `(x, y, z, w)`, honoring the precision of the formatter.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (idx, value) in self.as_array().iter().enumerate() {
            if idx > 0 {
                write!(f, ", ")?;
            }
            match f.precision() {
                Some(precision) => write!(f, "{value:.precision$}")?,
                None => write!(f, "{value}")?,
            }
        }
        write!(f, ")")
    }
}
