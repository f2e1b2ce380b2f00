//! Matrices.

use crate::{
    consts::{MATRIX_LEN, VECTOR_LEN},
    error::{MathError, Result},
    vector::Vector4,
};
use bytemuck::{Pod, Zeroable};
use std::{
    fmt,
    ops::{Index, IndexMut},
};

/// A 4x4 matrix for homogeneous transforms of [`Vector4`]s.
///
/// The sixteen elements are stored contiguously in column-major order, like
/// OpenGL expects them: the element at row `i` and column `j` lives at linear
/// index `j * 4 + i` (see [`Matrix4::linear_index`]). Indexing the matrix with
/// a single `usize` addresses this linear buffer.
///
/// For an affine transform, the first three columns hold the images of the
/// x-, y- and z-axes and the last column holds the translation. The bottom row
/// is then (0, 0, 0, 1), but this is not enforced.
///
/// Products compose right to left: `(a * b) * v == a * (b * v)`, so `b` is
/// applied first.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Zeroable, Pod)]
pub struct Matrix4 {
    data: [f32; MATRIX_LEN],
}

impl Matrix4 {
    /// Creates the identity matrix.
    #[inline]
    pub const fn identity() -> Self {
        Self::from_columns(
            Vector4::unit_x(),
            Vector4::unit_y(),
            Vector4::unit_z(),
            Vector4::unit_w(),
        )
    }

    /// Creates a matrix with all zeros.
    #[inline]
    pub const fn zeros() -> Self {
        Self::from_column_major([0.0; MATRIX_LEN])
    }

    /// Creates a diagonal matrix with the given vector as the diagonal.
    #[inline]
    pub const fn from_diagonal(diagonal: &Vector4) -> Self {
        let mut m = Self::zeros();
        m.data[Self::linear_index(0, 0)] = diagonal.x();
        m.data[Self::linear_index(1, 1)] = diagonal.y();
        m.data[Self::linear_index(2, 2)] = diagonal.z();
        m.data[Self::linear_index(3, 3)] = diagonal.w();
        m
    }

    /// Creates a transform that translates points by the given offsets.
    #[inline]
    pub const fn from_translation(x: f32, y: f32, z: f32) -> Self {
        Self::from_axes(
            Vector4::unit_x(),
            Vector4::unit_y(),
            Vector4::unit_z(),
            Vector4::point(x, y, z),
        )
    }

    /// Creates a transform that scales each axis by the given factor.
    #[inline]
    pub const fn from_scaling(x: f32, y: f32, z: f32) -> Self {
        Self::from_diagonal(&Vector4::new(x, y, z, 1.0))
    }

    /// Creates a matrix from sixteen elements that are already in
    /// column-major order.
    #[inline]
    pub const fn from_column_major(data: [f32; MATRIX_LEN]) -> Self {
        Self { data }
    }

    /// Creates a matrix from the first sixteen elements of the given slice,
    /// which are interpreted in column-major order.
    ///
    /// # Errors
    /// Returns [`MathError::BufferTooShort`] if the slice holds fewer than
    /// sixteen values.
    pub fn from_column_major_slice(values: &[f32]) -> Result<Self> {
        values
            .get(..MATRIX_LEN)
            .and_then(|head| <[f32; MATRIX_LEN]>::try_from(head).ok())
            .map(Self::from_column_major)
            .ok_or(MathError::BufferTooShort {
                required: MATRIX_LEN,
                actual: values.len(),
            })
    }

    /// Creates a matrix with the given columns.
    #[inline]
    pub const fn from_columns(
        column_1: Vector4,
        column_2: Vector4,
        column_3: Vector4,
        column_4: Vector4,
    ) -> Self {
        let [c1x, c1y, c1z, c1w] = column_1.to_array();
        let [c2x, c2y, c2z, c2w] = column_2.to_array();
        let [c3x, c3y, c3z, c3w] = column_3.to_array();
        let [c4x, c4y, c4z, c4w] = column_4.to_array();
        Self::from_column_major([
            c1x, c1y, c1z, c1w, //
            c2x, c2y, c2z, c2w, //
            c3x, c3y, c3z, c3w, //
            c4x, c4y, c4z, c4w,
        ])
    }

    /// Creates the transform that maps the x-, y- and z-axes to the given axes
    /// and then applies the given translation.
    ///
    /// All four components of each argument fill one column, so the axes
    /// should be directions (w = 0) and the translation a point (w = 1) for
    /// the bottom row to become (0, 0, 0, 1).
    #[inline]
    pub const fn from_axes(
        axis_1: Vector4,
        axis_2: Vector4,
        axis_3: Vector4,
        translation: Vector4,
    ) -> Self {
        Self::from_columns(axis_1, axis_2, axis_3, translation)
    }

    /// Maps row `i` and column `j` to the index in the column-major element
    /// buffer.
    #[inline]
    pub const fn linear_index(i: usize, j: usize) -> usize {
        j * VECTOR_LEN + i
    }

    /// The elements in column-major order.
    #[inline]
    pub const fn as_column_major(&self) -> &[f32; MATRIX_LEN] {
        &self.data
    }

    /// The elements in column-major order, for editing in place.
    #[inline]
    pub const fn as_column_major_mut(&mut self) -> &mut [f32; MATRIX_LEN] {
        &mut self.data
    }

    /// Copies out the elements in column-major order.
    #[inline]
    pub const fn to_column_major(&self) -> [f32; MATRIX_LEN] {
        self.data
    }

    /// The four columns of the matrix.
    #[inline]
    pub fn columns(&self) -> &[Vector4; 4] {
        bytemuck::cast_ref(&self.data)
    }

    /// The column with index `j`.
    ///
    /// # Panics
    /// If `j` is larger than 3.
    #[inline]
    pub fn column(&self, j: usize) -> &Vector4 {
        &self.columns()[j]
    }

    /// Replaces the column with index `j`.
    ///
    /// # Panics
    /// If `j` is larger than 3.
    #[inline]
    pub fn set_column(&mut self, j: usize, column: Vector4) {
        let columns: &mut [Vector4; 4] = bytemuck::cast_mut(&mut self.data);
        columns[j] = column;
    }

    /// The row with index `i`.
    ///
    /// # Panics
    /// If `i` is larger than 3.
    #[inline]
    pub fn row(&self, i: usize) -> Vector4 {
        Vector4::new(
            self.element(i, 0),
            self.element(i, 1),
            self.element(i, 2),
            self.element(i, 3),
        )
    }

    /// Returns the element at row `i` and column `j`.
    ///
    /// # Panics
    /// If the indices are outside the matrix.
    #[inline]
    pub fn element(&self, i: usize, j: usize) -> f32 {
        match self.try_element(i, j) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }

    /// Returns a mutable reference to the element at row `i` and column `j`.
    ///
    /// # Panics
    /// If the indices are outside the matrix.
    #[inline]
    pub fn element_mut(&mut self, i: usize, j: usize) -> &mut f32 {
        match Self::checked_linear_index(i, j) {
            Ok(idx) => &mut self.data[idx],
            Err(err) => panic!("{err}"),
        }
    }

    /// Returns the element at row `i` and column `j`.
    ///
    /// # Errors
    /// Returns [`MathError::ElementIndexOutOfRange`] if the indices are
    /// outside the matrix.
    #[inline]
    pub fn try_element(&self, i: usize, j: usize) -> Result<f32> {
        Self::checked_linear_index(i, j).map(|idx| self.data[idx])
    }

    /// Returns the transpose of this matrix.
    pub fn transposed(&self) -> Self {
        let mut transposed = Self::zeros();
        for j in 0..VECTOR_LEN {
            for i in 0..VECTOR_LEN {
                transposed.data[Self::linear_index(j, i)] = self.data[Self::linear_index(i, j)];
            }
        }
        transposed
    }

    /// Assuming this matrix represents a homogeneous transform, returns the
    /// point the origin is mapped to. The w-component stored in the
    /// translation column is ignored and the result is always a point.
    #[inline]
    pub fn position(&self) -> Vector4 {
        Vector4::point(
            self.data[Self::linear_index(0, 3)],
            self.data[Self::linear_index(1, 3)],
            self.data[Self::linear_index(2, 3)],
        )
    }

    /// Applies the transform to the x-, y- and z-components of the given
    /// vector treated as a point (w = 1).
    #[inline]
    pub fn transform_point(&self, point: &Vector4) -> Vector4 {
        self * Vector4::point(point.x(), point.y(), point.z())
    }

    /// Applies the transform to the x-, y- and z-components of the given
    /// vector treated as a direction (w = 0). The translation is not applied.
    #[inline]
    pub fn transform_direction(&self, direction: &Vector4) -> Vector4 {
        self * Vector4::direction(direction.x(), direction.y(), direction.z())
    }

    fn checked_linear_index(i: usize, j: usize) -> Result<usize> {
        if i >= VECTOR_LEN || j >= VECTOR_LEN {
            Err(MathError::ElementIndexOutOfRange { row: i, column: j })
        } else {
            Ok(Self::linear_index(i, j))
        }
    }
}

impl Default for Matrix4 {
    /// The identity matrix.
    fn default() -> Self {
        Self::identity()
    }
}

impl From<[f32; MATRIX_LEN]> for Matrix4 {
    #[inline]
    fn from(data: [f32; MATRIX_LEN]) -> Self {
        Self::from_column_major(data)
    }
}

impl From<Matrix4> for [f32; MATRIX_LEN] {
    #[inline]
    fn from(matrix: Matrix4) -> Self {
        matrix.to_column_major()
    }
}

impl_binop!(Mul, mul, Matrix4, Matrix4 => Matrix4, |a, b| {
    let mut product = Matrix4::zeros();
    for j in 0..VECTOR_LEN {
        for i in 0..VECTOR_LEN {
            product.data[Matrix4::linear_index(i, j)] = (0..VECTOR_LEN)
                .map(|k| a.data[Matrix4::linear_index(i, k)] * b.data[Matrix4::linear_index(k, j)])
                .sum::<f32>();
        }
    }
    product
});

impl_binop!(Mul, mul, Matrix4, Vector4 => Vector4, |m, v| {
    let mut product = Vector4::zeros();
    for i in 0..VECTOR_LEN {
        product[i] = (0..VECTOR_LEN)
            .map(|j| m.data[Matrix4::linear_index(i, j)] * v[j])
            .sum::<f32>();
    }
    product
});

impl_binop_assign!(MulAssign, mul_assign, Mul, mul, Matrix4, Matrix4);

impl Index<usize> for Matrix4 {
    type Output = f32;

    #[inline]
    fn index(&self, idx: usize) -> &Self::Output {
        &self.data[idx]
    }
}

impl IndexMut<usize> for Matrix4 {
    #[inline]
    fn index_mut(&mut self, idx: usize) -> &mut Self::Output {
        &mut self.data[idx]
    }
}

impl_approx_eq!(Matrix4, |matrix| &matrix.data);

impl fmt::Display for Matrix4 {
    /// Writes one bracketed row per line, honoring the precision of the
    /// formatter.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..VECTOR_LEN {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "[")?;
            for j in 0..VECTOR_LEN {
                if j > 0 {
                    write!(f, ", ")?;
                }
                let value = self.element(i, j);
                match f.precision() {
                    Some(precision) => write!(f, "{value:.precision$}")?,
                    None => write!(f, "{value}")?,
                }
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::op_ref)]

    use super::*;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    const EPSILON: f32 = 1e-6;

    prop_compose! {
        fn matrix_strategy(max_element: f32)(
            data in prop::array::uniform16(-max_element..max_element),
        ) -> Matrix4 {
            Matrix4::from_column_major(data)
        }
    }

    prop_compose! {
        fn vector_strategy(max_coord: f32)(
            x in -max_coord..max_coord,
            y in -max_coord..max_coord,
            z in -max_coord..max_coord,
            w in prop_oneof![Just(0.0_f32), Just(1.0_f32)],
        ) -> Vector4 {
            Vector4::new(x, y, z, w)
        }
    }

    fn sequential_matrix() -> Matrix4 {
        let mut data = [0.0; MATRIX_LEN];
        for (idx, value) in data.iter_mut().enumerate() {
            *value = idx as f32 + 1.0;
        }
        Matrix4::from_column_major(data)
    }

    #[test]
    fn default_matrix_is_identity() {
        let identity = Matrix4::default();
        for i in 0..4 {
            for j in 0..4 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_eq!(identity.element(i, j), expected);
            }
        }
        assert_eq!(identity, Matrix4::identity());
    }

    #[test]
    fn linear_index_is_column_major() {
        assert_eq!(Matrix4::linear_index(0, 0), 0);
        assert_eq!(Matrix4::linear_index(3, 0), 3);
        assert_eq!(Matrix4::linear_index(0, 1), 4);
        assert_eq!(Matrix4::linear_index(2, 3), 14);
        assert_eq!(Matrix4::linear_index(3, 3), 15);
    }

    #[test]
    fn reading_back_column_major_buffer_reproduces_input() {
        let data: [f32; 16] = std::array::from_fn(|idx| idx as f32 * 0.5 - 3.0);
        let matrix = Matrix4::from(data);
        for (idx, value) in data.iter().enumerate() {
            assert_eq!(matrix[idx], *value);
        }
        assert_eq!(matrix.to_column_major(), data);
        assert_eq!(<[f32; 16]>::from(matrix), data);
    }

    #[test]
    fn creating_matrix_from_slice_uses_first_sixteen_values() {
        let values: Vec<f32> = (0..20).map(|v| v as f32).collect();
        let matrix = Matrix4::from_column_major_slice(&values).unwrap();
        assert_eq!(matrix.as_column_major()[..], values[..16]);
    }

    #[test]
    fn creating_matrix_from_short_slice_fails() {
        let values = [1.0; 15];
        assert_eq!(
            Matrix4::from_column_major_slice(&values),
            Err(MathError::BufferTooShort {
                required: 16,
                actual: 15
            })
        );
    }

    #[test]
    fn creating_matrix_from_axes_fills_full_columns() {
        let axis_1 = Vector4::new(1.0, 2.0, 3.0, 0.0);
        let axis_2 = Vector4::new(4.0, 5.0, 6.0, 0.0);
        let axis_3 = Vector4::new(7.0, 8.0, 9.0, 0.0);
        let translation = Vector4::point(5.0, 6.0, 7.0);

        let matrix = Matrix4::from_axes(axis_1, axis_2, axis_3, translation);

        assert_eq!(
            matrix.to_column_major(),
            [
                1.0, 2.0, 3.0, 0.0, 4.0, 5.0, 6.0, 0.0, 7.0, 8.0, 9.0, 0.0, 5.0, 6.0, 7.0, 1.0
            ]
        );
        assert_eq!(matrix.row(3).to_array(), [0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn position_of_axis_matrix_is_translation_point() {
        let matrix = Matrix4::from_axes(
            Vector4::unit_x(),
            Vector4::unit_y(),
            Vector4::unit_z(),
            Vector4::new(5.0, 6.0, 7.0, 1.0),
        );
        let position = matrix.position();
        assert_eq!(position.to_array(), [5.0, 6.0, 7.0, 1.0]);
    }

    #[test]
    fn position_ignores_stored_translation_w() {
        let matrix = Matrix4::from_axes(
            Vector4::unit_x(),
            Vector4::unit_y(),
            Vector4::unit_z(),
            Vector4::new(5.0, 6.0, 7.0, 3.0),
        );
        assert_eq!(matrix.position().to_array(), [5.0, 6.0, 7.0, 1.0]);
    }

    #[test]
    fn accessing_columns_and_rows_works() {
        let mut matrix = sequential_matrix();
        assert_eq!(matrix.column(0).to_array(), [1.0, 2.0, 3.0, 4.0]);
        assert_eq!(matrix.column(3).to_array(), [13.0, 14.0, 15.0, 16.0]);
        assert_eq!(matrix.row(0).to_array(), [1.0, 5.0, 9.0, 13.0]);
        assert_eq!(matrix.row(2).to_array(), [3.0, 7.0, 11.0, 15.0]);

        matrix.set_column(1, Vector4::zeros());
        assert_eq!(matrix.column(1).to_array(), [0.0; 4]);
        assert_eq!(matrix.element(1, 1), 0.0);
    }

    #[test]
    fn accessing_elements_works() {
        let mut matrix = sequential_matrix();
        assert_eq!(matrix.element(0, 0), 1.0);
        assert_eq!(matrix.element(1, 0), 2.0);
        assert_eq!(matrix.element(0, 1), 5.0);
        assert_eq!(matrix.try_element(3, 3), Ok(16.0));

        *matrix.element_mut(2, 1) = -1.0;
        assert_eq!(matrix[Matrix4::linear_index(2, 1)], -1.0);
    }

    #[test]
    fn accessing_elements_outside_matrix_fails() {
        let matrix = Matrix4::identity();
        assert_eq!(
            matrix.try_element(4, 0),
            Err(MathError::ElementIndexOutOfRange { row: 4, column: 0 })
        );
        assert!(matrix.try_element(0, 4).is_err());
    }

    #[test]
    #[should_panic]
    fn accessing_element_outside_matrix_panics() {
        let matrix = Matrix4::identity();
        let _ = matrix.element(1, 4);
    }

    #[test]
    fn transposing_swaps_rows_and_columns() {
        let matrix = sequential_matrix();
        let transposed = matrix.transposed();
        for i in 0..4 {
            for j in 0..4 {
                assert_eq!(transposed.element(i, j), matrix.element(j, i));
            }
        }
        assert_eq!(transposed.transposed(), matrix);
    }

    #[test]
    fn multiplying_identities_gives_identity() {
        assert_eq!(
            Matrix4::identity() * Matrix4::identity(),
            Matrix4::identity()
        );
    }

    #[test]
    fn multiplying_by_identity_leaves_matrix_unchanged() {
        let matrix = sequential_matrix();
        assert_eq!(&matrix * &Matrix4::identity(), matrix);
        assert_eq!(&Matrix4::identity() * &matrix, matrix);
    }

    #[test]
    fn matrix_product_matches_row_times_column() {
        let a = sequential_matrix();
        let b = sequential_matrix().transposed();
        let product = &a * &b;
        for i in 0..4 {
            for j in 0..4 {
                let expected = a
                    .row(i)
                    .to_array()
                    .iter()
                    .zip(b.column(j).to_array())
                    .map(|(x, y)| x * y)
                    .sum::<f32>();
                assert_abs_diff_eq!(product.element(i, j), expected, epsilon = EPSILON);
            }
        }
        // Row 0 of `a` is (1, 5, 9, 13), column 0 of `b` is the same.
        assert_eq!(product.element(0, 0), 276.0);
    }

    #[test]
    fn matrix_product_is_not_commutative() {
        let translation = Matrix4::from_translation(1.0, 0.0, 0.0);
        let scaling = Matrix4::from_scaling(2.0, 2.0, 2.0);

        let translate_after_scale = &translation * &scaling;
        let scale_after_translate = &scaling * &translation;

        assert_ne!(translate_after_scale, scale_after_translate);
        assert_eq!(
            translate_after_scale.position().to_array(),
            [1.0, 0.0, 0.0, 1.0]
        );
        assert_eq!(
            scale_after_translate.position().to_array(),
            [2.0, 0.0, 0.0, 1.0]
        );
    }

    #[test]
    fn multiplying_compound_assigns_right_operand_first() {
        let translation = Matrix4::from_translation(0.0, 3.0, 0.0);
        let scaling = Matrix4::from_scaling(1.0, 2.0, 1.0);
        let mut matrix = translation;
        matrix *= scaling;
        assert_eq!(matrix, translation * scaling);
    }

    #[test]
    fn translation_moves_points_but_not_directions() {
        let matrix = Matrix4::from_translation(1.0, 2.0, 3.0);
        let point = Vector4::point(1.0, 1.0, 1.0);
        let direction = Vector4::direction(1.0, 1.0, 1.0);

        assert_eq!((&matrix * &point).to_array(), [2.0, 3.0, 4.0, 1.0]);
        assert_eq!((&matrix * &direction).to_array(), [1.0, 1.0, 1.0, 0.0]);
        assert_eq!(matrix.transform_point(&direction).to_array(), [2.0, 3.0, 4.0, 1.0]);
        assert_eq!(matrix.transform_direction(&point).to_array(), [1.0, 1.0, 1.0, 0.0]);
    }

    #[test]
    fn axis_matrix_maps_unit_axes_to_given_axes() {
        let axis_1 = Vector4::direction(0.0, 1.0, 0.0);
        let axis_2 = Vector4::direction(-1.0, 0.0, 0.0);
        let axis_3 = Vector4::direction(0.0, 0.0, 2.0);
        let matrix = Matrix4::from_axes(axis_1, axis_2, axis_3, Vector4::point(5.0, 6.0, 7.0));

        assert_eq!((matrix * Vector4::unit_x()).to_array(), axis_1.to_array());
        assert_eq!((matrix * Vector4::unit_y()).to_array(), axis_2.to_array());
        assert_eq!((matrix * Vector4::unit_z()).to_array(), axis_3.to_array());
        assert_eq!((matrix * Vector4::origin()).to_array(), [5.0, 6.0, 7.0, 1.0]);
    }

    #[test]
    fn matrix_vector_product_uses_all_four_components() {
        let matrix = sequential_matrix();
        let v = Vector4::new(1.0, 0.0, 0.0, 2.0);
        // Column 0 plus twice column 3.
        assert_eq!((matrix * v).to_array(), [27.0, 30.0, 33.0, 36.0]);
    }

    #[test]
    fn editing_through_column_major_view_updates_matrix() {
        let mut matrix = Matrix4::identity();
        matrix.as_column_major_mut()[12] = 4.0;
        matrix[13] = 5.0;
        assert_eq!(matrix.position().to_array(), [4.0, 5.0, 0.0, 1.0]);
    }

    #[test]
    fn displaying_matrix_writes_rows() {
        let matrix = Matrix4::from_translation(1.0, 2.0, 3.0);
        assert_eq!(
            format!("{matrix:.1}"),
            "[1.0, 0.0, 0.0, 1.0]\n\
             [0.0, 1.0, 0.0, 2.0]\n\
             [0.0, 0.0, 1.0, 3.0]\n\
             [0.0, 0.0, 0.0, 1.0]"
        );
    }

    proptest! {
        #[test]
        fn identity_leaves_vectors_unchanged(v in vector_strategy(1e3)) {
            prop_assert_eq!((Matrix4::identity() * v).to_array(), v.to_array());
        }

        #[test]
        fn matrix_product_is_associative(
            a in matrix_strategy(2.0),
            b in matrix_strategy(2.0),
            c in matrix_strategy(2.0),
        ) {
            let left = (&a * &b) * &c;
            let right = &a * (&b * &c);
            prop_assert!(approx::abs_diff_eq!(left, right, epsilon = 1e-3));
        }

        #[test]
        fn composed_transform_applies_right_operand_first(
            a in matrix_strategy(2.0),
            b in matrix_strategy(2.0),
            v in vector_strategy(2.0),
        ) {
            let composed = (&a * &b) * &v;
            let sequential = &a * (&b * &v);
            prop_assert!(approx::abs_diff_eq!(composed, sequential, epsilon = 1e-3));
        }

        #[test]
        fn transposing_product_reverses_order(
            a in matrix_strategy(2.0),
            b in matrix_strategy(2.0),
        ) {
            let lhs = (&a * &b).transposed();
            let rhs = b.transposed() * a.transposed();
            prop_assert!(approx::abs_diff_eq!(lhs, rhs, epsilon = 1e-4));
        }
    }
}
