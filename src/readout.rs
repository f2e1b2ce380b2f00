//! Evaluation of every vector and matrix operation for a pair of vectors and a
//! pair of matrices, as shown by an interactive test panel.

use crate::{matrix::Matrix4, vector::Vector4};
use std::fmt;

/// The vectors and matrices a readout is computed from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReadoutInputs {
    pub vector_a: Vector4,
    pub vector_b: Vector4,
    pub matrix_a: Matrix4,
    pub matrix_b: Matrix4,
}

/// The results of applying each operation to the [`ReadoutInputs`].
#[derive(Clone, Debug)]
pub struct Readout {
    pub inputs: ReadoutInputs,
    pub length_a: f32,
    pub length_b: f32,
    pub distance_a_to_b: f32,
    pub normalized_a: Vector4,
    pub normalized_b: Vector4,
    pub a_dot_b: f32,
    pub b_dot_a: f32,
    pub a_cross_b: Vector4,
    pub b_cross_a: Vector4,
    pub a_equals_b: bool,
    pub a_differs_from_b: bool,
    pub a_times_scalar: Vector4,
    pub a_divided_by_scalar: Vector4,
    pub a_plus_b: Vector4,
    pub a_minus_b: Vector4,
    pub matrix_a_times_a: Vector4,
    pub matrix_b_times_b: Vector4,
    pub matrix_a_times_matrix_b: Matrix4,
    pub matrix_b_times_matrix_a: Matrix4,
}

impl ReadoutInputs {
    /// The scalar vector A is multiplied with.
    pub const MULTIPLIER: f32 = 2.0;

    /// The scalar vector A is divided by.
    pub const DIVISOR: f32 = 3.0;

    pub fn new(vector_a: Vector4, vector_b: Vector4, matrix_a: Matrix4, matrix_b: Matrix4) -> Self {
        Self {
            vector_a,
            vector_b,
            matrix_a,
            matrix_b,
        }
    }
}

impl Default for ReadoutInputs {
    /// The x- and y-axis directions and two identity matrices.
    fn default() -> Self {
        Self::new(
            Vector4::unit_x(),
            Vector4::unit_y(),
            Matrix4::identity(),
            Matrix4::identity(),
        )
    }
}

impl Readout {
    pub fn evaluate(inputs: &ReadoutInputs) -> Self {
        let a = &inputs.vector_a;
        let b = &inputs.vector_b;
        let ma = &inputs.matrix_a;
        let mb = &inputs.matrix_b;

        Self {
            inputs: *inputs,
            length_a: a.norm(),
            length_b: b.norm(),
            distance_a_to_b: a.distance_to(b),
            normalized_a: a.normalized(),
            normalized_b: b.normalized(),
            a_dot_b: a.dot(b),
            b_dot_a: b.dot(a),
            a_cross_b: a.cross(b),
            b_cross_a: b.cross(a),
            a_equals_b: a == b,
            a_differs_from_b: a != b,
            a_times_scalar: a * ReadoutInputs::MULTIPLIER,
            a_divided_by_scalar: a / ReadoutInputs::DIVISOR,
            a_plus_b: a + b,
            a_minus_b: a - b,
            matrix_a_times_a: ma * a,
            matrix_b_times_b: mb * b,
            matrix_a_times_matrix_b: ma * mb,
            matrix_b_times_matrix_a: mb * ma,
        }
    }

    /// Labels of the vector results that contain NaN components, such as the
    /// normalization of a zero-length vector.
    pub fn invalid_entries(&self) -> Vec<&'static str> {
        self.labeled_vectors()
            .into_iter()
            .filter(|(_, vector)| !vector.is_valid())
            .map(|(label, _)| label)
            .collect()
    }

    fn labeled_vectors(&self) -> [(&'static str, &Vector4); 10] {
        [
            ("vectorA.normalized()", &self.normalized_a),
            ("vectorB.normalized()", &self.normalized_b),
            ("vectorA.cross(vectorB)", &self.a_cross_b),
            ("vectorB.cross(vectorA)", &self.b_cross_a),
            ("vectorA * 2", &self.a_times_scalar),
            ("vectorA / 3", &self.a_divided_by_scalar),
            ("vectorA + vectorB", &self.a_plus_b),
            ("vectorA - vectorB", &self.a_minus_b),
            ("matrixA * vectorA", &self.matrix_a_times_a),
            ("matrixB * vectorB", &self.matrix_b_times_b),
        ]
    }
}

fn write_section(f: &mut fmt::Formatter<'_>, title: &str) -> fmt::Result {
    writeln!(f, "{title}:")?;
    writeln!(f, "{}", "-".repeat(title.len() + 1))
}

impl fmt::Display for Readout {
    /// Writes a plain-text report with one section per group of operations.
    /// The precision of the formatter applies to every number (default 3).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = f.precision().unwrap_or(3);
        let inputs = &self.inputs;

        write_section(f, "Inputs")?;
        writeln!(f, "vectorA = {:.p$}", inputs.vector_a)?;
        writeln!(f, "vectorB = {:.p$}", inputs.vector_b)?;
        writeln!(f, "matrixA =\n{:.p$}", inputs.matrix_a)?;
        writeln!(f, "matrixB =\n{:.p$}", inputs.matrix_b)?;
        writeln!(f)?;

        write_section(f, "Length")?;
        writeln!(f, "vectorA.length() = {:.p$}", self.length_a)?;
        writeln!(f, "vectorB.length() = {:.p$}", self.length_b)?;
        writeln!(f)?;

        write_section(f, "Distance")?;
        writeln!(f, "vectorA.distanceTo(vectorB) = {:.p$}", self.distance_a_to_b)?;
        writeln!(f)?;

        write_section(f, "Normalization")?;
        writeln!(f, "vectorA.normalized() = {:.p$}", self.normalized_a)?;
        writeln!(f, "vectorB.normalized() = {:.p$}", self.normalized_b)?;
        writeln!(f)?;

        write_section(f, "Dot Product")?;
        writeln!(f, "vectorA.dot(vectorB) = {:.p$}", self.a_dot_b)?;
        writeln!(f, "vectorB.dot(vectorA) = {:.p$}", self.b_dot_a)?;
        writeln!(f)?;

        write_section(f, "Cross Product")?;
        writeln!(f, "vectorA.cross(vectorB) = {:.p$}", self.a_cross_b)?;
        writeln!(f, "vectorB.cross(vectorA) = {:.p$}", self.b_cross_a)?;
        writeln!(f)?;

        write_section(f, "Comparison")?;
        writeln!(f, "vectorA == vectorB: {}", self.a_equals_b)?;
        writeln!(f, "vectorA != vectorB: {}", self.a_differs_from_b)?;
        writeln!(f)?;

        write_section(f, "Scalar Arithmetic")?;
        writeln!(f, "vectorA * 2 = {:.p$}", self.a_times_scalar)?;
        writeln!(f, "vectorA / 3 = {:.p$}", self.a_divided_by_scalar)?;
        writeln!(f)?;

        write_section(f, "Vector Arithmetic")?;
        writeln!(f, "vectorA + vectorB = {:.p$}", self.a_plus_b)?;
        writeln!(f, "vectorA - vectorB = {:.p$}", self.a_minus_b)?;
        writeln!(f)?;

        write_section(f, "Matrix Operators")?;
        writeln!(f, "matrixA * vectorA = {:.p$}", self.matrix_a_times_a)?;
        writeln!(f, "matrixB * vectorB = {:.p$}", self.matrix_b_times_b)?;
        writeln!(f, "matrixA * matrixB =\n{:.p$}", self.matrix_a_times_matrix_b)?;
        write!(f, "matrixB * matrixA =\n{:.p$}", self.matrix_b_times_matrix_a)
    }
}
