//! Products and matrix invariants.
//!
//! Each operation is available as a trait method and as a free function of the same name.

use std::ops::Neg;

use crate::{Matrix, Number, Vector};

/// Inner products: the dot product of vectors, and the Frobenius inner product of matrices.
pub trait Inner {
    type Output;

    /// Sums the element-wise products of `self` and `other`.
    fn inner(self, other: Self) -> Self::Output;
}

/// Cross products.
///
/// Implemented for 3-dimensional vectors (yielding a vector) and for 2-dimensional vectors
/// (yielding the signed scalar `a.x * b.y - a.y * b.x`, sometimes called the *perp dot product*).
pub trait Cross {
    type Output;

    fn cross(self, other: Self) -> Self::Output;
}

/// Outer products, turning two `N`-dimensional vectors into an `NxN` matrix.
pub trait Outer {
    type Output;

    /// Returns the matrix whose element at `(i, j)` is `self[i] * other[j]`.
    fn outer(self, other: Self) -> Self::Output;
}

/// Matrices with closed-form [determinant] and [adjugate] expansions.
///
/// Implemented for 2x2, 3x3 and 4x4 matrices. The terms of each expansion are always summed in the
/// same order, so results are reproducible to the bit.
///
/// [determinant]: https://en.wikipedia.org/wiki/Determinant
/// [adjugate]: https://en.wikipedia.org/wiki/Adjugate_matrix
pub trait Determinant {
    type Scalar;

    /// Returns the determinant of the matrix.
    fn determinant(&self) -> Self::Scalar;

    /// Returns the classical adjugate (the transpose of the cofactor matrix).
    ///
    /// Multiplying a matrix with its adjugate yields its determinant times the identity matrix.
    fn adjugate(&self) -> Self;
}

impl<T: Number, const N: usize> Inner for Vector<T, N> {
    type Output = T;

    #[inline]
    fn inner(self, other: Self) -> T {
        self.dot(other)
    }
}

impl<T: Number, const N: usize> Inner for Matrix<T, N> {
    type Output = T;

    fn inner(self, other: Self) -> T {
        self.rows()
            .into_iter()
            .zip(other.rows())
            .flat_map(|(a, b)| a.zip(b).into_array())
            .map(|(a, b)| a * b)
            .reduce(|acc, prod| acc + prod)
            .unwrap_or(T::ZERO)
    }
}

impl<T: Number + Neg<Output = T>> Cross for Vector<T, 2> {
    type Output = T;

    fn cross(self, other: Self) -> T {
        let (a, b) = (self, other);
        a.x * b.y - a.y * b.x
    }
}

impl<T: Number + Neg<Output = T>> Cross for Vector<T, 3> {
    type Output = Self;

    fn cross(self, other: Self) -> Self {
        let (a, b) = (self, other);
        Vector::from([
            a.y * b.z - a.z * b.y,
            a.z * b.x - a.x * b.z,
            a.x * b.y - a.y * b.x,
        ])
    }
}

impl<T: Number, const N: usize> Outer for Vector<T, N> {
    type Output = Matrix<T, N>;

    fn outer(self, other: Self) -> Matrix<T, N> {
        Matrix::from_fn(|i, j| self[i] * other[j])
    }
}

impl<T: Number + Neg<Output = T>> Determinant for Matrix<T, 2> {
    type Scalar = T;

    fn determinant(&self) -> T {
        let [[a00, a01], [a10, a11]] = self.into_array();
        a00 * a11 - a01 * a10
    }

    fn adjugate(&self) -> Self {
        let [[a00, a01], [a10, a11]] = self.into_array();
        Matrix::from_rows([[a11, -a01], [-a10, a00]])
    }
}

impl<T: Number + Neg<Output = T>> Determinant for Matrix<T, 3> {
    type Scalar = T;

    #[rustfmt::skip]
    fn determinant(&self) -> T {
        let [[a00, a01, a02], [a10, a11, a12], [a20, a21, a22]] = self.into_array();
        a01 * a12 * a20 - a02 * a11 * a20 + a02 * a10 * a21
            - a00 * a12 * a21 - a01 * a10 * a22 + a00 * a11 * a22
    }

    #[rustfmt::skip]
    fn adjugate(&self) -> Self {
        let [[a00, a01, a02], [a10, a11, a12], [a20, a21, a22]] = self.into_array();
        Matrix::from_rows([
            [a11 * a22 - a12 * a21, a02 * a21 - a01 * a22, a01 * a12 - a02 * a11],
            [a12 * a20 - a10 * a22, a00 * a22 - a02 * a20, a02 * a10 - a00 * a12],
            [a10 * a21 - a11 * a20, a01 * a20 - a00 * a21, a00 * a11 - a01 * a10],
        ])
    }
}

impl<T: Number + Neg<Output = T>> Determinant for Matrix<T, 4> {
    type Scalar = T;

    #[rustfmt::skip]
    fn determinant(&self) -> T {
        let [
            [a00, a01, a02, a03],
            [a10, a11, a12, a13],
            [a20, a21, a22, a23],
            [a30, a31, a32, a33],
        ] = self.into_array();
        a03*a12*a21*a30 - a02*a13*a21*a30 - a03*a11*a22*a30 + a01*a13*a22*a30
        + a02*a11*a23*a30 - a01*a12*a23*a30 - a03*a12*a20*a31 + a02*a13*a20*a31
        + a03*a10*a22*a31 - a00*a13*a22*a31 - a02*a10*a23*a31 + a00*a12*a23*a31
        + a03*a11*a20*a32 - a01*a13*a20*a32 - a03*a10*a21*a32 + a00*a13*a21*a32
        + a01*a10*a23*a32 - a00*a11*a23*a32 - a02*a11*a20*a33 + a01*a12*a20*a33
        + a02*a10*a21*a33 - a00*a12*a21*a33 - a01*a10*a22*a33 + a00*a11*a22*a33
    }

    #[rustfmt::skip]
    fn adjugate(&self) -> Self {
        let [
            [a00, a01, a02, a03],
            [a10, a11, a12, a13],
            [a20, a21, a22, a23],
            [a30, a31, a32, a33],
        ] = self.into_array();
        Matrix::from_rows([
            [
                a12*a23*a31 - a13*a22*a31 + a13*a21*a32 - a11*a23*a32 - a12*a21*a33 + a11*a22*a33,
                a03*a22*a31 - a02*a23*a31 - a03*a21*a32 + a01*a23*a32 + a02*a21*a33 - a01*a22*a33,
                a02*a13*a31 - a03*a12*a31 + a03*a11*a32 - a01*a13*a32 - a02*a11*a33 + a01*a12*a33,
                a03*a12*a21 - a02*a13*a21 - a03*a11*a22 + a01*a13*a22 + a02*a11*a23 - a01*a12*a23,
            ],
            [
                a13*a22*a30 - a12*a23*a30 - a13*a20*a32 + a10*a23*a32 + a12*a20*a33 - a10*a22*a33,
                a02*a23*a30 - a03*a22*a30 + a03*a20*a32 - a00*a23*a32 - a02*a20*a33 + a00*a22*a33,
                a03*a12*a30 - a02*a13*a30 - a03*a10*a32 + a00*a13*a32 + a02*a10*a33 - a00*a12*a33,
                a02*a13*a20 - a03*a12*a20 + a03*a10*a22 - a00*a13*a22 - a02*a10*a23 + a00*a12*a23,
            ],
            [
                a11*a23*a30 - a13*a21*a30 + a13*a20*a31 - a10*a23*a31 - a11*a20*a33 + a10*a21*a33,
                a03*a21*a30 - a01*a23*a30 - a03*a20*a31 + a00*a23*a31 + a01*a20*a33 - a00*a21*a33,
                a01*a13*a30 - a03*a11*a30 + a03*a10*a31 - a00*a13*a31 - a01*a10*a33 + a00*a11*a33,
                a03*a11*a20 - a01*a13*a20 - a03*a10*a21 + a00*a13*a21 + a01*a10*a23 - a00*a11*a23,
            ],
            [
                a12*a21*a30 - a11*a22*a30 - a12*a20*a31 + a10*a22*a31 + a11*a20*a32 - a10*a21*a32,
                a01*a22*a30 - a02*a21*a30 + a02*a20*a31 - a00*a22*a31 - a01*a20*a32 + a00*a21*a32,
                a02*a11*a30 - a01*a12*a30 - a02*a10*a31 + a00*a12*a31 + a01*a10*a32 - a00*a11*a32,
                a01*a12*a20 - a02*a11*a20 + a02*a10*a21 - a00*a12*a21 - a01*a10*a22 + a00*a11*a22,
            ],
        ])
    }
}

/// Computes the inner product of two vectors or two matrices.
///
/// ```
/// # use fmm_linalg::*;
/// assert_eq!(inner(vec2(1.0, 2.0), vec2(1.0, 2.0)), 5.0);
/// let m = Matrix::from_rows([[1, 2], [3, 4]]);
/// assert_eq!(inner(m, Matrix::identity()), 5);
/// ```
#[inline]
pub fn inner<A: Inner>(a: A, b: A) -> A::Output {
    a.inner(b)
}

/// Computes the cross product of two 2- or 3-dimensional vectors.
///
/// ```
/// # use fmm_linalg::*;
/// assert_eq!(cross(vec3(1, 0, 0), vec3(0, 1, 0)), vec3(0, 0, 1));
/// assert_eq!(cross(vec2(1, 0), vec2(0, 1)), 1);
/// ```
///
/// There is no cross product of 4-dimensional vectors:
///
/// ```compile_fail
/// # use fmm_linalg::*;
/// cross(vec4(1, 0, 0, 0), vec4(0, 1, 0, 0));
/// ```
#[inline]
pub fn cross<V: Cross>(a: V, b: V) -> V::Output {
    a.cross(b)
}

/// Computes the outer product of two vectors.
#[inline]
pub fn outer<V: Outer>(a: V, b: V) -> V::Output {
    a.outer(b)
}

/// Returns the adjugate of a matrix.
#[inline]
pub fn adj<M: Determinant>(m: M) -> M {
    m.adjugate()
}

/// Returns the determinant of a matrix.
///
/// ```
/// # use fmm_linalg::*;
/// assert_eq!(det(Matrix::from_rows([[1, 2], [0, -3]])), -3);
/// ```
///
/// Unsigned element types are rejected:
///
/// ```compile_fail
/// # use fmm_linalg::*;
/// det(Matrix::from_rows([[1u32, 2], [0, 3]]));
/// ```
#[inline]
pub fn det<M: Determinant>(m: M) -> M::Scalar {
    m.determinant()
}

/// Returns the sum of the diagonal elements of a matrix.
#[inline]
pub fn trace<T: Number, const N: usize>(m: Matrix<T, N>) -> T {
    m.trace()
}

/// Returns the diagonal elements of a matrix, in row order.
#[inline]
pub fn diag<T: Copy, const N: usize>(m: Matrix<T, N>) -> Vector<T, N> {
    m.diagonal()
}
