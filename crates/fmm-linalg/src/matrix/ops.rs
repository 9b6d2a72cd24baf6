use std::ops::{Add, Div, Index, Mul, Sub};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use super::Matrix;
use crate::{traits::Number, Vector};

impl<T, const N: usize> Index<(usize, usize)> for Matrix<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.0[row][col]
    }
}

// More general `PartialEq` impl than what the derive generates.
impl<T, U, const N: usize> PartialEq<Matrix<U, N>> for Matrix<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Matrix<U, N>) -> bool {
        self.0.iter().zip(&other.0).all(|(a, b)| a == b)
    }
}

impl<T, const N: usize> Eq for Matrix<T, N> where T: Eq {}

// Approximate comparisons hold when they hold for every row.

impl<T: AbsDiffEq, const N: usize> AbsDiffEq for Matrix<T, N>
where
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> T::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T::Epsilon) -> bool {
        self.0
            .iter()
            .zip(&other.0)
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<T: RelativeEq, const N: usize> RelativeEq for Matrix<T, N>
where
    T::Epsilon: Copy,
{
    fn default_max_relative() -> T::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T::Epsilon, max_relative: T::Epsilon) -> bool {
        self.0
            .iter()
            .zip(&other.0)
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

impl<T: UlpsEq, const N: usize> UlpsEq for Matrix<T, N>
where
    T::Epsilon: Copy,
{
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: T::Epsilon, max_ulps: u32) -> bool {
        self.0
            .iter()
            .zip(&other.0)
            .all(|(a, b)| a.ulps_eq(b, epsilon, max_ulps))
    }
}

/// Element-wise addition.
impl<T, const N: usize> Add for Matrix<T, N>
where
    T: Add<Output = T>,
{
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        let rows = Vector::from(self.0).zip(Vector::from(rhs.0));
        Matrix(rows.map(|(l, r)| l + r).into_array())
    }
}

/// Element-wise subtraction.
impl<T, const N: usize> Sub for Matrix<T, N>
where
    T: Sub<Output = T>,
{
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        let rows = Vector::from(self.0).zip(Vector::from(rhs.0));
        Matrix(rows.map(|(l, r)| l - r).into_array())
    }
}

/// Matrix * Scalar.
///
/// The reverse order (`scalar * matrix`) is implemented for all primitive numeric types.
impl<T, const N: usize> Mul<T> for Matrix<T, N>
where
    T: Mul<Output = T> + Copy,
{
    type Output = Self;

    fn mul(self, rhs: T) -> Self::Output {
        self.map(|elem| elem * rhs)
    }
}

/// Matrix / Scalar.
impl<T, const N: usize> Div<T> for Matrix<T, N>
where
    T: Div<Output = T> + Copy,
{
    type Output = Self;

    fn div(self, rhs: T) -> Self::Output {
        self.map(|elem| elem / rhs)
    }
}

// Scalar * Vector and Scalar * Matrix. Coherence rules require one impl per scalar type.
macro_rules! scalar_lhs_mul {
    ($($t:ty),+) => {
        $(
            impl<const N: usize> Mul<Vector<$t, N>> for $t {
                type Output = Vector<$t, N>;

                fn mul(self, rhs: Vector<$t, N>) -> Self::Output {
                    rhs.map(|elem| self * elem)
                }
            }

            impl<const N: usize> Mul<Matrix<$t, N>> for $t {
                type Output = Matrix<$t, N>;

                fn mul(self, rhs: Matrix<$t, N>) -> Self::Output {
                    rhs.map(|elem| self * elem)
                }
            }
        )+
    };
}
scalar_lhs_mul!(f32, f64, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

// The products below are spelled out per dimension. Each sum starts with the `k = 0` term, except
// for the 4x4 column vector product, which adds the `w` column first.

/// Matrix2x2 * Column Vector2.
impl<T: Number> Mul<Vector<T, 2>> for Matrix<T, 2> {
    type Output = Vector<T, 2>;

    fn mul(self, rhs: Vector<T, 2>) -> Self::Output {
        let [x, y] = rhs.into_array();
        let a = self;
        Vector::from_fn(|i| a[(i, 0)] * x + a[(i, 1)] * y)
    }
}

/// Matrix3x3 * Column Vector3.
impl<T: Number> Mul<Vector<T, 3>> for Matrix<T, 3> {
    type Output = Vector<T, 3>;

    fn mul(self, rhs: Vector<T, 3>) -> Self::Output {
        let [x, y, z] = rhs.into_array();
        let a = self;
        Vector::from_fn(|i| a[(i, 0)] * x + a[(i, 1)] * y + a[(i, 2)] * z)
    }
}

/// Matrix4x4 * Column Vector4.
impl<T: Number> Mul<Vector<T, 4>> for Matrix<T, 4> {
    type Output = Vector<T, 4>;

    fn mul(self, rhs: Vector<T, 4>) -> Self::Output {
        let [x, y, z, w] = rhs.into_array();
        let a = self;
        Vector::from_fn(|i| a[(i, 3)] * w + a[(i, 0)] * x + a[(i, 1)] * y + a[(i, 2)] * z)
    }
}

/// Row Vector2 * Matrix2x2.
impl<T: Number> Mul<Matrix<T, 2>> for Vector<T, 2> {
    type Output = Vector<T, 2>;

    fn mul(self, rhs: Matrix<T, 2>) -> Self::Output {
        let [x, y] = self.into_array();
        let b = rhs;
        Vector::from_fn(|j| x * b[(0, j)] + y * b[(1, j)])
    }
}

/// Row Vector3 * Matrix3x3.
impl<T: Number> Mul<Matrix<T, 3>> for Vector<T, 3> {
    type Output = Vector<T, 3>;

    fn mul(self, rhs: Matrix<T, 3>) -> Self::Output {
        let [x, y, z] = self.into_array();
        let b = rhs;
        Vector::from_fn(|j| x * b[(0, j)] + y * b[(1, j)] + z * b[(2, j)])
    }
}

/// Row Vector4 * Matrix4x4.
impl<T: Number> Mul<Matrix<T, 4>> for Vector<T, 4> {
    type Output = Vector<T, 4>;

    fn mul(self, rhs: Matrix<T, 4>) -> Self::Output {
        let [x, y, z, w] = self.into_array();
        let b = rhs;
        Vector::from_fn(|j| x * b[(0, j)] + y * b[(1, j)] + z * b[(2, j)] + w * b[(3, j)])
    }
}

/// Matrix2x2 * Matrix2x2.
impl<T: Number> Mul for Matrix<T, 2> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        let (a, b) = (self, rhs);
        Matrix::from_fn(|i, j| a[(i, 0)] * b[(0, j)] + a[(i, 1)] * b[(1, j)])
    }
}

/// Matrix3x3 * Matrix3x3.
impl<T: Number> Mul for Matrix<T, 3> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        let (a, b) = (self, rhs);
        Matrix::from_fn(|i, j| {
            a[(i, 0)] * b[(0, j)] + a[(i, 1)] * b[(1, j)] + a[(i, 2)] * b[(2, j)]
        })
    }
}

/// Matrix4x4 * Matrix4x4.
impl<T: Number> Mul for Matrix<T, 4> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        let (a, b) = (self, rhs);
        Matrix::from_fn(|i, j| {
            a[(i, 0)] * b[(0, j)]
                + a[(i, 1)] * b[(1, j)]
                + a[(i, 2)] * b[(2, j)]
                + a[(i, 3)] * b[(3, j)]
        })
    }
}
