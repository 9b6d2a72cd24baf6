use std::fmt;

use crate::{Determinant, Number, One, Vector, Zero};

mod ops;

/// A 2x2 matrix.
pub type Matrix2x2<T> = Matrix<T, 2>;
/// A 3x3 matrix.
pub type Matrix3x3<T> = Matrix<T, 3>;
/// A 4x4 matrix.
pub type Matrix4x4<T> = Matrix<T, 4>;

/// A 2x2 matrix with [`f32`] elements.
pub type Matrix2x2f = Matrix2x2<f32>;
/// A 3x3 matrix with [`f32`] elements.
pub type Matrix3x3f = Matrix3x3<f32>;
/// A 4x4 matrix with [`f32`] elements.
pub type Matrix4x4f = Matrix4x4<f32>;
/// A 2x2 matrix with [`f64`] elements.
pub type Matrix2x2d = Matrix2x2<f64>;
/// A 3x3 matrix with [`f64`] elements.
pub type Matrix3x3d = Matrix3x3<f64>;
/// A 4x4 matrix with [`f64`] elements.
pub type Matrix4x4d = Matrix4x4<f64>;

/// A row-major square matrix with `N` rows and `N` columns, and element type `T`.
///
/// # Construction
///
/// There are several ways to create a [`Matrix`]:
///
/// - [`Matrix::from_rows`] and [`Matrix::from_columns`] allow filling a matrix with raw elements,
///   as well as creating them from an array of row or column vectors.
/// - [`Matrix::from_fn`] will create each element by invoking a closure with its row and column.
/// - [`Matrix::from_diagonal`] creates a matrix with a specified diagonal and zero outside of it.
/// - [`Matrix::ZERO`] is a matrix with every element set to 0, and [`Matrix::identity`] returns
///   the identity matrix.
///
/// # Element Access
///
/// [`Matrix`] implements the [`Index`] trait for tuples of `(usize, usize)`, and provides the
/// equivalent [`Matrix::at`] method. The first element of the tuple is the *row*, the second is the
/// *column*, matching common mathematical notation. Indices are 0-based.
///
/// ```
/// # use fmm_linalg::*;
/// let mat = Matrix::from_rows([
///     [0, 1],
///     [2, 3],
/// ]);
/// assert_eq!(mat[(0, 1)], 1);
/// assert_eq!(mat.at(1, 0), 2);
/// ```
///
/// Indexing out of bounds will result in a panic, just like it does for slices. [`Matrix::get`]
/// returns an [`Option`] instead and can be used for checked indexing:
///
/// ```
/// # use fmm_linalg::*;
/// let mat = Matrix::from_rows([
///     [0, 1],
///     [2, 3],
/// ]);
/// assert_eq!(mat.get(0, 1), Some(&1));
/// assert_eq!(mat.get(0, 2), None);
/// ```
///
/// Like [`Vector`]s, matrices are values and cannot be modified in place.
///
/// [`Index`]: std::ops::Index
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Matrix<T, const N: usize>([Vector<T, N>; N]);

unsafe impl<T: bytemuck::Zeroable, const N: usize> bytemuck::Zeroable for Matrix<T, N> {}
unsafe impl<T: bytemuck::Pod, const N: usize> bytemuck::Pod for Matrix<T, N> {}

impl<T: Zero + Copy, const N: usize> Matrix<T, N> {
    /// A matrix with every element set to 0.
    pub const ZERO: Self = Self([Vector::<T, N>::ZERO; N]);
}

impl<T, const N: usize> Matrix<T, N> {
    /// Creates a [`Matrix`] from an array of row vectors.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fmm_linalg::*;
    /// let rows = Matrix::from_rows([
    ///     [0, 1],
    ///     [2, 3],
    /// ]);
    /// let columns = Matrix::from_columns([
    ///     [0, 2],
    ///     [1, 3],
    /// ]);
    /// assert_eq!(rows, columns);
    /// ```
    pub fn from_rows<U: Into<Vector<T, N>>>(rows: [U; N]) -> Self {
        Self(rows.map(Into::into))
    }

    /// Creates a [`Matrix`] from an array of column vectors.
    pub fn from_columns<U: Into<Vector<T, N>>>(columns: [U; N]) -> Self {
        Self::from_rows(columns).transpose()
    }

    /// Creates a [`Matrix`] by invoking a closure with the position (row and column) of each element.
    ///
    /// Elements are created row by row.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fmm_linalg::*;
    /// let mat = Matrix::from_fn(|row, col| row * 10 + col);
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [ 0,  1],
    ///     [10, 11],
    /// ]));
    /// ```
    pub fn from_fn<F>(mut cb: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        Self(std::array::from_fn(|row| Vector::from_fn(|col| cb(row, col))))
    }

    /// Creates a square matrix from its diagonal.
    ///
    /// Elements outside the diagonal will be initialized with zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fmm_linalg::*;
    /// let diag = Matrix::from_diagonal([1, 2, 3]);
    /// assert_eq!(diag, Matrix::from_rows([
    ///     [1, 0, 0],
    ///     [0, 2, 0],
    ///     [0, 0, 3],
    /// ]));
    /// ```
    pub fn from_diagonal<D: Into<Vector<T, N>>>(diag: D) -> Self
    where
        T: Zero + Copy,
    {
        let diag = diag.into();
        Self::from_fn(|row, col| if row == col { diag[row] } else { T::ZERO })
    }

    /// Returns the identity matrix.
    ///
    /// The matrix has the value 1 on its diagonal and 0 everywhere else. Multiplying any vector with
    /// this matrix returns the vector unchanged.
    pub fn identity() -> Self
    where
        T: Zero + One + Copy,
    {
        Self::from_diagonal(Vector::splat(T::ONE))
    }

    /// Applies a closure to each element, returning a new matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fmm_linalg::*;
    /// let mat = Matrix::from_rows([
    ///     [0, 1],
    ///     [2, 3],
    /// ]);
    /// assert_eq!(mat.map(|i| i * 2), Matrix::from_rows([
    ///     [0, 2],
    ///     [4, 6],
    /// ]));
    /// ```
    pub fn map<F, U>(self, mut f: F) -> Matrix<U, N>
    where
        F: FnMut(T) -> U,
    {
        Matrix(self.0.map(|row| row.map(&mut f)))
    }

    /// Swaps the rows and columns of this matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fmm_linalg::*;
    /// let mat = Matrix::from_rows([
    ///     [0, 1],
    ///     [2, 3],
    /// ]).transpose();
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [0, 2],
    ///     [1, 3],
    /// ]));
    /// ```
    pub fn transpose(self) -> Self {
        let mut rows = self.0.map(|row| row.into_array().into_iter());
        let columns: [Vector<T, N>; N] = std::array::from_fn(|_| {
            Vector::from_fn(|row| match rows[row].next() {
                Some(elem) => elem,
                None => unreachable!("every row has exactly N elements"),
            })
        });
        Self(columns)
    }

    /// Returns a reference to the element at `(row, col)`, or [`None`] if out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.0
            .get(row)
            .and_then(|row| row.as_slice().get(col))
    }

    /// Returns the element at `(row, col)`.
    ///
    /// # Panics
    ///
    /// This method will panic if `row` or `col` is out of bounds. Use [`Matrix::get`] for checked
    /// access.
    #[inline]
    pub fn at(&self, row: usize, col: usize) -> T
    where
        T: Copy,
    {
        self[(row, col)]
    }

    /// Returns the rows of this matrix as an array of [`Vector`]s.
    #[inline]
    pub fn rows(self) -> [Vector<T, N>; N] {
        self.0
    }

    /// Converts this matrix into a nested array of rows.
    pub fn into_array(self) -> [[T; N]; N] {
        self.0.map(Vector::into_array)
    }

    /// Returns a [`Vector`] holding the diagonal elements of this matrix, in row order.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fmm_linalg::*;
    /// let mat = Matrix::from_rows([
    ///     [1, 2],
    ///     [3, 4],
    /// ]);
    /// assert_eq!(mat.diagonal(), [1, 4]);
    /// ```
    pub fn diagonal(&self) -> Vector<T, N>
    where
        T: Copy,
    {
        Vector::from_fn(|i| self[(i, i)])
    }

    /// Returns the *trace* of the matrix (the sum of all elements on the diagonal).
    ///
    /// # Examples
    ///
    /// ```
    /// # use fmm_linalg::*;
    /// let diag = Matrix::from_diagonal([1, 2, 3]);
    /// assert_eq!(diag.trace(), 1 + 2 + 3);
    ///
    /// assert_eq!(Matrix3x3f::identity().trace(), 3.0);
    /// ```
    pub fn trace(&self) -> T
    where
        T: Number,
    {
        self.diagonal().sum()
    }
}

impl<T: Number, const N: usize> Matrix<T, N>
where
    Self: Determinant<Scalar = T>,
{
    /// Inverts this matrix by dividing its adjugate by its determinant.
    ///
    /// Returns [`None`] if `self` is not invertible (ie. if its determinant is zero).
    ///
    /// # Examples
    ///
    /// ```
    /// # use fmm_linalg::*;
    /// let mat = Matrix::from_rows([
    ///     [2.0, 0.0],
    ///     [0.0, 4.0],
    /// ]);
    /// assert_eq!(mat.checked_invert(), Some(Matrix::from_diagonal([0.5, 0.25])));
    /// assert_eq!(Matrix3x3d::ZERO.checked_invert(), None);
    /// ```
    pub fn checked_invert(&self) -> Option<Self> {
        let det = self.determinant();
        if det == T::ZERO {
            return None;
        }

        Some(self.adjugate() / det)
    }

    /// Inverts this matrix.
    ///
    /// # Panics
    ///
    /// This method will panic if `self` is not invertible (ie. if its determinant is zero).
    ///
    /// # Examples
    ///
    /// ```
    /// # use fmm_linalg::*;
    /// assert_eq!(Matrix2x2::<i32>::identity().invert(), Matrix2x2::<i32>::identity());
    /// assert_eq!(Matrix4x4f::identity().invert(), Matrix4x4f::identity());
    /// ```
    pub fn invert(&self) -> Self {
        match self.checked_invert() {
            Some(inv) => inv,
            None => panic!("attempt to invert a non-invertible matrix"),
        }
    }
}

impl<T, const N: usize> Default for Matrix<T, N>
where
    T: Default,
{
    fn default() -> Self {
        Self::from_fn(|_, _| T::default())
    }
}

impl<T, const N: usize> From<[[T; N]; N]> for Matrix<T, N> {
    #[inline]
    fn from(rows: [[T; N]; N]) -> Self {
        Self::from_rows(rows)
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for Matrix<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct FormatRow<'a, T: fmt::Debug, const N: usize>(&'a Vector<T, N>);
        impl<'a, T: fmt::Debug, const N: usize> fmt::Debug for FormatRow<'a, T, N> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "[")?;
                for (col, elem) in self.0.as_slice().iter().enumerate() {
                    if col != 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{:?}", elem)?;
                }
                write!(f, "]")
            }
        }

        let mut list = f.debug_list();
        for row in &self.0 {
            list.entry(&FormatRow(row));
        }
        list.finish()
    }
}

impl<T: fmt::Display, const N: usize> fmt::Display for Matrix<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, row) in self.0.iter().enumerate() {
            if i != 0 {
                write!(f, ", ")?;
            }
            fmt::Display::fmt(row, f)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn from_rows_columns() {
        assert_eq!(
            Matrix::from_rows([[1, 2, 3], [4, 5, 6], [7, 8, 9]]),
            Matrix::from_columns([[1, 4, 7], [2, 5, 8], [3, 6, 9]]),
        );
        assert_eq!(
            Matrix::from([[1, 2], [3, 4]]).into_array(),
            [[1, 2], [3, 4]],
        );
    }

    #[test]
    fn access() {
        #[rustfmt::skip]
        let mat = Matrix::from_rows([
            [0, 1, 2],
            [3, 4, 5],
            [6, 7, 8],
        ]);
        assert_eq!(mat.at(1, 2), 5);
        assert_eq!(mat[(2, 0)], 6);
        assert_eq!(mat.get(2, 2), Some(&8));
        assert_eq!(mat.get(3, 0), None);
        assert_eq!(mat.get(0, 3), None);
        assert_eq!(mat.rows()[1], [3, 4, 5]);
    }

    #[test]
    #[should_panic]
    fn at_out_of_bounds() {
        let mat = Matrix2x2d::identity();
        let col = 2;
        mat.at(0, col);
    }

    #[test]
    fn diagonal() {
        let mat = Matrix::from_diagonal([1, 2]);

        #[rustfmt::skip]
        assert_eq!(mat, Matrix::from_rows([
            [1, 0],
            [0, 2],
        ]));

        assert_eq!(mat.diagonal(), [1, 2]);
        assert_eq!(mat.trace(), 3);
    }

    #[test]
    fn fmt() {
        let mat = Matrix::from_rows([[0, 1], [2, 3]]);

        // Natural writing order (row-wise) for debug output.
        assert_eq!(format!("{:?}", mat), "[[0, 1], [2, 3]]");

        // `#` modifier prints each row in its own line, but not each individual element.
        assert_eq!(
            format!("{:#?}", mat),
            "
[
    [0, 1],
    [2, 3],
]
"
            .trim()
        );

        assert_eq!(format!("{}", mat), "[(0, 1), (2, 3)]");
    }

    #[test]
    fn constants() {
        assert_eq!(format!("{:?}", Matrix2x2f::ZERO), "[[0.0, 0.0], [0.0, 0.0]]");
        assert_eq!(format!("{:?}", Matrix2x2f::identity()), "[[1.0, 0.0], [0.0, 1.0]]");
        assert_eq!(Matrix3x3::<i32>::default(), Matrix3x3::<i32>::ZERO);
    }

    #[test]
    fn invert() {
        #[rustfmt::skip]
        let mat = Matrix::from_rows([
            [1.0, 2.0, 3.0],
            [0.0, 1.0, -7.0],
            [9.0, 10.0, 11.0],
        ]);
        assert_abs_diff_eq!(mat * mat.invert(), Matrix3x3::identity(), epsilon = 1e-12);
        assert_abs_diff_eq!(mat.invert().invert(), mat, epsilon = 1e-12);

        let singular = Matrix::from_rows([[1.0, 2.0], [2.0, 4.0]]);
        assert_eq!(singular.checked_invert(), None);
    }

    #[test]
    #[should_panic(expected = "attempt to invert a non-invertible matrix")]
    fn invert_singular() {
        Matrix4x4d::ZERO.invert();
    }

    #[test]
    fn bytes() {
        let mat = Matrix::from_rows([[1.0f32, 2.0], [3.0, 4.0]]);
        let floats: &[f32] = bytemuck::cast_slice(std::slice::from_ref(&mat));
        assert_eq!(floats, &[1.0, 2.0, 3.0, 4.0]);
    }
}
