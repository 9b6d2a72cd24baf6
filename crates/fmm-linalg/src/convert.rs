//! Conversions between 3D points and their homogeneous 4D representation.

use std::ops::Div;

use crate::{One, Vector, Vector3, Vector4};

impl<T: One> Vector<T, 3> {
    /// Converts a 3D point to homogeneous coordinates by appending `w = 1`.
    ///
    /// ```
    /// # use fmm_linalg::*;
    /// assert_eq!(vec3(1.0, 2.0, 3.0).homogenize(), vec4(1.0, 2.0, 3.0, 1.0));
    /// ```
    #[inline]
    pub fn homogenize(self) -> Vector4<T> {
        self.extend(T::ONE)
    }
}

impl<T: Div<Output = T> + Copy> Vector<T, 4> {
    /// Converts homogeneous coordinates back to a 3D point by dividing `x`, `y` and `z` by `w`.
    ///
    /// A `w` of zero follows the division semantics of `T`: floating-point types produce infinite
    /// or NaN elements, integer types panic.
    ///
    /// ```
    /// # use fmm_linalg::*;
    /// assert_eq!(vec4(2.0, 4.0, 6.0, 2.0).dehomogenize(), vec3(1.0, 2.0, 3.0));
    /// ```
    #[inline]
    pub fn dehomogenize(self) -> Vector3<T> {
        let w = self.w;
        self.truncate() / w
    }
}

/// Converts a [`Vector3`] to a [`Vector4`] with `w = 1`.
///
/// See [`Vector::homogenize`].
#[inline]
pub fn convert<T: One>(v: Vector3<T>) -> Vector4<T> {
    v.homogenize()
}

/// Converts a homogeneous [`Vector4`] to a [`Vector3`] by dividing by `w`.
///
/// See [`Vector::dehomogenize`].
#[inline]
pub fn hom_convert<T: Div<Output = T> + Copy>(v: Vector4<T>) -> Vector3<T> {
    v.dehomogenize()
}
