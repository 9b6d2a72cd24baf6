//! Named-field views of [`Vector2`], [`Vector3`] and [`Vector4`].
//!
//! [`Vector2`]: crate::Vector2
//! [`Vector3`]: crate::Vector3
//! [`Vector4`]: crate::Vector4

use std::{mem, ops::Deref};

use crate::Vector;

/// Field view of a 2-dimensional vector.
#[repr(C)]
pub struct XY<T> {
    pub x: T,
    pub y: T,
    _priv: (), // prevent external construction
}

/// Field view of a 3-dimensional vector.
#[repr(C)]
pub struct XYZ<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    _priv: (), // prevent external construction
}

/// Field view of a 4-dimensional (homogeneous) vector.
#[repr(C)]
pub struct XYZW<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
    _priv: (), // prevent external construction
}

// No `DerefMut`, the fields are read-only.

impl<T> Deref for Vector<T, 2> {
    type Target = XY<T>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        // Safety: `Vector<T, 2>` is a transparent `[T; 2]`, which has the same layout as the
        // `#[repr(C)]` struct with two `T` fields and a trailing ZST.
        unsafe { mem::transmute(self) }
    }
}

impl<T> Deref for Vector<T, 3> {
    type Target = XYZ<T>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        // Safety: see above.
        unsafe { mem::transmute(self) }
    }
}

impl<T> Deref for Vector<T, 4> {
    type Target = XYZW<T>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        // Safety: see above.
        unsafe { mem::transmute(self) }
    }
}
