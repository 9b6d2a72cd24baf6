//! Fixed-dimension linear algebra.
//!
//! This crate provides 2, 3 and 4-dimensional vectors and square matrices, together with the
//! closed-form algebra that is commonly needed for transforms and physics kernels: arithmetic
//! operators, inner/cross/outer products, determinants, adjugates, traces, and homogeneous
//! coordinate conversion.
//!
//! # Goals & Non-Goals
//!
//! - Only fixed, compile-time dimensions are supported. Vectors are [`Vector<T, N>`] and matrices
//!   are [`Matrix<T, N>`]; mixing dimensions is a type error, not a runtime error.
//! - Everything is a plain [`Copy`] value. Nothing allocates, and every operation returns a new
//!   value instead of mutating its inputs.
//! - Matrices are stored *row-major* and indexed by `(row, column)`.
//! - Dimension-specific algebra ([`det`], [`adj`], [`cross`], the matrix products) is spelled out
//!   as explicit per-dimension expressions instead of generic loops, so that results are
//!   reproducible down to the last bit.
//! - No decompositions, no SIMD, no dynamically-sized types.
//!
//! # Conventions
//!
//! `vector * matrix` treats the vector as a *row* vector, `matrix * vector` treats it as a
//! *column* vector. The two are generally not equal:
//!
//! ```
//! # use fmm_linalg::*;
//! let m = Matrix::from_rows([
//!     [1.0, 2.0],
//!     [3.0, 4.0],
//! ]);
//! let v = vec2(1.0, 2.0);
//! assert_eq!(v * m, vec2(7.0, 10.0));
//! assert_eq!(m * v, vec2(5.0, 11.0));
//! ```

mod convert;
mod matrix;
mod products;
mod traits;
mod vector;

pub use convert::*;
pub use matrix::*;
pub use products::*;
pub use traits::*;
pub use vector::*;
