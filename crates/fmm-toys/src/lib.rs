//! Small programs exercising `fmm-linalg`.
//!
//! # Environment Variables
//!
//! * `RUST_LOG`: overrides the default log filter (see [`init_logger!`]).
//! * `FMM_TOYS_MESSAGE_1`, `FMM_TOYS_MESSAGE_2`: the messages printed by the worker threads of
//!   the `pthreads` program. They default to `Thread 1` and `Thread 2`.

use std::env;

use fmm_linalg::{convert, det, hom_convert, Matrix, Matrix4x4d, Vector3d};
use log::LevelFilter;

/// A unit of work handed to a worker thread.
#[derive(Debug, Clone)]
pub struct Job {
    pub message: String,
    pub transform: Matrix4x4d,
    pub point: Vector3d,
}

/// What a worker thread reports back after running a [`Job`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JobOutput {
    /// The job's point, transformed by the job's matrix.
    pub point: Vector3d,
    /// Determinant of the job's matrix.
    pub det: f64,
}

impl Job {
    /// Creates a job whose message is taken from the environment variable `var`, falling back to
    /// `default` if it is unset or not valid Unicode.
    pub fn from_env(var: &str, default: &str, transform: Matrix4x4d, point: Vector3d) -> Self {
        let message = env::var(var).unwrap_or_else(|_| default.to_string());
        Self {
            message,
            transform,
            point,
        }
    }

    pub fn run(&self) -> JobOutput {
        JobOutput {
            point: hom_convert(self.transform * convert(self.point)),
            det: det(self.transform),
        }
    }
}

/// Returns a homogeneous 4x4 matrix that translates points by `offset`.
pub fn translation(offset: Vector3d) -> Matrix4x4d {
    #[rustfmt::skip]
    let mat = Matrix::from_rows([
        [1.0, 0.0, 0.0, offset.x],
        [0.0, 1.0, 0.0, offset.y],
        [0.0, 0.0, 1.0, offset.z],
        [0.0, 0.0, 0.0, 1.0],
    ]);
    mat
}

/// Returns a homogeneous 4x4 matrix that scales points by `factors`.
pub fn scaling(factors: Vector3d) -> Matrix4x4d {
    Matrix::from_diagonal(factors.homogenize())
}

/// macro-use only, not part of public API.
#[doc(hidden)]
pub fn init_logger(calling_crate: &'static str) {
    let log_level = LevelFilter::Debug;
    env_logger::Builder::new()
        .filter(Some(calling_crate), log_level)
        .filter(Some(env!("CARGO_CRATE_NAME")), log_level)
        .parse_default_env()
        .try_init()
        .ok();
}

/// Initializes logging to *stderr*.
///
/// The calling crate and `fmm_toys` will log at *debug* level. `RUST_LOG` is applied on top.
///
/// If a global logger is already registered, this macro will do nothing.
#[macro_export]
macro_rules! init_logger {
    () => {
        $crate::init_logger(env!("CARGO_CRATE_NAME"))
    };
}
