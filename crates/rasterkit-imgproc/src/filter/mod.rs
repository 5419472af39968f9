//! Filter operations
//!
//! This module provides the 2d convolution engine and the kernels it consumes.

/// Convolution kernel type and validation.
mod kernel;
pub use kernel::{Kernel, KernelError, KernelWeight};

/// Filter kernels
pub mod kernels;

/// Filter operations
mod ops;
pub use ops::*;
