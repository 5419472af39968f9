#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for I/O operations.
pub mod error;

/// High-level image reading functions.
///
/// See [`functional::read_image_any_rgba8`] for automatic format detection.
pub mod functional;

/// PNG image encoding.
pub mod png;

/// Wall clock timing of repeated operations.
pub mod timing;

pub use crate::error::IoError;
