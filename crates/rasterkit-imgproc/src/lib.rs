#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// color transformations module.
pub mod color;

/// image arithmetic operations module.
pub mod core;

/// image filtering module.
pub mod filter;

/// image flipping module.
pub mod flip;

/// module containing parallelization utilities.
pub mod parallel;

/// operations to threshold images.
pub mod threshold;
