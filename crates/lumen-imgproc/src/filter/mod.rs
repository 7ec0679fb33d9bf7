//! Filter operations
//!
//! Every neighborhood operation in this module is built on [`correlate`]: a
//! weighted neighborhood sum over a zero-padded plane.

/// Filter kernels
pub mod kernels;
pub use kernels::Kernel;

/// Correlation and normalized convolution
mod correlation;
pub use correlation::*;

/// Filter operations
mod ops;
pub use ops::*;
