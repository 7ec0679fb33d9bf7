#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// sample saturation and lookup table helpers.
pub mod core;

/// intensity enhancement module.
pub mod enhance;

/// image filtering module.
pub mod filter;

/// compute image histogram module.
pub mod histogram;

/// tagged dispatch over the plane operations.
pub mod operation;

/// module containing parallization utilities.
pub mod parallel;
