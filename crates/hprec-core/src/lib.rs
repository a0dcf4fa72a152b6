//! # hprec-core
//!
//! Arbitrary-precision signed integers.
//!
//! [`BigInt`] stores a sign flag and a little-endian magnitude of radix-`2^32`
//! limbs. It supports decimal text conversion, ordering, `±1` stepping,
//! addition, subtraction, limb-wise logic, and multiplication through a
//! number-theoretic transform (see `hprec-ntt`).
//!
//! # Example
//! ```
//! use hprec_core::BigInt;
//!
//! let a: BigInt = "99999999999999999999".parse().unwrap();
//! let b = BigInt::from(1);
//! assert_eq!((a + b).to_string(), "100000000000000000000");
//! ```

mod additive;
mod bigint;
mod bitwise;
mod cmp;
pub mod constants;
mod decimal;
pub mod error;
mod limb;
mod multiply;
mod ops;

#[cfg(feature = "num-bigint")]
mod interop;
#[cfg(feature = "serde")]
mod serde_impl;

// Re-exports
pub use bigint::BigInt;
pub use error::{BigIntError, Radix};
