//! # hprec-ntt
//!
//! Number-theoretic-transform multiplication of little-endian `u32` limb
//! arrays. The transform runs over the prime field `Z/MOD` with
//! `MOD = 3 * 2^30 + 1`; magnitudes are split into narrow chunks so that
//! every convolution coefficient stays exact below `MOD`.

pub mod convolution;
pub mod modular;
pub mod multiply;
pub mod roots;
pub mod schoolbook;
pub mod transform;

// Re-exports
pub use modular::{modinv, modpow, MOD, ROOT};
pub use multiply::{mul, ntt_mul, ntt_sqr, plan, sqr, NTT_LIMB_THRESHOLD};
pub use schoolbook::schoolbook_mul;
