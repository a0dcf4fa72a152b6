//! Precomputed roots of unity for a fixed transform length.

use crate::modular::{modinv, modpow, mul_mod, MAX_LOG_LEN, MOD, ROOT};

/// Powers of a primitive `n`-th root of unity and of its inverse.
///
/// Only the first `n / 2` powers are stored: the butterfly at stage `s`
/// reads `w^(k * n / 2^s)` with `k < 2^(s-1)`, which never reaches `n / 2`.
#[derive(Debug, Clone)]
pub struct RootTable {
    log_n: u32,
    forward: Vec<u64>,
    inverse: Vec<u64>,
    inv_n: u64,
}

impl RootTable {
    /// Build the table for a transform of length `2^log_n`.
    ///
    /// # Panics
    ///
    /// Panics if `log_n` exceeds [`MAX_LOG_LEN`]; the field has no roots of
    /// unity of higher power-of-two order.
    #[must_use]
    pub fn new(log_n: u32) -> Self {
        assert!(
            log_n <= MAX_LOG_LEN,
            "transform length 2^{log_n} exceeds field capacity 2^{MAX_LOG_LEN}"
        );
        let n = 1u64 << log_n;
        let half = (1usize << log_n) / 2;

        let w = modpow(ROOT, (MOD - 1) >> log_n, MOD);
        let w_inv = modinv(w, MOD).expect("roots of unity are invertible in a prime field");
        let inv_n = modinv(n, MOD).expect("powers of two are invertible modulo an odd prime");

        Self {
            log_n,
            forward: powers(w, half),
            inverse: powers(w_inv, half),
            inv_n,
        }
    }

    /// Transform length.
    pub(crate) fn len(&self) -> usize {
        1 << self.log_n
    }

    /// `log2` of the transform length.
    #[must_use]
    pub fn log_len(&self) -> u32 {
        self.log_n
    }

    /// `w^0 .. w^(n/2)` for the forward transform.
    #[must_use]
    pub fn forward(&self) -> &[u64] {
        &self.forward
    }

    /// `w^0 .. w^-(n/2)` for the inverse transform.
    #[must_use]
    pub fn inverse(&self) -> &[u64] {
        &self.inverse
    }

    /// `n^-1 mod MOD`, the inverse-transform scale factor.
    #[must_use]
    pub fn inv_len(&self) -> u64 {
        self.inv_n
    }
}

fn powers(w: u64, count: usize) -> Vec<u64> {
    let mut table = Vec::with_capacity(count);
    let mut acc = 1u64;
    for _ in 0..count {
        table.push(acc);
        acc = mul_mod(acc, w);
    }
    table
}
