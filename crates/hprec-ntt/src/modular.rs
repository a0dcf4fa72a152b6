//! Arithmetic in the transform field `Z/MOD`.
//!
//! `MOD = 3 * 2^30 + 1` is prime, so `MOD - 1 = 3 * 2^30` admits roots of
//! unity of every power-of-two order up to `2^30`. All field elements are
//! below `2^32`, so products fit in a `u64` without reduction tricks.

/// Prime modulus of the transform field.
pub const MOD: u64 = 3 * (1 << 30) + 1;

/// Primitive root of `MOD`.
pub const ROOT: u64 = 5;

/// Largest supported transform length is `2^MAX_LOG_LEN`.
pub const MAX_LOG_LEN: u32 = 30;

/// `(a + b) mod MOD` for reduced operands.
#[inline]
#[must_use]
pub fn add_mod(a: u64, b: u64) -> u64 {
    let sum = a + b;
    if sum >= MOD {
        sum - MOD
    } else {
        sum
    }
}

/// `(a - b) mod MOD` for reduced operands.
#[inline]
#[must_use]
pub fn sub_mod(a: u64, b: u64) -> u64 {
    if a >= b {
        a - b
    } else {
        a + MOD - b
    }
}

/// `(a * b) mod MOD` for reduced operands.
#[inline]
#[must_use]
pub fn mul_mod(a: u64, b: u64) -> u64 {
    a * b % MOD
}

/// Square-and-multiply exponentiation: `base^exp mod modulus`.
///
/// Intermediate products are widened to `u128`, so any non-zero `u64`
/// modulus is accepted.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn modpow(base: u64, mut exp: u64, modulus: u64) -> u64 {
    if modulus == 1 {
        return 0;
    }
    let m = u128::from(modulus);
    let mut base = u128::from(base) % m;
    let mut result = 1u128;
    while exp > 0 {
        if exp & 1 == 1 {
            result = result * base % m;
        }
        base = base * base % m;
        exp >>= 1;
    }
    result as u64
}

/// Modular inverse via the iterative extended Euclidean algorithm.
///
/// Returns `None` when `value` and `modulus` are not coprime or `modulus`
/// is zero.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn modinv(value: u64, modulus: u64) -> Option<u64> {
    if modulus == 0 {
        return None;
    }
    let m = i128::from(modulus);
    let (mut old_r, mut r) = (i128::from(value) % m, m);
    let (mut old_s, mut s) = (1i128, 0i128);
    while r != 0 {
        let q = old_r / r;
        (old_r, r) = (r, old_r - q * r);
        (old_s, s) = (s, old_s - q * s);
    }
    if old_r != 1 {
        return None;
    }
    Some(old_s.rem_euclid(m) as u64)
}
