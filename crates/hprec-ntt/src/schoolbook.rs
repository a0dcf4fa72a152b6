//! Quadratic long multiplication.
//!
//! Used below the transform threshold, for operands too long for a single
//! transform, and as the independent reference in tests.

/// Multiply two little-endian limb arrays.
///
/// The result has exactly `a.len() + b.len()` limbs and may carry
/// most-significant zeros.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn schoolbook_mul(a: &[u32], b: &[u32]) -> Vec<u32> {
    let mut out = vec![0u32; a.len() + b.len()];
    for (i, &x) in a.iter().enumerate() {
        if x == 0 {
            continue;
        }
        let mut carry = 0u64;
        for (j, &y) in b.iter().enumerate() {
            // (2^32-1)^2 + 2 * (2^32-1) == 2^64 - 1, so this never overflows.
            let t = u64::from(x) * u64::from(y) + u64::from(out[i + j]) + carry;
            out[i + j] = t as u32;
            carry = t >> 32;
        }
        out[i + b.len()] = carry as u32;
    }
    out
}
