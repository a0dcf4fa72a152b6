//! The `BigInt` value type: representation, construction, normalization.

use crate::constants::LIMB_BITS;
use crate::limb::trim;

/// Arbitrary-precision signed integer in sign-magnitude form.
///
/// Invariants, restored by every public operation:
/// - `limbs` holds at least one limb, least significant first;
/// - the most significant limb is non-zero unless the value is zero, which
///   is exactly `[0]`;
/// - zero is never negative.
///
/// The derived equality compares sign and limb sequence, which is value
/// equality because the representation is canonical.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BigInt {
    pub(crate) negative: bool,
    pub(crate) limbs: Vec<u32>,
}

impl BigInt {
    /// The value zero.
    #[must_use]
    pub fn zero() -> Self {
        Self {
            negative: false,
            limbs: vec![0],
        }
    }

    /// The value one.
    #[must_use]
    pub fn one() -> Self {
        Self {
            negative: false,
            limbs: vec![1],
        }
    }

    /// Build from a sign and a little-endian magnitude.
    ///
    /// The magnitude may carry most-significant zeros or be empty; the
    /// result is normalized.
    #[must_use]
    pub fn from_limbs(negative: bool, limbs: Vec<u32>) -> Self {
        let mut value = Self { negative, limbs };
        value.normalize();
        value
    }

    /// Little-endian radix-`2^32` magnitude.
    #[must_use]
    pub fn limbs(&self) -> &[u32] {
        &self.limbs
    }

    /// True for values strictly below zero.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// True for the value zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.limbs.len() == 1 && self.limbs[0] == 0
    }

    /// `-1`, `0` or `1` according to the sign of the value.
    #[must_use]
    pub fn signum(&self) -> i32 {
        if self.negative {
            -1
        } else if self.is_zero() {
            0
        } else {
            1
        }
    }

    /// Number of significant bits of the magnitude; zero for zero.
    #[must_use]
    pub fn bit_len(&self) -> u64 {
        let top = self.limbs[self.limbs.len() - 1];
        let full = (self.limbs.len() as u64 - 1) * u64::from(LIMB_BITS);
        full + u64::from(LIMB_BITS - top.leading_zeros())
    }

    /// Absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self {
            negative: false,
            limbs: self.limbs.clone(),
        }
    }

    /// Restore the representation invariants: trim most-significant zero
    /// limbs, then clear the sign of a zero magnitude.
    pub(crate) fn normalize(&mut self) {
        trim(&mut self.limbs);
        self.eliminate_negative_zero();
    }

    pub(crate) fn eliminate_negative_zero(&mut self) {
        if self.is_zero() {
            self.negative = false;
        }
    }
}

impl Default for BigInt {
    fn default() -> Self {
        Self::zero()
    }
}

#[allow(clippy::cast_possible_truncation)]
fn split_u64(magnitude: u64) -> Vec<u32> {
    let low = magnitude as u32;
    let high = (magnitude >> LIMB_BITS) as u32;
    if high == 0 {
        vec![low]
    } else {
        vec![low, high]
    }
}

impl From<i64> for BigInt {
    fn from(value: i64) -> Self {
        Self {
            negative: value < 0,
            limbs: split_u64(value.unsigned_abs()),
        }
    }
}

impl From<u64> for BigInt {
    fn from(value: u64) -> Self {
        Self {
            negative: false,
            limbs: split_u64(value),
        }
    }
}

impl From<i32> for BigInt {
    fn from(value: i32) -> Self {
        Self::from(i64::from(value))
    }
}

impl From<u32> for BigInt {
    fn from(value: u32) -> Self {
        Self {
            negative: false,
            limbs: vec![value],
        }
    }
}

impl std::ops::Neg for BigInt {
    type Output = BigInt;

    fn neg(mut self) -> BigInt {
        self.negative = !self.negative;
        self.eliminate_negative_zero();
        self
    }
}

impl std::ops::Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        -self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_canonical_zero() {
        let zero = BigInt::default();
        assert_eq!(zero.limbs(), &[0]);
        assert!(!zero.is_negative());
        assert!(zero.is_zero());
        assert_eq!(zero, BigInt::zero());
    }

    #[test]
    fn from_small_i64() {
        let v = BigInt::from(42i64);
        assert_eq!(v.limbs(), &[42]);
        assert!(!v.is_negative());

        let v = BigInt::from(-42i64);
        assert_eq!(v.limbs(), &[42]);
        assert!(v.is_negative());
    }

    #[test]
    fn from_i64_splits_into_two_limbs() {
        let v = BigInt::from(1i64 << 32);
        assert_eq!(v.limbs(), &[0, 1]);

        let v = BigInt::from(i64::MIN);
        assert_eq!(v.limbs(), &[0, 0x8000_0000]);
        assert!(v.is_negative());

        let v = BigInt::from(i64::MAX);
        assert_eq!(v.limbs(), &[u32::MAX, 0x7FFF_FFFF]);
    }

    #[test]
    fn from_unsigned() {
        assert_eq!(BigInt::from(u64::MAX).limbs(), &[u32::MAX, u32::MAX]);
        assert_eq!(BigInt::from(7u32).limbs(), &[7]);
        assert_eq!(BigInt::from(-7i32), BigInt::from(-7i64));
    }

    #[test]
    fn from_limbs_normalizes() {
        let v = BigInt::from_limbs(true, vec![0, 0, 0]);
        assert_eq!(v, BigInt::zero());
        assert!(!v.is_negative());

        let v = BigInt::from_limbs(false, vec![5, 0]);
        assert_eq!(v.limbs(), &[5]);

        let v = BigInt::from_limbs(true, Vec::new());
        assert_eq!(v, BigInt::zero());
    }

    #[test]
    fn signum_values() {
        assert_eq!(BigInt::from(-3).signum(), -1);
        assert_eq!(BigInt::zero().signum(), 0);
        assert_eq!(BigInt::from(3).signum(), 1);
    }

    #[test]
    fn bit_len_values() {
        assert_eq!(BigInt::zero().bit_len(), 0);
        assert_eq!(BigInt::one().bit_len(), 1);
        assert_eq!(BigInt::from(255).bit_len(), 8);
        assert_eq!(BigInt::from(1i64 << 32).bit_len(), 33);
        assert_eq!(BigInt::from(-1i64 << 40).bit_len(), 41);
    }

    #[test]
    fn neg_never_yields_negative_zero() {
        let zero = -BigInt::zero();
        assert!(!zero.is_negative());
        assert_eq!(-BigInt::from(5), BigInt::from(-5));
        assert_eq!(-&BigInt::from(-5), BigInt::from(5));
    }

    #[test]
    fn abs_drops_sign() {
        assert_eq!(BigInt::from(-9).abs(), BigInt::from(9));
        assert_eq!(BigInt::from(9).abs(), BigInt::from(9));
    }
}
