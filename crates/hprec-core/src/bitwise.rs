//! Limb-wise logic on magnitudes, with signs combined separately.
//!
//! These are not two's-complement operations: the magnitude limbs are
//! combined directly and the sign flags are combined with the same operator.

use std::ops::{BitAndAssign, BitOrAssign, BitXorAssign, Not};

use crate::bigint::BigInt;

impl BitAndAssign<&BigInt> for BigInt {
    fn bitand_assign(&mut self, rhs: &BigInt) {
        // Limbs past the shorter operand meet an implicit zero.
        self.limbs.truncate(rhs.limbs.len());
        for (l, r) in self.limbs.iter_mut().zip(&rhs.limbs) {
            *l &= r;
        }
        self.negative &= rhs.negative;
        self.normalize();
    }
}

impl BitOrAssign<&BigInt> for BigInt {
    fn bitor_assign(&mut self, rhs: &BigInt) {
        for (l, r) in self.limbs.iter_mut().zip(&rhs.limbs) {
            *l |= r;
        }
        if self.limbs.len() < rhs.limbs.len() {
            self.limbs.extend_from_slice(&rhs.limbs[self.limbs.len()..]);
        }
        self.negative |= rhs.negative;
        self.normalize();
    }
}

impl BitXorAssign<&BigInt> for BigInt {
    fn bitxor_assign(&mut self, rhs: &BigInt) {
        for (l, r) in self.limbs.iter_mut().zip(&rhs.limbs) {
            *l ^= r;
        }
        if self.limbs.len() < rhs.limbs.len() {
            self.limbs.extend_from_slice(&rhs.limbs[self.limbs.len()..]);
        }
        self.negative ^= rhs.negative;
        self.normalize();
    }
}

/// `!x == -(x + 1)`.
impl Not for BigInt {
    type Output = BigInt;

    fn not(mut self) -> BigInt {
        self.increment();
        self.negative = !self.negative;
        self.normalize();
        self
    }
}

impl Not for &BigInt {
    type Output = BigInt;

    fn not(self) -> BigInt {
        !self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(s: &str) -> BigInt {
        s.parse().unwrap()
    }

    #[test]
    fn and_truncates_to_shorter() {
        let a = BigInt::from_limbs(false, vec![0xFF00, 0xFFFF, 1]);
        let b = BigInt::from(0x0FF0u32);
        assert_eq!(a & b, BigInt::from(0x0F00u32));
    }

    #[test]
    fn and_trims_zero_high_limbs() {
        let a = BigInt::from_limbs(false, vec![1, 0xF0]);
        let b = BigInt::from_limbs(false, vec![1, 0x0F]);
        let v = a & b;
        assert_eq!(v.limbs(), &[1]);
    }

    #[test]
    fn and_sign_is_and_of_signs() {
        assert_eq!(BigInt::from(-6) & BigInt::from(-3), BigInt::from(-2));
        assert_eq!(BigInt::from(-6) & BigInt::from(3), BigInt::from(2));
    }

    #[test]
    fn and_to_zero_clears_sign() {
        let v = BigInt::from(-4) & BigInt::from(-3);
        assert_eq!(v, BigInt::zero());
        assert!(!v.is_negative());
    }

    #[test]
    fn or_extends_to_longer() {
        let a = BigInt::from(1u32);
        let b = BigInt::from_limbs(false, vec![2, 3, 4]);
        assert_eq!((a | b).limbs(), &[3, 3, 4]);
        assert_eq!(BigInt::from(-4) | BigInt::from(1), BigInt::from(-5));
    }

    #[test]
    fn xor_extends_and_combines_signs() {
        let a = BigInt::from_limbs(false, vec![0b1010, 7]);
        let b = BigInt::from(0b0110u32);
        assert_eq!((a ^ b).limbs(), &[0b1100, 7]);
        assert_eq!(BigInt::from(-5) ^ BigInt::from(-3), BigInt::from(6));
        assert_eq!(BigInt::from(5) ^ BigInt::from(-3), BigInt::from(-6));
    }

    #[test]
    fn xor_equal_high_limbs_are_trimmed() {
        let a = BigInt::from_limbs(false, vec![1, 9]);
        let b = BigInt::from_limbs(false, vec![2, 9]);
        assert_eq!((a ^ b).limbs(), &[3]);
    }

    #[test]
    fn xor_self_is_zero() {
        let a = big("-98765432109876543210");
        let v = &a ^ &a;
        assert_eq!(v, BigInt::zero());
        assert!(!v.is_negative());
    }

    #[test]
    fn not_is_negated_successor() {
        assert_eq!(!BigInt::from(0), BigInt::from(-1));
        assert_eq!(!BigInt::from(5), BigInt::from(-6));
        assert_eq!(!BigInt::from(-6), BigInt::from(5));
        let v = !BigInt::from(-1);
        assert_eq!(v, BigInt::zero());
        assert!(!v.is_negative());
    }

    #[test]
    fn double_not_is_identity() {
        for s in ["0", "1", "-1", "4294967295", "-4294967296", "123456789012345678901234567890"] {
            let a = big(s);
            assert_eq!(!!a.clone(), a, "~~{s}");
        }
    }
}
