//! Addition and subtraction.
//!
//! Same-signed operands work on magnitudes directly. Mixed signs flip the
//! left operand's sign, delegate to the opposite operator, and flip back.

use std::cmp::Ordering;
use std::ops::{AddAssign, SubAssign};

use crate::bigint::BigInt;
use crate::cmp::cmp_magnitude;
use crate::limb::{add_with_carry, sub_with_borrow};

/// `lhs += rhs` on magnitudes.
fn add_magnitude(lhs: &mut Vec<u32>, rhs: &[u32]) {
    if lhs.len() < rhs.len() {
        lhs.resize(rhs.len(), 0);
    }
    let (head, tail) = lhs.split_at_mut(rhs.len());
    let mut carry = 0;
    for (l, &r) in head.iter_mut().zip(rhs) {
        (*l, carry) = add_with_carry(*l, r, carry);
    }
    for l in tail {
        if carry == 0 {
            break;
        }
        (*l, carry) = add_with_carry(*l, 0, carry);
    }
    if carry != 0 {
        lhs.push(carry);
    }
}

/// `lhs -= rhs` on magnitudes; requires `|lhs| >= |rhs|`.
fn sub_magnitude(lhs: &mut [u32], rhs: &[u32]) {
    let (head, tail) = lhs.split_at_mut(rhs.len());
    let mut borrow = 0;
    for (l, &r) in head.iter_mut().zip(rhs) {
        (*l, borrow) = sub_with_borrow(*l, r, borrow);
    }
    for l in tail {
        if borrow == 0 {
            break;
        }
        (*l, borrow) = sub_with_borrow(*l, 0, borrow);
    }
    debug_assert_eq!(borrow, 0, "subtrahend larger than minuend");
}

/// `lhs = rhs - lhs` on magnitudes; requires `|rhs| > |lhs|`.
fn sub_magnitude_from(lhs: &mut Vec<u32>, rhs: &[u32]) {
    if lhs.len() < rhs.len() {
        lhs.resize(rhs.len(), 0);
    }
    let mut borrow = 0;
    for (l, &r) in lhs.iter_mut().zip(rhs) {
        (*l, borrow) = sub_with_borrow(r, *l, borrow);
    }
    debug_assert_eq!(borrow, 0, "subtrahend larger than minuend");
}

impl AddAssign<&BigInt> for BigInt {
    fn add_assign(&mut self, rhs: &BigInt) {
        if self.negative == rhs.negative {
            add_magnitude(&mut self.limbs, &rhs.limbs);
        } else {
            self.negative = !self.negative;
            *self -= rhs;
            self.negative = !self.negative;
        }
        self.normalize();
    }
}

impl SubAssign<&BigInt> for BigInt {
    fn sub_assign(&mut self, rhs: &BigInt) {
        if self.negative == rhs.negative {
            if cmp_magnitude(&self.limbs, &rhs.limbs) == Ordering::Less {
                sub_magnitude_from(&mut self.limbs, &rhs.limbs);
                self.negative = !self.negative;
            } else {
                sub_magnitude(&mut self.limbs, &rhs.limbs);
            }
        } else {
            self.negative = !self.negative;
            *self += rhs;
            self.negative = !self.negative;
        }
        self.normalize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(s: &str) -> BigInt {
        s.parse().unwrap()
    }

    #[test]
    fn add_small() {
        assert_eq!(big("123") + big("877"), big("1000"));
    }

    #[test]
    fn add_carries_into_new_limb() {
        assert_eq!(
            big("99999999999999999999") + BigInt::one(),
            big("100000000000000000000")
        );
        let mut v = BigInt::from(u64::MAX);
        v += &BigInt::from(u64::MAX);
        assert_eq!(v.limbs(), &[u32::MAX - 1, u32::MAX, 1]);
    }

    #[test]
    fn add_shorter_left_operand() {
        let mut v = BigInt::from(1);
        v += &BigInt::from_limbs(false, vec![u32::MAX, u32::MAX, 5]);
        assert_eq!(v.limbs(), &[0, 0, 6]);
    }

    #[test]
    fn add_mixed_signs() {
        assert_eq!(BigInt::from(5) + BigInt::from(-3), BigInt::from(2));
        assert_eq!(BigInt::from(3) + BigInt::from(-5), BigInt::from(-2));
        assert_eq!(BigInt::from(-5) + BigInt::from(3), BigInt::from(-2));
        assert_eq!(BigInt::from(-3) + BigInt::from(5), BigInt::from(2));
        assert_eq!(BigInt::zero() + BigInt::from(-5), BigInt::from(-5));
    }

    #[test]
    fn add_inverse_is_positive_zero() {
        let a = big("-123456789012345678901234567890");
        let sum = &a + &(-&a);
        assert_eq!(sum, BigInt::zero());
        assert!(!sum.is_negative());
    }

    #[test]
    fn sub_same_sign() {
        assert_eq!(BigInt::from(10) - BigInt::from(3), BigInt::from(7));
        assert_eq!(BigInt::from(3) - BigInt::from(10), BigInt::from(-7));
        assert_eq!(BigInt::from(-3) - BigInt::from(-10), BigInt::from(7));
        assert_eq!(BigInt::from(-10) - BigInt::from(-3), BigInt::from(-7));
    }

    #[test]
    fn sub_mixed_signs() {
        assert_eq!(BigInt::from(3) - BigInt::from(-10), BigInt::from(13));
        assert_eq!(BigInt::from(-3) - BigInt::from(10), BigInt::from(-13));
        assert_eq!(BigInt::zero() - BigInt::from(4), BigInt::from(-4));
    }

    #[test]
    fn sub_self_is_zero() {
        let a = big("340282366920938463463374607431768211456");
        let diff = a.clone() - a;
        assert_eq!(diff, BigInt::zero());
        assert!(!diff.is_negative());
    }

    #[test]
    fn sub_borrows_across_limbs() {
        let v = big("18446744073709551616") - BigInt::one();
        assert_eq!(v.limbs(), &[u32::MAX, u32::MAX]);
        let v = BigInt::one() - big("18446744073709551616");
        assert_eq!(v.to_string(), "-18446744073709551615");
    }

    #[test]
    fn sub_trims_leading_zero_limbs() {
        let a = BigInt::from_limbs(false, vec![5, 7, 9]);
        let b = BigInt::from_limbs(false, vec![4, 7, 9]);
        let diff = a - b;
        assert_eq!(diff.limbs(), &[1]);
    }

    #[test]
    fn add_self_through_clone() {
        let mut v = big("12345678901234567890");
        let copy = v.clone();
        v += &copy;
        assert_eq!(v, big("24691357802469135780"));
    }
}
