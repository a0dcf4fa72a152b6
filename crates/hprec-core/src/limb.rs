//! Limb-level carry and borrow primitives.

/// Add with carry: `a + b + carry -> (sum, new_carry)`.
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn add_with_carry(a: u32, b: u32, carry: u32) -> (u32, u32) {
    let sum = u64::from(a) + u64::from(b) + u64::from(carry);
    (sum as u32, (sum >> 32) as u32)
}

/// Subtract with borrow: `a - b - borrow -> (diff, new_borrow)`.
#[inline]
pub(crate) fn sub_with_borrow(a: u32, b: u32, borrow: u32) -> (u32, u32) {
    let (d1, b1) = a.overflowing_sub(b);
    let (d2, b2) = d1.overflowing_sub(borrow);
    (d2, u32::from(b1 || b2))
}

/// Ripple a scalar into a limb slice, returning the outgoing carry.
pub(crate) fn add_scalar(data: &mut [u32], scalar: u32) -> u32 {
    let mut carry = scalar;
    for limb in data.iter_mut() {
        if carry == 0 {
            break;
        }
        (*limb, carry) = add_with_carry(*limb, carry, 0);
    }
    carry
}

/// Ripple a scalar borrow through a limb slice, returning the outgoing borrow.
pub(crate) fn sub_scalar(data: &mut [u32], scalar: u32) -> u32 {
    let mut borrow = scalar;
    for limb in data.iter_mut() {
        if borrow == 0 {
            break;
        }
        (*limb, borrow) = sub_with_borrow(*limb, borrow, 0);
    }
    borrow
}

/// Drop most-significant zero limbs, keeping at least one limb.
pub(crate) fn trim(limbs: &mut Vec<u32>) {
    while limbs.len() > 1 && limbs.last() == Some(&0) {
        limbs.pop();
    }
    if limbs.is_empty() {
        limbs.push(0);
    }
}
