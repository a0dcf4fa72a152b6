//! Ordering and `±1` stepping.

use std::cmp::Ordering;

use crate::bigint::BigInt;
use crate::limb::{add_scalar, sub_scalar};

/// Compare canonical magnitudes: more limbs is larger, otherwise compare
/// from the most significant limb down.
pub(crate) fn cmp_magnitude(a: &[u32], b: &[u32]) -> Ordering {
    a.len()
        .cmp(&b.len())
        .then_with(|| a.iter().rev().cmp(b.iter().rev()))
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => cmp_magnitude(&self.limbs, &other.limbs),
            (true, true) => cmp_magnitude(&other.limbs, &self.limbs),
        }
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl BigInt {
    /// Add one in place.
    pub fn increment(&mut self) -> &mut Self {
        if self.negative {
            // Magnitude is at least one, so the borrow is absorbed.
            sub_scalar(&mut self.limbs, 1);
        } else if add_scalar(&mut self.limbs, 1) != 0 {
            self.limbs.push(1);
        }
        self.normalize();
        self
    }

    /// Subtract one in place.
    pub fn decrement(&mut self) -> &mut Self {
        if self.is_zero() {
            self.negative = true;
            self.limbs[0] = 1;
        } else if self.negative {
            if add_scalar(&mut self.limbs, 1) != 0 {
                self.limbs.push(1);
            }
        } else {
            sub_scalar(&mut self.limbs, 1);
        }
        self.normalize();
        self
    }

    /// Add one in place, returning the previous value.
    pub fn post_increment(&mut self) -> Self {
        let previous = self.clone();
        self.increment();
        previous
    }

    /// Subtract one in place, returning the previous value.
    pub fn post_decrement(&mut self) -> Self {
        let previous = self.clone();
        self.decrement();
        previous
    }
}
