//! Multiplication through `hprec-ntt`.
//!
//! The transform works on private scratch buffers; the left operand's limbs
//! are replaced only once the product is complete.

use std::ops::MulAssign;

use tracing::trace;

use crate::bigint::BigInt;

impl MulAssign<&BigInt> for BigInt {
    fn mul_assign(&mut self, rhs: &BigInt) {
        trace!(
            lhs_limbs = self.limbs.len(),
            rhs_limbs = rhs.limbs.len(),
            "multiply"
        );
        self.limbs = hprec_ntt::mul(&self.limbs, &rhs.limbs);
        self.negative ^= rhs.negative;
        self.normalize();
    }
}

impl BigInt {
    /// `self * self`, sharing one forward transform for long operands.
    #[must_use]
    pub fn square(&self) -> Self {
        trace!(limbs = self.limbs.len(), "square");
        Self::from_limbs(false, hprec_ntt::sqr(&self.limbs))
    }
}
