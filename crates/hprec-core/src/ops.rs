//! Operator plumbing.
//!
//! Every binary operator is implemented once, as `OpAssign<&BigInt>`. The
//! owned and non-mutating forms copy the left operand (when borrowed) and
//! delegate to it.

use std::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Mul,
    MulAssign, Sub, SubAssign,
};

use crate::bigint::BigInt;

macro_rules! forward_binop {
    ($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident) => {
        impl $OpAssign<BigInt> for BigInt {
            fn $op_assign(&mut self, rhs: BigInt) {
                self.$op_assign(&rhs);
            }
        }

        impl $Op<&BigInt> for BigInt {
            type Output = BigInt;

            fn $op(mut self, rhs: &BigInt) -> BigInt {
                self.$op_assign(rhs);
                self
            }
        }

        impl $Op<BigInt> for BigInt {
            type Output = BigInt;

            fn $op(mut self, rhs: BigInt) -> BigInt {
                self.$op_assign(&rhs);
                self
            }
        }

        impl $Op<&BigInt> for &BigInt {
            type Output = BigInt;

            fn $op(self, rhs: &BigInt) -> BigInt {
                let mut result = self.clone();
                result.$op_assign(rhs);
                result
            }
        }

        impl $Op<BigInt> for &BigInt {
            type Output = BigInt;

            fn $op(self, rhs: BigInt) -> BigInt {
                let mut result = self.clone();
                result.$op_assign(&rhs);
                result
            }
        }
    };
}

forward_binop!(Add, add, AddAssign, add_assign);
forward_binop!(Sub, sub, SubAssign, sub_assign);
forward_binop!(Mul, mul, MulAssign, mul_assign);
forward_binop!(BitAnd, bitand, BitAndAssign, bitand_assign);
forward_binop!(BitOr, bitor, BitOrAssign, bitor_assign);
forward_binop!(BitXor, bitxor, BitXorAssign, bitxor_assign);
