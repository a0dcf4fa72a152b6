//! Conversions to and from `num_bigint::BigInt`.

use num_bigint::Sign;

use crate::bigint::BigInt;

impl From<&BigInt> for num_bigint::BigInt {
    fn from(value: &BigInt) -> Self {
        let sign = if value.is_zero() {
            Sign::NoSign
        } else if value.negative {
            Sign::Minus
        } else {
            Sign::Plus
        };
        num_bigint::BigInt::from_slice(sign, &value.limbs)
    }
}

impl From<BigInt> for num_bigint::BigInt {
    fn from(value: BigInt) -> Self {
        Self::from(&value)
    }
}

impl From<&num_bigint::BigInt> for BigInt {
    fn from(value: &num_bigint::BigInt) -> Self {
        let (sign, digits) = value.to_u32_digits();
        BigInt::from_limbs(sign == Sign::Minus, digits)
    }
}

impl From<num_bigint::BigInt> for BigInt {
    fn from(value: num_bigint::BigInt) -> Self {
        Self::from(&value)
    }
}
