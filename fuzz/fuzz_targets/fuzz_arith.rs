#![no_main]

use libfuzzer_sys::fuzz_target;

use hprec_core::BigInt;

fn decode(bytes: &[u8]) -> BigInt {
    let Some((&flags, rest)) = bytes.split_first() else {
        return BigInt::zero();
    };
    let limbs = rest
        .chunks(4)
        .map(|c| c.iter().rev().fold(0u32, |acc, &b| (acc << 8) | u32::from(b)))
        .collect();
    BigInt::from_limbs(flags & 1 == 1, limbs)
}

fuzz_target!(|data: &[u8]| {
    // First byte picks the split point between the two operands.
    let Some((&split, rest)) = data.split_first() else {
        return;
    };
    let mid = usize::from(split).min(rest.len());
    let a = decode(&rest[..mid]);
    let b = decode(&rest[mid..]);
    let ra = num_bigint::BigInt::from(&a);
    let rb = num_bigint::BigInt::from(&b);

    assert_eq!(num_bigint::BigInt::from(&a + &b), &ra + &rb);
    assert_eq!(num_bigint::BigInt::from(&a - &b), &ra - &rb);
    assert_eq!(num_bigint::BigInt::from(&a * &b), &ra * &rb);
    assert_eq!(a.square(), &a * &a);
    assert_eq!(a.cmp(&b), ra.cmp(&rb));
    assert_eq!(!!a.clone(), a);
});
