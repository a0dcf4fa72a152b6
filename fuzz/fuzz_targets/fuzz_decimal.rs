#![no_main]

use libfuzzer_sys::fuzz_target;

use hprec_core::BigInt;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    // Parsing must never panic; accepted input must round-trip canonically.
    if let Ok(v) = text.parse::<BigInt>() {
        let printed = v.to_string();
        assert_eq!(printed.parse::<BigInt>().unwrap(), v);
        let reference: num_bigint::BigInt = printed.parse().unwrap();
        assert_eq!(BigInt::from(reference), v);
    }
});
