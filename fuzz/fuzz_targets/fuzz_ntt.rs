#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    let words: Vec<u32> = data[1..]
        .chunks(4)
        .map(|c| c.iter().fold(0u32, |acc, &b| (acc << 8) | u32::from(b)))
        .collect();
    let mid = usize::from(data[0]).min(words.len());
    let (a, b) = words.split_at(mid);
    if a.is_empty() || b.is_empty() {
        return;
    }
    let mut expected = hprec_ntt::schoolbook_mul(a, b);
    while expected.len() > 1 && expected[expected.len() - 1] == 0 {
        expected.pop();
    }
    assert_eq!(hprec_ntt::ntt_mul(a, b), expected);
    assert_eq!(hprec_ntt::mul(a, b), expected);
});
