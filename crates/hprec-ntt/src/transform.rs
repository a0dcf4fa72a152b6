//! Forward and inverse number-theoretic transform over `Z/MOD`.

use crate::modular::{add_mod, mul_mod, sub_mod};
use crate::roots::RootTable;

/// Forward transform in place.
///
/// `data.len()` must equal `table.len()` and every element must already be
/// reduced below `MOD`.
pub fn forward(data: &mut [u64], table: &RootTable) {
    assert_eq!(data.len(), table.len(), "transform length mismatch");
    butterflies(data, table.forward());
}

/// Inverse transform in place: the forward network driven by inverse roots,
/// followed by scaling with `n^-1`.
pub fn inverse(data: &mut [u64], table: &RootTable) {
    assert_eq!(data.len(), table.len(), "transform length mismatch");
    butterflies(data, table.inverse());
    let inv_n = table.inv_len();
    for elem in data.iter_mut() {
        *elem = mul_mod(*elem, inv_n);
    }
}

/// Iterative Cooley-Tukey network on bit-reversed input.
fn butterflies(data: &mut [u64], roots: &[u64]) {
    let n = data.len();
    if n <= 1 {
        return;
    }

    bit_reverse_permutation(data);

    let mut half = 1;
    while half < n {
        // Root of unity for this level is w^stride.
        let stride = n / (2 * half);
        for start in (0..n).step_by(2 * half) {
            let (lo, hi) = data[start..start + 2 * half].split_at_mut(half);
            for (k, (u, v)) in lo.iter_mut().zip(hi.iter_mut()).enumerate() {
                let z = mul_mod(*v, roots[k * stride]);
                let a = *u;
                *u = add_mod(a, z);
                *v = sub_mod(a, z);
            }
        }
        half *= 2;
    }
}

/// Bit-reversal permutation.
fn bit_reverse_permutation(data: &mut [u64]) {
    let n = data.len();
    let mut j = 0;
    for i in 1..n {
        let mut bit = n >> 1;
        while j & bit != 0 {
            j ^= bit;
            bit >>= 1;
        }
        j ^= bit;
        if i < j {
            data.swap(i, j);
        }
    }
}
