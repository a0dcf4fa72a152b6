//! Public multiplication API.
//!
//! Routes to the transform pipeline for long operands and falls back to
//! schoolbook multiplication for short ones.

use tracing::{debug, trace};

use crate::convolution::{
    pointwise_multiply, pointwise_square, reassemble, select_params, split, ConvolutionParams,
};
use crate::roots::RootTable;
use crate::schoolbook::schoolbook_mul;
use crate::transform::{forward, inverse};

/// Shorter-operand length, in limbs, from which the transform is used.
pub const NTT_LIMB_THRESHOLD: usize = 32;

/// Multiply two magnitudes, using the transform for long operands.
///
/// The result has no most-significant zero limbs except for the single
/// limb of zero.
#[must_use]
pub fn mul(a: &[u32], b: &[u32]) -> Vec<u32> {
    if a.len().min(b.len()) >= NTT_LIMB_THRESHOLD {
        ntt_mul(a, b)
    } else {
        trimmed(schoolbook_mul(a, b))
    }
}

/// Square a magnitude, using the transform for long operands.
#[must_use]
pub fn sqr(a: &[u32]) -> Vec<u32> {
    if a.len() >= NTT_LIMB_THRESHOLD {
        ntt_sqr(a)
    } else {
        trimmed(schoolbook_mul(a, a))
    }
}

/// Multiply through the transform regardless of operand length.
///
/// Operands too long for a single `2^30`-point transform are multiplied by
/// schoolbook instead, so the product is always exact.
#[must_use]
pub fn ntt_mul(a: &[u32], b: &[u32]) -> Vec<u32> {
    if is_zero(a) || is_zero(b) {
        return vec![0];
    }
    let Some(params) = select_params(a.len(), b.len()) else {
        debug!(
            a_limbs = a.len(),
            b_limbs = b.len(),
            "operands exceed transform capacity, using schoolbook"
        );
        return trimmed(schoolbook_mul(a, b));
    };
    trace!(
        log_len = params.log_len,
        chunk_bits = params.chunk_bits,
        "ntt multiply"
    );

    let table = RootTable::new(params.log_len);
    let mut fa = split(a, params.chunk_bits, params.len());
    let mut fb = split(b, params.chunk_bits, params.len());

    forward(&mut fa, &table);
    forward(&mut fb, &table);
    pointwise_multiply(&mut fa, &fb);
    inverse(&mut fa, &table);

    trimmed(reassemble(&fa, params.chunk_bits))
}

/// Square through the transform with a single forward pass.
#[must_use]
pub fn ntt_sqr(a: &[u32]) -> Vec<u32> {
    if is_zero(a) {
        return vec![0];
    }
    let Some(params) = select_params(a.len(), a.len()) else {
        debug!(
            a_limbs = a.len(),
            "operand exceeds transform capacity, using schoolbook"
        );
        return trimmed(schoolbook_mul(a, a));
    };
    trace!(
        log_len = params.log_len,
        chunk_bits = params.chunk_bits,
        "ntt square"
    );

    let table = RootTable::new(params.log_len);
    let mut fa = split(a, params.chunk_bits, params.len());

    forward(&mut fa, &table);
    pointwise_square(&mut fa);
    inverse(&mut fa, &table);

    trimmed(reassemble(&fa, params.chunk_bits))
}

/// Transform parameters [`ntt_mul`] would use, if any.
#[must_use]
pub fn plan(a_limbs: usize, b_limbs: usize) -> Option<ConvolutionParams> {
    select_params(a_limbs, b_limbs)
}

fn is_zero(limbs: &[u32]) -> bool {
    limbs.iter().all(|&l| l == 0)
}

fn trimmed(mut limbs: Vec<u32>) -> Vec<u32> {
    while limbs.len() > 1 && limbs.last() == Some(&0) {
        limbs.pop();
    }
    if limbs.is_empty() {
        limbs.push(0);
    }
    limbs
}
