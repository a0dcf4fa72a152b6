//! Splitting limbs into transform coefficients and carrying them back.
//!
//! A radix-`2^32` limb cannot be fed to the transform directly: `MOD` is
//! below `2^32`, and even a single limb product overflows the field. Limbs
//! are instead split into `chunk_bits`-wide coefficients, narrow enough that
//! every coefficient of the exact convolution stays below `MOD`. The inverse
//! transform then yields the true convolution, which a carry pass folds back
//! into radix-`2^32` limbs.

use crate::modular::{mul_mod, MAX_LOG_LEN, MOD};

/// Candidate chunk widths, widest first. Each divides 32.
const CHUNK_WIDTHS: [u32; 4] = [8, 4, 2, 1];

/// Parameters of a single transform multiplication.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvolutionParams {
    /// Bits per transform coefficient.
    pub chunk_bits: u32,
    /// `log2` of the transform length.
    pub log_len: u32,
}

impl ConvolutionParams {
    /// Transform length.
    pub(crate) fn len(self) -> usize {
        1 << self.log_len
    }
}

/// Select the widest chunk whose convolution cannot alias modulo `MOD`.
///
/// A product coefficient sums at most `min(len_a, len_b)` terms, each below
/// `(2^w - 1)^2`. The transform length is the smallest power of two that is
/// at least twice the longer operand. Returns `None` when no width fits in a
/// `2^30`-point transform.
#[must_use]
pub fn select_params(a_limbs: usize, b_limbs: usize) -> Option<ConvolutionParams> {
    for chunk_bits in CHUNK_WIDTHS {
        let per_limb = (32 / chunk_bits) as usize;
        let len_a = a_limbs.checked_mul(per_limb)?;
        let len_b = b_limbs.checked_mul(per_limb)?;

        let max_chunk = (1u64 << chunk_bits) - 1;
        let terms = u64::try_from(len_a.min(len_b)).ok()?;
        if terms.saturating_mul(max_chunk * max_chunk) >= MOD {
            continue;
        }

        let len = len_a.max(len_b).checked_mul(2)?.checked_next_power_of_two()?;
        let log_len = len.trailing_zeros();
        if log_len > MAX_LOG_LEN {
            return None;
        }
        return Some(ConvolutionParams {
            chunk_bits,
            log_len,
        });
    }
    None
}

/// Split limbs into `chunk_bits`-wide coefficients, zero-padded to `len`.
#[must_use]
pub fn split(limbs: &[u32], chunk_bits: u32, len: usize) -> Vec<u64> {
    let mask = (1u32 << chunk_bits) - 1;
    let mut coeffs = Vec::with_capacity(len);
    for &limb in limbs {
        for i in 0..32 / chunk_bits {
            coeffs.push(u64::from((limb >> (i * chunk_bits)) & mask));
        }
    }
    coeffs.resize(len, 0);
    coeffs
}

/// Pointwise product in the transform domain, written into `a`.
pub fn pointwise_multiply(a: &mut [u64], b: &[u64]) {
    assert_eq!(a.len(), b.len());
    for (x, y) in a.iter_mut().zip(b) {
        *x = mul_mod(*x, *y);
    }
}

/// Pointwise square in the transform domain.
pub fn pointwise_square(a: &mut [u64]) {
    for x in a.iter_mut() {
        *x = mul_mod(*x, *x);
    }
}

/// Fold exact convolution coefficients back into radix-`2^32` limbs.
///
/// Coefficient `i` carries weight `2^(i * chunk_bits)`. The output may hold
/// most-significant zero limbs; callers trim.
#[must_use]
pub fn reassemble(coeffs: &[u64], chunk_bits: u32) -> Vec<u32> {
    let mask = (1u64 << chunk_bits) - 1;
    let mut packer = LimbPacker::new(chunk_bits, coeffs.len());
    let mut carry = 0u64;
    for &coeff in coeffs {
        let value = carry + coeff;
        packer.push(value & mask);
        carry = value >> chunk_bits;
    }
    while carry > 0 {
        packer.push(carry & mask);
        carry >>= chunk_bits;
    }
    packer.finish()
}

/// Packs fixed-width chunks into `u32` limbs, least significant first.
struct LimbPacker {
    limbs: Vec<u32>,
    current: u32,
    filled: u32,
    chunk_bits: u32,
}

impl LimbPacker {
    fn new(chunk_bits: u32, chunks: usize) -> Self {
        Self {
            limbs: Vec::with_capacity(chunks / (32 / chunk_bits) as usize + 2),
            current: 0,
            filled: 0,
            chunk_bits,
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    fn push(&mut self, chunk: u64) {
        self.current |= (chunk as u32) << self.filled;
        self.filled += self.chunk_bits;
        if self.filled == 32 {
            self.limbs.push(self.current);
            self.current = 0;
            self.filled = 0;
        }
    }

    fn finish(mut self) -> Vec<u32> {
        if self.filled > 0 {
            self.limbs.push(self.current);
        }
        self.limbs
    }
}
