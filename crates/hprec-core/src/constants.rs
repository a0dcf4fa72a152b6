//! Numeric constants of the limb representation.

/// Weight between adjacent limbs.
pub const BASE: u64 = 1 << 32;

/// Bits per limb.
pub const LIMB_BITS: u32 = 32;

/// Radix of the intermediate decimal groups used by text conversion.
///
/// `10^9` is the largest power of ten below `2^30`, so a group fits a `u32`
/// and `group * BASE` fits a `u64`.
pub const DECIMAL_GROUP_BASE: u64 = 1_000_000_000;

/// Decimal digits per group.
pub const DECIMAL_GROUP_DIGITS: usize = 9;
