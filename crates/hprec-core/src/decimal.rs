//! Decimal text conversion.
//!
//! Both directions go through an intermediate array of base-`10^9` groups
//! and convert it with repeated long division, one output digit per pass:
//! `O(n^2)` digit operations for an `n`-limb value.

use std::fmt;
use std::str::FromStr;

use crate::bigint::BigInt;
use crate::constants::{DECIMAL_GROUP_BASE, DECIMAL_GROUP_DIGITS, LIMB_BITS};
use crate::error::{BigIntError, Radix};
use crate::limb::trim;

impl BigInt {
    /// Read a numeral from the front of `text`, returning the value and the
    /// unconsumed remainder.
    ///
    /// Leading ASCII whitespace is skipped, then one optional `+` or `-`,
    /// then the maximal run of decimal digits. Leading zeros are accepted.
    /// Reading stops at the first non-digit.
    pub fn parse_prefix(text: &str, radix: Radix) -> Result<(Self, &str), BigIntError> {
        if radix != Radix::Decimal {
            return Err(BigIntError::UnsupportedRadix(radix));
        }
        let text = text.trim_start_matches(|c: char| c.is_ascii_whitespace());
        let (negative, unsigned) = match text.as_bytes().first() {
            Some(b'-') => (true, &text[1..]),
            Some(b'+') => (false, &text[1..]),
            _ => (false, text),
        };
        let len = unsigned.bytes().take_while(u8::is_ascii_digit).count();
        if len == 0 {
            return Err(BigIntError::NoDigits);
        }
        let (digits, rest) = unsigned.split_at(len);
        let value = Self::from_limbs(negative, decimal_to_limbs(digits.as_bytes()));
        Ok((value, rest))
    }

    /// Extract a numeral from the front of `input` into `self`, advancing
    /// `input` past it.
    ///
    /// On [`BigIntError::NoDigits`] the target becomes zero and `input` is
    /// left untouched. An unsupported radix leaves both untouched.
    pub fn read_from(&mut self, input: &mut &str, radix: Radix) -> Result<(), BigIntError> {
        match Self::parse_prefix(input, radix) {
            Ok((value, rest)) => {
                *self = value;
                *input = rest;
                Ok(())
            }
            Err(err) => {
                if err == BigIntError::NoDigits {
                    *self = Self::zero();
                }
                Err(err)
            }
        }
    }

    /// Parse a complete numeral in the given radix.
    pub fn from_str_radix(text: &str, radix: Radix) -> Result<Self, BigIntError> {
        let (value, rest) = Self::parse_prefix(text, radix)?;
        if !rest.is_empty() {
            return Err(BigIntError::TrailingInput {
                offset: text.len() - rest.len(),
            });
        }
        Ok(value)
    }

    /// Format in the given radix.
    pub fn to_string_radix(&self, radix: Radix) -> Result<String, BigIntError> {
        match radix {
            Radix::Decimal => Ok(self.to_string()),
            other => Err(BigIntError::UnsupportedRadix(other)),
        }
    }
}

impl FromStr for BigInt {
    type Err = BigIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_radix(s, Radix::Decimal)
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.negative, "", &limbs_to_decimal(&self.limbs))
    }
}

/// Convert ASCII decimal digits, most significant first, into limbs.
fn decimal_to_limbs(digits: &[u8]) -> Vec<u32> {
    let start = digits.iter().position(|&d| d != b'0').unwrap_or(digits.len());
    let digits = &digits[start..];
    if digits.is_empty() {
        return vec![0];
    }

    // Most significant group takes the remainder so later groups are full.
    let head = match digits.len() % DECIMAL_GROUP_DIGITS {
        0 => DECIMAL_GROUP_DIGITS,
        r => r,
    };
    let mut groups = Vec::with_capacity(digits.len() / DECIMAL_GROUP_DIGITS + 1);
    groups.push(group_value(&digits[..head]));
    groups.extend(
        digits[head..]
            .chunks_exact(DECIMAL_GROUP_DIGITS)
            .map(group_value),
    );
    groups_to_limbs(groups)
}

fn group_value(chunk: &[u8]) -> u32 {
    chunk
        .iter()
        .fold(0, |acc, &d| acc * 10 + u32::from(d - b'0'))
}

/// Divide the base-`10^9` group array (most significant first) by `2^32`
/// repeatedly; each pass leaves the quotient in place and emits the
/// remainder as the next limb.
#[allow(clippy::cast_possible_truncation)]
fn groups_to_limbs(mut groups: Vec<u32>) -> Vec<u32> {
    let mask = (1u64 << LIMB_BITS) - 1;
    let mut limbs = Vec::with_capacity(groups.len());
    let mut head = 0;
    while head < groups.len() {
        let mut rem = 0u64;
        for group in &mut groups[head..] {
            let cur = rem * DECIMAL_GROUP_BASE + u64::from(*group);
            *group = (cur >> LIMB_BITS) as u32;
            rem = cur & mask;
        }
        limbs.push(rem as u32);
        while head < groups.len() && groups[head] == 0 {
            head += 1;
        }
    }
    trim(&mut limbs);
    limbs
}

/// Divide the limb array by `10^9` repeatedly, most significant limb first,
/// emitting base-`10^9` groups least significant first.
#[allow(clippy::cast_possible_truncation)]
fn limbs_to_groups(limbs: &[u32]) -> Vec<u32> {
    let mut work = limbs.to_vec();
    let mut groups = Vec::with_capacity(work.len() * 10 / 9 + 1);
    let mut top = work.len();
    while top > 0 && work[top - 1] == 0 {
        top -= 1;
    }
    while top > 0 {
        let mut rem = 0u64;
        for limb in work[..top].iter_mut().rev() {
            let cur = (rem << LIMB_BITS) | u64::from(*limb);
            *limb = (cur / DECIMAL_GROUP_BASE) as u32;
            rem = cur % DECIMAL_GROUP_BASE;
        }
        groups.push(rem as u32);
        while top > 0 && work[top - 1] == 0 {
            top -= 1;
        }
    }
    groups
}

/// Decimal digits of a magnitude, without sign.
fn limbs_to_decimal(limbs: &[u32]) -> String {
    let groups = limbs_to_groups(limbs);
    let Some((first, rest)) = groups.split_last() else {
        return "0".to_string();
    };
    let mut out = String::with_capacity(groups.len() * DECIMAL_GROUP_DIGITS);
    out.push_str(&first.to_string());
    for group in rest.iter().rev() {
        out.push_str(&format!("{group:09}"));
    }
    out
}
