use std::ops::RangeInclusive;

use serde::Serialize;

use crate::model::CompositionPolicy;

/// Allowed number of output files per batch.
pub const FILES_RANGE: RangeInclusive<u32> = 1..=5;
/// Allowed number of households per file.
pub const HOUSEHOLDS_RANGE: RangeInclusive<u32> = 1..=10;

/// A batch generation request with counts already clamped to their bounds.
///
/// Out-of-range counts are never rejected: they are pulled to the nearest
/// bound, and unparseable input falls back to `1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GenerationRequest {
    num_files: u32,
    num_households: u32,
    policy: CompositionPolicy,
}

impl GenerationRequest {
    pub fn new(num_files: i64, num_households: i64, policy: CompositionPolicy) -> Self {
        Self {
            num_files: clamp_count(num_files, &FILES_RANGE),
            num_households: clamp_count(num_households, &HOUSEHOLDS_RANGE),
            policy,
        }
    }

    /// Build a request from raw text inputs, as typed by a user.
    pub fn from_inputs(num_files: &str, num_households: &str, policy: CompositionPolicy) -> Self {
        Self::new(
            parse_count(num_files).unwrap_or(1),
            parse_count(num_households).unwrap_or(1),
            policy,
        )
    }

    pub fn num_files(&self) -> u32 {
        self.num_files
    }

    pub fn num_households(&self) -> u32 {
        self.num_households
    }

    pub fn policy(&self) -> CompositionPolicy {
        self.policy
    }
}

/// Clamp a count to the nearest bound of `range`.
pub fn clamp_count(value: i64, range: &RangeInclusive<u32>) -> u32 {
    let min = i64::from(*range.start());
    let max = i64::from(*range.end());
    // Bounds are u32, so the clamped value always fits.
    value.clamp(min, max) as u32
}

/// Parse the leading integer of `input`.
///
/// Leading whitespace and a sign are accepted and parsing stops at the first
/// non-digit, so `"7 households"` yields `7` and `"2.9"` yields `2`. A `0x`
/// prefix switches to hexadecimal (`"0x5"` yields `5`). Returns `None` when
/// no digit is found.
pub fn parse_count(input: &str) -> Option<i64> {
    let trimmed = input.trim_start();
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let (radix, digits) = match unsigned.get(..2) {
        Some("0x" | "0X") => (16, &unsigned[2..]),
        _ => (10, unsigned),
    };

    let mut value: i64 = 0;
    let mut seen = false;
    for ch in digits.chars() {
        let Some(digit) = ch.to_digit(radix) else {
            break;
        };
        seen = true;
        value = value
            .saturating_mul(i64::from(radix))
            .saturating_add(i64::from(digit));
    }

    if !seen {
        return None;
    }
    Some(if negative { -value } else { value })
}
