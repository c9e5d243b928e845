//! Trigger scanning (input pre-classification).
//!
//! Inspects the raw text once and produces a [`BucketMask`] of coarse
//! features. Each strategy declares the buckets it needs; when one is missing
//! the cascade skips the strategy without running its regex.
//!
//! ## Design notes
//!
//! - This is a *heuristic* scan. False positives are fine because the
//!   strategy still has to match its full pattern.
//! - False negatives are not: a bucket must be set whenever the strategies
//!   that require it could possibly match. In particular full-width digits
//!   count as digits.

use crate::rules::helpers::is_digit;

bitflags::bitflags! {
    /// Coarse buckets for fast input classification.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct BucketMask: u32 {
        /// ASCII or full-width digits.
        const HAS_DIGITS   = 1 << 0;
        /// Any of 年, 月, 日.
        const DATE_MARKERS = 1 << 1;
        /// `/` or `-` between numbers.
        const SEPARATORS   = 1 << 2;
        /// `:` or 時.
        const TIME_MARKERS = 1 << 3;
        /// 曜, shared by every weekday token.
        const WEEKDAYISH   = 1 << 4;
    }
}

impl BucketMask {
    /// Scan `input` for coarse buckets.
    pub fn scan(input: &str) -> Self {
        let mut buckets = BucketMask::empty();

        for c in input.chars() {
            match c {
                '年' | '月' | '日' => buckets |= BucketMask::DATE_MARKERS,
                '/' | '-' => buckets |= BucketMask::SEPARATORS,
                ':' | '時' => buckets |= BucketMask::TIME_MARKERS,
                '曜' => buckets |= BucketMask::WEEKDAYISH,
                c if is_digit(c) => buckets |= BucketMask::HAS_DIGITS,
                _ => {}
            }
        }

        buckets
    }
}
