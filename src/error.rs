//! Error taxonomy.
//!
//! Nothing here escapes [`parse_with`](crate::parse_with) as a failure: a
//! [`Miss`] only moves a cascade on to its next strategy, and an
//! [`ExtractError`] is how [`try_parse_with`](crate::try_parse_with) spells
//! "nothing to extract".

use thiserror::Error;

/// Why a whole extraction produced no event.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    #[error("input is empty")]
    EmptyInput,

    /// Every date strategy missed, including the fallback.
    #[error("no date found in input")]
    NoDateFound,
}

/// Why a single strategy did not produce a value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Miss {
    #[error("pattern not present")]
    NoMatch,

    /// The cheap input scan ruled the strategy out before its pattern ran.
    #[error("skipped by input scan")]
    Gated,

    /// Disabled through [`Options`](crate::Options).
    #[error("disabled by options")]
    Disabled,

    #[error("invalid calendar date {year:04}-{month:02}-{day:02}")]
    InvalidCalendarDate { year: i32, month: u32, day: u32 },

    /// Shifting the reference date left chrono's representable range.
    #[error("date shift of {days} days out of range")]
    DateOutOfRange { days: i64 },

    #[error("time component out of range {hour:02}:{minute:02}")]
    InvalidTimeComponent { hour: u32, minute: u32 },

    #[error("fallback parser found no date")]
    FallbackParseFailure,
}
