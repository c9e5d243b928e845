extern crate self as clipevent;

use chrono::{NaiveDate, NaiveTime};
use std::fmt;

#[macro_use]
mod macros;
mod api;
mod engine;
mod error;
mod rules;

pub use api::{
    Context, DEFAULT_TITLE, Dialect, JAPANESE_DEFAULT_TITLE, Options, ParseDetails, ParseResultVerbose, ParsedEvent, TokenOrder,
    parse, parse_verbose_with, parse_with, try_parse_with,
};
pub use engine::{Attempt, Outcome, Stage};
pub use error::{ExtractError, Miss};

use crate::engine::BucketMask;

// --- Internal types ---------------------------------------------------------

/// A date recognized by one of the date strategies.
///
/// `span` is the exact substring the strategy consumed; it is empty when the
/// strategy cannot point at literal text (the fuzzy fallback).
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DateMatch {
    pub date: NaiveDate,
    pub span: String,
}

impl fmt::Display for DateMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.span.is_empty() { write!(f, "{}", self.date) } else { write!(f, "{} \"{}\"", self.date, self.span) }
    }
}

/// Signature shared by every recognition strategy.
///
/// Time strategies receive the same arguments as date strategies so both
/// cascades run through one driver; they simply ignore the context.
pub(crate) type Production<T> = fn(&str, &Context, &Options) -> Result<T, Miss>;

/// One "try-match" unit of a cascade: a name, the coarse input buckets it
/// needs, and the function that either produces a value or explains the miss.
pub(crate) struct Strategy<T> {
    pub name: &'static str,
    /// Every bucket in this mask must be present in the input, otherwise the
    /// strategy is skipped without running its pattern.
    pub buckets: BucketMask,
    pub run: Production<T>,
}

impl<T> fmt::Debug for Strategy<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Strategy")
            .field("name", &self.name)
            .field("buckets", &self.buckets)
            .field("run", &"<function>")
            .finish()
    }
}

pub(crate) type DateStrategy = Strategy<DateMatch>;
pub(crate) type TimeStrategy = Strategy<NaiveTime>;
