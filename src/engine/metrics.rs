//! Run trace and timings.
//!
//! Collected only on the verbose path
//! ([`Extractor::run_with_metrics`](super::Extractor::run_with_metrics)); the
//! plain path never allocates an attempt list.

use crate::{ExtractError, Miss, ParsedEvent};
use std::fmt;
use std::time::Duration;

/// Which cascade an [`Attempt`] belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Date,
    Time,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Date => f.write_str("date"),
            Stage::Time => f.write_str("time"),
        }
    }
}

/// Result of running one strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The strategy produced a value (rendered for display).
    Matched(String),
    Missed(Miss),
}

/// One strategy invocation, in cascade order.
#[derive(Debug, Clone)]
pub struct Attempt {
    pub stage: Stage,
    pub strategy: &'static str,
    pub outcome: Outcome,
    pub elapsed: Duration,
}

impl Attempt {
    pub fn matched(&self) -> bool {
        matches!(self.outcome, Outcome::Matched(_))
    }
}

#[derive(Debug, Default, Clone)]
pub struct RunMetrics {
    /// Total elapsed time for the run.
    pub total: Duration,
    /// Time spent in the date cascade.
    pub date: Duration,
    /// Time spent in the time cascade.
    pub time: Duration,
    /// Time spent normalizing the title.
    pub title: Duration,
}

/// Extractor output bundled with its trace.
#[derive(Debug, Clone)]
pub struct RunResult {
    pub event: Result<ParsedEvent, ExtractError>,
    /// Span consumed by the winning date strategy, if any.
    pub date_span: Option<String>,
    pub attempts: Vec<Attempt>,
    pub metrics: RunMetrics,
}
