use crate::engine::{self, Attempt, RunMetrics};
use crate::ExtractError;
use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, NaiveTime, Offset, TimeDelta, TimeZone, Utc};
use std::time::Duration;

/// Title used when nothing but date/time text was found.
pub const DEFAULT_TITLE: &str = "New Event";

/// Japanese equivalent of [`DEFAULT_TITLE`].
pub const JAPANESE_DEFAULT_TITLE: &str = "新しい予定";

/// Parsing context.
///
/// Holds the reference "now" every relative decision is computed against.
/// Callers sample the clock once and pass the value in; nothing inside the
/// engine reads the system clock.
#[derive(Debug, Clone)]
pub struct Context {
    /// Reference datetime used to resolve relative expressions.
    pub reference_time: NaiveDateTime,
    /// Offset attached to produced events. Passed through untouched.
    pub offset: FixedOffset,
}

impl Context {
    /// Context for `reference_time` with a UTC offset.
    pub fn new(reference_time: NaiveDateTime) -> Self {
        Self { reference_time, offset: Utc.fix() }
    }

    pub fn with_offset(mut self, offset: FixedOffset) -> Self {
        self.offset = offset;
        self
    }

    /// Calendar date of the reference time.
    pub fn today(&self) -> NaiveDate {
        self.reference_time.date()
    }
}

impl Default for Context {
    fn default() -> Self {
        if cfg!(test) {
            let date = NaiveDate::from_ymd_opt(2013, 2, 12).unwrap();
            let time = NaiveTime::from_hms_opt(0, 0, 0).unwrap();
            let offset = FixedOffset::east_opt(9 * 3600).unwrap();
            Self { reference_time: NaiveDateTime::new(date, time), offset }
        } else {
            let now = Local::now();
            Self { reference_time: now.naive_local(), offset: now.offset().fix() }
        }
    }
}

/// How the relative-day and weekday scans choose between several tokens
/// present in the same text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TokenOrder {
    /// The token that appears first in the text wins; at the same position
    /// the longer token wins.
    #[default]
    Leftmost,
    /// The token listed first in its table wins, wherever it appears.
    Table,
}

/// Field order for ambiguous numeric dates handed to the fallback parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dialect {
    /// `03/04` is March 4th.
    #[default]
    MonthFirst,
    /// `03/04` is April 3rd.
    DayFirst,
}

impl From<Dialect> for chrono_english::Dialect {
    fn from(dialect: Dialect) -> Self {
        match dialect {
            Dialect::MonthFirst => chrono_english::Dialect::Us,
            Dialect::DayFirst => chrono_english::Dialect::Uk,
        }
    }
}

/// Options that affect extraction.
#[derive(Debug, Clone)]
pub struct Options {
    /// Title used when stripping leaves nothing.
    pub default_title: String,
    pub token_order: TokenOrder,
    /// Enables the `chrono-english` fallback as the last date strategy.
    pub fallback: bool,
    pub dialect: Dialect,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            default_title: DEFAULT_TITLE.to_string(),
            token_order: TokenOrder::default(),
            fallback: true,
            dialect: Dialect::default(),
        }
    }
}

impl Options {
    /// Defaults with the Japanese placeholder title.
    pub fn japanese() -> Self {
        Self { default_title: JAPANESE_DEFAULT_TITLE.to_string(), ..Self::default() }
    }
}

/// A candidate calendar event.
///
/// When `all_day` is set the time of `start` is midnight. `description` is
/// only filled when the title fell back to the default, and then holds the
/// whole input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedEvent {
    pub title: String,
    pub start: NaiveDateTime,
    /// Never set by the extractor; downstream editors may fill it in.
    pub end: Option<NaiveDateTime>,
    pub all_day: bool,
    pub description: String,
    /// Offset carried over from the [`Context`].
    pub offset: FixedOffset,
}

impl ParsedEvent {
    /// `end` if set, otherwise one hour after `start` for timed events and
    /// `start` itself (same date) for all-day events.
    pub fn effective_end(&self) -> NaiveDateTime {
        match self.end {
            Some(end) => end,
            None if self.all_day => self.start,
            None => self.start + TimeDelta::hours(1),
        }
    }

    pub fn start_with_offset(&self) -> Option<DateTime<FixedOffset>> {
        self.offset.from_local_datetime(&self.start).single()
    }

    pub fn effective_end_with_offset(&self) -> Option<DateTime<FixedOffset>> {
        self.offset.from_local_datetime(&self.effective_end()).single()
    }
}

/// Verbose trace returned by [`parse_verbose_with`].
#[derive(Debug, Clone)]
pub struct ParseDetails {
    /// Total elapsed time.
    pub total: Duration,
    /// Time spent in the date cascade.
    pub date_stage: Duration,
    /// Time spent in the time cascade.
    pub time_stage: Duration,
    /// Time spent normalizing the title.
    pub title_stage: Duration,
    /// Every strategy considered, date cascade first.
    pub attempts: Vec<Attempt>,
    /// Span consumed by the winning date strategy.
    pub date_span: Option<String>,
}

/// Result from [`parse_verbose_with`].
#[derive(Debug, Clone)]
pub struct ParseResultVerbose {
    pub text: String,
    pub result: Result<ParsedEvent, ExtractError>,
    pub details: ParseDetails,
}

impl ParseResultVerbose {
    pub fn event(&self) -> Option<&ParsedEvent> {
        self.result.as_ref().ok()
    }
}

/// Extract an event from `text` using the current time and default options.
///
/// # Example
/// ```
/// use clipevent::parse;
///
/// let event = parse("2030年1月2日 新年会").unwrap();
/// assert_eq!(event.title, "新年会");
/// assert!(event.all_day);
/// ```
pub fn parse(text: &str) -> Option<ParsedEvent> {
    parse_with(text, &Context::default(), &Options::default())
}

/// Extract an event from `text` against the provided `context`/`options`.
///
/// Returns `None` for empty input or when no date strategy matches.
pub fn parse_with(text: &str, context: &Context, options: &Options) -> Option<ParsedEvent> {
    try_parse_with(text, context, options).ok()
}

/// Like [`parse_with`] but says why nothing was extracted.
pub fn try_parse_with(text: &str, context: &Context, options: &Options) -> Result<ParsedEvent, ExtractError> {
    engine::Extractor::new(text, context, options).run()
}

/// Extract with a trace of every strategy attempt and per-stage timings.
pub fn parse_verbose_with(text: &str, context: &Context, options: &Options) -> ParseResultVerbose {
    let run = engine::Extractor::new(text, context, options).run_with_metrics();
    let RunMetrics { total, date, time, title } = run.metrics;

    ParseResultVerbose {
        text: text.to_string(),
        result: run.event,
        details: ParseDetails {
            total,
            date_stage: date,
            time_stage: time,
            title_stage: title,
            attempts: run.attempts,
            date_span: run.date_span,
        },
    }
}
