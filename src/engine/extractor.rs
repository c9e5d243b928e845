//! Orchestrator.
//!
//! `Extractor` owns nothing but borrowed inputs; every call is independent
//! and reads only the static tables, so it is safe to run concurrently.

use super::cascade;
use super::metrics::{Attempt, RunMetrics, RunResult, Stage};
use crate::rules::helpers::remove_first;
use crate::rules::{DATE_STRATEGIES, TIME_STRATEGIES, title};
use crate::{Context, ExtractError, Options, ParsedEvent};
use chrono::NaiveTime;
use std::time::Instant;
use tracing::debug;

pub struct Extractor<'a> {
    text: &'a str,
    context: &'a Context,
    options: &'a Options,
}

/// Optional trace collected by [`Extractor::run_with_metrics`].
#[derive(Default)]
struct Trace {
    attempts: Vec<Attempt>,
    date_span: Option<String>,
    metrics: RunMetrics,
}

impl<'a> Extractor<'a> {
    pub fn new(text: &'a str, context: &'a Context, options: &'a Options) -> Self {
        Self { text, context, options }
    }

    pub fn run(&self) -> Result<ParsedEvent, ExtractError> {
        self.extract(None)
    }

    pub fn run_with_metrics(&self) -> RunResult {
        let started = Instant::now();
        let mut trace = Trace::default();
        let event = self.extract(Some(&mut trace));
        trace.metrics.total = started.elapsed();

        RunResult { event, date_span: trace.date_span, attempts: trace.attempts, metrics: trace.metrics }
    }

    fn extract(&self, mut trace: Option<&mut Trace>) -> Result<ParsedEvent, ExtractError> {
        let text = self.text.trim();
        if text.is_empty() {
            return Err(ExtractError::EmptyInput);
        }

        let clock = Instant::now();
        let date = cascade::run(
            Stage::Date,
            DATE_STRATEGIES.as_slice(),
            text,
            self.context,
            self.options,
            trace.as_deref_mut().map(|t| &mut t.attempts),
        );
        let date_elapsed = clock.elapsed();
        if let Some(t) = trace.as_deref_mut() {
            t.metrics.date = date_elapsed;
        }
        let date = date.ok_or(ExtractError::NoDateFound)?;

        let clock = Instant::now();
        let post_date = remove_first(text, &date.span);
        let time = cascade::run(
            Stage::Time,
            TIME_STRATEGIES.as_slice(),
            &post_date,
            self.context,
            self.options,
            trace.as_deref_mut().map(|t| &mut t.attempts),
        );
        let time_elapsed = clock.elapsed();

        let clock = Instant::now();
        let (title, description) = title::normalize(text, &date.span, &self.options.default_title);
        let title_elapsed = clock.elapsed();

        if let Some(t) = trace.as_deref_mut() {
            t.metrics.time = time_elapsed;
            t.metrics.title = title_elapsed;
            t.date_span = Some(date.span.clone());
        }

        let event = ParsedEvent {
            title,
            start: date.date.and_time(time.unwrap_or(NaiveTime::MIN)),
            end: None,
            all_day: time.is_none(),
            description,
            offset: self.context.offset,
        };
        debug!(title = %event.title, start = %event.start, all_day = event.all_day, "extracted event");

        Ok(event)
    }
}
