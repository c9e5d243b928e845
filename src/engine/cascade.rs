//! First-success strategy driver.
//!
//! Both the date and the time cascade are an ordered slice of [`Strategy`]
//! values sharing one signature. The driver tries them in slice order and
//! stops at the first `Ok`; every `Err(Miss)` is a normal fallthrough.
//!
//! ```text
//! strategies: [s0, s1, s2, ...]
//!               │   │   │
//!   gated? ─────┤   │   │        (bucket mask missing → Miss::Gated)
//!   run ────────┘   │   │
//!     Err(miss) ────┘   │        (record + try next)
//!     Ok(value) ───────────────▶ return
//! ```

use super::metrics::{Attempt, Outcome, Stage};
use super::trigger::BucketMask;
use crate::{Context, Options, Strategy};
use std::fmt::Display;
use std::time::{Duration, Instant};
use tracing::{debug, trace};

/// Run `strategies` over `text` and return the first produced value.
///
/// When `attempts` is provided every strategy that was considered is
/// appended to it, including the winner.
pub(crate) fn run<T: Display>(
    stage: Stage,
    strategies: &[Strategy<T>],
    text: &str,
    context: &Context,
    options: &Options,
    mut attempts: Option<&mut Vec<Attempt>>,
) -> Option<T> {
    let buckets = BucketMask::scan(text);

    for strategy in strategies {
        let started = attempts.is_some().then(Instant::now);
        let result =
            if buckets.contains(strategy.buckets) { (strategy.run)(text, context, options) } else { Err(crate::Miss::Gated) };
        let elapsed = started.map(|s| s.elapsed()).unwrap_or(Duration::ZERO);

        let outcome = match result {
            Ok(value) => {
                debug!(%stage, strategy = strategy.name, %value, "strategy matched");
                if let Some(sink) = attempts.as_deref_mut() {
                    sink.push(Attempt {
                        stage,
                        strategy: strategy.name,
                        outcome: Outcome::Matched(value.to_string()),
                        elapsed,
                    });
                }
                return Some(value);
            }
            Err(miss) => {
                trace!(%stage, strategy = strategy.name, %miss, "strategy missed");
                Outcome::Missed(miss)
            }
        };

        if let Some(sink) = attempts.as_deref_mut() {
            sink.push(Attempt { stage, strategy: strategy.name, outcome, elapsed });
        }
    }

    debug!(%stage, "no strategy matched");
    None
}
