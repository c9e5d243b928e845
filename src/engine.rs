//! Extraction engine.
//!
//! The engine turns one snippet of text into at most one [`ParsedEvent`]
//! by running two strategy cascades and a title pass.
//!
//! ## How the parts work together
//!
//! ```text
//! text ── trim ──┬─ empty ──────────────────────────────▶ EmptyInput
//!                │
//!                v
//!       BucketMask::scan (trigger.rs)
//!                │
//!                v
//!       date cascade (cascade.rs over rules::date)
//!         relative ▸ weekday ▸ 年月日 ▸ 月日 ▸ y/m/d ▸ m/d ▸ fallback
//!                │ first hit wins ─── none ───────────▶ NoDateFound
//!                v
//!       time cascade on the post-date text (rules::time)
//!         hh:mm / hh時mm分 ▸ hh時
//!                │
//!                v
//!       title normalizer (rules::title)
//!                │
//!                v
//!           ParsedEvent
//! ```
//!
//! ## Responsibilities by module
//!
//! - `trigger.rs`: a cheap scan of the input that produces coarse buckets
//!   ("has digits", "has 年月日") so strategies that cannot match are skipped.
//! - `cascade.rs`: the generic first-success driver shared by the date and
//!   time cascades; records an [`Attempt`] per strategy when tracing.
//! - `extractor.rs`: the orchestrator that wires the cascades and the title
//!   normalizer together.
//! - `metrics.rs`: the attempt trace and stage timings surfaced by
//!   [`parse_verbose_with`](crate::parse_verbose_with).
//!
//! ## Debugging
//!
//! The engine emits `tracing` events: `debug` for winning strategies and the
//! final event, `trace` for every rejected strategy.
//!
//! [`ParsedEvent`]: crate::ParsedEvent

#[path = "engine/cascade.rs"]
mod cascade;
#[path = "engine/extractor.rs"]
mod extractor;
#[path = "engine/metrics.rs"]
mod metrics;
#[path = "engine/trigger.rs"]
mod trigger;

pub use extractor::Extractor;
pub use metrics::{Attempt, Outcome, RunMetrics, Stage};
pub use trigger::BucketMask;
