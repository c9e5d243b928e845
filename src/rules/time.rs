//! Time-of-day strategies, in priority order.

use super::helpers::{followed_by_digit, group_value, time_of_day};
use crate::engine::BucketMask;
use crate::{Context, Miss, Options, TimeStrategy};
use chrono::NaiveTime;
use regex::{Captures, Regex};

pub fn strategies() -> Vec<TimeStrategy> {
    vec![rule_clock_time(), rule_hour_marker()]
}

/// `14:30`, `14時30分`, `14時30`
pub(crate) fn clock_time_regex() -> &'static Regex {
    regex!(r"([0-9０-９]{1,2})[:時]([0-9０-９]{2})分?")
}

/// `14時` candidates; callers must also reject those followed by a digit.
fn hour_marker_regex() -> &'static Regex {
    regex!(r"([0-9０-９]{1,2})時")
}

/// `<hh>時` occurrences that are not immediately followed by another digit.
pub(crate) fn hour_markers(text: &str) -> impl Iterator<Item = Captures<'_>> {
    hour_marker_regex().captures_iter(text).filter(move |caps| !followed_by_digit(text, caps.get(0).map_or(0, |m| m.end())))
}

pub fn rule_clock_time() -> TimeStrategy {
    strategy! {
        name: "<hh>:<mm>",
        buckets: BucketMask::HAS_DIGITS | BucketMask::TIME_MARKERS,
        run: clock_time,
    }
}

fn clock_time(text: &str, _: &Context, _: &Options) -> Result<NaiveTime, Miss> {
    let caps = clock_time_regex().captures(text).ok_or(Miss::NoMatch)?;
    time_of_day(group_value(&caps, 1)?, group_value(&caps, 2)?)
}

pub fn rule_hour_marker() -> TimeStrategy {
    strategy! {
        name: "<hh>時",
        buckets: BucketMask::HAS_DIGITS | BucketMask::TIME_MARKERS,
        run: hour_marker,
    }
}

fn hour_marker(text: &str, _: &Context, _: &Options) -> Result<NaiveTime, Miss> {
    let caps = hour_markers(text).next().ok_or(Miss::NoMatch)?;
    time_of_day(group_value(&caps, 1)?, 0)
}
