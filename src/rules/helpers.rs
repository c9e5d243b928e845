//! Small conversions shared by the strategies.

use crate::Miss;
use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use regex::Captures;

/// ASCII or full-width decimal digit.
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit() || ('０'..='９').contains(&c)
}

/// Numeric value of a run of ASCII and/or full-width digits.
pub fn digits_value(text: &str) -> Option<u32> {
    if text.is_empty() {
        return None;
    }

    text.chars().try_fold(0u32, |acc, c| {
        let digit = match c {
            '0'..='9' => c as u32 - '0' as u32,
            '０'..='９' => c as u32 - '０' as u32,
            _ => return None,
        };
        acc.checked_mul(10)?.checked_add(digit)
    })
}

/// Value of capture group `idx`, or `NoMatch` when absent.
pub fn group_value(caps: &Captures<'_>, idx: usize) -> Result<u32, Miss> {
    caps.get(idx).and_then(|m| digits_value(m.as_str())).ok_or(Miss::NoMatch)
}

/// True when the character starting at byte `end` is a digit.
pub fn followed_by_digit(text: &str, end: usize) -> bool {
    text.get(end..).and_then(|rest| rest.chars().next()).is_some_and(is_digit)
}

pub fn calendar_date(year: i32, month: u32, day: u32) -> Result<NaiveDate, Miss> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or(Miss::InvalidCalendarDate { year, month, day })
}

pub fn shift_days(date: NaiveDate, days: i64) -> Result<NaiveDate, Miss> {
    date.checked_add_signed(Duration::days(days)).ok_or(Miss::DateOutOfRange { days })
}

/// Next occurrence of `target` strictly after `today`.
///
/// A weekday equal to today's resolves one week ahead.
pub fn next_weekday(today: NaiveDate, target: Weekday) -> Result<NaiveDate, Miss> {
    let mut ahead = target.num_days_from_monday() as i64 - today.weekday().num_days_from_monday() as i64;
    if ahead <= 0 {
        ahead += 7;
    }
    shift_days(today, ahead)
}

/// Month/day in `now`'s year, advanced one year when its midnight is
/// strictly before `now`.
///
/// Today is kept only when `now` is exactly midnight. If the advanced date
/// does not exist (29 Feb into a common year) the date is rejected rather
/// than clamped.
pub fn roll_forward(now: NaiveDateTime, month: u32, day: u32) -> Result<NaiveDate, Miss> {
    let candidate = calendar_date(now.year(), month, day)?;
    if candidate.and_time(NaiveTime::MIN) < now { calendar_date(now.year() + 1, month, day) } else { Ok(candidate) }
}

pub fn time_of_day(hour: u32, minute: u32) -> Result<NaiveTime, Miss> {
    if hour >= 24 || minute >= 60 {
        return Err(Miss::InvalidTimeComponent { hour, minute });
    }
    NaiveTime::from_hms_opt(hour, minute, 0).ok_or(Miss::InvalidTimeComponent { hour, minute })
}

/// `text` without the first occurrence of `needle`; unchanged for an empty needle.
pub fn remove_first(text: &str, needle: &str) -> String {
    if needle.is_empty() { text.to_string() } else { text.replacen(needle, "", 1) }
}
