//! Date strategies, in priority order.
//!
//! Each strategy reads the whole (trimmed) text and either returns a date
//! plus the span it consumed or explains why it missed. Pattern strategies
//! look at the *first* lexical match only; when that match is not a real
//! calendar date the cascade moves on instead of searching further.

use super::helpers::{calendar_date, group_value, next_weekday, roll_forward, shift_days};
use super::lexicon::{RELATIVE_DATES, WEEKDAYS};
use crate::engine::BucketMask;
use crate::{Context, DateMatch, DateStrategy, Miss, Options};
use std::ops::Range;
use tracing::trace;

/// Upper bound on the number of words the fallback feeds to the parser.
const MAX_FALLBACK_WINDOW: usize = 6;

pub fn strategies() -> Vec<DateStrategy> {
    vec![
        rule_relative_day(),
        rule_weekday(),
        rule_kanji_full_date(),
        rule_kanji_month_day(),
        rule_numeric_full_date(),
        rule_numeric_month_day(),
        rule_fallback(),
    ]
}

/// 今日, 明日, 一昨日, ...
pub fn rule_relative_day() -> DateStrategy {
    strategy! {
        name: "<relative day>",
        run: relative_day,
    }
}

fn relative_day(text: &str, context: &Context, options: &Options) -> Result<DateMatch, Miss> {
    let (token, offset) = RELATIVE_DATES.find(text, options.token_order).ok_or(Miss::NoMatch)?;
    let date = shift_days(context.today(), offset)?;
    Ok(DateMatch { date, span: token.to_string() })
}

/// 月曜, 水曜日, ... resolved to the next occurrence after today.
pub fn rule_weekday() -> DateStrategy {
    strategy! {
        name: "<weekday>",
        buckets: BucketMask::WEEKDAYISH,
        run: weekday,
    }
}

fn weekday(text: &str, context: &Context, options: &Options) -> Result<DateMatch, Miss> {
    let (token, weekday) = WEEKDAYS.find(text, options.token_order).ok_or(Miss::NoMatch)?;
    let date = next_weekday(context.today(), weekday)?;
    Ok(DateMatch { date, span: token.to_string() })
}

/// 2024年12月25日
pub fn rule_kanji_full_date() -> DateStrategy {
    strategy! {
        name: "<yyyy>年<mm>月<dd>日",
        buckets: BucketMask::HAS_DIGITS | BucketMask::DATE_MARKERS,
        run: kanji_full_date,
    }
}

fn kanji_full_date(text: &str, _: &Context, _: &Options) -> Result<DateMatch, Miss> {
    let caps = regex!(r"([0-9０-９]{4})年([0-9０-９]{1,2})月([0-9０-９]{1,2})日").captures(text).ok_or(Miss::NoMatch)?;
    let date = calendar_date(group_value(&caps, 1)? as i32, group_value(&caps, 2)?, group_value(&caps, 3)?)?;
    Ok(DateMatch { date, span: caps[0].to_string() })
}

/// 12月25日, year taken from the reference and rolled forward when past.
pub fn rule_kanji_month_day() -> DateStrategy {
    strategy! {
        name: "<mm>月<dd>日",
        buckets: BucketMask::HAS_DIGITS | BucketMask::DATE_MARKERS,
        run: kanji_month_day,
    }
}

fn kanji_month_day(text: &str, context: &Context, _: &Options) -> Result<DateMatch, Miss> {
    let caps = regex!(r"([0-9０-９]{1,2})月([0-9０-９]{1,2})日").captures(text).ok_or(Miss::NoMatch)?;
    let date = roll_forward(context.reference_time, group_value(&caps, 1)?, group_value(&caps, 2)?)?;
    Ok(DateMatch { date, span: caps[0].to_string() })
}

/// 2024/12/25, 2024-12-25
pub fn rule_numeric_full_date() -> DateStrategy {
    strategy! {
        name: "<yyyy>/<mm>/<dd>",
        buckets: BucketMask::HAS_DIGITS | BucketMask::SEPARATORS,
        run: numeric_full_date,
    }
}

fn numeric_full_date(text: &str, _: &Context, _: &Options) -> Result<DateMatch, Miss> {
    let caps = regex!(r"([0-9０-９]{4})[/\-]([0-9０-９]{1,2})[/\-]([0-9０-９]{1,2})").captures(text).ok_or(Miss::NoMatch)?;
    let date = calendar_date(group_value(&caps, 1)? as i32, group_value(&caps, 2)?, group_value(&caps, 3)?)?;
    Ok(DateMatch { date, span: caps[0].to_string() })
}

/// 12/25, 12-25, rolled forward like the kanji month-day form.
pub fn rule_numeric_month_day() -> DateStrategy {
    strategy! {
        name: "<mm>/<dd>",
        buckets: BucketMask::HAS_DIGITS | BucketMask::SEPARATORS,
        run: numeric_month_day,
    }
}

fn numeric_month_day(text: &str, context: &Context, _: &Options) -> Result<DateMatch, Miss> {
    let caps = regex!(r"([0-9０-９]{1,2})[/\-]([0-9０-９]{1,2})").captures(text).ok_or(Miss::NoMatch)?;
    let date = roll_forward(context.reference_time, group_value(&caps, 1)?, group_value(&caps, 2)?)?;
    Ok(DateMatch { date, span: caps[0].to_string() })
}

/// Generic English date parsing via `chrono-english`, used when no fixed
/// pattern applies.
pub fn rule_fallback() -> DateStrategy {
    strategy! {
        name: "<fuzzy fallback>",
        run: fuzzy_fallback,
    }
}

/// `chrono-english` wants the whole string to be a date, so fuzziness comes
/// from trying word windows: widest first, then left to right. The first
/// window that parses wins; its time of day is dropped and no span is
/// reported.
///
/// A window is only tried when it holds an English word, and a month name is
/// only read together with the numbers written next to it. Bare numbers are
/// never taken as years, and `Feb 30 2024` is not quietly read as `Feb 1`.
fn fuzzy_fallback(text: &str, context: &Context, options: &Options) -> Result<DateMatch, Miss> {
    if !options.fallback {
        return Err(Miss::Disabled);
    }

    let words: Vec<String> = text.split_whitespace().map(strip_ordinal).collect();
    let now = context.reference_time.and_utc();

    for width in (1..=words.len().min(MAX_FALLBACK_WINDOW)).rev() {
        for start in 0..=words.len() - width {
            let window = start..start + width;
            if !words[window.clone()].iter().any(|w| is_english_word(w)) {
                continue;
            }
            if window.clone().any(|i| is_month_name(&words[i]) && !contains(&window, &date_group(&words, i))) {
                trace!(window = %words[window.clone()].join(" "), "month name split from its numbers");
                continue;
            }

            let candidate = words[window].join(" ");
            if let Ok(parsed) = chrono_english::parse_date_string(&candidate, now, options.dialect.into()) {
                return Ok(DateMatch { date: parsed.date_naive(), span: String::new() });
            }
        }
    }

    Err(Miss::FallbackParseFailure)
}

const MONTH_NAMES: &[&str] = &[
    "jan", "january", "feb", "february", "mar", "march", "apr", "april", "may", "jun", "june", "jul", "july", "aug",
    "august", "sep", "sept", "september", "oct", "october", "nov", "november", "dec", "december",
];

/// `25th` -> `25`, keeping trailing punctuation.
fn strip_ordinal(word: &str) -> String {
    regex!(r"(?i)^([0-9]{1,2})(?:st|nd|rd|th)\b").replace(word, "$1").into_owned()
}

fn is_number(word: &str) -> bool {
    word.starts_with(|c: char| c.is_ascii_digit())
}

fn is_english_word(word: &str) -> bool {
    !is_number(word) && word.chars().any(|c| c.is_ascii_alphabetic())
}

fn is_month_name(word: &str) -> bool {
    let word = word.trim_matches(|c: char| !c.is_ascii_alphabetic()).to_ascii_lowercase();
    MONTH_NAMES.contains(&word.as_str())
}

/// The month name at `idx` plus the run of numbers directly around it.
fn date_group(words: &[String], idx: usize) -> Range<usize> {
    let mut lo = idx;
    while lo > 0 && is_number(&words[lo - 1]) {
        lo -= 1;
    }
    let mut hi = idx + 1;
    while hi < words.len() && is_number(&words[hi]) {
        hi += 1;
    }
    lo..hi
}

fn contains(outer: &Range<usize>, inner: &Range<usize>) -> bool {
    outer.start <= inner.start && inner.end <= outer.end
}
