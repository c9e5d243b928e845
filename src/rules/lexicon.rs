//! Lexical tables: relative-day tokens and weekday tokens.
//!
//! Both tables are immutable and built once on first use. Several aliases may
//! map to the same value (`明後日` and `あさって` are both +2).

use crate::TokenOrder;
use chrono::Weekday;
use once_cell::sync::Lazy;
use std::cmp::Reverse;

/// Ordered token → value table.
#[derive(Debug)]
pub struct LexicalTable<V: 'static> {
    entries: &'static [(&'static str, V)],
}

impl<V: Copy> LexicalTable<V> {
    pub const fn new(entries: &'static [(&'static str, V)]) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &'static [(&'static str, V)] {
        self.entries
    }

    /// Find a token contained in `text`.
    ///
    /// - [`TokenOrder::Table`]: the first entry (in table order) that occurs
    ///   anywhere in the text.
    /// - [`TokenOrder::Leftmost`]: the occurrence with the smallest byte
    ///   offset; at equal offsets the longest token wins, so `一昨日` is not
    ///   read as `昨日`.
    pub fn find(&self, text: &str, order: TokenOrder) -> Option<(&'static str, V)> {
        match order {
            TokenOrder::Table => self.entries.iter().find(|(token, _)| text.contains(token)).copied(),
            TokenOrder::Leftmost => self
                .entries
                .iter()
                .filter_map(|&(token, value)| text.find(token).map(|pos| (pos, token, value)))
                .min_by_key(|&(pos, token, _)| (pos, Reverse(token.len())))
                .map(|(_, token, value)| (token, value)),
        }
    }
}

pub static RELATIVE_DATES: LexicalTable<i64> = LexicalTable::new(&[
    ("今日", 0),
    ("本日", 0),
    ("明日", 1),
    ("明後日", 2),
    ("あさって", 2),
    ("昨日", -1),
    ("一昨日", -2),
    ("おととい", -2),
]);

pub static WEEKDAYS: LexicalTable<Weekday> = LexicalTable::new(&[
    ("月曜", Weekday::Mon),
    ("月曜日", Weekday::Mon),
    ("火曜", Weekday::Tue),
    ("火曜日", Weekday::Tue),
    ("水曜", Weekday::Wed),
    ("水曜日", Weekday::Wed),
    ("木曜", Weekday::Thu),
    ("木曜日", Weekday::Thu),
    ("金曜", Weekday::Fri),
    ("金曜日", Weekday::Fri),
    ("土曜", Weekday::Sat),
    ("土曜日", Weekday::Sat),
    ("日曜", Weekday::Sun),
    ("日曜日", Weekday::Sun),
]);

/// Every token of both tables, longest first, for stripping from titles.
///
/// Longest-first removal keeps a short alias from leaving half of a longer
/// one behind (`月曜` inside `月曜日` would otherwise leave `日`).
pub static STRIP_TOKENS: Lazy<Vec<&'static str>> = Lazy::new(|| {
    let mut tokens: Vec<&'static str> = RELATIVE_DATES
        .entries()
        .iter()
        .map(|(token, _)| *token)
        .chain(WEEKDAYS.entries().iter().map(|(token, _)| *token))
        .collect();
    tokens.sort_by_key(|token| Reverse(token.chars().count()));
    tokens
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leftmost_prefers_earliest_occurrence() {
        let text = "昨日の続きを明日やる";
        assert_eq!(RELATIVE_DATES.find(text, TokenOrder::Leftmost), Some(("昨日", -1)));
        assert_eq!(RELATIVE_DATES.find(text, TokenOrder::Table), Some(("明日", 1)));
    }

    #[test]
    fn leftmost_prefers_longest_token_at_same_offset() {
        assert_eq!(RELATIVE_DATES.find("一昨日の件", TokenOrder::Leftmost), Some(("一昨日", -2)));
        assert_eq!(WEEKDAYS.find("月曜日 朝会", TokenOrder::Leftmost), Some(("月曜日", Weekday::Mon)));
    }

    #[test]
    fn table_order_reads_overlapping_alias_first() {
        // `昨日` precedes `一昨日` in the table and is contained in it.
        assert_eq!(RELATIVE_DATES.find("一昨日の件", TokenOrder::Table), Some(("昨日", -1)));
        assert_eq!(WEEKDAYS.find("月曜日 朝会", TokenOrder::Table), Some(("月曜", Weekday::Mon)));
    }

    #[test]
    fn find_returns_none_without_tokens() {
        assert_eq!(RELATIVE_DATES.find("定例会議", TokenOrder::Leftmost), None);
        assert_eq!(WEEKDAYS.find("定例会議", TokenOrder::Table), None);
    }

    #[test]
    fn strip_tokens_are_longest_first() {
        let lengths: Vec<usize> = STRIP_TOKENS.iter().map(|t| t.chars().count()).collect();
        assert!(lengths.windows(2).all(|w| w[0] >= w[1]));
        assert_eq!(STRIP_TOKENS.len(), RELATIVE_DATES.entries().len() + WEEKDAYS.entries().len());
    }
}
