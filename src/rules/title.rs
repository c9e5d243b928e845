//! Title normalization.
//!
//! Strips everything the cascades could have recognized from the original
//! text and tidies what is left:
//!
//! 1. the date span (first occurrence),
//! 2. every clock-time and hour-marker expression, accepted or not,
//! 3. every relative-day and weekday token, all aliases, all occurrences,
//! 4. bracket/whitespace runs collapsed to one space, edge punctuation trimmed.
//!
//! An empty result means the snippet was nothing but a date: the title falls
//! back to the default and the untouched text becomes the description.

use super::helpers::remove_first;
use super::lexicon::STRIP_TOKENS;
use super::time::{clock_time_regex, hour_markers};

/// Characters trimmed from both ends of the final title.
const EDGE_PUNCTUATION: &[char] = &[' ', '\u{3000}', '、', '。', '・'];

/// Returns `(title, description)`; exactly one of them carries the text.
pub fn normalize(original: &str, date_span: &str, default_title: &str) -> (String, String) {
    let stripped = strip(original, date_span);

    if stripped.is_empty() {
        (default_title.to_string(), original.to_string())
    } else {
        (stripped, String::new())
    }
}

fn strip(original: &str, date_span: &str) -> String {
    let mut title = remove_first(original, date_span);

    title = clock_time_regex().replace_all(&title, "").into_owned();
    title = remove_hour_markers(&title);

    for token in STRIP_TOKENS.iter() {
        title = title.replace(token, "");
    }

    let collapsed = regex!(r"[（）()\[\]【】\s]+").replace_all(&title, " ");
    collapsed.trim_matches(EDGE_PUNCTUATION).to_string()
}

fn remove_hour_markers(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for caps in hour_markers(text) {
        let Some(m) = caps.get(0) else { continue };
        out.push_str(&text[last..m.start()]);
        last = m.end();
    }
    out.push_str(&text[last..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEFAULT: &str = "New Event";

    #[test]
    fn strips_date_time_and_tokens() {
        let (title, description) = normalize("12月25日 14:30 忘年会", "12月25日", DEFAULT);
        assert_eq!(title, "忘年会");
        assert_eq!(description, "");
    }

    #[test]
    fn strips_time_even_when_out_of_range() {
        assert_eq!(normalize("明日 25:00 飲み会", "明日", DEFAULT).0, "飲み会");
        assert_eq!(normalize("明日 10時30分 歯医者", "明日", DEFAULT).0, "歯医者");
    }

    #[test]
    fn keeps_hour_followed_by_digit() {
        assert_eq!(normalize("明日 10時5号室", "明日", DEFAULT).0, "10時5号室");
    }

    #[test]
    fn removes_every_alias_occurrence() {
        // Only one span is consumed by the date cascade, but every token goes.
        assert_eq!(normalize("昨日の続きを明日やる", "昨日", DEFAULT).0, "の続きをやる");
        assert_eq!(normalize("月曜日 朝会 (毎週月曜)", "月曜日", DEFAULT).0, "朝会 毎週");
    }

    #[test]
    fn collapses_brackets_and_trims_punctuation() {
        assert_eq!(normalize("【重要】明日 面談", "明日", DEFAULT).0, "重要 面談");
        assert_eq!(normalize("明日、打ち合わせ。", "明日", DEFAULT).0, "打ち合わせ");
        assert_eq!(normalize("明日\u{3000}（仮）ランチ", "明日", DEFAULT).0, "仮 ランチ");
    }

    #[test]
    fn empty_residue_moves_text_to_description() {
        let (title, description) = normalize("明日 15時", "明日", DEFAULT);
        assert_eq!(title, DEFAULT);
        assert_eq!(description, "明日 15時");
    }

    #[test]
    fn date_span_removed_once() {
        assert_eq!(normalize("12/25 と 12/25", "12/25", DEFAULT).0, "と 12/25");
    }
}
