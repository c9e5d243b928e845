use crate::{Context, DEFAULT_TITLE, JAPANESE_DEFAULT_TITLE, Options, ParsedEvent, TokenOrder, parse_with};
use chrono::{NaiveDate, NaiveDateTime};

fn reference(y: i32, m: u32, d: u32) -> Context {
    Context::new(NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(10, 0, 0).unwrap())
}

fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(h, min, 0).unwrap()
}

fn extract(text: &str, ctx: &Context) -> Option<ParsedEvent> {
    parse_with(text, ctx, &Options::default())
}

#[test]
fn extraction_examples() {
    // Reference: Saturday 2024-06-01 10:00.
    // (input, start, all_day, title)
    let cases: Vec<(&str, NaiveDateTime, bool, &str)> = vec![
        ("2024年12月25日 クリスマス会", at(2024, 12, 25, 0, 0), true, "クリスマス会"),
        ("メモ：2024年12月25日 納品", at(2024, 12, 25, 0, 0), true, "メモ： 納品"),
        ("12月25日 14:30 忘年会", at(2024, 12, 25, 14, 30), false, "忘年会"),
        ("12月25日", at(2024, 12, 25, 0, 0), true, DEFAULT_TITLE),
        ("3月1日 健康診断", at(2025, 3, 1, 0, 0), true, "健康診断"),
        ("６月１日 締切", at(2025, 6, 1, 0, 0), true, "締切"),
        ("６月１日 今日の締切", at(2024, 6, 1, 0, 0), true, "６月１日 の締切"),
        ("明日 15時 打ち合わせ", at(2024, 6, 2, 15, 0), false, "打ち合わせ"),
        ("明日 10時30分 歯医者", at(2024, 6, 2, 10, 30), false, "歯医者"),
        ("明日 25:00 飲み会", at(2024, 6, 2, 0, 0), true, "飲み会"),
        ("明日 10時5号室", at(2024, 6, 2, 0, 0), true, "10時5号室"),
        ("あさって ランチ", at(2024, 6, 3, 0, 0), true, "ランチ"),
        ("一昨日の議事録", at(2024, 5, 30, 0, 0), true, "の議事録"),
        ("2024/7/15 締切", at(2024, 7, 15, 0, 0), true, "締切"),
        ("2024-07-15 9:00 リリース", at(2024, 7, 15, 9, 0), false, "リリース"),
        ("7/15 提出", at(2024, 7, 15, 0, 0), true, "提出"),
        ("5/31 提出", at(2025, 5, 31, 0, 0), true, "提出"),
        ("6-1 提出", at(2025, 6, 1, 0, 0), true, "提出"),
        ("6/2 提出", at(2024, 6, 2, 0, 0), true, "提出"),
        ("【重要】明日 面談", at(2024, 6, 2, 0, 0), true, "重要 面談"),
        ("明日、打ち合わせ。", at(2024, 6, 2, 0, 0), true, "打ち合わせ"),
        ("月曜日 朝会", at(2024, 6, 3, 0, 0), true, "朝会"),
        ("  金曜 19:00 (飲み会)  ", at(2024, 6, 7, 19, 0), false, "飲み会"),
        ("明日 12/25", at(2024, 6, 2, 0, 0), true, "12/25"),
    ];

    let ctx = reference(2024, 6, 1);
    for (input, start, all_day, title) in cases {
        let event = extract(input, &ctx).unwrap_or_else(|| panic!("no event for {input:?}"));
        assert_eq!(event.start, start, "start for {input:?}");
        assert_eq!(event.all_day, all_day, "all_day for {input:?}");
        assert_eq!(event.title, title, "title for {input:?}");
    }
}

#[test]
fn full_date_ignores_surrounding_text() {
    let ctx = reference(2024, 6, 1);
    for input in ["2024年12月25日", "予定は2024年12月25日です", "(2024年12月25日)"] {
        let event = extract(input, &ctx).unwrap();
        assert_eq!(event.start, at(2024, 12, 25, 0, 0), "{input:?}");
        assert!(event.all_day);
    }
}

#[test]
fn relative_tomorrow_is_all_day() {
    let event = extract("明日", &reference(2024, 6, 1)).unwrap();
    assert_eq!(event.start, at(2024, 6, 2, 0, 0));
    assert!(event.all_day);
}

#[test]
fn all_day_events_start_at_midnight() {
    let ctx = reference(2024, 6, 1);
    for input in ["明日 ランチ", "水曜 定例", "12月25日", "2024/7/15"] {
        let event = extract(input, &ctx).unwrap();
        assert!(event.all_day, "{input:?}");
        assert_eq!(event.start.time(), chrono::NaiveTime::MIN, "{input:?}");
    }
}

#[test]
fn weekday_resolves_strictly_after_today() {
    // 2024-06-05 is a Wednesday.
    let ctx = reference(2024, 6, 5);
    assert_eq!(extract("水曜日 定例", &ctx).unwrap().start, at(2024, 6, 12, 0, 0));
    assert_eq!(extract("水曜 定例", &ctx).unwrap().start, at(2024, 6, 12, 0, 0));
    assert_eq!(extract("木曜 定例", &ctx).unwrap().start, at(2024, 6, 6, 0, 0));
    assert_eq!(extract("火曜 定例", &ctx).unwrap().start, at(2024, 6, 11, 0, 0));
}

#[test]
fn empty_residue_uses_default_title_and_full_description() {
    let ctx = reference(2024, 6, 1);
    let event = extract("明日 15:00", &ctx).unwrap();
    assert_eq!(event.title, DEFAULT_TITLE);
    assert_eq!(event.description, "明日 15:00");

    let event = parse_with("【明日】", &ctx, &Options::japanese()).unwrap();
    assert_eq!(event.title, JAPANESE_DEFAULT_TITLE);
    assert_eq!(event.description, "【明日】");

    let event = extract("明日 ランチ", &ctx).unwrap();
    assert_eq!(event.description, "");
}

#[test]
fn blank_input_is_absent_for_any_reference() {
    for ctx in [reference(2024, 6, 1), reference(1999, 12, 31), Context::default()] {
        for input in ["", " ", "\n\t", "\u{3000}"] {
            assert_eq!(extract(input, &ctx), None, "{input:?}");
        }
    }
}

#[test]
fn invalid_calendar_date_falls_through() {
    let ctx = reference(2024, 6, 1);
    let strict = Options { fallback: false, ..Options::default() };

    // 2024年2月30日 and 2月30日 are both rejected; nothing else matches.
    assert_eq!(parse_with("2024年2月30日 会議", &ctx, &strict), None);

    // A lower-priority numeric pattern picks the text up instead.
    let event = parse_with("2024年2月30日 12/25", &ctx, &strict).unwrap();
    assert_eq!(event.start, at(2024, 12, 25, 0, 0));
    assert_eq!(event.title, "2024年2月30日");
}

#[test]
fn invalid_calendar_date_is_absent_with_default_options() {
    let ctx = reference(2024, 6, 1);
    assert_eq!(extract("2024年2月30日 会議", &ctx), None);
    assert_eq!(extract("2月30日 会議", &ctx), None);
}

#[test]
fn fallback_does_not_invent_dates_from_numbers() {
    let ctx = reference(2024, 6, 1);
    for input in ["会議 10", "Room 5 meeting", "version 2 release", "30 Feb", "Feb 30 2024", "Feb 29 2025"] {
        assert_eq!(extract(input, &ctx), None, "{input:?}");
    }

    if let Some(event) = extract("Meeting on December 25th", &ctx) {
        assert_eq!(event.start, at(2024, 12, 25, 0, 0));
        assert!(event.all_day);
    }
}

#[test]
fn leftmost_token_wins_by_default() {
    let ctx = reference(2024, 6, 1);
    let event = extract("昨日の続きを明日やる", &ctx).unwrap();
    assert_eq!(event.start, at(2024, 5, 31, 0, 0));
    assert_eq!(event.title, "の続きをやる");
}

#[test]
fn table_order_is_available_for_compatibility() {
    let ctx = reference(2024, 6, 1);
    let opts = Options { token_order: TokenOrder::Table, ..Options::default() };

    let event = parse_with("昨日の続きを明日やる", &ctx, &opts).unwrap();
    assert_eq!(event.start, at(2024, 6, 2, 0, 0));
    assert_eq!(event.title, "の続きをやる");

    // `昨日` is listed before `一昨日` and is a substring of it.
    assert_eq!(parse_with("一昨日の議事録", &ctx, &opts).unwrap().start, at(2024, 5, 31, 0, 0));
}

#[test]
fn relative_token_outranks_explicit_date() {
    let ctx = reference(2024, 6, 1);
    let event = extract("2024年12月25日 明日締切", &ctx).unwrap();
    assert_eq!(event.start, at(2024, 6, 2, 0, 0));
    assert_eq!(event.title, "2024年12月25日 締切");
}

#[test]
fn fallback_handles_english_text() {
    let ctx = reference(2024, 6, 1);
    let event = extract("tomorrow", &ctx).unwrap();
    assert_eq!(event.start, at(2024, 6, 2, 0, 0));
    assert!(event.all_day);
    // The fallback consumes no span, so the text stays as the title.
    assert_eq!(event.title, "tomorrow");
    assert_eq!(event.description, "");

    let strict = Options { fallback: false, ..Options::default() };
    assert_eq!(parse_with("tomorrow", &ctx, &strict), None);
}
