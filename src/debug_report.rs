use clipevent::{Attempt, Outcome, ParseResultVerbose, ParsedEvent};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            if self.enabled { format!("{}{}{}", color, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", BOLD, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", DIM, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }
    }
}

/// Compact output: the event, or the reason there is none.
pub fn print_event(res: &ParseResultVerbose, color: bool) {
    let palette = ansi::Palette::new(color);
    match &res.result {
        Ok(event) => print_fields(event, &palette),
        Err(err) => println!("{}", palette.dim(format!("no event: {err}"))),
    }
}

/// Full report: every strategy attempt, the event and stage timings.
pub fn print_run(res: &ParseResultVerbose, color: bool) {
    let palette = ansi::Palette::new(color);
    let details = &res.details;
    println!("\n{}", palette.bold(palette.paint(format!("⚙  Extracting: \"{}\"", res.text.trim()), ansi::CYAN)));

    println!("\n{}", palette.paint("━━━ Strategies ━━━", ansi::GRAY));
    if details.attempts.is_empty() {
        println!("{}", palette.dim("  No strategy ran (empty input)"));
    }
    for attempt in &details.attempts {
        println!("  {}", fmt_attempt(attempt, &palette));
    }
    if let Some(span) = details.date_span.as_deref().filter(|s| !s.is_empty()) {
        println!("  {} {}", palette.dim("date span:"), palette.paint(format!("\"{span}\""), ansi::YELLOW));
    }

    println!("\n{}", palette.paint("━━━ Event ━━━", ansi::GRAY));
    match &res.result {
        Ok(event) => print_fields(event, &palette),
        Err(err) => {
            println!("{}", palette.dim(format!("  {err}")));
            println!("\n{}", palette.paint("Possible reasons:", ansi::YELLOW));
            println!("  • No relative-day or weekday token in the text");
            println!("  • Date patterns matched but were not real calendar dates");
            println!("  • The English fallback is disabled or could not read the text");
        }
    }

    println!("\n{}", palette.paint("━━━ Timing ━━━", ansi::GRAY));
    println!(
        "  Total: {}  │  Date: {}  │  Time: {}  │  Title: {}",
        palette.paint(format!("{:?}", details.total), ansi::GREEN),
        palette.paint(format!("{:?}", details.date_stage), ansi::CYAN),
        palette.dim(format!("{:?}", details.time_stage)),
        palette.dim(format!("{:?}", details.title_stage)),
    );
    println!();
}

fn print_fields(event: &ParsedEvent, palette: &ansi::Palette) {
    let start = if event.all_day { event.start.date().to_string() } else { event.start.format("%Y-%m-%d %H:%M").to_string() };
    let end = if event.all_day {
        event.effective_end().date().to_string()
    } else {
        event.effective_end().format("%Y-%m-%d %H:%M").to_string()
    };

    println!("  {} {}", palette.dim("title:      "), palette.bold(palette.paint(&event.title, ansi::GREEN)));
    println!("  {} {}", palette.dim("start:      "), palette.paint(start, ansi::YELLOW));
    println!("  {} {}", palette.dim("end:        "), palette.paint(end, ansi::YELLOW));
    println!("  {} {}", palette.dim("all day:    "), palette.paint(event.all_day.to_string(), ansi::BLUE));
    println!("  {} {}", palette.dim("offset:     "), event.offset);
    if !event.description.is_empty() {
        println!("  {} {}", palette.dim("description:"), event.description);
    }
}

fn fmt_attempt(attempt: &Attempt, palette: &ansi::Palette) -> String {
    let label = palette.paint(format!("[{}]", attempt.stage), ansi::GRAY);
    let name = palette.paint(attempt.strategy, ansi::BLUE);
    match &attempt.outcome {
        Outcome::Matched(value) => {
            format!("{label} {name} {} {}", palette.paint(format!("✓ {value}"), ansi::GREEN), palette.dim(format!("{:?}", attempt.elapsed)))
        }
        Outcome::Missed(miss) => format!("{label} {name} {}", palette.dim(format!("✗ {miss}"))),
    }
}
