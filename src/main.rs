mod debug_report;

use chrono::{FixedOffset, NaiveDateTime};
use clipevent::{Context, Dialect, Options, TokenOrder, parse_verbose_with};
use std::io::{self, IsTerminal, Read};
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::from(2);
        }
    };

    init_logging(config.debug);

    let res = parse_verbose_with(&config.input, &config.context, &config.options);
    if config.verbose {
        debug_report::print_run(&res, config.color);
    } else {
        debug_report::print_event(&res, config.color);
    }

    if res.event().is_some() { ExitCode::SUCCESS } else { ExitCode::from(1) }
}

fn init_logging(debug: bool) {
    let filter = if debug {
        EnvFilter::new("clipevent=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into())
    };
    tracing_subscriber::registry().with(filter).with(tracing_subscriber::fmt::layer().with_writer(io::stderr)).init();
}

struct CliConfig {
    input: String,
    context: Context,
    options: Options,
    verbose: bool,
    color: bool,
    debug: bool,
}

fn parse_args() -> Result<CliConfig, String> {
    let mut input: Option<String> = None;
    let mut context = Context::default();
    let mut options = Options::default();
    let mut verbose = false;
    let mut debug = false;
    let mut color = io::stdout().is_terminal();
    let mut args = std::env::args().skip(1).peekable();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("clipevent {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--color" => color = true,
            "--no-color" => color = false,
            "-v" | "--verbose" => verbose = true,
            "--debug" => debug = true,
            "--japanese" => options.default_title = clipevent::JAPANESE_DEFAULT_TITLE.to_string(),
            "--table-order" => options.token_order = TokenOrder::Table,
            "--no-fallback" => options.fallback = false,
            "--day-first" => options.dialect = Dialect::DayFirst,
            "--reference" => {
                let value = args.next().ok_or_else(|| "error: --reference expects a value".to_string())?;
                context.reference_time = parse_reference(&value)?;
            }
            "--offset" => {
                let value = args.next().ok_or_else(|| "error: --offset expects a value".to_string())?;
                context.offset = parse_offset(&value)?;
            }
            "--title" => {
                options.default_title = args.next().ok_or_else(|| "error: --title expects a value".to_string())?;
            }
            "--input" | "-i" => {
                let value = args.next().ok_or_else(|| "error: --input expects a value".to_string())?;
                set_input(&mut input, value)?;
            }
            "--" => {
                let rest = args.collect::<Vec<_>>().join(" ");
                if !rest.trim().is_empty() {
                    set_input(&mut input, rest)?;
                }
                break;
            }
            _ if arg.starts_with("--reference=") => {
                context.reference_time = parse_reference(arg.trim_start_matches("--reference="))?;
            }
            _ if arg.starts_with("--offset=") => {
                context.offset = parse_offset(arg.trim_start_matches("--offset="))?;
            }
            _ if arg.starts_with("--title=") => {
                options.default_title = arg.trim_start_matches("--title=").to_string();
            }
            _ if arg.starts_with("--input=") => {
                set_input(&mut input, arg.trim_start_matches("--input=").to_string())?;
            }
            _ if arg.starts_with('-') => {
                return Err(format!("error: unknown option '{arg}'"));
            }
            _ => {
                let rest = std::iter::once(arg).chain(args).collect::<Vec<_>>().join(" ");
                set_input(&mut input, rest)?;
                break;
            }
        }
    }

    let input = match input {
        Some(value) => value,
        None => read_stdin_input()?,
    };

    if input.trim().is_empty() {
        return Err(format!("error: no input provided\n\n{}", help_text()));
    }

    Ok(CliConfig { input, context, options, verbose, color, debug })
}

fn set_input(slot: &mut Option<String>, value: String) -> Result<(), String> {
    if slot.is_some() {
        return Err("error: input provided multiple times".to_string());
    }
    *slot = Some(value);
    Ok(())
}

fn read_stdin_input() -> Result<String, String> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(|err| format!("error: failed to read stdin: {err}"))?;
    Ok(buffer)
}

fn parse_reference(value: &str) -> Result<NaiveDateTime, String> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S")
        .map_err(|_| format!("error: invalid --reference '{value}' (expected YYYY-MM-DDTHH:MM:SS)"))
}

fn parse_offset(value: &str) -> Result<FixedOffset, String> {
    value.parse::<FixedOffset>().map_err(|_| format!("error: invalid --offset '{value}' (expected +HH:MM)"))
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    format!(
        "clipevent {version}

Extract a calendar event (title, start, all-day) from a text snippet.

Usage:
  clipevent [OPTIONS] [--] <input...>
  clipevent [OPTIONS] --input <text>

Options:
  -i, --input <text>         Input text to parse. If omitted, reads remaining args
                             or stdin when no args are provided.
  --reference <timestamp>    Reference time in YYYY-MM-DDTHH:MM:SS.
                             Default: the current local time.
  --offset <+HH:MM>          Offset attached to the event. Default: local offset.
  --title <text>             Title used when only date/time text is found.
  --japanese                 Use the Japanese default title.
  --table-order              Pick relative/weekday tokens in table order instead
                             of leftmost-first.
  --no-fallback              Disable the English fallback date parser.
  --day-first                Read ambiguous fallback dates as DD/MM.
  -v, --verbose              Print every strategy attempt.
  --debug                    Emit debug logs on stderr (otherwise RUST_LOG).
  --color                    Force ANSI color output.
  --no-color                 Disable ANSI color output.
  -h, --help                 Show this help message.
  -V, --version              Print version information.

Exit codes:
  0  An event was extracted.
  1  Nothing to extract.
  2  Invalid arguments or missing input.
",
        version = env!("CARGO_PKG_VERSION"),
    )
}
