//! CLI entry point for whatdo

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use tracing::debug;
use whatdo::navigator::FIRST;
use whatdo::{
    Address, Editor, JsonListOutput, ListFormatter, OutputConfig, Result, StripSet, TodoPredicate,
    WalkerConfig, count_todos, list_todos, logging, print_count, print_count_json,
};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "whatdo")]
#[command(about = "Find TODO lines in a directory tree and jump to them in your editor")]
#[command(version)]
struct Args {
    /// Root directory (or single file) to start searching
    #[arg(short = 'd', long = "dir", value_name = "DIR")]
    dir: Option<PathBuf>,

    /// Only display the number of todos per file and in total
    #[arg(short = 'c', long = "count", conflicts_with = "goto")]
    count: bool,

    /// Open a todo item by address (e.g. 2.3) in $EDITOR (default: vim).
    /// Without an address, opens the first item. Only works for editors
    /// that accept 'program +line filename', such as (n)vim and nano
    #[arg(
        short = 'g',
        long = "goto",
        value_name = "ADDRESS",
        num_args = 0..=1,
        default_missing_value = FIRST
    )]
    goto: Option<String>,

    /// Custom regex searched for anywhere in each line
    #[arg(short = 'p', long = "pattern", value_name = "REGEX")]
    pattern: Option<String>,

    /// Marker a line must start with after leading whitespace/punctuation
    #[arg(
        short = 'm',
        long = "marker",
        value_name = "TEXT",
        default_value = whatdo::matcher::DEFAULT_MARKER,
        conflicts_with = "pattern"
    )]
    marker: String,

    /// Characters to strip before testing for the marker
    /// (default: all whitespace and punctuation)
    #[arg(long = "strip", value_name = "CHARS", conflicts_with = "pattern")]
    strip: Option<String>,

    /// Match the marker or pattern case-insensitively
    #[arg(short = 'i', long = "ignore-case")]
    ignore_case: bool,

    /// Only search files directly inside DIR, not subdirectories
    #[arg(short = 'n', long = "norecurse")]
    norecurse: bool,

    /// Search inside hidden directories and files
    #[arg(short = 'H', long = "hidden")]
    hidden: bool,

    /// Skip files and directories whose name matches this glob (repeatable)
    #[arg(short = 'I', long = "ignore", value_name = "GLOB")]
    ignore: Vec<String>,

    /// Output in JSON format
    #[arg(long = "json", conflicts_with = "goto")]
    json: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Log diagnostics to stderr
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

fn build_predicate(args: &Args) -> Result<TodoPredicate> {
    if let Some(ref pattern) = args.pattern {
        return TodoPredicate::pattern(pattern, args.ignore_case);
    }
    let strip = match &args.strip {
        Some(chars) => StripSet::Chars(chars.clone()),
        None => StripSet::NonWord,
    };
    Ok(TodoPredicate::prefix(args.marker.clone())
        .with_strip(strip)
        .with_ignore_case(args.ignore_case))
}

/// Run the selected mode and return the process exit code.
fn run(args: &Args) -> Result<i32> {
    // Options are validated before anything is read from disk.
    let target = args
        .goto
        .as_deref()
        .map(str::parse::<Address>)
        .transpose()?;
    let predicate = build_predicate(args)?;

    let walker_config = WalkerConfig {
        recurse: !args.norecurse,
        include_hidden: args.hidden,
        ignore_patterns: args.ignore.clone(),
    };
    let root = args.dir.clone().unwrap_or_else(|| PathBuf::from("."));

    debug!(
        root = %root.display(),
        recurse = walker_config.recurse,
        hidden = walker_config.include_hidden,
        predicate = %predicate.describe(),
        "starting scan"
    );
    let groups = whatdo::scan(&root, &walker_config, predicate)?;

    if let Some(address) = target {
        let status = whatdo::goto(groups, address, &Editor::from_env())?;
        return Ok(status.code().unwrap_or(1));
    }

    let output_config = OutputConfig {
        use_color: should_use_color(args.color),
    };

    if args.count {
        let summary = count_todos(groups)?;
        if args.json {
            print_count_json(&summary)?;
        } else {
            print_count(&summary, &output_config)?;
        }
    } else if args.json {
        list_todos(groups, &mut JsonListOutput::stdout())?;
    } else {
        list_todos(groups, &mut ListFormatter::stdout(&output_config))?;
    }
    Ok(0)
}

fn main() {
    let args = Args::parse();
    logging::init(args.verbose);

    match run(&args) {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("whatdo: {}", e);
            process::exit(e.exit_code());
        }
    }
}
