//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use posts_ingest::{DATE_COLUMN, TEXT_COLUMN};

#[derive(Parser)]
#[command(
    name = "posts",
    version,
    about = "Preprocess Arabic posts datasets: split dates, clean text",
    long_about = "Preprocess a tabular dataset of Arabic-language posts.\n\n\
                  `dates` splits the composite date column into weekday, day, month,\n\
                  year, time and hour columns. `clean` tokenizes the text column,\n\
                  strips diacritics and removes stop words."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow raw post text in trace-level logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Split the composite date column into calendar columns.
    Dates(DatesArgs),

    /// Tokenize and clean the text column.
    Clean(CleanArgs),

    /// Show the active stop-word list.
    Stopwords(StopwordsArgs),
}

/// Options shared by the dataset commands.
#[derive(Args, Clone)]
pub struct InputArgs {
    /// Path to the posts CSV file.
    #[arg(value_name = "CSV")]
    pub input: PathBuf,

    /// Write the result here instead of stdout.
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Drop rows that fail instead of aborting on the first failure.
    #[arg(long = "skip-invalid")]
    pub skip_invalid: bool,
}

#[derive(Args, Clone)]
pub struct DatesArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Name of the composite date column.
    #[arg(long = "column", default_value = DATE_COLUMN)]
    pub column: String,

    /// Normalize rows on all cores (strict mode only).
    #[arg(long = "parallel", conflicts_with = "skip_invalid")]
    pub parallel: bool,
}

#[derive(Args, Clone)]
pub struct CleanArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Name of the text column.
    #[arg(long = "column", default_value = TEXT_COLUMN)]
    pub column: String,

    /// Output layout.
    #[arg(long = "format", value_enum, default_value = "csv")]
    pub format: CleanFormatArg,

    /// Lexicon directory with a manifest.toml (defaults to $ARABIC_POSTS_LEXICON_DIR, then the built-in list).
    #[arg(long = "lexicon-dir", value_name = "DIR")]
    pub lexicon_dir: Option<PathBuf>,

    /// Also remove tatweel (kashida).
    #[arg(long = "strip-tatweel")]
    pub strip_tatweel: bool,
}

#[derive(Args, Clone)]
pub struct StopwordsArgs {
    /// Lexicon directory with a manifest.toml (defaults to $ARABIC_POSTS_LEXICON_DIR, then the built-in list).
    #[arg(long = "lexicon-dir", value_name = "DIR")]
    pub lexicon_dir: Option<PathBuf>,

    /// Print every entry, one per line.
    #[arg(long = "list")]
    pub list: bool,

    /// Print a JSON report instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum CleanFormatArg {
    /// Input columns plus `tokens` and `token_count`.
    Csv,
    /// One `{"row": .., "tokens": [..]}` object per line.
    Jsonl,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
