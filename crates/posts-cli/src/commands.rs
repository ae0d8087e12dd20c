use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use polars::prelude::{BooleanChunked, CsvWriter, DataFrame, NamedFrom, SerWriter};
use tracing::{info, info_span, trace, warn};

use posts_ingest::{read_posts_csv, string_column};
use posts_lexicon::{
    LexiconRegistry, LexiconReport, StopWordSet, StopWordSource, lexicon_dir_from_env,
    resolve_stop_words,
};
use posts_model::Token;
use posts_transform::{
    ArabicTextCleaner, CleanerOptions, append_date_columns, append_date_columns_lenient,
    append_token_columns,
};

use crate::cli::{CleanArgs, CleanFormatArg, DatesArgs, StopwordsArgs};
use crate::logging::redact_value;
use crate::summary::stop_word_table;
use crate::types::{RunSummary, TokenRow};

pub fn run_dates(args: &DatesArgs) -> Result<RunSummary> {
    let started = Instant::now();
    let input = &args.input.input;
    let span = info_span!("dates", input = %input.display(), column = %args.column);
    let _guard = span.enter();

    let mut df = read_posts_csv(input).with_context(|| format!("read {}", input.display()))?;
    let rows_in = df.height();
    info!(rows = rows_in, "loaded posts");

    let skipped = if args.input.skip_invalid {
        let outcome = append_date_columns_lenient(&df, &args.column)
            .with_context(|| format!("normalize column '{}'", args.column))?;
        df = outcome.frame;
        outcome.skipped.len()
    } else {
        append_date_columns(&mut df, &args.column, args.parallel)
            .with_context(|| format!("normalize column '{}'", args.column))?;
        0
    };

    write_csv(&mut df, args.input.output.as_deref())?;
    info!(rows = df.height(), skipped, "wrote date columns");
    Ok(RunSummary {
        command: "dates",
        input: input.clone(),
        output: args.input.output.clone(),
        rows_in,
        rows_out: df.height(),
        skipped,
        elapsed: started.elapsed(),
    })
}

pub fn run_clean(args: &CleanArgs) -> Result<RunSummary> {
    let started = Instant::now();
    let input = &args.input.input;
    let span = info_span!("clean", input = %input.display(), column = %args.column);
    let _guard = span.enter();

    let (stop_words, source) =
        resolve_stop_words(args.lexicon_dir.as_deref()).context("load stop words")?;
    info!(
        source = ?source,
        version = stop_words.version(),
        entries = stop_words.len(),
        "stop words ready"
    );
    let cleaner = ArabicTextCleaner::new(stop_words)
        .with_options(CleanerOptions::default().with_strip_tatweel(args.strip_tatweel));

    let mut df = read_posts_csv(input).with_context(|| format!("read {}", input.display()))?;
    let rows_in = df.height();
    info!(rows = rows_in, "loaded posts");

    let (rows, tokens) = if args.input.skip_invalid {
        let (frame, rows, tokens) = clean_lenient(&cleaner, &df, &args.column)?;
        df = frame;
        (rows, tokens)
    } else {
        let tokens = cleaner
            .clean_column(&df, &args.column)
            .with_context(|| format!("clean column '{}'", args.column))?;
        ((0..tokens.len()).collect(), tokens)
    };
    trace_tokens(&df, &args.column, &tokens);

    match args.format {
        CleanFormatArg::Csv => {
            append_token_columns(&mut df, &tokens)?;
            write_csv(&mut df, args.input.output.as_deref())?;
        }
        CleanFormatArg::Jsonl => {
            write_jsonl(&rows, &tokens, args.input.output.as_deref())?;
        }
    }

    let rows_out = tokens.len();
    info!(rows = rows_out, skipped = rows_in - rows_out, "wrote tokens");
    Ok(RunSummary {
        command: "clean",
        input: input.clone(),
        output: args.input.output.clone(),
        rows_in,
        rows_out,
        skipped: rows_in - rows_out,
        elapsed: started.elapsed(),
    })
}

/// Print the active lexicon to `out`.
pub fn run_stopwords<W: Write>(args: &StopwordsArgs, out: &mut W) -> Result<()> {
    let dir = args.lexicon_dir.clone().or_else(lexicon_dir_from_env);
    let (set, source, report) = match dir {
        Some(dir) => {
            let (registry, summary) = LexiconRegistry::verify_and_load(&dir)
                .with_context(|| format!("verify lexicon {}", dir.display()))?;
            let report = LexiconReport::from_verify_summary(&summary, registry.files.clone());
            (registry.stop_words, StopWordSource::Directory(dir), report)
        }
        None => {
            let set = StopWordSet::builtin();
            let report = LexiconReport::from_set(&set, &StopWordSource::Builtin);
            (set, StopWordSource::Builtin, report)
        }
    };

    if args.json {
        let json = serde_json::to_string_pretty(&report).context("serialize lexicon report")?;
        writeln!(out, "{json}")?;
    } else {
        writeln!(out, "{}", stop_word_table(&set, &source))?;
    }
    if args.list {
        for word in set.iter() {
            writeln!(out, "{word}")?;
        }
    }
    Ok(())
}

/// Clean every row, dropping null cells. Returns the kept frame, the
/// original row numbers that survived, and their tokens.
fn clean_lenient(
    cleaner: &ArabicTextCleaner,
    df: &DataFrame,
    column: &str,
) -> Result<(DataFrame, Vec<usize>, Vec<Vec<Token>>)> {
    let results = cleaner
        .clean_column_each(df, column)
        .with_context(|| format!("clean column '{column}'"))?;

    let mut keep = Vec::with_capacity(results.len());
    let mut rows = Vec::with_capacity(results.len());
    let mut tokens = Vec::with_capacity(results.len());
    for (row, result) in results.into_iter().enumerate() {
        match result {
            Ok(row_tokens) => {
                keep.push(true);
                rows.push(row);
                tokens.push(row_tokens);
            }
            Err(error) => {
                warn!(row, %error, "skipping row with invalid text");
                keep.push(false);
            }
        }
    }
    let mask = BooleanChunked::new("keep".into(), keep);
    let frame = df.filter(&mask)?;
    Ok((frame, rows, tokens))
}

fn trace_tokens(df: &DataFrame, column: &str, tokens: &[Vec<Token>]) {
    if !tracing::enabled!(tracing::Level::TRACE) {
        return;
    }
    let Ok(values) = string_column(df, column) else {
        return;
    };
    for (row, (text, row_tokens)) in values.into_iter().zip(tokens).enumerate() {
        trace!(
            row,
            text = redact_value(text.unwrap_or_default()),
            tokens = row_tokens.len(),
            "cleaned row"
        );
    }
}

fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            let file =
                File::create(path).with_context(|| format!("create {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(BufWriter::new(io::stdout().lock()))),
    }
}

fn write_csv(df: &mut DataFrame, path: Option<&Path>) -> Result<()> {
    let mut out = open_output(path)?;
    CsvWriter::new(&mut out)
        .include_header(true)
        .finish(df)
        .context("write csv")?;
    out.flush()?;
    Ok(())
}

fn write_jsonl(rows: &[usize], tokens: &[Vec<Token>], path: Option<&Path>) -> Result<()> {
    let mut out = open_output(path)?;
    for (&row, row_tokens) in rows.iter().zip(tokens) {
        let line = TokenRow {
            row,
            tokens: row_tokens.iter().map(Token::as_str).collect(),
        };
        serde_json::to_writer(&mut out, &line).context("write jsonl")?;
        out.write_all(b"\n")?;
    }
    out.flush()?;
    Ok(())
}
