//! tender-diff command-line interface.
//!
//! Compares two snapshot files (or, with `--text`, two literal strings
//! through the scalar pipeline) and prints the annotated result in the
//! selected format.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::path::Path;
use std::process;
use tender_diff::{
    diff, distance, format_result, parse_file, reconstruct, render, OutputFormat, Record,
    RenderStyle, ReportOptions,
};

/// tender-diff - structural diff for tender records
///
/// Compares two versions of a structured record, highlighting character
/// level changes in scalar values and whole-value additions/removals in
/// mappings and sequences.
#[derive(Parser)]
#[command(name = "tender-diff")]
#[command(version)]
#[command(about = "Structural diff for tender records", long_about = None)]
struct Cli {
    /// Old snapshot file (or literal string with --text)
    #[arg(value_name = "OLD")]
    old: String,

    /// New snapshot file (or literal string with --text)
    #[arg(value_name = "NEW")]
    new: String,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value = "terminal")]
    format: OutputFormatArg,

    /// Compare the two arguments as literal strings instead of files
    #[arg(long)]
    text: bool,

    /// Report title used in the rendered output
    #[arg(long, default_value = "Record changes")]
    title: String,

    /// Verbose output (show progress on stderr)
    #[arg(short, long)]
    verbose: bool,
}

/// Output format argument for clap
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
enum OutputFormatArg {
    /// Indented terminal output with ANSI highlights
    Terminal,
    /// Standalone HTML document
    Html,
    /// Annotated records as JSON
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Terminal => OutputFormat::Terminal,
            OutputFormatArg::Html => OutputFormat::Html,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    match run(cli) {
        Ok(exit_code) => process::exit(exit_code),
        Err(err) => {
            eprintln!("Error: {err:#}");
            process::exit(2);
        }
    }
}

fn run(cli: Cli) -> Result<i32> {
    let format: OutputFormat = cli.format.into();
    let style = match format {
        OutputFormat::Terminal => RenderStyle::Terminal,
        OutputFormat::Html | OutputFormat::Json => RenderStyle::Markup,
    };

    let (old_marked, new_marked, changed) = if cli.text {
        let (dist, matrix) = distance(&cli.old, &cli.new);
        let ops = reconstruct(&cli.old, &cli.new, &matrix);
        let (old_line, new_line) = render(&cli.old, &cli.new, &ops, style);
        (Record::text(old_line), Record::text(new_line), dist > 0)
    } else {
        if cli.verbose {
            eprintln!("Parsing {}...", cli.old);
        }
        let old = parse_file(Path::new(&cli.old))
            .with_context(|| format!("Failed to parse old snapshot: {}", cli.old))?;

        if cli.verbose {
            eprintln!("Parsing {}...", cli.new);
        }
        let new = parse_file(Path::new(&cli.new))
            .with_context(|| format!("Failed to parse new snapshot: {}", cli.new))?;

        if old == new {
            println!("No changes detected.");
            return Ok(0);
        }

        if cli.verbose {
            eprintln!("Computing structural diff...");
        }
        let (old_marked, new_marked) = diff(&old, &new, style).context("Structural diff failed")?;
        (old_marked, new_marked, true)
    };

    let options = ReportOptions { title: cli.title };
    let output = format_result(&old_marked, &new_marked, &format, &options)
        .context("Failed to format output")?;
    println!("{output}");

    Ok(if changed { 1 } else { 0 })
}
