//! Reads stored result pages from a directory and appends one SQL insert per
//! medalist or finalist to the output file.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use medalist_extract::{
    HeightStyle, Options, OutputFormat, Pipeline, DEFAULT_BADGE_MARKER, DEFAULT_MIN_TABLE_ROWS,
    DEFAULT_OUTPUT,
};

#[derive(Parser, Debug)]
#[command(name = "extract_medalists")]
#[command(about = "Extract medalist records from stored Wikipedia result pages")]
struct Args {
    /// Directory of stored HTML pages
    input_dir: PathBuf,

    /// Output file; appended to if it exists
    #[arg(short = 'o', long = "output", default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Minimum body rows for a finals table
    #[arg(long = "min-rows", default_value_t = DEFAULT_MIN_TABLE_ROWS)]
    min_rows: usize,

    /// Image alt substring marking a medal badge
    #[arg(long = "marker", default_value = DEFAULT_BADGE_MARKER)]
    marker: String,

    /// Render missing heights as 'None' instead of NULL
    #[arg(long = "legacy-none")]
    legacy_none: bool,

    /// Output format
    #[arg(long = "format", value_enum, default_value_t = Format::Sql)]
    format: Format,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Sql,
    Jsonl,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let options = Options {
        min_table_rows: args.min_rows,
        badge_marker: args.marker,
        height_style: if args.legacy_none {
            HeightStyle::LegacyNone
        } else {
            HeightStyle::Null
        },
        format: match args.format {
            Format::Sql => OutputFormat::Sql,
            Format::Jsonl => OutputFormat::JsonLines,
        },
        ..Options::new(&args.input_dir, &args.output)
    };

    let pipeline = Pipeline::new(options);
    let summary = pipeline
        .run()
        .with_context(|| format!("extracting from {}", args.input_dir.display()))?;

    println!(
        "Wrote {} records from {} pages ({} with a finals table) to {}",
        summary.records,
        summary.documents,
        summary.tables_found,
        pipeline.options().output_path.display()
    );
    Ok(())
}
