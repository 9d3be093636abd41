//! `gensubstate` command line entry point, meant to be run from `go generate`:
//!
//! ```text
//! //go:generate gensubstate --type-name=ServiceLocator
//! ```
//!
//! `go generate` exports the invoking file as `GOFILE`, which is used as the
//! source unless `--source` is given.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use gensubstate::{
    generate, GenerateOptions, GofmtFormatter, SourceFormatter, TreeSitterFormatter,
    DEFAULT_DESTINATION, DEFAULT_TYPE_NAME,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FormatterKind {
    /// Validate with the bundled Go grammar and normalise whitespace
    Builtin,
    /// Pipe through an external gofmt binary
    Gofmt,
}

/// Generate a field-backed test implementation of a Go interface
#[derive(Debug, Parser)]
#[command(name = "gensubstate", version, about)]
struct Args {
    /// Output file; must end in .go
    #[arg(short = 'o', long = "out-file", alias = "outFile", default_value = DEFAULT_DESTINATION)]
    out_file: PathBuf,

    /// Interface to implement (case-insensitive)
    #[arg(short = 't', long = "type-name", alias = "typeName", default_value = DEFAULT_TYPE_NAME)]
    type_name: String,

    /// Go file declaring the interface
    #[arg(long, env = "GOFILE")]
    source: PathBuf,

    #[arg(long, value_enum, default_value_t = FormatterKind::Builtin)]
    formatter: FormatterKind,

    /// gofmt binary used by `--formatter gofmt`
    #[arg(long, default_value = "gofmt")]
    gofmt_path: PathBuf,

    /// Log debug output (RUST_LOG takes precedence)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(args: &Args) -> Result<()> {
    let options = GenerateOptions::new(&args.source)
        .with_destination(&args.out_file)
        .with_type_name(&args.type_name);

    let formatter: Box<dyn SourceFormatter> = match args.formatter {
        FormatterKind::Builtin => Box::new(TreeSitterFormatter),
        FormatterKind::Gofmt => Box::new(GofmtFormatter::new(&args.gofmt_path)),
    };

    debug!(
        "Generating {} for {} from {}",
        options.destination.display(),
        options.type_name,
        options.source.display()
    );

    generate(&options, formatter.as_ref()).with_context(|| {
        format!(
            "generate {} from {}",
            options.destination.display(),
            options.source.display()
        )
    })?;

    Ok(())
}
