//! oasx CLI - extract tagged comments into an OpenAPI fragment file.
//!
//! Walks a directory of Go source files, pulls out comment blocks
//! tagged with the `+extract` token family, and writes the assembled
//! fragments to an output file (or stdout when the output is `-`).

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use colored::Colorize;
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use oasx_core::pipeline;

/// Extract OpenAPI fragments from tagged Go source comments.
///
/// Files are processed in lexicographic order, except that doc.go is
/// always processed first; comments within a file are extracted in the
/// order they appear. Put a fixed header fragment in doc.go to have it
/// lead the output.
#[derive(Parser)]
#[command(name = "oasx")]
#[command(author, version)]
#[command(about = "Extract OpenAPI fragments from tagged Go source comments")]
struct Cli {
    /// Directory containing Go source files
    source_dir: Option<String>,

    /// File to write, or `-` for stdout
    output_file: Option<String>,

    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,
}

fn setup_logging(verbose: bool, quiet: bool) {
    let filter = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();
}

/// Write each fragment followed by one line terminator.
fn write_fragments<W: Write>(out: &mut W, fragments: &[String]) -> io::Result<()> {
    for fragment in fragments {
        writeln!(out, "{}", fragment)?;
    }
    Ok(())
}

fn run(source_dir: &str, output_file: &str) -> Result<()> {
    let fragments = pipeline::run(Path::new(source_dir))
        .with_context(|| format!("Error parsing files in {}", source_dir))?;
    debug!(count = fragments.len(), "extraction complete");

    if output_file == "-" {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        write_fragments(&mut out, &fragments)?;
    } else {
        let mut out = File::create(output_file)
            .with_context(|| format!("Error creating output file {}", output_file))?;
        write_fragments(&mut out, &fragments)?;
        eprintln!(
            "{} Written {} fragments to {}",
            "SUCCESS:".green().bold(),
            fragments.len(),
            output_file.cyan()
        );
    }

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    // Missing positional arguments print usage and exit cleanly.
    let (source_dir, output_file) = match (cli.source_dir, cli.output_file) {
        (Some(src), Some(out)) => (src, out),
        _ => {
            let _ = Cli::command().print_help();
            println!();
            return Ok(());
        }
    };

    run(&source_dir, &output_file)
}
