//! paratext CLI - print the paragraphs of a Word document
//!
//! Prints a banner header and every non-blank body paragraph of a `.docx`
//! file, for side-by-side comparison with other copies of the same text.

mod logging;

use clap::Parser;
use colored::*;
use paratext::extract::{ExtractOptions, Extractor, DEFAULT_INPUT};
use paratext::provision::CommandProvisioner;
use paratext::render::{ReportOptions, DEFAULT_TITLE};
use std::io;
use std::path::PathBuf;

/// Print the paragraph text of a Word document
#[derive(Parser)]
#[command(
    name = "paratext",
    author = "iyulab",
    version,
    about = "Print the paragraphs of a Word document",
    long_about = "paratext - print the non-blank body paragraphs of a Word document.\n\n\
                  Each paragraph is preceded by an empty line, under a banner header."
)]
struct Cli {
    /// Input file path
    #[arg(default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Title line printed between the banners
    #[arg(long, default_value = DEFAULT_TITLE)]
    title: String,

    /// Print the install command instead of running it when docx support is missing
    #[arg(long)]
    no_install: bool,
}

fn main() {
    logging::setup_logging();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let options = ExtractOptions::new()
        .with_input(cli.input)
        .with_report(ReportOptions::new().with_title(cli.title))
        .with_auto_provision(!cli.no_install);

    let extractor = Extractor::new(options);
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let outcome = extractor.run(&mut handle, &CommandProvisioner)?;

    tracing::debug!(?outcome, "done");
    Ok(())
}
