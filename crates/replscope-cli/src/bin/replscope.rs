#![allow(clippy::print_stderr)]

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{IsTerminal, Write};

use replscope_cli::args::CliArgs;
use replscope_cli::driver;
use replscope_cli::reporter::Reporter;

const EXIT_SUCCESS: i32 = 0;
const EXIT_REWRITE_FAILED: i32 = 1;

fn main() -> Result<()> {
    // Initialize tracing if REPLSCOPE_LOG or RUST_LOG is set.
    replscope_cli::tracing_config::init_tracing();

    let args = CliArgs::parse();
    let cwd = std::env::current_dir().context("failed to resolve current directory")?;

    let result = driver::run(&args, &cwd)?;

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(result.output.as_bytes())
        .context("failed to write output")?;
    stdout.flush().context("failed to flush output")?;

    if result.success() {
        std::process::exit(EXIT_SUCCESS);
    }

    let mut reporter = Reporter::new(std::io::stderr().is_terminal());
    for source in &result.sources {
        reporter.add_source(source.name.clone(), source.text.clone());
    }
    eprintln!("{}", reporter.render(&result.diagnostics));
    eprintln!(
        "\nFound {} error{}.",
        result.diagnostics.len(),
        if result.diagnostics.len() == 1 { "" } else { "s" }
    );
    std::process::exit(EXIT_REWRITE_FAILED);
}
