use anyhow::Result;
use clap::Parser;
use std::io::IsTerminal;

use gca_cli::args::{CliArgs, OutputFormat};
use gca_cli::reporter::{Reporter, render_json};
use gca_cli::{driver, tracing_config};

const EXIT_SUCCESS: i32 = 0;
/// At least one diagnostic was reported with severity `Error`.
const EXIT_ERRORS_REPORTED: i32 = 1;

fn main() -> Result<()> {
    // GCA_LOG / RUST_LOG, GCA_LOG_FORMAT=text|tree|json (see tracing_config.rs).
    tracing_config::init_tracing();

    let args = CliArgs::parse();
    let diagnostics = driver::run(&args)?;

    match args.format {
        OutputFormat::Json => println!("{}", render_json(&diagnostics)?),
        OutputFormat::Text => {
            let pretty = args
                .pretty
                .unwrap_or_else(|| std::io::stdout().is_terminal());
            let reporter = Reporter::new(pretty);
            print!("{}", reporter.render(&diagnostics));
            let summary = reporter.summary(&diagnostics);
            if !summary.is_empty() {
                println!("{summary}");
            }
        }
    }

    if driver::has_errors(&diagnostics) {
        std::process::exit(EXIT_ERRORS_REPORTED);
    }
    std::process::exit(EXIT_SUCCESS);
}
