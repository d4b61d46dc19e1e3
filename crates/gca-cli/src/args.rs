use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the gca binary.
#[derive(Parser, Debug)]
#[command(
    name = "gca",
    version,
    about = "Globalization analyzers (CA1304, CA1305, CA1307, CA1309) for compilation snapshots"
)]
pub struct CliArgs {
    /// Compilation snapshot to analyze (JSON).
    pub snapshot: PathBuf,

    /// Analyzer options file (JSON, camelCase keys).
    #[arg(long)]
    pub options: Option<PathBuf>,

    /// Rule id to turn off; may be repeated.
    #[arg(long = "disable", value_name = "RULE")]
    pub disable: Vec<String>,

    /// Output format for diagnostics.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Report every diagnostic as an error.
    #[arg(long = "warnings-as-errors", alias = "warningsAsErrors")]
    pub warnings_as_errors: bool,

    /// Visit overload candidates in parameter-type order instead of member order.
    #[arg(long = "deterministic-overload-order")]
    pub deterministic_overload_order: bool,

    /// Skip the XmlReader.Create overload check.
    #[arg(long = "no-xml-check")]
    pub no_xml_check: bool,

    /// Analyze nodes on the rayon thread pool.
    #[arg(long)]
    pub parallel: bool,

    /// Colorize text output. Defaults to whether stdout is a terminal.
    #[arg(long)]
    pub pretty: Option<bool>,
}

/// How diagnostics are printed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `file(start,length): warning CA1304: message`, one per line.
    Text,
    /// A JSON array of diagnostics.
    Json,
}
