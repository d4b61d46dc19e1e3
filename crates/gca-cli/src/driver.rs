//! Snapshot loading and analysis for the CLI.

use anyhow::{Context, Result, bail};
use std::path::Path;
use tracing::{debug, info_span};

use gca_checker::{AnalyzerOptions, analyze_compilation, analyze_compilation_parallel};
use gca_common::{Diagnostic, DiagnosticCategory};
use gca_model::CompilationModel;

use crate::args::CliArgs;

/// Read and validate a compilation snapshot.
pub fn load_snapshot(path: &Path) -> Result<CompilationModel> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read snapshot {}", path.display()))?;
    let model = CompilationModel::from_json(&text)
        .with_context(|| format!("failed to parse snapshot {}", path.display()))?;

    let problems = model.validate();
    if let Some(first) = problems.first() {
        bail!(
            "snapshot {} is inconsistent: {first} ({} problem(s) in total)",
            path.display(),
            problems.len()
        );
    }
    Ok(model)
}

/// Options from `--options`, with the command-line switches applied on top.
pub fn resolve_options(args: &CliArgs) -> Result<AnalyzerOptions> {
    let mut options = match &args.options {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read options {}", path.display()))?;
            serde_json::from_str::<AnalyzerOptions>(&text)
                .with_context(|| format!("failed to parse options {}", path.display()))?
        }
        None => AnalyzerOptions::default(),
    };

    options.disabled_rules.extend(args.disable.iter().cloned());
    if args.warnings_as_errors {
        options.warnings_as_errors = true;
    }
    if args.deterministic_overload_order {
        options.deterministic_overload_order = true;
    }
    if args.no_xml_check {
        options.check_xml_reader_create = false;
    }
    Ok(options)
}

/// Load the snapshot named by `args` and analyze it.
pub fn run(args: &CliArgs) -> Result<Vec<Diagnostic>> {
    let _span = info_span!("gca_run", snapshot = %args.snapshot.display()).entered();
    let options = resolve_options(args)?;
    let model = load_snapshot(&args.snapshot)?;
    debug!(
        types = model.types.len(),
        symbols = model.symbols.len(),
        nodes = model.nodes.len(),
        "snapshot loaded"
    );

    let diagnostics = if args.parallel {
        analyze_compilation_parallel(&model, &options)
    } else {
        analyze_compilation(&model, &options)
    };
    Ok(diagnostics)
}

#[must_use]
pub fn has_errors(diagnostics: &[Diagnostic]) -> bool {
    diagnostics
        .iter()
        .any(|diag| diag.category == DiagnosticCategory::Error)
}
