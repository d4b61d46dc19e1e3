//! Whole-compilation analysis.
//!
//! Both entry points resolve the well-known types once, visit every call
//! node and every method or constructor declaration the model reports, and
//! return the diagnostics sorted by file, start offset and rule code.

use gca_common::Diagnostic;
use gca_model::SemanticModel;
use rayon::prelude::*;
use tracing::{debug, info_span};

use crate::context::{AnalysisSession, AnalyzerOptions};

/// Analyze `model` on the current thread.
pub fn analyze_compilation(model: &dyn SemanticModel, options: &AnalyzerOptions) -> Vec<Diagnostic> {
    let _span = info_span!("analyze_compilation").entered();
    let session = AnalysisSession::new(model, options);
    if !session.has_work() {
        debug!("no well-known types referenced; skipping compilation");
        return Vec::new();
    }

    let mut diagnostics: Vec<Diagnostic> = model
        .call_nodes()
        .into_iter()
        .flat_map(|node| session.on_call_node(node))
        .collect();
    diagnostics.extend(
        model
            .method_declaration_nodes()
            .into_iter()
            .flat_map(|node| session.on_method_or_constructor_declaration(node)),
    );

    sort_diagnostics(&mut diagnostics);
    debug!(count = diagnostics.len(), "analysis finished");
    diagnostics
}

/// Analyze `model`, fanning nodes out over the rayon thread pool.
///
/// Produces exactly the diagnostics of [`analyze_compilation`], in the same
/// order.
pub fn analyze_compilation_parallel(
    model: &dyn SemanticModel,
    options: &AnalyzerOptions,
) -> Vec<Diagnostic> {
    let _span = info_span!("analyze_compilation_parallel").entered();
    let session = AnalysisSession::new(model, options);
    if !session.has_work() {
        debug!("no well-known types referenced; skipping compilation");
        return Vec::new();
    }

    let calls = model.call_nodes();
    let declarations = model.method_declaration_nodes();

    let (mut diagnostics, declaration_diagnostics): (Vec<Diagnostic>, Vec<Diagnostic>) = rayon::join(
        || {
            calls
                .par_iter()
                .flat_map_iter(|&node| session.on_call_node(node))
                .collect()
        },
        || {
            declarations
                .par_iter()
                .flat_map_iter(|&node| session.on_method_or_constructor_declaration(node))
                .collect()
        },
    );
    diagnostics.extend(declaration_diagnostics);

    sort_diagnostics(&mut diagnostics);
    debug!(count = diagnostics.len(), "parallel analysis finished");
    diagnostics
}

/// Order diagnostics by file, start offset and rule code. The sort is
/// stable, so diagnostics that tie keep their visiting order.
pub fn sort_diagnostics(diagnostics: &mut [Diagnostic]) {
    diagnostics.sort_by(|a, b| {
        a.file
            .cmp(&b.file)
            .then(a.start.cmp(&b.start))
            .then(a.code.cmp(&b.code))
    });
}
