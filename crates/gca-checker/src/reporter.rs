//! Per-node analysis state and diagnostic emission.
//!
//! A `NodeAnalysis` is built fresh for every call or declaration node and
//! dropped when that node is done. The node's location and the callee and
//! caller display strings are computed on first use and reused by every
//! detector that reports on the same node.

use std::cell::OnceCell;

use gca_common::{Diagnostic, DiagnosticCategory, DiagnosticKind, Location};
use gca_model::{NodeIndex, SemanticModel, SymbolId, TypeId};
use tracing::{debug, trace};

use crate::context::AnalysisSession;
use crate::well_known_types::TargetTypes;

pub(crate) struct NodeAnalysis<'s, 'm> {
    pub(crate) session: &'s AnalysisSession<'m>,
    /// The call or declaration node being analyzed.
    pub(crate) node: NodeIndex,
    /// The invoked method, or the declared method for declarations.
    pub(crate) callee: SymbolId,
    pub(crate) owner: TypeId,
    location: OnceCell<Option<Location>>,
    callee_display: OnceCell<String>,
    caller_display: OnceCell<String>,
    diagnostics: Vec<Diagnostic>,
}

impl<'s, 'm> NodeAnalysis<'s, 'm> {
    pub(crate) fn new(
        session: &'s AnalysisSession<'m>,
        node: NodeIndex,
        callee: SymbolId,
        owner: TypeId,
    ) -> Self {
        Self {
            session,
            node,
            callee,
            owner,
            location: OnceCell::new(),
            callee_display: OnceCell::new(),
            caller_display: OnceCell::new(),
            diagnostics: Vec::new(),
        }
    }

    #[inline]
    pub(crate) fn model(&self) -> &'m dyn SemanticModel {
        self.session.model
    }

    #[inline]
    pub(crate) fn types(&self) -> &'s TargetTypes {
        &self.session.types
    }

    pub(crate) fn callee_name(&self) -> &'m str {
        self.model().symbol_name(self.callee).unwrap_or_default()
    }

    fn location(&self) -> Option<&Location> {
        self.location
            .get_or_init(|| self.model().node_location(self.node))
            .as_ref()
    }

    fn callee_display(&self) -> &str {
        self.callee_display
            .get_or_init(|| self.model().symbol_display(self.callee))
    }

    fn caller_display(&self) -> &str {
        self.caller_display.get_or_init(|| {
            self.model()
                .enclosing_construct_symbol(self.node)
                .map(|caller| self.model().symbol_display(caller))
                .unwrap_or_default()
        })
    }

    /// Report a missing culture/format/comparison argument.
    ///
    /// Message arguments: callee, caller, preferred replacement.
    pub(crate) fn report_missing_arg(&mut self, kind: DiagnosticKind, preferred: &str) {
        let Some(location) = self.location().cloned() else {
            trace!(node = self.node.0, "call node has no location");
            return;
        };
        let callee = self.callee_display().to_string();
        let caller = self.caller_display().to_string();
        self.emit(kind, &location, &[&callee, &caller, preferred]);
    }

    /// Report a culture-sensitive argument passed where it should not be.
    ///
    /// Message arguments: caller, misused argument text, callee.
    pub(crate) fn report_misused_arg(&mut self, kind: DiagnosticKind, misused: &str) {
        let Some(location) = self.location().cloned() else {
            trace!(node = self.node.0, "call node has no location");
            return;
        };
        let callee = self.callee_display().to_string();
        let caller = self.caller_display().to_string();
        self.emit(kind, &location, &[&caller, misused, &callee]);
    }

    /// Report a culture-sensitive default value on a declared parameter, at
    /// the default value expression.
    pub(crate) fn report_misused_default(
        &mut self,
        kind: DiagnosticKind,
        misused: &str,
        default_node: NodeIndex,
    ) {
        let Some(location) = self.model().node_location(default_node) else {
            trace!(node = default_node.0, "default value has no location");
            return;
        };
        let method = self.callee_display().to_string();
        self.emit(kind, &location, &[&method, misused]);
    }

    /// Report at the analyzed node with explicit message arguments.
    pub(crate) fn report_at_node(&mut self, kind: DiagnosticKind, args: &[&str]) {
        let Some(location) = self.location().cloned() else {
            trace!(node = self.node.0, "call node has no location");
            return;
        };
        self.emit(kind, &location, args);
    }

    pub(crate) fn callee_display_owned(&self) -> String {
        self.callee_display().to_string()
    }

    fn emit(&mut self, kind: DiagnosticKind, location: &Location, args: &[&str]) {
        let descriptor = kind.descriptor();
        if !self.session.is_rule_enabled(descriptor.code) {
            trace!(rule = %descriptor.rule_id(), ?kind, "rule disabled");
            return;
        }
        let mut diagnostic = Diagnostic::new(kind, location, args);
        if self.session.options.warnings_as_errors {
            diagnostic = diagnostic.with_category(DiagnosticCategory::Error);
        }
        debug!(
            rule = %descriptor.rule_id(),
            ?kind,
            file = %location.file,
            start = location.span.start,
            "report"
        );
        self.diagnostics.push(diagnostic);
    }

    pub(crate) fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}
