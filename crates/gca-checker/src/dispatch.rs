//! Node entry points.
//!
//! The driver hands every call-like node to [`AnalysisSession::on_call_node`]
//! and every method or constructor declaration to
//! [`AnalysisSession::on_method_or_constructor_declaration`]. Each call
//! builds its own `NodeAnalysis`, so nodes can be analyzed in any order and
//! on any thread.

use gca_common::Diagnostic;
use gca_model::{NodeIndex, SymbolId, SymbolKind, TypeId};
use tracing::{debug_span, trace};

use crate::context::AnalysisSession;
use crate::reporter::NodeAnalysis;

impl AnalysisSession<'_> {
    /// A method symbol and its containing type, or `None` when either is
    /// missing.
    fn method_with_owner(&self, symbol: Option<SymbolId>) -> Option<(SymbolId, TypeId)> {
        let symbol = symbol?;
        if self.model.symbol_kind(symbol) != Some(SymbolKind::Method) {
            return None;
        }
        Some((symbol, self.model.containing_type(symbol)?))
    }

    /// Analyze an invocation or object-creation node.
    pub fn on_call_node(&self, node: NodeIndex) -> Vec<Diagnostic> {
        let _span = debug_span!("analyze_call", node = node.0).entered();

        let Some((callee, owner)) = self.method_with_owner(self.model.resolve_callee(node)) else {
            trace!("callee did not resolve to a method");
            return Vec::new();
        };
        let mut analysis = NodeAnalysis::new(self, node, callee, owner);

        if self.xml_check_enabled() {
            analysis.check_xml_reader_create();
        }

        if self.globalization_enabled() {
            if analysis.is_exempt() {
                trace!(callee = callee.0, "exempt callee");
            } else if !analysis.check_bad_string_methods() {
                analysis.check_missing_culture_info();
                analysis.check_misused_culture_info();
            }
        }

        analysis.into_diagnostics()
    }

    /// Analyze a method or constructor declaration's optional parameters.
    pub fn on_method_or_constructor_declaration(&self, node: NodeIndex) -> Vec<Diagnostic> {
        let _span = debug_span!("analyze_method_declaration", node = node.0).entered();

        if !self.globalization_enabled() {
            return Vec::new();
        }
        let declared = self.model.resolve_declared_method(node);
        let Some((method, owner)) = self.method_with_owner(declared) else {
            trace!("declaration did not resolve to a method");
            return Vec::new();
        };

        let mut analysis = NodeAnalysis::new(self, node, method, owner);
        analysis.check_declared_defaults();
        analysis.into_diagnostics()
    }
}
