//! Culture-sensitive values passed as arguments.
//!
//! Arguments are paired with the callee's parameters by position. Only
//! arguments that reference a well-known field, property or constructor are
//! inspected; parameters the call leaves out fall back to the default-value
//! check.

use gca_common::DiagnosticKind;
use gca_common::limits::MAX_NESTED_CONSTRUCTOR_ARGUMENTS;
use gca_model::{MethodKind, NodeIndex, SpecialType, SymbolKind, TypeId, TypeKind};
use tracing::warn;

use crate::default_values::DefaultSite;
use crate::reporter::NodeAnalysis;
use crate::type_relations::is_same_type;

const INVARIANT_CULTURE: &str = "InvariantCulture";
const INVARIANT_CULTURE_IGNORE_CASE: &str = "InvariantCultureIgnoreCase";
const DEFAULT_INVARIANT: &str = "DefaultInvariant";
const UI_CULTURE_PROPERTIES: [&str; 2] = ["CurrentUICulture", "InstalledUICulture"];
/// String members whose culture argument only controls comparison.
const COMPARING_STRING_METHODS: [&str; 3] = ["Compare", "StartsWith", "EndsWith"];

fn is_invariant_name(name: &str) -> bool {
    name == INVARIANT_CULTURE || name == INVARIANT_CULTURE_IGNORE_CASE
}

impl NodeAnalysis<'_, '_> {
    pub(crate) fn check_misused_culture_info(&mut self) {
        let model = self.model();
        let params = model.parameters(self.callee);
        if params.is_empty() {
            return;
        }

        let arguments = model.call_argument_expressions(self.node);
        // Expanded `params` calls carry more arguments than parameters; the
        // walk below stops at the variadic tail.
        let variadic = params.last().is_some_and(|param| param.is_params);
        if arguments.len() > params.len() && !variadic {
            warn!(
                node = self.node.0,
                arguments = arguments.len(),
                parameters = params.len(),
                "call has more arguments than parameters"
            );
            return;
        }

        for (&argument, param) in arguments.iter().zip(params) {
            let param_type = param.type_id;
            if !model.special_type(param_type).is_none() {
                continue;
            }
            if model.type_kind(param_type) == TypeKind::Array {
                if param.is_params {
                    return;
                }
                continue;
            }
            self.check_argument(argument, param_type);
        }

        // Parameters the call leaves out.
        for (index, param) in params.iter().enumerate().skip(arguments.len()) {
            if !param.has_explicit_default() {
                if param.is_params && index + 1 == params.len() {
                    return;
                }
                continue;
            }
            self.check_optional_param_default(param, DefaultSite::CallSite);
        }
    }

    fn check_argument(&mut self, argument: NodeIndex, param_type: TypeId) {
        let model = self.model();
        let types = self.types();
        let Some(symbol) = model.resolve_symbol(argument) else {
            return;
        };
        let Some(symbol_kind) = model.symbol_kind(symbol) else {
            return;
        };
        let name = model.symbol_name(symbol).unwrap_or_default();
        let text = model.node_text(argument).unwrap_or_default();

        // StringComparison.InvariantCulture[IgnoreCase]
        if symbol_kind == SymbolKind::Field
            && is_same_type(Some(param_type), types.string_comparison)
        {
            if is_invariant_name(name) {
                self.report_misused_arg(DiagnosticKind::UseOrdinalComparison, text);
            }
            return;
        }

        match symbol_kind {
            SymbolKind::Field | SymbolKind::Property => {
                let Some(arg_type) = model.resolve_expression_type(argument) else {
                    return;
                };
                if is_same_type(Some(arg_type), types.culture_info) {
                    self.check_culture_info_argument(name, text, param_type);
                } else if self.session.is_derived_from(arg_type, types.string_comparer, true)
                    && is_invariant_name(name)
                {
                    self.report_misused_arg(DiagnosticKind::UseOrdinalComparer, text);
                } else if name == DEFAULT_INVARIANT
                    && (is_same_type(Some(arg_type), types.collections_comparer)
                        || self.session.is_derived_from(
                            arg_type,
                            types.case_insensitive_comparer,
                            true,
                        ))
                {
                    self.report_misused_arg(DiagnosticKind::UseOrdinalComparer, text);
                }
            }
            SymbolKind::Method
                if model.method_kind(symbol) == Some(MethodKind::Constructor)
                    && is_same_type(Some(param_type), types.collections_icomparer) =>
            {
                self.check_comparer_construction(argument, text);
            }
            _ => {}
        }
    }

    /// A `CultureInfo` field or property passed as an argument.
    fn check_culture_info_argument(&mut self, name: &str, text: &str, param_type: TypeId) {
        let model = self.model();
        let types = self.types();

        if model.special_type(self.owner) == SpecialType::String
            && model.parameters(self.callee).len() > 1
            && self
                .session
                .is_derived_from(param_type, types.iformat_provider, false)
            && name == INVARIANT_CULTURE
            && COMPARING_STRING_METHODS.contains(&self.callee_name())
        {
            self.report_misused_arg(DiagnosticKind::UseOrdinalComparison, text);
        }

        if is_same_type(Some(param_type), types.iformat_provider)
            && UI_CULTURE_PROPERTIES.contains(&name)
        {
            let kind = if self.returns_string() {
                DiagnosticKind::SpecifyFormatProviderUICultureString
            } else {
                DiagnosticKind::SpecifyFormatProviderUICulture
            };
            self.report_misused_arg(kind, text);
        }
    }

    /// `new Comparer(CultureInfo.InvariantCulture)` passed as an `IComparer`.
    fn check_comparer_construction(&mut self, argument: NodeIndex, text: &str) {
        let model = self.model();
        let culture_info = self.types().culture_info;
        let nested = model.object_creation_argument_expressions(argument);
        for &nested_arg in nested.iter().take(MAX_NESTED_CONSTRUCTOR_ARGUMENTS) {
            let Some(symbol) = model.resolve_symbol(nested_arg) else {
                continue;
            };
            if model.symbol_kind(symbol) == Some(SymbolKind::Property)
                && model.symbol_name(symbol) == Some(INVARIANT_CULTURE)
                && is_same_type(model.resolve_expression_type(nested_arg), culture_info)
            {
                self.report_misused_arg(DiagnosticKind::UseOrdinalComparison, text);
            }
        }
    }
}
