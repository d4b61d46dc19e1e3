//! Culture-sensitive `StringComparison` defaults on optional parameters.

use gca_common::DiagnosticKind;
use gca_model::{ConstantValue, NodeIndex, ParameterDescriptor, TypeKind};
use tracing::{trace, warn};

use crate::reporter::NodeAnalysis;
use crate::type_relations::is_same_type;

// Raw `System.StringComparison` values. Defaults are matched by number, not
// by enumerator name.
pub(crate) const STRING_COMPARISON_INVARIANT_CULTURE: i64 = 2;
pub(crate) const STRING_COMPARISON_INVARIANT_CULTURE_IGNORE_CASE: i64 = 3;

/// Where an optional parameter's default is being checked from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum DefaultSite {
    /// A call that leaves the parameter out.
    CallSite,
    /// The method declaration; carries the default value expression.
    Declaration(NodeIndex),
}

/// Enumerator name of an invariant-culture comparison value.
pub(crate) const fn invariant_comparison_name(value: i64) -> Option<&'static str> {
    match value {
        STRING_COMPARISON_INVARIANT_CULTURE => Some("InvariantCulture"),
        STRING_COMPARISON_INVARIANT_CULTURE_IGNORE_CASE => Some("InvariantCultureIgnoreCase"),
        _ => None,
    }
}

impl NodeAnalysis<'_, '_> {
    pub(crate) fn check_optional_param_default(
        &mut self,
        param: &ParameterDescriptor,
        site: DefaultSite,
    ) {
        let model = self.model();
        let ty = param.type_id;
        if !model.special_type(ty).is_none() || model.type_kind(ty) == TypeKind::Array {
            return;
        }
        if !is_same_type(Some(ty), self.types().string_comparison) {
            return;
        }

        let Some(value) = param.explicit_default.as_ref().and_then(ConstantValue::as_i64) else {
            warn!(
                node = self.node.0,
                param = %param.name,
                "StringComparison parameter default is not an integer"
            );
            return;
        };
        let Some(name) = invariant_comparison_name(value) else {
            return;
        };

        match site {
            DefaultSite::CallSite => {
                self.report_misused_arg(DiagnosticKind::UseOrdinalComparison, name);
            }
            DefaultSite::Declaration(default_node) => {
                let text = model.node_text(default_node).unwrap_or(name);
                self.report_misused_default(
                    DiagnosticKind::UseOrdinalComparisonDefault,
                    text,
                    default_node,
                );
            }
        }
    }

    /// Check the trailing optional parameters of the declared method, last
    /// to first, stopping at the first one without an explicit default.
    pub(crate) fn check_declared_defaults(&mut self) {
        let model = self.model();
        let params = model.parameters(self.callee);
        for (index, param) in params.iter().enumerate().rev() {
            if !param.has_explicit_default() {
                return;
            }
            let Some(default_node) = model.default_value_expression(self.node, index) else {
                trace!(node = self.node.0, index, "no default value expression");
                continue;
            };
            self.check_optional_param_default(param, DefaultSite::Declaration(default_node));
        }
    }
}
