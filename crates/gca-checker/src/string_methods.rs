//! Fixed replacements for `string.Format` and `string.CompareTo`.

use gca_common::DiagnosticKind;
use gca_model::SpecialType;
use tracing::warn;

use crate::reporter::NodeAnalysis;

pub(crate) const PREFERRED_STRING_FORMAT: &str =
    "string.Format(IFormatProvider, string, params object[])";
pub(crate) const PREFERRED_STRING_COMPARE: &str = "string.Compare(string, string, StringComparison)";

impl NodeAnalysis<'_, '_> {
    /// Report the known-bad string members. Returns `true` when one was
    /// reported, in which case no other globalization check runs for the node.
    pub(crate) fn check_bad_string_methods(&mut self) -> bool {
        let model = self.model();
        if model.special_type(self.owner) != SpecialType::String {
            return false;
        }

        match self.callee_name() {
            "Format" => {
                let Some(first) = model.parameters(self.callee).first() else {
                    warn!(node = self.node.0, "string.Format resolved without parameters");
                    return false;
                };
                if self
                    .session
                    .is_derived_from(first.type_id, self.types().iformat_provider, false)
                {
                    return false;
                }
                self.report_missing_arg(
                    DiagnosticKind::SpecifyFormatProviderAlternateString,
                    PREFERRED_STRING_FORMAT,
                );
                true
            }
            "CompareTo" => {
                self.report_missing_arg(
                    DiagnosticKind::SpecifyStringComparison,
                    PREFERRED_STRING_COMPARE,
                );
                true
            }
            _ => false,
        }
    }
}
