//! Rules this crate can report.

use gca_common::diagnostics::{DIAGNOSTIC_DESCRIPTORS, descriptors_for_code, parse_rule_id};
use gca_common::DiagnosticDescriptor;

/// Every supported descriptor: the nine globalization rules followed by the
/// XmlReader rule.
#[must_use]
pub fn supported_diagnostics() -> &'static [DiagnosticDescriptor] {
    &DIAGNOSTIC_DESCRIPTORS
}

/// Descriptors that report under `rule_id` (`CA1305` has four).
pub fn descriptors_for_rule(rule_id: &str) -> Vec<&'static DiagnosticDescriptor> {
    match parse_rule_id(rule_id) {
        Some(code) => descriptors_for_code(code).collect(),
        None => Vec::new(),
    }
}

#[cfg(test)]
pub(crate) fn globalization_kinds() -> impl Iterator<Item = gca_common::DiagnosticKind> {
    gca_common::DiagnosticKind::ALL
        .into_iter()
        .filter(|kind| kind.descriptor().group == "Globalization")
}
