//! Diagnostic types and message lookup for the analyzers.
//!
//! Rule metadata (codes, titles, message templates, descriptions) lives in
//! `data.rs`. Every `DiagnosticKind` maps to exactly one descriptor there;
//! several kinds share a rule code (e.g. all `SpecifyFormatProvider*` kinds
//! report as CA1305).

use serde::{Deserialize, Serialize};

use crate::span::Location;

mod data;
pub use data::{DIAGNOSTIC_DESCRIPTORS, diagnostic_codes, diagnostic_messages};

// =============================================================================
// Diagnostic Types
// =============================================================================

/// Diagnostic category (severity).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DiagnosticCategory {
    Warning = 0,
    Error = 1,
    Suggestion = 2,
    Message = 3,
}

impl DiagnosticCategory {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Suggestion => "suggestion",
            Self::Message => "message",
        }
    }
}

/// The condition a diagnostic reports.
///
/// The first nine kinds are the globalization rules; `XmlReaderCreateWrongOverload`
/// belongs to the security group.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DiagnosticKind {
    SpecifyCulture,
    SpecifyFormatProviderAlternate,
    SpecifyFormatProviderAlternateString,
    SpecifyFormatProviderUICulture,
    SpecifyFormatProviderUICultureString,
    SpecifyStringComparison,
    UseOrdinalComparer,
    UseOrdinalComparison,
    UseOrdinalComparisonDefault,
    XmlReaderCreateWrongOverload,
}

impl DiagnosticKind {
    /// All kinds, in descriptor table order.
    pub const ALL: [DiagnosticKind; 10] = [
        Self::SpecifyCulture,
        Self::SpecifyFormatProviderAlternate,
        Self::SpecifyFormatProviderAlternateString,
        Self::SpecifyFormatProviderUICulture,
        Self::SpecifyFormatProviderUICultureString,
        Self::SpecifyStringComparison,
        Self::UseOrdinalComparer,
        Self::UseOrdinalComparison,
        Self::UseOrdinalComparisonDefault,
        Self::XmlReaderCreateWrongOverload,
    ];

    /// The descriptor for this kind.
    #[must_use]
    pub fn descriptor(self) -> &'static DiagnosticDescriptor {
        // The table is indexed by discriminant; see `descriptor_table_matches_kind_order`.
        &DIAGNOSTIC_DESCRIPTORS[self as usize]
    }
}

/// Static metadata describing one reportable condition.
#[derive(Clone, Copy, Debug)]
pub struct DiagnosticDescriptor {
    pub kind: DiagnosticKind,
    /// Numeric rule code; `1304` is reported as `CA1304`.
    pub code: u32,
    pub title: &'static str,
    /// Template with `{0}`, `{1}`, `{2}` placeholders.
    pub message: &'static str,
    pub description: &'static str,
    /// Rule grouping tag, e.g. `"Globalization"`.
    pub group: &'static str,
    pub default_category: DiagnosticCategory,
    pub enabled_by_default: bool,
    pub custom_tags: &'static [&'static str],
}

impl DiagnosticDescriptor {
    /// The rule identifier as shown to users (`CA1304`).
    #[must_use]
    pub fn rule_id(&self) -> String {
        format_rule_id(self.code)
    }
}

/// A reported diagnostic.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostic {
    pub file: String,
    pub start: u32,
    pub length: u32,
    pub message_text: String,
    pub category: DiagnosticCategory,
    pub code: u32,
    pub kind: DiagnosticKind,
    /// The raw template arguments, in placeholder order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub message_args: Vec<String>,
}

impl Diagnostic {
    /// Create a diagnostic for `kind` at `location`, filling the kind's
    /// message template with `args`.
    #[must_use]
    pub fn new(kind: DiagnosticKind, location: &Location, args: &[&str]) -> Self {
        let descriptor = kind.descriptor();
        Self {
            file: location.file.clone(),
            start: location.span.start,
            length: location.span.length,
            message_text: format_message(descriptor.message, args),
            category: descriptor.default_category,
            code: descriptor.code,
            kind,
            message_args: args.iter().map(|arg| (*arg).to_string()).collect(),
        }
    }

    /// Override the severity of this diagnostic.
    #[must_use]
    pub const fn with_category(mut self, category: DiagnosticCategory) -> Self {
        self.category = category;
        self
    }

    #[must_use]
    pub fn rule_id(&self) -> String {
        format_rule_id(self.code)
    }
}

/// Render a numeric rule code as a rule identifier.
#[must_use]
pub fn format_rule_id(code: u32) -> String {
    format!("CA{code}")
}

/// Parse a rule identifier (`CA1304`, case-insensitive prefix) back into its code.
#[must_use]
pub fn parse_rule_id(rule_id: &str) -> Option<u32> {
    let digits = rule_id
        .get(..2)
        .filter(|prefix| prefix.eq_ignore_ascii_case("CA"))
        .map(|_| &rule_id[2..])?;
    digits.parse().ok()
}

/// Expand `{0}`, `{1}`, ... in `template` from `args`.
///
/// A single left-to-right pass: text coming from an argument is never
/// expanded again. Placeholders without a matching argument, and braces
/// that do not form a placeholder, are kept as written.
#[must_use]
pub fn format_message(template: &str, args: &[&str]) -> String {
    let mut result = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        result.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let arg = after.find('}').and_then(|close| {
            let index: usize = after[..close].parse().ok()?;
            Some((args.get(index)?, close))
        });
        match arg {
            Some((arg, close)) => {
                result.push_str(arg);
                rest = &after[close + 1..];
            }
            None => {
                result.push('{');
                rest = after;
            }
        }
    }
    result.push_str(rest);
    result
}

/// Look up the descriptors sharing a rule code.
pub fn descriptors_for_code(code: u32) -> impl Iterator<Item = &'static DiagnosticDescriptor> {
    DIAGNOSTIC_DESCRIPTORS.iter().filter(move |d| d.code == code)
}
