//! Analysis options and the per-compilation session.
//!
//! An `AnalysisSession` is created once per compilation, after the
//! well-known types are resolved, and is then shared read-only by every
//! node analysis. Nothing in it is mutated after construction, so a session
//! can be used from several threads at once.

use gca_common::diagnostics::parse_rule_id;
use gca_model::{SemanticModel, TypeId};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::type_relations;
use crate::well_known_types::TargetTypes;

/// Host-provided analyzer configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalyzerOptions {
    /// Rule ids (`CA1304`, ...) that must not be reported.
    pub disabled_rules: Vec<String>,
    /// Report every diagnostic as an error instead of a warning.
    pub warnings_as_errors: bool,
    /// Visit overload candidates sorted by their parameter type display
    /// strings instead of in the model's member order.
    pub deterministic_overload_order: bool,
    /// Enable the `XmlReader.Create` overload check.
    pub check_xml_reader_create: bool,
}

impl Default for AnalyzerOptions {
    fn default() -> Self {
        Self {
            disabled_rules: Vec::new(),
            warnings_as_errors: false,
            deterministic_overload_order: false,
            check_xml_reader_create: true,
        }
    }
}

impl AnalyzerOptions {
    #[must_use]
    pub fn with_disabled_rule(mut self, rule_id: &str) -> Self {
        self.disabled_rules.push(rule_id.to_string());
        self
    }

    /// Numeric codes of the disabled rules. Ids that do not parse are
    /// logged and ignored.
    #[must_use]
    pub fn disabled_codes(&self) -> FxHashSet<u32> {
        let mut codes = FxHashSet::default();
        for rule_id in &self.disabled_rules {
            match parse_rule_id(rule_id) {
                Some(code) => {
                    codes.insert(code);
                }
                None => warn!(rule_id = %rule_id, "ignoring unrecognized rule id"),
            }
        }
        codes
    }
}

/// Read-only state shared by every node analysis of one compilation.
pub struct AnalysisSession<'m> {
    pub(crate) model: &'m dyn SemanticModel,
    pub(crate) types: TargetTypes,
    pub(crate) options: AnalyzerOptions,
    disabled_codes: FxHashSet<u32>,
}

impl<'m> AnalysisSession<'m> {
    /// Resolve the well-known types of `model` and build a session.
    pub fn new(model: &'m dyn SemanticModel, options: &AnalyzerOptions) -> Self {
        Self::with_types(model, TargetTypes::resolve(model), options)
    }

    /// Build a session over already-resolved types.
    pub fn with_types(
        model: &'m dyn SemanticModel,
        types: TargetTypes,
        options: &AnalyzerOptions,
    ) -> Self {
        Self {
            model,
            types,
            options: options.clone(),
            disabled_codes: options.disabled_codes(),
        }
    }

    #[must_use]
    pub const fn types(&self) -> &TargetTypes {
        &self.types
    }

    #[must_use]
    pub const fn options(&self) -> &AnalyzerOptions {
        &self.options
    }

    /// Whether any globalization rule can fire in this compilation.
    #[must_use]
    pub const fn globalization_enabled(&self) -> bool {
        self.types.any_present()
    }

    /// Whether the `XmlReader.Create` check can fire in this compilation.
    #[must_use]
    pub const fn xml_check_enabled(&self) -> bool {
        self.options.check_xml_reader_create && self.types.xml_present()
    }

    /// Whether there is anything to analyze at all.
    #[must_use]
    pub const fn has_work(&self) -> bool {
        self.globalization_enabled() || self.xml_check_enabled()
    }

    #[must_use]
    pub fn is_rule_enabled(&self, code: u32) -> bool {
        !self.disabled_codes.contains(&code)
    }

    #[inline]
    pub(crate) fn is_derived_from(
        &self,
        ty: TypeId,
        candidate: Option<TypeId>,
        base_types_only: bool,
    ) -> bool {
        type_relations::is_derived_from(self.model, ty, candidate, base_types_only)
    }
}
