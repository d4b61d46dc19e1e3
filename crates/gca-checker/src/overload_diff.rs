//! Culture-aware overload search.
//!
//! For a callee `M(p0..pn)` the owner's members are scanned for a sibling
//! `M` with the same return type and exactly one extra parameter. The two
//! parameter lists are aligned by type identity to find the inserted
//! parameter, and its type decides which rule applies. The first matching
//! candidate is reported; the rest are not visited.

use gca_common::DiagnosticKind;
use gca_model::{ParameterDescriptor, SpecialType, SymbolId, SymbolKind, TypeKind};
use smallvec::SmallVec;
use tracing::trace;

use crate::reporter::NodeAnalysis;
use crate::type_relations::is_same_type;

/// Position of the single parameter `matched` has in addition to `seed`.
///
/// `None` when `matched` is not `seed` with exactly one parameter inserted.
pub(crate) fn find_extra_param_position(
    seed: &[ParameterDescriptor],
    matched: &[ParameterDescriptor],
) -> Option<usize> {
    if seed.len() + 1 != matched.len() {
        return None;
    }

    // Walk from the back until the lists disagree.
    let mut extra = None;
    for i in (0..seed.len()).rev() {
        if matched[i + 1].type_id != seed[i].type_id {
            extra = Some(i + 1);
            break;
        }
    }
    let Some(extra) = extra else {
        return Some(0);
    };

    // Everything before the insertion point has to line up as well.
    (0..extra)
        .all(|i| matched[i].type_id == seed[i].type_id)
        .then_some(extra)
}

impl NodeAnalysis<'_, '_> {
    /// Sibling overloads with one more parameter and the same name and
    /// return type, in visiting order.
    fn overload_candidates(&self, need: usize) -> SmallVec<[SymbolId; 4]> {
        let model = self.model();
        let name = self.callee_name();
        let return_type = model.return_type(self.callee);

        let mut candidates: SmallVec<[SymbolId; 4]> = model
            .members(self.owner)
            .iter()
            .copied()
            .filter(|&member| {
                model.symbol_kind(member) == Some(SymbolKind::Method)
                    && model.parameters(member).len() == need
                    && model.symbol_name(member) == Some(name)
                    && model.return_type(member) == return_type
            })
            .collect();

        if self.session.options.deterministic_overload_order && candidates.len() > 1 {
            candidates.sort_by_cached_key(|&candidate| {
                model
                    .parameters(candidate)
                    .iter()
                    .map(|p| model.type_display(p.type_id))
                    .collect::<Vec<_>>()
            });
        }
        candidates
    }

    /// Report a missing culture, format provider or comparison argument when
    /// a suitable overload exists.
    pub(crate) fn check_missing_culture_info(&mut self) {
        let model = self.model();
        if matches!(
            model.type_kind(self.owner),
            TypeKind::Array | TypeKind::TypeParameter | TypeKind::Error
        ) {
            return;
        }

        let seed = model.parameters(self.callee);
        let need = seed.len() + 1;
        let call_site = model.call_target_node(self.node);
        let types = self.types();

        for candidate in self.overload_candidates(need) {
            let params = model.parameters(candidate);
            let Some(extra) = find_extra_param_position(seed, params) else {
                continue;
            };
            // Only leading and trailing insertions are considered.
            if extra != 0 && extra != need - 1 {
                trace!(candidate = candidate.0, extra, "interior insertion skipped");
                continue;
            }
            if !model.is_accessible_at(call_site, candidate) {
                trace!(candidate = candidate.0, "candidate not accessible at call site");
                continue;
            }

            let extra_type = params[extra].type_id;
            let kind = if is_same_type(Some(extra_type), types.string_comparison) {
                DiagnosticKind::SpecifyStringComparison
            } else if self
                .session
                .is_derived_from(extra_type, types.iformat_provider, false)
            {
                if self
                    .session
                    .is_derived_from(extra_type, types.culture_info, true)
                {
                    DiagnosticKind::SpecifyCulture
                } else if self.returns_string() {
                    DiagnosticKind::SpecifyFormatProviderAlternateString
                } else {
                    DiagnosticKind::SpecifyFormatProviderAlternate
                }
            } else {
                continue;
            };

            let preferred = model.symbol_display(candidate);
            self.report_missing_arg(kind, &preferred);
            return;
        }
    }

    pub(crate) fn returns_string(&self) -> bool {
        self.model()
            .return_type(self.callee)
            .is_some_and(|ty| self.model().special_type(ty) == SpecialType::String)
    }
}
