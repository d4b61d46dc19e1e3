//! Type identity and derivation queries over the facade.

use gca_common::limits::{MAX_BASE_TYPE_DEPTH, MAX_INTERFACE_VISITS};
use gca_model::{SemanticModel, TypeId, TypeKind};
use rustc_hash::FxHashSet;

/// Identity comparison that never matches an unresolved type.
#[inline]
#[must_use]
pub fn is_same_type(ty: Option<TypeId>, candidate: Option<TypeId>) -> bool {
    matches!((ty, candidate), (Some(a), Some(b)) if a == b)
}

/// Whether `ty` is `candidate` or derives from it.
///
/// With `base_types_only`, only the base class chain is walked. Otherwise an
/// interface `candidate` also matches when `ty` implements it, directly or
/// through another interface.
#[must_use]
pub fn is_derived_from(
    model: &dyn SemanticModel,
    ty: TypeId,
    candidate: Option<TypeId>,
    base_types_only: bool,
) -> bool {
    let Some(candidate) = candidate else {
        return false;
    };

    if !base_types_only
        && model.type_kind(candidate) == TypeKind::Interface
        && implements_interface(model, ty, candidate)
    {
        return true;
    }

    let mut current = Some(ty);
    for _ in 0..MAX_BASE_TYPE_DEPTH {
        match current {
            Some(t) if t == candidate => return true,
            Some(t) => current = model.base_type(t),
            None => return false,
        }
    }
    false
}

/// Whether `interface` is among the interfaces of `ty` or its base classes,
/// following interface inheritance.
fn implements_interface(model: &dyn SemanticModel, ty: TypeId, interface: TypeId) -> bool {
    let mut visited: FxHashSet<TypeId> = FxHashSet::default();
    let mut pending: Vec<TypeId> = Vec::new();

    let mut current = Some(ty);
    for _ in 0..MAX_BASE_TYPE_DEPTH {
        let Some(t) = current else { break };
        pending.extend_from_slice(model.interfaces(t));
        current = model.base_type(t);
    }

    while let Some(next) = pending.pop() {
        if next == interface {
            return true;
        }
        if visited.len() >= MAX_INTERFACE_VISITS {
            return false;
        }
        if visited.insert(next) {
            pending.extend_from_slice(model.interfaces(next));
        }
    }
    false
}
