//! Structural validation of compilation snapshots.
//!
//! Snapshots are produced by external hosts; before analysis a driver can
//! ask for every broken id link so a malformed export is reported instead of
//! silently producing no diagnostics.

use std::fmt;

use rustc_hash::FxHashSet;
use tracing::debug;

use crate::compilation::CompilationModel;
use crate::ids::{NodeIndex, SymbolId, TypeId};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ModelValidationError {
    /// A type lists a member id that does not exist.
    BrokenMemberLink { type_id: u32, symbol_id: u32 },
    /// A type's base type or interface id does not exist.
    BrokenTypeLink { type_id: u32, target: u32 },
    /// A symbol refers to a type id (owner, declared type, parameter type
    /// or return type) that does not exist.
    BrokenSymbolTypeLink { symbol_id: u32, name: String, type_id: u32 },
    /// A node refers to a symbol that does not exist.
    BrokenNodeSymbolLink { node_index: u32, symbol_id: u32 },
    /// A node refers to an argument or default value node that does not exist.
    BrokenNodeLink { node_index: u32, target: u32 },
    /// A base class chain loops back on itself.
    CyclicBaseType { type_id: u32 },
}

impl fmt::Display for ModelValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BrokenMemberLink { type_id, symbol_id } => {
                write!(f, "type #{type_id} lists missing member symbol #{symbol_id}")
            }
            Self::BrokenTypeLink { type_id, target } => {
                write!(f, "type #{type_id} refers to missing type #{target}")
            }
            Self::BrokenSymbolTypeLink {
                symbol_id,
                name,
                type_id,
            } => write!(
                f,
                "symbol #{symbol_id} '{name}' refers to missing type #{type_id}"
            ),
            Self::BrokenNodeSymbolLink {
                node_index,
                symbol_id,
            } => write!(f, "node #{node_index} refers to missing symbol #{symbol_id}"),
            Self::BrokenNodeLink { node_index, target } => {
                write!(f, "node #{node_index} refers to missing node #{target}")
            }
            Self::CyclicBaseType { type_id } => {
                write!(f, "base type chain of type #{type_id} is cyclic")
            }
        }
    }
}

impl std::error::Error for ModelValidationError {}

impl CompilationModel {
    fn has_type(&self, ty: TypeId) -> bool {
        self.get_type(ty).is_some()
    }

    fn has_symbol(&self, symbol: SymbolId) -> bool {
        self.get_symbol(symbol).is_some()
    }

    fn has_node(&self, node: NodeIndex) -> bool {
        self.get_node(node).is_some()
    }

    /// Collect every broken link in the snapshot.
    #[must_use]
    pub fn validate(&self) -> Vec<ModelValidationError> {
        let mut errors = Vec::new();

        for (index, ty) in self.types.iter().enumerate() {
            let type_id = index as u32;
            for &member in &ty.members {
                if !self.has_symbol(member) {
                    errors.push(ModelValidationError::BrokenMemberLink {
                        type_id,
                        symbol_id: member.0,
                    });
                }
            }
            for &target in ty.base_type.iter().chain(&ty.interfaces) {
                if !self.has_type(target) {
                    errors.push(ModelValidationError::BrokenTypeLink {
                        type_id,
                        target: target.0,
                    });
                }
            }
            if self.base_chain_is_cyclic(TypeId(type_id)) {
                errors.push(ModelValidationError::CyclicBaseType { type_id });
            }
        }

        for (index, symbol) in self.symbols.iter().enumerate() {
            let mut referenced: Vec<TypeId> = Vec::new();
            referenced.extend(symbol.containing_type);
            referenced.extend(symbol.type_id);
            if let Some(method) = &symbol.method {
                referenced.push(method.return_type);
                referenced.extend(method.parameters.iter().map(|p| p.type_id));
            }
            for ty in referenced {
                if !self.has_type(ty) {
                    errors.push(ModelValidationError::BrokenSymbolTypeLink {
                        symbol_id: index as u32,
                        name: symbol.name.clone(),
                        type_id: ty.0,
                    });
                }
            }
        }

        for (index, node) in self.nodes.iter().enumerate() {
            let node_index = index as u32;
            for symbol in node.symbol.iter().chain(&node.enclosing) {
                if !self.has_symbol(*symbol) {
                    errors.push(ModelValidationError::BrokenNodeSymbolLink {
                        node_index,
                        symbol_id: symbol.0,
                    });
                }
            }
            let linked = node
                .arguments
                .iter()
                .copied()
                .chain(node.default_values.iter().copied().flatten());
            for target in linked {
                if !self.has_node(target) {
                    errors.push(ModelValidationError::BrokenNodeLink {
                        node_index,
                        target: target.0,
                    });
                }
            }
        }

        debug!(
            types = self.types.len(),
            symbols = self.symbols.len(),
            nodes = self.nodes.len(),
            errors = errors.len(),
            "validated compilation snapshot"
        );
        errors
    }

    /// Whether the model has no broken links.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }

    fn base_chain_is_cyclic(&self, start: TypeId) -> bool {
        let mut seen = FxHashSet::default();
        let mut current = Some(start);
        while let Some(ty) = current {
            if !seen.insert(ty) {
                return true;
            }
            current = self.get_type(ty).and_then(|data| data.base_type);
        }
        false
    }
}
