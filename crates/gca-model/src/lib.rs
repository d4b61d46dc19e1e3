//! Symbol/syntax facade for the gca analyzers.
//!
//! The analysis engine never parses source or builds a type system. It reads
//! everything it needs through the [`SemanticModel`] trait, which a host
//! implements on top of its own compiler. This crate also ships
//! [`CompilationModel`], an arena-backed implementation that can be built in
//! memory with [`ModelBuilder`] or loaded from a JSON snapshot.

pub mod ids;
pub use ids::{NodeIndex, SymbolId, TypeId};

pub mod symbols;
pub use symbols::{
    Accessibility, ConstantValue, MethodKind, NodeKind, ParameterDescriptor, SpecialType,
    SymbolKind, TypeKind,
};

pub mod facade;
pub use facade::SemanticModel;

pub mod compilation;
pub use compilation::{CompilationModel, MethodData, NodeData, SymbolData, TypeData};

pub mod builder;
pub use builder::{MethodDef, ModelBuilder, NodeDef, TypeDef};

pub mod validation;
pub use validation::ModelValidationError;

#[cfg(test)]
#[path = "../tests/model_tests.rs"]
mod model_tests;
