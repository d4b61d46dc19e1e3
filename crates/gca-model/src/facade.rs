//! The symbol/syntax facade consumed by the analysis engine.
//!
//! A host implements this once per language front-end. Every query is
//! read-only and may be called concurrently from several analysis threads,
//! hence the `Sync` bound. A query that cannot be answered returns `None` (or
//! an empty slice); the engine treats that as "this check does not apply".

use gca_common::Location;

use crate::ids::{NodeIndex, SymbolId, TypeId};
use crate::symbols::{MethodKind, NodeKind, ParameterDescriptor, SpecialType, SymbolKind, TypeKind};

pub trait SemanticModel: Sync {
    // ---------------------------------------------------------------------
    // Types
    // ---------------------------------------------------------------------

    /// Resolve a type by its fully qualified metadata name
    /// (`System.Globalization.CultureInfo`).
    fn lookup_type_by_metadata_name(&self, metadata_name: &str) -> Option<TypeId>;

    fn special_type(&self, ty: TypeId) -> SpecialType;

    fn type_kind(&self, ty: TypeId) -> TypeKind;

    /// The direct base class, if any.
    fn base_type(&self, ty: TypeId) -> Option<TypeId>;

    /// Interfaces directly implemented (or extended) by `ty`.
    fn interfaces(&self, ty: TypeId) -> &[TypeId];

    /// Members declared on `ty`, in the host's enumeration order.
    fn members(&self, ty: TypeId) -> &[SymbolId];

    /// Display form of a type as it appears in signatures (`string`,
    /// `IFormatProvider`, `object[]`).
    fn type_display(&self, ty: TypeId) -> String;

    // ---------------------------------------------------------------------
    // Symbols
    // ---------------------------------------------------------------------

    fn symbol_kind(&self, symbol: SymbolId) -> Option<SymbolKind>;

    fn symbol_name(&self, symbol: SymbolId) -> Option<&str>;

    fn containing_type(&self, symbol: SymbolId) -> Option<TypeId>;

    /// Method kind for method symbols; `None` for anything else.
    fn method_kind(&self, method: SymbolId) -> Option<MethodKind>;

    /// Declared parameters of a method; empty for non-methods.
    fn parameters(&self, method: SymbolId) -> &[ParameterDescriptor];

    fn return_type(&self, method: SymbolId) -> Option<TypeId>;

    /// Display form of a symbol, e.g. `Int32.Parse(string, IFormatProvider)`.
    fn symbol_display(&self, symbol: SymbolId) -> String;

    /// Whether `candidate` may be referenced from `site`.
    fn is_accessible_at(&self, site: NodeIndex, candidate: SymbolId) -> bool;

    // ---------------------------------------------------------------------
    // Syntax
    // ---------------------------------------------------------------------

    fn node_kind(&self, node: NodeIndex) -> Option<NodeKind>;

    fn node_location(&self, node: NodeIndex) -> Option<Location>;

    /// Source text of a node, as written.
    fn node_text(&self, node: NodeIndex) -> Option<&str>;

    /// The method or constructor invoked by a call or object-creation node.
    fn resolve_callee(&self, node: NodeIndex) -> Option<SymbolId>;

    /// The method declared by a method or constructor declaration node.
    fn resolve_declared_method(&self, node: NodeIndex) -> Option<SymbolId>;

    /// The expression whose position is used for accessibility checks of a
    /// call (the invoked member access). Defaults to the call itself.
    fn call_target_node(&self, node: NodeIndex) -> NodeIndex {
        node
    }

    /// Positional argument expressions of an invocation or object creation.
    fn call_argument_expressions(&self, node: NodeIndex) -> &[NodeIndex];

    /// Argument expressions of an object-creation expression.
    fn object_creation_argument_expressions(&self, node: NodeIndex) -> &[NodeIndex];

    /// The default value expression of the `param_index`th parameter of a
    /// method declaration.
    fn default_value_expression(&self, declaration: NodeIndex, param_index: usize)
    -> Option<NodeIndex>;

    /// The method, constructor or accessor lexically enclosing `node`.
    fn enclosing_construct_symbol(&self, node: NodeIndex) -> Option<SymbolId>;

    /// The symbol an expression refers to.
    fn resolve_symbol(&self, expr: NodeIndex) -> Option<SymbolId>;

    /// The static type of an expression.
    fn resolve_expression_type(&self, expr: NodeIndex) -> Option<TypeId>;

    // ---------------------------------------------------------------------
    // Node enumeration (for drivers)
    // ---------------------------------------------------------------------

    /// Every invocation and object-creation node, in source order.
    fn call_nodes(&self) -> Vec<NodeIndex>;

    /// Every method and constructor declaration node, in source order.
    fn method_declaration_nodes(&self) -> Vec<NodeIndex>;
}
