//! Arena-backed in-memory compilation model.
//!
//! Types, symbols and nodes live in flat vectors addressed by their ids. The
//! whole model is serde-serializable so a host can export a compilation
//! snapshot once and run the analyzers out of process.

use gca_common::limits::MAX_BASE_TYPE_DEPTH;
use gca_common::{Location, Span};
use serde::{Deserialize, Serialize};

use crate::facade::SemanticModel;
use crate::ids::{NodeIndex, SymbolId, TypeId};
use crate::symbols::{
    Accessibility, MethodKind, NodeKind, ParameterDescriptor, SpecialType, SymbolKind, TypeKind,
};

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeData {
    /// Fully qualified metadata name; empty for array types.
    pub metadata_name: String,
    pub display_name: String,
    #[serde(default)]
    pub special: SpecialType,
    #[serde(default)]
    pub kind: TypeKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_type: Option<TypeId>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub interfaces: Vec<TypeId>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub members: Vec<SymbolId>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodData {
    #[serde(default)]
    pub method_kind: MethodKind,
    #[serde(default)]
    pub parameters: Vec<ParameterDescriptor>,
    pub return_type: TypeId,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbolData {
    pub name: String,
    pub kind: SymbolKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub containing_type: Option<TypeId>,
    /// Declared type of a field, property, parameter or local.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_id: Option<TypeId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<MethodData>,
    #[serde(default)]
    pub accessibility: Accessibility,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeData {
    pub kind: NodeKind,
    pub file: String,
    pub span: Span,
    pub text: String,
    /// Callee for calls, declared method for declarations, referenced
    /// symbol for expressions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<SymbolId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expr_type: Option<TypeId>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub arguments: Vec<NodeIndex>,
    /// Default value expression per parameter, for declarations.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub default_values: Vec<Option<NodeIndex>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enclosing: Option<SymbolId>,
}

/// A whole compilation: every type, symbol and syntax node the analyzers
/// may ask about.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CompilationModel {
    pub types: Vec<TypeData>,
    pub symbols: Vec<SymbolData>,
    pub nodes: Vec<NodeData>,
}

impl CompilationModel {
    /// Load a snapshot from JSON.
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    #[inline]
    #[must_use]
    pub fn get_type(&self, ty: TypeId) -> Option<&TypeData> {
        self.types.get(ty.0 as usize)
    }

    #[inline]
    #[must_use]
    pub fn get_symbol(&self, symbol: SymbolId) -> Option<&SymbolData> {
        self.symbols.get(symbol.0 as usize)
    }

    #[inline]
    #[must_use]
    pub fn get_node(&self, node: NodeIndex) -> Option<&NodeData> {
        if node.is_none() {
            return None;
        }
        self.nodes.get(node.0 as usize)
    }

    fn method(&self, symbol: SymbolId) -> Option<&MethodData> {
        self.get_symbol(symbol)?.method.as_ref()
    }

    fn display_name_of(&self, ty: TypeId) -> &str {
        self.get_type(ty).map_or("?", |t| t.display_name.as_str())
    }

    /// Whether `ty` is `target` or has it somewhere on its base class chain.
    fn inherits_from(&self, ty: TypeId, target: TypeId) -> bool {
        let mut current = Some(ty);
        for _ in 0..MAX_BASE_TYPE_DEPTH {
            match current {
                Some(t) if t == target => return true,
                Some(t) => current = self.get_type(t).and_then(|data| data.base_type),
                None => return false,
            }
        }
        false
    }

    fn nodes_where(&self, predicate: impl Fn(NodeKind) -> bool) -> Vec<NodeIndex> {
        let mut found: Vec<(&str, u32, NodeIndex)> = self
            .nodes
            .iter()
            .enumerate()
            .filter(|(_, node)| predicate(node.kind))
            .map(|(i, node)| (node.file.as_str(), node.span.start, NodeIndex(i as u32)))
            .collect();
        found.sort();
        found.into_iter().map(|(_, _, idx)| idx).collect()
    }
}

impl SemanticModel for CompilationModel {
    fn lookup_type_by_metadata_name(&self, metadata_name: &str) -> Option<TypeId> {
        if metadata_name.is_empty() {
            return None;
        }
        self.types
            .iter()
            .position(|t| t.metadata_name == metadata_name)
            .map(|i| TypeId(i as u32))
    }

    fn special_type(&self, ty: TypeId) -> SpecialType {
        self.get_type(ty).map_or(SpecialType::None, |t| t.special)
    }

    fn type_kind(&self, ty: TypeId) -> TypeKind {
        self.get_type(ty).map_or(TypeKind::Error, |t| t.kind)
    }

    fn base_type(&self, ty: TypeId) -> Option<TypeId> {
        self.get_type(ty)?.base_type
    }

    fn interfaces(&self, ty: TypeId) -> &[TypeId] {
        match self.get_type(ty) {
            Some(data) => &data.interfaces,
            None => &[],
        }
    }

    fn members(&self, ty: TypeId) -> &[SymbolId] {
        match self.get_type(ty) {
            Some(data) => &data.members,
            None => &[],
        }
    }

    fn type_display(&self, ty: TypeId) -> String {
        self.display_name_of(ty).to_string()
    }

    fn symbol_kind(&self, symbol: SymbolId) -> Option<SymbolKind> {
        self.get_symbol(symbol).map(|s| s.kind)
    }

    fn symbol_name(&self, symbol: SymbolId) -> Option<&str> {
        self.get_symbol(symbol).map(|s| s.name.as_str())
    }

    fn containing_type(&self, symbol: SymbolId) -> Option<TypeId> {
        self.get_symbol(symbol)?.containing_type
    }

    fn method_kind(&self, method: SymbolId) -> Option<MethodKind> {
        self.method(method).map(|m| m.method_kind)
    }

    fn parameters(&self, method: SymbolId) -> &[ParameterDescriptor] {
        match self.method(method) {
            Some(data) => &data.parameters,
            None => &[],
        }
    }

    fn return_type(&self, method: SymbolId) -> Option<TypeId> {
        self.method(method).map(|m| m.return_type)
    }

    fn symbol_display(&self, symbol: SymbolId) -> String {
        let Some(data) = self.get_symbol(symbol) else {
            return String::new();
        };
        let owner = data.containing_type.map(|t| self.display_name_of(t));
        let qualified = |name: &str| match owner {
            Some(owner) => format!("{owner}.{name}"),
            None => name.to_string(),
        };

        match (&data.method, data.kind) {
            (Some(method), SymbolKind::Method) => {
                let params = method
                    .parameters
                    .iter()
                    .map(|p| {
                        let ty = self.display_name_of(p.type_id);
                        if p.is_params {
                            format!("params {ty}")
                        } else {
                            ty.to_string()
                        }
                    })
                    .collect::<Vec<_>>()
                    .join(", ");
                let name = if method.method_kind == MethodKind::Constructor {
                    // Constructors display under the short type name.
                    owner
                        .map(|o| o.rsplit('.').next().unwrap_or(o))
                        .unwrap_or(data.name.as_str())
                } else {
                    data.name.as_str()
                };
                format!("{}({params})", qualified(name))
            }
            (_, SymbolKind::Field | SymbolKind::Property | SymbolKind::Method) => {
                qualified(&data.name)
            }
            _ => data.name.clone(),
        }
    }

    fn is_accessible_at(&self, site: NodeIndex, candidate: SymbolId) -> bool {
        let Some(data) = self.get_symbol(candidate) else {
            return false;
        };
        let owner = match (data.accessibility, data.containing_type) {
            (Accessibility::Public | Accessibility::Internal, _) | (_, None) => return true,
            (_, Some(owner)) => owner,
        };
        let site_type = self
            .enclosing_construct_symbol(site)
            .and_then(|caller| self.containing_type(caller));
        let Some(site_type) = site_type else {
            return false;
        };
        match data.accessibility {
            Accessibility::Private => site_type == owner,
            _ => self.inherits_from(site_type, owner),
        }
    }

    fn node_kind(&self, node: NodeIndex) -> Option<NodeKind> {
        self.get_node(node).map(|n| n.kind)
    }

    fn node_location(&self, node: NodeIndex) -> Option<Location> {
        self.get_node(node)
            .map(|n| Location::new(n.file.clone(), n.span))
    }

    fn node_text(&self, node: NodeIndex) -> Option<&str> {
        self.get_node(node).map(|n| n.text.as_str())
    }

    fn resolve_callee(&self, node: NodeIndex) -> Option<SymbolId> {
        let data = self.get_node(node)?;
        if !data.kind.is_call() {
            return None;
        }
        data.symbol
    }

    fn resolve_declared_method(&self, node: NodeIndex) -> Option<SymbolId> {
        let data = self.get_node(node)?;
        if !data.kind.is_declaration() {
            return None;
        }
        data.symbol
    }

    fn call_argument_expressions(&self, node: NodeIndex) -> &[NodeIndex] {
        match self.get_node(node) {
            Some(data) if data.kind.is_call() => &data.arguments,
            _ => &[],
        }
    }

    fn object_creation_argument_expressions(&self, node: NodeIndex) -> &[NodeIndex] {
        match self.get_node(node) {
            Some(data) if data.kind == NodeKind::ObjectCreation => &data.arguments,
            _ => &[],
        }
    }

    fn default_value_expression(
        &self,
        declaration: NodeIndex,
        param_index: usize,
    ) -> Option<NodeIndex> {
        let data = self.get_node(declaration)?;
        if !data.kind.is_declaration() {
            return None;
        }
        data.default_values.get(param_index).copied().flatten()
    }

    fn enclosing_construct_symbol(&self, node: NodeIndex) -> Option<SymbolId> {
        self.get_node(node)?.enclosing
    }

    fn resolve_symbol(&self, expr: NodeIndex) -> Option<SymbolId> {
        self.get_node(expr)?.symbol
    }

    fn resolve_expression_type(&self, expr: NodeIndex) -> Option<TypeId> {
        let data = self.get_node(expr)?;
        if data.expr_type.is_some() {
            return data.expr_type;
        }
        // Fall back to the declared type of the referenced field/property.
        let symbol = self.get_symbol(data.symbol?)?;
        match symbol.kind {
            SymbolKind::Field
            | SymbolKind::Property
            | SymbolKind::Parameter
            | SymbolKind::Local => symbol.type_id,
            SymbolKind::Method => symbol
                .method
                .as_ref()
                .filter(|m| m.method_kind == MethodKind::Constructor)
                .and(symbol.containing_type),
            SymbolKind::NamedType => None,
        }
    }

    fn call_nodes(&self) -> Vec<NodeIndex> {
        self.nodes_where(NodeKind::is_call)
    }

    fn method_declaration_nodes(&self) -> Vec<NodeIndex> {
        self.nodes_where(NodeKind::is_declaration)
    }
}
