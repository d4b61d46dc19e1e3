//! Fluent construction of in-memory compilations.
//!
//! Hosts that export snapshots and the test suites both build models
//! through this API rather than filling the arenas by hand, so member lists
//! and id links stay consistent.

use gca_common::Span;

use crate::compilation::{CompilationModel, MethodData, NodeData, SymbolData, TypeData};
use crate::ids::{NodeIndex, SymbolId, TypeId};
use crate::symbols::{
    Accessibility, ConstantValue, MethodKind, NodeKind, ParameterDescriptor, SpecialType,
    SymbolKind, TypeKind,
};

const DEFAULT_FILE: &str = "test.cs";

/// Description of a named type.
#[derive(Clone, Debug)]
pub struct TypeDef {
    metadata_name: String,
    display_name: String,
    special: SpecialType,
    kind: TypeKind,
    base_type: Option<TypeId>,
    interfaces: Vec<TypeId>,
}

impl TypeDef {
    fn with_kind(metadata_name: &str, display_name: &str, kind: TypeKind) -> Self {
        Self {
            metadata_name: metadata_name.to_string(),
            display_name: display_name.to_string(),
            special: SpecialType::None,
            kind,
            base_type: None,
            interfaces: Vec::new(),
        }
    }

    #[must_use]
    pub fn class(metadata_name: &str, display_name: &str) -> Self {
        Self::with_kind(metadata_name, display_name, TypeKind::Class)
    }

    #[must_use]
    pub fn structure(metadata_name: &str, display_name: &str) -> Self {
        Self::with_kind(metadata_name, display_name, TypeKind::Struct)
    }

    #[must_use]
    pub fn interface(metadata_name: &str, display_name: &str) -> Self {
        Self::with_kind(metadata_name, display_name, TypeKind::Interface)
    }

    #[must_use]
    pub fn enumeration(metadata_name: &str, display_name: &str) -> Self {
        Self::with_kind(metadata_name, display_name, TypeKind::Enum)
    }

    #[must_use]
    pub const fn special(mut self, special: SpecialType) -> Self {
        self.special = special;
        self
    }

    #[must_use]
    pub const fn base(mut self, base: TypeId) -> Self {
        self.base_type = Some(base);
        self
    }

    #[must_use]
    pub fn implements(mut self, interface: TypeId) -> Self {
        self.interfaces.push(interface);
        self
    }
}

/// Description of a method or constructor.
#[derive(Clone, Debug)]
pub struct MethodDef {
    name: String,
    method_kind: MethodKind,
    parameters: Vec<ParameterDescriptor>,
    return_type: TypeId,
    accessibility: Accessibility,
}

impl MethodDef {
    #[must_use]
    pub fn new(name: &str, return_type: TypeId) -> Self {
        Self {
            name: name.to_string(),
            method_kind: MethodKind::Ordinary,
            parameters: Vec::new(),
            return_type,
            accessibility: Accessibility::Public,
        }
    }

    /// A constructor; `void_type` is its (void) return type.
    #[must_use]
    pub fn constructor(void_type: TypeId) -> Self {
        let mut def = Self::new(".ctor", void_type);
        def.method_kind = MethodKind::Constructor;
        def
    }

    #[must_use]
    pub fn param(mut self, name: &str, ty: TypeId) -> Self {
        self.parameters.push(ParameterDescriptor::new(name, ty));
        self
    }

    #[must_use]
    pub fn optional_param(mut self, name: &str, ty: TypeId, default: ConstantValue) -> Self {
        let mut param = ParameterDescriptor::new(name, ty);
        param.is_optional = true;
        param.explicit_default = Some(default);
        self.parameters.push(param);
        self
    }

    /// A `params` array tail.
    #[must_use]
    pub fn params_array(mut self, name: &str, array_ty: TypeId) -> Self {
        let mut param = ParameterDescriptor::new(name, array_ty);
        param.is_params = true;
        self.parameters.push(param);
        self
    }

    #[must_use]
    pub const fn accessibility(mut self, accessibility: Accessibility) -> Self {
        self.accessibility = accessibility;
        self
    }
}

/// Description of a syntax node.
#[derive(Clone, Debug)]
pub struct NodeDef {
    kind: NodeKind,
    text: String,
    file: Option<String>,
    span: Option<Span>,
    symbol: Option<SymbolId>,
    expr_type: Option<TypeId>,
    arguments: Vec<NodeIndex>,
    default_values: Vec<Option<NodeIndex>>,
    enclosing: Option<SymbolId>,
}

impl NodeDef {
    fn with_kind(kind: NodeKind, text: &str) -> Self {
        Self {
            kind,
            text: text.to_string(),
            file: None,
            span: None,
            symbol: None,
            expr_type: None,
            arguments: Vec::new(),
            default_values: Vec::new(),
            enclosing: None,
        }
    }

    #[must_use]
    pub fn invocation(text: &str) -> Self {
        Self::with_kind(NodeKind::Invocation, text)
    }

    #[must_use]
    pub fn object_creation(text: &str) -> Self {
        Self::with_kind(NodeKind::ObjectCreation, text)
    }

    #[must_use]
    pub fn expression(text: &str) -> Self {
        Self::with_kind(NodeKind::Expression, text)
    }

    #[must_use]
    pub fn method_declaration(text: &str) -> Self {
        Self::with_kind(NodeKind::MethodDeclaration, text)
    }

    #[must_use]
    pub fn constructor_declaration(text: &str) -> Self {
        Self::with_kind(NodeKind::ConstructorDeclaration, text)
    }

    /// Callee, declared method or referenced symbol, depending on kind.
    #[must_use]
    pub const fn symbol(mut self, symbol: SymbolId) -> Self {
        self.symbol = Some(symbol);
        self
    }

    #[must_use]
    pub const fn expr_type(mut self, ty: TypeId) -> Self {
        self.expr_type = Some(ty);
        self
    }

    #[must_use]
    pub fn args(mut self, arguments: impl IntoIterator<Item = NodeIndex>) -> Self {
        self.arguments.extend(arguments);
        self
    }

    #[must_use]
    pub fn defaults(mut self, default_values: Vec<Option<NodeIndex>>) -> Self {
        self.default_values = default_values;
        self
    }

    #[must_use]
    pub const fn enclosing(mut self, symbol: SymbolId) -> Self {
        self.enclosing = Some(symbol);
        self
    }

    #[must_use]
    pub fn file(mut self, file: &str) -> Self {
        self.file = Some(file.to_string());
        self
    }

    #[must_use]
    pub const fn span(mut self, start: u32, length: u32) -> Self {
        self.span = Some(Span::new(start, length));
        self
    }
}

/// Builds a [`CompilationModel`].
///
/// Nodes added without an explicit span are laid out one after another in
/// their file, so every node gets a distinct, stable location.
#[derive(Debug, Default)]
pub struct ModelBuilder {
    model: CompilationModel,
    cursor: u32,
}

impl ModelBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_type(&mut self, def: TypeDef) -> TypeId {
        let id = TypeId(self.model.types.len() as u32);
        self.model.types.push(TypeData {
            metadata_name: def.metadata_name,
            display_name: def.display_name,
            special: def.special,
            kind: def.kind,
            base_type: def.base_type,
            interfaces: def.interfaces,
            members: Vec::new(),
        });
        id
    }

    /// A single-dimensional array of `element`.
    pub fn array_of(&mut self, element: TypeId) -> TypeId {
        let display = self
            .model
            .get_type(element)
            .map_or_else(|| "?[]".to_string(), |t| format!("{}[]", t.display_name));
        let id = TypeId(self.model.types.len() as u32);
        self.model.types.push(TypeData {
            metadata_name: String::new(),
            display_name: display,
            special: SpecialType::None,
            kind: TypeKind::Array,
            base_type: None,
            interfaces: Vec::new(),
            members: Vec::new(),
        });
        id
    }

    fn push_member(&mut self, owner: TypeId, data: SymbolData) -> SymbolId {
        let id = SymbolId(self.model.symbols.len() as u32);
        self.model.symbols.push(data);
        if let Some(owner_data) = self.model.types.get_mut(owner.0 as usize) {
            owner_data.members.push(id);
        }
        id
    }

    pub fn add_method(&mut self, owner: TypeId, def: MethodDef) -> SymbolId {
        self.push_member(
            owner,
            SymbolData {
                name: def.name,
                kind: SymbolKind::Method,
                containing_type: Some(owner),
                type_id: None,
                method: Some(MethodData {
                    method_kind: def.method_kind,
                    parameters: def.parameters,
                    return_type: def.return_type,
                }),
                accessibility: def.accessibility,
            },
        )
    }

    fn add_value_member(
        &mut self,
        owner: TypeId,
        name: &str,
        kind: SymbolKind,
        ty: TypeId,
    ) -> SymbolId {
        self.push_member(
            owner,
            SymbolData {
                name: name.to_string(),
                kind,
                containing_type: Some(owner),
                type_id: Some(ty),
                method: None,
                accessibility: Accessibility::Public,
            },
        )
    }

    pub fn add_field(&mut self, owner: TypeId, name: &str, ty: TypeId) -> SymbolId {
        self.add_value_member(owner, name, SymbolKind::Field, ty)
    }

    pub fn add_property(&mut self, owner: TypeId, name: &str, ty: TypeId) -> SymbolId {
        self.add_value_member(owner, name, SymbolKind::Property, ty)
    }

    /// A local variable or parameter reference target; not a type member.
    pub fn add_local(&mut self, name: &str, ty: TypeId) -> SymbolId {
        let id = SymbolId(self.model.symbols.len() as u32);
        self.model.symbols.push(SymbolData {
            name: name.to_string(),
            kind: SymbolKind::Local,
            containing_type: None,
            type_id: Some(ty),
            method: None,
            accessibility: Accessibility::Public,
        });
        id
    }

    pub fn add_node(&mut self, def: NodeDef) -> NodeIndex {
        let span = def.span.unwrap_or_else(|| {
            let length = def.text.len() as u32;
            let span = Span::new(self.cursor, length);
            self.cursor += length + 1;
            span
        });
        let id = NodeIndex(self.model.nodes.len() as u32);
        self.model.nodes.push(NodeData {
            kind: def.kind,
            file: def.file.unwrap_or_else(|| DEFAULT_FILE.to_string()),
            span,
            text: def.text,
            symbol: def.symbol,
            expr_type: def.expr_type,
            arguments: def.arguments,
            default_values: def.default_values,
            enclosing: def.enclosing,
        });
        id
    }

    #[must_use]
    pub const fn model(&self) -> &CompilationModel {
        &self.model
    }

    #[must_use]
    pub fn finish(self) -> CompilationModel {
        self.model
    }
}
