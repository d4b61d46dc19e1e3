//! Symbol, type and parameter descriptors exchanged through the facade.

use serde::{Deserialize, Serialize};

use crate::ids::TypeId;

/// Built-in types the host compiler treats specially.
///
/// Anything that is not one of these (including user enums, which derive
/// from `System.Enum` but are not `System.Enum` itself) is `None`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpecialType {
    #[default]
    None,
    Object,
    Enum,
    Void,
    Boolean,
    Char,
    SByte,
    Byte,
    Int16,
    UInt16,
    Int32,
    UInt32,
    Int64,
    UInt64,
    Decimal,
    Single,
    Double,
    String,
    DateTime,
}

impl SpecialType {
    #[inline]
    #[must_use]
    pub const fn is_none(self) -> bool {
        matches!(self, SpecialType::None)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeKind {
    #[default]
    Class,
    Struct,
    Interface,
    Enum,
    Delegate,
    Array,
    TypeParameter,
    Error,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SymbolKind {
    Method,
    Field,
    Property,
    Parameter,
    Local,
    NamedType,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MethodKind {
    #[default]
    Ordinary,
    Constructor,
    StaticConstructor,
    PropertyGet,
    PropertySet,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Accessibility {
    #[default]
    Public,
    Internal,
    Protected,
    Private,
}

/// Syntax node shapes the engine is dispatched on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    Invocation,
    ObjectCreation,
    MethodDeclaration,
    ConstructorDeclaration,
    Expression,
}

impl NodeKind {
    #[must_use]
    pub const fn is_call(self) -> bool {
        matches!(self, NodeKind::Invocation | NodeKind::ObjectCreation)
    }

    #[must_use]
    pub const fn is_declaration(self) -> bool {
        matches!(
            self,
            NodeKind::MethodDeclaration | NodeKind::ConstructorDeclaration
        )
    }
}

/// Compile-time constant used as a parameter default.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum ConstantValue {
    Null,
    Bool(bool),
    Int(i64),
    Str(String),
}

impl ConstantValue {
    /// The integral value, for enum-typed defaults.
    #[must_use]
    pub const fn as_i64(&self) -> Option<i64> {
        match self {
            ConstantValue::Int(value) => Some(*value),
            _ => None,
        }
    }
}

/// A declared formal parameter.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterDescriptor {
    pub name: String,
    pub type_id: TypeId,
    #[serde(default)]
    pub is_optional: bool,
    /// `Some` when the declaration carries an explicit default, even `null`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explicit_default: Option<ConstantValue>,
    /// `params`-style variadic tail.
    #[serde(default)]
    pub is_params: bool,
}

impl ParameterDescriptor {
    #[must_use]
    pub fn new(name: impl Into<String>, type_id: TypeId) -> Self {
        Self {
            name: name.into(),
            type_id,
            is_optional: false,
            explicit_default: None,
            is_params: false,
        }
    }

    #[inline]
    #[must_use]
    pub const fn has_explicit_default(&self) -> bool {
        self.explicit_default.is_some()
    }
}
