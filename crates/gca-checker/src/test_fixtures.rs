//! Shared test fixtures: a compilation with the framework surface the
//! analyzers look for, plus helpers to add call sites to it.

#![allow(dead_code)]

use gca_common::{Diagnostic, DiagnosticKind};
use gca_model::{
    CompilationModel, ConstantValue, MethodDef, ModelBuilder, NodeDef, NodeIndex, SpecialType,
    SymbolId, TypeDef, TypeId,
};

use crate::context::{AnalysisSession, AnalyzerOptions};

/// Well-known framework types and members.
pub(crate) struct Framework {
    pub builder: ModelBuilder,

    pub object: TypeId,
    pub void: TypeId,
    pub boolean: TypeId,
    pub int32: TypeId,
    pub string: TypeId,
    pub object_array: TypeId,
    pub guid: TypeId,
    pub iformat_provider: TypeId,
    pub culture_info: TypeId,
    pub string_comparison: TypeId,
    pub string_comparer: TypeId,
    pub icomparer: TypeId,
    pub comparer: TypeId,
    pub case_insensitive_comparer: TypeId,
    pub resource_manager: TypeId,
    pub component_resource_manager: TypeId,
    pub activator: TypeId,
    pub basic_date_type: TypeId,
    pub xml_reader: TypeId,
    pub xml_text_reader: TypeId,
    pub xml_reader_settings: TypeId,

    // CultureInfo
    pub invariant_culture: SymbolId,
    pub current_culture: SymbolId,
    pub current_ui_culture: SymbolId,
    pub installed_ui_culture: SymbolId,
    // StringComparison
    pub comparison_current_culture: SymbolId,
    pub comparison_invariant_culture: SymbolId,
    pub comparison_invariant_culture_ignore_case: SymbolId,
    pub comparison_ordinal: SymbolId,
    // StringComparer
    pub comparer_invariant_culture: SymbolId,
    pub comparer_ordinal: SymbolId,
    // Legacy comparers
    pub comparer_default_invariant: SymbolId,
    pub comparer_ctor: SymbolId,
    pub case_insensitive_default_invariant: SymbolId,

    // string
    pub string_to_string: SymbolId,
    pub string_equals: SymbolId,
    pub string_equals_comparison: SymbolId,
    pub string_static_equals_comparison: SymbolId,
    pub string_format: SymbolId,
    pub string_format_provider: SymbolId,
    pub string_compare_to: SymbolId,
    pub string_compare_culture: SymbolId,
    pub string_starts_with: SymbolId,
    pub string_to_upper: SymbolId,
    // Int32
    pub int32_parse: SymbolId,
    pub int32_parse_provider: SymbolId,
    pub int32_to_string: SymbolId,
    pub int32_to_string_provider: SymbolId,
    // bool
    pub boolean_to_string: SymbolId,
    // Guid
    pub guid_to_string_format: SymbolId,
    // Resources and activation
    pub resource_get_string: SymbolId,
    pub apply_resources: SymbolId,
    pub activator_create_instance: SymbolId,
    pub date_from_string: SymbolId,
    // Xml
    pub xml_create: SymbolId,
    pub xml_create_settings: SymbolId,

    /// `Program`, the type user code lives in.
    pub program: TypeId,
    /// `Program.Run()`, the enclosing method of every call added through
    /// [`Framework::call`].
    pub run: SymbolId,
    /// `Catalog.Sort(StringComparer)` and `Catalog.SortLegacy(IComparer)`.
    pub catalog_sort: SymbolId,
    pub catalog_sort_legacy: SymbolId,
}

impl Framework {
    pub fn new() -> Self {
        let mut b = ModelBuilder::new();

        let object = b.add_type(TypeDef::class("System.Object", "object").special(SpecialType::Object));
        let void = b.add_type(TypeDef::structure("System.Void", "void").special(SpecialType::Void));
        let boolean = b.add_type(TypeDef::structure("System.Boolean", "bool").special(SpecialType::Boolean));
        let int32 = b.add_type(TypeDef::structure("System.Int32", "Int32").special(SpecialType::Int32));
        let string = b.add_type(
            TypeDef::class("System.String", "string")
                .special(SpecialType::String)
                .base(object),
        );
        let object_array = b.array_of(object);
        let guid = b.add_type(TypeDef::structure("System.Guid", "Guid"));
        let iformat_provider = b.add_type(TypeDef::interface("System.IFormatProvider", "IFormatProvider"));
        let culture_info = b.add_type(
            TypeDef::class("System.Globalization.CultureInfo", "CultureInfo")
                .base(object)
                .implements(iformat_provider),
        );
        let string_comparison = b.add_type(TypeDef::enumeration("System.StringComparison", "StringComparison"));
        let string_comparer = b.add_type(TypeDef::class("System.StringComparer", "StringComparer").base(object));
        let icomparer = b.add_type(TypeDef::interface("System.Collections.IComparer", "IComparer"));
        let comparer = b.add_type(
            TypeDef::class("System.Collections.Comparer", "Comparer")
                .base(object)
                .implements(icomparer),
        );
        let case_insensitive_comparer = b.add_type(
            TypeDef::class("System.Collections.CaseInsensitiveComparer", "CaseInsensitiveComparer")
                .base(object)
                .implements(icomparer),
        );
        let resource_manager = b.add_type(
            TypeDef::class("System.Resources.ResourceManager", "ResourceManager").base(object),
        );
        let component_resource_manager = b.add_type(
            TypeDef::class(
                "System.ComponentModel.ComponentResourceManager",
                "ComponentResourceManager",
            )
            .base(resource_manager),
        );
        let activator = b.add_type(TypeDef::class("System.Activator", "Activator").base(object));
        let basic_date_type = b.add_type(
            TypeDef::class("Microsoft.VisualBasic.CompilerServices.DateType", "DateType").base(object),
        );
        let xml_reader = b.add_type(TypeDef::class("System.Xml.XmlReader", "XmlReader").base(object));
        let xml_text_reader = b.add_type(TypeDef::class("System.Xml.XmlTextReader", "XmlTextReader").base(xml_reader));
        let xml_reader_settings = b.add_type(
            TypeDef::class("System.Xml.XmlReaderSettings", "XmlReaderSettings").base(object),
        );

        let invariant_culture = b.add_property(culture_info, "InvariantCulture", culture_info);
        let current_culture = b.add_property(culture_info, "CurrentCulture", culture_info);
        let current_ui_culture = b.add_property(culture_info, "CurrentUICulture", culture_info);
        let installed_ui_culture = b.add_property(culture_info, "InstalledUICulture", culture_info);

        let comparison_current_culture = b.add_field(string_comparison, "CurrentCulture", string_comparison);
        b.add_field(string_comparison, "CurrentCultureIgnoreCase", string_comparison);
        let comparison_invariant_culture = b.add_field(string_comparison, "InvariantCulture", string_comparison);
        let comparison_invariant_culture_ignore_case =
            b.add_field(string_comparison, "InvariantCultureIgnoreCase", string_comparison);
        let comparison_ordinal = b.add_field(string_comparison, "Ordinal", string_comparison);
        b.add_field(string_comparison, "OrdinalIgnoreCase", string_comparison);

        let comparer_invariant_culture = b.add_property(string_comparer, "InvariantCulture", string_comparer);
        let comparer_ordinal = b.add_property(string_comparer, "Ordinal", string_comparer);
        let comparer_default_invariant = b.add_field(comparer, "DefaultInvariant", comparer);
        let comparer_ctor = b.add_method(comparer, MethodDef::constructor(void).param("culture", culture_info));
        let case_insensitive_default_invariant =
            b.add_property(case_insensitive_comparer, "DefaultInvariant", case_insensitive_comparer);

        let string_to_string = b.add_method(string, MethodDef::new("ToString", string));
        b.add_method(
            string,
            MethodDef::new("ToString", string).param("provider", iformat_provider),
        );
        let string_equals = b.add_method(string, MethodDef::new("Equals", boolean).param("value", string));
        let string_equals_comparison = b.add_method(
            string,
            MethodDef::new("Equals", boolean)
                .param("value", string)
                .param("comparisonType", string_comparison),
        );
        let string_static_equals_comparison = b.add_method(
            string,
            MethodDef::new("Equals", boolean)
                .param("a", string)
                .param("b", string)
                .param("comparisonType", string_comparison),
        );
        let string_format = b.add_method(
            string,
            MethodDef::new("Format", string)
                .param("format", string)
                .params_array("args", object_array),
        );
        let string_format_provider = b.add_method(
            string,
            MethodDef::new("Format", string)
                .param("provider", iformat_provider)
                .param("format", string)
                .params_array("args", object_array),
        );
        let string_compare_to = b.add_method(string, MethodDef::new("CompareTo", int32).param("strB", string));
        let string_compare_culture = b.add_method(
            string,
            MethodDef::new("Compare", int32)
                .param("strA", string)
                .param("strB", string)
                .param("ignoreCase", boolean)
                .param("culture", culture_info),
        );
        let string_starts_with = b.add_method(string, MethodDef::new("StartsWith", boolean).param("value", string));
        b.add_method(
            string,
            MethodDef::new("StartsWith", boolean)
                .param("value", string)
                .param("comparisonType", string_comparison),
        );
        let string_to_upper = b.add_method(string, MethodDef::new("ToUpper", string));
        b.add_method(string, MethodDef::new("ToUpper", string).param("culture", culture_info));

        let int32_parse = b.add_method(int32, MethodDef::new("Parse", int32).param("s", string));
        let int32_parse_provider = b.add_method(
            int32,
            MethodDef::new("Parse", int32)
                .param("s", string)
                .param("provider", iformat_provider),
        );
        let int32_to_string = b.add_method(int32, MethodDef::new("ToString", string));
        let int32_to_string_provider = b.add_method(
            int32,
            MethodDef::new("ToString", string).param("provider", iformat_provider),
        );

        let boolean_to_string = b.add_method(boolean, MethodDef::new("ToString", string));
        b.add_method(
            boolean,
            MethodDef::new("ToString", string).param("provider", iformat_provider),
        );

        let guid_to_string_format = b.add_method(guid, MethodDef::new("ToString", string).param("format", string));
        b.add_method(
            guid,
            MethodDef::new("ToString", string)
                .param("format", string)
                .param("provider", iformat_provider),
        );

        let resource_get_string = b.add_method(
            resource_manager,
            MethodDef::new("GetString", string).param("name", string),
        );
        b.add_method(
            resource_manager,
            MethodDef::new("GetString", string)
                .param("name", string)
                .param("culture", culture_info),
        );
        let apply_resources = b.add_method(
            component_resource_manager,
            MethodDef::new("ApplyResources", void)
                .param("value", object)
                .param("objectName", string),
        );
        b.add_method(
            component_resource_manager,
            MethodDef::new("ApplyResources", void)
                .param("value", object)
                .param("objectName", string)
                .param("culture", culture_info),
        );
        let activator_create_instance = b.add_method(
            activator,
            MethodDef::new("CreateInstance", object).param("type", object),
        );
        b.add_method(
            activator,
            MethodDef::new("CreateInstance", object)
                .param("type", object)
                .param("culture", culture_info),
        );
        let date_from_string = b.add_method(
            basic_date_type,
            MethodDef::new("FromString", object).param("value", string),
        );
        b.add_method(
            basic_date_type,
            MethodDef::new("FromString", object)
                .param("value", string)
                .param("culture", culture_info),
        );

        let xml_create = b.add_method(xml_reader, MethodDef::new("Create", xml_reader).param("inputUri", string));
        let xml_create_settings = b.add_method(
            xml_reader,
            MethodDef::new("Create", xml_reader)
                .param("inputUri", string)
                .param("settings", xml_reader_settings),
        );

        let catalog = b.add_type(TypeDef::class("Contoso.Catalog", "Catalog").base(object));
        let catalog_sort = b.add_method(catalog, MethodDef::new("Sort", void).param("comparer", string_comparer));
        let catalog_sort_legacy = b.add_method(catalog, MethodDef::new("SortLegacy", void).param("comparer", icomparer));

        let program = b.add_type(TypeDef::class("Contoso.Program", "Program").base(object));
        let run = b.add_method(program, MethodDef::new("Run", void));

        Self {
            builder: b,
            object,
            void,
            boolean,
            int32,
            string,
            object_array,
            guid,
            iformat_provider,
            culture_info,
            string_comparison,
            string_comparer,
            icomparer,
            comparer,
            case_insensitive_comparer,
            resource_manager,
            component_resource_manager,
            activator,
            basic_date_type,
            xml_reader,
            xml_text_reader,
            xml_reader_settings,
            invariant_culture,
            current_culture,
            current_ui_culture,
            installed_ui_culture,
            comparison_current_culture,
            comparison_invariant_culture,
            comparison_invariant_culture_ignore_case,
            comparison_ordinal,
            comparer_invariant_culture,
            comparer_ordinal,
            comparer_default_invariant,
            comparer_ctor,
            case_insensitive_default_invariant,
            string_to_string,
            string_equals,
            string_equals_comparison,
            string_static_equals_comparison,
            string_format,
            string_format_provider,
            string_compare_to,
            string_compare_culture,
            string_starts_with,
            string_to_upper,
            int32_parse,
            int32_parse_provider,
            int32_to_string,
            int32_to_string_provider,
            boolean_to_string,
            guid_to_string_format,
            resource_get_string,
            apply_resources,
            activator_create_instance,
            date_from_string,
            xml_create,
            xml_create_settings,
            program,
            run,
            catalog_sort,
            catalog_sort_legacy,
        }
    }

    /// A local variable reference of type `ty`; resolves to no symbol.
    pub fn local(&mut self, text: &str, ty: TypeId) -> NodeIndex {
        self.builder.add_node(NodeDef::expression(text).expr_type(ty))
    }

    /// A reference to a field or property.
    pub fn member_ref(&mut self, text: &str, member: SymbolId) -> NodeIndex {
        self.builder.add_node(NodeDef::expression(text).symbol(member).enclosing(self.run))
    }

    /// An invocation of `callee` inside `Program.Run()`.
    pub fn call(&mut self, text: &str, callee: SymbolId, args: &[NodeIndex]) -> NodeIndex {
        self.call_in(text, callee, args, self.run)
    }

    /// An invocation of `callee` inside `caller`.
    pub fn call_in(
        &mut self,
        text: &str,
        callee: SymbolId,
        args: &[NodeIndex],
        caller: SymbolId,
    ) -> NodeIndex {
        self.builder.add_node(
            NodeDef::invocation(text)
                .symbol(callee)
                .args(args.iter().copied())
                .enclosing(caller),
        )
    }

    /// An object creation through `ctor` inside `Program.Run()`.
    pub fn creation(&mut self, text: &str, ctor: SymbolId, args: &[NodeIndex]) -> NodeIndex {
        self.builder.add_node(
            NodeDef::object_creation(text)
                .symbol(ctor)
                .args(args.iter().copied())
                .enclosing(self.run),
        )
    }

    /// `Program.<name>(string s, StringComparison sc = <default>)`, returning
    /// the method and its declaration node.
    pub fn comparison_default_method(
        &mut self,
        name: &str,
        default: ConstantValue,
        default_text: &str,
    ) -> (SymbolId, NodeIndex) {
        let method = self.builder.add_method(
            self.program,
            MethodDef::new(name, self.boolean)
                .param("s", self.string)
                .optional_param("sc", self.string_comparison, default),
        );
        let default_node = self.builder.add_node(NodeDef::expression(default_text));
        let declaration = self.builder.add_node(
            NodeDef::method_declaration(name)
                .symbol(method)
                .defaults(vec![None, Some(default_node)]),
        );
        (method, declaration)
    }

    pub fn finish(self) -> CompilationModel {
        self.builder.finish()
    }
}

/// Run the call-node entry point on one node with default options.
pub(crate) fn analyze_call(model: &CompilationModel, node: NodeIndex) -> Vec<Diagnostic> {
    analyze_call_with(model, node, &AnalyzerOptions::default())
}

pub(crate) fn analyze_call_with(
    model: &CompilationModel,
    node: NodeIndex,
    options: &AnalyzerOptions,
) -> Vec<Diagnostic> {
    AnalysisSession::new(model, options).on_call_node(node)
}

pub(crate) fn analyze_declaration(model: &CompilationModel, node: NodeIndex) -> Vec<Diagnostic> {
    AnalysisSession::new(model, &AnalyzerOptions::default())
        .on_method_or_constructor_declaration(node)
}

pub(crate) fn kinds(diagnostics: &[Diagnostic]) -> Vec<DiagnosticKind> {
    diagnostics.iter().map(|d| d.kind).collect()
}
