use gca_common::{DiagnosticCategory, DiagnosticKind};
use gca_model::{MethodDef, ModelBuilder, NodeDef, SpecialType, TypeDef};

use crate::context::{AnalysisSession, AnalyzerOptions};
use crate::descriptors::{descriptors_for_rule, globalization_kinds, supported_diagnostics};
use crate::driver::analyze_compilation;
use crate::test_fixtures::{Framework, analyze_call, analyze_call_with, kinds};
use crate::well_known_types::TargetTypes;

// =============================================================================
// Options
// =============================================================================

#[test]
fn default_options() {
    let options = AnalyzerOptions::default();
    assert!(options.disabled_rules.is_empty());
    assert!(!options.warnings_as_errors);
    assert!(!options.deterministic_overload_order);
    assert!(options.check_xml_reader_create);
}

#[test]
fn options_from_camel_case_json() {
    let options: AnalyzerOptions =
        serde_json::from_str(r#"{"disabledRules":["CA1305"],"warningsAsErrors":true}"#)
            .expect("valid options");
    assert_eq!(options.disabled_rules, vec!["CA1305".to_string()]);
    assert!(options.warnings_as_errors);
    // Omitted fields keep their defaults.
    assert!(!options.deterministic_overload_order);
    assert!(options.check_xml_reader_create);

    let empty: AnalyzerOptions = serde_json::from_str("{}").expect("empty options");
    assert_eq!(empty, AnalyzerOptions::default());
}

#[test]
fn disabled_codes_ignore_unknown_ids() {
    let options = AnalyzerOptions::default()
        .with_disabled_rule("CA1305")
        .with_disabled_rule("ca1309")
        .with_disabled_rule("bogus");
    let codes = options.disabled_codes();
    assert!(codes.contains(&1305));
    assert!(codes.contains(&1309));
    assert!(!codes.contains(&1304));
    assert_eq!(codes.len(), 2);
}

// =============================================================================
// Rule switches
// =============================================================================

#[test]
fn disabled_rule_is_not_reported() {
    let mut fx = Framework::new();
    let s = fx.local("strA", fx.string);
    let call = fx.call("Int32.Parse(strA)", fx.int32_parse, &[s]);
    let model = fx.finish();

    let options = AnalyzerOptions::default().with_disabled_rule("CA1305");
    assert!(analyze_call_with(&model, call, &options).is_empty());

    let other = AnalyzerOptions::default().with_disabled_rule("CA1304");
    assert_eq!(analyze_call_with(&model, call, &other).len(), 1);
}

#[test]
fn warnings_as_errors_sets_category() {
    let mut fx = Framework::new();
    let s = fx.local("strA", fx.string);
    let call = fx.call("Int32.Parse(strA)", fx.int32_parse, &[s]);
    let model = fx.finish();

    let warnings = analyze_call(&model, call);
    assert_eq!(warnings[0].category, DiagnosticCategory::Warning);

    let options = AnalyzerOptions {
        warnings_as_errors: true,
        ..AnalyzerOptions::default()
    };
    let errors = analyze_call_with(&model, call, &options);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].category, DiagnosticCategory::Error);
}

#[test]
fn xml_check_can_be_switched_off() {
    let mut fx = Framework::new();
    let uri = fx.local("\"doc.xml\"", fx.string);
    let call = fx.call("XmlReader.Create(\"doc.xml\")", fx.xml_create, &[uri]);
    let model = fx.finish();

    assert_eq!(
        kinds(&analyze_call(&model, call)),
        vec![DiagnosticKind::XmlReaderCreateWrongOverload]
    );
    let options = AnalyzerOptions {
        check_xml_reader_create: false,
        ..AnalyzerOptions::default()
    };
    assert!(analyze_call_with(&model, call, &options).is_empty());
}

// =============================================================================
// Well-known types
// =============================================================================

#[test]
fn framework_types_resolve() {
    let fx = Framework::new();
    let types = TargetTypes::resolve(fx.builder.model());
    assert_eq!(types.culture_info, Some(fx.culture_info));
    assert_eq!(types.iformat_provider, Some(fx.iformat_provider));
    assert_eq!(types.string_comparison, Some(fx.string_comparison));
    assert_eq!(types.collections_comparer, Some(fx.comparer));
    assert_eq!(types.collections_icomparer, Some(fx.icomparer));
    assert_eq!(types.xml_reader, Some(fx.xml_reader));
    assert!(types.any_present());
    assert!(types.xml_present());
}

#[test]
fn compilation_without_framework_types_is_skipped() {
    let mut b = ModelBuilder::new();
    let object = b.add_type(TypeDef::class("System.Object", "object").special(SpecialType::Object));
    let string = b.add_type(
        TypeDef::class("System.String", "string")
            .special(SpecialType::String)
            .base(object),
    );
    let int32 = b.add_type(TypeDef::structure("System.Int32", "Int32").special(SpecialType::Int32));
    let parse = b.add_method(int32, MethodDef::new("Parse", int32).param("s", string));
    b.add_node(NodeDef::invocation("Int32.Parse(s)").symbol(parse));
    let model = b.finish();

    let session = AnalysisSession::new(&model, &AnalyzerOptions::default());
    assert_eq!(*session.types(), TargetTypes::default());
    assert!(!session.globalization_enabled());
    assert!(!session.xml_check_enabled());
    assert!(!session.has_work());
    assert!(analyze_compilation(&model, &AnalyzerOptions::default()).is_empty());
}

#[test]
fn xml_types_alone_enable_only_the_xml_check() {
    let mut b = ModelBuilder::new();
    let object = b.add_type(TypeDef::class("System.Object", "object").special(SpecialType::Object));
    b.add_type(TypeDef::class("System.Xml.XmlReader", "XmlReader").base(object));
    b.add_type(TypeDef::class("System.Xml.XmlReaderSettings", "XmlReaderSettings").base(object));
    let model = b.finish();

    let session = AnalysisSession::new(&model, &AnalyzerOptions::default());
    assert!(!session.globalization_enabled());
    assert!(session.xml_check_enabled());
    assert!(session.has_work());
}

// =============================================================================
// Descriptors
// =============================================================================

#[test]
fn supported_diagnostics_cover_every_kind() {
    let supported = supported_diagnostics();
    assert_eq!(supported.len(), 10);
    for (descriptor, kind) in supported.iter().zip(DiagnosticKind::ALL) {
        assert_eq!(descriptor.kind, kind);
    }
    assert_eq!(supported[9].code, 3075);
    assert_eq!(globalization_kinds().count(), 9);
}

#[test]
fn descriptors_by_rule_id() {
    assert_eq!(descriptors_for_rule("CA1305").len(), 4);
    assert_eq!(descriptors_for_rule("CA1309").len(), 3);
    assert_eq!(descriptors_for_rule("CA1304").len(), 1);
    assert_eq!(descriptors_for_rule("CA1307").len(), 1);
    assert!(descriptors_for_rule("not-a-rule").is_empty());
}
