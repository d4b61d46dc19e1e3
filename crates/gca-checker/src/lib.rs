//! Globalization analyzers.
//!
//! This crate inspects call sites and method declarations for
//! culture-sensitivity defects:
//! - `CA1304` a `CultureInfo` overload exists but is not used
//! - `CA1305` an `IFormatProvider` overload exists but is not used, or a UI
//!   culture is passed as a format provider
//! - `CA1307` a `StringComparison` overload exists but is not used
//! - `CA1309` an invariant-culture comparison or comparer is used where an
//!   ordinal one is meant
//!
//! plus `CA3075` for `XmlReader.Create` overloads that cannot take settings.
//!
//! Everything the analyzers know about the program comes through
//! [`gca_model::SemanticModel`]. Module map:
//! - `context` - `AnalyzerOptions` and the per-compilation `AnalysisSession`
//! - `well_known_types` - framework types resolved once per compilation
//! - `dispatch` - per-node entry points
//! - `exemptions`, `string_methods`, `overload_diff`, `argument_checker`,
//!   `default_values`, `xml_reader` - the detectors
//! - `reporter` - per-node state and diagnostic emission
//! - `driver` - sequential and parallel whole-compilation analysis

pub mod context;
pub mod descriptors;
mod dispatch;
pub mod driver;
pub mod type_relations;
pub mod well_known_types;

mod argument_checker;
mod default_values;
mod exemptions;
mod overload_diff;
mod reporter;
mod string_methods;
mod xml_reader;

pub use context::{AnalysisSession, AnalyzerOptions};
pub use descriptors::supported_diagnostics;
pub use driver::{analyze_compilation, analyze_compilation_parallel, sort_diagnostics};
pub use well_known_types::TargetTypes;

#[cfg(test)]
mod test_fixtures;

#[cfg(test)]
#[path = "../tests/overload_diff_tests.rs"]
mod overload_diff_tests;

#[cfg(test)]
#[path = "../tests/exemption_tests.rs"]
mod exemption_tests;

#[cfg(test)]
#[path = "../tests/argument_checker_tests.rs"]
mod argument_checker_tests;

#[cfg(test)]
#[path = "../tests/default_value_tests.rs"]
mod default_value_tests;

#[cfg(test)]
#[path = "../tests/session_tests.rs"]
mod session_tests;
