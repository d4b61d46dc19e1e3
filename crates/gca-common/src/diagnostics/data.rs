//! Rule descriptor table.
//!
//! Entries are ordered by `DiagnosticKind` discriminant so that
//! `DiagnosticKind::descriptor` can index directly.

use super::{DiagnosticCategory, DiagnosticDescriptor, DiagnosticKind};

pub mod diagnostic_codes {
    pub const SPECIFY_CULTURE_INFO: u32 = 1304;
    pub const SPECIFY_IFORMAT_PROVIDER: u32 = 1305;
    pub const SPECIFY_STRING_COMPARISON: u32 = 1307;
    pub const USE_ORDINAL_STRING_COMPARISON: u32 = 1309;
    pub const XML_READER_CREATE_WRONG_OVERLOAD: u32 = 3075;
}

pub mod diagnostic_messages {
    pub const SPECIFY_CULTURE_INFO_TITLE: &str = "Specify CultureInfo";
    pub const SPECIFY_CULTURE_INFO: &str = "Because the behavior of '{0}' could vary based on the current user's locale settings, replace this call in '{1}' with a call to '{2}'. If the result of '{2}' will be displayed to the user, specify 'CultureInfo.CurrentCulture' as the 'CultureInfo' parameter. Otherwise, if the result will be stored and accessed by software, such as when it is persisted to disk or to a database, specify 'CultureInfo.InvariantCulture'.";
    pub const SPECIFY_CULTURE_INFO_DESCRIPTION: &str = "A method or constructor calls a member that has an overload that accepts a System.Globalization.CultureInfo parameter, and the method or constructor does not call the overload that takes the CultureInfo parameter. When a CultureInfo or System.IFormatProvider object is not supplied, the default value that is supplied by the overloaded member might not have the effect that you want in all locales.";

    pub const SPECIFY_IFORMAT_PROVIDER_TITLE: &str = "Specify IFormatProvider";
    pub const SPECIFY_IFORMAT_PROVIDER_ALTERNATE_STRING: &str = "Because the behavior of '{0}' could vary based on the current user's locale settings, replace this call in '{1}' with a call to '{2}'. If the result of '{2}' will be displayed to the user, specify 'CultureInfo.CurrentCulture' as the 'IFormatProvider' parameter. Otherwise, if the result will be stored and accessed by software, such as when it is persisted to disk or to a database, specify 'CultureInfo.InvariantCulture'.";
    pub const SPECIFY_IFORMAT_PROVIDER_ALTERNATE: &str = "Because the behavior of '{0}' could vary based on the current user's locale settings, replace this call in '{1}' with a call to '{2}'. If the result of '{2}' will be based on input from the user, specify 'CultureInfo.CurrentCulture' as the 'IFormatProvider' parameter. Otherwise, if the result will be based on input stored and accessed by software, such as when it is loaded from disk or from a database, specify 'CultureInfo.InvariantCulture'.";
    pub const SPECIFY_IFORMAT_PROVIDER_UI_CULTURE_STRING: &str = "'{0}' passes '{1}' as the 'IFormatProvider' parameter to '{2}'. This property returns a culture that is inappropriate for formatting methods.";
    pub const SPECIFY_IFORMAT_PROVIDER_UI_CULTURE: &str = "'{0}' passes '{1}' as the 'IFormatProvider' parameter to '{2}'. This property returns a culture that is inappropriate for parsing methods.";
    pub const SPECIFY_IFORMAT_PROVIDER_DESCRIPTION: &str = "A method or constructor calls one or more members that have overloads that accept a System.IFormatProvider parameter, and the method or constructor does not call the overload that takes the IFormatProvider parameter. When a System.Globalization.CultureInfo or IFormatProvider object is not supplied, the default value that is supplied by the overloaded member might not have the effect that you want in all locales.";

    pub const SPECIFY_STRING_COMPARISON_TITLE: &str = "Specify StringComparison";
    pub const SPECIFY_STRING_COMPARISON: &str = "'{0}' has a method overload that takes a 'StringComparison' parameter. Replace this call in '{1}' with a call to '{2}' for clarity of intent.";
    pub const SPECIFY_STRING_COMPARISON_DESCRIPTION: &str = "A string comparison operation uses a method overload that does not set a StringComparison parameter. The default comparison is culture-sensitive for some overloads and ordinal for others, so the intent of the call is unclear.";

    pub const USE_ORDINAL_STRING_COMPARISON_TITLE: &str = "Use ordinal StringComparison";
    pub const USE_ORDINAL_STRING_COMPARISON: &str = "'{0}' passes '{1}' as the 'StringComparison' parameter to '{2}'. To perform a non-linguistic comparison, specify 'StringComparison.Ordinal' or 'StringComparison.OrdinalIgnoreCase' instead.";
    pub const USE_ORDINAL_STRING_COMPARER: &str = "'{0}' passes '{1}' as the 'StringComparer' parameter to '{2}'. To perform a non-linguistic comparison, specify 'StringComparer.Ordinal' or 'StringComparer.OrdinalIgnoreCase' instead.";
    pub const USE_ORDINAL_STRING_COMPARISON_DEFAULT: &str = "'{0}' uses '{1}' as the default value of its 'StringComparison' parameter. To perform a non-linguistic comparison, use 'StringComparison.Ordinal' or 'StringComparison.OrdinalIgnoreCase' as the default instead.";
    pub const USE_ORDINAL_STRING_COMPARISON_DESCRIPTION: &str = "A string comparison operation that is non-linguistic does not set the StringComparison parameter to either Ordinal or OrdinalIgnoreCase. By explicitly setting the parameter to either StringComparison.Ordinal or StringComparison.OrdinalIgnoreCase, your code often gains speed, becomes more correct, and becomes more reliable.";

    pub const XML_READER_CREATE_WRONG_OVERLOAD_TITLE: &str = "Insecure DTD processing in XML";
    pub const XML_READER_CREATE_WRONG_OVERLOAD: &str = "XmlReader.Create is called without an XmlReaderSettings argument. Use an overload of '{0}' that takes an XmlReaderSettings instance, and set DtdProcessing to Prohibit or Ignore.";
    pub const XML_READER_CREATE_WRONG_OVERLOAD_DESCRIPTION: &str = "Using XmlReader.Create without XmlReaderSettings relies on default DTD processing, which can expose the application to information disclosure or denial of service when the input is untrusted.";
}

use diagnostic_codes as codes;
use diagnostic_messages as msg;

const GLOBALIZATION: &str = "Globalization";
const SECURITY: &str = "Security";
const TELEMETRY: &[&str] = &["Telemetry"];

const fn descriptor(
    kind: DiagnosticKind,
    code: u32,
    title: &'static str,
    message: &'static str,
    description: &'static str,
    group: &'static str,
) -> DiagnosticDescriptor {
    DiagnosticDescriptor {
        kind,
        code,
        title,
        message,
        description,
        group,
        default_category: DiagnosticCategory::Warning,
        enabled_by_default: true,
        custom_tags: TELEMETRY,
    }
}

pub static DIAGNOSTIC_DESCRIPTORS: [DiagnosticDescriptor; 10] = [
    descriptor(
        DiagnosticKind::SpecifyCulture,
        codes::SPECIFY_CULTURE_INFO,
        msg::SPECIFY_CULTURE_INFO_TITLE,
        msg::SPECIFY_CULTURE_INFO,
        msg::SPECIFY_CULTURE_INFO_DESCRIPTION,
        GLOBALIZATION,
    ),
    descriptor(
        DiagnosticKind::SpecifyFormatProviderAlternate,
        codes::SPECIFY_IFORMAT_PROVIDER,
        msg::SPECIFY_IFORMAT_PROVIDER_TITLE,
        msg::SPECIFY_IFORMAT_PROVIDER_ALTERNATE,
        msg::SPECIFY_IFORMAT_PROVIDER_DESCRIPTION,
        GLOBALIZATION,
    ),
    descriptor(
        DiagnosticKind::SpecifyFormatProviderAlternateString,
        codes::SPECIFY_IFORMAT_PROVIDER,
        msg::SPECIFY_IFORMAT_PROVIDER_TITLE,
        msg::SPECIFY_IFORMAT_PROVIDER_ALTERNATE_STRING,
        msg::SPECIFY_IFORMAT_PROVIDER_DESCRIPTION,
        GLOBALIZATION,
    ),
    descriptor(
        DiagnosticKind::SpecifyFormatProviderUICulture,
        codes::SPECIFY_IFORMAT_PROVIDER,
        msg::SPECIFY_IFORMAT_PROVIDER_TITLE,
        msg::SPECIFY_IFORMAT_PROVIDER_UI_CULTURE,
        msg::SPECIFY_IFORMAT_PROVIDER_DESCRIPTION,
        GLOBALIZATION,
    ),
    descriptor(
        DiagnosticKind::SpecifyFormatProviderUICultureString,
        codes::SPECIFY_IFORMAT_PROVIDER,
        msg::SPECIFY_IFORMAT_PROVIDER_TITLE,
        msg::SPECIFY_IFORMAT_PROVIDER_UI_CULTURE_STRING,
        msg::SPECIFY_IFORMAT_PROVIDER_DESCRIPTION,
        GLOBALIZATION,
    ),
    descriptor(
        DiagnosticKind::SpecifyStringComparison,
        codes::SPECIFY_STRING_COMPARISON,
        msg::SPECIFY_STRING_COMPARISON_TITLE,
        msg::SPECIFY_STRING_COMPARISON,
        msg::SPECIFY_STRING_COMPARISON_DESCRIPTION,
        GLOBALIZATION,
    ),
    descriptor(
        DiagnosticKind::UseOrdinalComparer,
        codes::USE_ORDINAL_STRING_COMPARISON,
        msg::USE_ORDINAL_STRING_COMPARISON_TITLE,
        msg::USE_ORDINAL_STRING_COMPARER,
        msg::USE_ORDINAL_STRING_COMPARISON_DESCRIPTION,
        GLOBALIZATION,
    ),
    descriptor(
        DiagnosticKind::UseOrdinalComparison,
        codes::USE_ORDINAL_STRING_COMPARISON,
        msg::USE_ORDINAL_STRING_COMPARISON_TITLE,
        msg::USE_ORDINAL_STRING_COMPARISON,
        msg::USE_ORDINAL_STRING_COMPARISON_DESCRIPTION,
        GLOBALIZATION,
    ),
    descriptor(
        DiagnosticKind::UseOrdinalComparisonDefault,
        codes::USE_ORDINAL_STRING_COMPARISON,
        msg::USE_ORDINAL_STRING_COMPARISON_TITLE,
        msg::USE_ORDINAL_STRING_COMPARISON_DEFAULT,
        msg::USE_ORDINAL_STRING_COMPARISON_DESCRIPTION,
        GLOBALIZATION,
    ),
    descriptor(
        DiagnosticKind::XmlReaderCreateWrongOverload,
        codes::XML_READER_CREATE_WRONG_OVERLOAD,
        msg::XML_READER_CREATE_WRONG_OVERLOAD_TITLE,
        msg::XML_READER_CREATE_WRONG_OVERLOAD,
        msg::XML_READER_CREATE_WRONG_OVERLOAD_DESCRIPTION,
        SECURITY,
    ),
];
