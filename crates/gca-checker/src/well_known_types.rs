//! Framework types the analyzers care about, resolved once per compilation.
//!
//! Each entry is `None` when the compilation does not reference the type; a
//! check that needs a missing type can never fire.

use gca_model::{SemanticModel, TypeId};
use tracing::debug;

pub mod metadata_names {
    pub const ACTIVATOR: &str = "System.Activator";
    pub const BASIC_DATE_TYPE: &str = "Microsoft.VisualBasic.CompilerServices.DateType";
    pub const CASE_INSENSITIVE_COMPARER: &str = "System.Collections.CaseInsensitiveComparer";
    pub const COLLECTIONS_COMPARER: &str = "System.Collections.Comparer";
    pub const COLLECTIONS_ICOMPARER: &str = "System.Collections.IComparer";
    pub const COMPONENT_RESOURCE_MANAGER: &str = "System.ComponentModel.ComponentResourceManager";
    pub const CULTURE_INFO: &str = "System.Globalization.CultureInfo";
    pub const GUID: &str = "System.Guid";
    pub const IFORMAT_PROVIDER: &str = "System.IFormatProvider";
    pub const RESOURCE_MANAGER: &str = "System.Resources.ResourceManager";
    pub const STRING_COMPARER: &str = "System.StringComparer";
    pub const STRING_COMPARISON: &str = "System.StringComparison";
    pub const XML_READER: &str = "System.Xml.XmlReader";
    pub const XML_READER_SETTINGS: &str = "System.Xml.XmlReaderSettings";
}

/// Identity handles for the well-known framework types.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TargetTypes {
    pub activator: Option<TypeId>,
    pub basic_date_type: Option<TypeId>,
    pub case_insensitive_comparer: Option<TypeId>,
    pub collections_comparer: Option<TypeId>,
    pub collections_icomparer: Option<TypeId>,
    pub component_resource_manager: Option<TypeId>,
    pub culture_info: Option<TypeId>,
    pub guid: Option<TypeId>,
    pub iformat_provider: Option<TypeId>,
    pub resource_manager: Option<TypeId>,
    pub string_comparer: Option<TypeId>,
    pub string_comparison: Option<TypeId>,
    pub xml_reader: Option<TypeId>,
    pub xml_reader_settings: Option<TypeId>,
}

impl TargetTypes {
    /// Resolve every well-known type against `model`. Never fails.
    pub fn resolve(model: &dyn SemanticModel) -> Self {
        use metadata_names as names;
        let lookup = |name: &str| model.lookup_type_by_metadata_name(name);
        let types = Self {
            activator: lookup(names::ACTIVATOR),
            basic_date_type: lookup(names::BASIC_DATE_TYPE),
            case_insensitive_comparer: lookup(names::CASE_INSENSITIVE_COMPARER),
            collections_comparer: lookup(names::COLLECTIONS_COMPARER),
            collections_icomparer: lookup(names::COLLECTIONS_ICOMPARER),
            component_resource_manager: lookup(names::COMPONENT_RESOURCE_MANAGER),
            culture_info: lookup(names::CULTURE_INFO),
            guid: lookup(names::GUID),
            iformat_provider: lookup(names::IFORMAT_PROVIDER),
            resource_manager: lookup(names::RESOURCE_MANAGER),
            string_comparer: lookup(names::STRING_COMPARER),
            string_comparison: lookup(names::STRING_COMPARISON),
            xml_reader: lookup(names::XML_READER),
            xml_reader_settings: lookup(names::XML_READER_SETTINGS),
        };
        debug!(
            any_present = types.any_present(),
            xml_present = types.xml_present(),
            "resolved well-known types"
        );
        types
    }

    /// Whether any type that can make a globalization rule fire resolved.
    #[must_use]
    pub const fn any_present(&self) -> bool {
        self.string_comparer.is_some()
            || self.collections_comparer.is_some()
            || self.case_insensitive_comparer.is_some()
            || self.iformat_provider.is_some()
            || self.culture_info.is_some()
            || self.string_comparison.is_some()
    }

    /// Whether the XmlReader overload check has what it needs.
    #[must_use]
    pub const fn xml_present(&self) -> bool {
        self.xml_reader.is_some() && self.xml_reader_settings.is_some()
    }
}
