//! `XmlReader.Create` overloads that take no `XmlReaderSettings`.

use gca_common::DiagnosticKind;

use crate::reporter::NodeAnalysis;
use crate::type_relations::is_same_type;

const CREATE: &str = "Create";

impl NodeAnalysis<'_, '_> {
    /// Report a call to an `XmlReader.Create` overload (including through a
    /// derived type such as `XmlTextReader`) that cannot be given settings.
    pub(crate) fn check_xml_reader_create(&mut self) {
        let model = self.model();
        let types = self.types();
        if self.callee_name() != CREATE
            || !self.session.is_derived_from(self.owner, types.xml_reader, true)
        {
            return;
        }
        let takes_settings = model
            .parameters(self.callee)
            .iter()
            .any(|p| is_same_type(Some(p.type_id), types.xml_reader_settings));
        if takes_settings {
            return;
        }
        let callee = self.callee_display_owned();
        self.report_at_node(DiagnosticKind::XmlReaderCreateWrongOverload, &[&callee]);
    }
}
