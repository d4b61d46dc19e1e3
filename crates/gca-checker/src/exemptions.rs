//! Callees that are never reported, whatever their overloads or arguments.

use gca_model::SpecialType;
use tracing::warn;

use crate::reporter::NodeAnalysis;
use crate::type_relations::is_same_type;

const TO_STRING: &str = "ToString";
const EQUALS: &str = "Equals";
const RESOURCE_GETTERS: [&str; 3] = ["GetString", "GetObject", "GetStream"];
const APPLY_RESOURCES: &str = "ApplyResources";
const CREATE_INSTANCE: &str = "CreateInstance";

impl NodeAnalysis<'_, '_> {
    /// Whether the callee is categorically exempt. The first matching rule
    /// decides.
    pub(crate) fn is_exempt(&self) -> bool {
        let model = self.model();
        let types = self.types();
        let name = self.callee_name();
        let owner = Some(self.owner);
        let special = model.special_type(self.owner);

        if !special.is_none() {
            if name == TO_STRING {
                // The format provider is ignored by these overloads.
                return matches!(
                    special,
                    SpecialType::Boolean | SpecialType::Char | SpecialType::Enum | SpecialType::String
                );
            }
            if special == SpecialType::String && name == EQUALS {
                // String.Equals compares ordinally unless told otherwise.
                let Some(last) = model.parameters(self.callee).last() else {
                    warn!(node = self.node.0, "string.Equals resolved without parameters");
                    return true;
                };
                return !is_same_type(Some(last.type_id), types.string_comparison);
            }
            return false;
        }

        if self.session.is_derived_from(self.owner, types.resource_manager, true) {
            if RESOURCE_GETTERS.contains(&name) {
                return true;
            }
            return name == APPLY_RESOURCES && is_same_type(owner, types.component_resource_manager);
        }
        if is_same_type(owner, types.activator) {
            return name == CREATE_INSTANCE;
        }
        if is_same_type(owner, types.basic_date_type) {
            // Emitted by the compiler, not written by the user.
            return true;
        }
        name == TO_STRING && is_same_type(owner, types.guid)
    }
}
