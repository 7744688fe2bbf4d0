//! Naming rules extracted from the token naming workbook.
//!
//! The workbook lists every token name together with its group, its `from-to` pair and its size option. The rules
//! collected from it are threaded through classification so that future rules can consult them; the current rule
//! table does not.

use serde::{Deserialize, Serialize};

/// Vocabulary observed in the naming workbook. Every list is sorted and de-duplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NamingRules {
    pub anatomy_parts: Vec<String>,
    /// Numeric indices, sorted by numeric value.
    pub index_values: Vec<String>,
    pub size_options: Vec<String>,
    pub modifiers: Vec<String>,
    pub groups: Vec<String>,
    pub components: Vec<String>,
    pub properties: Vec<String>,
}

impl NamingRules {
    /// Whether no vocabulary was loaded (the workbook was absent or unreadable).
    pub fn is_empty(&self) -> bool {
        self.anatomy_parts.is_empty()
            && self.index_values.is_empty()
            && self.size_options.is_empty()
            && self.modifiers.is_empty()
            && self.groups.is_empty()
            && self.components.is_empty()
            && self.properties.is_empty()
    }
}
