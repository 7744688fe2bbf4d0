//! The structured form of a token name.
//!
//! [`NameStructure`] is a flat record: `category` is always set, every other field is optional and only meaningful
//! for some categories. The JSON shape (camelCase keys, absent fields omitted) is the one written to structured token
//! files and read back by the comparison tooling.

use serde::{Deserialize, Serialize};
use token_vocab::CategoryId;

/// The two anatomy parts a spacing token separates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpaceBetween {
    pub from: String,
    pub to: String,
}

/// A classified token name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NameStructure {
    pub category: CategoryId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anatomy_part: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property: Option<String>,
    /// Numeric index, kept as its digit string (`"50"`, `"100"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<String>,
    /// Component options in name order (`["extra-large", "quiet"]`).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub space_between: Option<SpaceBetween>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calculation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modifier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub referenced_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw: Option<String>,
    /// Hyphen-separated parts; only recorded for [`CategoryId::Unknown`].
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parts: Vec<String>,
}

impl NameStructure {
    /// An empty structure of the given category.
    pub fn new(category: CategoryId) -> Self {
        Self {
            category,
            component: None,
            anatomy_part: None,
            property: None,
            index: None,
            options: Vec::new(),
            space_between: None,
            state: None,
            calculation: None,
            variant: None,
            platform: None,
            color: None,
            modifier: None,
            referenced_token: None,
            notes: None,
            raw: None,
            parts: Vec::new(),
        }
    }

    pub fn with_component(mut self, component: impl Into<String>) -> Self {
        self.component = Some(component.into());
        self
    }

    pub fn with_anatomy_part(mut self, anatomy_part: impl Into<String>) -> Self {
        self.anatomy_part = Some(anatomy_part.into());
        self
    }

    pub fn with_property(mut self, property: impl Into<String>) -> Self {
        self.property = Some(property.into());
        self
    }

    pub fn with_index(mut self, index: impl Into<String>) -> Self {
        self.index = Some(index.into());
        self
    }

    pub fn with_options(mut self, options: Vec<String>) -> Self {
        self.options = options;
        self
    }

    pub fn with_space_between(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.space_between = Some(SpaceBetween {
            from: from.into(),
            to: to.into(),
        });
        self
    }

    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    pub fn with_calculation(mut self, calculation: impl Into<String>) -> Self {
        self.calculation = Some(calculation.into());
        self
    }

    pub fn with_variant(mut self, variant: impl Into<String>) -> Self {
        self.variant = Some(variant.into());
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_modifier(mut self, modifier: impl Into<String>) -> Self {
        self.modifier = Some(modifier.into());
        self
    }

    pub fn with_referenced_token(mut self, referenced_token: Option<String>) -> Self {
        self.referenced_token = referenced_token;
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn with_raw(mut self, raw: impl Into<String>, parts: &[&str]) -> Self {
        self.raw = Some(raw.into());
        self.parts = parts.iter().map(|p| p.to_string()).collect();
        self
    }
}
