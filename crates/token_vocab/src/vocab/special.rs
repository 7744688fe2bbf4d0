//! Fixed-shape names: standalone specials, anatomy/property pairs and state keywords.
//!
//! These are exact spellings rather than open-ended patterns. A name listed here is classified by lookup before any
//! structural rule gets a chance to split it.

/// Standalone names that are neither properties nor aliases (platform-specific or legacy).
pub const SPECIAL_STANDALONE: &[&str] = &["side-focus-indicator", "android-elevation"];

/// An anatomy part followed by a property, without component or index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnatomyProperty {
    pub anatomy: &'static str,
    pub property: &'static str,
}

/// Exact `{anatomy}-{property}` names (`focus-indicator-gap`).
pub const ANATOMY_PROPERTY_PAIRS: &[AnatomyProperty] = &[
    pair("focus-indicator", "gap"),
    pair("focus-indicator", "thickness"),
    pair("text-underline", "gap"),
    pair("text-underline", "thickness"),
];

/// `{anatomy}-{property}` prefixes that are always followed by exactly one component option
/// (`side-label-character-count-top-margin-extra-large`).
pub const OPTIONED_ANATOMY_PROPERTIES: &[AnatomyProperty] = &[pair("side-label-character-count", "top-margin")];

/// Interaction states that may end a `component-size-*` name.
pub const STATES: &[&str] = &["down"];

pub fn is_special_standalone(name: &str) -> bool {
    SPECIAL_STANDALONE.contains(&name)
}

pub fn is_state(part: &str) -> bool {
    STATES.contains(&part)
}

/// Find the anatomy/property pair spelled exactly `name`.
pub fn anatomy_property_pair(name: &str) -> Option<&'static AnatomyProperty> {
    ANATOMY_PROPERTY_PAIRS.iter().find(|p| p.spelling() == name)
}

impl AnatomyProperty {
    /// `{anatomy}-{property}`.
    pub fn spelling(&self) -> String {
        format!("{}-{}", self.anatomy, self.property)
    }
}

const fn pair(anatomy: &'static str, property: &'static str) -> AnatomyProperty {
    AnatomyProperty { anatomy, property }
}
