//! Typography vocabulary.
//!
//! Typography base names are kept whole: the classifier stores the full name as the property instead of splitting
//! it, so these tables only need to recognize the shapes.

/// Suffixes of `{value}-font-{property}` names (`bold-font-weight`, `sans-serif-font-family`).
pub const FONT_SUFFIXES: &[&str] = &["font-weight", "font-family", "font-style"];

/// Typography properties that are complete names on their own.
pub const STANDALONE_PROPERTIES: &[&str] = &[
    "letter-spacing",
    "text-align-start",
    "text-align-center",
    "text-align-end",
    "heading-margin-top-multiplier",
    "heading-margin-bottom-multiplier",
    "body-margin-multiplier",
    "detail-margin-top-multiplier",
    "detail-margin-bottom-multiplier",
];

/// Suffixes of component-specific typography names (`detail-letter-spacing`, `detail-sans-serif-text-transform`).
pub const COMPONENT_SUFFIXES: &[&str] = &["letter-spacing", "text-transform"];

/// Prefix of indexed line heights (`line-height-100`).
pub const LINE_HEIGHT: &str = "line-height";

/// Optional script prefix of line heights (`cjk-line-height-200`).
pub const CJK: &str = "cjk";

pub fn is_standalone_property(name: &str) -> bool {
    STANDALONE_PROPERTIES.contains(&name)
}
