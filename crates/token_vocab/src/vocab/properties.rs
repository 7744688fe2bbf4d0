//! Property keyword vocabulary.
//!
//! Properties name *what* a token sets (`size`, `padding`, `corner-radius`). Different name shapes accept different
//! keyword sets, so the lists below are deliberately separate rather than one union.

/// Keywords that start the property segment of `{component}-{property}-{index}` names.
///
/// ## Notes
/// - The classifier scans middle parts left to right; the first keyword found ends the component.
pub const INDEXED_PROPERTY_KEYWORDS: &[&str] = &[
    "size", "height", "width", "spacing", "radius", "color", "padding",
];

/// Keywords that end `{component}[-{anatomy}]-{property}-{option}` names.
pub const OPTION_PROPERTY_KEYWORDS: &[&str] = &[
    "size",
    "height",
    "width",
    "spacing",
    "margin",
    "padding",
    "gap",
    "radius",
    "thickness",
];

/// Properties of scale-set names without index or options (`field-width`, `color-control-track-height`).
pub const SCALE_SET_PROPERTIES: &[&str] = &["width", "height"];

/// Anatomy parts of compound-component scale-set names.
pub const SCALE_SET_ANATOMY_PARTS: &[&str] = &["track"];

/// Two-word global properties followed by an index (`corner-radius-75`).
pub const TWO_PART_GENERIC_PROPERTIES: &[&str] = &["corner-radius"];

/// Three-word global properties followed by an index (`drop-shadow-blur-100`).
pub const THREE_PART_GENERIC_PROPERTIES: &[&str] = &["drop-shadow-x", "drop-shadow-y", "drop-shadow-blur"];

/// Property keyword of the `component-padding-{axis}-{index}` family.
pub const PADDING: &str = "padding";

/// Property keyword of the `component-size-{calculation}-{state}` family.
pub const SIZE: &str = "size";

/// Property assigned to every spacing name.
pub const SPACING: &str = "spacing";

/// Property assigned to gradient stop names.
pub const GRADIENT_STOP: &str = "gradient-stop";

pub fn is_indexed_property_keyword(part: &str) -> bool {
    INDEXED_PROPERTY_KEYWORDS.contains(&part)
}

pub fn is_option_property_keyword(part: &str) -> bool {
    OPTION_PROPERTY_KEYWORDS.contains(&part)
}

pub fn is_scale_set_property(part: &str) -> bool {
    SCALE_SET_PROPERTIES.contains(&part)
}

pub fn is_scale_set_anatomy_part(part: &str) -> bool {
    SCALE_SET_ANATOMY_PARTS.contains(&part)
}

pub fn is_two_part_generic_property(name: &str) -> bool {
    TWO_PART_GENERIC_PROPERTIES.contains(&name)
}

pub fn is_three_part_generic_property(name: &str) -> bool {
    THREE_PART_GENERIC_PROPERTIES.contains(&name)
}
