//! Component option vocabulary.
//!
//! Options trail a name instead of a numeric index: `checkbox-control-size-small`,
//! `field-edge-to-text-quiet`. `extra-large` is the only option spelled with a hyphen, so it spans two parts.

/// All component options, including the compound `extra-large`.
pub const COMPONENT_OPTIONS: &[&str] = &[
    "small",
    "medium",
    "large",
    "extra-large",
    "quiet",
    "compact",
    "spacious",
];

/// The two-part compound option, as `(first, second)` name parts.
pub const COMPOUND_OPTION: (&str, &str) = ("extra", "large");

pub fn is_component_option(part: &str) -> bool {
    COMPONENT_OPTIONS.contains(&part)
}

/// Spelling of the compound option (`extra-large`).
pub fn compound_option() -> String {
    format!("{}-{}", COMPOUND_OPTION.0, COMPOUND_OPTION.1)
}
