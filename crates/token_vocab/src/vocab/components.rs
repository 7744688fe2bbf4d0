//! Component vocabulary.
//!
//! Components appear at the front of a name. Most component names are several hyphen-separated words
//! (`radio-button`, `in-field-progress-circle`), so a name cannot be split on hyphens alone; the tables below are
//! how the classifier finds the component boundary.

/// Components that prefix spacing names with options (`{component}-{from}-to-{to}-{option}`).
///
/// ## Notes
/// - The spacing rule tries 3-, 2- and 1-part prefixes of the `from` side against this table, longest first.
pub const SPACING_COMPONENTS: &[&str] = &[
    "field",
    "component",
    "disclosure-indicator",
    "navigational-indicator",
    "checkbox",
    "switch",
    "radio-button",
    "accordion",
    "action-bar",
    "action-button",
    "alert-banner",
    "alert-dialog",
    "avatar",
    "breadcrumbs",
    "card",
    "coach-mark",
    "color-area",
    "color-slider",
    "color-wheel",
    "combo-box",
    "date-picker",
    "help-text",
    "in-field-progress-circle",
    "list-view",
    "menu",
    "number-field",
    "picker",
    "popover",
    "radio",
    "rating",
    "select",
    "side-navigation",
    "slider",
    "stack-view",
    "standard-tabs",
    "status-light",
    "steplist",
    "tab-list",
    "table",
    "tag",
    "time-picker",
    "toast",
    "tray",
    "tree-view",
];

/// Two-word components used by scale-set names without an index (`color-control-track-width`).
pub const COMPOUND_COMPONENTS: &[&str] = &["color-control"];

/// Components used by two-part scale-set names without an index (`field-width`).
pub const SCALE_SET_COMPONENTS: &[&str] = &["field"];

/// The generic component placeholder used by `component-size-*` and `component-padding-*` names.
pub const GENERIC_COMPONENT: &str = "component";

pub fn is_spacing_component(name: &str) -> bool {
    SPACING_COMPONENTS.contains(&name)
}

pub fn is_compound_component(name: &str) -> bool {
    COMPOUND_COMPONENTS.contains(&name)
}

pub fn is_scale_set_component(name: &str) -> bool {
    SCALE_SET_COMPONENTS.contains(&name)
}
