use token_vocab::CategoryId;

use super::matchers::{self, split_trailing_options};
use super::*;
use crate::complexity::semantic_complexity;
use crate::regenerator::regenerate;

fn rule_name(name: &str) -> Option<&'static str> {
    match_rule(name).0.map(|r| r.name)
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

// ========================================
// Trailing options
// ========================================

#[test]
fn test_split_trailing_options_compound_first() {
    let parts = ["field", "edge", "extra", "large"];
    let (options, rest) = split_trailing_options(&parts);
    assert_eq!(options, strings(&["extra-large"]));
    assert_eq!(rest, &["field", "edge"]);
}

#[test]
fn test_split_trailing_options_multiple() {
    let parts = ["checkbox", "size", "small", "quiet"];
    let (options, rest) = split_trailing_options(&parts);
    assert_eq!(options, strings(&["small", "quiet"]));
    assert_eq!(rest, &["checkbox", "size"]);
}

#[test]
fn test_split_trailing_options_compound_only_when_last() {
    // `extra-large` followed by another option is read as `large` + the option, leaving `extra` behind.
    let parts = ["button", "extra", "large", "quiet"];
    let (options, rest) = split_trailing_options(&parts);
    assert_eq!(options, strings(&["large", "quiet"]));
    assert_eq!(rest, &["button", "extra"]);
}

#[test]
fn test_split_trailing_options_none() {
    let parts = ["visual", "50"];
    let (options, rest) = split_trailing_options(&parts);
    assert!(options.is_empty());
    assert_eq!(rest, &["visual", "50"]);
}

// ========================================
// Spacing
// ========================================

#[test]
fn test_spacing_with_index() {
    let s = classify("text-to-visual-50");
    assert_eq!(s.category, CategoryId::Spacing);
    assert_eq!(s.property.as_deref(), Some("spacing"));
    let between = s.space_between.as_ref().unwrap();
    assert_eq!((between.from.as_str(), between.to.as_str()), ("text", "visual"));
    assert_eq!(s.index.as_deref(), Some("50"));
    assert!(s.component.is_none());
    assert_eq!(semantic_complexity(&s), 2);
}

#[test]
fn test_spacing_with_component_and_options() {
    let s = classify("checkbox-control-to-text-medium");
    assert_eq!(s.category, CategoryId::Spacing);
    assert_eq!(s.component.as_deref(), Some("checkbox"));
    let between = s.space_between.as_ref().unwrap();
    assert_eq!(between.from, "control");
    assert_eq!(between.to, "text");
    assert_eq!(s.options, strings(&["medium"]));
    assert!(s.index.is_none());
    assert_eq!(semantic_complexity(&s), 4);
}

#[test]
fn test_spacing_component_prefers_longest_prefix() {
    let s = classify("radio-button-control-to-text-extra-large");
    assert_eq!(s.component.as_deref(), Some("radio-button"));
    assert_eq!(s.space_between.as_ref().unwrap().from, "control");
    assert_eq!(s.options, strings(&["extra-large"]));
}

#[test]
fn test_spacing_component_prefix_is_at_most_three_parts() {
    let s = classify("in-field-progress-circle-edge-to-text-small");
    assert!(s.component.is_none());
    assert_eq!(s.space_between.as_ref().unwrap().from, "in-field-progress-circle-edge");
}

#[test]
fn test_spacing_unknown_prefix_stays_in_from() {
    let s = classify("label-edge-to-text-quiet");
    assert!(s.component.is_none());
    assert_eq!(s.space_between.as_ref().unwrap().from, "label-edge");
}

#[test]
fn test_spacing_single_from_part_is_never_a_component() {
    let s = classify("field-to-text-small");
    assert!(s.component.is_none());
    assert_eq!(s.space_between.as_ref().unwrap().from, "field");
}

#[test]
fn test_spacing_scale_set_without_index() {
    let s = classify("field-edge-to-text");
    assert_eq!(s.category, CategoryId::Spacing);
    let between = s.space_between.as_ref().unwrap();
    assert_eq!(between.from, "field-edge");
    assert_eq!(between.to, "text");
    assert!(s.index.is_none());
    assert!(s.options.is_empty());
}

#[test]
fn test_spacing_requires_connector_after_first_part() {
    assert_ne!(classify("to-edge-to-text").category, CategoryId::Spacing);
    assert_ne!(classify("toggle-top-100").category, CategoryId::Spacing);
}

// ========================================
// Fixed shapes
// ========================================

#[test]
fn test_gradient_stop() {
    let s = classify("gradient-stop-1-genai");
    assert_eq!(s.category, CategoryId::GradientColor);
    assert_eq!(s.property.as_deref(), Some("gradient-stop"));
    assert_eq!(s.index.as_deref(), Some("1"));
    assert_eq!(s.variant.as_deref(), Some("genai"));
}

#[test]
fn test_component_size_with_state() {
    let s = classify("component-size-width-ratio-down");
    assert_eq!(s.category, CategoryId::ComponentProperty);
    assert_eq!(s.component.as_deref(), Some("component"));
    assert_eq!(s.property.as_deref(), Some("size"));
    assert_eq!(s.calculation.as_deref(), Some("width-ratio"));
    assert_eq!(s.state.as_deref(), Some("down"));
    assert_eq!(rule_name("component-size-width-ratio-down"), Some("component-size-state"));
}

#[test]
fn test_special_standalone() {
    let s = classify("android-elevation");
    assert_eq!(s.category, CategoryId::Special);
    assert_eq!(s.property.as_deref(), Some("android-elevation"));
    assert_eq!(semantic_complexity(&s), 1);
    assert_eq!(rule_name("side-focus-indicator"), Some("special-standalone"));
}

#[test]
fn test_anatomy_property_with_option() {
    let s = classify("side-label-character-count-top-margin-extra-large");
    assert_eq!(s.category, CategoryId::GenericProperty);
    assert_eq!(s.anatomy_part.as_deref(), Some("side-label-character-count"));
    assert_eq!(s.property.as_deref(), Some("top-margin"));
    assert_eq!(s.options, strings(&["extra-large"]));
}

#[test]
fn test_anatomy_property_rejects_non_option_suffix() {
    assert_ne!(
        rule_name("side-label-character-count-top-margin-huge"),
        Some("anatomy-property")
    );
}

#[test]
fn test_anatomy_property_pair() {
    let s = classify("focus-indicator-thickness");
    assert_eq!(s.category, CategoryId::GenericProperty);
    assert_eq!(s.anatomy_part.as_deref(), Some("focus-indicator"));
    assert_eq!(s.property.as_deref(), Some("thickness"));
}

// ========================================
// Typography
// ========================================

#[test]
fn test_typography_font_suffix() {
    let s = classify("sans-serif-font-family");
    assert_eq!(s.category, CategoryId::TypographyBase);
    assert_eq!(s.property.as_deref(), Some("sans-serif-font-family"));
    assert_eq!(s.notes.as_deref(), Some("Base typography property: font-family"));
}

#[test]
fn test_typography_standalone_and_component_suffixes() {
    assert_eq!(classify("letter-spacing").category, CategoryId::TypographyBase);
    assert_eq!(classify("heading-margin-top-multiplier").category, CategoryId::TypographyBase);
    assert_eq!(classify("detail-letter-spacing").category, CategoryId::TypographyBase);
    assert_eq!(classify("detail-sans-serif-text-transform").category, CategoryId::TypographyBase);
}

#[test]
fn test_typography_line_heights() {
    assert_eq!(classify("line-height-100").category, CategoryId::TypographyBase);
    assert_eq!(classify("cjk-line-height-200").category, CategoryId::TypographyBase);
    assert_ne!(classify("line-height-font-size").category, CategoryId::TypographyBase);
    assert_ne!(classify("cjkline-height-100").category, CategoryId::TypographyBase);
}

// ========================================
// Colors
// ========================================

#[test]
fn test_color_base() {
    let s = classify("white");
    assert_eq!(s.category, CategoryId::ColorBase);
    assert_eq!(s.color.as_deref(), Some("white"));
    assert_eq!(semantic_complexity(&s), 1);
}

#[test]
fn test_color_scale() {
    let s = classify("celery-900");
    assert_eq!(s.category, CategoryId::ColorScale);
    assert_eq!(s.color.as_deref(), Some("celery"));
    assert_eq!(s.index.as_deref(), Some("900"));
}

#[test]
fn test_modified_color_scale() {
    let s = classify("transparent-white-100");
    assert_eq!(s.category, CategoryId::ColorScale);
    assert_eq!(s.modifier.as_deref(), Some("transparent"));
    assert_eq!(s.color.as_deref(), Some("white"));
    assert_eq!(semantic_complexity(&s), 2);
}

#[test]
fn test_base_color_with_index_is_not_a_scale() {
    // Only palette colors take a bare index.
    let s = classify("white-100");
    assert_eq!(s.category, CategoryId::GenericProperty);
    assert_eq!(s.property.as_deref(), Some("white"));
}

// ========================================
// Generic properties
// ========================================

#[test]
fn test_generic_property() {
    let s = classify("spacing-100");
    assert_eq!(s.category, CategoryId::GenericProperty);
    assert_eq!(s.property.as_deref(), Some("spacing"));
    assert_eq!(s.index.as_deref(), Some("100"));
    assert_eq!(semantic_complexity(&s), 1);
}

#[test]
fn test_compound_generic_property_wins_over_component_property() {
    let s = classify("corner-radius-75");
    assert_eq!(s.category, CategoryId::GenericProperty);
    assert_eq!(s.property.as_deref(), Some("corner-radius"));
    assert!(s.component.is_none());
    assert_eq!(rule_name("corner-radius-75"), Some("generic-indexed-property"));
}

#[test]
fn test_three_part_generic_property() {
    let s = classify("drop-shadow-blur-100");
    assert_eq!(s.category, CategoryId::GenericProperty);
    assert_eq!(s.property.as_deref(), Some("drop-shadow-blur"));
}

#[test]
fn test_empty_property_is_not_generic() {
    assert_eq!(classify("-100").category, CategoryId::Unknown);
}

// ========================================
// Component properties
// ========================================

#[test]
fn test_component_property_keyword_scan() {
    let s = classify("workflow-icon-size-50");
    assert_eq!(s.category, CategoryId::ComponentProperty);
    assert_eq!(s.component.as_deref(), Some("workflow-icon"));
    assert_eq!(s.property.as_deref(), Some("size"));
    assert_eq!(s.index.as_deref(), Some("50"));
    assert_eq!(semantic_complexity(&s), 2);
}

#[test]
fn test_component_property_multi_word_property() {
    let s = classify("checkbox-control-size-small-100");
    // `size` is the first keyword; everything up to the index is the property.
    assert_eq!(s.component.as_deref(), Some("checkbox-control"));
    assert_eq!(s.property.as_deref(), Some("size-small"));
}

#[test]
fn test_component_padding_axis() {
    let s = classify("component-padding-vertical-100");
    assert_eq!(s.component.as_deref(), Some("component"));
    assert_eq!(s.property.as_deref(), Some("padding-vertical"));
    assert_eq!(s.index.as_deref(), Some("100"));
}

#[test]
fn test_plain_three_part_component_property() {
    let s = classify("slider-track-100");
    assert_eq!(s.category, CategoryId::ComponentProperty);
    assert_eq!(s.component.as_deref(), Some("slider"));
    assert_eq!(s.property.as_deref(), Some("track"));
}

#[test]
fn test_four_part_index_without_keyword_is_unknown() {
    assert_eq!(classify("avatar-border-offset-100").category, CategoryId::Unknown);
}

#[test]
fn test_compound_component_scale_set() {
    let s = classify("color-control-track-width");
    assert_eq!(s.category, CategoryId::ComponentProperty);
    assert_eq!(s.component.as_deref(), Some("color-control"));
    assert_eq!(s.anatomy_part.as_deref(), Some("track"));
    assert_eq!(s.property.as_deref(), Some("width"));
}

#[test]
fn test_two_part_scale_set() {
    let s = classify("field-width");
    assert_eq!(s.category, CategoryId::ComponentProperty);
    assert_eq!(s.component.as_deref(), Some("field"));
    assert_eq!(s.property.as_deref(), Some("width"));
}

#[test]
fn test_optioned_component_anatomy_property() {
    let s = classify("checkbox-control-size-small");
    assert_eq!(s.category, CategoryId::ComponentProperty);
    assert_eq!(s.component.as_deref(), Some("checkbox"));
    assert_eq!(s.anatomy_part.as_deref(), Some("control"));
    assert_eq!(s.property.as_deref(), Some("size"));
    assert_eq!(s.options, strings(&["small"]));
    assert_eq!(semantic_complexity(&s), 4);
}

#[test]
fn test_optioned_component_property() {
    let s = classify("tag-height-medium-quiet");
    assert_eq!(s.component.as_deref(), Some("tag"));
    assert!(s.anatomy_part.is_none());
    assert_eq!(s.property.as_deref(), Some("height"));
    assert_eq!(s.options, strings(&["medium", "quiet"]));
}

#[test]
fn test_optioned_without_known_property_is_special() {
    let s = classify("avatar-border-small");
    assert_eq!(s.category, CategoryId::Special);
    assert_eq!(s.notes.as_deref(), Some("No index suffix detected"));
}

// ========================================
// Fallbacks
// ========================================

#[test]
fn test_catch_all_special() {
    let s = classify("some-unknown-pattern-xyz");
    assert_eq!(s.category, CategoryId::Special);
    assert_eq!(s.property.as_deref(), Some("some-unknown-pattern-xyz"));
    assert_eq!(semantic_complexity(&s), 1);
}

#[test]
fn test_unknown_keeps_raw_and_parts() {
    let s = classify("opacity");
    assert_eq!(s.category, CategoryId::Unknown);
    assert_eq!(s.raw.as_deref(), Some("opacity"));
    assert_eq!(s.parts, strings(&["opacity"]));
    assert_eq!(semantic_complexity(&s), 0);
    assert_eq!(rule_name("opacity"), None);
}

#[test]
fn test_unknown_indexed_name() {
    let s = classify("foo-bar-baz-qux-100");
    assert_eq!(s.category, CategoryId::Unknown);
    assert_eq!(s.parts.len(), 5);
}

#[test]
fn test_naming_rules_do_not_change_classification() {
    let rules = NamingRules {
        components: vec!["workflow-icon".into()],
        ..NamingRules::default()
    };
    for name in ["text-to-visual-50", "corner-radius-75", "opacity", "field-width"] {
        assert_eq!(classify_with_rules(name, &rules), classify(name));
    }
}

#[test]
fn test_rule_names_are_unique() {
    let mut names: Vec<_> = RULES.iter().map(|r| r.name).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), RULES.len());
}

#[test]
fn test_matchers_decline_individually() {
    let parts = ["spacing", "100"];
    assert!(matchers::spacing("spacing-100", &parts).is_none());
    assert!(matchers::color("spacing-100", &parts).is_none());
    assert!(matchers::generic_indexed_property("spacing-100", &parts).is_some());
}

// ========================================
// Empty segments
// ========================================

#[test]
fn test_spacing_declines_empty_side() {
    let s = classify("gap-to-100");
    assert_ne!(rule_name("gap-to-100"), Some("spacing"));
    assert_eq!(s.category, CategoryId::ComponentProperty);
    assert_eq!(s.component.as_deref(), Some("gap"));
    assert_eq!(s.property.as_deref(), Some("to"));

    assert!(matchers::spacing("text-to-small", &["text", "to", "small"]).is_none());
    assert!(matchers::spacing("text-to-", &["text", "to", ""]).is_none());
}

#[test]
fn test_keyword_scan_declines_empty_component() {
    assert!(matchers::component_indexed_property("-size-50", &["", "size", "50"]).is_none());
    assert_eq!(classify("-size-50").category, CategoryId::Unknown);
    assert_eq!(classify("a--100").category, CategoryId::Unknown);
}

#[test]
fn test_degenerate_names_never_capture_empty_fields() {
    let names = [
        "gap-to-100",
        "text-to-small",
        "text-to-",
        "-size-50",
        "a--100",
        "-gap-small",
        "a--gap-small",
        "gradient-stop-1-",
        "component-size--down",
    ];
    for name in names {
        let s = classify(name);
        let fields = [
            &s.component,
            &s.anatomy_part,
            &s.property,
            &s.index,
            &s.calculation,
            &s.variant,
            &s.color,
            &s.modifier,
        ];
        assert!(fields.iter().all(|f| f.as_deref() != Some("")), "{name}: {s:?}");
        if let Some(space) = &s.space_between {
            assert!(!space.from.is_empty() && !space.to.is_empty(), "{name}: {s:?}");
        }
        assert_eq!(regenerate(&s).unwrap(), name, "{name}");
    }
}
