//! Classification rules, one function per name shape.
//!
//! Each matcher receives the whole name and its `-`-separated parts and returns `None` when the shape does not
//! apply. Matchers assume nothing about which rules ran before them except where noted; precedence is expressed by
//! the order of [`super::RULES`].

use token_vocab::CategoryId;
use token_vocab::vocab::{
    RELATIONSHIP_CONNECTOR, colors, components, is_index, options, properties, special, typography,
};

use crate::structure::NameStructure;

// ============================================================================
// Helpers
// ============================================================================

fn join(parts: &[&str]) -> String {
    parts.join("-")
}

/// `Some(field)` unless the field is empty; matchers never capture empty fields.
fn filled(field: String) -> Option<String> {
    (!field.is_empty()).then_some(field)
}

/// Strip component options from the end of `parts`.
///
/// The compound `extra-large` is only recognized as the very last option; further options are then collected one
/// part at a time. Returns the options in name order and the parts before them.
pub(crate) fn split_trailing_options<'a, 'b>(parts: &'a [&'b str]) -> (Vec<String>, &'a [&'b str]) {
    let (first, second) = options::COMPOUND_OPTION;
    let mut end = parts.len();
    let mut found = Vec::new();

    if end >= 2 && parts[end - 1] == second && parts[end - 2] == first {
        found.push(options::compound_option());
        end -= 2;
    } else if end >= 1 && options::is_component_option(parts[end - 1]) {
        found.push(parts[end - 1].to_string());
        end -= 1;
    }

    while end >= 1 && options::is_component_option(parts[end - 1]) {
        found.push(parts[end - 1].to_string());
        end -= 1;
    }

    found.reverse();
    (found, &parts[..end])
}

/// Split an optional known component off the front of a spacing name's `from` side.
///
/// Tries 3-, 2- and 1-part prefixes, always leaving at least one part for `from`.
fn split_spacing_component(before: &[&str]) -> (Option<String>, String) {
    if before.len() > 1 {
        for width in (1..=(before.len() - 1).min(3)).rev() {
            let candidate = join(&before[..width]);
            if components::is_spacing_component(&candidate) {
                return (Some(candidate), join(&before[width..]));
            }
        }
    }
    (None, join(before))
}

fn ends_with_segment(name: &str, suffix: &str) -> bool {
    name.strip_suffix(suffix)
        .is_some_and(|head| head.ends_with('-'))
}

fn is_line_height(name: &str) -> bool {
    let unscripted = name
        .strip_prefix(typography::CJK)
        .and_then(|rest| rest.strip_prefix('-'))
        .unwrap_or(name);
    unscripted
        .strip_prefix(typography::LINE_HEIGHT)
        .and_then(|rest| rest.strip_prefix('-'))
        .is_some_and(is_index)
}

// ============================================================================
// Rules
// ============================================================================

/// `{from}-to-{to}-{index}`, `{component}-{from}-to-{to}-{option...}` and `{from}-to-{to}`.
pub(super) fn spacing(name: &str, parts: &[&str]) -> Option<NameStructure> {
    if !name.contains(&format!("-{RELATIONSHIP_CONNECTOR}-")) {
        return None;
    }
    let to_index = parts.iter().position(|p| *p == RELATIONSHIP_CONNECTOR)?;
    if to_index == 0 {
        return None;
    }

    let before = &parts[..to_index];
    let after = &parts[to_index + 1..];
    let structure = NameStructure::new(CategoryId::Spacing).with_property(properties::SPACING);

    let (found, to_parts) = split_trailing_options(after);
    if !found.is_empty() {
        let (component, from) = split_spacing_component(before);
        let structure = match component {
            Some(component) => structure.with_component(component),
            None => structure,
        };
        return Some(
            structure
                .with_space_between(filled(from)?, filled(join(to_parts))?)
                .with_options(found),
        );
    }

    if let Some((last, to)) = after.split_last() {
        if is_index(last) {
            return Some(
                structure
                    .with_space_between(filled(join(before))?, filled(join(to))?)
                    .with_index(*last),
            );
        }
    }

    // Scale-set spacing: no index, no options.
    Some(structure.with_space_between(filled(join(before))?, filled(join(after))?))
}

/// `gradient-stop-{index}-{variant}`.
pub(super) fn gradient_stop(_name: &str, parts: &[&str]) -> Option<NameStructure> {
    let [first, second, index, variant] = parts else {
        return None;
    };
    if format!("{first}-{second}") != properties::GRADIENT_STOP || !is_index(index) || variant.is_empty() {
        return None;
    }
    Some(
        NameStructure::new(CategoryId::GradientColor)
            .with_property(properties::GRADIENT_STOP)
            .with_index(*index)
            .with_variant(*variant),
    )
}

/// `component-size-{calculation...}-{state}`.
pub(super) fn component_size_state(_name: &str, parts: &[&str]) -> Option<NameStructure> {
    if parts.len() < 4 || parts[0] != components::GENERIC_COMPONENT || parts[1] != properties::SIZE {
        return None;
    }
    let (state, calculation) = parts[2..].split_last()?;
    if !special::is_state(state) {
        return None;
    }
    Some(
        NameStructure::new(CategoryId::ComponentProperty)
            .with_component(components::GENERIC_COMPONENT)
            .with_property(properties::SIZE)
            .with_calculation(filled(join(calculation))?)
            .with_state(*state),
    )
}

/// Exact standalone names (`android-elevation`).
pub(super) fn special_standalone(name: &str, _parts: &[&str]) -> Option<NameStructure> {
    special::is_special_standalone(name).then(|| {
        NameStructure::new(CategoryId::Special)
            .with_property(name)
            .with_notes("Platform-specific or standalone token")
    })
}

/// `{anatomy}-{property}-{option}` for the fixed optioned pairs, and exact `{anatomy}-{property}` pairs.
pub(super) fn anatomy_property(name: &str, _parts: &[&str]) -> Option<NameStructure> {
    for pair in special::OPTIONED_ANATOMY_PROPERTIES {
        let Some(option) = name
            .strip_prefix(pair.spelling().as_str())
            .and_then(|rest| rest.strip_prefix('-'))
        else {
            continue;
        };
        if options::is_component_option(option) {
            return Some(
                NameStructure::new(CategoryId::GenericProperty)
                    .with_anatomy_part(pair.anatomy)
                    .with_property(pair.property)
                    .with_options(vec![option.to_string()]),
            );
        }
    }

    special::anatomy_property_pair(name).map(|pair| {
        NameStructure::new(CategoryId::GenericProperty)
            .with_anatomy_part(pair.anatomy)
            .with_property(pair.property)
    })
}

/// Font values, standalone typography names, component typography suffixes and line heights.
pub(super) fn typography_base(name: &str, _parts: &[&str]) -> Option<NameStructure> {
    let base = NameStructure::new(CategoryId::TypographyBase).with_property(name);

    if let Some(suffix) = typography::FONT_SUFFIXES
        .iter()
        .find(|suffix| ends_with_segment(name, suffix))
    {
        return Some(base.with_notes(format!("Base typography property: {suffix}")));
    }

    if typography::is_standalone_property(name) {
        return Some(base.with_notes("Base typography property"));
    }

    let component_suffix = typography::COMPONENT_SUFFIXES
        .iter()
        .any(|suffix| ends_with_segment(name, suffix));
    if component_suffix || is_line_height(name) {
        return Some(base.with_notes("Component-specific typography property"));
    }

    None
}

/// `{base-color}`, `{color}-{index}` and `{modifier}-{color}-{index}`.
pub(super) fn color(_name: &str, parts: &[&str]) -> Option<NameStructure> {
    match parts {
        [color] if colors::is_base_color(color) => Some(NameStructure::new(CategoryId::ColorBase).with_color(*color)),
        [color, index] if is_index(index) && colors::is_palette_color(color) => Some(
            NameStructure::new(CategoryId::ColorScale)
                .with_color(*color)
                .with_index(*index),
        ),
        [modifier, color, index]
            if is_index(index) && colors::is_color_modifier(modifier) && colors::is_modifiable_color(color) =>
        {
            Some(
                NameStructure::new(CategoryId::ColorScale)
                    .with_modifier(*modifier)
                    .with_color(*color)
                    .with_index(*index),
            )
        }
        _ => None,
    }
}

/// `{property}-{index}`, `{two-part-property}-{index}` and `{three-part-property}-{index}`.
pub(super) fn generic_indexed_property(_name: &str, parts: &[&str]) -> Option<NameStructure> {
    let (index, head) = parts.split_last()?;
    if !is_index(index) {
        return None;
    }

    let property = match head {
        [property] if !property.is_empty() => property.to_string(),
        [_, _] if properties::is_two_part_generic_property(&join(head)) => join(head),
        [_, _, _] if properties::is_three_part_generic_property(&join(head)) => join(head),
        _ => return None,
    };

    Some(
        NameStructure::new(CategoryId::GenericProperty)
            .with_property(property)
            .with_index(*index),
    )
}

/// `component-padding-{axis}-{index}`, `{component...}-{keyword...}-{index}` and `{component}-{property}-{index}`.
pub(super) fn component_indexed_property(_name: &str, parts: &[&str]) -> Option<NameStructure> {
    if parts.len() < 3 {
        return None;
    }
    let (index, head) = parts.split_last()?;
    if !is_index(index) {
        return None;
    }
    let indexed = |component: String, property: String| {
        NameStructure::new(CategoryId::ComponentProperty)
            .with_component(component)
            .with_property(property)
            .with_index(*index)
    };

    if let [component, padding, _axis] = head {
        if *component == components::GENERIC_COMPONENT && *padding == properties::PADDING {
            return Some(indexed(component.to_string(), join(&head[1..])));
        }
    }

    // The first property keyword after the first part ends the component.
    if let Some(split) = (1..head.len()).find(|&i| properties::is_indexed_property_keyword(head[i])) {
        return Some(indexed(filled(join(&head[..split]))?, join(&head[split..])));
    }

    match head {
        [component, property] if !component.is_empty() && !property.is_empty() => {
            Some(indexed(component.to_string(), property.to_string()))
        }
        _ => None,
    }
}

/// Scale-set names without index or options: `{compound-component}-{anatomy}-{property}` and
/// `{component}-{property}`.
pub(super) fn component_scale_set_property(_name: &str, parts: &[&str]) -> Option<NameStructure> {
    match parts {
        [first, second, anatomy, property]
            if components::is_compound_component(&format!("{first}-{second}"))
                && properties::is_scale_set_anatomy_part(anatomy)
                && properties::is_scale_set_property(property) =>
        {
            Some(
                NameStructure::new(CategoryId::ComponentProperty)
                    .with_component(format!("{first}-{second}"))
                    .with_anatomy_part(*anatomy)
                    .with_property(*property),
            )
        }
        [component, property]
            if components::is_scale_set_component(component) && properties::is_scale_set_property(property) =>
        {
            Some(
                NameStructure::new(CategoryId::ComponentProperty)
                    .with_component(*component)
                    .with_property(*property),
            )
        }
        _ => None,
    }
}

/// `{component}-{anatomy...}-{property}-{option...}` and `{component}-{property}-{option...}`.
pub(super) fn component_optioned_property(_name: &str, parts: &[&str]) -> Option<NameStructure> {
    if parts.len() < 3 || parts.last().is_some_and(|last| is_index(last)) {
        return None;
    }
    let (found, rest) = split_trailing_options(parts);
    if found.is_empty() {
        return None;
    }

    match rest {
        [component, anatomy @ .., property]
            if !component.is_empty() && !join(anatomy).is_empty() && properties::is_option_property_keyword(property) =>
        {
            Some(
                NameStructure::new(CategoryId::ComponentProperty)
                    .with_component(*component)
                    .with_anatomy_part(join(anatomy))
                    .with_property(*property)
                    .with_options(found),
            )
        }
        [component, property] if !component.is_empty() && properties::is_option_property_keyword(property) => Some(
            NameStructure::new(CategoryId::ComponentProperty)
                .with_component(*component)
                .with_property(*property)
                .with_options(found),
        ),
        _ => None,
    }
}

/// Any multi-part name without a numeric suffix.
pub(super) fn special_catch_all(name: &str, parts: &[&str]) -> Option<NameStructure> {
    if parts.len() < 2 || parts.last().is_some_and(|last| is_index(last)) {
        return None;
    }
    Some(
        NameStructure::new(CategoryId::Special)
            .with_property(name)
            .with_notes("No index suffix detected"),
    )
}

/// Fallback for names no rule recognizes.
pub(super) fn unknown(name: &str, parts: &[&str]) -> NameStructure {
    NameStructure::new(CategoryId::Unknown)
        .with_raw(name, parts)
        .with_notes("Pattern not recognized")
}
