//! Token name classification.
//!
//! A name is split on `-` and offered to an ordered table of rules ([`RULES`]). Each rule either recognizes the
//! shape and returns a [`NameStructure`] or declines. The first rule that recognizes the name wins; a name no rule
//! recognizes becomes [`CategoryId::Unknown`].
//!
//! ## Notes
//! - Order is load-bearing. `corner-radius-75` must be claimed by the generic compound-property rule before the
//!   component-property rule gets a chance to read it as component `corner`.
//! - Rules are plain functions with no shared state, so each one can be exercised on its own.
//!
//! ## Examples
//! ```rust
//! use token_syntax::{classify, match_rule, CategoryId};
//!
//! assert_eq!(classify("corner-radius-75").category, CategoryId::GenericProperty);
//! let (rule, _) = match_rule("workflow-icon-size-50");
//! assert_eq!(rule.map(|r| r.name), Some("component-indexed-property"));
//! ```

mod matchers;
#[cfg(test)]
mod tests;

use crate::naming_rules::NamingRules;
use crate::structure::NameStructure;

/// A rule inspects the full name and its hyphen-separated parts.
pub type Matcher = fn(name: &str, parts: &[&str]) -> Option<NameStructure>;

/// A named classification rule.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub name: &'static str,
    pub matcher: Matcher,
}

/// Classification rules in precedence order.
pub const RULES: &[Rule] = &[
    rule("spacing", matchers::spacing),
    rule("gradient-stop", matchers::gradient_stop),
    rule("component-size-state", matchers::component_size_state),
    rule("special-standalone", matchers::special_standalone),
    rule("anatomy-property", matchers::anatomy_property),
    rule("typography-base", matchers::typography_base),
    rule("color", matchers::color),
    rule("generic-indexed-property", matchers::generic_indexed_property),
    rule("component-indexed-property", matchers::component_indexed_property),
    rule("component-scale-set-property", matchers::component_scale_set_property),
    rule("component-optioned-property", matchers::component_optioned_property),
    rule("special-catch-all", matchers::special_catch_all),
];

/// Classify a token name.
///
/// Never fails: names that match no rule are returned as [`CategoryId::Unknown`] with the raw name and its parts.
pub fn classify(name: &str) -> NameStructure {
    match_rule(name).1
}

/// Classify a token name in the presence of naming rules loaded from the naming workbook.
///
/// ## Notes
/// - The rules are accepted so callers can thread them through the pipeline, but no rule consults them yet: the
///   result is identical to [`classify`].
pub fn classify_with_rules(name: &str, _rules: &NamingRules) -> NameStructure {
    classify(name)
}

/// Classify a token name and report which rule claimed it (`None` for unknown names).
pub fn match_rule(name: &str) -> (Option<&'static Rule>, NameStructure) {
    let parts: Vec<&str> = name.split('-').collect();

    for rule in RULES {
        if let Some(structure) = (rule.matcher)(name, &parts) {
            tracing::trace!(token = name, rule = rule.name, category = %structure.category, "classified token name");
            return (Some(rule), structure);
        }
    }

    tracing::trace!(token = name, "no rule matched token name");
    (None, matchers::unknown(name, &parts))
}

const fn rule(name: &'static str, matcher: Matcher) -> Rule {
    Rule { name, matcher }
}
