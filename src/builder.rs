//! Structured token construction.
//!
//! [`build_token`] classifies a token's name, upgrades alias-valued tokens to `semantic-alias`, scores the result
//! and copies the source metadata alongside it.

use token_syntax::{CategoryId, NameStructure, NamingRules, classify_with_rules, semantic_complexity};

use crate::token::{Token, TokenDef, TokenMap, TokenName, ValidationResult};

const SEMANTIC_ALIAS_NOTES: &str = "Semantic alias providing contextual naming";

/// Build the structured form of one source token.
///
/// ## Examples
/// ```rust
/// use serde_json::json;
/// use structured_tokens::{build_token, TokenDef};
/// use token_syntax::{CategoryId, NamingRules};
///
/// let def: TokenDef = serde_json::from_value(json!({
///     "$schema": "https://opensource.adobe.com/spectrum-tokens/schemas/token-types/alias.json",
///     "value": "{drop-shadow-x-100}",
///     "uuid": "7e2a8c4e-0000-0000-0000-000000000000"
/// }))
/// .unwrap();
/// let token = build_token("drop-shadow-x", &def, &NamingRules::default());
/// assert_eq!(token.name.structure.category, CategoryId::SemanticAlias);
/// assert_eq!(token.name.structure.referenced_token.as_deref(), Some("drop-shadow-x-100"));
/// assert_eq!(token.name.semantic_complexity, 2);
/// ```
pub fn build_token(name: &str, def: &TokenDef, rules: &NamingRules) -> Token {
    let classified = classify_with_rules(name, rules);
    let structure = upgrade_alias(name, def, classified);
    let complexity = semantic_complexity(&structure);
    let validation = validate_structure(&structure);

    Token {
        id: def.uuid.clone(),
        schema: def.schema.clone(),
        value: def.value.clone(),
        name: TokenName {
            original: name.to_string(),
            structure,
            semantic_complexity: complexity,
        },
        component: def.component.clone(),
        deprecated: def.deprecated,
        deprecated_comment: def.deprecated_comment.clone(),
        private: def.private,
        sets: def.sets.clone(),
        validation,
    }
}

/// Build every token of a source file, in file order.
#[tracing::instrument(skip_all, fields(tokens = map.len()))]
pub fn parse_token_map(map: &TokenMap, rules: &NamingRules) -> Vec<Token> {
    let tokens: Vec<Token> = map.iter().map(|(name, def)| build_token(name, def, rules)).collect();
    let unknown = tokens
        .iter()
        .filter(|token| token.name.structure.category == CategoryId::Unknown)
        .count();
    tracing::debug!(built = tokens.len(), unknown, "built structured tokens");
    tokens
}

/// Replace a `special` or `component-property` structure with `semantic-alias` when the token is an alias.
///
/// A token is an alias when its schema is an alias type and its value is a `{reference}`, or when it is a color set
/// whose sets are alias-typed. The reference is the value's, or for color sets the first set's when that is a
/// `{reference}`.
fn upgrade_alias(name: &str, def: &TokenDef, structure: NameStructure) -> NameStructure {
    if !matches!(structure.category, CategoryId::Special | CategoryId::ComponentProperty) {
        return structure;
    }

    let direct = def.brace_reference().filter(|_| def.schema_mentions("alias"));
    let color_set_alias = def.schema_mentions("color-set")
        && def
            .sets
            .as_ref()
            .is_some_and(|sets| sets.values().any(|set| set.schema_mentions("alias")));
    if direct.is_none() && !color_set_alias {
        return structure;
    }

    let referenced = def.brace_reference().or_else(|| {
        def.sets
            .as_ref()
            .and_then(|sets| sets.values().next())
            .and_then(TokenDef::brace_reference)
    });

    tracing::trace!(token = name, from = %structure.category, "upgraded to semantic alias");
    NameStructure::new(CategoryId::SemanticAlias)
        .with_property(name)
        .with_referenced_token(referenced.map(str::to_string))
        .with_notes(SEMANTIC_ALIAS_NOTES)
}

/// Structural completeness of a classified name; schema conformance is checked separately.
pub fn validate_structure(structure: &NameStructure) -> ValidationResult {
    let mut errors = Vec::new();

    if structure.category == CategoryId::Spacing {
        if let Some(between) = &structure.space_between {
            if between.from.is_empty() {
                errors.push("Missing 'from' in spaceBetween".to_string());
            }
            if between.to.is_empty() {
                errors.push("Missing 'to' in spaceBetween".to_string());
            }
        }
    }

    if structure.category == CategoryId::Unknown {
        errors.push("Unknown token pattern".to_string());
    }

    ValidationResult::from_errors(errors)
}
