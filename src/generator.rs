//! Regeneration of source token files from structured tokens.
//!
//! [`generate_original_format`] is the inverse of [`crate::parse_token_map`]: it drops the name structure and
//! structural validation and keys each token by its original name again. [`diff_token_maps`] reports how the
//! result differs from the source file.

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

use crate::token::{Token, TokenDef, TokenMap};

/// Rebuild a source token file from structured tokens, in array order.
pub fn generate_original_format(tokens: &[Token]) -> TokenMap {
    tokens
        .iter()
        .map(|token| {
            let def = TokenDef {
                schema: token.schema.clone(),
                value: token.value.clone(),
                uuid: token.id.clone(),
                deprecated: token.deprecated,
                deprecated_comment: token.deprecated_comment.clone(),
                component: token.component.clone(),
                private: token.private,
                sets: token.sets.clone(),
                extra: Default::default(),
            };
            (token.original_name().to_string(), def)
        })
        .collect()
}

/// Key-level differences between two token files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TokenMapDiff {
    /// Tokens only in the generated file.
    pub added: Vec<String>,
    /// Tokens only in the original file.
    pub deleted: Vec<String>,
    /// Tokens in both files whose definitions differ, with the top-level keys that differ.
    pub updated: IndexMap<String, Vec<String>>,
}

impl TokenMapDiff {
    pub fn is_identical(&self) -> bool {
        self.added.is_empty() && self.deleted.is_empty() && self.updated.is_empty()
    }
}

/// Compare a source token file with a regenerated one.
///
/// ## Examples
/// ```rust
/// use structured_tokens::{diff_token_maps, TokenMap};
///
/// let original: TokenMap = serde_json::from_str(r#"{ "spacing-100": { "value": "8px" } }"#).unwrap();
/// let generated: TokenMap = serde_json::from_str(r#"{ "spacing-100": { "value": "10px" } }"#).unwrap();
///
/// let diff = diff_token_maps(&original, &generated);
/// assert_eq!(diff.updated["spacing-100"], ["value"]);
/// ```
pub fn diff_token_maps(original: &TokenMap, generated: &TokenMap) -> TokenMapDiff {
    let added = generated
        .keys()
        .filter(|name| !original.contains_key(name.as_str()))
        .cloned()
        .collect();
    let deleted = original
        .keys()
        .filter(|name| !generated.contains_key(name.as_str()))
        .cloned()
        .collect();
    let updated = original
        .iter()
        .filter_map(|(name, before)| {
            let after = generated.get(name)?;
            let fields = changed_fields(before, after);
            (!fields.is_empty()).then(|| (name.clone(), fields))
        })
        .collect();

    TokenMapDiff { added, deleted, updated }
}

/// Top-level keys whose values differ, in `before`-then-`after` key order.
fn changed_fields(before: &TokenDef, after: &TokenDef) -> Vec<String> {
    if before == after {
        return Vec::new();
    }
    let (Ok(Value::Object(before)), Ok(Value::Object(after))) =
        (serde_json::to_value(before), serde_json::to_value(after))
    else {
        return Vec::new();
    };

    let mut fields: Vec<String> = before
        .iter()
        .filter(|(key, value)| after.get(key.as_str()) != Some(*value))
        .map(|(key, _)| key.clone())
        .collect();
    fields.extend(after.keys().filter(|key| !before.contains_key(key.as_str())).cloned());
    fields
}
