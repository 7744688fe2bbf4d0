//! Token file model.
//!
//! Two shapes are involved: [`TokenDef`], one entry of a source token file keyed by name, and [`Token`], the
//! structured entry written to the structured-token array. Both keep the source's snake_case metadata keys
//! (`deprecated_comment`) so that a structured array can be turned back into the source file without loss.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use token_syntax::NameStructure;

/// A source token file: token name to definition, in file order.
pub type TokenMap = IndexMap<String, TokenDef>;

/// One definition in a source token file.
///
/// `sets` entries use the same shape, recursively. Keys this model does not name are kept in `extra` so that reading
/// and re-writing a file does not drop them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TokenDef {
    #[serde(rename = "$schema", default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deprecated_comment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub private: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sets: Option<IndexMap<String, TokenDef>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TokenDef {
    /// Whether the `$schema` URI contains `needle` (`"alias"`, `"color-set"`).
    pub fn schema_mentions(&self, needle: &str) -> bool {
        self.schema.as_deref().is_some_and(|schema| schema.contains(needle))
    }

    /// The referenced token name when `value` is a `{token-name}` string.
    pub fn brace_reference(&self) -> Option<&str> {
        match &self.value {
            Some(Value::String(value)) => value.strip_prefix('{').and_then(|rest| rest.strip_suffix('}')),
            _ => None,
        }
    }
}

/// Name block of a structured token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenName {
    pub original: String,
    pub structure: NameStructure,
    pub semantic_complexity: u32,
}

/// Outcome of a validation pass: structural completeness on [`Token`], schema conformance in reports.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

impl ValidationResult {
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
        }
    }

    /// Valid exactly when `errors` is empty.
    pub fn from_errors(errors: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }
}

/// A structured token: source metadata plus the classified name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "$schema", default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    pub name: TokenName,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deprecated_comment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub private: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sets: Option<IndexMap<String, TokenDef>>,
    pub validation: ValidationResult,
}

impl Token {
    /// The name the token was built from.
    pub fn original_name(&self) -> &str {
        &self.name.original
    }

    pub fn structure(&self) -> &NameStructure {
        &self.name.structure
    }

    /// Scale-set and color-set tokens carry `sets` instead of a single value.
    pub fn is_scale_set(&self) -> bool {
        self.sets.is_some()
    }
}
