//! Schema validation of structured tokens.
//!
//! Each token is checked against the JSON Schema for its category. The schema is chosen by category and by whether
//! the token is a scale set (has `sets`). The validation engine sits behind [`SchemaRegistry`]; this module only
//! picks the schema and aggregates the outcomes.
//!
//! ## Notes
//! - `special` and `unknown` tokens have no schema and are always reported invalid.
//! - A schema id whose document failed to load is reported as "Schema not loaded", not as a crash.

mod registry;

pub use registry::{JsonSchemaRegistry, SchemaLoadError};

use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;
use token_syntax::{CategoryId, NameStructure};

use crate::token::{Token, ValidationResult};

/// Base URL shared by every structured-token schema id.
pub const SCHEMA_BASE_URL: &str = "https://opensource.adobe.com/spectrum-design-data/schemas/structured-tokens";

/// Schema files for scale-set tokens.
pub const SCALE_SET_SCHEMA_FILES: &[(CategoryId, &str)] = &[
    (CategoryId::Spacing, "spacing-scale-set-token.json"),
    (CategoryId::ComponentProperty, "component-property-scale-set-token.json"),
    (CategoryId::GenericProperty, "generic-property-scale-set-token.json"),
    (CategoryId::ColorScale, "color-scale-scale-set-token.json"),
    (CategoryId::SemanticAlias, "semantic-alias-color-set-token.json"),
];

/// Schema files for single-value tokens.
pub const REGULAR_SCHEMA_FILES: &[(CategoryId, &str)] = &[
    (CategoryId::Spacing, "spacing-token.json"),
    (CategoryId::ComponentProperty, "component-property-token.json"),
    (CategoryId::GenericProperty, "generic-property-token.json"),
    (CategoryId::SemanticAlias, "semantic-alias-token.json"),
    (CategoryId::ColorBase, "color-base-token.json"),
    (CategoryId::ColorScale, "color-scale-token.json"),
    (CategoryId::GradientColor, "gradient-color-token.json"),
    (CategoryId::TypographyBase, "typography-base-token.json"),
];

/// The schema file for a category, if it has one.
pub fn schema_file_for(category: CategoryId, is_scale_set: bool) -> Option<&'static str> {
    let table = if is_scale_set {
        SCALE_SET_SCHEMA_FILES
    } else {
        REGULAR_SCHEMA_FILES
    };
    table
        .iter()
        .find(|(candidate, _)| *candidate == category)
        .map(|(_, file)| *file)
}

/// The schema id for a category, if it has one.
///
/// ## Examples
/// ```rust
/// use structured_tokens::schema::schema_id_for;
/// use token_syntax::CategoryId;
///
/// assert_eq!(
///     schema_id_for(CategoryId::Spacing, true).as_deref(),
///     Some("https://opensource.adobe.com/spectrum-design-data/schemas/structured-tokens/spacing-scale-set-token.json")
/// );
/// assert_eq!(schema_id_for(CategoryId::Special, false), None);
/// ```
pub fn schema_id_for(category: CategoryId, is_scale_set: bool) -> Option<String> {
    schema_file_for(category, is_scale_set).map(|file| format!("{SCHEMA_BASE_URL}/{file}"))
}

// ============================================================================
// Registry seam
// ============================================================================

/// One failed schema assertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaViolation {
    /// JSON pointer into the validated token (`""` for the token itself).
    pub instance_path: String,
    pub message: String,
}

impl fmt::Display for SchemaViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.instance_path, self.message)
    }
}

/// A set of compiled schemas addressable by id.
pub trait SchemaRegistry {
    /// Validate `instance` against the schema registered under `schema_id`.
    ///
    /// Returns `None` when no schema is registered under that id, otherwise every violation found (empty when the
    /// instance conforms).
    fn validate_against_schema(&self, instance: &serde_json::Value, schema_id: &str) -> Option<Vec<SchemaViolation>>;
}

// ============================================================================
// Validation
// ============================================================================

/// Validate one structured token against its category schema.
pub fn validate_token(token: &Token, registry: &dyn SchemaRegistry) -> ValidationResult {
    let category = token.structure().category;
    let is_scale_set = token.is_scale_set();

    let Some(schema_id) = schema_id_for(category, is_scale_set) else {
        return ValidationResult::from_errors(vec![format!(
            "No schema found for category: {category} (scale-set: {is_scale_set})"
        )]);
    };

    let instance = match serde_json::to_value(token) {
        Ok(instance) => instance,
        Err(err) => return ValidationResult::from_errors(vec![format!("Token could not be serialized: {err}")]),
    };

    match registry.validate_against_schema(&instance, &schema_id) {
        None => ValidationResult::from_errors(vec![format!("Schema not loaded: {schema_id}")]),
        Some(violations) => ValidationResult::from_errors(violations.iter().map(ToString::to_string).collect()),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub total: usize,
    pub valid: usize,
    pub invalid: usize,
    pub by_category: IndexMap<CategoryId, CategoryValidation>,
    pub invalid_tokens: Vec<InvalidToken>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CategoryValidation {
    pub total: usize,
    pub valid: usize,
    pub invalid: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvalidToken {
    pub token_name: String,
    pub category: CategoryId,
    pub errors: Vec<String>,
    pub name_structure: NameStructure,
}

/// Validate every token and aggregate the outcomes overall and per category.
#[tracing::instrument(skip_all, fields(tokens = tokens.len()))]
pub fn validate_all(tokens: &[Token], registry: &dyn SchemaRegistry) -> ValidationReport {
    let mut report = ValidationReport {
        total: 0,
        valid: 0,
        invalid: 0,
        by_category: IndexMap::new(),
        invalid_tokens: Vec::new(),
    };

    for token in tokens {
        let category = token.structure().category;
        let result = validate_token(token, registry);
        let counts = report.by_category.entry(category).or_default();

        report.total += 1;
        counts.total += 1;
        if result.is_valid {
            report.valid += 1;
            counts.valid += 1;
        } else {
            report.invalid += 1;
            counts.invalid += 1;
            report.invalid_tokens.push(InvalidToken {
                token_name: token.original_name().to_string(),
                category,
                errors: result.errors,
                name_structure: token.structure().clone(),
            });
        }
    }

    tracing::debug!(valid = report.valid, invalid = report.invalid, "validated structured tokens");
    report
}
