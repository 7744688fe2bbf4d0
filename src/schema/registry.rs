//! File-backed schema registry.
//!
//! Loads the enum, base and category schema documents from a schema directory and compiles one validator per
//! category document. Every loaded document is registered as a resource so that `$ref`s between documents resolve
//! without network access; a reference to any other document fails compilation instead of being fetched. A document
//! that cannot be read, parsed or compiled is logged and skipped.

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use jsonschema::{Draft, Retrieve, Uri, Validator};
use serde_json::Value;
use thiserror::Error;

use super::{REGULAR_SCHEMA_FILES, SCALE_SET_SCHEMA_FILES, SCHEMA_BASE_URL, SchemaRegistry, SchemaViolation};

/// Enum documents under `enums/`.
pub const ENUM_SCHEMA_FILES: &[&str] = &[
    "anatomy-parts.json",
    "components.json",
    "component-options.json",
    "properties.json",
    "modifiers.json",
    "sizes.json",
    "states.json",
    "platforms.json",
    "themes.json",
    "relationship-connectors.json",
    "colors.json",
    "color-modifiers.json",
    "color-indices.json",
];

/// Shared base documents.
pub const BASE_SCHEMA_FILES: &[&str] = &[
    "base-token.json",
    "regular-token.json",
    "scale-set-token.json",
    "color-set-token.json",
];

const ENUM_DIR: &str = "enums";

#[derive(Debug, Error)]
pub enum SchemaLoadError {
    #[error("Could not read schema {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Could not parse schema {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Could not compile schema {id}: {message}")]
    Compile { id: String, message: String },
}

/// A schema document and the id it is registered under.
#[derive(Debug, Clone)]
struct SchemaDocument {
    id: String,
    contents: Value,
}

impl SchemaDocument {
    /// The document's `$id`, or the base URL joined with its path relative to the schema directory.
    fn new(relative_path: &str, contents: Value) -> Self {
        let id = contents
            .get("$id")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| format!("{SCHEMA_BASE_URL}/{relative_path}"));
        Self { id, contents }
    }
}

/// Refuses every retrieval; only documents registered as resources resolve.
struct OfflineRetriever;

impl Retrieve for OfflineRetriever {
    fn retrieve(&self, uri: &Uri<String>) -> Result<Value, Box<dyn std::error::Error + Send + Sync>> {
        Err(format!("{} is not a loaded schema document", uri.as_str()).into())
    }
}

/// Compiled category schemas keyed by schema id.
#[derive(Default)]
pub struct JsonSchemaRegistry {
    validators: HashMap<String, Validator>,
    failures: Vec<SchemaLoadError>,
}

impl fmt::Debug for JsonSchemaRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JsonSchemaRegistry")
            .field("schemas", &self.validators.keys().collect::<Vec<_>>())
            .field("failures", &self.failures)
            .finish()
    }
}

impl JsonSchemaRegistry {
    /// Load every known schema document from `dir`.
    #[tracing::instrument(skip_all, fields(dir = %dir.display()))]
    pub fn load(dir: &Path) -> Self {
        let mut failures = Vec::new();
        let mut read = |path: PathBuf, relative_path: String| match read_document(&path, &relative_path) {
            Ok(document) => Some(document),
            Err(err) => {
                tracing::warn!("{err}");
                failures.push(err);
                None
            }
        };

        let shared: Vec<SchemaDocument> = ENUM_SCHEMA_FILES
            .iter()
            .map(|file| (dir.join(ENUM_DIR).join(file), format!("{ENUM_DIR}/{file}")))
            .chain(BASE_SCHEMA_FILES.iter().map(|file| (dir.join(file), file.to_string())))
            .filter_map(|(path, relative_path)| read(path, relative_path))
            .collect();
        let categories: Vec<SchemaDocument> = REGULAR_SCHEMA_FILES
            .iter()
            .chain(SCALE_SET_SCHEMA_FILES)
            .filter_map(|(_, file)| read(dir.join(file), file.to_string()))
            .collect();

        let mut registry = Self::compile(shared, categories);
        failures.append(&mut registry.failures);
        registry.failures = failures;
        tracing::info!(
            loaded = registry.validators.len(),
            skipped = registry.failures.len(),
            "loaded token schemas"
        );
        registry
    }

    /// Compile `categories` into validators, resolving references against every document given.
    fn compile(shared: Vec<SchemaDocument>, categories: Vec<SchemaDocument>) -> Self {
        let resources: Vec<&SchemaDocument> = shared.iter().chain(&categories).collect();
        let mut registry = Self::default();

        for document in &categories {
            let built = jsonschema::options()
                .with_draft(Draft::Draft202012)
                .should_validate_formats(true)
                .with_retriever(OfflineRetriever)
                .with_resources(resources.iter().map(|resource| {
                    let contents = resource.contents.clone();
                    (resource.id.clone(), Draft::Draft202012.create_resource(contents))
                }))
                .build(&document.contents);

            match built {
                Ok(validator) => {
                    registry.validators.insert(document.id.clone(), validator);
                }
                Err(err) => {
                    let err = SchemaLoadError::Compile {
                        id: document.id.clone(),
                        message: err.to_string(),
                    };
                    tracing::warn!("{err}");
                    registry.failures.push(err);
                }
            }
        }

        registry
    }

    /// Whether a validator is registered under `schema_id`.
    pub fn contains(&self, schema_id: &str) -> bool {
        self.validators.contains_key(schema_id)
    }

    pub fn len(&self) -> usize {
        self.validators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }

    /// Documents that were skipped while loading.
    pub fn failures(&self) -> &[SchemaLoadError] {
        &self.failures
    }
}

impl SchemaRegistry for JsonSchemaRegistry {
    fn validate_against_schema(&self, instance: &Value, schema_id: &str) -> Option<Vec<SchemaViolation>> {
        let validator = self.validators.get(schema_id)?;
        Some(
            validator
                .iter_errors(instance)
                .map(|err| SchemaViolation {
                    instance_path: err.instance_path.to_string(),
                    message: err.to_string(),
                })
                .collect(),
        )
    }
}

fn read_document(path: &Path, relative_path: &str) -> Result<SchemaDocument, SchemaLoadError> {
    let text = fs::read_to_string(path).map_err(|source| SchemaLoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let contents = serde_json::from_str(&text).map_err(|source| SchemaLoadError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(SchemaDocument::new(relative_path, contents))
}
