#![forbid(unsafe_code)]
//! Structured design tokens
//!
//! Turns flat design-token files into structured tokens whose names are decomposed by the `token_syntax` grammar,
//! checks that every name regenerates from its structure, and validates each token against its category schema.
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! ## Pipeline
//!
//! 1. [`load_rules_or_default`] reads the naming-rules export
//! 2. [`parse_token_map`] builds one [`Token`] per source entry
//! 3. [`compare`] regenerates every name and reports mismatches
//! 4. [`validate_all`] checks tokens against a [`SchemaRegistry`]
//! 5. [`generate_original_format`] rebuilds the source file, [`diff_token_maps`] checks it

pub mod builder;
pub mod cli;
pub mod comparator;
pub mod config;
pub mod files;
pub mod generator;
pub mod rules;
pub mod schema;
pub mod token;

pub use builder::{build_token, parse_token_map, validate_structure};
pub use comparator::{ComparisonReport, Difference, compare, format_match_rate, regenerate_all};
pub use config::PipelineConfig;
pub use files::{FileError, read_json, write_json};
pub use generator::{TokenMapDiff, diff_token_maps, generate_original_format};
pub use rules::{RulesError, load_rules, load_rules_or_default, parse_rules};
pub use schema::{
    JsonSchemaRegistry, SchemaLoadError, SchemaRegistry, SchemaViolation, ValidationReport, validate_all,
    validate_token,
};
pub use token::{Token, TokenDef, TokenMap, TokenName, ValidationResult};
