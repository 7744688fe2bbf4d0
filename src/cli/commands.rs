//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use serde::Serialize;
use token_syntax::{NameStructure, classify, semantic_complexity};

use crate::builder::parse_token_map;
use crate::comparator::compare;
use crate::config::PipelineConfig;
use crate::files::{read_json, write_json};
use crate::generator::{diff_token_maps, generate_original_format};
use crate::rules::load_rules_or_default;
use crate::schema::{JsonSchemaRegistry, validate_all};
use crate::token::{Token, TokenMap};

use super::{CliError, CliResult, ExitCode};

// ============================================================================
// parse
// ============================================================================

/// Run the full pipeline for one token file and write its structured tokens and reports.
///
/// Mismatches and schema failures are reported, not treated as failures.
pub fn parse_tokens(config: &PipelineConfig) -> CliResult<ExitCode> {
    let rules = load_rules_or_default(&config.rules_path);

    let source_path = config.source_path();
    let source: TokenMap = read_json(&source_path)?;
    tracing::info!(path = %source_path.display(), tokens = source.len(), "read source tokens");

    let tokens = parse_token_map(&source, &rules);
    let comparison = compare(&tokens);
    let registry = JsonSchemaRegistry::load(config.schemas_dir());
    let validation = validate_all(&tokens, &registry);

    write_json(&config.structured_path(), &tokens)?;
    write_json(&config.comparison_report_path(), &comparison)?;
    write_json(&config.validation_report_path(), &validation)?;

    let summary = &comparison.summary;
    tracing::info!(
        total = summary.total,
        matches = summary.matches,
        mismatches = summary.mismatches,
        errors = summary.errors,
        match_rate = %summary.match_rate,
        "round-trip comparison"
    );
    tracing::info!(
        total = validation.total,
        valid = validation.valid,
        invalid = validation.invalid,
        "schema validation"
    );
    if summary.mismatches > 0 || summary.errors > 0 || validation.invalid > 0 {
        tracing::warn!(
            report = %config.comparison_report_path().display(),
            "Issues detected; see the comparison and validation reports"
        );
    }
    tracing::info!(path = %config.structured_path().display(), "wrote structured tokens");

    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// classify
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Classification<'a> {
    name: &'a str,
    structure: NameStructure,
    semantic_complexity: u32,
}

/// Print the structure of each name as JSON.
pub fn classify_names(names: &[String]) -> CliResult<ExitCode> {
    let classified: Vec<Classification<'_>> = names
        .iter()
        .map(|name| {
            let structure = classify(name);
            let semantic_complexity = semantic_complexity(&structure);
            Classification {
                name: name.as_str(),
                structure,
                semantic_complexity,
            }
        })
        .collect();

    let json = serde_json::to_string_pretty(&classified)
        .map_err(|e| CliError::failure(format!("Error serializing classification: {e}")))?;
    println!("{json}");
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// roundtrip
// ============================================================================

/// Regenerate a token file from its structured tokens, write it, and diff it against the source.
pub fn roundtrip(config: &PipelineConfig) -> CliResult<ExitCode> {
    let structured: Vec<Token> = read_json(&config.structured_path())?;
    let generated = generate_original_format(&structured);
    write_json(&config.generated_path(), &generated)?;
    tracing::info!(
        path = %config.generated_path().display(),
        tokens = generated.len(),
        "wrote regenerated token file"
    );

    let original: TokenMap = read_json(&config.source_path())?;
    let diff = diff_token_maps(&original, &generated);
    write_json(&config.diff_path(), &diff)?;

    tracing::info!(
        added = diff.added.len(),
        deleted = diff.deleted.len(),
        updated = diff.updated.len(),
        "token file diff"
    );
    if diff.is_identical() {
        tracing::info!("Perfect match: regenerated file is identical to the source");
    }

    Ok(ExitCode::SUCCESS)
}
