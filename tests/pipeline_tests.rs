//! End-to-end tests for the structured-token pipeline

use std::fs;
use std::path::Path;

use clap::Parser;
use serde_json::{Value, json};
use structured_tokens::cli::{Cli, ExitCode, execute};
use structured_tokens::schema::SCHEMA_BASE_URL;
use structured_tokens::{
    JsonSchemaRegistry, Token, TokenMap, build_token, compare, parse_token_map, read_json, validate_all,
};
use token_syntax::{CategoryId, NamingRules, SpaceBetween};

fn write_json(path: &Path, value: &Value) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, serde_json::to_string_pretty(value).unwrap()).unwrap();
}

fn dimension(value: &str, uuid: &str) -> Value {
    json!({
        "$schema": "https://opensource.adobe.com/spectrum-tokens/schemas/token-types/dimension.json",
        "value": value,
        "uuid": uuid
    })
}

/// Spacing schema requiring an `id`, inherited from the base document.
fn write_spacing_schemas(dir: &Path) {
    write_json(
        &dir.join("base-token.json"),
        &json!({
            "$schema": "https://json-schema.org/draft/2020-12/schema",
            "$id": format!("{SCHEMA_BASE_URL}/base-token.json"),
            "type": "object",
            "required": ["id", "name", "validation"]
        }),
    );
    write_json(
        &dir.join("spacing-token.json"),
        &json!({
            "$schema": "https://json-schema.org/draft/2020-12/schema",
            "$id": format!("{SCHEMA_BASE_URL}/spacing-token.json"),
            "allOf": [{ "$ref": "base-token.json" }],
            "properties": {
                "name": {
                    "properties": {
                        "structure": {
                            "properties": {
                                "category": { "const": "spacing" },
                                "index": { "type": "string", "pattern": "^[0-9]+$" }
                            }
                        }
                    }
                }
            }
        }),
    );
}

// ========================================
// Precedence examples
// ========================================

#[test]
fn test_precedence_examples_through_builder() {
    let cases = [
        ("text-to-visual-50", CategoryId::Spacing, 2),
        ("workflow-icon-size-50", CategoryId::ComponentProperty, 2),
        ("spacing-100", CategoryId::GenericProperty, 1),
        ("corner-radius-75", CategoryId::GenericProperty, 1),
        ("android-elevation", CategoryId::Special, 1),
    ];
    for (name, category, complexity) in cases {
        let token = build_token(name, &Default::default(), &NamingRules::default());
        assert_eq!(token.name.structure.category, category, "{name}");
        assert_eq!(token.name.semantic_complexity, complexity, "{name}");
    }
}

// ========================================
// Comparator
// ========================================

#[test]
fn test_altered_structure_is_reported_as_mismatch() {
    let source: TokenMap = serde_json::from_value(json!({
        "text-to-visual-50": dimension("4px", "a"),
        "text-to-visual-75": dimension("6px", "b")
    }))
    .unwrap();
    let mut tokens = parse_token_map(&source, &NamingRules::default());
    tokens[1].name.structure.space_between = Some(SpaceBetween {
        from: "text".into(),
        to: "control".into(),
    });

    let report = compare(&tokens);
    assert_eq!(report.summary.matches, 1);
    assert_eq!(report.summary.mismatches, 1);
    assert_eq!(report.summary.match_rate, "50.00%");
    assert_eq!(report.mismatches[0].original_name, "text-to-visual-75");
    assert_eq!(report.mismatches[0].regenerated_name, "text-to-control-75");
}

// ========================================
// Schema validation
// ========================================

#[test]
fn test_validation_against_loaded_schemas() {
    let dir = tempfile::tempdir().unwrap();
    write_spacing_schemas(dir.path());
    let registry = JsonSchemaRegistry::load(dir.path());

    let source: TokenMap = serde_json::from_value(json!({
        "text-to-visual-50": dimension("4px", "a"),
        "text-to-control-75": { "value": "6px" },
        "spacing-100": dimension("8px", "c")
    }))
    .unwrap();
    let tokens = parse_token_map(&source, &NamingRules::default());
    let report = validate_all(&tokens, &registry);

    assert_eq!(report.total, 3);
    assert_eq!(report.valid, 1);
    assert_eq!(report.invalid, 2);
    assert_eq!(report.by_category.values().map(|c| c.total).sum::<usize>(), 3);

    let missing_id = &report.invalid_tokens[0];
    assert_eq!(missing_id.token_name, "text-to-control-75");
    assert!(missing_id.errors.iter().any(|err| err.contains("\"id\"")));

    let not_loaded = &report.invalid_tokens[1];
    assert_eq!(
        not_loaded.errors,
        [format!("Schema not loaded: {SCHEMA_BASE_URL}/generic-property-token.json")]
    );
}

// ========================================
// CLI
// ========================================

#[test]
fn test_cli_parse_and_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    write_spacing_schemas(&root.join("schemas"));
    write_json(
        &root.join("tokens/layout.json"),
        &json!({
            "text-to-visual-50": dimension("4px", "a"),
            "field-edge-to-text": {
                "$schema": "https://opensource.adobe.com/spectrum-tokens/schemas/token-types/scale-set.json",
                "sets": {
                    "desktop": dimension("8px", "d"),
                    "mobile": dimension("10px", "m")
                },
                "uuid": "b",
                "component": "field"
            }
        }),
    );
    fs::write(root.join("rules.csv"), "Token Name,Group,From-To\ntext-to-visual-50,Spacing,text-to-visual\n").unwrap();

    let flags = |command: &str| -> Vec<String> {
        let mut args = vec!["structured-tokens".to_string(), command.to_string()];
        for (flag, sub) in [
            ("--tokens-dir", "tokens"),
            ("--schemas-dir", "schemas"),
            ("--rules", "rules.csv"),
            ("--structured-dir", "structured"),
            ("--report-dir", "reports"),
        ] {
            args.push(flag.to_string());
            args.push(root.join(sub).to_string_lossy().into_owned());
        }
        args
    };

    let cli = Cli::try_parse_from(flags("parse")).unwrap();
    assert_eq!(execute(cli).unwrap(), ExitCode::SUCCESS);

    let structured: Vec<Token> = read_json(&root.join("structured/layout.json")).unwrap();
    assert_eq!(structured.len(), 2);
    assert_eq!(structured[1].name.structure.category, CategoryId::Spacing);
    assert!(structured[1].is_scale_set());

    let comparison: Value = read_json(&root.join("reports/layout-comparison-report.json")).unwrap();
    assert_eq!(comparison["summary"]["matchRate"], "100.00%");

    let validation: Value = read_json(&root.join("reports/layout-validation-report.json")).unwrap();
    assert_eq!(validation["total"], 2);
    assert_eq!(validation["valid"], 1);
    assert_eq!(
        validation["invalidTokens"][0]["errors"][0],
        format!("Schema not loaded: {SCHEMA_BASE_URL}/spacing-scale-set-token.json")
    );

    let cli = Cli::try_parse_from(flags("roundtrip")).unwrap();
    assert_eq!(execute(cli).unwrap(), ExitCode::SUCCESS);

    let original: TokenMap = read_json(&root.join("tokens/layout.json")).unwrap();
    let generated: TokenMap = read_json(&root.join("reports/generated-layout.json")).unwrap();
    assert_eq!(generated, original);

    let diff: Value = read_json(&root.join("reports/layout-diff.json")).unwrap();
    assert_eq!(diff, json!({ "added": [], "deleted": [], "updated": {} }));
}

#[test]
fn test_cli_missing_token_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let tokens_dir = dir.path().join("tokens");
    let report_dir = dir.path().join("reports");
    let cli = Cli::try_parse_from([
        "structured-tokens",
        "parse",
        "missing",
        "--tokens-dir",
        tokens_dir.to_str().unwrap(),
        "--report-dir",
        report_dir.to_str().unwrap(),
    ])
    .unwrap();

    let err = execute(cli).unwrap_err();
    assert_eq!(err.exit_code, ExitCode::FAILURE);
    assert!(err.message.contains("missing.json"));
    assert!(!report_dir.exists());
}
