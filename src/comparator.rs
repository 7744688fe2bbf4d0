//! Round-trip comparison of original and regenerated names.
//!
//! Every token's structure is fed back through the regenerator. A token whose regenerated name equals its original
//! name is a match, any other name is a mismatch, and a regeneration failure is recorded as an error. None of the
//! three outcomes stops the batch.

use indexmap::IndexMap;
use serde::Serialize;
use token_syntax::{CategoryId, NameStructure, RegenerationError, regenerate};

use crate::token::{Token, ValidationResult};

// ============================================================================
// Report model
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonReport {
    pub summary: ComparisonSummary,
    pub matches: Vec<MatchEntry>,
    pub mismatches: Vec<MismatchEntry>,
    pub errors: Vec<ErrorEntry>,
    pub statistics: ComparisonStatistics,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonSummary {
    pub total: usize,
    pub matches: usize,
    pub mismatches: usize,
    pub errors: usize,
    pub match_rate: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchEntry {
    pub name: String,
    pub category: CategoryId,
    pub validation: ValidationResult,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MismatchEntry {
    pub original_name: String,
    pub regenerated_name: String,
    pub category: CategoryId,
    pub name_structure: NameStructure,
    pub validation: ValidationResult,
    pub difference: Difference,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorEntry {
    pub original_name: String,
    pub error: String,
    pub name_structure: NameStructure,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonStatistics {
    pub by_category: IndexMap<CategoryId, CategoryStatistics>,
}

/// Per-category counts. Regeneration errors count towards `total` only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryStatistics {
    pub total: usize,
    pub matches: usize,
    pub mismatches: usize,
    pub match_rate: String,
}

/// How a regenerated name differs from the original.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Difference {
    ExactMatch,
    RegeneratedIsSubstring {
        note: String,
    },
    OriginalIsSubstring {
        note: String,
    },
    Different {
        #[serde(rename = "originalParts")]
        original_parts: Vec<String>,
        #[serde(rename = "regeneratedParts")]
        regenerated_parts: Vec<String>,
        /// Original part count minus regenerated part count.
        #[serde(rename = "partCountDiff")]
        part_count_diff: i64,
    },
}

impl Difference {
    /// Classify the difference between two names. Containment is checked before part-wise comparison.
    pub fn between(original: &str, regenerated: &str) -> Self {
        if original == regenerated {
            return Self::ExactMatch;
        }
        if original.contains(regenerated) {
            return Self::RegeneratedIsSubstring {
                note: format!("Regenerated '{regenerated}' is contained in original '{original}'"),
            };
        }
        if regenerated.contains(original) {
            return Self::OriginalIsSubstring {
                note: format!("Original '{original}' is contained in regenerated '{regenerated}'"),
            };
        }

        let original_parts: Vec<String> = original.split('-').map(str::to_string).collect();
        let regenerated_parts: Vec<String> = regenerated.split('-').map(str::to_string).collect();
        let part_count_diff = original_parts.len() as i64 - regenerated_parts.len() as i64;
        Self::Different {
            original_parts,
            regenerated_parts,
            part_count_diff,
        }
    }
}

// ============================================================================
// Comparison
// ============================================================================

/// Percentage with two decimals and a `%` suffix; `"0%"` for an empty batch.
///
/// Halves round away from zero.
pub fn format_match_rate(matches: usize, total: usize) -> String {
    if total == 0 {
        return "0%".to_string();
    }
    let percent = matches as f64 / total as f64 * 100.0;
    format!("{:.2}%", (percent * 100.0).round() / 100.0)
}

/// Regenerate every token's name and compare it with the original.
#[tracing::instrument(skip_all, fields(tokens = tokens.len()))]
pub fn compare(tokens: &[Token]) -> ComparisonReport {
    let mut matches = Vec::new();
    let mut mismatches = Vec::new();
    let mut errors = Vec::new();
    let mut by_category: IndexMap<CategoryId, CategoryStatistics> = IndexMap::new();

    for token in tokens {
        let original = token.original_name();
        let structure = token.structure();
        let stats = by_category.entry(structure.category).or_insert_with(|| CategoryStatistics {
            total: 0,
            matches: 0,
            mismatches: 0,
            match_rate: String::new(),
        });
        stats.total += 1;

        match regenerate(structure) {
            Ok(regenerated) if regenerated == original => {
                stats.matches += 1;
                matches.push(MatchEntry {
                    name: original.to_string(),
                    category: structure.category,
                    validation: token.validation.clone(),
                });
            }
            Ok(regenerated) => {
                stats.mismatches += 1;
                tracing::debug!(original, regenerated = %regenerated, "regenerated name differs");
                mismatches.push(MismatchEntry {
                    original_name: original.to_string(),
                    difference: Difference::between(original, &regenerated),
                    regenerated_name: regenerated,
                    category: structure.category,
                    name_structure: structure.clone(),
                    validation: token.validation.clone(),
                });
            }
            Err(err) => {
                tracing::debug!(original, error = %err, "regeneration failed");
                errors.push(ErrorEntry {
                    original_name: original.to_string(),
                    error: err.to_string(),
                    name_structure: structure.clone(),
                });
            }
        }
    }

    for stats in by_category.values_mut() {
        stats.match_rate = format_match_rate(stats.matches, stats.total);
    }

    let total = tokens.len();
    ComparisonReport {
        summary: ComparisonSummary {
            total,
            matches: matches.len(),
            mismatches: mismatches.len(),
            errors: errors.len(),
            match_rate: format_match_rate(matches.len(), total),
        },
        matches,
        mismatches,
        errors,
        statistics: ComparisonStatistics { by_category },
    }
}

/// Regenerate every token's name, keyed by original name.
pub fn regenerate_all(tokens: &[Token]) -> IndexMap<String, Result<String, RegenerationError>> {
    tokens
        .iter()
        .map(|token| (token.original_name().to_string(), regenerate(token.structure())))
        .collect()
}
