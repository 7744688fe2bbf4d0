//! Pipeline configuration
//!
//! Locations are relative to the working directory, laid out as in the design-data repository.

use std::path::{Path, PathBuf};

/// Where the pipeline reads its inputs and writes its outputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Directory holding the source token files (`<stem>.json`)
    pub tokens_dir: PathBuf,
    /// Directory holding the structured-token JSON schemas
    pub schemas_dir: PathBuf,
    /// CSV export of the token naming workbook
    pub rules_path: PathBuf,
    /// Directory receiving the structured token arrays
    pub structured_dir: PathBuf,
    /// Directory receiving reports, regenerated files and diffs
    pub report_dir: PathBuf,
    /// Token file to process, without extension
    pub file_stem: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            tokens_dir: PathBuf::from("packages/tokens/src"),
            schemas_dir: PathBuf::from("packages/structured-tokens/schemas"),
            rules_path: PathBuf::from("spectrum-token-name-parts.csv"),
            structured_dir: PathBuf::from("packages/structured-tokens/src"),
            report_dir: PathBuf::from("tools/token-name-parser/output"),
            file_stem: "layout".to_string(),
        }
    }
}

impl PipelineConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tokens_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.tokens_dir = dir.into();
        self
    }

    pub fn with_schemas_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.schemas_dir = dir.into();
        self
    }

    pub fn with_rules_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.rules_path = path.into();
        self
    }

    pub fn with_structured_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.structured_dir = dir.into();
        self
    }

    pub fn with_report_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.report_dir = dir.into();
        self
    }

    /// Set the token file to process (`layout`, `color-component`, ...)
    pub fn with_file_stem(mut self, stem: impl Into<String>) -> Self {
        self.file_stem = stem.into();
        self
    }

    /// `<tokens_dir>/<stem>.json`
    pub fn source_path(&self) -> PathBuf {
        self.tokens_dir.join(format!("{}.json", self.file_stem))
    }

    /// `<structured_dir>/<stem>.json`
    pub fn structured_path(&self) -> PathBuf {
        self.structured_dir.join(format!("{}.json", self.file_stem))
    }

    pub fn comparison_report_path(&self) -> PathBuf {
        self.report_path("comparison-report")
    }

    pub fn validation_report_path(&self) -> PathBuf {
        self.report_path("validation-report")
    }

    /// `<report_dir>/generated-<stem>.json`
    pub fn generated_path(&self) -> PathBuf {
        self.report_dir.join(format!("generated-{}.json", self.file_stem))
    }

    pub fn diff_path(&self) -> PathBuf {
        self.report_path("diff")
    }

    pub fn schemas_dir(&self) -> &Path {
        &self.schemas_dir
    }

    fn report_path(&self, suffix: &str) -> PathBuf {
        self.report_dir.join(format!("{}-{suffix}.json", self.file_stem))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================
    // Default config tests
    // ========================================

    #[test]
    fn test_default_paths() {
        let config = PipelineConfig::default();
        assert_eq!(config.source_path(), Path::new("packages/tokens/src/layout.json"));
        assert_eq!(config.structured_path(), Path::new("packages/structured-tokens/src/layout.json"));
        assert_eq!(config.rules_path, Path::new("spectrum-token-name-parts.csv"));
    }

    #[test]
    fn test_new_equals_default() {
        assert_eq!(PipelineConfig::new(), PipelineConfig::default());
    }

    // ========================================
    // Report paths
    // ========================================

    #[test]
    fn test_report_paths_follow_file_stem() {
        let config = PipelineConfig::new().with_report_dir("out").with_file_stem("color-component");
        assert_eq!(config.comparison_report_path(), Path::new("out/color-component-comparison-report.json"));
        assert_eq!(config.validation_report_path(), Path::new("out/color-component-validation-report.json"));
        assert_eq!(config.generated_path(), Path::new("out/generated-color-component.json"));
        assert_eq!(config.diff_path(), Path::new("out/color-component-diff.json"));
    }

    // ========================================
    // Builder chaining tests
    // ========================================

    #[test]
    fn test_builder_chain_all() {
        let config = PipelineConfig::new()
            .with_tokens_dir("tokens")
            .with_schemas_dir("schemas")
            .with_rules_path("rules.csv")
            .with_structured_dir("structured")
            .with_report_dir("reports")
            .with_file_stem("typography");

        assert_eq!(config.source_path(), Path::new("tokens/typography.json"));
        assert_eq!(config.schemas_dir(), Path::new("schemas"));
        assert_eq!(config.rules_path, Path::new("rules.csv"));
        assert_eq!(config.structured_path(), Path::new("structured/typography.json"));
    }

    #[test]
    fn test_builder_override() {
        let config = PipelineConfig::new().with_file_stem("a").with_file_stem("b");
        assert_eq!(config.file_stem, "b");
    }
}
