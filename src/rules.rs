//! Naming rules from the token naming workbook.
//!
//! The workbook is consumed as a CSV export of its first sheet. Each row names one token; the columns used are
//! `Token Name`, `Group`, `From-To`, `Size` and `Quiet`. Rows without a token name are ignored.

use std::collections::BTreeSet;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use token_syntax::NamingRules;

const TOKEN_NAME: &str = "Token Name";
const GROUP: &str = "Group";
const FROM_TO: &str = "From-To";
const SIZE: &str = "Size";
const QUIET: &str = "Quiet";

/// Leading parts recognized as components.
const KNOWN_COMPONENTS: &[&str] = &["component", "field", "button", "checkbox"];

/// Name fragment to the property it signals.
const PROPERTY_PATTERNS: &[(&str, &str)] = &[
    ("-size-", "size"),
    ("-color-", "color"),
    ("-radius", "corner-radius"),
    ("spacing", "spacing"),
];

#[derive(Debug, Error)]
pub enum RulesError {
    #[error("Could not read naming rules from {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

#[derive(Default)]
struct RulesCollector {
    anatomy_parts: BTreeSet<String>,
    index_values: BTreeSet<String>,
    size_options: BTreeSet<String>,
    modifiers: BTreeSet<String>,
    groups: BTreeSet<String>,
    components: BTreeSet<String>,
    properties: BTreeSet<String>,
}

impl RulesCollector {
    fn add_row(&mut self, token_name: &str, field: impl Fn(&str) -> Option<String>) {
        if let Some(group) = field(GROUP) {
            self.groups.insert(group);
        }

        if let Some(from_to) = field(FROM_TO) {
            let sides = from_to
                .rsplit_once("-to-")
                .filter(|(from, to)| !from.is_empty() && !to.is_empty());
            if let Some((from, to)) = sides {
                self.anatomy_parts.insert(from.to_string());
                self.anatomy_parts.insert(to.to_string());
            }
        }

        if let Some((_, index)) = token_name.rsplit_once('-') {
            if !index.is_empty() && index.bytes().all(|b| b.is_ascii_digit()) {
                self.index_values.insert(index.to_string());
            }
        }

        if let Some(size) = field(SIZE) {
            self.size_options.insert(size);
        }

        if field(QUIET).is_some() {
            self.modifiers.insert("quiet".to_string());
        }

        let parts: Vec<&str> = token_name.split('-').collect();
        if parts.len() >= 2 && KNOWN_COMPONENTS.contains(&parts[0]) {
            self.components.insert(parts[0].to_string());
        }
        if parts.len() >= 3 && parts[1] == "icon" {
            self.components.insert(format!("{}-icon", parts[0]));
        }

        for (pattern, property) in PROPERTY_PATTERNS {
            if token_name.contains(pattern) {
                self.properties.insert(property.to_string());
            }
        }
    }

    fn finish(self) -> NamingRules {
        let mut index_values: Vec<String> = self.index_values.into_iter().collect();
        index_values.sort_by_key(|value| value.parse::<u64>().unwrap_or(u64::MAX));

        NamingRules {
            anatomy_parts: self.anatomy_parts.into_iter().collect(),
            index_values,
            size_options: self.size_options.into_iter().collect(),
            modifiers: self.modifiers.into_iter().collect(),
            groups: self.groups.into_iter().collect(),
            components: self.components.into_iter().collect(),
            properties: self.properties.into_iter().collect(),
        }
    }
}

/// Extract naming rules from CSV data with a header row.
pub fn parse_rules<R: io::Read>(reader: R) -> Result<NamingRules, csv::Error> {
    let mut reader = csv::Reader::from_reader(reader);
    let headers = reader.headers()?.clone();
    let mut collector = RulesCollector::default();

    for record in reader.records() {
        let row = record?;
        let field = |column: &str| -> Option<String> {
            headers
                .iter()
                .position(|header| header == column)
                .and_then(|idx| row.get(idx))
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let Some(token_name) = field(TOKEN_NAME) else {
            continue;
        };
        collector.add_row(&token_name, field);
    }

    Ok(collector.finish())
}

/// Read naming rules from a CSV export of the workbook.
pub fn load_rules(path: &Path) -> Result<NamingRules, RulesError> {
    let read_err = |source| RulesError::Read {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(|err| read_err(csv::Error::from(err)))?;
    parse_rules(file).map_err(read_err)
}

/// Read naming rules, falling back to empty rules (with a warning) when the export is missing or unreadable.
pub fn load_rules_or_default(path: &Path) -> NamingRules {
    match load_rules(path) {
        Ok(rules) => {
            tracing::info!(
                anatomy_parts = rules.anatomy_parts.len(),
                index_values = rules.index_values.len(),
                size_options = rules.size_options.len(),
                "loaded naming rules"
            );
            rules
        }
        Err(err) => {
            tracing::warn!("{err}; continuing with basic parsing");
            NamingRules::default()
        }
    }
}
