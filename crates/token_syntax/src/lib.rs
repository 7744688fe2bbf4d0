//! Bidirectional design-token name grammar.
//!
//! A token name like `checkbox-control-size-small` encodes structure (component, property, options) in a flat,
//! hyphen-delimited string. This crate parses that string into a typed [`NameStructure`] and prints a structure back
//! into its canonical name. The two directions are inverses for every well-formed name, which is what the
//! comparison tooling checks.
//!
//! ## Notes
//! - Classification is total: every string yields a structure, worst case [`CategoryId::Unknown`].
//! - Regeneration is pure and fails only when a structure lacks a field its category needs.
//! - Vocabulary (components, colors, options, ...) comes from `token_vocab`.
//!
//! ## Examples
//! ```rust
//! use token_syntax::{classify, regenerate, semantic_complexity, CategoryId};
//!
//! let structure = classify("text-to-visual-50");
//! assert_eq!(structure.category, CategoryId::Spacing);
//! assert_eq!(semantic_complexity(&structure), 2);
//! assert_eq!(regenerate(&structure).unwrap(), "text-to-visual-50");
//! ```

pub mod classifier;
pub mod complexity;
pub mod errors;
pub mod naming_rules;
pub mod regenerator;
pub mod structure;

pub use classifier::{Rule, RULES, classify, classify_with_rules, match_rule};
pub use complexity::semantic_complexity;
pub use errors::{RegenerationCause, RegenerationError};
pub use naming_rules::NamingRules;
pub use regenerator::regenerate;
pub use structure::{NameStructure, SpaceBetween};
pub use token_vocab::CategoryId;
