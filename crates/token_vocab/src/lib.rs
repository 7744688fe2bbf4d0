//! Provide the fixed vocabulary of the design-token naming grammar.
//!
//! Token names such as `text-to-visual-50` or `workflow-icon-size-50` are built from a small, hand-curated vocabulary:
//! component names, palette colors, component options (`small`, `extra-large`, `quiet`, ...), property keywords and
//! a handful of standalone names. This crate is the single source of truth for those spellings so the classifier,
//! the regenerator and the tooling agree on them.
//!
//! ## Notes
//!
//! - This is a “vocabulary” crate: **no IO**, no global state, no grammar logic. Matching rules live in
//!   `token_syntax`; this crate only answers “is this spelling known?”.
//! - Lookups are **case-sensitive**. Token names are lower-case kebab-case by convention.
//! - Enable the `serde` feature to (de)serialize [`vocab::categories::CategoryId`] with its kebab-case spelling.
//!
//! ## Examples
//! ```rust
//! use token_vocab::vocab::{categories, colors};
//!
//! assert_eq!(categories::from_str("color-scale"), Some(categories::CategoryId::ColorScale));
//! assert!(colors::is_palette_color("celery"));
//! ```

pub mod vocab;

pub use vocab::categories::{CategoryId, CategoryInfo, Formatting};
