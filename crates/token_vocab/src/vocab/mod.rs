//! Token naming vocabulary registries.
//!
//! Each submodule owns one family of spellings and exposes a const table plus `is_*` lookups. Callers should go
//! through these helpers instead of comparing against string literals, so that adding a component or a color is a
//! one-line change in one place.
//!
//! ## Notes
//! - Tables are ordered for readability only, except where a submodule documents otherwise.
//! - Registries are **pure**: no parsing, no IO.

pub mod categories;
pub mod colors;
pub mod components;
pub mod options;
pub mod properties;
pub mod special;
pub mod typography;

/// Part that separates the two sides of a spacing name (`text-to-visual`).
pub const RELATIONSHIP_CONNECTOR: &str = "to";

/// Return whether `part` is a non-empty run of ASCII digits.
///
/// Numeric indices (`50`, `100`, `1000`) are the only numeric spellings the grammar knows; signs, decimals and
/// non-ASCII digits are not indices.
///
/// ## Examples
/// ```rust
/// use token_vocab::vocab::is_index;
///
/// assert!(is_index("75"));
/// assert!(!is_index(""));
/// assert!(!is_index("7a"));
/// ```
pub fn is_index(part: &str) -> bool {
    !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit())
}
