//! Errors raised while regenerating names.

use thiserror::Error;
use token_vocab::CategoryId;

/// Why a structure could not be turned back into a name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegenerationCause {
    #[error("missing required field '{0}'")]
    MissingField(&'static str),
}

/// A structure whose category's formatting rule could not be applied.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Failed to regenerate token name for category '{category}': {cause}")]
pub struct RegenerationError {
    pub category: CategoryId,
    pub cause: RegenerationCause,
}

impl RegenerationError {
    pub fn missing_field(category: CategoryId, field: &'static str) -> Self {
        Self {
            category,
            cause: RegenerationCause::MissingField(field),
        }
    }
}
