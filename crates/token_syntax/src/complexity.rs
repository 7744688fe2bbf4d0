//! Semantic complexity: how many meaning dimensions a name encodes.

use token_vocab::CategoryId;

use crate::structure::NameStructure;

/// Count the non-empty meaning-carrying fields of a structure.
///
/// Counted fields: `component`, `spaceBetween`, `anatomyPart`, `property`, `referencedToken`, `options`, `state`,
/// `calculation`, `variant`, `platform`, `color`, `modifier`. Unknown names always score 0.
///
/// ## Examples
/// ```rust
/// use token_syntax::{classify, semantic_complexity};
///
/// assert_eq!(semantic_complexity(&classify("workflow-icon-size-50")), 2);
/// assert_eq!(semantic_complexity(&classify("100")), 0);
/// ```
pub fn semantic_complexity(structure: &NameStructure) -> u32 {
    if structure.category == CategoryId::Unknown {
        return 0;
    }

    let present = |field: &Option<String>| field.as_deref().is_some_and(|value| !value.is_empty());

    [
        present(&structure.component),
        structure.space_between.is_some(),
        present(&structure.anatomy_part),
        present(&structure.property),
        present(&structure.referenced_token),
        !structure.options.is_empty(),
        present(&structure.state),
        present(&structure.calculation),
        present(&structure.variant),
        present(&structure.platform),
        present(&structure.color),
        present(&structure.modifier),
    ]
    .into_iter()
    .filter(|counted| *counted)
    .count() as u32
}
