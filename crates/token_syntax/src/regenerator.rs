//! Regenerate canonical token names from name structures.
//!
//! Each [`Formatting::Template`] category has one formatting rule, the inverse of the classification rule that
//! produces it. [`Formatting::Stored`] categories return the name kept on the structure.

use token_vocab::{CategoryId, Formatting};
use token_vocab::vocab::RELATIONSHIP_CONNECTOR;

use crate::errors::RegenerationError;
use crate::structure::NameStructure;

/// Collects name segments; optional segments that are absent or empty are skipped.
struct NameWriter<'s> {
    category: CategoryId,
    segments: Vec<&'s str>,
}

impl<'s> NameWriter<'s> {
    fn new(category: CategoryId) -> Self {
        Self {
            category,
            segments: Vec::new(),
        }
    }

    fn required(&mut self, value: Option<&'s String>, field: &'static str) -> Result<&mut Self, RegenerationError> {
        let value = value.ok_or_else(|| RegenerationError::missing_field(self.category, field))?;
        self.segments.push(value);
        Ok(self)
    }

    fn optional(&mut self, value: Option<&'s String>) -> &mut Self {
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            self.segments.push(value);
        }
        self
    }

    fn literal(&mut self, value: &'s str) -> &mut Self {
        self.segments.push(value);
        self
    }

    fn options(&mut self, options: &'s [String]) -> &mut Self {
        self.segments.extend(options.iter().map(String::as_str));
        self
    }

    fn finish(&self) -> String {
        self.segments.join("-")
    }
}

/// Regenerate the canonical name for a structure.
///
/// ## Errors
/// Returns [`RegenerationError`] when the category's formatting rule needs a field the structure lacks.
///
/// ## Examples
/// ```rust
/// use token_syntax::{regenerate, CategoryId, NameStructure};
///
/// let structure = NameStructure::new(CategoryId::ComponentProperty)
///     .with_component("workflow-icon")
///     .with_property("size")
///     .with_index("50");
/// assert_eq!(regenerate(&structure).unwrap(), "workflow-icon-size-50");
/// ```
pub fn regenerate(structure: &NameStructure) -> Result<String, RegenerationError> {
    match structure.category.formatting() {
        Formatting::Stored => Ok(stored_name(structure)),
        Formatting::Template => templated_name(structure),
    }
}

/// The name kept on the structure: `property`, then `anatomyPart`, then `raw`.
fn stored_name(structure: &NameStructure) -> String {
    structure
        .property
        .as_ref()
        .or(structure.anatomy_part.as_ref())
        .or(structure.raw.as_ref())
        .cloned()
        .unwrap_or_default()
}

fn templated_name(structure: &NameStructure) -> Result<String, RegenerationError> {
    let category = structure.category;
    let mut name = NameWriter::new(category);

    match category {
        CategoryId::Spacing => {
            let between = structure
                .space_between
                .as_ref()
                .ok_or_else(|| RegenerationError::missing_field(category, "spaceBetween"))?;
            name.optional(structure.component.as_ref())
                .literal(&between.from)
                .literal(RELATIONSHIP_CONNECTOR)
                .literal(&between.to)
                .optional(structure.index.as_ref())
                .options(&structure.options);
        }
        CategoryId::GradientColor => {
            name.required(structure.property.as_ref(), "property")?
                .required(structure.index.as_ref(), "index")?
                .required(structure.variant.as_ref(), "variant")?;
        }
        CategoryId::ComponentProperty => {
            name.required(structure.component.as_ref(), "component")?
                .optional(structure.anatomy_part.as_ref())
                .required(structure.property.as_ref(), "property")?
                .optional(structure.calculation.as_ref())
                .optional(structure.state.as_ref())
                .optional(structure.index.as_ref())
                .options(&structure.options);
        }
        CategoryId::GenericProperty => {
            name.optional(structure.anatomy_part.as_ref())
                .required(structure.property.as_ref(), "property")?
                .optional(structure.index.as_ref())
                .options(&structure.options);
        }
        CategoryId::TypographyBase => {
            name.required(structure.property.as_ref(), "property")?;
        }
        CategoryId::ColorBase => {
            name.required(structure.color.as_ref(), "color")?;
        }
        CategoryId::ColorScale => {
            name.optional(structure.modifier.as_ref())
                .required(structure.color.as_ref(), "color")?
                .required(structure.index.as_ref(), "index")?;
        }
        // Stored
        CategoryId::SemanticAlias | CategoryId::Special | CategoryId::Unknown => return Ok(stored_name(structure)),
    }

    Ok(name.finish())
}
