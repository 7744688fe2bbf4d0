//! Name-structure category registry.
//!
//! Every classified token name lands in exactly one category. The category decides which fields a name structure
//! carries and how a canonical name is regenerated from it.
//!
//! ## Notes
//! - Spellings are kebab-case and match the JSON produced for structured tokens.
//! - [`Formatting::Stored`] categories are not regenerated from parts; their canonical name is a stored field.

/// Stable identifier for every name-structure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum CategoryId {
    Spacing,
    GradientColor,
    ComponentProperty,
    GenericProperty,
    TypographyBase,
    ColorBase,
    ColorScale,
    SemanticAlias,
    Special,
    Unknown,
}

/// How a category turns a structure back into a name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Formatting {
    /// Name is assembled from the structure's parts.
    Template,
    /// Name is a field stored on the structure (`property` or `raw`).
    Stored,
}

/// Metadata for a category.
#[derive(Debug, Clone, Copy)]
pub struct CategoryInfo {
    pub id: CategoryId,
    pub canonical: &'static str,
    pub formatting: Formatting,
    pub description: &'static str,
}

/// Registry of all categories.
pub const CATEGORIES: &[CategoryInfo] = &[
    info(
        CategoryId::Spacing,
        "spacing",
        Formatting::Template,
        "Space between two anatomy parts (`{from}-to-{to}`).",
    ),
    info(
        CategoryId::GradientColor,
        "gradient-color",
        Formatting::Template,
        "Gradient stop (`gradient-stop-{index}-{variant}`).",
    ),
    info(
        CategoryId::ComponentProperty,
        "component-property",
        Formatting::Template,
        "Property scoped to a component.",
    ),
    info(
        CategoryId::GenericProperty,
        "generic-property",
        Formatting::Template,
        "Global property, optionally scoped to an anatomy part.",
    ),
    info(
        CategoryId::TypographyBase,
        "typography-base",
        Formatting::Template,
        "Base typography value (font weight, family, line height, ...).",
    ),
    info(
        CategoryId::ColorBase,
        "color-base",
        Formatting::Template,
        "Absolute base color (`white`, `black`).",
    ),
    info(
        CategoryId::ColorScale,
        "color-scale",
        Formatting::Template,
        "Palette color step, optionally modified (`static-blue-900`).",
    ),
    info(
        CategoryId::SemanticAlias,
        "semantic-alias",
        Formatting::Stored,
        "Contextual name for another token.",
    ),
    info(
        CategoryId::Special,
        "special",
        Formatting::Stored,
        "Standalone or platform-specific name without a recognized structure.",
    ),
    info(
        CategoryId::Unknown,
        "unknown",
        Formatting::Stored,
        "Name that matched no rule.",
    ),
];

/// Resolve a spelling to a [`CategoryId`].
pub fn from_str(name: &str) -> Option<CategoryId> {
    CATEGORIES.iter().find(|c| c.canonical == name).map(|c| c.id)
}

/// Return the canonical spelling for a category.
pub fn as_str(id: CategoryId) -> &'static str {
    info_for(id).canonical
}

/// Return the full metadata entry for a category.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: CategoryId) -> &'static CategoryInfo {
    CATEGORIES
        .iter()
        .find(|c| c.id == id)
        .expect("category info missing")
}

impl CategoryId {
    pub fn as_str(self) -> &'static str {
        as_str(self)
    }

    pub fn formatting(self) -> Formatting {
        info_for(self).formatting
    }
}

impl std::fmt::Display for CategoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

const fn info(
    id: CategoryId,
    canonical: &'static str,
    formatting: Formatting,
    description: &'static str,
) -> CategoryInfo {
    CategoryInfo {
        id,
        canonical,
        formatting,
        description,
    }
}
