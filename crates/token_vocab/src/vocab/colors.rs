//! Color vocabulary: base colors, the palette and color modifiers.

/// Absolute colors that exist as single-part names (`white`, `black`).
pub const BASE_COLORS: &[&str] = &["white", "black"];

/// The palette of scaled colors (`{color}-{index}`).
pub const PALETTE_COLORS: &[&str] = &[
    "blue",
    "brown",
    "celery",
    "chartreuse",
    "cinnamon",
    "cyan",
    "fuchsia",
    "gray",
    "green",
    "indigo",
    "magenta",
    "orange",
    "pink",
    "purple",
    "red",
    "seafoam",
    "silver",
    "turquoise",
    "yellow",
];

/// Prefixes that modify a color scale (`transparent-white-100`, `static-blue-900`).
pub const COLOR_MODIFIERS: &[&str] = &["transparent", "static"];

pub fn is_base_color(part: &str) -> bool {
    BASE_COLORS.contains(&part)
}

pub fn is_palette_color(part: &str) -> bool {
    PALETTE_COLORS.contains(&part)
}

/// Colors accepted after a modifier: the palette plus the base colors.
pub fn is_modifiable_color(part: &str) -> bool {
    is_base_color(part) || is_palette_color(part)
}

pub fn is_color_modifier(part: &str) -> bool {
    COLOR_MODIFIERS.contains(&part)
}
