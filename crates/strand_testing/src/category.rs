//! Test category vocabulary registry.
//!
//! Centralizes the recognized category spellings so the CLI and registration code don't need stringly-typed
//! comparisons.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Classification of a registered test callable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Unit,
    Integration,
}

/// Metadata entry for a category.
#[derive(Debug, Clone, Copy)]
pub struct CategoryInfo {
    pub id: Category,
    pub canonical: &'static str,
    pub aliases: &'static [&'static str],
    pub description: &'static str,
}

/// Registry of supported categories.
pub const CATEGORIES: &[CategoryInfo] = &[
    CategoryInfo {
        id: Category::Unit,
        canonical: "unit",
        aliases: &["u"],
        description: "Self-contained checks with no external collaborators.",
    },
    CategoryInfo {
        id: Category::Integration,
        canonical: "integration",
        aliases: &["int", "i"],
        description: "Checks that exercise an external collaborator (I/O, services).",
    },
];

/// Error returned when a category name is not in [`CATEGORIES`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown test category `{0}` (expected `unit` or `integration`)")]
pub struct UnknownCategory(pub String);

/// Resolve a category spelling (canonical or alias) to its id.
pub fn from_str(name: &str) -> Option<Category> {
    if let Some(info) = CATEGORIES.iter().find(|c| c.canonical == name) {
        return Some(info.id);
    }
    CATEGORIES
        .iter()
        .find(|c| c.aliases.contains(&name))
        .map(|c| c.id)
}

/// Return the canonical spelling for a category.
pub fn as_str(id: Category) -> &'static str {
    info_for(id).canonical
}

/// Return the metadata entry for a category.
pub fn info_for(id: Category) -> &'static CategoryInfo {
    match id {
        Category::Unit => &CATEGORIES[0],
        Category::Integration => &CATEGORIES[1],
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(as_str(*self))
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        from_str(s).ok_or_else(|| UnknownCategory(s.to_string()))
    }
}
