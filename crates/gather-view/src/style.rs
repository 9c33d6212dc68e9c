//! Display label and color mappings for event categories.
//!
//! Both mappings are total matches over the closed [`Category`]
//! enumeration. There is no default branch: an unmapped category is a
//! compile error, not a runtime case.

use gather_types::Category;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A theme color token resolved by the renderer's theme table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "bindings/")]
pub enum ColorToken {
    /// The theme's primary accent.
    Primary,
    /// The theme's secondary accent.
    Secondary,
    /// Positive/confirmation color.
    Success,
    /// Informational color.
    Info,
    /// Attention color.
    Warning,
}

impl ColorToken {
    /// The token's name in the renderer's theme table.
    pub const fn token_name(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Success => "success",
            Self::Info => "info",
            Self::Warning => "warning",
        }
    }
}

/// Display label for a category badge.
pub const fn category_label(category: Category) -> &'static str {
    match category {
        Category::Social => "Social",
        Category::Educational => "Educational",
        Category::Fitness => "Fitness",
        Category::Entertainment => "Entertainment",
        Category::Volunteer => "Volunteer",
    }
}

/// Theme color token for a category badge.
pub const fn category_color(category: Category) -> ColorToken {
    match category {
        Category::Social => ColorToken::Primary,
        Category::Educational => ColorToken::Info,
        Category::Fitness => ColorToken::Success,
        Category::Entertainment => ColorToken::Secondary,
        Category::Volunteer => ColorToken::Warning,
    }
}
