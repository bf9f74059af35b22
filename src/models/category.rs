//! Category model
//!
//! Categories are a closed, data-only set: seeded once into the catalog at
//! store initialization and never mutated. Color and icon are opaque tokens
//! that presentation surfaces resolve to actual styling.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::CategoryId;

/// A spending or income category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Stable identifier (slug)
    pub id: CategoryId,

    /// Human-readable name
    pub name: String,

    /// Presentation color token
    pub color: String,

    /// Presentation icon token
    pub icon: String,
}

impl Category {
    /// Create a category record
    pub fn new(
        id: impl Into<CategoryId>,
        name: impl Into<String>,
        color: impl Into<String>,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            color: color.into(),
            icon: icon.into(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
