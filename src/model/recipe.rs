use std::fmt;

use uuid::Uuid;

/// Opaque identity of a recipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecipeId(Uuid);

impl RecipeId {
    /// Generate a fresh random identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for RecipeId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named catalog entry.
///
/// Recipes are replaced wholesale on edit; there is no per-field mutation.
/// Equality compares every field, identity comparisons go through [`Recipe::id`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipe {
    id: RecipeId,
    name: String,
}

impl Recipe {
    pub fn new(id: RecipeId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Create a recipe with a freshly generated id.
    pub fn named(name: impl Into<String>) -> Self {
        Self::new(RecipeId::new(), name)
    }

    pub fn id(&self) -> RecipeId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Return a copy with the same identity and a different name.
    pub fn renamed(&self, name: impl Into<String>) -> Self {
        Self::new(self.id, name)
    }
}
