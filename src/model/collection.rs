use super::recipe::{Recipe, RecipeId};

/// Ordered, id-unique sequence of recipes.
///
/// Insertion order is preserved across updates: saving a recipe whose id is
/// already present replaces it in place, anything else is appended.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeCollection {
    recipes: Vec<Recipe>,
}

impl RecipeCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the recipe with the same id, or append it.
    ///
    /// Returns `true` when the collection value changed.
    pub fn update_or_append(&mut self, recipe: Recipe) -> bool {
        match self.position(recipe.id()) {
            Some(index) if self.recipes[index] == recipe => false,
            Some(index) => {
                self.recipes[index] = recipe;
                true
            }
            None => {
                self.recipes.push(recipe);
                true
            }
        }
    }

    /// Remove the recipe with the given id, if present.
    pub fn remove(&mut self, id: RecipeId) -> Option<Recipe> {
        let index = self.position(id)?;
        Some(self.recipes.remove(index))
    }

    pub fn get(&self, id: RecipeId) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id() == id)
    }

    pub fn contains(&self, id: RecipeId) -> bool {
        self.position(id).is_some()
    }

    pub fn position(&self, id: RecipeId) -> Option<usize> {
        self.recipes.iter().position(|r| r.id() == id)
    }

    /// Recipe at a zero-based position.
    pub fn at(&self, index: usize) -> Option<&Recipe> {
        self.recipes.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Recipe> {
        self.recipes.iter()
    }

    pub fn ids(&self) -> Vec<RecipeId> {
        self.recipes.iter().map(Recipe::id).collect()
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    pub fn as_slice(&self) -> &[Recipe] {
        &self.recipes
    }
}

impl FromIterator<Recipe> for RecipeCollection {
    /// Duplicate ids collapse onto the first position, keeping the last value.
    fn from_iter<I: IntoIterator<Item = Recipe>>(iter: I) -> Self {
        let mut collection = Self::new();
        for recipe in iter {
            collection.update_or_append(recipe);
        }
        collection
    }
}

impl<'a> IntoIterator for &'a RecipeCollection {
    type Item = &'a Recipe;
    type IntoIter = std::slice::Iter<'a, Recipe>;

    fn into_iter(self) -> Self::IntoIter {
        self.recipes.iter()
    }
}
