//! In-memory recipe catalog

use crate::models::Recipe;

/// Recipes for one session, kept in insertion order
///
/// Names are not required to be unique.
#[derive(Debug, Default)]
pub struct Catalog {
    recipes: Vec<Recipe>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, recipe: Recipe) {
        tracing::debug!(recipe = %recipe.name(), position = self.recipes.len(), "recipe added");
        self.recipes.push(recipe);
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Recipes in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Recipe> {
        self.recipes.iter()
    }

    /// All recipe names in ascending order
    ///
    /// Sorts a copy, so storage order is untouched. Equal names keep
    /// their insertion order.
    pub fn list_sorted_by_name(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.recipes.iter().map(Recipe::name).collect();
        names.sort();
        names
    }

    /// First recipe whose name matches exactly (case-sensitive)
    pub fn find_by_name(&self, name: &str) -> Option<&Recipe> {
        let found = self.recipes.iter().find(|r| r.name() == name);
        match found {
            Some(_) => tracing::debug!(name, "recipe found"),
            None => tracing::debug!(name, "recipe not found"),
        }
        found
    }
}
