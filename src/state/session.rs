use crate::book::models::{Recipe, RecipeBook, FAVORITES_CATEGORY};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Stored value semantics: "dark" selects dark, anything else
    /// (including nothing stored) falls back to light
    pub fn from_stored(stored: Option<&str>) -> Self {
        if stored == Some("dark") {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::Light
    }
}

/// Explicit session state: the current category, the recipe cursor, the
/// view mode, the theme, and the favorites set
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Session {
    #[serde(default)]
    pub category: Option<String>,

    /// Cursor into book order
    #[serde(default)]
    pub recipe: usize,

    #[serde(default)]
    pub typed_view: bool,

    #[serde(default)]
    pub theme: Theme,

    #[serde(default)]
    pub favorites: BTreeSet<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the cursor, wrapping past the last recipe
    pub fn next_recipe(&mut self, book_len: usize) {
        if book_len == 0 {
            return;
        }
        self.recipe = (self.recipe + 1) % book_len;
    }

    /// Move the cursor back, wrapping before the first recipe
    pub fn prev_recipe(&mut self, book_len: usize) {
        if book_len == 0 {
            return;
        }
        self.recipe = (self.recipe + book_len - 1) % book_len;
    }

    pub fn toggle_typed_view(&mut self) {
        self.typed_view = !self.typed_view;
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.theme
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites.contains(id)
    }

    /// Toggle a favorite; returns true when the recipe is now favorited
    pub fn toggle_favorite(&mut self, id: &str) -> bool {
        if self.favorites.remove(id) {
            false
        } else {
            self.favorites.insert(id.to_string());
            true
        }
    }

    /// Recipes for a category tile; the reserved Favorites category
    /// selects favorited recipes instead of an authored category
    pub fn recipes_for_category<'a>(
        &self,
        book: &'a RecipeBook,
        category: &str,
    ) -> Vec<&'a Recipe> {
        if category == FAVORITES_CATEGORY {
            book.recipes
                .iter()
                .filter(|r| self.favorites.contains(&r.id))
                .collect()
        } else {
            book.recipes
                .iter()
                .filter(|r| r.category == category)
                .collect()
        }
    }
}
