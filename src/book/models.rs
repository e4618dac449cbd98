use crate::quantity::scale_amount;
use serde::{Deserialize, Serialize};

/// Category name reserved for the favorites filter
pub const FAVORITES_CATEGORY: &str = "Favorites";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Recipe {
    pub id: String,
    pub title: String,
    pub category: String,

    #[serde(default)]
    pub photo: Option<String>,

    pub typed: TypedRecipe,
}

/// Transcribed, non-photographic rendering of a recipe's text
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TypedRecipe {
    #[serde(default)]
    pub subtitle: Option<String>,

    pub ingredients: Vec<Ingredient>,

    #[serde(default)]
    pub notes: Vec<String>,

    pub steps: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Ingredient {
    pub item: String,

    pub amount: String,

    #[serde(default)]
    pub note: Option<String>,
}

/// One ingredient row after applying a multiplier
#[derive(Debug, Clone)]
pub struct ScaledIngredient {
    pub item: String,
    pub amount: String,
    /// False when the amount was kept as authored
    pub scaled: bool,
    pub note: Option<String>,
}

impl Ingredient {
    /// Apply a multiplier to this ingredient's amount.
    /// Re-derives from the authored amount on every call.
    pub fn scaled(&self, factor: f64) -> ScaledIngredient {
        let scaled = scale_amount(&self.amount, factor);
        ScaledIngredient {
            item: self.item.clone(),
            scaled: scaled.is_scaled(),
            amount: scaled.into_string(),
            note: self.note.clone(),
        }
    }
}

impl TypedRecipe {
    pub fn scaled_ingredients(&self, factor: f64) -> Vec<ScaledIngredient> {
        self.ingredients.iter().map(|i| i.scaled(factor)).collect()
    }
}

impl Recipe {
    pub fn title_display(&self) -> String {
        if self.title.is_empty() {
            self.id.clone()
        } else {
            self.title.clone()
        }
    }
}

#[derive(Debug, Clone)]
pub struct RecipeBook {
    pub recipes: Vec<Recipe>,
}

impl RecipeBook {
    pub fn get(&self, id: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == id)
    }

    /// Index of a recipe in book order, for the navigation cursor
    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.recipes.iter().position(|r| r.id == id)
    }

    /// Distinct authored categories, in first-seen order
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for recipe in &self.recipes {
            if !seen.contains(&recipe.category.as_str()) {
                seen.push(recipe.category.as_str());
            }
        }
        seen
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}
