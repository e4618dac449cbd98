use crate::book::models::{Recipe, RecipeBook, FAVORITES_CATEGORY};
use crate::book::validation::ValidationResult;
use crate::quantity::{looks_like_quantity, parse_quantity};
use std::fs;
use std::path::Path;

/// Load a recipe book from a JSON file (a top-level array of recipes).
///
/// A file that is not valid JSON is a hard error; content problems are
/// collected in the returned ValidationResult instead.
pub fn load_book_from_file<P: AsRef<Path>>(
    path: P,
) -> Result<(RecipeBook, ValidationResult), Box<dyn std::error::Error>> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(format!("Recipe file does not exist: {}", path.display()).into());
    }

    let content = fs::read_to_string(path)?;
    load_book_from_str(&content)
}

/// Load a recipe book from JSON content
pub fn load_book_from_str(
    content: &str,
) -> Result<(RecipeBook, ValidationResult), Box<dyn std::error::Error>> {
    let recipes: Vec<Recipe> = serde_json::from_str(content)?;

    let mut validation = ValidationResult::new();
    let book = build_book(recipes, &mut validation);

    Ok((book, validation))
}

fn build_book(recipes: Vec<Recipe>, validation: &mut ValidationResult) -> RecipeBook {
    let mut kept: Vec<Recipe> = Vec::with_capacity(recipes.len());

    for recipe in recipes {
        if recipe.id.trim().is_empty() {
            validation.add_error(
                format!("Recipe '{}' has a blank id", recipe.title),
                None,
            );
            continue;
        }

        // Lookups by id always resolve to the first occurrence, so a
        // duplicate is reachable from the list but not addressable
        if kept.iter().any(|r| r.id == recipe.id) {
            validation.add_warning(
                format!("Duplicate recipe id '{}'", recipe.id),
                Some(recipe.id.clone()),
            );
        }

        validate_recipe(&recipe, validation);
        kept.push(recipe);
    }

    RecipeBook { recipes: kept }
}

fn validate_recipe(recipe: &Recipe, validation: &mut ValidationResult) {
    if recipe.title.trim().is_empty() {
        validation.add_warning(
            "Recipe has a blank title".to_string(),
            Some(recipe.id.clone()),
        );
    }

    if recipe.category == FAVORITES_CATEGORY {
        validation.add_warning(
            format!("Category '{}' is reserved for the favorites filter", FAVORITES_CATEGORY),
            Some(recipe.id.clone()),
        );
    }

    for (idx, ingredient) in recipe.typed.ingredients.iter().enumerate() {
        // Amounts that open numerically but fail to parse will never
        // scale; flag them as likely typos ("1/0 cup", "1..5 cups")
        if looks_like_quantity(&ingredient.amount) {
            if let Err(e) = parse_quantity(&ingredient.amount) {
                validation.add_warning(
                    format!("Amount '{}' will not scale: {}", ingredient.amount, e),
                    Some(format!("{}/ingredients[{}]/amount", recipe.id, idx)),
                );
            }
        }
    }
}
