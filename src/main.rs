use clap::{Parser, Subcommand};
use nana_recipes::book;
use nana_recipes::quantity;
use nana_recipes::query;
use nana_recipes::state;

#[derive(Parser)]
#[command(name = "nana-recipes")]
#[command(about = "Recipe book browser and ingredient scaling tool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Export the recipe book as JSON
    Export {
        /// Recipe book path
        #[arg(default_value = "recipes.json")]
        path: String,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// List categories, or the recipes in one category
    List {
        /// Category name (e.g. "Pies", or "Favorites")
        category: Option<String>,

        /// Recipe book path
        #[arg(default_value = "recipes.json")]
        path: String,

        /// Store file for favorites and theme
        #[arg(long, default_value = "nana-store.json")]
        store: String,
    },

    /// Show a recipe in the typed layout
    Show {
        /// Recipe ID (e.g. "apple-pie")
        id: String,

        /// Ingredient multiplier
        #[arg(short, long, default_value_t = 1.0)]
        scale: f64,

        /// Recipe book path
        #[arg(default_value = "recipes.json")]
        path: String,

        /// Store file for favorites and theme
        #[arg(long, default_value = "nana-store.json")]
        store: String,

        /// Config file with the selectable multipliers
        #[arg(long, default_value = "config.toml")]
        config: String,
    },

    /// Query a specific path in the book
    Query {
        /// Query path (e.g. "apple-pie/typed/ingredients/0/amount")
        query: String,

        /// Recipe book path
        #[arg(default_value = "recipes.json")]
        path: String,
    },

    /// Scale a single amount string
    Scale {
        /// Amount as authored (e.g. "1 1/2 cups")
        amount: String,

        /// Multiplier
        factor: f64,
    },

    /// Toggle a favorite recipe
    Favorite {
        /// Recipe ID
        id: String,

        /// Recipe book path
        #[arg(default_value = "recipes.json")]
        path: String,

        /// Store file for favorites and theme
        #[arg(long, default_value = "nana-store.json")]
        store: String,
    },

    /// Toggle the light/dark theme
    Theme {
        /// Store file for favorites and theme
        #[arg(long, default_value = "nana-store.json")]
        store: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Export { path, output } => export_book(&path, output.as_deref()),
        Commands::List {
            category,
            path,
            store,
        } => list_recipes(&path, category.as_deref(), &store),
        Commands::Show {
            id,
            scale,
            path,
            store,
            config,
        } => show_recipe(&path, &id, scale, &store, &config),
        Commands::Query { query, path } => query_book(&path, &query),
        Commands::Scale { amount, factor } => scale_single_amount(&amount, factor),
        Commands::Favorite { id, path, store } => toggle_favorite(&path, &id, &store),
        Commands::Theme { store } => toggle_theme(&store),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn load_book(path: &str) -> Result<book::RecipeBook, Box<dyn std::error::Error>> {
    let (recipe_book, validation) = book::load_book_from_file(path)?;

    // Print validation issues if any
    if validation.has_issues() {
        eprintln!("{}", validation);
    }

    Ok(recipe_book)
}

fn open_session(store: &dyn state::KeyValueStore) -> state::Session {
    let mut session = state::Session::new();
    session.favorites = state::load_favorites(store);
    session.theme = state::load_theme(store);
    session
}

fn check_factor(factor: f64) -> Result<(), Box<dyn std::error::Error>> {
    if !factor.is_finite() || factor <= 0.0 {
        return Err(format!("Multiplier must be a positive number, got {}", factor).into());
    }
    Ok(())
}

fn export_book(path: &str, output: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let recipe_book = load_book(path)?;

    // The export is itself a loadable recipe book (a top-level array)
    let json = serde_json::to_string_pretty(&recipe_book.recipes)?;

    if let Some(output_path) = output {
        std::fs::write(output_path, json)?;
        println!("Recipe book exported to {}", output_path);
    } else {
        println!("{}", json);
    }

    Ok(())
}

fn list_recipes(
    path: &str,
    category: Option<&str>,
    store_path: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let recipe_book = load_book(path)?;
    let store = state::FileStore::open(store_path);
    let session = open_session(&store);

    let Some(category) = category else {
        println!("Categories ({}):", recipe_book.categories().len());
        for name in recipe_book.categories() {
            let count = session.recipes_for_category(&recipe_book, name).len();
            println!("  - {} ({} recipes)", name, count);
        }
        return Ok(());
    };

    let recipes = session.recipes_for_category(&recipe_book, category);

    println!("{}", category);
    if recipes.is_empty() {
        if category == book::FAVORITES_CATEGORY {
            println!("  No favorite recipes yet.");
        } else {
            println!("  No recipes in this category yet.");
        }
        return Ok(());
    }

    for recipe in recipes {
        let meta = if session.is_favorite(&recipe.id) {
            "★ Favorite".to_string()
        } else {
            recipe.category.clone()
        };
        println!("  - {} [{}] ({})", recipe.title_display(), recipe.id, meta);
    }

    Ok(())
}

fn show_recipe(
    path: &str,
    id: &str,
    scale: f64,
    store_path: &str,
    config_path: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    check_factor(scale)?;

    let recipe_book = load_book(path)?;
    let store = state::FileStore::open(store_path);
    let session = open_session(&store);

    let config = if std::path::Path::new(config_path).exists() {
        state::AppConfig::load_from_file(config_path)?
    } else {
        state::AppConfig::empty()
    };

    if !config.is_selectable(scale) {
        eprintln!(
            "Warning: {} is not one of the configured multipliers ({:?})",
            scale, config.scale_factors
        );
    }

    let recipe = recipe_book
        .get(id)
        .ok_or_else(|| format!("Recipe '{}' not found", id))?;

    let marker = if session.is_favorite(&recipe.id) {
        "★"
    } else {
        "☆"
    };
    println!("{} {} ({})", marker, recipe.title_display(), recipe.category);
    if let Some(subtitle) = &recipe.typed.subtitle {
        println!("  {}", subtitle);
    }

    println!();
    if scale == 1.0 {
        println!("Ingredients:");
    } else {
        println!("Ingredients (x{}):", quantity::format_magnitude(scale));
    }
    for ingredient in recipe.typed.scaled_ingredients(scale) {
        println!("  {:<24} {}", ingredient.item, ingredient.amount);
        if let Some(note) = &ingredient.note {
            println!("    ({})", note);
        }
    }

    if !recipe.typed.notes.is_empty() {
        println!();
        println!("Notes:");
        for note in &recipe.typed.notes {
            println!("  ({})", note);
        }
    }

    println!();
    println!("Steps:");
    for (idx, step) in recipe.typed.steps.iter().enumerate() {
        println!("  {}. {}", idx + 1, step);
    }

    Ok(())
}

fn query_book(path: &str, query_str: &str) -> Result<(), Box<dyn std::error::Error>> {
    let recipe_book = load_book(path)?;

    let query_path = query::parser::parse_query_path(query_str)
        .map_err(|e| format!("Failed to parse query: {}", e))?;

    let executor = query::executor::QueryExecutor::new(&recipe_book);
    let result = executor
        .execute(&query_path)
        .map_err(|e| format!("Query error: {}", e))?;

    let formatted = query::formatter::format_query_result(&result);
    println!("{}", formatted);

    Ok(())
}

fn scale_single_amount(amount: &str, factor: f64) -> Result<(), Box<dyn std::error::Error>> {
    check_factor(factor)?;

    if !quantity::looks_like_quantity(amount) {
        eprintln!(
            "Warning: '{}' does not look like a scalable amount; passing through",
            amount
        );
    }

    println!("{}", quantity::scale_and_format(amount, factor));
    Ok(())
}

fn toggle_favorite(
    path: &str,
    id: &str,
    store_path: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let recipe_book = load_book(path)?;

    let recipe = recipe_book
        .get(id)
        .ok_or_else(|| format!("Recipe '{}' not found", id))?;

    let mut store = state::FileStore::open(store_path);
    let mut session = open_session(&store);

    let favorited = session.toggle_favorite(&recipe.id);
    state::save_favorites(&mut store, &session.favorites)?;

    if favorited {
        println!("★ {} added to favorites", recipe.title_display());
    } else {
        println!("☆ {} removed from favorites", recipe.title_display());
    }

    Ok(())
}

fn toggle_theme(store_path: &str) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = state::FileStore::open(store_path);
    let mut session = open_session(&store);

    let theme = session.toggle_theme();
    state::save_theme(&mut store, theme)?;

    println!("Theme: {}", theme.as_str());
    Ok(())
}
