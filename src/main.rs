use std::env;
use std::process;

use recipe_scout::model::{CUISINE_TYPES, DIET_TYPES};
use recipe_scout::{
    App, AppConfig, FavoritesStorage, FilterKey, JsonFileStorage, Recipe, RecipeId, ScoutError,
    SpoonacularClient,
};

const USAGE: &str = "Usage: recipe-scout <command> [options]

Commands:
  search <query> [--cuisine <c>] [--diet <d>]   Search the recipe catalog
  details <id>                                  Show full detail for one recipe
  favorites                                     List saved favorites
  favorite <id>                                 Toggle a recipe in the favorites list";

#[tokio::main]
async fn main() -> Result<(), ScoutError> {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let Some(command) = args.first() else {
        usage_error("missing command");
    };

    let config = AppConfig::load()?;
    let source = SpoonacularClient::new(&config.api)?;
    let storage = JsonFileStorage::new(config.storage.resolve_data_dir());
    let mut app = App::new(Box::new(source), storage);

    match command.as_str() {
        "search" => run_search(&mut app, &args[1..]).await,
        "details" => run_details(&mut app, parse_id(args.get(1))).await,
        "favorites" => run_favorites(&app),
        "favorite" => run_toggle(&mut app, parse_id(args.get(1))).await,
        other => usage_error(&format!("unknown command '{other}'")),
    }

    Ok(())
}

async fn run_search<S: FavoritesStorage>(app: &mut App<S>, args: &[String]) {
    let mut query: Option<&str> = None;
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--cuisine" => {
                let Some(value) = iter.next() else {
                    usage_error("--cuisine requires a value");
                };
                app.filter_change(FilterKey::Cuisine, value);
            }
            "--diet" => {
                let Some(value) = iter.next() else {
                    usage_error("--diet requires a value");
                };
                app.filter_change(FilterKey::Diet, value);
            }
            _ if query.is_none() => query = Some(arg.as_str()),
            other => usage_error(&format!("unexpected argument '{other}'")),
        }
    }

    let Some(query) = query else {
        usage_error(&format!(
            "search requires a query\n\nKnown cuisines: {}\nKnown diets: {}",
            CUISINE_TYPES.join(", "),
            DIET_TYPES.join(", ")
        ));
    };
    app.filter_change(FilterKey::Query, query);
    app.search().await;

    if app.result_count() == 0 {
        println!("No recipes found");
        println!("Try adjusting your search or filters to find what you're looking for");
        return;
    }

    println!("{} recipes found\n", app.result_count());
    for recipe in app.results() {
        print_summary(recipe, app.favorites().contains(recipe.id));
    }
}

async fn run_details<S: FavoritesStorage>(app: &mut App<S>, id: RecipeId) {
    app.recipe_click(id).await;
    match app.selected() {
        Some(recipe) if app.is_detail_open() => print_detail(recipe),
        _ => eprintln!("No details available for recipe {id}"),
    }
}

fn run_favorites<S: FavoritesStorage>(app: &App<S>) {
    let favorites = app.favorites();
    println!("My Favorites ({})\n", favorites.records().len());
    for recipe in favorites.records() {
        print_summary(recipe, true);
    }
}

async fn run_toggle<S: FavoritesStorage>(app: &mut App<S>, id: RecipeId) {
    // Removal needs no record; an add resolves one through the detail view
    // first so the favorite is stored with everything needed to render it.
    if !app.favorites().contains(id) {
        app.recipe_click(id).await;
        if app.selected().map(|r| r.id) != Some(id) {
            eprintln!("Could not fetch recipe {id}; favorites are unchanged");
            return;
        }
    }

    if app.toggle_favorite(id) {
        println!("Added recipe {id} to favorites");
    } else {
        println!("Removed recipe {id} from favorites");
    }
}

fn print_summary(recipe: &Recipe, is_favorite: bool) {
    let marker = if is_favorite { "*" } else { " " };
    println!(
        "{marker} {:>8}  {}  ({} mins, {} servings, {} per serving)",
        recipe.id,
        recipe.title,
        recipe.ready_in_minutes,
        recipe.servings,
        recipe.price_display()
    );
}

fn print_detail(recipe: &Recipe) {
    println!("{}\n", recipe.title);
    println!(
        "{} mins | {} servings | {} per serving",
        recipe.ready_in_minutes,
        recipe.servings,
        recipe.price_display()
    );

    if !recipe.diets.is_empty() {
        println!("Dietary: {}", recipe.diets.join(", "));
    }
    if !recipe.cuisines.is_empty() {
        println!("Cuisine: {}", recipe.cuisines.join(", "));
    }

    println!("\nIngredients");
    if recipe.extended_ingredients.is_empty() {
        println!("  No ingredients information available");
    } else {
        for ingredient in &recipe.extended_ingredients {
            println!("  - {}", ingredient.original);
        }
    }

    println!("\nInstructions");
    match recipe.instructions_text() {
        Some(text) => println!("  {text}"),
        None => println!("  No instructions available"),
    }

    if let Some(credits) = &recipe.credits_text {
        println!("\nRecipe source: {credits}");
    }
}

fn parse_id(arg: Option<&String>) -> RecipeId {
    let Some(arg) = arg else {
        usage_error("missing recipe id");
    };
    match arg.parse() {
        Ok(id) => id,
        Err(_) => usage_error(&format!("'{arg}' is not a recipe id")),
    }
}

fn usage_error(message: &str) -> ! {
    eprintln!("error: {message}\n\n{USAGE}");
    process::exit(2);
}
