pub mod api;
pub mod app;
pub mod config;
pub mod detail;
pub mod error;
pub mod favorites;
pub mod model;
pub mod search;

pub use api::{RecipeSource, SpoonacularClient};
pub use app::App;
pub use config::AppConfig;
pub use detail::DetailLoader;
pub use error::ScoutError;
pub use favorites::{Favorites, FavoritesStorage, JsonFileStorage, MemoryStorage};
pub use model::{FilterKey, Ingredient, Recipe, RecipeId, SearchFilters};
pub use search::SearchCoordinator;
