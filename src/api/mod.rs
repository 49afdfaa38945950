mod spoonacular;

pub use spoonacular::SpoonacularClient;

use async_trait::async_trait;

use crate::error::ScoutError;
use crate::model::{Recipe, RecipeId};

/// The external recipe catalog
#[async_trait]
pub trait RecipeSource: Send + Sync {
    /// Search for recipe summaries matching a query.
    ///
    /// `cuisine` and `diet` are omitted from the outgoing request when
    /// `None`; callers map the "all" selector value to `None` before
    /// reaching this seam.
    async fn search(
        &self,
        query: &str,
        cuisine: Option<&str>,
        diet: Option<&str>,
    ) -> Result<Vec<Recipe>, ScoutError>;

    /// Fetch one recipe with its full detail fields populated.
    async fn get_details(&self, id: RecipeId) -> Result<Recipe, ScoutError>;
}
