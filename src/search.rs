use log::error;

use crate::api::RecipeSource;
use crate::model::{FilterKey, Recipe, RecipeId, SearchFilters, ALL_FILTER};

/// Owns the current filter criteria and the latest result set.
///
/// Results are replaced wholesale on each successful search; a failed
/// search leaves the previous set in place. When searches overlap, the one
/// that resolves last wins.
#[derive(Debug, Default)]
pub struct SearchCoordinator {
    filters: SearchFilters,
    results: Vec<Recipe>,
    loading: bool,
}

impl SearchCoordinator {
    pub fn new() -> Self {
        SearchCoordinator::default()
    }

    pub fn filters(&self) -> &SearchFilters {
        &self.filters
    }

    /// Replace one filter field. Never triggers a fetch on its own.
    pub fn set_filter(&mut self, key: FilterKey, value: impl Into<String>) {
        self.filters.set(key, value);
    }

    pub fn results(&self) -> &[Recipe] {
        &self.results
    }

    pub fn result_count(&self) -> usize {
        self.results.len()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Look up a summary record in the current result set.
    pub fn find(&self, id: RecipeId) -> Option<&Recipe> {
        self.results.iter().find(|r| r.id == id)
    }

    /// Run a search with the current filters.
    ///
    /// A query that trims to nothing is a no-op. The "all" selector value
    /// is mapped to an omitted filter. On failure the error is logged and
    /// the previous results stay; the loading flag clears on both paths.
    pub async fn execute(&mut self, source: &dyn RecipeSource) {
        if self.filters.query.trim().is_empty() {
            return;
        }

        self.loading = true;
        let outcome = source
            .search(
                &self.filters.query,
                constrained(&self.filters.cuisine),
                constrained(&self.filters.diet),
            )
            .await;
        match outcome {
            Ok(results) => self.results = results,
            Err(err) => error!("recipe search failed: {err}"),
        }
        self.loading = false;
    }
}

/// Map the "all" selector value to no constraint.
fn constrained(value: &str) -> Option<&str> {
    if value == ALL_FILTER {
        None
    } else {
        Some(value)
    }
}
