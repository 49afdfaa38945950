use log::error;

use crate::api::RecipeSource;
use crate::model::{Recipe, RecipeId};

/// Fetches full detail for one recipe on demand and tracks the active
/// selection for the detail view.
#[derive(Debug, Default)]
pub struct DetailLoader {
    selected: Option<Recipe>,
    open: bool,
}

impl DetailLoader {
    pub fn new() -> Self {
        DetailLoader::default()
    }

    /// The active selection, if a detail fetch has succeeded.
    pub fn selected(&self) -> Option<&Recipe> {
        self.selected.as_ref()
    }

    /// Whether the detail view should be presented.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Fetch detail for `id` and make it the active selection.
    ///
    /// Every call re-fetches, even for the same id. On failure the error is
    /// logged and the previous selection and open state stay untouched.
    pub async fn load(&mut self, source: &dyn RecipeSource, id: RecipeId) {
        match source.get_details(id).await {
            Ok(recipe) => {
                self.selected = Some(recipe);
                self.open = true;
            }
            Err(err) => error!("failed to fetch details for recipe {id}: {err}"),
        }
    }

    /// Dismiss the detail view and drop the selection.
    pub fn close(&mut self) {
        self.open = false;
        self.selected = None;
    }
}
