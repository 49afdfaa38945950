use log::error;

use crate::api::RecipeSource;
use crate::detail::DetailLoader;
use crate::favorites::{Favorites, FavoritesStorage};
use crate::model::{FilterKey, Recipe, RecipeId};
use crate::search::SearchCoordinator;

/// The coordinating component of the client.
///
/// Owns the favorites store, the search coordinator and the detail loader,
/// and wires user intents into their handlers. Collaborators are injected;
/// favorites are loaded from storage once at construction and written
/// through after every mutation.
pub struct App<S: FavoritesStorage> {
    source: Box<dyn RecipeSource>,
    storage: S,
    favorites: Favorites,
    search: SearchCoordinator,
    detail: DetailLoader,
}

impl<S: FavoritesStorage> App<S> {
    pub fn new(source: Box<dyn RecipeSource>, storage: S) -> Self {
        let favorites = Favorites::load_from(&storage);
        App {
            source,
            storage,
            favorites,
            search: SearchCoordinator::new(),
            detail: DetailLoader::new(),
        }
    }

    pub fn favorites(&self) -> &Favorites {
        &self.favorites
    }

    pub fn results(&self) -> &[Recipe] {
        self.search.results()
    }

    pub fn result_count(&self) -> usize {
        self.search.result_count()
    }

    pub fn is_loading(&self) -> bool {
        self.search.is_loading()
    }

    pub fn selected(&self) -> Option<&Recipe> {
        self.detail.selected()
    }

    pub fn is_detail_open(&self) -> bool {
        self.detail.is_open()
    }

    /// Replace one search filter field.
    pub fn filter_change(&mut self, key: FilterKey, value: impl Into<String>) {
        self.search.set_filter(key, value);
    }

    /// Run a search with the current filters.
    pub async fn search(&mut self) {
        self.search.execute(self.source.as_ref()).await;
    }

    /// Open the detail view for a recipe.
    pub async fn recipe_click(&mut self, id: RecipeId) {
        self.detail.load(self.source.as_ref(), id).await;
    }

    /// Dismiss the detail view.
    pub fn close_detail(&mut self) {
        self.detail.close();
    }

    /// Flip favorite membership for `id` and write the collection through
    /// to storage. Returns true when the recipe is now a favorite.
    ///
    /// The full record is resolved from the current search results first,
    /// then from the open detail selection. A storage write failure is
    /// logged; the in-memory state keeps the mutation.
    pub fn toggle_favorite(&mut self, id: RecipeId) -> bool {
        let record = self
            .search
            .find(id)
            .or_else(|| self.detail.selected().filter(|r| r.id == id))
            .cloned();

        let now_favorite = self.favorites.toggle(id, record.as_ref());
        if let Err(err) = self.favorites.persist_to(&mut self.storage) {
            error!("failed to persist favorites: {err}");
        }
        now_favorite
    }
}
