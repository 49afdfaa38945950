use serde::{Deserialize, Serialize};

/// Identifier assigned by the external catalog. Stable across search and
/// detail responses.
pub type RecipeId = u64;

/// Selector value meaning "no constraint" for cuisine and diet.
pub const ALL_FILTER: &str = "all";

/// Cuisine selector vocabulary known to the client. Free-form values are
/// still accepted by the catalog.
pub const CUISINE_TYPES: [&str; 6] = [
    "italian",
    "mexican",
    "asian",
    "mediterranean",
    "american",
    "indian",
];

/// Diet selector vocabulary known to the client.
pub const DIET_TYPES: [&str; 5] = ["vegetarian", "vegan", "gluten free", "ketogenic", "paleo"];

/// One entry of a recipe's ingredient list. Only populated on detail
/// responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    #[serde(default)]
    pub id: i64,
    /// Display string as written by the recipe author, e.g. "2 cups flour".
    #[serde(default)]
    pub original: String,
}

/// A dish record from the external catalog.
///
/// Search responses carry the summary fields; the ingredient list,
/// instructions markup and attribution only arrive with a detail fetch.
/// Records are immutable once fetched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: RecipeId,
    pub title: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub ready_in_minutes: u32,
    #[serde(default)]
    pub servings: u32,
    /// Cents per serving, as reported by the catalog.
    #[serde(default)]
    pub price_per_serving: f64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cuisines: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub diets: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dish_types: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extended_ingredients: Vec<Ingredient>,
    /// Instructions markup (HTML) from the catalog.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credits_text: Option<String>,
}

impl Recipe {
    /// Price per serving formatted for display, e.g. "$2.45".
    pub fn price_display(&self) -> String {
        format!("${:.2}", self.price_per_serving / 100.0)
    }

    /// Instructions with markup flattened to plain text for terminal output.
    pub fn instructions_text(&self) -> Option<String> {
        let markup = self.instructions.as_deref()?;
        let fragment = scraper::Html::parse_fragment(markup);
        let text = fragment
            .root_element()
            .text()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

/// Named field of [`SearchFilters`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKey {
    Query,
    Cuisine,
    Diet,
}

/// The (query, cuisine, diet) tuple constraining a search request.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchFilters {
    pub query: String,
    pub cuisine: String,
    pub diet: String,
}

impl Default for SearchFilters {
    fn default() -> Self {
        SearchFilters {
            query: String::new(),
            cuisine: ALL_FILTER.to_string(),
            diet: ALL_FILTER.to_string(),
        }
    }
}

impl SearchFilters {
    /// Replace one named field. Does not trigger a fetch.
    pub fn set(&mut self, key: FilterKey, value: impl Into<String>) {
        let value = value.into();
        match key {
            FilterKey::Query => self.query = value,
            FilterKey::Cuisine => self.cuisine = value,
            FilterKey::Diet => self.diet = value,
        }
    }
}
