use crate::{Category, Recipe};
use serde::Deserialize;
use serde::de::DeserializeOwned;

/// Every endpoint answers `{"meals": [...] | null}`.
#[derive(Debug, Deserialize)]
pub struct MealsEnvelope<T> {
    pub meals: Option<Vec<T>>,
}

impl<T> MealsEnvelope<T> {
    pub fn into_meals(self) -> Option<Vec<T>> {
        self.meals
    }

    /// First element, if the list is present and non-empty.
    pub fn into_first(self) -> Option<T> {
        self.meals.and_then(|meals| meals.into_iter().next())
    }
}

/// A trait that defines the path, query and item type of a read-only endpoint.
pub trait ApiRequest {
    /// The element type inside the `meals` list.
    type Item: DeserializeOwned;
    /// The path relative to the API base URL.
    const PATH: &'static str;
    /// The single query parameter, if any.
    fn query(&self) -> Option<(&'static str, &str)>;
}

// =========================================================
// Request Definitions
// =========================================================

/// Search meals by name
#[derive(Debug)]
pub struct SearchByName<'a> {
    pub term: &'a str,
}

impl ApiRequest for SearchByName<'_> {
    type Item = Recipe;
    const PATH: &'static str = "search.php";

    fn query(&self) -> Option<(&'static str, &str)> {
        Some(("s", self.term))
    }
}

/// Filter meals by category (partial records)
#[derive(Debug)]
pub struct FilterByCategory<'a> {
    pub category: &'a str,
}

impl ApiRequest for FilterByCategory<'_> {
    type Item = Recipe;
    const PATH: &'static str = "filter.php";

    fn query(&self) -> Option<(&'static str, &str)> {
        Some(("c", self.category))
    }
}

/// Full meal details by id
#[derive(Debug)]
pub struct LookupById<'a> {
    pub id: &'a str,
}

impl ApiRequest for LookupById<'_> {
    type Item = Recipe;
    const PATH: &'static str = "lookup.php";

    fn query(&self) -> Option<(&'static str, &str)> {
        Some(("i", self.id))
    }
}

/// One random meal
#[derive(Debug)]
pub struct RandomMeal;

impl ApiRequest for RandomMeal {
    type Item = Recipe;
    const PATH: &'static str = "random.php";

    fn query(&self) -> Option<(&'static str, &str)> {
        None
    }
}

/// All category names
#[derive(Debug)]
pub struct ListCategories;

impl ApiRequest for ListCategories {
    type Item = Category;
    const PATH: &'static str = "list.php";

    fn query(&self) -> Option<(&'static str, &str)> {
        Some(("c", "list"))
    }
}
