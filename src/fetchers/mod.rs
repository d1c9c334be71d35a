use crate::error::ScalerError;
use crate::model::Meal;

mod meal_db;

pub use meal_db::MealDbClient;

/// Supplies recipes matching a search term.
#[async_trait::async_trait]
pub trait RecipeSource {
    /// Meals matching `query`. No match is an empty list, not an error.
    async fn search(&self, query: &str) -> Result<Vec<Meal>, ScalerError>;
}
