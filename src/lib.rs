pub mod config;
pub mod display;
pub mod error;
pub mod fetchers;
pub mod measure;
pub mod model;
pub mod session;

use log::debug;

pub use config::AppConfig;
pub use error::ScalerError;
pub use fetchers::{MealDbClient, RecipeSource};
pub use measure::{parse_measure, scale_measure, ParsedMeasure};
pub use model::{IngredientLine, Meal};
pub use session::{
    IngredientListObserver, ScaledIngredient, ServingController, ServingSession, BASE_SERVINGS,
    MAX_SERVINGS, MIN_SERVINGS,
};

/// Search TheMealDB using configuration from `config.toml` and the environment.
///
/// An empty query searches for the configured default term.
pub async fn search_recipes(query: &str) -> Result<Vec<Meal>, ScalerError> {
    let config = AppConfig::load()?;
    let client = MealDbClient::new(&config.api)?;
    client.search(query).await
}

/// Open a recipe view for `meal`, publishing its ingredients to `observer`.
///
/// The returned controller owns the serving state for as long as the view is
/// open; dropping it discards that state.
pub fn open_recipe<O: IngredientListObserver>(meal: &Meal, observer: O) -> ServingController<O> {
    let ingredients = meal.ingredients();
    debug!("Opening {:?} with {} ingredients", meal.name, ingredients.len());
    ServingController::initialize(ingredients, observer)
}
