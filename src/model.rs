use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Number of numbered ingredient/measure slots in a meal payload.
pub const MAX_INGREDIENT_SLOTS: usize = 20;

/// One ingredient of a recipe with its measurement as written by the source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientLine {
    pub name: String,
    pub raw_measure: String,
}

impl IngredientLine {
    pub fn new(name: impl Into<String>, raw_measure: impl Into<String>) -> Self {
        IngredientLine {
            name: name.into(),
            raw_measure: raw_measure.into(),
        }
    }
}

/// A meal as returned by TheMealDB search endpoint.
///
/// Ingredients arrive as `strIngredient1..20` / `strMeasure1..20` fields and
/// are kept in `slots` until extracted with [`Meal::ingredients`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Meal {
    #[serde(rename = "idMeal", default)]
    pub id: String,
    #[serde(rename = "strMeal", default)]
    pub name: String,
    #[serde(rename = "strCategory")]
    pub category: Option<String>,
    #[serde(rename = "strArea")]
    pub area: Option<String>,
    #[serde(rename = "strInstructions")]
    pub instructions: Option<String>,
    #[serde(rename = "strMealThumb")]
    pub thumbnail: Option<String>,
    #[serde(flatten)]
    pub slots: HashMap<String, Value>,
}

impl Meal {
    /// Ingredient lines in slot order, skipping slots whose ingredient name is
    /// missing, empty or whitespace only. A missing measure becomes empty.
    pub fn ingredients(&self) -> Vec<IngredientLine> {
        (1..=MAX_INGREDIENT_SLOTS)
            .filter_map(|slot| {
                let name = self.slot_text("strIngredient", slot)?;
                if name.trim().is_empty() {
                    return None;
                }
                let measure = self.slot_text("strMeasure", slot).unwrap_or_default();
                Some(IngredientLine::new(name, measure))
            })
            .collect()
    }

    fn slot_text(&self, prefix: &str, slot: usize) -> Option<&str> {
        self.slots
            .get(&format!("{prefix}{slot}"))
            .and_then(Value::as_str)
    }
}

/// Envelope of a search response. `meals` is `null` when nothing matched.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    pub meals: Option<Vec<Meal>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn meal_from(value: Value) -> Meal {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_ingredients_keep_slot_order() {
        let meal = meal_from(json!({
            "idMeal": "52772",
            "strMeal": "Teriyaki Chicken Casserole",
            "strIngredient1": "soy sauce",
            "strMeasure1": "3/4 cup",
            "strIngredient2": "water",
            "strMeasure2": "1/2 cup",
            "strIngredient3": "brown sugar",
            "strMeasure3": "1/4 cup"
        }));

        let names: Vec<_> = meal.ingredients().into_iter().map(|i| i.name).collect();
        assert_eq!(names, vec!["soy sauce", "water", "brown sugar"]);
    }

    #[test]
    fn test_ingredients_skip_blank_and_null_names() {
        let meal = meal_from(json!({
            "strMeal": "Gaps",
            "strIngredient1": "Flour",
            "strMeasure1": "2 cups",
            "strIngredient2": "   ",
            "strMeasure2": "1 tsp",
            "strIngredient3": null,
            "strMeasure3": null,
            "strIngredient4": "",
            "strMeasure4": "",
            "strIngredient5": "Salt",
            "strMeasure5": null
        }));

        assert_eq!(
            meal.ingredients(),
            vec![
                IngredientLine::new("Flour", "2 cups"),
                IngredientLine::new("Salt", ""),
            ]
        );
    }

    #[test]
    fn test_ingredients_ignore_slots_past_twenty() {
        let meal = meal_from(json!({
            "strMeal": "Overflow",
            "strIngredient20": "Butter",
            "strMeasure20": "1 knob",
            "strIngredient21": "Ghost",
            "strMeasure21": "1"
        }));

        assert_eq!(meal.ingredients(), vec![IngredientLine::new("Butter", "1 knob")]);
    }

    #[test]
    fn test_search_response_null_meals() {
        let response: SearchResponse = serde_json::from_str(r#"{"meals": null}"#).unwrap();
        assert!(response.meals.is_none());
    }
}
