use log::warn;
use std::io::Write;

use crate::model::Meal;
use crate::session::{IngredientListObserver, ScaledIngredient};

/// One search result: the name, then `category | area` on an indented line.
pub fn format_recipe_card(meal: &Meal) -> String {
    format!(
        "{}\n   {} | {}",
        meal.name,
        meal.category.as_deref().unwrap_or_default(),
        meal.area.as_deref().unwrap_or_default()
    )
}

/// `<measure> <name>`, or just the name when there is no measure.
pub fn format_ingredient(ingredient: &ScaledIngredient) -> String {
    if ingredient.measure.trim().is_empty() {
        ingredient.name.clone()
    } else {
        format!("{} {}", ingredient.measure, ingredient.name)
    }
}

/// Servings header followed by one bulleted line per ingredient.
pub fn format_ingredient_list(servings: u32, ingredients: &[ScaledIngredient]) -> String {
    let mut output = format!("Servings: {servings}\n");
    for ingredient in ingredients {
        output.push_str("  - ");
        output.push_str(&format_ingredient(ingredient));
        output.push('\n');
    }
    output
}

/// Writes every published ingredient list to `out`.
pub struct ConsoleObserver<W: Write> {
    out: W,
}

impl<W: Write> ConsoleObserver<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> IngredientListObserver for ConsoleObserver<W> {
    fn ingredients_changed(&mut self, servings: u32, ingredients: &[ScaledIngredient]) {
        let text = format_ingredient_list(servings, ingredients);
        if let Err(e) = self.out.write_all(text.as_bytes()).and_then(|_| self.out.flush()) {
            warn!("Failed to write ingredient list: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::IngredientLine;
    use crate::session::ServingController;

    fn scaled(name: &str, measure: &str) -> ScaledIngredient {
        ScaledIngredient {
            name: name.to_string(),
            measure: measure.to_string(),
        }
    }

    #[test]
    fn test_format_recipe_card() {
        let meal = Meal {
            name: "Spicy Arrabiata Penne".to_string(),
            category: Some("Vegetarian".to_string()),
            area: Some("Italian".to_string()),
            ..Default::default()
        };

        assert_eq!(
            format_recipe_card(&meal),
            "Spicy Arrabiata Penne\n   Vegetarian | Italian"
        );
    }

    #[test]
    fn test_format_ingredient_without_measure() {
        assert_eq!(format_ingredient(&scaled("Salt", "")), "Salt");
        assert_eq!(format_ingredient(&scaled("Salt", "1 tsp")), "1 tsp Salt");
    }

    #[test]
    fn test_format_ingredient_list() {
        let text = format_ingredient_list(4, &[scaled("flour", "4 cups"), scaled("sugar", "1 cup")]);
        assert_eq!(text, "Servings: 4\n  - 4 cups flour\n  - 1 cup sugar\n");
    }

    #[test]
    fn test_console_observer_writes_each_update() {
        let observer = ConsoleObserver::new(Vec::new());
        let mut controller =
            ServingController::initialize(vec![IngredientLine::new("eggs", "2")], observer);
        controller.increment();

        let output = String::from_utf8(controller.into_observer().into_inner()).unwrap();
        assert_eq!(
            output,
            "Servings: 2\n  - 2 eggs\nServings: 3\n  - 3 eggs\n"
        );
    }
}
