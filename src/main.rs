use log::{debug, error};
use std::env;
use std::io::{self, BufRead, Write};

use recipe_scaler::display::{format_recipe_card, ConsoleObserver};
use recipe_scaler::{open_recipe, search_recipes, ScalerError};

const HELP: &str = "Commands: + (more servings), - (fewer servings), q (close)";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Usage: recipe-scaler [query] [index]
    let args: Vec<String> = env::args().collect();
    let query = args.get(1).map(String::as_str).unwrap_or_default();
    let selection = match args.get(2) {
        Some(index) => index
            .parse::<usize>()
            .map_err(|_| ScalerError::InvalidSelection(format!("{index} is not a number")))?,
        None => 1,
    };

    let meals = match search_recipes(query).await {
        Ok(meals) => meals,
        Err(e) => {
            error!("Error fetching data: {}", e);
            return Err(e.into());
        }
    };

    if meals.is_empty() {
        println!("No recipes found. Try another search!");
        return Ok(());
    }

    for (i, meal) in meals.iter().enumerate() {
        println!("{:>2}. {}", i + 1, format_recipe_card(meal));
    }

    let meal = selection
        .checked_sub(1)
        .and_then(|i| meals.get(i))
        .ok_or_else(|| {
            ScalerError::InvalidSelection(format!(
                "choose a recipe between 1 and {}",
                meals.len()
            ))
        })?;
    debug!("Selected recipe {} ({})", meal.name, meal.id);

    println!("\n== {} ==", meal.name);
    if let Some(instructions) = meal.instructions.as_deref() {
        println!("{}\n", instructions.trim());
    }

    let mut controller = open_recipe(meal, ConsoleObserver::new(io::stdout()));
    println!("{HELP}");

    for line in io::stdin().lock().lines() {
        match line?.trim() {
            "+" => controller.increment(),
            "-" => controller.decrement(),
            "q" | "quit" => break,
            "" => continue,
            _ => println!("{HELP}"),
        }
        io::stdout().flush()?;
    }

    Ok(())
}
