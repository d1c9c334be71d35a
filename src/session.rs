use log::debug;
use serde::Serialize;

use crate::measure::scale_measure;
use crate::model::IngredientLine;

/// Number of servings the source recipes are written for.
pub const BASE_SERVINGS: u32 = 2;
/// Lowest selectable serving count.
pub const MIN_SERVINGS: u32 = 1;
/// Highest selectable serving count.
pub const MAX_SERVINGS: u32 = 24;

/// An ingredient with its measurement rescaled to the current serving count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScaledIngredient {
    pub name: String,
    pub measure: String,
}

/// Serving count and base ingredients of the recipe currently on display.
///
/// `current_servings` always stays within `MIN_SERVINGS..=MAX_SERVINGS`;
/// requests past either bound are ignored.
#[derive(Debug, Clone)]
pub struct ServingSession {
    current_servings: u32,
    ingredients: Vec<IngredientLine>,
}

impl ServingSession {
    /// Start a session at `BASE_SERVINGS`.
    pub fn new(ingredients: Vec<IngredientLine>) -> Self {
        ServingSession {
            current_servings: BASE_SERVINGS,
            ingredients,
        }
    }

    pub fn current_servings(&self) -> u32 {
        self.current_servings
    }

    pub fn ingredients(&self) -> &[IngredientLine] {
        &self.ingredients
    }

    /// Ratio of current to base servings, always positive.
    pub fn multiplier(&self) -> f64 {
        f64::from(self.current_servings) / f64::from(BASE_SERVINGS)
    }

    /// Add one serving. Returns `false` when already at `MAX_SERVINGS`.
    pub fn increment(&mut self) -> bool {
        if self.current_servings < MAX_SERVINGS {
            self.current_servings += 1;
            true
        } else {
            debug!("Serving count already at maximum of {}", MAX_SERVINGS);
            false
        }
    }

    /// Remove one serving. Returns `false` when already at `MIN_SERVINGS`.
    pub fn decrement(&mut self) -> bool {
        if self.current_servings > MIN_SERVINGS {
            self.current_servings -= 1;
            true
        } else {
            debug!("Serving count already at minimum of {}", MIN_SERVINGS);
            false
        }
    }

    /// Full ingredient list scaled to the current serving count, in the
    /// original order.
    pub fn scaled_ingredients(&self) -> Vec<ScaledIngredient> {
        let multiplier = self.multiplier();
        self.ingredients
            .iter()
            .map(|line| ScaledIngredient {
                name: line.name.clone(),
                measure: scale_measure(&line.raw_measure, multiplier),
            })
            .collect()
    }
}

/// Receives the recomputed ingredient list after every serving change.
pub trait IngredientListObserver {
    fn ingredients_changed(&mut self, servings: u32, ingredients: &[ScaledIngredient]);
}

impl<F> IngredientListObserver for F
where
    F: FnMut(u32, &[ScaledIngredient]),
{
    fn ingredients_changed(&mut self, servings: u32, ingredients: &[ScaledIngredient]) {
        self(servings, ingredients)
    }
}

/// Drives a [`ServingSession`] and publishes each recomputed list.
///
/// Every command notifies the observer exactly once, including increments or
/// decrements that were clamped at a bound.
pub struct ServingController<O: IngredientListObserver> {
    session: ServingSession,
    observer: O,
}

impl<O: IngredientListObserver> ServingController<O> {
    /// Open a session for `ingredients` and publish the initial list.
    pub fn initialize(ingredients: Vec<IngredientLine>, observer: O) -> Self {
        debug!(
            "Opening serving session with {} ingredients",
            ingredients.len()
        );
        let mut controller = ServingController {
            session: ServingSession::new(ingredients),
            observer,
        };
        controller.publish();
        controller
    }

    pub fn increment(&mut self) {
        if self.session.increment() {
            debug!("Servings increased to {}", self.session.current_servings());
        }
        self.publish();
    }

    pub fn decrement(&mut self) {
        if self.session.decrement() {
            debug!("Servings decreased to {}", self.session.current_servings());
        }
        self.publish();
    }

    pub fn session(&self) -> &ServingSession {
        &self.session
    }

    pub fn current_servings(&self) -> u32 {
        self.session.current_servings()
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Close the view, handing back the observer.
    pub fn into_observer(self) -> O {
        self.observer
    }

    fn publish(&mut self) {
        let scaled = self.session.scaled_ingredients();
        self.observer
            .ingredients_changed(self.session.current_servings(), &scaled);
    }
}
