//! Data models for recipes and their ingredients

use std::fmt;

use crate::notify::{Observer, Observers};

/// Calorie limit used when no threshold is configured
pub const DEFAULT_CALORIE_THRESHOLD: i64 = 300;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ingredient {
    pub name: String,
    pub calories: i32, // Expected >= 0, not enforced
    pub food_group: String,
}

impl Ingredient {
    pub fn new(name: impl Into<String>, calories: i32, food_group: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            calories,
            food_group: food_group.into(),
        }
    }
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} calories, {} group)",
            self.name, self.calories, self.food_group
        )
    }
}

/// Raised when a recipe's total calories go over the threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaloriesExceeded {
    pub total_calories: i64,
    pub threshold: i64,
}

impl fmt::Display for CaloriesExceeded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Warning: total calories exceed {} (actual: {})",
            self.threshold, self.total_calories
        )
    }
}

/// A named recipe with ordered ingredients and steps
///
/// Ingredients and steps keep entry order and are append-only.
#[derive(Debug, Default)]
pub struct Recipe {
    name: String,
    ingredients: Vec<Ingredient>,
    steps: Vec<String>,
    observers: Observers,
}

impl Recipe {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }

    pub fn steps(&self) -> &[String] {
        &self.steps
    }

    pub fn add_ingredient(
        &mut self,
        name: impl Into<String>,
        calories: i32,
        food_group: impl Into<String>,
    ) {
        self.ingredients
            .push(Ingredient::new(name, calories, food_group));
    }

    pub fn add_step(&mut self, text: impl Into<String>) {
        self.steps.push(text.into());
    }

    /// Register an observer for calorie threshold notifications
    pub fn subscribe<F>(&mut self, observer: F)
    where
        F: Fn(&Recipe, &CaloriesExceeded) -> anyhow::Result<()> + 'static,
    {
        self.observers.subscribe(Box::new(observer) as Observer);
    }

    /// Sum of ingredient calories, widened so it cannot overflow
    pub fn total_calories(&self) -> i64 {
        self.ingredients.iter().map(|i| i64::from(i.calories)).sum()
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Display lines: the name, each ingredient, then numbered steps
    pub fn render(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(1 + self.ingredients.len() + self.steps.len());
        lines.push(format!("Recipe: {}", self.name));
        for ingredient in &self.ingredients {
            lines.push(format!("- {}", ingredient));
        }
        for (i, step) in self.steps.iter().enumerate() {
            lines.push(format!("{}. {}", i + 1, step));
        }
        lines
    }

    /// Compare total calories to `threshold` and notify observers when it is exceeded
    ///
    /// Observers run synchronously in registration order before this returns.
    pub fn check_threshold(&self, threshold: i64) -> Option<CaloriesExceeded> {
        let total_calories = self.total_calories();
        if total_calories <= threshold {
            tracing::debug!(recipe = %self.name, total_calories, threshold, "under calorie threshold");
            return None;
        }

        let event = CaloriesExceeded {
            total_calories,
            threshold,
        };
        let failed = self.observers.dispatch(self, &event);
        tracing::debug!(
            recipe = %self.name,
            total_calories,
            threshold,
            observers = self.observers.len(),
            failed,
            "calorie threshold exceeded"
        );
        Some(event)
    }
}
