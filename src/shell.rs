//! Interactive console session over any line reader and writer

use std::io::{BufRead, Write};
use std::str::FromStr;

use crate::catalog::Catalog;
use crate::error::{Result, ShellError};
use crate::models::{CaloriesExceeded, Recipe};

/// Menu-driven session that owns the catalog until it ends
pub struct Shell<R, W> {
    input: R,
    output: W,
    catalog: Catalog,
    threshold: i64,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W, catalog: Catalog, threshold: i64) -> Self {
        Self {
            input,
            output,
            catalog,
            threshold,
        }
    }

    /// Run until the user exits or input runs out outside recipe entry
    ///
    /// Returns the catalog so the caller keeps ownership afterwards.
    pub fn run(mut self) -> Result<Catalog> {
        writeln!(self.output, "Welcome to Recipe Manager!")?;

        loop {
            writeln!(self.output, "\nChoose an option:")?;
            writeln!(self.output, "1. Add a new recipe")?;
            writeln!(self.output, "2. Display all recipes")?;
            writeln!(self.output, "3. Exit")?;

            let line = match self.prompt("Enter your choice: ") {
                Ok(line) => line,
                Err(ShellError::InputClosed) => {
                    tracing::debug!("input closed at menu");
                    break;
                }
                Err(e) => return Err(e),
            };

            match parse_number::<i64>(&line, "menu choice") {
                Ok(1) => self.add_recipe()?,
                Ok(2) => match self.display_recipes() {
                    Ok(()) => {}
                    Err(ShellError::InputClosed) => {
                        tracing::debug!("input closed at recipe selection");
                        break;
                    }
                    Err(e) => return Err(e),
                },
                Ok(3) => break,
                Ok(other) => {
                    tracing::debug!(choice = other, "unknown menu choice");
                    writeln!(self.output, "Invalid choice. Please try again.")?;
                }
                Err(e) => writeln!(self.output, "{}. Please try again.", e)?,
            }
        }

        self.output.flush()?;
        Ok(self.catalog)
    }

    fn add_recipe(&mut self) -> Result<()> {
        let name = self.prompt("Enter the recipe name: ")?;
        let mut recipe = Recipe::new(name);
        recipe.subscribe(log_calorie_warning);

        let count: usize = self.read_number("Enter the number of ingredients: ", "ingredient count")?;
        for i in 1..=count {
            let name = self.prompt(&format!("Enter ingredient {} name: ", i))?;
            let calories: i32 = self.read_number(
                &format!("Enter ingredient {} calories: ", i),
                "calories",
            )?;
            let food_group = self.prompt(&format!("Enter ingredient {} food group: ", i))?;
            recipe.add_ingredient(name, calories, food_group);
        }

        let count: usize = self.read_number("Enter the number of steps: ", "step count")?;
        for i in 1..=count {
            let step = self.prompt(&format!("Enter step {}: ", i))?;
            recipe.add_step(step);
        }

        self.catalog.add(recipe);
        Ok(())
    }

    fn display_recipes(&mut self) -> Result<()> {
        if self.catalog.is_empty() {
            writeln!(self.output, "No recipes added yet.")?;
            return Ok(());
        }

        for name in self.catalog.list_sorted_by_name() {
            writeln!(self.output, "{}", name)?;
        }

        let name = self.prompt("Enter the name of the recipe to display: ")?;
        match self.catalog.find_by_name(&name) {
            Some(recipe) => {
                writeln!(self.output)?;
                for line in recipe.render() {
                    writeln!(self.output, "{}", line)?;
                }
                if let Some(event) = recipe.check_threshold(self.threshold) {
                    writeln!(self.output, "{}", event)?;
                }
            }
            None => writeln!(self.output, "Recipe not found.")?,
        }
        Ok(())
    }

    /// Write `text`, then read one line without its line ending
    fn prompt(&mut self, text: &str) -> Result<String> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ShellError::InputClosed);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Prompt until the answer parses
    fn read_number<T: FromStr>(&mut self, text: &str, field: &str) -> Result<T> {
        loop {
            let line = self.prompt(text)?;
            match parse_number(&line, field) {
                Ok(value) => return Ok(value),
                Err(e) => {
                    tracing::debug!(field, input = %line, "rejected numeric input");
                    writeln!(self.output, "{}. Please try again.", e)?;
                }
            }
        }
    }
}

/// Parse a trimmed integer field
pub fn parse_number<T: FromStr>(input: &str, field: &str) -> Result<T> {
    input.trim().parse().map_err(|_| ShellError::Parse {
        field: field.to_string(),
        input: input.to_string(),
    })
}

/// Observer attached to every recipe the session creates
pub fn log_calorie_warning(recipe: &Recipe, event: &CaloriesExceeded) -> anyhow::Result<()> {
    tracing::info!(
        recipe = %recipe.name(),
        total_calories = event.total_calories,
        threshold = event.threshold,
        "recipe over calorie threshold"
    );
    Ok(())
}
