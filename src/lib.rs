//! Recipe Manager
//!
//! Record recipes, list them by name, and flag the ones over a calorie limit.

pub mod catalog;
pub mod error;
pub mod logger;
pub mod models;
pub mod notify;
pub mod sample;
pub mod shell;

pub use catalog::Catalog;
pub use error::{Result, ShellError};
pub use models::{CaloriesExceeded, DEFAULT_CALORIE_THRESHOLD, Ingredient, Recipe};
pub use shell::Shell;
