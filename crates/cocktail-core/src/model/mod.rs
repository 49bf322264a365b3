// ── Domain model ──

mod drink;
mod query;

pub use drink::{Alcoholic, DrinkRecord, Ingredient};
pub use query::{DrinkQuery, ValidationError};
