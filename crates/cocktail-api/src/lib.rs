// cocktail-api: Async Rust client for the TheCocktailDB search API

pub mod client;
pub mod error;
pub mod models;
pub mod transport;

pub use client::CocktailClient;
pub use error::Error;
pub use models::{Drink, INGREDIENT_SLOTS, SearchResponse};
pub use transport::TransportConfig;

/// Public TheCocktailDB v1 endpoint (free test key `1`).
pub const DEFAULT_BASE_URL: &str = "https://www.thecocktaildb.com/api/json/v1/1/";
