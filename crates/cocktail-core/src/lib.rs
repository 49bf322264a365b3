//! Lookup pipeline between `cocktail-api` and the terminal front end.
//!
//! - **[`Controller`]**: Owns the form fields and the single [`ViewState`].
//!   Every transition goes through [`Controller::update`], which consumes a
//!   [`Command`] and returns the [`Effect`]s the caller must perform
//!   (start a lookup, move focus to the name field).
//!
//! - **[`LookupClient`]**: One search request per call, classified into a
//!   [`LookupOutcome`]: found (first match only), not found, or transport
//!   failure.
//!
//! - **Ingredient extraction** ([`ingredients::extract`]): Normalizes the
//!   fifteen sparse ingredient/measure slots of a record into an ordered list.
//!
//! - **View model** ([`view::render`]): Pure projection of controller state
//!   into display-ready data. The UI layer never reads `ViewState` directly.

pub mod catalog;
pub mod config;
pub mod controller;
pub mod error;
pub mod ingredients;
pub mod lookup;
pub mod model;
pub mod view;

// ── Primary re-exports ──────────────────────────────────────────────
pub use catalog::Catalog;
pub use cocktail_api::DEFAULT_BASE_URL;
pub use config::LookupConfig;
pub use controller::{Command, Controller, Effect, FormState, ViewState};
pub use error::CoreError;
pub use lookup::{LookupClient, LookupOutcome};
pub use model::{Alcoholic, DrinkQuery, DrinkRecord, Ingredient, ValidationError};
pub use view::{DrinkCard, FormView, ViewModel};
