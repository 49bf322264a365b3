// ── View model ──
//
// Pure projection of controller state into display-ready data. Nothing
// here does I/O or mutates state; the same inputs always render the same
// model.

use crate::catalog::Catalog;
use crate::controller::{FormState, ViewState};
use crate::ingredients;
use crate::model::DrinkRecord;

/// Label shown when a record carries no recognized alcoholic flag.
pub const UNKNOWN_ALCOHOLIC: &str = "Unknown";

/// Input form as it should be displayed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormView {
    pub name: String,
    pub options: Vec<String>,
    pub selected: Option<usize>,
}

/// A rendered drink, every field already in display form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrinkCard {
    pub thumbnail_url: Option<String>,
    pub name: String,
    pub category: String,
    pub glass: String,
    pub alcoholic: String,
    pub instructions: String,
    pub ingredients: Vec<String>,
}

impl From<&DrinkRecord> for DrinkCard {
    fn from(record: &DrinkRecord) -> Self {
        Self {
            thumbnail_url: record.thumbnail_url.clone(),
            name: record.name.clone(),
            category: record.category.clone(),
            glass: record.glass.clone(),
            alcoholic: record
                .alcoholic
                .map_or_else(|| UNKNOWN_ALCOHOLIC.to_owned(), |a| a.to_string()),
            instructions: record.instructions.clone(),
            ingredients: ingredients::display_lines(&record.ingredients),
        }
    }
}

/// Everything a front end needs to draw one frame.
///
/// At most one of `busy`, `error` and `card` is set: they mirror the single
/// active [`ViewState`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewModel {
    pub form: FormView,
    pub busy: bool,
    pub error: Option<String>,
    pub card: Option<DrinkCard>,
}

/// Render the full view model.
pub fn render(view: &ViewState, form: &FormState, catalog: &Catalog) -> ViewModel {
    let (busy, error, card) = render_panel(view);
    ViewModel {
        form: FormView {
            name: form.name.clone(),
            options: catalog.names().to_vec(),
            selected: form.selected,
        },
        busy,
        error,
        card,
    }
}

/// Render only the status/result panel for `view`.
pub fn render_panel(view: &ViewState) -> (bool, Option<String>, Option<DrinkCard>) {
    match view {
        ViewState::Idle => (false, None, None),
        ViewState::Loading => (true, None, None),
        ViewState::Error(err) => (false, Some(err.to_string()), None),
        ViewState::Result(record) => (false, None, Some(DrinkCard::from(record))),
    }
}
