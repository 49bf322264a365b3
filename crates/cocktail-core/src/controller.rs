// ── Controller ──
//
// Single owner of the form fields and the view state. The UI sends
// `Command`s in and performs the returned `Effect`s; nothing else mutates
// either field.

use tracing::debug;

use crate::catalog::Catalog;
use crate::error::CoreError;
use crate::lookup::LookupOutcome;
use crate::model::{DrinkQuery, DrinkRecord};
use crate::view::{self, ViewModel};

/// Which of the four mutually exclusive display modes is active.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ViewState {
    #[default]
    Idle,
    Loading,
    Error(CoreError),
    Result(DrinkRecord),
}

impl ViewState {
    fn label(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::Error(_) => "error",
            Self::Result(_) => "result",
        }
    }
}

/// Contents of the input form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    /// Name field text, exactly as typed or selected.
    pub name: String,
    /// Catalog index of the selector entry, if one is chosen.
    pub selected: Option<usize>,
}

/// Everything the UI can ask the controller to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Replace the name field text (typing).
    EditName(String),
    /// Pick a selector entry: its name is copied into the name field.
    Select(String),
    /// Validate the name field and start a lookup.
    Submit,
    /// Clear the form and return to idle.
    Reset,
    /// A lookup started by [`Effect::Lookup`] finished.
    LookupCompleted(LookupOutcome),
}

/// Side effects requested by [`Controller::update`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Run the lookup and feed the result back as
    /// [`Command::LookupCompleted`].
    Lookup(DrinkQuery),
    /// Move input focus to the name field.
    FocusNameInput,
}

#[derive(Debug, Clone, Default)]
pub struct Controller {
    form: FormState,
    view: ViewState,
    catalog: Catalog,
}

impl Controller {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            form: FormState::default(),
            view: ViewState::Idle,
            catalog,
        }
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Project the current state for display.
    pub fn view_model(&self) -> ViewModel {
        view::render(&self.view, &self.form, &self.catalog)
    }

    /// Apply one command and return the effects the caller must perform,
    /// in order.
    pub fn update(&mut self, command: Command) -> Vec<Effect> {
        match command {
            Command::EditName(text) => {
                self.form.name = text;
                Vec::new()
            }
            Command::Select(name) => {
                self.form.selected = self.catalog.position(&name);
                self.form.name = name;
                Vec::new()
            }
            Command::Submit => self.submit(),
            Command::Reset => {
                self.form = FormState::default();
                self.transition(ViewState::Idle);
                vec![Effect::FocusNameInput]
            }
            Command::LookupCompleted(outcome) => self.complete(outcome),
        }
    }

    fn submit(&mut self) -> Vec<Effect> {
        match DrinkQuery::parse(&self.form.name) {
            Ok(query) => {
                self.transition(ViewState::Loading);
                vec![Effect::Lookup(query)]
            }
            Err(err) => self.fail(err.into()),
        }
    }

    fn complete(&mut self, outcome: LookupOutcome) -> Vec<Effect> {
        // No cancellation: late results overwrite whatever is showing.
        if self.view != ViewState::Loading {
            debug!(state = self.view.label(), "applying lookup result outside loading state");
        }

        match outcome.into_result() {
            Ok(record) => {
                self.transition(ViewState::Result(record));
                Vec::new()
            }
            Err(err) => self.fail(err),
        }
    }

    fn fail(&mut self, err: CoreError) -> Vec<Effect> {
        let refocus = err.refocuses_input();
        self.transition(ViewState::Error(err));
        if refocus {
            vec![Effect::FocusNameInput]
        } else {
            Vec::new()
        }
    }

    fn transition(&mut self, next: ViewState) {
        debug!(from = self.view.label(), to = next.label(), "view transition");
        self.view = next;
    }
}
