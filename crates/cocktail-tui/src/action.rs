//! Actions flowing from keys and timers into the app loop. Lookup state
//! changes only through [`Action::Core`].

use std::fmt;

use cocktail_core::Command;

/// Which component owns keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    NameInput,
    Catalog,
    Recipe,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Self::NameInput => Self::Catalog,
            Self::Catalog => Self::Recipe,
            Self::Recipe => Self::NameInput,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    Tick,
    Render,
    /// Cycle focus: name field, catalog, recipe panel.
    FocusNext,
    /// Move focus to a specific component.
    Focus(Focus),
    /// Forward to the lookup controller.
    Core(Command),
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Quit => write!(f, "quit"),
            Self::Tick => write!(f, "tick"),
            Self::Render => write!(f, "render"),
            Self::FocusNext => write!(f, "focus-next"),
            Self::Focus(target) => write!(f, "focus({target:?})"),
            Self::Core(command) => write!(f, "core({command:?})"),
        }
    }
}
