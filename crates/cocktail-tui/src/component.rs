//! Shared interface of the name field, catalog list and recipe panel.

use color_eyre::eyre::Result;
use crossterm::event::KeyEvent;
use ratatui::{Frame, layout::Rect};

use cocktail_core::ViewModel;

use crate::action::{Action, Focus};

/// Every UI element implements Component.
///
/// Components never hold lookup state: each frame they draw from the
/// controller's [`ViewModel`].
pub trait Component: Send {
    /// Handle a keyboard event while focused. Return an Action to dispatch,
    /// or None.
    fn handle_key_event(&mut self, _key: KeyEvent) -> Result<Option<Action>> {
        Ok(None)
    }

    /// Process a dispatched action. May return a follow-up action.
    fn update(&mut self, _action: &Action) -> Result<Option<Action>> {
        Ok(None)
    }

    /// Render into the provided frame area.
    fn render(&self, frame: &mut Frame, area: Rect, view: &ViewModel);

    /// Whether this component currently holds input focus.
    fn focused(&self) -> bool {
        false
    }

    /// Set focus state.
    fn set_focused(&mut self, _focused: bool) {}

    /// Focus slot this component occupies, if it can take focus at all.
    fn focus_slot(&self) -> Option<Focus> {
        None
    }

    /// Identifier used in logs.
    fn id(&self) -> &'static str;
}
