//! Single-line drink name field backed by `tui-input`.

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Position, Rect},
    text::Span,
    widgets::{Block, BorderType, Borders, Paragraph},
};
use tui_input::{Input, InputRequest};

use cocktail_core::{Command, ViewModel};

use crate::action::{Action, Focus};
use crate::component::Component;
use crate::theme;

#[derive(Default)]
pub struct NameInput {
    input: Input,
    focused: bool,
}

impl NameInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> &str {
        self.input.value()
    }

    /// Adopt `name` when the controller changed the field (selection,
    /// reset). The cursor moves to the end.
    pub fn sync(&mut self, name: &str) {
        if self.input.value() != name {
            self.input = Input::new(name.to_owned());
        }
    }
}

/// Editing keys understood by the field.
fn input_request(key: KeyEvent) -> Option<InputRequest> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('u') if ctrl => Some(InputRequest::DeleteLine),
        KeyCode::Char('w') if ctrl => Some(InputRequest::DeletePrevWord),
        KeyCode::Char('a') if ctrl => Some(InputRequest::GoToStart),
        KeyCode::Char('e') if ctrl => Some(InputRequest::GoToEnd),
        KeyCode::Char(c) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
            Some(InputRequest::InsertChar(c))
        }
        KeyCode::Backspace => Some(InputRequest::DeletePrevChar),
        KeyCode::Delete => Some(InputRequest::DeleteNextChar),
        KeyCode::Left => Some(InputRequest::GoToPrevChar),
        KeyCode::Right => Some(InputRequest::GoToNextChar),
        KeyCode::Home => Some(InputRequest::GoToStart),
        KeyCode::End => Some(InputRequest::GoToEnd),
        _ => None,
    }
}

impl Component for NameInput {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if key.code == KeyCode::Enter {
            return Ok(Some(Action::Core(Command::Submit)));
        }

        let Some(request) = input_request(key) else {
            return Ok(None);
        };

        match self.input.handle(request) {
            Some(changed) if changed.value => Ok(Some(Action::Core(Command::EditName(
                self.input.value().to_owned(),
            )))),
            _ => Ok(None),
        }
    }

    fn render(&self, frame: &mut Frame, area: Rect, _view: &ViewModel) {
        let block = Block::default()
            .title(Span::styled(" Drink name ", theme::title_style()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::border_for(self.focused));

        let inner = block.inner(area);
        let width = usize::from(inner.width.max(1) - 1);
        let scroll = self.input.visual_scroll(width);

        let paragraph = Paragraph::new(self.input.value())
            .style(theme::body())
            .scroll((0, u16::try_from(scroll).unwrap_or(u16::MAX)))
            .block(block);
        frame.render_widget(paragraph, area);

        if self.focused {
            let offset = self.input.visual_cursor().saturating_sub(scroll);
            let x = inner
                .x
                .saturating_add(u16::try_from(offset).unwrap_or(u16::MAX));
            frame.set_cursor_position(Position::new(x, inner.y));
        }
    }

    fn focused(&self) -> bool {
        self.focused
    }

    fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    fn focus_slot(&self) -> Option<Focus> {
        Some(Focus::NameInput)
    }

    fn id(&self) -> &'static str {
        "name-input"
    }
}
