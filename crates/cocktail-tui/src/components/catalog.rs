//! Selector of known drink names. Picking an entry copies it into the
//! name field; it never starts a lookup on its own.

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    text::Span,
    widgets::{Block, BorderType, Borders, List, ListItem, ListState},
};

use cocktail_core::{Command, FormView, ViewModel};

use crate::action::{Action, Focus};
use crate::component::Component;
use crate::theme;

#[derive(Default)]
pub struct CatalogPicker {
    options: Vec<String>,
    /// Highlighted row; follows the controller's selection after each
    /// command and the arrow keys in between.
    highlight: Option<usize>,
    focused: bool,
}

impl CatalogPicker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn highlight(&self) -> Option<usize> {
        self.highlight
    }

    pub fn sync(&mut self, form: &FormView) {
        if self.options != form.options {
            self.options.clone_from(&form.options);
        }
        self.highlight = form.selected;
    }

    fn move_by(&mut self, forward: bool) {
        let len = self.options.len();
        if len == 0 {
            return;
        }
        self.highlight = Some(match (self.highlight, forward) {
            (None, true) => 0,
            (None, false) => len - 1,
            (Some(i), true) => (i + 1) % len,
            (Some(i), false) => (i + len - 1) % len,
        });
    }
}

impl Component for CatalogPicker {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => self.move_by(true),
            KeyCode::Up | KeyCode::Char('k') => self.move_by(false),
            KeyCode::Home | KeyCode::Char('g') => {
                if !self.options.is_empty() {
                    self.highlight = Some(0);
                }
            }
            KeyCode::End | KeyCode::Char('G') => {
                self.highlight = self.options.len().checked_sub(1);
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                let picked = self.highlight.and_then(|i| self.options.get(i));
                return Ok(picked.map(|name| Action::Core(Command::Select(name.clone()))));
            }
            _ => {}
        }
        Ok(None)
    }

    fn render(&self, frame: &mut Frame, area: Rect, view: &ViewModel) {
        let items: Vec<ListItem> = view
            .form
            .options
            .iter()
            .map(|name| ListItem::new(Span::styled(name.as_str(), theme::body())))
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .title(Span::styled(" Drinks ", theme::title_style()))
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(theme::border_for(self.focused)),
            )
            .highlight_style(theme::list_selected())
            .highlight_symbol("▸ ");

        let mut state = ListState::default().with_selected(self.highlight);
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn focused(&self) -> bool {
        self.focused
    }

    fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    fn focus_slot(&self) -> Option<Focus> {
        Some(Focus::Catalog)
    }

    fn id(&self) -> &'static str {
        "catalog"
    }
}
