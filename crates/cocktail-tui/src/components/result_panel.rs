//! Status and result region: busy throbber, error line, or drink card.

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use cocktail_core::{DrinkCard, ViewModel};

use crate::action::{Action, Focus};
use crate::component::Component;
use crate::theme;

const LABEL_WIDTH: usize = 12;
const PAGE: usize = 10;

#[derive(Default)]
pub struct ResultPanel {
    focused: bool,
    throbber_state: throbber_widgets_tui::ThrobberState,
    /// First card line shown at the top of the panel.
    scroll_offset: usize,
    /// Card currently on screen; a different one starts back at the top.
    card: Option<DrinkCard>,
}

impl ResultPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Follow the controller's view. Scrolling restarts whenever the shown
    /// card changes.
    pub fn sync(&mut self, view: &ViewModel) {
        if self.card != view.card {
            self.card.clone_from(&view.card);
            self.scroll_offset = 0;
        }
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    fn max_offset(&self) -> usize {
        self.card
            .as_ref()
            .map_or(0, |card| card_lines(card).len().saturating_sub(1))
    }
}

fn field<'a>(label: &'a str, value: &'a str) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{label:<LABEL_WIDTH$}"), theme::field_label()),
        Span::styled(value, theme::body()),
    ])
}

fn card_lines(card: &DrinkCard) -> Vec<Line<'_>> {
    let mut lines = vec![
        Line::from(Span::styled(card.name.as_str(), theme::title_style())),
        Line::default(),
        field("Image", card.thumbnail_url.as_deref().unwrap_or("-")),
        field("Category", &card.category),
        field("Glass", &card.glass),
        field("Alcoholic", &card.alcoholic),
        Line::default(),
        Line::from(Span::styled("Instructions", theme::section_heading())),
        Line::from(Span::styled(card.instructions.as_str(), theme::body())),
        Line::default(),
        Line::from(Span::styled("Ingredients", theme::section_heading())),
    ];

    lines.extend(
        card.ingredients
            .iter()
            .map(|item| Line::from(Span::styled(format!("  • {item}"), theme::body()))),
    );
    lines
}

impl Component for ResultPanel {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let max = self.max_offset();
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                self.scroll_offset = (self.scroll_offset + 1).min(max);
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
            }
            KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.scroll_offset = (self.scroll_offset + PAGE).min(max);
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.scroll_offset = self.scroll_offset.saturating_sub(PAGE);
            }
            KeyCode::PageDown => self.scroll_offset = (self.scroll_offset + PAGE).min(max),
            KeyCode::PageUp => self.scroll_offset = self.scroll_offset.saturating_sub(PAGE),
            KeyCode::Char('g') | KeyCode::Home => self.scroll_offset = 0,
            KeyCode::Char('G') | KeyCode::End => self.scroll_offset = max,
            _ => {}
        }
        Ok(None)
    }

    fn update(&mut self, action: &Action) -> Result<Option<Action>> {
        if matches!(action, Action::Tick) {
            self.throbber_state.calc_next();
        }
        Ok(None)
    }

    fn render(&self, frame: &mut Frame, area: Rect, view: &ViewModel) {
        let block = Block::default()
            .title(Span::styled(" Recipe ", theme::title_style()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::border_for(self.focused));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if view.busy {
            let [row, _] = Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(inner);
            let throbber = throbber_widgets_tui::Throbber::default()
                .label(" Looking up drink...")
                .style(Style::default().fg(theme::NEON_CYAN))
                .throbber_style(Style::default().fg(theme::ELECTRIC_PURPLE));
            frame.render_stateful_widget(throbber, row, &mut self.throbber_state.clone());
            return;
        }

        let mut scroll = 0;
        let lines = if let Some(ref message) = view.error {
            vec![Line::from(Span::styled(message.as_str(), theme::error_text()))]
        } else if let Some(ref card) = view.card {
            scroll = u16::try_from(self.scroll_offset).unwrap_or(u16::MAX);
            card_lines(card)
        } else {
            vec![Line::from(Span::styled(
                "Type a drink name and press Enter, or pick one from the list.",
                theme::key_hint(),
            ))]
        };

        frame.render_widget(
            Paragraph::new(lines)
                .wrap(Wrap { trim: false })
                .scroll((scroll, 0)),
            inner,
        );
    }

    fn focused(&self) -> bool {
        self.focused
    }

    fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    fn focus_slot(&self) -> Option<Focus> {
        Some(Focus::Recipe)
    }

    fn id(&self) -> &'static str {
        "result"
    }
}
