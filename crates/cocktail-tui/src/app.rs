//! The lookup screen: key routing, focus between the three panes, and
//! effect handling for the controller.
//!
//! The [`Controller`] lives here and is only touched from the loop. Lookups
//! run on spawned tasks and report back as
//! [`Command::LookupCompleted`] through the action channel.

use std::sync::Arc;

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};
use tokio::sync::mpsc;
use tracing::{debug, info};

use cocktail_core::{Command, Controller, DrinkQuery, Effect, LookupClient};

use crate::action::{Action, Focus};
use crate::component::Component;
use crate::components::{CatalogPicker, NameInput, ResultPanel};
use crate::event::{Event, EventReader, Rates};
use crate::theme;
use crate::tui::Tui;

/// Top-level application state and event loop.
pub struct App {
    controller: Controller,
    lookup: Arc<LookupClient>,
    name_input: NameInput,
    catalog: CatalogPicker,
    result_panel: ResultPanel,
    focus: Focus,
    running: bool,
    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,
}

impl App {
    pub fn new(controller: Controller, lookup: LookupClient) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();

        let mut app = Self {
            controller,
            lookup: Arc::new(lookup),
            name_input: NameInput::new(),
            catalog: CatalogPicker::new(),
            result_panel: ResultPanel::new(),
            focus: Focus::default(),
            running: true,
            action_tx,
            action_rx,
        };
        app.sync_components();
        app.set_focus(Focus::NameInput);
        app
    }

    /// Run the main event loop.
    pub async fn run(&mut self) -> Result<()> {
        let mut tui = Tui::new()?;
        tui.enter()?;

        let mut events = EventReader::new(Rates::default());

        info!("lookup screen started");

        while self.running {
            let Some(event) = events.next().await else {
                break;
            };

            match event {
                Event::Key(key) => {
                    if let Some(action) = self.handle_key_event(key)? {
                        self.action_tx.send(action)?;
                    }
                }
                Event::Resize(w, h) => {
                    debug!(width = w, height = h, "terminal resized");
                    self.action_tx.send(Action::Render)?;
                }
                Event::Tick => self.action_tx.send(Action::Tick)?,
                Event::Render => self.action_tx.send(Action::Render)?,
            }

            while let Ok(action) = self.action_rx.try_recv() {
                self.process_action(&action)?;

                if let Action::Render = action {
                    tui.draw(|frame| self.render(frame))?;
                }
            }
        }

        events.stop();
        info!("lookup screen closed");
        Ok(())
    }

    /// Global keys first, then the focused component.
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        match (key.modifiers, key.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => return Ok(Some(Action::Quit)),
            (KeyModifiers::CONTROL, KeyCode::Char('r')) | (_, KeyCode::Esc) => {
                return Ok(Some(Action::Core(Command::Reset)));
            }
            (_, KeyCode::Tab | KeyCode::BackTab) => return Ok(Some(Action::FocusNext)),
            _ => {}
        }

        match self.focus {
            Focus::NameInput => self.name_input.handle_key_event(key),
            Focus::Catalog => self.catalog.handle_key_event(key),
            Focus::Recipe => self.result_panel.handle_key_event(key),
        }
    }

    fn process_action(&mut self, action: &Action) -> Result<()> {
        if !matches!(action, Action::Tick | Action::Render) {
            debug!(%action, "processing action");
        }

        match action {
            Action::Quit => self.running = false,
            Action::Render => {}
            Action::Tick => {
                let mut follow_ups = Vec::new();
                for component in self.components_mut() {
                    if let Some(next) = component.update(action)? {
                        follow_ups.push(next);
                    }
                }
                for next in follow_ups {
                    self.action_tx.send(next)?;
                }
            }
            Action::FocusNext => self.set_focus(self.focus.next()),
            Action::Focus(target) => self.set_focus(*target),
            Action::Core(command) => self.dispatch(command.clone())?,
        }
        Ok(())
    }

    /// Feed one command to the controller and carry out its effects.
    fn dispatch(&mut self, command: Command) -> Result<()> {
        let effects = self.controller.update(command);
        self.sync_components();

        for effect in effects {
            match effect {
                Effect::Lookup(query) => self.spawn_lookup(query),
                Effect::FocusNameInput => self.action_tx.send(Action::Focus(Focus::NameInput))?,
            }
        }
        Ok(())
    }

    fn spawn_lookup(&self, query: DrinkQuery) {
        let client = Arc::clone(&self.lookup);
        let tx = self.action_tx.clone();
        tokio::spawn(async move {
            let outcome = client.lookup(&query).await;
            if tx
                .send(Action::Core(Command::LookupCompleted(outcome)))
                .is_err()
            {
                debug!(name = %query, "lookup finished after shutdown");
            }
        });
    }

    fn sync_components(&mut self) {
        let view = self.controller.view_model();
        self.name_input.sync(&view.form.name);
        self.catalog.sync(&view.form);
        self.result_panel.sync(&view);
    }

    fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
        for component in self.components_mut() {
            let focused = component.focus_slot() == Some(focus);
            if focused && !component.focused() {
                debug!(component = component.id(), "focus");
            }
            component.set_focused(focused);
        }
    }

    fn components_mut(&mut self) -> [&mut dyn Component; 3] {
        [&mut self.name_input, &mut self.catalog, &mut self.result_panel]
    }

    // ── Rendering ────────────────────────────────────────────────────

    fn render(&self, frame: &mut Frame) {
        let view = self.controller.view_model();

        let [title, input, body, status] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(1),
        ])
        .areas(frame.area());
        let [list, panel] =
            Layout::horizontal([Constraint::Length(24), Constraint::Min(20)]).areas(body);

        frame.render_widget(
            Paragraph::new(Span::styled(" Cocktail Lookup", theme::title_style())),
            title,
        );
        self.catalog.render(frame, list, &view);
        self.result_panel.render(frame, panel, &view);
        self.name_input.render(frame, input, &view);
        Self::render_status_bar(frame, status);
    }

    fn render_status_bar(frame: &mut Frame, area: Rect) {
        let hints = [
            ("Enter", "search/pick"),
            ("Tab", "switch"),
            ("PgUp/PgDn", "scroll recipe"),
            ("Esc", "clear"),
            ("Ctrl+C", "quit"),
        ];
        let spans: Vec<Span> = hints
            .iter()
            .flat_map(|(key, what)| {
                [
                    Span::styled(format!(" {key}"), theme::key_hint_key()),
                    Span::styled(format!(" {what} "), theme::key_hint()),
                ]
            })
            .collect();
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use cocktail_core::{
        Alcoholic, Catalog, DrinkRecord, Ingredient, LookupConfig, LookupOutcome, ViewState,
    };
    use pretty_assertions::assert_eq;
    use ratatui::{Terminal, backend::TestBackend, buffer::Cell};
    use url::Url;

    fn app() -> App {
        let config = LookupConfig::new(Url::parse("http://127.0.0.1:9/").unwrap());
        let lookup = LookupClient::from_config(&config).unwrap();
        App::new(Controller::new(Catalog::default()), lookup)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    /// Route a key through the app the way the event loop does.
    fn press(app: &mut App, event: KeyEvent) {
        if let Some(action) = app.handle_key_event(event).unwrap() {
            app.process_action(&action).unwrap();
        }
    }

    fn screen(app: &App) -> String {
        screen_sized(app, 100, 30)
    }

    fn screen_sized(app: &App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| app.render(frame)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(Cell::symbol)
            .collect()
    }

    fn margarita() -> DrinkRecord {
        DrinkRecord {
            name: "Margarita".into(),
            thumbnail_url: Some("https://example.test/margarita.jpg".into()),
            category: "Ordinary Drink".into(),
            glass: "Cocktail glass".into(),
            alcoholic: Some(Alcoholic::Alcoholic),
            instructions: "Shake and strain.".into(),
            ingredients: vec![Ingredient::new("Tequila", "2 oz"), Ingredient::new("Lime", "")],
        }
    }

    #[test]
    fn global_keys() {
        let mut app = app();
        assert_eq!(app.handle_key_event(ctrl('c')).unwrap(), Some(Action::Quit));
        assert_eq!(
            app.handle_key_event(ctrl('r')).unwrap(),
            Some(Action::Core(Command::Reset))
        );
        assert_eq!(
            app.handle_key_event(key(KeyCode::Esc)).unwrap(),
            Some(Action::Core(Command::Reset))
        );
        assert_eq!(
            app.handle_key_event(key(KeyCode::Tab)).unwrap(),
            Some(Action::FocusNext)
        );
    }

    #[test]
    fn typing_updates_controller_form() {
        let mut app = app();
        for c in "Zombie".chars() {
            press(&mut app, key(KeyCode::Char(c)));
        }
        assert_eq!(app.controller.form().name, "Zombie");
        assert!(screen(&app).contains("Zombie"));
    }

    #[test]
    fn picking_from_catalog_fills_name_field() {
        let mut app = app();
        press(&mut app, key(KeyCode::Tab));
        assert_eq!(app.focus, Focus::Catalog);

        press(&mut app, key(KeyCode::Down));
        press(&mut app, key(KeyCode::Down));
        press(&mut app, key(KeyCode::Enter));

        assert_eq!(app.controller.form().name, "Martini");
        assert_eq!(app.name_input.value(), "Martini");
        assert_eq!(app.controller.view(), &ViewState::Idle);
    }

    #[test]
    fn blank_submit_shows_error_and_refocuses() {
        let mut app = app();
        press(&mut app, key(KeyCode::Tab));
        press(&mut app, key(KeyCode::Tab));
        press(&mut app, key(KeyCode::Tab));
        assert_eq!(app.focus, Focus::NameInput);
        press(&mut app, key(KeyCode::Char(' ')));
        press(&mut app, key(KeyCode::Enter));

        assert!(screen(&app).contains("Please enter a drink name."));
        assert_eq!(app.action_rx.try_recv().unwrap(), Action::Focus(Focus::NameInput));
    }

    #[test]
    fn result_renders_drink_card() {
        let mut app = app();
        app.process_action(&Action::Core(Command::LookupCompleted(LookupOutcome::Found(
            margarita(),
        ))))
        .unwrap();

        let text = screen(&app);
        assert!(text.contains("Ordinary Drink"));
        assert!(text.contains("Cocktail glass"));
        assert!(text.contains("Tequila 2 oz"));
        assert!(text.contains("• Lime"));
        assert!(text.contains("Shake and strain."));
    }

    #[test]
    fn long_recipe_scrolls_to_last_ingredient() {
        let mut app = app();
        let mut record = margarita();
        record.ingredients = (1..=15)
            .map(|n| Ingredient::new(format!("Item{n:02}"), "1 oz"))
            .collect();
        app.process_action(&Action::Core(Command::LookupCompleted(LookupOutcome::Found(
            record,
        ))))
        .unwrap();

        let before = screen_sized(&app, 100, 24);
        assert!(before.contains("Item01 1 oz"));
        assert!(!before.contains("Item15 1 oz"));

        press(&mut app, key(KeyCode::Tab));
        press(&mut app, key(KeyCode::Tab));
        assert_eq!(app.focus, Focus::Recipe);
        press(&mut app, key(KeyCode::PageDown));

        let after = screen_sized(&app, 100, 24);
        assert!(after.contains("Item15 1 oz"));

        // A fresh result starts from the top again.
        app.process_action(&Action::Core(Command::LookupCompleted(LookupOutcome::Found(
            margarita(),
        ))))
        .unwrap();
        assert_eq!(app.result_panel.scroll_offset(), 0);
    }

    #[test]
    fn reset_clears_everything() {
        let mut app = app();
        press(&mut app, key(KeyCode::Char('X')));
        app.process_action(&Action::Core(Command::LookupCompleted(LookupOutcome::Found(
            margarita(),
        ))))
        .unwrap();

        press(&mut app, key(KeyCode::Esc));

        assert_eq!(app.name_input.value(), "");
        assert_eq!(app.catalog.highlight(), None);
        assert_eq!(app.controller.view(), &ViewState::Idle);
        assert!(!screen(&app).contains("Ingredients"));
    }

    #[tokio::test]
    async fn valid_submit_shows_busy_indicator() {
        let mut app = app();
        for c in "Negroni".chars() {
            press(&mut app, key(KeyCode::Char(c)));
        }
        press(&mut app, key(KeyCode::Enter));

        assert_eq!(app.controller.view(), &ViewState::Loading);
        assert!(screen(&app).contains("Looking up drink..."));
    }
}
