use std::time::Instant;

use anyhow::{Result, anyhow};
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use log::debug;

use crate::{
    domain::FieldConfig,
    field::{FieldController, HeadlessInput},
    presentation::{self, UiContext},
};

use super::{
    input::{EditKey, KeyAction, edit_key},
    keymap::{self, KeymapContext},
    options::PlaygroundOptions,
    status::StatusLine,
    terminal::TerminalGuard,
};

pub(crate) struct App {
    field: FieldController<HeadlessInput>,
    base_config: FieldConfig,
    title: Option<String>,
    options: PlaygroundOptions,
    status: StatusLine,
    sample_error: bool,
    should_quit: bool,
    result: Option<String>,
}

impl App {
    pub fn new(
        field: FieldController<HeadlessInput>,
        title: Option<String>,
        options: PlaygroundOptions,
    ) -> Self {
        let base_config = field.config().clone();
        Self {
            field,
            base_config,
            title,
            options,
            status: StatusLine::new(),
            sample_error: false,
            should_quit: false,
            result: None,
        }
    }

    pub fn run(&mut self) -> Result<String> {
        let mut terminal = TerminalGuard::new()?;
        self.field.mount();
        if self.options.focus_on_start {
            self.apply(KeyAction::Focus);
        }

        let mut last_tick = Instant::now();
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            let timeout = self.options.tick_rate.saturating_sub(last_tick.elapsed());
            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key) => self.handle_key(key),
                    Event::Paste(text) => self.handle_paste(&text),
                    Event::Resize(_, _) | Event::Mouse(_) => {}
                    Event::FocusGained | Event::FocusLost => {}
                }
            }
            let elapsed = last_tick.elapsed();
            if elapsed >= self.options.tick_rate {
                self.field.tick(elapsed);
                last_tick = Instant::now();
            }
        }
        self.field.unmount();

        self.result
            .take()
            .ok_or_else(|| anyhow!("field closed without submitting"))
    }

    pub(crate) fn draw(&self, frame: &mut ratatui::Frame<'_>) {
        let help = self
            .options
            .show_help
            .then(|| keymap::help_text(self.context()))
            .flatten();
        let view = self.field.view();
        presentation::draw(
            frame,
            UiContext {
                title: self.title.as_deref(),
                view: &view,
                status_message: self.status.message(),
                help: help.as_deref(),
            },
        );
    }

    pub(crate) fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if let Some(action) = keymap::classify_key(self.context(), &key) {
            self.apply(action);
            return;
        }
        let Some(edit) = edit_key(&key) else {
            return;
        };
        let input = self.field.input_mut();
        let accepted = match edit {
            EditKey::Insert(ch) => input.type_str(ch.encode_utf8(&mut [0; 4])),
            EditKey::Backspace => input.backspace(),
        };
        if accepted {
            self.field.pump();
        }
    }

    pub(crate) fn handle_paste(&mut self, text: &str) {
        if self.field.input_mut().type_str(text) {
            self.field.pump();
        }
    }

    pub(crate) fn apply(&mut self, action: KeyAction) {
        debug!("playground action {action:?}");
        match action {
            KeyAction::Focus => {
                self.field.focus();
                if self.field.is_focused() {
                    self.status.editing(&self.base_config.label);
                }
            }
            KeyAction::Blur => {
                self.field.blur();
                self.status.ready();
            }
            KeyAction::Clear => {
                self.field.clear();
                self.status.cleared();
            }
            KeyAction::TogglePassword => {
                self.field.toggle_password_visibility();
                self.status
                    .visibility(self.field.state().secure_text_entry());
            }
            KeyAction::ToggleError => {
                self.sample_error = !self.sample_error;
                let config = self.host_config();
                let config = if self.sample_error {
                    config.with_error(self.options.sample_error.clone())
                } else {
                    config
                };
                self.field.set_config(config);
                self.status.error_toggled(self.sample_error);
            }
            KeyAction::Submit => {
                let value = self.field.value().to_string();
                debug!("submitted '{value}'");
                self.result = Some(value);
                self.should_quit = true;
            }
            KeyAction::Quit => self.should_quit = true,
        }
    }

    #[cfg(test)]
    pub(crate) fn tick(&mut self, dt: std::time::Duration) {
        self.field.tick(dt);
    }

    #[cfg(test)]
    pub(crate) fn field(&self) -> &FieldController<HeadlessInput> {
        &self.field
    }

    #[cfg(test)]
    pub(crate) fn result(&self) -> Option<&str> {
        self.result.as_deref()
    }

    /// The props a controlled host would pass back: its value tracks what
    /// the user has typed so far.
    fn host_config(&self) -> FieldConfig {
        let mut config = self.base_config.clone();
        if config.value.is_some() {
            config.value = Some(self.field.state().text().to_string());
        }
        config
    }

    fn context(&self) -> KeymapContext {
        KeymapContext::for_focus(self.field.is_focused())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crossterm::event::{KeyCode, KeyModifiers};
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;
    use crate::domain::FieldType;
    use crate::motion::AnimationEngine;

    fn app(config: FieldConfig) -> App {
        let mut field = FieldController::new(config, HeadlessInput::new(), AnimationEngine::new());
        field.mount();
        App::new(field, Some("Demo".into()), PlaygroundOptions::default())
    }

    fn press(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
        app.handle_key(KeyEvent::new(code, modifiers));
    }

    fn type_text(app: &mut App, text: &str) {
        for ch in text.chars() {
            press(app, KeyCode::Char(ch), KeyModifiers::NONE);
        }
    }

    #[test]
    fn typing_requires_focus() {
        let mut app = app(FieldConfig::new("Name"));
        type_text(&mut app, "ignored");
        assert_eq!(app.field().value(), "");

        press(&mut app, KeyCode::Tab, KeyModifiers::NONE);
        type_text(&mut app, "Ada");
        press(&mut app, KeyCode::Backspace, KeyModifiers::NONE);
        assert_eq!(app.field().value(), "Ad");
    }

    #[test]
    fn enter_submits_value() {
        let mut app = app(FieldConfig::new("City").with_default_value("Berlin"));
        press(&mut app, KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(app.result(), Some("Berlin"));
    }

    #[test]
    fn error_toggle_round_trips() {
        let mut app = app(FieldConfig::new("Name"));
        press(&mut app, KeyCode::Char('e'), KeyModifiers::CONTROL);
        app.tick(Duration::from_millis(300));
        assert!(app.field().state().errored());
        press(&mut app, KeyCode::Char('e'), KeyModifiers::CONTROL);
        app.tick(Duration::from_millis(300));
        assert!(!app.field().state().errored());
    }

    #[test]
    fn error_toggle_keeps_edits_on_controlled_field() {
        let mut app = app(FieldConfig::new("Name").with_value("Ada"));
        press(&mut app, KeyCode::Tab, KeyModifiers::NONE);
        type_text(&mut app, "m");
        assert_eq!(app.field().value(), "Adam");

        press(&mut app, KeyCode::Char('e'), KeyModifiers::CONTROL);
        assert_eq!(app.field().value(), "Adam");
        press(&mut app, KeyCode::Char('e'), KeyModifiers::CONTROL);
        assert_eq!(app.field().value(), "Adam");
    }

    #[test]
    fn paste_inserts_while_focused() {
        let mut app = app(FieldConfig::new("Email").with_type(FieldType::Email));
        app.apply(KeyAction::Focus);
        app.handle_paste("a@b.com");
        assert_eq!(app.field().value(), "a@b.com");
    }

    #[test]
    fn draws_label_and_help() {
        let mut app = app(FieldConfig::new("Email").with_helper("We never share it"));
        app.apply(KeyAction::Focus);
        type_text(&mut app, "hi");
        let mut terminal = Terminal::new(TestBackend::new(60, 16)).expect("terminal");
        terminal.draw(|frame| app.draw(frame)).expect("draw");
        let screen = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>();
        assert!(screen.contains("Email"));
        assert!(screen.contains("hi"));
        assert!(screen.contains("We never share it"));
        assert!(screen.contains("Blur"));
        assert!(screen.contains("Status:"));
        assert!(screen.contains("[ok]"));
    }
}
