use std::{rc::Rc, time::Duration};

use log::{debug, trace};

use crate::domain::{FieldConfig, PlatformQuirks};
use crate::motion::{AnimationEngine, AnimationSpec, Easing};
use crate::presentation::{FieldSnapshot, FieldView, build_view};

use super::callbacks::FieldCallbacks;
use super::input::{ChangeEvent, ContentSize, HeadlessInput, InputEvent, InputPrimitive};
use super::resolve::ValueSource;
use super::state::{FieldState, Lifecycle, focus_target};

/// Owns one text field: its state, its input primitive and its animation.
///
/// Hosts drive it through the imperative operations and feed it primitive
/// events with [`FieldController::handle_event`] (or let it drain the
/// primitive's own queue with [`FieldController::pump`]).
#[derive(Debug)]
pub struct FieldController<I: InputPrimitive = HeadlessInput> {
    config: FieldConfig,
    quirks: PlatformQuirks,
    callbacks: FieldCallbacks,
    engine: AnimationEngine,
    input: I,
    state: FieldState,
}

impl<I: InputPrimitive> FieldController<I> {
    pub fn new(config: FieldConfig, input: I, engine: AnimationEngine) -> Self {
        let state = FieldState::from_config(&config);
        let mut controller = Self {
            config,
            quirks: PlatformQuirks::default(),
            callbacks: FieldCallbacks::default(),
            engine,
            input,
            state,
        };
        controller.sync_input();
        controller
    }

    pub fn with_quirks(mut self, quirks: PlatformQuirks) -> Self {
        self.quirks = quirks;
        self.sync_input();
        self
    }

    pub fn with_callbacks(mut self, callbacks: FieldCallbacks) -> Self {
        self.callbacks = callbacks;
        self
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn quirks(&self) -> &PlatformQuirks {
        &self.quirks
    }

    pub fn state(&self) -> &FieldState {
        &self.state
    }

    pub fn engine(&self) -> &AnimationEngine {
        &self.engine
    }

    pub fn input(&self) -> &I {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }

    /// Marks the field live. Password fields start hidden. Calling this
    /// again has no effect.
    pub fn mount(&mut self) {
        let first = {
            let mut errors = self.state.errors.borrow_mut();
            let first = errors.lifecycle == Lifecycle::Created;
            if first {
                errors.lifecycle = Lifecycle::Mounted;
            }
            first
        };
        if first && self.config.keyboard_policy().secure_by_default {
            self.toggle_password_visibility();
        }
    }

    /// After this, pending animation completions no longer touch the state.
    pub fn unmount(&mut self) {
        self.state.errors.borrow_mut().lifecycle = Lifecycle::Unmounted;
        debug!("field '{}' unmounted", self.config.label);
    }

    pub fn is_mounted(&self) -> bool {
        self.state.errors.borrow().lifecycle == Lifecycle::Mounted
    }

    pub fn focus(&mut self) {
        if !self.config.is_interactive() {
            trace!("focus ignored on non-interactive field '{}'", self.config.label);
            return;
        }
        self.input.focus();
        self.pump();
    }

    pub fn blur(&mut self) {
        self.input.blur();
        self.pump();
    }

    /// Empties the field and reports the empty text, since the primitive
    /// stays silent on a programmatic clear.
    pub fn clear(&mut self) {
        self.input.clear();
        self.on_change_text(String::new());
        self.sync_input();
    }

    /// The resolved value: the buffer once the field has been focused or is
    /// controlled, otherwise the default.
    pub fn value(&self) -> &str {
        ValueSource::resolve(&self.config, self.state.received_focus, &self.state.text).raw()
    }

    pub fn is_focused(&self) -> bool {
        self.input.is_focused()
    }

    pub fn is_restricted(&self) -> bool {
        self.config
            .character_restriction
            .is_some_and(|limit| self.state.text.chars().count() > limit)
    }

    pub fn toggle_password_visibility(&mut self) {
        self.state.secure_text_entry = !self.state.secure_text_entry;
        debug!("secure text entry -> {}", self.state.secure_text_entry);
        self.sync_input();
    }

    /// Applies new host props. A supplied `value` replaces the buffer; error
    /// styling follows once the resulting transition completes.
    pub fn set_config(&mut self, config: FieldConfig) {
        if let Some(value) = &config.value {
            self.state.text.clone_from(value);
        }
        {
            let mut errors = self.state.errors.borrow_mut();
            let latest = config.error_message().map(str::to_string);
            if let Some(message) = &latest
                && errors.message.as_ref() != Some(message)
            {
                errors.message = Some(message.clone());
            }
            errors.latest = latest;
        }
        self.config = config;
        self.sync_animation();
        self.sync_input();
    }

    /// Dispatches one primitive event.
    pub fn handle_event(&mut self, event: InputEvent) {
        trace!("field '{}' event {event:?}", self.config.label);
        match event {
            InputEvent::Focus => self.on_focus(),
            InputEvent::Blur => self.on_blur(),
            InputEvent::Change(change) => self.on_change(change),
            InputEvent::ChangeText(raw) => self.on_change_text(raw),
            InputEvent::ContentSizeChange(size) => self.on_content_size_change(size),
        }
        self.sync_input();
    }

    /// Drains events the primitive queued. Returns how many were handled.
    pub fn pump(&mut self) -> usize {
        let mut handled = 0;
        while let Some(event) = self.input.poll_event() {
            self.handle_event(event);
            handled += 1;
        }
        handled
    }

    /// Advances the shared animation engine.
    pub fn tick(&mut self, dt: Duration) -> usize {
        self.engine.tick(dt)
    }

    pub fn view(&self) -> FieldView {
        let errors = self.state.errors.borrow();
        let snapshot = FieldSnapshot {
            text: &self.state.text,
            focused: self.state.focused,
            received_focus: self.state.received_focus,
            errored: errors.errored,
            error: errors.message.as_deref(),
            position: self.state.position.get(),
            content_height: self.state.content_height,
            secure_text_entry: self.state.secure_text_entry,
        };
        build_view(snapshot, &self.config, &self.quirks)
    }

    fn on_focus(&mut self) {
        if self.config.input.clear_text_on_focus {
            self.clear();
        }
        self.state.focused = true;
        self.state.received_focus = true;
        self.sync_animation();
        self.callbacks.emit_focus();
    }

    fn on_blur(&mut self) {
        self.state.focused = false;
        self.sync_animation();
        self.callbacks.emit_blur();
    }

    fn on_change_text(&mut self, raw: String) {
        let text = match &self.config.parse {
            Some(parse) => parse(&raw),
            None => raw,
        };
        self.state.text = text;
        self.callbacks.emit_change_text(&self.state.text);
    }

    fn on_change(&mut self, event: ChangeEvent) {
        self.callbacks.emit_change(&event);
        if self.quirks.multiline_autogrow_gap
            && self.config.input.multiline
            && let Some(size) = event.content_size
        {
            self.on_content_size_change(size);
        }
    }

    fn on_content_size_change(&mut self, size: ContentSize) {
        let line_height = self.config.metrics.line_height();
        let reported = size.height.ceil() + self.quirks.content_height_offset();
        self.state.content_height = line_height.max(reported);
        self.callbacks.emit_content_size_change(size);
    }

    /// Starts a transition when focus or error presence moved the target.
    fn sync_animation(&mut self) {
        let target = focus_target(self.config.has_error(), self.state.focused);
        if target == self.state.target {
            return;
        }
        debug!(
            "field '{}' animating {} -> {target}",
            self.config.label,
            self.state.position.get()
        );
        self.state.target = target;

        let errors = Rc::downgrade(&self.state.errors);
        let spec = AnimationSpec::tween(self.config.animation_duration(), Easing::EaseInOut);
        self.engine
            .timing(&self.state.position, target, spec, move |result| {
                if !result.finished {
                    return;
                }
                let Some(errors) = errors.upgrade() else {
                    return;
                };
                let mut errors = errors.borrow_mut();
                if errors.is_live() {
                    errors.reconcile();
                }
            });
    }

    fn sync_input(&mut self) {
        let view = self.view();
        self.input.sync(&view.input);
    }
}
