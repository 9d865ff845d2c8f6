use std::collections::VecDeque;

use crate::presentation::InputProps;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ContentSize {
    pub width: f32,
    pub height: f32,
}

/// Raw change notification from the primitive. `content_size` is filled in
/// by primitives that know their laid-out size at change time.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChangeEvent {
    pub text: String,
    pub content_size: Option<ContentSize>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    Focus,
    Blur,
    Change(ChangeEvent),
    ChangeText(String),
    ContentSizeChange(ContentSize),
}

/// The host's native text input. The controller drives it through these
/// calls and receives its events either synchronously via
/// [`InputPrimitive::poll_event`] or from the host through
/// `FieldController::handle_event`.
pub trait InputPrimitive {
    fn focus(&mut self);
    fn blur(&mut self);
    /// Empties the native buffer. Must not emit a text change.
    fn clear(&mut self);
    fn is_focused(&self) -> bool;

    /// Receives the props computed on every render.
    fn sync(&mut self, props: &InputProps) {
        let _ = props;
    }

    fn poll_event(&mut self) -> Option<InputEvent> {
        None
    }
}

/// In-memory primitive used by the terminal playground and tests. Edits are
/// only accepted while focused and editable, and every edit queues the same
/// `Change` + `ChangeText` pair a native input would emit.
#[derive(Debug, Clone, Default)]
pub struct HeadlessInput {
    focused: bool,
    editable: bool,
    multiline: bool,
    buffer: String,
    secure: bool,
    line_height: f32,
    events: VecDeque<InputEvent>,
}

impl HeadlessInput {
    pub fn new() -> Self {
        Self {
            editable: true,
            line_height: 24.0,
            ..Self::default()
        }
    }

    pub fn text(&self) -> &str {
        &self.buffer
    }

    pub fn is_secure(&self) -> bool {
        self.secure
    }

    pub fn is_editable(&self) -> bool {
        self.editable
    }

    pub fn type_str(&mut self, input: &str) -> bool {
        if !self.accepts_edits() {
            return false;
        }
        for ch in input.chars() {
            if ch == '\n' && !self.multiline {
                continue;
            }
            self.buffer.push(ch);
        }
        self.emit_edit();
        true
    }

    pub fn backspace(&mut self) -> bool {
        if !self.accepts_edits() || self.buffer.pop().is_none() {
            return false;
        }
        self.emit_edit();
        true
    }

    /// Replaces the whole buffer as if the user pasted over a selection.
    pub fn replace(&mut self, text: &str) -> bool {
        if !self.accepts_edits() {
            return false;
        }
        self.buffer = text.to_string();
        self.emit_edit();
        true
    }

    /// Reports a new laid-out height, as a native multiline input does after
    /// wrapping.
    pub fn report_content_height(&mut self, height: f32) {
        self.events.push_back(InputEvent::ContentSizeChange(ContentSize {
            width: 0.0,
            height,
        }));
    }

    pub fn pending_events(&self) -> usize {
        self.events.len()
    }

    fn accepts_edits(&self) -> bool {
        self.focused && self.editable
    }

    fn emit_edit(&mut self) {
        let lines = self.buffer.split('\n').count().max(1) as f32;
        self.events.push_back(InputEvent::Change(ChangeEvent {
            text: self.buffer.clone(),
            content_size: Some(ContentSize {
                width: 0.0,
                height: lines * self.line_height,
            }),
        }));
        self.events
            .push_back(InputEvent::ChangeText(self.buffer.clone()));
    }
}

impl InputPrimitive for HeadlessInput {
    fn focus(&mut self) {
        if !self.focused {
            self.focused = true;
            self.events.push_back(InputEvent::Focus);
        }
    }

    fn blur(&mut self) {
        if self.focused {
            self.focused = false;
            self.events.push_back(InputEvent::Blur);
        }
    }

    fn clear(&mut self) {
        self.buffer.clear();
    }

    fn is_focused(&self) -> bool {
        self.focused
    }

    fn sync(&mut self, props: &InputProps) {
        self.buffer.clone_from(&props.value);
        self.editable = props.editable;
        self.multiline = props.multiline;
        self.secure = props.secure_text_entry;
        self.line_height = props.style.line_height;
    }

    fn poll_event(&mut self) -> Option<InputEvent> {
        self.events.pop_front()
    }
}
