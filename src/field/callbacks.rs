use std::fmt;

use super::input::{ChangeEvent, ContentSize};

/// Host callbacks. Each one is optional; an absent callback is a no-op.
/// Callbacks run after the controller has applied the event to its own state.
#[derive(Default)]
pub struct FieldCallbacks {
    on_focus: Option<Box<dyn FnMut()>>,
    on_blur: Option<Box<dyn FnMut()>>,
    on_change: Option<Box<dyn FnMut(&ChangeEvent)>>,
    on_change_text: Option<Box<dyn FnMut(&str)>>,
    on_content_size_change: Option<Box<dyn FnMut(ContentSize)>>,
}

impl FieldCallbacks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_focus(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_focus = Some(Box::new(callback));
        self
    }

    pub fn on_blur(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_blur = Some(Box::new(callback));
        self
    }

    pub fn on_change(mut self, callback: impl FnMut(&ChangeEvent) + 'static) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    pub fn on_change_text(mut self, callback: impl FnMut(&str) + 'static) -> Self {
        self.on_change_text = Some(Box::new(callback));
        self
    }

    pub fn on_content_size_change(mut self, callback: impl FnMut(ContentSize) + 'static) -> Self {
        self.on_content_size_change = Some(Box::new(callback));
        self
    }

    pub(crate) fn emit_focus(&mut self) {
        if let Some(callback) = self.on_focus.as_mut() {
            callback();
        }
    }

    pub(crate) fn emit_blur(&mut self) {
        if let Some(callback) = self.on_blur.as_mut() {
            callback();
        }
    }

    pub(crate) fn emit_change(&mut self, event: &ChangeEvent) {
        if let Some(callback) = self.on_change.as_mut() {
            callback(event);
        }
    }

    pub(crate) fn emit_change_text(&mut self, text: &str) {
        if let Some(callback) = self.on_change_text.as_mut() {
            callback(text);
        }
    }

    pub(crate) fn emit_content_size_change(&mut self, size: ContentSize) {
        if let Some(callback) = self.on_content_size_change.as_mut() {
            callback(size);
        }
    }
}

impl fmt::Debug for FieldCallbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldCallbacks")
            .field("on_focus", &self.on_focus.is_some())
            .field("on_blur", &self.on_blur.is_some())
            .field("on_change", &self.on_change.is_some())
            .field("on_change_text", &self.on_change_text.is_some())
            .field("on_content_size_change", &self.on_content_size_change.is_some())
            .finish()
    }
}
