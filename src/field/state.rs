use std::{cell::RefCell, rc::Rc};

use crate::{domain::FieldConfig, motion::AnimatedValue};

pub const ERRORED_POSITION: f32 = -1.0;
pub const REST_POSITION: f32 = 0.0;
pub const ACTIVE_POSITION: f32 = 1.0;

/// Animation target for a focus/error combination. Errors win over focus.
pub fn focus_target(has_error: bool, focused: bool) -> f32 {
    if has_error {
        ERRORED_POSITION
    } else if focused {
        ACTIVE_POSITION
    } else {
        REST_POSITION
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Lifecycle {
    Created,
    Mounted,
    Unmounted,
}

/// The slice of field state that animation completions write to. It is the
/// only part shared outside the controller, and only through a `Weak`.
#[derive(Debug)]
pub(crate) struct ErrorTrack {
    /// Message currently shown in the helper row.
    pub(crate) message: Option<String>,
    pub(crate) errored: bool,
    /// Most recent error supplied by the host.
    pub(crate) latest: Option<String>,
    pub(crate) lifecycle: Lifecycle,
}

impl ErrorTrack {
    fn new(error: Option<&str>) -> Self {
        let error = error.map(str::to_string);
        Self {
            errored: error.is_some(),
            message: error.clone(),
            latest: error,
            lifecycle: Lifecycle::Created,
        }
    }

    pub(crate) fn is_live(&self) -> bool {
        self.lifecycle != Lifecycle::Unmounted
    }

    /// Settle on whatever error is current now; earlier values that were
    /// superseded mid-animation are never applied.
    pub(crate) fn reconcile(&mut self) {
        self.errored = self.latest.is_some();
        self.message.clone_from(&self.latest);
    }
}

#[derive(Debug)]
pub struct FieldState {
    pub(crate) text: String,
    pub(crate) focused: bool,
    pub(crate) received_focus: bool,
    pub(crate) content_height: f32,
    pub(crate) secure_text_entry: bool,
    pub(crate) position: AnimatedValue,
    /// Target of the most recently started transition (or the mount value).
    pub(crate) target: f32,
    pub(crate) errors: Rc<RefCell<ErrorTrack>>,
}

impl FieldState {
    pub(crate) fn from_config(config: &FieldConfig) -> Self {
        let error = config.error_message();
        let target = focus_target(error.is_some(), false);
        Self {
            text: config.value.clone().unwrap_or_default(),
            focused: false,
            received_focus: false,
            content_height: config.metrics.line_height(),
            secure_text_entry: false,
            position: AnimatedValue::new(target),
            target,
            errors: Rc::new(RefCell::new(ErrorTrack::new(error))),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn focused(&self) -> bool {
        self.focused
    }

    pub fn received_focus(&self) -> bool {
        self.received_focus
    }

    pub fn content_height(&self) -> f32 {
        self.content_height
    }

    pub fn secure_text_entry(&self) -> bool {
        self.secure_text_entry
    }

    pub fn errored(&self) -> bool {
        self.errors.borrow().errored
    }

    pub fn error(&self) -> Option<String> {
        self.errors.borrow().message.clone()
    }

    pub fn animation_position(&self) -> f32 {
        self.position.get()
    }

    pub fn animation_target(&self) -> f32 {
        self.target
    }

    pub fn is_animating(&self) -> bool {
        self.position.is_animating()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_table() {
        assert_eq!(focus_target(false, false), REST_POSITION);
        assert_eq!(focus_target(false, true), ACTIVE_POSITION);
        assert_eq!(focus_target(true, false), ERRORED_POSITION);
        assert_eq!(focus_target(true, true), ERRORED_POSITION);
    }

    #[test]
    fn mount_state_reflects_initial_error() {
        let config = FieldConfig::new("Name").with_error("Required");
        let state = FieldState::from_config(&config);
        assert!(state.errored());
        assert_eq!(state.animation_position(), ERRORED_POSITION);
        assert_eq!(state.error().as_deref(), Some("Required"));
        assert!(!state.is_animating());
    }

    #[test]
    fn mount_state_seeds_text_from_controlled_value() {
        let config = FieldConfig::new("Email").with_value("a@b.com");
        let state = FieldState::from_config(&config);
        assert_eq!(state.text(), "a@b.com");
        assert_eq!(state.content_height(), 24.0);
        assert!(!state.secure_text_entry());
    }

    #[test]
    fn reconcile_takes_latest_error() {
        let mut track = ErrorTrack::new(None);
        track.latest = Some("first".into());
        track.latest = Some("second".into());
        track.reconcile();
        assert!(track.errored);
        assert_eq!(track.message.as_deref(), Some("second"));
    }
}
