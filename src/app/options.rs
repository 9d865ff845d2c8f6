use std::time::Duration;

/// Knobs for the interactive playground.
#[derive(Debug, Clone)]
pub struct PlaygroundOptions {
    /// How long the loop waits for input before advancing animations.
    pub tick_rate: Duration,
    pub show_help: bool,
    /// Message used by the error toggle.
    pub sample_error: String,
    pub focus_on_start: bool,
}

impl Default for PlaygroundOptions {
    fn default() -> Self {
        Self {
            tick_rate: Duration::from_millis(16),
            show_help: true,
            sample_error: "This field has an error".to_string(),
            focus_on_start: false,
        }
    }
}

impl PlaygroundOptions {
    pub fn with_tick_rate(mut self, tick_rate: Duration) -> Self {
        self.tick_rate = tick_rate;
        self
    }

    pub fn with_help(mut self, show: bool) -> Self {
        self.show_help = show;
        self
    }

    pub fn with_sample_error(mut self, message: impl Into<String>) -> Self {
        self.sample_error = message.into();
        self
    }

    pub fn with_focus_on_start(mut self, focus: bool) -> Self {
        self.focus_on_start = focus;
        self
    }
}
