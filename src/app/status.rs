#[derive(Debug, Clone)]
pub struct StatusLine {
    message: String,
}

pub const READY_STATUS: &str = "Ready. Press Tab to focus the field.";

impl Default for StatusLine {
    fn default() -> Self {
        Self {
            message: READY_STATUS.to_string(),
        }
    }
}

impl StatusLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ready(&mut self) {
        self.message = READY_STATUS.to_string();
    }

    pub fn editing(&mut self, label: &str) {
        self.message = format!("Editing {label}");
    }

    pub fn cleared(&mut self) {
        self.message = "Cleared".to_string();
    }

    pub fn error_toggled(&mut self, on: bool) {
        self.message = if on {
            "Error shown".to_string()
        } else {
            "Error cleared".to_string()
        };
    }

    pub fn visibility(&mut self, hidden: bool) {
        self.message = if hidden {
            "Password hidden".to_string()
        } else {
            "Password visible".to_string()
        };
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
