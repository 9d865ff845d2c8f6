use anyhow::{Context, Result};

use crate::{
    domain::{FieldConfig, PlatformQuirks},
    field::{FieldController, HeadlessInput},
    motion::AnimationEngine,
};

use super::{options::PlaygroundOptions, runtime::App};

/// Hosts a single field in the terminal and returns its value on submit.
#[derive(Debug)]
pub struct Playground {
    config: FieldConfig,
    quirks: PlatformQuirks,
    title: Option<String>,
    options: PlaygroundOptions,
}

impl Playground {
    pub fn new(config: FieldConfig) -> Self {
        Self {
            config,
            quirks: PlatformQuirks::default(),
            title: None,
            options: PlaygroundOptions::default(),
        }
    }

    pub fn with_quirks(mut self, quirks: PlatformQuirks) -> Self {
        self.quirks = quirks;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_options(mut self, options: PlaygroundOptions) -> Self {
        self.options = options;
        self
    }

    pub fn run(self) -> Result<String> {
        let Playground {
            config,
            quirks,
            title,
            options,
        } = self;

        config.validate().context("invalid field configuration")?;
        let field = FieldController::new(config, HeadlessInput::new(), AnimationEngine::new())
            .with_quirks(quirks);
        let mut app = App::new(field, title, options);
        app.run()
    }
}
