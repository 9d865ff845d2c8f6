pub(crate) mod input;
pub(crate) mod keymap;
mod options;
mod playground;
mod runtime;
mod status;
mod terminal;

pub use options::PlaygroundOptions;
pub use playground::Playground;
