#![deny(rust_2018_idioms)]

mod app;
pub mod domain;
pub mod field;
pub mod io;
pub mod motion;
pub mod presentation;

pub use app::{Playground, PlaygroundOptions};
pub use domain::{FieldConfig, FieldType, PlatformQuirks};
pub use field::{FieldCallbacks, FieldController, HeadlessInput, InputPrimitive};
pub use motion::AnimationEngine;

pub mod prelude {
    pub use super::{
        AnimationEngine, FieldCallbacks, FieldConfig, FieldController, FieldType, HeadlessInput,
        InputPrimitive, Playground, PlaygroundOptions, PlatformQuirks,
    };
}
