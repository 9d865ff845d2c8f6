//! The text field controller and the pieces it is built from.

mod callbacks;
mod controller;
mod counter;
mod input;
mod resolve;
mod state;

pub use callbacks::FieldCallbacks;
pub use controller::FieldController;
pub use counter::{CounterDisplay, CounterProps, counter_display};
pub use input::{ChangeEvent, ContentSize, HeadlessInput, InputEvent, InputPrimitive};
pub use resolve::ValueSource;
pub use state::{ACTIVE_POSITION, ERRORED_POSITION, FieldState, REST_POSITION, focus_target};
