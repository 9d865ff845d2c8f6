//! Render-ready props derived from controller state, and the terminal
//! renderers that consume them.

mod components;
mod field_view;
mod props;
pub mod style;
mod view;

pub use components::{field_height, render_field, tui_color};
pub use field_view::{FieldSnapshot, build_view};
pub use props::{
    AccessoryIcon, AccessoryProps, AffixKind, AffixProps, FieldView, HelperProps, InputProps,
    LabelProps, UnderlineProps,
};
pub use style::{ContainerStyle, InputContainerStyle, InputStyle, TextAlign, TextStyle};
pub use view::{UiContext, draw};
