mod field;
mod footer;
mod layout;

pub use field::{field_height, render_field, tui_color};
pub use footer::render_footer;
pub use layout::centered_rect;
