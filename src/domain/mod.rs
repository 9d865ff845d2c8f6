mod color;
mod config;
mod error;
mod field_type;
mod quirks;

pub use color::Color;
pub use config::{FieldConfig, InputAttributes, LineType, Metrics, Palette, TextTransform};
pub use error::ConfigError;
pub use field_type::{AutoCapitalize, FieldType, KeyboardPolicy, KeyboardType};
pub use quirks::{Platform, PlatformQuirks};
