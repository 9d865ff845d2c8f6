use std::time::Duration;

use crate::domain::{AutoCapitalize, Color, FieldType, KeyboardType, LineType};
use crate::field::CounterProps;

use super::style::{ContainerStyle, InputContainerStyle, InputStyle, TextStyle};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnderlineProps {
    pub line_type: LineType,
    pub width: f32,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LabelProps {
    pub base_size: f32,
    pub base_padding: f32,
    pub font_size: f32,
    pub active_font_size: f32,
    pub tint_color: Color,
    pub base_color: Color,
    pub error_color: Color,
    pub animation_duration: Duration,
    pub active: bool,
    pub focused: bool,
    pub errored: bool,
    pub restricted: bool,
    pub text: String,
}

impl LabelProps {
    /// Color a label renderer settles on for the current flags.
    pub fn resolved_color(&self) -> Color {
        if self.errored || self.restricted {
            self.error_color
        } else if self.focused {
            self.tint_color
        } else {
            self.base_color
        }
    }

    /// A floating label sits above the input once there is content or focus.
    pub fn is_floating(&self) -> bool {
        self.active || self.focused
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AffixKind {
    Prefix,
    Suffix,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AffixProps {
    pub kind: AffixKind,
    pub active: bool,
    pub focused: bool,
    pub font_size: f32,
    pub base_color: Color,
    pub animation_duration: Duration,
    pub text: String,
}

impl AffixProps {
    pub fn is_visible(&self) -> bool {
        self.active || self.focused
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessoryIcon {
    /// Text is hidden; pressing reveals it.
    Eye,
    /// Text is visible; pressing hides it.
    EyeOff,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AccessoryProps {
    pub icon: AccessoryIcon,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HelperProps {
    pub text: Option<String>,
    pub style: TextStyle,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InputProps {
    pub value: String,
    /// Only forwarded while focused so it never competes with the label.
    pub placeholder: Option<String>,
    pub keyboard: KeyboardType,
    pub auto_capitalize: AutoCapitalize,
    pub secure_text_entry: bool,
    pub editable: bool,
    pub multiline: bool,
    pub selection_color: Color,
    pub style: InputStyle,
}

/// Everything the leaf renderers need for one frame of a field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldView {
    pub field_type: FieldType,
    pub container: ContainerStyle,
    pub input_container: InputContainerStyle,
    pub underline: UnderlineProps,
    pub label: LabelProps,
    pub prefix: Option<AffixProps>,
    pub suffix: Option<AffixProps>,
    pub accessory: Option<AccessoryProps>,
    pub input: InputProps,
    pub error: HelperProps,
    pub helper: HelperProps,
    pub helper_row_height: f32,
    pub counter: CounterProps,
    pub default_visible: bool,
    pub restricted: bool,
    pub rtl: bool,
}
