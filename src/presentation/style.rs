//! Style fragments derived from field state. Each function takes only the
//! slice of state it needs so it can be checked on its own.

use crate::domain::{Color, FieldConfig, LineType, Platform, PlatformQuirks};
use crate::motion::interpolate;

use super::props::UnderlineProps;

/// Characters past the restriction before the underline turns red.
pub const RESTRICTION_GRACE: usize = 5;

const CONTAINER_MARGIN: f32 = 8.0;
const CONTAINER_RADIUS: f32 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub color: Color,
    pub opacity: f32,
    pub font_size: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputStyle {
    pub font_size: f32,
    pub line_height: f32,
    pub text_align: TextAlign,
    pub color: Color,
    pub height: f32,
    /// Vertical nudge for multiline inputs on iOS.
    pub top: f32,
    pub align_top: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputContainerStyle {
    pub padding_top: f32,
    pub padding_bottom: f32,
    pub padding_horizontal: f32,
    /// `None` lets the host size the container (multiline on the web).
    pub height: Option<f32>,
    pub clip: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContainerStyle {
    pub margin: f32,
    pub background: Color,
    pub corner_radius: f32,
    pub pointer_events: bool,
}

pub fn is_restricted_display(restriction: Option<usize>, count: usize) -> bool {
    restriction.is_some_and(|limit| limit + RESTRICTION_GRACE < count)
}

pub fn underline_style(position: f32, restricted: bool, config: &FieldConfig) -> UnderlineProps {
    let palette = &config.palette;
    let metrics = &config.metrics;
    if config.disabled {
        return UnderlineProps {
            line_type: config.disabled_line_type,
            width: metrics.disabled_line_width,
            color: palette.base_color,
        };
    }
    if restricted {
        return UnderlineProps {
            line_type: LineType::Solid,
            width: metrics.active_line_width,
            color: palette.error_color,
        };
    }
    UnderlineProps {
        line_type: LineType::Solid,
        width: interpolate(
            position,
            [
                metrics.active_line_width,
                metrics.line_width,
                metrics.active_line_width,
            ],
        ),
        color: interpolate(
            position,
            [palette.error_color, palette.base_color, palette.tint_color],
        ),
    }
}

pub fn error_text_style(position: f32, config: &FieldConfig) -> TextStyle {
    let size = config.metrics.helper_font_size;
    TextStyle {
        color: config.palette.error_color,
        opacity: interpolate(position, [1.0, 0.0, 0.0]),
        font_size: if config.helper.is_some() {
            size
        } else {
            interpolate(position, [size, 0.0, 0.0])
        },
    }
}

pub fn helper_text_style(position: f32, config: &FieldConfig) -> TextStyle {
    TextStyle {
        color: config.palette.base_color,
        opacity: interpolate(position, [0.0, 1.0, 1.0]),
        font_size: config.metrics.helper_font_size,
    }
}

pub fn text_align(quirks: &PlatformQuirks) -> TextAlign {
    if quirks.rtl {
        TextAlign::Right
    } else {
        TextAlign::Left
    }
}

/// Autogrow height, unless the host pinned a multiline height.
pub fn effective_content_height(config: &FieldConfig, content_height: f32) -> f32 {
    match config.input.height {
        Some(height) if config.input.multiline => height,
        _ => content_height,
    }
}

pub fn input_text_style(
    config: &FieldConfig,
    quirks: &PlatformQuirks,
    default_visible: bool,
    content_height: f32,
) -> InputStyle {
    let line_height = config.metrics.line_height();
    let multiline = config.input.multiline;
    let color = if config.disabled || default_visible {
        config.palette.base_color
    } else {
        config.palette.text_color
    };
    InputStyle {
        font_size: config.metrics.font_size,
        line_height,
        text_align: text_align(quirks),
        color,
        height: if multiline {
            line_height + effective_content_height(config, content_height)
        } else {
            line_height
        },
        top: if multiline && quirks.platform == Platform::Ios {
            -1.0
        } else {
            0.0
        },
        align_top: multiline && quirks.platform == Platform::Android,
    }
}

pub fn input_container_style(
    config: &FieldConfig,
    quirks: &PlatformQuirks,
    content_height: f32,
) -> InputContainerStyle {
    let metrics = &config.metrics;
    let chrome = metrics.label_height + metrics.input_container_padding;
    let height = if !config.input.multiline {
        Some(chrome + metrics.line_height())
    } else if quirks.platform == Platform::Web {
        None
    } else {
        Some(chrome + effective_content_height(config, content_height))
    };
    InputContainerStyle {
        padding_top: metrics.label_height,
        padding_bottom: metrics.input_container_padding,
        padding_horizontal: metrics.input_container_padding,
        height,
        clip: config.disabled,
    }
}

pub fn helper_row_height(config: &FieldConfig) -> f32 {
    let has_content = config.helper.is_some()
        || config.min.is_some()
        || config.counter_max().is_some()
        || config.has_error();
    if has_content {
        config.metrics.helper_font_size * 2.0
    } else {
        0.0
    }
}

pub fn container_style(config: &FieldConfig) -> ContainerStyle {
    ContainerStyle {
        margin: if config.no_margin { 0.0 } else { CONTAINER_MARGIN },
        background: config.palette.container_background_color,
        corner_radius: CONTAINER_RADIUS,
        pointer_events: config.is_interactive(),
    }
}
