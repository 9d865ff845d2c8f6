use crate::domain::{FieldConfig, FieldType, PlatformQuirks};
use crate::field::{CounterProps, ValueSource};

use super::props::{
    AccessoryIcon, AccessoryProps, AffixKind, AffixProps, FieldView, HelperProps, InputProps,
    LabelProps,
};
use super::style;

/// Controller state a render depends on.
#[derive(Debug, Clone, Copy)]
pub struct FieldSnapshot<'a> {
    pub text: &'a str,
    pub focused: bool,
    pub received_focus: bool,
    pub errored: bool,
    pub error: Option<&'a str>,
    pub position: f32,
    pub content_height: f32,
    pub secure_text_entry: bool,
}

pub fn build_view(
    snapshot: FieldSnapshot<'_>,
    config: &FieldConfig,
    quirks: &PlatformQuirks,
) -> FieldView {
    let source = ValueSource::resolve(config, snapshot.received_focus, snapshot.text);
    let default_visible = source.is_default();
    let value = source.display(config);

    let active = !value.is_empty();
    let count = value.chars().count();
    let restricted = style::is_restricted_display(config.character_restriction, count);
    let palette = &config.palette;
    let metrics = &config.metrics;
    let duration = config.animation_duration();

    let affix = |kind: AffixKind, text: &Option<String>| {
        text.as_ref().map(|text| AffixProps {
            kind,
            active,
            focused: snapshot.focused,
            font_size: metrics.font_size,
            base_color: palette.base_color,
            animation_duration: duration,
            text: text.clone(),
        })
    };

    let accessory = (config.field_type == FieldType::Password).then(|| AccessoryProps {
        icon: if snapshot.secure_text_entry {
            AccessoryIcon::Eye
        } else {
            AccessoryIcon::EyeOff
        },
        color: palette.base_color,
    });

    let policy = config.keyboard_policy();
    let input = InputProps {
        placeholder: if snapshot.focused {
            config.input.placeholder.clone()
        } else {
            None
        },
        keyboard: policy.keyboard,
        auto_capitalize: config.auto_capitalize(),
        secure_text_entry: snapshot.secure_text_entry,
        editable: config.is_interactive(),
        multiline: config.input.multiline,
        selection_color: palette.tint_color,
        style: style::input_text_style(config, quirks, default_visible, snapshot.content_height),
        value,
    };

    FieldView {
        field_type: config.field_type,
        container: style::container_style(config),
        input_container: style::input_container_style(config, quirks, snapshot.content_height),
        underline: style::underline_style(snapshot.position, restricted, config),
        label: LabelProps {
            base_size: metrics.label_height,
            base_padding: metrics.label_padding,
            font_size: metrics.font_size,
            active_font_size: metrics.label_font_size,
            tint_color: palette.tint_color,
            base_color: palette.base_color,
            error_color: palette.error_color,
            animation_duration: duration,
            active,
            focused: snapshot.focused,
            errored: snapshot.errored,
            restricted,
            text: config.label.clone(),
        },
        prefix: affix(AffixKind::Prefix, &config.prefix),
        suffix: affix(AffixKind::Suffix, &config.suffix),
        accessory,
        input,
        error: HelperProps {
            text: snapshot.error.map(str::to_string),
            style: style::error_text_style(snapshot.position, config),
        },
        helper: HelperProps {
            text: config.helper.clone(),
            style: style::helper_text_style(snapshot.position, config),
        },
        helper_row_height: style::helper_row_height(config),
        counter: CounterProps {
            base_color: palette.base_color,
            error_color: palette.error_color,
            count,
            min: config.min,
            max: config.counter_max(),
            errored: snapshot.errored,
            font_size: metrics.helper_font_size,
        },
        default_visible,
        restricted,
        rtl: quirks.rtl,
    }
}
