use std::{fmt, sync::Arc, time::Duration};

use serde::{Deserialize, Serialize};

use super::{AutoCapitalize, Color, ConfigError, FieldType, KeyboardPolicy};

/// Pure text rewrite used for `format` (stored → displayed) and `parse`
/// (typed → stored).
pub type TextTransform = Arc<dyn Fn(&str) -> String + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineType {
    #[default]
    Solid,
    Dotted,
    Dashed,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Palette {
    pub tint_color: Color,
    pub text_color: Color,
    pub base_color: Color,
    pub error_color: Color,
    pub container_background_color: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            tint_color: Color::rgb(0, 145, 234),
            text_color: Color::rgba(0, 0, 0, 0.87),
            base_color: Color::rgba(0, 0, 0, 0.38),
            error_color: Color::rgb(213, 0, 0),
            container_background_color: Color::rgb(0xF8, 0xF8, 0xFA),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Metrics {
    pub font_size: f32,
    pub helper_font_size: f32,
    pub label_font_size: f32,
    pub label_height: f32,
    pub label_padding: f32,
    pub input_container_padding: f32,
    pub line_width: f32,
    pub active_line_width: f32,
    pub disabled_line_width: f32,
}

impl Default for Metrics {
    fn default() -> Self {
        Self {
            font_size: 16.0,
            helper_font_size: 12.0,
            label_font_size: 12.0,
            label_height: 24.0,
            label_padding: 4.0,
            input_container_padding: 12.0,
            line_width: 0.5,
            active_line_width: 2.0,
            disabled_line_width: 1.0,
        }
    }
}

impl Metrics {
    /// Height of a single line of input text.
    pub fn line_height(&self) -> f32 {
        self.font_size * 1.5
    }
}

/// Attributes forwarded to the input primitive untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InputAttributes {
    pub placeholder: Option<String>,
    pub multiline: bool,
    pub auto_capitalize: Option<AutoCapitalize>,
    /// Fixed multiline height; disables autogrow.
    pub height: Option<f32>,
    pub clear_text_on_focus: bool,
}

#[derive(Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FieldConfig {
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub label: String,
    pub helper: Option<String>,
    pub prefix: Option<String>,
    pub suffix: Option<String>,

    pub value: Option<String>,
    pub default_value: Option<String>,
    pub error: Option<String>,

    pub min: Option<usize>,
    pub max: Option<usize>,
    pub character_restriction: Option<usize>,

    pub disabled: bool,
    pub editable: bool,
    pub no_margin: bool,
    pub disabled_line_type: LineType,
    /// Milliseconds.
    pub animation_duration: u64,

    #[serde(flatten)]
    pub palette: Palette,
    #[serde(flatten)]
    pub metrics: Metrics,
    #[serde(flatten)]
    pub input: InputAttributes,

    #[serde(skip)]
    pub format: Option<TextTransform>,
    #[serde(skip)]
    pub parse: Option<TextTransform>,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            field_type: FieldType::Default,
            label: String::new(),
            helper: None,
            prefix: None,
            suffix: None,
            value: None,
            default_value: None,
            error: None,
            min: None,
            max: None,
            character_restriction: None,
            disabled: false,
            editable: true,
            no_margin: false,
            disabled_line_type: LineType::Dotted,
            animation_duration: 225,
            palette: Palette::default(),
            metrics: Metrics::default(),
            input: InputAttributes::default(),
            format: None,
            parse: None,
        }
    }
}

impl fmt::Debug for FieldConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldConfig")
            .field("field_type", &self.field_type)
            .field("label", &self.label)
            .field("helper", &self.helper)
            .field("prefix", &self.prefix)
            .field("suffix", &self.suffix)
            .field("value", &self.value)
            .field("default_value", &self.default_value)
            .field("error", &self.error)
            .field("min", &self.min)
            .field("max", &self.max)
            .field("character_restriction", &self.character_restriction)
            .field("disabled", &self.disabled)
            .field("editable", &self.editable)
            .field("animation_duration", &self.animation_duration)
            .field("palette", &self.palette)
            .field("metrics", &self.metrics)
            .field("input", &self.input)
            .field("format", &self.format.as_ref().map(|_| "<fn>"))
            .field("parse", &self.parse.as_ref().map(|_| "<fn>"))
            .finish_non_exhaustive()
    }
}

impl FieldConfig {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    pub fn with_type(mut self, field_type: FieldType) -> Self {
        self.field_type = field_type;
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_helper(mut self, helper: impl Into<String>) -> Self {
        self.helper = Some(helper.into());
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = Some(suffix.into());
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn with_default_value(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    pub fn without_error(mut self) -> Self {
        self.error = None;
        self
    }

    pub fn with_bounds(mut self, min: Option<usize>, max: Option<usize>) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    pub fn with_character_restriction(mut self, limit: usize) -> Self {
        self.character_restriction = Some(limit);
        self
    }

    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn with_editable(mut self, editable: bool) -> Self {
        self.editable = editable;
        self
    }

    pub fn with_animation_duration(mut self, duration: Duration) -> Self {
        self.animation_duration = duration.as_millis() as u64;
        self
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn with_metrics(mut self, metrics: Metrics) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.input.placeholder = Some(placeholder.into());
        self
    }

    pub fn with_multiline(mut self, multiline: bool) -> Self {
        self.input.multiline = multiline;
        self
    }

    pub fn with_clear_text_on_focus(mut self, clear: bool) -> Self {
        self.input.clear_text_on_focus = clear;
        self
    }

    pub fn with_format(mut self, format: impl Fn(&str) -> String + Send + Sync + 'static) -> Self {
        self.format = Some(Arc::new(format));
        self
    }

    pub fn with_parse(mut self, parse: impl Fn(&str) -> String + Send + Sync + 'static) -> Self {
        self.parse = Some(Arc::new(parse));
        self
    }

    pub fn animation_duration(&self) -> Duration {
        Duration::from_millis(self.animation_duration)
    }

    /// The error message, treating an empty string as "no error".
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref().filter(|message| !message.is_empty())
    }

    pub fn has_error(&self) -> bool {
        self.error_message().is_some()
    }

    pub fn is_interactive(&self) -> bool {
        !self.disabled && self.editable
    }

    pub fn keyboard_policy(&self) -> KeyboardPolicy {
        self.field_type.policy()
    }

    /// Capitalization after applying the host's explicit override.
    pub fn auto_capitalize(&self) -> AutoCapitalize {
        self.input
            .auto_capitalize
            .unwrap_or(self.keyboard_policy().auto_capitalize)
    }

    /// Upper bound shown by the counter. Falls back to the character
    /// restriction when no explicit `max` is configured.
    pub fn counter_max(&self) -> Option<usize> {
        self.max.or(self.character_restriction)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if let (Some(min), Some(max)) = (self.min, self.counter_max())
            && min > max
        {
            return Err(ConfigError::new(
                "min",
                format!("min ({min}) must not exceed max ({max})"),
            ));
        }
        let metrics = &self.metrics;
        for (key, value) in [
            ("fontSize", metrics.font_size),
            ("helperFontSize", metrics.helper_font_size),
            ("labelFontSize", metrics.label_font_size),
            ("labelHeight", metrics.label_height),
            ("labelPadding", metrics.label_padding),
            ("inputContainerPadding", metrics.input_container_padding),
            ("lineWidth", metrics.line_width),
            ("activeLineWidth", metrics.active_line_width),
            ("disabledLineWidth", metrics.disabled_line_width),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::new(key, "must be a non-negative number"));
            }
        }
        if let Some(height) = self.input.height
            && (!height.is_finite() || height < 0.0)
        {
            return Err(ConfigError::new("height", "must be a non-negative number"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn defaults_match_material_field() {
        let config = FieldConfig::default();
        assert_eq!(config.animation_duration(), Duration::from_millis(225));
        assert_eq!(config.metrics.line_height(), 24.0);
        assert!(config.editable);
        assert_eq!(config.disabled_line_type, LineType::Dotted);
    }

    #[test]
    fn deserializes_flat_camel_case_keys() {
        let config: FieldConfig = serde_json::from_value(json!({
            "type": "email",
            "label": "Email",
            "tintColor": "#ff0000",
            "fontSize": 20,
            "characterRestriction": 40,
            "placeholder": "you@example.com",
            "clearTextOnFocus": true
        }))
        .expect("config");
        assert_eq!(config.field_type, FieldType::Email);
        assert_eq!(config.palette.tint_color, Color::rgb(255, 0, 0));
        assert_eq!(config.palette.error_color, Palette::default().error_color);
        assert_eq!(config.metrics.font_size, 20.0);
        assert_eq!(config.character_restriction, Some(40));
        assert_eq!(config.input.placeholder.as_deref(), Some("you@example.com"));
        assert!(config.input.clear_text_on_focus);
    }

    #[test]
    fn rejects_bad_color_literals() {
        let result = serde_json::from_value::<FieldConfig>(json!({ "baseColor": "blurple" }));
        assert!(result.is_err(), "unknown color names should fail");
    }

    #[test]
    fn empty_error_is_not_an_error() {
        let config = FieldConfig::new("Name").with_error("");
        assert!(!config.has_error());
        assert!(FieldConfig::new("Name").with_error("Required").has_error());
    }

    #[test]
    fn capitalization_override_wins() {
        let mut config = FieldConfig::new("Code");
        assert_eq!(config.auto_capitalize(), AutoCapitalize::Sentences);
        config.input.auto_capitalize = Some(AutoCapitalize::Characters);
        assert_eq!(config.auto_capitalize(), AutoCapitalize::Characters);
    }

    #[test]
    fn counter_max_falls_back_to_restriction() {
        let config = FieldConfig::new("Bio").with_character_restriction(140);
        assert_eq!(config.counter_max(), Some(140));
        let config = config.with_bounds(None, Some(100));
        assert_eq!(config.counter_max(), Some(100));
    }

    #[test]
    fn validate_catches_inverted_bounds() {
        let config = FieldConfig::new("Pin").with_bounds(Some(6), Some(4));
        let err = config.validate().expect_err("inverted bounds");
        assert_eq!(err.key, "min");
        assert!(FieldConfig::new("Pin").with_bounds(Some(4), Some(6)).validate().is_ok());
    }
}
