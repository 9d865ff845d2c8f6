use crate::domain::FieldConfig;

/// Where the displayed value comes from on a given render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueSource<'a> {
    /// The internal buffer; shown through `format` when one is configured.
    Text(&'a str),
    /// The untouched default, shown until the field first receives focus.
    Default(&'a str),
}

impl<'a> ValueSource<'a> {
    pub fn resolve(config: &'a FieldConfig, received_focus: bool, text: &'a str) -> Self {
        match config.default_value.as_deref() {
            Some(default) if !received_focus && config.value.is_none() => {
                ValueSource::Default(default)
            }
            _ => ValueSource::Text(text),
        }
    }

    pub fn raw(self) -> &'a str {
        match self {
            ValueSource::Text(text) | ValueSource::Default(text) => text,
        }
    }

    pub fn is_default(self) -> bool {
        matches!(self, ValueSource::Default(_))
    }

    /// The string put in front of the user.
    pub fn display(self, config: &FieldConfig) -> String {
        match (self, config.format.as_ref()) {
            (ValueSource::Text(text), Some(format)) => format(text),
            (source, _) => source.raw().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_shows_until_focus() {
        let config = FieldConfig::new("City").with_default_value("Berlin");
        assert_eq!(
            ValueSource::resolve(&config, false, ""),
            ValueSource::Default("Berlin")
        );
        assert_eq!(ValueSource::resolve(&config, true, ""), ValueSource::Text(""));
    }

    #[test]
    fn controlled_value_hides_default() {
        let config = FieldConfig::new("City")
            .with_default_value("Berlin")
            .with_value("Paris");
        assert_eq!(
            ValueSource::resolve(&config, false, "Paris"),
            ValueSource::Text("Paris")
        );
    }

    #[test]
    fn format_skips_default() {
        let config = FieldConfig::new("Price")
            .with_default_value("0")
            .with_format(|text| format!("{text}.00"));
        assert_eq!(ValueSource::resolve(&config, false, "").display(&config), "0");
        assert_eq!(ValueSource::resolve(&config, true, "12").display(&config), "12.00");
    }
}
