use std::fmt;

use serde::{Deserialize, Serialize};

use super::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    #[default]
    Default,
    Email,
    Password,
    Number,
    Currency,
    Amount,
}

impl FieldType {
    pub const ALL: [FieldType; 6] = [
        FieldType::Default,
        FieldType::Email,
        FieldType::Password,
        FieldType::Number,
        FieldType::Currency,
        FieldType::Amount,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FieldType::Default => "default",
            FieldType::Email => "email",
            FieldType::Password => "password",
            FieldType::Number => "number",
            FieldType::Currency => "currency",
            FieldType::Amount => "amount",
        }
    }

    pub fn policy(self) -> KeyboardPolicy {
        KeyboardPolicy::for_type(self)
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for FieldType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldType::ALL
            .into_iter()
            .find(|ty| ty.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ConfigError::new("type", format!("unknown field type '{s}'")))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum KeyboardType {
    Default,
    EmailAddress,
    NumberPad,
    DecimalPad,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AutoCapitalize {
    None,
    Sentences,
    Words,
    Characters,
}

/// Keyboard affordances the input primitive should use for a field type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyboardPolicy {
    pub keyboard: KeyboardType,
    pub auto_capitalize: AutoCapitalize,
    pub secure_by_default: bool,
}

impl KeyboardPolicy {
    pub fn for_type(ty: FieldType) -> Self {
        let keyboard = match ty {
            FieldType::Email => KeyboardType::EmailAddress,
            FieldType::Number => KeyboardType::NumberPad,
            FieldType::Currency => KeyboardType::DecimalPad,
            FieldType::Default | FieldType::Password | FieldType::Amount => KeyboardType::Default,
        };
        let auto_capitalize = match ty {
            FieldType::Email | FieldType::Password => AutoCapitalize::None,
            _ => AutoCapitalize::Sentences,
        };
        Self {
            keyboard,
            auto_capitalize,
            secure_by_default: ty == FieldType::Password,
        }
    }
}
