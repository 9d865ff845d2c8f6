use std::{fs, path::Path};

use anyhow::{Context, Result};
use log::debug;
use serde::Deserialize;
use serde_json::Value;

use super::DocumentFormat;
use crate::domain::{FieldConfig, PlatformQuirks};

/// A field description as stored on disk: the field props plus an optional
/// `quirks` table.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FieldDocument {
    pub quirks: PlatformQuirks,
    #[serde(flatten)]
    pub field: FieldConfig,
}

/// Parse structured data in any supported format into a `serde_json::Value`.
pub fn parse_document_str(contents: &str, format: DocumentFormat) -> Result<Value> {
    match format {
        DocumentFormat::Json => {
            serde_json::from_str::<Value>(contents).with_context(|| "failed to parse JSON document")
        }
        #[cfg(feature = "yaml")]
        DocumentFormat::Yaml => {
            serde_yaml::from_str::<Value>(contents).with_context(|| "failed to parse YAML document")
        }
        #[cfg(feature = "toml")]
        DocumentFormat::Toml => toml::from_str::<toml::Table>(contents)
            .with_context(|| "failed to parse TOML document")
            .and_then(|value| {
                serde_json::to_value(value).context("failed to convert TOML to JSON")
            }),
    }
}

pub fn field_document_from_str(contents: &str, format: DocumentFormat) -> Result<FieldDocument> {
    let value = parse_document_str(contents, format)?;
    let document: FieldDocument =
        serde_json::from_value(value).context("field document has an unexpected shape")?;
    document
        .field
        .validate()
        .context("invalid field configuration")?;
    Ok(document)
}

pub fn field_config_from_str(contents: &str, format: DocumentFormat) -> Result<FieldConfig> {
    field_document_from_str(contents, format).map(|document| document.field)
}

pub fn load_field_document(path: &Path) -> Result<FieldDocument> {
    let format = DocumentFormat::from_extension(path);
    debug!("loading {format} field document from {}", path.display());
    let contents =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    field_document_from_str(&contents, format)
        .with_context(|| format!("failed to load {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FieldType, Platform};

    #[test]
    fn parse_json_documents() {
        let raw = r#"{"type":"currency","label":"Price","prefix":"$"}"#;
        let config = field_config_from_str(raw, DocumentFormat::Json).unwrap();
        assert_eq!(config.field_type, FieldType::Currency);
        assert_eq!(config.prefix.as_deref(), Some("$"));
    }

    #[test]
    fn quirks_table_is_split_off() {
        let raw = r#"{"label":"Notes","multiline":true,"quirks":{"platform":"android","rtl":true}}"#;
        let document = field_document_from_str(raw, DocumentFormat::Json).unwrap();
        assert_eq!(document.quirks.platform, Platform::Android);
        assert!(document.quirks.rtl);
        assert!(document.field.input.multiline);
        assert_eq!(document.field.label, "Notes");
    }

    #[test]
    fn invalid_config_is_rejected() {
        let raw = r#"{"label":"Pin","min":8,"max":4}"#;
        let err = field_config_from_str(raw, DocumentFormat::Json).unwrap_err();
        assert!(format!("{err:#}").contains("min (8) must not exceed max (4)"));
    }

    #[test]
    fn unknown_extension_defaults_to_json() {
        assert_eq!(
            DocumentFormat::from_extension(Path::new("field.conf")),
            DocumentFormat::Json
        );
    }

    #[cfg(feature = "yaml")]
    #[test]
    fn parse_yaml_documents() {
        let raw = "type: email\nlabel: Email\nhelper: We never share it\n";
        let config = field_config_from_str(raw, DocumentFormat::Yaml).unwrap();
        assert_eq!(config.field_type, FieldType::Email);
        assert_eq!(config.helper.as_deref(), Some("We never share it"));
        assert_eq!(
            DocumentFormat::from_extension(Path::new("a.YML")),
            DocumentFormat::Yaml
        );
    }

    #[cfg(feature = "toml")]
    #[test]
    fn parse_toml_documents() {
        let raw = "label = \"Bio\"\ncharacterRestriction = 140\n\n[quirks]\nplatform = \"web\"\n";
        let document = field_document_from_str(raw, DocumentFormat::Toml).unwrap();
        assert_eq!(document.field.character_restriction, Some(140));
        assert_eq!(document.quirks.platform, Platform::Web);
    }

    #[cfg(feature = "toml")]
    #[test]
    fn toml_documents_keep_every_top_level_key() {
        let raw = "type = \"password\"\nlabel = \"Secret\"\nhelper = \"Keep it safe\"\nmin = 8\n";
        let config = field_config_from_str(raw, DocumentFormat::Toml).unwrap();
        assert_eq!(config.field_type, FieldType::Password);
        assert_eq!(config.label, "Secret");
        assert_eq!(config.helper.as_deref(), Some("Keep it safe"));
        assert_eq!(config.min, Some(8));
    }
}
