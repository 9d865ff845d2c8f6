use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    #[default]
    Ios,
    Android,
    Web,
}

impl Platform {
    /// Extra pixels added to a reported content height to cover the native
    /// input's own padding.
    pub fn content_height_offset(self) -> f32 {
        match self {
            Platform::Ios => 5.0,
            Platform::Android => 1.0,
            Platform::Web => 0.0,
        }
    }
}

impl FromStr for Platform {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ios" => Ok(Platform::Ios),
            "android" => Ok(Platform::Android),
            "web" => Ok(Platform::Web),
            other => Err(ConfigError::new(
                "platform",
                format!("unknown platform '{other}' (expected ios, android or web)"),
            )),
        }
    }
}

/// Host capabilities and known defects, decided once when the field is
/// mounted and never re-derived per event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlatformQuirks {
    pub platform: Platform,
    /// Lay out right-to-left.
    pub rtl: bool,
    /// The primitive never reports content size changes for multiline
    /// inputs, so the controller recomputes them from change events.
    pub multiline_autogrow_gap: bool,
}

impl PlatformQuirks {
    pub fn new(platform: Platform) -> Self {
        Self {
            platform,
            ..Self::default()
        }
    }

    pub fn with_rtl(mut self, rtl: bool) -> Self {
        self.rtl = rtl;
        self
    }

    pub fn with_multiline_autogrow_gap(mut self, gap: bool) -> Self {
        self.multiline_autogrow_gap = gap;
        self
    }

    pub fn content_height_offset(&self) -> f32 {
        self.platform.content_height_offset()
    }
}
