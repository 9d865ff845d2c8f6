use std::{fmt, str::FromStr, sync::LazyLock};

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::ConfigError;
use crate::motion::Lerp;

static FUNCTIONAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^rgba?\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*(?:,\s*(\d*\.?\d+)\s*)?\)$",
    )
    .expect("color regex")
});

static HEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#([0-9a-fA-F]{3}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$").expect("hex regex")
});

/// Straight (non-premultiplied) RGBA color. Alpha is kept in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if let Some(caps) = FUNCTIONAL.captures(raw) {
            let channel = |idx: usize| caps[idx].parse::<u16>().ok().filter(|v| *v <= 255);
            let (r, g, b) = (channel(1)?, channel(2)?, channel(3)?);
            let a = match caps.get(4) {
                Some(alpha) => alpha.as_str().parse::<f32>().ok()?,
                None => 1.0,
            };
            if !(0.0..=1.0).contains(&a) {
                return None;
            }
            return Some(Self::rgba(r as u8, g as u8, b as u8, a));
        }

        let caps = HEX.captures(raw)?;
        let digits = &caps[1];
        let byte = |s: &str| u8::from_str_radix(s, 16).ok();
        match digits.len() {
            3 => {
                let mut channels = digits.chars().map(|c| byte(&format!("{c}{c}")));
                Some(Self::rgb(channels.next()??, channels.next()??, channels.next()??))
            }
            6 => Some(Self::rgb(
                byte(&digits[0..2])?,
                byte(&digits[2..4])?,
                byte(&digits[4..6])?,
            )),
            _ => Some(Self::rgba(
                byte(&digits[0..2])?,
                byte(&digits[2..4])?,
                byte(&digits[4..6])?,
                byte(&digits[6..8])? as f32 / 255.0,
            )),
        }
    }

    /// Composites this color over an opaque background.
    pub fn over(self, background: Color) -> Color {
        let a = self.a.clamp(0.0, 1.0);
        let mix = |fg: u8, bg: u8| (fg as f32 * a + bg as f32 * (1.0 - a)).round() as u8;
        Color::rgb(
            mix(self.r, background.r),
            mix(self.g, background.g),
            mix(self.b, background.b),
        )
    }

    pub fn with_alpha(self, a: f32) -> Color {
        Color {
            a: a.clamp(0.0, 1.0),
            ..self
        }
    }
}

impl Lerp for Color {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        let channel = |from: u8, to: u8| (from as f32).lerp(&(to as f32), fraction).round() as u8;
        Color {
            r: channel(self.r, target.r),
            g: channel(self.g, target.g),
            b: channel(self.b, target.b),
            a: self.a.lerp(&target.a, fraction),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if (self.a - 1.0).abs() < f32::EPSILON {
            write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
        } else {
            write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
        }
    }
}

impl FromStr for Color {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::parse(s).ok_or_else(|| ConfigError::invalid_color("color", s))
    }
}

impl TryFrom<String> for Color {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_functional_notation() {
        assert_eq!(Color::parse("rgb(0, 145, 234)"), Some(Color::rgb(0, 145, 234)));
        assert_eq!(
            Color::parse("rgba(0, 0, 0, .38)"),
            Some(Color::rgba(0, 0, 0, 0.38))
        );
    }

    #[test]
    fn parses_hex_notation() {
        assert_eq!(Color::parse("#F8F8FA"), Some(Color::rgb(0xF8, 0xF8, 0xFA)));
        assert_eq!(Color::parse("#fff"), Some(Color::rgb(255, 255, 255)));
        let translucent = Color::parse("#00000080").expect("8 digit hex");
        assert!((translucent.a - 128.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn rejects_out_of_range_channels() {
        assert!(Color::parse("rgb(256, 0, 0)").is_none());
        assert!(Color::parse("rgba(0, 0, 0, 1.5)").is_none());
        assert!(Color::parse("tomato").is_none());
    }

    #[test]
    fn lerp_blends_channels_and_alpha() {
        let from = Color::rgba(0, 0, 0, 0.0);
        let to = Color::rgba(200, 100, 50, 1.0);
        let mid = from.lerp(&to, 0.5);
        assert_eq!((mid.r, mid.g, mid.b), (100, 50, 25));
        assert!((mid.a - 0.5).abs() < 1e-6);
    }

    #[test]
    fn over_composites_against_background() {
        let half_black = Color::rgba(0, 0, 0, 0.5);
        assert_eq!(half_black.over(Color::rgb(255, 255, 255)), Color::rgb(128, 128, 128));
    }
}
