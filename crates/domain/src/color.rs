//! RGBA color value and its fixed-width hex form.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ColorError;

/// An 8-bit-per-channel RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Fully transparent black, the default for every region color.
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    /// Render as `#RRGGBBAA`, upper-case, always nine characters.
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = ColorError;

    /// Accepts `RRGGBB` or `RRGGBBAA`, optionally prefixed with `#` or `0x`.
    /// Surrounding whitespace is not stripped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix('#')
            .or_else(|| s.strip_prefix("0x"))
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);

        let bytes = hex::decode(digits).map_err(|err| match err {
            hex::FromHexError::OddLength => ColorError::InvalidLength(digits.len()),
            _ => ColorError::InvalidDigit,
        })?;

        match *bytes.as_slice() {
            [r, g, b] => Ok(Self::rgb(r, g, b)),
            [r, g, b, a] => Ok(Self::rgba(r, g, b, a)),
            _ => Err(ColorError::InvalidLength(digits.len())),
        }
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_transparent_black() {
        assert_eq!(Color::default(), Color::TRANSPARENT);
        assert_eq!(Color::TRANSPARENT.to_hex(), "#00000000");
    }

    #[test]
    fn should_render_fixed_width_upper_case_hex() {
        let color = Color::rgba(0x11, 0x22, 0x33, 0xff);
        assert_eq!(color.to_hex(), "#112233FF");
        assert_eq!(Color::rgba(1, 2, 3, 4).to_string(), "#01020304");
    }

    #[test]
    fn should_parse_eight_digit_hex_with_hash() {
        let color: Color = "#112233ff".parse().unwrap();
        assert_eq!(color, Color::rgba(0x11, 0x22, 0x33, 0xff));
    }

    #[test]
    fn should_parse_six_digit_hex_as_opaque() {
        let color: Color = "0xA0B0C0".parse().unwrap();
        assert_eq!(color, Color::rgb(0xa0, 0xb0, 0xc0));
    }

    #[test]
    fn should_parse_without_prefix() {
        let color: Color = "ffffff80".parse().unwrap();
        assert_eq!(color, Color::rgba(255, 255, 255, 0x80));
    }

    #[test]
    fn should_reject_wrong_length() {
        assert_eq!("#fff".parse::<Color>(), Err(ColorError::InvalidLength(3)));
    }

    #[test]
    fn should_reject_non_hex_digits() {
        assert_eq!("#gg0000".parse::<Color>(), Err(ColorError::InvalidDigit));
        assert_eq!("#ééé".parse::<Color>(), Err(ColorError::InvalidDigit));
    }

    #[test]
    fn should_reject_signed_channels() {
        assert_eq!("#+1+2+3FF".parse::<Color>(), Err(ColorError::InvalidDigit));
        assert_eq!("#+1+2+3+4".parse::<Color>(), Err(ColorError::InvalidDigit));
    }

    #[test]
    fn should_reject_surrounding_whitespace() {
        assert_eq!(" #112233FF ".parse::<Color>(), Err(ColorError::InvalidLength(11)));
        assert_eq!("#112233FF\n".parse::<Color>(), Err(ColorError::InvalidLength(9)));
    }

    #[test]
    fn should_reject_even_length_other_than_six_or_eight() {
        assert_eq!("#1122".parse::<Color>(), Err(ColorError::InvalidLength(4)));
        assert_eq!("#1122334455".parse::<Color>(), Err(ColorError::InvalidLength(10)));
    }

    #[test]
    fn should_serialize_as_hex_string() {
        let json = serde_json::to_string(&Color::WHITE).unwrap();
        assert_eq!(json, "\"#FFFFFFFF\"");
        let parsed: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, Color::WHITE);
    }
}
