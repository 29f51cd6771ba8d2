//! Presentation payload carried by a region.
//!
//! None of these fields influence detection; they exist so a renderer can
//! draw the region and label it.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::color::Color;

/// Opaque reference to an icon resource owned by the renderer
/// (a path, URL or asset key).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IconRef(String);

impl IconRef {
    #[must_use]
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IconRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Text, icon and colors attached to a region.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Appearance {
    pub text: String,
    pub icon: Option<IconRef>,
    /// Fill color of the region.
    pub color: Color,
    /// Fill color while the monitored instant is inside the region.
    pub highlight_color: Color,
    pub text_color: Color,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_empty_text_without_icon() {
        let appearance = Appearance::default();
        assert!(appearance.text.is_empty());
        assert!(appearance.icon.is_none());
    }

    #[test]
    fn should_default_all_colors_to_transparent() {
        let appearance = Appearance::default();
        assert_eq!(appearance.color, Color::TRANSPARENT);
        assert_eq!(appearance.highlight_color, Color::TRANSPARENT);
        assert_eq!(appearance.text_color, Color::TRANSPARENT);
    }

    #[test]
    fn should_expose_icon_reference_verbatim() {
        let icon = IconRef::new("icons/moon.png");
        assert_eq!(icon.as_str(), "icons/moon.png");
        assert_eq!(icon.to_string(), "icons/moon.png");
    }
}
