//! Structured JSON form of a region.
//!
//! ```json
//! {
//!   "start": "22:00:00",
//!   "stop": "23:30:00",
//!   "text": "late",
//!   "color": "#112233FF",
//!   "highlightColor": "#00000000",
//!   "textColor": "#FFFFFFFF",
//!   "active": true
//! }
//! ```
//!
//! The form carries neither the day filter nor the icon. Writing never
//! emits them and reading never looks at them, so a parsed region always
//! has all seven days and no icon.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::ParseError;
use crate::region::TemporalRegion;
use crate::time::now_local_time;

const TIME_FORMAT: &str = "%H:%M:%S%.f";
const SHORT_TIME_FORMAT: &str = "%H:%M";

/// Serde mirror of the structured form. Every field is optional on read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlight_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

impl RegionDocument {
    /// Build a region, using `now` for a missing `start` or `stop`.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidTime`] or [`ParseError::InvalidColor`]
    /// for the first malformed field. Nothing is built in that case.
    pub fn into_region(self, now: NaiveTime) -> Result<TemporalRegion, ParseError> {
        let start = parse_time("start", self.start.as_deref())?.unwrap_or(now);
        let stop = parse_time("stop", self.stop.as_deref())?.unwrap_or(now);
        let color = parse_color("color", self.color.as_deref())?;
        let highlight_color = parse_color("highlightColor", self.highlight_color.as_deref())?;
        let text_color = parse_color("textColor", self.text_color.as_deref())?;

        let mut region = TemporalRegion::new(start, stop);
        region.set_text(self.text.unwrap_or_default());
        region.set_color(color);
        region.set_highlight_color(highlight_color);
        region.set_text_color(text_color);
        region.set_active(self.active.unwrap_or(false));
        Ok(region)
    }
}

fn parse_time(field: &'static str, value: Option<&str>) -> Result<Option<NaiveTime>, ParseError> {
    let Some(raw) = value else {
        return Ok(None);
    };
    NaiveTime::parse_from_str(raw, TIME_FORMAT)
        .or_else(|_| NaiveTime::parse_from_str(raw, SHORT_TIME_FORMAT))
        .map(Some)
        .map_err(|source| ParseError::InvalidTime {
            field,
            value: raw.to_string(),
            source,
        })
}

fn parse_color(field: &'static str, value: Option<&str>) -> Result<Color, ParseError> {
    let Some(raw) = value else {
        return Ok(Color::TRANSPARENT);
    };
    raw.parse().map_err(|source| ParseError::InvalidColor {
        field,
        value: raw.to_string(),
        source,
    })
}

impl TemporalRegion {
    /// Snapshot of the fields carried by the structured form.
    #[must_use]
    pub fn to_document(&self) -> RegionDocument {
        RegionDocument {
            start: Some(self.start().format(TIME_FORMAT).to_string()),
            stop: Some(self.stop().format(TIME_FORMAT).to_string()),
            text: Some(self.text().to_string()),
            color: Some(self.color().to_hex()),
            highlight_color: Some(self.highlight_color().to_hex()),
            text_color: Some(self.text_color().to_hex()),
            active: Some(self.is_active()),
        }
    }

    /// Compact JSON form.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Json`] if serialization fails.
    pub fn to_json(&self) -> Result<String, ParseError> {
        serde_json::to_string(&self.to_document()).map_err(ParseError::Json)
    }

    /// Indented JSON form.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Json`] if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String, ParseError> {
        serde_json::to_string_pretty(&self.to_document()).map_err(ParseError::Json)
    }

    /// Parse a region, defaulting a missing `start`/`stop` to the current
    /// local time.
    ///
    /// # Errors
    ///
    /// See [`from_json_at`](Self::from_json_at).
    pub fn from_json(blob: &str) -> Result<Self, ParseError> {
        Self::from_json_at(blob, now_local_time())
    }

    /// Parse a region, defaulting a missing `start`/`stop` to `now`.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Json`] when `blob` is not a JSON object of the
    /// expected shape, or a field-level error for a malformed time or color.
    pub fn from_json_at(blob: &str, now: NaiveTime) -> Result<Self, ParseError> {
        let document: RegionDocument = serde_json::from_str(blob).map_err(ParseError::Json)?;
        document.into_region(now)
    }
}
