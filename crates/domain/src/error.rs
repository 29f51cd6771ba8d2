//! Domain error types.
//!
//! Errors carry typed sources rather than `String` reasons. Outer layers
//! wrap them in their own enums.

/// Failure while reading a region from its structured text form.
///
/// Any single malformed field aborts construction; no partially
/// initialised region is ever returned.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// The blob is not valid JSON, or a field has the wrong JSON type.
    #[error("malformed region document")]
    Json(#[source] serde_json::Error),

    /// A time field is not an ISO local time.
    #[error("invalid time in field `{field}`: {value:?}")]
    InvalidTime {
        field: &'static str,
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    /// A color field is not a hex color.
    #[error("invalid color in field `{field}`: {value:?}")]
    InvalidColor {
        field: &'static str,
        value: String,
        #[source]
        source: ColorError,
    },
}

/// Failure while parsing a hex color string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    /// Only 6 (`RRGGBB`) or 8 (`RRGGBBAA`) hex digits are accepted.
    #[error("expected 6 or 8 hex digits, got {0}")]
    InvalidLength(usize),

    /// A character outside `0-9a-fA-F`.
    #[error("invalid hex digit")]
    InvalidDigit,
}
