//! Error type shared by the dial model.

use thiserror::Error;

use crate::view::DialPart;

/// Errors produced while configuring or constructing a dial.
///
/// An unmeasured or non-square canvas is not an error; layout waits until
/// the host reports usable measurements.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DialError {
    /// The view adapter cannot provide a part the controller drives.
    #[error("missing required part `{0}` in the dial view")]
    MissingPart(DialPart),
    /// Hour outside 0-23.
    #[error("hour {0} is out of range, expected 0-23")]
    HourOutOfRange(u8),
    /// Minute outside 0-59.
    #[error("minute {0} is out of range, expected 0-59")]
    MinuteOutOfRange(u8),
    /// Inner ring ratio outside the open interval (0, 1).
    #[error("inner ring ratio {0} must lie strictly between 0 and 1")]
    InvalidInnerRatio(f32),
    /// Inner ring ratio override that is not a number.
    #[error("invalid inner ring ratio `{0}`, expected a number between 0 and 1")]
    ParseInnerRatio(String),
    /// Text that does not read as `H:MM` or `HH:MM`.
    #[error("invalid time `{0}`, expected HH:MM")]
    ParseTime(String),
    /// Unrecognised hour format override.
    #[error("invalid hour format `{0}`, expected 12, 24 or auto")]
    InvalidHourFormat(String),
}
