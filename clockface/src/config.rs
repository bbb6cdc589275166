//! Dial configuration.
use std::env;

use derive_setters::Setters;

use crate::{error::DialError, geometry::DEFAULT_MIN_CANVAS_SIDE, locale, time::TimeOfDay};

/// Environment variable overriding the hour format: `12`, `24` or `auto`.
pub const HOUR_FORMAT_VAR: &str = "CLOCKFACE_HOUR_FORMAT";
/// Environment variable overriding the inner ring ratio.
pub const INNER_RATIO_VAR: &str = "CLOCKFACE_INNER_RATIO";

/// Default radius of the 24-hour inner ring relative to the outer ring.
pub const DEFAULT_INNER_RATIO: f32 = 0.7;
/// Default spacing between full-size minute markers.
pub const DEFAULT_MINUTE_MARKER_STEP: u8 = 5;

/// Configuration options for [`DialController`](crate::DialController).
#[derive(Debug, Clone, PartialEq, Setters)]
pub struct DialConfig {
    /// Hour format. `None` follows the host locale.
    #[setters(strip_option)]
    pub is_24_hour: Option<bool>,
    /// Time shown first. `None` uses the current local time.
    #[setters(strip_option)]
    pub initial_time: Option<TimeOfDay>,
    /// Radius of the 24-hour inner ring as a fraction of the outer ring.
    pub inner_ratio: f32,
    /// Canvases with a shorter side are not laid out.
    pub min_canvas_side: f32,
    /// Every Nth minute gets a full-size marker; the rest are hints.
    pub minute_marker_step: u8,
}

impl Default for DialConfig {
    fn default() -> Self {
        Self {
            is_24_hour: None,
            initial_time: None,
            inner_ratio: DEFAULT_INNER_RATIO,
            min_canvas_side: DEFAULT_MIN_CANVAS_SIDE,
            minute_marker_step: DEFAULT_MINUTE_MARKER_STEP,
        }
    }
}

impl DialConfig {
    /// Default configuration with environment overrides applied.
    pub fn from_env() -> Result<Self, DialError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Default configuration with overrides read through `lookup`.
    ///
    /// `lookup` receives [`HOUR_FORMAT_VAR`] and [`INNER_RATIO_VAR`] and
    /// returns the raw value, if set. The result is validated.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, DialError> {
        let mut config = Self::default();
        if let Some(value) = lookup(HOUR_FORMAT_VAR) {
            config.is_24_hour = parse_hour_format(&value)?;
        }
        if let Some(value) = lookup(INNER_RATIO_VAR) {
            config.inner_ratio = value
                .trim()
                .parse::<f32>()
                .map_err(|_| DialError::ParseInnerRatio(value.clone()))?;
        }
        config.validate()?;
        Ok(config)
    }

    /// Checks values that would make layout meaningless.
    pub fn validate(&self) -> Result<(), DialError> {
        if !(self.inner_ratio > 0.0 && self.inner_ratio < 1.0) {
            return Err(DialError::InvalidInnerRatio(self.inner_ratio));
        }
        Ok(())
    }

    /// Hour format to start with, consulting the host locale when unset.
    pub fn resolve_24_hour(&self) -> bool {
        self.is_24_hour.unwrap_or_else(locale::prefers_24_hour)
    }

    /// Time to start with, reading the clock when unset.
    pub fn resolve_initial_time(&self) -> TimeOfDay {
        self.initial_time.unwrap_or_else(TimeOfDay::now_local)
    }
}

/// Parses an hour format override. `auto` yields `None`.
pub fn parse_hour_format(value: &str) -> Result<Option<bool>, DialError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "12" | "12h" => Ok(Some(false)),
        "24" | "24h" => Ok(Some(true)),
        "auto" | "" => Ok(None),
        other => Err(DialError::InvalidHourFormat(other.to_string())),
    }
}
