//! Canonical time value held by the dial.
//!
//! [`TimeOfDay`] always stores a 24-hour hour (0-23) and a minute (0-59).
//! The hour format only changes how the value is labelled and how pointer
//! angles map onto it, never the stored range.
use std::{fmt, str::FromStr};

use chrono::{Local, NaiveTime, Timelike};

use crate::error::DialError;

/// Indicates whether a time falls before or after noon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayPeriod {
    /// Ante meridiem (before noon).
    Am,
    /// Post meridiem (noon and after).
    Pm,
}

impl DayPeriod {
    /// Returns the period an hour (0-23) belongs to.
    pub fn of_hour(hour: u8) -> Self {
        if hour >= 12 { DayPeriod::Pm } else { DayPeriod::Am }
    }

    /// Short label shown on period buttons.
    pub fn label(self) -> &'static str {
        match self {
            DayPeriod::Am => "AM",
            DayPeriod::Pm => "PM",
        }
    }
}

impl fmt::Display for DayPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An hour and minute within a single day.
///
/// Immutable: every change produces a new value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

impl TimeOfDay {
    /// 00:00.
    pub const MIDNIGHT: TimeOfDay = TimeOfDay { hour: 0, minute: 0 };

    /// 12:00.
    pub const NOON: TimeOfDay = TimeOfDay {
        hour: 12,
        minute: 0,
    };

    /// Creates a time, rejecting out-of-range components.
    pub fn new(hour: u8, minute: u8) -> Result<Self, DialError> {
        if hour > 23 {
            return Err(DialError::HourOutOfRange(hour));
        }
        if minute > 59 {
            return Err(DialError::MinuteOutOfRange(minute));
        }
        Ok(Self { hour, minute })
    }

    /// Creates a time by reducing both components into range.
    pub fn wrapping(hour: u32, minute: u32) -> Self {
        Self {
            hour: (hour % 24) as u8,
            minute: (minute % 60) as u8,
        }
    }

    /// Current local wall-clock time, truncated to the minute.
    pub fn now_local() -> Self {
        Self::from(Local::now().time())
    }

    /// Hour in 24-hour form (0-23).
    pub fn hour(self) -> u8 {
        self.hour
    }

    /// Minute (0-59).
    pub fn minute(self) -> u8 {
        self.minute
    }

    /// Returns whether the hour falls in the afternoon half of the day.
    pub fn is_post_meridiem(self) -> bool {
        self.hour >= 12
    }

    /// AM/PM half of the day.
    pub fn period(self) -> DayPeriod {
        DayPeriod::of_hour(self.hour)
    }

    /// Hour as read on a 12-hour clock (1-12).
    pub fn hour_12(self) -> u8 {
        match self.hour % 12 {
            0 => 12,
            hour => hour,
        }
    }

    /// Same minute, different hour (reduced modulo 24).
    pub fn with_hour(self, hour: u8) -> Self {
        Self {
            hour: hour % 24,
            minute: self.minute,
        }
    }

    /// Same hour, different minute (reduced modulo 60).
    pub fn with_minute(self, minute: u8) -> Self {
        Self {
            hour: self.hour,
            minute: minute % 60,
        }
    }

    /// Moves the hour into the requested half of the day, keeping the minute.
    pub fn with_period(self, period: DayPeriod) -> Self {
        match (period, self.is_post_meridiem()) {
            (DayPeriod::Am, true) => self.with_hour(self.hour - 12),
            (DayPeriod::Pm, false) => self.with_hour(self.hour + 12),
            _ => self,
        }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for TimeOfDay {
    type Err = DialError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_error = || DialError::ParseTime(s.to_string());
        let (hour, minute) = s.trim().split_once(':').ok_or_else(parse_error)?;
        if hour.is_empty() || hour.len() > 2 || minute.len() != 2 {
            return Err(parse_error());
        }
        let hour: u8 = hour.parse().map_err(|_| parse_error())?;
        let minute: u8 = minute.parse().map_err(|_| parse_error())?;
        TimeOfDay::new(hour, minute)
    }
}

impl From<NaiveTime> for TimeOfDay {
    fn from(time: NaiveTime) -> Self {
        Self::wrapping(time.hour(), time.minute())
    }
}

impl From<TimeOfDay> for NaiveTime {
    fn from(time: TimeOfDay) -> Self {
        NaiveTime::from_hms_opt(u32::from(time.hour), u32::from(time.minute), 0)
            .unwrap_or(NaiveTime::MIN)
    }
}
