//! Folding between stored time components and raw ring values.
//!
//! Rings are labelled `1..=N` (`12`, `13..=24`, `1..=60`) while the stored time
//! is 0-based. These functions are the single place that translation happens,
//! in both directions.
use crate::{layout::DialPosition, time::TimeOfDay, view::HeaderText};

/// Hour (0-23) selected by tapping the hour position labelled `value`.
///
/// In 24-hour mode the ring value is the hour itself, with `24` (and `0`)
/// meaning midnight. In 12-hour mode the current period picks the half of
/// the day, so tapping `12` gives 0 before noon and 12 after.
pub fn hour_from_ring_value(value: u8, is_24_hour: bool, is_post_meridiem: bool) -> u8 {
    if is_24_hour {
        value % 24
    } else {
        value % 12 + if is_post_meridiem { 12 } else { 0 }
    }
}

/// Minute (0-59) selected by tapping the minute position labelled `value`.
pub fn minute_from_ring_value(value: u8) -> u8 {
    value % 60
}

/// Ring value of the hour position that represents `hour`.
pub fn hour_ring_value(hour: u8, is_24_hour: bool) -> u8 {
    match (is_24_hour, hour) {
        (true, 0) => 24,
        (true, hour) => hour,
        (false, hour) => match hour % 12 {
            0 => 12,
            hour => hour,
        },
    }
}

/// Ring value of the minute position that represents `minute`.
pub fn minute_ring_value(minute: u8) -> u8 {
    if minute == 0 { 60 } else { minute }
}

/// Index of the position labelled `value`.
///
/// Returns `None` only for a ring that has not been laid out. A laid-out ring
/// always covers every reachable value, so a miss there is a bug.
pub(crate) fn find_position(positions: &[DialPosition], value: u8) -> Option<usize> {
    if positions.is_empty() {
        return None;
    }
    let index = positions
        .iter()
        .position(|position| position.value == value)
        .unwrap_or_else(|| panic!("no dial position for ring value {value}"));
    Some(index)
}

/// Header text for `time` in the given hour format.
pub fn header_text(time: TimeOfDay, is_24_hour: bool) -> HeaderText {
    let hour = if is_24_hour {
        time.hour()
    } else {
        time.hour_12()
    };
    HeaderText {
        hours: format!("{hour:02}"),
        minutes: format!("{:02}", time.minute()),
        period: (!is_24_hour).then(|| time.period()),
    }
}
