//! Continuous pointer tracking on the dial.
use glam::Vec2;

use crate::{
    angle::{
        angle_from_offset, hour_from_angle_12, hour_from_angle_24, minute_from_angle,
        ring_boundary,
    },
    geometry::DialCanvas,
    layout::DisplayMode,
    time::TimeOfDay,
};

/// An active drag gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragState {
    /// Absolute pointer position on the canvas.
    pub cursor: Vec2,
}

impl DragState {
    /// Starts tracking at `cursor`.
    pub fn new(cursor: Vec2) -> Self {
        Self { cursor }
    }

    /// Moves the cursor by `delta` and returns the new position.
    pub fn advance(&mut self, delta: Vec2) -> Vec2 {
        self.cursor += delta;
        self.cursor
    }
}

/// Dial settings that influence how a pointer position reads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct DragContext {
    pub canvas: DialCanvas,
    pub mode: DisplayMode,
    pub is_24_hour: bool,
    pub inner_ratio: f32,
}

/// Time the pointer at `cursor` selects, starting from `current`.
///
/// Only the component being edited changes. In 24-hour hours mode the
/// distance from the centre picks the ring and the angle picks the slot.
pub(crate) fn time_at_cursor(cursor: Vec2, context: DragContext, current: TimeOfDay) -> TimeOfDay {
    let offset = cursor - context.canvas.center();
    let angle = angle_from_offset(offset);

    match context.mode {
        DisplayMode::Minutes => current.with_minute(minute_from_angle(angle)),
        DisplayMode::Hours if context.is_24_hour => {
            let boundary = ring_boundary(context.canvas.outer_radius(), context.inner_ratio);
            let on_outer_ring = offset.length() > boundary;
            current.with_hour(hour_from_angle_24(angle, on_outer_ring))
        }
        DisplayMode::Hours => {
            current.with_hour(hour_from_angle_12(angle, current.is_post_meridiem()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(mode: DisplayMode, is_24_hour: bool) -> DragContext {
        DragContext {
            canvas: DialCanvas::square(200.0),
            mode,
            is_24_hour,
            inner_ratio: 0.7,
        }
    }

    #[test]
    fn test_minutes_keep_hour() {
        let current = TimeOfDay::wrapping(9, 0);
        let time = time_at_cursor(
            Vec2::new(100.0, 190.0),
            context(DisplayMode::Minutes, false),
            current,
        );
        assert_eq!(time, TimeOfDay::wrapping(9, 30));
    }

    #[test]
    fn test_24_hour_radius_picks_ring() {
        let ctx = context(DisplayMode::Hours, true);
        let current = TimeOfDay::wrapping(5, 45);
        // 3 o'clock, outer ring
        let outer = time_at_cursor(Vec2::new(195.0, 100.0), ctx, current);
        assert_eq!(outer, TimeOfDay::wrapping(15, 45));
        // 3 o'clock, inner ring
        let inner = time_at_cursor(Vec2::new(170.0, 100.0), ctx, current);
        assert_eq!(inner, TimeOfDay::wrapping(3, 45));
        // top: "00" outside, "12" inside
        let top_outer = time_at_cursor(Vec2::new(100.0, 5.0), ctx, current);
        assert_eq!(top_outer.hour(), 0);
        let top_inner = time_at_cursor(Vec2::new(100.0, 30.0), ctx, current);
        assert_eq!(top_inner.hour(), 12);
    }

    #[test]
    fn test_12_hour_keeps_period() {
        let ctx = context(DisplayMode::Hours, false);
        let pm = time_at_cursor(Vec2::new(200.0, 100.0), ctx, TimeOfDay::wrapping(14, 0));
        assert_eq!(pm.hour(), 15);
        let am = time_at_cursor(Vec2::new(200.0, 100.0), ctx, TimeOfDay::wrapping(2, 0));
        assert_eq!(am.hour(), 3);
        let top = time_at_cursor(Vec2::new(100.0, 0.0), ctx, TimeOfDay::wrapping(2, 0));
        assert_eq!(top.hour(), 0);
    }

    #[test]
    fn test_drag_state_accumulates() {
        let mut drag = DragState::new(Vec2::new(10.0, 10.0));
        drag.advance(Vec2::new(5.0, -2.0));
        assert_eq!(drag.advance(Vec2::new(1.0, 1.0)), Vec2::new(16.0, 9.0));
    }
}
