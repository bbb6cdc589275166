//! Pointer angle to time component mapping.
//!
//! Angles are in radians, measured clockwise from 12 o'clock, normalised to
//! `[0, TAU)`. This is the same convention the layout engine uses to place
//! positions, so a pointer resting on a position maps back to its value.
//! Rounding is half away from zero.
use std::f32::consts::{PI, TAU};

use glam::Vec2;

/// Angle of `offset` (cursor minus dial centre), clockwise from 12 o'clock.
///
/// A zero offset maps to 12 o'clock.
pub fn angle_from_offset(offset: Vec2) -> f32 {
    if offset.length_squared() <= f32::EPSILON {
        return 0.0;
    }
    let angle = offset.x.atan2(-offset.y);
    let angle = if angle < 0.0 { angle + TAU } else { angle };
    if angle >= TAU { angle - TAU } else { angle }
}

/// Minute (0-59) pointed at by `angle`.
pub fn minute_from_angle(angle: f32) -> u8 {
    ((angle * 30.0 / PI).round() as i32).rem_euclid(60) as u8
}

/// Clock slot (0-11) pointed at by `angle`; 0 is the top.
pub fn hour_slot_from_angle(angle: f32) -> u8 {
    ((angle * 6.0 / PI).round() as i32).rem_euclid(12) as u8
}

/// Hour (0-23) for a 12-hour dial; the period picks the half of the day.
pub fn hour_from_angle_12(angle: f32, is_post_meridiem: bool) -> u8 {
    hour_slot_from_angle(angle) + if is_post_meridiem { 12 } else { 0 }
}

/// Hour (0-23) for a 24-hour dial.
///
/// The outer ring holds `00, 13..23` and the inner ring `12, 1..11`, so the
/// top slot folds to 0 on the outer ring and to 12 on the inner one.
pub fn hour_from_angle_24(angle: f32, on_outer_ring: bool) -> u8 {
    let hour = hour_slot_from_angle(angle) + if on_outer_ring { 12 } else { 0 };
    match hour {
        12 => 0,
        0 => 12,
        hour => hour,
    }
}

/// Radius separating the inner and outer 24-hour rings: halfway between them.
pub fn ring_boundary(outer_radius: f32, inner_ratio: f32) -> f32 {
    let inner = outer_radius * inner_ratio;
    inner + (outer_radius - inner) / 2.0
}
