//! Dial layout engine.
//!
//! Places the selectable values of a ring evenly around a circle and labels
//! them. Layout is a pure function of the ring description and the canvas; the
//! controller regenerates every ring whenever the hour format or the canvas
//! changes.
//!
//! ## Ordering
//!
//! Sequence index `i` of a ring sits at `i * 360° / N`, clockwise from
//! 12 o'clock. The ring presets list their top value first (`12`, `24` or
//! `60`) so that every value lands where it sits on a real clock face.
use std::ops::RangeInclusive;

use glam::Vec2;
use smallvec::{SmallVec, smallvec};

use crate::geometry::{DialCanvas, point_on_circle};

/// Which time component a ring, a position, or the dial as a whole edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DisplayMode {
    /// Hour positions are interactive.
    #[default]
    Hours,
    /// Minute positions are interactive.
    Minutes,
}

/// Outer or inner circle of the hours canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ring {
    /// Full radius. Used by every ring except the 24-hour inner one.
    Outer,
    /// Reduced radius holding hours 1-12 in 24-hour mode.
    Inner,
}

/// Visual weight of a position. Never affects mapping or selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerSize {
    /// Regular labelled button.
    Full,
    /// Smaller, dimmed button on the 24-hour inner ring.
    Inner,
    /// Small unlabelled dot between the labelled minutes.
    Hint,
}

/// One selectable point of a ring.
#[derive(Debug, Clone, PartialEq)]
pub struct DialPosition {
    /// Raw ring value, e.g. 1-12, 13-24 or 1-60.
    pub value: u8,
    /// Component this position edits.
    pub member: DisplayMode,
    /// Centre of the position on the canvas.
    pub center: Vec2,
    /// Circle the position belongs to.
    pub ring: Ring,
    /// Visual weight.
    pub marker: MarkerSize,
    /// Text shown on the position.
    pub label: String,
}

impl DialPosition {
    /// Returns whether this position sits on the 24-hour inner ring.
    pub fn is_inner_ring(&self) -> bool {
        self.ring == Ring::Inner
    }
}

/// Description of one ring of positions.
#[derive(Debug, Clone, PartialEq)]
pub struct RingSpec {
    /// Component the ring edits.
    pub member: DisplayMode,
    /// Values in clockwise order, starting at 12 o'clock.
    pub values: Vec<u8>,
    /// Ring radius as a fraction of the outer radius.
    pub ratio: f32,
    /// Zero-pad width for labels.
    pub label_width: usize,
    /// Value that is labelled `0` (the ring's modulus), if any.
    pub wrap_at: Option<u8>,
    /// Every `hint_step`-th value is a full marker, the rest are hints.
    pub hint_step: Option<u8>,
}

impl RingSpec {
    /// Single hours ring used in 12-hour mode: `12, 1, ..., 11`.
    pub fn hours_12() -> Self {
        Self {
            member: DisplayMode::Hours,
            values: top_first(12, 1..=11),
            ratio: 1.0,
            label_width: 1,
            wrap_at: None,
            hint_step: None,
        }
    }

    /// Outer 24-hour ring: `24, 13, ..., 23`, with 24 labelled `00`.
    pub fn hours_24_outer() -> Self {
        Self {
            member: DisplayMode::Hours,
            values: top_first(24, 13..=23),
            ratio: 1.0,
            label_width: 2,
            wrap_at: Some(24),
            hint_step: None,
        }
    }

    /// Inner 24-hour ring: `12, 1, ..., 11` at `inner_ratio` of the radius.
    pub fn hours_24_inner(inner_ratio: f32) -> Self {
        Self {
            ratio: inner_ratio,
            ..Self::hours_12()
        }
    }

    /// Minutes ring: `60, 1, ..., 59`, with 60 labelled `00`.
    pub fn minutes(hint_step: u8) -> Self {
        Self {
            member: DisplayMode::Minutes,
            values: top_first(60, 1..=59),
            ratio: 1.0,
            label_width: 2,
            wrap_at: Some(60),
            hint_step: Some(hint_step.max(1)),
        }
    }

    /// Angle between neighbouring positions, in radians.
    pub fn step_angle(&self) -> f32 {
        std::f32::consts::TAU / self.values.len() as f32
    }

    /// Label for a ring value.
    pub fn label_for(&self, value: u8) -> String {
        let shown = if Some(value) == self.wrap_at { 0 } else { value };
        format!("{shown:0width$}", width = self.label_width)
    }

    fn marker_for(&self, value: u8) -> MarkerSize {
        if self.ratio < 1.0 {
            return MarkerSize::Inner;
        }
        match self.hint_step {
            Some(step) if value % step != 0 => MarkerSize::Hint,
            _ => MarkerSize::Full,
        }
    }
}

/// Ring descriptions for the hours canvas.
pub fn hour_rings(is_24_hour: bool, inner_ratio: f32) -> SmallVec<[RingSpec; 2]> {
    if is_24_hour {
        smallvec![
            RingSpec::hours_24_outer(),
            RingSpec::hours_24_inner(inner_ratio)
        ]
    } else {
        smallvec![RingSpec::hours_12()]
    }
}

/// Computes the positions of one ring.
///
/// Returns an empty list when the canvas has not been measured as a usable
/// square, or when the ring radius would not be positive.
pub fn layout_ring(canvas: DialCanvas, min_side: f32, spec: &RingSpec) -> Vec<DialPosition> {
    if !canvas.is_measured(min_side) || spec.values.is_empty() {
        return Vec::new();
    }
    let radius = canvas.outer_radius() * spec.ratio;
    if radius.is_nan() || radius <= 0.0 {
        return Vec::new();
    }

    let center = canvas.center();
    let step = spec.step_angle();
    let ring = if spec.ratio < 1.0 {
        Ring::Inner
    } else {
        Ring::Outer
    };

    spec.values
        .iter()
        .enumerate()
        .map(|(index, &value)| DialPosition {
            value,
            member: spec.member,
            center: point_on_circle(center, radius, index as f32 * step),
            ring,
            marker: spec.marker_for(value),
            label: spec.label_for(value),
        })
        .collect()
}

/// Lays out every ring of the hours canvas, outer ring first.
pub fn layout_rings(canvas: DialCanvas, min_side: f32, specs: &[RingSpec]) -> Vec<DialPosition> {
    specs
        .iter()
        .flat_map(|spec| layout_ring(canvas, min_side, spec))
        .collect()
}

fn top_first(top: u8, rest: RangeInclusive<u8>) -> Vec<u8> {
    std::iter::once(top).chain(rest).collect()
}
