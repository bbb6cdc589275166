//! Drawing surface geometry for the dial.
//!
//! Coordinates follow the usual screen convention: origin at the top-left,
//! x growing to the right and y growing downward.
use glam::Vec2;

/// Smallest side length, in host units, for which layout is generated.
pub const DEFAULT_MIN_CANVAS_SIDE: f32 = 10.0;

/// Size of the square surface the dial positions are placed on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DialCanvas {
    /// Width in host units.
    pub width: f32,
    /// Height in host units.
    pub height: f32,
}

impl DialCanvas {
    /// Creates a canvas of the given size.
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Creates a square canvas.
    pub const fn square(side: f32) -> Self {
        Self::new(side, side)
    }

    /// Returns whether the host has measured a usable square surface.
    ///
    /// Surfaces narrower than `min_side` or with unequal sides are not laid
    /// out yet.
    pub fn is_measured(&self, min_side: f32) -> bool {
        self.width.is_finite()
            && self.height.is_finite()
            && self.width >= min_side
            && self.width > 0.0
            && self.width == self.height
    }

    /// Centre of the surface.
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Radius of the outer ring.
    pub fn outer_radius(&self) -> f32 {
        self.width / 2.0
    }
}

/// Point on a circle of `radius` around `center`, at `angle` radians measured
/// clockwise from 12 o'clock.
pub fn point_on_circle(center: Vec2, radius: f32, angle: f32) -> Vec2 {
    let (sin, cos) = angle.sin_cos();
    Vec2::new(center.x + sin * radius, center.y - cos * radius)
}
