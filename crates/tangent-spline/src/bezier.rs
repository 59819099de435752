//! Position and first derivative of one spline segment.

use tangent_core::math::Vec3;

/// The four control points of one segment, in local space.
///
/// A spline segment runs from anchor `3k` to anchor `3k + 3`, with the
/// two handles in between. `t` is clamped to `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    pub start: Vec3,
    /// Outgoing handle of `start`.
    pub start_handle: Vec3,
    /// Incoming handle of `end`.
    pub end_handle: Vec3,
    pub end: Vec3,
}

impl CubicBezier {
    pub fn new(start: Vec3, start_handle: Vec3, end_handle: Vec3, end: Vec3) -> Self {
        Self {
            start,
            start_handle,
            end_handle,
            end,
        }
    }

    /// Bernstein blend of the four points.
    pub fn eval(&self, t: f32) -> Vec3 {
        let t = t.clamp(0.0, 1.0);
        let s = 1.0 - t;
        let [b0, b1, b2, b3] = [s * s * s, 3.0 * s * s * t, 3.0 * s * t * t, t * t * t];
        b0 * self.start + b1 * self.start_handle + b2 * self.end_handle + b3 * self.end
    }

    /// Velocity with respect to `t`: the quadratic blend of the three
    /// hull edges, scaled by 3.
    pub fn derivative(&self, t: f32) -> Vec3 {
        let t = t.clamp(0.0, 1.0);
        let s = 1.0 - t;
        let leave = self.start_handle - self.start;
        let across = self.end_handle - self.start_handle;
        let arrive = self.end - self.end_handle;
        3.0 * (s * s * leave + 2.0 * s * t * across + t * t * arrive)
    }
}
