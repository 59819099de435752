//! Parametric evaluation over the whole chain of segments.
//!
//! The global parameter `t` in `[0, 1]` is split evenly between segments:
//! segment `k` of `n` covers `[k / n, (k + 1) / n)`, and `t >= 1` lands on
//! the end of the last segment.

use tangent_core::math::Vec3;
use tangent_core::profiling::profile_function;

use crate::bezier::CubicBezier;
use crate::error::{SplineError, SplineResult};
use crate::spline::BezierSpline;
use crate::transform::SplineTransform;

impl<T: SplineTransform> BezierSpline<T> {
    /// First control point index of the segment containing `t`, and the
    /// local parameter inside that segment.
    fn locate(&self, t: f32) -> (usize, f32) {
        if t >= 1.0 {
            return (self.points.len() - 4, 1.0);
        }
        let scaled = t.clamp(0.0, 1.0) * self.curve_count() as f32;
        let segment = (scaled as usize).min(self.curve_count() - 1);
        (segment * 3, scaled - segment as f32)
    }

    fn local_segment(&self, start: usize) -> CubicBezier {
        CubicBezier::new(
            self.points[start],
            self.points[start + 1],
            self.points[start + 2],
            self.points[start + 3],
        )
    }

    /// Segment `index` in local space.
    pub fn segment(&self, index: usize) -> SplineResult<CubicBezier> {
        let count = self.curve_count();
        if index >= count {
            return Err(SplineError::IndexOutOfRange { index, len: count });
        }
        Ok(self.local_segment(index * 3))
    }

    /// Iterate over all segments in local space.
    pub fn segments(&self) -> impl Iterator<Item = CubicBezier> + '_ {
        (0..self.curve_count()).map(|i| self.local_segment(i * 3))
    }

    /// World-space position at global parameter `t`.
    pub fn point(&self, t: f32) -> Vec3 {
        let (start, local) = self.locate(t);
        self.transform.transform_point(self.local_segment(start).eval(local))
    }

    /// World-space first derivative with respect to the segment's local
    /// parameter at global parameter `t`.
    pub fn velocity(&self, t: f32) -> Vec3 {
        let (start, local) = self.locate(t);
        self.transform
            .transform_vector(self.local_segment(start).derivative(local))
    }

    /// Unit direction of travel at `t`.
    ///
    /// Fails with [`SplineError::DegenerateTangent`] where the velocity is
    /// zero, e.g. at an anchor whose handle sits on top of it.
    pub fn direction(&self, t: f32) -> SplineResult<Vec3> {
        self.velocity(t).try_normalize().ok_or_else(|| {
            tracing::warn!(t, "direction requested on zero velocity");
            SplineError::DegenerateTangent { t }
        })
    }

    /// Like [`BezierSpline::direction`], but yields zero where undefined.
    pub fn direction_or_zero(&self, t: f32) -> Vec3 {
        self.velocity(t).normalize_or_zero()
    }

    /// Global parameter at which anchor `ordinal` is reached.
    pub fn anchor_parameter(&self, ordinal: usize) -> SplineResult<f32> {
        let count = self.spline_point_count();
        if ordinal >= count {
            return Err(SplineError::IndexOutOfRange {
                index: ordinal,
                len: count,
            });
        }
        Ok(ordinal as f32 / self.curve_count() as f32)
    }

    /// Ordinal of the anchor whose parameter is closest to `t`.
    pub fn nearest_anchor(&self, t: f32) -> usize {
        let scaled = t.clamp(0.0, 1.0) * self.curve_count() as f32;
        scaled.round() as usize
    }

    /// `count + 1` world-space points at evenly spaced parameters,
    /// including both ends. Returns only the start point for `count == 0`.
    pub fn sample(&self, count: usize) -> Vec<Vec3> {
        profile_function!();
        if count == 0 {
            return vec![self.point(0.0)];
        }
        (0..=count)
            .map(|i| self.point(i as f32 / count as f32))
            .collect()
    }

    /// Approximate world-space arc length using `subdivisions` chords.
    pub fn approximate_length(&self, subdivisions: usize) -> f32 {
        self.sample(subdivisions.max(1))
            .windows(2)
            .map(|w| w[0].distance(w[1]))
            .sum()
    }
}
