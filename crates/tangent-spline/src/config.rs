use tangent_core::math::Vec3;

use crate::error::{SplineError, SplineResult};

/// Smallest accepted search step: the spacing of `f32` values just below 1.
pub const MIN_SEARCH_STEP: f32 = f32::EPSILON;

/// Sampling and editing policy for a [`BezierSpline`](crate::BezierSpline).
///
/// The defaults are the values every existing spline asset was authored
/// against; change them only if all consumers agree.
#[derive(Debug, Clone, PartialEq)]
pub struct SplineConfig {
    /// Samples per curve segment used when computing the bounding box.
    pub bounds_samples_per_curve: usize,
    /// Edge length of the seed box placed around the start point, so a
    /// straight or single-point spline still has a non-zero volume.
    pub bounds_min_size: f32,
    /// Parameter step of the first nearest-point pass.
    pub search_initial_step: f32,
    /// Divisor applied to the step between nearest-point passes.
    pub search_refine_factor: f32,
    /// The search stops once the step is no longer above this value.
    pub search_min_step: f32,
    /// Offset between successive points appended by `add_segment`.
    pub segment_step: Vec3,
}

impl Default for SplineConfig {
    fn default() -> Self {
        SplineConfig {
            bounds_samples_per_curve: 10,
            bounds_min_size: 0.1,
            search_initial_step: 0.1,
            search_refine_factor: 8.0,
            search_min_step: 0.001,
            segment_step: Vec3::X,
        }
    }
}

impl SplineConfig {
    /// Reject values that would make bounds meaningless or let the
    /// nearest-point search run unbounded.
    ///
    /// [`BezierSpline::set_config`](crate::BezierSpline::set_config) calls
    /// this before accepting a config.
    pub fn validate(&self) -> SplineResult<()> {
        if self.bounds_samples_per_curve == 0 {
            return Err(SplineError::invalid_config(
                "bounds_samples_per_curve must be at least 1",
            ));
        }
        if !(self.bounds_min_size.is_finite() && self.bounds_min_size >= 0.0) {
            return Err(SplineError::invalid_config(format!(
                "bounds_min_size must be finite and non-negative, got {}",
                self.bounds_min_size
            )));
        }
        if !(self.search_initial_step.is_finite() && self.search_initial_step >= MIN_SEARCH_STEP) {
            return Err(SplineError::invalid_config(format!(
                "search_initial_step must be finite and at least {}, got {}",
                MIN_SEARCH_STEP, self.search_initial_step
            )));
        }
        if !(self.search_refine_factor.is_finite() && self.search_refine_factor >= 1.0) {
            return Err(SplineError::invalid_config(format!(
                "search_refine_factor must be finite and at least 1, got {}",
                self.search_refine_factor
            )));
        }
        if !(self.search_min_step.is_finite() && self.search_min_step >= 0.0) {
            return Err(SplineError::invalid_config(format!(
                "search_min_step must be finite and non-negative, got {}",
                self.search_min_step
            )));
        }
        if !self.segment_step.is_finite() {
            return Err(SplineError::invalid_config(format!(
                "segment_step must be finite, got {}",
                self.segment_step
            )));
        }
        Ok(())
    }

    /// Number of refinement passes the nearest-point search performs.
    ///
    /// A schedule that would never shrink below `search_min_step` runs a
    /// single pass.
    pub fn search_passes(&self) -> usize {
        let shrinks = self.search_refine_factor > 1.0 && self.search_min_step > 0.0;
        if !(shrinks && self.search_initial_step.is_finite()) {
            return 1;
        }
        let mut passes = 0;
        let mut step = self.search_initial_step;
        while step > self.search_min_step {
            passes += 1;
            step /= self.search_refine_factor;
        }
        passes
    }
}
