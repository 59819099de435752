//! Nearest-point search and the convex containment test built on it.

use tangent_core::math::Vec3;
use tangent_core::profiling::{profile_function, profile_scope};

use crate::spline::BezierSpline;
use crate::transform::SplineTransform;

impl<T: SplineTransform> BezierSpline<T> {
    /// Global parameter of the curve point closest to `target` (world space).
    ///
    /// Coarse-to-fine grid search: each pass samples the current bracket at
    /// a fixed step, then narrows the bracket to half a step around the best
    /// sample and divides the step by `search_refine_factor`. Every pass
    /// evaluates a precomputed number of samples, so the search always
    /// terminates. The result is a local optimum; on strongly curled splines
    /// a closer point in another part of the curve can be missed. The output
    /// is deterministic for a given spline and target.
    ///
    /// The returned parameter may lie slightly outside `[0, 1]`; evaluation
    /// clamps it.
    pub fn nearest_parameter(&self, target: Vec3) -> f32 {
        profile_function!();
        let passes = self.config.search_passes();

        let mut nearest_t = 0.0_f32;
        let mut nearest_distance = target.distance(self.point(nearest_t));
        let (mut min_t, mut max_t) = (0.0_f32, 1.0_f32);
        let (mut next_min_t, mut next_max_t) = (min_t, max_t);
        let mut step = self.config.search_initial_step;

        for _ in 0..passes {
            profile_scope!("search_pass");
            let half_step = step / 2.0;
            let samples = ((max_t - min_t) / step).floor() as usize + 1;
            for i in 0..samples {
                let t = min_t + i as f32 * step;
                let distance = target.distance(self.point(t));
                if distance < nearest_distance {
                    nearest_distance = distance;
                    nearest_t = t;
                    next_min_t = t - half_step;
                    next_max_t = t + half_step;
                }
            }
            min_t = next_min_t;
            max_t = next_max_t;
            step /= self.config.search_refine_factor;
        }

        tracing::trace!(?target, t = nearest_t, distance = nearest_distance, "nearest point");
        nearest_t
    }

    /// The curve point closest to `target`; see [`BezierSpline::nearest_parameter`].
    pub fn nearest_point(&self, target: Vec3) -> Vec3 {
        self.point(self.nearest_parameter(target))
    }

    /// Whether `point` lies inside the region enclosed by the spline.
    ///
    /// Only meaningful for convex closed splines: the point counts as inside
    /// when it is closer to the bounding box center than its nearest curve
    /// point is.
    pub fn is_point_inside(&self, point: Vec3) -> bool {
        let center = self.bounding_box().center;
        let nearest = self.nearest_point(point);
        point.distance(center) < nearest.distance(center)
    }
}
