//! Axis-aligned bounding box of the sampled curve.

use tangent_core::math::Vec3;
use tangent_core::profiling::profile_function;

use crate::spline::BezierSpline;
use crate::transform::SplineTransform;

/// An axis-aligned box stored as center and half-extents.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub center: Vec3,
    /// Half the size along each axis.
    pub extents: Vec3,
}

impl BoundingBox {
    pub fn from_center_size(center: Vec3, size: Vec3) -> Self {
        Self {
            center,
            extents: size * 0.5,
        }
    }

    pub fn from_min_max(min: Vec3, max: Vec3) -> Self {
        Self {
            center: (min + max) * 0.5,
            extents: (max - min) * 0.5,
        }
    }

    pub fn min(&self) -> Vec3 {
        self.center - self.extents
    }

    pub fn max(&self) -> Vec3 {
        self.center + self.extents
    }

    pub fn size(&self) -> Vec3 {
        self.extents * 2.0
    }

    /// Grow the box so it contains `point`.
    pub fn encapsulate(&mut self, point: Vec3) {
        *self = Self::from_min_max(self.min().min(point), self.max().max(point));
    }

    /// Whether `point` lies inside or on the box.
    pub fn contains(&self, point: Vec3) -> bool {
        point.cmpge(self.min()).all() && point.cmple(self.max()).all()
    }
}

impl<T: SplineTransform> BezierSpline<T> {
    /// World-space bounds of the curve, computed on first use and cached.
    ///
    /// The box is seeded with a small cube around the start point and grown
    /// over `bounds_samples_per_curve` samples per segment. Sampling can
    /// miss the very tip of a sharp bulge between two samples.
    pub fn bounding_box(&self) -> BoundingBox {
        *self.bounds.get_or_init(|| self.compute_bounds())
    }

    fn compute_bounds(&self) -> BoundingBox {
        profile_function!();
        let seed = BoundingBox::from_center_size(
            self.point(0.0),
            Vec3::splat(self.config.bounds_min_size),
        );
        let (mut min, mut max) = (seed.min(), seed.max());
        let steps = self.config.bounds_samples_per_curve * self.curve_count();
        for i in 1..=steps {
            let point = self.point(i as f32 / steps as f32);
            min = min.min(point);
            max = max.max(point);
        }
        let bounds = BoundingBox::from_min_max(min, max);
        tracing::trace!(?bounds, steps, "bounds recomputed");
        bounds
    }
}
