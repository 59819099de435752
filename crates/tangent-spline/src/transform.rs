//! Local-to-world mapping for spline queries.
//!
//! Control points are stored in the spline's local space. Every world-space
//! query (`point`, `velocity`, bounds, nearest point) goes through a
//! [`SplineTransform`] supplied by the owner of the spline.

use tangent_core::math::{Affine3A, Mat4, Quat, Vec3};

/// Maps local spline coordinates into world (or parent) space.
pub trait SplineTransform {
    /// Transform a point.
    fn transform_point(&self, point: Vec3) -> Vec3;

    /// World position of the local origin.
    fn origin(&self) -> Vec3 {
        self.transform_point(Vec3::ZERO)
    }

    /// Transform a direction/derivative vector.
    ///
    /// The default transforms `vector` as a point and subtracts the
    /// transformed origin. Implementations with access to the linear part
    /// should override this.
    fn transform_vector(&self, vector: Vec3) -> Vec3 {
        self.transform_point(vector) - self.origin()
    }
}

/// Identity transform: world space equals local space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LocalSpace;

impl SplineTransform for LocalSpace {
    fn transform_point(&self, point: Vec3) -> Vec3 {
        point
    }

    fn origin(&self) -> Vec3 {
        Vec3::ZERO
    }

    fn transform_vector(&self, vector: Vec3) -> Vec3 {
        vector
    }
}

/// Affine placement of a spline in its parent space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform3D {
    affine: Affine3A,
}

impl Default for Transform3D {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform3D {
    /// Leaves local coordinates unchanged.
    pub const IDENTITY: Self = Self {
        affine: Affine3A::IDENTITY,
    };

    pub fn from_affine(affine: Affine3A) -> Self {
        Self { affine }
    }

    /// Scale, then rotate, then translate.
    pub fn from_scale_rotation_translation(
        scale: Vec3,
        rotation: Quat,
        translation: Vec3,
    ) -> Self {
        Self {
            affine: Affine3A::from_scale_rotation_translation(scale, rotation, translation),
        }
    }

    /// Pure offset; vectors pass through unchanged.
    pub fn translate(offset: Vec3) -> Self {
        Self {
            affine: Affine3A::from_translation(offset),
        }
    }

    /// World-to-local mapping, used to turn a cursor position into a
    /// control point. `None` when the transform flattens space.
    pub fn inverse(&self) -> Option<Self> {
        let det = self.affine.matrix3.determinant();
        if det.abs() < f32::EPSILON {
            None
        } else {
            Some(Self {
                affine: self.affine.inverse(),
            })
        }
    }

    pub fn as_affine(&self) -> &Affine3A {
        &self.affine
    }
}

impl SplineTransform for Transform3D {
    fn transform_point(&self, point: Vec3) -> Vec3 {
        self.affine.transform_point3(point)
    }

    fn origin(&self) -> Vec3 {
        self.affine.translation.into()
    }

    fn transform_vector(&self, vector: Vec3) -> Vec3 {
        self.affine.transform_vector3(vector)
    }
}

impl SplineTransform for Affine3A {
    fn transform_point(&self, point: Vec3) -> Vec3 {
        self.transform_point3(point)
    }

    fn origin(&self) -> Vec3 {
        self.translation.into()
    }
}

impl SplineTransform for Mat4 {
    fn transform_point(&self, point: Vec3) -> Vec3 {
        self.transform_point3(point)
    }

    fn origin(&self) -> Vec3 {
        self.w_axis.truncate()
    }
}

/// Adapts a closure to [`SplineTransform`].
///
/// Useful when the host reads a live scene-graph node on every query. The
/// spline cannot see changes made through the closure, so owners must call
/// [`BezierSpline::invalidate_bounds`](crate::BezierSpline::invalidate_bounds)
/// when the node moves.
#[derive(Clone, Copy)]
pub struct FnTransform<F>(pub F);

impl<F> SplineTransform for FnTransform<F>
where
    F: Fn(Vec3) -> Vec3,
{
    fn transform_point(&self, point: Vec3) -> Vec3 {
        (self.0)(point)
    }
}

impl<T: SplineTransform + ?Sized> SplineTransform for &T {
    fn transform_point(&self, point: Vec3) -> Vec3 {
        (**self).transform_point(point)
    }

    fn origin(&self) -> Vec3 {
        (**self).origin()
    }

    fn transform_vector(&self, vector: Vec3) -> Vec3 {
        (**self).transform_vector(vector)
    }
}
