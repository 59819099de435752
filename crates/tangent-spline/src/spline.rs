//! Control point storage and the edit operations that keep it consistent.

use std::cell::OnceCell;

use tangent_core::math::Vec3;

use crate::bounds::BoundingBox;
use crate::config::SplineConfig;
use crate::data::SplineData;
use crate::enforce::{enforce_mode, mode_index};
use crate::error::{SplineError, SplineResult};
use crate::mode::TangentMode;
use crate::transform::{LocalSpace, SplineTransform};

/// An editable chain of cubic Bezier segments sharing their end anchors.
///
/// Control point `i` is an anchor when `i % 3 == 0`; the others are
/// handles of the nearest anchor. The layout always holds `3n + 1` points
/// and `n + 1` tangent modes for `n >= 1` segments. When the spline loops,
/// the first and last anchors (and their modes) are kept identical.
///
/// Points are stored in local space; queries are answered in the space
/// produced by the spline's [`SplineTransform`].
///
/// # Example
///
/// ```
/// use tangent_spline::{BezierSpline, TangentMode};
/// use glam::Vec3;
///
/// let mut spline = BezierSpline::new();
/// spline.add_segment();
/// spline.set_control_point_mode(3, TangentMode::Mirrored)?;
/// spline.set_control_point(2, Vec3::new(3.0, 1.0, 0.0))?;
///
/// // The opposite handle was mirrored through anchor 3.
/// assert_eq!(spline.control_point(4)?, Vec3::new(5.0, -1.0, 0.0));
/// # Ok::<(), tangent_spline::SplineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct BezierSpline<T = LocalSpace> {
    pub(crate) points: Vec<Vec3>,
    pub(crate) modes: Vec<TangentMode>,
    pub(crate) looped: bool,
    pub(crate) transform: T,
    pub(crate) config: SplineConfig,
    pub(crate) bounds: OnceCell<BoundingBox>,
}

impl BezierSpline<LocalSpace> {
    /// Create the default single-segment spline in local space.
    pub fn new() -> Self {
        Self::with_transform(LocalSpace)
    }
}

impl Default for BezierSpline<LocalSpace> {
    fn default() -> Self {
        Self::new()
    }
}

fn default_points() -> Vec<Vec3> {
    vec![
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(2.0, 0.0, 0.0),
        Vec3::new(3.0, 0.0, 0.0),
        Vec3::new(4.0, 0.0, 0.0),
    ]
}

impl<T: SplineTransform> BezierSpline<T> {
    /// Create the default single-segment spline mapped through `transform`.
    pub fn with_transform(transform: T) -> Self {
        Self {
            points: default_points(),
            modes: vec![TangentMode::Free; 2],
            looped: false,
            transform,
            config: SplineConfig::default(),
            bounds: OnceCell::new(),
        }
    }

    /// Rebuild a spline from its persisted fields.
    ///
    /// The layout and, for loops, the seam are validated. Tangent modes are
    /// re-enforced on every constrained anchor.
    pub fn from_data(data: SplineData, transform: T) -> SplineResult<Self> {
        data.validate()?;
        let SplineData {
            points,
            modes,
            looped,
        } = data;

        let mut spline = Self {
            points,
            modes,
            looped,
            transform,
            config: SplineConfig::default(),
            bounds: OnceCell::new(),
        };
        for anchor in (0..spline.points.len()).step_by(3) {
            spline.enforce(anchor);
        }
        tracing::debug!(
            curves = spline.curve_count(),
            looped = spline.looped,
            "spline restored from data"
        );
        Ok(spline)
    }

    /// Copy out the persisted fields. The bounds cache is not part of it.
    pub fn to_data(&self) -> SplineData {
        SplineData {
            points: self.points.clone(),
            modes: self.modes.clone(),
            looped: self.looped,
        }
    }

    /// Replace the sampling/editing policy; see [`BezierSpline::set_config`].
    pub fn with_config(mut self, config: SplineConfig) -> SplineResult<Self> {
        self.set_config(config)?;
        Ok(self)
    }

    pub fn config(&self) -> &SplineConfig {
        &self.config
    }

    /// Fails with [`SplineError::InvalidConfig`] and keeps the current
    /// policy if `config` does not validate.
    pub fn set_config(&mut self, config: SplineConfig) -> SplineResult<()> {
        if let Err(err) = config.validate() {
            tracing::warn!(%err, "spline config rejected");
            return Err(err);
        }
        self.config = config;
        self.invalidate_bounds();
        Ok(())
    }

    pub fn transform(&self) -> &T {
        &self.transform
    }

    /// Replace the local-to-world transform. Cached bounds are dropped.
    pub fn set_transform(&mut self, transform: T) {
        self.transform = transform;
        self.invalidate_bounds();
    }

    /// Restore the default single-segment open spline.
    pub fn reset(&mut self) {
        self.points = default_points();
        self.modes = vec![TangentMode::Free; 2];
        self.looped = false;
        self.invalidate_bounds();
        tracing::debug!("spline reset");
    }

    /// Number of control points (anchors and handles).
    pub fn control_point_count(&self) -> usize {
        self.points.len()
    }

    /// Number of cubic segments.
    pub fn curve_count(&self) -> usize {
        (self.points.len() - 1) / 3
    }

    pub fn control_points(&self) -> &[Vec3] {
        &self.points
    }

    /// One mode per anchor, first to last.
    pub fn modes(&self) -> &[TangentMode] {
        &self.modes
    }

    pub fn control_point(&self, index: usize) -> SplineResult<Vec3> {
        self.check_point_index(index)?;
        Ok(self.points[index])
    }

    /// Move control point `index` to `position`.
    ///
    /// Moving an anchor carries its handles along by the same offset (on a
    /// loop, the seam anchor drags both seam handles and its twin). The
    /// anchor's tangent mode is enforced afterwards.
    pub fn set_control_point(&mut self, index: usize, position: Vec3) -> SplineResult<()> {
        self.check_point_index(index)?;
        self.move_point(index, position);
        Ok(())
    }

    /// Unchecked body of [`BezierSpline::set_control_point`].
    fn move_point(&mut self, index: usize, position: Vec3) {
        let last = self.points.len() - 1;

        if index % 3 == 0 {
            let delta = position - self.points[index];
            if self.looped {
                if index == 0 {
                    self.points[1] += delta;
                    self.points[last - 1] += delta;
                    self.points[last] = position;
                } else if index == last {
                    self.points[0] = position;
                    self.points[1] += delta;
                    self.points[index - 1] += delta;
                } else {
                    self.points[index - 1] += delta;
                    self.points[index + 1] += delta;
                }
            } else {
                if index > 0 {
                    self.points[index - 1] += delta;
                }
                if index < last {
                    self.points[index + 1] += delta;
                }
            }
        }

        self.points[index] = position;
        self.enforce(index);
        self.invalidate_bounds();
        tracing::trace!(index, ?position, "control point moved");
    }

    /// Mode of the anchor owning point `index`.
    pub fn control_point_mode(&self, index: usize) -> SplineResult<TangentMode> {
        self.check_point_index(index)?;
        Ok(self.modes[mode_index(index)])
    }

    /// Set the mode of the anchor owning point `index`, then enforce it.
    ///
    /// On a loop, setting either seam anchor updates both.
    pub fn set_control_point_mode(&mut self, index: usize, mode: TangentMode) -> SplineResult<()> {
        self.check_point_index(index)?;
        let slot = mode_index(index);
        let last = self.modes.len() - 1;

        self.modes[slot] = mode;
        if self.looped {
            if slot == 0 {
                self.modes[last] = mode;
            } else if slot == last {
                self.modes[0] = mode;
            }
        }

        self.enforce(index);
        self.invalidate_bounds();
        tracing::trace!(index, %mode, "tangent mode changed");
        Ok(())
    }

    pub fn is_loop(&self) -> bool {
        self.looped
    }

    /// Open or close the spline.
    ///
    /// Closing copies the first anchor's mode to the last one and snaps the
    /// last anchor onto the first.
    pub fn set_loop(&mut self, looped: bool) {
        self.looped = looped;
        if looped {
            self.close_loop();
        }
        self.invalidate_bounds();
        tracing::debug!(looped, "loop toggled");
    }

    /// Number of anchors (on-curve points), `curve_count() + 1`.
    pub fn spline_point_count(&self) -> usize {
        self.modes.len()
    }

    /// Position of anchor `ordinal` in `0..spline_point_count()`.
    pub fn spline_point(&self, ordinal: usize) -> SplineResult<Vec3> {
        let index = self.anchor_point_index(ordinal)?;
        Ok(self.points[index])
    }

    /// Move anchor `ordinal`; see [`BezierSpline::set_control_point`].
    pub fn set_spline_point(&mut self, ordinal: usize, position: Vec3) -> SplineResult<()> {
        let index = self.anchor_point_index(ordinal)?;
        self.move_point(index, position);
        Ok(())
    }

    /// Drop the cached bounding box.
    ///
    /// Every mutation on the spline already does this. Call it yourself
    /// when the transform's output changes behind the spline's back.
    pub fn invalidate_bounds(&mut self) {
        self.bounds.take();
    }

    pub(crate) fn enforce(&mut self, index: usize) {
        enforce_mode(&mut self.points, &self.modes, self.looped, index);
    }

    /// Re-synchronize the seam: last mode and anchor follow the first, and
    /// the seam mode is enforced from the incoming handle.
    pub(crate) fn close_loop(&mut self) {
        let last_slot = self.modes.len() - 1;
        self.modes[last_slot] = self.modes[0];
        let first = self.points[0];
        self.move_point(0, first);
    }

    fn anchor_point_index(&self, ordinal: usize) -> SplineResult<usize> {
        let count = self.spline_point_count();
        if ordinal >= count {
            tracing::warn!(ordinal, count, "anchor ordinal out of range");
            return Err(SplineError::IndexOutOfRange {
                index: ordinal,
                len: count,
            });
        }
        Ok(ordinal * 3)
    }

    pub(crate) fn check_point_index(&self, index: usize) -> SplineResult<()> {
        let len = self.points.len();
        if index >= len {
            tracing::warn!(index, len, "control point index out of range");
            return Err(SplineError::IndexOutOfRange { index, len });
        }
        Ok(())
    }
}
