//! Adding and removing whole segments.

use crate::enforce::mode_index;
use crate::error::{SplineError, SplineResult};
use crate::spline::BezierSpline;
use crate::transform::SplineTransform;

impl<T: SplineTransform> BezierSpline<T> {
    /// Append one segment after the last anchor.
    ///
    /// The two handles and the new anchor are placed one
    /// [`segment_step`](crate::SplineConfig::segment_step) apart, starting
    /// from the current last anchor. The new anchor inherits the previous
    /// last anchor's mode. On a loop the new last anchor is snapped back
    /// onto the first.
    pub fn add_segment(&mut self) {
        let step = self.config.segment_step;
        let mut point = self.points[self.points.len() - 1];
        for _ in 0..3 {
            point += step;
            self.points.push(point);
        }

        let last_mode = self.modes[self.modes.len() - 1];
        self.modes.push(last_mode);
        self.enforce(self.points.len() - 4);

        if self.looped {
            let last = self.points.len() - 1;
            self.points[last] = self.points[0];
            let last_slot = self.modes.len() - 1;
            self.modes[last_slot] = self.modes[0];
            self.enforce(0);
        }

        self.invalidate_bounds();
        tracing::debug!(curves = self.curve_count(), "segment added");
    }

    /// Remove the segment selected by control point `selected_index`.
    ///
    /// - `selected_index <= 1` removes the first segment.
    /// - `selected_index >= len - 2` removes the last segment.
    /// - Otherwise the anchor owning `selected_index` is removed together
    ///   with its two handles, merging the two segments around it.
    ///
    /// On a loop the seam is closed again afterwards. The last anchor
    /// snaps onto the first and carries its incoming handle along.
    ///
    /// The last remaining segment cannot be removed.
    pub fn remove_segment(&mut self, selected_index: usize) -> SplineResult<()> {
        self.check_point_index(selected_index)?;
        let curves = self.curve_count();
        if curves <= 1 {
            tracing::warn!(selected_index, "refusing to remove the only segment");
            return Err(SplineError::invalid_structure(
                "a spline must keep at least one segment",
            ));
        }

        let len = self.points.len();
        if selected_index <= 1 {
            self.points.drain(..3);
            self.modes.remove(0);
        } else if selected_index >= len - 2 {
            self.points.truncate(len - 3);
            self.modes.pop();
        } else {
            let slot = mode_index(selected_index);
            let anchor = slot * 3;
            self.points.drain(anchor - 1..=anchor + 1);
            self.modes.remove(slot);
        }

        if self.looped {
            // The last anchor snaps onto the first; its incoming handle
            // moves with it so the last segment keeps its end shape.
            let last = self.points.len() - 1;
            let offset = self.points[0] - self.points[last];
            self.points[last - 1] += offset;
            self.close_loop();
        }

        self.invalidate_bounds();
        tracing::debug!(
            selected_index,
            curves = self.curve_count(),
            "segment removed"
        );
        Ok(())
    }
}
