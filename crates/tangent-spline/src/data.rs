//! Plain-data form of a spline for asset storage.

use tangent_core::math::Vec3;

use crate::error::{SplineError, SplineResult};
use crate::mode::TangentMode;

/// The three fields needed to rebuild a [`BezierSpline`](crate::BezierSpline).
///
/// Derived state such as cached bounds is never stored. With the `serde`
/// feature enabled this type can be written by any serde format.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SplineData {
    pub points: Vec<Vec3>,
    pub modes: Vec<TangentMode>,
    #[cfg_attr(feature = "serde", serde(rename = "loop", default))]
    pub looped: bool,
}

impl SplineData {
    /// Check the point/mode layout and, for loops, the closed seam.
    pub fn validate(&self) -> SplineResult<()> {
        let len = self.points.len();
        if len < 4 || (len - 1) % 3 != 0 {
            return Err(SplineError::invalid_structure(format!(
                "{} control points do not form whole cubic segments",
                len
            )));
        }

        let curves = (len - 1) / 3;
        if self.modes.len() != curves + 1 {
            return Err(SplineError::invalid_structure(format!(
                "expected {} tangent modes for {} segments, found {}",
                curves + 1,
                curves,
                self.modes.len()
            )));
        }

        if self.looped {
            if self.points[0] != self.points[len - 1] {
                return Err(SplineError::invalid_structure(
                    "looped spline does not end on its first anchor",
                ));
            }
            if self.modes[0] != self.modes[curves] {
                return Err(SplineError::invalid_structure(
                    "looped spline has different modes on its seam anchors",
                ));
            }
        }
        Ok(())
    }
}
