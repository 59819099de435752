//! Tangent continuity enforcement.
//!
//! After point `index` is written, the anchor owning it may need its
//! opposite handle moved so the anchor's [`TangentMode`] holds again. The
//! handle on the edited side is the *fixed* one; the other is *enforced*.

use tangent_core::math::Vec3;

use crate::mode::TangentMode;

/// Mode slot owning point `index`.
#[inline]
pub(crate) fn mode_index(index: usize) -> usize {
    (index + 1) / 3
}

/// Re-establish the tangent constraint of the anchor owning `index`.
///
/// Returns the index of the handle that was rewritten, if any. Free anchors
/// and the two ends of an open spline are left alone.
///
/// `points` must satisfy the `3n + 1` layout and `modes` must hold `n + 1`
/// entries; `index` must be a valid point index.
pub(crate) fn enforce_mode(
    points: &mut [Vec3],
    modes: &[TangentMode],
    looped: bool,
    index: usize,
) -> Option<usize> {
    let len = points.len();
    let mode_index = mode_index(index);
    let mode = modes[mode_index];
    let boundary = mode_index == 0 || mode_index == modes.len() - 1;
    if !mode.is_constrained() || (!looped && boundary) {
        return None;
    }

    let middle_index = mode_index * 3;
    // Neighbours of the anchor, wrapping across the loop seam.
    let before = middle_index.checked_sub(1).unwrap_or(len - 2);
    let after = if middle_index + 1 >= len { 1 } else { middle_index + 1 };
    let (fixed_index, enforced_index) = if index <= middle_index {
        (before, after)
    } else {
        (after, before)
    };

    let middle = points[middle_index];
    let mut enforced_tangent = middle - points[fixed_index];
    if mode == TangentMode::Aligned {
        enforced_tangent =
            enforced_tangent.normalize_or_zero() * middle.distance(points[enforced_index]);
    }
    points[enforced_index] = middle + enforced_tangent;

    tracing::trace!(
        anchor = middle_index,
        fixed = fixed_index,
        enforced = enforced_index,
        %mode,
        "enforced tangent"
    );
    Some(enforced_index)
}
