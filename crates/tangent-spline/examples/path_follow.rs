//! Walk an object around a closed track and probe points against it.
//!
//! Run with `RUST_LOG=debug` to see the editing log from the spline.

use glam::{Quat, Vec3};
use tangent_core::logging;
use tangent_spline::{BezierSpline, SplineResult, TangentMode, Transform3D};

fn build_track() -> SplineResult<BezierSpline<Transform3D>> {
    let transform = Transform3D::from_scale_rotation_translation(
        Vec3::splat(2.0),
        Quat::from_rotation_x(-std::f32::consts::FRAC_PI_2),
        Vec3::new(0.0, 0.5, 0.0),
    );
    let mut track = BezierSpline::with_transform(transform);
    track.add_segment();
    track.add_segment();

    // Rough triangle in the local XY plane; the rotation lays it on the ground.
    track.set_spline_point(0, Vec3::new(-3.0, -2.0, 0.0))?;
    track.set_spline_point(1, Vec3::new(3.0, -2.0, 0.0))?;
    track.set_spline_point(2, Vec3::new(0.0, 3.0, 0.0))?;
    track.set_loop(true);

    for anchor in (0..track.control_point_count()).step_by(3) {
        track.set_control_point_mode(anchor, TangentMode::Mirrored)?;
    }
    track.set_control_point(1, Vec3::new(-1.0, -3.0, 0.0))?;
    track.set_control_point(4, Vec3::new(4.5, 0.0, 0.0))?;
    track.set_control_point(7, Vec3::new(-2.0, 3.0, 0.0))?;
    Ok(track)
}

fn main() -> SplineResult<()> {
    logging::init();

    let track = build_track()?;
    let bounds = track.bounding_box();
    tracing::info!(
        curves = track.curve_count(),
        min = ?bounds.min(),
        max = ?bounds.max(),
        "track built"
    );

    let steps = 24;
    for i in 0..=steps {
        let t = i as f32 / steps as f32;
        let position = track.point(t);
        let heading = track.direction(t)?;
        tracing::info!(t, ?position, ?heading, "follower");
    }

    for probe in [Vec3::new(0.0, 0.5, 0.0), Vec3::new(9.0, 0.5, 1.0)] {
        let nearest = track.nearest_point(probe);
        tracing::info!(
            ?probe,
            ?nearest,
            inside = track.is_point_inside(probe),
            "probe"
        );
    }

    Ok(())
}
