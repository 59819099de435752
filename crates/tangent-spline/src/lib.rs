//! Tangent Spline - editable composite cubic Bezier splines
//!
//! This crate provides:
//! - [`BezierSpline`]: a chain of cubic segments sharing anchors, with
//!   per-anchor [`TangentMode`] continuity (free, aligned, mirrored)
//! - Segment insertion and removal that keep the point layout and loop seam intact
//! - Position, velocity and direction queries over a global parameter in `[0, 1]`
//! - A cached [`BoundingBox`], nearest-point search and a convex containment test
//! - [`SplineData`], the plain form used to store a spline
//!
//! Control points live in local space. World-space queries go through a
//! [`SplineTransform`] owned by the spline ([`LocalSpace`] by default).
//!
//! # Example
//!
//! ```
//! use tangent_spline::{BezierSpline, TangentMode, Transform3D};
//! use glam::Vec3;
//!
//! let mut spline = BezierSpline::with_transform(Transform3D::translate(Vec3::Y));
//! spline.add_segment();
//! spline.set_control_point_mode(3, TangentMode::Aligned)?;
//! spline.set_loop(true);
//!
//! let start = spline.point(0.0);
//! assert_eq!(start, Vec3::new(1.0, 1.0, 0.0));
//! let heading = spline.direction(0.25)?;
//! assert!((heading.length() - 1.0).abs() < 1e-5);
//! # Ok::<(), tangent_spline::SplineError>(())
//! ```
//!
//! The spline is a plain single-owner value: it is not internally
//! synchronized, and the bounds cache makes it `!Sync`.

mod bezier;
mod bounds;
mod config;
mod data;
mod enforce;
mod error;
mod evaluate;
mod mode;
mod search;
mod segment;
mod spline;
mod transform;

pub use bezier::*;
pub use bounds::*;
pub use config::*;
pub use data::*;
pub use error::*;
pub use mode::*;
pub use spline::*;
pub use transform::*;
