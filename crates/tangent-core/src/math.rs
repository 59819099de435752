//! Math types used across the tangent crates.
//!
//! This module re-exports [`glam`], which provides SIMD-accelerated vector
//! and matrix types. Spline control points live in [`Vec3`]; host transforms
//! are usually an [`Affine3A`] or a [`Mat4`].
//!
//! # Examples
//!
//! ```
//! use tangent_core::math::{Affine3A, Vec3};
//!
//! let local = Vec3::new(1.0, 0.0, 0.0);
//! let to_world = Affine3A::from_translation(Vec3::new(0.0, 2.0, 0.0));
//! assert_eq!(to_world.transform_point3(local), Vec3::new(1.0, 2.0, 0.0));
//! ```
//!
//! [`glam`]: https://docs.rs/glam
pub mod fast {
    pub use glam::*;
}

pub use fast::*;
