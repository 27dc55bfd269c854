//! 4D Mathematics Library
//!
//! This crate provides the vector and rotation types for the tesseract4d engine.
//!
//! ## Core Types
//!
//! - [`Vec4`] - 4D vector with x, y, z, w components
//! - [`Vec3`] - 3D point produced by projecting a [`Vec4`]
//! - [`RotationPlane`] - One of the six planes a 4D rotation can act in

mod vec3;
mod vec4;
pub mod plane;

pub use vec3::Vec3;
pub use vec4::Vec4;
pub use plane::RotationPlane;
