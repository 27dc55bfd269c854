//! Per-frame 4D rotation
//!
//! Every frame rotates all vertices by `rotation_speed * elapsed_time`
//! degrees, first in the XW plane and then in the YZ plane, using the same
//! angle for both.

use crate::tesseract::Tesseract;
use tesseract4d_math::{RotationPlane, Vec4};

/// Planes rotated each frame, in application order
pub const ROTATION_PLANES: [RotationPlane; 2] = [RotationPlane::XW, RotationPlane::YZ];

/// How a frame's rotation is applied to the vertex array
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RotationMode {
    /// Rotate the already-rotated vertices by this frame's angle.
    /// O(vertices) per frame; float error accumulates over long runs.
    #[default]
    Incremental,
    /// Rotate the unrotated vertices by the total accumulated angle.
    /// Error stays bounded by one rotation, but the original lattice is kept
    /// alongside.
    Absolute,
}

/// Rotation angle for one frame, in degrees
#[inline]
pub fn frame_angle(rotation_speed: f32, elapsed_time: f32) -> f32 {
    rotation_speed * elapsed_time
}

/// Apply one frame's XW then YZ rotation to a single vertex
#[inline]
pub fn rotate_vertex(v: Vec4, degrees: f32) -> Vec4 {
    ROTATION_PLANES
        .iter()
        .fold(v, |acc, &plane| acc.rotated_in_plane(plane, degrees))
}

/// Advance every vertex by one frame of rotation, in place
pub fn advance(tesseract: &mut Tesseract, rotation_speed: f32, elapsed_time: f32) {
    let angle = frame_angle(rotation_speed, elapsed_time);
    tesseract.add_angle(angle);

    match tesseract.rotation_mode() {
        RotationMode::Incremental => {
            for v in tesseract.vertices_mut().iter_mut() {
                *v = rotate_vertex(*v, angle);
            }
        }
        RotationMode::Absolute => {
            let total = tesseract.accumulated_angle() as f32;
            if let Some(&origin) = tesseract.pristine() {
                for (v, o) in tesseract.vertices_mut().iter_mut().zip(origin.iter()) {
                    *v = rotate_vertex(*o, total);
                }
            }
        }
    }

    log::trace!(
        "Advanced tesseract by {:.4} degrees (total {:.4})",
        angle,
        tesseract.accumulated_angle()
    );
}
