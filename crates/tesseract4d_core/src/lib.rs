//! Core engine for tesseract4d
//!
//! This crate computes the geometry of a rotating tesseract and the 3D line
//! segments needed to draw it:
//!
//! - [`topology`] - 16 lattice vertices and the 32 edges joining them
//! - [`rotation`] - Per-frame XW then YZ plane rotation
//! - [`projection`] - `(x, y, z) / (1 + w)` projection of each edge
//! - [`TesseractEngine`] - Setup-once, update-per-frame lifecycle
//! - [`World`] - Several independent tesseracts under one clock
//!
//! Drawing and timing are left to the host through the [`Renderer`] and
//! [`Clock`] traits.

pub mod clock;
pub mod engine;
pub mod error;
pub mod projection;
pub mod renderer;
pub mod rotation;
pub mod tesseract;
pub mod topology;
pub mod world;

pub use clock::{Clock, FixedClock};
pub use engine::{render_tesseract, EngineState, FrameStats, TesseractEngine};
pub use error::TesseractError;
pub use projection::{project, project_vertex, ProjectedSegment, Segments};
pub use renderer::{Renderer, SegmentBuffer};
pub use rotation::{advance, frame_angle, rotate_vertex, RotationMode, ROTATION_PLANES};
pub use tesseract::{initialize, Tesseract};
pub use topology::{Axes, Edge, EDGE_COUNT, VERTEX_COUNT};
pub use world::{TesseractKey, World};

// Re-export commonly used types from tesseract4d_math for convenience
pub use tesseract4d_math::{RotationPlane, Vec3, Vec4};
