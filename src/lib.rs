//! tesseract4d - a rotating tesseract, projected to 3D line segments
//!
//! The engine lives in `tesseract4d_core`; this crate adds configuration and
//! the headless frame loop around it.

pub mod config;
pub mod systems;
