//! 4D -> 3D projection
//!
//! Each vertex maps to `(x, y, z) / (1 + w) * edge_length`. The map is
//! undefined at `w == -1`; values close to it are passed through unclamped
//! and can be huge or non-finite.

use bytemuck::{Pod, Zeroable};
use std::iter::FusedIterator;

use crate::error::TesseractError;
use crate::tesseract::Tesseract;
use crate::topology::Edge;
use tesseract4d_math::{Vec3, Vec4};

/// One projected edge: two 3D endpoints
///
/// `#[repr(C)]` so a slice of segments can be handed to a GPU line buffer.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct ProjectedSegment {
    pub start: Vec3,
    pub end: Vec3,
}

impl ProjectedSegment {
    #[inline]
    pub fn new(start: Vec3, end: Vec3) -> Self {
        Self { start, end }
    }

    /// True when both endpoints are finite
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.start.is_finite() && self.end.is_finite()
    }
}

/// Project a single 4D point into 3D
///
/// Returns `SingularProjection` when `w` is exactly -1.
pub fn project_vertex(v: Vec4, edge_length: f32) -> Result<Vec3, TesseractError> {
    if v.w == -1.0 {
        return Err(TesseractError::SingularProjection { vertex: None });
    }

    let factor = 1.0 / (1.0 + v.w);
    Ok(v.xyz() * factor * edge_length)
}

/// Project every edge of the tesseract, in edge-list order
///
/// Nothing is cached: each call reads the current vertices, and the
/// returned iterator can be cloned to restart from any point.
pub fn project(tesseract: &Tesseract) -> Segments<'_> {
    Segments {
        tesseract,
        edges: tesseract.edges().iter(),
    }
}

/// Lazy iterator over the projected segments of a tesseract
#[derive(Clone)]
pub struct Segments<'a> {
    tesseract: &'a Tesseract,
    edges: std::slice::Iter<'a, Edge>,
}

impl Segments<'_> {
    fn project_index(&self, index: usize) -> Result<Vec3, TesseractError> {
        let v = self.tesseract.vertices()[index];
        project_vertex(v, self.tesseract.edge_length()).map_err(|e| e.at_vertex(index))
    }

    fn project_edge(&self, edge: &Edge) -> Result<ProjectedSegment, TesseractError> {
        let start = self.project_index(edge.start)?;
        let end = self.project_index(edge.end)?;
        Ok(ProjectedSegment::new(start, end))
    }
}

impl Iterator for Segments<'_> {
    type Item = Result<ProjectedSegment, TesseractError>;

    fn next(&mut self) -> Option<Self::Item> {
        let edge = self.edges.next()?;
        Some(self.project_edge(edge))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.edges.size_hint()
    }
}

impl ExactSizeIterator for Segments<'_> {}

impl FusedIterator for Segments<'_> {}
