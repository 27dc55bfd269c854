//! The tesseract aggregate: 16 mutable vertices plus 32 fixed edges

use crate::error::TesseractError;
use crate::rotation::RotationMode;
use crate::topology::{generate_edges, generate_vertices, Edge, VERTEX_COUNT};
use tesseract4d_math::Vec4;

/// A tesseract owned by one engine instance
///
/// Vertices are rewritten every frame by rotation. Edges are index pairs into
/// the vertex array and never change after construction.
#[derive(Clone, Debug)]
pub struct Tesseract {
    edge_length: f32,
    vertices: [Vec4; VERTEX_COUNT],
    edges: Vec<Edge>,
    mode: RotationMode,
    /// Unrotated vertices, kept only for `RotationMode::Absolute`
    pristine: Option<[Vec4; VERTEX_COUNT]>,
    /// Total rotation applied so far, in degrees, wrapped to [0, 360).
    /// Summed in f64 so `Absolute` rotation does not pick up rounding from
    /// adding small frame angles to a value near 360.
    accumulated_angle: f64,
}

impl Tesseract {
    /// Build the vertex lattice and edge list for the given edge length
    ///
    /// Zero and negative lengths are accepted and give a collapsed or
    /// mirrored lattice. Non-finite lengths are rejected.
    pub fn new(edge_length: f32) -> Result<Self, TesseractError> {
        Self::check_edge_length(edge_length)?;

        let vertices = generate_vertices(edge_length);
        let edges = generate_edges(&vertices);

        log::debug!(
            "Generated tesseract: edge length {}, {} vertices, {} edges",
            edge_length,
            vertices.len(),
            edges.len()
        );

        Ok(Self {
            edge_length,
            vertices,
            edges,
            mode: RotationMode::default(),
            pristine: None,
            accumulated_angle: 0.0,
        })
    }

    /// Build a tesseract with explicit vertex positions
    ///
    /// The edge list still comes from the unrotated lattice for
    /// `edge_length`, so vertex `i` keeps its topological role.
    pub fn from_vertices(
        edge_length: f32,
        vertices: [Vec4; VERTEX_COUNT],
    ) -> Result<Self, TesseractError> {
        let mut tesseract = Self::new(edge_length)?;
        tesseract.vertices = vertices;
        Ok(tesseract)
    }

    /// Select how rotation updates the vertices
    ///
    /// Switching to `Absolute` snapshots the current vertices as the
    /// rotation origin and resets the accumulated angle.
    pub fn with_rotation_mode(mut self, mode: RotationMode) -> Self {
        self.mode = mode;
        self.pristine = match mode {
            RotationMode::Incremental => None,
            RotationMode::Absolute => Some(self.vertices),
        };
        self.accumulated_angle = 0.0;
        self
    }

    fn check_edge_length(edge_length: f32) -> Result<(), TesseractError> {
        if edge_length.is_finite() {
            Ok(())
        } else {
            Err(TesseractError::InvalidConfiguration { edge_length })
        }
    }

    #[inline]
    pub fn edge_length(&self) -> f32 {
        self.edge_length
    }

    #[inline]
    pub fn vertices(&self) -> &[Vec4; VERTEX_COUNT] {
        &self.vertices
    }

    #[inline]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Get one vertex by index
    #[inline]
    pub fn vertex(&self, index: usize) -> Option<Vec4> {
        self.vertices.get(index).copied()
    }

    #[inline]
    pub fn rotation_mode(&self) -> RotationMode {
        self.mode
    }

    /// Degrees of rotation applied so far, wrapped to [0, 360)
    #[inline]
    pub fn accumulated_angle(&self) -> f64 {
        self.accumulated_angle
    }

    pub(crate) fn vertices_mut(&mut self) -> &mut [Vec4; VERTEX_COUNT] {
        &mut self.vertices
    }

    pub(crate) fn pristine(&self) -> Option<&[Vec4; VERTEX_COUNT]> {
        self.pristine.as_ref()
    }

    pub(crate) fn add_angle(&mut self, degrees: f32) {
        self.accumulated_angle = (self.accumulated_angle + f64::from(degrees)).rem_euclid(360.0);
    }
}

/// Run the topology generator once, producing a ready tesseract
pub fn initialize(edge_length: f32) -> Result<Tesseract, TesseractError> {
    Tesseract::new(edge_length)
}
