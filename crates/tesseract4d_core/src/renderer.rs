//! Renderer collaborator
//!
//! The engine hands projected segments to a [`Renderer`] once per frame. How
//! they are drawn (line objects, widths, materials, parenting) belongs to the
//! renderer. Segment `i` always corresponds to the same edge, so a renderer
//! can keep one line object per index for the life of the tesseract.

use crate::error::TesseractError;
use crate::projection::ProjectedSegment;
use crate::topology::Edge;

/// Consumes the projected segments of one frame, in edge order
pub trait Renderer {
    /// Called before the first segment of a frame
    fn begin_frame(&mut self) {}

    /// Draw segment `index` (edge `edge`) at its projected position
    fn draw_segment(&mut self, index: usize, edge: Edge, segment: ProjectedSegment);

    /// Segment `index` could not be projected this frame
    ///
    /// The default keeps whatever the renderer drew for it last frame.
    fn skip_segment(&mut self, index: usize, edge: Edge, error: TesseractError) {
        log::warn!("Skipping segment {} ({}): {}", index, edge, error);
    }

    /// Called after the last segment of a frame
    fn end_frame(&mut self) {}
}

/// A renderer that keeps the most recent position of every segment
///
/// Slots are indexed by segment index. A skipped segment keeps its previous
/// value, or `None` if it has never been drawn.
#[derive(Clone, Debug, Default)]
pub struct SegmentBuffer {
    slots: Vec<Option<ProjectedSegment>>,
    labels: Vec<String>,
    frames: u64,
    skipped_last_frame: usize,
}

impl SegmentBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Latest known position of each segment, by index
    ///
    /// A slot skipped this frame still holds the value from the last frame
    /// it was drawn in.
    pub fn segments(&self) -> &[Option<ProjectedSegment>] {
        &self.slots
    }

    /// Segment `index`, if it has ever been drawn
    pub fn get(&self, index: usize) -> Option<ProjectedSegment> {
        self.slots.get(index).copied().flatten()
    }

    /// Line object label for segment `index` (`Edge_{start}_{end}`)
    pub fn label(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    /// Number of frames completed
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn skipped_last_frame(&self) -> usize {
        self.skipped_last_frame
    }

    /// Drawn segments flattened into `[x0, y0, z0, x1, y1, z1, ...]`
    pub fn line_vertices(&self) -> Vec<f32> {
        let drawn: Vec<ProjectedSegment> = self.slots.iter().flatten().copied().collect();
        let floats: &[f32] = bytemuck::cast_slice(&drawn);
        floats.to_vec()
    }

    fn ensure_slot(&mut self, index: usize, edge: Edge) {
        if index >= self.slots.len() {
            self.slots.resize(index + 1, None);
            self.labels.resize(index + 1, String::new());
        }
        if self.labels[index].is_empty() {
            self.labels[index] = edge.to_string();
        }
    }
}

impl Renderer for SegmentBuffer {
    fn begin_frame(&mut self) {
        self.skipped_last_frame = 0;
    }

    fn draw_segment(&mut self, index: usize, edge: Edge, segment: ProjectedSegment) {
        self.ensure_slot(index, edge);
        self.slots[index] = Some(segment);
    }

    fn skip_segment(&mut self, index: usize, edge: Edge, error: TesseractError) {
        self.ensure_slot(index, edge);
        self.skipped_last_frame += 1;
        log::debug!("Segment {} ({}) kept from previous frame: {}", index, edge, error);
    }

    fn end_frame(&mut self) {
        self.frames += 1;
    }
}
