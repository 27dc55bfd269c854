//! Line rendering system
//!
//! Keeps one set of line objects per tesseract and updates their endpoints
//! from the projected segments every frame. There is no window: the line
//! buffers are what a GPU backend would upload, and the system logs a summary
//! of them periodically.

use slotmap::SecondaryMap;
use tesseract4d_core::{
    render_tesseract, Edge, ProjectedSegment, Renderer, TesseractError, TesseractKey, Vec3, World,
};

use crate::config::RenderingConfig;

/// A single line object for one edge
#[derive(Clone, Debug, PartialEq)]
pub struct Line {
    /// Object name, `Edge_{start}_{end}`
    pub label: String,
    /// Width multiplier
    pub width: f32,
    /// The two endpoints (start, end)
    pub positions: ProjectedSegment,
    /// False once the line has been skipped and never drawn since
    pub visible: bool,
}

/// The line objects for one tesseract, indexed by segment
#[derive(Clone, Debug, Default)]
pub struct LineSet {
    lines: Vec<Line>,
    width: f32,
    skipped: usize,
}

impl LineSet {
    pub fn new(width: f32) -> Self {
        Self {
            lines: Vec::new(),
            width,
            skipped: 0,
        }
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Segments skipped in the most recent frame
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Endpoints of all visible lines, flattened for upload
    pub fn vertex_buffer(&self) -> Vec<f32> {
        let segments: Vec<ProjectedSegment> = self
            .lines
            .iter()
            .filter(|l| l.visible)
            .map(|l| l.positions)
            .collect();
        let floats: &[f32] = bytemuck::cast_slice(&segments);
        floats.to_vec()
    }

    /// Get the line for `index`, creating it on first use
    fn line_mut(&mut self, index: usize, edge: Edge) -> &mut Line {
        while self.lines.len() <= index {
            self.lines.push(Line {
                label: String::new(),
                width: self.width,
                positions: ProjectedSegment::default(),
                visible: false,
            });
        }
        let line = &mut self.lines[index];
        if line.label.is_empty() {
            line.label = edge.to_string();
            log::debug!("Created line object {}", line.label);
        }
        line
    }
}

impl Renderer for LineSet {
    fn begin_frame(&mut self) {
        self.skipped = 0;
    }

    fn draw_segment(&mut self, index: usize, edge: Edge, segment: ProjectedSegment) {
        let line = self.line_mut(index, edge);
        line.positions = segment;
        line.visible = true;
    }

    fn skip_segment(&mut self, index: usize, edge: Edge, error: TesseractError) {
        // Keep last frame's position so the line does not flicker out
        self.line_mut(index, edge);
        self.skipped += 1;
        log::warn!("Skipping {} this frame: {}", edge, error);
    }
}

/// Segment counts for one render pass
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub drawn: usize,
    pub skipped: usize,
}

/// Manages the line sets of every tesseract in a world
pub struct RenderSystem {
    line_sets: SecondaryMap<TesseractKey, LineSet>,
    config: RenderingConfig,
    frames: u64,
}

impl RenderSystem {
    pub fn new(config: RenderingConfig) -> Self {
        Self {
            line_sets: SecondaryMap::new(),
            config,
            frames: 0,
        }
    }

    /// Line set for a tesseract, if it has been rendered
    pub fn line_set(&self, key: TesseractKey) -> Option<&LineSet> {
        self.line_sets.get(key)
    }

    /// Render every tesseract in the world
    ///
    /// Line sets for tesseracts no longer in the world are dropped.
    pub fn render(&mut self, world: &World) -> RenderStats {
        self.line_sets.retain(|key, _| world.get(key).is_some());

        let mut stats = RenderStats::default();
        for (key, engine) in world.ready() {
            let width = self.config.line_width;
            let lines = match self.line_sets.entry(key) {
                Some(entry) => entry.or_insert_with(|| LineSet::new(width)),
                None => continue,
            };
            let frame = render_tesseract(engine.tesseract(), lines);
            stats.drawn += frame.drawn;
            stats.skipped += frame.skipped;
        }

        self.frames += 1;
        if self.config.report_interval > 0 && self.frames % self.config.report_interval == 0 {
            self.report();
        }

        stats
    }

    fn report(&self) {
        for (key, lines) in &self.line_sets {
            let first = lines
                .lines()
                .first()
                .map(|l| l.positions.start)
                .unwrap_or(Vec3::ZERO);
            log::info!(
                "Frame {}: {:?} has {} lines ({} floats), {} skipped, first vertex at ({:.3}, {:.3}, {:.3})",
                self.frames,
                key,
                lines.lines().len(),
                lines.vertex_buffer().len(),
                lines.skipped(),
                first.x,
                first.y,
                first.z
            );
        }
    }
}
