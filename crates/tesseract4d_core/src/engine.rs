//! Engine lifecycle: set up once, then update every frame
//!
//! An engine starts `Uninitialized`. `initialize` builds the topology and
//! moves it to `Ready`. Only a `Ready` engine accepts `advance`, `project`
//! or `frame`; calling them earlier is a programming error and panics.

use crate::clock::Clock;
use crate::error::TesseractError;
use crate::projection::{project, Segments};
use crate::renderer::Renderer;
use crate::rotation::{advance, frame_angle, RotationMode};
use crate::tesseract::Tesseract;

/// Lifecycle state of a [`TesseractEngine`]
#[derive(Clone, Debug, Default)]
pub enum EngineState {
    #[default]
    Uninitialized,
    Ready(Tesseract),
}

/// Summary of one call to [`TesseractEngine::frame`]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameStats {
    /// Elapsed time read from the clock
    pub elapsed_time: f32,
    /// Rotation applied this frame, in degrees
    pub angle: f32,
    /// Segments handed to `Renderer::draw_segment`
    pub drawn: usize,
    /// Segments reported through `Renderer::skip_segment`
    pub skipped: usize,
}

/// A single rotating tesseract and its lifecycle
#[derive(Clone, Debug)]
pub struct TesseractEngine {
    state: EngineState,
    rotation_speed: f32,
    rotation_mode: RotationMode,
}

impl Default for TesseractEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TesseractEngine {
    /// Default rotation speed, in degrees per second
    pub const DEFAULT_ROTATION_SPEED: f32 = 20.0;

    /// Create an uninitialized engine
    pub fn new() -> Self {
        Self {
            state: EngineState::Uninitialized,
            rotation_speed: Self::DEFAULT_ROTATION_SPEED,
            rotation_mode: RotationMode::default(),
        }
    }

    /// Set the rotation speed in degrees per second
    pub fn with_rotation_speed(mut self, degrees_per_second: f32) -> Self {
        self.rotation_speed = degrees_per_second;
        self
    }

    /// Set the rotation mode used by the tesseract built in `initialize`
    pub fn with_rotation_mode(mut self, mode: RotationMode) -> Self {
        self.rotation_mode = mode;
        self
    }

    #[inline]
    pub fn rotation_speed(&self) -> f32 {
        self.rotation_speed
    }

    #[inline]
    pub fn state(&self) -> &EngineState {
        &self.state
    }

    #[inline]
    pub fn is_ready(&self) -> bool {
        matches!(self.state, EngineState::Ready(_))
    }

    /// Build the tesseract and move to `Ready`
    ///
    /// Calling this on a `Ready` engine regenerates the topology, discarding
    /// any rotation applied so far.
    pub fn initialize(&mut self, edge_length: f32) -> Result<&Tesseract, TesseractError> {
        let tesseract = Tesseract::new(edge_length)?.with_rotation_mode(self.rotation_mode);
        log::info!(
            "Tesseract engine ready: edge length {}, {} deg/s, {:?} rotation",
            edge_length,
            self.rotation_speed,
            self.rotation_mode
        );
        self.state = EngineState::Ready(tesseract);
        Ok(self.tesseract())
    }

    /// The tesseract of a `Ready` engine
    ///
    /// # Panics
    /// Panics if the engine has not been initialized.
    pub fn tesseract(&self) -> &Tesseract {
        match &self.state {
            EngineState::Ready(t) => t,
            EngineState::Uninitialized => panic!("TesseractEngine used before initialize()"),
        }
    }

    fn tesseract_mut(&mut self) -> &mut Tesseract {
        match &mut self.state {
            EngineState::Ready(t) => t,
            EngineState::Uninitialized => panic!("TesseractEngine used before initialize()"),
        }
    }

    /// Rotate the vertices by `rotation_speed * elapsed_time` degrees
    ///
    /// # Panics
    /// Panics if the engine has not been initialized.
    pub fn advance(&mut self, elapsed_time: f32) {
        let speed = self.rotation_speed;
        advance(self.tesseract_mut(), speed, elapsed_time);
    }

    /// Project the current vertices, one segment per edge
    ///
    /// # Panics
    /// Panics if the engine has not been initialized.
    pub fn project(&self) -> Segments<'_> {
        project(self.tesseract())
    }

    /// Run one frame: read the clock, rotate, project, and feed the renderer
    ///
    /// Singular segments go to `Renderer::skip_segment` and do not stop the
    /// frame.
    ///
    /// # Panics
    /// Panics if the engine has not been initialized.
    pub fn frame<C, R>(&mut self, clock: &mut C, renderer: &mut R) -> FrameStats
    where
        C: Clock + ?Sized,
        R: Renderer + ?Sized,
    {
        let elapsed_time = clock.elapsed_time();
        self.advance(elapsed_time);

        let mut stats = render_tesseract(self.tesseract(), renderer);
        stats.elapsed_time = elapsed_time;
        stats.angle = frame_angle(self.rotation_speed, elapsed_time);

        log::trace!(
            "Frame: dt {:.4}s, {:.4} deg, {} drawn, {} skipped",
            stats.elapsed_time,
            stats.angle,
            stats.drawn,
            stats.skipped
        );

        stats
    }
}

/// Hand every segment of `tesseract` to `renderer`, in edge order
///
/// Returns stats with `drawn` and `skipped` filled in; the timing fields are
/// left at zero.
pub fn render_tesseract<R>(tesseract: &Tesseract, renderer: &mut R) -> FrameStats
where
    R: Renderer + ?Sized,
{
    let mut stats = FrameStats::default();

    renderer.begin_frame();
    for (index, (result, &edge)) in project(tesseract).zip(tesseract.edges()).enumerate() {
        match result {
            Ok(segment) => {
                renderer.draw_segment(index, edge, segment);
                stats.drawn += 1;
            }
            Err(error) => {
                renderer.skip_segment(index, edge, error);
                stats.skipped += 1;
            }
        }
    }
    renderer.end_frame();

    stats
}
