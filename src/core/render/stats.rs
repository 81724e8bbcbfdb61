//=========================================================================
// Stats Backend
//=========================================================================
//
// Headless backend that counts draws per primitive kind and logs a
// summary every `report_every` frames. The demo binary runs with it when
// no rasterizer is plugged in.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Mat4;
use log::{debug, trace};

//=== Internal Dependencies ===============================================

use super::{Color, FillMode, Primitive, RenderBackend};

//=== StatsBackend ========================================================

/// Counts draw calls and reports them through `log`.
#[derive(Debug, Clone)]
pub struct StatsBackend {
    per_kind: [usize; Primitive::COUNT],
    frame_draws: usize,
    frames: u64,
    report_every: u64,
    wireframe: bool,
}

impl StatsBackend {
    /// Creates a backend that reports once per `report_every` frames.
    ///
    /// # Panics
    ///
    /// Panics if `report_every == 0`.
    pub fn new(report_every: u64) -> Self {
        assert!(report_every > 0, "Report interval must be positive");
        Self {
            per_kind: [0; Primitive::COUNT],
            frame_draws: 0,
            frames: 0,
            report_every,
            wireframe: false,
        }
    }

    /// Draws issued during the last completed (or current) frame.
    pub fn frame_draws(&self) -> usize {
        self.frame_draws
    }

    /// Draws of `primitive` during the current frame.
    pub fn draws_of(&self, primitive: Primitive) -> usize {
        self.per_kind[Self::slot(primitive)]
    }

    /// Completed frames.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    fn slot(primitive: Primitive) -> usize {
        match primitive {
            Primitive::Sphere => 0,
            Primitive::Cube => 1,
            Primitive::Cylinder => 2,
            Primitive::Pyramid => 3,
            Primitive::Torus => 4,
        }
    }
}

impl Default for StatsBackend {
    fn default() -> Self {
        Self::new(60)
    }
}

impl RenderBackend for StatsBackend {
    fn begin_frame(&mut self) {
        self.per_kind = [0; Primitive::COUNT];
        self.frame_draws = 0;
        self.wireframe = false;
    }

    fn upload_projection(&mut self, _projection: Mat4) {}

    fn upload_model_view(&mut self, _model_view: Mat4) {}

    fn set_color(&mut self, _color: Color) {}

    fn draw_primitive(&mut self, primitive: Primitive, fill: FillMode) {
        self.per_kind[Self::slot(primitive)] += 1;
        self.frame_draws += 1;
        self.wireframe |= fill == FillMode::Wireframe;
    }

    fn end_frame(&mut self) {
        self.frames += 1;
        trace!(target: "render", "Frame {}: {} draws", self.frames, self.frame_draws);

        if self.frames % self.report_every == 0 {
            let breakdown: Vec<String> = Primitive::ALL
                .iter()
                .map(|p| format!("{:?}={}", p, self.draws_of(*p)))
                .collect();
            debug!(
                target: "render",
                "Frame {}: {} draws ({}){}",
                self.frames,
                self.frame_draws,
                breakdown.join(", "),
                if self.wireframe { " [wireframe]" } else { "" }
            );
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_per_kind_within_frame() {
        let mut stats = StatsBackend::new(10);
        stats.begin_frame();
        stats.draw_primitive(Primitive::Cube, FillMode::Solid);
        stats.draw_primitive(Primitive::Cube, FillMode::Solid);
        stats.draw_primitive(Primitive::Torus, FillMode::Solid);
        stats.end_frame();

        assert_eq!(stats.frame_draws(), 3);
        assert_eq!(stats.draws_of(Primitive::Cube), 2);
        assert_eq!(stats.draws_of(Primitive::Torus), 1);
        assert_eq!(stats.frames(), 1);
    }

    #[test]
    fn begin_frame_resets_counts() {
        let mut stats = StatsBackend::default();
        stats.draw_primitive(Primitive::Sphere, FillMode::Wireframe);
        stats.begin_frame();

        assert_eq!(stats.frame_draws(), 0);
        assert_eq!(stats.draws_of(Primitive::Sphere), 0);
    }

    #[test]
    #[should_panic(expected = "Report interval must be positive")]
    fn zero_report_interval_panics() {
        StatsBackend::new(0);
    }
}
