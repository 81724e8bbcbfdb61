//=========================================================================
// Draw Recorder
//=========================================================================
//
// Backend that captures the draw-call stream instead of rasterizing it.
// Used by tests and tooling to inspect what a frame emitted.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Mat4;

//=== Internal Dependencies ===============================================

use super::{Color, FillMode, Primitive, RenderBackend};

//=== DrawCall ============================================================

/// One resolved draw: the state in effect when `draw_primitive` ran.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCall {
    pub primitive: Primitive,
    pub model_view: Mat4,
    pub color: Color,
    pub fill: FillMode,
}

//=== DrawRecorder ========================================================

/// Records every draw of the current frame.
///
/// `begin_frame` clears the previous frame's calls.
#[derive(Debug, Clone)]
pub struct DrawRecorder {
    calls: Vec<DrawCall>,
    projection: Option<Mat4>,
    model_view: Mat4,
    color: Color,
    frames: u64,
}

impl DrawRecorder {
    pub fn new() -> Self {
        Self {
            calls: Vec::new(),
            projection: None,
            model_view: Mat4::IDENTITY,
            color: Color::WHITE,
            frames: 0,
        }
    }

    /// Draws recorded since the last `begin_frame`.
    pub fn draw_calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// Draws of a single primitive kind.
    pub fn calls_of(&self, primitive: Primitive) -> impl Iterator<Item = &DrawCall> {
        self.calls.iter().filter(move |c| c.primitive == primitive)
    }

    /// Last uploaded projection, if any.
    pub fn projection(&self) -> Option<Mat4> {
        self.projection
    }

    /// Number of completed frames.
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Default for DrawRecorder {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderBackend for DrawRecorder {
    fn begin_frame(&mut self) {
        self.calls.clear();
    }

    fn upload_projection(&mut self, projection: Mat4) {
        self.projection = Some(projection);
    }

    fn upload_model_view(&mut self, model_view: Mat4) {
        self.model_view = model_view;
    }

    fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    fn draw_primitive(&mut self, primitive: Primitive, fill: FillMode) {
        self.calls.push(DrawCall {
            primitive,
            model_view: self.model_view,
            color: self.color,
            fill,
        });
    }

    fn end_frame(&mut self) {
        self.frames += 1;
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn records_state_in_effect_at_draw() {
        let mut rec = DrawRecorder::new();
        let m = Mat4::from_scale(Vec3::splat(2.0));

        rec.set_color(Color::GREEN);
        rec.upload_model_view(m);
        rec.draw_primitive(Primitive::Cylinder, FillMode::Solid);

        assert_eq!(
            rec.draw_calls(),
            &[DrawCall {
                primitive: Primitive::Cylinder,
                model_view: m,
                color: Color::GREEN,
                fill: FillMode::Solid,
            }]
        );
    }

    #[test]
    fn begin_frame_clears_previous_calls() {
        let mut rec = DrawRecorder::new();
        rec.draw_primitive(Primitive::Cube, FillMode::Solid);
        rec.end_frame();

        rec.begin_frame();
        assert!(rec.draw_calls().is_empty());
        assert_eq!(rec.frames(), 1);
    }

    #[test]
    fn calls_of_filters_by_kind() {
        let mut rec = DrawRecorder::new();
        rec.draw_primitive(Primitive::Cube, FillMode::Solid);
        rec.draw_primitive(Primitive::Sphere, FillMode::Solid);
        rec.draw_primitive(Primitive::Cube, FillMode::Wireframe);

        assert_eq!(rec.calls_of(Primitive::Cube).count(), 2);
        assert_eq!(rec.calls_of(Primitive::Torus).count(), 0);
    }

    #[test]
    fn projection_is_kept() {
        let mut rec = DrawRecorder::new();
        assert!(rec.projection().is_none());

        rec.upload_projection(Mat4::IDENTITY);
        assert_eq!(rec.projection(), Some(Mat4::IDENTITY));
    }
}
