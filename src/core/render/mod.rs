//=========================================================================
// Render Contract
//=========================================================================
//
// The boundary between the scene traversal and whatever rasterizes it.
//
// Architecture:
// ```text
//   FrameDriver ──► Canvas ──► Primitive::draw() ──► dyn RenderBackend
//                     │                                   │
//                     └─ fill mode, colour                └─ GPU, recorder,
//                                                            stats, ...
// ```
//
// The core never owns a graphics context. Backends are constructed and
// made ready before the frame loop starts.
//
//=========================================================================

//=== Module Declarations =================================================

mod recorder;
mod stats;

//=== Public API ==========================================================

pub use recorder::{DrawCall, DrawRecorder};
pub use stats::StatsBackend;

//=== External Dependencies ===============================================

use glam::Mat4;

//=== Color ===============================================================

/// Linear RGB colour, each channel in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const RED: Self = Self::rgb(1.0, 0.0, 0.0);
    pub const GREEN: Self = Self::rgb(0.0, 1.0, 0.0);

    /// Creates a colour from its channels.
    #[inline]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }
}

//=== FillMode ============================================================

/// How primitives are rasterized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FillMode {
    /// Edges only.
    Wireframe,

    /// Filled triangles.
    #[default]
    Solid,
}

impl FillMode {
    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            Self::Wireframe => Self::Solid,
            Self::Solid => Self::Wireframe,
        }
    }
}

//=== Primitive ===========================================================

/// The closed set of unit meshes the scene is built from.
///
/// Mesh generation belongs to the backend; the core only names the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    Sphere,
    Cube,
    Cylinder,
    Pyramid,
    Torus,
}

impl Primitive {
    /// Number of primitive kinds.
    pub const COUNT: usize = 5;

    /// All primitive kinds, in declaration order.
    pub const ALL: [Primitive; Self::COUNT] = [
        Primitive::Sphere,
        Primitive::Cube,
        Primitive::Cylinder,
        Primitive::Pyramid,
        Primitive::Torus,
    ];

    /// Uploads `transform` and issues the draw for this primitive.
    pub fn draw(self, backend: &mut dyn RenderBackend, transform: Mat4, fill: FillMode) {
        backend.upload_model_view(transform);
        backend.draw_primitive(self, fill);
    }
}

//=== RenderBackend =======================================================

/// Sink for the draw-call stream produced by one frame.
///
/// Calls arrive in traversal order. `set_color` applies to every
/// following `draw_primitive` until changed.
pub trait RenderBackend {
    /// Called once before the frame's first upload.
    fn begin_frame(&mut self) {}

    /// Sets the projection matrix for the frame.
    fn upload_projection(&mut self, projection: Mat4);

    /// Sets the model-view matrix for the next draw.
    fn upload_model_view(&mut self, model_view: Mat4);

    /// Sets the colour for subsequent draws.
    fn set_color(&mut self, color: Color);

    /// Draws one unit primitive with the last uploaded model-view.
    fn draw_primitive(&mut self, primitive: Primitive, fill: FillMode);

    /// Called once after the frame's last draw.
    fn end_frame(&mut self) {}
}

//=== Canvas ==============================================================

/// Per-frame drawing context handed to the scene assemblers.
///
/// Pairs the backend with the frame's fill mode so scene code only deals
/// in transforms, primitives and colours.
pub struct Canvas<'a> {
    backend: &'a mut dyn RenderBackend,
    fill: FillMode,
    draws: usize,
}

impl<'a> Canvas<'a> {
    pub fn new(backend: &'a mut dyn RenderBackend, fill: FillMode) -> Self {
        Self { backend, fill, draws: 0 }
    }

    /// Draws `primitive` with `transform` in `color`.
    pub fn draw(&mut self, transform: Mat4, primitive: Primitive, color: Color) {
        self.backend.set_color(color);
        primitive.draw(&mut *self.backend, transform, self.fill);
        self.draws += 1;
    }

    /// Number of primitives drawn so far this frame.
    pub fn draw_count(&self) -> usize {
        self.draws
    }

    pub fn fill_mode(&self) -> FillMode {
        self.fill
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
    fn fill_mode_toggles_both_ways() {
        assert_eq!(FillMode::Solid.toggled(), FillMode::Wireframe);
        assert_eq!(FillMode::Wireframe.toggled(), FillMode::Solid);
        assert_eq!(FillMode::default(), FillMode::Solid);
    }

    #[test]
    fn primitive_draw_uploads_then_draws() {
        let mut recorder = DrawRecorder::new();
        let transform = Mat4::from_translation(Vec3::X);

        Primitive::Torus.draw(&mut recorder, transform, FillMode::Wireframe);

        let calls = recorder.draw_calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].primitive, Primitive::Torus);
        assert_eq!(calls[0].model_view, transform);
        assert_eq!(calls[0].fill, FillMode::Wireframe);
    }

    #[test]
    fn canvas_sets_colour_per_draw() {
        let mut recorder = DrawRecorder::new();
        {
            let mut canvas = Canvas::new(&mut recorder, FillMode::Solid);
            canvas.draw(Mat4::IDENTITY, Primitive::Cube, Color::RED);
            canvas.draw(Mat4::IDENTITY, Primitive::Sphere, Color::GREEN);
            assert_eq!(canvas.draw_count(), 2);
        }

        let calls = recorder.draw_calls();
        assert_eq!(calls[0].color, Color::RED);
        assert_eq!(calls[1].color, Color::GREEN);
        assert_eq!(calls[1].primitive, Primitive::Sphere);
    }
}
