//=========================================================================
// Frame Driver
//=========================================================================
//
// Owns the whole scene state and turns one frame's intents into one
// rendered frame.
//
// Per frame:
//   1. apply intents      (pause filter, speed, thrust, views, pending steps)
//   2. simulation step    (only while running: flight → drop → cargo)
//   3. semaphore          (wall clock, paused or not)
//   4. traversal          (view root → city → helicopter → box)
//
// Runs on the simulation thread. Nothing here blocks or allocates per
// frame beyond what the backend does.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Duration;

use log::{debug, trace};

//=== Internal Dependencies ===============================================

use crate::core::camera::Camera;
use crate::core::input::{Intent, IntentBatch};
use crate::core::render::{Canvas, FillMode, RenderBackend};
use crate::core::scene::{ground_level, CargoBox, City, Drawable, Helicopter};
use crate::core::sim::{CargoDrop, FlightIntents, FlightState, Semaphore, SimConfig, ViewMode};
use crate::core::transform::TransformStack;

//=== FrameDriver =========================================================

/// Per-frame orchestration of simulation and rendering.
#[derive(Debug, Clone)]
pub struct FrameDriver {
    config: SimConfig,
    flight: FlightState,
    cargo: CargoDrop,
    semaphore: Semaphore,
    camera: Camera,
    stack: TransformStack,

    fill: FillMode,
    running: bool,
    speed: f32,
    time: f32,

    thrust_held: bool,
    pending: FlightIntents,
    pending_drop: bool,
}

impl FrameDriver {
    //--- Construction -----------------------------------------------------

    /// Creates a driver for an 800 × 600 viewport.
    ///
    /// # Panics
    ///
    /// Panics if `config.semaphore_period` is zero.
    pub fn new(config: SimConfig) -> Self {
        Self::with_viewport(config, 800, 600)
    }

    /// Creates a driver for a `width` × `height` viewport.
    pub fn with_viewport(config: SimConfig, width: u32, height: u32) -> Self {
        Self {
            flight: FlightState::new(config.flight),
            cargo: CargoDrop::new(config.cargo),
            semaphore: Semaphore::new(config.semaphore_period),
            camera: Camera::new(width, height),
            stack: TransformStack::new(),
            fill: FillMode::default(),
            running: true,
            speed: config.initial_speed,
            time: 0.0,
            thrust_held: false,
            pending: FlightIntents::default(),
            pending_drop: false,
            config,
        }
    }

    //--- Frame ------------------------------------------------------------

    /// Runs one frame and returns the number of primitives drawn.
    ///
    /// `wall_dt` is the real time since the previous frame and drives the
    /// semaphore only. The simulation advances by the current speed.
    pub fn frame(
        &mut self,
        batch: &IntentBatch,
        wall_dt: Duration,
        backend: &mut dyn RenderBackend,
    ) -> usize {
        self.apply(batch);

        if self.running {
            self.step();
        }

        self.semaphore.tick(wall_dt);
        self.render(backend)
    }

    /// Updates the viewport the projection is built for.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.camera.resize(width, height);
        debug!(target: "frame", "Viewport {}x{}", width, height);
    }

    //--- Intent Application -----------------------------------------------

    fn apply(&mut self, batch: &IntentBatch) {
        for &intent in &batch.intents {
            if !self.running && !intent.applies_while_paused() {
                debug!(target: "frame", "Paused, discarding {:?}", intent);
                continue;
            }
            self.apply_intent(intent);
        }

        for &(slider, value) in &batch.sliders {
            self.camera.set_slider(slider, value);
            self.select_view(ViewMode::Front);
        }
    }

    fn apply_intent(&mut self, intent: Intent) {
        match intent {
            Intent::ToggleFillMode => self.fill = self.fill.toggled(),
            Intent::SetFillMode(fill) => self.fill = fill,
            Intent::ToggleAnimation => {
                self.running = !self.running;
                debug!(target: "frame", "Animation {}", if self.running { "resumed" } else { "paused" });
            }
            Intent::SpeedUp => self.speed *= self.config.speed_factor,
            Intent::SpeedDown => self.speed /= self.config.speed_factor,
            Intent::Climb => self.pending.climb += 1,
            Intent::Descend => self.pending.descend += 1,
            Intent::ThrustForwardOn => self.thrust_held = true,
            Intent::ThrustForwardOff => self.thrust_held = false,
            Intent::DropBox => self.pending_drop = true,
            Intent::SetViewMode(mode) => {
                self.camera.clear_axonometric();
                self.select_view(mode);
            }
        }
    }

    /// Queues a view switch for the next step, or applies it at once
    /// while paused so the camera still follows.
    fn select_view(&mut self, mode: ViewMode) {
        if self.running {
            self.pending.switch_view = Some(mode);
        } else {
            self.flight.switch_view(mode);
        }
    }

    //--- Simulation -------------------------------------------------------

    fn step(&mut self) {
        self.time += self.speed;

        let intents = FlightIntents {
            thrust: self.thrust_held,
            ..std::mem::take(&mut self.pending)
        };
        self.flight.tick(self.speed, &intents);

        if std::mem::take(&mut self.pending_drop) {
            if let Err(reason) = self.cargo.request_release(self.flight.snapshot()) {
                debug!(target: "frame", "Drop refused: {}", reason);
            }
        }

        self.cargo.tick(self.speed);
    }

    //--- Rendering --------------------------------------------------------

    fn render(&mut self, backend: &mut dyn RenderBackend) -> usize {
        let view_mode = self.flight.view_mode();
        let offset = view_mode.ground_offset(self.config.flight.view_altitude_offset);

        backend.begin_frame();
        backend.upload_projection(self.camera.projection());

        self.stack.load_root(self.camera.view_matrix(view_mode));
        let depth = self.stack.depth();

        let mut canvas = Canvas::new(backend, self.fill);
        {
            let mut outer = self.stack.scope();
            City::new(ground_level(offset), self.semaphore.color()).draw(&mut outer, &mut canvas);
            Helicopter::new(&self.flight).draw(&mut outer, &mut canvas);
            CargoBox::new(&self.cargo, &self.config.flight, view_mode).draw(&mut outer, &mut canvas);
        }
        let draws = canvas.draw_count();
        backend.end_frame();

        debug_assert_eq!(self.stack.depth(), depth, "transform stack unbalanced after frame");
        trace!(target: "frame", "t={:.3} draws={}", self.time, draws);
        draws
    }

    //--- Queries ----------------------------------------------------------

    pub fn flight(&self) -> &FlightState {
        &self.flight
    }

    pub fn cargo(&self) -> &CargoDrop {
        &self.cargo
    }

    pub fn semaphore(&self) -> &Semaphore {
        &self.semaphore
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn stack(&self) -> &TransformStack {
        &self.stack
    }

    pub fn fill_mode(&self) -> FillMode {
        self.fill
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Simulated time advanced per frame.
    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Total simulated time.
    pub fn time(&self) -> f32 {
        self.time
    }

    pub fn thrust_held(&self) -> bool {
        self.thrust_held
    }
}

impl Default for FrameDriver {
    fn default() -> Self {
        Self::new(SimConfig::default())
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
