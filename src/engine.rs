//=========================================================================
// Rotor City Engine
//
// Main entry point and coordinator.
//
// Architecture:
// ```text
//     EngineBuilder  ──build()──>  Engine  ──run(backend)──>  [Runtime]
//         │                          │
//         ├─ with_fps()              ├─ input_handle() (external producers)
//         ├─ with_channel_capacity() └─ spawns simulation thread
//         ├─ with_sim_config()          runs platform
//         └─ with_window_*()            blocks until exit
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};
use log::{error, info, warn};

//=== Internal Dependencies ===============================================

use crate::core::camera::Slider;
use crate::core::input::{InputEvent, KeyCode, Modifiers};
use crate::core::platform_bridge::PlatformEvent;
use crate::core::render::RenderBackend;
use crate::core::sim::SimConfig;
use crate::core::CoreSystemsOrchestrator;
use crate::platform::{Platform, WindowConfig};

//=== EngineBuilder =======================================================

/// Builder for configuring and constructing an [`Engine`].
///
/// # Default Values
///
/// - **FPS**: 60.0 (frames per second of the simulation thread)
/// - **Channel capacity**: 128 events
/// - **Simulation**: [`SimConfig::default`]
/// - **Window**: "Rotor City", 800 × 600
///
/// # Examples
///
/// ```no_run
/// use rotor_city::EngineBuilder;
/// use rotor_city::core::render::StatsBackend;
///
/// EngineBuilder::new()
///     .with_fps(120.0)
///     .with_window_title("Rotor City (debug)")
///     .build()
///     .run(StatsBackend::default());
/// ```
pub struct EngineBuilder {
    fps: f64,
    channel_capacity: usize,
    sim_config: SimConfig,
    window: WindowConfig,
}

impl EngineBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            fps: 60.0,
            channel_capacity: 128,
            sim_config: SimConfig::default(),
            window: WindowConfig::default(),
        }
    }

    /// Sets the target frame rate of the simulation thread.
    ///
    /// Simulated time per frame is set by the speed in [`SimConfig`], not
    /// by this rate.
    ///
    /// # Panics
    ///
    /// Panics if `fps <= 0.0`.
    pub fn with_fps(mut self, fps: f64) -> Self {
        assert!(fps > 0.0, "FPS must be positive, got {}", fps);
        self.fps = fps;
        self
    }

    /// Sets the channel capacity for platform → core communication.
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Channel capacity must be positive");
        self.channel_capacity = capacity;
        self
    }

    /// Replaces the simulation constants.
    ///
    /// # Panics
    ///
    /// Panics if the semaphore period is zero or the speed settings are
    /// not positive.
    pub fn with_sim_config(mut self, config: SimConfig) -> Self {
        assert!(!config.semaphore_period.is_zero(), "Semaphore period must be positive");
        assert!(config.initial_speed > 0.0, "Initial speed must be positive");
        assert!(config.speed_factor > 0.0, "Speed factor must be positive");
        self.sim_config = config;
        self
    }

    pub fn with_window_title(mut self, title: impl Into<String>) -> Self {
        self.window.title = title.into();
        self
    }

    /// Sets the initial window size in logical pixels.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn with_window_size(mut self, width: u32, height: u32) -> Self {
        assert!(width > 0 && height > 0, "Window size must be positive, got {}x{}", width, height);
        self.window.width = width;
        self.window.height = height;
        self
    }

    /// Builds the engine and its platform → core channel.
    pub fn build(self) -> Engine {
        info!("Building engine (FPS: {}, channel: {})", self.fps, self.channel_capacity);

        let (sender, receiver) = bounded(self.channel_capacity);

        Engine {
            orchestrator: CoreSystemsOrchestrator::new(self.sim_config, self.fps),
            window: self.window,
            sender,
            receiver,
            fps: self.fps,
            channel_capacity: self.channel_capacity,
        }
    }
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== Engine ==============================================================

/// Engine runtime.
///
/// ```text
/// Engine (Main Thread)
///   ├─► CoreSystemsOrchestrator (Simulation Thread @ FPS)
///   │     └─► InputSystem → FrameDriver → RenderBackend
///   │
///   └─► Platform (Event Loop)
///         └─► Window, Keyboard
///
/// Communication: crossbeam channel (PlatformEvent)
/// ```
pub struct Engine {
    orchestrator: CoreSystemsOrchestrator,
    window: WindowConfig,
    sender: Sender<PlatformEvent>,
    receiver: Receiver<PlatformEvent>,
    fps: f64,
    channel_capacity: usize,
}

impl Engine {
    /// Returns a handle for feeding input from outside the window, such
    /// as a GUI panel with the camera sliders.
    pub fn input_handle(&self) -> InputHandle {
        InputHandle {
            sender: self.sender.clone(),
        }
    }

    //--- Execution --------------------------------------------------------

    /// Starts the engine and blocks until the window closes.
    ///
    /// # Lifecycle
    ///
    /// 1. Spawns the simulation thread, which owns `backend`
    /// 2. Runs the platform event loop (blocks here)
    /// 3. On window close: core receives `WindowClosed` and exits
    /// 4. Joins the simulation thread
    ///
    /// Platform failures and a panicking simulation thread are logged,
    /// not propagated.
    pub fn run<B>(self, backend: B)
    where
        B: RenderBackend + Send + 'static,
    {
        info!("Starting engine runtime (FPS: {})", self.fps);
        info!("Channel capacity: {}", self.channel_capacity);

        //--- 1. Spawn the simulation thread -------------------------------
        let core_handle = self.orchestrator.spawn_core_thread(self.receiver, backend);
        info!("Core logic thread spawned");

        //--- 2. Launch the platform subsystem -----------------------------
        let platform = Platform::new(self.sender, self.window);
        info!("Platform initialized, entering event loop");

        if let Err(e) = platform.run() {
            error!("Platform error: {}", e);
        }

        info!("Platform event loop exited");

        //--- 3. Wait for the simulation thread ----------------------------
        match core_handle.join() {
            Ok(_) => info!("Core thread terminated cleanly"),
            Err(e) => error!("Core thread panicked: {:?}", e),
        }

        info!("Engine shutdown complete");
    }
}

//=== InputHandle =========================================================

/// Cloneable, `Send` sender of input events to a running engine.
///
/// Events go through the same path as keyboard input. Sends never block:
/// when the channel is full or the engine has stopped the event is
/// dropped and `false` is returned.
#[derive(Debug, Clone)]
pub struct InputHandle {
    sender: Sender<PlatformEvent>,
}

impl InputHandle {
    /// Moves a camera slider to `value` (normalized to `[0, 1]`).
    pub fn set_slider(&self, slider: Slider, value: f32) -> bool {
        self.send(PlatformEvent::Inputs {
            discrete: Vec::new(),
            continuous: vec![InputEvent::SliderChanged { slider, value }],
        })
    }

    /// Sends a key press followed by its release.
    pub fn send_key(&self, key: KeyCode, modifiers: Modifiers) -> bool {
        self.send(PlatformEvent::Inputs {
            discrete: vec![
                InputEvent::KeyDown { key, modifiers },
                InputEvent::KeyUp { key, modifiers },
            ],
            continuous: Vec::new(),
        })
    }

    /// Sends raw key events in order, e.g. a press held across frames.
    pub fn send_events(&self, events: Vec<InputEvent>) -> bool {
        self.send(PlatformEvent::Inputs {
            discrete: events,
            continuous: Vec::new(),
        })
    }

    fn send(&self, event: PlatformEvent) -> bool {
        match self.sender.try_send(event) {
            Ok(()) => true,
            Err(TrySendError::Full(_)) => {
                warn!(target: "platform::input", "Channel full, dropping external input");
                false
            }
            Err(TrySendError::Disconnected(_)) => {
                warn!(target: "platform::input", "Engine stopped, dropping external input");
                false
            }
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    //=====================================================================
    // EngineBuilder Tests
    //=====================================================================

    #[test]
    fn builder_defaults() {
        let builder = EngineBuilder::new();
        assert_eq!(builder.fps, 60.0);
        assert_eq!(builder.channel_capacity, 128);
        assert_eq!(builder.sim_config, SimConfig::default());
        assert_eq!(builder.window, WindowConfig::default());
    }

    #[test]
    fn builder_with_fps() {
        let builder = EngineBuilder::new().with_fps(120.0);
        assert_eq!(builder.fps, 120.0);
    }

    #[test]
    #[should_panic(expected = "FPS must be positive")]
    fn builder_with_fps_panics_on_zero() {
        EngineBuilder::new().with_fps(0.0);
    }

    #[test]
    #[should_panic(expected = "FPS must be positive")]
    fn builder_with_fps_panics_on_negative() {
        EngineBuilder::new().with_fps(-60.0);
    }

    #[test]
    #[should_panic(expected = "Channel capacity must be positive")]
    fn builder_with_channel_capacity_panics_on_zero() {
        EngineBuilder::new().with_channel_capacity(0);
    }

    #[test]
    #[should_panic(expected = "Semaphore period must be positive")]
    fn builder_rejects_zero_semaphore_period() {
        EngineBuilder::new().with_sim_config(SimConfig {
            semaphore_period: Duration::ZERO,
            ..SimConfig::default()
        });
    }

    #[test]
    #[should_panic(expected = "Window size must be positive")]
    fn builder_rejects_empty_window() {
        EngineBuilder::new().with_window_size(0, 600);
    }

    #[test]
    fn builder_fluent_api_chaining() {
        let engine = EngineBuilder::new()
            .with_fps(30.0)
            .with_channel_capacity(256)
            .with_window_title("Night shift")
            .with_window_size(1024, 768)
            .build();

        assert_eq!(engine.fps, 30.0);
        assert_eq!(engine.channel_capacity, 256);
        assert_eq!(engine.window.title, "Night shift");
        assert_eq!((engine.window.width, engine.window.height), (1024, 768));
    }

    //=====================================================================
    // InputHandle Tests
    //=====================================================================

    #[test]
    fn handle_sends_slider_as_continuous() {
        let engine = EngineBuilder::new().build();
        let handle = engine.input_handle();

        assert!(handle.set_slider(Slider::Gamma, 0.75));

        match engine.receiver.try_recv() {
            Ok(PlatformEvent::Inputs { discrete, continuous }) => {
                assert!(discrete.is_empty());
                assert_eq!(
                    continuous,
                    vec![InputEvent::SliderChanged { slider: Slider::Gamma, value: 0.75 }]
                );
            }
            other => panic!("Expected Inputs event, got {:?}", other),
        }
    }

    #[test]
    fn handle_sends_press_then_release() {
        let engine = EngineBuilder::new().build();
        let handle = engine.input_handle();

        assert!(handle.send_key(KeyCode::Space, Modifiers::NONE));

        match engine.receiver.try_recv() {
            Ok(PlatformEvent::Inputs { discrete, .. }) => {
                assert!(matches!(discrete[0], InputEvent::KeyDown { key: KeyCode::Space, .. }));
                assert!(matches!(discrete[1], InputEvent::KeyUp { key: KeyCode::Space, .. }));
            }
            other => panic!("Expected Inputs event, got {:?}", other),
        }
    }

    #[test]
    fn handle_reports_full_channel() {
        let engine = EngineBuilder::new().with_channel_capacity(1).build();
        let handle = engine.input_handle();

        assert!(handle.send_events(vec![]));
        assert!(!handle.set_slider(Slider::Teta, 0.1));
    }

    #[test]
    fn handle_reports_stopped_engine() {
        let engine = EngineBuilder::new().build();
        let handle = engine.input_handle();
        drop(engine);

        assert!(!handle.send_key(KeyCode::KeyP, Modifiers::NONE));
    }
}
