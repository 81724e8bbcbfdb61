//=========================================================================
// Core Systems Orchestrator
//
// Owns every piece of mutable scene state and runs it on the simulation
// thread at a fixed frame rate.
//
// Per frame:
//   EventCollector → InputSystem → FrameDriver → RenderBackend
//
// The platform layer never touches scene state; it only sends
// `PlatformEvent`s over a crossbeam channel. `WindowClosed` or a
// disconnected channel ends the loop and hands the backend back.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod camera;
pub mod frame;
pub mod input;
pub(crate) mod platform_bridge;
pub mod render;
pub mod scene;
pub mod sim;
pub mod transform;

//=== External Crates =====================================================

use std::thread;
use std::time::{Duration, Instant};

use crossbeam_channel::Receiver;
use log::info;

//=== Internal Modules ====================================================

use frame::FrameDriver;
use input::InputSystem;
use platform_bridge::{EventCollector, PlatformEvent, TickControl};
use render::RenderBackend;
use sim::SimConfig;

//=== CoreSystemsOrchestrator =============================================

/// Input mapping plus the frame driver, paced at a fixed rate.
pub(crate) struct CoreSystemsOrchestrator {
    input_system: InputSystem,
    driver: FrameDriver,
    fps: f64,
}

impl CoreSystemsOrchestrator {
    pub(crate) fn new(config: SimConfig, fps: f64) -> Self {
        Self {
            input_system: InputSystem::new(),
            driver: FrameDriver::new(config),
            fps,
        }
    }

    //--- spawn_core_thread() ----------------------------------------------
    //
    // Each frame:
    //  1. Drains platform events (exit on close/disconnect)
    //  2. Maps input and runs one frame against the backend
    //  3. Sleeps the remainder of the frame budget
    //
    // The thread returns the backend so the caller can inspect or tear it
    // down after the window is gone.
    //
    pub(crate) fn spawn_core_thread<B>(
        self,
        receiver: Receiver<PlatformEvent>,
        mut backend: B,
    ) -> thread::JoinHandle<B>
    where
        B: RenderBackend + Send + 'static,
    {
        let frame_duration = Duration::from_secs_f64(1.0 / self.fps);

        thread::spawn(move || {
            let mut core = self;
            let mut collector = EventCollector::new(receiver);
            let mut last_frame = Instant::now();

            loop {
                let frame_start = Instant::now();
                let wall_dt = frame_start - last_frame;
                last_frame = frame_start;

                if core.tick(&mut collector, wall_dt, &mut backend) == TickControl::Exit {
                    info!("Core thread exiting.");
                    break;
                }

                let elapsed = frame_start.elapsed();
                if elapsed < frame_duration {
                    thread::sleep(frame_duration - elapsed);
                }
            }

            backend
        })
    }

    /// Runs one frame against whatever the collector has queued.
    fn tick(
        &mut self,
        collector: &mut EventCollector,
        wall_dt: Duration,
        backend: &mut dyn RenderBackend,
    ) -> TickControl {
        if collector.collect_frame() == TickControl::Exit {
            return TickControl::Exit;
        }

        if let Some((width, height)) = collector.take_resize() {
            self.driver.resize(width, height);
        }

        let batch = self.input_system.update(collector.batches_mut());
        self.driver.frame(&batch, wall_dt, backend);
        TickControl::Continue
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
