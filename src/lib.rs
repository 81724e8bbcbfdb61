//=========================================================================
// Rotor City Library Root
//
// An animated city block with a helicopter on a circular orbit that can
// climb, descend, tilt forward and drop a box.
//
// Responsibilities:
// - Expose the engine facade (`EngineBuilder`, `Engine`, `InputHandle`)
// - Expose the scene core (transform stack, state machines, frame driver,
//   render contract) for embedding and testing
// - Keep the winit layer private
//
// Typical usage:
// ```no_run
// use rotor_city::EngineBuilder;
// use rotor_city::core::render::StatsBackend;
//
// EngineBuilder::new().build().run(StatsBackend::default());
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` holds every platform-independent system. It runs headless, so a
// custom `RenderBackend` can drive `core::frame::FrameDriver` directly.
//
pub mod core;
pub mod prelude;

//--- Internal Modules ----------------------------------------------------
//
// `platform` owns the window and keyboard translation (winit).
// `engine` wires platform and core together on two threads.
//
mod engine;
mod platform;

//--- Public Exports ------------------------------------------------------

pub use engine::{Engine, EngineBuilder, InputHandle};
