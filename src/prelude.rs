//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use rotor_city::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Engine
pub use crate::engine::{Engine, EngineBuilder, InputHandle};

// Frame driver and camera
pub use crate::core::camera::{Camera, Slider};
pub use crate::core::frame::FrameDriver;

// Input
pub use crate::core::input::{InputEvent, InputSystem, Intent, IntentBatch, KeyCode, Modifiers};

// Rendering
pub use crate::core::render::{Color, DrawRecorder, FillMode, Primitive, RenderBackend, StatsBackend};

// Simulation
pub use crate::core::sim::{CargoDrop, DropPhase, FlightState, Semaphore, SimConfig, ViewMode};

// Transform stack
pub use crate::core::transform::{Axis, TransformStack};
