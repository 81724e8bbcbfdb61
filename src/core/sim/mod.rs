//=========================================================================
// Simulation
//=========================================================================
//
// Owned state machines advanced once per frame by the frame driver.
//
// Components:
// - `flight`: altitude, tilt, orbit and rotor phase
// - `cargo`: the dropped box
// - `semaphore`: wall-clock colour cycle
// - `view_mode`: camera presets that shift the ground plane
// - `config`: tunable constants
//
//=========================================================================

//=== Module Declarations =================================================

pub mod cargo;
pub mod config;
pub mod flight;
pub mod semaphore;
pub mod view_mode;

//=== Public API ==========================================================

pub use cargo::{CargoDrop, DropPhase, ReleaseError, ReleaseSnapshot};
pub use config::{CargoConfig, FlightConfig, SimConfig};
pub use flight::{FlightIntents, FlightPhase, FlightState};
pub use semaphore::Semaphore;
pub use view_mode::ViewMode;
