//=========================================================================
// Rotor City Demo
//
// Opens the window and drives the scene into the headless stats backend.
// Run with `RUST_LOG=debug` to see the per-second draw summaries and the
// flight/drop state transitions.
//
//=========================================================================

use log::info;
use rotor_city::core::render::StatsBackend;
use rotor_city::EngineBuilder;

fn main() {
    env_logger::init();

    info!("Keys: W/S/F fill, P pause, +/- speed, arrows fly, Space drop, 1-4 views");

    EngineBuilder::new()
        .with_fps(60.0)
        .build()
        .run(StatsBackend::default());
}
