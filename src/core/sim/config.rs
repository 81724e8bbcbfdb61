//=========================================================================
// Simulation Configuration
//=========================================================================
//
// Tunable constants for the flight, cargo and semaphore machines.
//
// Defaults reproduce the reference scene. Units are scene units for
// distances, degrees for angles, and "steps" for per-tick increments
// (increments are applied once per simulation tick, not scaled by dt).
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Duration;

//=== FlightConfig ========================================================

/// Constants for [`FlightState`](super::FlightState).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlightConfig {
    /// Upper bound on forward tilt, degrees.
    pub max_inclination: f32,

    /// Ceiling measured from the ground.
    pub max_flight_height: f32,

    /// Height gained or lost per climb/descend intent.
    pub altitude_step: f32,

    /// Tilt gained or lost per tick.
    pub inclination_speed: f32,

    /// Divides inclination when converting tilt into orbit speed.
    pub inclination_normalizer: f32,

    /// Orbit speed multiplier.
    pub flight_speed: f32,

    /// Radius of the circular flight path around the city centre.
    pub flight_radius: f32,

    /// Rotor spin, degrees per unit of simulated time.
    pub propeller_speed: f32,

    /// How far the ground sits below the origin in ground-shifted views.
    pub view_altitude_offset: f32,
}

impl Default for FlightConfig {
    fn default() -> Self {
        Self {
            max_inclination: 30.0,
            max_flight_height: 20.0,
            altitude_step: 2.0,
            inclination_speed: 0.75,
            inclination_normalizer: 40.0,
            flight_speed: 2.5,
            flight_radius: 15.0,
            propeller_speed: 1200.0,
            view_altitude_offset: 13.0,
        }
    }
}

//=== CargoConfig =========================================================

/// Constants for [`CargoDrop`](super::CargoDrop).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CargoConfig {
    /// Release is refused at or below this height (unshifted views).
    pub min_release_height: f32,

    /// Height lost per tick while airborne.
    pub fall_speed: f32,

    /// Forward speed lost per tick.
    pub friction_speed: f32,

    /// Converts remaining forward speed into travelled distance.
    pub carry_scale: f32,

    /// Simulated time after which a falling box lands.
    pub max_duration: f32,
}

impl Default for CargoConfig {
    fn default() -> Self {
        Self {
            min_release_height: 1.0,
            fall_speed: 0.2,
            friction_speed: 0.6,
            carry_scale: 2.5 / 1000.0,
            max_duration: 5.0,
        }
    }
}

//=== SimConfig ===========================================================

/// Everything the frame driver needs to build its state machines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimConfig {
    pub flight: FlightConfig,
    pub cargo: CargoConfig,

    /// Wall-clock time between semaphore colour changes.
    pub semaphore_period: Duration,

    /// Simulated time advanced per frame at startup.
    pub initial_speed: f32,

    /// Factor applied by one speed-up or speed-down intent.
    pub speed_factor: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            flight: FlightConfig::default(),
            cargo: CargoConfig::default(),
            semaphore_period: Duration::from_secs(5),
            initial_speed: 1.0 / 60.0,
            speed_factor: 1.1,
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
