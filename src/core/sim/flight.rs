//=========================================================================
// Flight State Machine
//=========================================================================
//
// Helicopter altitude, tilt, orbit and rotor phase.
//
// Architecture:
// ```text
//   FlightIntents ──► tick(dt) ──► switch view ─► climb ─► descend
//                                       │
//                                       └─► tilt ─► orbit ─► rotor
// ```
//
// Height is stored relative to the ground. The reported altitude is that
// height minus the ground offset of the current view mode, so a view
// switch moves the altitude by exactly the offset and switching back
// restores it bit for bit.
//
// Out-of-range intents are dropped silently (trace log only).
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, trace};

//=== Internal Dependencies ===============================================

use super::cargo::ReleaseSnapshot;
use super::config::FlightConfig;
use super::view_mode::ViewMode;

//=== FlightIntents =======================================================

/// Flight-related intents gathered for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FlightIntents {
    /// Climb presses this tick.
    pub climb: u32,

    /// Descend presses this tick.
    pub descend: u32,

    /// Forward thrust held.
    pub thrust: bool,

    /// View switch requested this tick.
    pub switch_view: Option<ViewMode>,
}

//=== FlightPhase =========================================================

/// Observable phase of the flight machine after the last tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlightPhase {
    /// Resting on the ground.
    Grounded,

    /// Airborne.
    Flying,

    /// The last tick switched view mode and shifted the altitude.
    TransitioningView { from: ViewMode, to: ViewMode },
}

//=== FlightState =========================================================

/// Owned flight state, mutated only through [`FlightState::tick`].
#[derive(Debug, Clone)]
pub struct FlightState {
    config: FlightConfig,
    height: f32,
    inclination: f32,
    orbit_angle: f32,
    rotor_phase: f32,
    thrust_requested: bool,
    view_mode: ViewMode,
    last_switch: Option<(ViewMode, ViewMode)>,
}

impl FlightState {
    //--- Construction -----------------------------------------------------

    /// Grounded, untilted, Iso view.
    pub fn new(config: FlightConfig) -> Self {
        Self {
            config,
            height: 0.0,
            inclination: 0.0,
            orbit_angle: 0.0,
            rotor_phase: 0.0,
            thrust_requested: false,
            view_mode: ViewMode::Iso,
            last_switch: None,
        }
    }

    //--- Tick -------------------------------------------------------------

    /// Advances the machine by one simulation step of `dt`.
    pub fn tick(&mut self, dt: f32, intents: &FlightIntents) {
        let was_airborne = self.is_airborne();
        self.last_switch = None;

        if let Some(mode) = intents.switch_view {
            self.switch_view(mode);
        }

        for _ in 0..intents.climb {
            self.climb();
        }

        for _ in 0..intents.descend {
            self.descend();
        }

        self.thrust_requested = intents.thrust;
        self.update_inclination();

        if self.is_airborne() {
            self.orbit_angle = (self.orbit_angle
                + self.inclination / self.config.inclination_normalizer * self.config.flight_speed)
                .rem_euclid(360.0);
            self.rotor_phase =
                (self.rotor_phase + dt * self.config.propeller_speed).rem_euclid(360.0);
        }

        match (was_airborne, self.is_airborne()) {
            (false, true) => debug!(target: "sim::flight", "Take-off (altitude {})", self.altitude()),
            (true, false) => debug!(target: "sim::flight", "Touchdown at orbit angle {:.1}", self.orbit_angle),
            _ => {}
        }
    }

    /// Changes the view outside a tick, e.g. while the simulation is
    /// paused. The height is kept; only the reported altitude moves.
    pub fn switch_view(&mut self, mode: ViewMode) {
        if mode == self.view_mode {
            return;
        }

        let from = self.view_mode;
        let before = self.altitude();
        self.view_mode = mode;
        self.last_switch = Some((from, mode));

        debug!(
            target: "sim::flight",
            "View {:?} -> {:?}: altitude {} -> {}",
            from,
            mode,
            before,
            self.altitude()
        );
    }

    fn climb(&mut self) {
        if self.height >= self.max_height() {
            trace!(target: "sim::flight", "Climb rejected at ceiling");
            return;
        }
        self.height = (self.height + self.config.altitude_step).min(self.max_height());
    }

    fn descend(&mut self) {
        if self.height <= 0.0 {
            trace!(target: "sim::flight", "Descend rejected on the ground");
            return;
        }

        let target = (self.height - self.config.altitude_step).max(0.0);
        if target == 0.0 && self.inclination > 0.0 {
            trace!(target: "sim::flight", "Touchdown rejected while tilted");
            return;
        }
        self.height = target;
    }

    fn update_inclination(&mut self) {
        let step = self.config.inclination_speed;
        self.inclination = if self.thrust_requested && self.is_airborne() {
            (self.inclination + step).min(self.config.max_inclination)
        } else {
            (self.inclination - step).max(0.0)
        };
    }

    /// Ceiling measured from the ground. The same in every view, so the
    /// altitude ceiling of a ground-shifted view sits `offset` lower.
    fn max_height(&self) -> f32 {
        self.config.max_flight_height
    }

    fn offset(&self) -> f32 {
        self.view_mode.ground_offset(self.config.view_altitude_offset)
    }

    //--- Queries ----------------------------------------------------------

    /// Altitude in the current view's frame.
    pub fn altitude(&self) -> f32 {
        self.height - self.offset()
    }

    /// Height above the ground, independent of view.
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Lowest reachable altitude in the current view.
    pub fn min_altitude(&self) -> f32 {
        -self.offset()
    }

    /// Highest reachable altitude in the current view.
    pub fn max_altitude(&self) -> f32 {
        self.max_height() - self.offset()
    }

    pub fn inclination(&self) -> f32 {
        self.inclination
    }

    /// Position on the circular path, degrees in `[0, 360)`.
    pub fn orbit_angle(&self) -> f32 {
        self.orbit_angle
    }

    /// Rotor rotation, degrees in `[0, 360)`.
    pub fn rotor_phase(&self) -> f32 {
        self.rotor_phase
    }

    pub fn thrust_requested(&self) -> bool {
        self.thrust_requested
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn is_airborne(&self) -> bool {
        self.height > 0.0
    }

    pub fn config(&self) -> &FlightConfig {
        &self.config
    }

    /// Phase after the last tick.
    pub fn phase(&self) -> FlightPhase {
        if let Some((from, to)) = self.last_switch {
            FlightPhase::TransitioningView { from, to }
        } else if self.is_airborne() {
            FlightPhase::Flying
        } else {
            FlightPhase::Grounded
        }
    }

    /// Copies the values a cargo release needs.
    pub fn snapshot(&self) -> ReleaseSnapshot {
        ReleaseSnapshot {
            orbit_angle: self.orbit_angle,
            inclination: self.inclination,
            height: self.height,
            ground_shifted: self.view_mode.is_ground_shifted(),
        }
    }
}

impl Default for FlightState {
    fn default() -> Self {
        Self::new(FlightConfig::default())
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
