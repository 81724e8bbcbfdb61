//=========================================================================
// Cargo Drop
//=========================================================================
//
// Drop-physics state machine for the single box the helicopter carries.
//
// Architecture:
// ```text
//   Idle ──request_release()──► Falling ──elapsed >= max──► Landed
//    ▲                             │                          │
//    └─────────────────────────────┴──── (rejected) ◄─────────┘
//                                            new release ok
// ```
//
// A release copies the flight values it needs into a `ReleaseSnapshot`;
// nothing here refers back to the live flight state. The box then moves
// along the fixed heading it had at release, so its path is a straight
// line even though the helicopter keeps orbiting.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, trace};

//=== Internal Dependencies ===============================================

use super::config::CargoConfig;

//=== ReleaseSnapshot =====================================================

/// Flight values captured at the moment of release.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReleaseSnapshot {
    /// Orbit angle, degrees. Fixes the box's heading.
    pub orbit_angle: f32,

    /// Tilt, carried over as initial forward speed.
    pub inclination: f32,

    /// Height above the ground.
    pub height: f32,

    /// The view in effect measures altitude from a shifted ground.
    pub ground_shifted: bool,
}

//=== DropPhase ===========================================================

/// Lifecycle of the box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DropPhase {
    /// Still attached. Nothing to draw.
    #[default]
    Idle,

    /// Released and moving.
    Falling,

    /// Came to rest. Inert and hidden until the next release.
    Landed,
}

//=== ReleaseError ========================================================

/// Why a release request was refused.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReleaseError {
    /// A box is already falling.
    AlreadyFalling,

    /// The helicopter is at or below the minimum release height.
    TooLow { height: f32 },
}

impl std::fmt::Display for ReleaseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AlreadyFalling => write!(f, "a box is already falling"),
            Self::TooLow { height } => write!(f, "release height {} too low", height),
        }
    }
}

impl std::error::Error for ReleaseError {}

//=== CargoDrop ===========================================================

/// State of the dropped box.
#[derive(Debug, Clone)]
pub struct CargoDrop {
    config: CargoConfig,
    phase: DropPhase,
    elapsed: f32,
    horizontal_offset: f32,
    vertical_position: f32,
    fall_speed: f32,
    orbit_angle_at_drop: f32,
}

impl CargoDrop {
    pub fn new(config: CargoConfig) -> Self {
        Self {
            config,
            phase: DropPhase::Idle,
            elapsed: 0.0,
            horizontal_offset: 0.0,
            vertical_position: 0.0,
            fall_speed: 0.0,
            orbit_angle_at_drop: 0.0,
        }
    }

    //--- Release ----------------------------------------------------------

    /// Starts a fall from `snapshot`.
    ///
    /// Refused while a box is falling or when the helicopter is not above
    /// the minimum release height. Ground-shifted views only require the
    /// helicopter to be off the ground. Nothing changes on refusal.
    pub fn request_release(&mut self, snapshot: ReleaseSnapshot) -> Result<(), ReleaseError> {
        if self.phase == DropPhase::Falling {
            return Err(ReleaseError::AlreadyFalling);
        }

        let floor = if snapshot.ground_shifted { 0.0 } else { self.config.min_release_height };
        if snapshot.height <= floor {
            return Err(ReleaseError::TooLow { height: snapshot.height });
        }

        self.phase = DropPhase::Falling;
        self.elapsed = 0.0;
        self.horizontal_offset = 0.0;
        self.vertical_position = snapshot.height;
        self.fall_speed = snapshot.inclination;
        self.orbit_angle_at_drop = snapshot.orbit_angle;

        debug!(
            target: "sim::cargo",
            "Released at height {} heading {:.1} speed {}",
            snapshot.height,
            snapshot.orbit_angle,
            snapshot.inclination
        );
        Ok(())
    }

    //--- Tick -------------------------------------------------------------

    /// Advances a falling box by `dt`. No effect in other phases.
    pub fn tick(&mut self, dt: f32) {
        if self.phase != DropPhase::Falling {
            return;
        }

        self.fall_speed = (self.fall_speed - self.config.friction_speed).max(0.0);
        self.horizontal_offset += self.fall_speed * self.config.carry_scale;

        if self.vertical_position > 0.0 {
            self.vertical_position = (self.vertical_position - self.config.fall_speed).max(0.0);
        }

        self.elapsed += dt;
        trace!(
            target: "sim::cargo",
            "t={:.3} offset={:.4} height={:.2}",
            self.elapsed,
            self.horizontal_offset,
            self.vertical_position
        );

        if self.elapsed >= self.config.max_duration {
            self.phase = DropPhase::Landed;
            debug!(
                target: "sim::cargo",
                "Landed after {:.2} at offset {:.4}",
                self.elapsed,
                self.horizontal_offset
            );
        }
    }

    //--- Queries ----------------------------------------------------------

    pub fn phase(&self) -> DropPhase {
        self.phase
    }

    /// `true` while the box should be drawn.
    pub fn is_visible(&self) -> bool {
        self.phase == DropPhase::Falling
    }

    /// Simulated time since release.
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Distance travelled along the release heading.
    pub fn horizontal_offset(&self) -> f32 {
        self.horizontal_offset
    }

    /// Height above the ground.
    pub fn vertical_position(&self) -> f32 {
        self.vertical_position
    }

    /// Remaining forward speed.
    pub fn fall_speed(&self) -> f32 {
        self.fall_speed
    }

    /// Heading fixed at release, degrees.
    pub fn orbit_angle_at_drop(&self) -> f32 {
        self.orbit_angle_at_drop
    }
}

impl Default for CargoDrop {
    fn default() -> Self {
        Self::new(CargoConfig::default())
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    fn snapshot(height: f32, inclination: f32) -> ReleaseSnapshot {
        ReleaseSnapshot { orbit_angle: 42.0, inclination, height, ground_shifted: false }
    }

    fn run_until_landed(cargo: &mut CargoDrop) -> usize {
        let mut ticks = 0;
        while cargo.phase() == DropPhase::Falling {
            cargo.tick(DT);
            ticks += 1;
            assert!(ticks < 10_000, "box never landed");
        }
        ticks
    }

    //=====================================================================
    // Release
    //=====================================================================

    #[test]
    fn starts_idle_and_hidden() {
        let cargo = CargoDrop::default();
        assert_eq!(cargo.phase(), DropPhase::Idle);
        assert!(!cargo.is_visible());
    }

    #[test]
    fn release_copies_snapshot() {
        let mut cargo = CargoDrop::default();
        cargo.request_release(snapshot(10.0, 30.0)).unwrap();

        assert_eq!(cargo.phase(), DropPhase::Falling);
        assert_eq!(cargo.vertical_position(), 10.0);
        assert_eq!(cargo.fall_speed(), 30.0);
        assert_eq!(cargo.orbit_angle_at_drop(), 42.0);
        assert_eq!(cargo.horizontal_offset(), 0.0);
        assert_eq!(cargo.elapsed(), 0.0);
    }

    #[test]
    fn release_rejected_when_too_low() {
        let mut cargo = CargoDrop::default();
        assert_eq!(
            cargo.request_release(snapshot(1.0, 0.0)),
            Err(ReleaseError::TooLow { height: 1.0 })
        );
        assert_eq!(cargo.phase(), DropPhase::Idle);
    }

    #[test]
    fn shifted_view_releases_just_above_ground() {
        let mut cargo = CargoDrop::default();
        let low = ReleaseSnapshot { ground_shifted: true, ..snapshot(0.5, 0.0) };
        assert!(cargo.request_release(low).is_ok());
        assert_eq!(cargo.vertical_position(), 0.5);

        let mut grounded = CargoDrop::default();
        let on_ground = ReleaseSnapshot { ground_shifted: true, ..snapshot(0.0, 0.0) };
        assert_eq!(
            grounded.request_release(on_ground),
            Err(ReleaseError::TooLow { height: 0.0 })
        );
    }

    #[test]
    fn second_release_rejected_while_falling() {
        let mut cargo = CargoDrop::default();
        cargo.request_release(snapshot(10.0, 0.0)).unwrap();
        cargo.tick(DT);
        let height = cargo.vertical_position();

        assert_eq!(
            cargo.request_release(snapshot(20.0, 5.0)),
            Err(ReleaseError::AlreadyFalling)
        );
        assert_eq!(cargo.vertical_position(), height);
    }

    #[test]
    fn release_allowed_again_after_landing() {
        let mut cargo = CargoDrop::default();
        cargo.request_release(snapshot(10.0, 0.0)).unwrap();
        run_until_landed(&mut cargo);

        assert!(cargo.request_release(snapshot(6.0, 0.0)).is_ok());
        assert_eq!(cargo.vertical_position(), 6.0);
    }

    //=====================================================================
    // Physics
    //=====================================================================

    #[test]
    fn forward_speed_decays_and_offset_grows() {
        let mut cargo = CargoDrop::default();
        cargo.request_release(snapshot(10.0, 30.0)).unwrap();

        cargo.tick(DT);
        assert!((cargo.fall_speed() - 29.4).abs() < 1e-4);
        assert!((cargo.horizontal_offset() - 29.4 * 0.0025).abs() < 1e-6);

        for _ in 0..100 {
            cargo.tick(DT);
            assert!(cargo.fall_speed() >= 0.0);
        }
        assert_eq!(cargo.fall_speed(), 0.0);
    }

    #[test]
    fn falls_to_ground_and_stays() {
        let mut cargo = CargoDrop::default();
        cargo.request_release(snapshot(2.0, 0.0)).unwrap();

        for _ in 0..20 {
            cargo.tick(DT);
            assert!(cargo.vertical_position() >= 0.0);
        }
        assert_eq!(cargo.vertical_position(), 0.0);
    }

    #[test]
    fn drop_from_ten_lands_after_five_units() {
        let mut cargo = CargoDrop::default();
        cargo.request_release(snapshot(10.0, 0.0)).unwrap();

        let ticks = run_until_landed(&mut cargo);
        assert_eq!(cargo.phase(), DropPhase::Landed);
        assert!(cargo.elapsed() >= 5.0);
        assert!((299..=301).contains(&ticks));
        assert!(!cargo.is_visible());

        let height = cargo.vertical_position();
        let offset = cargo.horizontal_offset();
        for _ in 0..50 {
            cargo.tick(DT);
        }
        assert_eq!(cargo.vertical_position(), height);
        assert_eq!(cargo.horizontal_offset(), offset);
    }

    #[test]
    fn identical_releases_replay_identically() {
        let mut a = CargoDrop::default();
        let mut b = CargoDrop::default();
        let snap = ReleaseSnapshot {
            orbit_angle: 123.4,
            inclination: 17.25,
            height: 14.0,
            ground_shifted: false,
        };

        a.request_release(snap).unwrap();
        b.request_release(snap).unwrap();

        for _ in 0..200 {
            a.tick(DT);
            b.tick(DT);
            assert_eq!(a.horizontal_offset(), b.horizontal_offset());
            assert_eq!(a.vertical_position(), b.vertical_position());
        }
    }

    #[test]
    fn tick_is_noop_when_idle() {
        let mut cargo = CargoDrop::default();
        cargo.tick(DT);
        assert_eq!(cargo.elapsed(), 0.0);
        assert_eq!(cargo.phase(), DropPhase::Idle);
    }
}
