//=========================================================================
// Cargo Box
//=========================================================================
//
// Positions the falling box from the values frozen at release.
//
// Placement (outermost first):
//   yaw(heading at release) → (radius, height, 0) in view units
//     → -Z by horizontal offset → yaw(-90) → box size
//
// The heading never changes after release, so the box travels in a
// straight line tangent to the orbit.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec3;

//=== Internal Dependencies ===============================================

use super::{Drawable, FLIGHT_SCALE};
use crate::core::render::{Canvas, Color, Primitive};
use crate::core::sim::{CargoDrop, FlightConfig, ViewMode};
use crate::core::transform::{Axis, TransformStack};

//=== Constants ===========================================================

const BOX_SIZE: f32 = 0.1;

//=== CargoBox ============================================================

/// Draw-time view of a [`CargoDrop`]. Draws nothing unless falling.
#[derive(Debug, Clone, Copy)]
pub struct CargoBox<'a> {
    cargo: &'a CargoDrop,
    flight: &'a FlightConfig,
    view_mode: ViewMode,
}

impl<'a> CargoBox<'a> {
    pub fn new(cargo: &'a CargoDrop, flight: &'a FlightConfig, view_mode: ViewMode) -> Self {
        Self { cargo, flight, view_mode }
    }
}

impl Drawable for CargoBox<'_> {
    fn draw(&self, stack: &mut TransformStack, canvas: &mut Canvas<'_>) {
        if !self.cargo.is_visible() {
            return;
        }

        let altitude = self.cargo.vertical_position()
            - self.view_mode.ground_offset(self.flight.view_altitude_offset);

        let mut cargo = stack.scope();
        cargo.rotate(Axis::Y, self.cargo.orbit_angle_at_drop());
        cargo.translate(Vec3::new(self.flight.flight_radius, altitude, 0.0) * FLIGHT_SCALE);
        cargo.translate(Vec3::new(0.0, 0.0, -self.cargo.horizontal_offset()));
        cargo.rotate(Axis::Y, -90.0);
        cargo.scale(Vec3::splat(BOX_SIZE));
        canvas.draw(cargo.current(), Primitive::Cube, Color::WHITE);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
