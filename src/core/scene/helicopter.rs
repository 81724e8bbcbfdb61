//=========================================================================
// Helicopter
//=========================================================================
//
// Places the helicopter on its orbit and draws its parts.
//
// Placement (outermost first):
//   scale(FLIGHT_SCALE) → yaw(orbit) → (radius, altitude, 0) → yaw(-90)
//     → roll(inclination)
//
// Parts are authored in model units with the cockpit at the origin and
// the tail along +X. Each part sits in its own scope.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec3;

//=== Internal Dependencies ===============================================

use super::{Drawable, FLIGHT_SCALE};
use crate::core::render::{Canvas, Color, Primitive};
use crate::core::sim::FlightState;
use crate::core::transform::{Axis, TransformStack};

//=== Dimensions & Palette ================================================

const PROPELLER_LENGTH: f32 = 4.0;
const ROTOR_LENGTH: f32 = 0.75;
const COCKPIT_DIAMETER: f32 = 3.0;
const TAIL_DIAMETER: f32 = 6.5;
const FEET_LENGTH: f32 = 2.5;
const FEET_DISTANCE: f32 = 1.0;
const SUPPORT_TILT: f32 = 20.0;

const TAIL_HUB: Vec3 = Vec3::new(6.975, 2.4, 0.0);
const TAIL_PROPELLER_SCALE: f32 = 0.25;

const FRAME: Color = Color::rgb(0.4, 0.5, 0.4);
const HULL: Color = Color::rgb(0.2, 0.2, 0.1);

//=== Helicopter ==========================================================

/// Draw-time view of a [`FlightState`].
#[derive(Debug, Clone, Copy)]
pub struct Helicopter<'a> {
    flight: &'a FlightState,
}

impl<'a> Helicopter<'a> {
    /// Number of primitives one helicopter draw emits.
    pub const PRIMITIVES: usize = 20;

    pub fn new(flight: &'a FlightState) -> Self {
        Self { flight }
    }
}

impl Drawable for Helicopter<'_> {
    fn draw(&self, stack: &mut TransformStack, canvas: &mut Canvas<'_>) {
        let flight = self.flight;
        let rotor = flight.rotor_phase();

        let mut body = stack.scope();
        body.scale(Vec3::splat(FLIGHT_SCALE));
        body.rotate(Axis::Y, flight.orbit_angle());
        body.translate(Vec3::new(flight.config().flight_radius, flight.altitude(), 0.0));
        body.rotate(Axis::Y, -90.0);
        body.rotate(Axis::Z, flight.inclination());

        // Main rotor blades
        {
            let mut part = body.scope();
            part.translate(Vec3::new(0.5, 3.75, 0.0));
            part.rotate(Axis::Y, rotor);
            draw_propellers(&mut part, canvas);
        }

        // Rotor mast
        {
            let mut part = body.scope();
            part.translate(Vec3::new(0.5, 3.5, 0.0));
            part.rotate(Axis::Y, rotor);
            part.scale(Vec3::new(ROTOR_LENGTH / 4.0, ROTOR_LENGTH, ROTOR_LENGTH / 4.0));
            canvas.draw(part.current(), Primitive::Cylinder, FRAME);
        }

        // Cowling
        {
            let mut part = body.scope();
            part.translate(Vec3::new(0.5, 2.6, 0.0));
            part.scale(Vec3::new(
                COCKPIT_DIAMETER / 1.5,
                COCKPIT_DIAMETER / 3.0,
                COCKPIT_DIAMETER / 1.5,
            ));
            part.rotate(Axis::X, 90.0);
            canvas.draw(part.current(), Primitive::Torus, HULL);
        }

        // Cockpit
        {
            let mut part = body.scope();
            part.translate(Vec3::new(0.0, 1.5, 0.0));
            part.scale(Vec3::new(
                COCKPIT_DIAMETER * 1.5,
                COCKPIT_DIAMETER,
                COCKPIT_DIAMETER / 1.5,
            ));
            canvas.draw(part.current(), Primitive::Sphere, HULL);
        }

        // Tail boom
        {
            let mut part = body.scope();
            part.translate(Vec3::new(3.25, 1.75, 0.0));
            part.scale(Vec3::new(TAIL_DIAMETER, TAIL_DIAMETER / 10.0, TAIL_DIAMETER / 20.0));
            canvas.draw(part.current(), Primitive::Sphere, FRAME);
        }

        // Tail rotor hub
        {
            let mut part = body.scope();
            part.translate(TAIL_HUB + Vec3::Z * 0.1);
            part.rotate(Axis::X, 90.0);
            part.rotate(Axis::Y, -rotor);
            part.scale(Vec3::new(ROTOR_LENGTH / 4.0, ROTOR_LENGTH / 2.0, ROTOR_LENGTH / 4.0));
            canvas.draw(part.current(), Primitive::Cylinder, FRAME);
        }

        // Tail rotor blades
        {
            let mut part = body.scope();
            part.translate(TAIL_HUB + Vec3::Z * 0.2);
            part.scale(Vec3::splat(TAIL_PROPELLER_SCALE));
            part.rotate(Axis::X, 90.0);
            part.rotate(Axis::Y, -rotor);
            draw_propellers(&mut part, canvas);
        }

        // Fin
        {
            let mut part = body.scope();
            part.translate(TAIL_HUB);
            part.rotate(Axis::Z, 45.0);
            part.scale(Vec3::new(TAIL_DIAMETER / 3.0, TAIL_DIAMETER / 20.0, TAIL_DIAMETER / 40.0));
            canvas.draw(part.current(), Primitive::Sphere, HULL);
        }

        draw_supports(&mut body, canvas);
        draw_skids(&mut body, canvas);
    }
}

//--- Parts ---------------------------------------------------------------

/// Four blades around the current origin.
fn draw_propellers(stack: &mut TransformStack, canvas: &mut Canvas<'_>) {
    let half = PROPELLER_LENGTH / 2.0;
    let blades = [
        (Vec3::new(0.0, -half, 0.0), 0.0),
        (Vec3::new(0.0, 0.0, -half), 90.0),
        (Vec3::new(0.0, half, 0.0), 180.0),
        (Vec3::new(0.0, 0.0, half), 270.0),
    ];

    let mut hub = stack.scope();
    hub.rotate(Axis::Z, 90.0);

    for (offset, angle) in blades {
        let mut blade = hub.scope();
        blade.translate(offset);
        blade.rotate(Axis::X, angle);
        blade.scale(Vec3::new(
            PROPELLER_LENGTH / 50.0,
            PROPELLER_LENGTH,
            PROPELLER_LENGTH / 5.0,
        ));
        canvas.draw(blade.current(), Primitive::Pyramid, FRAME);
    }
}

/// Four struts joining the cockpit to the skids, splayed front and back.
fn draw_supports(stack: &mut TransformStack, canvas: &mut Canvas<'_>) {
    for (tilt, z) in [(SUPPORT_TILT, -FEET_DISTANCE), (-SUPPORT_TILT, FEET_DISTANCE)] {
        let mut pair = stack.scope();
        pair.rotate(Axis::X, tilt);

        for x in [FEET_DISTANCE / 1.5, -FEET_DISTANCE / 1.5] {
            let mut strut = pair.scope();
            strut.translate(Vec3::new(x, 0.0, z));
            strut.scale(Vec3::new(FEET_LENGTH / 30.0, FEET_LENGTH / 3.5, FEET_LENGTH / 30.0));
            canvas.draw(strut.current(), Primitive::Cylinder, FRAME);
        }
    }
}

/// Two landing skids lying along X.
fn draw_skids(stack: &mut TransformStack, canvas: &mut Canvas<'_>) {
    let mut skids = stack.scope();
    skids.rotate(Axis::Z, 90.0);

    for z in [FEET_DISTANCE, -FEET_DISTANCE] {
        let mut skid = skids.scope();
        skid.translate(Vec3::new(0.0, 0.0, z));
        skid.scale(Vec3::new(FEET_LENGTH / 20.0, FEET_LENGTH, FEET_LENGTH / 20.0));
        canvas.draw(skid.current(), Primitive::Cylinder, FRAME);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
