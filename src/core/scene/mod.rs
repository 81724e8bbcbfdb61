//=========================================================================
// Scene Assembly
//=========================================================================
//
// Draws the scene tree through a transform stack.
//
// Architecture:
//   view root
//     ├─ City        (floor, roads, light, blocks, tower)
//     ├─ Helicopter  (positioned by FlightState)
//     └─ CargoBox    (positioned by CargoDrop, only while falling)
//
// Every node opens its own scope, so drawing a node never changes the
// caller's transform.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod cargo_box;
pub mod city;
pub mod helicopter;

//=== Public API ==========================================================

pub use cargo_box::CargoBox;
pub use city::City;
pub use helicopter::Helicopter;

//=== Internal Dependencies ===============================================

use crate::core::render::Canvas;
use crate::core::transform::TransformStack;

//=== Constants ===========================================================

/// Flight units to view units. The helicopter model and its path are
/// authored ten times larger than the city.
pub const FLIGHT_SCALE: f32 = 0.1;

//=== Drawable Trait ======================================================

/// A subtree of the scene.
///
/// Implementations must leave `stack` at the depth they found it.
pub trait Drawable {
    fn draw(&self, stack: &mut TransformStack, canvas: &mut Canvas<'_>);
}

/// Height of the ground plane in view units for a given ground offset.
pub fn ground_level(offset: f32) -> f32 {
    -offset * FLIGHT_SCALE
}
