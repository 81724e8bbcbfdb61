//=========================================================================
// City
//=========================================================================
//
// Static geometry: floor slab, four roads with lane stripes, the traffic
// light, two office blocks and a stepped tower.
//
// Everything is authored in the floor's frame and described as data;
// the draw code only walks the tables. Roads, blocks and the light are
// siblings under the floor, each inside its own scope.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec3;

//=== Internal Dependencies ===============================================

use super::Drawable;
use crate::core::render::{Canvas, Color, Primitive};
use crate::core::transform::{Axis, TransformStack};

//=== Palette =============================================================

const FLOOR: Color = Color::rgb(0.267, 0.267, 0.267);
const ASPHALT: Color = Color::rgb(0.145, 0.145, 0.145);
const STRIPE: Color = Color::rgb(0.416, 0.416, 0.416);
const CONCRETE: Color = Color::rgb(0.145, 0.145, 0.145);
const WINDOW: Color = Color::rgb(0.553, 0.549, 0.22);
const POLE: Color = Color::rgb(0.211, 0.211, 0.211);

//=== Floor ===============================================================

const FLOOR_SCALE: Vec3 = Vec3::new(5.0, 0.2, 5.0);
const FLOOR_YAW: f32 = 100.0;

/// Drop applied after scaling so the slab's top face sits on the ground.
const FLOOR_DROP: f32 = -0.5;

//=== Roads ===============================================================

const STRIPE_SCALE: Vec3 = Vec3::new(0.03, 0.5, 0.08);
const STRIPE_OFFSET: Vec3 = Vec3::new(-2.0, 1.0, 0.0);

/// One road slab and its centre-line stripes.
#[derive(Debug, Clone, Copy)]
struct Road {
    scale: Vec3,
    position: Vec3,
    /// Stripes run across the slab's local X instead of Z.
    crosswise: bool,
    stripes: usize,
    first_stripe: f32,
    stripe_spacing: f32,
}

const ROADS: [Road; 4] = [
    Road {
        scale: Vec3::new(1.0, 0.1, 0.1),
        position: Vec3::new(0.0, 5.5, 1.0),
        crosswise: true,
        stripes: 8,
        first_stripe: -5.5,
        stripe_spacing: 1.5,
    },
    Road {
        scale: Vec3::new(0.5, 0.1, 0.1),
        position: Vec3::new(0.0, 5.5, -3.0),
        crosswise: true,
        stripes: 5,
        first_stripe: -3.0,
        stripe_spacing: 2.0,
    },
    Road {
        scale: Vec3::new(0.1, 0.1, 0.65),
        position: Vec3::new(-2.0, 5.5, -0.27),
        crosswise: false,
        stripes: 5,
        first_stripe: -5.0,
        stripe_spacing: 2.0,
    },
    Road {
        scale: Vec3::new(0.1, 0.1, 0.8),
        position: Vec3::new(2.0, 5.0, 0.124),
        crosswise: false,
        stripes: 6,
        first_stripe: -5.0,
        stripe_spacing: 2.0,
    },
];

impl Drawable for Road {
    fn draw(&self, stack: &mut TransformStack, canvas: &mut Canvas<'_>) {
        let mut road = stack.scope();
        road.scale(self.scale);
        road.translate(self.position);
        canvas.draw(road.current(), Primitive::Cube, ASPHALT);

        if self.crosswise {
            road.rotate(Axis::Y, 90.0);
        }

        for i in 0..self.stripes {
            let mut stripe = road.scope();
            stripe.scale(STRIPE_SCALE);
            stripe.translate(STRIPE_OFFSET + Vec3::Z * (self.first_stripe + self.stripe_spacing * i as f32));
            canvas.draw(stripe.current(), Primitive::Cube, STRIPE);
        }
    }
}

//=== Windows =============================================================

/// Facade depth used to push panes onto the wall surface.
const FACADE: f32 = 50.0;
const PANE_DEPTH: f32 = 0.01;

/// Regular grid of window panes on the front (+Z) and optionally the
/// left (-X) facade of a block.
#[derive(Debug, Clone, Copy)]
struct WindowGrid {
    rows: usize,
    cols: usize,
    pane_width: f32,
    pane_height: f32,
    top_row: f32,
    row_step: f32,
    front_start: f32,
    side_start: f32,
    col_step: f32,
    side: bool,
}

impl Drawable for WindowGrid {
    fn draw(&self, stack: &mut TransformStack, canvas: &mut Canvas<'_>) {
        for row in 0..self.rows {
            let y = self.top_row - self.row_step * row as f32;
            for col in 0..self.cols {
                let mut pane = stack.scope();
                pane.scale(Vec3::new(self.pane_width, self.pane_height, PANE_DEPTH));
                pane.translate(Vec3::new(self.front_start - self.col_step * col as f32, y, FACADE));
                canvas.draw(pane.current(), Primitive::Cube, WINDOW);
            }
        }

        if !self.side {
            return;
        }

        for row in 0..self.rows {
            let y = self.top_row - self.row_step * row as f32;
            for col in 0..self.cols {
                let mut pane = stack.scope();
                pane.scale(Vec3::new(PANE_DEPTH, self.pane_height, self.pane_width));
                pane.translate(Vec3::new(-FACADE, y, self.side_start - self.col_step * col as f32));
                canvas.draw(pane.current(), Primitive::Cube, WINDOW);
            }
        }
    }
}

//=== Buildings ===========================================================

/// One box of a building. Each tier is placed relative to the previous
/// one, so a slice of tiers forms a chain of nested scopes.
#[derive(Debug, Clone, Copy)]
struct Tier {
    scale: Vec3,
    position: Vec3,
    color: Color,
    windows: Option<WindowGrid>,
}

/// Draws `tiers[0]`, then the rest nested inside it, then its windows.
fn draw_tiers(tiers: &[Tier], stack: &mut TransformStack, canvas: &mut Canvas<'_>) {
    let Some((tier, upper)) = tiers.split_first() else {
        return;
    };

    let mut body = stack.scope();
    body.scale(tier.scale);
    body.translate(tier.position);
    canvas.draw(body.current(), Primitive::Cube, tier.color);

    draw_tiers(upper, &mut body, canvas);

    if let Some(windows) = &tier.windows {
        windows.draw(&mut body, canvas);
    }
}

const OFFICE_WEST: [Tier; 1] = [Tier {
    scale: Vec3::new(0.1, 6.0, 0.1),
    position: Vec3::new(3.5, 0.5, -3.0),
    color: CONCRETE,
    windows: Some(WindowGrid {
        rows: 4,
        cols: 3,
        pane_width: 0.2,
        pane_height: 0.1,
        top_row: 3.7,
        row_step: 1.4,
        front_start: 1.2,
        side_start: 1.2,
        col_step: 1.5,
        side: true,
    }),
}];

const OFFICE_EAST: [Tier; 1] = [Tier {
    scale: Vec3::new(0.1, 3.0, 0.1),
    position: Vec3::new(-4.5, 0.66, -4.5),
    color: CONCRETE,
    windows: Some(WindowGrid {
        rows: 2,
        cols: 2,
        pane_width: 0.2,
        pane_height: 0.18,
        top_row: 1.8,
        row_step: 2.0,
        front_start: 1.1,
        side_start: 1.1,
        col_step: 2.7,
        side: false,
    }),
}];

const TOWER_WINDOWS: WindowGrid = WindowGrid {
    rows: 3,
    cols: 3,
    pane_width: 0.18,
    pane_height: 0.15,
    top_row: 2.0,
    row_step: 1.4,
    front_start: 1.1,
    side_start: 1.2,
    col_step: 1.5,
    side: true,
};

const TOWER: [Tier; 5] = [
    // Base
    Tier {
        scale: Vec3::new(0.12, 5.0, 0.12),
        position: Vec3::new(0.0, 0.6, -0.8),
        color: CONCRETE,
        windows: Some(WindowGrid {
            rows: 4,
            pane_height: 0.12,
            top_row: 3.0,
            ..TOWER_WINDOWS
        }),
    },
    // Middle
    Tier {
        scale: Vec3::new(0.8, 0.5, 0.8),
        position: Vec3::new(0.0, 1.5, 0.0),
        color: Color::rgb(0.145, 0.125, 0.145),
        windows: Some(TOWER_WINDOWS),
    },
    // Top
    Tier {
        scale: Vec3::new(0.8, 1.0, 0.8),
        position: Vec3::new(0.0, 1.0, 0.0),
        color: Color::rgb(0.145, 0.105, 0.145),
        windows: Some(TOWER_WINDOWS),
    },
    // Spire base
    Tier {
        scale: Vec3::new(0.2, 0.15, 0.2),
        position: Vec3::new(0.0, 3.8, 0.0),
        color: Color::rgb(0.125, 0.105, 0.105),
        windows: None,
    },
    // Spire
    Tier {
        scale: Vec3::new(0.4, 4.0, 0.4),
        position: Vec3::new(0.0, 0.6, 0.0),
        color: CONCRETE,
        windows: None,
    },
];

//=== Traffic Light =======================================================

#[derive(Debug, Clone, Copy)]
struct TrafficLight {
    lamp: Color,
}

impl Drawable for TrafficLight {
    fn draw(&self, stack: &mut TransformStack, canvas: &mut Canvas<'_>) {
        let mut pole = stack.scope();
        pole.scale(Vec3::new(0.01, 2.0, 0.01));
        pole.translate(Vec3::new(10.0, 0.8, 1.0));
        canvas.draw(pole.current(), Primitive::Cylinder, POLE);

        let mut arm = pole.scope();
        arm.scale(Vec3::new(0.1, 0.1, 5.0));
        arm.translate(Vec3::new(0.0, 4.5, 0.5));
        canvas.draw(arm.current(), Primitive::Cylinder, POLE);

        let mut lamp = arm.scope();
        lamp.scale(Vec3::new(1.2, 1.2, 0.2));
        lamp.translate(Vec3::new(-0.2, 0.0, 0.2));
        canvas.draw(lamp.current(), Primitive::Sphere, self.lamp);
    }
}

//=== City ================================================================

/// The static city block, drawn on a ground plane at `ground_y`.
#[derive(Debug, Clone, Copy)]
pub struct City {
    ground_y: f32,
    light: Color,
}

impl City {
    /// Number of primitives one city draw emits.
    pub const PRIMITIVES: usize = 127;

    /// `ground_y` is the ground height in view units; `light` the current
    /// semaphore colour.
    pub fn new(ground_y: f32, light: Color) -> Self {
        Self { ground_y, light }
    }
}

impl Drawable for City {
    fn draw(&self, stack: &mut TransformStack, canvas: &mut Canvas<'_>) {
        let mut floor = stack.scope();
        floor.translate(Vec3::Y * self.ground_y);
        floor.scale(FLOOR_SCALE);
        floor.rotate(Axis::Y, FLOOR_YAW);
        floor.translate(Vec3::Y * FLOOR_DROP);
        canvas.draw(floor.current(), Primitive::Cube, FLOOR);

        for road in &ROADS {
            road.draw(&mut floor, canvas);
        }

        TrafficLight { lamp: self.light }.draw(&mut floor, canvas);

        draw_tiers(&OFFICE_WEST, &mut floor, canvas);
        draw_tiers(&OFFICE_EAST, &mut floor, canvas);
        draw_tiers(&TOWER, &mut floor, canvas);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::render::{DrawRecorder, FillMode};
    use glam::Mat4;

    fn draw_city(city: City, stack: &mut TransformStack) -> DrawRecorder {
        let mut recorder = DrawRecorder::new();
        let mut canvas = Canvas::new(&mut recorder, FillMode::Solid);
        city.draw(stack, &mut canvas);
        recorder
    }

    #[test]
    fn emits_expected_primitives() {
        let mut stack = TransformStack::new();
        let rec = draw_city(City::new(0.0, Color::RED), &mut stack);

        assert_eq!(rec.draw_calls().len(), City::PRIMITIVES);
        assert_eq!(rec.calls_of(Primitive::Cylinder).count(), 2);
        assert_eq!(rec.calls_of(Primitive::Sphere).count(), 1);
        assert_eq!(rec.calls_of(Primitive::Cube).count(), City::PRIMITIVES - 3);
    }

    #[test]
    fn leaves_stack_unchanged() {
        let root = Mat4::from_translation(Vec3::new(0.3, -0.2, 0.1));
        let mut stack = TransformStack::with_root(root);
        draw_city(City::new(-1.3, Color::GREEN), &mut stack);

        assert_eq!(stack.depth(), 1);
        assert_eq!(stack.current(), root);
    }

    #[test]
    fn lamp_uses_light_colour() {
        let mut stack = TransformStack::new();
        let rec = draw_city(City::new(0.0, Color::GREEN), &mut stack);

        let lamps: Vec<_> = rec.calls_of(Primitive::Sphere).collect();
        assert_eq!(lamps.len(), 1);
        assert_eq!(lamps[0].color, Color::GREEN);
    }

    #[test]
    fn floor_top_sits_on_ground() {
        for ground in [0.0, -1.3] {
            let mut stack = TransformStack::new();
            let rec = draw_city(City::new(ground, Color::RED), &mut stack);

            let floor = rec.draw_calls()[0];
            let top = floor.model_view.transform_point3(Vec3::new(0.0, 0.5, 0.0));
            assert!((top.y - ground).abs() < 1e-5, "top at {} for ground {}", top.y, ground);
        }
    }

    #[test]
    fn ground_shift_moves_everything() {
        let mut a = TransformStack::new();
        let mut b = TransformStack::new();
        let high = draw_city(City::new(0.0, Color::RED), &mut a);
        let low = draw_city(City::new(-1.3, Color::RED), &mut b);

        for (h, l) in high.draw_calls().iter().zip(low.draw_calls()) {
            let ph = h.model_view.transform_point3(Vec3::ZERO);
            let pl = l.model_view.transform_point3(Vec3::ZERO);
            assert!((ph - pl - Vec3::new(0.0, 1.3, 0.0)).length() < 1e-4);
        }
    }
}
