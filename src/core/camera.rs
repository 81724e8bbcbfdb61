//=========================================================================
// Camera
//=========================================================================
//
// View matrices for the four presets plus the slider-driven axonometric
// variant of the front view, and the orthographic projection for the
// current viewport.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::{Mat4, Vec3};
use log::trace;

//=== Internal Dependencies ===============================================

use crate::core::sim::ViewMode;

//=== Constants ===========================================================

/// Half-extent of the shorter viewport side, in view units.
const EDGE: f32 = 2.0;

const NEAR: f32 = -10.0;
const FAR: f32 = 10.0;

//=== Slider ==============================================================

/// Continuous camera inputs, each normalized to `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slider {
    /// Rotation about the vertical axis.
    Teta,

    /// Rotation about the horizontal axis.
    Gamma,
}

//=== Camera ==============================================================

#[derive(Debug, Clone)]
pub struct Camera {
    width: u32,
    height: u32,
    teta: f32,
    gamma: f32,
    axonometric: bool,
}

impl Camera {
    /// Creates a camera for a `width` × `height` viewport.
    ///
    /// Both sliders start centred (180 degrees) and inactive.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
            teta: 180.0,
            gamma: 180.0,
            axonometric: false,
        }
    }

    //--- Viewport ---------------------------------------------------------

    /// Updates the viewport. Zero sizes (minimized windows) are ignored.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            trace!(target: "frame", "Ignoring degenerate resize {}x{}", width, height);
            return;
        }
        self.width = width;
        self.height = height;
    }

    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    /// Orthographic projection keeping `EDGE` on the shorter side.
    pub fn projection(&self) -> Mat4 {
        if self.width < self.height {
            let y_lim = EDGE * self.height as f32 / self.width as f32;
            Mat4::orthographic_rh_gl(-EDGE, EDGE, -y_lim, y_lim, NEAR, FAR)
        } else {
            let x_lim = EDGE * self.aspect();
            Mat4::orthographic_rh_gl(-x_lim, x_lim, -EDGE, EDGE, NEAR, FAR)
        }
    }

    //--- Sliders ----------------------------------------------------------

    /// Sets one slider from a normalized value and activates the
    /// axonometric front view. Out-of-range values are clamped.
    pub fn set_slider(&mut self, slider: Slider, value: f32) {
        let degrees = value.clamp(0.0, 1.0) * 360.0;
        match slider {
            Slider::Teta => self.teta = degrees,
            Slider::Gamma => self.gamma = degrees,
        }
        self.axonometric = true;
    }

    /// Returns to the plain preset views.
    pub fn clear_axonometric(&mut self) {
        self.axonometric = false;
    }

    pub fn is_axonometric(&self) -> bool {
        self.axonometric
    }

    /// Slider angles `(teta, gamma)` in degrees.
    pub fn angles(&self) -> (f32, f32) {
        (self.teta, self.gamma)
    }

    //--- View -------------------------------------------------------------

    /// View matrix for `mode`.
    ///
    /// With the sliders active, the front view is additionally rotated by
    /// `gamma` about X and then `teta` about Y.
    pub fn view_matrix(&self, mode: ViewMode) -> Mat4 {
        let base = Self::preset(mode);
        if self.axonometric && mode == ViewMode::Front {
            base * Mat4::from_rotation_x(self.gamma.to_radians())
                * Mat4::from_rotation_y(self.teta.to_radians())
        } else {
            base
        }
    }

    fn preset(mode: ViewMode) -> Mat4 {
        match mode {
            ViewMode::Iso => {
                Mat4::look_at_rh(Vec3::new(2.0, 1.2, 1.0), Vec3::new(0.0, 0.6, 0.0), Vec3::Y)
            }
            ViewMode::Front => Mat4::look_at_rh(Vec3::Z, Vec3::ZERO, Vec3::Y),
            ViewMode::Top => {
                Mat4::look_at_rh(Vec3::new(0.0, 1.6, 0.0), Vec3::new(0.0, 0.6, 0.0), Vec3::NEG_Z)
            }
            ViewMode::Side => Mat4::look_at_rh(Vec3::new(1.0, 0.0, 1.0), Vec3::ZERO, Vec3::Y),
        }
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(800, 600)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
