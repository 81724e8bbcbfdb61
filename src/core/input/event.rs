//=========================================================================
// Input Event Types
//=========================================================================
//
// Platform-neutral representation of keyboard and slider input.
//
// Event Flow:
// ```text
// Platform Layer (winit) / InputHandle
//         ↓
//    InputEvent (this module)
//         ↓
//    ActionMapper (bindings)
//         ↓
//    Intent (what the scene should do)
// ```
//
// Events are cheap to clone and hash-stable so the platform buffer can
// deduplicate key events and coalesce slider updates.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::hash::{Hash, Hasher};

//=== Internal Dependencies ===============================================

use crate::core::camera::Slider;

//=== KeyCode =============================================================

/// Physical keyboard key identifier.
///
/// Represents the key location, not the character produced. Only the keys
/// the scene can bind are listed; everything else arrives as
/// `Unidentified`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    //--- Numeric Keys -----------------------------------------------------

    /// Number row: 0-9
    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,

    //--- Alphabetic Keys --------------------------------------------------

    /// Letter keys: A-Z (physical location, not character)
    KeyA, KeyB, KeyC, KeyD, KeyE, KeyF, KeyG, KeyH, KeyI,
    KeyJ, KeyK, KeyL, KeyM, KeyN, KeyO, KeyP, KeyQ, KeyR,
    KeyS, KeyT, KeyU, KeyV, KeyW, KeyX, KeyY, KeyZ,

    //--- Arrow Keys -------------------------------------------------------

    ArrowDown,
    ArrowLeft,
    ArrowRight,
    ArrowUp,

    //--- Symbols ----------------------------------------------------------

    /// `=` / `+` key on the main row.
    Equal,

    /// `-` key on the main row.
    Minus,

    NumpadAdd,
    NumpadSubtract,

    //--- Special Keys -----------------------------------------------------

    Space,
    Enter,
    Escape,
    Tab,
    Backspace,
    Delete,

    /// Any key the input layer does not model.
    Unidentified,
}

//=== Modifiers ===========================================================

/// Modifier key state (Shift, Ctrl, Alt).
///
/// Bindings match modifiers exactly: a binding for `Equal` does not fire
/// on `Shift+Equal` unless that combination is bound too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub const NONE: Self = Self { shift: false, ctrl: false, alt: false };
    pub const SHIFT: Self = Self { shift: true, ctrl: false, alt: false };
    pub const CTRL: Self = Self { shift: false, ctrl: true, alt: false };
    pub const ALT: Self = Self { shift: false, ctrl: false, alt: true };
}

//=== InputEvent ==========================================================

/// Low-level input event.
///
/// # Equality & Hashing Semantics
///
/// ```text
/// KeyDown{A, CTRL}        == KeyDown{A, CTRL}         ✓
/// KeyDown{A, CTRL}        == KeyDown{A, SHIFT}        ✗ (different mods)
/// KeyDown{A}              == KeyUp{A}                 ✗ (different type)
/// SliderChanged{Teta, ..} == SliderChanged{Teta, ..}  ✓ (value ignored)
/// SliderChanged{Teta, ..} == SliderChanged{Gamma, ..} ✗
/// ```
///
/// Ignoring the slider value lets a buffer keep only the latest position
/// of each slider per frame.
#[derive(Debug, Clone, Copy)]
pub enum InputEvent {
    /// Key pressed down.
    KeyDown { key: KeyCode, modifiers: Modifiers },

    /// Key released.
    KeyUp { key: KeyCode, modifiers: Modifiers },

    /// A camera slider moved to `value` (normalized, nominally `[0, 1]`).
    SliderChanged { slider: Slider, value: f32 },

    /// Unrecognized or unsupported event. Ignored by the input system.
    Unidentified,
}

impl InputEvent {
    /// `true` for events that replace earlier events of the same kind
    /// within a frame rather than accumulate.
    pub fn is_continuous(&self) -> bool {
        matches!(self, Self::SliderChanged { .. })
    }
}

impl PartialEq for InputEvent {
    fn eq(&self, other: &Self) -> bool {
        use InputEvent::*;
        match (self, other) {
            (KeyDown { key: a, modifiers: ma }, KeyDown { key: b, modifiers: mb }) => {
                a == b && ma == mb
            }
            (KeyUp { key: a, modifiers: ma }, KeyUp { key: b, modifiers: mb }) => {
                a == b && ma == mb
            }
            // Value ignored, latest wins
            (SliderChanged { slider: a, .. }, SliderChanged { slider: b, .. }) => a == b,
            (Unidentified, Unidentified) => true,
            _ => false,
        }
    }
}

impl Eq for InputEvent {}

impl Hash for InputEvent {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);

        match self {
            Self::KeyDown { key, modifiers } | Self::KeyUp { key, modifiers } => {
                key.hash(state);
                modifiers.hash(state);
            }
            Self::SliderChanged { slider, .. } => slider.hash(state),
            Self::Unidentified => {}
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
