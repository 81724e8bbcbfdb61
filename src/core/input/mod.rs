//=========================================================================
// Input System
//=========================================================================
//
// Turns each frame's raw event batches into scene intents.
//
// Architecture:
//   Vec<Vec<InputEvent>> → InputSystem::update() → IntentBatch
//                               │
//                               ├─ keys    → ActionMapper<Intent>
//                               └─ sliders → passed through
//
// Owned and updated by the core thread. Nothing here touches scene state;
// the frame driver applies the batch at the start of its frame.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod action;
pub mod action_mapper;
pub mod event;
pub mod intent;

//=== Public API ==========================================================

pub use action::Action;
pub use action_mapper::ActionMapper;
pub use event::{InputEvent, KeyCode, Modifiers};
pub use intent::Intent;

//=== External Dependencies ===============================================

use log::trace;

//=== Internal Dependencies ===============================================

use crate::core::camera::Slider;
use crate::core::render::FillMode;
use crate::core::sim::ViewMode;

//=== IntentBatch =========================================================

/// Everything the user asked for during one frame, in arrival order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IntentBatch {
    pub intents: Vec<Intent>,

    /// Latest value per slider change, raw (unclamped).
    pub sliders: Vec<(Slider, f32)>,
}

impl IntentBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.intents.is_empty() && self.sliders.is_empty()
    }

    /// Builder-style helper for a batch of intents only.
    pub fn from_intents(intents: impl IntoIterator<Item = Intent>) -> Self {
        Self {
            intents: intents.into_iter().collect(),
            sliders: Vec::new(),
        }
    }
}

//=== InputSystem =========================================================

/// Maps raw input to [`IntentBatch`]es through configurable bindings.
#[derive(Debug, Clone)]
pub struct InputSystem {
    mapper: ActionMapper<Intent>,
}

impl InputSystem {
    /// Creates a system with [`default_bindings`].
    pub fn new() -> Self {
        Self::with_mapper(default_bindings())
    }

    /// Creates a system with custom bindings.
    pub fn with_mapper(mapper: ActionMapper<Intent>) -> Self {
        Self { mapper }
    }

    /// Mutable access to the bindings.
    pub fn bindings_mut(&mut self) -> &mut ActionMapper<Intent> {
        &mut self.mapper
    }

    /// Consumes all batches received this frame.
    pub fn update(&mut self, input_batches: &mut Vec<Vec<InputEvent>>) -> IntentBatch {
        let mut batch = IntentBatch::new();

        for events in input_batches.drain(..) {
            for event in &events {
                match event {
                    InputEvent::SliderChanged { slider, value } => {
                        batch.sliders.push((*slider, *value));
                    }
                    _ => {
                        if let Some(intent) = self.mapper.map_event(event) {
                            batch.intents.push(intent);
                        }
                    }
                }
            }
        }

        if !batch.is_empty() {
            trace!(target: "input", "Frame intents: {:?}", batch);
        }
        batch
    }
}

impl Default for InputSystem {
    fn default() -> Self {
        Self::new()
    }
}

//=== Default Bindings ====================================================

/// Keyboard layout of the demo.
///
/// | Key                    | Intent                         |
/// |------------------------|--------------------------------|
/// | W / S                  | wireframe / solid              |
/// | F                      | toggle fill mode               |
/// | P                      | pause / resume                 |
/// | `+` / `-` (and numpad) | speed up / down                |
/// | Up / Down              | climb / descend                |
/// | Left (hold)            | forward thrust                 |
/// | Space                  | drop the box                   |
/// | 1 – 4                  | Iso, Front, Top, Side          |
pub fn default_bindings() -> ActionMapper<Intent> {
    let mut mapper = ActionMapper::new();

    mapper.bind_key(KeyCode::KeyW, Intent::SetFillMode(FillMode::Wireframe));
    mapper.bind_key(KeyCode::KeyS, Intent::SetFillMode(FillMode::Solid));
    mapper.bind_key(KeyCode::KeyF, Intent::ToggleFillMode);
    mapper.bind_key(KeyCode::KeyP, Intent::ToggleAnimation);

    mapper.bind_key(KeyCode::Equal, Intent::SpeedUp);
    mapper.bind_key_with_mods(KeyCode::Equal, Modifiers::SHIFT, Intent::SpeedUp);
    mapper.bind_key(KeyCode::NumpadAdd, Intent::SpeedUp);
    mapper.bind_key(KeyCode::Minus, Intent::SpeedDown);
    mapper.bind_key(KeyCode::NumpadSubtract, Intent::SpeedDown);

    mapper.bind_key(KeyCode::ArrowUp, Intent::Climb);
    mapper.bind_key(KeyCode::ArrowDown, Intent::Descend);
    mapper.bind_key(KeyCode::ArrowLeft, Intent::ThrustForwardOn);
    mapper.bind_release(KeyCode::ArrowLeft, Intent::ThrustForwardOff);
    mapper.bind_key(KeyCode::Space, Intent::DropBox);

    let digits = [KeyCode::Digit1, KeyCode::Digit2, KeyCode::Digit3, KeyCode::Digit4];
    for (key, mode) in digits.into_iter().zip(ViewMode::ALL) {
        mapper.bind_key(key, Intent::SetViewMode(mode));
    }

    mapper
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn key_down(key: KeyCode) -> InputEvent {
        InputEvent::KeyDown { key, modifiers: Modifiers::NONE }
    }

    fn key_up(key: KeyCode) -> InputEvent {
        InputEvent::KeyUp { key, modifiers: Modifiers::NONE }
    }

    #[test]
    fn maps_keys_in_arrival_order() {
        let mut system = InputSystem::new();
        let mut batches = vec![
            vec![key_down(KeyCode::ArrowUp), key_down(KeyCode::Space)],
            vec![key_down(KeyCode::Digit2)],
        ];

        let batch = system.update(&mut batches);

        assert!(batches.is_empty());
        assert_eq!(
            batch.intents,
            vec![Intent::Climb, Intent::DropBox, Intent::SetViewMode(ViewMode::Front)]
        );
    }

    #[test]
    fn thrust_follows_press_and_release() {
        let mut system = InputSystem::new();
        let mut batches = vec![vec![key_down(KeyCode::ArrowLeft), key_up(KeyCode::ArrowLeft)]];

        let batch = system.update(&mut batches);
        assert_eq!(batch.intents, vec![Intent::ThrustForwardOn, Intent::ThrustForwardOff]);
    }

    #[test]
    fn plus_works_with_and_without_shift() {
        let mut system = InputSystem::new();
        let mut batches = vec![vec![
            key_down(KeyCode::Equal),
            InputEvent::KeyDown { key: KeyCode::Equal, modifiers: Modifiers::SHIFT },
            key_down(KeyCode::NumpadSubtract),
        ]];

        let batch = system.update(&mut batches);
        assert_eq!(batch.intents, vec![Intent::SpeedUp, Intent::SpeedUp, Intent::SpeedDown]);
    }

    #[test]
    fn sliders_pass_through() {
        let mut system = InputSystem::new();
        let mut batches = vec![vec![InputEvent::SliderChanged { slider: Slider::Gamma, value: 0.25 }]];

        let batch = system.update(&mut batches);
        assert!(batch.intents.is_empty());
        assert_eq!(batch.sliders, vec![(Slider::Gamma, 0.25)]);
    }

    #[test]
    fn unbound_and_unidentified_are_dropped() {
        let mut system = InputSystem::new();
        let mut batches = vec![vec![
            key_down(KeyCode::KeyZ),
            key_up(KeyCode::Space),
            InputEvent::Unidentified,
        ]];

        assert!(system.update(&mut batches).is_empty());
    }

    #[test]
    fn bindings_can_be_customized() {
        let mut system = InputSystem::new();
        system.bindings_mut().bind_key(KeyCode::KeyZ, Intent::DropBox);

        let mut batches = vec![vec![key_down(KeyCode::KeyZ)]];
        assert_eq!(system.update(&mut batches).intents, vec![Intent::DropBox]);
    }

    #[test]
    fn every_view_has_a_digit() {
        let mapper = default_bindings();
        for (n, mode) in ViewMode::ALL.into_iter().enumerate() {
            let key = [KeyCode::Digit1, KeyCode::Digit2, KeyCode::Digit3, KeyCode::Digit4][n];
            assert_eq!(mapper.map_event(&key_down(key)), Some(Intent::SetViewMode(mode)));
        }
    }
}
