//=========================================================================
// Action Mapper
//=========================================================================
//
// Maps key events to actions based on configured bindings.
//
// Architecture:
//   KeyDown (key, modifiers) → press map   → Action
//   KeyUp   (key)            → release map → Action
//
// Press bindings match modifiers exactly. Release bindings ignore
// modifiers, so letting go of a key always ends what pressing it began
// even if Shift changed in between.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;

//=== Internal Dependencies ===============================================

use super::{
    action::Action,
    event::{InputEvent, KeyCode, Modifiers},
};

//=== ActionMapper ========================================================

/// Maps key events to actions via (key, modifiers) lookups.
#[derive(Debug, Clone)]
pub struct ActionMapper<A: Action> {
    /// Press bindings: (key, modifiers) → action
    press_bindings: HashMap<(KeyCode, Modifiers), A>,

    /// Release bindings: key → action
    release_bindings: HashMap<KeyCode, A>,
}

impl<A: Action> ActionMapper<A> {
    /// Creates a mapper with no bindings.
    pub fn new() -> Self {
        Self {
            press_bindings: HashMap::new(),
            release_bindings: HashMap::new(),
        }
    }

    //--- Binding API ------------------------------------------------------

    /// Binds a key press (no modifiers) to an action.
    pub fn bind_key(&mut self, key: KeyCode, action: A) {
        self.bind_key_with_mods(key, Modifiers::NONE, action);
    }

    /// Binds a key press with modifiers to an action (exact match).
    pub fn bind_key_with_mods(&mut self, key: KeyCode, modifiers: Modifiers, action: A) {
        self.press_bindings.insert((key, modifiers), action);
    }

    /// Binds a key release to an action.
    pub fn bind_release(&mut self, key: KeyCode, action: A) {
        self.release_bindings.insert(key, action);
    }

    /// Removes every press and release binding for `key`.
    pub fn unbind_key_all_variants(&mut self, key: KeyCode) {
        self.press_bindings.retain(|&(k, _), _| k != key);
        self.release_bindings.remove(&key);
    }

    /// Number of press and release bindings.
    pub fn len(&self) -> usize {
        self.press_bindings.len() + self.release_bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    //--- Event Mapping ----------------------------------------------------

    /// Maps an input event to an action, if bound.
    pub fn map_event(&self, event: &InputEvent) -> Option<A> {
        match event {
            InputEvent::KeyDown { key, modifiers } => self.map_key(*key, *modifiers),
            InputEvent::KeyUp { key, .. } => self.release_bindings.get(key).copied(),
            _ => None,
        }
    }

    pub(super) fn map_key(&self, key: KeyCode, modifiers: Modifiers) -> Option<A> {
        self.press_bindings.get(&(key, modifiers)).copied()
    }
}

impl<A: Action> Default for ActionMapper<A> {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum TestAction {
        Hover,
        Land,
        Boost,
    }

    impl Action for TestAction {}

    fn key_down(key: KeyCode) -> InputEvent {
        InputEvent::KeyDown { key, modifiers: Modifiers::NONE }
    }

    fn key_up(key: KeyCode, modifiers: Modifiers) -> InputEvent {
        InputEvent::KeyUp { key, modifiers }
    }

    //=====================================================================
    // Press Bindings
    //=====================================================================

    #[test]
    fn bind_and_map_simple_key() {
        let mut mapper = ActionMapper::new();
        mapper.bind_key(KeyCode::Space, TestAction::Hover);

        assert_eq!(mapper.map_event(&key_down(KeyCode::Space)), Some(TestAction::Hover));
    }

    #[test]
    fn unbound_key_maps_to_none() {
        let mapper = ActionMapper::<TestAction>::new();
        assert_eq!(mapper.map_event(&key_down(KeyCode::Space)), None);
        assert!(mapper.is_empty());
    }

    #[test]
    fn modifiers_must_match_exactly() {
        let mut mapper = ActionMapper::new();
        mapper.bind_key(KeyCode::KeyS, TestAction::Land);
        mapper.bind_key_with_mods(KeyCode::KeyS, Modifiers::SHIFT, TestAction::Boost);

        assert_eq!(mapper.map_key(KeyCode::KeyS, Modifiers::NONE), Some(TestAction::Land));
        assert_eq!(mapper.map_key(KeyCode::KeyS, Modifiers::SHIFT), Some(TestAction::Boost));
        assert_eq!(mapper.map_key(KeyCode::KeyS, Modifiers::CTRL), None);
    }

    #[test]
    fn rebinding_replaces_action() {
        let mut mapper = ActionMapper::new();
        mapper.bind_key(KeyCode::KeyA, TestAction::Hover);
        mapper.bind_key(KeyCode::KeyA, TestAction::Land);

        assert_eq!(mapper.map_event(&key_down(KeyCode::KeyA)), Some(TestAction::Land));
        assert_eq!(mapper.len(), 1);
    }

    //=====================================================================
    // Release Bindings
    //=====================================================================

    #[test]
    fn release_ignores_modifiers() {
        let mut mapper = ActionMapper::new();
        mapper.bind_release(KeyCode::ArrowLeft, TestAction::Land);

        assert_eq!(
            mapper.map_event(&key_up(KeyCode::ArrowLeft, Modifiers::NONE)),
            Some(TestAction::Land)
        );
        assert_eq!(
            mapper.map_event(&key_up(KeyCode::ArrowLeft, Modifiers::SHIFT)),
            Some(TestAction::Land)
        );
    }

    #[test]
    fn press_binding_does_not_fire_on_release() {
        let mut mapper = ActionMapper::new();
        mapper.bind_key(KeyCode::Space, TestAction::Hover);

        assert_eq!(mapper.map_event(&key_up(KeyCode::Space, Modifiers::NONE)), None);
    }

    #[test]
    fn unbind_all_variants_clears_press_and_release() {
        let mut mapper = ActionMapper::new();
        mapper.bind_key(KeyCode::ArrowLeft, TestAction::Boost);
        mapper.bind_key_with_mods(KeyCode::ArrowLeft, Modifiers::SHIFT, TestAction::Boost);
        mapper.bind_release(KeyCode::ArrowLeft, TestAction::Land);
        mapper.bind_key(KeyCode::Space, TestAction::Hover);

        mapper.unbind_key_all_variants(KeyCode::ArrowLeft);

        assert_eq!(mapper.len(), 1);
        assert_eq!(mapper.map_event(&key_down(KeyCode::ArrowLeft)), None);
        assert_eq!(mapper.map_event(&key_up(KeyCode::ArrowLeft, Modifiers::NONE)), None);
    }
}
