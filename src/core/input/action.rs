//=========================================================================
// Action Trait
//=========================================================================
//
// Bound for the values key bindings resolve to. The mapper routes them
// without interpreting them; the frame driver gives them meaning.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt::Debug;
use std::hash::Hash;

//=== Action Trait ========================================================

/// Marker trait for bindable command enums.
///
/// # Requirements
///
/// - `Copy + Eq + Hash`: Efficient passing and deduplication
/// - `Debug`: Logging support
/// - `Send + 'static`: Thread-safe transfer
///
/// # Example
///
/// ```
/// use rotor_city::core::input::Action;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// enum Command { Hover, Land }
///
/// impl Action for Command {}
/// ```
pub trait Action: 'static + Send + Copy + Eq + Hash + Debug {}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum TestAction {
        Hover,
        Land,
    }

    impl Action for TestAction {}

    #[test]
    fn action_is_hashable() {
        let mut set = HashSet::new();
        set.insert(TestAction::Hover);
        set.insert(TestAction::Hover);
        set.insert(TestAction::Land);

        assert_eq!(set.len(), 2);
    }

    #[test]
    fn action_is_send_and_static() {
        fn assert_bounds<T: Send + 'static>() {}
        assert_bounds::<TestAction>();
    }
}
