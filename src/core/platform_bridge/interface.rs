//=========================================================================
// Platform Bridge Interface
//=========================================================================
//
// Platform-to-core interface types (events and errors).
//
// Defines the contract between the window thread and the simulation
// thread. Anything that can produce these (winit, an external GUI through
// `InputHandle`, a test) can drive the scene.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::input::event::InputEvent;

//=== PlatformEvent =======================================================

/// Events sent from producers to the simulation thread.
#[derive(Debug, Clone)]
pub(crate) enum PlatformEvent {
    /// Batched input events for a frame.
    Inputs {
        discrete: Vec<InputEvent>,
        continuous: Vec<InputEvent>,
    },

    /// Drawable area changed (physical pixels).
    Resized { width: u32, height: u32 },

    /// Window close requested.
    WindowClosed,
}

//=== PlatformError =======================================================

/// Platform initialization and runtime errors.
#[derive(Debug)]
pub(crate) enum PlatformError {
    /// Event loop creation failed (OS-level issue).
    EventLoopCreation(String),

    /// Event loop execution error.
    EventLoopExecution(String),
}

impl std::fmt::Display for PlatformError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EventLoopCreation(e) => write!(f, "Event loop creation failed: {}", e),
            Self::EventLoopExecution(e) => write!(f, "Event loop error: {}", e),
        }
    }
}

impl std::error::Error for PlatformError {}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_event_is_debug() {
        let event = PlatformEvent::Resized { width: 640, height: 480 };
        let debug_str = format!("{:?}", event.clone());
        assert!(debug_str.contains("Resized"));
    }

    #[test]
    fn platform_error_display_format() {
        let error = PlatformError::EventLoopCreation("no display".to_string());
        assert_eq!(error.to_string(), "Event loop creation failed: no display");

        fn assert_error<T: std::error::Error>() {}
        assert_error::<PlatformError>();
    }
}
