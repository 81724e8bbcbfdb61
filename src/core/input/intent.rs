//=========================================================================
// Intents
//=========================================================================
//
// What the user asked the scene to do, independent of which key did it.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::action::Action;
use crate::core::render::FillMode;
use crate::core::sim::ViewMode;

//=== Intent ==============================================================

/// Discrete scene command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    /// Switch between wireframe and solid.
    ToggleFillMode,

    /// Select a fill mode directly.
    SetFillMode(FillMode),

    /// Pause or resume the simulation.
    ToggleAnimation,

    /// Multiply the simulation speed by the speed factor.
    SpeedUp,

    /// Divide the simulation speed by the speed factor.
    SpeedDown,

    Climb,
    Descend,

    /// Start holding forward thrust.
    ThrustForwardOn,

    /// Stop holding forward thrust.
    ThrustForwardOff,

    /// Release the box.
    DropBox,

    /// Select a camera preset.
    SetViewMode(ViewMode),
}

impl Action for Intent {}

impl Intent {
    /// `true` for intents that still apply while the simulation is paused.
    pub fn applies_while_paused(self) -> bool {
        matches!(
            self,
            Self::ToggleFillMode
                | Self::SetFillMode(_)
                | Self::ToggleAnimation
                | Self::ThrustForwardOn
                | Self::ThrustForwardOff
                | Self::SetViewMode(_)
        )
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paused_intents() {
        assert!(Intent::ToggleAnimation.applies_while_paused());
        assert!(Intent::SetFillMode(FillMode::Wireframe).applies_while_paused());
        assert!(Intent::ThrustForwardOff.applies_while_paused());
        assert!(Intent::SetViewMode(ViewMode::Top).applies_while_paused());

        assert!(!Intent::Climb.applies_while_paused());
        assert!(!Intent::DropBox.applies_while_paused());
        assert!(!Intent::SpeedUp.applies_while_paused());
    }
}
