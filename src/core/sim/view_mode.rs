//=========================================================================
// View Mode
//=========================================================================
//
// Discrete camera presets. Front and Side render the ground lower than
// Iso and Top, so the flight model shifts altitude when crossing between
// the two groups.
//
//=========================================================================

//=== ViewMode ============================================================

/// Camera preset selected with the number keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ViewMode {
    /// Three-quarter view from above (key 1).
    #[default]
    Iso,

    /// Straight-on front view (key 2). Also used by the slider camera.
    Front,

    /// Top-down view (key 3).
    Top,

    /// Side view from the right (key 4).
    Side,
}

impl ViewMode {
    /// All view modes in key order.
    pub const ALL: [ViewMode; 4] = [Self::Iso, Self::Front, Self::Top, Self::Side];

    /// `true` for modes whose ground plane sits below the origin.
    #[inline]
    pub fn is_ground_shifted(self) -> bool {
        matches!(self, Self::Front | Self::Side)
    }

    /// Distance from the origin down to the ground for this mode.
    #[inline]
    pub fn ground_offset(self, shift: f32) -> f32 {
        if self.is_ground_shifted() {
            shift
        } else {
            0.0
        }
    }

    /// Key number (1..=4) bound to this mode.
    pub fn number(self) -> u8 {
        match self {
            Self::Iso => 1,
            Self::Front => 2,
            Self::Top => 3,
            Self::Side => 4,
        }
    }

    /// Mode bound to key `n`, if any.
    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(Self::Iso),
            2 => Some(Self::Front),
            3 => Some(Self::Top),
            4 => Some(Self::Side),
            _ => None,
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn front_and_side_are_shifted() {
        assert!(!ViewMode::Iso.is_ground_shifted());
        assert!(ViewMode::Front.is_ground_shifted());
        assert!(!ViewMode::Top.is_ground_shifted());
        assert!(ViewMode::Side.is_ground_shifted());
    }

    #[test]
    fn ground_offset_only_for_shifted_modes() {
        assert_eq!(ViewMode::Iso.ground_offset(13.0), 0.0);
        assert_eq!(ViewMode::Side.ground_offset(13.0), 13.0);
    }

    #[test]
    fn numbers_round_trip() {
        for mode in ViewMode::ALL {
            assert_eq!(ViewMode::from_number(mode.number()), Some(mode));
        }
        assert_eq!(ViewMode::from_number(0), None);
        assert_eq!(ViewMode::from_number(5), None);
    }
}
