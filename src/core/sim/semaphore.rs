//=========================================================================
// Semaphore
//=========================================================================
//
// Two-colour traffic light advanced by wall-clock time.
//
// The light is an accumulator ticked from the frame loop rather than a
// separate timer, so every mutation stays on the simulation thread. It
// ignores the simulation speed and keeps cycling while paused.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Duration;

use log::trace;

//=== Internal Dependencies ===============================================

use crate::core::render::Color;

//=== Semaphore ===========================================================

/// Colour cycle: index 0 is red, index 1 is green.
#[derive(Debug, Clone)]
pub struct Semaphore {
    color_index: usize,
    elapsed: Duration,
    period: Duration,
}

impl Semaphore {
    const COLORS: [Color; 2] = [Color::RED, Color::GREEN];

    /// Creates a red light that flips every `period`.
    ///
    /// # Panics
    ///
    /// Panics if `period` is zero.
    pub fn new(period: Duration) -> Self {
        assert!(!period.is_zero(), "Semaphore period must be positive");
        Self {
            color_index: 0,
            elapsed: Duration::ZERO,
            period,
        }
    }

    /// Adds `wall_dt` and flips once per whole period elapsed.
    pub fn tick(&mut self, wall_dt: Duration) {
        self.elapsed += wall_dt;
        while self.elapsed >= self.period {
            self.elapsed -= self.period;
            self.color_index = (self.color_index + 1) % Self::COLORS.len();
            trace!(target: "sim::semaphore", "Light -> {}", self.color_index);
        }
    }

    pub fn color_index(&self) -> usize {
        self.color_index
    }

    /// Colour currently shown.
    pub fn color(&self) -> Color {
        Self::COLORS[self.color_index]
    }

    pub fn period(&self) -> Duration {
        self.period
    }
}

impl Default for Semaphore {
    fn default() -> Self {
        Self::new(Duration::from_secs(5))
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_red() {
        let light = Semaphore::default();
        assert_eq!(light.color_index(), 0);
        assert_eq!(light.color(), Color::RED);
    }

    #[test]
    fn flips_once_per_period() {
        let mut light = Semaphore::new(Duration::from_secs(5));

        light.tick(Duration::from_secs(5));
        assert_eq!(light.color_index(), 1);
        assert_eq!(light.color(), Color::GREEN);

        light.tick(Duration::from_secs(5));
        assert_eq!(light.color_index(), 0);
    }

    #[test]
    fn accumulates_small_steps() {
        let mut light = Semaphore::new(Duration::from_millis(100));
        for _ in 0..9 {
            light.tick(Duration::from_millis(10));
        }
        assert_eq!(light.color_index(), 0);

        light.tick(Duration::from_millis(10));
        assert_eq!(light.color_index(), 1);
    }

    #[test]
    fn long_gap_flips_per_whole_period() {
        let mut light = Semaphore::new(Duration::from_secs(1));
        light.tick(Duration::from_millis(3500));
        assert_eq!(light.color_index(), 1);

        light.tick(Duration::from_millis(500));
        assert_eq!(light.color_index(), 0);
    }

    #[test]
    #[should_panic(expected = "Semaphore period must be positive")]
    fn zero_period_panics() {
        Semaphore::new(Duration::ZERO);
    }
}
