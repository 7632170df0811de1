use crate::rng::XabcRng;
use crate::tuning::{FlickerTuning, GUST_THRESHOLD};

/// Wind strength that gusts at random and relaxes towards a baseline
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Wind {
    strength: u8,
}

impl Wind {
    pub(crate) const fn new() -> Self {
        Self { strength: 0 }
    }

    pub(crate) const fn strength(self) -> u8 {
        self.strength
    }

    /// Advance the wind by one step
    ///
    /// Returns `true` when a gust replaced the wind strength.
    pub(crate) fn update(&mut self, rng: &mut XabcRng, tuning: &FlickerTuning) -> bool {
        let gust = self.gust(rng, tuning.wind_variability);
        self.relax(tuning.wind_baseline);
        gust
    }

    /// Two-draw gate: a single byte is too coarse to make gusts rare enough
    fn gust(&mut self, rng: &mut XabcRng, variability: u8) -> bool {
        if rng.next_u8() >= variability {
            return false;
        }
        if rng.next_u8() <= GUST_THRESHOLD {
            return false;
        }
        self.strength = rng.next_u8();
        true
    }

    /// Linear decay, never pushes the wind up to the baseline
    fn relax(&mut self, baseline: u8) {
        if self.strength > baseline {
            self.strength -= 1;
        }
    }
}
