//! Flicker tuning constants
//!
//! The reference tuning is tuned for one step every ~5 ms. Other values are
//! accepted at runtime but change the look of the flame.

/// Gust gate: a first draw below this value makes the step gust-eligible
pub const WIND_VARIABILITY: u8 = 5;

/// Wind strength the model relaxes towards
pub const WIND_BASELINE: u8 = 30;

/// Right shift turning wind strength into a flame collapse threshold
pub const WIND_CALMNESS: u8 = 2;

/// Fixed per-step movement of the inertia filter
pub const FLAME_AGILITY: u8 = 2;

/// Second gust gate: a gust fires when the second draw is above this value
pub const GUST_THRESHOLD: u8 = 220;

/// Error returned when tuning values can't drive the model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuningError {
    /// Calmness shift must be below 8 for an 8-bit wind value
    CalmnessOutOfRange(u8),
    /// Agility of zero freezes the filter output
    ZeroAgility,
}

/// Runtime tuning of the flicker model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlickerTuning {
    pub(crate) wind_variability: u8,
    pub(crate) wind_baseline: u8,
    pub(crate) wind_calmness: u8,
    pub(crate) flame_agility: u8,
}

impl FlickerTuning {
    /// Reference tuning
    pub const DEFAULT: Self = Self {
        wind_variability: WIND_VARIABILITY,
        wind_baseline: WIND_BASELINE,
        wind_calmness: WIND_CALMNESS,
        flame_agility: FLAME_AGILITY,
    };

    /// Create validated tuning
    pub const fn new(
        wind_variability: u8,
        wind_baseline: u8,
        wind_calmness: u8,
        flame_agility: u8,
    ) -> Result<Self, TuningError> {
        if wind_calmness >= 8 {
            return Err(TuningError::CalmnessOutOfRange(wind_calmness));
        }
        if flame_agility == 0 {
            return Err(TuningError::ZeroAgility);
        }
        Ok(Self {
            wind_variability,
            wind_baseline,
            wind_calmness,
            flame_agility,
        })
    }

    pub const fn wind_variability(&self) -> u8 {
        self.wind_variability
    }

    pub const fn wind_baseline(&self) -> u8 {
        self.wind_baseline
    }

    pub const fn wind_calmness(&self) -> u8 {
        self.wind_calmness
    }

    /// Largest change of the output between two steps
    pub const fn flame_agility(&self) -> u8 {
        self.flame_agility
    }
}

impl Default for FlickerTuning {
    fn default() -> Self {
        Self::DEFAULT
    }
}
