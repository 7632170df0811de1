//! Generation 2 candle flicker model
//!
//! One step advances, in order:
//! 1. wind (gust gate draws, then relaxation towards the baseline)
//! 2. flame (growth, then the collapse draw and an optional reset draw)
//! 3. the inertia filter, whose output is the brightness sample
//!
//! All of it runs on `u8` arithmetic from a fixed zero seed, so the output
//! sequence is reproducible byte for byte. The draw order above is part of
//! that contract.

mod flame;
mod inertia;
mod wind;

use flame::Flame;
use inertia::InertiaFilter;
use wind::Wind;

use crate::rng::XabcRng;
use crate::tuning::FlickerTuning;

/// Snapshot of every register of the simulator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlickerState {
    pub x: u8,
    pub a: u8,
    pub b: u8,
    pub c: u8,
    pub wind: u8,
    pub flame: u8,
    pub flameprime: u8,
}

/// Candle flicker simulator
///
/// Call [`CandleFlicker::step`] at a fixed cadence (the reference tuning
/// expects ~5 ms) and forward the result to a PWM duty register.
///
/// The simulator is also an endless [`Iterator`] of brightness samples.
#[derive(Debug, Clone)]
pub struct CandleFlicker {
    rng: XabcRng,
    wind: Wind,
    flame: Flame,
    filter: InertiaFilter,
    tuning: FlickerTuning,
}

impl CandleFlicker {
    /// Create a simulator in the zero state with the reference tuning
    pub const fn new() -> Self {
        Self::with_tuning(FlickerTuning::DEFAULT)
    }

    /// Create a simulator in the zero state with custom tuning
    pub const fn with_tuning(tuning: FlickerTuning) -> Self {
        Self {
            rng: XabcRng::new(),
            wind: Wind::new(),
            flame: Flame::new(),
            filter: InertiaFilter::new(),
            tuning,
        }
    }

    /// Return every register to zero. Tuning is kept.
    pub fn reset(&mut self) {
        *self = Self::with_tuning(self.tuning);
    }

    /// Advance the model by one step and return the next brightness sample
    pub fn step(&mut self) -> u8 {
        self.wind.update(&mut self.rng, &self.tuning);
        self.flame.update(
            &mut self.rng,
            self.wind.strength(),
            self.tuning.wind_calmness,
        );
        self.filter
            .update(self.flame.height(), self.tuning.flame_agility)
    }

    /// Last brightness sample
    pub const fn brightness(&self) -> u8 {
        self.filter.output()
    }

    pub const fn tuning(&self) -> FlickerTuning {
        self.tuning
    }

    /// Replace the tuning, keeping the current registers
    pub fn set_tuning(&mut self, tuning: FlickerTuning) {
        self.tuning = tuning;
    }

    pub const fn state(&self) -> FlickerState {
        FlickerState {
            x: self.rng.x(),
            a: self.rng.a(),
            b: self.rng.b(),
            c: self.rng.c(),
            wind: self.wind.strength(),
            flame: self.flame.height(),
            flameprime: self.filter.output(),
        }
    }
}

impl Default for CandleFlicker {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for CandleFlicker {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        Some(self.step())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}
