//! Candle shared with interrupt handlers
//!
//! The model itself does no locking. When one candle is stepped from a timer
//! interrupt and inspected or reset from elsewhere, put it in a
//! [`SharedFlicker`] so every access runs inside a critical section.
//!
//! ```ignore
//! static CANDLE: SharedFlicker = SharedFlicker::new();
//!
//! #[interrupt]
//! fn TIM1() {
//!     let duty = CANDLE.step();
//!     set_compare(duty);
//! }
//! ```

use core::cell::RefCell;

use critical_section::Mutex;

use crate::flicker::{CandleFlicker, FlickerState};
use crate::tuning::FlickerTuning;

/// A [`CandleFlicker`] behind a critical-section mutex
pub struct SharedFlicker {
    inner: Mutex<RefCell<CandleFlicker>>,
}

impl SharedFlicker {
    /// Zero state, reference tuning
    pub const fn new() -> Self {
        Self::with_tuning(FlickerTuning::DEFAULT)
    }

    pub const fn with_tuning(tuning: FlickerTuning) -> Self {
        Self {
            inner: Mutex::new(RefCell::new(CandleFlicker::with_tuning(tuning))),
        }
    }

    /// Run `f` with exclusive access to the candle
    pub fn with<R>(&self, f: impl FnOnce(&mut CandleFlicker) -> R) -> R {
        critical_section::with(|cs| {
            let mut candle = self.inner.borrow(cs).borrow_mut();
            f(&mut *candle)
        })
    }

    pub fn step(&self) -> u8 {
        self.with(CandleFlicker::step)
    }

    pub fn reset(&self) {
        self.with(CandleFlicker::reset);
    }

    pub fn set_tuning(&self, tuning: FlickerTuning) {
        self.with(|candle| candle.set_tuning(tuning));
    }

    /// Last brightness sample
    pub fn brightness(&self) -> u8 {
        self.with(|candle| candle.brightness())
    }

    pub fn state(&self) -> FlickerState {
        self.with(|candle| candle.state())
    }
}

impl Default for SharedFlicker {
    fn default() -> Self {
        Self::new()
    }
}
