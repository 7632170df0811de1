#![no_std]

pub mod flicker;
pub mod intent;
pub mod math8;
pub mod output;
pub mod rng;
pub mod scheduler;
pub mod shared;
pub mod transition;
pub mod tuning;

pub use flicker::{CandleFlicker, FlickerState};
pub use intent::{
    FadeTimings, FlickerIntent, IntentChannel, IntentProcessor, IntentReceiver, IntentSender,
};
pub use output::{BrightnessEnvelope, DutyCurve, EnvelopeConfig};
pub use rng::XabcRng;
pub use scheduler::{FlickerScheduler, SchedulerConfig, TickResult};
pub use shared::SharedFlicker;
pub use tuning::{FlickerTuning, TuningError};

pub use math8::U8Adjuster;
pub use embassy_time::{Duration, Instant};

/// Abstract PWM channel
///
/// Implement this trait for the timer channel driving the light.
/// The scheduler is generic over this trait.
pub trait PwmOutput {
    /// Largest duty value the timer accepts (fully on)
    fn max_duty(&self) -> u16;

    /// Write a new duty value
    fn set_duty(&mut self, duty: u16);
}
