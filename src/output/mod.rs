//! Output stage: master brightness and PWM duty mapping

mod envelope;

pub use envelope::{BrightnessEnvelope, EnvelopeConfig};

use crate::math8::{linear_duty, quadratic_duty};

/// Mapping from an 8-bit brightness to a timer duty
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DutyCurve {
    /// Duty proportional to brightness
    Linear,
    /// Perceptual square curve
    #[default]
    Quadratic,
}

impl DutyCurve {
    /// Duty for `value` on a timer that counts to `max_duty`
    pub const fn duty(self, value: u8, max_duty: u16) -> u16 {
        match self {
            Self::Linear => linear_duty(value, max_duty),
            Self::Quadratic => quadratic_duty(value, max_duty),
        }
    }
}
