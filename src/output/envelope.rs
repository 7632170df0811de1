//! Master brightness envelope
//!
//! Sits between the flicker model and the PWM driver. Handles:
//! - the user brightness setting, with min/scale correction
//! - fade-out when powering off and fade-in when powering on
//! - an optional adjuster applied to the master level

use embassy_time::{Duration, Instant};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::{
    math8::{U8Adjuster, scale8},
    transition::Fade,
};

/// Configuration for the brightness envelope
#[derive(Debug, Clone, Copy)]
pub struct EnvelopeConfig {
    /// Lowest master level a non-zero brightness maps to
    pub min_brightness: u8,
    /// Scale factor (0-255 = 0.0-1.0)
    pub scale: u8,
    /// Adjustment applied to the master level before scaling samples
    pub adjust: Option<U8Adjuster>,
}

impl EnvelopeConfig {
    /// Full range, no adjustment
    pub const DEFAULT: Self = Self {
        min_brightness: 0,
        scale: 255,
        adjust: None,
    };
}

impl Default for EnvelopeConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Master brightness with fades and power state
#[derive(Debug, Clone)]
pub struct BrightnessEnvelope {
    min_brightness: u8,
    scale: u8,
    adjust: Option<U8Adjuster>,
    /// Requested brightness, kept while powered off
    brightness: u8,
    powered: bool,
    level: Fade,
}

impl BrightnessEnvelope {
    /// Create a powered envelope resting at `brightness`
    pub const fn new(brightness: u8, config: &EnvelopeConfig) -> Self {
        Self {
            min_brightness: config.min_brightness,
            scale: config.scale,
            adjust: config.adjust,
            brightness,
            powered: true,
            level: Fade::new(Self::correct(brightness, config.min_brightness, config.scale)),
        }
    }

    const fn correct(brightness: u8, min_brightness: u8, scale: u8) -> u8 {
        if brightness == 0 {
            return 0;
        }
        let brightness = brightness.saturating_sub(min_brightness);
        scale8(brightness, scale).saturating_add(min_brightness)
    }

    /// Set the brightness, fading if powered
    ///
    /// While powered off the value is stored and used by the next power on.
    pub fn set(&mut self, brightness: u8, duration: Duration, now: Instant) {
        self.brightness = brightness;
        if !self.powered {
            return;
        }
        let corrected = Self::correct(brightness, self.min_brightness, self.scale);
        #[cfg(feature = "esp32-log")]
        println!(
            "[BrightnessEnvelope.set] setting brightness to {:?} ({:?})",
            brightness, corrected
        );
        self.level.set(corrected, duration, now);
    }

    /// Fade out to zero, keeping the brightness setting
    pub fn power_off(&mut self, duration: Duration, now: Instant) {
        self.powered = false;
        self.level.set(0, duration, now);
    }

    /// Fade back in to the stored brightness
    pub fn power_on(&mut self, duration: Duration, now: Instant) {
        self.powered = true;
        let corrected = Self::correct(self.brightness, self.min_brightness, self.scale);
        self.level.set(corrected, duration, now);
    }

    pub const fn is_powered(&self) -> bool {
        self.powered
    }

    /// Brightness setting, independent of power state and fades
    pub const fn brightness(&self) -> u8 {
        self.brightness
    }

    /// Master level right now
    pub const fn level(&self) -> u8 {
        self.level.current()
    }

    pub const fn is_fading(&self) -> bool {
        self.level.is_fading()
    }

    pub fn tick(&mut self, now: Instant) {
        self.level.tick(now);
    }

    /// Scale a flicker sample by the master level
    pub fn apply(&self, sample: u8) -> u8 {
        let mut level = self.level.current();
        if level == 0 {
            return 0;
        }
        if let Some(adjust) = self.adjust {
            level = adjust(level);
        }
        scale8(sample, level)
    }
}
