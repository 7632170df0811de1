//! Control intents
//!
//! Button handlers, encoder interrupts or a network task push
//! [`FlickerIntent`]s into a bounded [`IntentChannel`]; the scheduler drains
//! it once per tick. The queue is guarded by `critical-section`, so senders may
//! live in interrupt handlers.

use core::cell::RefCell;

use critical_section::Mutex;
use embassy_time::{Duration, Instant};
use heapless::Deque;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::flicker::CandleFlicker;
use crate::output::BrightnessEnvelope;
use crate::tuning::FlickerTuning;

/// Requested change to a running candle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlickerIntent {
    /// Change master brightness
    Brightness(u8),
    /// Fade in (`true`) or out (`false`), keeping the brightness setting
    Power(bool),
    /// Replace the model tuning without resetting it
    Tuning(FlickerTuning),
    /// Restart the model from the zero seed
    Reset,
}

/// Error returned when the channel is full. Carries the rejected intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrySendError(pub FlickerIntent);

/// Error returned when the channel is empty
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TryReceiveError;

/// Bounded intent queue, safe to share with interrupt handlers
pub struct IntentChannel<const SIZE: usize> {
    queue: Mutex<RefCell<Deque<FlickerIntent, SIZE>>>,
}

impl<const SIZE: usize> IntentChannel<SIZE> {
    pub const fn new() -> Self {
        Self {
            queue: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    pub const fn sender(&self) -> IntentSender<'_, SIZE> {
        IntentSender { channel: self }
    }

    /// Receiving handle. Intended for a single consumer (the scheduler).
    pub const fn receiver(&self) -> IntentReceiver<'_, SIZE> {
        IntentReceiver { channel: self }
    }

    pub fn try_send(&self, intent: FlickerIntent) -> Result<(), TrySendError> {
        critical_section::with(|cs| {
            let mut queue = self.queue.borrow(cs).borrow_mut();
            queue.push_back(intent).map_err(TrySendError)
        })
    }

    pub fn try_receive(&self) -> Result<FlickerIntent, TryReceiveError> {
        critical_section::with(|cs| {
            let mut queue = self.queue.borrow(cs).borrow_mut();
            queue.pop_front().ok_or(TryReceiveError)
        })
    }

    /// Number of queued intents
    pub fn len(&self) -> usize {
        critical_section::with(|cs| self.queue.borrow(cs).borrow().len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<const SIZE: usize> Default for IntentChannel<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// Sending handle of an [`IntentChannel`]
#[derive(Clone, Copy)]
pub struct IntentSender<'a, const SIZE: usize> {
    channel: &'a IntentChannel<SIZE>,
}

impl<const SIZE: usize> IntentSender<'_, SIZE> {
    pub fn try_send(&self, intent: FlickerIntent) -> Result<(), TrySendError> {
        self.channel.try_send(intent)
    }
}

/// Receiving handle of an [`IntentChannel`]
#[derive(Clone, Copy)]
pub struct IntentReceiver<'a, const SIZE: usize> {
    channel: &'a IntentChannel<SIZE>,
}

impl<const SIZE: usize> IntentReceiver<'_, SIZE> {
    pub fn try_receive(&self) -> Result<FlickerIntent, TryReceiveError> {
        self.channel.try_receive()
    }
}

/// Fade durations used when applying intents
#[derive(Debug, Clone, Copy)]
pub struct FadeTimings {
    /// Brightness change
    pub brightness: Duration,
    /// Power on and power off
    pub power: Duration,
}

impl FadeTimings {
    pub const DEFAULT: Self = Self {
        brightness: Duration::from_millis(300),
        power: Duration::from_millis(800),
    };
}

impl Default for FadeTimings {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Drains intents and applies them to a candle and its envelope
pub struct IntentProcessor<'a, const SIZE: usize> {
    intents: IntentReceiver<'a, SIZE>,
    timings: FadeTimings,
}

impl<'a, const SIZE: usize> IntentProcessor<'a, SIZE> {
    pub const fn new(intents: IntentReceiver<'a, SIZE>, timings: FadeTimings) -> Self {
        Self { intents, timings }
    }

    /// Apply every pending intent (non-blocking)
    ///
    /// Returns the number of intents applied.
    pub fn process_pending(
        &mut self,
        candle: &mut CandleFlicker,
        envelope: &mut BrightnessEnvelope,
        now: Instant,
    ) -> usize {
        let mut applied = 0;
        while let Ok(intent) = self.intents.try_receive() {
            self.apply(intent, candle, envelope, now);
            applied += 1;
        }
        applied
    }

    fn apply(
        &self,
        intent: FlickerIntent,
        candle: &mut CandleFlicker,
        envelope: &mut BrightnessEnvelope,
        now: Instant,
    ) {
        #[cfg(feature = "esp32-log")]
        println!("[IntentProcessor.apply] {:?}", intent);
        match intent {
            FlickerIntent::Brightness(brightness) => {
                envelope.set(brightness, self.timings.brightness, now);
            }
            FlickerIntent::Power(true) => envelope.power_on(self.timings.power, now),
            FlickerIntent::Power(false) => envelope.power_off(self.timings.power, now),
            FlickerIntent::Tuning(tuning) => candle.set_tuning(tuning),
            FlickerIntent::Reset => candle.reset(),
        }
    }
}
