//! Fixed-cadence stepping of a candle
//!
//! The flicker tuning assumes one step every ~5 ms. The scheduler keeps that
//! cadence without async or platform timers: the caller passes the current
//! time, and the scheduler returns how long to wait before the next tick.

use embassy_time::{Duration, Instant};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::flicker::CandleFlicker;
use crate::intent::{FadeTimings, IntentProcessor, IntentReceiver};
use crate::output::{BrightnessEnvelope, DutyCurve, EnvelopeConfig};
use crate::tuning::FlickerTuning;
use crate::PwmOutput;

/// Reference step cadence
pub const DEFAULT_STEP_INTERVAL: Duration = Duration::from_millis(5);

/// Configuration of a scheduled candle
#[derive(Debug, Clone, Copy)]
pub struct SchedulerConfig {
    /// Time between model steps
    pub step_interval: Duration,
    pub tuning: FlickerTuning,
    pub curve: DutyCurve,
    pub envelope: EnvelopeConfig,
    /// Initial master brightness
    pub brightness: u8,
    pub fades: FadeTimings,
}

impl SchedulerConfig {
    pub const DEFAULT: Self = Self {
        step_interval: DEFAULT_STEP_INTERVAL,
        tuning: FlickerTuning::DEFAULT,
        curve: DutyCurve::Quadratic,
        envelope: EnvelopeConfig::DEFAULT,
        brightness: 255,
        fades: FadeTimings::DEFAULT,
    };
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Result of a tick
#[derive(Debug, Clone, Copy)]
pub struct TickResult {
    /// Raw flicker sample produced by this tick
    pub sample: u8,
    /// Sample after the master brightness
    pub brightness: u8,
    /// Duty written to the driver
    pub duty: u16,
    /// Deadline for the next tick
    pub next_deadline: Instant,
    /// How long to wait until the next tick (zero if behind schedule)
    pub sleep_duration: Duration,
}

/// Steps a candle at a fixed cadence and writes it to a PWM driver
///
/// # Usage
///
/// ```ignore
/// static INTENTS: IntentChannel<4> = IntentChannel::new();
///
/// let mut scheduler = FlickerScheduler::new(INTENTS.receiver(), pwm, &SchedulerConfig::DEFAULT);
/// loop {
///     let result = scheduler.tick(Instant::now());
///     Timer::after(result.sleep_duration).await;
/// }
/// ```
pub struct FlickerScheduler<'a, O: PwmOutput, const INTENT_CHANNEL_SIZE: usize> {
    output: O,
    intents: IntentProcessor<'a, INTENT_CHANNEL_SIZE>,
    candle: CandleFlicker,
    envelope: BrightnessEnvelope,
    curve: DutyCurve,
    next_step: Instant,
    step_interval: Duration,
}

impl<'a, O: PwmOutput, const INTENT_CHANNEL_SIZE: usize> FlickerScheduler<'a, O, INTENT_CHANNEL_SIZE> {
    pub fn new(
        intents: IntentReceiver<'a, INTENT_CHANNEL_SIZE>,
        output: O,
        config: &SchedulerConfig,
    ) -> Self {
        Self {
            output,
            intents: IntentProcessor::new(intents, config.fades),
            candle: CandleFlicker::with_tuning(config.tuning),
            envelope: BrightnessEnvelope::new(config.brightness, &config.envelope),
            curve: config.curve,
            next_step: Instant::from_millis(0),
            step_interval: config.step_interval,
        }
    }

    /// Run one step and return timing information
    ///
    /// The model advances exactly once per call. If the caller has fallen
    /// more than two intervals behind, the schedule restarts from `now`
    /// instead of bursting through the backlog.
    pub fn tick(&mut self, now: Instant) -> TickResult {
        let max_drift = self.step_interval.as_millis() * 2;
        if now.as_millis() > self.next_step.as_millis() + max_drift {
            #[cfg(feature = "esp32-log")]
            println!(
                "[FlickerScheduler.tick] {:?} ms behind, resetting schedule",
                now.as_millis() - self.next_step.as_millis()
            );
            self.next_step = now;
        }

        self.intents
            .process_pending(&mut self.candle, &mut self.envelope, now);
        self.envelope.tick(now);

        let sample = self.candle.step();
        let brightness = self.envelope.apply(sample);
        let duty = self.curve.duty(brightness, self.output.max_duty());
        self.output.set_duty(duty);

        self.next_step += self.step_interval;

        let sleep_duration = if self.next_step.as_millis() > now.as_millis() {
            Duration::from_millis(self.next_step.as_millis() - now.as_millis())
        } else {
            Duration::from_millis(0)
        };

        TickResult {
            sample,
            brightness,
            duty,
            next_deadline: self.next_step,
            sleep_duration,
        }
    }

    pub fn candle(&self) -> &CandleFlicker {
        &self.candle
    }

    pub fn envelope(&self) -> &BrightnessEnvelope {
        &self.envelope
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    pub fn output_mut(&mut self) -> &mut O {
        &mut self.output
    }

    pub fn set_curve(&mut self, curve: DutyCurve) {
        self.curve = curve;
    }
}
