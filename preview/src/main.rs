//! Desktop preview app for myrtio-candle-flicker
//!
//! Animates a simulated candle in a window and plots its recent output.
//! All changes go through the intent channel, like they would on a device.

use std::collections::VecDeque;
use std::time::Instant as StdInstant;

use eframe::egui::{self};
use myrtio_candle_flicker::{
    Duration, DutyCurve, EnvelopeConfig, FadeTimings, FlickerIntent, FlickerScheduler,
    FlickerTuning, Instant, IntentChannel, IntentSender, PwmOutput, SchedulerConfig,
    scheduler::DEFAULT_STEP_INTERVAL,
};

/// Intent channel size
const INTENT_CHANNEL_SIZE: usize = 8;

/// Simulated timer resolution (14-bit, like the dimmer board)
const MAX_DUTY: u16 = 16_383;

/// Number of samples kept for the plot
const HISTORY_LEN: usize = 600;

/// Upper bound of model steps per UI frame before skipping ahead
const MAX_STEPS_PER_FRAME: usize = 4_000;

/// Flame colour at full duty
const FLAME_COLOR: [f32; 3] = [255.0, 147.0, 41.0];

/// Static intent channel for communication between UI and scheduler
static INTENTS_CHANNEL: IntentChannel<INTENT_CHANNEL_SIZE> =
    IntentChannel::<INTENT_CHANNEL_SIZE>::new();

/// Faster fades than on a device, for responsiveness
const PREVIEW_FADE_TIMINGS: FadeTimings = FadeTimings {
    brightness: Duration::from_millis(150),
    power: Duration::from_millis(400),
};

/// PWM channel that only remembers the last duty
struct PreviewPwm {
    duty: u16,
}

impl PwmOutput for PreviewPwm {
    fn max_duty(&self) -> u16 {
        MAX_DUTY
    }

    fn set_duty(&mut self, duty: u16) {
        self.duty = duty;
    }
}

type PreviewScheduler = FlickerScheduler<'static, PreviewPwm, INTENT_CHANNEL_SIZE>;

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([820.0, 560.0])
            .with_title("Candle Flicker Preview"),
        ..Default::default()
    };

    eframe::run_native(
        "myrtio-candle-preview",
        options,
        Box::new(|_cc| Ok(Box::new(PreviewApp::new()))),
    )
}

struct PreviewApp {
    scheduler: PreviewScheduler,
    intent_sender: IntentSender<'static, INTENT_CHANNEL_SIZE>,

    /// Synthetic time in milliseconds
    t_ms: u64,
    /// Deadline of the next model step
    next_step_ms: u64,
    /// Wall-clock reference for delta time
    last_frame: StdInstant,
    playing: bool,
    /// Time scale multiplier (1.0 = realtime)
    time_scale: f32,

    // UI state (tracked to detect changes and send intents)
    brightness: u8,
    powered: bool,
    curve: DutyCurve,
    wind_variability: u8,
    wind_baseline: u8,
    wind_calmness: u8,
    flame_agility: u8,
    tuning_error: Option<String>,

    /// Recent post-envelope samples, oldest first
    history: VecDeque<u8>,
}

impl PreviewApp {
    fn new() -> Self {
        let tuning = FlickerTuning::DEFAULT;
        Self {
            scheduler: Self::build_scheduler(DutyCurve::Quadratic),
            intent_sender: INTENTS_CHANNEL.sender(),
            t_ms: 0,
            next_step_ms: 0,
            last_frame: StdInstant::now(),
            playing: true,
            time_scale: 1.0,
            brightness: 255,
            powered: true,
            curve: DutyCurve::Quadratic,
            wind_variability: tuning.wind_variability(),
            wind_baseline: tuning.wind_baseline(),
            wind_calmness: tuning.wind_calmness(),
            flame_agility: tuning.flame_agility(),
            tuning_error: None,
            history: VecDeque::with_capacity(HISTORY_LEN),
        }
    }

    fn build_scheduler(curve: DutyCurve) -> PreviewScheduler {
        let config = SchedulerConfig {
            step_interval: DEFAULT_STEP_INTERVAL,
            tuning: FlickerTuning::DEFAULT,
            curve,
            envelope: EnvelopeConfig::DEFAULT,
            brightness: 255,
            fades: PREVIEW_FADE_TIMINGS,
        };
        FlickerScheduler::new(INTENTS_CHANNEL.receiver(), PreviewPwm { duty: 0 }, &config)
    }

    fn send(&self, intent: FlickerIntent) {
        let _ = self.intent_sender.try_send(intent);
    }

    fn send_tuning(&mut self) {
        match FlickerTuning::new(
            self.wind_variability,
            self.wind_baseline,
            self.wind_calmness,
            self.flame_agility,
        ) {
            Ok(tuning) => {
                self.tuning_error = None;
                self.send(FlickerIntent::Tuning(tuning));
            }
            Err(err) => self.tuning_error = Some(format!("{err:?}")),
        }
    }

    /// Restart the model and the clock from zero
    ///
    /// The scheduler is rebuilt because its schedule can't move backwards.
    fn reset(&mut self) {
        self.t_ms = 0;
        self.next_step_ms = 0;
        self.last_frame = StdInstant::now();
        self.history.clear();
        self.scheduler = Self::build_scheduler(self.curve);
        self.brightness = 255;
        self.powered = true;
        self.send_tuning();
    }

    /// Update synthetic time based on wall clock and time scale
    fn update_time(&mut self) {
        let now = StdInstant::now();
        let delta = now.duration_since(self.last_frame);
        self.last_frame = now;

        if self.playing {
            let delta_ms_f64 = delta.as_secs_f64() * 1000.0 * f64::from(self.time_scale);
            let delta_ms_f64 = if delta_ms_f64.is_finite() {
                #[allow(clippy::cast_precision_loss)]
                delta_ms_f64.clamp(0.0, u64::MAX as f64)
            } else {
                0.0
            };
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let delta_ms = delta_ms_f64 as u64;
            self.t_ms = self.t_ms.wrapping_add(delta_ms);
        }
    }

    /// Run every model step that is due at the current synthetic time
    fn run_due_steps(&mut self) {
        let mut steps = 0;
        while self.next_step_ms <= self.t_ms {
            let result = self.scheduler.tick(Instant::from_millis(self.next_step_ms));
            if self.history.len() == HISTORY_LEN {
                self.history.pop_front();
            }
            self.history.push_back(result.brightness);
            self.next_step_ms = result.next_deadline.as_millis();

            steps += 1;
            if steps == MAX_STEPS_PER_FRAME {
                // Too far behind, let the scheduler's drift correction catch up
                self.next_step_ms = self.t_ms;
                break;
            }
        }
    }

    fn flame_color(&self) -> egui::Color32 {
        let duty = self.scheduler.output().duty;
        let intensity = f32::from(duty) / f32::from(MAX_DUTY);
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let channel = |base: f32| (base * intensity).round().clamp(0.0, 255.0) as u8;
        egui::Color32::from_rgb(
            channel(FLAME_COLOR[0]),
            channel(FLAME_COLOR[1]),
            channel(FLAME_COLOR[2]),
        )
    }
}

impl eframe::App for PreviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.update_time();
        self.run_due_steps();

        // Request continuous repaint for animation
        ctx.request_repaint();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                // <PlaybackControls>
                ui.vertical(|ui| {
                    ui.horizontal(|ui| {
                        if ui.button("⏮ Reset").clicked() {
                            self.reset();
                        }
                        if ui
                            .button(if self.playing { "⏸ Pause" } else { "▶ Play" })
                            .clicked()
                        {
                            self.playing = !self.playing;
                        }
                    });

                    ui.add_space(4.0);

                    let secs = self.t_ms / 1000;
                    let ms = self.t_ms % 1000;
                    ui.label(format!("Time: {secs}.{ms:03}s"));

                    ui.add_space(4.0);

                    ui.horizontal(|ui| {
                        ui.label("Speed:");
                        ui.add(egui::Slider::new(&mut self.time_scale, 0.1..=5.0).logarithmic(true));
                    });
                });
                // </PlaybackControls>
                ui.add_space(16.0);
                // <OutputControls>
                ui.vertical(|ui| {
                    ui.horizontal(|ui| {
                        ui.label("Brightness:");
                        let old_brightness = self.brightness;
                        ui.add(egui::DragValue::new(&mut self.brightness).range(0u8..=255u8));
                        if self.brightness != old_brightness {
                            self.send(FlickerIntent::Brightness(self.brightness));
                        }

                        ui.add_space(8.0);

                        let old_powered = self.powered;
                        ui.checkbox(&mut self.powered, "Power");
                        if self.powered != old_powered {
                            self.send(FlickerIntent::Power(self.powered));
                        }
                    });

                    ui.add_space(4.0);

                    ui.horizontal(|ui| {
                        ui.label("Curve:");
                        let old_curve = self.curve;
                        ui.selectable_value(&mut self.curve, DutyCurve::Quadratic, "quadratic");
                        ui.selectable_value(&mut self.curve, DutyCurve::Linear, "linear");
                        if self.curve != old_curve {
                            self.scheduler.set_curve(self.curve);
                        }
                    });
                });
                // </OutputControls>
            });

            ui.add_space(12.0);

            // <TuningControls>
            ui.horizontal(|ui| {
                let mut changed = false;
                ui.label("Variability:");
                changed |= ui.add(egui::Slider::new(&mut self.wind_variability, 0..=64)).changed();
                ui.label("Baseline:");
                changed |= ui.add(egui::Slider::new(&mut self.wind_baseline, 0..=255)).changed();
                if changed {
                    self.send_tuning();
                }
            });
            ui.horizontal(|ui| {
                let mut changed = false;
                ui.label("Calmness:");
                changed |= ui.add(egui::Slider::new(&mut self.wind_calmness, 0..=8)).changed();
                ui.label("Agility:");
                changed |= ui.add(egui::Slider::new(&mut self.flame_agility, 0..=16)).changed();
                if changed {
                    self.send_tuning();
                }
                if let Some(error) = &self.tuning_error {
                    ui.colored_label(egui::Color32::LIGHT_RED, error.as_str());
                }
            });
            // </TuningControls>

            ui.add_space(16.0);

            let state = self.scheduler.candle().state();
            ui.label(format!(
                "wind {:3}  flame {:3}  output {:3}  duty {:5}",
                state.wind,
                state.flame,
                state.flameprime,
                self.scheduler.output().duty
            ));

            ui.add_space(8.0);

            // === Candle ===
            let available_width = ui.available_width();
            let (response, painter) =
                ui.allocate_painter(egui::vec2(available_width, 140.0), egui::Sense::hover());
            let rect = response.rect;
            painter.rect_filled(rect, 4.0, egui::Color32::from_gray(12));
            painter.circle_filled(rect.center(), 56.0, self.flame_color());

            ui.add_space(8.0);

            // === Output history ===
            let (response, painter) =
                ui.allocate_painter(egui::vec2(available_width, 160.0), egui::Sense::hover());
            let rect = response.rect;
            painter.rect_filled(rect, 4.0, egui::Color32::from_gray(24));

            #[allow(clippy::cast_precision_loss)]
            let points: Vec<egui::Pos2> = self
                .history
                .iter()
                .enumerate()
                .map(|(i, &sample)| {
                    let x = rect.min.x + rect.width() * i as f32 / HISTORY_LEN as f32;
                    let y = rect.max.y - rect.height() * f32::from(sample) / 255.0;
                    egui::pos2(x, y)
                })
                .collect();
            if points.len() > 1 {
                painter.line(
                    points,
                    egui::Stroke::new(1.5, egui::Color32::from_rgb(255, 170, 60)),
                );
            }
        });
    }
}
