mod tests {
    use embassy_time::{Duration, Instant};
    use myrtio_candle_flicker::{BrightnessEnvelope, DutyCurve, EnvelopeConfig};

    const NOW: Instant = Instant::from_millis(0);
    const INSTANT: Duration = Duration::from_millis(0);

    #[test]
    fn test_full_brightness_passes_samples() {
        let envelope = BrightnessEnvelope::new(255, &EnvelopeConfig::DEFAULT);
        assert_eq!(envelope.level(), 255);
        for sample in [0, 2, 100, 254, 255] {
            assert_eq!(envelope.apply(sample), sample);
        }
    }

    #[test]
    fn test_set_scales_samples() {
        let mut envelope = BrightnessEnvelope::new(255, &EnvelopeConfig::DEFAULT);
        envelope.set(128, INSTANT, NOW);
        assert_eq!(envelope.level(), 128);
        assert_eq!(envelope.apply(200), 100);
    }

    #[test]
    fn test_power_cycle_restores_brightness() {
        let mut envelope = BrightnessEnvelope::new(128, &EnvelopeConfig::DEFAULT);
        envelope.power_off(INSTANT, NOW);
        assert!(!envelope.is_powered());
        assert_eq!(envelope.apply(200), 0);
        assert_eq!(envelope.brightness(), 128);

        envelope.set(64, INSTANT, NOW);
        assert_eq!(envelope.level(), 0);

        envelope.power_on(INSTANT, NOW);
        assert!(envelope.is_powered());
        assert_eq!(envelope.level(), 64);
    }

    #[test]
    fn test_power_off_fades() {
        let mut envelope = BrightnessEnvelope::new(200, &EnvelopeConfig::DEFAULT);
        envelope.power_off(Duration::from_millis(100), NOW);
        assert!(envelope.is_fading());

        envelope.tick(Instant::from_millis(50));
        assert_eq!(envelope.level(), 100);

        envelope.tick(Instant::from_millis(100));
        assert_eq!(envelope.level(), 0);
        assert!(!envelope.is_fading());
    }

    #[test]
    fn test_min_and_scale() {
        let config = EnvelopeConfig {
            min_brightness: 20,
            scale: 128,
            adjust: None,
        };
        let mut envelope = BrightnessEnvelope::new(255, &config);
        assert_eq!(envelope.level(), 138);

        envelope.set(10, INSTANT, NOW);
        assert_eq!(envelope.level(), 20);

        envelope.set(0, INSTANT, NOW);
        assert_eq!(envelope.level(), 0);
    }

    #[test]
    fn test_adjuster() {
        fn halve(value: u8) -> u8 {
            value / 2
        }
        let config = EnvelopeConfig {
            adjust: Some(halve),
            ..EnvelopeConfig::DEFAULT
        };
        let envelope = BrightnessEnvelope::new(255, &config);
        assert_eq!(envelope.apply(200), 100);
    }

    #[test]
    fn test_duty_curves() {
        assert_eq!(DutyCurve::default(), DutyCurve::Quadratic);
        assert_eq!(DutyCurve::Linear.duty(200, 255), 200);
        assert_eq!(DutyCurve::Quadratic.duty(200, 16_383), 10_000);
        assert_eq!(DutyCurve::Quadratic.duty(0, 16_383), 0);
    }
}
