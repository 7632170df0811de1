mod tests {
    use embassy_time::{Duration, Instant};
    use myrtio_candle_flicker::{
        BrightnessEnvelope, CandleFlicker, EnvelopeConfig, FadeTimings, FlickerIntent,
        IntentChannel, IntentProcessor,
        intent::{TryReceiveError, TrySendError},
    };

    #[test]
    fn test_channel_order_and_capacity() {
        let channel = IntentChannel::<2>::new();
        assert!(channel.is_empty());

        let sender = channel.sender();
        sender.try_send(FlickerIntent::Brightness(10)).unwrap();
        sender.try_send(FlickerIntent::Reset).unwrap();
        assert_eq!(
            sender.try_send(FlickerIntent::Power(false)),
            Err(TrySendError(FlickerIntent::Power(false)))
        );
        assert_eq!(channel.len(), 2);

        let receiver = channel.receiver();
        assert_eq!(receiver.try_receive(), Ok(FlickerIntent::Brightness(10)));
        assert_eq!(receiver.try_receive(), Ok(FlickerIntent::Reset));
        assert_eq!(receiver.try_receive(), Err(TryReceiveError));
    }

    #[test]
    fn test_process_pending() {
        let channel = IntentChannel::<4>::new();
        let mut processor = IntentProcessor::new(channel.receiver(), FadeTimings::DEFAULT);
        let mut candle = CandleFlicker::new();
        let mut envelope = BrightnessEnvelope::new(255, &EnvelopeConfig::DEFAULT);
        let now = Instant::from_millis(0);

        for _ in 0..10 {
            candle.step();
        }

        channel.try_send(FlickerIntent::Brightness(100)).unwrap();
        channel.try_send(FlickerIntent::Reset).unwrap();
        channel.try_send(FlickerIntent::Power(false)).unwrap();

        let applied = processor.process_pending(&mut candle, &mut envelope, now);
        assert_eq!(applied, 3);
        assert!(channel.is_empty());
        assert_eq!(candle.brightness(), 0);
        assert_eq!(envelope.brightness(), 100);
        assert!(!envelope.is_powered());
        assert!(envelope.is_fading());

        envelope.tick(now + FadeTimings::DEFAULT.power);
        assert_eq!(envelope.level(), 0);

        assert_eq!(processor.process_pending(&mut candle, &mut envelope, now), 0);
    }

    #[test]
    fn test_brightness_fades() {
        let channel = IntentChannel::<4>::new();
        let timings = FadeTimings {
            brightness: Duration::from_millis(100),
            power: Duration::from_millis(0),
        };
        let mut processor = IntentProcessor::new(channel.receiver(), timings);
        let mut candle = CandleFlicker::new();
        let mut envelope = BrightnessEnvelope::new(0, &EnvelopeConfig::DEFAULT);

        channel.try_send(FlickerIntent::Brightness(200)).unwrap();
        processor.process_pending(&mut candle, &mut envelope, Instant::from_millis(0));

        envelope.tick(Instant::from_millis(50));
        assert_eq!(envelope.level(), 100);
        envelope.tick(Instant::from_millis(100));
        assert_eq!(envelope.level(), 200);
    }
}
