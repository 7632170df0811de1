mod tests {
    use embassy_time::{Duration, Instant};
    use myrtio_candle_flicker::transition::Fade;

    #[test]
    fn test_fade() {
        let mut fade = Fade::new(0);
        assert_eq!(fade.current(), 0);
        assert!(!fade.is_fading());

        fade.set(100, Duration::from_millis(100), Instant::from_millis(0));
        assert!(fade.is_fading());
        assert_eq!(fade.target(), 100);
        assert_eq!(fade.current(), 0);

        fade.tick(Instant::from_millis(50));
        assert_eq!(fade.current(), 50);

        fade.tick(Instant::from_millis(100));
        assert_eq!(fade.current(), 100);
        assert!(!fade.is_fading());
    }

    #[test]
    fn test_immediate_set() {
        let mut fade = Fade::new(10);
        fade.set(200, Duration::from_millis(0), Instant::from_millis(5));
        assert_eq!(fade.current(), 200);
        assert_eq!(fade.target(), 200);
        assert!(!fade.is_fading());
    }

    #[test]
    fn test_fade_down() {
        let mut fade = Fade::new(200);
        fade.set(0, Duration::from_millis(100), Instant::from_millis(1_000));
        fade.tick(Instant::from_millis(1_050));
        assert_eq!(fade.current(), 100);
        fade.tick(Instant::from_millis(2_000));
        assert_eq!(fade.current(), 0);
    }
}
