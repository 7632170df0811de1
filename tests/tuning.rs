mod tests {
    use myrtio_candle_flicker::tuning::{
        FLAME_AGILITY, FlickerTuning, TuningError, WIND_BASELINE, WIND_CALMNESS, WIND_VARIABILITY,
    };

    #[test]
    fn test_reference_tuning() {
        let tuning = FlickerTuning::default();
        assert_eq!(tuning, FlickerTuning::DEFAULT);
        assert_eq!(tuning.wind_variability(), 5);
        assert_eq!(tuning.wind_baseline(), 30);
        assert_eq!(tuning.wind_calmness(), 2);
        assert_eq!(tuning.flame_agility(), 2);
        assert_eq!(
            FlickerTuning::new(WIND_VARIABILITY, WIND_BASELINE, WIND_CALMNESS, FLAME_AGILITY),
            Ok(tuning)
        );
    }

    #[test]
    fn test_calmness_out_of_range() {
        assert_eq!(
            FlickerTuning::new(5, 30, 8, 2),
            Err(TuningError::CalmnessOutOfRange(8))
        );
        assert!(FlickerTuning::new(5, 30, 7, 2).is_ok());
    }

    #[test]
    fn test_zero_agility() {
        assert_eq!(FlickerTuning::new(5, 30, 2, 0), Err(TuningError::ZeroAgility));
        assert!(FlickerTuning::new(0, 0, 0, 255).is_ok());
    }
}
