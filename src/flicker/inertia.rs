/// Constant-rate-of-approach filter
///
/// Moves the output towards the target by a fixed step per update, not by a
/// fraction of the gap. When target and output are equal the filter takes the
/// downward branch, so a steady flame jitters by one step. That jitter is part
/// of the look.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct InertiaFilter {
    output: u8,
}

impl InertiaFilter {
    pub(crate) const fn new() -> Self {
        Self { output: 0 }
    }

    pub(crate) const fn output(self) -> u8 {
        self.output
    }

    pub(crate) fn update(&mut self, target: u8, agility: u8) -> u8 {
        if target > self.output {
            if self.output < u8::MAX - agility {
                self.output += agility;
            }
        } else if self.output > agility {
            self.output -= agility;
        }
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::InertiaFilter;

    #[test]
    fn test_steps_towards_target() {
        let mut filter = InertiaFilter::new();
        assert_eq!(filter.update(100, 2), 2);
        assert_eq!(filter.update(100, 2), 4);

        let mut filter = InertiaFilter { output: 100 };
        assert_eq!(filter.update(10, 2), 98);
    }

    #[test]
    fn test_equal_target_moves_down() {
        let mut filter = InertiaFilter { output: 50 };
        assert_eq!(filter.update(50, 2), 48);
        assert_eq!(filter.update(50, 2), 50);
    }

    #[test]
    fn test_ceiling() {
        let mut filter = InertiaFilter { output: 252 };
        assert_eq!(filter.update(255, 2), 254);
        assert_eq!(filter.update(255, 2), 254);

        let mut filter = InertiaFilter { output: 253 };
        assert_eq!(filter.update(255, 2), 253);
    }

    #[test]
    fn test_floor() {
        let mut filter = InertiaFilter { output: 4 };
        assert_eq!(filter.update(0, 2), 2);
        assert_eq!(filter.update(0, 2), 2);
        assert_eq!(filter.output(), 2);
    }
}
