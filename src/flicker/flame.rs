use crate::rng::XabcRng;

/// Raw flame height, grows every step until the wind knocks it down
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Flame {
    height: u8,
}

impl Flame {
    pub(crate) const fn new() -> Self {
        Self { height: 0 }
    }

    pub(crate) const fn height(self) -> u8 {
        self.height
    }

    pub(crate) fn update(&mut self, rng: &mut XabcRng, wind: u8, calmness: u8) {
        // Growth saturates, it never wraps back to a dark flame
        if self.height < u8::MAX {
            self.height += 1;
        }

        let threshold = wind.checked_shr(u32::from(calmness)).unwrap_or(0);
        if rng.next_u8() < threshold {
            self.height = rng.next_u8();
        }
    }
}
