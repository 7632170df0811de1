//! XABC pseudo-random byte generator
//!
//! A four-register 8-bit generator that costs a handful of instructions per
//! byte: one increment, two XORs, two additions and a shift. There is no
//! multiplication or division, so it runs comfortably on cores without a
//! hardware multiplier.
//!
//! This is **not** a cryptographic generator. Its only job is to produce
//! flicker-looking noise, and its autocorrelation is part of how the candle
//! model behaves.

/// XABC generator state
///
/// All registers wrap modulo 256. The zero state is the fixed seed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct XabcRng {
    x: u8,
    a: u8,
    b: u8,
    c: u8,
}

impl XabcRng {
    /// Create a generator in the zero state
    pub const fn new() -> Self {
        Self {
            x: 0,
            a: 0,
            b: 0,
            c: 0,
        }
    }

    /// Return to the zero state
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Advance the generator and return the next byte
    #[inline]
    pub fn next_u8(&mut self) -> u8 {
        self.x = self.x.wrapping_add(1);
        self.a = self.a ^ self.c ^ self.x;
        self.b = self.b.wrapping_add(self.a);
        self.c = self.c.wrapping_add(self.b >> 1) ^ self.a;
        self.c
    }

    /// Step counter, incremented on every draw
    pub const fn x(&self) -> u8 {
        self.x
    }

    pub const fn a(&self) -> u8 {
        self.a
    }

    pub const fn b(&self) -> u8 {
        self.b
    }

    pub const fn c(&self) -> u8 {
        self.c
    }
}
