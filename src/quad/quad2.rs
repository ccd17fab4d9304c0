use std::fmt;
use std::ops::{BitOr, BitXor};

// Region masks over the row-major bit layout (bit `y * 4 + x`).
const NW: u16 = 0x0033;
const NE: u16 = 0x00cc;
const SW: u16 = 0x3300;
const SE: u16 = 0xcc00;
const NORTH: u16 = 0x000f;
const SOUTH: u16 = 0xf000;
const WEST: u16 = 0x1111;
const EAST: u16 = 0x8888;

/// A 4x4 square of cells packed into one word, bit `y * 4 + x`, row 0
/// northern, column 0 western. Values are immutable: every mutator
/// returns a new `Quad2` and leaves the receiver untouched.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Quad2(u16);

impl Quad2 {
    pub const EMPTY: Self = Self(0);

    #[inline]
    pub const fn from_bits(bits: u16) -> Self {
        Self(bits)
    }

    #[inline]
    pub const fn bits(self) -> u16 {
        self.0
    }

    #[inline]
    pub fn get(self, x: usize, y: usize) -> bool {
        debug_assert!(x < 4 && y < 4);
        self.0 >> (y * 4 + x) & 1 != 0
    }

    #[inline]
    pub fn set(self, x: usize, y: usize) -> Self {
        debug_assert!(x < 4 && y < 4);
        Self(self.0 | 1 << (y * 4 + x))
    }

    #[inline]
    pub fn clear(self, x: usize, y: usize) -> Self {
        debug_assert!(x < 4 && y < 4);
        Self(self.0 & !(1 << (y * 4 + x)))
    }

    #[inline]
    pub fn with(self, x: usize, y: usize, state: bool) -> Self {
        if state {
            self.set(x, y)
        } else {
            self.clear(x, y)
        }
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// The 2x2 north-west quadrant, everything else masked off.
    #[inline]
    pub const fn nw(self) -> Self {
        Self(self.0 & NW)
    }

    #[inline]
    pub const fn ne(self) -> Self {
        Self(self.0 & NE)
    }

    #[inline]
    pub const fn sw(self) -> Self {
        Self(self.0 & SW)
    }

    #[inline]
    pub const fn se(self) -> Self {
        Self(self.0 & SE)
    }

    /// The 1x4 northern edge row, everything else masked off.
    #[inline]
    pub const fn north(self) -> Self {
        Self(self.0 & NORTH)
    }

    #[inline]
    pub const fn south(self) -> Self {
        Self(self.0 & SOUTH)
    }

    #[inline]
    pub const fn west(self) -> Self {
        Self(self.0 & WEST)
    }

    #[inline]
    pub const fn east(self) -> Self {
        Self(self.0 & EAST)
    }
}

impl BitOr for Quad2 {
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitXor for Quad2 {
    type Output = Self;

    #[inline]
    fn bitxor(self, rhs: Self) -> Self {
        Self(self.0 ^ rhs.0)
    }
}

impl fmt::Debug for Quad2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Quad2(0x{:04x})", self.0)?;
        for y in 0..4 {
            for x in 0..4 {
                write!(f, "{}", if self.get(x, y) { '#' } else { '.' })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
