use std::fmt;
use std::ops::{BitOr, BitXor};

use super::Quad2;

/// An 8x8 square assembled from four [`Quad2`] corners. Point operations
/// forward to the corner owning the coordinate; region predicates reduce
/// to masking and OR-ing the corners, without visiting individual cells.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Quad3 {
    nw: Quad2,
    ne: Quad2,
    sw: Quad2,
    se: Quad2,
}

impl Quad3 {
    pub const EMPTY: Self = Self::new(Quad2::EMPTY, Quad2::EMPTY, Quad2::EMPTY, Quad2::EMPTY);

    #[inline]
    pub const fn new(nw: Quad2, ne: Quad2, sw: Quad2, se: Quad2) -> Self {
        Self { nw, ne, sw, se }
    }

    #[inline]
    pub const fn nw(self) -> Quad2 {
        self.nw
    }

    #[inline]
    pub const fn ne(self) -> Quad2 {
        self.ne
    }

    #[inline]
    pub const fn sw(self) -> Quad2 {
        self.sw
    }

    #[inline]
    pub const fn se(self) -> Quad2 {
        self.se
    }

    #[inline]
    pub fn get(self, x: usize, y: usize) -> bool {
        debug_assert!(x < 8 && y < 8);
        match (x < 4, y < 4) {
            (true, true) => self.nw.get(x, y),
            (false, true) => self.ne.get(x & 3, y),
            (true, false) => self.sw.get(x, y & 3),
            (false, false) => self.se.get(x & 3, y & 3),
        }
    }

    #[inline]
    pub fn set(self, x: usize, y: usize) -> Self {
        self.with(x, y, true)
    }

    #[inline]
    pub fn clear(self, x: usize, y: usize) -> Self {
        self.with(x, y, false)
    }

    pub fn with(mut self, x: usize, y: usize, state: bool) -> Self {
        debug_assert!(x < 8 && y < 8);
        match (x < 4, y < 4) {
            (true, true) => self.nw = self.nw.with(x, y, state),
            (false, true) => self.ne = self.ne.with(x & 3, y, state),
            (true, false) => self.sw = self.sw.with(x, y & 3, state),
            (false, false) => self.se = self.se.with(x & 3, y & 3, state),
        }
        self
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.nw.is_empty() && self.ne.is_empty() && self.sw.is_empty() && self.se.is_empty()
    }

    /// Whether the 1x8 northern edge row holds no live cell. The edge
    /// spans the two northern corners.
    #[inline]
    pub fn north_empty(self) -> bool {
        (self.nw.north() | self.ne.north()).is_empty()
    }

    #[inline]
    pub fn south_empty(self) -> bool {
        (self.sw.south() | self.se.south()).is_empty()
    }

    #[inline]
    pub fn west_empty(self) -> bool {
        (self.nw.west() | self.sw.west()).is_empty()
    }

    #[inline]
    pub fn east_empty(self) -> bool {
        (self.ne.east() | self.se.east()).is_empty()
    }

    /// Change report against an earlier snapshot. Set bits in the report
    /// are exactly the cells whose state differs.
    #[inline]
    pub fn diff(self, earlier: Self) -> Quad3Diff {
        Quad3Diff(self ^ earlier)
    }
}

impl BitOr for Quad3 {
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self::new(
            self.nw | rhs.nw,
            self.ne | rhs.ne,
            self.sw | rhs.sw,
            self.se | rhs.se,
        )
    }
}

impl BitXor for Quad3 {
    type Output = Self;

    #[inline]
    fn bitxor(self, rhs: Self) -> Self {
        Self::new(
            self.nw ^ rhs.nw,
            self.ne ^ rhs.ne,
            self.sw ^ rhs.sw,
            self.se ^ rhs.se,
        )
    }
}

impl fmt::Debug for Quad3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Quad3")?;
        for y in 0..8 {
            for x in 0..8 {
                write!(f, "{}", if self.get(x, y) { '#' } else { '.' })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// XOR plane between two [`Quad3`] snapshots, with O(1) predicates for
/// whole-square, per-edge and per-corner stability.
#[derive(Clone, Copy, Debug)]
pub struct Quad3Diff(Quad3);

impl Quad3Diff {
    #[inline]
    pub fn no_change(self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn north_unchanged(self) -> bool {
        self.0.north_empty()
    }

    #[inline]
    pub fn south_unchanged(self) -> bool {
        self.0.south_empty()
    }

    #[inline]
    pub fn west_unchanged(self) -> bool {
        self.0.west_empty()
    }

    #[inline]
    pub fn east_unchanged(self) -> bool {
        self.0.east_empty()
    }

    #[inline]
    pub fn nw_unchanged(self) -> bool {
        self.0.nw().is_empty()
    }

    #[inline]
    pub fn ne_unchanged(self) -> bool {
        self.0.ne().is_empty()
    }

    #[inline]
    pub fn sw_unchanged(self) -> bool {
        self.0.sw().is_empty()
    }

    #[inline]
    pub fn se_unchanged(self) -> bool {
        self.0.se().is_empty()
    }

    /// Whether this particular cell differs between the two snapshots.
    #[inline]
    pub fn get(self, x: usize, y: usize) -> bool {
        self.0.get(x, y)
    }
}
