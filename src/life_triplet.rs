use crate::utils::with_delimiters;
use crate::Grid;

// One unit in each of the three packed count fields.
const L1: u16 = 1 << 6;
const M1: u16 = 1 << 3;
const R1: u16 = 1;

/// Three horizontally adjacent cells in one word:
///
/// ```text
/// bit  15         unused
/// bits 14 13 12   next state     (left, middle, right)
/// bits 11 10  9   current state  (left, middle, right)
/// bits  8.. 6     left count
/// bits  5.. 3     middle count
/// bits  2.. 0     right count
/// ```
///
/// Stored counts exclude the in-slot horizontal neighbors, so the left and
/// right counts top out at 7 and the middle count at 6. Between steps the
/// next bits mirror the current bits; `step` diverges them in its first
/// phase and reconverges them in the second.
#[derive(Clone, Copy, Default, PartialEq, Eq)]
struct Triplet(u16);

impl Triplet {
    #[inline]
    fn current(self, pos: usize) -> bool {
        debug_assert!(pos < 3);
        self.0 >> (11 - pos) & 1 != 0
    }

    #[inline]
    fn next(self, pos: usize) -> bool {
        debug_assert!(pos < 3);
        self.0 >> (14 - pos) & 1 != 0
    }

    #[inline]
    fn current_bits(self) -> u16 {
        self.0 >> 9 & 0b111
    }

    #[inline]
    fn next_bits(self) -> u16 {
        self.0 >> 12 & 0b111
    }

    #[inline]
    fn with_next_bits(self, bits: u16) -> Self {
        debug_assert!(bits < 8);
        Self(self.0 & !(0b111 << 12) | bits << 12)
    }

    #[inline]
    fn make_alive(self, pos: usize) -> Self {
        debug_assert!(pos < 3);
        Self(self.0 | 1 << (11 - pos) | 1 << (14 - pos))
    }

    #[inline]
    fn make_dead(self, pos: usize) -> Self {
        debug_assert!(pos < 3);
        Self(self.0 & !(1 << (11 - pos)) & !(1 << (14 - pos)))
    }

    #[inline]
    fn left_count(self) -> u16 {
        self.0 >> 6 & 0b111
    }

    #[inline]
    fn middle_count(self) -> u16 {
        self.0 >> 3 & 0b111
    }

    #[inline]
    fn right_count(self) -> u16 {
        self.0 & 0b111
    }

    /// Full neighbor count of a sub-cell: the stored count plus the in-slot
    /// horizontal neighbors read from the current bits.
    #[inline]
    fn neighbors(self, pos: usize) -> u16 {
        debug_assert!(pos < 3);
        match pos {
            0 => self.left_count() + (self.0 >> 10 & 1),
            1 => self.middle_count() + (self.0 >> 11 & 1) + (self.0 >> 9 & 1),
            _ => self.right_count() + (self.0 >> 10 & 1),
        }
    }

    // Deltas seen by the slots directly above and below a flipped cell,
    // one incr/decr pair per sub-position.

    #[inline]
    fn incr_lm(self) -> Self {
        debug_assert!(self.left_count() < 7 && self.middle_count() < 6);
        Self(self.0 + (L1 + M1))
    }

    #[inline]
    fn decr_lm(self) -> Self {
        debug_assert!(self.left_count() > 0 && self.middle_count() > 0);
        Self(self.0 - (L1 + M1))
    }

    #[inline]
    fn incr_lmr(self) -> Self {
        debug_assert!(self.left_count() < 7 && self.middle_count() < 6 && self.right_count() < 7);
        Self(self.0 + (L1 + M1 + R1))
    }

    #[inline]
    fn decr_lmr(self) -> Self {
        debug_assert!(self.left_count() > 0 && self.middle_count() > 0 && self.right_count() > 0);
        Self(self.0 - (L1 + M1 + R1))
    }

    #[inline]
    fn incr_mr(self) -> Self {
        debug_assert!(self.middle_count() < 6 && self.right_count() < 7);
        Self(self.0 + (M1 + R1))
    }

    #[inline]
    fn decr_mr(self) -> Self {
        debug_assert!(self.middle_count() > 0 && self.right_count() > 0);
        Self(self.0 - (M1 + R1))
    }

    // Single-count bumps seen by the horizontally adjacent column.

    #[inline]
    fn incr_l(self) -> Self {
        debug_assert!(self.left_count() < 7);
        Self(self.0 + L1)
    }

    #[inline]
    fn decr_l(self) -> Self {
        debug_assert!(self.left_count() > 0);
        Self(self.0 - L1)
    }

    #[inline]
    fn incr_r(self) -> Self {
        debug_assert!(self.right_count() < 7);
        Self(self.0 + R1)
    }

    #[inline]
    fn decr_r(self) -> Self {
        debug_assert!(self.right_count() > 0);
        Self(self.0 - R1)
    }
}

/// Change-list engine over packed triplets. Cell `x` lives in slot `x / 3`
/// at sub-position `x % 3`. `step` is two-phase: phase 1 recomputes next
/// bits for the slot neighborhoods reachable from the previous change list,
/// phase 2 commits the slots whose next bits differ and propagates counts.
pub struct ConwayField {
    triplets: Vec<Triplet>,
    changes: Vec<(usize, usize)>,
    candidates: Vec<(usize, usize)>,
    width: usize,
    height: usize,
    width_slots: usize,
}

impl ConwayField {
    #[inline]
    fn slot_index(&self, tx: usize, y: usize) -> usize {
        tx + y * self.width_slots
    }

    #[inline]
    fn is_interior(&self, x: usize, y: usize) -> bool {
        (1..self.width - 1).contains(&x) && (1..self.height - 1).contains(&y)
    }

    /// No-op if the cell is already alive; reports whether a flip was
    /// committed. A committed flip applies the delta set of its
    /// sub-position: above/below slots always, the adjacent column only for
    /// the outer sub-positions.
    fn become_alive(&mut self, x: usize, y: usize) -> bool {
        debug_assert!(self.is_interior(x, y));
        let (tx, pos) = (x / 3, x % 3);
        let i = self.slot_index(tx, y);
        if self.triplets[i].current(pos) {
            return false;
        }
        self.triplets[i] = self.triplets[i].make_alive(pos);
        let w = self.width_slots;
        match pos {
            0 => {
                self.triplets[i - w] = self.triplets[i - w].incr_lm();
                self.triplets[i + w] = self.triplets[i + w].incr_lm();
                self.triplets[i - w - 1] = self.triplets[i - w - 1].incr_r();
                self.triplets[i - 1] = self.triplets[i - 1].incr_r();
                self.triplets[i + w - 1] = self.triplets[i + w - 1].incr_r();
            }
            1 => {
                self.triplets[i - w] = self.triplets[i - w].incr_lmr();
                self.triplets[i + w] = self.triplets[i + w].incr_lmr();
            }
            _ => {
                self.triplets[i - w] = self.triplets[i - w].incr_mr();
                self.triplets[i + w] = self.triplets[i + w].incr_mr();
                self.triplets[i - w + 1] = self.triplets[i - w + 1].incr_l();
                self.triplets[i + 1] = self.triplets[i + 1].incr_l();
                self.triplets[i + w + 1] = self.triplets[i + w + 1].incr_l();
            }
        }
        true
    }

    fn become_dead(&mut self, x: usize, y: usize) -> bool {
        debug_assert!(self.is_interior(x, y));
        let (tx, pos) = (x / 3, x % 3);
        let i = self.slot_index(tx, y);
        if !self.triplets[i].current(pos) {
            return false;
        }
        self.triplets[i] = self.triplets[i].make_dead(pos);
        let w = self.width_slots;
        match pos {
            0 => {
                self.triplets[i - w] = self.triplets[i - w].decr_lm();
                self.triplets[i + w] = self.triplets[i + w].decr_lm();
                self.triplets[i - w - 1] = self.triplets[i - w - 1].decr_r();
                self.triplets[i - 1] = self.triplets[i - 1].decr_r();
                self.triplets[i + w - 1] = self.triplets[i + w - 1].decr_r();
            }
            1 => {
                self.triplets[i - w] = self.triplets[i - w].decr_lmr();
                self.triplets[i + w] = self.triplets[i + w].decr_lmr();
            }
            _ => {
                self.triplets[i - w] = self.triplets[i - w].decr_mr();
                self.triplets[i + w] = self.triplets[i + w].decr_mr();
                self.triplets[i - w + 1] = self.triplets[i - w + 1].decr_l();
                self.triplets[i + 1] = self.triplets[i + 1].decr_l();
                self.triplets[i + w + 1] = self.triplets[i + w + 1].decr_l();
            }
        }
        true
    }

    /// Recomputes the tentative next bits of one slot from the current bits
    /// and counts. Records the slot for the commit phase when the stored
    /// next bits change; since the next plane mirrors the current one
    /// between steps, the same test filters duplicate candidates.
    fn eval_slot(&mut self, tx: usize, y: usize) {
        let i = self.slot_index(tx, y);
        let t = self.triplets[i];
        let mut bits = 0;
        for pos in 0..3 {
            let x = tx * 3 + pos;
            let state = if x >= 1 && x + 1 < self.width {
                let neibs = t.neighbors(pos);
                if t.current(pos) {
                    neibs == 2 || neibs == 3
                } else {
                    neibs == 3
                }
            } else {
                // Border sub-cells never come alive.
                false
            };
            bits = bits << 1 | state as u16;
        }
        if bits == t.next_bits() {
            return;
        }
        self.triplets[i] = t.with_next_bits(bits);
        self.candidates.push((tx, y));
    }
}

impl Grid for ConwayField {
    fn blank(width: usize, height: usize) -> Self {
        assert!(width >= 3 && height >= 3);
        assert!(width % 3 == 0, "width must be a multiple of 3");
        Self {
            triplets: vec![Triplet::default(); width / 3 * height],
            changes: Vec::new(),
            candidates: Vec::new(),
            width,
            height,
            width_slots: width / 3,
        }
    }

    fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    fn clear(&mut self) {
        self.triplets.fill(Triplet::default());
        self.changes.clear();
        self.candidates.clear();
    }

    fn get(&self, x: usize, y: usize) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        self.triplets[self.slot_index(x / 3, y)].current(x % 3)
    }

    fn set(&mut self, x: usize, y: usize, state: bool) {
        if !self.is_interior(x, y) {
            return;
        }
        let committed = if state {
            self.become_alive(x, y)
        } else {
            self.become_dead(x, y)
        };
        if committed {
            self.changes.push((x / 3, y));
        }
    }

    fn step(&mut self) {
        let prev = std::mem::take(&mut self.changes);
        self.candidates.clear();
        // Phase 1: next bits for every slot neighborhood reachable from the
        // previous change list. Rows are clamped to the interior, columns to
        // the storage; over-marking a slot is safe.
        for &(tx, y) in &prev {
            let x1 = (tx + 1).min(self.width_slots - 1);
            let y1 = (y + 1).min(self.height - 2);
            for yy in (y - 1).max(1)..=y1 {
                for xx in tx.saturating_sub(1)..=x1 {
                    self.eval_slot(xx, yy);
                }
            }
        }
        // Phase 2: commit the recorded slots and build the new change list.
        for k in 0..self.candidates.len() {
            let (tx, y) = self.candidates[k];
            let t = self.triplets[self.slot_index(tx, y)];
            debug_assert!(t.next_bits() != t.current_bits());
            for pos in 0..3 {
                if t.next(pos) != t.current(pos) {
                    if t.next(pos) {
                        self.become_alive(tx * 3 + pos, y);
                    } else {
                        self.become_dead(tx * 3 + pos, y);
                    }
                }
            }
            self.changes.push((tx, y));
        }
    }

    fn stats(&self) -> String {
        let population: usize = self
            .triplets
            .iter()
            .map(|t| t.current_bits().count_ones() as usize)
            .sum();
        let bytes = self.triplets.capacity() * std::mem::size_of::<Triplet>()
            + (self.changes.capacity() + self.candidates.capacity())
                * std::mem::size_of::<(usize, usize)>();
        format!(
            "population: {} | pending changes: {} | heap: {} bytes",
            with_delimiters(population),
            with_delimiters(self.changes.len()),
            with_delimiters(bytes)
        )
    }
}
