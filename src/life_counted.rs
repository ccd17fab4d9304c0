use crate::utils::with_delimiters;
use crate::Grid;

const ALIVE: u8 = 1 << 4;
const COUNT_MASK: u8 = 0x0f;

/// One byte per cell: bit 4 is the alive flag, bits 0-3 hold the number of
/// alive cells among the 8 neighbors. Flag and count live in the same byte
/// so there is exactly one array to keep coherent.
#[derive(Clone, Copy, Default, PartialEq, Eq)]
struct Cell(u8);

impl Cell {
    #[inline]
    fn is_alive(self) -> bool {
        self.0 & ALIVE != 0
    }

    #[inline]
    fn count(self) -> u8 {
        self.0 & COUNT_MASK
    }

    #[inline]
    fn make_alive(self) -> Self {
        Self(self.0 | ALIVE)
    }

    #[inline]
    fn make_dead(self) -> Self {
        Self(self.0 & !ALIVE)
    }

    #[inline]
    fn incr(self) -> Self {
        debug_assert!(self.count() < 8);
        Self(self.0 + 1)
    }

    #[inline]
    fn decr(self) -> Self {
        debug_assert!(self.count() > 0);
        Self(self.0 - 1)
    }
}

/// Change-list engine over maintained neighbor counts. Mutations keep the 8
/// surrounding counts exact at all times; `step` only re-evaluates the
/// neighborhoods of cells recorded as changed last generation, reading every
/// rule input from a frozen snapshot of the previous generation.
pub struct ConwayField {
    cells: Vec<Cell>,
    snapshot: Vec<Cell>,
    changes: Vec<(usize, usize)>,
    width: usize,
    height: usize,
}

impl ConwayField {
    #[inline]
    fn index(&self, x: usize, y: usize) -> usize {
        x + y * self.width
    }

    #[inline]
    fn is_interior(&self, x: usize, y: usize) -> bool {
        (1..self.width - 1).contains(&x) && (1..self.height - 1).contains(&y)
    }

    /// No-op if the cell is already alive. Otherwise sets the flag, bumps
    /// the count of all 8 neighbors and records the coordinate.
    fn become_alive(&mut self, x: usize, y: usize) {
        debug_assert!(self.is_interior(x, y));
        let i = self.index(x, y);
        if self.cells[i].is_alive() {
            return;
        }
        self.cells[i] = self.cells[i].make_alive();
        let w = self.width as isize;
        for shift in [-w - 1, -w, -w + 1, -1, 1, w - 1, w, w + 1] {
            let j = (i as isize + shift) as usize;
            self.cells[j] = self.cells[j].incr();
        }
        self.changes.push((x, y));
    }

    fn become_dead(&mut self, x: usize, y: usize) {
        debug_assert!(self.is_interior(x, y));
        let i = self.index(x, y);
        if !self.cells[i].is_alive() {
            return;
        }
        self.cells[i] = self.cells[i].make_dead();
        let w = self.width as isize;
        for shift in [-w - 1, -w, -w + 1, -1, 1, w - 1, w, w + 1] {
            let j = (i as isize + shift) as usize;
            self.cells[j] = self.cells[j].decr();
        }
        self.changes.push((x, y));
    }
}

impl Grid for ConwayField {
    fn blank(width: usize, height: usize) -> Self {
        assert!(width >= 3 && height >= 3);
        Self {
            cells: vec![Cell::default(); width * height],
            snapshot: Vec::new(),
            changes: Vec::new(),
            width,
            height,
        }
    }

    fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    fn clear(&mut self) {
        self.cells.fill(Cell::default());
        self.changes.clear();
    }

    fn get(&self, x: usize, y: usize) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        self.cells[x + y * self.width].is_alive()
    }

    fn set(&mut self, x: usize, y: usize, state: bool) {
        if !self.is_interior(x, y) {
            return;
        }
        if state {
            self.become_alive(x, y);
        } else {
            self.become_dead(x, y);
        }
    }

    fn step(&mut self) {
        self.snapshot.clone_from(&self.cells);
        let prev = std::mem::take(&mut self.changes);
        for &(cx, cy) in &prev {
            // 3x3 neighborhood clamped to the interior. Revisits through
            // overlapping neighborhoods are harmless: the decision is a pure
            // function of the snapshot and the mutators are idempotent.
            let x1 = (cx + 2).min(self.width - 1);
            let y1 = (cy + 2).min(self.height - 1);
            for y in (cy - 1).max(1)..y1 {
                for x in (cx - 1).max(1)..x1 {
                    let cell = self.snapshot[x + y * self.width];
                    if cell.is_alive() {
                        if cell.count() != 2 && cell.count() != 3 {
                            self.become_dead(x, y);
                        }
                    } else if cell.count() == 3 {
                        self.become_alive(x, y);
                    }
                }
            }
        }
    }

    fn stats(&self) -> String {
        let population = self.cells.iter().filter(|c| c.is_alive()).count();
        let bytes = (self.cells.capacity() + self.snapshot.capacity())
            * std::mem::size_of::<Cell>()
            + self.changes.capacity() * std::mem::size_of::<(usize, usize)>();
        format!(
            "population: {} | pending changes: {} | heap: {} bytes",
            with_delimiters(population),
            with_delimiters(self.changes.len()),
            with_delimiters(bytes)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_counts_consistent(field: &ConwayField) {
        for y in 0..field.height {
            for x in 0..field.width {
                let mut expected = 0u8;
                for dy in -1i64..=1 {
                    for dx in -1i64..=1 {
                        if dx == 0 && dy == 0 {
                            continue;
                        }
                        let (nx, ny) = (x as i64 + dx, y as i64 + dy);
                        if nx >= 0
                            && ny >= 0
                            && (nx as usize) < field.width
                            && (ny as usize) < field.height
                        {
                            let j = nx as usize + ny as usize * field.width;
                            expected += field.cells[j].is_alive() as u8;
                        }
                    }
                }
                let stored = field.cells[x + y * field.width].count();
                assert_eq!(stored, expected, "count mismatch at ({}, {})", x, y);
            }
        }
    }

    #[test]
    fn counts_track_mutations_and_steps() {
        let mut field = ConwayField::random(64, 64, Some(42), 0.3);
        assert_counts_consistent(&field);
        for _ in 0..4 {
            field.step();
            assert_counts_consistent(&field);
        }
    }

    #[test]
    fn redundant_writes_change_nothing() {
        let mut field = ConwayField::blank(16, 16);
        field.set(5, 5, true);
        assert_eq!(field.changes.len(), 1);
        let cells = field.cells.clone();

        field.set(5, 5, true);
        assert_eq!(field.changes.len(), 1);
        assert!(field.cells == cells);

        field.set(5, 5, false);
        assert_eq!(field.changes.len(), 2);
        field.set(5, 5, false);
        assert_eq!(field.changes.len(), 2);
    }

    #[test]
    fn out_of_interior_writes_ignored() {
        let mut field = ConwayField::blank(16, 16);
        field.set(0, 5, true);
        field.set(15, 5, true);
        field.set(5, 0, true);
        field.set(5, 15, true);
        field.set(100, 5, true);
        assert!(field.changes.is_empty());
        assert!(field.cells.iter().all(|&c| c == Cell::default()));
    }

    #[test]
    fn change_list_covers_every_flip() {
        let mut field = ConwayField::random(48, 48, Some(7), 0.3);
        for _ in 0..3 {
            let before: Vec<bool> = field.cells.iter().map(|c| c.is_alive()).collect();
            field.step();
            for y in 0..field.height {
                for x in 0..field.width {
                    let i = x + y * field.width;
                    if before[i] != field.cells[i].is_alive() {
                        assert!(
                            field.changes.contains(&(x, y)),
                            "flip at ({}, {}) missing from the change list",
                            x,
                            y
                        );
                    }
                }
            }
        }
    }
}
