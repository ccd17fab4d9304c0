use crate::Grid;

/// Brute-force baseline: re-evaluates the whole interior every generation
/// into a second buffer. Slow and obviously correct, it is the oracle the
/// incremental engines are tested against.
pub struct ConwayField {
    cells_curr: Vec<bool>,
    cells_next: Vec<bool>,
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

    fn count_neibs(&self, x: usize, y: usize) -> u8 {
        let i = self.index(x, y);
        let w = self.width;
        self.cells_curr[i - w - 1] as u8
            + self.cells_curr[i - w] as u8
            + self.cells_curr[i - w + 1] as u8
            + self.cells_curr[i - 1] as u8
            + self.cells_curr[i + 1] as u8
            + self.cells_curr[i + w - 1] as u8
            + self.cells_curr[i + w] as u8
            + self.cells_curr[i + w + 1] as u8
    }
}

impl Grid for ConwayField {
    fn blank(width: usize, height: usize) -> Self {
        assert!(width >= 3 && height >= 3);
        Self {
            cells_curr: vec![false; width * height],
            cells_next: vec![false; width * height],
            width,
            height,
        }
    }

    fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    fn clear(&mut self) {
        self.cells_curr.fill(false);
        self.cells_next.fill(false);
    }

    fn get(&self, x: usize, y: usize) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        self.cells_curr[x + y * self.width]
    }

    fn set(&mut self, x: usize, y: usize, state: bool) {
        if !self.is_interior(x, y) {
            return;
        }
        let i = self.index(x, y);
        self.cells_curr[i] = state;
    }

    fn step(&mut self) {
        // Border cells of `cells_next` are never written and stay dead.
        for y in 1..self.height - 1 {
            for x in 1..self.width - 1 {
                let neibs = self.count_neibs(x, y);
                let i = self.index(x, y);
                self.cells_next[i] = if self.cells_curr[i] {
                    neibs == 2 || neibs == 3
                } else {
                    neibs == 3
                };
            }
        }
        std::mem::swap(&mut self.cells_curr, &mut self.cells_next);
    }
}
