use crate::utils::with_delimiters;

pub const DEFAULT_SEED: u64 = 42;
pub const DEFAULT_FILL_RATE: f64 = 0.3;

/// Clip window for [`Grid::draw`], in grid coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

impl Rect {
    pub const fn new(x: usize, y: usize, width: usize, height: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Common surface of all engines. The grid is bounded and its outermost ring
/// of cells is permanently dead; the writable interior is
/// `[1, width-1) x [1, height-1)`. Row 0 is the northern row.
pub trait Grid: Sized {
    /// Creates an all-dead grid, allocated once at a fixed size.
    fn blank(width: usize, height: usize) -> Self;

    fn size(&self) -> (usize, usize);

    /// Kills every cell and resets all cached state (counts, change lists,
    /// scratch buffers).
    fn clear(&mut self);

    /// Reads outside the interior, border ring included, return `false`.
    fn get(&self, x: usize, y: usize) -> bool;

    /// Writes outside the interior are silently ignored. Writing the state a
    /// cell already has changes nothing.
    fn set(&mut self, x: usize, y: usize, state: bool);

    /// Advances exactly one generation.
    fn step(&mut self);

    fn update(&mut self, n: usize) {
        for _ in 0..n {
            self.step();
        }
    }

    fn random(width: usize, height: usize, seed: Option<u64>, fill_rate: f64) -> Self {
        use rand::{Rng, SeedableRng};
        use rand_chacha::ChaCha8Rng;

        let mut rng = if let Some(x) = seed {
            ChaCha8Rng::seed_from_u64(x)
        } else {
            ChaCha8Rng::from_entropy()
        };
        let mut result = Self::blank(width, height);
        for y in 0..height {
            for x in 0..width {
                result.set(x, y, rng.gen_bool(fill_rate));
            }
        }
        result
    }

    /// Calls `sink(x, y)` exactly once for every alive cell inside `rect`,
    /// clipped to the grid.
    fn draw<F: FnMut(usize, usize)>(&self, rect: Rect, mut sink: F) {
        let (w, h) = self.size();
        let x1 = (rect.x + rect.width).min(w);
        let y1 = (rect.y + rect.height).min(h);
        for y in rect.y..y1 {
            for x in rect.x..x1 {
                if self.get(x, y) {
                    sink(x, y);
                }
            }
        }
    }

    /// One-line state report, cheap enough to call every frame.
    fn stats(&self) -> String {
        let (w, h) = self.size();
        let mut population = 0;
        for y in 0..h {
            for x in 0..w {
                population += self.get(x, y) as usize;
            }
        }
        format!("population: {}", with_delimiters(population))
    }

    fn println(&self) {
        let (w, h) = self.size();
        for y in 0..h {
            for x in 0..w {
                print!("{}", self.get(x, y) as u8);
                if x + 1 == w {
                    println!();
                }
            }
        }
        println!();
    }
}
