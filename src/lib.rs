pub mod life_counted;
pub mod life_naive;
pub mod life_triplet;
mod quad;
mod slot_list;
mod trait_grid;
mod utils;

pub use quad::{Quad2, Quad3, Quad3Diff};
pub use slot_list::{SlotIdx, SlotList};
pub use trait_grid::{Grid, Rect, DEFAULT_FILL_RATE, DEFAULT_SEED};
pub use utils::with_delimiters;

pub type DefaultEngine = life_triplet::ConwayField;
