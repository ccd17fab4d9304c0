mod quad2;
mod quad3;

pub use quad2::Quad2;
pub use quad3::{Quad3, Quad3Diff};

#[cfg(test)]
mod tests;
