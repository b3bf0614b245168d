pub use gapline_core_rs::num::Score;
pub use gapline_core_rs::Alignable;

pub mod pairwise;
