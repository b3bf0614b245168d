pub use alignment::{Alignment, Op, Pair, Step};

pub mod alignment;
pub mod nw;
pub mod scoring;
