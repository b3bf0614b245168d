pub use alignment::{Alignment, Pair};
pub use op::Op;
pub use step::Step;

pub mod alignment;
mod op;
pub mod step;
pub mod utils;
