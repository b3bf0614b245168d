pub use alignable::Alignable;

pub mod alignable;
pub mod num;
