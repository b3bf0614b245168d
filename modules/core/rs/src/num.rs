use std::fmt::{Debug, Display};

/// T values are primitive integers
pub trait PrimInt: ::num::PrimInt + Debug + Default {}

impl<T: ::num::PrimInt + Debug + Default> PrimInt for T {}

/// T values are signed primitive integers used to accumulate alignment scores.
/// Accumulation is always checked, the width of T bounds the longest alignable sequences.
pub trait Score: PrimInt + ::num::Signed + Display {}

impl<T: PrimInt + ::num::Signed + Display> Score for T {}

/// Converts a sequence length into the score domain, `None` if it doesn't fit.
#[inline(always)]
pub fn from_len<S: Score>(len: usize) -> Option<S> {
    <S as ::num::NumCast>::from(len)
}
