use derive_getters::Dissolve;
use eyre::{ensure, Result};

use crate::pairwise::scoring::{Score, GAP_EXTEND, GAP_OPEN};

// Penalties are charged per gap symbol: `gap_open` for the first gap of a run, `gap_extend` for
// every following one. Runs that start at the origin of the global alignment are charged
// `gap_open + gap_extend * len` instead.
pub trait Scorer {
    type Score: Score;

    fn gap_open(&self) -> Self::Score;
    fn gap_extend(&self) -> Self::Score;
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash, Dissolve)]
pub struct Affine<S: Score> {
    open: S,
    extend: S,
}

impl<S: Score> Affine<S> {
    /// Both penalties must be non-positive.
    pub fn new(open: S, extend: S) -> Result<Self> {
        ensure!(
            open <= S::zero(),
            "Gap open penalty must be non-positive, got {open}"
        );
        ensure!(
            extend <= S::zero(),
            "Gap extend penalty must be non-positive, got {extend}"
        );
        Ok(Self { open, extend })
    }
}

impl Default for Affine<i32> {
    fn default() -> Self {
        Self {
            open: GAP_OPEN,
            extend: GAP_EXTEND,
        }
    }
}

impl<S: Score> Scorer for Affine<S> {
    type Score = S;

    #[inline(always)]
    fn gap_open(&self) -> Self::Score {
        self.open
    }

    #[inline(always)]
    fn gap_extend(&self) -> Self::Score {
        self.extend
    }
}
