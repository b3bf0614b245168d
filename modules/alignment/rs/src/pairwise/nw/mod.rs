//! Global pairwise alignment (Needleman-Wunsch) with affine gap penalties that enumerates all
//! co-optimal alignments.
//!
//! The score matrix is filled row by row, every cell records the full set of moves reaching its
//! optimum. The traceback then walks each recorded route back to the origin.

pub use config::Config;
pub use engine::Engine;
pub use tables::Tables;
pub use traceback::{count, Paths};
pub use trace::{Move, Trace};

use eyre::Result;

use crate::pairwise::scoring::{self, equiv, gaps, symbols, GAP_EXTEND, GAP_OPEN};
use crate::pairwise::Alignment;
use crate::{Alignable, Score};

pub mod algo;
mod config;
mod engine;
mod tables;
mod trace;
mod traceback;

/// All optimal global alignments with the default scoring: +10 for equal symbols, -100 for
/// different ones, gap open -5 and gap extend -1.
pub fn align<'a, T, S1, S2>(first: &'a S1, second: &'a S2) -> Result<Vec<Alignment<'a, T, i32>>>
where
    T: PartialEq + 'a,
    S1: Alignable<Symbol = T> + ?Sized,
    S2: Alignable<Symbol = T> + ?Sized,
{
    align_with(
        first,
        second,
        symbols::Equality::default(),
        GAP_OPEN,
        GAP_EXTEND,
    )
}

/// All optimal global alignments for a custom symbol scorer and gap penalties.
/// Penalties must be non-positive.
pub fn align_with<'a, T, S, Scorer, S1, S2>(
    first: &'a S1,
    second: &'a S2,
    scorer: Scorer,
    gap_open: S,
    gap_extend: S,
) -> Result<Vec<Alignment<'a, T, S>>>
where
    T: PartialEq + 'a,
    S: Score,
    Scorer: symbols::Scorer<Symbol = T, Score = S>,
    S1: Alignable<Symbol = T> + ?Sized,
    S2: Alignable<Symbol = T> + ?Sized,
{
    let scheme = scoring::compose(
        scorer,
        gaps::Affine::new(gap_open, gap_extend)?,
        equiv::Equality::new(),
    );
    Engine::new(scheme).align(first, second)
}
