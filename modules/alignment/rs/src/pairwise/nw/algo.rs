use eyre::{eyre, Result};

use gapline_core_rs::num::from_len;

use crate::pairwise::nw::tables::Tables;
use crate::pairwise::nw::trace::{Move, Trace};
use crate::pairwise::scoring::{self, gaps};
use crate::{Alignable, Score};

// The global algorithm runs row-by-row: a cell is computed strictly after its up, left and
// up-left neighbours, the border is seeded before any interior cell.

#[inline(always)]
fn accumulate<S: Score>(score: S, delta: S, row: usize, col: usize) -> Result<S> {
    score
        .checked_add(&delta)
        .ok_or_else(|| eyre!("Score overflow at cell ({row}, {col}): {score} + {delta}"))
}

fn border<S: Score>(open: S, extend: S, len: usize) -> Result<S> {
    from_len::<S>(len)
        .and_then(|x| extend.checked_mul(&x))
        .and_then(|x| open.checked_add(&x))
        .ok_or_else(|| eyre!("Score overflow: a leading gap of length {len} doesn't fit the score type"))
}

/// Seeds row 0 and column 0 with all-gap prefixes: `open + extend * len`.
pub fn initialize<S, G>(tables: &mut Tables<S>, gaps: &G) -> Result<()>
where
    S: Score,
    G: gaps::Scorer<Score = S> + ?Sized,
{
    let (open, extend) = (gaps.gap_open(), gaps.gap_extend());

    tables.set(0, 0, S::zero(), Trace::DONE);
    for row in 1..tables.rows() {
        tables.set(row, 0, border(open, extend, row)?, Trace::only(Move::Up));
    }
    for col in 1..tables.cols() {
        tables.set(0, col, border(open, extend, col)?, Trace::only(Move::Left));
    }
    Ok(())
}

/// Fills the interior of initialized tables. Every move whose candidate reaches the cell optimum
/// is recorded. A gap move is charged `extend` only when the predecessor's single optimal move is
/// the same gap move, otherwise the run is (re)opened.
pub fn fill<S, Smb, Scheme, S1, S2>(
    tables: &mut Tables<S>,
    seq1: &S1,
    seq2: &S2,
    scheme: &Scheme,
) -> Result<()>
where
    S: Score,
    Scheme: scoring::Scheme<Score = S, Symbol = Smb> + ?Sized,
    S1: Alignable<Symbol = Smb> + ?Sized,
    S2: Alignable<Symbol = Smb> + ?Sized,
{
    debug_assert_eq!(tables.rows(), seq1.len() + 1);
    debug_assert_eq!(tables.cols(), seq2.len() + 1);

    let (open, extend) = (scheme.gap_open(), scheme.gap_extend());
    let penalty = |predecessor: Trace, mv: Move| {
        if predecessor.is_only(mv) {
            extend
        } else {
            open
        }
    };

    for row in 1..tables.rows() {
        let s1 = seq1.at(row - 1);
        for col in 1..tables.cols() {
            let s2 = seq2.at(col - 1);

            let diagonal = accumulate(
                tables.score(row - 1, col - 1),
                scheme.score(row - 1, s1, col - 1, s2),
                row,
                col,
            )?;
            let up = accumulate(
                tables.score(row - 1, col),
                penalty(tables.trace(row - 1, col), Move::Up),
                row,
                col,
            )?;
            let left = accumulate(
                tables.score(row, col - 1),
                penalty(tables.trace(row, col - 1), Move::Left),
                row,
                col,
            )?;

            let best = diagonal.max(up).max(left);
            let trace = [(Move::Diagonal, diagonal), (Move::Up, up), (Move::Left, left)]
                .into_iter()
                .filter_map(|(mv, candidate)| (candidate == best).then_some(mv))
                .collect();
            tables.set(row, col, best, trace);
        }
    }
    Ok(())
}
