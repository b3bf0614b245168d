use eyre::{bail, eyre, Result};

use crate::pairwise::nw::Move;
use crate::pairwise::scoring;
use crate::Score;

use super::alignment::Pair;

/// Scores alignment columns from scratch, without the alignment matrices.
///
/// Aligned symbols are scored by the scheme. A gap run costs `gap_open` for its first column and
/// `gap_extend` for every following one, except for a run that starts the alignment: it costs
/// `gap_open + gap_extend * len`, exactly as the border of the global alignment matrix.
pub fn rescore<S, Symbol, Scheme>(pairs: &[Pair<'_, Symbol>], scheme: &Scheme) -> Result<S>
where
    S: Score,
    Scheme: scoring::Scheme<Score = S, Symbol = Symbol> + ?Sized,
{
    let (open, extend) = (scheme.gap_open(), scheme.gap_extend());
    let leading_open = open
        .checked_add(&extend)
        .ok_or_else(|| eyre!("Score overflow: {open} + {extend}"))?;

    let (mut pos1, mut pos2) = (0, 0);
    let mut previous = None;
    let mut total = S::zero();

    for (column, pair) in pairs.iter().enumerate() {
        let mv = match *pair {
            (Some(_), Some(_)) => Move::Diagonal,
            (Some(_), None) => Move::Up,
            (None, Some(_)) => Move::Left,
            (None, None) => bail!("Alignment column {column} has no symbols"),
        };

        let delta = match (*pair, mv) {
            ((Some(a), Some(b)), _) => scheme.score(pos1, a, pos2, b),
            _ if previous == Some(mv) => extend,
            _ if column == 0 => leading_open,
            _ => open,
        };
        total = total
            .checked_add(&delta)
            .ok_or_else(|| eyre!("Score overflow at alignment column {column}"))?;

        let (consumed1, consumed2) = match mv {
            Move::Diagonal => (1, 1),
            Move::Up => (1, 0),
            Move::Left => (0, 1),
        };
        pos1 += consumed1;
        pos2 += consumed2;
        previous = Some(mv);
    }
    Ok(total)
}
