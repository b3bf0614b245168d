use crate::pairwise::nw::tables::Tables;
use crate::pairwise::nw::trace::{Move, Trace};
use crate::pairwise::scoring::gaps;
use crate::Score;

// Only the first gap of a run may be charged as an opening. If the filler charged `gap_open` for
// a gap move (its predecessor had other optimal moves), continuing the same gap out of the
// predecessor would realise a different score than the one stored in the matrix, so such routes
// are not followed. The filler guarantees that the predecessor then has another move left.
// With equal open and extend penalties every route realises the stored score.
#[inline(always)]
fn forbidden_after(affine: bool, predecessor: Trace, mv: Move) -> Option<Move> {
    if affine && mv.is_gap() && !predecessor.is_only(mv) {
        Some(mv)
    } else {
        None
    }
}

#[inline(always)]
fn is_affine<S: Score, G: gaps::Scorer<Score = S> + ?Sized>(gaps: &G) -> bool {
    gaps.gap_open() != gaps.gap_extend()
}

#[derive(Clone, Copy, Debug)]
struct Frame {
    row: usize,
    col: usize,
    forbidden: Option<Move>,
    // Index of the next move in Move::ALL to explore
    next: usize,
}

/// Depth-first enumeration of all optimal traceback paths, from the bottom-right cell to the
/// origin. Each item lists the moves in the forward (origin to destination) order. Paths are
/// produced lazily in a deterministic order: at every cell Diagonal is explored before Up and
/// Up before Left.
pub struct Paths<'a, S: Score> {
    tables: &'a Tables<S>,
    affine: bool,
    stack: Vec<Frame>,
    // Moves taken so far, the i-th move leads from stack[i] to stack[i + 1]
    moves: Vec<Move>,
}

impl<'a, S: Score> Paths<'a, S> {
    /// Paths through filled tables. `gaps` must be the gap scorer the tables were filled with.
    pub fn new<G: gaps::Scorer<Score = S> + ?Sized>(tables: &'a Tables<S>, gaps: &G) -> Self {
        let (rows, cols) = (tables.rows(), tables.cols());
        let mut stack = Vec::with_capacity(rows + cols);
        if rows > 0 && cols > 0 {
            stack.push(Frame {
                row: rows - 1,
                col: cols - 1,
                forbidden: None,
                next: 0,
            });
        }
        Self {
            tables,
            affine: is_affine(gaps),
            stack,
            moves: Vec::with_capacity(rows + cols),
        }
    }

    fn backtrack(&mut self) {
        self.stack.pop();
        self.moves.pop();
    }
}

impl<S: Score> Iterator for Paths<'_, S> {
    type Item = Vec<Move>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let frame = self.stack.last_mut()?;
            let trace = self.tables.trace(frame.row, frame.col);

            if trace.is_done() {
                let path = self.moves.iter().rev().copied().collect();
                self.backtrack();
                return Some(path);
            }
            debug_assert!(!trace.is_empty(), "Unfilled cell in the traceback");

            let mut chosen = None;
            while frame.next < Move::ALL.len() {
                let mv = Move::ALL[frame.next];
                frame.next += 1;
                if trace.contains(mv) && frame.forbidden != Some(mv) {
                    chosen = Some(mv);
                    break;
                }
            }

            match chosen {
                None => self.backtrack(),
                Some(mv) => {
                    let (row, col) = mv.predecessor(frame.row, frame.col);
                    let forbidden = forbidden_after(self.affine, self.tables.trace(row, col), mv);
                    self.moves.push(mv);
                    self.stack.push(Frame {
                        row,
                        col,
                        forbidden,
                        next: 0,
                    });
                }
            }
        }
    }
}

#[inline(always)]
fn slot(forbidden: Option<Move>) -> usize {
    match forbidden {
        None => 0,
        Some(Move::Up) => 1,
        Some(Move::Left) => 2,
        Some(Move::Diagonal) => unreachable!("Diagonal moves are never forbidden"),
    }
}

/// Number of paths [`Paths`] would produce, computed in O(rows * cols) time and O(cols) memory.
/// Saturates at `u128::MAX`.
pub fn count<S, G>(tables: &Tables<S>, gaps: &G) -> u128
where
    S: Score,
    G: gaps::Scorer<Score = S> + ?Sized,
{
    let (rows, cols) = (tables.rows(), tables.cols());
    if rows == 0 || cols == 0 {
        return 0;
    }
    let affine = is_affine(gaps);

    // Per cell: number of paths to the origin when no move / Up / Left is forbidden at the cell
    let mut previous: Vec<[u128; 3]> = vec![[0; 3]; cols];
    let mut current: Vec<[u128; 3]> = vec![[0; 3]; cols];

    for row in 0..rows {
        for col in 0..cols {
            let trace = tables.trace(row, col);
            if trace.is_done() {
                current[col] = [1; 3];
                continue;
            }

            let mut totals = [0u128; 3];
            for mv in trace.moves() {
                let (prow, pcol) = mv.predecessor(row, col);
                let paths = if prow == row {
                    current[pcol]
                } else {
                    previous[pcol]
                };
                let paths = paths[slot(forbidden_after(affine, tables.trace(prow, pcol), mv))];

                for (ind, forbidden) in [None, Some(Move::Up), Some(Move::Left)]
                    .into_iter()
                    .enumerate()
                {
                    if forbidden != Some(mv) {
                        totals[ind] = totals[ind].saturating_add(paths);
                    }
                }
            }
            current[col] = totals;
        }
        std::mem::swap(&mut previous, &mut current);
    }
    previous[cols - 1][0]
}
