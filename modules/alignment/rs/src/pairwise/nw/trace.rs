use std::fmt::{Debug, Formatter};

/// A single step of the traceback, named after the direction in the `(seq1, seq2)` matrix.
#[repr(u8)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
pub enum Move {
    /// Consumes one symbol from each sequence.
    Diagonal = 0b001,
    /// Consumes one symbol from the first sequence, gap in the second.
    Up = 0b010,
    /// Consumes one symbol from the second sequence, gap in the first.
    Left = 0b100,
}

impl Move {
    /// Traceback exploration order.
    pub const ALL: [Move; 3] = [Move::Diagonal, Move::Up, Move::Left];

    /// Cell the move originates from when it ends at `(row, col)`.
    #[inline(always)]
    pub fn predecessor(&self, row: usize, col: usize) -> (usize, usize) {
        match self {
            Move::Diagonal => (row - 1, col - 1),
            Move::Up => (row - 1, col),
            Move::Left => (row, col - 1),
        }
    }

    #[inline(always)]
    pub fn is_gap(&self) -> bool {
        !matches!(self, Move::Diagonal)
    }
}

/// Set of optimal moves leading into a cell, packed into a single byte.
/// The origin of the matrix holds the [`Trace::DONE`] sentinel instead of moves.
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct Trace(u8);

impl Trace {
    pub const EMPTY: Trace = Trace(0);
    pub const DONE: Trace = Trace(0b1000);

    #[inline(always)]
    pub fn only(mv: Move) -> Self {
        Trace(mv as u8)
    }

    #[inline(always)]
    pub fn insert(&mut self, mv: Move) {
        debug_assert!(!self.is_done());
        self.0 |= mv as u8;
    }

    #[inline(always)]
    pub fn contains(&self, mv: Move) -> bool {
        self.0 & (mv as u8) != 0
    }

    /// True if `mv` is the single optimal move, i.e. every optimal path into the cell ends with it.
    #[inline(always)]
    pub fn is_only(&self, mv: Move) -> bool {
        self.0 == mv as u8
    }

    #[inline(always)]
    pub fn is_done(&self) -> bool {
        *self == Trace::DONE
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Number of recorded moves, zero for the sentinel.
    #[inline(always)]
    pub fn len(&self) -> usize {
        (self.0 & 0b111).count_ones() as usize
    }

    /// Recorded moves in the traceback exploration order.
    pub fn moves(&self) -> impl Iterator<Item = Move> {
        let this = *self;
        Move::ALL.into_iter().filter(move |mv| this.contains(*mv))
    }
}

impl FromIterator<Move> for Trace {
    fn from_iter<T: IntoIterator<Item = Move>>(iter: T) -> Self {
        let mut trace = Trace::EMPTY;
        for mv in iter {
            trace.insert(mv);
        }
        trace
    }
}

impl Debug for Trace {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.is_done() {
            return write!(f, "Trace(DONE)");
        }
        f.debug_set().entries(self.moves()).finish()
    }
}
