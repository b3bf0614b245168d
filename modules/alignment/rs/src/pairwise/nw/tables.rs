use crate::pairwise::nw::trace::Trace;
use crate::Score;

/// Dense score and traceback matrices of the global alignment, `(seq1.len() + 1) x (seq2.len() + 1)`
/// cells each, stored row by row. Buffers are reused between alignments.
#[derive(Clone, Debug)]
pub struct Tables<S: Score> {
    scores: Vec<S>,
    traces: Vec<Trace>,
    rows: usize,
    cols: usize,
}

impl<S: Score> Tables<S> {
    pub fn new() -> Self {
        Self {
            scores: Vec::new(),
            traces: Vec::new(),
            rows: 0,
            cols: 0,
        }
    }

    /// Resize the tables for sequences of the given lengths, all cells are cleared.
    pub fn reset(&mut self, seq1len: usize, seq2len: usize) {
        self.rows = seq1len + 1;
        self.cols = seq2len + 1;

        self.scores.clear();
        self.scores.resize(self.rows * self.cols, S::zero());

        self.traces.clear();
        self.traces.resize(self.rows * self.cols, Trace::EMPTY);
    }

    #[inline(always)]
    fn index(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.rows && col < self.cols);
        row * self.cols + col
    }

    #[inline(always)]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline(always)]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline(always)]
    pub fn score(&self, row: usize, col: usize) -> S {
        self.scores[self.index(row, col)]
    }

    #[inline(always)]
    pub fn trace(&self, row: usize, col: usize) -> Trace {
        self.traces[self.index(row, col)]
    }

    #[inline(always)]
    pub fn set(&mut self, row: usize, col: usize, score: S, trace: Trace) {
        let ind = self.index(row, col);
        self.scores[ind] = score;
        self.traces[ind] = trace;
    }

    /// Score of the complete global alignment, stored in the bottom-right cell.
    pub fn optimum(&self) -> S {
        self.score(self.rows - 1, self.cols - 1)
    }
}

impl<S: Score> Default for Tables<S> {
    fn default() -> Self {
        Self::new()
    }
}
