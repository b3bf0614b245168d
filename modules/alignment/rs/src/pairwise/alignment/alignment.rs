use derive_getters::{Dissolve, Getters};

use crate::pairwise::nw::Move;
use crate::pairwise::scoring::equiv;
use crate::{Alignable, Score};

use super::op::Op;
use super::step::Step;

/// A column of the alignment: symbols from the first and the second sequence, `None` is a gap.
pub type Pair<'a, Symbol> = (Option<&'a Symbol>, Option<&'a Symbol>);

/// A global alignment between two sequences. Columns are ordered from the sequence starts to
/// their ends and reference symbols of the aligned sequences.
#[derive(Clone, Eq, PartialEq, Debug, Getters, Dissolve)]
pub struct Alignment<'a, Symbol, S: Score> {
    /// Alignment score, equal for all co-optimal alignments of the same sequences.
    score: S,
    /// Traceback moves from the matrix origin to the bottom-right cell.
    moves: Vec<Move>,
    /// Aligned symbols, one pair per move.
    pairs: Vec<Pair<'a, Symbol>>,
}

impl<'a, Symbol, S: Score> Alignment<'a, Symbol, S> {
    /// Converts a complete traceback path into aligned pairs of symbols.
    pub fn from_moves<S1, S2>(score: S, moves: Vec<Move>, seq1: &'a S1, seq2: &'a S2) -> Self
    where
        S1: Alignable<Symbol = Symbol> + ?Sized,
        S2: Alignable<Symbol = Symbol> + ?Sized,
    {
        let (mut pos1, mut pos2) = (0, 0);
        let mut pairs = Vec::with_capacity(moves.len());
        for mv in &moves {
            let pair = match mv {
                Move::Diagonal => {
                    pos1 += 1;
                    pos2 += 1;
                    (Some(seq1.at(pos1 - 1)), Some(seq2.at(pos2 - 1)))
                }
                Move::Up => {
                    pos1 += 1;
                    (Some(seq1.at(pos1 - 1)), None)
                }
                Move::Left => {
                    pos2 += 1;
                    (None, Some(seq2.at(pos2 - 1)))
                }
            };
            pairs.push(pair);
        }
        debug_assert_eq!((pos1, pos2), (seq1.len(), seq2.len()));

        Self {
            score,
            moves,
            pairs,
        }
    }

    /// Number of alignment columns.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Symbols of the first sequence, gaps removed.
    pub fn first(&self) -> impl Iterator<Item = &'a Symbol> + '_ {
        self.pairs.iter().filter_map(|(a, _)| *a)
    }

    /// Symbols of the second sequence, gaps removed.
    pub fn second(&self) -> impl Iterator<Item = &'a Symbol> + '_ {
        self.pairs.iter().filter_map(|(_, b)| *b)
    }

    /// Operation for each column, aligned symbols are labeled by the classifier.
    pub fn ops<C>(&self, classifier: &C) -> Vec<Op>
    where
        C: equiv::Classifier<Symbol = Symbol> + ?Sized,
    {
        self.pairs
            .iter()
            .map(|pair| match *pair {
                (Some(a), Some(b)) => classifier.classify(a, b).into(),
                (Some(_), None) => Op::GapSecond,
                (None, _) => Op::GapFirst,
            })
            .collect()
    }

    /// Run-length encoded operations.
    pub fn steps<C>(&self, classifier: &C) -> Vec<Step>
    where
        C: equiv::Classifier<Symbol = Symbol> + ?Sized,
    {
        Step::from_ops(self.ops(classifier))
    }

    /// Returns the RLE representation of the alignment, e.g. `1^3=2^1v1=1v`.
    pub fn rle<C>(&self, classifier: &C) -> String
    where
        C: equiv::Classifier<Symbol = Symbol> + ?Sized,
    {
        Step::rle_string(self.steps(classifier).iter())
    }

    pub fn into_pairs(self) -> Vec<Pair<'a, Symbol>> {
        self.pairs
    }
}
