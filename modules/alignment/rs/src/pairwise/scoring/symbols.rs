use std::marker::PhantomData;

use crate::pairwise::scoring::{Score, MATCH, MISMATCH};

pub trait Scorer {
    type Score: Score;
    type Symbol;

    fn score(
        &self,
        seq1pos: usize,
        s1: &Self::Symbol,
        seq2pos: usize,
        s2: &Self::Symbol,
    ) -> Self::Score;
}

pub trait PosInvariantScorer {
    type SymScore: Score;
    type Symbol;

    fn score(&self, s1: &Self::Symbol, s2: &Self::Symbol) -> Self::SymScore;
}

impl<T: PosInvariantScorer> Scorer for T {
    type Score = <Self as PosInvariantScorer>::SymScore;
    type Symbol = <Self as PosInvariantScorer>::Symbol;

    #[inline(always)]
    fn score(&self, _: usize, s1: &Self::Symbol, _: usize, s2: &Self::Symbol) -> Self::Score {
        PosInvariantScorer::score(self, s1, s2)
    }
}

/// Scores symbols by their `PartialEq` equality.
pub struct Equality<S: Score, Symbol> {
    pub equal: S,
    pub different: S,
    _phantom: PhantomData<Symbol>,
}

impl<S: Score, Symbol: PartialEq> PosInvariantScorer for Equality<S, Symbol> {
    type SymScore = S;
    type Symbol = Symbol;

    #[inline(always)]
    fn score(&self, a: &Self::Symbol, b: &Self::Symbol) -> Self::SymScore {
        if a == b { self.equal } else { self.different }
    }
}

impl<S: Score, Symbol: PartialEq> Equality<S, Symbol> {
    pub fn new(equal: S, different: S) -> Self {
        Self {
            equal,
            different,
            _phantom: Default::default(),
        }
    }
}

impl<Symbol: PartialEq> Default for Equality<i32, Symbol> {
    fn default() -> Self {
        Self::new(MATCH, MISMATCH)
    }
}

/// Scores symbols by a caller supplied equality predicate.
pub struct Predicate<S: Score, Symbol, F: Fn(&Symbol, &Symbol) -> bool> {
    pub equal: S,
    pub different: S,
    equals: F,
    _phantom: PhantomData<Symbol>,
}

impl<S, Symbol, F> Predicate<S, Symbol, F>
where
    S: Score,
    F: Fn(&Symbol, &Symbol) -> bool,
{
    pub fn new(equal: S, different: S, equals: F) -> Self {
        Self {
            equal,
            different,
            equals,
            _phantom: Default::default(),
        }
    }
}

impl<S, Symbol, F> PosInvariantScorer for Predicate<S, Symbol, F>
where
    S: Score,
    F: Fn(&Symbol, &Symbol) -> bool,
{
    type SymScore = S;
    type Symbol = Symbol;

    #[inline(always)]
    fn score(&self, a: &Self::Symbol, b: &Self::Symbol) -> Self::SymScore {
        if (self.equals)(a, b) {
            self.equal
        } else {
            self.different
        }
    }
}

/// Arbitrary pure scoring function, see [`from_fn`].
pub struct FromFn<S: Score, Symbol, F: Fn(&Symbol, &Symbol) -> S> {
    func: F,
    _phantom: PhantomData<(S, Symbol)>,
}

/// Wraps a closure into a symbol scorer. The closure must be deterministic.
pub fn from_fn<S, Symbol, F>(func: F) -> FromFn<S, Symbol, F>
where
    S: Score,
    F: Fn(&Symbol, &Symbol) -> S,
{
    FromFn {
        func,
        _phantom: Default::default(),
    }
}

impl<S, Symbol, F> PosInvariantScorer for FromFn<S, Symbol, F>
where
    S: Score,
    F: Fn(&Symbol, &Symbol) -> S,
{
    type SymScore = S;
    type Symbol = Symbol;

    #[inline(always)]
    fn score(&self, a: &Self::Symbol, b: &Self::Symbol) -> Self::SymScore {
        (self.func)(a, b)
    }
}
