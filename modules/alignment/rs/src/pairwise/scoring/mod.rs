pub use delegate::Delegate;

pub use crate::Score;

mod delegate;
pub mod equiv;
pub mod gaps;
pub mod symbols;

/// Default score of two equal symbols.
pub const MATCH: i32 = 10;
/// Default score of two different symbols.
pub const MISMATCH: i32 = -100;
/// Default penalty for starting a gap run.
pub const GAP_OPEN: i32 = -5;
/// Default penalty for every gap that continues a run.
pub const GAP_EXTEND: i32 = -1;

pub trait Scheme:
    gaps::Scorer<Score = <Self as Scheme>::Score>
    + symbols::Scorer<Score = <Self as Scheme>::Score, Symbol = <Self as Scheme>::Symbol>
    + equiv::Classifier<Symbol = <Self as Scheme>::Symbol>
{
    type Score: Score;
    type Symbol;
}

pub fn compose<ScoreType, Symbol, S, G, E>(
    symbols: S,
    gaps: G,
    equiv: E,
) -> Delegate<ScoreType, Symbol, S, G, E>
where
    ScoreType: Score,
    S: symbols::Scorer<Symbol = Symbol, Score = ScoreType>,
    G: gaps::Scorer<Score = ScoreType>,
    E: equiv::Classifier<Symbol = Symbol>,
{
    Delegate::new(symbols, gaps, equiv)
}

/// Builds an equality based symbol scorer: `match_score` if `equals(a, b)`, `mismatch_score` otherwise.
pub fn make_scorer<S, Symbol, F>(
    match_score: S,
    mismatch_score: S,
    equals: F,
) -> symbols::Predicate<S, Symbol, F>
where
    S: Score,
    F: Fn(&Symbol, &Symbol) -> bool,
{
    symbols::Predicate::new(match_score, mismatch_score, equals)
}
