use std::marker::PhantomData;

use crate::pairwise;

#[repr(u8)]
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Type {
    Match,
    Mismatch,
    Equivalent,
}

/// Decides how an aligned pair of symbols is reported, it never affects scores.
pub trait Classifier {
    type Symbol;

    fn classify(&self, s1: &Self::Symbol, s2: &Self::Symbol) -> Type;
}

pub struct Equality<Symbol> {
    _phantom: PhantomData<Symbol>,
}

impl<Symbol: PartialEq> Equality<Symbol> {
    pub fn new() -> Self {
        Self {
            _phantom: Default::default(),
        }
    }
}

impl<Symbol: PartialEq> Default for Equality<Symbol> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Symbol: PartialEq> Classifier for Equality<Symbol> {
    type Symbol = Symbol;

    #[inline(always)]
    fn classify(&self, s1: &Self::Symbol, s2: &Self::Symbol) -> Type {
        if *s1 == *s2 {
            Type::Match
        } else {
            Type::Mismatch
        }
    }
}

/// Classification by an arbitrary function, e.g. to report similar but not identical symbols
/// as [`Type::Equivalent`].
pub struct Predicate<Symbol, F: Fn(&Symbol, &Symbol) -> Type> {
    func: F,
    _phantom: PhantomData<Symbol>,
}

impl<Symbol, F: Fn(&Symbol, &Symbol) -> Type> Predicate<Symbol, F> {
    pub fn new(func: F) -> Self {
        Self {
            func,
            _phantom: Default::default(),
        }
    }
}

impl<Symbol, F: Fn(&Symbol, &Symbol) -> Type> Classifier for Predicate<Symbol, F> {
    type Symbol = Symbol;

    #[inline(always)]
    fn classify(&self, s1: &Self::Symbol, s2: &Self::Symbol) -> Type {
        (self.func)(s1, s2)
    }
}

impl From<Type> for pairwise::Op {
    fn from(value: Type) -> Self {
        match value {
            Type::Match => pairwise::Op::Match,
            Type::Mismatch => pairwise::Op::Mismatch,
            Type::Equivalent => pairwise::Op::Equivalent,
        }
    }
}
