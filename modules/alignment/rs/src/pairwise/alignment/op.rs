use std::fmt::{Display, Formatter};

/// Kind of an alignment column, used for reporting and RLE strings.
#[repr(u8)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
pub enum Op {
    /// Symbol of the second sequence against a gap, `v`.
    GapFirst,
    /// Symbol of the first sequence against a gap, `^`.
    GapSecond,
    /// Different symbols that the classifier treats as similar, `~`.
    Equivalent,
    /// Identical symbols, `=`.
    Match,
    /// Different symbols, `X`.
    Mismatch,
}

impl Op {
    /// Both sequences advance, i.e. a diagonal move in the alignment matrix.
    pub fn is_diagonal(&self) -> bool {
        matches!(self, Op::Match | Op::Mismatch | Op::Equivalent)
    }

    pub fn is_gap(&self) -> bool {
        !self.is_diagonal()
    }

    pub fn symbol(&self) -> char {
        match self {
            Op::GapFirst => 'v',
            Op::GapSecond => '^',
            Op::Equivalent => '~',
            Op::Match => '=',
            Op::Mismatch => 'X',
        }
    }

    /// Number of symbols consumed from the first and the second sequence.
    pub fn consumes(&self) -> (usize, usize) {
        match self {
            Op::GapFirst => (0, 1),
            Op::GapSecond => (1, 0),
            Op::Equivalent | Op::Match | Op::Mismatch => (1, 1),
        }
    }

    /// The same column seen from the swapped pair of sequences.
    pub fn swapped(&self) -> Self {
        match self {
            Op::GapFirst => Op::GapSecond,
            Op::GapSecond => Op::GapFirst,
            other => *other,
        }
    }
}

impl Display for Op {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl TryFrom<char> for Op {
    type Error = ();

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            'v' => Ok(Op::GapFirst),
            '^' => Ok(Op::GapSecond),
            '~' => Ok(Op::Equivalent),
            '=' => Ok(Op::Match),
            'X' => Ok(Op::Mismatch),
            _ => Err(()),
        }
    }
}
