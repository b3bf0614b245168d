use std::borrow::Borrow;
use std::fmt::{Display, Formatter};

use derive_getters::{Dissolve, Getters};
use eyre::{ensure, Result};
use itertools::Itertools;

use super::op::Op;

/// A run of identical operations in the alignment
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash, Getters, Dissolve)]
pub struct Step {
    /// The length of the operation, e.g. the number of consequent matches or gaps.
    /// Guaranteed to be greater than zero.
    len: usize,
    /// The alignment operation
    op: Op,
}

impl Step {
    pub fn new(op: Op, len: usize) -> Result<Self> {
        ensure!(len > 0, "Step length must be greater than zero");
        Ok(Self { len, op })
    }

    /// Run-length encode a sequence of operations.
    pub fn from_ops(ops: impl IntoIterator<Item = Op>) -> Vec<Step> {
        ops.into_iter()
            .dedup_with_count()
            .map(|(len, op)| Step { len, op })
            .collect()
    }

    pub fn rle_string(steps: impl Iterator<Item: Borrow<Step>>) -> String {
        // 2 symbols is an average length of a step
        // 1 is the length of the symbol
        let hint = match steps.size_hint() {
            (_, Some(upper)) => upper * 3,
            (lower, _) => lower * 3,
        };

        let mut result = String::with_capacity(hint);
        for step in steps {
            let step = step.borrow();
            result.push_str(&step.len.to_string());
            result.push(step.op.symbol());
        }
        result
    }
}

impl Display for Step {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.len, self.op)
    }
}
