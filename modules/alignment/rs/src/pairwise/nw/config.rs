use derive_getters::Dissolve;
use derive_more::Constructor;

/// Resource limits of the global aligner. `None` disables the corresponding check.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default, Hash, Constructor, Dissolve)]
pub struct Config {
    /// Maximum number of cells in each of the score and traceback matrices, `(n + 1) * (m + 1)`.
    pub max_cells: Option<usize>,
    /// Maximum number of optimal alignments to enumerate. Checked before the enumeration starts.
    pub max_alignments: Option<usize>,
}

impl Config {
    pub fn set_max_cells(mut self, max_cells: usize) -> Self {
        self.max_cells = Some(max_cells);
        self
    }

    pub fn set_max_alignments(mut self, max_alignments: usize) -> Self {
        self.max_alignments = Some(max_alignments);
        self
    }
}
