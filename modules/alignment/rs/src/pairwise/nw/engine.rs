use std::marker::PhantomData;

use eyre::{ensure, eyre, Result};

use crate::pairwise::nw::{algo, traceback, Config, Tables};
use crate::pairwise::{scoring, Alignment};
use crate::{Alignable, Score};

// Enumerations above this size are reported, they are usually a sign of a degenerate scoring
const LARGE_OUTPUT: usize = 100_000;

/// Global (Needleman-Wunsch) aligner with affine gaps that reports every optimal alignment.
/// Matrices are kept between calls, an engine is meant to be reused for many sequence pairs.
pub struct Engine<S, Smb, Scheme>
where
    S: Score,
    Scheme: scoring::Scheme<Score = S, Symbol = Smb>,
{
    scoring: Scheme,
    config: Config,
    tables: Tables<S>,
    _phantom: PhantomData<Smb>,
}

impl<S, Smb, Scheme> Engine<S, Smb, Scheme>
where
    S: Score,
    Scheme: scoring::Scheme<Score = S, Symbol = Smb>,
{
    pub fn new(scoring: Scheme) -> Self {
        Self {
            scoring,
            config: Config::default(),
            tables: Tables::new(),
            _phantom: Default::default(),
        }
    }

    pub fn with_scoring(&mut self, scoring: Scheme) {
        self.scoring = scoring;
    }

    pub fn with_config(&mut self, config: Config) {
        self.config = config;
    }

    pub fn scoring(&self) -> &Scheme {
        &self.scoring
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Score and traceback matrices of the last alignment.
    pub fn tables(&self) -> &Tables<S> {
        &self.tables
    }

    fn scan<S1, S2>(&mut self, seq1: &S1, seq2: &S2) -> Result<()>
    where
        S1: Alignable<Symbol = Smb> + ?Sized,
        S2: Alignable<Symbol = Smb> + ?Sized,
    {
        let (rows, cols) = (seq1.len() + 1, seq2.len() + 1);
        let cells = rows
            .checked_mul(cols)
            .ok_or_else(|| eyre!("Alignment matrix {rows} x {cols} is too large"))?;
        if let Some(max) = self.config.max_cells {
            ensure!(
                cells <= max,
                "Alignment matrix {rows} x {cols} has {cells} cells, the limit is {max}"
            );
        }

        log::debug!("Filling {rows} x {cols} global alignment matrices");
        self.tables.reset(seq1.len(), seq2.len());
        algo::initialize(&mut self.tables, &self.scoring)?;
        algo::fill(&mut self.tables, seq1, seq2, &self.scoring)
    }

    /// Optimal global alignment score.
    pub fn score<S1, S2>(&mut self, seq1: &S1, seq2: &S2) -> Result<S>
    where
        S1: Alignable<Symbol = Smb> + ?Sized,
        S2: Alignable<Symbol = Smb> + ?Sized,
    {
        self.scan(seq1, seq2)?;
        Ok(self.tables.optimum())
    }

    /// Number of optimal global alignments, without enumerating them. Saturates at `u128::MAX`.
    pub fn count<S1, S2>(&mut self, seq1: &S1, seq2: &S2) -> Result<u128>
    where
        S1: Alignable<Symbol = Smb> + ?Sized,
        S2: Alignable<Symbol = Smb> + ?Sized,
    {
        self.scan(seq1, seq2)?;
        Ok(traceback::count(&self.tables, &self.scoring))
    }

    /// All optimal global alignments in a deterministic order. There is always at least one,
    /// aligning two empty sequences yields a single empty alignment.
    pub fn align<'a, S1, S2>(
        &mut self,
        seq1: &'a S1,
        seq2: &'a S2,
    ) -> Result<Vec<Alignment<'a, Smb, S>>>
    where
        Smb: 'a,
        S1: Alignable<Symbol = Smb> + ?Sized,
        S2: Alignable<Symbol = Smb> + ?Sized,
    {
        self.scan(seq1, seq2)?;

        if let Some(max) = self.config.max_alignments {
            let total = traceback::count(&self.tables, &self.scoring);
            ensure!(
                total <= max as u128,
                "Found {total} optimal alignments, the limit is {max}"
            );
        }

        let score = self.tables.optimum();
        let alignments: Vec<_> = traceback::Paths::new(&self.tables, &self.scoring)
            .map(|moves| Alignment::from_moves(score, moves, seq1, seq2))
            .collect();

        log::debug!(
            "Enumerated {} optimal alignment(s) with score {score}",
            alignments.len()
        );
        if alignments.len() > LARGE_OUTPUT {
            log::warn!(
                "Enumerated {} optimal alignments of {} x {} sequences, consider setting Config::max_alignments",
                alignments.len(),
                seq1.len(),
                seq2.len()
            );
        }
        Ok(alignments)
    }
}
