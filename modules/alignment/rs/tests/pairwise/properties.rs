use gapline_alignment_rs::pairwise::alignment::utils::rescore;
use proptest::prelude::*;

use crate::global::{scheme, Engine, Score};

// Highly repetitive inputs under flat scoring have a combinatorial number of optimal alignments
const MAX_ALIGNMENTS: u128 = 2_000;

fn scoring() -> impl Strategy<Value = ((Score, Score), (Score, Score))> {
    ((1..=10, -10..=0), (-8..=0, -3..=0))
}

proptest! {
    #[test]
    fn test_deterministic(
        seq1 in "[ACGT]{0,8}",
        seq2 in "[ACGT]{0,8}",
        (scores, penalties) in scoring()
    ) {
        let (seq1, seq2) = (seq1.as_bytes(), seq2.as_bytes());
        let mut engine = Engine::new(scheme(scores, penalties));
        prop_assume!(engine.count(seq1, seq2).unwrap() <= MAX_ALIGNMENTS);

        let first = engine.align(seq1, seq2).unwrap();
        let second = engine.align(seq1, seq2).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn test_alignment_invariants(
        seq1 in "[ACGT]{0,8}",
        seq2 in "[ACGT]{0,8}",
        (scores, penalties) in scoring()
    ) {
        let (seq1, seq2) = (seq1.as_bytes(), seq2.as_bytes());
        let mut engine = Engine::new(scheme(scores, penalties));
        let total = engine.count(seq1, seq2).unwrap();
        prop_assume!(total <= MAX_ALIGNMENTS);

        let score = engine.score(seq1, seq2).unwrap();
        let alignments = engine.align(seq1, seq2).unwrap();
        prop_assert!(!alignments.is_empty());
        prop_assert_eq!(alignments.len() as u128, total);

        for alignment in &alignments {
            prop_assert_eq!(*alignment.score(), score);
            prop_assert_eq!(alignment.moves().len(), alignment.len());
            prop_assert!(alignment.len() >= seq1.len().max(seq2.len()));
            prop_assert!(alignment.len() <= seq1.len() + seq2.len());

            prop_assert_eq!(alignment.first().copied().collect::<Vec<_>>(), seq1);
            prop_assert_eq!(alignment.second().copied().collect::<Vec<_>>(), seq2);
            prop_assert_eq!(rescore(alignment.pairs(), engine.scoring()).unwrap(), score);
        }
    }

    #[test]
    fn test_symmetric(
        seq1 in "[ACGT]{0,10}",
        seq2 in "[ACGT]{0,10}",
        (scores, penalties) in scoring()
    ) {
        let (seq1, seq2) = (seq1.as_bytes(), seq2.as_bytes());
        let mut engine = Engine::new(scheme(scores, penalties));
        prop_assert_eq!(
            engine.score(seq1, seq2).unwrap(),
            engine.score(seq2, seq1).unwrap()
        );
        prop_assert_eq!(
            engine.count(seq1, seq2).unwrap(),
            engine.count(seq2, seq1).unwrap()
        );
    }
}
