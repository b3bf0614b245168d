use gapline_alignment_rs::pairwise::alignment::utils::rescore;
use gapline_alignment_rs::pairwise::scoring::{self, equiv, gaps, symbols};
use gapline_alignment_rs::pairwise::{alignment, nw, Pair};

pub type Score = i32;
pub type Symbol = u8;

pub type Scheme = scoring::Delegate<
    Score,
    Symbol,
    symbols::Equality<Score, Symbol>,
    gaps::Affine<Score>,
    equiv::Equality<Symbol>,
>;
pub type Engine = nw::Engine<Score, Symbol, Scheme>;

pub fn invrle(rle: &str) -> String {
    let gapfirst = alignment::Op::symbol(&alignment::Op::GapFirst);
    let gapsecond = alignment::Op::symbol(&alignment::Op::GapSecond);
    rle.chars()
        .map(|x| {
            if x == gapfirst {
                gapsecond
            } else if x == gapsecond {
                gapfirst
            } else {
                x
            }
        })
        .collect::<String>()
}

pub fn scheme(scores: (Score, Score), penalties: (Score, Score)) -> Scheme {
    scoring::compose(
        symbols::Equality::new(scores.0, scores.1),
        gaps::Affine::new(penalties.0, penalties.1).unwrap(),
        equiv::Equality::new(),
    )
}

struct Workload<'a> {
    seq1: &'a [u8],
    seq2: &'a [u8],
    score: Score,
    rle: Vec<&'a str>,
}

fn ensure(engine: &mut Engine, w: Workload<'_>) {
    let mut expected: Vec<String> = w.rle.iter().map(|x| x.to_string()).collect();
    expected.sort();
    let mut inverted: Vec<String> = w.rle.iter().map(|x| invrle(x)).collect();
    inverted.sort();

    for (seq1, seq2, rle) in [(w.seq1, w.seq2, &expected), (w.seq2, w.seq1, &inverted)] {
        let alignments = engine.align(seq1, seq2).unwrap();
        assert_eq!(engine.count(seq1, seq2).unwrap(), alignments.len() as u128);

        let mut result = Vec::with_capacity(alignments.len());
        for alignment in &alignments {
            assert_eq!(*alignment.score(), w.score);
            assert_eq!(rescore(alignment.pairs(), engine.scoring()).unwrap(), w.score);
            assert_eq!(alignment.first().copied().collect::<Vec<_>>(), seq1);
            assert_eq!(alignment.second().copied().collect::<Vec<_>>(), seq2);
            result.push(alignment.rle(engine.scoring()));
        }
        result.sort();
        assert_eq!(&result, rle, "{:?} & {:?}", seq1, seq2);
    }
}

#[test]
fn test_degenerate() {
    let empty: [&str; 0] = [];

    let alignments = nw::align(&empty, &empty).unwrap();
    assert_eq!(alignments.len(), 1);
    assert!(alignments[0].is_empty());
    assert_eq!(*alignments[0].score(), 0);

    let alignments = nw::align(&["A"], &empty).unwrap();
    assert_eq!(alignments.len(), 1);
    assert_eq!(alignments[0].pairs(), &vec![(Some(&"A"), None)]);
    assert_eq!(*alignments[0].score(), -6);

    let alignments = nw::align(&empty, &["B"]).unwrap();
    assert_eq!(alignments.len(), 1);
    assert_eq!(alignments[0].pairs(), &vec![(None, Some(&"B"))]);
    assert_eq!(*alignments[0].score(), -6);
}

#[test]
fn test_reference_scenario() {
    let seq1 = ["A", "B", "C", "D", "E", "F", "G"];
    let seq2 = ["B", "C", "D", "X", "G", "H"];

    let alignments = nw::align(&seq1, &seq2).unwrap();
    assert_eq!(alignments.len(), 1);

    let expected: Vec<Pair<'_, &str>> = vec![
        (Some(&"A"), None),
        (Some(&"B"), Some(&"B")),
        (Some(&"C"), Some(&"C")),
        (Some(&"D"), Some(&"D")),
        (Some(&"E"), None),
        (Some(&"F"), None),
        (None, Some(&"X")),
        (Some(&"G"), Some(&"G")),
        (None, Some(&"H")),
    ];
    assert_eq!(alignments[0].pairs(), &expected);
    assert_eq!(*alignments[0].score(), 18);
    assert_eq!(
        alignments[0].rle(&equiv::Equality::new()),
        "1^3=2^1v1=1v"
    );
}

#[test]
fn test_ties() {
    let alignments = nw::align(b"A".as_slice(), b"B".as_slice()).unwrap();
    let pairs: Vec<_> = alignments.iter().map(|x| x.pairs().clone()).collect();
    assert_eq!(
        pairs,
        vec![
            vec![(None, Some(&b'B')), (Some(&b'A'), None)],
            vec![(Some(&b'A'), None), (None, Some(&b'B'))],
        ]
    );

    let scheme = scheme((10, -100), (-5, -1));
    let alignments = nw::align(b"GATTACA".as_slice(), b"GCATGCU".as_slice()).unwrap();
    assert_eq!(alignments.len(), 6);
    for alignment in &alignments {
        assert_eq!(*alignment.score(), 10);
        assert_eq!(rescore(alignment.pairs(), &scheme).unwrap(), 10);
    }
}

#[test]
fn test_default_scoring() {
    let mut engine = Engine::new(scheme((10, -100), (-5, -1)));

    let workload = vec![
        Workload {
            seq1: b"ACGT",
            seq2: b"ACGT",
            score: 40,
            rle: vec!["4="],
        },
        Workload {
            seq1: b"ACGT",
            seq2: b"ACT",
            score: 25,
            rle: vec!["2=1^1="],
        },
        Workload {
            seq1: b"ACGTACGT",
            seq2: b"ACGACGT",
            score: 65,
            rle: vec!["3=1^4="],
        },
        Workload {
            seq1: b"GGGAAATTT",
            seq2: b"GGGTTT",
            score: 53,
            rle: vec!["3=3^3="],
        },
        Workload {
            seq1: b"TTTT",
            seq2: b"AT",
            score: -3,
            rle: vec!["3^1v1="],
        },
        Workload {
            seq1: b"AAGAA",
            seq2: b"AGA",
            score: 20,
            rle: vec!["1=1^1=1^1=", "1=1^2=1^"],
        },
        Workload {
            seq1: b"AC",
            seq2: b"CA",
            score: -1,
            rle: vec!["1^1=1v", "1v1=1^"],
        },
        Workload {
            seq1: b"GATTACA",
            seq2: b"GCATGCU",
            score: 10,
            rle: vec![
                "1=1v1=1^1=1^1v1=1^1v",
                "1=1v1=1^1=1^1v1=1v1^",
                "1=1v1=1^1=1v1^1=1^1v",
                "1=1v1=1^1=1v1^1=1v1^",
                "1=1v2=1^1v1^1=1^1v",
                "1=1v2=1^1v1^1=1v1^",
            ],
        },
    ];

    for w in workload {
        ensure(&mut engine, w);
    }
}

#[test]
fn test_custom_scoring() {
    let mut engine = Engine::new(scheme((1, -1), (-2, -1)));
    for w in [
        Workload {
            seq1: b"ACGT",
            seq2: b"AGT",
            score: 1,
            rle: vec!["1=1^2="],
        },
        Workload {
            seq1: b"GATTACA",
            seq2: b"GCATGCU",
            score: -1,
            rle: vec!["1=2X1=1X1=1X"],
        },
        Workload {
            seq1: b"AAGAA",
            seq2: b"AGA",
            score: -1,
            rle: vec!["1=1^1=1^1=", "1=1^2=1^"],
        },
    ] {
        ensure(&mut engine, w);
    }

    engine.with_scoring(scheme((1, -1), (0, 0)));
    for w in [
        Workload {
            seq1: b"AAAA",
            seq2: b"AA",
            score: 2,
            rle: vec!["1=1^1=1^", "1=2^1=", "1^1=1^1=", "1^2=1^", "2=2^", "2^2="],
        },
        Workload {
            seq1: b"AAGAA",
            seq2: b"AGA",
            score: 3,
            rle: vec!["1=1^1=1^1=", "1=1^2=1^", "1^2=1^1=", "1^3=1^"],
        },
    ] {
        ensure(&mut engine, w);
    }
}

#[test]
fn test_align_with() {
    let seq1: Vec<char> = "ACgTa".chars().collect();
    let seq2: Vec<char> = "aCGT".chars().collect();

    let scorer = scoring::make_scorer(2, -3, |a: &char, b: &char| a.eq_ignore_ascii_case(b));
    let alignments = nw::align_with(&seq1, &seq2, scorer, -4, -1).unwrap();
    assert_eq!(alignments.len(), 1);
    assert_eq!(*alignments[0].score(), 4);
    assert_eq!(alignments[0].rle(&equiv::Equality::new()), "1X1=1X1=1^");

    let scorer = symbols::from_fn(|a: &char, b: &char| if a == b { 1 } else { -1 });
    let alignments = nw::align_with(&seq1, &seq2, scorer, 0, 0).unwrap();
    assert!(alignments.iter().all(|x| *x.score() == 2));

    assert!(nw::align_with(&seq1, &seq2, symbols::Equality::new(1, -1), 1, 0).is_err());
    assert!(nw::align_with(&seq1, &seq2, symbols::Equality::new(1, -1), -1, 2).is_err());
}
