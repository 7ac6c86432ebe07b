use tender_diff::{distance, reconstruct, EditOp};

/// Applies a reconstructed edit sequence to `source`, producing what
/// should be exactly `target`.
fn apply(source: &str, target: &str, ops: &[EditOp]) -> String {
    let src: Vec<char> = source.chars().collect();
    let tgt: Vec<char> = target.chars().collect();
    let mut out = String::new();
    let (mut i, mut j) = (0usize, 0usize);

    for op in ops {
        match *op {
            EditOp::Insert { target: at } => {
                let run = at - j;
                out.extend(&src[i..i + run]);
                out.push(tgt[at]);
                i += run;
                j = at + 1;
            }
            EditOp::Remove { source: at } => {
                let run = at - i;
                out.extend(&src[i..at]);
                i = at + 1;
                j += run;
            }
            EditOp::Replace { source: s_at, target: t_at } => {
                out.extend(&src[i..s_at]);
                out.push(tgt[t_at]);
                i = s_at + 1;
                j = t_at + 1;
            }
        }
    }

    out.extend(&src[i..]);
    out
}

const SAMPLES: &[&str] = &[
    "",
    "a",
    "ab",
    "ba",
    "kitten",
    "sitting",
    "Supply of water pumps",
    "Supply of fuel pumps",
    "2024-11-03 00:00:00",
    "2025-01-12 00:00:00",
    "مناقصة عامة",
    "3,500.000",
    "3,750.000",
];

#[test]
fn test_distance_to_self_is_zero() {
    for s in SAMPLES {
        let (dist, _) = distance(s, s);
        assert_eq!(dist, 0, "distance({s:?}, {s:?})");
    }
}

#[test]
fn test_distance_is_symmetric() {
    for a in SAMPLES {
        for b in SAMPLES {
            let (forward, _) = distance(a, b);
            let (backward, _) = distance(b, a);
            assert_eq!(forward, backward, "distance({a:?}, {b:?})");
        }
    }
}

#[test]
fn test_triangle_inequality() {
    for a in SAMPLES {
        for b in SAMPLES {
            for c in SAMPLES {
                let (ac, _) = distance(a, c);
                let (ab, _) = distance(a, b);
                let (bc, _) = distance(b, c);
                assert!(ac <= ab + bc, "d({a:?},{c:?}) > d({a:?},{b:?}) + d({b:?},{c:?})");
            }
        }
    }
}

#[test]
fn test_distance_to_empty_is_length() {
    for s in SAMPLES {
        let chars = s.chars().count();
        let (dist, _) = distance(s, "");
        assert_eq!(dist, chars);
        let (dist, _) = distance("", s);
        assert_eq!(dist, chars);
    }
}

#[test]
fn test_kitten_sitting_is_three() {
    let (dist, _) = distance("kitten", "sitting");
    assert_eq!(dist, 3);
}

#[test]
fn test_kitten_sitting_operations() {
    let (_, matrix) = distance("kitten", "sitting");
    let ops = reconstruct("kitten", "sitting", &matrix);
    assert_eq!(
        ops,
        vec![
            EditOp::Replace { source: 0, target: 0 },
            EditOp::Replace { source: 4, target: 4 },
            EditOp::Insert { target: 6 },
        ]
    );
}

#[test]
fn test_round_trip_law() {
    for source in SAMPLES {
        for target in SAMPLES {
            let (dist, matrix) = distance(source, target);
            let ops = reconstruct(source, target, &matrix);
            assert_eq!(ops.len(), dist, "operation count for {source:?} -> {target:?}");
            assert_eq!(
                apply(source, target, &ops),
                *target,
                "round trip for {source:?} -> {target:?}"
            );
        }
    }
}

#[test]
fn test_matrix_edges() {
    let (_, matrix) = distance("gumbo", "gambol");
    for i in 0..=matrix.source_len() {
        assert_eq!(matrix.at(i, matrix.target_len()), matrix.source_len() - i);
    }
    for j in 0..=matrix.target_len() {
        assert_eq!(matrix.at(matrix.source_len(), j), matrix.target_len() - j);
    }
}

#[test]
fn test_reconstruction_is_deterministic() {
    for source in SAMPLES {
        for target in SAMPLES {
            let (_, matrix) = distance(source, target);
            let first = reconstruct(source, target, &matrix);
            let second = reconstruct(source, target, &matrix);
            assert_eq!(first, second);
        }
    }
}

#[test]
fn test_replace_wins_three_way_tie() {
    let (dist, matrix) = distance("ab", "ba");
    assert_eq!(dist, 2);
    let ops = reconstruct("ab", "ba", &matrix);
    assert_eq!(
        ops,
        vec![
            EditOp::Replace { source: 0, target: 0 },
            EditOp::Replace { source: 1, target: 1 },
        ]
    );
}
