use indexmap::IndexMap;
use tender_diff::{diff, parse_json, DiffError, Record, RenderStyle, Scalar};

fn rec(json: &str) -> Record {
    parse_json(json).unwrap()
}

fn mapping(record: &Record) -> &IndexMap<String, Record> {
    match record {
        Record::Mapping(map) => map,
        other => panic!("expected mapping, got {other:?}"),
    }
}

fn text(record: &Record) -> &str {
    match record {
        Record::Scalar(Scalar::Text(s)) => s,
        other => panic!("expected text scalar, got {other:?}"),
    }
}

/// Collects every text leaf of an annotated record.
fn leaves<'a>(record: &'a Record, out: &mut Vec<&'a str>) {
    match record {
        Record::Scalar(Scalar::Text(s)) => out.push(s),
        Record::Scalar(_) => {}
        Record::Sequence(items) => {
            for item in items {
                leaves(item, out);
            }
        }
        Record::Mapping(map) => {
            for value in map.values() {
                leaves(value, out);
            }
        }
    }
}

#[test]
fn test_modified_scalar_uses_char_renderer() {
    let (old, new) = diff(&rec(r#"{"a": "1"}"#), &rec(r#"{"a": "2"}"#), RenderStyle::Markup).unwrap();
    assert_eq!(text(&mapping(&old)["a"]), "1");
    assert_eq!(text(&mapping(&new)["a"]), r#"<span class="modified">2</span>"#);
}

#[test]
fn test_sequence_policy_is_set_difference() {
    let (old, new) = diff(&rec("[1, 2, 3]"), &rec("[2, 3, 4]"), RenderStyle::Markup).unwrap();
    assert_eq!(
        old,
        Record::Sequence(vec![
            Record::text(r#"<span class="removed">1</span>"#),
            Record::from(2i64),
            Record::from(3i64),
        ])
    );
    assert_eq!(
        new,
        Record::Sequence(vec![
            Record::from(2i64),
            Record::from(3i64),
            Record::text(r#"<span class="added">4</span>"#),
        ])
    );
}

#[test]
fn test_sequence_reorder_is_invisible() {
    let (old, new) = diff(&rec("[1, 2, 3]"), &rec("[3, 2, 1]"), RenderStyle::Markup).unwrap();
    assert_eq!(old, rec("[1, 2, 3]"));
    assert_eq!(new, rec("[3, 2, 1]"));
}

#[test]
fn test_key_addition_and_removal() {
    let (old, new) = diff(
        &rec(r#"{"a": 1, "b": 2}"#),
        &rec(r#"{"a": 1, "c": 3}"#),
        RenderStyle::Markup,
    )
    .unwrap();

    let old_map = mapping(&old);
    assert_eq!(text(&old_map["a"]), "1");
    assert_eq!(
        text(&old_map[r#"<span class="removed">b</span>"#]),
        r#"<span class="removed">2</span>"#
    );

    let new_map = mapping(&new);
    assert_eq!(text(&new_map["a"]), "1");
    assert_eq!(
        text(&new_map[r#"<span class="added">c</span>"#]),
        r#"<span class="added">3</span>"#
    );
}

#[test]
fn test_removed_keys_keep_old_insertion_order() {
    let (old, _) = diff(
        &rec(r#"{"first": 1, "gone": 2, "last": 3}"#),
        &rec(r#"{"first": 1, "last": 3}"#),
        RenderStyle::Markup,
    )
    .unwrap();
    let keys: Vec<&String> = mapping(&old).keys().collect();
    assert_eq!(keys, ["first", r#"<span class="removed">gone</span>"#, "last"]);
}

#[test]
fn test_deletion_sentinel_marks_whole_record_removed() {
    let (old, new) = diff(
        &rec(r#"{"x": "gone"}"#),
        &Record::text("The entity no longer exists"),
        RenderStyle::Markup,
    )
    .unwrap();

    assert_eq!(
        text(&mapping(&old)[r#"<span class="removed">x</span>"#]),
        r#"<span class="removed">gone</span>"#
    );
    assert_eq!(text(&new), "The entity no longer exists");
}

#[test]
fn test_sentinel_applies_below_the_root() {
    let (old, _) = diff(
        &rec(r#"{"tender": {"subject": "pumps"}}"#),
        &rec(r#"{"tender": "withdrawn"}"#),
        RenderStyle::Markup,
    )
    .unwrap();
    let inner = &mapping(&old)["tender"];
    assert_eq!(
        text(&mapping(inner)[r#"<span class="removed">subject</span>"#]),
        r#"<span class="removed">pumps</span>"#
    );
}

#[test]
fn test_nested_mapping_recursion() {
    let (old, new) = diff(
        &rec(r#"{"user": {"profile": {"age": "30"}}}"#),
        &rec(r#"{"user": {"profile": {"age": "31"}}}"#),
        RenderStyle::Markup,
    )
    .unwrap();
    let old_age = &mapping(&mapping(&mapping(&old)["user"])["profile"])["age"];
    let new_age = &mapping(&mapping(&mapping(&new)["user"])["profile"])["age"];
    assert_eq!(text(old_age), "30");
    assert_eq!(text(new_age), r#"3<span class="modified">1</span>"#);
}

#[test]
fn test_equal_inputs_produce_no_markup() {
    let record = rec(r#"{"Price": 3500.0, "Documents": 12, "Files": ["a.pdf"]}"#);
    let (old, new) = diff(&record, &record, RenderStyle::Markup).unwrap();

    let mut collected = Vec::new();
    leaves(&old, &mut collected);
    leaves(&new, &mut collected);
    for leaf in collected {
        assert!(!leaf.contains("<span"), "unexpected markup in {leaf:?}");
    }

    // Diffed scalar leaves come back as their normalized display text.
    assert_eq!(text(&mapping(&old)["Price"]), "3,500.000");
    assert_eq!(text(&mapping(&new)["Documents"]), "12");
}

#[test]
fn test_diff_is_idempotent() {
    let old = rec(r#"{"a": "old", "b": [1, 2], "c": {"d": 3500.5}}"#);
    let new = rec(r#"{"a": "new", "b": [2, 9], "c": {"d": 3600.5}}"#);
    let first = diff(&old, &new, RenderStyle::Markup).unwrap();
    let second = diff(&old, &new, RenderStyle::Markup).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_numeric_normalization_feeds_the_char_diff() {
    let (old, new) = diff(&rec(r#"{"Price": 3500}"#), &rec(r#"{"Price": 3750}"#), RenderStyle::Markup).unwrap();
    // "3,500" vs "3,750": one replacement per differing digit.
    assert_eq!(text(&mapping(&old)["Price"]), "3,500");
    assert_eq!(
        text(&mapping(&new)["Price"]),
        r#"3,<span class="modified">7</span><span class="modified">5</span>0"#
    );
}

#[test]
fn test_shape_mismatch_is_fatal_with_path() {
    let err = diff(
        &rec(r#"{"outer": {"Files": [1, 2]}}"#),
        &rec(r#"{"outer": {"Files": {"a": 1}}}"#),
        RenderStyle::Markup,
    )
    .unwrap_err();
    let DiffError::ShapeMismatch { path, old_kind, new_kind } = err;
    assert_eq!(path, "outer.Files");
    assert_eq!(old_kind, "sequence");
    assert_eq!(new_kind, "mapping");
}

#[test]
fn test_root_shape_mismatch() {
    let err = diff(&rec("[1]"), &rec(r#"{"a": 1}"#), RenderStyle::Markup).unwrap_err();
    assert!(err.to_string().contains("(root)"));
}

#[test]
fn test_mapping_against_non_string_scalar_is_mismatch() {
    // The deletion sentinel is a bare *string*; numbers do not qualify.
    let err = diff(&rec(r#"{"a": 1}"#), &rec("7"), RenderStyle::Markup).unwrap_err();
    assert!(err.to_string().contains("mapping"));
    assert!(err.to_string().contains("integer"));
}

#[test]
fn test_top_level_scalars_diff_directly() {
    let (old, new) = diff(&Record::text("gumbo"), &Record::text("gambol"), RenderStyle::Markup).unwrap();
    assert!(text(&new).contains(r#"<span class="modified">"#));
    assert!(!text(&old).is_empty());
}
