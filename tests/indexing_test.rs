use dataframe::{DataFrame, Selection, Selector, Value};
use std::collections::BTreeMap;

fn ints(vals: &[i64]) -> Vec<Value> {
    vals.iter().map(|&v| Value::Int(v)).collect()
}

fn frame(rows: Vec<Vec<Value>>) -> DataFrame {
    DataFrame::new(rows, vec![], vec![]).unwrap()
}

fn record(pairs: &[(&str, i64)]) -> BTreeMap<String, Value> {
    pairs
        .iter()
        .map(|&(k, v)| (k.to_string(), Value::Int(v)))
        .collect()
}

// rows [giraffe, snake], cols [height, length]
fn animals() -> DataFrame {
    DataFrame::from_nested(
        [
            ("snake".to_string(), record(&[("length", 10), ("height", 1)])),
            (
                "giraffe".to_string(),
                record(&[("length", 3), ("height", 10)]),
            ),
        ]
        .into_iter()
        .collect(),
    )
    .unwrap()
}

#[test]
fn test_string_lookups() {
    let d = animals();
    assert_eq!(d.get("snake", "height").unwrap(), Value::Int(1));
}

#[test]
fn test_numerical_lookups() {
    let d = animals();
    assert_eq!(d.get(0, 0).unwrap(), Value::Int(10));
    assert_eq!(d.get(0, 1).unwrap(), Value::Int(3));
    assert_eq!(d.get(1, 0).unwrap(), Value::Int(1));
    assert_eq!(d.get(1, 1).unwrap(), Value::Int(10));
}

#[test]
fn test_dual_addressing() {
    let d = animals();
    for col in 0..d.num_cols() {
        assert_eq!(d.get("giraffe", col).unwrap(), d.get(0, col).unwrap());
        assert_eq!(d.get("snake", col).unwrap(), d.get(1, col).unwrap());
    }
}

#[test]
fn test_out_of_range_reads_are_null() {
    let d = animals();
    assert!(d.get(5, 0).unwrap().is_null());
    assert!(d.get(0, 5).unwrap().is_null());
    assert!(d.get(-1, 0).unwrap().is_null());
    assert!(d.get("monkey", "height").unwrap().is_null());
}

#[test]
fn test_partial_lookups() {
    let d = animals();
    assert_eq!(
        d.get("snake", true).unwrap(),
        frame(vec![ints(&[1, 10])])
    );
    assert_eq!(
        d.get(true, "height").unwrap(),
        frame(vec![ints(&[10]), ints(&[1])])
    );
    assert_eq!(
        d.column("height").unwrap(),
        frame(vec![ints(&[10]), ints(&[1])])
    );
    assert!(d.column("width").is_err());
}

#[test]
fn test_array_lookups() {
    let d = animals();
    assert_eq!(
        d.get(vec!["snake", "giraffe"], vec!["height"]).unwrap(),
        frame(vec![ints(&[1]), ints(&[10])])
    );
    assert_eq!(
        d.get(vec!["giraffe", "snake"], vec!["height"]).unwrap(),
        frame(vec![ints(&[10]), ints(&[1])])
    );
    assert_eq!(
        d.get(vec![0, 1], 0).unwrap(),
        frame(vec![ints(&[10]), ints(&[1])])
    );
    assert_eq!(
        d.get(vec![1, 0], 0).unwrap(),
        frame(vec![ints(&[1]), ints(&[10])])
    );
}

#[test]
fn test_duplicate_positions_allowed() {
    let d = animals();
    let s = d.get(vec![0, 0], true).unwrap().into_frame().unwrap();
    assert_eq!(s.row_names(), ["giraffe", "giraffe"]);
    assert_eq!(s, frame(vec![ints(&[10, 3]), ints(&[10, 3])]));
}

#[test]
fn test_range_lookups() {
    let d = DataFrame::from_nested(
        [
            ("snake".to_string(), record(&[("length", 10), ("height", 1)])),
            (
                "giraffe".to_string(),
                record(&[("length", 3), ("height", 10)]),
            ),
            ("bug".to_string(), record(&[("length", 1), ("height", 0)])),
        ]
        .into_iter()
        .collect(),
    )
    .unwrap();
    // rows [bug, giraffe, snake]
    assert_eq!(
        d.get(1..=2, 0..=1).unwrap(),
        frame(vec![ints(&[10, 3]), ints(&[1, 10])])
    );
    assert_eq!(
        d.get(1..3, 0..2).unwrap(),
        frame(vec![ints(&[10, 3]), ints(&[1, 10])])
    );
}

#[test]
fn test_regex_lookups() {
    let d = animals();
    assert_eq!(
        d.get(Selector::pattern("nak").unwrap(), Selector::pattern(".*").unwrap())
            .unwrap(),
        frame(vec![ints(&[1, 10])])
    );
    assert!(d
        .get(Selector::pattern("CANTFIND").unwrap(), true)
        .unwrap()
        .is_null());
}

#[test]
fn test_predicate_lookups() {
    let d = animals();
    assert_eq!(
        d.get(Selector::pred(|name| name == "snake"), true).unwrap(),
        frame(vec![ints(&[1, 10])])
    );
    assert_eq!(
        d.get(true, Selector::pred(|name| name != "height")).unwrap(),
        frame(vec![ints(&[3]), ints(&[10])])
    );
}

#[test]
fn test_boolean_selectors() {
    let d = animals();
    assert_eq!(d.get(1, true).unwrap(), frame(vec![ints(&[1, 10])]));
    assert!(d.get(false, true).unwrap().is_null());
}

#[test]
fn test_mask_selectors() {
    let d = animals();
    assert_eq!(
        d.get(vec![false, true], true).unwrap(),
        frame(vec![ints(&[1, 10])])
    );
    // wrong-length masks are malformed selectors
    assert!(d.get(vec![true], true).is_err());
}

#[test]
fn test_value_sequence_mask_boundary() {
    let d = animals();
    // all-boolean sequence of axis length: a positional mask
    let sel: Vec<Value> = vec![Value::Bool(false), Value::Bool(true)];
    assert_eq!(d.get(sel, true).unwrap(), frame(vec![ints(&[1, 10])]));

    // 0/1 integers of the same length select positions, never mask
    let sel: Vec<Value> = vec![Value::Int(0), Value::Int(1)];
    assert_eq!(
        d.get(sel, true).unwrap(),
        frame(vec![ints(&[10, 3]), ints(&[1, 10])])
    );
}

#[test]
fn test_frame_as_selector() {
    let d = animals();

    // boolean single-column frame of axis length acts as a mask
    let tall = d.column("height").unwrap().eq_elementwise(&Value::Int(10));
    assert_eq!(
        d.get(&tall, true).unwrap(),
        frame(vec![ints(&[10, 3])])
    );

    // a 1x1 name frame selects by that name
    let name_frame = DataFrame::new(vec![vec![Value::from("snake")]], vec![], vec![]).unwrap();
    assert_eq!(
        d.get(name_frame, vec!["length"]).unwrap(),
        frame(vec![ints(&[10])])
    );

    // a frame without a singleton dimension is not a selector
    assert!(d.get(d.clone(), true).is_err());
}

#[test]
fn test_slice_is_independent_copy() {
    let d = animals();
    let mut s = d.get(vec!["snake"], true).unwrap().into_frame().unwrap();
    s.set(0, 0, 99).unwrap();
    assert_eq!(s.get(0, 0).unwrap(), Value::Int(99));
    assert_eq!(d.get("snake", "height").unwrap(), Value::Int(1));

    let s2 = d.get(true, true).unwrap().into_frame().unwrap();
    let mut d2 = d.clone();
    d2.set(0, 0, 7).unwrap();
    assert_eq!(s2.get(0, 0).unwrap(), Value::Int(10));
}

#[test]
fn test_empty_selection_reads_null() {
    let d = animals();
    let empty: Vec<bool> = vec![false, false];
    let result = d.get(empty, true).unwrap();
    assert!(result.is_null());
    assert!(matches!(result, Selection::Cell(Value::Null)));
}

#[test]
fn test_out_of_range_slice_positions_read_null() {
    let d = animals();
    let s = d.get(0..3, true).unwrap().into_frame().unwrap();
    assert_eq!(s.num_rows(), 3);
    assert_eq!(s.row_names()[2], "_2");
    assert!(s.get(2, 0).unwrap().is_null());
}
